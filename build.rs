fn main() {
    println!("cargo:rerun-if-env-changed=SNAKE_LINK_DIR");

    // Shared objects opened by `snake-runtime` resolve `print` against the
    // executable, so its symbols must land in the dynamic symbol table.
    if std::env::var("CARGO_CFG_TARGET_OS").map_or(true, |os| os != "windows") {
        println!("cargo:rustc-link-arg-bin=snake-runtime=-rdynamic");
    }

    // The `linked` feature links the `stub` binary against libcompiled_code.a.
    // SNAKE_LINK_DIR names the directory the archive was assembled into.
    if std::env::var_os("CARGO_FEATURE_LINKED").is_some() {
        if let Some(dir) = std::env::var_os("SNAKE_LINK_DIR") {
            println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
        }
    }
}
