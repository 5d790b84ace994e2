//! Builds the C fixtures under `tests/fixtures` into shared objects.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// A fixture compiled into `dir`; the library goes away with it.
pub struct SharedObject {
    pub dir: TempDir,
    pub path: PathBuf,
}

fn compiler() -> String {
    std::env::var("CC").unwrap_or_else(|_| String::from("cc"))
}

/// Compiles `tests/fixtures/<name>.c` with `-shared -fPIC`. Returns `None`
/// when no C compiler is on the path.
pub fn build_fixture(name: &str) -> Option<SharedObject> {
    let cc = compiler();
    let available = Command::new(&cc)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !available {
        eprintln!("Skipping test: C compiler '{}' not found", cc);
        return None;
    }

    let src = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.c", name));
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("lib{}.so", name));

    let output = Command::new(&cc)
        .args(&["-shared", "-fPIC", "-O1"])
        .arg(&src)
        .arg("-o")
        .arg(&path)
        .output()
        .expect("failed to run C compiler");
    assert!(
        output.status.success(),
        "compiling {} failed: {}",
        src.display(),
        String::from_utf8_lossy(&output.stderr)
    );

    Some(SharedObject { dir, path })
}
