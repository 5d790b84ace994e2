use snake_runtime::{logging, print, run, FromFn, SnakeVal, ENTRY_SYMBOL};
use tracing::warn;

#[link(name = "compiled_code", kind = "static")]
extern "C" {

    // The \x01 here is an undocumented feature of LLVM that ensures
    // it does not add an underscore in front of the name.
    #[link_name = "\x01our_code_starts_here"]
    fn our_code_starts_here() -> SnakeVal;
}

fn main() {
    logging::init(false);

    // Keep `print` in the link so compiled code can call it.
    std::hint::black_box(print as extern "C" fn(SnakeVal) -> SnakeVal);

    let mut entry = FromFn::new(ENTRY_SYMBOL, || unsafe { our_code_starts_here() });
    let stdout = std::io::stdout();
    // The exit status stays 0 whatever happens once compiled code returned.
    if let Err(e) = run(&mut entry, &mut stdout.lock()) {
        warn!(error = %e, "could not print result");
    }
}
