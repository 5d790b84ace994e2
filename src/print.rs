use crate::error::RuntimeError;
use crate::value::SnakeVal;

use std::io::Write;
use tracing::{debug, warn};

// The tag is not consulted here: every word is reported raw.
pub fn sprint_snake_val(x: SnakeVal) -> String {
    format!("Unknown value: {:#010x}", x)
}

/// Writes the line for `v` to `w` and hands `v` back unchanged, so a
/// call can wrap any expression as a probe.
pub fn print_snake_val<W>(w: &mut W, v: SnakeVal) -> Result<SnakeVal, RuntimeError>
where
    W: Write,
{
    debug!(word = %format!("{:#010x}", v), tag = ?v.tag(), as_bool = ?v.as_bool(), "printing");
    writeln!(w, "{}", sprint_snake_val(v))?;
    w.flush()?;
    Ok(v)
}

/// `print` as seen by compiled code.
#[no_mangle]
pub extern "C" fn print(val: SnakeVal) -> SnakeVal {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    match print_snake_val(&mut lock, val) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "print failed");
            val
        }
    }
}
