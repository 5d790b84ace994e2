//! Runtime support for snake programs: calls the compiled entry point
//! and reports the tagged word it returns.

pub mod entry;
pub mod error;
pub mod logging;
pub mod print;
pub mod run;
pub mod value;

pub use entry::{Constant, Dynamic, EntryPoint, FromFn, OurCodeStartsHere, ENTRY_SYMBOL};
pub use error::RuntimeError;
pub use print::{print, print_snake_val, sprint_snake_val};
pub use run::{run, run_config, EntrySource, RunConfig};
pub use value::{parse_word, ParseWordErr, SnakeVal, Tag, CONST_FALSE, CONST_TRUE, TYPE_MASK};
