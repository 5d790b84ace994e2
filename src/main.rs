//! snake-runtime CLI: run compiled snake code and print its result.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, warn};

use snake_runtime::{
    logging, parse_word, print, run_config, EntrySource, RunConfig, RuntimeError, SnakeVal,
    ENTRY_SYMBOL,
};

/// Exit code once compiled code has returned, whatever it returned.
const EXIT_SUCCESS: i32 = 0;
/// Exit code when compiled code could not be reached.
const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "snake-runtime")]
#[command(about = "Runs compiled snake code and prints the word it returns")]
#[command(version)]
struct Cli {
    /// Shared library holding the compiled program
    #[arg(value_name = "LIBRARY", required_unless_present = "value")]
    library: Option<PathBuf>,

    /// Entry point symbol to look up in LIBRARY
    #[arg(long, default_value = ENTRY_SYMBOL)]
    symbol: String,

    /// Skip loading and treat WORD as the returned value
    #[arg(long, value_name = "WORD", value_parser = parse_word, conflicts_with = "library")]
    value: Option<SnakeVal>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(self) -> RunConfig {
        let source = match (self.library, self.value) {
            (_, Some(v)) => EntrySource::Value(v),
            (Some(path), None) => EntrySource::Library {
                path,
                symbol: self.symbol,
            },
            (None, None) => unreachable!("clap requires LIBRARY or --value"),
        };
        RunConfig { source }
    }
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Compiled code loaded below calls back into `print`.
    std::hint::black_box(print as extern "C" fn(SnakeVal) -> SnakeVal);

    let config = cli.config();
    let stdout = std::io::stdout();
    let code = match run_config(&config, &mut stdout.lock()) {
        Ok(_) => EXIT_SUCCESS,
        // Compiled code already ran; a lost line does not change the status.
        Err(RuntimeError::Write(e)) => {
            warn!(error = %e, "could not print result");
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "could not run compiled code");
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}
