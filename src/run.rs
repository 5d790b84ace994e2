use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::entry::{Constant, Dynamic, EntryPoint, ENTRY_SYMBOL};
use crate::error::RuntimeError;
use crate::print::print_snake_val;
use crate::value::SnakeVal;

/// Where the program body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    Library { path: PathBuf, symbol: String },
    Value(SnakeVal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: EntrySource,
}

impl RunConfig {
    pub fn library(path: impl Into<PathBuf>) -> Self {
        RunConfig {
            source: EntrySource::Library {
                path: path.into(),
                symbol: ENTRY_SYMBOL.to_string(),
            },
        }
    }

    pub fn value(v: SnakeVal) -> Self {
        RunConfig {
            source: EntrySource::Value(v),
        }
    }

    pub fn entry_point(&self) -> Result<Box<dyn EntryPoint>, RuntimeError> {
        Ok(match &self.source {
            EntrySource::Library { path, symbol } => Box::new(Dynamic::open(path, symbol)?),
            EntrySource::Value(v) => Box::new(Constant(*v)),
        })
    }
}

/// Calls the entry point once and prints what it returns.
pub fn run<E, W>(entry: &mut E, w: &mut W) -> Result<SnakeVal, RuntimeError>
where
    E: EntryPoint + ?Sized,
    W: Write,
{
    debug!(entry = entry.name(), "calling compiled code");
    let result = entry.call();
    info!(entry = entry.name(), word = %format!("{:#010x}", result), "compiled code returned");
    print_snake_val(w, result)
}

pub fn run_config<W>(config: &RunConfig, w: &mut W) -> Result<SnakeVal, RuntimeError>
where
    W: Write,
{
    let mut entry = config.entry_point()?;
    run(entry.as_mut(), w)
}
