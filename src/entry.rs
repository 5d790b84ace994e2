//! Ways of reaching the compiled entry point.

use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use tracing::{debug, error};

use crate::error::RuntimeError;
use crate::value::SnakeVal;

/// Symbol name the code generator gives the program body.
pub const ENTRY_SYMBOL: &str = "our_code_starts_here";

/// Signature of the compiled entry point: no arguments, one word out.
pub type OurCodeStartsHere = unsafe extern "C" fn() -> SnakeVal;

/// Something that runs compiled program logic once and yields its word.
pub trait EntryPoint {
    fn name(&self) -> &str;
    fn call(&mut self) -> SnakeVal;
}

/// Returns a fixed word. Stands in for compiled code in tests.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub SnakeVal);

impl EntryPoint for Constant {
    fn name(&self) -> &str {
        "constant"
    }

    fn call(&mut self) -> SnakeVal {
        self.0
    }
}

/// Wraps any closure producing a word.
pub struct FromFn<F> {
    name: String,
    f: F,
}

impl<F> FromFn<F>
where
    F: FnMut() -> SnakeVal,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        FromFn { name: name.into(), f }
    }
}

impl<F> EntryPoint for FromFn<F>
where
    F: FnMut() -> SnakeVal,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&mut self) -> SnakeVal {
        (self.f)()
    }
}

/// Compiled code living in a shared object opened at run time.
pub struct Dynamic {
    symbol: String,
    path: PathBuf,
    func: OurCodeStartsHere,
    // Keeps `func` mapped.
    _lib: Library,
}

impl Dynamic {
    pub fn open(path: impl AsRef<Path>, symbol: &str) -> Result<Self, RuntimeError> {
        let path = path.as_ref();
        if !path.exists() {
            error!(path = %path.display(), "shared library not found");
            return Err(RuntimeError::LibraryNotFound(path.display().to_string()));
        }

        debug!(path = %path.display(), symbol, "loading shared library");
        // Loading runs the library's initialisers; the caller vouches for it.
        let lib = unsafe { Library::new(path)? };
        let func = unsafe {
            let sym: Symbol<OurCodeStartsHere> = lib.get(symbol.as_bytes()).map_err(|e| {
                error!(symbol, "symbol not found in library");
                RuntimeError::SymbolNotFound(symbol.to_string(), e)
            })?;
            *sym
        };

        Ok(Dynamic {
            symbol: symbol.to_string(),
            path: path.to_path_buf(),
            func,
            _lib: lib,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryPoint for Dynamic {
    fn name(&self) -> &str {
        &self.symbol
    }

    fn call(&mut self) -> SnakeVal {
        unsafe { (self.func)() }
    }
}
