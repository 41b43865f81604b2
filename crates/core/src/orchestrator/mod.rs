//! Import orchestration.
//!
//! Binds the pipeline together for one directory at a time:
//! clean the name, search the catalog, let the operator confirm the series,
//! then extract numbering from every archive and file it into the library.
//! Directories are processed strictly one after another.

mod config;
mod runner;
mod types;

pub use config::ImporterConfig;
pub use runner::Importer;
pub use types::{FileFailure, ImportError, ImportReport};
