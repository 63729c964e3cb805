//! Filesystem, formatter and config plumbing for docsplice
//!
//! Provides line-preserving reads, atomic writes, external formatter
//! invocation and config file loading.

pub mod config;
pub mod error;
pub mod format;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use format::{DEFAULT_FORMATTER, Formatter};
