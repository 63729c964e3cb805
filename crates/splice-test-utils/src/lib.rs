//! Shared test utilities for the docsplice workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each carry their own copies of sample Go sources. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`samples`] — sample inputs with their expected regenerated outputs
//! - [`tree`] — [`SourceTree`] temporary directory builder

pub mod samples;
pub mod tree;

pub use tree::SourceTree;
