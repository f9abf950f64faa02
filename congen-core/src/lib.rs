//! Shared primitives for the congen statistics toolkit.
//!
//! `congen-core` provides the foundation the other congen crates build on:
//!
//! - **Error types** — [`CongenError`] and [`Result`] for structured error handling
//! - **File access** — gzip-or-plain text readers (std feature only)

pub mod error;

#[cfg(feature = "std")]
pub mod io;

pub use error::{CongenError, Result};
