//! # Error Handling
//!
//! This module defines the centralized error type for `depgen`. It uses the
//! `thiserror` library to describe every failure mode of a generator run with
//! a clear, contextual message.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong while loading the
//!   project definition, querying the dependency catalog or writing a
//!   generated file.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! None of these errors are recoverable inside a run: the generator is
//! deterministic and idempotent, so every error propagates to the caller and
//! the whole run is re-invoked once the cause is fixed.

use thiserror::Error;

/// Main error type for depgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The project definition file is missing, malformed or incomplete.
    ///
    /// Raised before any generated file is touched.
    #[error("Project definition error in {path}: {message}")]
    ProjectDefinition { path: String, message: String },

    /// The dependency catalog could not answer a query.
    ///
    /// `dependency` names the offending catalog entry, or is empty when the
    /// catalog as a whole could not be read.
    #[error("Dependency catalog error{}: {message}", if dependency.is_empty() { String::new() } else { format!(" for '{}'", dependency) })]
    Catalog { dependency: String, message: String },

    /// A generated file could not be written to its destination.
    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
