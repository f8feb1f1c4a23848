//! Error types shared by the solver core, the parser, and the CLI.

use thiserror::Error;

/// Everything that can go wrong while building or solving an equation system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A zero modulus or divisor was supplied to a [`crate::BigInt`] operation
    /// that requires a nonzero one. The solver never triggers this itself; it
    /// only surfaces through misuse of the public API.
    #[error("division by zero")]
    DivideByZero,

    /// The input file did not match the problem format described in the
    /// crate documentation.
    #[error("malformed input: {0}")]
    Parse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
