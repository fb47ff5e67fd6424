// lisplet-core - Error types for the lisplet evaluator
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Error types for lisplet evaluation.

use std::fmt;

use lisplet_parser::Symbol;

/// Result type for lisplet evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
///
/// Every error aborts the current evaluation immediately; the
/// interactive loop (or embedding caller) catches it once, reports it,
/// and carries on with the global environment intact.
#[derive(Debug, Clone)]
pub enum Error {
    /// Unbound symbol reference
    UndefinedSymbol(Symbol),
    /// Wrong number of arguments to a procedure or special form
    ArityMismatch {
        name: String,
        expected: AritySpec,
        got: usize,
    },
    /// Wrong type for an operation
    TypeError {
        context: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    /// Division or modulo by zero
    DivisionByZero { operation: &'static str },
    /// Arithmetic result out of the i64 range
    IntegerOverflow { operation: &'static str },
    /// Ill-formed special form
    MalformedSyntax {
        form: &'static str,
        message: String,
    },
    /// List head is neither a special form, builtin, nor closure
    NotCallable(String),
    /// Recursion guard tripped
    DepthExceeded(usize),
    /// Invariant violation (a bug, not a user error)
    Internal(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UndefinedSymbol(sym) => {
                write!(f, "Unable to resolve symbol: {}", sym)
            }
            Error::ArityMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Wrong number of arguments to '{}': expected {}, got {}",
                    name, expected, got
                )
            }
            Error::TypeError {
                context,
                expected,
                got,
            } => {
                write!(f, "{}: expected {}, got {}", context, expected, got)
            }
            Error::DivisionByZero { operation } => {
                write!(f, "Division by zero in '{}'", operation)
            }
            Error::IntegerOverflow { operation } => {
                write!(f, "Integer overflow in '{}'", operation)
            }
            Error::MalformedSyntax { form, message } => {
                write!(f, "Malformed '{}' form: {}", form, message)
            }
            Error::NotCallable(val) => {
                write!(f, "Cannot call value: {}", val)
            }
            Error::DepthExceeded(max) => {
                write!(f, "Maximum recursion depth ({}) exceeded", max)
            }
            Error::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an arity error for exact arity.
    pub fn arity(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            name: name.into(),
            expected: AritySpec::Exact(expected),
            got,
        }
    }

    /// Create an arity error for minimum arity.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            name: name.into(),
            expected: AritySpec::AtLeast(expected),
            got,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(context: &'static str, expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            context,
            expected,
            got,
        }
    }

    /// Create a malformed syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::MalformedSyntax {
            form,
            message: message.into(),
        }
    }
}
