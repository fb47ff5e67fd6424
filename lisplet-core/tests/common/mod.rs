// lisplet-core - Common test utilities
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Shared test helpers for lisplet integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate code in a fresh environment with builtins
//! - [`eval_str_with_env`] - Evaluate code in an existing environment
//! - [`eval_all`] - Evaluate multiple forms, returning the last
//! - [`new_env`] - Create a new environment with builtins registered
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code evaluates to an expected value
//! - [`assert_eval_err!`] - Assert that code produces an error
//! - [`assert_eval_with_env!`] - Assert evaluation with a shared environment

// Re-export common types for convenience
pub use lisplet_core::builtins::register_builtins;
pub use lisplet_core::env::Env;
pub use lisplet_core::eval::eval;
#[allow(unused_imports)]
pub use lisplet_parser::{Parser, Symbol, Value};

/// Evaluate a lisplet expression string in a fresh environment.
///
/// The environment is pre-populated with built-in procedures.
///
/// # Returns
///
/// Returns the evaluated value, or an error message string.
#[must_use]
pub fn eval_str(s: &str) -> Result<Value, String> {
    let env = new_env();
    eval_str_with_env(s, &env)
}

/// Evaluate a lisplet expression string in the given environment.
///
/// # Returns
///
/// Returns the evaluated value, or an error message string.
#[must_use]
pub fn eval_str_with_env(s: &str, env: &Env) -> Result<Value, String> {
    let mut parser = Parser::new(s).map_err(|e| e.to_string())?;
    match parser.parse().map_err(|e| e.to_string())? {
        Some(expr) => eval(&expr, env).map_err(|e| e.to_string()),
        None => Ok(Value::nil()),
    }
}

/// Evaluate multiple lisplet forms, returning the last result.
///
/// This is useful when you need to set up definitions before the final
/// expression. Each form is parsed and evaluated sequentially.
///
/// # Returns
///
/// Returns the value of the last form, or an error.
#[must_use]
#[allow(dead_code)]
pub fn eval_all(s: &str, env: &Env) -> Result<Value, String> {
    let mut parser = Parser::new(s).map_err(|e| e.to_string())?;
    let mut result = Value::nil();

    while let Some(expr) = parser.parse().map_err(|e| e.to_string())? {
        result = eval(&expr, env).map_err(|e| e.to_string())?;
    }

    Ok(result)
}

/// Create a new environment with builtins registered.
///
/// # Returns
///
/// A fresh [`Env`] with all built-in procedures available.
#[must_use]
pub fn new_env() -> Env {
    let env = Env::new();
    register_builtins(&env);
    env
}

/// Assert that evaluating `input` produces the expected value.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", Value::int(3));
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(car 5)");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
    };
}

/// Assert that evaluating `input` in the given environment produces the expected value.
///
/// # Example
///
/// ```ignore
/// let env = new_env();
/// eval_str_with_env("(set x 42)", &env).unwrap();
/// assert_eval_with_env!("x", Value::int(42), &env);
/// ```
#[macro_export]
macro_rules! assert_eval_with_env {
    ($input:expr, $expected:expr, $env:expr) => {
        let result = $crate::common::eval_str_with_env($input, $env);
        assert!(
            result.is_ok(),
            "Failed to evaluate '{}': {:?}",
            $input,
            result.err()
        );
        assert_eq!(
            result.unwrap(),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` produces an error containing the pattern.
///
/// # Example
///
/// ```ignore
/// assert_eval_err_contains!("(/ 1 0)", "division by zero");
/// ```
#[macro_export]
macro_rules! assert_eval_err_contains {
    ($input:expr, $pattern:expr) => {
        let result = $crate::common::eval_str($input);
        assert!(
            result.is_err(),
            "Expected error for '{}' but got {:?}",
            $input,
            result.ok()
        );
        let err_msg = result.unwrap_err();
        assert!(
            err_msg.to_lowercase().contains(&$pattern.to_lowercase()),
            "Error message '{}' does not contain '{}'",
            err_msg,
            $pattern
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_str_basic() {
        assert_eq!(eval_str("42").unwrap(), Value::int(42));
        assert_eq!(eval_str("(+ 1 2)").unwrap(), Value::int(3));
    }

    #[test]
    fn test_eval_str_error() {
        assert!(eval_str("(+ 1 'x)").is_err());
    }

    #[test]
    fn test_eval_all() {
        let env = new_env();
        let result = eval_all("(set x 1) (set y 2) (+ x y)", &env).unwrap();
        assert_eq!(result, Value::int(3));
    }
}
