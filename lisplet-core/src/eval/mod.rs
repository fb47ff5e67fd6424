// lisplet-core - Tree-walking evaluator
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Tree-walking evaluator for lisplet expressions.
//!
//! Dispatch precedence is a contract: self-evaluating atoms, then
//! variable lookup, then the empty list, then special forms (a closed
//! keyword set), then builtin application, then closure application.
//! Special forms are recognised ahead of environment lookup, so their
//! names are reserved; builtins, by contrast, can be shadowed by user
//! definitions.

pub mod apply;
mod special_forms;

pub use apply::{NativeFnImpl, apply, make_native_fn};

use std::cell::Cell;

use lisplet_parser::Value;

use crate::env::Env;
use crate::error::{Error, Result};

use apply::{apply_closure, apply_native};
use special_forms::{
    eval_and, eval_cond, eval_define, eval_eval, eval_if, eval_or, eval_quote, eval_set,
};

// ============================================================================
// Stack Overflow Protection
// ============================================================================

/// Maximum recursion depth for eval. Can be configured via [`set_max_eval_depth`].
const DEFAULT_MAX_EVAL_DEPTH: usize = 10_000;

thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_EVAL_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_EVAL_DEPTH) };
}

/// Set the maximum eval recursion depth. Returns the previous value.
#[inline]
#[must_use]
pub fn set_max_eval_depth(depth: usize) -> usize {
    MAX_EVAL_DEPTH.with(|d| d.replace(depth))
}

/// Get the current maximum eval recursion depth.
#[inline]
#[must_use]
pub fn get_max_eval_depth() -> usize {
    MAX_EVAL_DEPTH.with(|d| d.get())
}

/// RAII guard to manage the eval depth counter.
struct EvalDepthGuard;

impl EvalDepthGuard {
    fn new() -> Result<Self> {
        let (current, max) = EVAL_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            (current + 1, MAX_EVAL_DEPTH.with(|m| m.get()))
        });
        if current > max {
            EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            Err(Error::DepthExceeded(max))
        } else {
            Ok(EvalDepthGuard)
        }
    }
}

impl Drop for EvalDepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate a lisplet expression in the given environment.
///
/// This is the main entry point for interpreting lisplet code. It
/// handles self-evaluating atoms, symbol resolution, special forms,
/// and procedure application.
///
/// # Examples
///
/// ```
/// use lisplet_core::{Env, eval, register_builtins};
/// use lisplet_parser::{Parser, Value};
///
/// let env = Env::new();
/// register_builtins(&env);
///
/// let expr = Parser::parse_str("(* 6 7)").unwrap().unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), Value::int(42));
/// ```
///
/// # Errors
///
/// Returns an error if a symbol cannot be resolved, a procedure is
/// called with the wrong arity or argument types, a special form is
/// ill-formed, or the recursion guard trips. Errors abort the current
/// evaluation chain immediately; no partial results are observable.
#[must_use = "eval returns a value that should be used"]
pub fn eval(expr: &Value, env: &Env) -> Result<Value> {
    // Convert runaway Lisp-level recursion into an error before it
    // exhausts the native stack
    let _guard = EvalDepthGuard::new()?;

    match expr {
        // Self-evaluating atoms
        Value::Int(_) | Value::NativeFn(_) | Value::Closure(_) => Ok(expr.clone()),

        // String literals self-evaluate; every other symbol is a
        // variable reference
        Value::Symbol(sym) => {
            if sym.is_string_literal() {
                Ok(expr.clone())
            } else {
                env.lookup(sym)
            }
        }

        // List - empty list, special form, or procedure application
        Value::List(items) => {
            let items: Vec<Value> = items.iter().cloned().collect();
            eval_list(&items, env)
        }
    }
}

/// Evaluate a list form (special form or procedure application).
fn eval_list(items: &[Value], env: &Env) -> Result<Value> {
    if items.is_empty() {
        // The empty list evaluates to itself
        return Ok(Value::empty_list());
    }

    let head = &items[0];
    let Value::Symbol(sym) = head else {
        return Err(Error::NotCallable(head.to_string()));
    };
    if sym.is_string_literal() {
        return Err(Error::NotCallable(head.to_string()));
    }

    // Special forms are reserved ahead of environment lookup
    match sym.name() {
        "quote" => return eval_quote(&items[1..]),
        "eval" => return eval_eval(&items[1..], env),
        "set" => return eval_set(&items[1..], env),
        "if" => return eval_if(&items[1..], env),
        "cond" => return eval_cond(&items[1..], env),
        "and" => return eval_and(&items[1..], env),
        "or" => return eval_or(&items[1..], env),
        "define" => return eval_define(&items[1..], env),
        _ => {}
    }

    // Builtin or closure application: arguments are evaluated
    // left-to-right in the caller's environment
    match env.lookup(sym)? {
        Value::NativeFn(func) => {
            let args = eval_args(&items[1..], env)?;
            apply_native(&func, &args)
        }
        Value::Closure(func) => {
            let args = eval_args(&items[1..], env)?;
            apply_closure(&func, &args)
        }
        other => Err(Error::NotCallable(other.to_string())),
    }
}

/// Evaluate procedure arguments left-to-right in the caller's environment.
fn eval_args(exprs: &[Value], env: &Env) -> Result<Vec<Value>> {
    exprs.iter().map(|e| eval(e, env)).collect()
}
