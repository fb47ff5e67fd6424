// lisplet-core - Special form evaluation
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Special forms.
//!
//! Unlike procedure application, each form controls the evaluation
//! order of its own operands. Every function here receives the operand
//! slice (the list with the keyword already stripped) and the
//! evaluation environment.

use std::any::Any;
use std::rc::Rc;

use lisplet_parser::{Closure, Symbol, Value};

use super::eval;
use crate::env::Env;
use crate::error::{Error, Result};

/// `(quote e)` returns `e` unevaluated.
pub(super) fn eval_quote(operands: &[Value]) -> Result<Value> {
    if operands.len() != 1 {
        return Err(Error::arity("quote", 1, operands.len()));
    }
    Ok(operands[0].clone())
}

/// `(eval e)` evaluates `e`, then evaluates the result again.
pub(super) fn eval_eval(operands: &[Value], env: &Env) -> Result<Value> {
    if operands.len() != 1 {
        return Err(Error::arity("eval", 1, operands.len()));
    }
    let datum = eval(&operands[0], env)?;
    eval(&datum, env)
}

/// `(set name value)` binds `name` to the evaluated `value` in the
/// current frame and returns the value.
///
/// This never walks outward to mutate an existing outer-scope binding,
/// unlike typical Lisp `set!`.
pub(super) fn eval_set(operands: &[Value], env: &Env) -> Result<Value> {
    if operands.len() != 2 {
        return Err(Error::arity("set", 2, operands.len()));
    }
    let name = expect_name("set", &operands[0])?;
    let value = eval(&operands[1], env)?;
    env.define(name, value.clone());
    Ok(value)
}

/// `(if cond then [else])` with the missing else branch yielding `nil`.
pub(super) fn eval_if(operands: &[Value], env: &Env) -> Result<Value> {
    if operands.len() != 2 && operands.len() != 3 {
        return Err(Error::syntax("if", "expected (if cond then [else])"));
    }
    if eval(&operands[0], env)?.is_truthy() {
        eval(&operands[1], env)
    } else if let Some(alt) = operands.get(2) {
        eval(alt, env)
    } else {
        Ok(Value::nil())
    }
}

/// `(cond (c1 r1) (c2 r2) ...)` evaluates each test in order and
/// returns the result expression of the first truthy one, or `nil` if
/// none match. Each clause must have exactly two elements.
pub(super) fn eval_cond(operands: &[Value], env: &Env) -> Result<Value> {
    for clause in operands {
        let Value::List(pair) = clause else {
            return Err(Error::syntax(
                "cond",
                format!("clause must be a list, got {}", clause.type_name()),
            ));
        };
        if pair.len() != 2 {
            return Err(Error::syntax(
                "cond",
                format!("clause must have exactly 2 elements, got {}", pair.len()),
            ));
        }
        if eval(&pair[0], env)?.is_truthy() {
            return eval(&pair[1], env);
        }
    }
    Ok(Value::nil())
}

/// `(and e1 e2)` short-circuits: if `e1` is falsy, returns `nil`
/// without evaluating `e2`; otherwise returns `e2`'s value.
pub(super) fn eval_and(operands: &[Value], env: &Env) -> Result<Value> {
    if operands.len() != 2 {
        return Err(Error::arity("and", 2, operands.len()));
    }
    if !eval(&operands[0], env)?.is_truthy() {
        return Ok(Value::nil());
    }
    eval(&operands[1], env)
}

/// `(or e1 e2)` short-circuits: if `e1` is truthy, returns the
/// canonical `t` without evaluating `e2`; otherwise returns `e2`'s
/// value.
///
/// Note the asymmetry with `and`: a truthy first operand yields the
/// literal `t` symbol rather than the operand's own value. This is
/// long-standing observable behavior and is kept as-is.
pub(super) fn eval_or(operands: &[Value], env: &Env) -> Result<Value> {
    if operands.len() != 2 {
        return Err(Error::arity("or", 2, operands.len()));
    }
    if eval(&operands[0], env)?.is_truthy() {
        return Ok(Value::t());
    }
    eval(&operands[1], env)
}

/// `define` in two shapes:
///
/// - `(define name (params...) body)` constructs a closure capturing
///   the current environment, binds `name` to it, and returns the
///   symbol `name`.
/// - `(define name value)` binds `name` to the evaluated `value` and
///   returns it, mirroring `set`.
pub(super) fn eval_define(operands: &[Value], env: &Env) -> Result<Value> {
    match operands.len() {
        2 => eval_set(operands, env),
        3 => {
            let name = expect_name("define", &operands[0])?;
            let params = parse_params(&operands[1])?;
            let env_any: Rc<dyn Any> = Rc::new(env.clone());
            let closure = Closure::new(
                Some(name.clone()),
                params,
                operands[2].clone(),
                env_any,
            );
            env.define(name.clone(), Value::Closure(Rc::new(closure)));
            Ok(Value::symbol(name))
        }
        _ => Err(Error::syntax(
            "define",
            "expected (define name value) or (define name (params...) body)",
        )),
    }
}

/// Extract a plain (non-string-literal) symbol used as a binding name.
fn expect_name(form: &'static str, val: &Value) -> Result<Symbol> {
    match val {
        Value::Symbol(sym) if !sym.is_string_literal() => Ok(sym.clone()),
        other => Err(Error::syntax(
            form,
            format!("binding name must be a symbol, got {}", other.type_name()),
        )),
    }
}

/// Parse a parameter list: a list of plain symbols, names unevaluated.
fn parse_params(val: &Value) -> Result<Vec<Symbol>> {
    let Value::List(items) = val else {
        return Err(Error::syntax(
            "define",
            format!("parameter list must be a list, got {}", val.type_name()),
        ));
    };
    items
        .iter()
        .map(|item| expect_name("define", item))
        .collect()
}
