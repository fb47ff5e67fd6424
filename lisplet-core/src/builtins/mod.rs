// lisplet-core - Built-in procedures
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Built-in procedures for lisplet.
//!
//! Every builtin receives an already-evaluated argument slice and
//! returns a single value or a typed error. Builtins never see
//! unevaluated syntax and never recurse into the evaluator.

mod arithmetic;
mod comparison;
mod logic;
mod predicates;
mod sequences;

use lisplet_parser::{Symbol, Value};

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::make_native_fn;

use arithmetic::{builtin_add, builtin_div, builtin_mod, builtin_mul, builtin_sub};
use comparison::{builtin_eq, builtin_ge, builtin_gt, builtin_le, builtin_lt};
use logic::{builtin_and_p, builtin_not, builtin_or_p};
use predicates::{
    builtin_atom, builtin_list_p, builtin_nil_p, builtin_number_p, builtin_symbol_p,
};
use sequences::{builtin_car, builtin_cdr, builtin_cons};

/// Register all built-in procedures and bootstrap bindings in the
/// given environment.
///
/// Besides the procedure table this installs the symbols `t` and `nil`
/// bound to themselves, and binds each special-form keyword to its own
/// symbol so that a bare reference like `set` still resolves.
pub fn register_builtins(env: &Env) {
    // Arithmetic
    env.define_native("+", builtin_add);
    env.define_native("-", builtin_sub);
    env.define_native("*", builtin_mul);
    env.define_native("/", builtin_div);
    env.define_native("%", builtin_mod);

    // Comparison
    env.define_native("=", builtin_eq);
    env.define_native("<", builtin_lt);
    env.define_native(">", builtin_gt);
    env.define_native("<=", builtin_le);
    env.define_native(">=", builtin_ge);

    // Word aliases for the arithmetic and comparison operators
    env.define_native("add", builtin_add);
    env.define_native("sub", builtin_sub);
    env.define_native("mul", builtin_mul);
    env.define_native("div", builtin_div);
    env.define_native("mod", builtin_mod);
    env.define_native("eq", builtin_eq);
    env.define_native("lt", builtin_lt);
    env.define_native("gt", builtin_gt);
    env.define_native("lte", builtin_le);
    env.define_native("gte", builtin_ge);

    // Predicates
    env.define_native("number?", builtin_number_p);
    env.define_native("symbol?", builtin_symbol_p);
    env.define_native("list?", builtin_list_p);
    env.define_native("nil?", builtin_nil_p);
    env.define_native("atom", builtin_atom);

    // List primitives
    env.define_native("cons", builtin_cons);
    env.define_native("car", builtin_car);
    env.define_native("cdr", builtin_cdr);

    // Eager logical procedures (the short-circuiting `and`/`or` are
    // special forms, not entries here)
    env.define_native("and?", builtin_and_p);
    env.define_native("or?", builtin_or_p);
    env.define_native("not", builtin_not);

    // Canonical truth markers evaluate to themselves via lookup
    env.define(Symbol::new("t"), Value::t());
    env.define(Symbol::new("nil"), Value::nil());

    // These special-form keywords resolve to their own symbols when
    // used outside head position
    for name in ["quote", "eval", "set", "define"] {
        env.define(Symbol::new(name), Value::sym(name));
    }
}

/// Helper trait to define native procedures more easily.
pub trait EnvExt {
    fn define_native(&self, name: &'static str, func: fn(&[Value]) -> Result<Value>);
}

impl EnvExt for Env {
    fn define_native(&self, name: &'static str, func: fn(&[Value]) -> Result<Value>) {
        let native = make_native_fn(name, func);
        self.define(Symbol::new(name), Value::NativeFn(native));
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Extract an integer argument or fail with a type error.
pub(crate) fn expect_int(context: &'static str, val: &Value) -> Result<i64> {
    match val {
        Value::Int(n) => Ok(*n),
        other => Err(Error::type_error_in(context, "integer", other.type_name())),
    }
}

/// Require an exact argument count.
pub(crate) fn expect_arity(name: &'static str, expected: usize, args: &[Value]) -> Result<()> {
    if args.len() != expected {
        return Err(Error::arity(name, expected, args.len()));
    }
    Ok(())
}
