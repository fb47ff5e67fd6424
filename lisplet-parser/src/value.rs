// lisplet-parser - Value types for lisplet
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Core value type for lisplet.
//!
//! `Value` is the central enum representing every runtime datum: it is
//! both the AST the reader produces and the data the evaluator computes.
//! All variants are immutable after construction; lists use a persistent
//! vector so sub-structure can be shared freely without copying.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::symbol::Symbol;

/// A lisplet runtime value.
///
/// The language has no distinct boolean or string types: truth is the
/// symbol `t`, falsity the symbol `nil`, and string literals are symbols
/// whose name retains the surrounding double quotes.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// Interned identifier (also carries string literals)
    Symbol(Symbol),
    /// Ordered sequence (persistent, structural sharing)
    List(Vector<Value>),
    /// Native (Rust) procedure
    NativeFn(NativeFn),
    /// User-defined procedure capturing its defining environment
    Closure(Rc<Closure>),
}

impl Value {
    /// Create an integer value.
    #[must_use]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a symbol value.
    #[must_use]
    pub fn symbol(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }

    /// Create a symbol value from a name.
    #[must_use]
    pub fn sym(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Create a string-literal symbol, wrapping the text in double quotes.
    #[must_use]
    pub fn string_literal(text: &str) -> Self {
        Value::Symbol(Symbol::new(&format!("\"{}\"", text)))
    }

    /// Create a list value.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::List(elements.into_iter().collect())
    }

    /// Create an empty list. This is a distinct value from the `nil`
    /// symbol, and unlike `nil` it is truthy.
    #[must_use]
    pub fn empty_list() -> Self {
        Value::List(Vector::new())
    }

    /// The canonical truth symbol `t`.
    #[must_use]
    pub fn t() -> Self {
        Value::sym("t")
    }

    /// The canonical falsity symbol `nil`.
    #[must_use]
    pub fn nil() -> Self {
        Value::sym("nil")
    }

    /// Convert a Rust bool into the canonical `t`/`nil` symbol.
    #[must_use]
    pub fn truth(b: bool) -> Self {
        if b { Value::t() } else { Value::nil() }
    }

    /// Truthiness: a value is falsy iff it is the symbol named `nil`.
    /// Everything else, including `0` and the empty list, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Symbol(sym) if sym.name() == "nil")
    }

    /// Whether this value is a string-literal symbol (self-evaluating).
    #[must_use]
    pub fn is_string_literal(&self) -> bool {
        matches!(self, Value::Symbol(sym) if sym.is_string_literal())
    }

    /// Type name for error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::NativeFn(_) => "builtin",
            Value::Closure(_) => "closure",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::NativeFn(a), Value::NativeFn(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::NativeFn(func) => write!(f, "#<builtin {}>", func.name()),
            Value::Closure(_) => write!(f, "#<closure>"),
        }
    }
}

// ============================================================================
// Procedure Types
// ============================================================================

/// A native (Rust) procedure exposed as a callable value.
///
/// The function itself is type-erased behind `Rc<dyn Any>` so that this
/// crate does not depend on the evaluator's error type; `lisplet-core`
/// downcasts it back at application time.
#[derive(Clone)]
pub struct NativeFn {
    /// Procedure name for display
    name: &'static str,
    /// The actual function (type-erased)
    func: Rc<dyn Any>,
}

impl NativeFn {
    /// Create a new native procedure with a type-erased function.
    pub fn new(name: &'static str, func: Rc<dyn Any>) -> Self {
        NativeFn { name, func }
    }

    /// Get the procedure name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the inner function reference.
    #[must_use]
    pub fn func(&self) -> &Rc<dyn Any> {
        &self.func
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#<builtin {}>", self.name)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A user-defined procedure.
///
/// The captured environment is the environment in effect where the
/// closure was defined, held by shared reference: bindings added to that
/// environment after the closure is created are visible at call time.
pub struct Closure {
    /// Name the closure was defined under (for error messages)
    pub name: Option<Symbol>,
    /// Parameter names, bound positionally at application
    pub params: Vec<Symbol>,
    /// Body expression, evaluated in a child of the captured environment
    pub body: Value,
    /// Captured environment (type-erased to avoid a circular dependency)
    pub env: Rc<dyn Any>,
}

impl Closure {
    /// Create a new closure.
    pub fn new(name: Option<Symbol>, params: Vec<Symbol>, body: Value, env: Rc<dyn Any>) -> Self {
        Closure {
            name,
            params,
            body,
            env,
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "#<closure {}>", name),
            None => write!(f, "#<closure>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::nil().is_truthy());
        assert!(Value::t().is_truthy());
        assert!(Value::int(0).is_truthy());
        assert!(Value::empty_list().is_truthy());
        assert!(Value::sym("anything").is_truthy());
    }

    #[test]
    fn test_display_atoms() {
        assert_eq!(Value::int(-42).to_string(), "-42");
        assert_eq!(Value::sym("foo").to_string(), "foo");
        assert_eq!(Value::string_literal("hi").to_string(), "\"hi\"");
    }

    #[test]
    fn test_display_lists() {
        assert_eq!(Value::empty_list().to_string(), "()");
        let list = Value::list([Value::int(1), Value::sym("x"), Value::empty_list()]);
        assert_eq!(list.to_string(), "(1 x ())");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::int(1), Value::int(1));
        assert_ne!(Value::int(1), Value::sym("1"));
        assert_eq!(
            Value::list([Value::int(1), Value::int(2)]),
            Value::list([Value::int(1), Value::int(2)])
        );
        assert_ne!(Value::empty_list(), Value::nil());
    }

    #[test]
    fn test_string_literal_detection() {
        assert!(Value::string_literal("x").is_string_literal());
        assert!(!Value::sym("x").is_string_literal());
        assert!(!Value::int(1).is_string_literal());
    }
}
