// lisplet-core - Environment for lexical scoping
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lisplet_parser::{Symbol, Value};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references, enabling
/// lexical scoping. Each environment has its own bindings map and
/// optionally a parent environment for outer scope lookup. The handle
/// is reference-counted and cheap to clone: a closure keeps its
/// defining environment alive by holding one of these.
///
/// Note that the `set` special form does not walk this chain to mutate
/// an existing outer binding; it defines in the evaluation environment
/// it was given. There is therefore no outward-mutating method here.
///
/// # Examples
///
/// ```
/// use lisplet_core::Env;
/// use lisplet_parser::{Symbol, Value};
///
/// let env = Env::new();
/// env.define(Symbol::new("x"), Value::int(42));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), Value::int(42));
///
/// // A child environment inherits and can shadow parent bindings
/// let child = env.child();
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), Value::int(42));
/// child.define(Symbol::new("x"), Value::int(100));
/// assert_eq!(child.lookup(&Symbol::new("x")).unwrap(), Value::int(100));
/// assert_eq!(env.lookup(&Symbol::new("x")).unwrap(), Value::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, Value>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    #[must_use]
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Define a binding in this environment (not the parent), inserting
    /// or overwriting. Always succeeds.
    pub fn define(&self, sym: Symbol, val: Value) {
        self.inner.borrow_mut().bindings.insert(sym, val);
    }

    /// Look up a symbol in this environment or the parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    pub fn lookup(&self, sym: &Symbol) -> Result<Value> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Ok(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return Err(Error::UndefinedSymbol(sym.clone())),
            }
        }
    }

    /// Check if a symbol is defined in this environment or the parent chain.
    #[must_use]
    pub fn is_defined(&self, sym: &Symbol) -> bool {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if inner.bindings.contains_key(sym) {
                return true;
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return false,
            }
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name)
    }

    #[test]
    fn test_define_and_lookup() {
        let env = Env::new();
        env.define(sym("x"), Value::int(42));

        assert_eq!(env.lookup(&sym("x")).unwrap(), Value::int(42));
    }

    #[test]
    fn test_undefined_symbol() {
        let env = Env::new();
        assert!(env.lookup(&sym("missing")).is_err());
    }

    #[test]
    fn test_child_inherits_parent() {
        let parent = Env::new();
        parent.define(sym("x"), Value::int(42));

        let child = parent.child();
        assert_eq!(child.lookup(&sym("x")).unwrap(), Value::int(42));
    }

    #[test]
    fn test_child_shadows_parent() {
        let parent = Env::new();
        parent.define(sym("x"), Value::int(42));

        let child = parent.child();
        child.define(sym("x"), Value::int(100));

        assert_eq!(child.lookup(&sym("x")).unwrap(), Value::int(100));
        assert_eq!(parent.lookup(&sym("x")).unwrap(), Value::int(42));
    }

    #[test]
    fn test_redefine_overwrites() {
        let env = Env::new();
        env.define(sym("x"), Value::int(1));
        env.define(sym("x"), Value::int(2));

        assert_eq!(env.lookup(&sym("x")).unwrap(), Value::int(2));
    }

    #[test]
    fn test_is_defined() {
        let env = Env::new();
        assert!(!env.is_defined(&sym("x")));

        env.define(sym("x"), Value::int(42));
        assert!(env.is_defined(&sym("x")));

        let child = env.child();
        assert!(child.is_defined(&sym("x")));
    }

    #[test]
    fn test_bindings_shared_between_handles() {
        let env = Env::new();
        let alias = env.clone();
        alias.define(sym("x"), Value::int(7));

        assert_eq!(env.lookup(&sym("x")).unwrap(), Value::int(7));
    }
}
