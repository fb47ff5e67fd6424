// lisplet-parser - Symbol type with interning
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Symbols are the identifiers of the language.
//!
//! # Interning
//!
//! Symbols are interned in a global table, so two symbols with the same
//! name share the same underlying storage:
//!
//! - **O(1) equality**: comparing symbols is a pointer comparison
//! - **O(1) hashing**: the hash is computed from the pointer address
//! - **Memory efficiency**: identical symbols share one allocation
//!
//! Interned symbols are never deallocated; memory grows with the number
//! of distinct names seen during the program's lifetime. Programs use a
//! bounded set of names in practice, so the overhead is modest.
//!
//! String literals are carried as symbols whose name retains the
//! surrounding double quotes (the language has no separate string type);
//! [`Symbol::is_string_literal`] detects them.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned identifier.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
}

/// Global symbol interner.
static SYMBOL_INTERNER: OnceLock<Mutex<HashMap<String, Arc<str>>>> = OnceLock::new();

fn get_interner() -> &'static Mutex<HashMap<String, Arc<str>>> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(HashMap::new()))
}

impl Symbol {
    /// Create (or look up) the symbol with the given name.
    pub fn new(name: &str) -> Self {
        let mut interner = get_interner()
            .lock()
            .expect("Symbol interner mutex poisoned: a thread panicked while holding the lock");
        if let Some(interned) = interner.get(name) {
            return Symbol {
                name: Arc::clone(interned),
            };
        }
        let interned: Arc<str> = Arc::from(name);
        interner.insert(name.to_string(), Arc::clone(&interned));
        Symbol { name: interned }
    }

    /// Get the symbol's name. For string literals this includes the
    /// surrounding double quotes.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this symbol carries a string literal (its name retains the
    /// double quotes the reader saw).
    #[must_use]
    pub fn is_string_literal(&self) -> bool {
        self.name.starts_with('"')
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        // Interning makes pointer comparison sufficient
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.name).hash(state);
    }
}
