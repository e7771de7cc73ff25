use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope mapping names to values.
///
/// Environments chain: lookup misses walk the `outer` link, insertion is
/// always local. The program runs in one root environment; every function
/// call gets a fresh environment enclosed over the closure's captured one.
///
/// Environments are handed out as `Rc<Environment>` because closures keep
/// their captured scope alive for as long as the function value exists. A
/// function bound into the very environment it captured forms a reference
/// cycle; such scopes live until the process exits, which for a
/// single-session interpreter is the intended lifetime anyway.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    outer:    Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a root environment with no outer scope.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates an environment whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       outer:    Some(Rc::clone(outer)), })
    }

    /// Looks a name up in this scope, then outward through the chain.
    ///
    /// # Example
    /// ```
    /// use gorb::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let root = Environment::new();
    /// root.set("x", Value::Integer(1));
    ///
    /// let inner = Environment::enclosed(&root);
    /// inner.set("y", Value::Integer(2));
    ///
    /// assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    /// assert_eq!(root.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds a name in this scope. An existing local binding of the same
    /// name is replaced; outer scopes are never touched.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }
}
