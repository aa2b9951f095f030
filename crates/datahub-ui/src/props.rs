//! Component props — a flexible, ordered key-value set.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::action::ActionHandle;
use crate::navigation::NavigationHistory;
use crate::node::Node;

/// A single prop value.
///
/// Most props are plain data, but the host also injects live capabilities
/// (actions, the navigation history handle) that cannot be represented as
/// JSON, so the value type distinguishes them.
#[derive(Clone)]
pub enum PropValue {
    /// A plain JSON data value.
    Data(Value),
    /// An invocable host action.
    Action(ActionHandle),
    /// The shared navigation history handle.
    History(NavigationHistory),
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::Action(_) => f.write_str("Action(..)"),
            Self::History(_) => f.write_str("History(..)"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Data(a), Self::Data(b)) => a == b,
            (Self::Action(a), Self::Action(b)) => Arc::ptr_eq(a, b),
            (Self::History(a), Self::History(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// The full prop set passed to a component at render time.
///
/// Keys keep insertion order so repeated renders are structurally
/// reproducible. Children are carried separately from named props and are
/// always passed through positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: IndexMap<String, PropValue>,
    children: Vec<Node>,
}

impl Props {
    /// Creates an empty prop set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a prop, replacing any existing value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: PropValue) {
        self.values.insert(key.into(), value);
    }

    /// Inserts a JSON data prop.
    pub fn with_data(mut self, key: &str, value: Value) -> Self {
        self.insert(key, PropValue::Data(value));
        self
    }

    /// Inserts a string prop.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, Value::String(value.to_string()))
    }

    /// Inserts a boolean prop.
    pub fn with_bool(self, key: &str, value: bool) -> Self {
        self.with_data(key, Value::Bool(value))
    }

    /// Inserts an action prop.
    pub fn with_action(mut self, key: &str, action: ActionHandle) -> Self {
        self.insert(key, PropValue::Action(action));
        self
    }

    /// Inserts the navigation history handle.
    pub fn with_history(mut self, key: &str, history: NavigationHistory) -> Self {
        self.insert(key, PropValue::History(history));
        self
    }

    /// Sets the positional children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Replaces the positional children in place.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Gets a prop by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Gets a JSON data prop.
    pub fn get_data(&self, key: &str) -> Option<&Value> {
        match self.values.get(key) {
            Some(PropValue::Data(value)) => Some(value),
            _ => None,
        }
    }

    /// Gets a string prop.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_data(key).and_then(Value::as_str)
    }

    /// Gets a boolean prop.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_data(key).and_then(Value::as_bool)
    }

    /// Gets a list-of-strings prop.
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        self.get_data(key).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }

    /// Gets an action prop.
    pub fn get_action(&self, key: &str) -> Option<&ActionHandle> {
        match self.values.get(key) {
            Some(PropValue::Action(action)) => Some(action),
            _ => None,
        }
    }

    /// Gets the navigation history handle.
    pub fn get_history(&self, key: &str) -> Option<&NavigationHistory> {
        match self.values.get(key) {
            Some(PropValue::History(history)) => Some(history),
            _ => None,
        }
    }

    /// Deserializes a data prop into a typed value.
    pub fn get_typed<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_data(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Returns the positional children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over named props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropValue)> {
        self.values.iter()
    }

    /// Returns whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of named props.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether there are no named props.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
