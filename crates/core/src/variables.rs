use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Named numeric outputs published by a model.
///
/// A plain mutable mapping: models write entries directly with
/// [`insert`](Variables::insert) and callers read them back by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, f64>);

impl Variables {
    /// Key under which a model publishes its functional.
    pub const FUNCTIONAL: &'static str = "_functional";

    /// Creates an empty set of variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a variable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingVariable`] if no variable has that name.
    pub fn get(&self, name: &str) -> Result<f64, ModelError> {
        self.value(name).ok_or_else(|| ModelError::MissingVariable {
            name: name.to_owned(),
        })
    }

    /// Returns the value of a variable, or `None` if it has not been written.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Writes a variable, returning its previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(name.into(), value)
    }

    /// Returns the functional, if one has been published.
    #[must_use]
    pub fn functional(&self) -> Option<f64> {
        self.value(Self::FUNCTIONAL)
    }

    /// Publishes the functional.
    pub fn set_functional(&mut self, value: f64) {
        self.insert(Self::FUNCTIONAL, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Variables {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
