mod reader;

use std::collections::HashMap;

/// Predicted anomaly index per data id.
///
/// Inserting an id twice keeps the latest index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predictions(HashMap<i64, i64>);

impl Predictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previously predicted index for `id`, if any.
    pub fn insert(&mut self, id: i64, predicted: i64) -> Option<i64> {
        self.0.insert(id, predicted)
    }

    pub fn get(&self, id: i64) -> Option<i64> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(id, predicted index)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.0.iter().map(|(&id, &predicted)| (id, predicted))
    }
}

impl FromIterator<(i64, i64)> for Predictions {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
