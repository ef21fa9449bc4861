mod reader;

use crate::{AnomalyInterval, Error};
use std::collections::{HashMap, hash_map::Entry};

/// Labeled anomaly intervals keyed by data id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundTruth(HashMap<i64, AnomalyInterval>);

impl GroundTruth {
    /// Index `intervals` by id, rejecting an id listed twice.
    pub fn try_from_intervals(
        intervals: impl IntoIterator<Item = AnomalyInterval>,
    ) -> Result<Self, Error> {
        let intervals = intervals.into_iter();
        let mut map = HashMap::with_capacity(intervals.size_hint().0);
        for interval in intervals {
            match map.entry(interval.id()) {
                Entry::Occupied(_) => return Err(Error::DuplicateInterval(interval.id())),
                Entry::Vacant(slot) => {
                    slot.insert(interval);
                }
            }
        }
        Ok(Self(map))
    }

    pub fn get(&self, id: i64) -> Option<&AnomalyInterval> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_by_id() {
        let truth = GroundTruth::try_from_intervals([
            AnomalyInterval::new(1, 40, 60).unwrap(),
            AnomalyInterval::new(2, 0, 10).unwrap(),
        ])
        .unwrap();

        assert_eq!(truth.len(), 2);
        assert_eq!(truth.get(2).map(|i| (i.start(), i.end())), Some((0, 10)));
        assert!(truth.get(3).is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = GroundTruth::try_from_intervals([
            AnomalyInterval::new(1, 40, 60).unwrap(),
            AnomalyInterval::new(1, 0, 10).unwrap(),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateInterval(1)));
    }
}
