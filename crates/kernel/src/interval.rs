use crate::Error;

/// Labeled extent of one anomaly, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnomalyInterval {
    id: i64,
    start: i64,
    end: i64,
}

impl AnomalyInterval {
    pub fn new(id: i64, start: i64, end: i64) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidInterval { id, start, end });
        }
        Ok(Self { id, start, end })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of samples covered, `end - start + 1`.
    pub fn length(&self) -> i128 {
        i128::from(self.end) - i128::from(self.start) + 1
    }

    /// Tolerance window around this interval for the given slack.
    pub fn window(&self, accepted_inaccuracy: i64) -> ToleranceWindow {
        ToleranceWindow::new(self.start, self.end, accepted_inaccuracy)
    }
}

/// Exclusive bounds a prediction must fall strictly between.
///
/// Each side extends past the interval by the larger of the interval's length
/// and the accepted inaccuracy. Bounds are kept in `i128` so no `i64` input
/// can overflow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToleranceWindow {
    pub lower: i128,
    pub upper: i128,
}

impl ToleranceWindow {
    pub fn new(start: i64, end: i64, accepted_inaccuracy: i64) -> Self {
        let (start, end) = (i128::from(start), i128::from(end));
        let slack = i128::from(accepted_inaccuracy);
        let length = end - start + 1;

        Self {
            lower: (start - length).min(start - slack),
            upper: (end + length).max(end + slack),
        }
    }

    #[inline]
    pub fn contains(&self, pred: i64) -> bool {
        let pred = i128::from(pred);
        self.lower < pred && pred < self.upper
    }
}
