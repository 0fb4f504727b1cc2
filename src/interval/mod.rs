//! Half-open integer intervals and the overlap index built on them.

mod index;


pub use index::IntervalIndex;

use thiserror::Error;

/// Errors raised when constructing an [`Interval`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("interval start {start} must be strictly less than end {end}")]
    Empty { start: i64, end: i64 },
}

/// Half-open range `[start, end)` tagged with an opaque payload.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`; ranges
/// that merely touch do not conflict.
///
/// # Example
///
/// ```
/// use cursus::interval::Interval;
///
/// let a = Interval::new(0, 60, "first").unwrap();
/// let b = Interval::new(60, 120, "second").unwrap();
/// assert!(!a.overlaps(&b));
/// assert!(Interval::new(60, 60, "empty").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    start: i64,
    end: i64,
    payload: T,
}

impl<T> Interval<T> {
    /// Creates `[start, end)`, rejecting zero- and negative-duration ranges.
    pub fn new(start: i64, end: i64, payload: T) -> Result<Self, IntervalError> {
        if end <= start {
            return Err(IntervalError::Empty { start, end });
        }
        Ok(Self {
            start,
            end,
            payload,
        })
    }

    /// Crate-internal constructor for ranges validated elsewhere.
    pub(crate) fn new_unchecked(start: i64, end: i64, payload: T) -> Self {
        debug_assert!(start < end);
        Self {
            start,
            end,
            payload,
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    /// True if the two ranges share at least one point. Payloads are ignored.
    pub fn overlaps<U>(&self, other: &Interval<U>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl<T> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
