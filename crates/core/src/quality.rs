//! Quality value object with bounded mutation primitives.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// An item's value/condition.
///
/// The legal range is `[0, 50]`, but the engine accepts pre-existing
/// violations without repairing them: only the deltas applied through
/// [`Quality::increased`] and [`Quality::decreased`] are clamped. Use
/// [`Quality::new`] when the range should be enforced at construction and
/// [`Quality::from_raw`] when it should not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Floor applied to every clamped decrease.
    pub const MIN: i32 = 0;
    /// Ceiling applied to every clamped increase.
    pub const MAX: i32 = 50;

    /// Create a quality, validating it lies in `[MIN, MAX]`.
    pub fn new(value: i32) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "quality {value} outside [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// Create a quality without validation.
    pub fn from_raw(value: i32) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Add `by`, then clamp to the ceiling. No-op when `by <= 0`.
    pub fn increased(self, by: i32) -> Self {
        if by <= 0 {
            return self;
        }
        Self((self.0 + by).min(Self::MAX))
    }

    /// Subtract `by`, then clamp to the floor. No-op when `by <= 0`.
    pub fn decreased(self, by: i32) -> Self {
        if by <= 0 {
            return self;
        }
        Self((self.0 - by).max(Self::MIN))
    }
}

impl ValueObject for Quality {}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
