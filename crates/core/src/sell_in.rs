//! Sell-in value object.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Days remaining until an item is no longer fresh.
///
/// Signed on purpose: the value keeps decreasing past zero and stays negative
/// indefinitely (there is no floor).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// One day closer to (or further past) the sell-by date.
    pub fn decremented(self) -> Self {
        Self(self.0 - 1)
    }

    /// The sell-by date has passed (or is today).
    pub fn is_expired(self) -> bool {
        self.0 <= 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
