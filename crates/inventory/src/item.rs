use serde::{Deserialize, Serialize};

use gildedrose_core::{Quality, SellIn};

use crate::category::Category;

/// An inventory item: a display name plus the two aging attributes.
///
/// Items are constructed externally and handed to the engine; the engine only
/// mutates `sell_in` and `quality` in place. Construction performs no
/// validation — pre-existing out-of-range values are accepted as-is and never
/// repaired (only the engine's own deltas are clamped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: SellIn,
    quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::from_raw(quality),
        }
    }

    /// Display label, used only as the classification key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in.value()
    }

    pub fn quality(&self) -> i32 {
        self.quality.value()
    }

    /// Aging category, derived from the (immutable) name.
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// The sell-by date has passed at the time of the check.
    pub(crate) fn is_expired(&self) -> bool {
        self.sell_in.is_expired()
    }

    pub(crate) fn raise_quality(&mut self, by: i32) {
        self.quality = self.quality.increased(by);
    }

    pub(crate) fn lower_quality(&mut self, by: i32) {
        self.quality = self.quality.decreased(by);
    }

    /// Hard reset to zero, bypassing the clamped-decrease primitive.
    pub(crate) fn reset_quality(&mut self) {
        self.quality = Quality::zero();
    }

    pub(crate) fn tick_sell_in(&mut self) {
        self.sell_in = self.sell_in.decremented();
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_out_of_range_values() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", -1, 80);
        assert_eq!(item.sell_in(), -1);
        assert_eq!(item.quality(), 80);
    }

    #[test]
    fn bounded_mutators_clamp_their_own_deltas() {
        let mut item = Item::new("Elixir of the Mongoose", 5, 49);
        item.raise_quality(3);
        assert_eq!(item.quality(), 50);
        item.lower_quality(60);
        assert_eq!(item.quality(), 0);
    }

    #[test]
    fn non_positive_deltas_leave_quality_untouched() {
        let mut item = Item::new("Elixir of the Mongoose", 5, 7);
        item.raise_quality(0);
        item.raise_quality(-2);
        item.lower_quality(0);
        item.lower_quality(-2);
        assert_eq!(item.quality(), 7);
    }

    #[test]
    fn reset_bypasses_the_floor_clamp_path() {
        let mut item = Item::new("Backstage passes to a TAFKAL80ETC concert", 0, 30);
        item.reset_quality();
        assert_eq!(item.quality(), 0);
    }

    #[test]
    fn display_matches_ledger_format() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");
    }
}
