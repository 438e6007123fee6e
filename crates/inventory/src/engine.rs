use crate::category::Category;
use crate::item::Item;

/// The aging engine: owns the full rule catalog and exposes the single
/// advance-a-day operation.
///
/// Stateless and deterministic. Each item's update is a pure function of its
/// current `(name, sell_in, quality)` tuple, so items are independent of
/// their siblings and processed strictly in sequence order.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgingEngine;

impl AgingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Advance one simulated day for every item, mutating each in place.
    ///
    /// Legendary items are skipped entirely. Every other item gets exactly
    /// one quality rule applied against its current (pre-decrement) sell-in,
    /// followed by the once-per-day sell-in decrement. An empty slice is a
    /// no-op; there are no error conditions.
    pub fn advance_day(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            self.age_item(item);
        }
    }

    fn age_item(&self, item: &mut Item) {
        match item.category() {
            Category::Legendary => return,
            Category::BackstagePass => Self::age_backstage(item),
            Category::Ripening => {
                let by = if item.is_expired() { 2 } else { 1 };
                item.raise_quality(by);
            }
            // Twice the standard base rate, as its own branch: it never
            // stacks with the standard past-sell-by doubling, so an expired
            // conjured item still loses 2, not 4.
            Category::Conjured => item.lower_quality(2),
            Category::Standard => {
                let by = if item.is_expired() { 2 } else { 1 };
                item.lower_quality(by);
            }
        }
        item.tick_sell_in();
    }

    fn age_backstage(item: &mut Item) {
        if item.sell_in() > 10 {
            item.raise_quality(1);
        } else if item.sell_in() > 5 {
            item.raise_quality(2);
        } else if item.sell_in() > 0 {
            item.raise_quality(3);
        } else {
            // After the event the passes are worthless: a hard reset, not a
            // clamped decrease.
            item.reset_quality();
        }
    }
}
