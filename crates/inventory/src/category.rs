use serde::{Deserialize, Serialize};

/// Exact name of the one legendary item.
const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
/// Substring marking backstage passes.
const BACKSTAGE_MARKER: &str = "Backstage passes";
/// Exact name of the one ripening item.
const RIPENING_NAME: &str = "Aged Brie";
/// Substring marking conjured items.
const CONJURED_MARKER: &str = "Conjured";

/// Aging category of an item, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Frozen: neither quality nor sell-in ever changes.
    Legendary,
    /// Quality rises with urgency, then collapses to zero after the event.
    BackstagePass,
    /// Quality rises with age.
    Ripening,
    /// Quality falls twice as fast as standard.
    Conjured,
    /// Quality falls by one per day, doubling once past the sell-by date.
    Standard,
}

impl Category {
    /// Classify a name into its category.
    ///
    /// Matching is case-sensitive and checked in a fixed precedence order
    /// (first match wins), since a name could satisfy several substring
    /// tests at once.
    pub fn classify(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            Category::Legendary
        } else if name.contains(BACKSTAGE_MARKER) {
            Category::BackstagePass
        } else if name == RIPENING_NAME {
            Category::Ripening
        } else if name.contains(CONJURED_MARKER) {
            Category::Conjured
        } else {
            Category::Standard
        }
    }
}
