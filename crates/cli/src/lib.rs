//! Console front end for the aging engine.
//!
//! Seeds the canonical inventory and replays days by calling the engine's
//! single-day operation once per day; the day loop lives here, in the caller.

use gildedrose_inventory::{AgingEngine, Item};

/// The canonical demonstration inventory, one item per interesting case.
pub fn sample_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Render one day's ledger block.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = format!("-------- day {day} --------\nname, sellIn, quality\n");
    for item in items {
        out.push_str(&item.to_string());
        out.push('\n');
    }
    out
}

/// Advance `days` days over `items`, printing the ledger after each day.
///
/// Day 0 is the starting state; with `json` set, the final state is also
/// dumped as JSON.
pub fn run(items: &mut Vec<Item>, days: u32, json: bool) -> anyhow::Result<()> {
    let engine = AgingEngine::new();

    print!("{}", render_day(0, items));
    for day in 1..=days {
        engine.advance_day(items);
        tracing::debug!(day, "advanced inventory by one day");
        print!("\n{}", render_day(day, items));
    }

    if json {
        println!("\n{}", serde_json::to_string_pretty(items)?);
    }

    tracing::info!(days, items = items.len(), "simulation finished");
    Ok(())
}
