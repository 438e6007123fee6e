use anyhow::Context;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let mut days: u32 = 1;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            days = arg
                .parse()
                .with_context(|| format!("expected a day count, got {arg:?}"))?;
        }
    }

    tracing::info!(days, "advancing the sample inventory");

    let mut items = gildedrose_cli::sample_inventory();
    gildedrose_cli::run(&mut items, days, json)
}
