use super::ui;
use crate::core::RateProvider;
use anyhow::Result;

/// Fetches the quotes once, leaving the provider's snapshot as it was on
/// failure. The failure is only logged.
pub async fn load(rates: &RateProvider) -> bool {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let loaded = rates.refresh().await;
    pb.finish_and_clear();
    loaded
}

/// Prints the three quotes.
pub async fn run(rates: &RateProvider) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = rates.fetch_rates().await;
    pb.finish_and_clear();

    let snapshot = result?;
    println!(
        "{}\n\n{}",
        ui::style_text("Dollar quotes", ui::StyleType::Title),
        ui::quotes_table(&snapshot, None)
    );
    Ok(())
}
