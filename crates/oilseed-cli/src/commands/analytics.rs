// crates/oilseed-cli/src/commands/analytics.rs
//
// `oilseed analytics`: print platform-wide metrics.

use oilseed_views::platform_metrics;

use crate::config::CliConfig;
use crate::output::format_json;

/// Run the analytics command.
pub async fn run(config: &CliConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;
    let metrics = platform_metrics(store.as_ref()).await?;

    if json {
        println!("{}", format_json(&metrics));
        return Ok(());
    }

    println!("Platform analytics");
    println!("------------------");
    println!(
        "  Total production area:  {:.1} ha",
        metrics.total_production_hectares
    );
    println!(
        "  Total procurement:      {:.2} MT",
        metrics.total_procurement_kg / 1000.0
    );
    println!(
        "  Avg market price:       Rs {:.2}/kg",
        metrics.average_price_per_kg
    );
    println!(
        "  Warehouse utilization:  {:.1}%",
        metrics.warehouse_utilization_pct
    );

    Ok(())
}
