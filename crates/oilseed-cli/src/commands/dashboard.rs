// crates/oilseed-cli/src/commands/dashboard.rs
//
// `oilseed dashboard <profile-id>`: print the role dashboard for a
// signed-in profile.

use uuid::Uuid;

use oilseed_core::error::PlatformError;
use oilseed_views::{dashboard_for, DashboardStats};

use crate::config::CliConfig;
use crate::output::format_json;

/// Run the dashboard command.
pub async fn run(
    config: &CliConfig,
    profile_id: &Uuid,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;
    let profile = store
        .profile(profile_id)
        .await?
        .ok_or_else(|| PlatformError::NotFound(format!("profile {}", profile_id)))?;

    let stats = dashboard_for(store.as_ref(), &profile).await?;

    if json {
        println!("{}", format_json(&stats));
        return Ok(());
    }

    println!("Dashboard for {} ({})", profile.full_name, profile.role.tag());
    println!();
    match &stats {
        DashboardStats::Farmer {
            total_crops,
            pending_credit,
            recent_advisories,
        } => {
            println!("  Active crops:    {}", total_crops);
            println!("  Pending credit:  {}", pending_credit);
            print_advisories(recent_advisories);
        }
        DashboardStats::Operator {
            inventory_value,
            shipments_in_transit,
            recent_advisories,
        } => {
            println!("  Inventory value:      Rs {:.2}", inventory_value);
            println!("  Shipments in transit: {}", shipments_in_transit);
            print_advisories(recent_advisories);
        }
        DashboardStats::Oversight {
            total_crops,
            inventory_records,
            recent_advisories,
        } => {
            println!("  Crops tracked:     {}", total_crops);
            println!("  Inventory records: {}", inventory_records);
            print_advisories(recent_advisories);
        }
    }

    Ok(())
}

fn print_advisories(advisories: &[oilseed_core::advisory::Advisory]) {
    println!();
    if advisories.is_empty() {
        println!("  No advisories available");
        return;
    }
    println!("  Recent advisories:");
    for advisory in advisories {
        println!(
            "    [{}] {} ({})",
            advisory.priority.tag(),
            advisory.title,
            advisory.created_at.format("%d %b %Y")
        );
    }
}
