// crates/oilseed-cli/src/commands/credit.rs
//
// `oilseed credit <farmer-id>`: print a farmer's credit and insurance
// summary.

use uuid::Uuid;

use oilseed_core::capability::{can_access, ViewId};
use oilseed_core::error::PlatformError;
use oilseed_views::credit_summary;

use crate::config::CliConfig;
use crate::output::format_json;

/// Run the credit command.
pub async fn run(
    config: &CliConfig,
    farmer_id: &Uuid,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;
    let profile = store
        .profile(farmer_id)
        .await?
        .ok_or_else(|| PlatformError::NotFound(format!("profile {}", farmer_id)))?;

    if !can_access(profile.role, ViewId::Credit) {
        return Err(Box::new(PlatformError::InvalidInput(format!(
            "role {} has no credit view",
            profile.role.tag()
        ))));
    }

    let summary = credit_summary(store.as_ref(), &profile).await?;

    if json {
        println!("{}", format_json(&summary));
        return Ok(());
    }

    println!("Credit & insurance for {}", profile.full_name);
    println!();
    println!("  Approved credit:      Rs {:.2}", summary.total_approved);
    println!("  Pending applications: {}", summary.pending_applications);
    match summary.performance_score {
        Some(score) => println!("  Performance score:    {:.2}", score),
        None => println!("  Performance score:    N/A"),
    }

    Ok(())
}
