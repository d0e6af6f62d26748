// crates/oilseed-cli/src/commands/views.rs
//
// `oilseed views`: print the capability table: which views each role
// may reach.

use tabled::Tabled;

use oilseed_core::capability::views_for;
use oilseed_core::profile::UserRole;

use crate::output::{format_json, format_table};

const ALL_ROLES: &[UserRole] = &[
    UserRole::Farmer,
    UserRole::Fpo,
    UserRole::Processor,
    UserRole::Retailer,
    UserRole::Policymaker,
    UserRole::Admin,
];

#[derive(Tabled, serde::Serialize)]
struct CapabilityRow {
    role: &'static str,
    views: String,
}

/// Run the views command.
pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<CapabilityRow> = ALL_ROLES
        .iter()
        .map(|&role| CapabilityRow {
            role: role.tag(),
            views: views_for(role)
                .iter()
                .map(|v| v.tag())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    if json {
        println!("{}", format_json(&rows));
    } else {
        println!("{}", format_table(&rows));
    }

    Ok(())
}
