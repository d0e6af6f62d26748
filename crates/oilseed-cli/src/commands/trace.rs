// crates/oilseed-cli/src/commands/trace.rs
//
// `oilseed trace <batch-id>`: look up a batch's custody chain and print
// it with its integrity status.

use tabled::Tabled;

use oilseed_trace::{entries, ChainReader, ChainResult};

use crate::config::CliConfig;
use crate::output::{format_json, format_table};

#[derive(Tabled)]
struct ChainRow {
    stage: &'static str,
    action: String,
    actor: String,
    role: &'static str,
    timestamp: String,
    location: String,
    hash: String,
}

/// Run the trace command.
pub async fn run(
    config: &CliConfig,
    batch_id: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;
    let reader = ChainReader::new(store);

    match reader.lookup(batch_id).await? {
        ChainResult::NotFound => {
            println!("No records found for batch {}", batch_id.trim());
        }
        ChainResult::Found {
            records,
            verified,
            report,
        } => {
            let display = entries(&records);
            if json {
                println!("{}", format_json(&display));
            } else {
                let rows: Vec<ChainRow> = display
                    .iter()
                    .map(|entry| ChainRow {
                        stage: entry.stage.tag(),
                        action: entry.action.clone(),
                        actor: entry.actor_name.clone(),
                        role: entry.actor_role.tag(),
                        timestamp: entry.timestamp.to_rfc3339(),
                        location: entry.location.clone().unwrap_or_default(),
                        hash: format!("{}...", entry.hash_prefix),
                    })
                    .collect();
                println!("{}", format_table(&rows));
            }

            println!();
            if verified {
                println!(
                    "Batch {}: {} records tracked | chain verified",
                    batch_id.trim(),
                    records.len()
                );
            } else {
                println!(
                    "Batch {}: {} records tracked | WARNING: chain integrity check FAILED",
                    batch_id.trim(),
                    records.len()
                );
                for brk in &report.link_breaks {
                    println!(
                        "  broken link at record {}: expected previous hash {:?}, found {:?}",
                        brk.index, brk.expected, brk.found
                    );
                }
                for id in &report.hash_mismatches {
                    println!("  record {} does not match its stored hash", id);
                }
            }
        }
    }

    Ok(())
}
