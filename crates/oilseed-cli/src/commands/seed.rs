// crates/oilseed-cli/src/commands/seed.rs
//
// `oilseed seed`: populate the local store with demo rows: one profile
// per role family, plantings, inventory, a warehouse, market prices, a
// credit facility, and the BATCH-SOY-2024-001 custody chain.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tabled::Tabled;
use uuid::Uuid;

use oilseed_core::advisory::{Advisory, AdvisoryType, Priority};
use oilseed_core::credit::{CreditFacility, FacilityStatus, FacilityType};
use oilseed_core::crop::{Crop, CropStatus, CropType};
use oilseed_core::inventory::{InventoryLot, InventoryStatus, Warehouse, WarehouseStatus};
use oilseed_core::market::MarketPrice;
use oilseed_core::profile::{Location, Profile, UserRole};
use oilseed_core::trace::Stage;
use oilseed_core::traits::RecordStore;
use oilseed_trace::{ChainWriter, NewChainEvent};

use crate::config::CliConfig;
use crate::output::format_table;

#[derive(Tabled)]
struct ProfileRow {
    role: &'static str,
    name: String,
    id: Uuid,
}

/// Run the seed command.
pub async fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(config)?;

    let farmer = Profile::new(UserRole::Farmer, "Asha Patel", None);
    let fpo = Profile::new(UserRole::Fpo, "Malwa Oilseed FPO", Some("Malwa Oilseed FPO"));
    let processor = Profile::new(UserRole::Processor, "Vidarbha Oils", Some("Vidarbha Oils Pvt Ltd"));
    let policymaker = Profile::new(UserRole::Policymaker, "Directorate of Oilseeds", None);
    for profile in [&farmer, &fpo, &processor, &policymaker] {
        store.insert_profile(profile).await?;
    }

    seed_rows(store.as_ref(), &farmer, &fpo).await?;
    seed_batch(store.clone(), &farmer, &fpo, &processor).await?;

    let rows = vec![
        ProfileRow {
            role: farmer.role.tag(),
            name: farmer.full_name.clone(),
            id: farmer.id,
        },
        ProfileRow {
            role: fpo.role.tag(),
            name: fpo.full_name.clone(),
            id: fpo.id,
        },
        ProfileRow {
            role: processor.role.tag(),
            name: processor.full_name.clone(),
            id: processor.id,
        },
        ProfileRow {
            role: policymaker.role.tag(),
            name: policymaker.full_name.clone(),
            id: policymaker.id,
        },
    ];
    println!("{}", format_table(&rows));
    println!();
    println!("Seeded demo data. Try: oilseed trace BATCH-SOY-2024-001");

    Ok(())
}

async fn seed_rows(
    store: &dyn RecordStore,
    farmer: &Profile,
    fpo: &Profile,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now();
    let indore = Location {
        district: "Indore".to_string(),
        state: "Madhya Pradesh".to_string(),
    };

    store
        .insert_crop(&Crop {
            id: Uuid::now_v7(),
            farmer_id: farmer.id,
            crop_type: CropType::Soybean,
            area_hectares: 2.5,
            planting_date: (now - Duration::days(90)).date_naive(),
            expected_harvest_date: (now + Duration::days(30)).date_naive(),
            actual_harvest_date: None,
            status: CropStatus::Growing,
            location: Some(indore.clone()),
            created_at: now,
            updated_at: now,
        })
        .await?;

    store
        .insert_advisory(&Advisory {
            id: Uuid::now_v7(),
            advisory_type: AdvisoryType::Weather,
            target_audience: None,
            title: "Heavy rain expected in Malwa belt".to_string(),
            content: "Delay harvest operations by 48 hours.".to_string(),
            priority: Priority::High,
            valid_until: Some(now + Duration::days(2)),
            created_at: now,
        })
        .await?;

    let warehouse_id = Uuid::now_v7();
    store
        .insert_warehouse(&Warehouse {
            id: warehouse_id,
            name: "Indore Agro Storage".to_string(),
            operator_id: Some(fpo.id),
            location: Some(indore.clone()),
            capacity_tonnes: 1000.0,
            current_utilization_tonnes: 350.0,
            status: WarehouseStatus::Active,
            created_at: now,
            updated_at: now,
        })
        .await?;

    store
        .insert_inventory(&InventoryLot {
            id: Uuid::now_v7(),
            crop_id: None,
            owner_id: fpo.id,
            warehouse_id: Some(warehouse_id),
            crop_type: CropType::Soybean,
            quantity_kg: 1200.0,
            quality_grade: Some("A".to_string()),
            procurement_date: now.date_naive(),
            status: InventoryStatus::Stored,
            price_per_kg: Some(46.5),
            created_at: now,
            updated_at: now,
        })
        .await?;

    store
        .insert_market_price(&MarketPrice {
            id: Uuid::now_v7(),
            crop_type: CropType::Soybean,
            market_location: "Indore Mandi".to_string(),
            price_per_kg: 46.5,
            date: now.date_naive(),
            is_prediction: false,
            confidence_score: None,
            source: "agmarknet".to_string(),
            created_at: now,
        })
        .await?;

    store
        .insert_credit_facility(&CreditFacility {
            id: Uuid::now_v7(),
            farmer_id: farmer.id,
            facility_type: FacilityType::Credit,
            provider: "Gramin Bank".to_string(),
            amount: 50_000.0,
            status: FacilityStatus::Applied,
            application_date: now.date_naive(),
            approval_date: None,
            performance_score: Some(0.78),
            created_at: now,
            updated_at: now,
        })
        .await?;

    Ok(())
}

/// Walk BATCH-SOY-2024-001 through farm, procurement, and storage.
async fn seed_batch(
    store: Arc<dyn RecordStore>,
    farmer: &Profile,
    fpo: &Profile,
    processor: &Profile,
) -> Result<(), Box<dyn std::error::Error>> {
    let writer = ChainWriter::new(store);
    let base = Utc::now() - Duration::days(2);

    let mut harvest = NewChainEvent::new(
        "BATCH-SOY-2024-001",
        Stage::Farm,
        "Harvested 1200 kg soybean",
    );
    harvest.timestamp = Some(base);
    harvest.location = Some(Location {
        district: "Indore".to_string(),
        state: "Madhya Pradesh".to_string(),
    });
    writer.append(farmer, harvest).await?;

    let mut procured = NewChainEvent::new(
        "BATCH-SOY-2024-001",
        Stage::Procurement,
        "Procured at mandi rate",
    );
    procured.timestamp = Some(base + Duration::hours(8));
    procured
        .metadata
        .insert("quality_grade".to_string(), "A".to_string());
    writer.append(fpo, procured).await?;

    let mut stored = NewChainEvent::new(
        "BATCH-SOY-2024-001",
        Stage::Storage,
        "Moved into cold storage",
    );
    stored.timestamp = Some(base + Duration::days(1));
    writer.append(processor, stored).await?;

    Ok(())
}
