// crates/oilseed-views/src/dashboard.rs
//
// Per-role dashboard stats. The three role families see different cards:
// farmers see their plantings and credit, operators (FPO/processor/
// retailer) see inventory value and shipments, oversight roles
// (policymaker/admin) see platform-wide counts. All families share the
// recent-advisories panel.

use serde::{Deserialize, Serialize};
use tracing::debug;

use oilseed_core::advisory::Advisory;
use oilseed_core::credit::FacilityStatus;
use oilseed_core::error::PlatformError;
use oilseed_core::logistics::ShipmentStatus;
use oilseed_core::profile::{Profile, UserRole};
use oilseed_core::traits::RecordStore;

/// How many advisories the dashboard panel shows.
pub const RECENT_ADVISORY_LIMIT: usize = 5;

/// Stats for one role family's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DashboardStats {
    /// Farmer cards: own plantings, pending applications.
    Farmer {
        total_crops: usize,
        pending_credit: usize,
        recent_advisories: Vec<Advisory>,
    },
    /// FPO/processor/retailer cards: own stock value, live shipments.
    Operator {
        inventory_value: f64,
        shipments_in_transit: usize,
        recent_advisories: Vec<Advisory>,
    },
    /// Policymaker/admin cards: platform-wide counts.
    Oversight {
        total_crops: usize,
        inventory_records: usize,
        recent_advisories: Vec<Advisory>,
    },
}

/// Compute the dashboard for the given caller.
///
/// Scoped reads use the caller's id from the profile argument; the
/// advisories panel is unscoped for every role.
pub async fn dashboard_for(
    store: &dyn RecordStore,
    profile: &Profile,
) -> Result<DashboardStats, PlatformError> {
    debug!(role = profile.role.tag(), "computing dashboard");
    let recent_advisories = store.recent_advisories(RECENT_ADVISORY_LIMIT).await?;

    match profile.role {
        UserRole::Farmer => {
            let crops = store.crops_for_farmer(&profile.id).await?;
            let facilities = store.credit_for_farmer(&profile.id).await?;
            let pending_credit = facilities
                .iter()
                .filter(|f| f.status == FacilityStatus::Applied)
                .count();
            Ok(DashboardStats::Farmer {
                total_crops: crops.len(),
                pending_credit,
                recent_advisories,
            })
        }
        UserRole::Fpo | UserRole::Processor | UserRole::Retailer => {
            let lots = store.inventory_for_owner(&profile.id).await?;
            let inventory_value = lots.iter().map(|lot| lot.value()).sum();
            let in_transit = store
                .shipments_by_status(ShipmentStatus::InTransit)
                .await?
                .len();
            Ok(DashboardStats::Operator {
                inventory_value,
                shipments_in_transit: in_transit,
                recent_advisories,
            })
        }
        UserRole::Policymaker | UserRole::Admin => {
            let total_crops = store.all_crops().await?.len();
            let inventory_records = store.all_inventory().await?.len();
            Ok(DashboardStats::Oversight {
                total_crops,
                inventory_records,
                recent_advisories,
            })
        }
    }
}
