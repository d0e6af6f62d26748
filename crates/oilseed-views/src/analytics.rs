// crates/oilseed-views/src/analytics.rs
//
// Platform-wide analytics for the oversight roles. Single-pass sums over
// small fetched result sets; the heavy lifting stays in the store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use oilseed_core::error::PlatformError;
use oilseed_core::traits::RecordStore;

/// How many observed market price rows feed the average.
const PRICE_SAMPLE_LIMIT: usize = 100;

/// Headline metrics for the analytics view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsMetrics {
    /// Total planted area across all crops, in hectares.
    pub total_production_hectares: f64,
    /// Total procured stock across all inventory lots, in kilograms.
    pub total_procurement_kg: f64,
    /// Mean of the most recent observed (non-prediction) market prices.
    /// Zero when no observations exist.
    pub average_price_per_kg: f64,
    /// Aggregate warehouse utilization, 0..=100. Zero when the platform
    /// has no capacity registered.
    pub warehouse_utilization_pct: f64,
}

/// Compute platform-wide metrics.
pub async fn platform_metrics(
    store: &dyn RecordStore,
) -> Result<AnalyticsMetrics, PlatformError> {
    let crops = store.all_crops().await?;
    let lots = store.all_inventory().await?;
    let warehouses = store.warehouses().await?;
    let prices = store.observed_prices(PRICE_SAMPLE_LIMIT).await?;
    debug!(
        crops = crops.len(),
        lots = lots.len(),
        warehouses = warehouses.len(),
        prices = prices.len(),
        "computing platform metrics"
    );

    let total_production_hectares = crops.iter().map(|c| c.area_hectares).sum();
    let total_procurement_kg = lots.iter().map(|l| l.quantity_kg).sum();

    let average_price_per_kg = if prices.is_empty() {
        0.0
    } else {
        prices.iter().map(|p| p.price_per_kg).sum::<f64>() / prices.len() as f64
    };

    let total_capacity: f64 = warehouses.iter().map(|w| w.capacity_tonnes).sum();
    let total_utilization: f64 = warehouses
        .iter()
        .map(|w| w.current_utilization_tonnes)
        .sum();
    let warehouse_utilization_pct = if total_capacity > 0.0 {
        (total_utilization / total_capacity) * 100.0
    } else {
        0.0
    };

    Ok(AnalyticsMetrics {
        total_production_hectares,
        total_procurement_kg,
        average_price_per_kg,
        warehouse_utilization_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use oilseed_core::crop::CropType;
    use oilseed_core::inventory::{Warehouse, WarehouseStatus};
    use oilseed_core::market::MarketPrice;
    use oilseed_store::MemoryStore;
    use uuid::Uuid;

    fn make_price(price_per_kg: f64, is_prediction: bool) -> MarketPrice {
        let now = Utc::now();
        MarketPrice {
            id: Uuid::now_v7(),
            crop_type: CropType::Soybean,
            market_location: "Indore Mandi".to_string(),
            price_per_kg,
            date: now.date_naive(),
            is_prediction,
            confidence_score: is_prediction.then_some(0.8),
            source: "agmarknet".to_string(),
            created_at: now,
        }
    }

    fn make_warehouse(capacity: f64, utilization: f64) -> Warehouse {
        let now = Utc::now();
        Warehouse {
            id: Uuid::now_v7(),
            name: "Indore Agro Storage".to_string(),
            operator_id: None,
            location: None,
            capacity_tonnes: capacity,
            current_utilization_tonnes: utilization,
            status: WarehouseStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_empty_platform_yields_zero_metrics() {
        let store = MemoryStore::new();
        let metrics = platform_metrics(&store).await.unwrap();
        assert_eq!(
            metrics,
            AnalyticsMetrics {
                total_production_hectares: 0.0,
                total_procurement_kg: 0.0,
                average_price_per_kg: 0.0,
                warehouse_utilization_pct: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn test_average_price_ignores_predictions() {
        let store = MemoryStore::new();
        store.insert_market_price(&make_price(40.0, false)).await.unwrap();
        store.insert_market_price(&make_price(50.0, false)).await.unwrap();
        store.insert_market_price(&make_price(900.0, true)).await.unwrap();

        let metrics = platform_metrics(&store).await.unwrap();
        assert_eq!(metrics.average_price_per_kg, 45.0);
    }

    #[tokio::test]
    async fn test_warehouse_utilization() {
        let store = MemoryStore::new();
        store
            .insert_warehouse(&make_warehouse(1000.0, 300.0))
            .await
            .unwrap();
        store
            .insert_warehouse(&make_warehouse(1000.0, 500.0))
            .await
            .unwrap();

        let metrics = platform_metrics(&store).await.unwrap();
        assert_eq!(metrics.warehouse_utilization_pct, 40.0);
    }
}
