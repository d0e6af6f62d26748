// crates/oilseed-core/src/market.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crop::CropType;

/// One market price observation or model prediction.
///
/// `is_prediction` separates observed mandi prices from forecast rows;
/// the analytics aggregation averages observed rows only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPrice {
    pub id: Uuid,
    pub crop_type: CropType,
    pub market_location: String,
    pub price_per_kg: f64,
    pub date: NaiveDate,
    pub is_prediction: bool,
    pub confidence_score: Option<f64>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}
