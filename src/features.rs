//! Request schema and feature derivation
//!
//! Mirrors the training-time feature engineering exactly: the derived
//! columns are computed with the same formulas the model was fit with,
//! and [`FeatureRecord::COLUMNS`] pins the training column order at
//! compile time. Any drift between that order and the artifact's schema
//! would mispredict silently, so the artifact loader cross-checks it
//! once at startup.

use serde::{Deserialize, Serialize};

/// Raw subscriber attributes accepted by the predict endpoint.
///
/// Categorical fields are free-form and numeric fields carry no range
/// validation; negative values pass through untouched, matching the
/// training data assumptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: i64,
    pub watch_hours: f64,
    pub last_login_days: i64,
    pub monthly_fee: f64,
    pub gender: String,
    pub subscription_type: String,
    pub device: String,
    pub region: String,
    pub favorite_genre: String,
    pub profiles_count: i64,
}

/// Features computed per request from the raw numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    pub engagement_score: f64,
    pub low_activity_flag: i64,
    pub high_fee_flag: i64,
    pub multiprofile: i64,
}

/// Monthly fee above which a subscriber counts as high-fee (strict).
const HIGH_FEE_THRESHOLD: f64 = 13.99;

/// Days since last login above which activity counts as low (strict).
const LOW_ACTIVITY_DAYS: i64 = 30;

/// Compute the derived features with the training-time formulas.
///
/// Pure and total over the numeric domain: there are no error
/// conditions. The division guard substitutes 1 for the denominator
/// only; the low-activity flag is evaluated on the original
/// `last_login_days`, even when it is 0.
pub fn derive(
    watch_hours: f64,
    last_login_days: i64,
    monthly_fee: f64,
    profiles_count: i64,
) -> DerivedFeatures {
    let effective_days = if last_login_days == 0 { 1 } else { last_login_days };

    DerivedFeatures {
        engagement_score: watch_hours / effective_days as f64 + 1.0,
        low_activity_flag: (last_login_days > LOW_ACTIVITY_DAYS) as i64,
        high_fee_flag: (monthly_fee > HIGH_FEE_THRESHOLD) as i64,
        multiprofile: (profiles_count > 1) as i64,
    }
}

/// One value of a [`FeatureRecord`] column, before categorical encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

/// The fixed-order row presented to the model for one prediction:
/// the 10 raw fields plus the 4 derived features, 14 columns total.
///
/// Request-scoped: assembled on receipt, dropped after the response.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub age: i64,
    pub watch_hours: f64,
    pub last_login_days: i64,
    pub monthly_fee: f64,
    pub profiles_count: i64,
    pub gender: String,
    pub subscription_type: String,
    pub device: String,
    pub region: String,
    pub favorite_genre: String,
    pub engagement_score: f64,
    pub low_activity_flag: i64,
    pub high_fee_flag: i64,
    pub multiprofile: i64,
}

impl FeatureRecord {
    /// Column order the model was fit on. Order-sensitive: the artifact's
    /// recorded schema must match this list exactly.
    pub const COLUMNS: [&'static str; 14] = [
        "age",
        "watch_hours",
        "last_login_days",
        "monthly_fee",
        "profiles_count",
        "gender",
        "subscription_type",
        "device",
        "region",
        "favorite_genre",
        "engagement_score",
        "low_activity_flag",
        "high_fee_flag",
        "multiprofile",
    ];

    /// Build the full record for one request, deriving the engineered
    /// features from the raw numeric inputs.
    pub fn assemble(request: &PredictionRequest) -> Self {
        let derived = derive(
            request.watch_hours,
            request.last_login_days,
            request.monthly_fee,
            request.profiles_count,
        );

        Self {
            age: request.age,
            watch_hours: request.watch_hours,
            last_login_days: request.last_login_days,
            monthly_fee: request.monthly_fee,
            profiles_count: request.profiles_count,
            gender: request.gender.clone(),
            subscription_type: request.subscription_type.clone(),
            device: request.device.clone(),
            region: request.region.clone(),
            favorite_genre: request.favorite_genre.clone(),
            engagement_score: derived.engagement_score,
            low_activity_flag: derived.low_activity_flag,
            high_fee_flag: derived.high_fee_flag,
            multiprofile: derived.multiprofile,
        }
    }

    /// Look up a column by name. Returns `None` for a name outside
    /// [`Self::COLUMNS`].
    pub fn value(&self, column: &str) -> Option<ColumnValue<'_>> {
        let value = match column {
            "age" => ColumnValue::Numeric(self.age as f64),
            "watch_hours" => ColumnValue::Numeric(self.watch_hours),
            "last_login_days" => ColumnValue::Numeric(self.last_login_days as f64),
            "monthly_fee" => ColumnValue::Numeric(self.monthly_fee),
            "profiles_count" => ColumnValue::Numeric(self.profiles_count as f64),
            "gender" => ColumnValue::Categorical(&self.gender),
            "subscription_type" => ColumnValue::Categorical(&self.subscription_type),
            "device" => ColumnValue::Categorical(&self.device),
            "region" => ColumnValue::Categorical(&self.region),
            "favorite_genre" => ColumnValue::Categorical(&self.favorite_genre),
            "engagement_score" => ColumnValue::Numeric(self.engagement_score),
            "low_activity_flag" => ColumnValue::Numeric(self.low_activity_flag as f64),
            "high_fee_flag" => ColumnValue::Numeric(self.high_fee_flag as f64),
            "multiprofile" => ColumnValue::Numeric(self.multiprofile as f64),
            _ => return None,
        };
        Some(value)
    }
}
