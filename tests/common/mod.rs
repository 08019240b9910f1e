//! Shared fixtures for integration tests

use churn_predict::features::FeatureRecord;
use serde_json::json;
use std::path::PathBuf;

/// Artifact with three stumps: low engagement (below 5), high fee, and
/// long absence each vote churn; majority vote decides.
pub fn fixture_artifact_json() -> serde_json::Value {
    let stump = |feature_idx: usize| {
        json!({
            "root": {
                "Split": {
                    "feature_idx": feature_idx,
                    "threshold": 0.5,
                    "left": {"Leaf": {"value": 0.0}},
                    "right": {"Leaf": {"value": 1.0}},
                }
            }
        })
    };

    json!({
        "columns": FeatureRecord::COLUMNS,
        "encoders": {
            "gender": ["F", "M"],
            "subscription_type": ["Basic", "Premium", "Standard"],
            "device": ["Mobile", "TV", "Tablet"],
            "region": ["EU", "US"],
            "favorite_genre": ["Comedy", "Drama"],
        },
        "forest": {
            "trees": [
                {
                    "root": {
                        "Split": {
                            "feature_idx": 10,
                            "threshold": 5.0,
                            "left": {"Leaf": {"value": 1.0}},
                            "right": {"Leaf": {"value": 0.0}},
                        }
                    }
                },
                stump(12),
                stump(11),
            ],
            "n_features": 14,
        },
    })
}

/// Write the fixture artifact under the system temp dir and return its
/// path. Each test uses a distinct file name so tests can run in
/// parallel.
pub fn write_fixture_artifact(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("churn-predict-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(&fixture_artifact_json()).unwrap();
    std::fs::write(&path, json).unwrap();
    path
}

/// The worked example from the service contract: high fee and two
/// profiles, engagement score 3.0.
pub fn example_request_body() -> serde_json::Value {
    json!({
        "age": 30,
        "watch_hours": 60.0,
        "last_login_days": 30,
        "monthly_fee": 15.99,
        "gender": "F",
        "subscription_type": "Premium",
        "device": "TV",
        "region": "US",
        "favorite_genre": "Drama",
        "profiles_count": 2,
    })
}
