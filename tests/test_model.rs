//! Integration test: model artifact loading and prediction

mod common;

use churn_predict::error::ChurnError;
use churn_predict::features::{FeatureRecord, PredictionRequest};
use churn_predict::model::ChurnModel;

fn example_request() -> PredictionRequest {
    serde_json::from_value(common::example_request_body()).unwrap()
}

#[test]
fn test_load_missing_artifact_fails() {
    let err = ChurnModel::load("/nonexistent/churn_model.json").unwrap_err();
    assert!(matches!(err, ChurnError::Artifact(_)));
}

#[test]
fn test_load_corrupt_artifact_fails() {
    let dir = std::env::temp_dir().join("churn-predict-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("corrupt.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ChurnModel::load(&path).unwrap_err();
    assert!(matches!(err, ChurnError::Artifact(_)));
}

#[test]
fn test_load_rejects_schema_drift() {
    // Reorder two columns on disk; the loader must refuse to serve
    let mut artifact = common::fixture_artifact_json();
    artifact["columns"].as_array_mut().unwrap().swap(0, 1);

    let dir = std::env::temp_dir().join("churn-predict-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("drifted.json");
    std::fs::write(&path, artifact.to_string()).unwrap();

    let err = ChurnModel::load(&path).unwrap_err();
    assert!(matches!(err, ChurnError::Artifact(_)));
}

#[test]
fn test_load_rejects_feature_width_mismatch() {
    let mut artifact = common::fixture_artifact_json();
    artifact["forest"]["n_features"] = serde_json::json!(13);

    let dir = std::env::temp_dir().join("churn-predict-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("narrow.json");
    std::fs::write(&path, artifact.to_string()).unwrap();

    assert!(ChurnModel::load(&path).is_err());
}

#[test]
fn test_predict_worked_example() {
    let path = common::write_fixture_artifact("model_example.json");
    let model = ChurnModel::load(&path).unwrap();

    let record = FeatureRecord::assemble(&example_request());
    // engagement 3.0 and high fee both vote churn; long absence does not
    assert_eq!(model.predict(&[record]).unwrap(), vec![1]);
}

#[test]
fn test_predict_low_risk_subscriber() {
    let path = common::write_fixture_artifact("model_low_risk.json");
    let model = ChurnModel::load(&path).unwrap();

    let mut request = example_request();
    request.monthly_fee = 8.99;
    request.last_login_days = 2;
    request.watch_hours = 18.0;

    let record = FeatureRecord::assemble(&request);
    assert_eq!(model.predict(&[record]).unwrap(), vec![0]);
}

#[test]
fn test_predict_unknown_category_still_labels() {
    let path = common::write_fixture_artifact("model_unknown_cat.json");
    let model = ChurnModel::load(&path).unwrap();

    let mut request = example_request();
    request.favorite_genre = "Documentary".to_string();

    let record = FeatureRecord::assemble(&request);
    let labels = model.predict(&[record]).unwrap();
    assert!(labels[0] == 0 || labels[0] == 1);
}

#[test]
fn test_predict_batch_one_label_per_row() {
    let path = common::write_fixture_artifact("model_batch.json");
    let model = ChurnModel::load(&path).unwrap();

    let a = FeatureRecord::assemble(&example_request());
    let b = a.clone();
    let labels = model.predict(&[a, b]).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0], labels[1]);
}
