//! Shared fixtures: a tiny but fully valid gbtree artifact plus matching
//! metadata, written out the way startup lays them down in the data
//! directory.

use std::path::Path;

use serde_json::{json, Value};

/// Column schema of the penguin training frame after one-hot encoding.
pub fn feature_columns() -> Vec<&'static str> {
    vec![
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "year",
        "island_Biscoe",
        "island_Dream",
        "island_Torgersen",
        "sex_female",
        "sex_male",
    ]
}

/// A three-class gbtree model over the ten penguin columns. Tree `k` adds
/// +2.0 to class `k`'s margin when one-hot island column `5 + k` is set, so
/// the predicted class follows the island: Biscoe → 0, Dream → 1,
/// Torgersen → 2.
pub fn model_json() -> Value {
    let tree = |island_column: u32| {
        json!({
            "left_children": [1, -1, -1],
            "right_children": [2, -1, -1],
            "split_indices": [island_column, 0, 0],
            "split_conditions": [0.5, -0.5, 2.0],
        })
    };
    json!({
        "learner": {
            "gradient_booster": {
                "name": "gbtree",
                "model": {
                    "trees": [tree(5), tree(6), tree(7)],
                    "tree_info": [0, 1, 2],
                },
            },
            "learner_model_param": {
                "base_score": "5E-1",
                "num_class": "3",
                "num_feature": "10",
            },
        },
        "version": [2, 0, 0],
    })
}

/// Write all three startup files into `dir`.
pub fn write_artifacts(dir: &Path, labels: &[&str]) {
    std::fs::write(
        dir.join("model.json"),
        serde_json::to_vec(&model_json()).expect("model fixture serializes"),
    )
    .expect("write model.json");
    std::fs::write(
        dir.join("preprocess_meta.json"),
        serde_json::to_vec(&json!({ "feature_columns": feature_columns() }))
            .expect("meta fixture serializes"),
    )
    .expect("write preprocess_meta.json");
    std::fs::write(
        dir.join("label_classes.json"),
        serde_json::to_vec(&json!(labels)).expect("label fixture serializes"),
    )
    .expect("write label_classes.json");
}
