//! One-hot feature encoding against the trained column schema.

use std::collections::HashMap;

use crate::models::PenguinFeatures;

/// Encode one request into a fixed-width vector aligned to `schema`.
///
/// The continuous fields and the year become columns named after the field;
/// each categorical field becomes a single `<field>_<value>` column for the
/// value this request submitted. Reindexing onto `schema` then fills absent
/// columns with zero and drops columns the schema does not know, so the
/// result always has exactly `schema.len()` elements in schema order.
///
/// Total function: there is no error path, and a categorical value the
/// schema never saw at training time simply leaves its one-hot block
/// all-zero.
pub fn encode(features: &PenguinFeatures, schema: &[String]) -> Vec<f32> {
    let mut columns: HashMap<String, f32> = HashMap::new();
    columns.insert("bill_length_mm".into(), features.bill_length_mm);
    columns.insert("bill_depth_mm".into(), features.bill_depth_mm);
    columns.insert("flipper_length_mm".into(), features.flipper_length_mm);
    columns.insert("body_mass_g".into(), features.body_mass_g);
    columns.insert("year".into(), features.year as f32);
    columns.insert(format!("island_{}", features.island.as_str()), 1.0);
    columns.insert(format!("sex_{}", features.sex.as_str()), 1.0);

    schema
        .iter()
        .map(|column| columns.get(column).copied().unwrap_or(0.0))
        .collect()
}
