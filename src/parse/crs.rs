//! CRS member extraction. Never fails; unusable shapes give an empty CRS.

use serde_json::Value;

use crate::models::Crs;

pub fn extract_crs(value: &Value) -> Crs {
    let mut crs = Crs::default();

    let Some(properties) = value.get("properties").and_then(Value::as_object) else {
        return crs;
    };
    let read = |key: &str| {
        properties
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    match value.get("type").and_then(Value::as_str) {
        Some("name") => crs.name = read("name"),
        Some("link") => {
            crs.href = read("href");
            crs.link_type = read("type");
        }
        _ => {}
    }

    crs
}
