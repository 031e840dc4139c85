//! Grouping features by a string property.

use indexmap::IndexMap;

use crate::models::Feature;

/// Property value to the features carrying it, in first-occurrence order
pub type PropertyGroups<'a> = IndexMap<String, Vec<&'a Feature>>;

/// Group features by the string value of `key`.
///
/// Features without a string value for `key` land in no group. Each group
/// keeps input order.
pub fn group_by_property<'a>(features: &'a [Feature], key: &str) -> PropertyGroups<'a> {
    let mut groups = PropertyGroups::new();

    for feature in features {
        if let Some(value) = feature.string_property(key) {
            groups.entry(value.to_string()).or_default().push(feature);
        }
    }

    groups
}
