//! `(name, value)` pairs to HAR name/value lists.

use crate::config::EmptyListStyle;

use super::model::{NameValue, NameValues};

pub fn name_value(pairs: &[(String, String)], empty: EmptyListStyle) -> NameValues {
    if pairs.is_empty() && empty == EmptyListStyle::String {
        return NameValues::Text(String::new());
    }
    NameValues::Items(
        pairs
            .iter()
            .map(|(name, value)| NameValue {
                name: name.clone(),
                value: value.clone(),
            })
            .collect(),
    )
}
