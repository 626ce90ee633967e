//! Common types used across the dashboard

use serde::{Deserialize, Serialize};

/// A normalized option for select inputs.
///
/// Upstream data arrives either as plain strings or as value/label pairs;
/// normalization happens once, at the data-fetch boundary, so screens only
/// ever see this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabeledOption {
    pub value: String,
    pub label: String,
}

impl LabeledOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// A plain string doubles as both value and label.
    pub fn from_plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

impl From<&str> for LabeledOption {
    fn from(value: &str) -> Self {
        LabeledOption::from_plain(value)
    }
}

impl From<(String, String)> for LabeledOption {
    fn from((value, label): (String, String)) -> Self {
        LabeledOption::new(value, label)
    }
}

/// Normalize a mixed list of plain strings into select options.
pub fn normalize_options<I, S>(values: I) -> Vec<LabeledOption>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|v| LabeledOption::from_plain(v))
        .collect()
}
