// File: crates/chart-core/src/axis.rs
// Summary: Axis value kinds and the resolved axis (field, kind, title).

use serde::{Deserialize, Serialize};

/// How the engine should interpret an axis field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    #[default]
    Quantitative,
    Ordinal,
    Nominal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub field: &'static str,
    pub label: String,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(field: &'static str, label: impl Into<String>, kind: AxisKind) -> Self {
        Self { field, label: label.into(), kind }
    }
}
