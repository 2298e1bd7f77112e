// File: crates/chart-core/src/spec.rs
// Summary: Typed declarative chart specification (Vega-Lite v4 layered spec).
// Notes:
// - Serialises to the JSON shape vega-embed expects in "vega-lite" mode.
// - Marks are a tagged enum so each layer carries only the properties its mark type accepts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::axis::AxisKind;
use crate::error::Result;
use crate::series::FlatRecord;

/// Schema URL of the grammar version whose `selection` syntax the layers use.
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v4.json";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub autosize: Autosize,
    pub config: StyleConfig,
    pub data: InlineData,
    pub layer: Vec<Layer>,
}

impl ChartSpec {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Layers whose mark matches `kind` ("line", "point", "text", "rule").
    pub fn layers_of(&self, kind: &str) -> impl Iterator<Item = &Layer> + '_ {
        let kind = kind.to_string();
        self.layer.iter().filter(move |l| l.mark.kind() == kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutosizeType {
    Pad,
    Fit,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutosizeContains {
    Content,
    Padding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Autosize {
    #[serde(rename = "type")]
    pub kind: AutosizeType,
    pub contains: AutosizeContains,
    pub resize: bool,
}

impl Autosize {
    /// Scale the plot to fill the declared size, keeping padding inside it.
    pub const fn fit() -> Self {
        Self { kind: AutosizeType::Fit, contains: AutosizeContains::Padding, resize: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleConfig {
    pub axis: AxisConfig,
    pub text: TextConfig,
    pub legend: LegendConfig,
}

impl StyleConfig {
    /// Same font size for axis labels, legend labels/title and text marks.
    pub fn with_font_size(font_size: f64) -> Self {
        Self {
            axis: AxisConfig { label_font_size: font_size },
            text: TextConfig { font_size },
            legend: LegendConfig { label_font_size: font_size, title_font_size: font_size },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub label_font_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub label_font_size: f64,
    pub title_font_size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineData {
    pub values: Vec<FlatRecord>,
}

/// One rendering pass: a mark, its encoding, an optional filter and any
/// selections it defines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    pub mark: Mark,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub selection: BTreeMap<String, Selection>,
    pub encoding: Encoding,
}

impl Layer {
    pub fn new(mark: Mark, encoding: Encoding) -> Self {
        Self { transform: Vec::new(), mark, selection: BTreeMap::new(), encoding }
    }

    /// Only keep rows in the named selection.
    pub fn filtered_by(mut self, selection: &str) -> Self {
        self.transform.push(Transform::selection_filter(selection));
        self
    }

    pub fn with_selection(mut self, name: &str, selection: Selection) -> Self {
        self.selection.insert(name.to_string(), selection);
        self
    }

    /// Names of selections this layer filters on.
    pub fn filter_selections(&self) -> impl Iterator<Item = &str> {
        self.transform.iter().map(|t| t.filter.selection.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transform {
    pub filter: SelectionRef,
}

impl Transform {
    pub fn selection_filter(name: &str) -> Self {
        Self { filter: SelectionRef { selection: name.to_string() } }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionRef {
    pub selection: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    Line {
        clip: bool,
    },
    Point {},
    Text {
        align: TextAlign,
        dx: f64,
        dy: f64,
        color: String,
    },
    Rule {
        color: String,
    },
}

impl Mark {
    pub fn kind(&self) -> &'static str {
        match self {
            Mark::Line { .. } => "line",
            Mark::Point {} => "point",
            Mark::Text { .. } => "text",
            Mark::Rule { .. } => "rule",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<ConditionalValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FieldChannel>,
}

/// Field mapped to a position or text channel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldChannel {
    pub fn new(field: impl Into<String>, kind: AxisKind) -> Self {
        Self { field: field.into(), kind, title: None, format: None }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn formatted(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub legend: Legend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendOrient {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub values: Vec<String>,
    pub orient: LegendOrient,
    pub offset: i32,
}

/// `value` normally, `condition.value` for rows in the selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConditionalValue {
    pub value: f64,
    pub condition: SelectionCondition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionCondition {
    pub selection: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Single,
    Multi,
    Interval,
}

/// What an empty selection matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionEmpty {
    All,
    None,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub kind: SelectionType,
    pub on: String,
    pub nearest: bool,
    pub empty: SelectionEmpty,
    pub encodings: Vec<String>,
}

impl Selection {
    /// Single point nearest to the pointer along x; nothing selected off-data.
    pub fn nearest_on_hover() -> Self {
        Self {
            kind: SelectionType::Single,
            on: "mouseover".to_string(),
            nearest: true,
            empty: SelectionEmpty::None,
            encodings: vec!["x".to_string()],
        }
    }
}
