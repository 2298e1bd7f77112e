// File: crates/chart-core/src/options.rs
// Summary: Caller-facing display options and their default-then-override resolution.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisKind};
use crate::types::{Size, DEFAULT_FONT_SIZE};

/// Display options as supplied by a caller. Every field is optional; unset
/// fields take the defaults from [`VisOptions::defaults`].
///
/// Keys are camelCase on the wire (`xLabel`, `fontSize`, `zoomToFit`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_type: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_type: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Accepted for compatibility; not applied to the spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_domain: Option<[f64; 2]>,
    /// Accepted for compatibility; not applied to the spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_domain: Option<[f64; 2]>,
    /// Accepted for compatibility; not applied to the spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_to_fit: Option<bool>,
}

impl VisOptions {
    /// The documented defaults. Width and height stay unset: they default to
    /// the container's measured size at build time.
    pub fn defaults() -> Self {
        Self {
            width: None,
            height: None,
            x_label: Some("x".to_string()),
            y_label: Some("y".to_string()),
            x_type: Some(AxisKind::Quantitative),
            y_type: Some(AxisKind::Quantitative),
            font_size: Some(DEFAULT_FONT_SIZE),
            x_axis_domain: None,
            y_axis_domain: None,
            zoom_to_fit: Some(false),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    pub fn with_kinds(mut self, x: AxisKind, y: AxisKind) -> Self {
        self.x_type = Some(x);
        self.y_type = Some(y);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Shallow merge: every field set on `self` wins, the rest come from `base`.
    pub fn merged_over(&self, base: &VisOptions) -> VisOptions {
        VisOptions {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            x_label: self.x_label.clone().or_else(|| base.x_label.clone()),
            y_label: self.y_label.clone().or_else(|| base.y_label.clone()),
            x_type: self.x_type.or(base.x_type),
            y_type: self.y_type.or(base.y_type),
            font_size: self.font_size.or(base.font_size),
            x_axis_domain: self.x_axis_domain.or(base.x_axis_domain),
            y_axis_domain: self.y_axis_domain.or(base.y_axis_domain),
            zoom_to_fit: self.zoom_to_fit.or(base.zoom_to_fit),
        }
    }

    /// Merge over [`VisOptions::defaults`] and freeze the result.
    pub fn resolve(&self) -> ResolvedOptions {
        let m = self.merged_over(&Self::defaults());
        let x = Axis::new(
            "x",
            m.x_label.unwrap_or_else(|| "x".to_string()),
            m.x_type.unwrap_or_default(),
        );
        let y = Axis::new(
            "y",
            m.y_label.unwrap_or_else(|| "y".to_string()),
            m.y_type.unwrap_or_default(),
        );
        ResolvedOptions {
            width: m.width,
            height: m.height,
            x_axis: x,
            y_axis: y,
            font_size: m.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            x_axis_domain: m.x_axis_domain,
            y_axis_domain: m.y_axis_domain,
            zoom_to_fit: m.zoom_to_fit.unwrap_or(false),
        }
    }
}

/// Effective options after the default merge. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    width: Option<u32>,
    height: Option<u32>,
    x_axis: Axis,
    y_axis: Axis,
    font_size: f64,
    x_axis_domain: Option<[f64; 2]>,
    y_axis_domain: Option<[f64; 2]>,
    zoom_to_fit: bool,
}

impl ResolvedOptions {
    /// Chart size: explicit width/height win over the measured container size.
    /// A zero option counts as unset.
    pub fn size_within(&self, container: Size) -> Size {
        let pick = |opt: Option<u32>, measured: u32| opt.filter(|v| *v > 0).unwrap_or(measured);
        Size::new(pick(self.width, container.width), pick(self.height, container.height))
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn x_label(&self) -> &str { &self.x_axis.label }
    pub fn y_label(&self) -> &str { &self.y_axis.label }
    pub fn x_type(&self) -> AxisKind { self.x_axis.kind }
    pub fn y_type(&self) -> AxisKind { self.y_axis.kind }
    pub fn font_size(&self) -> f64 { self.font_size }
    pub fn x_axis_domain(&self) -> Option<[f64; 2]> { self.x_axis_domain }
    pub fn y_axis_domain(&self) -> Option<[f64; 2]> { self.y_axis_domain }
    pub fn zoom_to_fit(&self) -> bool { self.zoom_to_fit }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        VisOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_caller_values() {
        let caller = VisOptions { font_size: Some(14.0), ..Default::default() };
        let base = VisOptions::defaults().with_font_size(9.0).with_size(10, 20);
        let m = caller.merged_over(&base);
        assert_eq!(m.font_size, Some(14.0));
        assert_eq!(m.width, Some(10));
        assert_eq!(m.x_label.as_deref(), Some("x"));
    }

    #[test]
    fn zero_size_option_falls_back_to_container() {
        let r = VisOptions::default().with_size(0, 300).resolve();
        assert_eq!(r.size_within(Size::new(640, 480)), Size::new(640, 300));
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let o: VisOptions =
            serde_json::from_str(r#"{"xLabel":"time","yType":"ordinal","zoomToFit":true}"#).unwrap();
        assert_eq!(o.x_label.as_deref(), Some("time"));
        assert_eq!(o.y_type, Some(AxisKind::Ordinal));
        assert_eq!(o.zoom_to_fit, Some(true));
        assert!(o.font_size.is_none());
    }
}
