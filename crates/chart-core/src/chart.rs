// File: crates/chart-core/src/chart.rs
// Summary: Line chart spec assembly (shared encoding, four layers, sizing) and the async render entry point.

use crate::axis::AxisKind;
use crate::error::Result;
use crate::options::{ResolvedOptions, VisOptions};
use crate::render::{ChartRenderer, Container, EmbedOptions};
use crate::series::SeriesCollection;
use crate::spec::{
    Autosize, ChartSpec, ColorChannel, ConditionalValue, Encoding, FieldChannel, InlineData, Layer,
    Legend, LegendOrient, Mark, Selection, SelectionCondition, StyleConfig, TextAlign,
    VEGA_LITE_SCHEMA,
};
use crate::types::{Size, GUIDE_COLOR, NEAREST_POINT, TOOLTIP_COLOR, TOOLTIP_DX, TOOLTIP_DY, TOOLTIP_FORMAT};

/// Multi-series line chart with a hover tooltip and vertical guide.
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    pub data: SeriesCollection,
    pub options: VisOptions,
}

impl LineChart {
    pub fn new(data: SeriesCollection) -> Self {
        Self { data, options: VisOptions::default() }
    }

    pub fn with_options(mut self, options: VisOptions) -> Self {
        self.options = options;
        self
    }

    /// Assemble the declarative spec for a container of the given measured size.
    pub fn build_spec(&self, container: Size) -> ChartSpec {
        let opts = self.options.resolve();
        if opts.x_axis_domain().is_some() || opts.y_axis_domain().is_some() || opts.zoom_to_fit() {
            tracing::debug!(
                x_domain = ?opts.x_axis_domain(),
                y_domain = ?opts.y_axis_domain(),
                zoom_to_fit = opts.zoom_to_fit(),
                "axis domain and zoom options are accepted but not applied"
            );
        }

        let values = self.data.flatten();
        let size = opts.size_within(container);
        let shared = shared_encoding(&opts, self.data.names());

        tracing::debug!(
            series = self.data.len(),
            records = values.len(),
            width = size.width,
            height = size.height,
            "built line chart spec"
        );

        ChartSpec {
            schema: VEGA_LITE_SCHEMA.to_string(),
            width: size.width,
            height: size.height,
            padding: 0,
            autosize: Autosize::fit(),
            config: StyleConfig::with_font_size(opts.font_size()),
            data: InlineData { values },
            layer: vec![
                line_layer(&shared),
                hit_test_layer(&shared),
                tooltip_layer(&shared, opts.x_type()),
                guide_layer(opts.x_type()),
            ],
        }
    }

    /// Build the spec against `container` and hand it to `renderer`.
    pub async fn render(&self, renderer: &dyn ChartRenderer, container: &dyn Container) -> Result<()> {
        let spec = self.build_spec(container.client_size());
        renderer.embed(container, &spec, &EmbedOptions::default()).await
    }
}

/// Render `data` as a line chart into `container`. `opts` are merged over the
/// defaults; width/height fall back to the container's measured size.
pub async fn line_chart(
    renderer: &dyn ChartRenderer,
    container: &dyn Container,
    data: &SeriesCollection,
    opts: Option<&VisOptions>,
) -> Result<()> {
    let chart = LineChart {
        data: data.clone(),
        options: opts.cloned().unwrap_or_default(),
    };
    chart.render(renderer, container).await
}

// ---- layers -----------------------------------------------------------------

fn shared_encoding(opts: &ResolvedOptions, names: &[String]) -> Encoding {
    let x = opts.x_axis();
    let y = opts.y_axis();
    Encoding {
        x: Some(FieldChannel::new(x.field, x.kind).titled(x.label.clone())),
        y: Some(FieldChannel::new(y.field, y.kind).titled(y.label.clone())),
        color: Some(ColorChannel {
            field: "series".to_string(),
            kind: AxisKind::Nominal,
            legend: Legend { values: names.to_vec(), orient: LegendOrient::Bottom, offset: 0 },
        }),
        ..Default::default()
    }
}

fn line_layer(shared: &Encoding) -> Layer {
    Layer::new(Mark::Line { clip: true }, shared.clone())
}

// Invisible points at every datum; the hovered one becomes opaque.
fn hit_test_layer(shared: &Encoding) -> Layer {
    let encoding = Encoding {
        opacity: Some(ConditionalValue {
            value: 0.0,
            condition: SelectionCondition { selection: NEAREST_POINT.to_string(), value: 1.0 },
        }),
        ..shared.clone()
    };
    Layer::new(Mark::Point {}, encoding).with_selection(NEAREST_POINT, Selection::nearest_on_hover())
}

fn tooltip_layer(shared: &Encoding, x_kind: AxisKind) -> Layer {
    let encoding = Encoding {
        text: Some(FieldChannel::new("y", x_kind).formatted(TOOLTIP_FORMAT)),
        // No series color: the fixed mark color keeps the label readable.
        color: None,
        ..shared.clone()
    };
    let mark = Mark::Text {
        align: TextAlign::Left,
        dx: TOOLTIP_DX,
        dy: TOOLTIP_DY,
        color: TOOLTIP_COLOR.to_string(),
    };
    Layer::new(mark, encoding).filtered_by(NEAREST_POINT)
}

fn guide_layer(x_kind: AxisKind) -> Layer {
    let encoding = Encoding {
        x: Some(FieldChannel::new("x", x_kind)),
        ..Default::default()
    };
    Layer::new(Mark::Rule { color: GUIDE_COLOR.to_string() }, encoding).filtered_by(NEAREST_POINT)
}
