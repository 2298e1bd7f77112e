// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart spec builder and renderer traits.

pub mod chart;
pub mod series;
pub mod axis;
pub mod types;
pub mod options;
pub mod spec;
pub mod render;
pub mod error;

pub use chart::{line_chart, LineChart};
pub use series::{FlatRecord, SeriesCollection};
pub use axis::{Axis, AxisKind};
pub use types::{Point, Size};
pub use options::{ResolvedOptions, VisOptions};
pub use spec::{ChartSpec, Layer, Mark};
pub use render::{ChartRenderer, Container, EmbedMode, EmbedOptions, FixedContainer};
pub use error::{ChartError, Result};
