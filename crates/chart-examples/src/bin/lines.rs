// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that prints the spec for a two-series line chart.

use anyhow::Result;
use chart_core::{LineChart, Point, SeriesCollection, Size, VisOptions};

fn main() -> Result<()> {
    let data = SeriesCollection::empty()
        .with_series("sin", (0..=20).map(|i| {
            let x = i as f64 * 0.25;
            Point::new(x, x.sin())
        }))
        .with_series("cos", (0..=20).map(|i| {
            let x = i as f64 * 0.25;
            Point::new(x, x.cos())
        }));

    let opts = VisOptions::default().with_labels("t", "amplitude");
    let spec = LineChart::new(data).with_options(opts).build_spec(Size::new(640, 400));
    println!("{}", spec.to_json_pretty()?);
    Ok(())
}
