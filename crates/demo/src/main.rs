// File: crates/demo/src/main.rs
// Summary: Demo loads long-format (series,x,y) CSV, writes the Vega-Lite spec and an HTML page.

use anyhow::{Context, Result};
use chart_core::{FixedContainer, LineChart, Size, VisOptions};
use chart_render_html::HtmlRenderer;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod load;

use load::load_series_csv;

/// Container size used when the options file gives no width/height.
const PAGE_SIZE: Size = Size::new(960, 540);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args
        .next()
        .context("usage: constellation-demo <series.csv> [options.json]")?;
    let csv_path = PathBuf::from(raw);

    let options = match args.next() {
        Some(p) => load_options(Path::new(&p))?,
        None => VisOptions::default(),
    };

    let data = load_series_csv(&csv_path)
        .with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    info!(series = data.len(), points = data.point_count(), "loaded {}", csv_path.display());

    if data.point_count() == 0 {
        anyhow::bail!("no points loaded; expected headers series,x,y");
    }

    let chart = LineChart::new(data).with_options(options);
    let container = FixedContainer(PAGE_SIZE);

    let spec_path = out_name_with(&csv_path, "vl.json");
    let spec = chart.build_spec(PAGE_SIZE);
    std::fs::write(&spec_path, spec.to_json_pretty()?)
        .with_context(|| format!("writing {}", spec_path.display()))?;
    println!("Wrote {}", spec_path.display());

    let title = csv_path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let renderer = HtmlRenderer::new(out_name_with(&csv_path, "html")).with_title(title);
    chart.render(&renderer, &container).await?;
    println!("Wrote {}", renderer.path().display());

    Ok(())
}

fn load_options(path: &Path) -> Result<VisOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading options {}", path.display()))?;
    let opts: VisOptions = serde_json::from_str(&text)
        .with_context(|| format!("parsing options {}", path.display()))?;
    info!(?opts, "loaded options");
    Ok(opts)
}

/// Produce output file name like target/out/<stem>.<ext>
fn out_name_with(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("{stem}.{ext}"))
}
