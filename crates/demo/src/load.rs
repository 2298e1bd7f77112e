// File: crates/demo/src/load.rs
// Summary: Long-format (series,x,y) CSV loading into named series, ordered by first appearance.

use anyhow::{Context, Result};
use chart_core::{Point, SeriesCollection};
use std::path::Path;
use tracing::warn;

const SERIES_COLUMNS: &[&str] = &["series", "name", "label"];
const X_COLUMNS: &[&str] = &["x", "time", "step", "epoch"];
const Y_COLUMNS: &[&str] = &["y", "value"];

pub fn load_series_csv(path: &Path) -> Result<SeriesCollection> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_series(rdr)
}

/// Index of the first synonym present in `headers`; earlier synonyms win
/// regardless of column order.
fn column(headers: &[String], names: &[&str]) -> Option<usize> {
    for want in names {
        if let Some(i) = headers.iter().position(|h| h == want) {
            return Some(i);
        }
    }
    None
}

pub fn read_series<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<SeriesCollection> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let i_series = column(&headers, SERIES_COLUMNS);
    let i_x = column(&headers, X_COLUMNS).context("missing x column")?;
    let i_y = column(&headers, Y_COLUMNS).context("missing y column")?;
    if i_series.is_none() {
        warn!("no series column; treating all rows as one series");
    }

    let mut names: Vec<String> = Vec::new();
    let mut values: Vec<Vec<Point>> = Vec::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            skipped += 1;
            continue;
        };
        let name = i_series.and_then(|i| rec.get(i)).map(str::trim).unwrap_or("series");

        let slot = match names.iter().position(|n| n == name) {
            Some(slot) => slot,
            None => {
                names.push(name.to_string());
                values.push(Vec::new());
                names.len() - 1
            }
        };
        values[slot].push(Point::new(x, y));
    }

    if skipped > 0 {
        warn!(skipped, "rows with unparsable x/y were skipped");
    }
    Ok(SeriesCollection::new(values, names)?)
}
