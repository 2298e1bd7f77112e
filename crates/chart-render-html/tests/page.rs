// File: crates/chart-render-html/tests/page.rs
// Purpose: End-to-end render into an HTML page on disk.

use chart_core::{line_chart, FixedContainer, Point, SeriesCollection, Size, VisOptions};
use chart_render_html::HtmlRenderer;

#[tokio::test]
async fn writes_page_with_spec_and_embed_flags() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("html_out/page.html");
    let _ = std::fs::remove_file(&out);

    let data = SeriesCollection::empty()
        .with_series("a", vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
        .with_series("b", vec![Point::new(0.0, 1.0), Point::new(1.0, 0.0)]);
    let renderer = HtmlRenderer::new(&out).with_title("two lines");
    let container = FixedContainer(Size::new(500, 300));
    let opts = VisOptions::default().with_labels("step", "value");

    line_chart(&renderer, &container, &data, Some(&opts)).await.expect("render page");

    assert_eq!(renderer.path(), out.as_path());
    let html = std::fs::read_to_string(renderer.path()).expect("page exists");
    assert!(html.contains("<title>two lines</title>"));
    assert!(html.contains(r#"<div id="chart" style="width: 500px; height: 300px;">"#));
    assert!(html.contains(r#"{"actions":false,"mode":"vega-lite","defaultStyle":false}"#));
    assert!(html.contains(r#""title":"step""#));
    assert!(html.contains(r#""selection":{"nearestPoint""#));
    assert!(html.contains("vega-lite@4"));
    assert!(html.contains(r##"vegaEmbed("#chart", spec, embedOpts)"##));
}

#[test]
fn series_names_cannot_break_out_of_the_script() {
    let data = SeriesCollection::empty()
        .with_series("</script><b>", vec![Point::new(0.0, 0.0)])
        .with_series("<!--<script>", vec![Point::new(1.0, 1.0)]);
    let spec = chart_core::LineChart::new(data).build_spec(Size::new(10, 10));
    let html = HtmlRenderer::new("unused.html")
        .to_html("chart", Size::new(10, 10), &spec, &Default::default())
        .unwrap();
    assert_eq!(html.matches("</script>").count(), 4);
    assert_eq!(html.matches("<script").count(), 4);
    assert!(!html.contains("<!--"));
    assert!(html.contains(r#"\u003c/script>\u003cb>"#));
    assert!(html.contains(r#"\u003c!--\u003cscript>"#));
}
