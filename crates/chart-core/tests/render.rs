// File: crates/chart-core/tests/render.rs
// Purpose: Validate the async render path against recording and failing renderers.

use std::sync::Mutex;

use async_trait::async_trait;
use chart_core::{
    line_chart, ChartError, ChartRenderer, ChartSpec, Container, EmbedMode, EmbedOptions,
    FixedContainer, Point, SeriesCollection, Size, VisOptions,
};

#[derive(Default)]
struct Recording {
    calls: Mutex<Vec<(Size, ChartSpec, EmbedOptions)>>,
}

#[async_trait]
impl ChartRenderer for Recording {
    async fn embed(&self, container: &dyn Container, spec: &ChartSpec, opts: &EmbedOptions) -> chart_core::Result<()> {
        self.calls.lock().unwrap().push((container.client_size(), spec.clone(), *opts));
        Ok(())
    }
}

struct Failing;

#[async_trait]
impl ChartRenderer for Failing {
    async fn embed(&self, _: &dyn Container, _: &ChartSpec, _: &EmbedOptions) -> chart_core::Result<()> {
        Err(ChartError::Render("unsupported option combination".to_string()))
    }
}

fn data() -> SeriesCollection {
    SeriesCollection::new(
        vec![vec![Point::new(0.0, 0.5), Point::new(1.0, 0.25)]],
        vec!["loss".to_string()],
    )
    .unwrap()
}

#[tokio::test]
async fn renders_once_with_fixed_embed_flags() {
    let renderer = Recording::default();
    let container = FixedContainer(Size::new(640, 360));

    line_chart(&renderer, &container, &data(), None).await.expect("render ok");

    let calls = renderer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (measured, spec, opts) = &calls[0];
    assert_eq!(*measured, Size::new(640, 360));
    assert_eq!((spec.width, spec.height), (640, 360));
    assert_eq!(spec.data.values.len(), 2);
    assert!(!opts.actions);
    assert!(!opts.default_style);
    assert_eq!(opts.mode, EmbedMode::VegaLite);
}

#[tokio::test]
async fn caller_options_reach_the_spec() {
    let renderer = Recording::default();
    let container = FixedContainer(Size::new(640, 360));
    let opts = VisOptions::default().with_size(200, 100).with_font_size(20.0);

    line_chart(&renderer, &container, &data(), Some(&opts)).await.unwrap();

    let calls = renderer.calls.lock().unwrap();
    let spec = &calls[0].1;
    assert_eq!((spec.width, spec.height), (200, 100));
    assert_eq!(spec.config.text.font_size, 20.0);
}

#[tokio::test]
async fn renderer_failure_propagates() {
    let container = FixedContainer(Size::new(10, 10));
    let err = line_chart(&Failing, &container, &data(), None).await.unwrap_err();
    assert!(matches!(err, ChartError::Render(_)));
    assert!(err.to_string().contains("unsupported option combination"));
}

#[tokio::test]
async fn independent_containers_render_concurrently() -> anyhow::Result<()> {
    let renderer = Recording::default();
    let a = FixedContainer(Size::new(100, 50));
    let b = FixedContainer(Size::new(300, 150));
    let d = data();

    let (ra, rb) = tokio::join!(
        line_chart(&renderer, &a, &d, None),
        line_chart(&renderer, &b, &d, None)
    );
    ra?;
    rb?;

    let mut widths: Vec<u32> = renderer.calls.lock().unwrap().iter().map(|c| c.1.width).collect();
    widths.sort_unstable();
    assert_eq!(widths, vec![100, 300]);
    Ok(())
}
