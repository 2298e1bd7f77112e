// File: crates/chart-render-html/src/lib.rs
// Summary: vega-embed HTML renderer; writes a standalone page that mounts the spec into a sized div.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chart_core::{ChartError, ChartRenderer, ChartSpec, Container, EmbedOptions, Result, Size};

// Script versions loaded from the CDN. vega-lite stays on 4.x: the spec uses
// its `selection` syntax.
const VEGA_VERSION: &str = "5";
const VEGA_LITE_VERSION: &str = "4";
const VEGA_EMBED_VERSION: &str = "6";

pub struct HtmlRenderer {
    path: PathBuf,
    title: String,
}

impl HtmlRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), title: "Chart".to_string() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Page file written by [`ChartRenderer::embed`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Page text for `spec`, mounted into `<div id=element_id>` of the given size.
    pub fn to_html(&self, element_id: &str, size: Size, spec: &ChartSpec, opts: &EmbedOptions) -> Result<String> {
        let spec_json = script_safe(&spec.to_json()?);
        let opts_json = script_safe(&serde_json::to_string(opts)?);
        let id = escape_attr(element_id);
        let selector = script_safe(&serde_json::to_string(&format!("#{element_id}"))?);

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@{vega}"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@{vega_lite}"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@{vega_embed}"></script>
</head>
<body>
  <div id="{id}" style="width: {w}px; height: {h}px;"></div>
  <script>
    const spec = {spec_json};
    const embedOpts = {opts_json};
    vegaEmbed({selector}, spec, embedOpts).catch(console.error);
  </script>
</body>
</html>
"#,
            title = escape_text(&self.title),
            vega = VEGA_VERSION,
            vega_lite = VEGA_LITE_VERSION,
            vega_embed = VEGA_EMBED_VERSION,
            w = size.width,
            h = size.height,
        ))
    }
}

#[async_trait]
impl ChartRenderer for HtmlRenderer {
    async fn embed(&self, container: &dyn Container, spec: &ChartSpec, opts: &EmbedOptions) -> Result<()> {
        let html = self.to_html(container.element_id(), container.client_size(), spec, opts)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| render_io(&self.path, e))?;
        }
        tokio::fs::write(&self.path, html.as_bytes())
            .await
            .map_err(|e| render_io(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            records = spec.data.values.len(),
            layers = spec.layer.len(),
            "wrote chart page"
        );
        Ok(())
    }
}

fn render_io(path: &Path, e: std::io::Error) -> ChartError {
    ChartError::Render(format!("writing {}: {e}", path.display()))
}

// No raw '<' inside the inline script: "</script>" and "<!--" would both
// change how the HTML parser reads the element. `\u003c` is the same
// character to the JSON parser.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_safe_escapes_every_angle_bracket() {
        assert_eq!(script_safe(r#"{"s":"</script>"}"#), r#"{"s":"\u003c/script>"}"#);
        assert_eq!(script_safe(r#"{"s":"<!--<script>"}"#), r#"{"s":"\u003c!--\u003cscript>"}"#);
    }

    #[test]
    fn escaped_json_parses_back_to_the_same_value() {
        let raw = serde_json::json!({"series": "<!-- </script> <b>"});
        let safe = script_safe(&raw.to_string());
        assert!(!safe.contains('<'));
        let back: serde_json::Value = serde_json::from_str(&safe).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn title_is_escaped() {
        assert_eq!(escape_text("a<b & c>"), "a&lt;b &amp; c&gt;");
        assert_eq!(escape_attr(r#"x"y"#), "x&quot;y");
    }
}
