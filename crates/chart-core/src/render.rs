// File: crates/chart-core/src/render.rs
// Summary: Renderer-agnostic capability traits: measurable containers and async chart renderers.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::spec::ChartSpec;
use crate::types::Size;

/// A visual element the renderer draws into.
pub trait Container: Send + Sync {
    /// Measured size. Detached or hidden containers report zero.
    fn client_size(&self) -> Size;

    /// Element id the engine mounts into.
    fn element_id(&self) -> &str {
        "chart"
    }
}

/// Fixed-size container, handy for headless callers and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedContainer(pub Size);

impl Container for FixedContainer {
    fn client_size(&self) -> Size {
        self.0
    }
}

/// Grammar the engine should interpret the spec with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedMode {
    #[default]
    VegaLite,
    Vega,
}

/// Flags passed to the engine alongside the spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    /// Show the engine's export/source action menu.
    pub actions: bool,
    pub mode: EmbedMode,
    /// Inject the engine's default stylesheet.
    pub default_style: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { actions: false, mode: EmbedMode::VegaLite, default_style: false }
    }
}

/// The external engine that owns drawing, scales, resize and hover hit-testing.
///
/// Implementations resolve once the initial render has completed and report
/// engine failures as [`crate::ChartError::Render`].
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn embed(
        &self,
        container: &dyn Container,
        spec: &ChartSpec,
        opts: &EmbedOptions,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_embed_options_serialize_to_engine_flags() {
        let v = serde_json::to_value(EmbedOptions::default()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"actions": false, "mode": "vega-lite", "defaultStyle": false})
        );
    }
}
