use shared::{generate_for, CurveSet, InsightsDataset, InsightsError, Timeframe};

use crate::components::chart::PlotLayout;
use crate::services::LogLevel;

/// Which drawing backend renders the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartRenderer {
    /// `<canvas>` element drawn through plotters-canvas
    #[default]
    Canvas,
    /// Inline `<svg>` produced by the plotters SVG backend
    Svg,
}

impl ChartRenderer {
    /// Parse a host-supplied renderer name ("canvas" or "svg")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "canvas" => Some(ChartRenderer::Canvas),
            "svg" => Some(ChartRenderer::Svg),
            _ => None,
        }
    }
}

/// Choices the host page makes through attributes on the seed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostOptions {
    /// `None` when the attribute is missing or unrecognised
    pub renderer: Option<ChartRenderer>,
    /// Inject a generated 30-day wave dataset instead of waiting on a request
    pub mock_seed: bool,
}

impl HostOptions {
    /// Build from the raw `data-renderer` and `data-mock` attribute values
    pub fn from_attributes(renderer: Option<&str>, mock: Option<&str>) -> Self {
        Self {
            renderer: renderer.and_then(ChartRenderer::from_name),
            mock_seed: matches!(
                mock.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
                Some("true" | "1" | "")
            ),
        }
    }

    /// Apply the host's choices on top of `config`
    pub fn apply(&self, config: InsightsConfig) -> InsightsConfig {
        InsightsConfig {
            renderer: self.renderer.unwrap_or(config.renderer),
            ..config
        }
    }

    /// Dataset to inject when mock seeding is on
    pub fn mock_dataset(&self) -> Option<Result<InsightsDataset, InsightsError>> {
        self.mock_seed
            .then(|| generate_for(Timeframe::Last30Days, CurveSet::Wave))
    }
}

/// Configuration for the hiring insights widget
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsConfig {
    /// Simulated round-trip before a dataset arrives
    pub latency_ms: u32,
    pub default_timeframe: Timeframe,
    pub curves: CurveSet,
    pub renderer: ChartRenderer,
    pub chart_width: u32,
    pub chart_height: u32,
    pub log_level: LogLevel,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            default_timeframe: Timeframe::Last30Days,
            curves: CurveSet::Ramp,
            renderer: ChartRenderer::Canvas,
            chart_width: 800,
            chart_height: 350,
            log_level: LogLevel::Debug,
        }
    }
}

impl InsightsConfig {
    pub fn layout(&self) -> PlotLayout {
        PlotLayout::new(self.chart_width, self.chart_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InsightsConfig::default();
        assert_eq!(config.latency_ms, 500);
        assert_eq!(config.default_timeframe, Timeframe::Last30Days);
        assert_eq!(config.curves, CurveSet::Ramp);
        assert_eq!(config.renderer, ChartRenderer::Canvas);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_config_layout_uses_chart_size() {
        let config = InsightsConfig {
            chart_width: 640,
            chart_height: 300,
            ..InsightsConfig::default()
        };
        let layout = config.layout();
        assert_eq!(layout.width, 640);
        assert_eq!(layout.height, 300);
    }

    #[test]
    fn test_renderer_from_name() {
        assert_eq!(ChartRenderer::from_name("svg"), Some(ChartRenderer::Svg));
        assert_eq!(ChartRenderer::from_name(" SVG "), Some(ChartRenderer::Svg));
        assert_eq!(ChartRenderer::from_name("canvas"), Some(ChartRenderer::Canvas));
        assert_eq!(ChartRenderer::from_name("webgl"), None);
        assert_eq!(ChartRenderer::from_name(""), None);
    }

    #[test]
    fn test_host_options_select_svg_renderer() {
        let options = HostOptions::from_attributes(Some("svg"), None);
        assert_eq!(options.renderer, Some(ChartRenderer::Svg));
        assert!(!options.mock_seed);

        let config = options.apply(InsightsConfig::default());
        assert_eq!(config.renderer, ChartRenderer::Svg);
        assert_eq!(config.latency_ms, 500);
    }

    #[test]
    fn test_host_options_default_keeps_canvas_and_no_seed() {
        let options = HostOptions::from_attributes(None, None);
        assert_eq!(options, HostOptions::default());
        assert_eq!(options.apply(InsightsConfig::default()).renderer, ChartRenderer::Canvas);
        assert!(options.mock_dataset().is_none());

        let unknown = HostOptions::from_attributes(Some("webgl"), Some("false"));
        assert_eq!(unknown.renderer, None);
        assert!(!unknown.mock_seed);
    }

    #[test]
    fn test_host_options_mock_seed_injects_wave_month() {
        for value in ["true", "TRUE", "1", ""] {
            assert!(HostOptions::from_attributes(None, Some(value)).mock_seed, "{:?}", value);
        }

        let options = HostOptions::from_attributes(None, Some("true"));
        let dataset = options.mock_dataset().unwrap().unwrap();
        assert_eq!(dataset.len(), 30);
        assert_eq!(dataset, generate_for(Timeframe::Last30Days, CurveSet::Wave).unwrap());
    }
}
