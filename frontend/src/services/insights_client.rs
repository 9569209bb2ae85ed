use gloo::timers::future::TimeoutFuture;
use shared::{generate_for, CurveSet, InsightsDataset, InsightsError, Timeframe};

use crate::config::InsightsConfig;
use crate::services::logging::Logger;

const COMPONENT: &str = "InsightsClient";

/// Simulated hiring metrics service.
///
/// Waits a fixed latency before answering so the widget goes through the
/// same loading path it will use against a real backend.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightsClient {
    latency_ms: u32,
    curves: CurveSet,
}

impl InsightsClient {
    pub fn from_config(config: &InsightsConfig) -> Self {
        Self {
            latency_ms: config.latency_ms,
            curves: config.curves,
        }
    }

    pub fn latency_ms(&self) -> u32 {
        self.latency_ms
    }

    /// Fetch hiring insights for the last `days` days.
    ///
    /// Unsupported day counts fail before the simulated round-trip.
    pub async fn get_hiring_insights(&self, days: u32) -> Result<InsightsDataset, InsightsError> {
        let timeframe = Timeframe::from_days(days)?;

        TimeoutFuture::new(self.latency_ms).await;

        generate_for(timeframe, self.curves).map_err(|e| match e {
            InsightsError::InvalidTimeframe { .. } => e,
            other => {
                Logger::error_with_component(COMPONENT, &format!("Generator failed: {}", other));
                InsightsError::GenerationFailed {
                    reason: other.to_string(),
                }
            }
        })
    }
}
