use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod generator;

pub use generator::{generate, generate_for, CurveSet};

/// Lowest value a percentage metric may take
pub const MIN_PERCENT: f64 = 0.0;
/// Highest value a percentage metric may take
pub const MAX_PERCENT: f64 = 100.0;

/// Errors produced while building or loading hiring insights
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightsError {
    /// Day count is zero or not one of the selectable timeframes
    #[error("unsupported timeframe: {days} days")]
    InvalidTimeframe { days: u32 },
    /// The data source could not produce a dataset
    #[error("failed to load hiring insights: {reason}")]
    GenerationFailed { reason: String },
    /// Labels and series disagree in length, or a value is out of range
    #[error("malformed hiring insights dataset: {reason}")]
    MalformedDataset { reason: String },
}

impl InsightsError {
    fn malformed(reason: impl Into<String>) -> Self {
        InsightsError::MalformedDataset {
            reason: reason.into(),
        }
    }
}

/// Selectable window size for the insights chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    Last7Days,
    Last14Days,
    #[default]
    Last30Days,
}

impl Timeframe {
    /// Options in the order they appear in the dropdown
    pub const ALL: [Timeframe; 3] = [
        Timeframe::Last7Days,
        Timeframe::Last14Days,
        Timeframe::Last30Days,
    ];

    pub fn days(self) -> u32 {
        match self {
            Timeframe::Last7Days => 7,
            Timeframe::Last14Days => 14,
            Timeframe::Last30Days => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Last7Days => "Last 7 days",
            Timeframe::Last14Days => "Last 14 days",
            Timeframe::Last30Days => "Last 30 days",
        }
    }

    pub fn from_days(days: u32) -> Result<Self, InsightsError> {
        Self::ALL
            .into_iter()
            .find(|timeframe| timeframe.days() == days)
            .ok_or(InsightsError::InvalidTimeframe { days })
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = InsightsError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::from_days(days)
    }
}

/// The three hiring metrics plotted by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    ApplicationToInterview,
    OfferAcceptance,
    Rejection,
}

impl MetricKind {
    /// Plot and legend order
    pub const ALL: [MetricKind; 3] = [
        MetricKind::ApplicationToInterview,
        MetricKind::OfferAcceptance,
        MetricKind::Rejection,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MetricKind::ApplicationToInterview => "Application to Interview Rate",
            MetricKind::OfferAcceptance => "Offer Acceptance Rate",
            MetricKind::Rejection => "Rejection Rate",
        }
    }

    /// Key used for this series in the JSON wire format
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::ApplicationToInterview => "applicationToInterviewRate",
            MetricKind::OfferAcceptance => "offerAcceptanceRate",
            MetricKind::Rejection => "rejectionRate",
        }
    }

    /// Line colour as (r, g, b)
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            MetricKind::ApplicationToInterview => (0x22, 0xc5, 0x5e),
            MetricKind::OfferAcceptance => (0x8b, 0x5c, 0xf6),
            MetricKind::Rejection => (0xf9, 0x73, 0x16),
        }
    }

    /// Line colour as a CSS hex string
    pub fn css_color(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One percentage value per day, index-aligned with the dataset labels
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSeries(Vec<f64>);

impl MetricSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    fn validate(&self, kind: MetricKind) -> Result<(), InsightsError> {
        match self
            .0
            .iter()
            .position(|value| !value.is_finite() || !(MIN_PERCENT..=MAX_PERCENT).contains(value))
        {
            Some(index) => Err(InsightsError::malformed(format!(
                "{} value {} at index {} is outside 0-100",
                kind.key(),
                self.0[index],
                index
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<f64>> for MetricSeries {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Wire shape of a dataset: labels plus the named series
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDataset {
    labels: Vec<String>,
    datasets: RawSeries,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeries {
    application_to_interview_rate: MetricSeries,
    offer_acceptance_rate: MetricSeries,
    rejection_rate: MetricSeries,
}

/// Day labels plus the three metric series for one timeframe.
///
/// Every constructed dataset has at least one day, and all series have the
/// same length as the labels with values inside 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct InsightsDataset {
    labels: Vec<String>,
    application_to_interview: MetricSeries,
    offer_acceptance: MetricSeries,
    rejection: MetricSeries,
}

impl InsightsDataset {
    /// Build a dataset from raw parts, checking lengths and value ranges
    pub fn new(
        labels: Vec<String>,
        application_to_interview: MetricSeries,
        offer_acceptance: MetricSeries,
        rejection: MetricSeries,
    ) -> Result<Self, InsightsError> {
        let dataset = Self {
            labels,
            application_to_interview,
            offer_acceptance,
            rejection,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), InsightsError> {
        if self.labels.is_empty() {
            return Err(InsightsError::malformed("dataset has no days"));
        }
        for kind in MetricKind::ALL {
            let series = self.series(kind);
            if series.len() != self.labels.len() {
                return Err(InsightsError::malformed(format!(
                    "{} has {} values but there are {} labels",
                    kind.key(),
                    series.len(),
                    self.labels.len()
                )));
            }
            series.validate(kind)?;
        }
        Ok(())
    }

    /// Number of days covered
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn series(&self, kind: MetricKind) -> &MetricSeries {
        match kind {
            MetricKind::ApplicationToInterview => &self.application_to_interview,
            MetricKind::OfferAcceptance => &self.offer_acceptance,
            MetricKind::Rejection => &self.rejection,
        }
    }

    /// The chart row for a single day
    pub fn point(&self, index: usize) -> Option<ChartPoint> {
        Some(ChartPoint {
            day: self.labels.get(index)?.clone(),
            application_to_interview_rate: self.application_to_interview.get(index)?,
            offer_acceptance_rate: self.offer_acceptance.get(index)?,
            rejection_rate: self.rejection.get(index)?,
        })
    }

    /// Flatten the dataset into one row per day
    pub fn points(&self) -> Vec<ChartPoint> {
        (0..self.len()).filter_map(|index| self.point(index)).collect()
    }
}

impl TryFrom<RawDataset> for InsightsDataset {
    type Error = InsightsError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        Self::new(
            raw.labels,
            raw.datasets.application_to_interview_rate,
            raw.datasets.offer_acceptance_rate,
            raw.datasets.rejection_rate,
        )
    }
}

impl From<InsightsDataset> for RawDataset {
    fn from(dataset: InsightsDataset) -> Self {
        RawDataset {
            labels: dataset.labels,
            datasets: RawSeries {
                application_to_interview_rate: dataset.application_to_interview,
                offer_acceptance_rate: dataset.offer_acceptance,
                rejection_rate: dataset.rejection,
            },
        }
    }
}

/// One chart row: a day label and the value of each metric on that day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub day: String,
    pub application_to_interview_rate: f64,
    pub offer_acceptance_rate: f64,
    pub rejection_rate: f64,
}

impl ChartPoint {
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::ApplicationToInterview => self.application_to_interview_rate,
            MetricKind::OfferAcceptance => self.offer_acceptance_rate,
            MetricKind::Rejection => self.rejection_rate,
        }
    }
}

/// Two-digit, one-based label for a day index ("01", "02", ...)
pub fn day_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Format a percentage for axis ticks and tooltips ("40%", "12.5%").
///
/// Rounded to at most two decimals with trailing zeros dropped.
pub fn format_percent(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0%".to_string(),
        _ => format!("{}%", trimmed),
    }
}
