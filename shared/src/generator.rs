//! Synthetic hiring metrics.
//!
//! Stands in for a real metrics service: every curve is a deterministic
//! function of the day index and the number of days requested.

use serde::{Deserialize, Serialize};

use crate::{
    day_label, InsightsDataset, InsightsError, MetricKind, MetricSeries, Timeframe, MAX_PERCENT,
    MIN_PERCENT,
};

/// Which family of placeholder curves to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveSet {
    /// Rising interview and offer rates with a slow rejection wave
    #[default]
    Ramp,
    /// Phase-shifted sine/cosine waves around mid-range values
    Wave,
}

impl CurveSet {
    /// Value of `kind` on day `index` of a `days`-long window, floored and
    /// clamped to 0-100
    pub fn value(self, kind: MetricKind, index: usize, days: usize) -> f64 {
        let i = index as f64;
        let n = days as f64;
        let raw = match (self, kind) {
            (CurveSet::Ramp, MetricKind::ApplicationToInterview) => 100.0 * (i + 1.0) / n,
            (CurveSet::Ramp, MetricKind::OfferAcceptance) => 100.0 * (i / n).powf(1.2),
            (CurveSet::Ramp, MetricKind::Rejection) => 100.0 * (i / 10.0).sin().abs() / 3.0,
            (CurveSet::Wave, MetricKind::ApplicationToInterview) => 40.0 + 30.0 * (i / 4.0).sin(),
            (CurveSet::Wave, MetricKind::OfferAcceptance) => 50.0 + 25.0 * (i / 5.0).cos(),
            (CurveSet::Wave, MetricKind::Rejection) => 60.0 + 30.0 * (i / 6.0 + 2.0).sin(),
        };
        raw.floor().clamp(MIN_PERCENT, MAX_PERCENT)
    }

    fn series(self, kind: MetricKind, days: usize) -> MetricSeries {
        MetricSeries::new((0..days).map(|index| self.value(kind, index, days)).collect())
    }
}

/// Generate `days` days of metrics labelled "01".."NN".
///
/// Any positive day count is accepted; zero is rejected.
pub fn generate(days: u32, curves: CurveSet) -> Result<InsightsDataset, InsightsError> {
    if days == 0 {
        return Err(InsightsError::InvalidTimeframe { days });
    }
    let days = days as usize;

    InsightsDataset::new(
        (0..days).map(day_label).collect(),
        curves.series(MetricKind::ApplicationToInterview, days),
        curves.series(MetricKind::OfferAcceptance, days),
        curves.series(MetricKind::Rejection, days),
    )
}

/// Generate the dataset for one of the selectable timeframes
pub fn generate_for(timeframe: Timeframe, curves: CurveSet) -> Result<InsightsDataset, InsightsError> {
    generate(timeframe.days(), curves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_timeframe() {
        for timeframe in Timeframe::ALL {
            let dataset = generate_for(timeframe, CurveSet::Ramp).unwrap();
            let expected: Vec<String> = (1..=timeframe.days()).map(|d| format!("{:02}", d)).collect();
            assert_eq!(dataset.labels(), expected.as_slice());
            for kind in MetricKind::ALL {
                assert_eq!(dataset.series(kind).len(), timeframe.days() as usize);
            }
        }
    }

    #[test]
    fn test_values_stay_within_bounds() {
        for curves in [CurveSet::Ramp, CurveSet::Wave] {
            for days in 1..=90 {
                let dataset = generate(days, curves).unwrap();
                for kind in MetricKind::ALL {
                    assert!(
                        dataset.series(kind).iter().all(|v| (0.0..=100.0).contains(&v)),
                        "{:?} {:?} out of range for {} days",
                        curves,
                        kind,
                        days
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_days_rejected() {
        assert_eq!(
            generate(0, CurveSet::Ramp),
            Err(InsightsError::InvalidTimeframe { days: 0 })
        );
    }

    #[test]
    fn test_ramp_curve_values() {
        let dataset = generate(30, CurveSet::Ramp).unwrap();
        let interview = dataset.series(MetricKind::ApplicationToInterview);
        let offers = dataset.series(MetricKind::OfferAcceptance);
        let rejections = dataset.series(MetricKind::Rejection);

        assert_eq!(interview.get(0), Some(3.0));
        assert_eq!(interview.get(14), Some(50.0));
        assert_eq!(interview.get(29), Some(100.0));

        assert_eq!(offers.get(0), Some(0.0));
        assert_eq!(offers.get(29), Some(96.0));

        assert_eq!(rejections.get(0), Some(0.0));
        assert_eq!(rejections.get(15), Some(33.0));
        assert_eq!(rejections.get(29), Some(7.0));
    }

    #[test]
    fn test_ramp_interview_rate_reaches_full_on_last_day() {
        for timeframe in Timeframe::ALL {
            let dataset = generate_for(timeframe, CurveSet::Ramp).unwrap();
            let last = timeframe.days() as usize - 1;
            assert_eq!(
                dataset.series(MetricKind::ApplicationToInterview).get(last),
                Some(100.0)
            );
        }
    }

    #[test]
    fn test_wave_curve_values() {
        let dataset = generate(30, CurveSet::Wave).unwrap();
        assert_eq!(dataset.series(MetricKind::ApplicationToInterview).get(0), Some(40.0));
        assert_eq!(dataset.series(MetricKind::OfferAcceptance).get(0), Some(75.0));
        assert_eq!(dataset.series(MetricKind::Rejection).get(0), Some(87.0));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(14, CurveSet::Wave).unwrap();
        let second = generate(14, CurveSet::Wave).unwrap();
        assert_eq!(first, second);
    }
}
