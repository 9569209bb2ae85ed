use std::rc::Rc;

use shared::{InsightsDataset, InsightsError, Timeframe};
use yew::prelude::*;

/// Identifies one generation request; later requests carry larger tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

/// What the chart area is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    Loading,
    Ready,
    /// Inline error instead of the chart
    Failed(String),
}

/// Everything the widget renders from.
///
/// `dataset` is kept across requests so a failed refresh can fall back to
/// the last good data.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsState {
    pub timeframe: Timeframe,
    pub dataset: Option<Rc<InsightsDataset>>,
    /// Selector value that was active when `dataset` was applied
    pub dataset_timeframe: Timeframe,
    pub status: ChartStatus,
    pub dropdown_open: bool,
    /// Dismissible banner shown above a retained dataset
    pub warning: Option<String>,
    pub latest_request: RequestToken,
}

pub enum InsightsAction {
    ToggleDropdown,
    CloseDropdown,
    /// A request for `timeframe` was issued with `token`
    Requested {
        timeframe: Timeframe,
        token: RequestToken,
    },
    /// The request identified by `token` finished
    Resolved {
        token: RequestToken,
        result: Result<InsightsDataset, InsightsError>,
    },
    DismissWarning,
}

impl InsightsState {
    /// Waiting on the first generation for `timeframe`
    pub fn loading(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            dataset: None,
            dataset_timeframe: timeframe,
            status: ChartStatus::Loading,
            dropdown_open: false,
            warning: None,
            latest_request: RequestToken::default(),
        }
    }

    /// Ready immediately with an injected dataset.
    ///
    /// The selector shows the matching timeframe when the seed covers one of
    /// the supported windows.
    pub fn seeded(dataset: InsightsDataset, fallback: Timeframe) -> Self {
        let timeframe = Timeframe::from_days(dataset.len() as u32).unwrap_or(fallback);
        Self {
            timeframe,
            dataset: Some(Rc::new(dataset)),
            dataset_timeframe: timeframe,
            status: ChartStatus::Ready,
            dropdown_open: false,
            warning: None,
            latest_request: RequestToken::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ChartStatus::Loading
    }

    /// The dataset to draw, if the chart should be visible
    pub fn displayed(&self) -> Option<&Rc<InsightsDataset>> {
        match self.status {
            ChartStatus::Ready => self.dataset.as_ref(),
            _ => None,
        }
    }

    fn apply(&mut self, action: InsightsAction) {
        match action {
            InsightsAction::ToggleDropdown => {
                self.dropdown_open = !self.dropdown_open;
            }
            InsightsAction::CloseDropdown => {
                self.dropdown_open = false;
            }
            InsightsAction::Requested { timeframe, token } => {
                self.timeframe = timeframe;
                self.dropdown_open = false;
                self.status = ChartStatus::Loading;
                self.latest_request = token;
            }
            InsightsAction::Resolved { result, .. } => {
                match result {
                    Ok(dataset) => {
                        self.dataset = Some(Rc::new(dataset));
                        self.dataset_timeframe = self.timeframe;
                        self.status = ChartStatus::Ready;
                        self.warning = None;
                    }
                    Err(error @ InsightsError::InvalidTimeframe { .. }) => {
                        self.status = ChartStatus::Failed(error.to_string());
                    }
                    Err(error) => match &self.dataset {
                        Some(_) => {
                            // Label follows the retained data, not the failed request
                            self.timeframe = self.dataset_timeframe;
                            self.status = ChartStatus::Ready;
                            self.warning = Some(error.to_string());
                        }
                        None => {
                            self.status = ChartStatus::Failed(error.to_string());
                        }
                    },
                }
            }
            InsightsAction::DismissWarning => {
                self.warning = None;
            }
        }
    }
}

impl Default for InsightsState {
    fn default() -> Self {
        Self::loading(Timeframe::default())
    }
}

impl Reducible for InsightsState {
    type Action = InsightsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Only the most recently issued request may replace the chart
        if let InsightsAction::Resolved { token, .. } = &action {
            if *token != self.latest_request {
                return self;
            }
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
