pub mod chart;
pub mod hiring_insights;
pub mod loading;
pub mod timeframe_selector;

pub use hiring_insights::HiringInsights;
