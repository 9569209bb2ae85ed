pub mod insights_client;
pub mod logging;

pub use insights_client::InsightsClient;
pub use logging::{LogLevel, Logger};
