pub mod use_hiring_insights;

pub use use_hiring_insights::use_hiring_insights;
