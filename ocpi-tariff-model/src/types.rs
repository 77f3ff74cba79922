/// Electrical quantities used in tariff restrictions.
pub mod electricity;

/// Monetary amounts and VAT percentages.
pub mod money;

mod number;

/// Durations, dates and times of day.
pub mod time;
