pub mod counts;
pub mod dataset;
pub mod digest;
pub mod records;
pub mod sheet;

// Flat public surface for domain types and functions.
pub use counts::{percent_label, shares, value_counts};
pub use dataset::{sheets, Dataset};
pub use digest::sheet_digest;
pub use records::{
    ActivityRecord, HealthMetricRecord, SleepMetricRecord, ACTIVITIES, HEALTH_METRICS,
    SLEEP_METRICS,
};
pub use sheet::{Column, Sheet, SheetRecord};
