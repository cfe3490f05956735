use super::records::{ACTIVITIES, HEALTH_METRICS, SLEEP_METRICS};
use super::sheet::{Column, Sheet, SheetRecord};
use super::{ActivityRecord, HealthMetricRecord, SleepMetricRecord};

/// One of the three compiled-in tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Activity,
    Health,
    Sleep,
}

impl Dataset {
    /// Sheet creation order
    pub const ALL: [Dataset; 3] = [Dataset::Activity, Dataset::Health, Dataset::Sleep];

    pub fn sheet_name(self) -> &'static str {
        match self {
            Dataset::Activity => "Activity Data",
            Dataset::Health => "Health Metrics",
            Dataset::Sleep => "Sleep Data",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Dataset::Activity => ActivityRecord::columns(),
            Dataset::Health => HealthMetricRecord::columns(),
            Dataset::Sleep => SleepMetricRecord::columns(),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Dataset::Activity => ACTIVITIES.len(),
            Dataset::Health => HEALTH_METRICS.len(),
            Dataset::Sleep => SLEEP_METRICS.len(),
        }
    }

    pub fn sheet(self) -> Sheet {
        match self {
            Dataset::Activity => Sheet::from_records(self.sheet_name(), ACTIVITIES),
            Dataset::Health => Sheet::from_records(self.sheet_name(), HEALTH_METRICS),
            Dataset::Sleep => Sheet::from_records(self.sheet_name(), SLEEP_METRICS),
        }
    }

    /// Values of the label column (first column), in definition order.
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            Dataset::Activity => ACTIVITIES.iter().map(|r| r.activity).collect(),
            Dataset::Health => HEALTH_METRICS.iter().map(|r| r.metric).collect(),
            Dataset::Sleep => SLEEP_METRICS.iter().map(|r| r.metric).collect(),
        }
    }
}

/// All three sheets in creation order.
pub fn sheets() -> Vec<Sheet> {
    Dataset::ALL.iter().map(|d| d.sheet()).collect()
}
