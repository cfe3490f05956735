use schemars::JsonSchema;
use serde::Serialize;
use watchdata_derive::SheetRecord;

/// A workout type and the metrics recorded while doing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema, SheetRecord)]
pub struct ActivityRecord {
    /// Workout type
    #[serde(rename = "Activity")]
    pub activity: &'static str,
    /// Comma-separated metric names recorded for the workout
    #[serde(rename = "Metrics Tracked")]
    pub metrics_tracked: &'static str,
}

impl ActivityRecord {
    /// Individual metric names from the comma-separated list.
    pub fn metrics(&self) -> impl Iterator<Item = &'static str> {
        self.metrics_tracked
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// A health metric and what it measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema, SheetRecord)]
pub struct HealthMetricRecord {
    /// Health metric name
    #[serde(rename = "Metric")]
    pub metric: &'static str,
    /// What the metric measures
    #[serde(rename = "Description")]
    pub description: &'static str,
}

/// A sleep metric and what it measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema, SheetRecord)]
pub struct SleepMetricRecord {
    /// Sleep metric name
    #[serde(rename = "Metric")]
    pub metric: &'static str,
    /// What the metric measures
    #[serde(rename = "Description")]
    pub description: &'static str,
}

const fn activity(activity: &'static str, metrics_tracked: &'static str) -> ActivityRecord {
    ActivityRecord {
        activity,
        metrics_tracked,
    }
}

const fn health(metric: &'static str, description: &'static str) -> HealthMetricRecord {
    HealthMetricRecord {
        metric,
        description,
    }
}

const fn sleep(metric: &'static str, description: &'static str) -> SleepMetricRecord {
    SleepMetricRecord {
        metric,
        description,
    }
}

pub static ACTIVITIES: &[ActivityRecord] = &[
    activity("Walking", "Distance, Steps, Active Calories, Heart Rate, Pace"),
    activity("Running", "Distance, Steps, Active Calories, Heart Rate, Pace, Cadence"),
    activity("Cycling", "Distance, Active Calories, Heart Rate, Speed, Elevation Gain"),
    activity("Swimming", "Distance, Active Calories, Heart Rate, Strokes, SWOLF"),
    activity("Hiking", "Distance, Steps, Active Calories, Heart Rate, Elevation Gain"),
    activity("Strength Training", "Active Calories, Heart Rate, Repetitions, Rest Time"),
    activity("Yoga/Pilates", "Active Calories, Heart Rate, Mindful Minutes, Flexibility"),
    activity("Rowing", "Distance, Active Calories, Heart Rate, Strokes, Split Time"),
    activity("Elliptical", "Distance, Steps, Active Calories, Heart Rate, Strides"),
    activity("Skating/Rollerblading", "Distance, Active Calories, Heart Rate, Speed, Elevation Gain"),
    activity("Skiing/Snowboarding", "Distance, Active Calories, Heart Rate, Speed, Elevation Gain"),
    activity("Dancing", "Distance, Steps, Active Calories, Heart Rate, Rhythm"),
    activity("Climbing", "Distance, Active Calories, Heart Rate, Elevation Gain, Speed"),
    activity("Martial Arts/Boxing", "Active Calories, Heart Rate, Training Time, Punches, Kicks"),
    activity("Golf", "Distance, Active Calories, Heart Rate, Strokes, Score"),
    activity("Tennis", "Distance, Active Calories, Heart Rate, Strokes, Score"),
    activity("Horseback Riding", "Distance, Active Calories, Heart Rate, Speed, Elevation Gain"),
    activity("Rowing (Water/Erg)", "Distance, Active Calories, Heart Rate, Strokes, Split Time"),
];

pub static HEALTH_METRICS: &[HealthMetricRecord] = &[
    health("Resting Heart Rate", "The number of heartbeats per minute when at rest."),
    health("Heart Rate Variability (HRV)", "The variation in time between consecutive heartbeats."),
    health("Blood Pressure", "Systolic and diastolic blood pressure measurements."),
    health("Blood Oxygen Level (SpO2)", "The percentage of oxygen in the blood."),
    health("Body Temperature", "Overall body temperature, which can be indicative of various health states."),
    health("Respiratory Rate", "The number of breaths taken per minute."),
    health("Sweat Rate", "Amount of sweat produced, which can indicate hydration levels."),
    health("Glucose Levels", "Blood glucose measurements, especially important for diabetics."),
    health("Skin Conductance", "Measures electrical conductance of the skin, which can indicate stress levels."),
    health("Body Composition", "Includes body fat percentage, muscle mass, and bone density."),
    health("Body Mass Index (BMI)", "A measure of body fat based on height and weight."),
    health("Hydration Level", "Indicates how well-hydrated the body is."),
    health("Heart Rate Recovery", "The rate at which heart rate returns to baseline after exercise."),
    health("VO2 Peak", "The highest value of VO2 achieved during the incremental exercise."),
    health("Caloric Intake", "The number of calories consumed."),
];

pub static SLEEP_METRICS: &[SleepMetricRecord] = &[
    sleep("Total Sleep Time", "The total amount of sleep time during the night."),
    sleep("Time in Bed", "The total amount of time spent in bed."),
    sleep("Sleep Efficiency", "The percentage of time spent asleep while in bed."),
    sleep("Deep Sleep Duration", "The duration of deep sleep stages."),
    sleep("Light Sleep Duration", "The duration of light sleep stages."),
    sleep("REM Sleep Duration", "The duration of REM sleep stages."),
    sleep("Wake After Sleep Onset", "The amount of time spent awake after initially falling asleep."),
    sleep("Sleep Latency", "The amount of time it takes to fall asleep."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SheetRecord;
    use std::collections::HashSet;

    #[test]
    fn literal_record_counts() {
        assert_eq!(ACTIVITIES.len(), 18);
        assert_eq!(HEALTH_METRICS.len(), 15);
        assert_eq!(SLEEP_METRICS.len(), 8);
    }

    #[test]
    fn headers_use_display_names() {
        assert_eq!(ActivityRecord::headers(), vec!["Activity", "Metrics Tracked"]);
        assert_eq!(HealthMetricRecord::headers(), vec!["Metric", "Description"]);
        assert_eq!(SleepMetricRecord::headers(), vec!["Metric", "Description"]);
    }

    #[test]
    fn column_descriptions_from_doc_comments() {
        let columns = ActivityRecord::columns();
        assert_eq!(columns[0].description, "Workout type");
        assert_eq!(
            columns[1].description,
            "Comma-separated metric names recorded for the workout"
        );
    }

    #[test]
    fn cells_match_columns() {
        let record = &HEALTH_METRICS[13];
        assert_eq!(
            record.cells(),
            vec![
                "VO2 Peak",
                "The highest value of VO2 achieved during the incremental exercise."
            ]
        );
    }

    #[test]
    fn labels_are_unique() {
        let activities: HashSet<_> = ACTIVITIES.iter().map(|r| r.activity).collect();
        let health: HashSet<_> = HEALTH_METRICS.iter().map(|r| r.metric).collect();
        let sleep: HashSet<_> = SLEEP_METRICS.iter().map(|r| r.metric).collect();
        assert_eq!(activities.len(), ACTIVITIES.len());
        assert_eq!(health.len(), HEALTH_METRICS.len());
        assert_eq!(sleep.len(), SLEEP_METRICS.len());
    }

    #[test]
    fn metrics_split_and_trimmed() {
        let running = ACTIVITIES[1];
        let metrics: Vec<_> = running.metrics().collect();
        assert_eq!(
            metrics,
            vec!["Distance", "Steps", "Active Calories", "Heart Rate", "Pace", "Cadence"]
        );
        assert!(ACTIVITIES.iter().all(|a| a.metrics().count() >= 4));
    }

    #[test]
    fn serializes_with_header_names() {
        let json = serde_json::to_string(&SLEEP_METRICS[1]).unwrap();
        assert_eq!(
            json,
            r#"{"Metric":"Time in Bed","Description":"The total amount of time spent in bed."}"#
        );
    }
}
