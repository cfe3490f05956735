//! Show command - print the reference tables

use crate::core::{Dataset, ACTIVITIES, HEALTH_METRICS, SLEEP_METRICS};
use crate::utils::write_csv;
use clap::{Args, ValueEnum};
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Table to print (default: all three)
    #[arg(short, long, value_enum)]
    table: Option<TableArg>,

    /// Output as CSV instead of formatted table
    #[arg(long, requires = "table", conflicts_with = "json")]
    csv: bool,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TableArg {
    Activity,
    Health,
    Sleep,
}

impl From<TableArg> for Dataset {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Activity => Dataset::Activity,
            TableArg::Health => Dataset::Health,
            TableArg::Sleep => Dataset::Sleep,
        }
    }
}

/// Row for the activity table output
#[derive(Debug, Clone, Tabled)]
struct ActivityRow {
    #[tabled(rename = "Activity")]
    activity: &'static str,

    #[tabled(rename = "Metrics Tracked")]
    metrics_tracked: &'static str,

    #[tabled(rename = "Count")]
    count: usize,
}

/// Row for the health and sleep table output
#[derive(Debug, Clone, Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,

    #[tabled(rename = "Description")]
    description: &'static str,
}

impl ShowCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let datasets = match self.table {
            Some(table) => vec![table.into()],
            None => Dataset::ALL.to_vec(),
        };

        if self.json {
            return self.print_json(&datasets);
        }

        for (i, dataset) in datasets.iter().enumerate() {
            if self.csv {
                write_dataset_csv(*dataset)?;
            } else {
                if i > 0 {
                    println!();
                }
                print_table(*dataset);
            }
        }
        Ok(())
    }

    fn print_json(&self, datasets: &[Dataset]) -> anyhow::Result<()> {
        let mut output = serde_json::Map::new();
        for dataset in datasets {
            let records = match dataset {
                Dataset::Activity => serde_json::to_value(ACTIVITIES)?,
                Dataset::Health => serde_json::to_value(HEALTH_METRICS)?,
                Dataset::Sleep => serde_json::to_value(SLEEP_METRICS)?,
            };
            output.insert(dataset.sheet_name().to_string(), records);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

fn print_table(dataset: Dataset) {
    println!("{} ({} rows)", dataset.sheet_name().to_uppercase(), dataset.len());

    let table = match dataset {
        Dataset::Activity => Table::new(ACTIVITIES.iter().map(|a| ActivityRow {
            activity: a.activity,
            metrics_tracked: a.metrics_tracked,
            count: a.metrics().count(),
        }))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string(),
        Dataset::Health => metric_table(HEALTH_METRICS.iter().map(|m| (m.metric, m.description))),
        Dataset::Sleep => metric_table(SLEEP_METRICS.iter().map(|m| (m.metric, m.description))),
    };
    println!("{}", table);
}

fn metric_table<I>(rows: I) -> String
where
    I: Iterator<Item = (&'static str, &'static str)>,
{
    Table::new(rows.map(|(metric, description)| MetricRow {
        metric,
        description,
    }))
    .with(Style::rounded())
    .to_string()
}

fn write_dataset_csv(dataset: Dataset) -> anyhow::Result<()> {
    match dataset {
        Dataset::Activity => write_csv(ACTIVITIES, io::stdout()),
        Dataset::Health => write_csv(HEALTH_METRICS, io::stdout()),
        Dataset::Sleep => write_csv(SLEEP_METRICS, io::stdout()),
    }
}
