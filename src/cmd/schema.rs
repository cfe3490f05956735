//! Schema command - print the record formats of each sheet

use crate::core::{ActivityRecord, Dataset, HealthMetricRecord, SleepMetricRecord};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, headers or fields
    #[arg(value_enum, default_value = "fields")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for each record type
    JsonSchema,
    /// Header row of each sheet
    Headers,
    /// Column descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Headers => self.print_headers(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let mut schemas = serde_json::Map::new();
        for (dataset, schema) in [
            (Dataset::Activity, schema_for!(ActivityRecord)),
            (Dataset::Health, schema_for!(HealthMetricRecord)),
            (Dataset::Sleep, schema_for!(SleepMetricRecord)),
        ] {
            schemas.insert(dataset.sheet_name().to_string(), serde_json::to_value(schema)?);
        }
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        Ok(())
    }

    fn print_headers(&self) -> anyhow::Result<()> {
        for dataset in Dataset::ALL {
            let names: Vec<_> = dataset.columns().iter().map(|c| c.name).collect();
            println!("{}: {}", dataset.sheet_name(), names.join(","));
        }
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        for dataset in Dataset::ALL {
            println!("{}", dataset.sheet_name());
            println!("{}", "=".repeat(dataset.sheet_name().len()));
            for column in dataset.columns() {
                println!("{:20}  {}", column.name, column.description);
            }
            println!();
        }
        Ok(())
    }
}
