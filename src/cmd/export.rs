//! Export command - write the reference workbook and charts

use crate::charts;
use crate::core::{sheet_digest, sheets};
use crate::output::{OutputDir, DEFAULT_OUTPUT_DIR, WORKBOOK_FILE};
use crate::workbook;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportCommand {
    /// Directory to write the workbook and charts into (must already exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Only write the workbook, skip the charts
    #[arg(long)]
    no_charts: bool,

    /// Open the output directory when done
    #[arg(long)]
    open: bool,
}

impl Default for ExportCommand {
    fn default() -> Self {
        ExportCommand {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            no_charts: false,
            open: false,
        }
    }
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let sheets = sheets();
        for sheet in &sheets {
            log::info!("Sheet '{}' sha256 {}", sheet.name, sheet_digest(sheet));
        }

        // everything is rendered before the first write so a failure leaves no files
        let xlsx = workbook::render(&sheets)?;
        let charts = if self.no_charts {
            Vec::new()
        } else {
            charts::render_all()?
        };

        let out = OutputDir::open(&self.output_dir)?;

        let workbook_path = out.write(WORKBOOK_FILE, &xlsx)?;
        println!("Updated file saved at: {}", workbook_path.display());

        if !charts.is_empty() {
            for chart in &charts {
                out.write(chart.file_name, &chart.png)?;
            }
            let names: Vec<_> = charts
                .iter()
                .map(|c| format!("'{}'", c.file_name))
                .collect();
            println!("Visualizations saved as {}", join_names(&names));
        }

        if self.open {
            opener::open(out.path())?;
        }

        Ok(())
    }
}

/// "a", "a and b", "a, b, and c"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ACTIVITY_CHART_FILE, HEALTH_CHART_FILE, SLEEP_CHART_FILE};

    #[test]
    fn confirmation_lists_all_charts() {
        let names: Vec<_> = [ACTIVITY_CHART_FILE, HEALTH_CHART_FILE, SLEEP_CHART_FILE]
            .iter()
            .map(|n| format!("'{}'", n))
            .collect();
        assert_eq!(
            join_names(&names),
            "'Activity_Data_Barplot.png', 'Health_Metrics_Piechart.png', and 'Sleep_Data_Barplot.png'"
        );
    }

    #[test]
    fn join_short_lists() {
        assert_eq!(join_names(&[]), "");
        assert_eq!(join_names(&["a".to_string()]), "a");
        assert_eq!(join_names(&["a".to_string(), "b".to_string()]), "a and b");
    }

    #[test]
    fn missing_directory_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ExportCommand {
            output_dir: dir.path().join("missing"),
            no_charts: true,
            open: false,
        };
        assert!(cmd.exec().is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn workbook_only_export() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = ExportCommand {
            output_dir: dir.path().to_path_buf(),
            no_charts: true,
            open: false,
        };
        cmd.exec().unwrap();
        let workbook = dir.path().join(WORKBOOK_FILE);
        assert!(std::fs::metadata(&workbook).unwrap().len() > 0);
        assert!(!dir.path().join(ACTIVITY_CHART_FILE).exists());
    }
}
