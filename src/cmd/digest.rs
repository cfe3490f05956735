//! Digest command - fingerprint the sheet contents

use crate::core::{sheet_digest, sheets};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct DigestCommand {
    /// Output as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SheetDigest {
    sheet: &'static str,
    rows: usize,
    sha256: String,
}

impl DigestCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let digests: Vec<_> = sheets()
            .iter()
            .map(|sheet| SheetDigest {
                sheet: sheet.name,
                rows: sheet.rows.len(),
                sha256: sheet_digest(sheet),
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&digests)?);
        } else {
            for d in &digests {
                println!("{}  {:<16} {:>3} rows", d.sha256, d.sheet, d.rows);
            }
        }
        Ok(())
    }
}
