use clap::{Parser, Subcommand};

mod charts;
mod cmd;
mod core;
mod output;
mod utils;
mod workbook;

/// Reference workbook and charts of the data a smartwatch can track
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the workbook and the three charts (the default)
    Export(cmd::ExportCommand),
    /// Print the reference tables
    Show(cmd::ShowCommand),
    /// Print the column layout of each sheet
    Schema(cmd::SchemaCommand),
    /// Print a SHA-256 fingerprint of each sheet's contents
    Digest(cmd::DigestCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        None => cmd::ExportCommand::default().exec(),
        Some(Command::Export(export)) => export.exec(),
        Some(Command::Show(show)) => show.exec(),
        Some(Command::Schema(schema)) => schema.exec(),
        Some(Command::Digest(digest)) => digest.exec(),
    }
}
