use clap::Parser;
use colored::Colorize;
use sitedata::cli;
use sitedata::error::{SitedataError, SitedataResult};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sitedata")]
#[command(about = "Convert the site workbook (.xlsx) into the JSON documents the website build consumes")]
#[command(long_about = "Sitedata - Excel workbook to JSON data builder

Reads the named sheets of the input workbook and writes one JSON document
per sheet into the output directory:

  Site    → site.json      (singleton: title, tagline, theme, season, nav)
  Artists → artists.json
  Music   → music.json     (songs grouped into sections)
  Novels  → novels.json
  News    → news.json
  Stamps  → stamps.json

Sheets missing from the workbook are skipped; their JSON files are not
written. Data rows start at row 3 (rows 1-2 are headers) and end at the
first row with a blank identifying cell.

EXAMPLE:
  sitedata data_template.xlsx
  sitedata data_template.xlsx --out-dir public/data")]
#[command(version)]
struct Cli {
    /// Path to the workbook (.xlsx)
    file: Option<PathBuf>,

    /// Output directory for the generated JSON documents
    #[arg(short, long, default_value = "data")]
    out_dir: PathBuf,
}

fn run(cli: Cli) -> SitedataResult<()> {
    // Checked by hand instead of a clap required arg so the usage
    // failure exits 1, matching every other failure path.
    let file = cli.file.ok_or(SitedataError::Usage)?;
    cli::convert(file, cli.out_dir)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}
