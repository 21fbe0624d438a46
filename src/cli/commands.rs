use crate::error::SitedataResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[cfg(feature = "xlsx")]
use crate::error::SitedataError;
#[cfg(feature = "xlsx")]
use crate::transform;
#[cfg(feature = "xlsx")]
use crate::workbook::XlsxWorkbook;
#[cfg(feature = "xlsx")]
use colored::Colorize;
#[cfg(feature = "xlsx")]
use std::path::PathBuf;

/// Execute the convert command: read the workbook, write one JSON document
/// per recognized sheet into `out_dir`.
///
/// Sheets missing from the workbook are skipped without error or output file.
/// A read failure inside a present sheet aborts the whole run.
#[cfg(feature = "xlsx")]
pub fn convert(file: PathBuf, out_dir: PathBuf) -> SitedataResult<()> {
    if !file.exists() {
        return Err(SitedataError::FileNotFound(file));
    }

    let mut workbook = XlsxWorkbook::open(&file)?;
    fs::create_dir_all(&out_dir)?;

    println!(
        "{}",
        format!("📊 Reading workbook: {}", file.display())
            .bold()
            .green()
    );
    println!("{}", "─".repeat(60));

    if let Some(sheet) = workbook.sheet("Site")? {
        let doc = transform::site(&sheet);
        write_json(&out_dir.join("site.json"), &doc)?;
        println!("✅ {} written", "site.json".cyan());
    }

    if let Some(sheet) = workbook.sheet("Artists")? {
        let doc = transform::artists(&sheet);
        write_json(&out_dir.join("artists.json"), &doc)?;
        println!(
            "✅ {} written ({} items)",
            "artists.json".cyan(),
            doc.items.len()
        );
    }

    if let Some(sheet) = workbook.sheet("Music")? {
        let doc = transform::music(&sheet);
        write_json(&out_dir.join("music.json"), &doc)?;
        println!(
            "✅ {} written ({} items)",
            "music.json".cyan(),
            doc.sections[0].items.len()
        );
    }

    if let Some(sheet) = workbook.sheet("Novels")? {
        let doc = transform::novels(&sheet);
        write_json(&out_dir.join("novels.json"), &doc)?;
        println!(
            "✅ {} written ({} items)",
            "novels.json".cyan(),
            doc.items.len()
        );
    }

    if let Some(sheet) = workbook.sheet("News")? {
        let doc = transform::news(&sheet);
        write_json(&out_dir.join("news.json"), &doc)?;
        println!(
            "✅ {} written ({} items)",
            "news.json".cyan(),
            doc.items.len()
        );
    }

    if let Some(sheet) = workbook.sheet("Stamps")? {
        let doc = transform::stamps(&sheet);
        write_json(&out_dir.join("stamps.json"), &doc)?;
        println!(
            "✅ {} written ({} items)",
            "stamps.json".cyan(),
            doc.items.len()
        );
    }

    println!("{}", "─".repeat(60));
    println!(
        "{}",
        format!("🎉 All JSON documents generated ({})", out_dir.display())
            .bold()
            .green()
    );

    Ok(())
}

#[cfg(not(feature = "xlsx"))]
pub fn convert(
    _file: std::path::PathBuf,
    _out_dir: std::path::PathBuf,
) -> SitedataResult<()> {
    Err(crate::error::SitedataError::MissingDependency(
        "this build has no xlsx reader; rebuild with `cargo build --features xlsx`",
    ))
}

/// Serialize one document: pretty-printed, UTF-8, non-ASCII kept literal,
/// trailing newline. Overwrites any previous run's file.
fn write_json<T: Serialize>(path: &Path, doc: &T) -> SitedataResult<()> {
    let mut body = serde_json::to_string_pretty(doc)?;
    body.push('\n');
    fs::write(path, body)?;
    Ok(())
}
