// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};

use crate::anomaly::Anomaly;
use crate::config::options::{DocKind, ExportFormat, ExportOptions};
use crate::{data, file, log, scrape};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Gradebook,
    Assignments,
    Attendance,
    ReportCard,
    ReportCardNames,
}

impl From<KindArg> for DocKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Gradebook => DocKind::Gradebook,
            KindArg::Assignments => DocKind::Assignments,
            KindArg::Attendance => DocKind::Attendance,
            KindArg::ReportCard => DocKind::ReportCard,
            KindArg::ReportCardNames => DocKind::ReportCardNames,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Tsv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sky_scrape")]
#[command(about = "Rebuild grades, attendance and report cards from saved portal pages", long_about = None)]
struct Args {
    /// Which page the input holds
    #[arg(long, value_enum)]
    kind: KindArg,

    /// Saved page (HTML, or report-card text)
    #[arg(long)]
    input: PathBuf,

    /// Report card name as listed by the portal; defaults to the input file stem
    #[arg(long)]
    name: Option<String>,

    #[arg(long, value_enum, default_value = "csv")]
    format: FormatArg,

    /// Emit a header line (CSV/TSV)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    headers: bool,

    /// Output file or directory; stdout when omitted
    #[arg(short, long)]
    out: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Table + rendered export + anomalies for one document.
fn render(kind: DocKind, export: &ExportOptions, text: &str, name: &str) -> Result<(String, usize, Vec<Anomaly>)> {
    let boxed = |e: Box<dyn std::error::Error>| eyre!("{e}");
    Ok(match kind {
        DocKind::Gradebook => {
            let book = scrape::collect_gradebook(text);
            let table = data::term_grades(&book);
            (file::render_export(export, &table, &book).map_err(boxed)?, table.len(), book.anomalies)
        }
        DocKind::Assignments => {
            let book = scrape::collect_gradebook(text);
            let table = data::assignments(&book);
            (file::render_export(export, &table, &book).map_err(boxed)?, table.len(), book.anomalies)
        }
        DocKind::Attendance => {
            let att = scrape::collect_attendance(text);
            let table = data::attendance(&att);
            (file::render_export(export, &table, &att).map_err(boxed)?, table.len(), att.anomalies)
        }
        DocKind::ReportCard => {
            let card = scrape::collect_report_card(name, text);
            let table = data::report_card(&card);
            (file::render_export(export, &table, &card).map_err(boxed)?, table.len(), card.anomalies)
        }
        DocKind::ReportCardNames => {
            let infos = scrape::collect_report_card_names(text);
            let table = data::report_card_names(&infos);
            (file::render_export(export, &table, &infos).map_err(boxed)?, table.len(), Vec::new())
        }
    })
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(if args.verbose { "debug" } else { "info" });

    let kind: DocKind = args.kind.into();
    let export = ExportOptions {
        format: args.format.into(),
        include_headers: args.headers,
        out: args.out.as_deref().map(PathBuf::from),
    };

    let text = file::read_document(&args.input).map_err(|e| eyre!("{e}"))?;
    let name = args.name.clone().unwrap_or_else(|| {
        args.input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
    });

    let (contents, rows, anomalies) = render(kind, &export, &text, &name)?;

    for a in &anomalies {
        eprintln!("warning: {a}");
    }

    match &export.out {
        None => print!("{contents}"),
        Some(o) => {
            let default_name = export
                .default_path_for(kind)
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| file::default_filename(kind.stem(), export.format));
            let path = file::resolve_single_out_path(&o.to_string_lossy(), &default_name).map_err(|e| eyre!("{e}"))?;
            let written = file::write_export_single(&path, &contents).map_err(|e| eyre!("{e}"))?;
            logf!("Wrote {} rows to {}", rows, written.display());
        }
    }
    Ok(())
}
