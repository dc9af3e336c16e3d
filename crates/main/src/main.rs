use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use log::{error, info};

use refguide::interactive::{filter, track_event, track_page_loaded};
use refguide::{
    extract, ExportConfig, Exporter, JsonContent, PdfSurface, RecordingSurface, ReferenceDocument,
};

/// Exports and searches function reference guides.
///
/// The PDF export needs the Roboto fonts under `assets/fonts` (next to the
/// binary or in the `refguide` crate), or a directory given through
/// `REFGUIDE_FONTS_DIR`.
#[derive(Parser)]
#[command(author, version, about = "Function reference guide exporter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ContentArgs {
    /// JSON file with the guide's sections and entries.
    #[arg(short, long, env = "REFGUIDE_CONTENT")]
    content: PathBuf,

    /// Optional JSON file overriding layout, title page and footer settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the guide to a paginated PDF.
    Export {
        #[command(flatten)]
        input: ContentArgs,

        /// Output path; defaults to the configured file name.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Add a PDF outline entry per section.
        #[cfg(feature = "bookmarks")]
        #[arg(long)]
        bookmarks: bool,
    },

    /// List entries whose name, description or syntax contain QUERY.
    Search {
        #[command(flatten)]
        input: ContentArgs,

        query: String,
    },

    /// Show where every section and entry would land, without rendering a PDF.
    #[command(alias = "dry-run")]
    Outline {
        #[command(flatten)]
        input: ContentArgs,
    },
}

fn load(input: &ContentArgs) -> Result<(ReferenceDocument, ExportConfig), Box<dyn Error>> {
    let config = match &input.config {
        Some(path) => ExportConfig::from_path(path)?,
        None => ExportConfig::default(),
    };
    let document = extract(&JsonContent::from_path(&input.content)?)?;
    Ok((document, config))
}

fn run_export(
    document: &ReferenceDocument,
    config: ExportConfig,
    output: Option<&Path>,
    bookmarks: bool,
) -> Result<(), Box<dyn Error>> {
    let surface = PdfSurface::new(
        &config.title_page.title,
        config.layout.page_width,
        config.layout.page_height,
    )?;
    let export = Exporter::new(config).export_document(document, surface)?;

    let bytes = if bookmarks {
        with_bookmarks(&export)?
    } else {
        export.artifact.bytes
    };

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&export.artifact.file_name));
    fs::write(&path, &bytes)?;
    println!(
        "Generated {} ({} pages, {} bytes)",
        path.display(),
        export.summary.page_count,
        bytes.len()
    );
    Ok(())
}

#[cfg(feature = "bookmarks")]
fn with_bookmarks(
    export: &refguide::Export<refguide::PdfArtifact>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    Ok(refguide::bookmarks::apply_section_bookmarks(
        &export.artifact.bytes,
        &export.summary.sections,
    )?)
}

#[cfg(not(feature = "bookmarks"))]
fn with_bookmarks(
    export: &refguide::Export<refguide::PdfArtifact>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    Ok(export.artifact.bytes.clone())
}

/// Plain-text rendition printed when the PDF export fails.
fn print_view(document: &ReferenceDocument, config: &ExportConfig) {
    println!("{}", config.title_page.title);
    println!("{}", config.title_page.subtitle);
    for section in document.sections() {
        println!();
        println!("== {} ==", section.title());
        for entry in section.entries() {
            println!();
            println!("{}", entry.name());
            println!("  {}", entry.description());
            println!("  Syntax:  {}", entry.syntax());
            println!("  Example: {}", entry.example());
        }
    }
}

fn run_search(document: &ReferenceDocument, query: &str) {
    let results = filter(document, query);
    if results.show_no_results() {
        println!("No functions found for '{}'.", query.trim());
        return;
    }

    for (index, section) in document.sections().iter().enumerate() {
        if !results.is_section_visible(index) {
            continue;
        }
        println!("{}", section.title());
        for (entry_index, entry) in section.entries().iter().enumerate() {
            if results.is_entry_visible(index, entry_index) {
                println!("  {:<24} {}", entry.name(), entry.syntax());
            }
        }
    }
}

fn run_outline(document: &ReferenceDocument, config: ExportConfig) -> Result<(), Box<dyn Error>> {
    let export = Exporter::new(config).export_document(document, RecordingSurface::new())?;
    for section in &export.summary.sections {
        println!("page {:>3}  {}", section.page, section.title);
    }
    println!(
        "{} entries on {} pages",
        export.summary.entries_written, export.summary.page_count
    );
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Export {
            input,
            output,
            #[cfg(feature = "bookmarks")]
            bookmarks,
        } => {
            #[cfg(not(feature = "bookmarks"))]
            let bookmarks = false;

            let (document, config) = load(&input)?;
            let content = input.content.display().to_string();
            track_event("export_started", &[("content", content.as_str())]);

            if let Err(err) = run_export(&document, config.clone(), output.as_deref(), bookmarks) {
                error!("PDF generation failed: {}", err);
                info!("Falling back to the plain-text print view");
                print_view(&document, &config);
                return Err(err);
            }
            Ok(())
        }
        Commands::Search { input, query } => {
            let (document, _) = load(&input)?;
            run_search(&document, &query);
            Ok(())
        }
        Commands::Outline { input } => {
            let (document, config) = load(&input)?;
            run_outline(&document, config)
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    track_page_loaded(concat!("refguide/", env!("CARGO_PKG_VERSION")));

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
