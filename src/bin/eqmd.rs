//! Eqmd CLI - ChatGPT-style LaTeX ↔ Markdown equation delimiter converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
use eqmd::{
    convert_auto, detect_format,
    export::{export, DocumentView, ExportFormat},
    latex_to_markdown, markdown_to_latex, span_stats,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "eqmd")]
#[command(version)]
#[command(about = "Eqmd - ChatGPT-style LaTeX ↔ Markdown equation delimiter converter", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
    direction: Direction,

    /// Detect and print the input convention and span counts without converting
    #[arg(long)]
    detect: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a file (default action)
    Convert {
        /// Input file path
        input: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: Option<String>,

        /// Conversion direction
        #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
        direction: Direction,
    },

    /// Convert and export to a document format
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportKind,

        /// Input file path
        input: Option<String>,

        /// Output file path (defaults to a name derived from the title)
        #[arg(short, long)]
        output: Option<String>,

        /// Document title
        #[arg(short, long, default_value = "Converted Markdown")]
        title: String,
    },

    /// Batch convert multiple files
    Batch {
        /// Input directory or single file
        input: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Conversion direction
        #[arg(short, long, value_enum, default_value_t = Direction::L2m)]
        direction: Direction,

        /// File extension for output files
        #[arg(short, long)]
        extension: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// Auto-detect based on file extension or content
    Auto,
    /// ChatGPT-style LaTeX to Markdown
    L2m,
    /// Markdown to ChatGPT-style LaTeX
    M2l,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum ExportKind {
    Html,
    Markdown,
    Latex,
    Text,
    Pdf,
    Jpg,
    Word,
}

#[cfg(feature = "cli")]
impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Html => ExportFormat::Html,
            ExportKind::Markdown => ExportFormat::Markdown,
            ExportKind::Latex => ExportFormat::Latex,
            ExportKind::Text => ExportFormat::Text,
            ExportKind::Pdf => ExportFormat::Pdf,
            ExportKind::Jpg => ExportFormat::Jpeg,
            ExportKind::Word => ExportFormat::Word,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let (input, filename) = read_input(cli.input_file.as_deref())?;

    // If detect mode, report convention and span counts and exit
    if cli.detect {
        let stats = span_stats(&input);
        println!("{}", detect_format(&input));
        println!(
            "latex spans: {} inline, {} display",
            stats.source_inline, stats.source_display
        );
        println!(
            "markdown spans: {} inline, {} display",
            stats.target_inline, stats.target_display
        );
        return Ok(());
    }

    let result = convert(&input, cli.direction, filename.as_deref());
    write_output(cli.output.as_deref(), &result)
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<(String, Option<String>)> {
    match path {
        Some(path) => Ok((fs::read_to_string(path)?, Some(path.to_string()))),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok((buffer, None))
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, result: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn resolve_direction(input: &str, direction: Direction, filename: Option<&str>) -> Direction {
    match direction {
        Direction::Auto => {
            if let Some(name) = filename {
                if name.ends_with(".md") || name.ends_with(".markdown") {
                    return Direction::M2l;
                }
                if name.ends_with(".tex") {
                    return Direction::L2m;
                }
            }
            // Content-based detection
            if detect_format(input) == "markdown" {
                Direction::M2l
            } else {
                Direction::L2m
            }
        }
        d => d,
    }
}

#[cfg(feature = "cli")]
fn convert(input: &str, direction: Direction, filename: Option<&str>) -> String {
    match resolve_direction(input, direction, filename) {
        Direction::L2m => latex_to_markdown(input),
        Direction::M2l => markdown_to_latex(input),
        Direction::Auto => convert_auto(input).0,
    }
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Convert {
            input,
            output,
            direction,
        } => {
            let (content, filename) = read_input(input.as_deref())?;
            let result = convert(&content, direction, filename.as_deref());
            write_output(output.as_deref(), &result)?;
        }

        Commands::Export {
            format,
            input,
            output,
            title,
        } => {
            let (content, _) = read_input(input.as_deref())?;
            let markdown = latex_to_markdown(&content);
            let doc = DocumentView::new(&markdown, &title);

            match export(&doc, format.into()) {
                Ok(artifact) => {
                    let path = output.unwrap_or_else(|| artifact.file_name.clone());
                    fs::write(&path, &artifact.bytes)?;
                    eprintln!("✓ Exported {} ({})", path, artifact.media_type);
                }
                Err(e) => {
                    eprintln!("✗ Export failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Batch {
            input,
            output_dir,
            direction,
            extension,
        } => {
            fs::create_dir_all(&output_dir)?;

            let out_ext = extension.unwrap_or_else(|| match direction {
                Direction::L2m => "md".to_string(),
                Direction::M2l => "txt".to_string(),
                Direction::Auto => "out".to_string(),
            });

            let input_path = Path::new(&input);
            let files: Vec<_> = if input_path.is_dir() {
                fs::read_dir(input_path)?
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        let path = e.path();
                        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
                        match direction {
                            Direction::L2m => ext == "txt" || ext == "tex",
                            Direction::M2l => ext == "md" || ext == "markdown",
                            Direction::Auto => true,
                        }
                    })
                    .map(|e| e.path())
                    .collect()
            } else {
                vec![input_path.to_path_buf()]
            };

            let mut success_count = 0;
            let mut error_count = 0;

            for file_path in files {
                let filename = file_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");

                let output_path = Path::new(&output_dir).join(format!("{}.{}", filename, out_ext));

                match fs::read_to_string(&file_path) {
                    Ok(content) => {
                        let result = convert(&content, direction, file_path.to_str());
                        match fs::write(&output_path, &result) {
                            Ok(_) => {
                                eprintln!("✓ {}", output_path.display());
                                success_count += 1;
                            }
                            Err(e) => {
                                eprintln!("✗ {} - write error: {}", output_path.display(), e);
                                error_count += 1;
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("✗ {} - read error: {}", file_path.display(), e);
                        error_count += 1;
                    }
                }
            }

            eprintln!(
                "\nBatch conversion complete: {} succeeded, {} failed",
                success_count, error_count
            );

            if error_count > 0 {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Eqmd - ChatGPT-style LaTeX ↔ Markdown equation delimiter converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ \\( \\) / \\[ \\] → $ $ / $$ $$ conversion");
            println!("  ✓ $ $ / $$ $$ → \\( \\) / \\[ \\] conversion (best effort)");
            println!("  ✓ Auto-detection of input convention");
            println!("  ✓ Export: HTML, Markdown, LaTeX, text, Word, PDF, JPG");
            println!("  ✓ Batch file processing");
            println!();
            println!("PDF and JPG export require wkhtmltopdf / wkhtmltoimage on PATH.");
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install eqmd --features cli");
    eprintln!("  eqmd [OPTIONS] [INPUT_FILE]");
}
