//! plandoc CLI - preview and export harness for marketing plans

mod clipboard;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use plandoc::render::{to_json, NodeKind};
use plandoc::{
    DirectorySink, DisplayNode, ExportStatus, HeadingLevel, JsonFormat, PlanOptions, PlanSession,
    Theme,
};

use crate::clipboard::SystemClipboard;

#[derive(Parser)]
#[command(name = "plandoc")]
#[command(version)]
#[command(about = "Preview and export marketing plans", long_about = None)]
struct Cli {
    /// JSON options file (page size, margins, theme, filename prefix)
    #[arg(long, global = true, value_name = "JSON", env = "PLANDOC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the plan in the terminal
    Preview {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Export the plan as a dated PDF
    Export {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Export date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Render the plan as an HTML fragment
    Html {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Use the dark theme
        #[arg(long)]
        dark: bool,
    },

    /// Render display nodes or laid-out pages as JSON
    Json {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit laid-out pages instead of display nodes
        #[arg(long)]
        pages: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show plan statistics
    Info {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Copy the raw plan text to the clipboard
    Copy {
        /// Plan text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Preview { input } => cmd_preview(&input, config),
        Commands::Export {
            input,
            output,
            date,
        } => cmd_export(&input, output.as_deref(), date, config),
        Commands::Html {
            input,
            output,
            dark,
        } => cmd_html(&input, output.as_deref(), dark, config),
        Commands::Json {
            input,
            output,
            pages,
            compact,
        } => cmd_json(&input, output.as_deref(), pages, compact, config),
        Commands::Info { input } => cmd_info(&input, config),
        Commands::Copy { input } => cmd_copy(&input, config),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_session(input: &Path, config: Option<&Path>) -> Result<PlanSession, Box<dyn std::error::Error>> {
    let options = match config {
        Some(path) => PlanOptions::from_file(path)?,
        None => PlanOptions::default(),
    };
    let text = fs::read_to_string(input)?;

    let mut session = PlanSession::new(options)?;
    session.load(text);
    Ok(session)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_preview(input: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(input, config)?;
    for node in session.display_nodes() {
        print_node(&node);
    }
    Ok(())
}

fn print_node(node: &DisplayNode) {
    match &node.kind {
        NodeKind::Heading {
            level: HeadingLevel::H1,
        } => {
            println!("\n{}", node.text.cyan().bold().underline());
            println!();
        }
        NodeKind::Heading {
            level: HeadingLevel::H2,
        } => println!("\n{}", node.text.cyan().bold()),
        NodeKind::Heading {
            level: HeadingLevel::H3,
        } => println!("{}", node.text.bold()),
        NodeKind::Strong => println!("{}", node.text.bold()),
        NodeKind::ListItem { number: Some(n) } => println!("  {} {}", format!("{}.", n).dimmed(), node.text),
        NodeKind::ListItem { number: None } => println!("  {} {}", "•".dimmed(), node.text),
        NodeKind::Rule => println!("{}", "─".repeat(40).dimmed()),
        NodeKind::LineBreak => println!(),
        NodeKind::Paragraph => println!("{}", node.text),
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    date: Option<NaiveDate>,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(input, config)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message("Generating PDF...");

    let mut sink = DirectorySink::new(&output_dir);
    match session.export(&mut sink, date) {
        ExportStatus::Saved(saved) => {
            pb.finish_with_message("Done!");
            let path = saved
                .path
                .unwrap_or_else(|| output_dir.join(&saved.filename));
            println!("{} {} ({} bytes)", "Saved to".green(), path.display(), saved.size);
            Ok(())
        }
        ExportStatus::Busy => {
            pb.finish_and_clear();
            println!("{}", "An export is already in progress".yellow());
            Ok(())
        }
        ExportStatus::Failed(notice) => {
            pb.finish_and_clear();
            eprintln!("{}", notice.message.red());
            Err(notice.detail.into())
        }
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    dark: bool,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(input, config)?;
    if dark {
        session.set_theme(Theme::Dark);
    }
    write_output(output, &session.html())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    pages: bool,
    compact: bool,
    config: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(input, config)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = if pages {
        to_json(&session.pages()?, format)?
    } else {
        to_json(&session.display_nodes(), format)?
    };

    write_output(output, &json)
}

fn cmd_info(input: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(input, config)?;
    let stats = session.stats()?;
    let options = session.options();

    println!("{}", "Plan Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {} x {} mm",
        "Page".bold(),
        options.geometry.page_width(),
        options.geometry.page_height()
    );
    println!("{}: {}", "Pages".bold(), stats.page_count.unwrap_or_default());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bold lines".bold(), stats.bold_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Rules".bold(), stats.horizontal_rule_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_copy(input: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(input, config)?;
    if cfg!(target_os = "linux") {
        println!("{}", "Holding the clipboard until it is pasted or replaced...".dimmed());
    }
    session.copy_to(&mut SystemClipboard)?;
    println!("{}", "Copied to clipboard".green());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "plandoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Marketing plan preview and export tool");
    println!();
    println!("Library: plandoc {}", plandoc::VERSION);
    println!("License: MIT");
}
