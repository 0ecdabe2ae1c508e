//! Ringkas CLI - format AI answers for display.

use clap::{Args, Parser, Subcommand};
use ringkas::transforms::{CleanContent, Pipeline, ShiftHeadings, StripEmpty};
use ringkas::{Answer, EmitOptions, Section, Transformer, html, json, plaintext};
use ringkas_config::{Config, OutputFormat};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ringkas")]
#[command(author, version, about = "Format AI answers for display", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment an answer and render it
    Format(FormatArgs),

    /// Show how an answer is segmented
    Sections {
        /// Input file (use - or omit for stdin)
        input: Option<PathBuf>,
    },

    /// List available output formats
    Formats,
}

#[derive(Args)]
struct FormatArgs {
    /// Input file (use - or omit for stdin)
    input: Option<PathBuf>,

    /// Output file (use - for stdout, or omit to use stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (from the output extension or config if not specified)
    #[arg(short, long)]
    to: Option<Format>,

    /// Pretty-print output
    #[arg(long)]
    pretty: bool,

    /// Keep emphasis markers in rendered text
    #[arg(long)]
    raw_markup: bool,

    /// Wrap HTML output in a full page
    #[arg(long)]
    full_document: bool,

    /// Keep sections that are blank after cleaning
    #[arg(long)]
    keep_empty: bool,

    /// Shift heading levels by N (negative for shallower)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    shift_headings: Option<i64>,

    /// Config file (default: ~/.config/ringkas/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Html,
    Plaintext,
    Json,
}

impl Format {
    const ALL: [Format; 3] = [Format::Html, Format::Plaintext, Format::Json];

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => Some(Format::Html),
            "txt" | "text" => Some(Format::Plaintext),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Plaintext => "plaintext",
            Format::Json => "json",
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Html => &["html", "htm"],
            Format::Plaintext => &["txt", "text"],
            Format::Json => &["json"],
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Format::Html,
            OutputFormat::Plaintext => Format::Plaintext,
            OutputFormat::Json => Format::Json,
        }
    }
}

/// Config file values with command line flags applied on top.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: Format,
    pretty: bool,
    raw_markup: bool,
    full_document: bool,
    strip_empty: bool,
    heading_shift: i64,
}

impl Settings {
    fn resolve(args: &FormatArgs, config: &Config) -> Self {
        let format = args
            .to
            .or_else(|| {
                args.output.as_ref().and_then(|p| {
                    if p.as_os_str() == "-" {
                        None
                    } else {
                        p.extension()
                            .and_then(|e| e.to_str())
                            .and_then(Format::from_extension)
                    }
                })
            })
            .unwrap_or_else(|| config.format.into());

        Self {
            format,
            pretty: args.pretty || config.pretty,
            raw_markup: args.raw_markup || config.raw_markup,
            full_document: args.full_document || config.full_document,
            strip_empty: config.strip_empty && !args.keep_empty,
            heading_shift: args.shift_headings.unwrap_or(config.heading_shift),
        }
    }

    /// Transforms to run before emitting, and the options to emit with.
    fn pipeline(&self) -> (Pipeline, EmitOptions) {
        let mut pipeline = Pipeline::new();
        let mut options = EmitOptions {
            pretty: self.pretty,
            raw_markup: self.raw_markup,
        };

        if self.heading_shift != 0 {
            pipeline = pipeline.then(ShiftHeadings::new(self.heading_shift));
        }
        if self.strip_empty {
            // Blankness is judged on cleaned text, so clean up front and
            // emit the result as is.
            if !self.raw_markup {
                pipeline = pipeline.then(CleanContent);
                options.raw_markup = true;
            }
            pipeline = pipeline.then(StripEmpty);
        }

        (pipeline, options)
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format(args) => {
            format(args)?;
        }
        Commands::Sections { input } => {
            sections(input.as_deref())?;
        }
        Commands::Formats => {
            list_formats();
        }
    }

    Ok(())
}

fn format(args: FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &config);
    tracing::debug!(?settings, "resolved settings");

    let input_text = read_input(args.input.as_deref())?;
    let answer = parse(&input_text);

    let (pipeline, options) = settings.pipeline();
    let answer = pipeline.transform(answer)?;

    let output_bytes = emit(&answer, &settings, &options)?;

    match args.output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(&path, &output_bytes)?;
        }
        _ => {
            io::stdout().write_all(&output_bytes)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .ok_or_else(|| format!("config file not found: {}", path.display()).into()),
        None => Ok(Config::load()?),
    }
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse(input: &str) -> Answer {
    let result = ringkas::parse(input);

    for warning in &result.warnings {
        match &warning.location {
            Some(location) => tracing::warn!(%location, "{}", warning.message),
            None => tracing::warn!("{}", warning.message),
        }
    }

    result.value
}

fn emit(
    answer: &Answer,
    settings: &Settings,
    options: &EmitOptions,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if settings.full_document && settings.format != Format::Html {
        tracing::debug!(format = settings.format.name(), "full_document only applies to html");
    }

    let result = match settings.format {
        Format::Html if settings.full_document => html::emit_full_document(answer, options)?,
        Format::Html => html::emit_with_options(answer, options)?,
        Format::Plaintext => plaintext::emit_with_options(answer, options)?,
        Format::Json => json::emit_with_options(answer, options)?,
    };

    for warning in &result.warnings {
        tracing::warn!("{}", warning.message);
    }

    Ok(result.value)
}

fn sections(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let input_text = read_input(input)?;
    let result = ringkas::parse(&input_text);

    let mut out = io::stdout().lock();
    write!(out, "{}", describe(&result.value))?;
    for warning in &result.warnings {
        match &warning.location {
            Some(location) => writeln!(out, "warning: {location}: {}", warning.message)?,
            None => writeln!(out, "warning: {}", warning.message)?,
        }
    }

    Ok(())
}

/// One line per heading or paragraph, one indented line per list item.
fn describe(answer: &Answer) -> String {
    let mut out = String::new();
    if answer.is_unstructured() {
        out.push_str("(no sections)\n");
        return out;
    }

    for section in &answer.sections {
        match section {
            Section::Heading { content, level } => {
                out.push_str(&format!("heading({level}): {content}\n"));
            }
            Section::Paragraph { content } => {
                out.push_str(&format!("paragraph: {content}\n"));
            }
            Section::List { items } => {
                out.push_str("list:\n");
                for item in items {
                    out.push_str(&format!("  - {item}\n"));
                }
            }
            Section::NumberedList { items } => {
                out.push_str("numbered-list:\n");
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("  {}. {item}\n", i + 1));
                }
            }
        }
    }
    out
}

fn list_formats() {
    println!("Available output formats:\n");
    println!("  {:12} EXTENSIONS", "FORMAT");
    println!("  {:12} ----------", "------");

    for fmt in Format::ALL {
        let exts = fmt.extensions().join(", ");
        println!("  {:12} {}", fmt.name(), exts);
    }
}
