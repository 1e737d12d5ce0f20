//! samdoc CLI - writes the SAM project documentation

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use samdoc::{
    capability, parse_timestamp, save_document, DocumentStats, DocxOptions, GenerateOptions,
    JsonFormat, PageSize, RenderOptions,
};

#[derive(Parser)]
#[command(name = "samdoc")]
#[command(version)]
#[command(about = "Generate the SAM project documentation (DOCX)", long_about = None)]
struct Cli {
    /// Output file (defaults to SAM_Project_Documentation.docx next to the executable)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the documentation as DOCX
    Generate {
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Cover timestamp ("YYYY-MM-DD HH:MM"); defaults to now
        #[arg(long, env = "SAMDOC_TIMESTAMP")]
        timestamp: Option<String>,

        /// Create missing parent directories
        #[arg(long)]
        create_dirs: bool,

        /// Page size
        #[arg(long, value_enum, default_value = "letter")]
        page: PageArg,

        /// Body font family
        #[arg(long, default_value = "Calibri")]
        font: String,
    },

    /// Print the documentation as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,
    },

    /// Print the documentation as a plain text outline
    Text {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the document model as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check whether a file is a DOCX package
    Info {
        /// File to inspect
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageArg {
    /// US Letter (8.5 x 11 in)
    Letter,
    /// ISO A4 (210 x 297 mm)
    A4,
}

impl From<PageArg> for PageSize {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Letter => PageSize::Letter,
            PageArg::A4 => PageSize::A4,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            output,
            timestamp,
            create_dirs,
            page,
            font,
        }) => cmd_generate(
            output.as_deref(),
            timestamp.as_deref(),
            create_dirs,
            page,
            font,
        ),
        Some(Commands::Markdown {
            output,
            frontmatter,
        }) => cmd_markdown(output.as_deref(), frontmatter),
        Some(Commands::Text { output }) => cmd_text(output.as_deref()),
        Some(Commands::Json { output, compact }) => cmd_json(output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(
            cli.output.as_deref(),
            None,
            false,
            PageArg::Letter,
            DocxOptions::default().font_family,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    output: Option<&Path>,
    timestamp: Option<&str>,
    create_dirs: bool,
    page: PageArg,
    font: String,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fail before doing any work when the DOCX backend is not built in
    capability::ensure_docx()?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(samdoc::default_output_path);

    let mut options = GenerateOptions::new()
        .with_create_dirs(create_dirs)
        .with_docx_options(
            DocxOptions::new()
                .with_font(font)
                .with_page_size(page.into()),
        );
    if let Some(ts) = timestamp {
        options = options.with_generated_at(parse_timestamp(ts)?);
    }

    let (written, stats) = run_generate(&path, &options)?;

    println!(
        "{} {}",
        "Wrote documentation to:".green(),
        written.display()
    );
    println!(
        "  {} {} headings, {} paragraphs, {} list items, {} command blocks",
        "└─".dimmed(),
        stats.heading_count,
        stats.paragraph_count,
        stats.list_item_count,
        stats.styled_block_count
    );

    Ok(())
}

/// Build the document once, write it, and report what was written.
fn run_generate(
    path: &Path,
    options: &GenerateOptions,
) -> samdoc::Result<(PathBuf, DocumentStats)> {
    let doc = samdoc::build_document(options);
    let written = save_document(&doc, path, options)?;
    Ok((written, doc.stats()))
}

fn cmd_markdown(
    output: Option<&Path>,
    frontmatter: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = samdoc::build_document(&GenerateOptions::default());
    let options = RenderOptions::new().with_frontmatter(frontmatter);
    let markdown = samdoc::render::to_markdown(&doc, &options)?;
    emit(output, &markdown)
}

fn cmd_text(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = samdoc::build_document(&GenerateOptions::default());
    let text = samdoc::render::to_text(&doc, &RenderOptions::default())?;
    emit(output, &text)
}

fn cmd_json(output: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = samdoc::build_document(&GenerateOptions::default());

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = samdoc::render::to_json(&doc, format)?;
    emit(output, &json)
}

fn emit(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let size = fs::metadata(input)?.len();
    let is_docx = samdoc::detect_docx(input)?;

    println!("{}", "File Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {} bytes", "Size".bold(), size);
    println!(
        "{}: {}",
        "DOCX package".bold(),
        if is_docx { "Yes".green() } else { "No".red() }
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "samdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("SAM project documentation generator");
    println!();
    println!(
        "{}: {}",
        "DOCX backend".bold(),
        if capability::has_docx() {
            "enabled"
        } else {
            "not built"
        }
    );
    println!("License: MIT");
}
