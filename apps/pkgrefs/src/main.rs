use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use pkgrefs_core::{ParseOptions, extract_package_references};
use pkgrefs_scan::ScanConfig;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pkgrefs")]
#[command(about = "List the packages JavaScript/TypeScript code references", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan every source file in a project
    Scan(ScanConfig),
    /// Extract the packages referenced by a single file or stdin
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// File to read (reads stdin when omitted)
    file: Option<PathBuf>,

    /// File name used to pick the parser flavour (defaults to FILE, or file.ts for stdin)
    #[arg(long)]
    file_name: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    match cli.command {
        Commands::Scan(cfg) => run_scan(&mut stdout, cfg),
        Commands::Extract(args) => run_extract(&mut stdout, args),
    }
}

fn run_scan<W: Write>(stdout: &mut W, cfg: ScanConfig) -> Result<()> {
    let start = Instant::now();
    let num_threads = rayon::current_num_threads();
    info!("Running package scan (using {} threads)", num_threads);
    debug!("Config: root={:?}, entry_glob={:?}", cfg.root, cfg.entry_glob);

    let json = cfg.json;
    let per_file = cfg.per_file;
    let result = pkgrefs_scan::run_scan(cfg)?;

    if json {
        serde_json::to_writer_pretty(&mut *stdout, &result)?;
        writeln!(stdout)?;
    } else {
        if result.packages.is_empty() {
            pkgrefs_scan::print_no_packages_message(stdout)?;
        }
        pkgrefs_scan::print_scan_report(stdout, &result, per_file)?;
        writeln!(
            stdout,
            "\n{} Finished in {}ms on {} files (using {} threads).",
            "●".bright_blue(),
            start.elapsed().as_millis().to_string().cyan(),
            result.files_analyzed.to_string().cyan(),
            num_threads.to_string().cyan()
        )?;
    }
    stdout.flush()?;

    // Non-zero exit when any file could not be analyzed
    if !result.failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_extract<W: Write>(stdout: &mut W, args: ExtractArgs) -> Result<()> {
    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    let options = match args.file_name.or(args.file) {
        Some(file_name) => ParseOptions::for_file(file_name),
        None => ParseOptions::default(),
    };
    debug!("Extracting with {:?}", options);

    let packages = extract_package_references(&source, &options)
        .with_context(|| format!("Failed to extract packages from {}", options.file_name.display()))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *stdout, &packages)?;
        writeln!(stdout)?;
    } else if packages.is_empty() {
        pkgrefs_scan::print_no_packages_message(stdout)?;
    } else {
        pkgrefs_scan::print_package_list(stdout, &packages)?;
    }
    stdout.flush()?;
    Ok(())
}
