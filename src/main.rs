use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use layoutbind::config::Config;
use layoutbind::generate::{GenerationSummary, Generator};
use layoutbind::render::OutputSyntax;
use layoutbind::report::{self, Reporter};
use layoutbind::watch::FileWatcher;

/// layoutbind - Generate view-binding code from Android layout XML
#[derive(Parser, Debug)]
#[command(name = "layoutbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing layout XML files
    layouts: PathBuf,

    /// Directory to write generated files to
    output: PathBuf,

    /// Output syntax (defaults to the config file value, else kt)
    #[arg(short, long, value_enum)]
    syntax: Option<SyntaxArg>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout file patterns to skip (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Descend into subdirectories of the layouts directory
    #[arg(short, long)]
    recursive: bool,

    /// Keep an existing output directory instead of removing it
    #[arg(long)]
    keep_output: bool,

    /// Ask before removing an existing output directory
    #[arg(long)]
    interactive: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    /// Process layout files in parallel
    #[arg(long)]
    parallel: bool,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Watch mode - regenerate whenever a layout changes
    #[arg(long)]
    watch: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SyntaxArg {
    Kt,
    Java,
}

impl From<SyntaxArg> for OutputSyntax {
    fn from(syntax: SyntaxArg) -> Self {
        match syntax {
            SyntaxArg::Kt => OutputSyntax::Kotlin,
            SyntaxArg::Java => OutputSyntax::Java,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("layoutbind v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    if cli.watch {
        run_watch_mode(&config, &cli)
    } else {
        let summary = run_generation(&config, &cli)?;
        if summary.has_failures() {
            return Err(miette::miette!(
                "{} of {} layouts could not be processed",
                summary.failed.len(),
                summary.failed.len() + summary.generated.len()
            ));
        }
        Ok(())
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::from_default_locations(&cwd)?
    };

    // Override with CLI arguments
    if let Some(syntax) = cli.syntax {
        config.syntax = syntax.into();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if cli.recursive {
        config.recursive = true;
    }
    if cli.keep_output {
        config.clean_output = false;
    }
    if cli.parallel {
        config.parallel = true;
    }

    Ok(config)
}

fn run_generation(config: &Config, cli: &Cli) -> Result<GenerationSummary> {
    use std::time::Instant;

    let start_time = Instant::now();

    let generator = Generator::new(config)
        .with_dry_run(cli.dry_run)
        .with_interactive(cli.interactive)
        .with_progress(!cli.quiet && !cli.verbose);

    let summary = generator.run(&cli.layouts, &cli.output)?;

    Reporter::new(cli.format.clone().into())
        .with_views(cli.verbose)
        .report(&summary)?;

    if !cli.quiet && matches!(cli.format, OutputFormat::Terminal) {
        println!(
            "{}",
            format!("Completed in {:.2}s", start_time.elapsed().as_secs_f64()).dimmed()
        );
    }

    Ok(summary)
}

fn run_watch_mode(config: &Config, cli: &Cli) -> Result<()> {
    let watcher = FileWatcher::new().with_recursive(config.recursive);

    watcher
        .watch(&cli.layouts, || {
            match run_generation(config, cli) {
                Ok(_) => {
                    println!();
                    println!("{}", "Generation complete. Waiting for changes...".green());
                }
                Err(e) => {
                    eprintln!("{}: {:?}", "Generation error".red(), e);
                }
            }
            true // Keep watching
        })
        .map_err(|e| miette::miette!("Watch error: {}", e))?;

    Ok(())
}
