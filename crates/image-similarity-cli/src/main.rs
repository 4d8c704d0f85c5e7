use clap::{Parser, Subcommand};
use image_similarity_core::{logging, Config, LogLevel, SimilarityFinder};
use log::{info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-similarity")]
#[command(about = "Find visually similar images in a directory")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare every pair of images in a directory and print the matches
    Scan {
        /// Directory containing the images
        directory: PathBuf,

        /// Append the check that matched (exact, hash or shape) to each line
        #[arg(long)]
        verdict: bool,

        /// Maximum directory depth to scan (1 = only the directory itself)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Follow symbolic links
        #[arg(long)]
        follow_links: bool,

        /// Also try files without a known image extension
        #[arg(long)]
        all_files: bool,

        /// Show a progress bar on stderr
        #[arg(long)]
        progress: bool,

        /// Verbosity level
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs to rolling files in this directory instead of stderr
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "image-similarity.json")]
        path: PathBuf,
    },
}

/// Install the file logger when a log directory is configured, env_logger otherwise
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let level = LevelFilter::from(config.log_level);

    match &config.log_dir {
        Some(dir) => logging::init_logger(dir, level)?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init(),
    }

    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            directory,
            verdict,
            max_depth,
            follow_links,
            all_files,
            progress,
            verbose,
            config,
            log_dir,
        } => {
            // Set up configuration
            let mut config = if let Some(config_path) = config {
                // Load config from file
                Config::from_file(&config_path)?
            } else {
                Config::default()
            };

            // Override config with command line arguments
            if max_depth.is_some() {
                config.max_depth = max_depth;
            }
            if log_dir.is_some() {
                config.log_dir = log_dir;
            }
            config.report_verdict |= verdict;
            config.follow_links |= follow_links;
            config.process_unsupported_formats |= all_files;
            config.show_progress |= progress;

            // Set log level based on verbosity
            config.log_level = match verbose {
                0 => config.log_level,
                1 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };

            init_logging(&config)?;

            let finder = SimilarityFinder::new(config)?;
            let with_verdict = finder.config().report_verdict;

            info!("Starting similarity scan...");
            let stdout = std::io::stdout();
            let mut write_error = None;
            finder.run(&directory, |record| {
                if write_error.is_none() {
                    let mut out = stdout.lock();
                    if let Err(e) = writeln!(out, "{}", record.report_line(with_verdict)) {
                        write_error = Some(e);
                    }
                }
            })?;

            if let Some(e) = write_error {
                return Err(e.into());
            }
            info!("Similarity scan complete");

            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}
