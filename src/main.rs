use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finanthrope::cli::{
    handle_categories_command, handle_export_command, handle_shell_command,
    handle_summary_command, FormatArg,
};
use finanthrope::config::{FinanthropePaths, Settings};
use finanthrope::models::{Locale, Section};

#[derive(Parser)]
#[command(
    name = "finanthrope",
    version,
    about = "Monthly savings capacity calculator",
    long_about = "Finanthrope collects your monthly income and expenses in six \
                  sections, computes your savings capacity and exports the result \
                  as a structured document or a printable PDF summary."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this directory instead of the platform config directory
    #[arg(long, global = true, env = "FINANTHROPE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive budgeting session
    #[command(alias = "repl")]
    Shell {
        /// Display language (defaults to the configured one)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Print the summary of a saved budget document
    Summary {
        /// JSON or YAML budget document
        document: PathBuf,
        /// Display language (defaults to the document's)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Export a saved budget document
    Export {
        /// JSON or YAML budget document
        document: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: FormatArg,
        /// Output file (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Document language (defaults to the document's)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// List the category types of each section
    Categories {
        /// Only this section
        section: Option<Section>,
        /// Display language (defaults to the configured one)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "finanthrope=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = FinanthropePaths::resolve(cli.config_dir.as_deref())?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Shell { lang }) => {
            handle_shell_command(&paths, &settings, lang.unwrap_or(settings.locale))?;
        }
        Some(Commands::Summary { document, lang }) => {
            handle_summary_command(&settings, &document, lang)?;
        }
        Some(Commands::Export {
            document,
            format,
            output,
            lang,
        }) => {
            handle_export_command(&paths, &settings, &document, format, output, lang)?;
        }
        Some(Commands::Categories { section, lang }) => {
            handle_categories_command(lang.unwrap_or(settings.locale), section)?;
        }
        Some(Commands::Config) => {
            println!("Finanthrope Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Export directory: {}",
                settings.export_dir(&paths).display()
            );
            println!();
            println!("Settings:");
            println!("  Language:        {}", settings.locale);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Pretty JSON:     {}", settings.pretty_json);
            if !paths.is_initialized() {
                settings.save(&paths)?;
                println!();
                println!("Default settings written.");
            }
        }
        None => {
            println!("Finanthrope - monthly savings capacity calculator");
            println!();
            println!("Run 'finanthrope --help' for usage information.");
            println!("Run 'finanthrope shell' to start a budgeting session.");
        }
    }

    Ok(())
}
