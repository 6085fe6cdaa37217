//! CLI entry point for pressmark

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pressmark::commands::head::HeadOptions;
use pressmark::commands::theme::ThemeAction;
use pressmark::seo::ContentType;

#[derive(Parser)]
#[command(name = "pressmark")]
#[command(version)]
#[command(about = "SEO metadata and theme state for a headless blog front-end", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate head fragments for every content record
    #[command(alias = "g")]
    Generate,

    /// Print the head metadata for one record file
    Head {
        /// Record JSON file (the first record is used)
        record: PathBuf,

        /// Force noindex, nofollow
        #[arg(long)]
        noindex: bool,

        /// Override the content type (website, article, profile)
        #[arg(short = 't', long = "type")]
        content_type: Option<ContentType>,

        /// Print the bundle as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,

        /// Report the system as preferring a dark color scheme
        #[arg(long, global = true)]
        prefers_dark: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content (record, tag)
    List {
        #[arg(default_value = "record")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Show the resolved theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Print the theme stylesheet
    Css {
        /// Print the resolved palette instead of the first-paint one
        #[arg(long)]
        resolved: bool,
    },
    /// Forget the persisted theme
    Reset,
}

impl From<ThemeCommand> for ThemeAction {
    fn from(command: ThemeCommand) -> Self {
        match command {
            ThemeCommand::Show => ThemeAction::Show,
            ThemeCommand::Toggle => ThemeAction::Toggle,
            ThemeCommand::Css { resolved } => ThemeAction::Css { resolved },
            ThemeCommand::Reset => ThemeAction::Reset,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pressmark=debug,info"
    } else {
        "pressmark=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            pressmark::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Generate => {
            let site = pressmark::Pressmark::new(&base_dir)?;
            tracing::info!("Generating head fragments...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Head {
            record,
            noindex,
            content_type,
            json,
        } => {
            let site = pressmark::Pressmark::new(&base_dir)?;
            let record = if record.is_absolute() {
                record
            } else {
                base_dir.join(record)
            };
            let options = HeadOptions {
                noindex,
                content_type,
                json,
            };
            pressmark::commands::head::run(&site, &record, options)?;
        }

        Commands::Theme {
            action,
            prefers_dark,
        } => {
            let site = pressmark::Pressmark::new(&base_dir)?;
            pressmark::commands::theme::run(&site, action.into(), Some(prefers_dark))?;
        }

        Commands::Clean => {
            let site = pressmark::Pressmark::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = pressmark::Pressmark::new(&base_dir)?;
            pressmark::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("pressmark version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
