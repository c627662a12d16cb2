use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jbirddev::PageConfig;

#[derive(Debug, Parser)]
#[command(name = "jbirddev")]
#[command(about = "Compose the jbird.dev landing page headlessly")]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the composed page as an HTML document
    Render {
        #[command(flatten)]
        source: Source,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the SHA-256 digest of the composed page
    Digest {
        #[command(flatten)]
        source: Source,
    },
    /// Print a built-in page variant as JSON
    Config {
        #[arg(long, value_enum, default_value_t = Variant::Classic)]
        variant: Variant,
    },
}

#[derive(Debug, Args)]
struct Source {
    /// JSON page configuration; overrides --variant
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Content links followed directly by the demo domain
    Classic,
    /// Content links, a second tagline, then a labelled source link
    DemoTagline,
}

impl Variant {
    fn config(self) -> PageConfig {
        match self {
            Variant::Classic => PageConfig::classic(),
            Variant::DemoTagline => PageConfig::with_demo_tagline(),
        }
    }
}

impl Source {
    fn load(&self) -> anyhow::Result<PageConfig> {
        match &self.config {
            Some(path) => PageConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display())),
            None => Ok(self.variant.config()),
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jbirddev=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jbirddev=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Render { source, out } => {
            let config = source.load()?;
            let doc = jbirddev::render_document(&config).context("composing page")?;
            let html = doc.to_html();
            match out {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Command::Digest { source } => {
            let config = source.load()?;
            let doc = jbirddev::render_document(&config).context("composing page")?;
            println!("{}", doc.digest());
        }
        Command::Config { variant } => {
            println!("{}", variant.config().to_json_pretty()?);
        }
    }

    Ok(())
}
