use clap::Parser;
use signup::config::{Config, ConfigStore};
use signup::logging::init_tracing;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "signup", version, about = "Create an account from the terminal")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the account service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Milliseconds to stay on the success screen before moving on
    #[arg(long, value_name = "MS", conflicts_with = "no_redirect")]
    redirect_delay_ms: Option<u64>,

    /// Stay on the success screen until "Start Now" is pressed
    #[arg(long)]
    no_redirect: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config);

    store.update(|config| {
        if let Some(base_url) = cli.base_url {
            config.api.base_url = base_url;
        }
        if let Some(delay) = cli.redirect_delay_ms {
            config.navigation.redirect_delay_ms = Some(delay);
        }
        if cli.no_redirect {
            config.navigation.redirect_delay_ms = None;
        }
    })?;

    signup::ui::runtime::run(store)
}
