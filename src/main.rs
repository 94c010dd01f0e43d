use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use todo_pager::config::Config;
use todo_pager::fetch::HttpPageSource;
use todo_pager::logging::init_tracing;
use todo_pager::persist::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

/// Page through a remote to-do list in the terminal.
#[derive(Debug, Parser)]
#[command(name = "todo-pager", version, about)]
struct Args {
    /// Config file (default: <config_dir>/todo-pager/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long)]
    base_url: Option<String>,

    /// Keep the page number in memory only
    #[arg(long)]
    no_persist: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_tracing(&config.logging, args.log_level.as_deref())
        .context("failed to initialise logging")?;
    tracing::info!(endpoint = %config.api.endpoint(), "Starting todo-pager");

    let source = HttpPageSource::new(&config.api).context("failed to set up page source")?;
    let storage: Arc<dyn KeyValueStore> = if config.storage.enabled && !args.no_persist {
        Arc::new(FileKeyValueStore::new(config.storage.state_path()))
    } else {
        Arc::new(MemoryKeyValueStore::new())
    };

    todo_pager::ui::run(source, storage, config.ui.tick_rate())
        .await
        .context("terminal UI failed")?;
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "todo-pager",
            "--base-url",
            "http://127.0.0.1:4000",
            "--no-persist",
        ])
        .unwrap();
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:4000"));
        assert!(args.no_persist);
        assert!(args.config.is_none());
    }

    #[test]
    fn invalid_base_url_override_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "todo-pager",
            "--config",
            dir.path().join("missing.toml").to_str().unwrap(),
            "--base-url",
            "ftp://nope",
        ])
        .unwrap();
        assert!(load_config(&args).is_err());
    }
}
