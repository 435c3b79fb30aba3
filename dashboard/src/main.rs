use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use gateway::Gateway;

mod app;
mod state;
mod ui;

const DEFAULT_MODEL_PATH: &str = "model.json";

/// The first argument wins over `MODEL_PATH`.
fn model_path() -> PathBuf {
    env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("MODEL_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
}

fn main() -> Result<()> {
    env_logger::init();

    let path = model_path();
    let gateway = Gateway::load(&path)
        .with_context(|| format!("failed to load model from '{}'", path.display()))?;

    log::info!("model ready, starting dashboard");
    app::run(&gateway)
}
