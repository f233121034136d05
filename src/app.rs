use tracing_subscriber::EnvFilter;

use crate::application::CorpusPipeline;
use crate::domain::error::Result;
use crate::infrastructure::config::{load_dotenv, ConfigLoader};

/// Install the fmt subscriber; `RUST_LOG` overrides the default `info` level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn run() -> Result<()> {
    init_tracing();
    load_dotenv();

    let config = ConfigLoader::new().load()?;
    tracing::debug!(?config, "Loaded pipeline config");

    let report = CorpusPipeline::new(config).run()?;
    tracing::info!(
        "Done: {} unique words from {} sentences; classification {}",
        report.vocabulary.word_count,
        report.vocabulary.sentence_count,
        report.classification
    );

    Ok(())
}
