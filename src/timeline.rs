use log::{info, warn};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::figure::process::{process_bindings, sample_names};
use crate::output;
use crate::query::{fetch_bindings, SparqlRequest, Transport};

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Saved { count: usize, path: PathBuf },
    /// The query matched nothing; the output file was not touched.
    NoResults,
}

/// Runs one fetch against `config.endpoint` through `transport` and writes
/// the figures to `config.output_path`.
pub fn run<T: Transport + ?Sized>(config: &Config, transport: &T) -> Result<Outcome> {
    info!("1. Starting full range fetch (2000 BC to 1800 AD)...");

    let request = SparqlRequest::from_config(config);

    info!("2. Connecting to {}...", &request.endpoint);
    let bindings = fetch_bindings(transport, &request)?;

    if bindings.is_empty() {
        warn!("Query returned 0 results, keeping any existing output");
        return Ok(Outcome::NoResults);
    }

    let figures = process_bindings(&bindings)?;

    info!(
        "3. Data processed. Samples found: {}...",
        sample_names(&figures)
    );

    output::save(&figures, &config.output_path)?;

    info!(
        "4. Saved {} figures to {}",
        figures.len(),
        config.output_path.display()
    );

    Ok(Outcome::Saved {
        count: figures.len(),
        path: config.output_path.clone(),
    })
}
