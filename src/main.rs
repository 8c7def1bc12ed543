use std::io::{self, BufWriter, Write};
use std::time::Instant;

use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use wordfreq::{WordTokens, count_occurrences, rank, write_diagnostics, write_ranked};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let start = Instant::now();
    let words: Vec<String> = WordTokens::new(io::stdin().lock()).collect();
    info!(
        "collected {} word tokens in {} ms",
        words.len(),
        start.elapsed().as_millis()
    );

    let counts = count_occurrences(&words);
    info!("{} distinct words", counts.len());

    let ranking = rank(counts);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_ranked(&mut out, &ranking)?;
    out.flush()?;

    write_diagnostics(io::stderr().lock(), &ranking, words)?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    // Log to stderr; stdout carries nothing but the report.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
