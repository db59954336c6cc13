//! Generate Loki push request bodies from a configuration and write them to
//! stdout, then exit.
//!
//! JSON bodies are written one per line. Protobuf bodies are binary and each
//! is preceded by its length as a big-endian `u32`.

use std::{
    env,
    io::{BufWriter, Read, Write},
};

use clap::Parser;
use lading_loki::{Batch, Config, Encoding, EntryGenerator, Flog, MetricsSink};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Failed to deserialize configuration: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
    #[error("Payload generation failed: {0}")]
    Loki(#[from] lading_loki::Error),
    #[error("Encoded body of {0} bytes is too large to frame")]
    BodyTooLarge(usize),
}

fn default_config_path() -> String {
    "/etc/lading/loki.yaml".to_string()
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// path on disk to the configuration file, ignored if LADING_LOKI_CONFIG
    /// is set
    #[clap(long, default_value_t = default_config_path())]
    config_path: String,
    /// the number of batches to generate
    #[clap(long, default_value_t = 1)]
    batches: u32,
}

fn load_config_contents(config_path: &str) -> Result<String, Error> {
    if let Ok(env_var_value) = env::var("LADING_LOKI_CONFIG") {
        debug!("Using config from env var 'LADING_LOKI_CONFIG'");
        Ok(env_var_value)
    } else {
        debug!("Attempting to open configuration file at: {config_path}");
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(config_path)
            .map_err(|err| {
                error!("Could not read config file '{config_path}': {err}");
                err
            })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }
}

fn parse_config(contents: &str) -> Result<Config, Error> {
    let config: Config = serde_yaml::from_str(contents).map_err(|err| {
        error!("Configuration validation failed: {err}");
        Error::SerdeYaml(err)
    })?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish()
        .init();

    let args = Args::parse();
    let contents = load_config_contents(&args.config_path)?;
    let config = parse_config(&contents)?;

    let mut rng = StdRng::from_seed(config.seed);
    let sink = MetricsSink::new(vec![(
        "virtual_user".to_string(),
        config.virtual_user.to_string(),
    )]);
    let generator = EntryGenerator::from_config(&config, &mut rng, Flog, sink)?;
    info!(
        "Generating {} batches for tenant {} as {}",
        args.batches,
        config.tenant_id,
        generator.instance()
    );

    // NOTE stdout is locked once and buffered so each body is not a separate
    // write.
    let stdout = std::io::stdout();
    let mut fp = BufWriter::with_capacity(10_000_000, stdout.lock());
    let mut total_entries = 0;
    let mut total_bytes = 0;
    for _ in 0..args.batches {
        let entries = generator.generate(&mut rng, &config.tenant_id)?;
        let batch = Batch::with_entries(entries);
        let encoded = batch.encode(config.encoding)?;
        match encoded.encoding {
            Encoding::Json => {
                fp.write_all(&encoded.bytes)?;
                fp.write_all(b"\n")?;
            }
            Encoding::Protobuf => {
                let len = u32::try_from(encoded.bytes.len())
                    .map_err(|_| Error::BodyTooLarge(encoded.bytes.len()))?;
                fp.write_all(&len.to_be_bytes())?;
                fp.write_all(&encoded.bytes)?;
            }
        }
        debug!(
            streams = batch.stream_count(),
            entries = encoded.entries,
            line_bytes = batch.size_bytes(),
            body_bytes = encoded.bytes.len(),
            "wrote batch"
        );
        total_entries += encoded.entries;
        total_bytes += encoded.bytes.len();
    }
    fp.flush()?;

    info!(
        "Wrote {} batches, {total_entries} entries in {total_bytes} bytes ({})",
        args.batches,
        config.encoding.content_type()
    );
    Ok(())
}
