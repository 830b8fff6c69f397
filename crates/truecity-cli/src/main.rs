//! truecity-cli — Command-line interface for truecity-core
//!
//! Browse a location tree the way the selector does and produce the value a
//! host form would store.
//!
//! Usage examples
//! --------------
//!
//! - List regions / cities (sorted, with the same labels the selector shows)
//!   $ truecity regions CO
//!   $ truecity cities CO ANT
//!
//! - Run a full selection, optionally restoring a stored value first
//!   $ truecity select --country CO --region ANT --city 20512
//!   $ truecity select --country CO --seed '{"country":{"value":"CO"},...}'
//!
//! - Show what the host persists for a value
//!   $ truecity decode '{"country":{"value":"CO","name":"Colombia"},...}'
//!
//! - Build a tree from the upstream dump
//!   $ truecity build --input countries+states+cities.json.gz --out ./geo
//!
//! Data source
//! -----------
//!
//! Without `--base` the sample tree bundled with `truecity-core` is used.
//! `--base` accepts a local directory or an http(s) URL.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use truecity_core::options::prepare_options;
use truecity_core::prelude::*;
use truecity_core::profile::{display_data, persisted_fields};

/// Either kind of tree the CLI can read.
enum Source {
    Dir(DirSource),
    #[cfg(feature = "http")]
    Http(HttpSource),
}

impl LocationSource for Source {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError> {
        match self {
            Source::Dir(s) => s.fetch(request).await,
            #[cfg(feature = "http")]
            Source::Http(s) => s.fetch(request).await,
        }
    }
}

fn open_source(config: &SelectorConfig) -> anyhow::Result<Source> {
    if config.is_remote() {
        #[cfg(feature = "http")]
        return Ok(Source::Http(HttpSource::new(config.base_url())));
        #[cfg(not(feature = "http"))]
        bail!("{} is a URL but this build has no 'http' feature", config.base_url());
    }
    Ok(Source::Dir(DirSource::new(config.base_url())))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn list(source: &Source, messages: &Messages, country: &str, region: Option<&str>) -> anyhow::Result<()> {
    let request = FetchRequest {
        target: if region.is_some() { Level::City } else { Level::Region },
        seq: 0,
        country: country.to_owned(),
        region: region.map(str::to_owned),
    };
    let entries = source.fetch(&request).await.map_err(|e| {
        tracing::debug!(error = %e, "fetch failed");
        anyhow::anyhow!("{}: {e}", messages.get(e.message_key()))
    })?;
    let options = prepare_options(request.target, entries, messages);
    if options.is_empty() {
        println!("No entries in {}", request.relative_path());
    }
    for o in options {
        println!("{}\t{}", o.code, o.display_name);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let messages = match &args.messages {
        Some(path) => Messages::load_or_default(path),
        None => Messages::default(),
    };
    let base = args
        .base
        .clone()
        .unwrap_or_else(|| DirSource::sample().root().display().to_string());
    let config = SelectorConfig::new("cli", &base).context("invalid --base")?;

    match args.command {
        Commands::Regions { country } => {
            let source = open_source(&config)?;
            list(&source, &messages, &country, None).await?;
        }

        Commands::Cities { country, region } => {
            let source = open_source(&config)?;
            list(&source, &messages, &country, Some(&region)).await?;
        }

        Commands::Select {
            country,
            country_name,
            region,
            city,
            seed,
        } => {
            let label = country_name.unwrap_or_else(|| country.clone());
            let lists = Widgets {
                country: MemorySelect::prefilled(vec![LocationOption::new(&country, label)], &country),
                region: MemorySelect::new(messages.get(MessageKey::SelectARegion)),
                city: MemorySelect::new(messages.get(MessageKey::SelectACity)),
            };
            let mut session = CascadeSession::initialize(
                open_source(&config)?,
                &config,
                lists,
                RecordingFeedback::default(),
                messages.clone(),
                seed.as_deref(),
            )
            .await;

            if let Some(region) = region {
                session.select_region(&region).await;
            }
            if let Some(city) = city {
                session.select_city(&city);
            }

            for note in &session.controller().feedback().notifications {
                eprintln!("! {note}");
            }
            match session.commit() {
                Ok(committed) => {
                    println!("{}", committed.json());
                    println!("{}", committed.summary);
                }
                Err(e) => {
                    let banner = session.controller().feedback().banner.clone().unwrap_or_default();
                    bail!("{banner} ({e})");
                }
            }
        }

        Commands::Decode { value } => {
            let Some(record) = persisted_fields(&value) else {
                bail!("not a stored location value");
            };
            let stored = seed(Some(&value));
            let country_name = stored
                .country
                .as_ref()
                .map(|p| p.name.clone().unwrap_or_else(|| p.value.clone()))
                .unwrap_or_default();
            println!("country: {}", record.country.as_deref().unwrap_or("-"));
            println!("city:    {}", record.city.as_deref().unwrap_or("-"));
            println!(
                "text:    {}",
                display_data(record.city.as_deref().unwrap_or(""), &country_name, &messages)
            );
        }

        #[cfg(feature = "builder")]
        Commands::Build { input, out } => {
            let stats = truecity_core::builder::build_tree(&input, &out)?;
            println!("Location tree written to {}:", out.display());
            println!("  Countries: {}", stats.countries);
            println!("  Regions:   {}", stats.regions);
            println!("  Cities:    {}", stats.cities);
        }
    }

    Ok(())
}
