//! tweet-sentiment HTTP Server
//!
//! Standalone HTTP server for sentiment predictions

#[cfg(feature = "http-server")]
use std::path::PathBuf;

#[cfg(feature = "http-server")]
use clap::Parser;
#[cfg(feature = "http-server")]
use tweet_sentiment::{Config, Result};

/// Serve sentiment predictions for short texts
#[cfg(feature = "http-server")]
#[derive(Debug, Parser)]
#[command(name = "tweet-sentiment-server", version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of worker threads
    #[arg(short, long)]
    workers: Option<usize>,

    /// Serialized classifier
    #[arg(long)]
    model: Option<PathBuf>,

    /// Serialized TF-IDF vectorizer
    #[arg(long)]
    vectorizer: Option<PathBuf>,

    /// Stopword list, one word per line
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

#[cfg(feature = "http-server")]
impl Args {
    /// CLI values override the config file, which overrides defaults
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(model) = self.model {
            config.model.classifier_path = model;
        }
        if let Some(vectorizer) = self.vectorizer {
            config.model.vectorizer_path = vectorizer;
        }
        if self.stopwords.is_some() {
            config.text.stopwords_path = self.stopwords;
        }

        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "http-server")]
#[actix_rt::main]
async fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "http-server")]
async fn run(args: Args) -> Result<()> {
    use actix_web::{middleware, web, App, HttpServer};

    log::info!("Starting tweet-sentiment server {}...", tweet_sentiment::VERSION);

    let config = args.into_config()?;

    let missing = config.model.missing_artifacts();
    if !missing.is_empty() {
        log::error!("Model files not found. Required files:");
        log::error!("- {}", config.model.classifier_path.display());
        log::error!("- {}", config.model.vectorizer_path.display());
        return Err(tweet_sentiment::Error::artifact(format!(
            "missing {}",
            missing
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    let api_state = tweet_sentiment::api::init_api_server_state(&config)?;
    log::info!("Model and vectorizer loaded successfully");

    let host = config.server.host.clone();
    let port = config.server.port;
    let workers = config.server.workers;

    log::info!("Server will listen on {}:{} with {} workers", host, port, workers);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(api_state.clone()))
            .configure(tweet_sentiment::api::configure_routes)
    })
    .workers(workers)
    .bind((host.as_str(), port))?
    .run()
    .await?;

    log::info!("Server stopped.");

    Ok(())
}

#[cfg(not(feature = "http-server"))]
fn main() {
    eprintln!("HTTP server feature is not enabled.");
    eprintln!("Please compile with: cargo build --features http-server");
    std::process::exit(1);
}
