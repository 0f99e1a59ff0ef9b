use anyhow::Result;
use clap::Parser;
use loqa_pronounce::{CaptureFactory, CaptureSource, Config, RecordingSession};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loqa-pronounce")]
#[command(about = "Practice saying a phrase and get a match score")]
struct Args {
    /// Phrase to practice
    #[arg(short, long)]
    phrase: String,

    /// Practice language (defaults to the configured one)
    #[arg(short, long)]
    language: Option<String>,

    /// Number of attempts
    #[arg(short, long, default_value = "1")]
    attempts: u32,

    /// Config file, with or without extension
    #[arg(short, long, default_value = "config/loqa-pronounce")]
    config: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| cfg.practice.language.clone());
    let session_config = cfg.session_config_for(&language)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Practicing in {} ({})", language, session_config.locale);

    let capture = CaptureFactory::create(CaptureSource::Console);
    let mut session = RecordingSession::new(args.phrase.clone(), session_config, capture);

    for attempt in 1..=args.attempts {
        println!("[{}/{}] Say: {}", attempt, args.attempts, session.target());

        session.start().await;
        session.wait_for_outcome().await;

        let snapshot = session.snapshot();
        debug!("Snapshot: {}", serde_json::to_string(&snapshot)?);

        match snapshot.feedback() {
            Some(feedback) => println!("{}", feedback),
            None => println!("Nothing heard."),
        }
    }

    session.reset().await;

    Ok(())
}
