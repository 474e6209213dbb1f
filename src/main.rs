use anyhow::Result;
use clap::Parser;
use sketch2html::ai::ChatOutcome;
use sketch2html::app::App;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "sketch2html")]
#[command(about = "Generate webpage code from a hand-drawn layout sketch")]
struct CliArgs {
    /// Optional path to the sketch image (defaults to contoso_layout_sketch.jpg).
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sketch2html=info".into()),
        )
        // Diagnostics go to stderr; stdout carries only the generated code.
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting sketch2html");

    let args = CliArgs::parse();

    match App::new() {
        Ok(app) => match app.run(args.image).await {
            Ok(outcome) => {
                render(outcome);
                Ok(())
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the outcome: generated text on stdout, warnings on the log stream.
fn render(outcome: ChatOutcome) {
    match outcome {
        ChatOutcome::Text(text) => println!("{}", text),
        ChatOutcome::NoTextParts => println!("No text parts found."),
        ChatOutcome::NoChoices => warn!("No choices returned."),
        ChatOutcome::Unexpected(value) => println!("Unexpected content format: {}", value),
    }
}
