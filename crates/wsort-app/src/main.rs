//! WasteSort command-line entry point.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wsort_app::{ClassifierScreen, FsImageSource};
use wsort_ml_client::ClassifyClient;

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("wsort=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let Some(image_path) = std::env::args().nth(1) else {
        eprintln!("Usage: wsort-app <image-path>");
        std::process::exit(2);
    };

    let client = match ClassifyClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create classification client: {}", e);
            std::process::exit(1);
        }
    };

    let mut screen = ClassifierScreen::new(client);
    let source = FsImageSource::new(&image_path);

    if let Some(alert) = screen.pick_image(&source) {
        eprintln!("{}: {}", alert.title(), alert.message());
        std::process::exit(1);
    }

    if screen.image().is_none() {
        // A missing file reads as a cancelled pick; nothing to classify.
        eprintln!("No readable image at {image_path}");
        std::process::exit(2);
    }

    info!("Classifying {}", image_path);

    match screen.classify().await {
        None => {
            if let Some(prediction) = screen.top_result() {
                println!("{prediction}");
            }
        }
        Some(alert) => {
            eprintln!("{}: {}", alert.title(), alert.message());
            std::process::exit(1);
        }
    }
}
