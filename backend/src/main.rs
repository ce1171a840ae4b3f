//! OCR service CLI
//!
//! # Main Commands
//!
//! ```bash
//! ocr-service serve                      # Start HTTP server (port 8000)
//! ocr-service recognize a.png b.jpg      # Recognize images, print JSON
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! ocr-service preprocess in.png out.png  # Write the image the engine sees
//! ```

use clap::{Parser, Subcommand};
use ocr_service::{
    preprocess::{decode, preprocess, save_png},
    process_batch, server::start_server, ServiceConfig, TesseractEngine, UploadedImage,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ocr-service")]
#[command(about = "Recognize text in uploaded images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: OCR_PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Tesseract language, e.g. chi_sim or eng
        #[arg(short, long)]
        lang: Option<String>,

        /// Front-end origin allowed by CORS
        #[arg(long)]
        allowed_origin: Option<String>,
    },

    /// Recognize images and print the JSON response
    Recognize {
        /// Input images
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Tesseract language, e.g. chi_sim or eng
        #[arg(short, long)]
        lang: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the preprocessed version of an image
    Preprocess {
        /// Input image
        input: PathBuf,

        /// Output PNG
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            lang,
            allowed_origin,
        } => cmd_serve(port, lang, allowed_origin).await,

        Commands::Recognize {
            images,
            lang,
            output,
        } => cmd_recognize(&images, lang, output.as_deref()).await,

        Commands::Preprocess { input, output } => cmd_preprocess(&input, &output),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    lang: Option<String>,
    allowed_origin: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let defaults = ServiceConfig::from_env()?;
    let config = ServiceConfig {
        port: port.unwrap_or(defaults.port),
        language: lang.unwrap_or(defaults.language),
        allowed_origin: allowed_origin.unwrap_or(defaults.allowed_origin),
        ..defaults
    };

    start_server(config).await?;
    Ok(())
}

async fn cmd_recognize(
    images: &[PathBuf],
    lang: Option<String>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(lang) = lang {
        config.language = lang;
    }

    let mut uploads = Vec::with_capacity(images.len());
    for path in images {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        uploads.push(UploadedImage::new(filename, bytes));
    }

    eprintln!("🔎 Recognizing {} image(s) [{}]", uploads.len(), config.language);

    let engine = Arc::new(TesseractEngine::from_config(&config));
    let response = process_batch(engine, uploads).await;

    let json = serde_json::to_string_pretty(&response)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_preprocess(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(input)?;
    let image = decode(&bytes)?;
    let prepared = preprocess(&image);
    save_png(&prepared, output)?;

    eprintln!(
        "✅ {} ({}x{}) -> {} ({}x{})",
        input.display(),
        image.width(),
        image.height(),
        output.display(),
        prepared.width(),
        prepared.height()
    );

    Ok(())
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("💾 Written to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
