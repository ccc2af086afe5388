mod config;
mod error;
mod gallery;
mod report;
mod routes;
mod scanner;
mod server;
mod shuffle;
mod state;
mod types;
mod upload;

use clap::Parser;
use colored::Colorize;
use config::Config;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Image upload and shuffled gallery server", long_about = None)]
struct Args {
    /// Directory holding uploaded images
    #[arg(long, short = 'u', env = "GALLERY_UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, env = "GALLERY_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "GALLERY_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Maximum accepted upload body in bytes
    #[arg(long, env = "GALLERY_MAX_UPLOAD_BYTES", default_value_t = config::DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Fixed shuffle seed (same gallery order on every render)
    #[arg(long, env = "GALLERY_SEED")]
    seed: Option<u64>,

    /// Print the stored images as a table and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// Write one shuffled gallery page to FILE and exit
    #[arg(long, short = 'r', value_name = "FILE")]
    render: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut config = Config::new(args.upload_dir);
        config.bind = args.bind;
        config.port = args.port;
        config.max_upload_bytes = args.max_upload_bytes;
        config.seed = args.seed;
        config
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let list = args.list;
    let render = args.render.clone();
    let config = Config::from(args);

    if list {
        list_images(&config);
        return;
    }

    if let Some(output_file) = render {
        render_to_file(&config, &output_file);
        return;
    }

    if let Err(e) = server::serve(config).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
}

fn list_images(config: &Config) {
    let snapshot = match scanner::snapshot(&config.upload_dir) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    report::print_listing(&config.upload_dir.display().to_string(), &snapshot);
}

fn render_to_file(config: &Config, output_file: &Path) {
    let snapshot = match scanner::snapshot(&config.upload_dir) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(config.clone());
    let mut rng = state.render_rng();
    let html = gallery::render_gallery_page(&snapshot, "", &mut rng);

    if let Err(e) = fs::write(output_file, html) {
        log::error!("Error writing gallery to {}: {e}", output_file.display());
        std::process::exit(1);
    }

    println!(
        "Gallery with {} images written to: {}",
        snapshot.len().to_string().green(),
        output_file.display()
    );
}
