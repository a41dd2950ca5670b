#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use imgdrop_core::config::{
    CloudinaryConfig, DEFAULT_API_BASE, PLACEHOLDER_CLOUD_NAME, PLACEHOLDER_UPLOAD_PRESET,
};
use imgdrop_core::CloudinaryUploader;
use tracing_subscriber::EnvFilter;

/// imgdrop - drop an image, get a Cloudinary link
#[derive(Parser, Debug)]
#[command(name = "imgdrop-desktop")]
#[command(about = "Upload an image to Cloudinary and copy its link")]
struct Args {
    /// Cloudinary cloud name
    #[arg(long, env = "IMGDROP_CLOUD_NAME", default_value = PLACEHOLDER_CLOUD_NAME)]
    cloud_name: String,

    /// Unsigned upload preset
    #[arg(long, env = "IMGDROP_UPLOAD_PRESET", default_value = PLACEHOLDER_UPLOAD_PRESET)]
    upload_preset: String,

    /// Upload API root
    #[arg(long, env = "IMGDROP_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Request timeout in seconds (0 disables)
    #[arg(long, env = "IMGDROP_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,
}

impl Args {
    fn cloudinary_config(&self) -> CloudinaryConfig {
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        CloudinaryConfig::new(&self.cloud_name, &self.upload_preset)
            .with_api_base(&self.api_base)
            .with_timeout(timeout)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("imgdrop=info,imgdrop_core=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.cloudinary_config();

    if config.is_placeholder() {
        tracing::warn!(
            "Cloud name or upload preset is still a placeholder; uploads will fail until \
             --cloud-name/--upload-preset (or IMGDROP_CLOUD_NAME/IMGDROP_UPLOAD_PRESET) are set"
        );
    }

    let uploader = match CloudinaryUploader::new(config) {
        Ok(uploader) => uploader,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Uploading to {}", uploader.config().upload_url());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("imgdrop")
            .with_inner_size(dioxus::desktop::LogicalSize::new(520.0, 640.0))
            .with_resizable(true),
    );

    // The uploader reaches components through root context
    dioxus::LaunchBuilder::desktop()
        .with_context(uploader)
        .with_cfg(config)
        .launch(app::App);
}
