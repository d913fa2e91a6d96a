use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

use morph::runtime::{
    LogoConfig, RendererCapability, default_config_path, load_config,
    load_config_if_exists,
};

use morph::core::logging::warn;

#[derive(Debug, Parser)]
#[command(name = "logo", version, about = "A morphing blob-and-text logo")]
pub struct Args {
    /// Seed for the noise field and point phases
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// JSON config file. Defaults to the user config dir when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Force the renderer capability: chromium or standard
    #[arg(long, global = true)]
    pub renderer: Option<RendererCapability>,

    /// Window size multiplier over the 600x200 view box
    #[arg(long, default_value_t = 2.0)]
    pub scale: f32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Step the animation headlessly and print or write the SVG markup
    Svg {
        /// Number of frames to run, counting the one run at construction
        #[arg(long, default_value_t = 1)]
        frames: u32,

        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the resolved config as JSON, by default to the user config dir
    InitConfig {
        /// Destination; the default config location when omitted
        #[arg(long)]
        out: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    /// An explicit `--config` must load; the default location may be absent
    /// or broken, in which case built-in defaults are used.
    pub fn resolve_config(&self) -> Result<LogoConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .map_err(|e| format!("Failed to load {:?}: {}", path, e))?,
            None => default_config_path()
                .and_then(|path| {
                    load_config_if_exists(&path).unwrap_or_else(|err| {
                        warn!("Ignoring config at {:?}: {}", path, err);
                        None
                    })
                })
                .unwrap_or_default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}
