use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::{BaseDirs, UserDirs};

use crate::core::logging::warn;

pub const CONFIG_VERSION: &str = "1";
pub const APP_DIR_NAME: &str = "RuntimeLogo";

pub const DEFAULT_NOISE_STEP: f64 = 0.005;
pub const HOVER_NOISE_STEP: f64 = 0.002;
pub const HUE_JUMP: f64 = 20.0;
pub const DEFAULT_FPS: f32 = 60.0;

pub const DEFAULT_FONTS: &str = "-apple-system,BlinkMacSystemFont,\"Segoe UI\",\
    Roboto,Oxygen-Sans,Ubuntu,Cantarell,\"Helvetica Neue\",sans-serif";

/// Tunables that may be overridden from a JSON file. Geometry (point count,
/// radius, wobble amplitude) is fixed and lives next to the code that uses it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogoConfig {
    pub version: String,
    /// Noise and phase seed. `None` draws a fresh one per run.
    pub seed: Option<u32>,
    pub fps: f32,
    pub noise_step: f64,
    pub hover_noise_step: f64,
    pub hue_jump: f64,
    pub title: String,
    pub labels: [String; 2],
    pub fonts: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            seed: None,
            fps: DEFAULT_FPS,
            noise_step: DEFAULT_NOISE_STEP,
            hover_noise_step: HOVER_NOISE_STEP,
            hue_jump: HUE_JUMP,
            title: "Desktop".to_string(),
            labels: ["Runtime".to_string(), "Funtime".to_string()],
            fonts: DEFAULT_FONTS.to_string(),
        }
    }
}

impl LogoConfig {
    /// Replace values that would stall or corrupt the animation with their
    /// defaults, logging each replacement.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.fps.is_finite() && self.fps >= 1.0) {
            warn!("Invalid fps {}; using {}", self.fps, defaults.fps);
            self.fps = defaults.fps;
        }

        for (label, value, fallback) in [
            ("noise_step", &mut self.noise_step, defaults.noise_step),
            (
                "hover_noise_step",
                &mut self.hover_noise_step,
                defaults.hover_noise_step,
            ),
            ("hue_jump", &mut self.hue_jump, defaults.hue_jump),
        ] {
            if !value.is_finite() || *value < 0.0 {
                warn!("Invalid {label} {}; using {fallback}", *value);
                *value = fallback;
            }
        }

        if self.labels.iter().any(|l| l.is_empty()) {
            warn!("Empty label in {:?}; using defaults", self.labels);
            self.labels = defaults.labels;
        }

        self
    }
}

pub fn config_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.config_dir().join(APP_DIR_NAME))
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// `<Pictures>/RuntimeLogo`, falling back to `~/RuntimeLogo/Images`
pub fn default_images_dir() -> PathBuf {
    let primary_path = UserDirs::new().and_then(|ud| {
        ud.picture_dir().map(|p| p.to_path_buf().join(APP_DIR_NAME))
    });

    let fallback_path = BaseDirs::new().map(|bd| {
        bd.home_dir().to_path_buf().join(APP_DIR_NAME).join("Images")
    });

    primary_path
        .or(fallback_path)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config(
    path: impl AsRef<Path>,
) -> Result<LogoConfig, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let config = serde_json::from_str::<LogoConfig>(&json)?;
    Ok(config.sanitized())
}

/// Like [`load_config`] but a missing file is not an error.
pub fn load_config_if_exists(
    path: impl AsRef<Path>,
) -> Result<Option<LogoConfig>, Box<dyn Error>> {
    match load_config(path) {
        Ok(config) => Ok(Some(config)),
        Err(err) => {
            if err
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound)
            {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}

pub fn save_config(
    path: impl AsRef<Path>,
    config: &LogoConfig,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(config)?;
    let path = path.as_ref();
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(path, json)?;
    Ok(())
}
