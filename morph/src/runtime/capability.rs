use std::env;
use std::fmt;
use std::str::FromStr;

use crate::core::logging::warn;

pub const RENDERER_ENV_VAR: &str = "RUNTIME_LOGO_RENDERER";

/// What the host renderer is able to do with the label text. Resolved once
/// when the logo is built and never revisited.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RendererCapability {
    /// Supports `filter` plus `mix-blend-mode` on text
    #[default]
    Chromium,
    Standard,
}

impl RendererCapability {
    pub fn text_effect(&self) -> TextEffect {
        match self {
            Self::Chromium => TextEffect::InvertDifference,
            Self::Standard => TextEffect::None,
        }
    }
}

impl fmt::Display for RendererCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chromium => write!(f, "chromium"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for RendererCapability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(Self::Chromium),
            "standard" | "default" | "none" => Ok(Self::Standard),
            other => Err(format!("Unknown renderer '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextEffect {
    #[default]
    None,
    /// `filter: invert(1); mix-blend-mode: difference`
    InvertDifference,
}

impl TextEffect {
    /// Inline style declarations applied to each text element
    pub fn css(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::InvertDifference => {
                "filter: invert(1); mix-blend-mode: difference;"
            }
        }
    }
}

pub trait CapabilityDetector {
    fn detect(&self) -> RendererCapability;
}

/// Always answers with the capability it was built with.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedDetector(pub RendererCapability);

impl CapabilityDetector for FixedDetector {
    fn detect(&self) -> RendererCapability {
        self.0
    }
}

/// Reads [`RENDERER_ENV_VAR`]. Unset means the native host, which can do the
/// blend, i.e. [`RendererCapability::Chromium`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvDetector;

impl EnvDetector {
    fn parse(value: Option<&str>) -> RendererCapability {
        match value {
            None => RendererCapability::default(),
            Some(value) => value.parse().unwrap_or_else(|err| {
                warn!("{}; falling back to standard rendering", err);
                RendererCapability::Standard
            }),
        }
    }
}

impl CapabilityDetector for EnvDetector {
    fn detect(&self) -> RendererCapability {
        Self::parse(env::var(RENDERER_ENV_VAR).ok().as_deref())
    }
}
