use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use morph::RuntimeLogo;
use morph::core::logging::info;
use morph::runtime::{LogoConfig, default_config_path, save_config};

/// Step `logo` until it has run `frames` frames in total and return the
/// markup of the last one.
pub fn render_frames(logo: &mut RuntimeLogo, frames: u32) -> String {
    while logo.snapshot().frame < frames as u64 {
        logo.step();
    }
    logo.markup()
}

pub fn write_svg(
    path: impl AsRef<Path>,
    markup: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)?;
    }
    fs::write(path, markup)?;
    info!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

pub fn print_svg(markup: &str) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", markup)?;
    Ok(())
}

/// Write `config` to `out` (or the default config location). An existing
/// file is only replaced with `force`.
pub fn init_config(
    config: &LogoConfig,
    out: Option<PathBuf>,
    force: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = out
        .or_else(default_config_path)
        .ok_or("No config directory available; pass --out")?;

    if path.exists() && !force {
        return Err(format!(
            "{} already exists; pass --force to replace it",
            path.display()
        )
        .into());
    }

    save_config(&path, config)?;
    info!("Wrote config to {}", path.display());
    Ok(path)
}

/// `<dir>/runtime-logo-<seed>-<frame>.svg`
pub fn capture_path(dir: &Path, logo: &RuntimeLogo) -> PathBuf {
    let seed = logo
        .seed()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unseeded".to_string());

    dir.join(format!(
        "runtime-logo-{}-{}.svg",
        seed,
        logo.snapshot().frame
    ))
}
