use clap::Parser;

use morph::RuntimeLogo;
use morph::core::logging::{error, init_logger};
use morph::runtime::{
    EnvDetector, FixedDetector, LogoConfig, RendererCapability,
};

mod app;
mod args;
mod export;

use args::{Args, Command};

fn main() {
    init_logger();

    let args = Args::parse();

    let config = args.resolve_config().unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    });

    match args.command {
        Some(Command::Svg { frames, out }) => {
            let mut logo = build_logo(config, args.renderer);
            let svg = export::render_frames(&mut logo, frames);

            let result = match out {
                Some(path) => export::write_svg(path, &svg).map(|_| ()),
                None => export::print_svg(&svg),
            };

            if let Err(err) = result {
                error!("Failed to export svg: {}", err);
                std::process::exit(1);
            }
        }
        Some(Command::InitConfig { out, force }) => {
            if let Err(err) = export::init_config(&config, out, force) {
                error!("Failed to write config: {}", err);
                std::process::exit(1);
            }
        }
        None => app::run(app::LaunchOptions {
            config,
            renderer: args.renderer,
            scale: args.scale,
        }),
    }
}

/// A forced renderer wins over whatever the environment reports
pub fn build_logo(
    config: LogoConfig,
    renderer: Option<RendererCapability>,
) -> RuntimeLogo {
    match renderer {
        Some(capability) => {
            RuntimeLogo::from_config(config, &FixedDetector(capability))
        }
        None => RuntimeLogo::from_config(config, &EnvDetector),
    }
}
