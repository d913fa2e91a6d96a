use nannou::prelude::*;
use nannou::wgpu::{BlendComponent, BlendFactor, BlendOperation};
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use morph::RuntimeLogo;
use morph::core::logging::{error, info, warn};
use morph::render::{LABEL_LAYOUT, TITLE_LAYOUT, TextLayout, VIEW_BOX};
use morph::runtime::{
    LogoConfig, LogoEvent, RendererCapability, TextEffect, default_images_dir,
};

use crate::export;

/// Bezier samples per outline segment
const OUTLINE_STEPS: usize = 24;
/// CSS px per rem
const REM_PX: f64 = 16.0;

/// `dst * (1 - src) + src * (1 - dst)`: with white text this is
/// `invert(1)` + `mix-blend-mode: difference` over black text
const DIFFERENCE_FROM_WHITE: BlendComponent = BlendComponent {
    src_factor: BlendFactor::OneMinusDst,
    dst_factor: BlendFactor::OneMinusSrc,
    operation: BlendOperation::Add,
};

#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub config: LogoConfig,
    pub renderer: Option<RendererCapability>,
    pub scale: f32,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            config: LogoConfig::default(),
            renderer: None,
            scale: 2.0,
        }
    }
}

// nannou's model function is a plain fn pointer
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

pub fn run(options: LaunchOptions) {
    if LAUNCH.set(options).is_err() {
        warn!("Launch options already set; keeping the first");
    }

    nannou::app(model).update(update).event(event).run();
}

struct Model {
    logo: RuntimeLogo,
    window_id: window::Id,
    images_dir: PathBuf,
}

fn model(app: &App) -> Model {
    let options = LAUNCH.get().cloned().unwrap_or_default();
    let scale = options.scale.max(0.25);

    let window_id = app
        .new_window()
        .title("Runtime Logo")
        .size(
            (VIEW_BOX.0 as f32 * scale).round() as u32,
            (VIEW_BOX.1 as f32 * scale).round() as u32,
        )
        .view(view)
        .build()
        .expect("Failed to build window");

    let logo = crate::build_logo(options.config, options.renderer);
    let images_dir = default_images_dir();

    info!(
        "Space: pause/resume, A: advance frame, S: save svg to {}",
        images_dir.display()
    );

    Model {
        logo,
        window_id,
        images_dir,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.logo.tick(Instant::now());
}

fn event(_app: &App, model: &mut Model, event: Event) {
    let Event::WindowEvent {
        id,
        simple: Some(window_event),
        ..
    } = event
    else {
        return;
    };

    if id != model.window_id {
        return;
    }

    let now = Instant::now();

    match window_event {
        WindowEvent::MouseEntered => {
            model.logo.handle(LogoEvent::PointerEnter, now);
        }
        WindowEvent::MouseExited => {
            model.logo.handle(LogoEvent::PointerLeave, now);
        }
        WindowEvent::MousePressed(MouseButton::Left) => {
            model.logo.handle(LogoEvent::PointerPress, now);
        }
        WindowEvent::KeyPressed(Key::Space) => {
            model.logo.handle(LogoEvent::TogglePause, now);
        }
        WindowEvent::KeyPressed(Key::A) => {
            model.logo.handle(LogoEvent::AdvanceSingleFrame, now);
        }
        WindowEvent::KeyPressed(Key::S) => {
            let path = export::capture_path(&model.images_dir, &model.logo);
            if let Err(err) = export::write_svg(&path, &model.logo.markup()) {
                error!("Failed to save {}: {}", path.display(), err);
            }
        }
        _ => {}
    }
}

/// Maps view box coordinates (origin top left, y down) into nannou's
/// centered, y up window space.
#[derive(Clone, Copy, Debug)]
struct ViewTransform {
    scale: f32,
}

impl ViewTransform {
    fn fit(window: Rect) -> Self {
        let scale = (window.w() / VIEW_BOX.0 as f32)
            .min(window.h() / VIEW_BOX.1 as f32);
        Self { scale }
    }

    fn point(&self, (x, y): (f64, f64)) -> Point2 {
        pt2(
            (x as f32 - VIEW_BOX.0 as f32 / 2.0) * self.scale,
            (VIEW_BOX.1 as f32 / 2.0 - y as f32) * self.scale,
        )
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let transform = ViewTransform::fit(app.window_rect());
    let snapshot = model.logo.snapshot();
    let outline = snapshot.outline.flatten(OUTLINE_STEPS);

    // Vertical gradient over the outline's bounding box
    if let Some(((_, min_y), (_, max_y))) =
        snapshot.outline.bounds(OUTLINE_STEPS)
    {
        let span = (max_y - min_y).max(f64::EPSILON);
        let gradient = snapshot.gradient;

        draw.polygon().points_colored(outline.iter().map(|&p| {
            let [r, g, b] = gradient.rgb_at((p.1 - min_y) / span);
            (transform.point(p), rgb(r, g, b))
        }));
    }

    let effect = model.logo.text_effect();
    draw_text(&draw, model.logo.title(), TITLE_LAYOUT, effect, transform);
    draw_text(&draw, model.logo.label_text(), LABEL_LAYOUT, effect, transform);

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", err);
    }
}

/// `layout` positions the text baseline's left end, as SVG `<text>` does
fn draw_text(
    draw: &Draw,
    text: &str,
    layout: TextLayout,
    effect: TextEffect,
    transform: ViewTransform,
) {
    let font_size =
        (layout.font_size * REM_PX * transform.scale as f64).round() as u32;
    let w = VIEW_BOX.0 as f32 * transform.scale;
    let h = font_size as f32 * 1.5;
    let baseline = transform.point((layout.x, layout.y));

    let (draw, color) = match effect {
        TextEffect::InvertDifference => {
            (draw.color_blend(DIFFERENCE_FROM_WHITE), WHITE)
        }
        TextEffect::None => (draw.clone(), BLACK),
    };

    draw.text(text)
        .font_size(font_size)
        .left_justify()
        .align_text_bottom()
        .color(color)
        .x_y(baseline.x + w / 2.0, baseline.y + h / 2.0)
        .w_h(w, h);
}
