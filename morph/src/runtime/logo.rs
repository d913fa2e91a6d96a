use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use super::capability::{CapabilityDetector, RendererCapability, TextEffect};
use super::config::LogoConfig;
use super::events::{ClickTracker, LogoEvent};
use super::frame_clock::{FrameClock, PlayState};
use crate::core::logging::{debug, info};
use crate::motion::{
    AnimationState, ControlPoint, NoiseField, PointRing, SimplexField,
};
use crate::render::{DEFAULT_TENSION, Gradient, LogoMarkup, Spline};

/// Which of the two configured labels is showing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Label {
    #[default]
    Primary,
    Alternate,
}

impl Label {
    pub fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Alternate,
            Self::Alternate => Self::Primary,
        }
    }

    pub fn text(self, labels: &[String; 2]) -> &str {
        match self {
            Self::Primary => &labels[0],
            Self::Alternate => &labels[1],
        }
    }
}

/// What one animation step publishes
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub outline: Spline,
    pub hue: f64,
    pub gradient: Gradient,
}

/// The morphing blob-and-text logo.
///
/// Construction builds the point ring, resolves the renderer capability once
/// and runs the first step, so a freshly built logo already has an outline
/// and gradient to show.
pub struct RuntimeLogo {
    config: LogoConfig,
    seed: Option<u32>,
    field: Box<dyn NoiseField>,
    ring: PointRing,
    animation: AnimationState,
    label: Label,
    capability: RendererCapability,
    clock: FrameClock,
    clicks: ClickTracker,
    snapshot: FrameSnapshot,
}

impl RuntimeLogo {
    pub fn new(
        config: LogoConfig,
        field: impl NoiseField + 'static,
        detector: &impl CapabilityDetector,
        rng: &mut impl Rng,
    ) -> Self {
        let capability = detector.detect();
        let ring = PointRing::new(rng);
        let animation = AnimationState::new(config.noise_step);
        let clock = FrameClock::new(config.fps);

        let mut logo = Self {
            config,
            seed: None,
            field: Box::new(field),
            ring,
            animation,
            label: Label::default(),
            capability,
            clock,
            clicks: ClickTracker::default(),
            snapshot: FrameSnapshot {
                frame: 0,
                outline: Spline::default(),
                hue: 0.0,
                gradient: Gradient::from_hue(0.0),
            },
        };

        logo.step();
        logo
    }

    /// Simplex noise and phases seeded from `config.seed`, or a fresh seed
    /// when none is configured.
    pub fn from_config(
        config: LogoConfig,
        detector: &impl CapabilityDetector,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed as u64);

        let mut logo =
            Self::new(config, SimplexField::new(seed), detector, &mut rng);
        logo.seed = Some(seed);

        info!(
            "Logo ready; seed: {}, renderer: {}",
            seed, logo.capability
        );

        logo
    }

    /// Advance the animation by one tick.
    ///
    /// The published outline is fit through the points as they were before
    /// this tick moved them.
    pub fn step(&mut self) -> &FrameSnapshot {
        let outline = Spline::closed(&self.ring.positions(), DEFAULT_TENSION);

        self.ring.perturb(&self.field, self.animation.noise_step);

        let hue = self.animation.hue(&self.field);
        let gradient = Gradient::from_hue(hue);
        self.animation.advance_hue();

        self.snapshot = FrameSnapshot {
            frame: self.snapshot.frame + 1,
            outline,
            hue,
            gradient,
        };

        &self.snapshot
    }

    /// Run however many steps the frame clock says are due at `now`.
    /// Returns `None` when no step ran.
    pub fn tick(&mut self, now: Instant) -> Option<&FrameSnapshot> {
        let tick = self.clock.tick(now);

        if !tick.should_render {
            return None;
        }

        for _ in 0..tick.frames_advanced {
            self.step();
        }

        Some(&self.snapshot)
    }

    pub fn handle(&mut self, event: LogoEvent, now: Instant) {
        match event {
            LogoEvent::PointerEnter => self.on_pointer_enter(),
            LogoEvent::PointerLeave => self.on_pointer_leave(),
            LogoEvent::PointerPress => {
                for &event in self.clicks.press(now) {
                    self.handle(event, now);
                }
            }
            LogoEvent::Click => self.on_click(),
            LogoEvent::DoubleClick => self.on_double_click(),
            LogoEvent::Pause => self.pause(),
            LogoEvent::Resume => self.resume(now),
            LogoEvent::TogglePause => {
                let state = self.clock.toggle(now);
                debug!("Play state: {:?}", state);
            }
            LogoEvent::AdvanceSingleFrame => self.clock.advance_single_frame(),
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.animation.noise_step = self.config.hover_noise_step;
    }

    pub fn on_pointer_leave(&mut self) {
        self.animation.noise_step = self.config.noise_step;
    }

    pub fn on_click(&mut self) {
        self.animation.jump_hue(self.config.hue_jump);
    }

    pub fn on_double_click(&mut self) {
        self.label = self.label.toggled();
        debug!("Label: {}", self.label_text());
    }

    pub fn pause(&mut self) {
        self.clock.stop();
        debug!("Paused at frame {}", self.snapshot.frame);
    }

    pub fn resume(&mut self, now: Instant) {
        self.clock.resume(now);
        debug!("Resumed at frame {}", self.snapshot.frame);
    }

    pub fn play_state(&self) -> PlayState {
        self.clock.play_state()
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    pub fn points(&self) -> &[ControlPoint] {
        self.ring.points()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn label_text(&self) -> &str {
        self.label.text(&self.config.labels)
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn capability(&self) -> RendererCapability {
        self.capability
    }

    pub fn text_effect(&self) -> TextEffect {
        self.capability.text_effect()
    }

    /// SVG markup for the current frame
    pub fn markup(&self) -> String {
        let outline = self.snapshot.outline.to_svg_path();

        LogoMarkup {
            outline: &outline,
            gradient: self.snapshot.gradient,
            title: &self.config.title,
            label: self.label_text(),
            fonts: &self.config.fonts,
            text_effect: self.text_effect(),
        }
        .to_svg()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::motion::NUM_POINTS;
    use crate::runtime::frame_clock::MAX_CATCH_UP;
    use crate::runtime::capability::FixedDetector;

    fn logo() -> RuntimeLogo {
        RuntimeLogo::new(
            LogoConfig::default(),
            SimplexField::new(5),
            &FixedDetector(RendererCapability::Chromium),
            &mut StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn construction_runs_first_step() {
        let logo = logo();
        assert_eq!(logo.snapshot().frame, 1);
        assert_eq!(logo.snapshot().outline.segments().len(), NUM_POINTS);
        assert_eq!(logo.play_state(), PlayState::Running);
    }

    #[test]
    fn first_outline_is_resting_ring() {
        let logo = logo();
        let start = logo.snapshot().outline.start().unwrap();
        let first = logo.points()[0];
        assert_eq!(start, (first.origin_x, first.origin_y));
    }

    #[test]
    fn outline_lags_points_by_one_step() {
        let mut logo = logo();
        let before: Vec<_> =
            logo.points().iter().map(ControlPoint::xy).collect();

        let snapshot = logo.step().clone();
        assert_eq!(snapshot.outline.start(), Some(before[0]));
    }

    #[test]
    fn points_stay_within_wobble() {
        let mut logo = logo();
        for _ in 0..2_000 {
            logo.step();
            assert_eq!(logo.points().len(), NUM_POINTS);
            for point in logo.points() {
                assert!(point.within_wobble(), "{:?} escaped", point);
            }
        }
    }

    #[test]
    fn gradient_follows_hue() {
        let mut logo = logo();
        for _ in 0..500 {
            let snapshot = logo.step();
            assert!((0.0..=360.0).contains(&snapshot.hue));
            assert_eq!(snapshot.gradient.start.hue, snapshot.hue);
            assert_eq!(snapshot.gradient.stop.hue, snapshot.hue + 100.0);
        }
    }

    #[test]
    fn hover_changes_speed() {
        let mut logo = logo();
        let now = Instant::now();
        logo.handle(LogoEvent::PointerEnter, now);
        assert_eq!(logo.animation().noise_step, 0.002);
        logo.handle(LogoEvent::PointerLeave, now);
        assert_eq!(logo.animation().noise_step, 0.005);
    }

    #[test]
    fn click_jumps_hue_offset() {
        let mut logo = logo();
        let before = logo.animation().hue_noise_offset;
        logo.on_click();
        assert_eq!(logo.animation().hue_noise_offset, before + 20.0);
    }

    #[test]
    fn double_click_toggles_label() {
        let mut logo = logo();
        assert_eq!(logo.label_text(), "Runtime");
        logo.on_double_click();
        assert_eq!(logo.label_text(), "Funtime");
        logo.on_double_click();
        assert_eq!(logo.label_text(), "Runtime");
    }

    #[test]
    fn raw_double_press_clicks_twice_and_toggles() {
        let mut logo = logo();
        let before = logo.animation().hue_noise_offset;
        let now = Instant::now();

        logo.handle(LogoEvent::PointerPress, now);
        logo.handle(LogoEvent::PointerPress, now + Duration::from_millis(50));

        assert_eq!(logo.animation().hue_noise_offset, before + 40.0);
        assert_eq!(logo.label(), Label::Alternate);
    }

    #[test]
    fn pause_stops_ticks_immediately() {
        let mut logo = logo();
        let start = Instant::now();

        logo.handle(LogoEvent::Pause, start);
        let frame = logo.snapshot().frame;

        assert!(logo.tick(start + Duration::from_secs(1)).is_none());
        assert_eq!(logo.snapshot().frame, frame);

        let resumed_at = start + Duration::from_secs(2);
        logo.handle(LogoEvent::Resume, resumed_at);
        let snapshot = logo.tick(resumed_at + Duration::from_millis(20));
        assert_eq!(snapshot.map(|s| s.frame), Some(frame + 1));
    }

    #[test]
    fn tick_after_long_stall_runs_bounded_steps() {
        let mut logo = logo();
        let frame = logo.snapshot().frame;

        let snapshot = logo.tick(Instant::now() + Duration::from_secs(600));
        assert_eq!(
            snapshot.map(|s| s.frame),
            Some(frame + MAX_CATCH_UP as u64)
        );
    }

    #[test]
    fn markup_reflects_state() {
        let mut logo = logo();
        logo.on_double_click();
        let svg = logo.markup();
        assert!(svg.contains(">Funtime</text>"));
        assert!(svg.contains("mix-blend-mode: difference"));
        assert!(svg.contains(&logo.snapshot().outline.to_svg_path()));
    }

    #[test]
    fn standard_renderer_has_no_text_effect() {
        let logo = RuntimeLogo::new(
            LogoConfig::default(),
            SimplexField::new(5),
            &FixedDetector(RendererCapability::Standard),
            &mut StdRng::seed_from_u64(5),
        );
        assert_eq!(logo.text_effect(), TextEffect::None);
        assert!(!logo.markup().contains("mix-blend-mode"));
    }

    #[test]
    fn from_config_uses_seed() {
        let config = LogoConfig {
            seed: Some(77),
            ..Default::default()
        };
        let detector = FixedDetector::default();
        let a = RuntimeLogo::from_config(config.clone(), &detector);
        let b = RuntimeLogo::from_config(config, &detector);

        assert_eq!(a.seed(), Some(77));
        assert_eq!(a.points(), b.points());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
