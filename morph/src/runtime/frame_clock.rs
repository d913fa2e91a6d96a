use std::time::{Duration, Instant};

/// Most frames a single tick may run. Longer stalls (an occluded or
/// suspended window) drop the remaining debt.
pub const MAX_CATCH_UP: u32 = 4;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickResult {
    pub should_render: bool,
    pub frames_advanced: u32,
}

/// Paces animation frames against wall-clock time.
///
/// The host calls [`FrameClock::tick`] once per display refresh. Stopping is
/// synchronous: once [`FrameClock::stop`] returns, `tick` reports no frames
/// until [`FrameClock::resume`] or [`FrameClock::advance_single_frame`].
#[derive(Debug)]
pub struct FrameClock {
    fps: f32,
    frame_count: u64,
    play_state: PlayState,
    force_render: bool,
    last_tick: Instant,
    accumulator: Duration,
}

impl FrameClock {
    pub fn new(fps: f32) -> Self {
        Self::with_start(fps, Instant::now())
    }

    pub fn with_start(fps: f32, now: Instant) -> Self {
        Self {
            fps: fps.max(1.0),
            frame_count: 0,
            play_state: PlayState::Running,
            force_render: false,
            last_tick: now,
            accumulator: Duration::ZERO,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn is_running(&self) -> bool {
        self.play_state == PlayState::Running
    }

    pub fn stop(&mut self) {
        self.play_state = PlayState::Paused;
        self.force_render = false;
    }

    /// Continue from `now` without catching up on frames missed while paused
    pub fn resume(&mut self, now: Instant) {
        if self.play_state == PlayState::Paused {
            self.play_state = PlayState::Running;
            self.last_tick = now;
            self.accumulator = Duration::ZERO;
        }
    }

    pub fn toggle(&mut self, now: Instant) -> PlayState {
        match self.play_state {
            PlayState::Running => self.stop(),
            PlayState::Paused => self.resume(now),
        }
        self.play_state
    }

    /// Render exactly one frame on the next tick while paused
    pub fn advance_single_frame(&mut self) {
        if self.play_state == PlayState::Paused {
            self.force_render = true;
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps)
    }

    pub fn tick(&mut self, now: Instant) -> TickResult {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.accumulator += elapsed;

        if self.force_render {
            self.force_render = false;
            self.accumulator = Duration::ZERO;
            self.frame_count += 1;
            return TickResult {
                should_render: true,
                frames_advanced: 1,
            };
        }

        if self.play_state == PlayState::Paused {
            // No debt while paused
            self.accumulator = Duration::ZERO;
            return TickResult::default();
        }

        let frame_duration = self.frame_duration();
        let mut advanced = 0u32;

        while self.accumulator >= frame_duration {
            if advanced == MAX_CATCH_UP {
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= frame_duration;
            self.frame_count += 1;
            advanced += 1;
        }

        if advanced > 0 {
            TickResult {
                should_render: true,
                frames_advanced: advanced,
            }
        } else {
            TickResult::default()
        }
    }
}
