use std::time::{Duration, Instant};

/// Two presses closer together than this count as a double click
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogoEvent {
    PointerEnter,
    PointerLeave,
    /// Raw primary button press, resolved into `Click` / `DoubleClick`
    PointerPress,
    Click,
    DoubleClick,
    Pause,
    Resume,
    TogglePause,
    AdvanceSingleFrame,
}

/// Turns raw presses into clicks. Like a browser, the second press of a
/// double click is also delivered as a click.
#[derive(Clone, Debug)]
pub struct ClickTracker {
    interval: Duration,
    last_press: Option<Instant>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_INTERVAL)
    }
}

impl ClickTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_press: None,
        }
    }

    pub fn press(&mut self, now: Instant) -> &'static [LogoEvent] {
        let is_double = self.last_press.is_some_and(|last| {
            now.saturating_duration_since(last) <= self.interval
        });

        if is_double {
            self.last_press = None;
            &[LogoEvent::Click, LogoEvent::DoubleClick]
        } else {
            self.last_press = Some(now);
            &[LogoEvent::Click]
        }
    }
}
