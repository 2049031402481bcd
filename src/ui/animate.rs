use gloo_timers::callback::Interval;

/// Tick period for frame-stepped animations. Close enough to one display
/// frame without pretending to be vsync.
pub const TICK_MS: u32 = 16;

/// Interval-backed animation ticker. The callback receives the elapsed
/// milliseconds since `start`. Dropping the handle cancels the underlying
/// interval, so an effect cleanup that drops it guarantees no callback runs
/// after the owning component unmounts.
pub struct Animation {
    _interval: Interval,
}

impl Animation {
    pub fn start<F>(mut on_tick: F) -> Self
    where
        F: FnMut(u32) + 'static,
    {
        let mut elapsed: u32 = 0;
        let interval = Interval::new(TICK_MS, move || {
            elapsed = elapsed.saturating_add(TICK_MS);
            on_tick(elapsed);
        });
        Self {
            _interval: interval,
        }
    }
}
