/// Presentation effects
///
/// The entrance fade, card hover elevation and the busy spinner. All
/// of it is driven by one animation tick: the subscription only runs
/// while something actually moves, and every alpha is a pure function
/// of instants so the views stay projections.

use std::time::{Duration, Instant};

/// How often the animation tick fires while something animates
pub const TICK: Duration = Duration::from_millis(50);

/// Delay between one element's fade-in and the next one's
pub const STAGGER: Duration = Duration::from_millis(100);

/// How long each element takes to fade in
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Opacity of the `index`-th element of a staggered entrance at `now`
///
/// Zero until the element's slot starts (100 ms per index), then a
/// linear ramp to fully opaque over the fade duration.
pub fn entrance_alpha(started: Instant, index: usize, now: Instant) -> f32 {
    let offset = STAGGER * index as u32;
    let elapsed = now.saturating_duration_since(started);
    if elapsed <= offset {
        return 0.0;
    }
    let progress = (elapsed - offset).as_secs_f32() / ENTRANCE_DURATION.as_secs_f32();
    progress.clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct Effects {
    launched: Instant,
    /// Last animation tick, the "now" every view renders against
    now: Instant,
    entrance_started: Option<Instant>,
    entrance_elements: usize,
    /// Dashboard card the pointer is over, if any
    hovered_card: Option<usize>,
}

impl Default for Effects {
    fn default() -> Self {
        Self::new()
    }
}

impl Effects {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            launched: now,
            now,
            entrance_started: None,
            entrance_elements: 0,
            hovered_card: None,
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advances the clock. Finished entrances are cleared so the tick
    /// subscription can shut off.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if let Some(started) = self.entrance_started {
            if now.saturating_duration_since(started) >= self.entrance_total() {
                self.entrance_started = None;
            }
        }
    }

    /// (Re)plays the staggered fade-in over `elements` elements,
    /// starting now
    pub fn play_entrance(&mut self, elements: usize, now: Instant) {
        self.now = now;
        if elements == 0 {
            self.entrance_started = None;
            self.entrance_elements = 0;
            return;
        }
        self.entrance_started = Some(now);
        self.entrance_elements = elements;
    }

    fn entrance_total(&self) -> Duration {
        STAGGER * self.entrance_elements.saturating_sub(1) as u32 + ENTRANCE_DURATION
    }

    /// True while the entrance still needs ticks
    pub fn entrance_running(&self) -> bool {
        self.entrance_started.is_some()
    }

    /// Opacity for the `index`-th animated element right now; fully
    /// opaque once the entrance is over
    pub fn entrance_alpha(&self, index: usize) -> f32 {
        match self.entrance_started {
            Some(started) => entrance_alpha(started, index, self.now),
            None => 1.0,
        }
    }

    /// Current frame of the busy spinner, cycling on the global clock
    pub fn spinner_frame(&self) -> &'static str {
        let running = self.now.saturating_duration_since(self.launched);
        let ticks = running.as_millis() / SPINNER_INTERVAL.as_millis();
        SPINNER_FRAMES[ticks as usize % SPINNER_FRAMES.len()]
    }

    // ========== Hover ==========

    pub fn hover_card(&mut self, index: usize) {
        self.hovered_card = Some(index);
    }

    pub fn unhover_card(&mut self, index: usize) {
        // Enter events for the next card can arrive before the leave
        // event of the previous one
        if self.hovered_card == Some(index) {
            self.hovered_card = None;
        }
    }

    pub fn is_card_hovered(&self, index: usize) -> bool {
        self.hovered_card == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_waits_for_the_stagger_slot() {
        let start = Instant::now();
        // Third element starts at 200 ms
        assert_eq!(entrance_alpha(start, 2, start + Duration::from_millis(150)), 0.0);
        assert_eq!(entrance_alpha(start, 2, start + Duration::from_millis(200)), 0.0);
        let mid = entrance_alpha(start, 2, start + Duration::from_millis(450));
        assert!(mid > 0.45 && mid < 0.55, "got {mid}");
        assert_eq!(entrance_alpha(start, 2, start + Duration::from_millis(700)), 1.0);
    }

    #[test]
    fn test_first_element_ramps_immediately() {
        let start = Instant::now();
        let early = entrance_alpha(start, 0, start + Duration::from_millis(50));
        assert!(early > 0.0 && early < 0.2, "got {early}");
        assert_eq!(entrance_alpha(start, 0, start + Duration::from_millis(500)), 1.0);
    }

    #[test]
    fn test_entrance_stops_needing_ticks_when_done() {
        let mut effects = Effects::new();
        let start = Instant::now();
        effects.play_entrance(3, start);
        assert!(effects.entrance_running());

        // 100 * 2 + 500 = 700 ms total for three elements
        effects.tick(start + Duration::from_millis(650));
        assert!(effects.entrance_running());

        effects.tick(start + Duration::from_millis(700));
        assert!(!effects.entrance_running());
        assert_eq!(effects.entrance_alpha(0), 1.0);
        assert_eq!(effects.entrance_alpha(2), 1.0);
    }

    #[test]
    fn test_empty_entrance_is_instantly_done() {
        let mut effects = Effects::new();
        effects.play_entrance(0, Instant::now());
        assert!(!effects.entrance_running());
    }

    #[test]
    fn test_spinner_cycles_with_the_clock() {
        let mut effects = Effects::new();
        let launch = effects.now();

        effects.tick(launch);
        let first = effects.spinner_frame();
        effects.tick(launch + Duration::from_millis(100));
        let second = effects.spinner_frame();
        assert_ne!(first, second);

        // Full cycle: ten frames at 100 ms each
        effects.tick(launch + Duration::from_millis(1000));
        assert_eq!(effects.spinner_frame(), first);
    }

    #[test]
    fn test_hover_tracks_one_card() {
        let mut effects = Effects::new();
        effects.hover_card(1);
        assert!(effects.is_card_hovered(1));
        assert!(!effects.is_card_hovered(0));

        // Stale leave from another card must not clear the new hover
        effects.hover_card(2);
        effects.unhover_card(1);
        assert!(effects.is_card_hovered(2));

        effects.unhover_card(2);
        assert!(!effects.is_card_hovered(2));
    }
}
