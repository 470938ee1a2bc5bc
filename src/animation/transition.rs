use std::time::Duration;

use super::Easing;
use crate::scene::{ElementId, Property};

/// Default duration of a transition that does not set one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// One animated property change: `property` of `target` goes from `from`
/// to `to` over `duration`, starting `delay` after it is scheduled.
///
/// With intermediate `keyframes` the value passes through each of them at
/// evenly spaced times, easing every leg. A repeating transition plays
/// again after `repeat_delay` and never ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub target: ElementId,
    pub property: Property,
    pub from: f32,
    pub to: f32,
    pub keyframes: Vec<f32>,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub repeat_delay: Option<Duration>,
}

impl Transition {
    pub fn new(target: ElementId, property: Property, from: f32, to: f32) -> Self {
        Self {
            target,
            property,
            from,
            to,
            keyframes: Vec::new(),
            delay: Duration::ZERO,
            duration: DEFAULT_DURATION,
            easing: Easing::default(),
            repeat_delay: None,
        }
    }

    /// Runs through `values` in order. Fewer than two values hold still.
    pub fn keyframes(target: ElementId, property: Property, values: &[f32]) -> Self {
        let first = values.first().copied().unwrap_or_default();
        let last = values.last().copied().unwrap_or(first);
        let mut transition = Self::new(target, property, first, last);
        transition.keyframes = values.to_vec();
        transition
    }

    /// Plays the transition forever, pausing `pause` between rounds.
    pub fn repeat_forever(mut self, pause: Duration) -> Self {
        self.repeat_delay = Some(pause);
        self
    }

    pub fn repeats(&self) -> bool {
        self.repeat_delay.is_some()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value at `elapsed` time since the transition was scheduled.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return self.from;
        }
        let mut running = elapsed - self.delay;
        if let Some(pause) = self.repeat_delay {
            let period = (self.duration + pause).as_nanos();
            if period > 0 {
                running = Duration::from_nanos((running.as_nanos() % period) as u64);
            }
        }
        if self.duration.is_zero() || running >= self.duration {
            return self.to;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.interpolate(t)
    }

    fn interpolate(&self, t: f32) -> f32 {
        let secs = self.duration.as_secs_f32();
        if self.keyframes.len() < 2 {
            let eased = self.easing.apply(t, secs);
            return self.from + (self.to - self.from) * eased;
        }
        let legs = self.keyframes.len() - 1;
        let position = t * legs as f32;
        let leg = (position.floor() as usize).min(legs - 1);
        let (a, b) = (self.keyframes[leg], self.keyframes[leg + 1]);
        let eased = self.easing.apply(position - leg as f32, secs / legs as f32);
        a + (b - a) * eased
    }

    /// Time from scheduling to completion. `None` for repeating transitions.
    pub fn span(&self) -> Option<Duration> {
        match self.repeat_delay {
            Some(_) => None,
            None => Some(self.delay + self.duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn keyframes_are_hit_on_leg_boundaries() {
        let t = Transition::keyframes(ElementId(0), Property::Scale, &[1.0, 2.0, 1.0]).duration_ms(1000);
        assert_eq!(t.value_at(ms(0)), 1.0);
        assert!((t.value_at(ms(500)) - 2.0).abs() < 1e-5);
        assert!((t.value_at(ms(250)) - 1.5).abs() < 1e-5);
        assert_eq!(t.value_at(ms(1000)), 1.0);
        assert_eq!(t.span(), Some(ms(1000)));
    }

    #[test]
    fn repeating_transition_restarts_after_pause() {
        let t = Transition::new(ElementId(0), Property::Opacity, 0.0, 1.0)
            .duration_ms(100)
            .ease(Easing::Linear)
            .repeat_forever(ms(50));
        assert!(t.repeats());
        assert_eq!(t.span(), None);
        assert!((t.value_at(ms(40)) - 0.4).abs() < 1e-5);
        assert_eq!(t.value_at(ms(120)), 1.0);
        assert!((t.value_at(ms(190)) - 0.4).abs() < 1e-5);
    }
}
