use std::collections::BTreeMap;
use std::time::Duration;

use super::Transition;
use crate::scene::{ElementId, Property};

/// Redraw counter. Transitions belong to the generation that scheduled them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

/// Reported once when a transition reaches its end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionEnd {
    pub target: ElementId,
    pub property: Property,
    pub generation: Generation,
    pub at: Duration,
}

#[derive(Clone, Debug)]
struct Scheduled {
    transition: Transition,
    scheduled_at: Duration,
    ended: bool,
}

impl Scheduled {
    /// `None` for loops, which never end.
    fn end_time(&self) -> Option<Duration> {
        self.transition.span().map(|span| self.scheduled_at + span)
    }
}

/// Arena of running transitions keyed by generation, driven by a virtual clock.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    generation: Generation,
    arena: BTreeMap<Generation, Vec<Scheduled>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Opens a new generation and cancels every transition of older ones.
    /// Returns the number of transitions dropped.
    pub fn begin_generation(&mut self) -> usize {
        self.generation = Generation(self.generation.0 + 1);
        let current = self.generation;
        let mut cancelled = 0;
        self.arena.retain(|generation, transitions| {
            let keep = *generation >= current;
            if !keep {
                cancelled += transitions.iter().filter(|s| !s.ended).count();
            }
            keep
        });
        tracing::trace!(generation = current.0, cancelled, "timeline generation opened");
        cancelled
    }

    /// Schedules `transition` in the current generation, starting now.
    pub fn schedule(&mut self, transition: Transition) {
        tracing::trace!(
            target_id = transition.target.0,
            property = ?transition.property,
            delay_ms = transition.delay.as_millis() as u64,
            duration_ms = transition.duration.as_millis() as u64,
            "transition scheduled"
        );
        self.arena
            .entry(self.generation)
            .or_default()
            .push(Scheduled {
                transition,
                scheduled_at: self.now,
                ended: false,
            });
    }

    /// Cancels all transitions targeting `target`. Returns how many were dropped.
    pub fn cancel_target(&mut self, target: ElementId) -> usize {
        let mut cancelled = 0;
        for transitions in self.arena.values_mut() {
            let before = transitions.len();
            transitions.retain(|s| s.transition.target != target);
            cancelled += before - transitions.len();
        }
        cancelled
    }

    /// Moves the clock to `time` and reports transitions that finished on
    /// the way, in completion order. The clock never runs backwards.
    pub fn advance_to(&mut self, time: Duration) -> Vec<TransitionEnd> {
        if time > self.now {
            self.now = time;
        }
        let now = self.now;
        let mut ended = Vec::new();
        for (generation, transitions) in self.arena.iter_mut() {
            for scheduled in transitions.iter_mut().filter(|s| !s.ended) {
                let Some(end) = scheduled.end_time() else {
                    continue;
                };
                if end <= now {
                    scheduled.ended = true;
                    ended.push(TransitionEnd {
                        target: scheduled.transition.target,
                        property: scheduled.transition.property,
                        generation: *generation,
                        at: end,
                    });
                }
            }
        }
        ended.sort_by_key(|e| (e.at, e.target));
        for end in &ended {
            tracing::trace!(target_id = end.target.0, property = ?end.property, "transition ended");
        }
        ended
    }

    pub fn advance(&mut self, dt: Duration) -> Vec<TransitionEnd> {
        self.advance_to(self.now + dt)
    }

    /// Current animated value of `property` on `target`, if any transition drives it.
    ///
    /// When several transitions drive the same property the most recently
    /// started one wins; before any has started the first one holds its
    /// start value.
    pub fn sample(&self, target: ElementId, property: Property) -> Option<f32> {
        let mut pending: Option<&Scheduled> = None;
        let mut active: Option<&Scheduled> = None;
        for scheduled in self.transitions_of(target, property) {
            let start = scheduled.scheduled_at + scheduled.transition.delay;
            if start <= self.now {
                if active.map_or(true, |a| a.scheduled_at + a.transition.delay <= start) {
                    active = Some(scheduled);
                }
            } else if pending.is_none() {
                pending = Some(scheduled);
            }
        }
        active
            .or(pending)
            .map(|s| s.transition.value_at(self.now.saturating_sub(s.scheduled_at)))
    }

    /// Transitions scheduled for `target` in live generations.
    pub fn transitions_for(&self, target: ElementId) -> Vec<&Transition> {
        self.arena
            .values()
            .flatten()
            .filter(|s| s.transition.target == target)
            .map(|s| &s.transition)
            .collect()
    }

    /// Number of finite transitions that have not reached their end yet.
    pub fn pending_count(&self) -> usize {
        self.arena
            .values()
            .flatten()
            .filter(|s| !s.ended && !s.transition.repeats())
            .count()
    }

    /// True once every finite transition has ended. Loops keep running.
    pub fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }

    pub fn loop_count(&self) -> usize {
        self.arena
            .values()
            .flatten()
            .filter(|s| s.transition.repeats())
            .count()
    }

    /// Clock time at which the last finite live transition completes.
    pub fn settle_time(&self) -> Option<Duration> {
        self.arena.values().flatten().filter_map(|s| s.end_time()).max()
    }

    fn transitions_of(
        &self,
        target: ElementId,
        property: Property,
    ) -> impl Iterator<Item = &Scheduled> {
        self.arena.values().flatten().filter(move |s| {
            s.transition.target == target && s.transition.property == property
        })
    }
}
