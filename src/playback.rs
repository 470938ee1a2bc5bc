//! Step-through playback: walks an index over the records at a fixed cadence.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub step: usize,
}

/// Outcome of one playback tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackTick {
    Advanced(usize),
    /// The pass is over; state is back to `step = 0`, not playing.
    Finished,
}

/// Cancellable ticker that owns the playback state.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    interval: Duration,
    next_tick: Option<Duration>,
}

impl PlaybackController {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: PlaybackState::default(),
            interval,
            next_tick: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Starts one pass at clock time `now`. Ignored while already playing.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.state.is_playing {
            return false;
        }
        self.state.is_playing = true;
        self.next_tick = Some(now + self.interval);
        true
    }

    /// Clock time of the next pending tick.
    pub fn next_tick(&self) -> Option<Duration> {
        self.next_tick
    }

    /// Fires the pending tick over a sequence of `len` records.
    pub fn tick(&mut self, len: usize) -> PlaybackTick {
        let Some(at) = self.next_tick else {
            return PlaybackTick::Finished;
        };
        if self.state.step + 1 >= len {
            self.cancel();
            return PlaybackTick::Finished;
        }
        self.state.step += 1;
        self.next_tick = Some(at + self.interval);
        PlaybackTick::Advanced(self.state.step)
    }

    /// Stops the ticker and resets the state.
    pub fn cancel(&mut self) {
        self.state = PlaybackState::default();
        self.next_tick = None;
    }
}
