//! Outbound notifications to the embedding application.

use parking_lot::Mutex;
use std::sync::Arc;

/// Receives the height the chart wants its frame to have.
pub trait HostBridge {
    fn set_frame_height(&mut self, height: f32);
}

impl<F> HostBridge for F
where
    F: FnMut(f32),
{
    fn set_frame_height(&mut self, height: f32) {
        self(height)
    }
}

/// Host that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl HostBridge for NoopHost {
    fn set_frame_height(&mut self, _height: f32) {}
}

/// Keeps every reported height; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct HeightLog {
    heights: Arc<Mutex<Vec<f32>>>,
}

impl HeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heights(&self) -> Vec<f32> {
        self.heights.lock().clone()
    }

    pub fn last(&self) -> Option<f32> {
        self.heights.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.heights.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.lock().is_empty()
    }
}

impl HostBridge for HeightLog {
    fn set_frame_height(&mut self, height: f32) {
        self.heights.lock().push(height);
    }
}
