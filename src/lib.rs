//! gpui_animated_chart: an animated financial time-series chart for GPUI
//!
//! The engine ([`AnimatedChart`]) is headless: it maps records to a scene,
//! animates it on a virtual clock and owns the tooltip and playback state.
//! [`ChartView`] hosts it inside a GPUI window.

pub mod animation;
pub mod axes;
pub mod chart;
pub mod chart_view;
pub mod data_types;
pub mod geometry;
pub mod host;
pub mod kpi;
pub mod overlay;
pub mod playback;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod scene;
pub mod theme;
pub mod transform;
pub mod utils;

pub use chart::{AnimatedChart, RenderState};
pub use chart_view::ChartView;
pub use data_types::{ChartConfig, ChartMode, ChartProps, Record};
pub use host::{HeightLog, HostBridge, NoopHost};
pub use overlay::PointerEvent;
pub use playback::PlaybackState;
pub use plot_types::PlotRenderer;
pub use scene::{ElementId, Frame};
pub use theme::{Palette, Theme};
