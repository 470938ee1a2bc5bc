//! Render Orchestrator
//!
//! `AnimatedChart` owns the whole redraw lifecycle. Any change of records,
//! chart mode, theme or playback step triggers a full clear-and-rebuild:
//! transitions of the previous redraw are cancelled by opening a new
//! timeline generation, the tooltip is dropped, the scene is rebuilt from
//! scratch and the desired frame height is reported to the host.
//!
//! Time only moves through [`AnimatedChart::advance`]. Playback ticks and
//! transition completions inside one advance are processed in clock order.

use glam::Vec2;
use std::time::Duration;

use crate::animation::{Timeline, TransitionEnd};
use crate::axes::draw_axes;
use crate::data_types::{ChartConfig, ChartMode, ChartProps, Record};
use crate::host::HostBridge;
use crate::overlay::{HoverTarget, InteractionOverlay, PointerEvent, Tooltip, TooltipStyle};
use crate::playback::{PlaybackController, PlaybackState, PlaybackTick};
use crate::plot_types::{AreaPlot, BarPlot, DrawContext, LinePlot, PlotRenderer, PointPlot};
use crate::scene::{ElementId, ElementKind, Frame, Property, Scene};
use crate::theme::{Palette, Theme};
use crate::transform::PlotTransform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Idle,
    Rendering,
}

/// Why a redraw happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedrawCause {
    Props,
    Records,
    Mode,
    Theme,
    PlaybackStep,
    Forced,
}

impl RedrawCause {
    /// Every redraw stops a running playback except the ticker's own step.
    fn cancels_playback(self) -> bool {
        self != RedrawCause::PlaybackStep
    }
}

pub struct AnimatedChart {
    config: ChartConfig,
    props: ChartProps,
    state: RenderState,
    scene: Scene,
    timeline: Timeline,
    overlay: InteractionOverlay,
    playback: PlaybackController,
    host: Box<dyn HostBridge>,
    hovered: Option<ElementId>,
    redraws: u64,
}

impl AnimatedChart {
    /// Creates an idle chart with no records. Nothing is drawn until the
    /// first props arrive or [`redraw`](Self::redraw) is called.
    pub fn new(config: ChartConfig, host: Box<dyn HostBridge>) -> Self {
        let playback = PlaybackController::new(config.animation.playback_interval());
        Self {
            config,
            props: ChartProps::default(),
            state: RenderState::Idle,
            scene: Scene::new(),
            timeline: Timeline::new(),
            overlay: InteractionOverlay::new(),
            playback,
            host,
            hovered: None,
            redraws: 0,
        }
    }

    pub fn with_props(config: ChartConfig, props: ChartProps, host: Box<dyn HostBridge>) -> Self {
        let mut chart = Self::new(config, host);
        chart.props = props;
        chart.redraw_with(RedrawCause::Props);
        chart
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn props(&self) -> &ChartProps {
        &self.props
    }

    pub fn records(&self) -> &[Record] {
        &self.props.data
    }

    pub fn mode(&self) -> ChartMode {
        self.props.chart_type
    }

    pub fn theme(&self) -> Theme {
        self.props.theme
    }

    pub fn palette(&self) -> Palette {
        self.props.theme.palette()
    }

    pub fn render_state(&self) -> RenderState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.overlay.tooltip()
    }

    pub fn is_hoverable(&self, id: ElementId) -> bool {
        self.overlay.is_attached(id)
    }

    /// Number of completed redraws since creation.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Current clock time.
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Whether the host should keep requesting frames.
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle() || self.playback.is_playing()
    }

    /// Replaces all inputs. Redraws only if something changed.
    pub fn set_props(&mut self, props: ChartProps) {
        if props == self.props {
            return;
        }
        self.props = props;
        self.redraw_with(RedrawCause::Props);
    }

    /// Parses and applies a host JSON payload. Invalid payloads are logged
    /// and leave the chart blank; they never propagate to the caller.
    pub fn apply_props_json(&mut self, json: &str) {
        match ChartProps::from_json(json) {
            Ok(props) => self.set_props(props),
            Err(err) => {
                tracing::warn!(error = %err, "rejected chart props, rendering blank");
                let blank = ChartProps {
                    data: Vec::new(),
                    ..self.props.clone()
                };
                self.props = blank;
                self.redraw_with(RedrawCause::Props);
            }
        }
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        if records == self.props.data {
            return;
        }
        self.props.data = records;
        self.redraw_with(RedrawCause::Records);
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        if mode == self.props.chart_type {
            return;
        }
        self.props.chart_type = mode;
        self.redraw_with(RedrawCause::Mode);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.props.theme {
            return;
        }
        self.props.theme = theme;
        self.redraw_with(RedrawCause::Theme);
    }

    /// Rebuilds the scene from the current inputs.
    pub fn redraw(&mut self) {
        self.redraw_with(RedrawCause::Forced);
    }

    /// The play control. Ignored while a pass is running.
    pub fn start_playback(&mut self) -> bool {
        let started = self.playback.start(self.timeline.now());
        if started {
            tracing::debug!(records = self.props.data.len(), "playback started");
        }
        started
    }

    /// Moves the clock forward by `dt`, firing playback ticks and
    /// transition completions in order.
    pub fn advance(&mut self, dt: Duration) {
        let target = self.timeline.now() + dt;
        while let Some(tick_at) = self.playback.next_tick().filter(|t| *t <= target) {
            self.process_until(tick_at);
            self.on_playback_tick();
        }
        self.process_until(target);
    }

    /// Dispatches a pointer event to the overlay.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let style = self.tooltip_style();
        match event {
            PointerEvent::Enter(id) => self.hovered = Some(id),
            PointerEvent::Leave(_) => self.hovered = None,
        }
        self.overlay
            .handle(event, &style, &mut self.scene, &mut self.timeline)
    }

    /// Turns a raw cursor position into enter/leave events.
    pub fn pointer_moved(&mut self, position: Vec2) -> bool {
        let hit = self
            .overlay
            .hit_test(position, self.config.animation.point_radius);
        if hit == self.hovered {
            return false;
        }
        let mut changed = false;
        if let Some(previous) = self.hovered {
            changed |= self.pointer(PointerEvent::Leave(previous));
        }
        if let Some(id) = hit {
            changed |= self.pointer(PointerEvent::Enter(id));
        }
        changed
    }

    /// Snapshot of every element with animations resolved at the current time.
    pub fn frame(&self) -> Frame {
        let mut elements = self.scene.sample(&self.timeline);
        if let Some(tooltip) = self.overlay.tooltip() {
            elements.extend(tooltip.elements().iter().map(|e| e.sampled(&self.timeline)));
        }
        Frame {
            time: self.timeline.now(),
            background: self.palette().background,
            elements,
        }
    }

    fn redraw_with(&mut self, cause: RedrawCause) {
        self.state = RenderState::Rendering;
        if cause.cancels_playback() && self.playback.is_playing() {
            tracing::debug!(?cause, "input changed, playback cancelled");
            self.playback.cancel();
        }

        self.timeline.begin_generation();
        self.overlay.clear();
        self.hovered = None;
        self.scene = Scene::new();

        let records = &self.props.data;
        tracing::debug!(
            ?cause,
            mode = ?self.props.chart_type,
            records = records.len(),
            generation = self.timeline.generation().0,
            "redraw"
        );

        if !records.is_empty() {
            let palette = self.props.theme.palette();
            let transform = PlotTransform::new(records, self.config.viewport);
            draw_axes(
                &transform,
                &palette,
                self.config.animation.axis_fade_ms,
                &mut self.scene,
                &mut self.timeline,
            );

            let mut cx = DrawContext {
                transform: &transform,
                palette: &palette,
                timings: &self.config.animation,
                scene: &mut self.scene,
                timeline: &mut self.timeline,
            };
            match self.props.chart_type {
                ChartMode::Line => {
                    LinePlot.draw(records, &mut cx);
                    PointPlot.draw(records, &mut cx);
                }
                ChartMode::Area => {
                    AreaPlot.draw(records, &mut cx);
                    LinePlot.draw(records, &mut cx);
                    PointPlot.draw(records, &mut cx);
                }
                ChartMode::Bar => BarPlot.draw(records, &mut cx),
                ChartMode::Unsupported => {
                    tracing::debug!("unsupported chart mode, axes only");
                }
            }
        }

        self.host.set_frame_height(self.config.frame_height());
        self.redraws += 1;
        self.state = RenderState::Idle;
    }

    fn process_until(&mut self, time: Duration) {
        for end in self.timeline.advance_to(time) {
            self.on_transition_end(end);
        }
    }

    fn on_transition_end(&mut self, end: TransitionEnd) {
        if end.generation != self.timeline.generation()
            || end.property != Property::Radius
            || !self.props.chart_type.has_hover()
        {
            return;
        }
        let Some(element) = self.scene.get(end.target) else {
            return;
        };
        if let ElementKind::Point { center, record } = element.kind {
            let total = self.props.data.get(record).map_or(0.0, |r| r.total);
            self.overlay.attach(end.target, HoverTarget { center, total });
        }
    }

    fn on_playback_tick(&mut self) {
        let before = self.playback.state();
        match self.playback.tick(self.props.data.len()) {
            PlaybackTick::Advanced(step) => tracing::trace!(step, "playback step"),
            PlaybackTick::Finished => tracing::debug!("playback finished"),
        }
        if self.playback.state().step != before.step {
            self.redraw_with(RedrawCause::PlaybackStep);
        }
    }

    fn tooltip_style(&self) -> TooltipStyle {
        let palette = self.palette();
        TooltipStyle {
            background: palette.background,
            border: palette.primary,
            text: palette.text,
            fade: Duration::from_millis(self.config.animation.tooltip_fade_ms),
            box_opacity: self.config.animation.tooltip_box_opacity,
            currency: self.config.currency.clone(),
        }
    }
}
