use gpui::prelude::*;
use gpui::*;
use std::time::{Duration, Instant};

use crate::animation::{Timeline, Transition};
use crate::chart::AnimatedChart;
use crate::data_types::hex_color::from_u32;
use crate::data_types::{ChartConfig, ChartProps};
use crate::host::HostBridge;
use crate::kpi::{KpiBoard, KpiProps};
use crate::overlay::PointerEvent;
use crate::rendering::{kpi_card, label_elements, paint_frame, FrameSpace};
use crate::scene::{ElementId, ElementKind, Property};

pub const TITLE: &str = "📊 Vendas Interativas";
pub const PLAY_LABEL: &str = "▶️ Animar";
pub const PAUSE_LABEL: &str = "⏸️ Pausar";

const BUTTON_FROM: u32 = 0xff6b35;
const BUTTON_TO: u32 = 0xf7931e;

const CARD: ElementId = ElementId(0);
const CARD_RISE: f32 = 20.0;
const CARD_ENTRANCE: Duration = Duration::from_millis(600);

/// The GPUI host of an [`AnimatedChart`]: paints its frames, drives its
/// clock from animation frames and turns hover and clicks into events.
pub struct ChartView {
    chart: AnimatedChart,
    kpis: Option<KpiBoard>,
    /// Fade and rise of the whole chart card when the view appears.
    entrance: Timeline,
    last_tick: Option<Instant>,
}

impl ChartView {
    pub fn new(
        config: ChartConfig,
        props: ChartProps,
        host: Box<dyn HostBridge>,
        _cx: &mut Context<Self>,
    ) -> Self {
        let mut entrance = Timeline::new();
        entrance.schedule(Transition::new(CARD, Property::Opacity, 0.0, 1.0).duration(CARD_ENTRANCE));
        entrance.schedule(
            Transition::new(CARD, Property::TranslateY, CARD_RISE, 0.0).duration(CARD_ENTRANCE),
        );
        Self {
            chart: AnimatedChart::with_props(config, props, host),
            kpis: None,
            entrance,
            last_tick: None,
        }
    }

    /// Current `(opacity, offset_y)` of the chart card.
    pub fn card_entrance(&self) -> (f32, f32) {
        (
            self.entrance.sample(CARD, Property::Opacity).unwrap_or(1.0),
            self.entrance.sample(CARD, Property::TranslateY).unwrap_or(0.0),
        )
    }

    fn is_animating(&self) -> bool {
        self.chart.is_animating()
            || !self.entrance.is_idle()
            || self.kpis.as_ref().is_some_and(|k| k.is_animating())
    }

    pub fn chart(&self) -> &AnimatedChart {
        &self.chart
    }

    pub fn kpis(&self) -> Option<&KpiBoard> {
        self.kpis.as_ref()
    }

    pub fn set_props(&mut self, props: ChartProps, cx: &mut Context<Self>) {
        self.chart.set_props(props);
        cx.notify();
    }

    pub fn apply_props_json(&mut self, json: &str, cx: &mut Context<Self>) {
        self.chart.apply_props_json(json);
        cx.notify();
    }

    /// Shows a KPI grid above the chart, or removes it with `None`.
    pub fn set_kpis(&mut self, props: Option<KpiProps>, cx: &mut Context<Self>) {
        let width = self.chart.config().viewport.width;
        match (&mut self.kpis, props) {
            (Some(board), Some(props)) => board.set_props(props),
            (slot, props) => *slot = props.map(|p| KpiBoard::new(p, width)),
        }
        cx.notify();
    }

    pub fn play(&mut self, cx: &mut Context<Self>) -> bool {
        let started = self.chart.start_playback();
        if started {
            cx.notify();
        }
        started
    }

    fn tick(&mut self) {
        if !self.is_animating() {
            self.last_tick = None;
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last);
            self.chart.advance(dt);
            self.entrance.advance(dt);
            if let Some(kpis) = self.kpis.as_mut() {
                kpis.advance(dt);
            }
        }
        self.last_tick = Some(now);
    }

    fn render_header(&self, cx: &mut Context<Self>) -> Div {
        let palette = self.chart.palette();
        let playing = self.chart.playback().is_playing;
        let button = div()
            .id("play-button")
            .px(px(20.0))
            .py(px(10.0))
            .rounded(px(25.0))
            .bg(linear_gradient(
                135.0,
                linear_color_stop(from_u32(BUTTON_FROM), 0.0),
                linear_color_stop(from_u32(BUTTON_TO), 1.0),
            ))
            .text_color(gpui::white())
            .text_size(px(14.0))
            .font_weight(FontWeight::BOLD)
            .child(if playing { PAUSE_LABEL } else { PLAY_LABEL })
            .when(playing, |d| d.cursor_not_allowed())
            .when(!playing, |d| {
                d.cursor_pointer().on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, _, _, cx| {
                        this.play(cx);
                    }),
                )
            });

        div()
            .flex()
            .justify_between()
            .items_center()
            .mb(px(20.0))
            .child(
                div()
                    .text_size(px(24.0))
                    .text_color(palette.primary)
                    .child(TITLE),
            )
            .child(button)
    }

    fn render_kpis(&self, cx: &mut Context<Self>) -> Option<Div> {
        let board = self.kpis.as_ref()?;
        let theme = board.props().theme;
        let cards = board.cards().into_iter().map(|card| {
            let index = card.index;
            kpi_card(&card, theme).on_hover(cx.listener(move |this, hovered: &bool, _, cx| {
                if let Some(kpis) = this.kpis.as_mut() {
                    if kpis.hover(index, *hovered) {
                        cx.notify();
                    }
                }
            }))
        });
        Some(
            div()
                .relative()
                .w_full()
                .h(px(board.height()))
                .children(cards.collect::<Vec<_>>()),
        )
    }

    fn render_plot(&self, cx: &mut Context<Self>) -> Div {
        let viewport = self.chart.config().viewport;
        let radius = self.chart.config().animation.point_radius;
        let frame = self.chart.frame();
        let space = FrameSpace::local(&viewport, glam::Vec2::new(viewport.width, viewport.height));
        let labels = label_elements(&frame, &space);

        let hover_targets = frame
            .points()
            .filter(|e| self.chart.is_hoverable(e.id))
            .filter_map(|e| match e.kind {
                ElementKind::Point { center, .. } => Some((e.id, center)),
                _ => None,
            })
            .map(|(id, center)| {
                div()
                    .id(("chart-point", id.0 as usize))
                    .absolute()
                    .left(px(center.x - radius))
                    .top(px(center.y - radius))
                    .size(px(radius * 2.0))
                    .rounded_full()
                    .cursor_pointer()
                    .on_hover(cx.listener(move |this, hovered: &bool, _, cx| {
                        let event = if *hovered {
                            PointerEvent::Enter(id)
                        } else {
                            PointerEvent::Leave(id)
                        };
                        if this.chart.pointer(event) {
                            cx.notify();
                        }
                    }))
            })
            .collect::<Vec<_>>();

        div()
            .relative()
            .w(px(viewport.width))
            .h(px(viewport.height))
            .child(
                canvas(
                    |_, _, _| {},
                    move |bounds, (), window, _cx| paint_frame(window, bounds, &frame, &viewport),
                )
                .absolute()
                .size_full(),
            )
            .children(labels)
            .children(hover_targets)
    }
}

impl Render for ChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.tick();
        if self.is_animating() {
            cx.on_next_frame(window, |_, _, cx| cx.notify());
        }

        let palette = self.chart.palette();
        let (opacity, rise) = self.card_entrance();
        div()
            .flex()
            .flex_col()
            .children(self.render_kpis(cx))
            .child(
                div()
                    .relative()
                    .top(px(rise))
                    .opacity(opacity)
                    .flex()
                    .flex_col()
                    .p(px(20.0))
                    .rounded(px(15.0))
                    .bg(palette.background)
                    .child(self.render_header(cx))
                    .child(self.render_plot(cx)),
            )
    }
}
