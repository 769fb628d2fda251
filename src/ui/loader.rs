// SPDX-License-Identifier: MPL-2.0
//! Loader screen shown at launch.
//!
//! The screen shows a caption over a progress bar and, once its delay has
//! elapsed, reports [`Event::Finished`] so the application can hand over to
//! the welcome screen. Each activation carries a generation number so a
//! timer started for an earlier activation is ignored.

use crate::config::MAX_LOADER_DELAY_MS;
use crate::i18n::fluent::I18n;
use crate::navigation::LoaderParams;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::time::{self, Instant};
use iced::{
    alignment::Horizontal,
    widget::{container, progress_bar, Column, Text},
    Element, Length, Subscription, Task,
};
use std::time::Duration;

/// Refresh rate of the progress bar.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Contextual data needed to render the loader.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub params: LoaderParams,
    /// Elapsed share of the delay, `0.0..=1.0`.
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The delay started for the given activation has elapsed.
    DelayElapsed(u64),
    /// Progress bar refresh.
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Finished,
}

/// Tracks which loader activation is current and how far along it is.
#[derive(Debug, Default)]
pub struct State {
    generation: u64,
    started: Option<Instant>,
    delay: Duration,
    elapsed: Duration,
}

impl State {
    /// Starts a new activation and returns the task that ends it.
    pub fn activate(&mut self, params: &LoaderParams, default_delay: Duration) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        let delay = effective_delay(params, default_delay);
        self.started = Some(Instant::now());
        self.delay = delay;
        self.elapsed = Duration::ZERO;
        log::debug!("loader activation {generation}, delay {delay:?}");

        // The timer must be created inside the runtime, so defer it to the future.
        Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::DelayElapsed(generation),
        )
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delay of the current activation after clamping.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Elapsed share of the current delay.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.delay.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Process a loader message and return the corresponding event.
    pub fn update(&mut self, message: &Message) -> Event {
        match message {
            Message::DelayElapsed(generation) if *generation == self.generation => {
                self.elapsed = self.delay;
                Event::Finished
            }
            Message::DelayElapsed(_) => Event::None,
            Message::Tick(now) => {
                if let Some(started) = self.started {
                    self.elapsed = now.saturating_duration_since(started);
                }
                Event::None
            }
        }
    }
}

/// Ticks the progress bar. Only subscribed while the loader is shown.
pub fn subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}

/// Delay to wait for: the params' own value or `default_delay`, capped at
/// [`MAX_LOADER_DELAY_MS`].
#[must_use]
pub fn effective_delay(params: &LoaderParams, default_delay: Duration) -> Duration {
    params
        .delay
        .unwrap_or(default_delay)
        .min(Duration::from_millis(MAX_LOADER_DELAY_MS))
}

/// Params to show: the entry's own values first, then the configured defaults.
#[must_use]
pub fn effective_params(entry: Option<LoaderParams>, defaults: &LoaderParams) -> LoaderParams {
    let entry = entry.unwrap_or_default();
    LoaderParams {
        delay: entry.delay.or(defaults.delay),
        text: entry.text.or_else(|| defaults.text.clone()),
    }
}

/// Render the loader screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let caption = ctx
        .params
        .text
        .unwrap_or_else(|| ctx.i18n.tr("loader-default-text"));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(Text::new(caption).size(typography::BODY))
        .push(
            container(progress_bar(0.0..=1.0, ctx.progress))
                .width(Length::Fixed(sizing::PROGRESS_WIDTH)),
        );

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
