// SPDX-License-Identifier: MPL-2.0
//! Welcome screen: template pitch, version info and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::store::PreferenceStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::{ColorScheme, ThemePreference, ThemeSource};
use iced::{
    alignment::Horizontal,
    font,
    widget::{button, container, scrollable, Column, Row, Text},
    Element, Font, Length, Theme,
};

/// Contextual data needed to render the welcome screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a PreferenceStore,
    /// Already translated notice shown under the header (e.g. config load failure).
    pub notice: Option<String>,
}

/// Messages emitted by the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ThemeSelected(ThemePreference),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ThemeChanged(ThemePreference),
}

/// Process a welcome message and return the corresponding event.
/// Re-selecting the value already shown produces no event.
#[must_use]
pub fn update(message: &Message, displayed: ThemePreference) -> Event {
    match message {
        Message::ThemeSelected(pref) if *pref == displayed => Event::None,
        Message::ThemeSelected(pref) => Event::ThemeChanged(*pref),
    }
}

/// i18n key describing the active theme.
#[must_use]
pub fn current_theme_key(store: &PreferenceStore) -> &'static str {
    if store.is_dark() {
        "theme-current-dark"
    } else {
        "theme-current-default"
    }
}

/// Render the welcome screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_scheme(ctx.store.current_color_scheme());

    let mut body = Column::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::XS])
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    if let Some(notice) = ctx.notice.clone() {
        body = body.push(Text::new(notice).color(colors.notification));
    }

    body = body
        .push(
            Text::new(ctx.i18n.tr("welcome-headline"))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Text::new(ctx.i18n.tr("welcome-pitch")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("welcome-readme")).size(typography::BODY))
        .push(build_version_section(&ctx, &colors))
        .push(build_theme_section(&ctx, &colors))
        .push(build_toggle(&ctx));

    let content = Column::new()
        .spacing(spacing::LG)
        .push(build_header(&ctx, &colors))
        .push(body);

    scrollable(content).into()
}

fn build_header<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let background = colors.brand_primary;
    let foreground = colors.text_on_brand;

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("welcome-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("welcome-subtitle")).size(typography::CAPTION));

    container(titles)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..container::Style::default()
        })
        .into()
}

fn build_version_section<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let info = ctx.store.version_info();
    let mut section = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(
            ctx.i18n
                .tr_args("welcome-version", &[("version", info.version.as_str())]),
        ));

    if let Some(latest) = info.available_update() {
        section = section.push(
            Text::new(
                ctx.i18n
                    .tr_args("welcome-update-available", &[("version", latest)]),
            )
            .color(colors.notification),
        );
    }

    section.into()
}

fn build_theme_section<'a>(ctx: &ViewContext<'a>, colors: &ColorScheme) -> Element<'a, Message> {
    let source: ThemeSource = ctx.store.theme_source();

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr(current_theme_key(ctx.store))))
        .push(Text::new(ctx.i18n.tr(source.label_key())).color(colors.text_disabled))
        .into()
}

fn build_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = ctx.store.displayed_value();

    ThemePreference::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, pref| {
            let style = if pref == selected {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(Text::new(ctx.i18n.tr(pref.label_key())))
                    .on_press(Message::ThemeSelected(pref))
                    .style(style),
            )
        })
        .into()
}
