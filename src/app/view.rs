// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navigator's active screen, wrapped in a header bar when the
//! screen's options ask for one.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::navigation::{LoaderParams, ScreenName, ScreenOptions};
use crate::store::PreferenceStore;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{loader, welcome};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Option<ScreenName>,
    pub options: Option<ScreenOptions>,
    pub store: &'a PreferenceStore,
    pub loader_params: LoaderParams,
    pub loader_progress: f32,
    pub notice: Option<String>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Some(ScreenName::Loader) => loader::view(loader::ViewContext {
            i18n: ctx.i18n,
            params: ctx.loader_params.clone(),
            progress: ctx.loader_progress,
        })
        .map(Message::Loader),
        Some(ScreenName::Welcome) => welcome::view(welcome::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            notice: ctx.notice.clone(),
        })
        .map(Message::Welcome),
        // Nothing is mounted until boot completes.
        None => Column::new().into(),
    };

    let mut column = Column::new();
    if let Some(options) = ctx.options.filter(|o| o.header_shown) {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(options.title_key)).size(typography::TITLE_MD))
                .padding(spacing::SM)
                .width(Length::Fill),
        );
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
