// SPDX-License-Identifier: MPL-2.0
//! Fullscreen orientation guard for narrow portrait windows.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Render the guard. It has no interactions; rotating (resizing) the
/// window is the only way past it.
#[must_use]
pub fn view<Message: 'static>(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("orientation-message")).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .style(styles::container::app_background)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_renders() {
        #[derive(Debug, Clone)]
        enum TestMessage {}
        let i18n = I18n::default();
        let _element: Element<'_, TestMessage> = view(&i18n);
    }
}
