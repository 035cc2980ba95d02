// SPDX-License-Identifier: MPL-2.0
//! Reusable failure notice with consistent styling.
//!
//! Shown by the view-tree boundary when a view is marked faulted: a
//! title, an optional detail line, and a retry action that clears the
//! fault flag. No automatic recovery.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Configuration for the failure notice.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: String,
    detail: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a notice with the given heading.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            action_label: None,
            action_message: None,
        }
    }

    /// Sets the detail line (raw error text).
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the notice.
    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(self.title)
                    .size(typography::TITLE_LG)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );

        if let Some(detail) = self.detail {
            content = content.push(
                Container::new(Text::new(detail).size(typography::BODY))
                    .padding(spacing::SM)
                    .style(|_theme: &Theme| container::Style {
                        background: Some(
                            iced::Color {
                                a: 0.1,
                                ..palette::WHITE
                            }
                            .into(),
                        ),
                        border: iced::Border {
                            radius: radius::MD.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            content = content.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(message)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn builder_accumulates_fields() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new("Broken")
            .detail("stack text")
            .action("Retry", TestMessage::Retry);
        assert_eq!(display.title, "Broken");
        assert_eq!(display.detail, Some("stack text".to_string()));
        assert_eq!(display.action_label, Some("Retry".to_string()));
    }

    #[test]
    fn notice_renders_without_optional_parts() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new("Broken");
        let _element = display.view();
    }
}
