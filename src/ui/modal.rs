/// Blocking confirmation dialog
///
/// Destructive actions never fire straight away: the pending action
/// is parked in the app state and this dialog is stacked over the
/// whole page until the user decides. Escape and the backdrop both
/// count as Cancel.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{border, Color, Element, Length};

use crate::app::{ConfirmState, Message, PendingAction};
use crate::ui::card_shadow;

/// Lays the dialog over the base page behind a dimmed backdrop
pub fn with_dialog<'a>(
    base: Element<'a, Message>,
    dialog: Element<'a, Message>,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.6,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(Message::ConfirmDismissed)
        ),
    ]
    .into()
}

pub fn confirm_view(confirm: &ConfirmState) -> Element<'_, Message> {
    let accept_style = match confirm.action {
        PendingAction::DeleteUser { .. } => button::danger,
        PendingAction::ToggleStatus { .. } => button::primary,
    };

    let buttons = row![
        button(text("Cancel").size(14))
            .on_press(Message::ConfirmDismissed)
            .style(button::secondary)
            .padding(8),
        button(text(confirm.action.verb()).size(14))
            .on_press(Message::ConfirmAccepted)
            .style(accept_style)
            .padding(8),
    ]
    .spacing(10);

    container(
        column![
            text("Please Confirm").size(16),
            text(&confirm.prompt).size(14),
            buttons,
        ]
        .spacing(14),
    )
    .padding(20)
    .width(Length::Fixed(400.0))
    .style(|_theme| container::Style {
        background: Some(Color::WHITE.into()),
        border: border::rounded(10.0),
        shadow: card_shadow(true),
        ..container::Style::default()
    })
    .into()
}
