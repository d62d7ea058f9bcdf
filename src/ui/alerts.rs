/// Notification stack view
///
/// Renders the live alerts as colored banners, newest on top, with
/// the fade-out alpha baked into every color so dismissal melts the
/// banner instead of popping it.

use std::time::{Duration, Instant};

use iced::widget::{button, container, horizontal_space, row, text, Column};
use iced::{border, Alignment, Element, Length};

use crate::app::{AlertEvent, Message};
use crate::state::alerts::AlertStack;
use crate::ui::{faded, severity_palette};

pub fn stack_view<'a>(
    alerts: &'a AlertStack,
    now: Instant,
    fade: Duration,
) -> Element<'a, Message> {
    let mut list = Column::new().spacing(8).width(Length::Fill);

    for alert in alerts.iter() {
        let alpha = alert.alpha(now, fade);
        let (bg, fg) = severity_palette(alert.severity);

        let close = button(text("✕").size(14).color(faded(fg, alpha)))
            .on_press(Message::Alerts(AlertEvent::CloseClicked(alert.id)))
            .style(button::text)
            .padding(0);

        let banner = container(
            row![
                text(alert.severity.icon()).size(16).color(faded(fg, alpha)),
                text(&alert.message).size(14).color(faded(fg, alpha)),
                horizontal_space(),
                close,
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(faded(bg, alpha).into()),
            border: border::rounded(6.0),
            ..container::Style::default()
        });

        list = list.push(banner);
    }

    list.into()
}
