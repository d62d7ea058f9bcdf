/// Dashboard stat cards
///
/// Four summary cards derived from the loaded rows. Cards fade in on
/// (re)load ahead of the table rows and lift their shadow while the
/// pointer hovers them.

use iced::widget::{column, container, mouse_area, text};
use iced::{border, Alignment, Color, Element, Length};
use iced_aw::Wrap;

use crate::app::{EffectEvent, Message};
use crate::effects::Effects;
use crate::state::table::UserStats;
use crate::ui::{card_shadow, faded, ACCENT, CARD_BG, INVALID_RED, MUTED_TEXT, VALID_GREEN};

const AMBER: Color = iced::color!(0xfd, 0x7e, 0x14);

/// Number of cards; table rows take entrance slots after these
pub const CARD_COUNT: usize = 4;

pub fn cards_view(stats: UserStats, effects: &Effects) -> Element<'static, Message> {
    let cards = [
        ("Total Users", stats.total, ACCENT),
        ("Active", stats.active, VALID_GREEN),
        ("Inactive", stats.inactive, INVALID_RED),
        ("Administrators", stats.admins, AMBER),
    ];

    let mut grid = Wrap::new().spacing(16.0).line_spacing(16.0);
    for (index, (label, value, accent)) in cards.into_iter().enumerate() {
        grid = grid.push(stat_card(index, label, value, accent, effects));
    }
    grid.into()
}

fn stat_card(
    index: usize,
    label: &'static str,
    value: usize,
    accent: Color,
    effects: &Effects,
) -> Element<'static, Message> {
    let alpha = effects.entrance_alpha(index);
    let hovered = effects.is_card_hovered(index);

    let content = column![
        text(value.to_string()).size(30).color(faded(accent, alpha)),
        text(label).size(13).color(faded(MUTED_TEXT, alpha)),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    mouse_area(
        container(content)
            .padding(18)
            .width(Length::Fixed(170.0))
            .style(move |_theme| container::Style {
                background: Some(faded(CARD_BG, alpha).into()),
                border: border::rounded(10.0),
                shadow: card_shadow(hovered),
                ..container::Style::default()
            }),
    )
    .on_enter(Message::Effect(EffectEvent::CardEntered(index)))
    .on_exit(Message::Effect(EffectEvent::CardLeft(index)))
    .into()
}
