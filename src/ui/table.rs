/// User table view
///
/// Headers, striped data rows, the bulk-selection bar and the per-row
/// action buttons. Sortable headers render as flat buttons; the one
/// that was sorted last carries its direction arrow.

use iced::widget::{button, checkbox, container, row, text, Column, Row};
use iced::{Alignment, Color, Element, Length};

use crate::app::{Message, TableEvent};
use crate::effects::Effects;
use crate::state::table::{RowState, UserTable, COLUMNS};
use crate::ui::{faded, INVALID_RED, MUTED_TEXT, STRIPE_BG, VALID_GREEN};

const BODY_TEXT: Color = iced::color!(0x21, 0x25, 0x29);

fn cell_width(column: usize) -> Length {
    match column {
        0 => Length::Fixed(36.0),
        1 => Length::Fixed(56.0),
        2 => Length::FillPortion(2),
        3 => Length::FillPortion(3),
        4 => Length::FillPortion(3),
        5 => Length::FillPortion(2),
        6 => Length::Fixed(90.0),
        7 => Length::Fixed(110.0),
        _ => Length::Fixed(190.0),
    }
}

/// The whole table region: selection bar, header row, data rows
pub fn table_view<'a>(
    table: &'a UserTable,
    effects: &Effects,
    entrance_offset: usize,
) -> Element<'a, Message> {
    let mut region = Column::new().spacing(6).width(Length::Fill);

    // Bulk-actions bar, only while something is ticked
    let selected = table.selected_count();
    if selected > 0 {
        region = region.push(
            container(
                text(format!(
                    "{} user{} selected",
                    selected,
                    if selected == 1 { "" } else { "s" }
                ))
                .size(14),
            )
            .padding(8)
            .width(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgb8(0xe7, 0xf1, 0xff).into()),
                border: iced::border::rounded(6.0),
                ..container::Style::default()
            }),
        );
    }

    region = region.push(header_row(table));

    if table.is_empty() {
        region = region.push(
            container(text("No users found").size(14).color(MUTED_TEXT))
                .padding(16)
                .width(Length::Fill)
                .center_x(Length::Fill),
        );
        return region.into();
    }

    for (index, row_state) in table.rows().iter().enumerate() {
        let alpha = effects.entrance_alpha(entrance_offset + index);
        region = region.push(data_row(row_state, index, alpha));
    }

    region.into()
}

fn header_row(table: &UserTable) -> Element<'_, Message> {
    let mut cells: Vec<Element<Message>> = Vec::new();

    for (index, column) in COLUMNS.iter().enumerate() {
        let cell: Element<Message> = if index == 0 {
            // Master checkbox drives every row
            checkbox("", table.master_checked())
                .on_toggle(|checked| Message::Table(TableEvent::MasterToggled(checked)))
                .into()
        } else if column.sortable {
            let mut label = row![text(column.title).size(13).color(MUTED_TEXT)]
                .spacing(4)
                .align_y(Alignment::Center);
            if let Some(order) = table.indicator(index) {
                label = label.push(text(order.arrow()).size(13).color(MUTED_TEXT));
            }
            button(label)
                .on_press(Message::Table(TableEvent::HeaderClicked(index)))
                .style(button::text)
                .padding(0)
                .into()
        } else {
            text(column.title).size(13).color(MUTED_TEXT).into()
        };

        cells.push(container(cell).width(cell_width(index)).into());
    }

    container(
        Row::with_children(cells)
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .into()
}

fn data_row(row_state: &RowState, index: usize, alpha: f32) -> Element<'_, Message> {
    let user = &row_state.user;
    let id = user.id;
    let mut cells: Vec<Element<Message>> = Vec::new();

    cells.push(
        container(
            checkbox("", row_state.selected)
                .on_toggle(move |selected| {
                    Message::Table(TableEvent::RowToggled { id, selected })
                }),
        )
        .width(cell_width(0))
        .into(),
    );

    for column in 1..=7 {
        let color = match column {
            6 if user.active => VALID_GREEN,
            6 => INVALID_RED,
            _ => BODY_TEXT,
        };
        cells.push(
            container(
                text(row_state.cell_text(column))
                    .size(14)
                    .color(faded(color, alpha)),
            )
            .width(cell_width(column))
            .into(),
        );
    }

    // Toggle wording names the action about to happen, not the state
    let toggle_label = if user.active { "Deactivate" } else { "Activate" };
    let actions = row![
        button(text(toggle_label).size(13))
            .on_press(Message::Table(TableEvent::ToggleStatusClicked(id)))
            .style(button::secondary)
            .padding(6),
        button(text("Delete").size(13))
            .on_press(Message::Table(TableEvent::DeleteClicked(id)))
            .style(button::danger)
            .padding(6),
    ]
    .spacing(6);
    cells.push(container(actions).width(cell_width(8)).into());

    let striped = index % 2 == 1;
    container(
        Row::with_children(cells)
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(move |_theme| container::Style {
        background: striped.then(|| STRIPE_BG.into()),
        ..container::Style::default()
    })
    .into()
}
