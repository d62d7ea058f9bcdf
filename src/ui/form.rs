/// Create-user form view
///
/// Labeled inputs with their validation borders and error texts, the
/// role picker and the submit button. While a create request runs the
/// button drops its handler and shows the spinner, so a second click
/// has nothing to land on.

use iced::widget::{button, column, pick_list, row, text, text_input, Column};
use iced::{Element, Length, Theme};

use crate::app::{FormEvent, Message};
use crate::effects::Effects;
use crate::state::data::Role;
use crate::state::form::UserForm;
use crate::ui::{INVALID_RED, MUTED_TEXT, VALID_GREEN};
use crate::validate::FieldStatus;

/// Id of the username input, focused at startup
pub fn username_id() -> text_input::Id {
    text_input::Id::new("form-username")
}

pub fn form_view<'a>(form: &'a UserForm, effects: &Effects) -> Element<'a, Message> {
    let username = text_input("Login name", &form.username.value)
        .on_input(|v| Message::Form(FormEvent::UsernameEdited(v)))
        .id(username_id())
        .padding(8)
        .size(14)
        .style(field_style(&form.username.status));

    let full_name = text_input("Full name", &form.full_name.value)
        .on_input(|v| Message::Form(FormEvent::FullNameEdited(v)))
        .padding(8)
        .size(14)
        .style(field_style(&form.full_name.status));

    let email = text_input("name@example.com", &form.email.value)
        .on_input(|v| Message::Form(FormEvent::EmailEdited(v)))
        .padding(8)
        .size(14)
        .style(field_style(&form.email.status));

    let phone = text_input("+1 (555) 000-0000", &form.phone.value)
        .on_input(|v| Message::Form(FormEvent::PhoneEdited(v)))
        .padding(8)
        .size(14);

    let role = pick_list(Role::ALL, form.role, |role| {
        Message::Form(FormEvent::RolePicked(role))
    })
    .placeholder("Choose a role")
    .padding(8)
    .text_size(14)
    .width(Length::Fill);

    let password = text_input("Password", &form.password.value)
        .on_input(|v| Message::Form(FormEvent::PasswordEdited(v)))
        .secure(true)
        .padding(8)
        .size(14)
        .style(field_style(&form.password.status));

    let confirm = text_input("Repeat the password", &form.confirm.value)
        .on_input(|v| Message::Form(FormEvent::ConfirmEdited(v)))
        .secure(true)
        .padding(8)
        .size(14)
        .style(field_style(&form.confirm.status));

    let submit: Element<Message> = if form.submitting {
        // No handler while the request runs: the button renders
        // disabled and a second click is impossible
        button(
            row![
                text(effects.spinner_frame()).size(14),
                text("Processing…").size(14),
            ]
            .spacing(8),
        )
        .padding(10)
        .into()
    } else {
        button(text("Create User").size(14))
            .on_press(Message::Form(FormEvent::Submitted))
            .style(button::primary)
            .padding(10)
            .into()
    };

    column![
        text("Create User").size(18),
        field("Username", username.into(), &form.username.status),
        field("Full name", full_name.into(), &form.full_name.status),
        field("Email", email.into(), &form.email.status),
        field("Phone (optional)", phone.into(), &form.phone.status),
        field("Role", role.into(), &form.role_status),
        field("Password", password.into(), &form.password.status),
        field("Confirm password", confirm.into(), &form.confirm.status),
        submit,
    ]
    .spacing(12)
    .max_width(520)
    .into()
}

/// Label above, input below, error text underneath when the last
/// check failed
fn field<'a>(
    label: &'static str,
    input: Element<'a, Message>,
    status: &'a FieldStatus,
) -> Element<'a, Message> {
    let mut block: Column<'a, Message> = column![
        text(label).size(13).color(MUTED_TEXT),
        input,
    ]
    .spacing(4);

    if let Some(message) = status.error() {
        block = block.push(text(message).size(12).color(INVALID_RED));
    }

    block.into()
}

/// Border tint for an input: green once valid, red once invalid,
/// theme default while pristine
fn field_style(
    status: &FieldStatus,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let tint = match status {
        FieldStatus::Pristine => None,
        FieldStatus::Valid => Some(VALID_GREEN),
        FieldStatus::Invalid(_) => Some(INVALID_RED),
    };

    move |theme, input_status| {
        let mut style = text_input::default(theme, input_status);
        if let Some(color) = tint {
            style.border.color = color;
        }
        style
    }
}
