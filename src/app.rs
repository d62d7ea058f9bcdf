/// Application root
///
/// Owns every piece of state, routes messages to the component
/// handlers and assembles the page. The page-wide guards live here
/// too: the confirm-before-destructive-action dialog, the duplicate
/// submit suppression and the keyboard dispatch.

use std::time::{Duration, Instant};

use iced::widget::{button, column, horizontal_space, row, scrollable, text, text_input};
use iced::{keyboard, Alignment, Element, Length, Subscription, Task, Theme};

use crate::config::Config;
use crate::effects::{self, Effects};
use crate::net::{ApiClient, RequestError};
use crate::shortcuts::{self, Shortcut};
use crate::state::alerts::{AlertStack, Severity};
use crate::state::data::{Role, User};
use crate::state::form::UserForm;
use crate::state::table::UserTable;
use crate::ui;

/// Pause between a successful server action and the data reload, so
/// the success alert is seen before the table jumps
const RELOAD_DELAY: Duration = Duration::from_millis(1000);

/// Id of the search box, so the keyboard shortcut can focus it
pub fn search_id() -> text_input::Id {
    text_input::Id::new("search-box")
}

// ========== Messages ==========

/// Events from the user table
#[derive(Debug, Clone)]
pub enum TableEvent {
    HeaderClicked(usize),
    MasterToggled(bool),
    RowToggled { id: i64, selected: bool },
    ToggleStatusClicked(i64),
    DeleteClicked(i64),
}

/// Events from the create-user form
#[derive(Debug, Clone)]
pub enum FormEvent {
    UsernameEdited(String),
    FullNameEdited(String),
    EmailEdited(String),
    PhoneEdited(String),
    RolePicked(Role),
    PasswordEdited(String),
    ConfirmEdited(String),
    Submitted,
}

/// Events from the notification stack
#[derive(Debug, Clone)]
pub enum AlertEvent {
    /// The close control of one alert was clicked
    CloseClicked(u64),
    /// An alert's display time ran out
    Expired(u64),
    /// An alert finished fading and can be dropped
    FadeDone(u64),
}

/// Animation ticks and pointer crossings
#[derive(Debug, Clone)]
pub enum EffectEvent {
    Tick(Instant),
    CardEntered(usize),
    CardLeft(usize),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Table(TableEvent),
    Form(FormEvent),
    Alerts(AlertEvent),
    Effect(EffectEvent),
    Shortcut(Shortcut),
    SearchEdited(String),
    SearchSubmitted,
    /// The user list arrived (or didn't)
    UsersFetched(Result<Vec<User>, RequestError>),
    /// The status toggle round-trip finished
    ToggleCompleted(Result<String, RequestError>),
    /// The create round-trip finished
    CreateCompleted(Result<String, RequestError>),
    /// The delete succeeded; failures go through RequestFailed
    DeleteCompleted(String),
    /// Catch-all for request failures without a dedicated handler
    RequestFailed(RequestError),
    /// The post-action reload pause is over
    RefreshDue,
    ConfirmAccepted,
    ConfirmDismissed,
}

// ========== Confirmation ==========

/// A destructive action waiting for the user's go-ahead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    ToggleStatus { id: i64, target: bool },
    DeleteUser { id: i64 },
}

impl PendingAction {
    /// Verb on the dialog's accept button
    pub fn verb(&self) -> &'static str {
        match self {
            PendingAction::ToggleStatus { target: true, .. } => "Activate",
            PendingAction::ToggleStatus { target: false, .. } => "Deactivate",
            PendingAction::DeleteUser { .. } => "Delete",
        }
    }
}

/// The open confirmation dialog, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub prompt: String,
    pub action: PendingAction,
}

// ========== Application ==========

/// Main application state
pub struct BiblioAdmin {
    config: Config,
    /// HTTP client shared by every request
    api: ApiClient,
    alerts: AlertStack,
    form: UserForm,
    table: UserTable,
    effects: Effects,
    /// Search box contents
    search: String,
    /// True while a user fetch is in flight
    loading: bool,
    /// Still on the very first fetch; its failure gets a sticky alert
    first_fetch: bool,
    confirm: Option<ConfirmState>,
    /// Status message to display to the user
    status: String,
}

impl BiblioAdmin {
    /// Create a new instance of the application
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::new();

        // Components come up in a fixed order: alerts first so every
        // later step has somewhere to report
        let alerts = AlertStack::new();
        let form = UserForm::new(config.min_password_length);
        let table = UserTable::new();
        let api = ApiClient::new(&config);
        let effects = Effects::new();

        println!(
            "🎨 Library admin console initialized, server at {}",
            config.base_url
        );

        let app = BiblioAdmin {
            config,
            api,
            alerts,
            form,
            table,
            effects,
            search: String::new(),
            loading: true,
            first_fetch: true,
            confirm: None,
            status: "Loading users…".to_string(),
        };

        let fetch = app.fetch_users_task();
        // Cursor starts in the first form field
        let focus = text_input::focus(ui::form::username_id());

        (app, Task::batch([fetch, focus]))
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Table(event) => self.on_table(event),
            Message::Form(event) => self.on_form(event),
            Message::Alerts(event) => self.on_alert(event),
            Message::Effect(event) => self.on_effect(event),
            Message::Shortcut(shortcut) => self.on_shortcut(shortcut),

            Message::SearchEdited(value) => {
                self.search = value;
                Task::none()
            }
            Message::SearchSubmitted => {
                if self.loading {
                    // One fetch at a time
                    return Task::none();
                }
                self.refresh_now()
            }

            Message::UsersFetched(result) => self.on_users_fetched(result),
            Message::ToggleCompleted(result) => self.on_toggle_completed(result),
            Message::CreateCompleted(result) => self.on_create_completed(result),
            Message::DeleteCompleted(body) => {
                println!("✅ User deleted");
                // Server text verbatim, then reload like the panel did
                let alert = self.show_alert(body, Severity::Success);
                Task::batch([alert, Self::schedule_reload()])
            }
            Message::RequestFailed(err) => {
                eprintln!("⚠️  Request failed: {err}");
                self.show_alert(err.to_string(), Severity::Danger)
            }
            Message::RefreshDue => self.refresh_now(),

            Message::ConfirmAccepted => self.on_confirm_accepted(),
            Message::ConfirmDismissed => {
                self.confirm = None;
                Task::none()
            }
        }
    }

    // ========== Component Handlers ==========

    fn on_table(&mut self, event: TableEvent) -> Task<Message> {
        match event {
            TableEvent::HeaderClicked(column) => {
                self.table.sort_by_column(column);
                Task::none()
            }
            TableEvent::MasterToggled(checked) => {
                self.table.toggle_master(checked);
                Task::none()
            }
            TableEvent::RowToggled { id, selected } => {
                self.table.set_row_selected(id, selected);
                Task::none()
            }
            TableEvent::ToggleStatusClicked(id) => {
                // Ask first; the request only fires on confirm
                if let Some(user) = self.table.user(id) {
                    let target = !user.active;
                    let verb = if target { "activate" } else { "deactivate" };
                    self.confirm = Some(ConfirmState {
                        prompt: format!(
                            "Are you sure you want to {} user \"{}\"?",
                            verb, user.username
                        ),
                        action: PendingAction::ToggleStatus { id, target },
                    });
                }
                Task::none()
            }
            TableEvent::DeleteClicked(id) => {
                if let Some(user) = self.table.user(id) {
                    self.confirm = Some(ConfirmState {
                        prompt: format!(
                            "Delete user \"{}\"? This cannot be undone.",
                            user.username
                        ),
                        action: PendingAction::DeleteUser { id },
                    });
                }
                Task::none()
            }
        }
    }

    fn on_form(&mut self, event: FormEvent) -> Task<Message> {
        match event {
            FormEvent::UsernameEdited(value) => {
                self.form.edit_username(value);
                Task::none()
            }
            FormEvent::FullNameEdited(value) => {
                self.form.edit_full_name(value);
                Task::none()
            }
            FormEvent::EmailEdited(value) => {
                self.form.edit_email(value);
                Task::none()
            }
            FormEvent::PhoneEdited(value) => {
                self.form.edit_phone(value);
                Task::none()
            }
            FormEvent::RolePicked(role) => {
                self.form.pick_role(role);
                Task::none()
            }
            FormEvent::PasswordEdited(value) => {
                self.form.edit_password(value);
                Task::none()
            }
            FormEvent::ConfirmEdited(value) => {
                self.form.edit_confirm(value);
                Task::none()
            }
            FormEvent::Submitted => {
                // Swallows double clicks and invalid forms alike
                if !self.form.try_begin_submit() {
                    return Task::none();
                }
                println!("🔄 Creating user {}", self.form.username.value.trim());
                let client = self.api.clone();
                let params = self.form.to_params();
                Task::perform(
                    async move { client.create_user(params).await },
                    Message::CreateCompleted,
                )
            }
        }
    }

    fn on_alert(&mut self, event: AlertEvent) -> Task<Message> {
        match event {
            // Manual close and expiry run the same fade-then-remove
            // sequence; stale ids schedule nothing
            AlertEvent::CloseClicked(id) | AlertEvent::Expired(id) => {
                if self.alerts.begin_fade(id, Instant::now()) {
                    let fade = self.config.animation_duration;
                    return Task::perform(
                        async move { tokio::time::sleep(fade).await },
                        move |_| Message::Alerts(AlertEvent::FadeDone(id)),
                    );
                }
                Task::none()
            }
            AlertEvent::FadeDone(id) => {
                self.alerts.remove(id);
                Task::none()
            }
        }
    }

    fn on_effect(&mut self, event: EffectEvent) -> Task<Message> {
        match event {
            EffectEvent::Tick(now) => self.effects.tick(now),
            EffectEvent::CardEntered(index) => self.effects.hover_card(index),
            EffectEvent::CardLeft(index) => self.effects.unhover_card(index),
        }
        Task::none()
    }

    fn on_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::FocusSearch => Task::batch([
                text_input::focus(search_id()),
                text_input::select_all(search_id()),
            ]),
            Shortcut::CloseDialog => {
                // Same as clicking Cancel; harmless when nothing is open
                self.confirm = None;
                Task::none()
            }
        }
    }

    // ========== Request Completions ==========

    fn on_users_fetched(&mut self, result: Result<Vec<User>, RequestError>) -> Task<Message> {
        self.loading = false;
        match result {
            Ok(users) => {
                println!("📊 Loaded {} users", users.len());
                self.status = format!("Ready. {} users loaded.", users.len());
                self.table.set_rows(users);
                // Cards fade in first, then one slot per row
                self.effects.play_entrance(
                    ui::dashboard::CARD_COUNT + self.table.len(),
                    Instant::now(),
                );
                self.first_fetch = false;
                Task::none()
            }
            Err(err) => {
                eprintln!("⚠️  User fetch failed: {err}");
                self.status = "Could not load users.".to_string();
                if self.first_fetch {
                    self.first_fetch = false;
                    // Nothing on screen yet, so this one must not
                    // dismiss itself
                    self.alerts.show_sticky(
                        format!("Cannot reach the server: {err}"),
                        Severity::Danger,
                    );
                    Task::none()
                } else {
                    self.show_alert(err.to_string(), Severity::Danger)
                }
            }
        }
    }

    fn on_toggle_completed(&mut self, result: Result<String, RequestError>) -> Task<Message> {
        match result {
            Ok(body) => {
                println!("✅ Status toggled: {body}");
                let alert = self.show_alert(body, Severity::Success);
                Task::batch([alert, Self::schedule_reload()])
            }
            Err(err) => {
                // The row keeps its current state; the reload never
                // happens on failure
                eprintln!("⚠️  Toggle failed: {err}");
                self.show_alert(err.to_string(), Severity::Danger)
            }
        }
    }

    fn on_create_completed(&mut self, result: Result<String, RequestError>) -> Task<Message> {
        match result {
            Ok(body) => {
                println!("✅ User created");
                self.form.finish_submit_success();
                let alert = self.show_alert(body, Severity::Success);
                Task::batch([alert, self.refresh_now()])
            }
            Err(err) => {
                eprintln!("⚠️  Create failed: {err}");
                self.form.finish_submit_failure();
                self.show_alert(err.to_string(), Severity::Danger)
            }
        }
    }

    fn on_confirm_accepted(&mut self) -> Task<Message> {
        let Some(confirm) = self.confirm.take() else {
            return Task::none();
        };
        let client = self.api.clone();
        match confirm.action {
            PendingAction::ToggleStatus { id, target } => Task::perform(
                async move { client.toggle_user_status(id, target).await },
                Message::ToggleCompleted,
            ),
            PendingAction::DeleteUser { id } => Task::perform(
                async move { client.delete_user(id).await },
                // No dedicated failure handler: the generic one takes it
                |result| match result {
                    Ok(body) => Message::DeleteCompleted(body),
                    Err(err) => Message::RequestFailed(err),
                },
            ),
        }
    }

    // ========== Plumbing ==========

    /// Shows an auto-dismissing alert and schedules its expiry
    fn show_alert(&mut self, message: impl Into<String>, severity: Severity) -> Task<Message> {
        let id = self.alerts.show(message, severity);
        let delay = self.config.alert_timeout;
        Task::perform(async move { tokio::time::sleep(delay).await }, move |_| {
            Message::Alerts(AlertEvent::Expired(id))
        })
    }

    /// Starts a fetch with the current search term
    fn fetch_users_task(&self) -> Task<Message> {
        let client = self.api.clone();
        let search = self.search.clone();
        Task::perform(
            async move { client.fetch_users(search).await },
            Message::UsersFetched,
        )
    }

    fn refresh_now(&mut self) -> Task<Message> {
        self.loading = true;
        self.status = "Refreshing…".to_string();
        self.fetch_users_task()
    }

    fn schedule_reload() -> Task<Message> {
        Task::perform(
            async { tokio::time::sleep(RELOAD_DELAY).await },
            |_| Message::RefreshDue,
        )
    }

    // ========== View ==========

    /// Build the user interface
    pub fn view(&self) -> Element<Message> {
        let header = row![
            text("Library Admin").size(28),
            horizontal_space(),
            text(&self.status).size(14).color(ui::MUTED_TEXT),
        ]
        .align_y(Alignment::Center);

        let search_box = text_input("Search users (Ctrl+K)", &self.search)
            .on_input(Message::SearchEdited)
            .on_submit(Message::SearchSubmitted)
            .id(search_id())
            .padding(8)
            .size(14)
            .width(Length::Fixed(320.0));
        let search_row = row![
            search_box,
            button(text("Search").size(14))
                .on_press(Message::SearchSubmitted)
                .style(button::primary)
                .padding(8),
        ]
        .spacing(8);

        let content = column![
            header,
            ui::alerts::stack_view(
                &self.alerts,
                self.effects.now(),
                self.config.animation_duration
            ),
            ui::dashboard::cards_view(self.table.stats(), &self.effects),
            search_row,
            ui::table::table_view(&self.table, &self.effects, ui::dashboard::CARD_COUNT),
            ui::form::form_view(&self.form, &self.effects),
        ]
        .spacing(18)
        .padding(24);

        let page: Element<Message> = scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        // The dialog blocks the whole page while a decision is pending
        match &self.confirm {
            Some(confirm) => ui::modal::with_dialog(page, ui::modal::confirm_view(confirm)),
            None => page,
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Keyboard everywhere; the animation tick only while something
    /// actually moves
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, modifiers| {
            shortcuts::map(key, modifiers).map(Message::Shortcut)
        });

        let animating =
            self.effects.entrance_running() || self.alerts.any_fading() || self.form.submitting;
        if animating {
            let ticks = iced::time::every(effects::TICK)
                .map(|now| Message::Effect(EffectEvent::Tick(now)));
            Subscription::batch([keys, ticks])
        } else {
            keys
        }
    }
}

/// Launches the console
pub fn run() -> iced::Result {
    iced::application("Library Admin", BiblioAdmin::update, BiblioAdmin::view)
        .theme(BiblioAdmin::theme)
        .subscription(BiblioAdmin::subscription)
        .centered()
        .run_with(BiblioAdmin::new)
}
