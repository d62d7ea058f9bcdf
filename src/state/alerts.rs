/// Notification stack state
///
/// Alerts slide in at the top of the page area, newest first. Each
/// one auto-dismisses after the configured delay unless marked
/// sticky, and every removal goes through a short fade-out phase
/// before the record is dropped. All removal paths tolerate ids that
/// are already gone, so a late timer firing after a manual dismiss is
/// harmless.

use std::time::{Duration, Instant};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
    Primary,
}

impl Severity {
    /// Parses a severity name as used by the server-rendered panel,
    /// falling back to Info for anything unknown. Call sites in the
    /// app pass typed variants, so this only pins down the legacy
    /// name contract.
    #[cfg(test)]
    fn from_name(name: &str) -> Severity {
        match name {
            "success" => Severity::Success,
            "danger" => Severity::Danger,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            "primary" => Severity::Primary,
            _ => Severity::Info,
        }
    }

    /// Glyph shown at the left edge of the alert
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Danger => "⚠",
            Severity::Warning => "!",
            Severity::Info => "ℹ",
            Severity::Primary => "ℹ",
        }
    }
}

/// Where an alert is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertPhase {
    /// Fully shown
    Visible,
    /// Fading out; removed once the animation duration has elapsed
    FadingOut { started: Instant },
}

/// One notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// False for sticky alerts that stay until dismissed by hand
    pub auto_dismiss: bool,
    pub phase: AlertPhase,
}

impl Alert {
    /// Opacity at `now`: 1.0 while visible, sliding to 0.0 across the
    /// fade-out duration
    pub fn alpha(&self, now: Instant, fade: Duration) -> f32 {
        match self.phase {
            AlertPhase::Visible => 1.0,
            AlertPhase::FadingOut { started } => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= fade {
                    0.0
                } else {
                    1.0 - elapsed.as_secs_f32() / fade.as_secs_f32()
                }
            }
        }
    }
}

/// The ordered stack of live notifications
#[derive(Debug, Clone, Default)]
pub struct AlertStack {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a new auto-dismissing alert at the top of the stack and
    /// returns its id so the expiry timer can target it
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push(message.into(), severity, true)
    }

    /// Shows an alert that stays until the user closes it
    pub fn show_sticky(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push(message.into(), severity, false)
    }

    fn push(&mut self, message: String, severity: Severity, auto_dismiss: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        // Newest on top
        self.alerts.insert(
            0,
            Alert {
                id,
                message,
                severity,
                auto_dismiss,
                phase: AlertPhase::Visible,
            },
        );
        id
    }

    /// Starts the fade-out of an alert. Returns false when the id is
    /// gone or the alert is already fading, in which case the caller
    /// must not schedule another removal.
    pub fn begin_fade(&mut self, id: u64, now: Instant) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) if alert.phase == AlertPhase::Visible => {
                alert.phase = AlertPhase::FadingOut { started: now };
                true
            }
            _ => false,
        }
    }

    /// Drops an alert after its fade completed. No-op for stale ids.
    pub fn remove(&mut self, id: u64) {
        self.alerts.retain(|a| a.id != id);
    }

    /// True while any alert is mid-fade (the animation tick must run)
    pub fn any_fading(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| matches!(a.phase, AlertPhase::FadingOut { .. }))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[cfg(test)]
    fn contains(&self, id: u64) -> bool {
        self.alerts.iter().any(|a| a.id == id)
    }
}
