/// Create-user form state
///
/// Holds the field values, their validation annotations and the
/// in-flight marker that backs the duplicate-submit guard. Field
/// checks run on every edit; the full chain runs again on submit.

use crate::state::data::Role;
use crate::validate::{self, FieldStatus};

/// One text input: its current value and validation annotation
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub value: String,
    pub status: FieldStatus,
}

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub username: Field,
    pub full_name: Field,
    pub email: Field,
    /// Sanitized on input, never validated
    pub phone: Field,
    pub role: Option<Role>,
    pub role_status: FieldStatus,
    pub password: Field,
    pub confirm: Field,
    /// True from submit until the server answers; a second submit
    /// while this is set is ignored
    pub submitting: bool,
    min_password_length: usize,
}

impl UserForm {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
            ..Self::default()
        }
    }

    // ========== Edits ==========

    pub fn edit_username(&mut self, value: String) {
        self.username.status = validate::check_required(&value);
        self.username.value = value;
    }

    pub fn edit_full_name(&mut self, value: String) {
        self.full_name.status = validate::check_required(&value);
        self.full_name.value = value;
    }

    pub fn edit_email(&mut self, value: String) {
        self.email.status = validate::check_email(&value);
        self.email.value = value;
    }

    pub fn edit_phone(&mut self, value: String) {
        self.phone.value = validate::sanitize_phone(&value);
    }

    pub fn pick_role(&mut self, role: Role) {
        self.role = Some(role);
        self.role_status = FieldStatus::Valid;
    }

    pub fn edit_password(&mut self, value: String) {
        self.password.status = validate::check_password(&value, self.min_password_length);
        self.password.value = value;
        // The confirmation compares against the password, so it goes
        // stale whenever the password moves
        if self.confirm.status != FieldStatus::Pristine {
            self.confirm.status =
                validate::check_confirmation(&self.confirm.value, &self.password.value);
        }
    }

    pub fn edit_confirm(&mut self, value: String) {
        self.confirm.status = validate::check_confirmation(&value, &self.password.value);
        self.confirm.value = value;
    }

    // ========== Submission ==========

    /// Runs every check and leaves the annotations behind. True when
    /// the whole form may be sent.
    pub fn validate_all(&mut self) -> bool {
        self.username.status = validate::check_required(&self.username.value);
        self.full_name.status = validate::check_required(&self.full_name.value);
        self.email.status = validate::check_email(&self.email.value);
        self.password.status =
            validate::check_password(&self.password.value, self.min_password_length);
        self.confirm.status =
            validate::check_confirmation(&self.confirm.value, &self.password.value);
        self.role_status = if self.role.is_some() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid("Please choose a role".to_string())
        };

        ![
            &self.username.status,
            &self.full_name.status,
            &self.email.status,
            &self.password.status,
            &self.confirm.status,
            &self.role_status,
        ]
        .iter()
        .any(|status| status.is_invalid())
    }

    /// Submit clicked. True means the caller should fire the create
    /// request; false means it was swallowed, either because one is
    /// already in flight or because validation failed.
    pub fn try_begin_submit(&mut self) -> bool {
        if self.submitting {
            println!("⏳ Submit ignored, a request is already running");
            return false;
        }
        if !self.validate_all() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// The server accepted the user: clear everything back to pristine
    pub fn finish_submit_success(&mut self) {
        *self = Self::new(self.min_password_length);
    }

    /// The server rejected the user: re-enable the form, keep the
    /// typed values so they can be corrected
    pub fn finish_submit_failure(&mut self) {
        self.submitting = false;
    }

    /// Form-encoded body for the create endpoint, field names as the
    /// server expects them
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.value.clone()),
            ("fullName", self.full_name.value.clone()),
            ("email", self.email.value.clone()),
            ("phone", self.phone.value.clone()),
            (
                "role",
                self.role.map(|r| r.as_param()).unwrap_or("USER").to_string(),
            ),
            ("password", self.password.value.clone()),
            ("confirmPassword", self.confirm.value.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserForm {
        let mut form = UserForm::new(8);
        form.edit_username("mgarcia".to_string());
        form.edit_full_name("Maria Garcia".to_string());
        form.edit_email("mgarcia@example.com".to_string());
        form.pick_role(Role::Librarian);
        form.edit_password("abc12345".to_string());
        form.edit_confirm("abc12345".to_string());
        form
    }

    #[test]
    fn test_complete_form_submits() {
        let mut form = filled_form();
        assert!(form.try_begin_submit());
        assert!(form.submitting);
    }

    #[test]
    fn test_double_submit_is_swallowed() {
        let mut form = filled_form();
        assert!(form.try_begin_submit());
        // Second click while the request runs
        assert!(!form.try_begin_submit());

        form.finish_submit_failure();
        assert!(form.try_begin_submit());
    }

    #[test]
    fn test_invalid_form_blocks_and_annotates() {
        let mut form = UserForm::new(8);
        form.edit_username("mgarcia".to_string());

        assert!(!form.try_begin_submit());
        assert!(!form.submitting);
        assert!(form.email.status.is_invalid());
        assert!(form.password.status.is_invalid());
        assert!(form.role_status.is_invalid());
        assert_eq!(form.username.status, FieldStatus::Valid);
    }

    #[test]
    fn test_success_resets_to_pristine() {
        let mut form = filled_form();
        form.try_begin_submit();
        form.finish_submit_success();

        assert!(!form.submitting);
        assert!(form.username.value.is_empty());
        assert_eq!(form.username.status, FieldStatus::Pristine);
        assert_eq!(form.role, None);
    }

    #[test]
    fn test_failure_keeps_typed_values() {
        let mut form = filled_form();
        form.try_begin_submit();
        form.finish_submit_failure();

        assert!(!form.submitting);
        assert_eq!(form.username.value, "mgarcia");
    }

    #[test]
    fn test_phone_edits_are_sanitized() {
        let mut form = UserForm::new(8);
        form.edit_phone("+34 (600) 123-456 ext".to_string());
        assert_eq!(form.phone.value, "+34 (600) 123-456 ");
        assert_eq!(form.phone.status, FieldStatus::Pristine);
    }

    #[test]
    fn test_password_edit_revalidates_confirmation() {
        let mut form = filled_form();
        assert_eq!(form.confirm.status, FieldStatus::Valid);

        form.edit_password("different9".to_string());
        assert!(form.confirm.status.is_invalid());

        form.edit_confirm("different9".to_string());
        assert_eq!(form.confirm.status, FieldStatus::Valid);
    }

    #[test]
    fn test_params_use_server_field_names() {
        let form = filled_form();
        let params = form.to_params();
        assert!(params.contains(&("fullName", "Maria Garcia".to_string())));
        assert!(params.contains(&("role", "LIBRARIAN".to_string())));
        assert!(params.contains(&("confirmPassword", "abc12345".to_string())));
    }
}
