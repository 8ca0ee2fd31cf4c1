//! Contact form state. Submission is simulated: nothing leaves the process.

use std::time::Duration;

use iced::widget::text_editor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Time spent in `Submitting` before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Time the success state stays up before the form clears itself.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

// The "valid e-mail address" production from the HTML living standard.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "Email",
            Field::Subject => "Assunto",
            Field::Message => "Mensagem",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(FieldError::Required(field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Preencha o campo {}.", .0.label())]
    Required(Field),
    #[error("Informe um email válido.")]
    InvalidEmail,
    #[error("Aguarde o envio atual terminar.")]
    Busy,
}

impl FieldError {
    pub fn field(&self) -> Option<Field> {
        match self {
            FieldError::Required(field) => Some(*field),
            FieldError::InvalidEmail => Some(Field::Email),
            FieldError::Busy => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Waits out one simulated delivery step. Nothing is sent anywhere.
pub async fn simulate_delivery(delay: Duration) {
    tokio::time::sleep(delay).await;
}

pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmitStatus,
    pub error: Option<FieldError>,
    /// Multi-line buffer behind `fields.message`.
    message: text_editor::Content,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmitStatus::Idle,
            error: None,
            message: text_editor::Content::new(),
        }
    }
}

impl ContactForm {
    pub fn is_editable(&self) -> bool {
        self.status == SubmitStatus::Idle
    }

    pub fn message_editor(&self) -> &text_editor::Content {
        &self.message
    }

    /// Edits are dropped unless the form is idle.
    pub fn set(&mut self, field: Field, value: String) {
        if !self.is_editable() {
            return;
        }
        if field == Field::Message {
            self.message = text_editor::Content::with_text(&value);
        }
        *self.fields.get_mut(field) = value;
        self.clear_error_for(field);
    }

    /// Applies an editor action to the message. Cursor moves and selections
    /// always go through; edits only while idle.
    pub fn edit_message(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        if is_edit && !self.is_editable() {
            return;
        }
        self.message.perform(action);
        if is_edit {
            self.fields.message = self.message.text().trim_end_matches('\n').to_string();
            self.clear_error_for(Field::Message);
        }
    }

    fn clear_error_for(&mut self, field: Field) {
        if self.error.as_ref().and_then(FieldError::field) == Some(field) {
            self.error = None;
        }
    }

    /// `Idle -> Submitting` when every field passes validation.
    pub fn submit(&mut self) -> Result<(), FieldError> {
        if self.status != SubmitStatus::Idle {
            return Err(FieldError::Busy);
        }
        if let Err(e) = self.fields.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.status = SubmitStatus::Submitting;
        Ok(())
    }

    /// `Submitting -> Success`. Returns whether the transition happened.
    pub fn finish_submit(&mut self) -> bool {
        if self.status != SubmitStatus::Submitting {
            return false;
        }
        self.status = SubmitStatus::Success;
        true
    }

    /// `Success -> Idle`, clearing every field.
    pub fn reset(&mut self) -> bool {
        if self.status != SubmitStatus::Success {
            return false;
        }
        self.fields = ContactFields::default();
        self.message = text_editor::Content::new();
        self.status = SubmitStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::text_editor::{Action, Edit};

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".into());
        form.set(Field::Email, "ada@example.com".into());
        form.set(Field::Subject, "Olá".into());
        form.set(Field::Message, "Vamos conversar?".into());
        form
    }

    #[test]
    fn full_cycle_returns_to_idle_with_cleared_fields() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert!(form.finish_submit());
        assert_eq!(form.status, SubmitStatus::Success);
        assert!(form.reset());
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut form = filled();
        assert!(!form.finish_submit());
        assert!(!form.reset());
        form.submit().unwrap();
        assert!(!form.reset());
        assert_eq!(form.submit(), Err(FieldError::Busy));
    }

    #[test]
    fn missing_fields_block_submission() {
        let mut form = filled();
        form.set(Field::Subject, "   ".into());
        assert_eq!(form.submit(), Err(FieldError::Required(Field::Subject)));
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.error, Some(FieldError::Required(Field::Subject)));

        form.set(Field::Subject, "Oi".into());
        assert_eq!(form.error, None);
    }

    #[test]
    fn email_format_is_checked() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email".into());
        assert_eq!(form.submit(), Err(FieldError::InvalidEmail));

        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.example.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@-b.com"));
    }

    #[test]
    fn edits_are_frozen_while_busy() {
        let mut form = filled();
        form.submit().unwrap();
        form.set(Field::Name, "Grace".into());
        assert_eq!(form.fields.name, "Ada");
        form.finish_submit();
        form.set(Field::Name, "Grace".into());
        assert_eq!(form.fields.name, "Ada");
    }

    fn type_into(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            let edit = if c == '\n' { Edit::Enter } else { Edit::Insert(c) };
            form.edit_message(Action::Edit(edit));
        }
    }

    #[test]
    fn message_keeps_line_breaks_until_reset() {
        let mut form = filled();
        form.set(Field::Message, String::new());
        type_into(&mut form, "Oi,\ntudo bem?\nAbraço");
        assert_eq!(form.fields.message, "Oi,\ntudo bem?\nAbraço");
        assert_eq!(form.fields.validate(), Ok(()));

        assert_eq!(form.submit(), Ok(()));
        assert!(form.finish_submit());
        assert!(form.reset());
        assert!(form.fields.message.is_empty());
        assert!(form.message_editor().text().trim().is_empty());
    }

    #[test]
    fn editor_is_frozen_while_busy() {
        let mut form = filled();
        form.set(Field::Message, "linha 1\nlinha 2".into());
        assert!(form.message_editor().text().starts_with("linha 1\nlinha 2"));

        form.submit().unwrap();
        type_into(&mut form, "extra");
        assert_eq!(form.fields.message, "linha 1\nlinha 2");
        assert!(!form.message_editor().text().contains("extra"));
    }

    #[test]
    fn blank_multi_line_message_is_required() {
        let mut form = filled();
        form.set(Field::Message, String::new());
        type_into(&mut form, "  \n\n ");
        assert_eq!(form.submit(), Err(FieldError::Required(Field::Message)));

        type_into(&mut form, "ok");
        assert_eq!(form.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_steps_wait_their_full_delay() {
        let mut form = filled();
        form.submit().unwrap();

        let early = tokio::time::timeout(
            SUBMIT_DELAY - Duration::from_millis(1),
            simulate_delivery(SUBMIT_DELAY),
        )
        .await;
        assert!(early.is_err());
        assert_eq!(form.status, SubmitStatus::Submitting);

        let started = tokio::time::Instant::now();
        simulate_delivery(SUBMIT_DELAY).await;
        assert!(started.elapsed() >= SUBMIT_DELAY);
        assert!(form.finish_submit());

        let early = tokio::time::timeout(
            RESET_DELAY - Duration::from_millis(1),
            simulate_delivery(RESET_DELAY),
        )
        .await;
        assert!(early.is_err());
        assert_eq!(form.status, SubmitStatus::Success);

        let started = tokio::time::Instant::now();
        simulate_delivery(RESET_DELAY).await;
        assert!(started.elapsed() >= RESET_DELAY);
        assert!(form.reset());
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            FieldError::Required(Field::Message).to_string(),
            "Preencha o campo Mensagem."
        );
    }
}
