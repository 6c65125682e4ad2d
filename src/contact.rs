use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Where the contact form posts. Override at build time with `CONTACT_ENDPOINT`.
pub const CONTACT_ENDPOINT: &str = match option_env!("CONTACT_ENDPOINT") {
    Some(url) => url,
    None => "https://my-portfolio-server-beryl.vercel.app/api/contact",
};

pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_FAILED: &str = "Failed to send message. Please try again later.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[cfg(feature = "hydrate")]
    #[error(transparent)]
    Request(#[from] gloo_net::Error),
    #[error("contact endpoint responded with {0}")]
    Rejected(StatusCode),
    #[error("{0}")]
    Transport(String),
}

/// Raw form values, as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trim every field; any empty field fails the whole form.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// JSON body accepted by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Deliver one submission, returning the endpoint's JSON reply.
    async fn send(&self, submission: &ContactSubmission) -> Result<Value, ContactError>;
}

/// Map an HTTP status onto success or [`ContactError::Rejected`].
pub fn check_status(status: u16, body: Value) -> Result<Value, ContactError> {
    let status =
        StatusCode::from_u16(status).map_err(|e| ContactError::Transport(e.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ContactError::Rejected(status))
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct HttpTransport {
    url: &'static str,
}

#[cfg(feature = "hydrate")]
impl HttpTransport {
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }
}

#[cfg(feature = "hydrate")]
impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(CONTACT_ENDPOINT)
    }
}

#[cfg(feature = "hydrate")]
impl ContactTransport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<Value, ContactError> {
        use gloo_net::http::Request;

        let response = Request::post(self.url).json(submission)?.send().await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        log::info!("contact endpoint replied {status}: {body}");
        check_status(status, body)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
}

impl FormState {
    /// Label for the submit button.
    pub fn button_label(self) -> &'static str {
        match self {
            FormState::Submitting => "Sending...",
            FormState::Idle | FormState::Validating => "Send Message",
        }
    }

    /// Submitting stays possible while a request is in flight. Before the
    /// client has mounted, the browser would fall back to a plain GET with
    /// the fields in the URL, so the button is disabled until then.
    pub fn button_disabled(self, mounted: bool) -> bool {
        !mounted
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Invalid,
    Sent(Value),
    Failed(ContactError),
}

impl SubmitOutcome {
    /// Text for the blocking alert shown once the submit settles.
    pub fn alert(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid => MSG_MISSING_FIELDS,
            SubmitOutcome::Sent(_) => MSG_SENT,
            SubmitOutcome::Failed(_) => MSG_FAILED,
        }
    }

    /// Only a delivered message clears the form.
    pub fn should_reset(&self) -> bool {
        matches!(self, SubmitOutcome::Sent(_))
    }
}

/// Run one submit: validate, then make a single best-effort call.
///
/// `on_state` sees every transition and always ends on [`FormState::Idle`].
/// There is no retry and no guard against overlapping submits.
pub async fn submit<T, F>(transport: &T, fields: &ContactFields, mut on_state: F) -> SubmitOutcome
where
    T: ContactTransport,
    F: FnMut(FormState),
{
    on_state(FormState::Validating);
    let submission = match fields.validate() {
        Ok(s) => s,
        Err(_) => {
            on_state(FormState::Idle);
            return SubmitOutcome::Invalid;
        }
    };

    on_state(FormState::Submitting);
    let outcome = match transport.send(&submission).await {
        Ok(body) => SubmitOutcome::Sent(body),
        Err(e) => {
            log::error!("couldn't send contact message: {e}");
            SubmitOutcome::Failed(e)
        }
    };
    on_state(FormState::Idle);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    enum Reply {
        Status(u16),
        NetworkDown,
    }

    struct RecordingTransport {
        reply: Reply,
        calls: RefCell<Vec<ContactSubmission>>,
    }

    impl RecordingTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ContactSubmission> {
            self.calls.borrow().clone()
        }
    }

    impl ContactTransport for RecordingTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<Value, ContactError> {
            self.calls.borrow_mut().push(submission.clone());
            match self.reply {
                Reply::Status(code) => check_status(code, json!({ "success": code < 300 })),
                Reply::NetworkDown => Err(ContactError::Transport("connection refused".into())),
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields::new("  Ada ", "ada@example.com\n", "\tHello there  ")
    }

    #[test]
    fn test_validate_trims() {
        let sub = filled().validate().unwrap();
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.email, "ada@example.com");
        assert_eq!(sub.message, "Hello there");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let cases = [
            ContactFields::new("", "a@b.c", "hi"),
            ContactFields::new("Ada", "   ", "hi"),
            ContactFields::new("Ada", "a@b.c", "\n\t"),
            ContactFields::default(),
        ];
        for fields in cases {
            assert!(matches!(fields.validate(), Err(ContactError::MissingFields)));
        }
    }

    #[test]
    fn test_submission_json_shape() {
        let sub = filled().validate().unwrap();
        let body = serde_json::to_value(&sub).unwrap();
        assert_eq!(
            body,
            json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello there" })
        );
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200, json!({})).is_ok());
        assert!(check_status(204, Value::Null).is_ok());
        assert!(matches!(
            check_status(500, json!({})),
            Err(ContactError::Rejected(s)) if s == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(matches!(check_status(42, json!({})), Err(ContactError::Transport(_))));
    }

    #[tokio::test]
    async fn test_blank_field_never_sends() {
        let transport = RecordingTransport::new(Reply::Status(200));
        let mut states = Vec::new();
        let fields = ContactFields::new("Ada", "", "Hello");

        let outcome = submit(&transport, &fields, |s| states.push(s)).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(outcome.alert(), MSG_MISSING_FIELDS);
        assert!(!outcome.should_reset());
        assert!(transport.calls().is_empty());
        assert_eq!(states, vec![FormState::Validating, FormState::Idle]);
    }

    #[tokio::test]
    async fn test_success_sends_once_and_resets() {
        let transport = RecordingTransport::new(Reply::Status(200));
        let mut states = Vec::new();

        let outcome = submit(&transport, &filled(), |s| states.push(s)).await;

        assert!(matches!(outcome, SubmitOutcome::Sent(_)));
        assert!(outcome.should_reset());
        assert_eq!(outcome.alert(), MSG_SENT);
        assert_eq!(transport.calls(), vec![filled().validate().unwrap()]);
        assert_eq!(
            states,
            vec![FormState::Validating, FormState::Submitting, FormState::Idle]
        );
    }

    #[tokio::test]
    async fn test_rejected_keeps_fields() {
        let transport = RecordingTransport::new(Reply::Status(503));

        let outcome = submit(&transport, &filled(), |_| {}).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(ContactError::Rejected(s)) if s == StatusCode::SERVICE_UNAVAILABLE
        ));
        assert!(!outcome.should_reset());
        assert_eq!(outcome.alert(), MSG_FAILED);
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_network_error_fails_without_retry() {
        let transport = RecordingTransport::new(Reply::NetworkDown);
        let mut states = Vec::new();

        let outcome = submit(&transport, &filled(), |s| states.push(s)).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ContactError::Transport(_))));
        assert!(!outcome.should_reset());
        assert_eq!(transport.calls().len(), 1);
        assert_eq!(states.last(), Some(&FormState::Idle));
    }

    #[test]
    fn test_button_disabled_until_mounted() {
        for state in [FormState::Idle, FormState::Validating, FormState::Submitting] {
            assert!(state.button_disabled(false));
            assert!(!state.button_disabled(true));
        }
        assert_eq!(FormState::Submitting.button_label(), "Sending...");
        assert_eq!(FormState::Idle.button_label(), "Send Message");
    }
}
