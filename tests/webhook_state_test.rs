//! Test the webhook test action's submit guard and outcome handling

// Models the Idle -> Submitting -> Idle machine from app.rs: an empty URL
// never queues a request, re-submission is refused while in flight, and the
// flag clears on both outcomes.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Rejected,
    Queued(String),
}

struct WebhookForm {
    url: String,
    in_flight: bool,
    queued: Option<String>,
}

impl WebhookForm {
    fn new() -> Self {
        Self {
            url: String::new(),
            in_flight: false,
            queued: None,
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.in_flight {
            return Outcome::Rejected;
        }
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Outcome::Rejected;
        }
        self.in_flight = true;
        self.queued = Some(url.clone());
        Outcome::Queued(url)
    }

    fn take_queued(&mut self) -> Option<String> {
        self.queued.take()
    }

    fn on_sent(&mut self) {
        self.in_flight = false;
    }

    fn on_failed(&mut self) {
        self.in_flight = false;
    }
}

#[test]
fn test_empty_url_never_queues() {
    let mut form = WebhookForm::new();
    assert_eq!(form.submit(), Outcome::Rejected);
    assert!(!form.in_flight);
    assert!(form.take_queued().is_none());

    form.url = "   ".to_string();
    assert_eq!(form.submit(), Outcome::Rejected);
    assert!(form.take_queued().is_none());
}

#[test]
fn test_submit_queues_exactly_one_request() {
    let mut form = WebhookForm::new();
    form.url = "https://hooks.example.com/catch/1".to_string();

    assert_eq!(
        form.submit(),
        Outcome::Queued("https://hooks.example.com/catch/1".to_string())
    );
    assert!(form.in_flight);
    assert_eq!(
        form.take_queued().as_deref(),
        Some("https://hooks.example.com/catch/1")
    );
    // Drained once, not twice
    assert!(form.take_queued().is_none());
}

#[test]
fn test_resubmit_refused_while_in_flight() {
    let mut form = WebhookForm::new();
    form.url = "https://hooks.example.com/catch/1".to_string();
    assert!(matches!(form.submit(), Outcome::Queued(_)));
    assert_eq!(form.submit(), Outcome::Rejected);
}

#[test]
fn test_flag_clears_on_both_outcomes() {
    let mut form = WebhookForm::new();
    form.url = "https://hooks.example.com/catch/1".to_string();

    assert!(matches!(form.submit(), Outcome::Queued(_)));
    form.on_failed();
    assert!(!form.in_flight);

    assert!(matches!(form.submit(), Outcome::Queued(_)));
    form.on_sent();
    assert!(!form.in_flight);
}
