//! Footer newsletter form.
//!
//! There is no subscription service behind this form. A valid address is held
//! in `Subscribing` for [`SUBSCRIBE_DELAY_MS`], then shown as subscribed for
//! [`SUBSCRIBED_DISPLAY_MS`].

use regex::Regex;
use std::sync::OnceLock;

pub const SUBSCRIBE_DELAY_MS: u32 = 1_200;
pub const SUBSCRIBED_DISPLAY_MS: u32 = 4_000;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
        .is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailRejection {
    Empty,
    Invalid,
}

impl EmailRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::Empty => "Please enter your email",
            Self::Invalid => "Please enter a valid email",
        }
    }
}

/// Checks an address the way both page forms do: present, then pattern-shaped.
pub fn validate_email(value: &str) -> Result<(), EmailRejection> {
    if value.trim().is_empty() {
        return Err(EmailRejection::Empty);
    }
    if !is_valid_email(value) {
        return Err(EmailRejection::Invalid);
    }
    Ok(())
}

/// Why a subscribe attempt did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeRejected {
    Busy,
    Email(EmailRejection),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Subscribing,
    Subscribed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    pub status: NewsletterStatus,
    pub error: Option<EmailRejection>,
}

impl NewsletterForm {
    pub fn controls_disabled(&self) -> bool {
        self.status != NewsletterStatus::Idle
    }

    pub fn set_email(&mut self, value: String) {
        if self.controls_disabled() {
            return;
        }
        self.email = value;
        self.error = None;
    }

    /// Starts the simulated subscribe. Refused with `Busy`, and no state
    /// change, unless the form is idle.
    pub fn submit(&mut self) -> Result<(), SubscribeRejected> {
        if self.controls_disabled() {
            return Err(SubscribeRejected::Busy);
        }

        self.error = None;
        if let Err(rejection) = validate_email(&self.email) {
            self.error = Some(rejection);
            return Err(SubscribeRejected::Email(rejection));
        }

        self.status = NewsletterStatus::Subscribing;
        Ok(())
    }

    /// Fires when the simulated delay elapses.
    pub fn settle(&mut self) {
        if self.status == NewsletterStatus::Subscribing {
            self.status = NewsletterStatus::Subscribed;
            self.email.clear();
        }
    }

    pub fn reset(&mut self) {
        if self.status == NewsletterStatus::Subscribed {
            self.status = NewsletterStatus::Idle;
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            NewsletterStatus::Idle => "Subscribe",
            NewsletterStatus::Subscribing => "Subscribing",
            NewsletterStatus::Subscribed => "Subscribed!",
        }
    }
}
