//! Outbound email relay used by the contact form.
//!
//! Each send posts one template to the relay's REST endpoint. Nothing from the
//! response body is consumed except an error string for the logs.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_b0c8cy5";
const DEFAULT_ACKNOWLEDGMENT_TEMPLATE_ID: &str = "template_imozceb";
const DEFAULT_NOTIFICATION_TEMPLATE_ID: &str = "template_7zhj99a";
const DEFAULT_PUBLIC_KEY: &str = "jihWBaTFPdEByGa-P";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay transport failed: {0}")]
    Transport(String),

    #[error("relay rejected {template} with status {status}: {detail}")]
    Rejected {
        template: Template,
        status: u16,
        detail: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    VisitorAcknowledgment,
    OperatorNotification,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VisitorAcknowledgment => "visitor_acknowledgment",
            Self::OperatorNotification => "operator_notification",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat key-value record handed to the relay templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub reply_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl TemplateParams {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            reply_to: email.to_string(),
            time: None,
        }
    }

    pub fn with_time(&self, time: String) -> Self {
        Self {
            time: Some(time),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub acknowledgment_template_id: String,
    pub notification_template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            acknowledgment_template_id: DEFAULT_ACKNOWLEDGMENT_TEMPLATE_ID.to_string(),
            notification_template_id: DEFAULT_NOTIFICATION_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
        }
    }
}

impl RelayConfig {
    /// Reads `PORTFOLIO_RELAY_*` values baked in at compile time; blanks keep the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_RELAY_ENDPOINT"),
            option_env!("PORTFOLIO_RELAY_SERVICE_ID"),
            option_env!("PORTFOLIO_RELAY_ACK_TEMPLATE_ID"),
            option_env!("PORTFOLIO_RELAY_NOTIFY_TEMPLATE_ID"),
            option_env!("PORTFOLIO_RELAY_PUBLIC_KEY"),
        )
    }

    fn from_values(
        endpoint: Option<&str>,
        service_id: Option<&str>,
        acknowledgment_template_id: Option<&str>,
        notification_template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: non_empty_or(endpoint, defaults.endpoint),
            service_id: non_empty_or(service_id, defaults.service_id),
            acknowledgment_template_id: non_empty_or(
                acknowledgment_template_id,
                defaults.acknowledgment_template_id,
            ),
            notification_template_id: non_empty_or(
                notification_template_id,
                defaults.notification_template_id,
            ),
            public_key: non_empty_or(public_key, defaults.public_key),
        }
    }

    pub fn template_id(&self, template: Template) -> &str {
        match template {
            Template::VisitorAcknowledgment => &self.acknowledgment_template_id,
            Template::OperatorNotification => &self.notification_template_id,
        }
    }

    pub fn request_body<'a>(
        &'a self,
        template: Template,
        params: &'a TemplateParams,
    ) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: self.template_id(template),
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

fn non_empty_or(value: Option<&str>, fallback: String) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or(fallback)
}

/// JSON body of one send call.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

#[async_trait(?Send)]
pub trait Relay {
    async fn send(&self, template: Template, params: &TemplateParams) -> Result<(), RelayError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::HttpRelay;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Relay, RelayConfig, RelayError, Template, TemplateParams};
    use async_trait::async_trait;
    use gloo_net::http::Request;

    /// Posts sends to the relay's REST endpoint with `fetch`.
    pub struct HttpRelay {
        config: RelayConfig,
    }

    impl HttpRelay {
        pub fn new(config: RelayConfig) -> Self {
            Self { config }
        }
    }

    #[async_trait(?Send)]
    impl Relay for HttpRelay {
        async fn send(&self, template: Template, params: &TemplateParams) -> Result<(), RelayError> {
            let body = self.config.request_body(template, params);
            let response = Request::post(&self.config.endpoint)
                .json(&body)
                .map_err(|error| RelayError::Transport(error.to_string()))?
                .send()
                .await
                .map_err(|error| RelayError::Transport(error.to_string()))?;

            if response.ok() {
                return Ok(());
            }

            let detail = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected {
                template,
                status: response.status(),
                detail,
            })
        }
    }
}
