use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use site_logging::site_debug;

use crate::template::{EmailJsRequest, TemplateParams};
use crate::{FailureKind, RelayError};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// External send capability. Callers only care whether it succeeded.
#[async_trait::async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    settings: RelaySettings,
}

impl EmailJsRelay {
    pub fn new(settings: RelaySettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RelayError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| RelayError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| RelayError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(&EmailJsRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: params,
        })
        .map_err(|err| RelayError::new(FailureKind::Serialization, err.to_string()))?;

        let client = self.build_client()?;
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RelayError::new(
                FailureKind::HttpStatus(status.as_u16()),
                if detail.is_empty() {
                    status.to_string()
                } else {
                    detail
                },
            ));
        }

        site_debug!("mail relay accepted message with status {}", status);
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RelayError {
    if err.is_timeout() {
        return RelayError::new(FailureKind::Timeout, err.to_string());
    }
    RelayError::new(FailureKind::Network, err.to_string())
}
