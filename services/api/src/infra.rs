use ai_readiness::assessment::{
    AssessmentPayload, DeliveryError, DeliveryReceipt, DemoDelivery, PayloadDelivery,
};
use ai_readiness::config::WebhookConfig;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) const CHAT_DEMO_REPLY: &str = "I'm currently in demo mode. To enable live AI responses, please configure the N8N_CHAT_WEBHOOK in your environment. Based on your question, I'd recommend scheduling a discovery call to discuss how AI can transform your business operations.";

pub(crate) const CHAT_FALLBACK_REPLY: &str =
    "I apologize, but I encountered an issue processing your request. Please try again.";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) advisor: Arc<AdvisorRelay>,
}

pub(crate) fn http_client() -> Result<reqwest::Client, DeliveryError> {
    reqwest::Client::builder()
        .timeout(WEBHOOK_TIMEOUT)
        .build()
        .map_err(|err| DeliveryError::Transport(err.to_string()))
}

/// Forwards assembled payloads to the form webhook as JSON.
pub(crate) struct WebhookDelivery {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookDelivery {
    pub(crate) fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

impl PayloadDelivery for WebhookDelivery {
    async fn deliver(&self, payload: &AssessmentPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "form webhook unreachable");
                DeliveryError::Transport(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "form webhook rejected payload");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(DeliveryReceipt::Delivered {
            status: status.as_u16(),
        })
    }
}

/// Delivery chosen at startup from the webhook configuration.
pub(crate) enum ConfiguredDelivery {
    Webhook(WebhookDelivery),
    Demo(DemoDelivery),
}

impl ConfiguredDelivery {
    pub(crate) fn from_config(config: &WebhookConfig, client: &reqwest::Client) -> Self {
        match &config.form_endpoint {
            Some(endpoint) => {
                Self::Webhook(WebhookDelivery::new(client.clone(), endpoint.clone()))
            }
            None => {
                warn!("N8N_FORM_WEBHOOK not configured; assessment submissions run in demo mode");
                Self::Demo(DemoDelivery)
            }
        }
    }
}

impl PayloadDelivery for ConfiguredDelivery {
    async fn deliver(&self, payload: &AssessmentPayload) -> Result<DeliveryReceipt, DeliveryError> {
        match self {
            Self::Webhook(delivery) => delivery.deliver(payload).await,
            Self::Demo(delivery) => delivery.deliver(payload).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub(crate) role: String,
    pub(crate) content: String,
}

/// Question posted by the virtual-advisor widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChatRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) question: String,
    #[serde(default)]
    pub(crate) conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatForward<'a> {
    name: &'a str,
    email: &'a str,
    question: &'a str,
    conversation_history: &'a [ChatMessage],
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ChatMode {
    Live,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ChatReply {
    pub(crate) response: String,
    pub(crate) mode: ChatMode,
}

/// Relays advisor questions to the chat webhook, or answers with the demo reply.
pub(crate) struct AdvisorRelay {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl AdvisorRelay {
    pub(crate) fn new(client: reqwest::Client, endpoint: Option<String>) -> Self {
        Self { client, endpoint }
    }

    pub(crate) async fn ask(
        &self,
        request: &ChatRequest,
        now: DateTime<Utc>,
    ) -> Result<ChatReply, DeliveryError> {
        let Some(endpoint) = &self.endpoint else {
            info!("advisor chat answered in demo mode");
            return Ok(ChatReply {
                response: CHAT_DEMO_REPLY.to_string(),
                mode: ChatMode::Demo,
            });
        };

        let forward = ChatForward {
            name: &request.name,
            email: &request.email,
            question: &request.question,
            conversation_history: &request.conversation_history,
            timestamp: now,
        };

        let response = self
            .client
            .post(endpoint)
            .json(&forward)
            .send()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        Ok(ChatReply {
            response: extract_reply(&body),
            mode: ChatMode::Live,
        })
    }
}

/// First non-empty string among `response`, `message`, and `text`.
pub(crate) fn extract_reply(body: &serde_json::Value) -> String {
    ["response", "message", "text"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
        .find(|value| !value.is_empty())
        .unwrap_or(CHAT_FALLBACK_REPLY)
        .to_string()
}
