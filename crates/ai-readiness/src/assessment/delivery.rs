use std::future::Future;

use serde::Serialize;
use tracing::info;

use super::payload::AssessmentPayload;

/// Outbound hook that forwards assembled payloads to the report-generation pipeline.
pub trait PayloadDelivery: Send + Sync {
    fn deliver(
        &self,
        payload: &AssessmentPayload,
    ) -> impl Future<Output = Result<DeliveryReceipt, DeliveryError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeliveryReceipt {
    Delivered { status: u16 },
    /// No endpoint configured; the payload was only logged.
    Simulated,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery endpoint rejected payload with status {status}")]
    Rejected { status: u16 },
    #[error("delivery transport unavailable: {0}")]
    Transport(String),
}

/// Demo-mode delivery used when no form webhook is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoDelivery;

impl PayloadDelivery for DemoDelivery {
    async fn deliver(&self, payload: &AssessmentPayload) -> Result<DeliveryReceipt, DeliveryError> {
        info!(
            email = %payload.lead.email,
            overall_score = payload.scoring.overall_score,
            tier = payload.scoring.readiness_level.level.label(),
            "demo mode: assessment payload not forwarded"
        );
        Ok(DeliveryReceipt::Simulated)
    }
}
