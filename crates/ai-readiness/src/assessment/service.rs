use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog;
use super::delivery::{DeliveryError, DeliveryReceipt, PayloadDelivery};
use super::payload::{assemble_payload, AssessmentPayload, LeadData, SubmissionMetadata};
use super::responses::ResponseSet;
use super::scoring::{GoalClarityAssessor, PlaceholderGoalClarity, ScoringEngine, ScoringResult};

/// Completed questionnaire as posted by the website form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    pub lead: LeadData,
    #[serde(default)]
    pub responses: ResponseSet,
    pub metadata: SubmissionMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub scoring: ScoringResult,
    pub delivery: DeliveryReceipt,
}

/// Service composing the scoring engine and the payload delivery hook.
pub struct AssessmentService<D, G = PlaceholderGoalClarity> {
    engine: ScoringEngine<G>,
    delivery: Arc<D>,
}

impl<D> AssessmentService<D>
where
    D: PayloadDelivery + 'static,
{
    pub fn new(delivery: Arc<D>) -> Self {
        Self::with_engine(ScoringEngine::new(), delivery)
    }
}

impl<D, G> AssessmentService<D, G>
where
    D: PayloadDelivery + 'static,
    G: GoalClarityAssessor + 'static,
{
    pub fn with_engine(engine: ScoringEngine<G>, delivery: Arc<D>) -> Self {
        Self { engine, delivery }
    }

    /// Score without assembling or forwarding anything.
    pub fn score(&self, responses: &ResponseSet) -> ScoringResult {
        self.engine.score(responses)
    }

    pub fn assemble(&self, submission: &AssessmentSubmission) -> AssessmentPayload {
        let scoring = self.engine.score(&submission.responses);
        assemble_payload(
            &submission.responses,
            &submission.lead,
            &submission.metadata,
            scoring,
        )
    }

    /// Score, assemble, and forward a submission.
    ///
    /// Missing required answers are logged but never block scoring; every rule tolerates
    /// absent input.
    pub async fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<SubmissionOutcome, AssessmentServiceError> {
        let missing = catalog::missing_required(&submission.responses);
        if !missing.is_empty() {
            warn!(
                email = %submission.lead.email,
                missing = missing.len(),
                "submission is missing required answers"
            );
        }

        let payload = self.assemble(&submission);
        let delivery = self.delivery.deliver(&payload).await?;

        info!(
            email = %payload.lead.email,
            overall_score = payload.scoring.overall_score,
            flags = payload.scoring.validation_flags.len(),
            ?delivery,
            "assessment submitted"
        );

        Ok(SubmissionOutcome {
            scoring: payload.scoring,
            delivery,
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
