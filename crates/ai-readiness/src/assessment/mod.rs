//! AI readiness questionnaire, scoring, and report payload assembly.
//!
//! The catalog and scoring modules are pure and deterministic. The service and router layer
//! them behind the HTTP surface, with outbound delivery abstracted behind [`PayloadDelivery`]
//! so handlers can be exercised without a live webhook.

pub mod catalog;
pub mod delivery;
pub mod payload;
pub mod responses;
pub mod router;
pub mod scoring;
pub mod service;


pub use catalog::{Question, QuestionId, QuestionKind, Section, SectionId};
pub use delivery::{DeliveryError, DeliveryReceipt, DemoDelivery, PayloadDelivery};
pub use payload::{assemble_payload, AssessmentPayload, LeadData, SubmissionMetadata};
pub use responses::{Answer, RawAnswer, ResponseImportError, ResponseSet};
pub use router::assessment_router;
pub use scoring::{
    DimensionId, DimensionScore, DimensionScores, FlagKind, FlagSeverity, GoalClarityAssessor,
    PlaceholderGoalClarity, ReadinessLevel, ReadinessTier, ScoringEngine, ScoringResult,
    ValidationFlag,
};
pub use service::{
    AssessmentService, AssessmentServiceError, AssessmentSubmission, SubmissionOutcome,
};
