use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::assessment::delivery::{
    DeliveryError, DeliveryReceipt, DemoDelivery, PayloadDelivery,
};
use crate::assessment::payload::{AssessmentPayload, LeadData, SubmissionMetadata};
use crate::assessment::responses::ResponseSet;
use crate::assessment::service::{AssessmentService, AssessmentSubmission};

pub(super) fn responses(value: Value) -> ResponseSet {
    serde_json::from_value(value).expect("valid response set")
}

/// Moderately mature services firm; lands in the Ready band with no flags.
pub(super) fn scenario_a() -> ResponseSet {
    responses(json!({
        "BP01": "Professional Services",
        "BP02": "6-15",
        "BP03": "3-5 years",
        "BP04": "$500K-$1M",
        "BP05": "We run bookkeeping for local restaurants.",
        "TI01": "Moderate (some cloud tools)",
        "TI02": "Yes - somewhat",
        "TI03": ["CRM", "Accounting Software", "Project Management"],
        "TI04": "CRM system",
        "TI05": 4,
        "PP01": ["Data entry", "Scheduling"],
        "PP02": "Phone + Email",
        "PP04": 4,
        "PP05": 3,
        "BR01": "$500-$1,000",
        "BR02": "Tech-savvy employee handles it",
        "BR03": "Vendor-provided training",
        "AK01": "Use occasionally",
        "AK02": ["ChatGPT/Claude", "AI writing assistants"],
        "AK04": ["Complexity", "Reliability"],
        "AK05": 4,
        "AK06": 3,
        "DC01": "Somewhat organized",
        "DC03": "Minimal regulations",
        "DC04": "Yes - automated cloud backup",
        "GT01": "Within 3 months",
        "GT03": ["Time saved", "Employee productivity"],
        "GT04": "Every client report generated overnight without manual entry."
    }))
}

/// Lowest-scoring answer on every scored question, with an urgent timeline.
pub(super) fn minimal_profile() -> ResponseSet {
    responses(json!({
        "BP02": "1-5",
        "BP03": "Less than 1 year",
        "BP04": "Under $100K",
        "TI01": "Very Basic (paper/spreadsheets)",
        "TI02": "No - not interested",
        "TI03": ["None"],
        "TI04": "Paper records",
        "TI05": 1,
        "PP02": "Phone only",
        "PP04": 1,
        "PP05": 1,
        "BR01": "Under $100",
        "BR02": "No dedicated IT support",
        "BR03": "Avoid new technology",
        "AK01": "Never used them",
        "AK02": ["None"],
        "AK04": ["Cost", "Complexity", "Job displacement", "Data privacy"],
        "AK05": 1,
        "AK06": 1,
        "DC01": "Scattered/inconsistent",
        "DC03": "Unsure",
        "DC04": "No backup system",
        "GT01": "Within 3 months"
    }))
}

pub(super) fn lead() -> LeadData {
    LeadData {
        first_name: "Dana".to_string(),
        last_name: "Okafor".to_string(),
        email: "dana@ledgerline.example".to_string(),
        phone: "555-0142".to_string(),
        business_name: "Ledgerline Bookkeeping".to_string(),
        website_url: Some("https://ledgerline.example".to_string()),
        consultation_requested: true,
    }
}

pub(super) fn metadata() -> SubmissionMetadata {
    SubmissionMetadata {
        submitted_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 16, 30, 0)
            .single()
            .expect("valid timestamp"),
        user_agent: "Mozilla/5.0".to_string(),
        session_id: "sess-42".to_string(),
        completion_time_seconds: 412,
    }
}

pub(super) fn submission(responses: ResponseSet) -> AssessmentSubmission {
    AssessmentSubmission {
        lead: lead(),
        responses,
        metadata: metadata(),
    }
}

#[derive(Default)]
pub(super) struct RecordingDelivery {
    payloads: Mutex<Vec<AssessmentPayload>>,
}

impl RecordingDelivery {
    pub(super) fn payloads(&self) -> Vec<AssessmentPayload> {
        self.payloads.lock().expect("delivery lock").clone()
    }
}

impl PayloadDelivery for RecordingDelivery {
    async fn deliver(&self, payload: &AssessmentPayload) -> Result<DeliveryReceipt, DeliveryError> {
        self.payloads
            .lock()
            .expect("delivery lock")
            .push(payload.clone());
        Ok(DeliveryReceipt::Delivered { status: 200 })
    }
}

pub(super) struct RejectingDelivery;

impl PayloadDelivery for RejectingDelivery {
    async fn deliver(&self, _payload: &AssessmentPayload) -> Result<DeliveryReceipt, DeliveryError> {
        Err(DeliveryError::Rejected { status: 503 })
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<RecordingDelivery>>,
    Arc<RecordingDelivery>,
) {
    let delivery = Arc::new(RecordingDelivery::default());
    let service = Arc::new(AssessmentService::new(delivery.clone()));
    (service, delivery)
}

pub(super) fn demo_service() -> Arc<AssessmentService<DemoDelivery>> {
    Arc::new(AssessmentService::new(Arc::new(DemoDelivery)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
