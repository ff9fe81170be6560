//! End-to-end scoring scenarios driven through the public catalog, scoring, and service facade.

mod common {
    use std::sync::Mutex;

    use ai_readiness::assessment::{
        AssessmentPayload, DeliveryError, DeliveryReceipt, LeadData, PayloadDelivery, ResponseSet,
    };

    pub(super) const CSV_EXPORT: &str = "\
question_id,answer
BP01,Healthcare
BP02,16-50
BP03,5-10 years
TI01,Advanced (integrated systems)
TI03,CRM; Accounting Software; Scheduling
TI05,4
AK05,5
AK06,2
DC02,\"Yes - highly regulated (HIPAA, PCI, etc.)\"
DC05,
GT01,Within 6 months
";

    pub(super) fn lead() -> LeadData {
        LeadData {
            first_name: "Priya".to_string(),
            last_name: "Raman".to_string(),
            email: "priya@harborclinic.example".to_string(),
            phone: "555-0190".to_string(),
            business_name: "Harbor Family Clinic".to_string(),
            website_url: None,
            consultation_requested: false,
        }
    }

    pub(super) fn csv_responses() -> ResponseSet {
        ResponseSet::from_csv_reader(CSV_EXPORT.as_bytes()).expect("csv export parses")
    }

    #[derive(Default)]
    pub(super) struct CapturingDelivery {
        pub(super) payloads: Mutex<Vec<serde_json::Value>>,
    }

    impl PayloadDelivery for CapturingDelivery {
        async fn deliver(
            &self,
            payload: &AssessmentPayload,
        ) -> Result<DeliveryReceipt, DeliveryError> {
            let value = serde_json::to_value(payload)
                .map_err(|error| DeliveryError::Transport(error.to_string()))?;
            self.payloads.lock().expect("lock").push(value);
            Ok(DeliveryReceipt::Delivered { status: 202 })
        }
    }
}

use std::sync::Arc;

use ai_readiness::assessment::catalog;
use ai_readiness::assessment::{
    Answer, AssessmentService, AssessmentSubmission, FlagKind, QuestionId, ReadinessTier,
    ResponseImportError, ResponseSet, ScoringEngine, SubmissionMetadata,
};
use chrono::{TimeZone, Utc};
use common::*;

#[test]
fn csv_export_scores_and_flags_regulated_practice() {
    let responses = csv_responses();

    assert_eq!(
        responses.get(QuestionId::TI03),
        Some(&Answer::Selections(vec![
            "CRM".to_string(),
            "Accounting Software".to_string(),
            "Scheduling".to_string(),
        ]))
    );
    assert!(!responses.contains(QuestionId::DC05));

    let result = ScoringEngine::new().score(&responses);
    assert!(result.has_flag(FlagKind::ComplianceFirst));
    assert!(!result.has_flag(FlagKind::ChangeManagementCritical));
    assert!(result.overall_score <= 100);
}

#[test]
fn csv_import_rejects_unknown_question_codes() {
    let error = ResponseSet::from_csv_reader("question_id,answer\nXX01,maybe\n".as_bytes())
        .expect_err("unknown code");
    assert!(matches!(
        error,
        ResponseImportError::UnknownQuestion { line: 2, .. }
    ));
}

#[test]
fn questionnaire_progress_tracks_conditional_questions() {
    let mut responses = ResponseSet::default();
    assert_eq!(
        catalog::next_question(&responses).map(|question| question.id),
        Some(QuestionId::BP01)
    );

    responses.record(
        QuestionId::DC02,
        Answer::Choice("No sensitive data".to_string()),
    );
    assert!(!catalog::active_questions(&responses).any(|question| question.id == QuestionId::DC05));

    for question in catalog::questions_in_order() {
        if question.required && question.is_active(&responses) && !responses.contains(question.id)
        {
            let answer = match question.kind {
                ai_readiness::assessment::QuestionKind::Scale => Answer::Scale(3),
                ai_readiness::assessment::QuestionKind::MultiSelect => {
                    Answer::Selections(vec![question.options[0].to_string()])
                }
                ai_readiness::assessment::QuestionKind::FreeText => {
                    Answer::FreeText("Notes".to_string())
                }
                _ => Answer::Choice(question.options[0].to_string()),
            };
            responses.record(question.id, answer);
        }
    }
    assert!(catalog::is_complete(&responses));
}

#[tokio::test]
async fn submission_forwards_camel_case_payload() {
    let delivery = Arc::new(CapturingDelivery::default());
    let service = AssessmentService::new(delivery.clone());

    let submission = AssessmentSubmission {
        lead: lead(),
        responses: csv_responses(),
        metadata: SubmissionMetadata::at(
            Utc.with_ymd_and_hms(2025, 5, 2, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
        ),
    };

    let outcome = service.submit(submission).await.expect("submission succeeds");

    let payloads = delivery.payloads.lock().expect("lock");
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    assert_eq!(payload["lead"]["companyName"], "Harbor Family Clinic");
    assert!(payload["lead"].get("websiteUrl").is_none());
    assert_eq!(payload["businessProfile"]["industry"], "Healthcare");
    assert_eq!(
        payload["scoring"]["overallScore"],
        u64::from(outcome.scoring.overall_score)
    );
    assert_eq!(
        payload["scoring"]["validationFlags"][0]["flag"],
        "COMPLIANCE_FIRST"
    );
}

#[test]
fn empty_assessment_resolves_to_developing_tier() {
    let result = ScoringEngine::new().score(&ResponseSet::default());
    assert_eq!(result.overall_score, 49);
    assert_eq!(result.readiness_level.level, ReadinessTier::Developing);
    assert!(result.validation_flags.is_empty());
}
