use super::common::*;
use serde_json::json;

use crate::assessment::catalog::QuestionId;
use crate::assessment::payload::{assemble_payload, SubmissionMetadata, ASSESSMENT_VERSION};
use crate::assessment::responses::ResponseSet;
use crate::assessment::scoring::ScoringEngine;

fn assemble(responses: &ResponseSet) -> serde_json::Value {
    let scoring = ScoringEngine::new().score(responses);
    let payload = assemble_payload(responses, &lead(), &metadata(), scoring);
    serde_json::to_value(payload).expect("payload serializes")
}

#[test]
fn meta_and_lead_sections_are_populated() {
    let value = assemble(&scenario_a());

    assert_eq!(value["meta"]["assessmentVersion"], ASSESSMENT_VERSION);
    assert_eq!(value["meta"]["source"], "website");
    assert_eq!(value["meta"]["assessmentType"], "standard");
    assert_eq!(value["meta"]["submittedAt"], "2025-03-14T16:30:00Z");
    assert_eq!(value["meta"]["sessionId"], "sess-42");
    assert_eq!(value["meta"]["completionTimeSeconds"], 412);

    assert_eq!(value["lead"]["companyName"], "Ledgerline Bookkeeping");
    assert_eq!(value["lead"]["email"], "dana@ledgerline.example");
    assert_eq!(value["lead"]["consultationRequested"], true);
}

#[test]
fn scoring_section_matches_engine_output() {
    let value = assemble(&scenario_a());
    assert_eq!(value["scoring"]["overallScore"], 71);
    assert_eq!(value["scoring"]["readinessLevel"]["level"], "Ready");
}

#[test]
fn context_views_copy_answers_by_topic() {
    let value = assemble(&scenario_a());

    let profile = &value["businessProfile"];
    assert_eq!(profile["employeeCount"], "6-15");
    assert_eq!(profile["annualRevenue"], "$500K-$1M");
    assert_eq!(profile["primaryAIGoal"], "");
    assert_eq!(profile["successMetrics"], json!(["Time saved", "Employee productivity"]));

    let pain = &value["painPointsAndOpportunities"];
    assert_eq!(pain["taskRepetitiveness"], 4);
    assert_eq!(pain["manualDataEntryLevel"], 3);
    assert_eq!(pain["aiConcerns"], json!(["Complexity", "Reliability"]));

    let current = &value["currentState"];
    assert_eq!(current["softwareStack"], json!(["CRM", "Accounting Software", "Project Management"]));
    assert_eq!(current["ownerMotivation"], 4);
    assert_eq!(current["complianceConcerns"], serde_json::Value::Null);

    assert_eq!(value["goals"]["timeline"], "Within 3 months");
    assert_eq!(value["goals"]["additionalContext"], "");
}

#[test]
fn missing_ratings_serialize_as_zero() {
    let value = assemble(&ResponseSet::default());
    assert_eq!(value["painPointsAndOpportunities"]["taskRepetitiveness"], 0);
    assert_eq!(value["currentState"]["staffReceptiveness"], 0);
    assert_eq!(value["currentState"]["aiToolsUsed"], json!([]));
}

#[test]
fn free_text_section_keeps_only_non_empty_answers() {
    let mut responses = scenario_a();
    responses.record(
        QuestionId::GT05,
        crate::assessment::responses::Answer::FreeText(String::new()),
    );
    let value = assemble(&responses);

    let entries = value["freeTextForAIAnalysis"].as_array().expect("array");
    let ids: Vec<&str> = entries
        .iter()
        .map(|entry| entry["questionId"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["BP05", "GT04"]);
    assert_eq!(
        entries[1]["response"],
        "Every client report generated overnight without manual entry."
    );
    assert!(entries[0]["question"].as_str().is_some_and(|text| !text.is_empty()));
}

#[test]
fn compliance_concerns_pass_through_when_answered() {
    let responses = responses(json!({
        "DC02": "Yes - highly regulated (HIPAA, PCI, etc.)",
        "DC05": "Patient intake forms contain PHI."
    }));
    let value = assemble(&responses);

    assert_eq!(
        value["currentState"]["complianceConcerns"],
        "Patient intake forms contain PHI."
    );
    assert_eq!(value["freeTextForAIAnalysis"][0]["questionId"], "DC05");
}

#[test]
fn question_answer_list_follows_catalog_order() {
    let value = assemble(&scenario_a());

    let entries = value["completeQuestionsAndAnswers"].as_array().expect("array");
    assert_eq!(entries.len(), scenario_a().len());
    assert_eq!(entries[0]["questionId"], "BP01");
    assert_eq!(entries.last().expect("entry")["questionId"], "GT04");

    let stack = entries
        .iter()
        .find(|entry| entry["questionId"] == "TI03")
        .expect("TI03 answered");
    assert_eq!(stack["answer"], json!(["CRM", "Accounting Software", "Project Management"]));
    assert_eq!(stack["answerFormatted"], "CRM, Accounting Software, Project Management");

    let rating = entries
        .iter()
        .find(|entry| entry["questionId"] == "TI05")
        .expect("TI05 answered");
    assert_eq!(rating["answer"], 4);
    assert_eq!(rating["answerFormatted"], "4");
}

#[test]
fn raw_responses_round_trip_through_the_wire_shape() {
    let responses = scenario_a();
    let value = assemble(&responses);

    let parsed: ResponseSet =
        serde_json::from_value(value["rawResponses"].clone()).expect("raw responses parse");
    assert_eq!(parsed, responses);
}

#[test]
fn raw_responses_are_forwarded_as_submitted() {
    let responses = responses(json!({
        "AK05": 4.4,
        "BP02": "6-15",
        "PP04": "5",
        "XX01": "kept?"
    }));
    let value = assemble(&responses);

    assert_eq!(
        value["rawResponses"],
        json!({ "AK05": 4.4, "BP02": "6-15", "PP04": "5", "XX01": "kept?" })
    );
    assert_eq!(value["painPointsAndOpportunities"]["taskRepetitiveness"], 5);
    assert_eq!(value["currentState"]["ownerMotivation"], 4);
}

#[test]
fn metadata_defaults_optional_fields() {
    let metadata: SubmissionMetadata =
        serde_json::from_value(json!({ "submittedAt": "2025-03-14T16:30:00Z" }))
            .expect("metadata parses");
    assert_eq!(metadata.session_id, "");
    assert_eq!(metadata.completion_time_seconds, 0);
}
