//! Outbound record handed to the report-generation pipeline.
//!
//! Assembly is pure: the caller supplies the timestamp and session details, and the
//! response set is copied into several readable context views for the downstream AI.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{self, QuestionId};
use super::responses::{Answer, ResponseSet};
use super::scoring::ScoringResult;

pub const ASSESSMENT_VERSION: &str = "2.0";

/// Free-text questions forwarded verbatim for AI analysis, in report order.
pub const FREE_TEXT_QUESTIONS: [QuestionId; 9] = [
    QuestionId::BP05,
    QuestionId::BP06,
    QuestionId::TI06,
    QuestionId::PP06,
    QuestionId::PP07,
    QuestionId::BR04,
    QuestionId::DC05,
    QuestionId::GT04,
    QuestionId::GT05,
];

/// Contact captured before the questionnaire; never used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub consultation_requested: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetadata {
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub completion_time_seconds: u32,
}

impl SubmissionMetadata {
    pub fn at(submitted_at: DateTime<Utc>) -> Self {
        Self {
            submitted_at,
            user_agent: String::new(),
            session_id: String::new(),
            completion_time_seconds: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMeta {
    pub assessment_version: &'static str,
    pub submitted_at: DateTime<Utc>,
    pub source: &'static str,
    pub assessment_type: &'static str,
    pub user_agent: String,
    pub session_id: String,
    pub completion_time_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadLead {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    pub consultation_requested: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfileView {
    pub industry: String,
    pub employee_count: String,
    pub years_in_business: String,
    pub annual_revenue: String,
    pub business_model: String,
    pub business_goals: String,
    #[serde(rename = "primaryAIGoal")]
    pub primary_ai_goal: String,
    pub implementation_timeline: String,
    pub involvement_preference: String,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PainPointsView {
    pub time_consuming_tasks: Vec<String>,
    pub biggest_challenge: String,
    pub task_repetitiveness: u8,
    pub manual_data_entry_level: u8,
    pub tech_challenges: String,
    pub inefficient_workflow: String,
    pub tech_frustrations: String,
    pub ai_concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStateView {
    pub tech_adoption_level: String,
    pub cloud_usage: String,
    pub software_stack: Vec<String>,
    pub data_storage: String,
    pub team_tech_comfort: u8,
    pub it_support: String,
    pub monthly_tech_budget: String,
    pub past_implementation_approach: String,
    pub ai_budget_planning: String,
    pub ai_familiarity: String,
    pub ai_tools_used: Vec<String>,
    pub owner_motivation: u8,
    pub staff_receptiveness: u8,
    pub data_quality: String,
    pub sensitive_data: String,
    pub industry_regulations: String,
    pub backup_system: String,
    pub compliance_concerns: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsView {
    pub timeline: String,
    pub involvement_level: String,
    pub success_metrics: Vec<String>,
    pub one_year_vision: String,
    pub additional_context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTextEntry {
    pub question_id: QuestionId,
    pub question: &'static str,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnswerEntry {
    pub question_id: QuestionId,
    pub question: &'static str,
    pub answer: Answer,
    pub answer_formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPayload {
    pub meta: PayloadMeta,
    pub lead: PayloadLead,
    pub scoring: ScoringResult,
    pub business_profile: BusinessProfileView,
    pub pain_points_and_opportunities: PainPointsView,
    pub current_state: CurrentStateView,
    pub goals: GoalsView,
    #[serde(rename = "freeTextForAIAnalysis")]
    pub free_text_for_ai_analysis: Vec<FreeTextEntry>,
    pub complete_questions_and_answers: Vec<QuestionAnswerEntry>,
    pub raw_responses: BTreeMap<String, serde_json::Value>,
}

/// Build the outbound record from an already computed scoring result.
pub fn assemble_payload(
    responses: &ResponseSet,
    lead: &LeadData,
    metadata: &SubmissionMetadata,
    scoring: ScoringResult,
) -> AssessmentPayload {
    let text = |id: QuestionId| responses.text(id).to_string();
    let list = |id: QuestionId| responses.selections(id).to_vec();
    let rating = |id: QuestionId| responses.scale_or_zero(id);

    AssessmentPayload {
        meta: PayloadMeta {
            assessment_version: ASSESSMENT_VERSION,
            submitted_at: metadata.submitted_at,
            source: "website",
            assessment_type: "standard",
            user_agent: metadata.user_agent.clone(),
            session_id: metadata.session_id.clone(),
            completion_time_seconds: metadata.completion_time_seconds,
        },
        lead: PayloadLead {
            email: lead.email.clone(),
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            company_name: lead.business_name.clone(),
            phone: lead.phone.clone(),
            website_url: lead.website_url.clone(),
            consultation_requested: lead.consultation_requested,
        },
        scoring,
        business_profile: BusinessProfileView {
            industry: text(QuestionId::BP01),
            employee_count: text(QuestionId::BP02),
            years_in_business: text(QuestionId::BP03),
            annual_revenue: text(QuestionId::BP04),
            business_model: text(QuestionId::BP05),
            business_goals: text(QuestionId::BP06),
            primary_ai_goal: text(QuestionId::AK03),
            implementation_timeline: text(QuestionId::GT01),
            involvement_preference: text(QuestionId::GT02),
            success_metrics: list(QuestionId::GT03),
        },
        pain_points_and_opportunities: PainPointsView {
            time_consuming_tasks: list(QuestionId::PP01),
            biggest_challenge: text(QuestionId::PP03),
            task_repetitiveness: rating(QuestionId::PP04),
            manual_data_entry_level: rating(QuestionId::PP05),
            tech_challenges: text(QuestionId::PP06),
            inefficient_workflow: text(QuestionId::PP07),
            tech_frustrations: text(QuestionId::TI06),
            ai_concerns: list(QuestionId::AK04),
        },
        current_state: CurrentStateView {
            tech_adoption_level: text(QuestionId::TI01),
            cloud_usage: text(QuestionId::TI02),
            software_stack: list(QuestionId::TI03),
            data_storage: text(QuestionId::TI04),
            team_tech_comfort: rating(QuestionId::TI05),
            it_support: text(QuestionId::BR02),
            monthly_tech_budget: text(QuestionId::BR01),
            past_implementation_approach: text(QuestionId::BR03),
            ai_budget_planning: text(QuestionId::BR04),
            ai_familiarity: text(QuestionId::AK01),
            ai_tools_used: list(QuestionId::AK02),
            owner_motivation: rating(QuestionId::AK05),
            staff_receptiveness: rating(QuestionId::AK06),
            data_quality: text(QuestionId::DC01),
            sensitive_data: text(QuestionId::DC02),
            industry_regulations: text(QuestionId::DC03),
            backup_system: text(QuestionId::DC04),
            compliance_concerns: responses
                .choice(QuestionId::DC05)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        },
        goals: GoalsView {
            timeline: text(QuestionId::GT01),
            involvement_level: text(QuestionId::GT02),
            success_metrics: list(QuestionId::GT03),
            one_year_vision: text(QuestionId::GT04),
            additional_context: text(QuestionId::GT05),
        },
        free_text_for_ai_analysis: free_text_entries(responses),
        complete_questions_and_answers: question_answer_entries(responses),
        raw_responses: responses.raw().clone(),
    }
}

fn free_text_entries(responses: &ResponseSet) -> Vec<FreeTextEntry> {
    FREE_TEXT_QUESTIONS
        .iter()
        .filter_map(|id| {
            let response = responses.choice(*id).filter(|value| !value.is_empty())?;
            Some(FreeTextEntry {
                question_id: *id,
                question: catalog::question(*id).text,
                response: response.to_string(),
            })
        })
        .collect()
}

fn question_answer_entries(responses: &ResponseSet) -> Vec<QuestionAnswerEntry> {
    responses
        .iter()
        .map(|(id, answer)| QuestionAnswerEntry {
            question_id: id,
            question: catalog::question(id).text,
            answer: answer.clone(),
            answer_formatted: answer.formatted(),
        })
        .collect()
}
