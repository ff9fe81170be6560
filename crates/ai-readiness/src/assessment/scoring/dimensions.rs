use serde::{Deserialize, Serialize, Serializer};

use super::super::catalog::QuestionId;
use super::super::responses::ResponseSet;
use super::tables::{
    AI_FAMILIARITY, BACKUP_MATURITY, CLOUD_USAGE, COMPLIANCE_AWARENESS, CUSTOMER_SUPPORT,
    DATA_QUALITY, DATA_STORAGE, EMPLOYEE_VOLUME, IMPLEMENTATION_APPROACH, IT_SUPPORT,
    MONTHLY_BUDGET, REVENUE, TEAM_SIZE, TECH_ADOPTION, TIMELINE, YEARS_VOLUME,
};

/// Weighted readiness category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionId {
    TechInfrastructure,
    ProcessMaturity,
    DataReadiness,
    BudgetResources,
    AiKnowledge,
    OrgReadiness,
    StrategicAlignment,
}

impl DimensionId {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::TechInfrastructure,
            Self::ProcessMaturity,
            Self::DataReadiness,
            Self::BudgetResources,
            Self::AiKnowledge,
            Self::OrgReadiness,
            Self::StrategicAlignment,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechInfrastructure => "Technology Infrastructure",
            Self::ProcessMaturity => "Process Maturity",
            Self::DataReadiness => "Data Readiness",
            Self::BudgetResources => "Budget & Resources",
            Self::AiKnowledge => "AI Knowledge",
            Self::OrgReadiness => "Organizational Readiness",
            Self::StrategicAlignment => "Strategic Alignment",
        }
    }

    /// Share of the overall score, in percent.
    pub const fn weight(self) -> u8 {
        match self {
            Self::TechInfrastructure => 20,
            Self::ProcessMaturity
            | Self::DataReadiness
            | Self::BudgetResources
            | Self::AiKnowledge => 15,
            Self::OrgReadiness | Self::StrategicAlignment => 10,
        }
    }

    /// Ceiling of the raw score.
    pub const fn max_points(self) -> u8 {
        match self {
            Self::TechInfrastructure => 20,
            Self::ProcessMaturity
            | Self::DataReadiness
            | Self::BudgetResources
            | Self::AiKnowledge => 15,
            Self::OrgReadiness | Self::StrategicAlignment => 10,
        }
    }
}

/// Raw, normalized, and weighted view of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub score: f64,
    pub max_points: u8,
    pub normalized: u8,
    #[serde(serialize_with = "serialize_weight")]
    pub weight: u8,
}

impl DimensionScore {
    /// Clamp into `[0, max_points]` and rescale to a rounded 0-100 value.
    pub fn new(dimension: DimensionId, raw: f64) -> Self {
        let max_points = dimension.max_points();
        let score = raw.clamp(0.0, f64::from(max_points));
        let normalized = ((score / f64::from(max_points)) * 100.0).round() as u8;

        Self {
            score,
            max_points,
            normalized,
            weight: dimension.weight(),
        }
    }

    pub fn weighted_contribution(&self) -> f64 {
        f64::from(self.normalized) * (f64::from(self.weight) / 100.0)
    }
}

fn serialize_weight<S: Serializer>(weight: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{weight}%"))
}

/// All seven dimensions, serialized as a map keyed by dimension id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub tech_infrastructure: DimensionScore,
    pub process_maturity: DimensionScore,
    pub data_readiness: DimensionScore,
    pub budget_resources: DimensionScore,
    pub ai_knowledge: DimensionScore,
    pub org_readiness: DimensionScore,
    pub strategic_alignment: DimensionScore,
}

impl DimensionScores {
    pub fn get(&self, dimension: DimensionId) -> &DimensionScore {
        match dimension {
            DimensionId::TechInfrastructure => &self.tech_infrastructure,
            DimensionId::ProcessMaturity => &self.process_maturity,
            DimensionId::DataReadiness => &self.data_readiness,
            DimensionId::BudgetResources => &self.budget_resources,
            DimensionId::AiKnowledge => &self.ai_knowledge,
            DimensionId::OrgReadiness => &self.org_readiness,
            DimensionId::StrategicAlignment => &self.strategic_alignment,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DimensionId, &DimensionScore)> {
        DimensionId::ordered()
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }
}

const SELECTION_SENTINELS: [&str; 2] = ["None", "Other"];

fn meaningful_selections(selections: &[String]) -> usize {
    selections
        .iter()
        .filter(|item| !SELECTION_SENTINELS.contains(&item.as_str()))
        .count()
}

pub(crate) fn software_stack_points(selections: &[String]) -> f64 {
    match meaningful_selections(selections) {
        0 => 1.0,
        1..=2 => 2.0,
        3..=4 => 3.0,
        5..=6 => 3.5,
        _ => 4.0,
    }
}

pub(crate) fn ai_tools_points(selections: &[String]) -> f64 {
    match meaningful_selections(selections) {
        0 => 1.0,
        1..=2 => 1.5,
        3..=4 => 2.5,
        _ => 3.0,
    }
}

/// Inverted U: one focused concern beats none, and many concerns signal overwhelm.
pub(crate) fn concern_points(selections: &[String]) -> f64 {
    match meaningful_selections(selections) {
        0 => 3.0,
        1 => 4.0,
        2 => 3.5,
        3 => 2.5,
        _ => 1.5,
    }
}

pub(crate) fn success_metric_points(selections: &[String]) -> f64 {
    if selections.iter().any(|item| item == "All of the above") {
        return 2.5;
    }
    match selections.len() {
        0 => 1.0,
        1 => 1.5,
        _ => 2.0,
    }
}

// The three rating curves below intentionally differ; unanswered reads as 1.

pub(crate) fn team_comfort_points(rating: Option<u8>) -> f64 {
    match rating.unwrap_or(1) {
        0..=2 => 1.0,
        3 => 2.0,
        _ => 3.0,
    }
}

pub(crate) fn motivation_points(rating: Option<u8>) -> f64 {
    match rating.unwrap_or(1) {
        0..=2 => 1.0,
        3 => 2.0,
        4 => 3.0,
        _ => 4.0,
    }
}

pub(crate) fn staff_support_points(rating: Option<u8>) -> f64 {
    match rating.unwrap_or(1) {
        0..=2 => 1.0,
        3 => 2.0,
        4 => 2.5,
        _ => 3.0,
    }
}

fn direct_rating_points(rating: Option<u8>) -> f64 {
    f64::from(rating.map(|value| value.clamp(1, 5)).unwrap_or(3))
}

/// Employee count and business age stand in for accumulated data. Their combined ceiling is
/// 5.5, rescaled onto a 5 point sub-score.
pub(crate) fn data_volume_points(responses: &ResponseSet) -> f64 {
    let employees = EMPLOYEE_VOLUME.points(responses.choice(QuestionId::BP02));
    let years = YEARS_VOLUME.points(responses.choice(QuestionId::BP03));
    ((employees + years) * (5.0 / 5.5)).min(5.0)
}

pub(crate) fn tech_infrastructure(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += TECH_ADOPTION.points(responses.choice(QuestionId::TI01));
    score += CLOUD_USAGE.points(responses.choice(QuestionId::TI02));
    score += software_stack_points(responses.selections(QuestionId::TI03));
    score += DATA_STORAGE.points(responses.choice(QuestionId::TI04));
    score += team_comfort_points(responses.scale(QuestionId::TI05));
    score
}

pub(crate) fn process_maturity(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += CUSTOMER_SUPPORT.points(responses.choice(QuestionId::PP02));
    score += direct_rating_points(responses.scale(QuestionId::PP04));
    score += direct_rating_points(responses.scale(QuestionId::PP05));
    score
}

pub(crate) fn data_readiness(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += DATA_QUALITY.points(responses.choice(QuestionId::DC01));
    score += COMPLIANCE_AWARENESS.points(responses.choice(QuestionId::DC03));
    score += BACKUP_MATURITY.points(responses.choice(QuestionId::DC04));
    score += data_volume_points(responses);
    score
}

pub(crate) fn budget_resources(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += MONTHLY_BUDGET.points(responses.choice(QuestionId::BR01));
    score += IT_SUPPORT.points(responses.choice(QuestionId::BR02));
    score += IMPLEMENTATION_APPROACH.points(responses.choice(QuestionId::BR03));
    score += REVENUE.points(responses.choice(QuestionId::BP04));
    score
}

pub(crate) fn ai_knowledge(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += AI_FAMILIARITY.points(responses.choice(QuestionId::AK01));
    score += ai_tools_points(responses.selections(QuestionId::AK02));
    score += concern_points(responses.selections(QuestionId::AK04));
    score += motivation_points(responses.scale(QuestionId::AK05));
    score
}

const GUIDED_APPROACHES: [&str; 2] = ["Vendor-provided training", "Hire consultants"];

pub(crate) fn org_readiness(responses: &ResponseSet) -> f64 {
    let mut score = 0.0;
    score += TEAM_SIZE.points(responses.choice(QuestionId::BP02));
    score += team_comfort_points(responses.scale(QuestionId::TI05));
    score += staff_support_points(responses.scale(QuestionId::AK06));
    if responses
        .choice(QuestionId::BR03)
        .is_some_and(|approach| GUIDED_APPROACHES.contains(&approach))
    {
        score += 1.0;
    }
    score.min(f64::from(DimensionId::OrgReadiness.max_points()))
}

/// Timeline and success-metric clarity; `goal_clarity` is the separately assessed GT04 part.
pub(crate) fn strategic_alignment(responses: &ResponseSet, goal_clarity: f64) -> f64 {
    let mut score = 0.0;
    score += TIMELINE.points(responses.choice(QuestionId::GT01));
    score += success_metric_points(responses.selections(QuestionId::GT03));
    score += goal_clarity;
    score
}
