mod dimensions;
mod readiness;
mod tables;
mod validation;

pub use dimensions::{DimensionId, DimensionScore, DimensionScores};
pub use readiness::{ReadinessLevel, ReadinessTier, READINESS_LEVELS};
pub use validation::{FlagAdjustment, FlagKind, FlagSeverity, ValidationFlag};

use serde::Serialize;
use tracing::debug;

use super::catalog::QuestionId;
use super::responses::ResponseSet;
use validation::{run_rules, RuleContext};

/// Neutral goal-clarity sub-score used until the GT04 vision has been assessed.
pub const GOAL_CLARITY_PLACEHOLDER: f64 = 2.5;

/// Ceiling for the goal-clarity sub-score of strategic alignment.
pub const GOAL_CLARITY_MAX: f64 = 5.0;

/// Scores the free-text one-year vision (GT04) on a 0-5 scale.
///
/// The production assessment of this answer happens downstream in the AI report pipeline;
/// implementations plug that result back in here.
pub trait GoalClarityAssessor: Send + Sync {
    fn assess(&self, vision: Option<&str>) -> f64;
}

/// Returns [`GOAL_CLARITY_PLACEHOLDER`] for every answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGoalClarity;

impl GoalClarityAssessor for PlaceholderGoalClarity {
    fn assess(&self, _vision: Option<&str>) -> f64 {
        GOAL_CLARITY_PLACEHOLDER
    }
}

/// Complete, derived outcome of scoring one response set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub overall_score: u8,
    pub readiness_level: &'static ReadinessLevel,
    pub dimensions: DimensionScores,
    pub validation_flags: Vec<ValidationFlag>,
}

impl ScoringResult {
    pub fn has_flag(&self, kind: FlagKind) -> bool {
        self.validation_flags.iter().any(|flag| flag.flag == kind)
    }
}

/// Stateless scorer; the same response set always yields the same result.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine<G = PlaceholderGoalClarity> {
    goal_clarity: G,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: GoalClarityAssessor> ScoringEngine<G> {
    pub fn with_assessor(goal_clarity: G) -> Self {
        Self { goal_clarity }
    }

    pub fn score(&self, responses: &ResponseSet) -> ScoringResult {
        let dimensions = self.dimension_scores(responses);

        // Round each dimension first, then the weighted sum.
        let weighted: f64 = dimensions
            .iter()
            .map(|(_, score)| score.weighted_contribution())
            .sum();
        let overall_score = weighted.round().clamp(0.0, 100.0) as u8;

        let validation_flags = run_rules(&RuleContext {
            responses,
            dimensions: &dimensions,
            overall_score,
        });
        let readiness_level = ReadinessLevel::for_score(i64::from(overall_score));

        debug!(
            overall_score,
            tier = readiness_level.level.label(),
            flags = validation_flags.len(),
            answered = responses.len(),
            "scored readiness assessment"
        );

        ScoringResult {
            overall_score,
            readiness_level,
            dimensions,
            validation_flags,
        }
    }

    pub fn dimension_scores(&self, responses: &ResponseSet) -> DimensionScores {
        let assessed = self.goal_clarity.assess(responses.choice(QuestionId::GT04));
        let goal_clarity = if assessed.is_finite() {
            assessed.clamp(0.0, GOAL_CLARITY_MAX)
        } else {
            GOAL_CLARITY_PLACEHOLDER
        };

        DimensionScores {
            tech_infrastructure: DimensionScore::new(
                DimensionId::TechInfrastructure,
                dimensions::tech_infrastructure(responses),
            ),
            process_maturity: DimensionScore::new(
                DimensionId::ProcessMaturity,
                dimensions::process_maturity(responses),
            ),
            data_readiness: DimensionScore::new(
                DimensionId::DataReadiness,
                dimensions::data_readiness(responses),
            ),
            budget_resources: DimensionScore::new(
                DimensionId::BudgetResources,
                dimensions::budget_resources(responses),
            ),
            ai_knowledge: DimensionScore::new(
                DimensionId::AiKnowledge,
                dimensions::ai_knowledge(responses),
            ),
            org_readiness: DimensionScore::new(
                DimensionId::OrgReadiness,
                dimensions::org_readiness(responses),
            ),
            strategic_alignment: DimensionScore::new(
                DimensionId::StrategicAlignment,
                dimensions::strategic_alignment(responses, goal_clarity),
            ),
        }
    }
}
