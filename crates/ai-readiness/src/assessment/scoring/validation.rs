//! Cross-dimensional rules that annotate a scoring result for the report generator.
//!
//! Every rule runs on every evaluation and flags come out in rule order, so a response set
//! can carry any subset of the six flags.

use serde::Serialize;

use super::super::catalog::{QuestionId, HIGHLY_REGULATED};
use super::super::responses::ResponseSet;
use super::dimensions::{DimensionId, DimensionScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagKind {
    ExpectationManagement,
    ManagedServicesCandidate,
    TimelineAdjustment,
    QuickWinOpportunity,
    ComplianceFirst,
    ChangeManagementCritical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagSeverity {
    Info,
    Warning,
    Caution,
    Positive,
}

/// Plan adjustments the report generator applies when a flag fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_phase: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_duration: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_first_steps: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasize_service: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommend_vendor_support: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_timeline: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_milestones: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasize: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_tools: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_tools: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_actions: Option<&'static [&'static str]>,
}

impl FlagAdjustment {
    const NONE: Self = Self {
        add_phase: None,
        phase_duration: None,
        recommended_first_steps: None,
        emphasize_service: None,
        recommend_vendor_support: None,
        recommended_timeline: None,
        add_milestones: None,
        emphasize: None,
        recommended_tools: None,
        include_training: None,
        exclude_tools: None,
        recommended_actions: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationFlag {
    pub flag: FlagKind,
    pub severity: FlagSeverity,
    pub message: &'static str,
    pub adjustment: FlagAdjustment,
}

impl FlagKind {
    /// Static flag template attached when the rule fires.
    pub const fn template(self) -> ValidationFlag {
        match self {
            Self::ExpectationManagement => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Warning,
                message: "High enthusiasm detected with limited technology foundation. Recommend starting with infrastructure basics before AI implementation.",
                adjustment: FlagAdjustment {
                    add_phase: Some("Foundation Building"),
                    phase_duration: Some("60-90 days"),
                    recommended_first_steps: Some(&[
                        "Cloud tool migration",
                        "Data organization",
                        "Basic automation (Zapier/Make)",
                    ]),
                    ..FlagAdjustment::NONE
                },
            },
            Self::ManagedServicesCandidate => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Info,
                message: "Budget available but no IT support. Strong candidate for fully managed AI implementation services.",
                adjustment: FlagAdjustment {
                    emphasize_service: Some("Fully Managed Implementation"),
                    recommend_vendor_support: Some(true),
                    ..FlagAdjustment::NONE
                },
            },
            Self::TimelineAdjustment => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Warning,
                message: "Aggressive timeline with foundational readiness level. Recommend extending timeline and setting intermediate milestones.",
                adjustment: FlagAdjustment {
                    recommended_timeline: Some("6-12 months"),
                    add_milestones: Some(&[
                        "30 days: Data audit and organization",
                        "60 days: Cloud tool adoption",
                        "90 days: First automation pilot",
                        "180 days: First AI tool implementation",
                    ]),
                    ..FlagAdjustment::NONE
                },
            },
            Self::QuickWinOpportunity => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Positive,
                message: "Strong data foundation with AI knowledge gap. High potential for quick wins with user-friendly AI tools.",
                adjustment: FlagAdjustment {
                    emphasize: Some("Education + Simple Tools"),
                    recommended_tools: Some(&[
                        "ChatGPT/Claude for business writing",
                        "AI-powered CRM features",
                        "Automated reporting tools",
                    ]),
                    include_training: Some(true),
                    ..FlagAdjustment::NONE
                },
            },
            Self::ComplianceFirst => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Caution,
                message: "Regulated industry with strong AI interest. Must prioritize compliance-approved AI solutions.",
                adjustment: FlagAdjustment {
                    add_phase: Some("Compliance Review"),
                    phase_duration: Some("30-45 days"),
                    recommended_tools: Some(&["Enterprise-grade, SOC2/HIPAA compliant only"]),
                    exclude_tools: Some(&["Consumer AI tools", "Free-tier solutions"]),
                    ..FlagAdjustment::NONE
                },
            },
            Self::ChangeManagementCritical => ValidationFlag {
                flag: self,
                severity: FlagSeverity::Warning,
                message: "Larger organization with anticipated staff resistance. Change management must be central to implementation.",
                adjustment: FlagAdjustment {
                    add_phase: Some("Change Management Program"),
                    recommended_actions: Some(&[
                        "Executive sponsorship communication",
                        "Pilot team selection",
                        "Success story documentation",
                        "Phased rollout by department",
                    ]),
                    ..FlagAdjustment::NONE
                },
            },
        }
    }
}

/// Inputs every rule may inspect.
pub(crate) struct RuleContext<'a> {
    pub responses: &'a ResponseSet,
    pub dimensions: &'a DimensionScores,
    pub overall_score: u8,
}

impl RuleContext<'_> {
    fn normalized(&self, dimension: DimensionId) -> u8 {
        self.dimensions.get(dimension).normalized
    }

    fn motivation(&self) -> u8 {
        self.responses.scale_or_zero(QuestionId::AK05)
    }

    fn answer_in(&self, id: QuestionId, accepted: &[&str]) -> bool {
        self.responses
            .choice(id)
            .is_some_and(|answer| accepted.contains(&answer))
    }
}

struct Rule {
    kind: FlagKind,
    applies: fn(&RuleContext<'_>) -> bool,
}

const RULES: [Rule; 6] = [
    Rule {
        kind: FlagKind::ExpectationManagement,
        applies: |ctx| {
            ctx.motivation() >= 4
                && ctx.answer_in(QuestionId::GT01, &["Immediately"])
                && ctx.normalized(DimensionId::TechInfrastructure) < 40
        },
    },
    Rule {
        kind: FlagKind::ManagedServicesCandidate,
        applies: |ctx| {
            ctx.answer_in(QuestionId::BR01, &["$1,000-$2,500", "$2,500+"])
                && ctx.answer_in(QuestionId::BR02, &["No dedicated IT support"])
        },
    },
    Rule {
        kind: FlagKind::TimelineAdjustment,
        applies: |ctx| {
            ctx.answer_in(QuestionId::GT01, &["Immediately", "Within 3 months"])
                && ctx.overall_score < 35
        },
    },
    Rule {
        kind: FlagKind::QuickWinOpportunity,
        applies: |ctx| {
            ctx.normalized(DimensionId::DataReadiness) >= 70
                && ctx.normalized(DimensionId::AiKnowledge) < 40
        },
    },
    Rule {
        kind: FlagKind::ComplianceFirst,
        applies: |ctx| {
            (ctx.answer_in(QuestionId::DC02, &[HIGHLY_REGULATED])
                || ctx.answer_in(QuestionId::DC03, &["Yes - strict compliance requirements"]))
                && ctx.motivation() >= 4
        },
    },
    Rule {
        kind: FlagKind::ChangeManagementCritical,
        applies: |ctx| {
            ctx.answer_in(QuestionId::BP02, &["51-100", "100+"])
                && ctx.responses.scale_or_zero(QuestionId::AK06) <= 2
        },
    },
];

pub(crate) fn run_rules(ctx: &RuleContext<'_>) -> Vec<ValidationFlag> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.kind.template())
        .collect()
}
