//! Static registry of assessment sections and questions.
//!
//! Everything here is process-wide constant data. Question order inside a section is the
//! display order, and [`QuestionId`] derives `Ord` in that same order so ordered maps keyed by
//! question follow the questionnaire.

use serde::{Deserialize, Serialize};

use super::responses::{Answer, ResponseSet};

/// Section grouping for the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SectionId {
    #[serde(rename = "BP")]
    BusinessProfile,
    #[serde(rename = "TI")]
    TechnologyInfrastructure,
    #[serde(rename = "PP")]
    BusinessProcesses,
    #[serde(rename = "BR")]
    BudgetResources,
    #[serde(rename = "AK")]
    AiKnowledge,
    #[serde(rename = "DC")]
    DataCompliance,
    #[serde(rename = "GT")]
    GoalsTimeline,
}

impl SectionId {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::BusinessProfile,
            Self::TechnologyInfrastructure,
            Self::BusinessProcesses,
            Self::BudgetResources,
            Self::AiKnowledge,
            Self::DataCompliance,
            Self::GoalsTimeline,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::BusinessProfile => "BP",
            Self::TechnologyInfrastructure => "TI",
            Self::BusinessProcesses => "PP",
            Self::BudgetResources => "BR",
            Self::AiKnowledge => "AK",
            Self::DataCompliance => "DC",
            Self::GoalsTimeline => "GT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessProfile => "Business Profile",
            Self::TechnologyInfrastructure => "Technology Infrastructure",
            Self::BusinessProcesses => "Business Processes",
            Self::BudgetResources => "Budget & Resources",
            Self::AiKnowledge => "AI Knowledge",
            Self::DataCompliance => "Data & Compliance",
            Self::GoalsTimeline => "Goals & Timeline",
        }
    }
}

macro_rules! question_ids {
    ($($variant:ident),+ $(,)?) => {
        /// Short question code, e.g. `BP02`.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum QuestionId {
            $($variant),+
        }

        impl QuestionId {
            pub const ALL: &'static [QuestionId] = &[$(QuestionId::$variant),+];

            pub const fn code(self) -> &'static str {
                match self {
                    $(QuestionId::$variant => stringify!($variant)),+
                }
            }

            pub fn parse(code: &str) -> Option<Self> {
                match code {
                    $(stringify!($variant) => Some(QuestionId::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

question_ids!(
    BP01, BP02, BP03, BP04, BP05, BP06, TI01, TI02, TI03, TI04, TI05, TI06, PP01, PP02, PP03,
    PP04, PP05, PP06, PP07, BR01, BR02, BR03, BR04, AK01, AK02, AK03, AK04, AK05, AK06, DC01,
    DC02, DC03, DC04, DC05, GT01, GT02, GT03, GT04, GT05,
);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Declared answer shape for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
    Dropdown,
    Scale,
    FreeText,
}

impl QuestionKind {
    /// Kinds whose answer is one label picked from `options`.
    pub const fn is_single_choice(self) -> bool {
        matches!(self, Self::SingleSelect | Self::Dropdown)
    }
}

/// Numeric scale bounds with the endpoint captions shown to respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSpec {
    pub min: u8,
    pub max: u8,
    pub min_label: &'static str,
    pub max_label: &'static str,
}

const fn scale(min_label: &'static str, max_label: &'static str) -> Option<ScaleSpec> {
    Some(ScaleSpec {
        min: 1,
        max: 5,
        min_label,
        max_label,
    })
}

/// Display rule: only active when `question` was answered with one of `show_when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub question: QuestionId,
    pub show_when: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub section: SectionId,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_on: Option<Condition>,
}

impl Question {
    const fn base(
        id: QuestionId,
        section: SectionId,
        text: &'static str,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id,
            section,
            text,
            kind,
            options: &[],
            required: true,
            max_selections: None,
            scale: None,
            conditional_on: None,
        }
    }

    const fn choice(
        id: QuestionId,
        section: SectionId,
        text: &'static str,
        kind: QuestionKind,
        options: &'static [&'static str],
    ) -> Self {
        let mut question = Self::base(id, section, text, kind);
        question.options = options;
        question
    }

    const fn rated(
        id: QuestionId,
        section: SectionId,
        text: &'static str,
        min_label: &'static str,
        max_label: &'static str,
    ) -> Self {
        let mut question = Self::base(id, section, text, QuestionKind::Scale);
        question.scale = scale(min_label, max_label);
        question
    }

    const fn written(id: QuestionId, section: SectionId, text: &'static str, required: bool) -> Self {
        let mut question = Self::base(id, section, text, QuestionKind::FreeText);
        question.required = required;
        question
    }

    const fn limited(mut self, max: u8) -> Self {
        self.max_selections = Some(max);
        self
    }

    const fn shown_when(mut self, question: QuestionId, show_when: &'static [&'static str]) -> Self {
        self.conditional_on = Some(Condition {
            question,
            show_when,
        });
        self
    }

    /// Whether the question is shown, collected, and scored for these responses.
    ///
    /// A conditional question stays active until its trigger question holds a single string
    /// outside the trigger set.
    pub fn is_active(&self, responses: &ResponseSet) -> bool {
        let Some(condition) = &self.conditional_on else {
            return true;
        };

        match responses.get(condition.question) {
            Some(Answer::Choice(value)) | Some(Answer::FreeText(value)) => {
                condition.show_when.contains(&value.as_str())
            }
            _ => true,
        }
    }
}

/// Named, ordered grouping of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub name: &'static str,
    pub description: &'static str,
    pub question_ids: &'static [QuestionId],
}

pub const HIGHLY_REGULATED: &str = "Yes - highly regulated (HIPAA, PCI, etc.)";

use QuestionId::*;
use QuestionKind::{Dropdown, MultiSelect, SingleSelect};
use SectionId::*;

static SECTIONS: [Section; 7] = [
    Section {
        id: BusinessProfile,
        name: "Business Profile",
        description: "Tell us about your business foundation and goals.",
        question_ids: &[BP01, BP02, BP03, BP04, BP05, BP06],
    },
    Section {
        id: TechnologyInfrastructure,
        name: "Technology Infrastructure",
        description: "Help us understand your current technology setup.",
        question_ids: &[TI01, TI02, TI03, TI04, TI05, TI06],
    },
    Section {
        id: BusinessProcesses,
        name: "Business Processes",
        description: "Tell us about your day-to-day operations and challenges.",
        question_ids: &[PP01, PP02, PP03, PP04, PP05, PP06, PP07],
    },
    Section {
        id: BudgetResources,
        name: "Budget & Resources",
        description: "Help us understand your technology investment capacity.",
        question_ids: &[BR01, BR02, BR03, BR04],
    },
    Section {
        id: AiKnowledge,
        name: "AI Knowledge",
        description: "Tell us about your AI experience and expectations.",
        question_ids: &[AK01, AK02, AK03, AK04, AK05, AK06],
    },
    Section {
        id: DataCompliance,
        name: "Data & Compliance",
        description: "Help us understand your data situation and any regulatory requirements.",
        question_ids: &[DC01, DC02, DC03, DC04, DC05],
    },
    Section {
        id: GoalsTimeline,
        name: "Goals & Timeline",
        description: "Share your vision for AI adoption.",
        question_ids: &[GT01, GT02, GT03, GT04, GT05],
    },
];

// Indexed by `QuestionId as usize`; `catalog_is_indexed_by_question_id` keeps them aligned.
static QUESTIONS: [Question; 39] = [
    Question::choice(
        BP01,
        BusinessProfile,
        "What industry are you in?",
        Dropdown,
        &[
            "Retail",
            "Healthcare",
            "Finance",
            "Manufacturing",
            "Professional Services",
            "Food & Hospitality",
            "Construction",
            "Technology",
            "Other",
        ],
    ),
    Question::choice(
        BP02,
        BusinessProfile,
        "How many employees do you have?",
        SingleSelect,
        &["1-5", "6-15", "16-50", "51-100", "100+"],
    ),
    Question::choice(
        BP03,
        BusinessProfile,
        "How long have you been running your business?",
        SingleSelect,
        &[
            "Less than 1 year",
            "1-3 years",
            "3-5 years",
            "5-10 years",
            "10+ years",
        ],
    ),
    Question::choice(
        BP04,
        BusinessProfile,
        "What is your approximate annual revenue?",
        SingleSelect,
        &[
            "Under $100K",
            "$100K-$500K",
            "$500K-$1M",
            "$1M-$5M",
            "$5M+",
            "Don't know/Prefer not to say",
        ],
    ),
    Question::written(
        BP05,
        BusinessProfile,
        "Please briefly describe your core business model and primary products/services.",
        true,
    ),
    Question::written(
        BP06,
        BusinessProfile,
        "Please briefly describe your business goals and objectives over the next 6, 12 & 18 months.",
        true,
    ),
    Question::choice(
        TI01,
        TechnologyInfrastructure,
        "How would you rate your current technology adoption?",
        SingleSelect,
        &[
            "Very Basic (paper/spreadsheets)",
            "Moderate (some cloud tools)",
            "Advanced (integrated systems)",
            "Cutting-edge",
            "Don't know",
        ],
    ),
    Question::choice(
        TI02,
        TechnologyInfrastructure,
        "Do you currently use any cloud-based software?",
        SingleSelect,
        &[
            "Yes - extensively",
            "Yes - somewhat",
            "No - but interested",
            "No - not interested",
        ],
    ),
    Question::choice(
        TI03,
        TechnologyInfrastructure,
        "What business software do you currently use?",
        MultiSelect,
        &[
            "CRM",
            "Accounting Software",
            "Project Management",
            "E-commerce Platform",
            "Marketing Automation",
            "Inventory Management",
            "HR/Payroll",
            "Other",
            "None",
        ],
    ),
    Question::choice(
        TI04,
        TechnologyInfrastructure,
        "How is your business & customer data currently stored?",
        SingleSelect,
        &[
            "Paper records",
            "Spreadsheets",
            "Basic database",
            "CRM system",
            "Multiple integrated systems",
            "Don't know",
        ],
    ),
    Question::rated(
        TI05,
        TechnologyInfrastructure,
        "How comfortable is your team with learning new software?",
        "Very resistant",
        "Eager adopters",
    ),
    Question::written(
        TI06,
        TechnologyInfrastructure,
        "Please describe any current technology frustrations or limitations causing bottlenecks.",
        false,
    ),
    Question::choice(
        PP01,
        BusinessProcesses,
        "Which types of tasks demand the most of your staff's time? (Select top 3)",
        MultiSelect,
        &[
            "Sales",
            "Customer inquiries",
            "Data entry",
            "Scheduling",
            "Invoicing/Billing",
            "Inventory tracking",
            "Report generation",
            "Email management",
            "Social media",
            "Lead follow-up",
            "Content creation",
            "Other",
        ],
    )
    .limited(3),
    Question::choice(
        PP02,
        BusinessProcesses,
        "How do you currently handle customer support?",
        SingleSelect,
        &[
            "Phone only",
            "Email only",
            "Phone + Email",
            "Chat widget",
            "Social media DMs",
            "Combination of multiple channels",
        ],
    ),
    Question::choice(
        PP03,
        BusinessProcesses,
        "What is your biggest operational challenge?",
        SingleSelect,
        &[
            "Finding/retaining talent",
            "Scaling operations",
            "Customer acquisition",
            "Cash flow management",
            "Time management",
            "Competition",
            "Other",
        ],
    ),
    Question::rated(
        PP04,
        BusinessProcesses,
        "How repetitive are your daily business tasks?",
        "Mostly unique work",
        "Highly repetitive",
    ),
    Question::rated(
        PP05,
        BusinessProcesses,
        "How much time does your team spend on manual data entry weekly?",
        "Minimal",
        "Significant",
    ),
    Question::written(
        PP06,
        BusinessProcesses,
        "What are your top 3 business challenges that you believe technology might help solve?",
        true,
    ),
    Question::written(
        PP07,
        BusinessProcesses,
        "Please describe a typical workflow or business process that feels inefficient.",
        false,
    ),
    Question::choice(
        BR01,
        BudgetResources,
        "What is your monthly budget for software/technology tools?",
        SingleSelect,
        &[
            "Under $100",
            "$100-$500",
            "$500-$1,000",
            "$1,000-$2,500",
            "$2,500+",
            "Don't know",
            "Don't have one",
        ],
    ),
    Question::choice(
        BR02,
        BudgetResources,
        "Do you have IT support available?",
        SingleSelect,
        &[
            "In-house IT staff",
            "Contracted IT support",
            "Tech-savvy employee handles it",
            "No dedicated IT support",
        ],
    ),
    Question::choice(
        BR03,
        BudgetResources,
        "How have you typically implemented new technology in the past?",
        SingleSelect,
        &[
            "Self-service/DIY",
            "Hire consultants",
            "Vendor-provided training",
            "Avoid new technology",
            "Never had to",
        ],
    ),
    Question::written(
        BR04,
        BudgetResources,
        "Are you actively budgeting for AI implementation initiatives over the next 12 months?",
        false,
    ),
    Question::choice(
        AK01,
        AiKnowledge,
        "How familiar are you and your team with AI tools like ChatGPT, Claude, AI Agents, Automation Software, etc.?",
        SingleSelect,
        &[
            "Never used them",
            "Experimented briefly",
            "Use occasionally",
            "Use regularly",
            "Power user",
        ],
    ),
    Question::choice(
        AK02,
        AiKnowledge,
        "Have you or your team used any AI-powered tools?",
        MultiSelect,
        &[
            "ChatGPT/Claude",
            "AI writing assistants",
            "AI image generators",
            "Chatbots",
            "Automated scheduling",
            "Predictive analytics",
            "None",
            "Other",
        ],
    ),
    Question::choice(
        AK03,
        AiKnowledge,
        "What is your primary goal for adopting AI?",
        SingleSelect,
        &[
            "Reduce costs",
            "Save time",
            "Improve customer experience",
            "Scale operations",
            "Stay competitive",
            "Explore possibilities",
        ],
    ),
    Question::choice(
        AK04,
        AiKnowledge,
        "What concerns do you have about adopting AI?",
        MultiSelect,
        &[
            "Cost",
            "Complexity",
            "Data privacy",
            "Job displacement",
            "Reliability",
            "Customer perception",
            "None",
            "Other",
        ],
    ),
    Question::rated(
        AK05,
        AiKnowledge,
        "How motivated are you as a business owner to implement AI?",
        "Very hesitant",
        "Very eager",
    ),
    Question::rated(
        AK06,
        AiKnowledge,
        "How supportive/receptive do you believe your staff will be to AI adoption?",
        "Resistant",
        "Enthusiastic",
    ),
    Question::choice(
        DC01,
        DataCompliance,
        "How would you describe the quality of your business data?",
        SingleSelect,
        &[
            "Scattered/inconsistent",
            "Somewhat organized",
            "Well-organized",
            "Highly structured and clean",
            "Don't know",
        ],
    ),
    Question::choice(
        DC02,
        DataCompliance,
        "Does your business handle sensitive customer data?",
        SingleSelect,
        &[
            HIGHLY_REGULATED,
            "Yes - standard PII",
            "Minimal customer data",
            "No sensitive data",
            "Not Sure",
        ],
    ),
    Question::choice(
        DC03,
        DataCompliance,
        "Are you subject to industry-specific regulations?",
        SingleSelect,
        &[
            "Yes - strict compliance requirements",
            "Yes - moderate requirements",
            "Minimal regulations",
            "Unsure",
        ],
    ),
    Question::choice(
        DC04,
        DataCompliance,
        "Do you have a data backup system in place?",
        SingleSelect,
        &[
            "Yes - automated cloud backup",
            "Yes - manual backups",
            "Partial backup system",
            "No backup system",
        ],
    ),
    Question::written(
        DC05,
        DataCompliance,
        "Describe any compliance or data security concerns specific to your industry.",
        false,
    )
    .shown_when(DC02, &[HIGHLY_REGULATED]),
    Question::choice(
        GT01,
        GoalsTimeline,
        "When would you ideally like to start implementing AI tools?",
        SingleSelect,
        &[
            "Immediately",
            "Within 3 months",
            "Within 6 months",
            "Within 1 year",
            "No specific timeline",
        ],
    ),
    Question::choice(
        GT02,
        GoalsTimeline,
        "What level of involvement do you want in the implementation process?",
        SingleSelect,
        &[
            "Hands-on (DIY)",
            "Guided with support",
            "Fully managed by experts",
            "Minimal involvement",
        ],
    ),
    Question::choice(
        GT03,
        GoalsTimeline,
        "How would you measure AI implementation success?",
        MultiSelect,
        &[
            "Time saved",
            "Cost reduction",
            "Revenue increase",
            "Customer satisfaction",
            "Employee productivity",
            "All of the above",
        ],
    ),
    Question::written(
        GT04,
        GoalsTimeline,
        "What does successful AI adoption look like for your business in 1 year?",
        true,
    ),
    Question::written(
        GT05,
        GoalsTimeline,
        "Is there anything else about your business situation we should know?",
        false,
    ),
];

pub fn sections() -> &'static [Section] {
    &SECTIONS
}

pub fn section(id: SectionId) -> &'static Section {
    &SECTIONS[id as usize]
}

pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id as usize]
}

pub fn questions_for_section(id: SectionId) -> impl Iterator<Item = &'static Question> {
    section(id).question_ids.iter().map(|qid| question(*qid))
}

pub fn questions_in_order() -> impl Iterator<Item = &'static Question> {
    SECTIONS
        .iter()
        .flat_map(|section| section.question_ids.iter().map(|qid| question(*qid)))
}

pub fn total_question_count() -> usize {
    QUESTIONS.len()
}

/// Questions that are currently shown for the given answers, in display order.
pub fn active_questions(responses: &ResponseSet) -> impl Iterator<Item = &'static Question> + '_ {
    questions_in_order().filter(move |question| question.is_active(responses))
}

/// First active question still lacking an answer.
pub fn next_question(responses: &ResponseSet) -> Option<&'static Question> {
    active_questions(responses).find(|question| !responses.contains(question.id))
}

/// Active required questions that have not been answered yet.
pub fn missing_required(responses: &ResponseSet) -> Vec<QuestionId> {
    active_questions(responses)
        .filter(|question| question.required && !responses.contains(question.id))
        .map(|question| question.id)
        .collect()
}

pub fn is_complete(responses: &ResponseSet) -> bool {
    missing_required(responses).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_question_id() {
        for (index, id) in QuestionId::ALL.iter().enumerate() {
            assert_eq!(QUESTIONS[index].id, *id, "catalog slot {index} out of order");
            assert_eq!(question(*id).id, *id);
        }
        assert_eq!(QuestionId::ALL.len(), total_question_count());
    }

    #[test]
    fn sections_cover_every_question_once_in_order() {
        let ordered: Vec<QuestionId> = questions_in_order().map(|question| question.id).collect();
        assert_eq!(ordered, QuestionId::ALL.to_vec());

        for (index, id) in SectionId::ordered().iter().enumerate() {
            assert_eq!(sections()[index].id, *id);
            assert_eq!(section(*id).name, id.label());
            assert!(questions_for_section(*id).all(|question| question.section == *id));
        }
    }

    #[test]
    fn question_codes_round_trip() {
        assert_eq!(QuestionId::parse("BP02"), Some(QuestionId::BP02));
        assert_eq!(QuestionId::BP02.code(), "BP02");
        assert_eq!(QuestionId::parse("bp02"), None);
        assert_eq!(QuestionId::parse("ZZ99"), None);
    }

    #[test]
    fn only_task_question_limits_selections() {
        let limited: Vec<QuestionId> = questions_in_order()
            .filter(|question| question.max_selections.is_some())
            .map(|question| question.id)
            .collect();
        assert_eq!(limited, vec![QuestionId::PP01]);
        assert_eq!(question(QuestionId::PP01).max_selections, Some(3));
    }

    #[test]
    fn compliance_follow_up_depends_on_sensitive_data_answer() {
        let follow_up = question(QuestionId::DC05);
        let mut responses = ResponseSet::default();
        assert!(follow_up.is_active(&responses));

        responses.record(QuestionId::DC02, Answer::Choice("Yes - standard PII".to_string()));
        assert!(!follow_up.is_active(&responses));

        responses.record(QuestionId::DC02, Answer::Choice(HIGHLY_REGULATED.to_string()));
        assert!(follow_up.is_active(&responses));
    }

    #[test]
    fn progress_tracks_required_active_questions() {
        let mut responses = ResponseSet::default();
        assert_eq!(next_question(&responses).map(|q| q.id), Some(QuestionId::BP01));
        assert!(!is_complete(&responses));

        for question in questions_in_order() {
            if !question.required {
                continue;
            }
            let answer = match question.kind {
                QuestionKind::Scale => Answer::Scale(3),
                QuestionKind::MultiSelect => Answer::Selections(vec![question.options[0].to_string()]),
                QuestionKind::FreeText => Answer::FreeText("answered".to_string()),
                _ => Answer::Choice(question.options[0].to_string()),
            };
            responses.record(question.id, answer);
        }

        assert!(is_complete(&responses));
        assert_eq!(next_question(&responses).map(|q| q.id), Some(QuestionId::TI06));
    }
}
