use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ReadinessTier {
    #[serde(rename = "Foundation Building")]
    FoundationBuilding,
    #[serde(rename = "Early Stage")]
    EarlyStage,
    Developing,
    Ready,
    Advanced,
}

impl ReadinessTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoundationBuilding => "Foundation Building",
            Self::EarlyStage => "Early Stage",
            Self::Developing => "Developing",
            Self::Ready => "Ready",
            Self::Advanced => "Advanced",
        }
    }
}

/// Tier descriptor with the inclusive score band it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessLevel {
    pub level: ReadinessTier,
    pub badge: &'static str,
    pub color: &'static str,
    pub tier: u8,
    pub min_score: u8,
    pub max_score: u8,
    pub description: &'static str,
}

pub static READINESS_LEVELS: [ReadinessLevel; 5] = [
    ReadinessLevel {
        level: ReadinessTier::FoundationBuilding,
        badge: "🔴",
        color: "red",
        tier: 1,
        min_score: 0,
        max_score: 25,
        description: "Building the foundation for AI adoption. Focus on basic technology infrastructure and data organization.",
    },
    ReadinessLevel {
        level: ReadinessTier::EarlyStage,
        badge: "🟠",
        color: "orange",
        tier: 2,
        min_score: 26,
        max_score: 45,
        description: "Early stages of AI readiness. Ready for initial automation and cloud tool adoption.",
    },
    ReadinessLevel {
        level: ReadinessTier::Developing,
        badge: "🟡",
        color: "yellow",
        tier: 3,
        min_score: 46,
        max_score: 65,
        description: "Developing AI capabilities. Ready for targeted AI implementations with guidance.",
    },
    ReadinessLevel {
        level: ReadinessTier::Ready,
        badge: "🟢",
        color: "green",
        tier: 4,
        min_score: 66,
        max_score: 80,
        description: "Ready for AI adoption. Well-positioned for comprehensive AI implementation.",
    },
    ReadinessLevel {
        level: ReadinessTier::Advanced,
        badge: "🌟",
        color: "gold",
        tier: 5,
        min_score: 81,
        max_score: 100,
        description: "Advanced readiness. Prepared for sophisticated AI solutions and innovation.",
    },
];

impl ReadinessLevel {
    /// Band containing `score`; anything outside 0-100 falls back to the lowest tier.
    pub fn for_score(score: i64) -> &'static ReadinessLevel {
        READINESS_LEVELS
            .iter()
            .find(|level| {
                score >= i64::from(level.min_score) && score <= i64::from(level.max_score)
            })
            .unwrap_or(&READINESS_LEVELS[0])
    }
}
