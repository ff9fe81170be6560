//! Answer-label point tables. Each default is the neutral response used for anything unlisted.

pub(crate) struct LookupTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

impl LookupTable {
    pub(crate) fn points(&self, answer: Option<&str>) -> f64 {
        answer
            .and_then(|label| {
                self.entries
                    .iter()
                    .find(|(candidate, _)| *candidate == label)
                    .map(|(_, points)| *points)
            })
            .unwrap_or(self.default)
    }

    #[cfg(test)]
    pub(crate) fn max(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, points)| *points)
            .fold(self.default, f64::max)
    }
}

pub(crate) const EMPLOYEE_VOLUME: LookupTable = LookupTable {
    entries: &[
        ("1-5", 1.0),
        ("6-15", 1.5),
        ("16-50", 2.0),
        ("51-100", 2.5),
        ("100+", 3.0),
    ],
    default: 1.5,
};

pub(crate) const YEARS_VOLUME: LookupTable = LookupTable {
    entries: &[
        ("Less than 1 year", 0.5),
        ("1-3 years", 1.0),
        ("3-5 years", 1.5),
        ("5-10 years", 2.0),
        ("10+ years", 2.5),
    ],
    default: 1.0,
};

// Bell curve: mid-sized teams adapt fastest.
pub(crate) const TEAM_SIZE: LookupTable = LookupTable {
    entries: &[
        ("1-5", 2.0),
        ("6-15", 3.0),
        ("16-50", 3.0),
        ("51-100", 2.5),
        ("100+", 2.0),
    ],
    default: 2.5,
};

pub(crate) const REVENUE: LookupTable = LookupTable {
    entries: &[
        ("Under $100K", 1.0),
        ("$100K-$500K", 2.0),
        ("$500K-$1M", 2.5),
        ("$1M-$5M", 3.0),
        ("$5M+", 3.0),
        ("Don't know/Prefer not to say", 2.0),
    ],
    default: 2.0,
};

pub(crate) const TECH_ADOPTION: LookupTable = LookupTable {
    entries: &[
        ("Very Basic (paper/spreadsheets)", 1.0),
        ("Moderate (some cloud tools)", 2.5),
        ("Advanced (integrated systems)", 4.0),
        ("Cutting-edge", 5.0),
        ("Don't know", 2.0),
    ],
    default: 2.0,
};

pub(crate) const CLOUD_USAGE: LookupTable = LookupTable {
    entries: &[
        ("No - not interested", 1.0),
        ("No - but interested", 1.5),
        ("Yes - somewhat", 3.0),
        ("Yes - extensively", 4.0),
    ],
    default: 2.0,
};

pub(crate) const DATA_STORAGE: LookupTable = LookupTable {
    entries: &[
        ("Paper records", 1.0),
        ("Spreadsheets", 1.5),
        ("Basic database", 2.5),
        ("CRM system", 3.5),
        ("Multiple integrated systems", 4.0),
        ("Don't know", 2.0),
    ],
    default: 2.0,
};

pub(crate) const CUSTOMER_SUPPORT: LookupTable = LookupTable {
    entries: &[
        ("Phone only", 1.0),
        ("Email only", 2.0),
        ("Phone + Email", 3.0),
        ("Chat widget", 4.0),
        ("Social media DMs", 3.0),
        ("Combination of multiple channels", 5.0),
    ],
    default: 3.0,
};

pub(crate) const MONTHLY_BUDGET: LookupTable = LookupTable {
    entries: &[
        ("Under $100", 1.0),
        ("$100-$500", 2.0),
        ("$500-$1,000", 3.0),
        ("$1,000-$2,500", 4.0),
        ("$2,500+", 5.0),
        ("Don't know", 2.5),
        ("Don't have one", 1.5),
    ],
    default: 2.0,
};

pub(crate) const IT_SUPPORT: LookupTable = LookupTable {
    entries: &[
        ("No dedicated IT support", 1.0),
        ("Tech-savvy employee handles it", 2.0),
        ("Contracted IT support", 3.0),
        ("In-house IT staff", 4.0),
    ],
    default: 2.0,
};

pub(crate) const IMPLEMENTATION_APPROACH: LookupTable = LookupTable {
    entries: &[
        ("Avoid new technology", 1.0),
        ("Never had to", 1.5),
        ("Self-service/DIY", 2.0),
        ("Vendor-provided training", 3.0),
        ("Hire consultants", 3.0),
    ],
    default: 2.0,
};

pub(crate) const AI_FAMILIARITY: LookupTable = LookupTable {
    entries: &[
        ("Never used them", 1.0),
        ("Experimented briefly", 1.5),
        ("Use occasionally", 2.5),
        ("Use regularly", 3.5),
        ("Power user", 4.0),
    ],
    default: 2.0,
};

pub(crate) const DATA_QUALITY: LookupTable = LookupTable {
    entries: &[
        ("Scattered/inconsistent", 1.0),
        ("Somewhat organized", 2.0),
        ("Well-organized", 4.0),
        ("Highly structured and clean", 5.0),
        ("Don't know", 2.0),
    ],
    default: 2.0,
};

pub(crate) const COMPLIANCE_AWARENESS: LookupTable = LookupTable {
    entries: &[
        ("Unsure", 1.0),
        ("Minimal regulations", 1.5),
        ("Yes - moderate requirements", 1.75),
        ("Yes - strict compliance requirements", 2.0),
    ],
    default: 1.5,
};

pub(crate) const BACKUP_MATURITY: LookupTable = LookupTable {
    entries: &[
        ("No backup system", 1.0),
        ("Partial backup system", 1.5),
        ("Yes - manual backups", 2.5),
        ("Yes - automated cloud backup", 3.0),
    ],
    default: 1.5,
};

pub(crate) const TIMELINE: LookupTable = LookupTable {
    entries: &[
        ("No specific timeline", 1.0),
        ("Within 1 year", 1.5),
        ("Within 6 months", 2.0),
        ("Within 3 months", 2.5),
        ("Immediately", 3.0),
    ],
    default: 1.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_answers_fall_back_to_defaults() {
        assert_eq!(MONTHLY_BUDGET.points(None), 2.0);
        assert_eq!(MONTHLY_BUDGET.points(Some("a lot")), 2.0);
        assert_eq!(MONTHLY_BUDGET.points(Some("$2,500+")), 5.0);
        assert_eq!(CUSTOMER_SUPPORT.points(Some("")), 3.0);
        assert_eq!(COMPLIANCE_AWARENESS.points(Some("Yes - moderate requirements")), 1.75);
    }

    #[test]
    fn labels_match_exactly() {
        assert_eq!(TIMELINE.points(Some("immediately")), TIMELINE.points(None));
        assert_eq!(TIMELINE.points(Some("Immediately")), 3.0);
    }

    #[test]
    fn volume_sources_top_out_at_five_and_a_half() {
        assert_eq!(EMPLOYEE_VOLUME.max() + YEARS_VOLUME.max(), 5.5);
    }
}
