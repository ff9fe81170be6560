use ai_readiness::assessment::{
    assemble_payload, catalog, AssessmentPayload, LeadData, ResponseImportError, ResponseSet,
    ScoringEngine, ScoringResult, SubmissionMetadata,
};
use ai_readiness::error::AppError;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Response export to score (.json object keyed by question code, or question_id,answer .csv)
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Print the scoring result as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full report payload as JSON after the summary
    #[arg(long)]
    pub(crate) payload: bool,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let responses = load_responses(&args.responses)?;
    let result = ScoringEngine::new().score(&responses);

    if args.json {
        println!("{}", render_json(&result)?);
        return Ok(());
    }

    println!("AI readiness report for {}", args.responses.display());
    render_completion(&responses);
    render_scoring(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let responses = sample_responses()?;
    let lead = sample_lead();
    let metadata = SubmissionMetadata {
        session_id: "demo-session".to_string(),
        user_agent: "ai-readiness-api demo".to_string(),
        completion_time_seconds: 540,
        ..SubmissionMetadata::at(Utc::now())
    };

    let scoring = ScoringEngine::new().score(&responses);
    let payload = assemble_payload(&responses, &lead, &metadata, scoring);

    println!("AI readiness assessment demo");
    println!(
        "Lead: {} {} <{}> | {}",
        lead.first_name, lead.last_name, lead.email, lead.business_name
    );
    render_completion(&responses);
    render_scoring(&payload.scoring);
    render_payload_summary(&payload);

    if args.payload {
        println!("\n{}", render_json(&payload)?);
    }

    Ok(())
}

fn render_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::Io(std::io::Error::other(err)))
}

fn load_responses(path: &Path) -> Result<ResponseSet, AppError> {
    let reader = BufReader::new(File::open(path)?);
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let responses = if is_csv {
        ResponseSet::from_csv_reader(reader)?
    } else {
        serde_json::from_reader(reader).map_err(ResponseImportError::from)?
    };
    Ok(responses)
}

fn render_completion(responses: &ResponseSet) {
    let missing = catalog::missing_required(responses);
    println!(
        "Answered {} of {} questions",
        responses.len(),
        catalog::total_question_count()
    );
    if !missing.is_empty() {
        let codes: Vec<&str> = missing.iter().map(|id| id.code()).collect();
        println!("Missing required answers: {}", codes.join(", "));
    }
}

fn render_scoring(result: &ScoringResult) {
    let level = result.readiness_level;
    println!(
        "\nOverall score: {} / 100 {} {} (tier {})",
        result.overall_score,
        level.badge,
        level.level.label(),
        level.tier
    );
    println!("{}", level.description);

    println!("\nDimensions:");
    for (dimension, score) in result.dimensions.iter() {
        println!(
            "  - {:<26} {:>5.2} / {:<2} -> {:>3} (weight {}%)",
            dimension.label(),
            score.score,
            score.max_points,
            score.normalized,
            score.weight
        );
    }

    if result.validation_flags.is_empty() {
        println!("\nNo validation flags raised.");
        return;
    }

    println!("\nValidation flags:");
    for flag in &result.validation_flags {
        println!("  - {:?} [{:?}] {}", flag.flag, flag.severity, flag.message);
        if let Some(phase) = flag.adjustment.add_phase {
            let duration = flag.adjustment.phase_duration.unwrap_or("duration tbd");
            println!("      add phase: {phase} ({duration})");
        }
        for action in flag
            .adjustment
            .recommended_actions
            .or(flag.adjustment.recommended_first_steps)
            .unwrap_or_default()
        {
            println!("      * {action}");
        }
    }
}

fn render_payload_summary(payload: &AssessmentPayload) {
    println!("\nReport payload");
    println!(
        "- version {} | source {} | submitted {}",
        payload.meta.assessment_version,
        payload.meta.source,
        payload.meta.submitted_at.to_rfc3339()
    );
    println!(
        "- {} answered questions | {} free-text answers for AI analysis",
        payload.complete_questions_and_answers.len(),
        payload.free_text_for_ai_analysis.len()
    );
    if let Some(concerns) = &payload.current_state.compliance_concerns {
        println!("- compliance concerns: {concerns}");
    }
}

fn sample_lead() -> LeadData {
    LeadData {
        first_name: "Morgan".to_string(),
        last_name: "Reyes".to_string(),
        email: "morgan@brightpathdental.example".to_string(),
        phone: "555-0117".to_string(),
        business_name: "Brightpath Dental Group".to_string(),
        website_url: Some("https://brightpathdental.example".to_string()),
        consultation_requested: true,
    }
}

fn sample_responses() -> Result<ResponseSet, AppError> {
    let value = json!({
        "BP01": "Healthcare",
        "BP02": "16-50",
        "BP03": "5-10 years",
        "BP04": "$1M-$5M",
        "BP05": "Three dental offices sharing one front-desk team.",
        "BP06": "Open a fourth office without adding admin headcount.",
        "TI01": "Moderate (some cloud tools)",
        "TI02": "Yes - somewhat",
        "TI03": ["CRM", "Accounting Software", "Project Management", "HR/Payroll"],
        "TI04": "Multiple integrated systems",
        "TI05": 3,
        "TI06": "Insurance portals do not talk to our practice software.",
        "PP01": ["Data entry", "Scheduling", "Customer inquiries"],
        "PP02": "Phone + Email",
        "PP03": "Time management",
        "PP04": 4,
        "PP05": 4,
        "BR01": "$1,000-$2,500",
        "BR02": "Contracted IT support",
        "BR03": "Vendor-provided training",
        "BR04": "We could fund a pilot from the marketing budget.",
        "AK01": "Experimented briefly",
        "AK02": ["ChatGPT/Claude"],
        "AK03": "Save time",
        "AK04": ["Data privacy"],
        "AK05": 5,
        "AK06": 3,
        "DC01": "Well-organized",
        "DC02": "Yes - highly regulated (HIPAA, PCI, etc.)",
        "DC03": "Yes - strict compliance requirements",
        "DC04": "Yes - automated cloud backup",
        "DC05": "Patient records must stay inside HIPAA-covered systems.",
        "GT01": "Within 6 months",
        "GT02": "Guided with support",
        "GT03": ["Time saved", "Customer satisfaction"],
        "GT04": "Front desk handles check-in only; reminders and insurance checks run automatically."
    });
    serde_json::from_value(value).map_err(|err| AppError::Import(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_readiness::assessment::FlagKind;
    use std::io::Write;

    #[test]
    fn sample_profile_raises_compliance_first() {
        let responses = sample_responses().expect("sample parses");
        let result = ScoringEngine::new().score(&responses);
        assert!(result.has_flag(FlagKind::ComplianceFirst));
        assert!(result.overall_score > 0);
    }

    #[test]
    fn loads_csv_and_json_exports() {
        let dir = std::env::temp_dir();
        let csv_path = dir.join("ai-readiness-demo-responses.csv");
        let json_path = dir.join("ai-readiness-demo-responses.json");

        let mut csv = File::create(&csv_path).expect("create csv");
        writeln!(csv, "question_id,answer\nBP02,6-15\nTI05,4").expect("write csv");
        let mut json = File::create(&json_path).expect("create json");
        write!(json, "{}", r#"{"BP02":"6-15","TI05":4}"#).expect("write json");

        let from_csv = load_responses(&csv_path).expect("csv loads");
        let from_json = load_responses(&json_path).expect("json loads");
        assert!(from_csv.iter().eq(from_json.iter()));
        assert_eq!(from_csv.raw()["TI05"], "4");
        assert_eq!(from_json.raw()["TI05"], 4);

        std::fs::remove_file(csv_path).ok();
        std::fs::remove_file(json_path).ok();
    }

    #[test]
    fn report_rendering_failures_are_io_errors() {
        let unrenderable: std::collections::BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into();
        let error = render_json(&unrenderable).expect_err("tuple keys are not JSON");
        assert!(matches!(error, AppError::Io(_)));

        let rendered = render_json(&json!({ "overallScore": 71 })).expect("renders");
        assert!(rendered.contains("\"overallScore\": 71"));
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let error = load_responses(Path::new("/nonexistent/responses.json"))
            .expect_err("missing file");
        assert!(matches!(error, AppError::Io(_)));
    }
}
