//! Upload response — the match result plus derived presentation fields.
//!
//! `missing_skills`, `keyword_density` and `recommendations` are computed
//! from the same term profiles and never feed back into the score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::matcher::{score_profiles, Matcher, TermProfile};

const MAX_LISTED_GAPS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Occurrences in the resume of each matched term.
    pub keyword_density: BTreeMap<String, usize>,
    pub recommendations: Vec<String>,
}

impl Matcher {
    pub fn report(&self, resume_text: &str, job_text: &str) -> MatchReport {
        let resume_has_text = !resume_text.trim().is_empty();
        build_report(
            &self.profile(resume_text),
            &self.profile(job_text),
            resume_has_text,
        )
    }
}

/// `resume_has_text` is false when extraction produced only whitespace.
pub fn build_report(
    resume: &TermProfile,
    job: &TermProfile,
    resume_has_text: bool,
) -> MatchReport {
    let result = score_profiles(resume, job);
    let missing_skills: Vec<String> = job.set.difference(&resume.set).cloned().collect();

    let mut keyword_density = BTreeMap::new();
    for term in &resume.terms {
        if job.set.contains(term) {
            *keyword_density.entry(term.clone()).or_insert(0) += 1;
        }
    }

    let recommendations =
        build_recommendations(result.score, resume_has_text, job, &missing_skills);

    MatchReport {
        score: result.score,
        matched_skills: result.matched_skills,
        missing_skills,
        keyword_density,
        recommendations,
    }
}

fn build_recommendations(
    score: f64,
    resume_has_text: bool,
    job: &TermProfile,
    missing: &[String],
) -> Vec<String> {
    if job.is_empty() {
        return vec![
            "Add a job description with concrete skills to compare the resume against."
                .to_string(),
        ];
    }
    if !resume_has_text {
        return vec![
            "No text could be read from the resume. Upload a text-based PDF or DOCX file."
                .to_string(),
        ];
    }

    let top_gaps = missing
        .iter()
        .take(MAX_LISTED_GAPS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if score >= 80.0 {
        vec!["Strong match. The resume covers most of the job description's terms.".to_string()]
    } else if score >= 60.0 {
        vec![format!(
            "Moderate match ({score}%). Consider highlighting experience with: {top_gaps}."
        )]
    } else {
        vec![
            format!("Low match ({score}%). Key terms missing from the resume: {top_gaps}."),
            "Mirror the job description's wording where it reflects real experience."
                .to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::EnglishModel;
    use std::sync::Arc;

    fn matcher() -> Matcher {
        Matcher::new(Arc::new(EnglishModel::default()))
    }

    #[test]
    fn test_report_carries_match_result() {
        let report = matcher().report(
            "Experienced Python developer with SQL skills",
            "Looking for Python and Java developer",
        );
        assert_eq!(report.score, 50.0);
        assert_eq!(report.matched_skills, vec!["developer", "python"]);
        assert_eq!(report.missing_skills, vec!["java", "look"]);
    }

    #[test]
    fn test_keyword_density_counts_resume_occurrences() {
        let report = matcher().report(
            "Rust services. More Rust tooling. Python scripts.",
            "Rust and Python",
        );
        assert_eq!(report.keyword_density.get("rust"), Some(&2));
        assert_eq!(report.keyword_density.get("python"), Some(&1));
        assert!(!report.keyword_density.contains_key("tooling"));
    }

    #[test]
    fn test_strong_match_recommendation() {
        let report = matcher().report("rust kafka", "rust kafka");
        assert_eq!(report.score, 100.0);
        assert!(report.recommendations[0].starts_with("Strong match"));
    }

    #[test]
    fn test_moderate_match_lists_gaps() {
        // 2 of 3
        let report = matcher().report("rust kafka", "rust kafka terraform");
        assert_eq!(report.score, 66.67);
        assert!(report.recommendations[0].contains("terraform"));
        assert!(report.recommendations[0].contains("66.67"));
    }

    #[test]
    fn test_low_match_lists_gaps() {
        let report = matcher().report("java", "rust kafka terraform");
        assert_eq!(report.score, 0.0);
        assert!(report.recommendations[0].starts_with("Low match"));
        assert!(report.recommendations[0].contains("kafka, rust, terraform"));
    }

    #[test]
    fn test_empty_job_recommendation() {
        let report = matcher().report("rust", "");
        assert_eq!(report.score, 0.0);
        assert!(report.missing_skills.is_empty());
        assert!(report.recommendations[0].contains("job description"));
    }

    #[test]
    fn test_empty_resume_recommendation() {
        let report = matcher().report("", "rust");
        assert!(report.recommendations[0].contains("No text could be read"));
    }

    #[test]
    fn test_blank_extracted_text_recommendation() {
        let report = matcher().report("  \n\n ", "rust");
        assert!(report.recommendations[0].contains("No text could be read"));
    }

    #[test]
    fn test_stop_word_only_resume_gets_gap_recommendation() {
        let report = matcher().report("the and with", "rust kafka");
        assert_eq!(report.score, 0.0);
        assert!(report.recommendations[0].starts_with("Low match"));
        assert!(report.recommendations[0].contains("kafka, rust"));
    }

    #[test]
    fn test_serializes_contract_fields() {
        let report = matcher().report("python", "python");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 100.0);
        assert_eq!(json["matched_skills"][0], "python");
        assert!(json["missing_skills"].as_array().unwrap().is_empty());
    }
}
