//! Lemma-set overlap matcher.
//!
//! Both texts are lowercased, analysed by the shared language model, and
//! reduced to the lemmas of alphabetic non-stop tokens. The score is the
//! share of distinct job lemmas that also occur in the resume:
//!
//! `score = round(100 × |resume ∩ job| / |job|, 2)`, or `0.0` for an empty job set.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::language::LanguageModel;

/// Score plus the terms both sides share. `matched_skills` is sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: Vec<String>,
}

/// Filtered lemmas of one text: in order (duplicates kept) and as a set.
#[derive(Debug, Clone, Default)]
pub struct TermProfile {
    pub terms: Vec<String>,
    pub set: BTreeSet<String>,
}

impl TermProfile {
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[derive(Clone)]
pub struct Matcher {
    model: Arc<dyn LanguageModel>,
}

impl Matcher {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn profile(&self, text: &str) -> TermProfile {
        let terms: Vec<String> = self
            .model
            .analyze(&text.to_lowercase())
            .into_iter()
            .filter(|t| t.is_alpha && !t.is_stop)
            .map(|t| t.lemma)
            .collect();
        let set = terms.iter().cloned().collect();
        TermProfile { terms, set }
    }

    /// Score only. Uploads go through `report`.
    #[cfg(test)]
    pub fn match_texts(&self, resume_text: &str, job_text: &str) -> MatchResult {
        score_profiles(&self.profile(resume_text), &self.profile(job_text))
    }
}

pub fn score_profiles(resume: &TermProfile, job: &TermProfile) -> MatchResult {
    let matched: Vec<String> = resume.set.intersection(&job.set).cloned().collect();
    let score = if job.is_empty() {
        0.0
    } else {
        round2(100.0 * matched.len() as f64 / job.set.len() as f64)
    };
    MatchResult {
        score,
        matched_skills: matched,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
