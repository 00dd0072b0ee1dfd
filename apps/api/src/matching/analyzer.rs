//! Match orchestrator — sequences the full resume/job analysis pipeline.
//!
//! One linear pipeline per request: extract requirements → unify resume →
//! build criteria → evaluate criteria (concurrent fan-out) → aggregate →
//! match reasons → website → red flags. Any fatal stage failure surfaces
//! once, as `AppError::Analysis`; no partial result is ever returned.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::{ModelClient, RunOptions};
use crate::matching::criteria::{aggregate_score, build_criteria, ScoringCriterion};
use crate::matching::evaluator::evaluate_criterion;
use crate::matching::prompts::MATCH_REASONS_TEMPLATE;
use crate::matching::red_flags::{classify_red_flags, RedFlags};
use crate::matching::requirements::extract_requirements;
use crate::matching::resume::{extract_website, unify_resume};

/// Terminal result of one match. Immutable once built; not persisted by the
/// pipeline (the cache is keyed on prompts, not results).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedMatchResult {
    pub overall_score: u32,
    pub criteria_scores: Vec<ScoringCriterion>,
    pub match_reasons: String,
    pub red_flags: RedFlags,
    pub website: Option<String>,
}

#[derive(Clone)]
pub struct Analyzer {
    client: ModelClient,
}

impl Analyzer {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }

    /// Runs the complete analysis workflow.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<DetailedMatchResult, AppError> {
        self.run_pipeline(resume_text, job_description)
            .await
            .map_err(|e| {
                error!("error during analysis: {e}");
                AppError::Analysis(e.to_string())
            })
    }

    async fn run_pipeline(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<DetailedMatchResult, AppError> {
        let started = Instant::now();

        info!("extracting job requirements");
        let requirements = extract_requirements(job_description, &self.client).await?;

        info!("unifying resume format");
        let unified_resume = unify_resume(resume_text, &self.client).await?;

        let mut criteria = build_criteria(&requirements);

        // Evaluations are mutually independent; fan out and reassemble by
        // position (criteria keep their fixed creation order).
        info!("evaluating {} criteria", criteria.len());
        let scores = futures::future::join_all(criteria.iter().map(|criterion| {
            evaluate_criterion(criterion, &unified_resume, &requirements, &self.client)
        }))
        .await;
        for (criterion, score) in criteria.iter_mut().zip(scores) {
            criterion.score = Some(score);
        }

        let overall_score = aggregate_score(&criteria);

        info!("generating match reasons");
        let score_summary = criteria
            .iter()
            .map(|c| format!("{}: {}", c.name, c.score.unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(", ");
        let reasons_prompt = MATCH_REASONS_TEMPLATE
            .replace("{criteria_scores}", &score_summary)
            .replace("{resume_text}", &unified_resume)
            .replace("{job_description}", job_description);
        let match_reasons = self
            .client
            .run_text(&reasons_prompt, RunOptions::default())
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?
            .trim()
            .to_string();

        let website = extract_website(&unified_resume, &self.client)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        let red_flags = classify_red_flags(&criteria);

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            overall_score, "analysis complete"
        );

        Ok(DetailedMatchResult {
            overall_score,
            criteria_scores: criteria,
            match_reasons,
            red_flags,
            website,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::{client_with_backend, ScriptedBackend};
    use crate::matching::red_flags::Severity;

    const REQUIREMENTS_JSON: &str = r#"{
        "required_experience_years": 5,
        "required_education_level": "Bachelor's degree",
        "required_skills": ["Rust", "PostgreSQL"],
        "optional_skills": ["Kubernetes"],
        "certifications_preferred": [],
        "soft_skills": ["Communication"],
        "keywords_to_match": ["backend"],
        "location": {"country": "Germany", "city": "Berlin"},
        "emphasis": {
            "technical_skills_weight": 50,
            "soft_skills_weight": 20,
            "experience_weight": 20,
            "education_weight": 10,
            "language_proficiency_weight": 5,
            "certifications_weight": 5
        }
    }"#;

    /// Scripted responses for every stage of the pipeline, keyed off
    /// distinctive prompt fragments.
    fn pipeline_script(prompt: &str) -> String {
        if prompt.contains("Extract the key requirements") {
            return REQUIREMENTS_JSON.to_string();
        }
        if prompt.contains("Resume Object Model Definition") {
            return "# Jane Doe\n## Backend Engineer\njane@example.com".to_string();
        }
        if prompt.contains("Extract the candidate's professional website URL") {
            return "https://jane.dev".to_string();
        }
        if prompt.contains("Provide key reasons for the match") {
            return "## Match Reasons\nStrong Rust background.\n".to_string();
        }
        // criterion evaluation prompts
        for (name, score) in [
            ("\"Language Proficiency\"", "85"),
            ("\"Education Level\"", "75"),
            ("\"Experience\"", "90"),
            ("\"Technical Skills\"", "80"),
            ("\"Certifications\"", "70"),
            ("\"Soft Skills\"", "65"),
        ] {
            if prompt.contains(name) {
                return score.to_string();
            }
        }
        panic!("unexpected prompt: {}", &prompt[..prompt.len().min(120)]);
    }

    #[tokio::test]
    async fn full_pipeline_produces_a_complete_result() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(ScriptedBackend::new(pipeline_script));
        let analyzer = Analyzer::new(client_with_backend(backend, dir.path()));

        let result = analyzer
            .analyze("raw resume text", "job description text")
            .await
            .unwrap();

        // six criteria in fixed creation order
        let keys: Vec<&str> = result
            .criteria_scores
            .iter()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(
            keys,
            vec![
                "language_proficiency",
                "education_level",
                "experience",
                "technical_skills",
                "certifications",
                "soft_skills",
            ]
        );

        // scores assigned per criterion
        let scores: Vec<u32> = result
            .criteria_scores
            .iter()
            .map(|c| c.score.unwrap())
            .collect();
        assert_eq!(scores, vec![85, 75, 90, 80, 70, 65]);

        // (85*5 + 75*10 + 90*20 + 80*50 + 70*5 + 65*20) / 110 = 8625/110 = 78
        assert_eq!(result.overall_score, 78);

        // all three red-flag keys present; only soft skills (65, weight 20)
        // lands in "low"
        assert_eq!(result.red_flags.len(), 3);
        assert_eq!(
            result.red_flags[&Severity::Low],
            vec!["Improvement needed in Soft Skills"]
        );
        assert!(result.red_flags[&Severity::Medium].is_empty());
        assert!(result.red_flags[&Severity::High].is_empty());

        assert!(!result.match_reasons.is_empty());
        assert!(result.match_reasons.starts_with("## Match Reasons"));
        assert_eq!(result.website.as_deref(), Some("https://jane.dev"));
    }

    #[tokio::test]
    async fn unparseable_requirements_fail_the_whole_request() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(ScriptedBackend::fixed("not json at all"));
        let analyzer = Analyzer::new(client_with_backend(backend, dir.path()));

        let result = analyzer.analyze("resume", "jd").await;
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Analysis(_)));
        assert!(err.to_string().contains("could not extract job requirements"));
    }

    #[tokio::test]
    async fn empty_unified_resume_fails_the_whole_request() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(ScriptedBackend::new(|prompt: &str| {
            if prompt.contains("Extract the key requirements") {
                REQUIREMENTS_JSON.to_string()
            } else {
                // unification and everything after return blanks
                "  ".to_string()
            }
        }));
        let analyzer = Analyzer::new(client_with_backend(backend, dir.path()));

        let err = analyzer.analyze("resume", "jd").await.unwrap_err();
        assert!(err.to_string().contains("could not unify resume"));
    }

    #[tokio::test]
    async fn result_serializes_with_stable_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(ScriptedBackend::new(pipeline_script));
        let analyzer = Analyzer::new(client_with_backend(backend, dir.path()));

        let result = analyzer.analyze("resume", "jd").await.unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["overall_score"].is_u64());
        assert_eq!(json["criteria_scores"].as_array().unwrap().len(), 6);
        let first = &json["criteria_scores"][0];
        for field in ["name", "key", "weight", "description", "factors", "score"] {
            assert!(first.get(field).is_some(), "missing field {field}");
        }
        assert!(json["match_reasons"].is_string());
        for level in ["low", "medium", "high"] {
            assert!(json["red_flags"].get(level).is_some());
        }
        assert_eq!(json["website"], "https://jane.dev");
    }
}
