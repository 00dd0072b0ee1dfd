//! Per-criterion evaluation — prompt construction and score parsing.
//!
//! A criterion evaluation failure is recoverable: any gateway error or
//! unparseable response is logged and becomes a score of 0. One bad
//! criterion never aborts the whole match.

use thiserror::Error;
use tracing::error;

use crate::llm_client::{ModelClient, RunOptions};
use crate::matching::criteria::ScoringCriterion;
use crate::matching::requirements::JobRequirements;

#[derive(Debug, Error)]
pub enum ScoreParseError {
    #[error("no numeric token in model response")]
    NoNumber,
}

/// Evaluates a single criterion against the resume, returning a 0-100 score.
/// Failures are downgraded to 0 here; the original error goes to the log.
pub async fn evaluate_criterion(
    criterion: &ScoringCriterion,
    resume_text: &str,
    requirements: &JobRequirements,
    client: &ModelClient,
) -> u32 {
    match try_evaluate(criterion, resume_text, requirements, client).await {
        Ok(score) => score,
        Err(e) => {
            error!("error evaluating criterion {}: {e}", criterion.name);
            0
        }
    }
}

async fn try_evaluate(
    criterion: &ScoringCriterion,
    resume_text: &str,
    requirements: &JobRequirements,
    client: &ModelClient,
) -> anyhow::Result<u32> {
    let prompt = build_evaluation_prompt(criterion, resume_text, requirements)?;
    let response = client.run_text(&prompt, RunOptions::default()).await?;

    match parse_score(&response) {
        Ok(score) => Ok(score),
        Err(e) => {
            error!(
                "could not parse score from response for {}: {e}; response: {response}",
                criterion.name
            );
            Ok(0)
        }
    }
}

fn build_evaluation_prompt(
    criterion: &ScoringCriterion,
    resume_text: &str,
    requirements: &JobRequirements,
) -> anyhow::Result<String> {
    let requirements_json = serde_json::to_string(requirements)?;
    Ok(format!(
        "Evaluate the candidate's resume for the criterion: \"{name}\"\n\
         \n\
         Criterion Description: {description}\n\
         \n\
         Factors to consider:\n\
         {factors}\n\
         \n\
         Job Requirements:\n\
         {requirements}\n\
         \n\
         Resume:\n\
         {resume}\n\
         \n\
         Provide your evaluation as an integer score from 0 to 100.\n\
         Only return the integer score, no explanation needed.",
        name = criterion.name,
        description = criterion.description,
        factors = criterion.factors.join(", "),
        requirements = requirements_json,
        resume = resume_text,
    ))
}

/// Extracts the score from free-form model text: the FIRST maximal
/// optionally-signed digit run wins, clamped to [0, 100].
pub fn parse_score(response: &str) -> Result<u32, ScoreParseError> {
    let value = first_number(response).ok_or(ScoreParseError::NoNumber)?;
    Ok(value.clamp(0, 100) as u32)
}

fn first_number(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = if i > 0 && (bytes[i - 1] == b'-' || bytes[i - 1] == b'+') {
                i - 1
            } else {
                i
            };
            let mut end = i;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            // a run too long for i64 is skipped, keep scanning
            if let Ok(value) = text[start..end].parse::<i64>() {
                return Some(value);
            }
            i = end;
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::{client_with_backend, FailingBackend, ScriptedBackend};
    use crate::matching::criteria::build_criteria;
    use crate::matching::requirements::{Emphasis, JobRequirements, Location};

    #[test]
    fn plain_integer_is_parsed() {
        assert_eq!(parse_score("85").unwrap(), 85);
    }

    #[test]
    fn integer_embedded_in_prose_is_parsed() {
        assert_eq!(parse_score("Score is 85").unwrap(), 85);
    }

    #[test]
    fn values_above_100_are_clamped() {
        assert_eq!(parse_score("150").unwrap(), 100);
    }

    #[test]
    fn negative_values_are_clamped_to_zero() {
        assert_eq!(parse_score("-10").unwrap(), 0);
    }

    #[test]
    fn first_of_multiple_numbers_wins() {
        assert_eq!(parse_score("50 60 70").unwrap(), 50);
    }

    #[test]
    fn text_without_numbers_is_an_error() {
        assert!(parse_score("no numbers").is_err());
    }

    #[test]
    fn empty_string_is_an_error() {
        assert!(parse_score("").is_err());
    }

    fn sample_requirements() -> JobRequirements {
        JobRequirements {
            required_experience_years: 3,
            required_education_level: "Bachelor's".to_string(),
            required_skills: vec!["Rust".to_string()],
            optional_skills: vec![],
            certifications_preferred: vec![],
            soft_skills: vec![],
            keywords_to_match: vec![],
            location: Location {
                country: "Germany".to_string(),
                city: "Berlin".to_string(),
            },
            emphasis: Emphasis::default(),
        }
    }

    #[tokio::test]
    async fn evaluation_returns_parsed_score() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(Arc::new(ScriptedBackend::fixed("The score is 72.")), dir.path());
        let requirements = sample_requirements();
        let criterion = &build_criteria(&requirements)[0];

        let score = evaluate_criterion(criterion, "resume text", &requirements, &client).await;
        assert_eq!(score, 72);
    }

    #[tokio::test]
    async fn backend_failure_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(Arc::new(FailingBackend), dir.path());
        let requirements = sample_requirements();
        let criterion = &build_criteria(&requirements)[0];

        let score = evaluate_criterion(criterion, "resume text", &requirements, &client).await;
        assert_eq!(score, 0);
    }

    #[tokio::test]
    async fn unparseable_response_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(
            Arc::new(ScriptedBackend::fixed("unable to evaluate")),
            dir.path(),
        );
        let requirements = sample_requirements();
        let criterion = &build_criteria(&requirements)[0];

        let score = evaluate_criterion(criterion, "resume text", &requirements, &client).await;
        assert_eq!(score, 0);
    }

    #[test]
    fn evaluation_prompt_embeds_criterion_and_requirements() {
        let requirements = sample_requirements();
        let criterion = &build_criteria(&requirements)[3];
        let prompt = build_evaluation_prompt(criterion, "RESUME BODY", &requirements).unwrap();

        assert!(prompt.contains("\"Technical Skills\""));
        assert!(prompt.contains("Required skills proficiency"));
        assert!(prompt.contains("required_experience_years"));
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("integer score from 0 to 100"));
    }
}
