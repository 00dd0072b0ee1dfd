//! Scoring criteria — the six weighted axes of resume/job fit, plus the
//! weighted aggregation of their scores.

use serde::{Deserialize, Serialize};

use crate::matching::requirements::JobRequirements;

/// One weighted axis of resume-job fit. `score` stays `None` until the
/// evaluator fills it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringCriterion {
    pub name: String,
    pub key: String,
    pub weight: u32,
    pub description: String,
    pub factors: Vec<String>,
    pub score: Option<u32>,
}

fn criterion(name: &str, key: &str, weight: u32, description: &str, factors: &[&str]) -> ScoringCriterion {
    ScoringCriterion {
        name: name.to_string(),
        key: key.to_string(),
        // weights are declared 0-100; clamp whatever the extractor produced
        weight: weight.min(100),
        description: description.to_string(),
        factors: factors.iter().map(|f| f.to_string()).collect(),
        score: None,
    }
}

/// Builds the six fixed criteria with weights copied from the job's
/// emphasis. Creation order is fixed and preserved through the pipeline
/// for deterministic display.
pub fn build_criteria(requirements: &JobRequirements) -> Vec<ScoringCriterion> {
    let emphasis = &requirements.emphasis;
    vec![
        criterion(
            "Language Proficiency",
            "language_proficiency",
            emphasis.language_proficiency_weight,
            "Evaluate candidate's proficiency in required languages",
            &[
                "Proficiency in required languages",
                "Multilingual abilities relevant to the job",
            ],
        ),
        criterion(
            "Education Level",
            "education_level",
            emphasis.education_weight,
            "Evaluate candidate's education level and relevance",
            &[
                "Highest education level attained",
                "Relevance of degree to the job",
                "Alternative education paths",
            ],
        ),
        criterion(
            "Experience",
            "experience",
            emphasis.experience_weight,
            "Evaluate years and quality of experience",
            &[
                "Total years of relevant experience",
                "Quality of previous roles",
                "Significant achievements",
            ],
        ),
        criterion(
            "Technical Skills",
            "technical_skills",
            emphasis.technical_skills_weight,
            "Evaluate technical skills match",
            &[
                "Required skills proficiency",
                "Optional skills coverage",
                "Learning ability indicators",
            ],
        ),
        criterion(
            "Certifications",
            "certifications",
            emphasis.certifications_weight,
            "Evaluate relevant certifications",
            &[
                "Required certifications",
                "Additional relevant certifications",
                "Equivalent experience",
            ],
        ),
        criterion(
            "Soft Skills",
            "soft_skills",
            emphasis.soft_skills_weight,
            "Evaluate demonstrated soft skills",
            &[
                "Communication abilities",
                "Team collaboration",
                "Leadership potential",
            ],
        ),
    ]
}

/// Weight-normalized aggregate: `sum(score * weight) / sum(weight)` with
/// integer floor division. Zero total weight yields 0; unscored criteria
/// contribute a score of 0.
pub fn aggregate_score(criteria: &[ScoringCriterion]) -> u32 {
    let total_weight: u64 = criteria.iter().map(|c| c.weight as u64).sum();
    if total_weight == 0 {
        return 0;
    }
    let weighted_sum: u64 = criteria
        .iter()
        .map(|c| c.score.unwrap_or(0) as u64 * c.weight as u64)
        .sum();
    (weighted_sum / total_weight) as u32
}
