//! Job requirement extraction — structured output from a free-text job
//! description, plus the typed requirements model.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::llm_client::{ModelClient, RunOptions, StructuredOutput};
use crate::matching::prompts::EXTRACT_REQUIREMENTS_TEMPLATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
}

/// Per-criterion importance weights supplied per job. Each weight is an
/// independent 0-100 integer; there is no sum constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emphasis {
    #[serde(default = "default_technical_skills_weight")]
    pub technical_skills_weight: u32,
    #[serde(default = "default_soft_skills_weight")]
    pub soft_skills_weight: u32,
    #[serde(default = "default_experience_weight")]
    pub experience_weight: u32,
    #[serde(default = "default_education_weight")]
    pub education_weight: u32,
    #[serde(default = "default_language_proficiency_weight")]
    pub language_proficiency_weight: u32,
    #[serde(default = "default_certifications_weight")]
    pub certifications_weight: u32,
}

fn default_technical_skills_weight() -> u32 {
    50
}
fn default_soft_skills_weight() -> u32 {
    20
}
fn default_experience_weight() -> u32 {
    20
}
fn default_education_weight() -> u32 {
    10
}
fn default_language_proficiency_weight() -> u32 {
    5
}
fn default_certifications_weight() -> u32 {
    5
}

impl Default for Emphasis {
    fn default() -> Self {
        Self {
            technical_skills_weight: default_technical_skills_weight(),
            soft_skills_weight: default_soft_skills_weight(),
            experience_weight: default_experience_weight(),
            education_weight: default_education_weight(),
            language_proficiency_weight: default_language_proficiency_weight(),
            certifications_weight: default_certifications_weight(),
        }
    }
}

/// Structured requirements extracted once per job description,
/// read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirements {
    pub required_experience_years: u32,
    pub required_education_level: String,
    pub required_skills: Vec<String>,
    pub optional_skills: Vec<String>,
    pub certifications_preferred: Vec<String>,
    pub soft_skills: Vec<String>,
    pub keywords_to_match: Vec<String>,
    pub location: Location,
    #[serde(default)]
    pub emphasis: Emphasis,
}

impl StructuredOutput for JobRequirements {
    const TYPE_NAME: &'static str = "JobRequirements";
}

/// Extracts typed requirements from a job description. A response that does
/// not conform to the schema is fatal for the request — no partially-filled
/// object is ever returned.
pub async fn extract_requirements(
    job_description: &str,
    client: &ModelClient,
) -> Result<JobRequirements, AppError> {
    let prompt = EXTRACT_REQUIREMENTS_TEMPLATE.replace("{job_description}", job_description);
    client
        .run_json::<JobRequirements>(&prompt, RunOptions::default())
        .await
        .map_err(|e| {
            error!("job requirements extraction failed: {e}");
            AppError::RequirementsExtraction
        })
}
