//! Red flag classification — severity-bucketed warnings derived from low
//! criterion scores relative to their weights.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::criteria::ScoringCriterion;

/// Flag severity. Ordering matters only for serialization: `BTreeMap` keys
/// come out as low, medium, high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

pub type RedFlags = BTreeMap<Severity, Vec<String>>;

/// Classifies each scored criterion into at most one severity bucket.
/// Rules are ordered, first match wins; unscored criteria are skipped.
/// The result always contains all three keys, even when empty.
pub fn classify_red_flags(criteria: &[ScoringCriterion]) -> RedFlags {
    let mut flags: RedFlags = BTreeMap::new();
    for severity in [Severity::Low, Severity::Medium, Severity::High] {
        flags.insert(severity, Vec::new());
    }

    for criterion in criteria {
        let Some(score) = criterion.score else {
            continue;
        };

        if score < 30 && criterion.weight >= 30 {
            flags
                .entry(Severity::High)
                .or_default()
                .push(format!("Low {}", criterion.name));
        } else if score < 50 && criterion.weight >= 20 {
            flags
                .entry(Severity::Medium)
                .or_default()
                .push(format!("Below average {}", criterion.name));
        } else if score < 70 {
            flags
                .entry(Severity::Low)
                .or_default()
                .push(format!("Improvement needed in {}", criterion.name));
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(name: &str, weight: u32, score: Option<u32>) -> ScoringCriterion {
        ScoringCriterion {
            name: name.to_string(),
            key: name.to_lowercase().replace(' ', "_"),
            weight,
            description: String::new(),
            factors: vec![],
            score,
        }
    }

    #[test]
    fn low_score_on_heavy_criterion_is_high_severity() {
        let flags = classify_red_flags(&[criterion("Technical Skills", 50, Some(25))]);
        assert_eq!(flags[&Severity::High], vec!["Low Technical Skills"]);
        assert!(flags[&Severity::Medium].is_empty());
        assert!(flags[&Severity::Low].is_empty());
    }

    #[test]
    fn mid_score_on_weighted_criterion_is_medium_severity() {
        let flags = classify_red_flags(&[criterion("Experience", 20, Some(45))]);
        assert_eq!(flags[&Severity::Medium], vec!["Below average Experience"]);
    }

    #[test]
    fn decent_score_on_light_criterion_gets_no_flag() {
        let flags = classify_red_flags(&[criterion("Certifications", 10, Some(80))]);
        assert!(flags.values().all(|v| v.is_empty()));
    }

    #[test]
    fn all_three_keys_are_always_present() {
        let flags = classify_red_flags(&[]);
        assert_eq!(flags.len(), 3);
        assert!(flags.contains_key(&Severity::Low));
        assert!(flags.contains_key(&Severity::Medium));
        assert!(flags.contains_key(&Severity::High));
    }

    #[test]
    fn unscored_criteria_are_skipped() {
        let flags = classify_red_flags(&[criterion("Experience", 50, None)]);
        assert!(flags.values().all(|v| v.is_empty()));
    }

    #[test]
    fn each_criterion_yields_at_most_one_flag() {
        // score 25 with weight 50 matches the high rule AND would match
        // the later rules; only the first fires.
        let flags = classify_red_flags(&[criterion("Technical Skills", 50, Some(25))]);
        let total: usize = flags.values().map(|v| v.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn low_score_on_light_criterion_is_only_low_severity() {
        // weight below both thresholds, score below 70
        let flags = classify_red_flags(&[criterion("Certifications", 5, Some(10))]);
        assert_eq!(
            flags[&Severity::Low],
            vec!["Improvement needed in Certifications"]
        );
        assert!(flags[&Severity::High].is_empty());
    }

    #[test]
    fn severity_keys_serialize_lowercase() {
        let flags = classify_red_flags(&[criterion("Experience", 20, Some(45))]);
        let json = serde_json::to_value(&flags).unwrap();
        assert!(json.get("low").is_some());
        assert!(json.get("medium").is_some());
        assert!(json.get("high").is_some());
        assert_eq!(json["medium"][0], "Below average Experience");
    }
}
