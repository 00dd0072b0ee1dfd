//! Console rendering of a match result for the CLI.

use crate::matching::analyzer::DetailedMatchResult;

pub fn print_report(result: &DetailedMatchResult) {
    println!("{}", format_report(result));
}

fn format_report(result: &DetailedMatchResult) -> String {
    let mut out = String::new();

    out.push_str("Resume Analysis Result\n");
    out.push_str("======================\n");
    out.push_str(&format!("Overall Match Score: {}%\n\n", result.overall_score));

    out.push_str("Detailed Scoring Criteria\n");
    out.push_str(&format!(
        "{:<22} {:>7} {:>8}  {}\n",
        "Criterion", "Score", "Weight", "Description"
    ));
    for criterion in &result.criteria_scores {
        let score = criterion
            .score
            .map(|s| format!("{s}%"))
            .unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!(
            "{:<22} {:>7} {:>7}%  {}\n",
            criterion.name, score, criterion.weight, criterion.description
        ));
    }

    out.push_str("\nMatch Reasons\n");
    out.push_str("-------------\n");
    out.push_str(&result.match_reasons);
    out.push('\n');

    let any_flags = result.red_flags.values().any(|flags| !flags.is_empty());
    if any_flags {
        out.push_str("\nRed Flags\n");
        out.push_str("---------\n");
        for (severity, flags) in &result.red_flags {
            for flag in flags {
                out.push_str(&format!("[{}] {}\n", severity.as_str(), flag));
            }
        }
    }

    if let Some(website) = &result.website {
        out.push_str(&format!("\nWebsite: {website}\n"));
    }

    out
}
