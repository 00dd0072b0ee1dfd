//! The resume/job matching pipeline: requirement extraction, resume
//! unification, per-criterion scoring, aggregation and red flags.

pub mod analyzer;
pub mod criteria;
pub mod evaluator;
pub mod prompts;
pub mod red_flags;
pub mod requirements;
pub mod resume;
