// Placement assessment: scoring, company matching and the combined pipeline.
// Roadmap generation lives in `advisor`; this module only consumes it.

pub mod handlers;
pub mod matching;
pub mod pipeline;
pub mod scoring;
