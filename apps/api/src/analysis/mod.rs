// Resume / JD coverage analysis.
// Implements: normalization, keyword ranking, coverage scoring, suggestions, pipeline.
// The only network call goes through llm_client, via suggestions.rs.

pub mod coverage;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod normalizer;
pub mod prompts;
pub mod suggestions;
