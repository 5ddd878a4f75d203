// Recommendation Resolution Pipeline
// Implements: taste profile, prompt composition, reply parsing, catalog matching.
// All LLM calls go through the TextGenerator trait, never the HTTP client directly.

pub mod composer;
pub mod handlers;
pub mod matcher;
pub mod parser;
pub mod pipeline;
pub mod profile;
pub mod prompts;
