// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Persona shared by every MediaMatch system prompt.
pub const MEDIA_CRITIC_PERSONA: &str = "\
    You are a well-read film, television and literary critic who helps people \
    understand their own taste. You know release years precisely and never \
    invent titles that do not exist.";

/// Appended to prompts whose reply is shown to the user verbatim.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Write in plain text. Do NOT use markdown headings, tables, bold or italics.";
