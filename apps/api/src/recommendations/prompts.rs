// All LLM prompt constants for the Recommendations module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for the taste analysis call. Replace `{persona}`.
pub const TASTE_SYSTEM_TEMPLATE: &str = "{persona} \
    Your job right now is analysis only: describe the person's taste, \
    do not recommend anything yet.";

/// Taste analysis prompt. Replace: {entry_count}, {history}, {plain_text_instruction}
pub const TASTE_PROMPT_TEMPLATE: &str = r#"Here is everything this person has logged ({entry_count} titles). Ratings are out of five stars.

{history}

Analyze this person's taste. Cover:
- the genres and sub-genres they gravitate toward
- the tones and moods they respond to (dark, comforting, cerebral, funny, ...)
- patterns across media types, eras and creators
- anything they clearly dislike, based on low ratings or reviews

Do NOT recommend any titles. Keep the analysis to three short paragraphs.

{plain_text_instruction}"#;

/// System prompt for the recommendation call. Replace `{persona}`.
pub const RECOMMEND_SYSTEM_TEMPLATE: &str = "{persona} \
    You recommend real, published movies, TV shows and books. \
    You always finish with the exact list format you are asked for.";

/// Reinforce-mode prompt. Replace: {taste_summary}, {list_format}
pub const REINFORCE_PROMPT_TEMPLATE: &str = r#"Here is an analysis of a person's taste in movies, TV and books:

{taste_summary}

Recommend 5 titles this person is very likely to love. Every pick should be strongly aligned with the preferences above: the same genres, tones and qualities they already rate highly. Do not recommend anything that appears in the analysis as already seen or read.

For each pick, write one or two sentences explaining why it fits.

{list_format}"#;

/// Broaden-mode prompt. Replace: {taste_summary}, {list_format}
pub const BROADEN_PROMPT_TEMPLATE: &str = r#"Here is an analysis of a person's taste in movies, TV and books:

{taste_summary}

Recommend 5 titles that stretch this person's taste. Roughly 40% of the picks (two titles) should connect clearly to what they already enjoy; the other 60% (three titles) should be genuinely new territory for them: different genres, eras, countries or tones. At least one pick must come from the media type (movie, TV or book) that is least represented in their history.

For each pick, write one or two sentences explaining what bridges it to their existing taste.

{list_format}"#;

/// Machine-readable tail required in every recommendation reply. Replace `{marker}`.
pub const LIST_FORMAT_TEMPLATE: &str = r#"After your explanations, end your reply with a line containing only {marker} followed by the numbered list, exactly like this and with nothing after it:
{marker}
1. Title (Year) - movie
2. Title (Year) - tv
3. Title (Year) - book

Rules for the list:
- at most 5 lines, numbered 1. to 5.
- Year is the 4-digit release year; for TV use the first-air year
- the type is exactly one of: movie, tv, book
- no bullets, quotes, bold or extra commentary on these lines"#;
