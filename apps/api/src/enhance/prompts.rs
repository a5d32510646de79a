// Task prompts for text enhancement. Replace `{text}` (and `{context}`) before sending.

pub const POLISH_PROMPT_TEMPLATE: &str = "Rewrite the following text to be more professional, \
    using strong action verbs suitable for a German CV. Keep it concise. Input text: \"{text}\"";

pub const TRANSLATE_TO_GERMAN_PROMPT_TEMPLATE: &str = "Translate the following text to \
    professional German suitable for a CV. Input text: \"{text}\"";

pub const FIX_GRAMMAR_PROMPT_TEMPLATE: &str = "Correct the grammar and spelling of the \
    following German text. Do not change the meaning excessively, just fix errors. \
    Input text: \"{text}\"";

/// Appended when the caller names the résumé section the text belongs to.
pub const CONTEXT_LINE_TEMPLATE: &str = "\nContext: This is for the {context} section of the resume.";
