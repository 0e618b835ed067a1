pub const SOURCE_LANGUAGE: &str = "English";
pub const TARGET_LANGUAGE: &str = "German";

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a professional and highly accurate translator. \
     Translate the following {source_language} text to {target_language}. \
     Preserve the original formatting, tone, and any special markers like speaker names (e.g., \"John Doe:\"). \
     Do not add any commentary, introductions, or explanations. \
     Only provide the direct {target_language} translation of the text provided.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    // {source_language} and {target_language} are placeholders for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}
