/// Builds the instruction prompt for a single translation request.
///
/// Pure and deterministic; any non-empty strings are valid input.
pub fn build_prompt(text: &str, language: &str) -> String {
    format!("Translate the following text into {language}: {text}")
}
