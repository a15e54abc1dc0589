/// Prompt asking the model how to close the keyword gaps. `{missing}` is a
/// comma-separated keyword list.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = "\
The candidate's resume is missing these skills: {missing}.
Suggest ways to improve the resume to match the job description better.";

pub fn build_suggestion_prompt(missing: &[String]) -> String {
    SUGGESTION_PROMPT_TEMPLATE.replace("{missing}", &missing.join(", "))
}
