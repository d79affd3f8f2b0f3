// Structured recommendations prompt. Answer is read back with generate_json,
// so the schema in JSON_ONLY_SUFFIX must match `Recommendations`.

/// Recommendations prompt template. Replace `{cv_text}` and `{interests}`
/// before sending.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"
You are an expert career counselor and CV reviewer. Analyze this CV/resume and the user's interests, then respond strictly in JSON as described below.

CV Content:
{cv_text}

User Interests: {interests}

Instructions:
- Provide a concise but comprehensive overall analysis in the "summary" field.
- Provide 3-4 actionable recommendations in the "recommendations" array. Each recommendation must have:
    - "title": short label of the recommendation (e.g., "Improve LinkedIn Profile")
    - "page_content": detailed advice, bullet points, or steps.
- Include advice on skills, experience, career paths, CV improvement, and an action plan **inside summary or each recommendation as appropriate**.
- Be encouraging and constructive.
- Do NOT include any text outside the JSON object.
"#;

/// Output contract appended to the prompt.
pub const JSON_ONLY_SUFFIX: &str = r#"
IMPORTANT: Respond with a single VALID JSON object ONLY (no extra commentary).
The JSON object must match this schema:

{
  "summary": "<overall CV analysis summary>",
  "recommendations": [
    { "title": "<recommendation title>", "page_content": "<detailed recommendation>" }
  ]
}

Return only the JSON object and nothing else.
"#;

pub fn build_recommendations_prompt(cv_text: &str, interests: &str) -> String {
    // Interests first so a literal "{interests}" inside the CV survives.
    let mut prompt = RECOMMENDATIONS_PROMPT_TEMPLATE
        .replacen("{interests}", interests, 1)
        .replacen("{cv_text}", cv_text, 1);
    prompt.push('\n');
    prompt.push_str(JSON_ONLY_SUFFIX);
    prompt
}
