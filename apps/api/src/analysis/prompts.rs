// CV analysis prompt template.
// The model's answer is returned to callers verbatim, so the section headers
// in this template define the shape of every analysis.

/// CV analysis prompt template. Replace `{cv_text}` before sending.
pub const CV_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career counselor and CV reviewer. Analyze this CV/resume and provide comprehensive, structured feedback.

CV Content:
{cv_text}

Please provide a detailed analysis with the following sections. Use clear headers and formatting:

## 📊 SKILLS SUMMARY
List and categorize the key skills identified:
- Technical Skills:
- Soft Skills:
- Tools & Technologies:
- Languages:

## 📈 EXPERIENCE LEVEL
Assess the candidate's level: Junior (0-2 years), Mid-level (3-5 years), Senior (6-10 years), or Executive (10+ years)
Provide reasoning for your assessment.

## 🎯 CAREER RECOMMENDATIONS
Suggest 3-5 specific career paths or roles that match their profile. For each:
1. **[Job Title]**
   - Why it's a good fit
   - Typical salary range
   - Growth potential
   - Required qualifications

## 💡 CV IMPROVEMENT FEEDBACK
### Strengths:
- What's working well (list 3-5 points)

### Areas for Improvement:
- What's missing or unclear (list 3-5 points)
- Formatting suggestions
- Content recommendations
- Keywords to add for ATS systems

## 🔧 SKILLS GAP ANALYSIS
Identify 3-5 skills they should develop:
1. **[Skill Name]**
   - Why it's important
   - How to acquire it
   - Estimated time to learn

## 🚀 30-DAY ACTION PLAN
Week 1:
- [Specific action]

Week 2:
- [Specific action]

Week 3:
- [Specific action]

Week 4:
- [Specific action]

## 📝 SUMMARY
Provide a brief 2-3 sentence summary of the candidate's profile and potential.

Be specific, encouraging, and constructive in your feedback."#;

/// Embeds `cv_text` into the analysis template.
pub fn build_analysis_prompt(cv_text: &str) -> String {
    CV_ANALYSIS_PROMPT_TEMPLATE.replacen("{cv_text}", cv_text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Section headers the model is asked to produce, in order.
    const ANALYSIS_SECTIONS: [&str; 7] = [
        "## 📊 SKILLS SUMMARY",
        "## 📈 EXPERIENCE LEVEL",
        "## 🎯 CAREER RECOMMENDATIONS",
        "## 💡 CV IMPROVEMENT FEEDBACK",
        "## 🔧 SKILLS GAP ANALYSIS",
        "## 🚀 30-DAY ACTION PLAN",
        "## 📝 SUMMARY",
    ];

    const CV: &str = "Alex Kim\nFrontend developer, 4 years React and TypeScript, led design system work.";

    #[test]
    fn test_prompt_contains_cv_verbatim() {
        let prompt = build_analysis_prompt(CV);
        assert!(prompt.contains(CV));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[test]
    fn test_prompt_contains_every_section_in_order() {
        let prompt = build_analysis_prompt(CV);
        let positions: Vec<usize> = ANALYSIS_SECTIONS
            .iter()
            .map(|h| prompt.find(h).unwrap_or_else(|| panic!("missing header {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_analysis_prompt(CV), build_analysis_prompt(CV));
    }

    #[test]
    fn test_placeholder_inside_cv_is_left_alone() {
        let cv = "Wrote docs about the {cv_text} placeholder syntax for a templating engine.";
        let prompt = build_analysis_prompt(cv);
        assert!(prompt.contains(cv));
    }
}
