// Résumé assistant prompt templates.
// Placeholders in braces are substituted with `str::replace` before sending.

pub const REWRITE_BULLET_PROMPT: &str = r#"Rewrite the following resume bullet point using the XYZ formula:
"Accomplished [X] as measured by [Y], by doing [Z]".

RULES:
1. Translate international or non-standard terminology into standard US professional English.
2. Open with a strong action verb.
3. Quantify the result where the input allows; if it has no numbers, phrase it to convey impact without inventing figures.
4. Return ONLY the rewritten sentence.

INPUT BULLET:
{text}"#;

pub const REVIEW_PROMPT: &str = r#"Review the resume below for an international student targeting US tech jobs.

TASKS:
1. Give exactly 3 critical, specific improvements (formatting, clarity, action verbs, or missing sections).
2. List 5 technical or soft-skill keywords that fit the experience described but are not already listed.
3. Rewrite each experience entry's bullet points to follow the XYZ formula:
   "Accomplished [X] as measured by [Y], by doing [Z]".

RESUME (JSON):
{resume_json}

OUTPUT SCHEMA (return exactly this structure):
{
  "feedback": ["string", "string", "string"],
  "missingKeywords": ["string", "string", "string", "string", "string"],
  "improvedExperience": [
    { "id": "<exact experience id from the input>", "points": ["rewritten point", "..."] }
  ]
}

RULES:
- Use the experience ids exactly as given. Never invent an id.
- Return ONLY the JSON object — nothing else, no code fences."#;

pub const SUGGEST_SKILLS_PROMPT: &str = r#"List 10 relevant hard and soft skills for the role "{role}".
Return them as a JSON array of strings, for example: ["React", "Project Management"].
Return ONLY the JSON array."#;

/// Max output tokens for a single bullet rewrite.
pub const REWRITE_MAX_TOKENS: u32 = 200;
pub const REWRITE_TEMPERATURE: f32 = 0.7;
