// Cross-cutting prompt fragments shared by every assistant call.
// Task-specific prompts live next to the code that sends them.

/// System prompt for calls whose reply is parsed as JSON.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for calls whose reply is used verbatim as résumé text.
pub const PLAIN_TEXT_SYSTEM: &str = "You are an expert resume writer. \
    Reply with the requested text only: no preamble, no quotes, no markdown, \
    no explanations.";
