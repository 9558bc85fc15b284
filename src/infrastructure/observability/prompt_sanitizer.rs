const MAX_VISIBLE_CHARS: usize = 120;

/// Shorten prompt text for logging. Uploaded documents can be megabytes;
/// log lines carry at most a prefix plus the total size.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    if trimmed.chars().count() <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let prefix: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", prefix, trimmed.chars().count())
}
