use regex::Regex;
use std::sync::LazyLock;

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*'+$!]"#).expect("static regex"));

/// Drops every character outside ISO-8859-1. Nothing is substituted.
pub fn sanitize_text(text: &str) -> String {
    text.chars().filter(|&c| u32::from(c) <= 0xFF).collect()
}

/// Builds a file name from free text: unsafe characters removed, whitespace
/// collapsed, first word lowercased and the remaining words capitalized.
pub fn sanitize_filename(text: &str) -> String {
    let stripped = UNSAFE_FILENAME_CHARS.replace_all(text, "");

    let mut words = stripped.split(is_separator).filter(|w| !w.is_empty());
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut parts = vec![first.to_lowercase()];
    parts.extend(words.map(capitalize));
    parts.join(" ")
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// First character in title case, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

// Title case is the uppercase form except for the Latin digraphs and for
// characters whose uppercase expands to several letters (ß -> SS -> Ss).
fn titlecase(c: char) -> String {
    match c {
        '\u{1c4}'..='\u{1c6}' => '\u{1c5}'.to_string(),
        '\u{1c7}'..='\u{1c9}' => '\u{1c8}'.to_string(),
        '\u{1ca}'..='\u{1cc}' => '\u{1cb}'.to_string(),
        '\u{1f1}'..='\u{1f3}' => '\u{1f2}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut out: String = upper.next().into_iter().collect();
            out.extend(upper.flat_map(char::to_lowercase));
            out
        }
    }
}
