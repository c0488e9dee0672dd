//! Keeps raw player input safe to log on a single line.

/// How much of an input line survives into a log message. A command line
/// has no business being longer than this.
const MAX_PREVIEW: usize = 120;

/// Escape a player input line for logging: control characters and
/// backslashes are rendered with their `escape_default` forms (`\n`, `\t`,
/// `\u{..}`), everything else passes through. Input past the preview cap
/// is cut with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        if ch.is_control() || ch == '\\' {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}
