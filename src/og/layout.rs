//! Pure layout math for monospace text on the OG canvas.
//!
//! IBM Plex Mono (and monospace fonts generally) advance every glyph by
//! 0.6em, so "does this line fit" reduces to counting characters. That
//! keeps layout deterministic and unit-testable with no font machinery
//! involved; the templates convert pixel budgets to character budgets
//! here and never measure rendered text.

/// Glyph advance as a fraction of the font size (0.6em for Plex Mono).
const MONO_ADVANCE: f32 = 0.6;

/// How many characters of `font_size` text fit in `width_px` pixels.
pub fn chars_that_fit(width_px: f32, font_size: f32) -> usize {
    (width_px / (font_size * MONO_ADVANCE)).floor() as usize
}

/// Greedy word-wrap into at most `max_lines` lines of `max_chars`.
///
/// Words longer than a full line are broken hard. When text remains
/// after the last line, the line is shortened and terminated with an
/// ellipsis so truncation is visible.
pub fn wrap(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    assert!(max_chars > 0 && max_lines > 0);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut truncated = false;
    let mut words = text.split_whitespace().peekable();

    'outer: while let Some(word) = words.next() {
        let mut word = word.to_string();
        loop {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            // Word does not fit. Flush the current line first.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                if lines.len() == max_lines {
                    // The in-flight word was dropped.
                    truncated = true;
                    break 'outer;
                }
                continue;
            }
            // A single word wider than the line: hard break.
            let head: String = word.chars().take(max_chars).collect();
            let tail: String = word.chars().skip(max_chars).collect();
            lines.push(head);
            if lines.len() == max_lines {
                truncated = !tail.is_empty();
                break 'outer;
            }
            word = tail;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if truncated || words.peek().is_some() {
        if let Some(last) = lines.last_mut() {
            truncate_with_ellipsis(last, max_chars);
        }
    }
    lines
}

/// Single-line fit: the text unchanged if it fits, otherwise cut to
/// `max_chars` with a trailing ellipsis.
pub fn fit_line(text: &str, max_chars: usize) -> String {
    let mut line: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() > max_chars {
        truncate_with_ellipsis(&mut line, max_chars);
    }
    line
}

fn truncate_with_ellipsis(line: &mut String, max_chars: usize) {
    let keep = max_chars.saturating_sub(1);
    let cut: String = line.chars().take(keep).collect();
    *line = format!("{}…", cut.trim_end());
}
