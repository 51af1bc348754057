//! Formatting utilities used for CLI outputs.
//! Widths are terminal display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut `s` so it occupies at most `width` columns, marking the cut with `…`.
pub fn fit_to_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > width - 1 {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Percentage with two decimals, e.g. `12.50%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
