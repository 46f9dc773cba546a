/// Horizontal advance of a string in the current font, in pixels.
pub trait TextMeasure {
    fn measure(&mut self, text: &str) -> f64;
}

impl<F: FnMut(&str) -> f64> TextMeasure for F {
    fn measure(&mut self, text: &str) -> f64 {
        self(text)
    }
}

/// Break `text` into at most `max_lines` lines no wider than `max_width`.
///
/// Breaks prefer whitespace and hyphens; a hyphen stays at the end of the line it breaks.
/// Words wider than `max_width` are split between characters. Lines past `max_lines` are
/// dropped without an ellipsis.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    max_width: f64,
    max_lines: usize,
) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }
    if measure.measure(text) <= max_width {
        return vec![text.trim().to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for token in tokens(text) {
        let candidate = format!("{current}{token}");
        if measure.measure(&candidate) > max_width && !current.trim().is_empty() {
            lines.push(current.trim().to_string());
            if token == "-" {
                if let Some(last) = lines.last_mut() {
                    last.push('-');
                }
                current.clear();
            } else {
                current = token.to_string();
            }
        } else {
            current = candidate;
        }
    }
    if !current.trim().is_empty() {
        lines.push(current.trim().to_string());
    }

    let mut out: Vec<String> = Vec::with_capacity(max_lines);
    for line in lines {
        if out.len() >= max_lines {
            break;
        }
        if measure.measure(&line) <= max_width {
            out.push(line);
            continue;
        }
        let mut remaining = line.as_str();
        while !remaining.is_empty() && out.len() < max_lines {
            let cut = fitting_prefix_len(measure, remaining, max_width);
            out.push(remaining[..cut].to_string());
            remaining = &remaining[cut..];
        }
    }
    out
}

/// Split into runs of whitespace, single hyphens, and everything else, keeping delimiters.
fn tokens(text: &str) -> Vec<&str> {
    #[derive(PartialEq, Clone, Copy)]
    enum Class {
        Space,
        Hyphen,
        Word,
    }
    fn class(c: char) -> Class {
        if c.is_whitespace() {
            Class::Space
        } else if c == '-' {
            Class::Hyphen
        } else {
            Class::Word
        }
    }

    let mut out = Vec::new();
    let mut start = 0;
    let mut prev: Option<Class> = None;
    for (i, c) in text.char_indices() {
        let cls = class(c);
        if let Some(p) = prev
            && (p != cls || cls == Class::Hyphen)
        {
            out.push(&text[start..i]);
            start = i;
        }
        prev = Some(cls);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Byte length of the longest prefix that fits, never less than one character.
fn fitting_prefix_len<M: TextMeasure + ?Sized>(measure: &mut M, s: &str, max_width: f64) -> usize {
    let ends: Vec<usize> = s
        .char_indices()
        .skip(1)
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    for (n, &end) in ends.iter().enumerate() {
        if measure.measure(&s[..end]) > max_width {
            return if n == 0 { end } else { ends[n - 1] };
        }
    }
    s.len()
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
