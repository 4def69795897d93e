//! Line and token splitting.
//!
//! Both `\n` and `\r\n` end a line. A lone `\r` is ordinary content. The
//! text after the last terminator forms a final line only when it is
//! non-empty, so `"a\n"` has one line while `"a\n\n"` has two.

/// One line of a document, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line including its terminator, exactly as in the source
    pub raw: &'a str,
    /// The line without its terminator
    pub content: &'a str,
}

impl<'a> Line<'a> {
    /// Whether the line ended with `\n` or `\r\n`.
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.raw.len() != self.content.len()
    }

    /// Comparison key: content plus terminator presence.
    ///
    /// `\r\n` and `\n` produce the same key; a final line without a
    /// terminator does not compare equal to the same text with one.
    #[must_use]
    pub fn key(&self) -> (&'a str, bool) {
        (self.content, self.has_terminator())
    }
}

/// Split a document into lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for (idx, &byte) in bytes.iter().enumerate() {
        if byte != b'\n' {
            continue;
        }
        let content_end = if idx > start && bytes[idx - 1] == b'\r' {
            idx - 1
        } else {
            idx
        };
        lines.push(Line {
            raw: &text[start..=idx],
            content: &text[start..content_end],
        });
        start = idx + 1;
    }

    if start < text.len() {
        lines.push(Line {
            raw: &text[start..],
            content: &text[start..],
        });
    }

    lines
}

/// Number of lines [`split_lines`] would produce.
#[must_use]
pub fn count_lines(text: &str) -> usize {
    let terminators = text.bytes().filter(|&b| b == b'\n').count();
    if text.is_empty() || text.ends_with('\n') {
        terminators
    } else {
        terminators + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
}

fn classify(ch: char) -> CharClass {
    if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else if ch.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Punct
    }
}

/// Split a line into word tokens.
///
/// Runs of alphanumerics/underscores and runs of whitespace each form one
/// token; every other character is a token of its own.
#[must_use]
pub fn split_words(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, CharClass)> = None;

    for (idx, ch) in line.char_indices() {
        let class = classify(ch);
        if let Some((start, prev)) = current {
            if prev == class && class != CharClass::Punct {
                continue;
            }
            tokens.push(&line[start..idx]);
        }
        current = Some((idx, class));
    }
    if let Some((start, _)) = current {
        tokens.push(&line[start..]);
    }

    tokens
}

/// Split a line into single-character tokens.
#[must_use]
pub fn split_chars(line: &str) -> Vec<&str> {
    line.char_indices()
        .map(|(idx, ch)| &line[idx..idx + ch.len_utf8()])
        .collect()
}
