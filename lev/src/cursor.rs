/// One logical line of a LEV buffer, normalised to upper case with comments
/// and surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source buffer
    pub number: usize,
    pub text: String,
    next: usize,
}

/// Reads logical lines with explicit lookahead. `peek` never moves the
/// cursor, `advance` consumes a previously peeked line. This keeps the
/// optional records of the format as "try, and only consume on success".
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
        }
    }

    /// The next non-empty line with `#` comments removed
    pub fn peek(&self) -> Option<Line> {
        self.peek_with(false)
    }

    /// The next non-empty line, keeping any `#`. Sector names may contain it.
    pub fn peek_keep_comments(&self) -> Option<Line> {
        self.peek_with(true)
    }

    fn peek_with(&self, keep_comments: bool) -> Option<Line> {
        for (i, raw) in self.lines.iter().enumerate().skip(self.pos) {
            let text = if keep_comments {
                *raw
            } else {
                strip_comment(raw)
            };
            let text = text.trim();
            if !text.is_empty() {
                return Some(Line {
                    number: i + 1,
                    text: text.to_ascii_uppercase(),
                    next: i + 1,
                });
            }
        }
        None
    }

    /// Consume `line` and everything before it
    pub fn advance(&mut self, line: &Line) {
        self.pos = self.pos.max(line.next);
    }

    /// Peek then advance
    pub fn next_line(&mut self) -> Option<Line> {
        let line = self.peek()?;
        self.advance(&line);
        Some(line)
    }

    /// Raw lines not yet consumed, blank and comment lines included. An upper
    /// bound on the records still to come.
    pub fn remaining_lines(&self) -> usize {
        self.lines.len().saturating_sub(self.pos)
    }
}

fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(i) => &raw[..i],
        None => raw,
    }
}
