/// A forward-only cursor over the lines of the input.
///
/// Lines are split eagerly on `\n` (a trailing `\r` stays on the line and is
/// removed by trimming). Sub-parsers look ahead through [`LineCursor::rest`]
/// and the caller advances by however many lines they consumed.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    i: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            i: 0,
        }
    }

    /// The line under the cursor, untrimmed.
    pub fn current(&self) -> Option<&'a str> {
        self.lines.get(self.i).copied()
    }

    /// The current line and everything after it.
    pub fn rest(&self) -> &[&'a str] {
        self.lines.get(self.i..).unwrap_or_default()
    }

    /// Zero-based index of the current line.
    pub fn position(&self) -> usize {
        self.i
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn eof(&self) -> bool {
        self.i >= self.lines.len()
    }

    /// Advances by `n` lines, stopping at the end.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.lines.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = LineCursor::new("a\nb\nc");
        assert_eq!(cur.line_count(), 3);
        assert_eq!(cur.current(), Some("a"));
        cur.bump_n(1);
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.rest(), &["b", "c"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let cur = LineCursor::new("");
        assert_eq!(cur.line_count(), 1);
        assert_eq!(cur.current(), Some(""));
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        let cur = LineCursor::new("a\n");
        assert_eq!(cur.rest(), &["a", ""]);
    }

    #[test]
    fn crlf_keeps_carriage_return() {
        let cur = LineCursor::new("a\r\nb");
        assert_eq!(cur.current(), Some("a\r"));
    }

    #[test]
    fn bump_n_past_end_stops_at_eof() {
        let mut cur = LineCursor::new("a\nb");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.current(), None);
        assert!(cur.rest().is_empty());
    }
}
