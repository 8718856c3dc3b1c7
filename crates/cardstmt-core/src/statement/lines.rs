//! Line views over statement text.

/// Two lazily derived line views over the same source text.
///
/// `filtered` yields trimmed, non-empty lines and is what header/value-row
/// resolution walks. `raw` yields every physical line untouched and is what
/// line-anchored transaction scans use.
#[derive(Debug, Clone, Copy)]
pub struct LineStream<'a> {
    text: &'a str,
}

impl<'a> LineStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The full source text.
    pub fn text(self) -> &'a str {
        self.text
    }

    /// Every physical line, split on `\n`, including blank ones.
    pub fn raw(self) -> impl Iterator<Item = &'a str> {
        self.text.split('\n')
    }

    /// Trimmed lines with blanks removed, in original order.
    pub fn filtered(self) -> impl Iterator<Item = &'a str> {
        self.raw().map(str::trim).filter(|line| !line.is_empty())
    }

    /// The filtered view collected for positional lookahead.
    pub fn filtered_lines(self) -> Vec<&'a str> {
        self.filtered().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "  Statement  \n\n\t\nPayment Due Date\r\n  15/06/2023   4,500.00 \n";

    #[test]
    fn test_filtered_trims_and_drops_blanks() {
        let stream = LineStream::new(TEXT);
        assert_eq!(
            stream.filtered_lines(),
            vec!["Statement", "Payment Due Date", "15/06/2023   4,500.00"]
        );
    }

    #[test]
    fn test_raw_keeps_every_line() {
        let stream = LineStream::new(TEXT);
        let raw: Vec<&str> = stream.raw().collect();
        assert_eq!(raw.len(), 6);
        assert_eq!(raw[1], "");
        assert_eq!(raw[3], "Payment Due Date\r");
    }

    #[test]
    fn test_empty_text() {
        let stream = LineStream::new("");
        assert!(stream.filtered_lines().is_empty());
        assert_eq!(stream.raw().count(), 1);
    }
}
