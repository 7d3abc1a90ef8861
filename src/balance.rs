//! Delimiter balance analysis.
//!
//! Scans a file line by line, keeping one running tally per delimiter kind
//! (brace, parenthesis, bracket). An underflow is reported at the line where
//! it happened and the tally resynchronizes to zero; leftover open delimiters
//! are reported once at end of file.
//!
//! The scan has no lexical awareness: a closer inside a string literal or a
//! comment counts exactly like code. That is a documented limitation of the
//! heuristic, not something to paper over with a lexer.

use crate::models::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The three delimiter families tracked by the scan.
pub enum DelimiterKind {
    Brace,
    Paren,
    Bracket,
}

impl DelimiterKind {
    pub const ALL: [Self; 3] = [Self::Brace, Self::Paren, Self::Bracket];

    const fn open(self) -> char {
        match self {
            Self::Brace => '{',
            Self::Paren => '(',
            Self::Bracket => '[',
        }
    }

    const fn close(self) -> char {
        match self {
            Self::Brace => '}',
            Self::Paren => ')',
            Self::Bracket => ']',
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Brace => "brace",
            Self::Paren => "parenthesis",
            Self::Bracket => "bracket",
        }
    }

    const fn plural(self) -> &'static str {
        match self {
            Self::Brace => "braces",
            Self::Paren => "parentheses",
            Self::Bracket => "brackets",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tally lifecycle: `Resynced` means an underflow was already reported and
/// the depth was reset, so the effective floor for the rest of the file is
/// zero relative to the reset point rather than the true pre-bug depth.
pub enum TallyState {
    Balanced,
    Resynced,
}

#[derive(Debug)]
/// Running depth for one delimiter kind within a single file scan.
pub struct DelimiterTally {
    kind: DelimiterKind,
    depth: i64,
    state: TallyState,
}

impl DelimiterTally {
    #[must_use]
    pub const fn new(kind: DelimiterKind) -> Self {
        Self {
            kind,
            depth: 0,
            state: TallyState::Balanced,
        }
    }

    pub fn feed(&mut self, ch: char) {
        if ch == self.kind.open() {
            self.depth += 1;
        } else if ch == self.kind.close() {
            self.depth -= 1;
        }
    }

    /// Underflow check at a line boundary. A negative depth yields one
    /// diagnostic naming the extra closer, zeroes the depth, and moves the
    /// tally to `Resynced` so a single stray closer cannot cascade into
    /// spurious downstream reports.
    pub fn end_of_line(&mut self, line: usize) -> Option<Diagnostic> {
        if self.depth >= 0 {
            return None;
        }
        self.depth = 0;
        self.state = TallyState::Resynced;
        Some(Diagnostic {
            line,
            message: format!(
                "extra closing {} '{}'",
                self.kind.noun(),
                self.kind.close()
            ),
        })
    }

    /// Leftover-open check after the last line, reporting the exact
    /// unresolved count. An earlier resync does not cancel this: `]` then
    /// `[` yields both an underflow and a net +1 here.
    pub fn end_of_file(&self, line: usize) -> Option<Diagnostic> {
        if self.depth <= 0 {
            return None;
        }
        Some(Diagnostic {
            line,
            message: format!(
                "unclosed {}: {} left open at end of file",
                self.kind.plural(),
                self.depth
            ),
        })
    }

    #[must_use]
    pub const fn state(&self) -> TallyState {
        self.state
    }

    #[must_use]
    pub const fn depth(&self) -> i64 {
        self.depth
    }
}

/// Scan `source` in a single left-to-right pass and report delimiter
/// imbalances. Balanced input yields an empty sequence; end-of-file
/// diagnostics attach to the last line of the file.
#[must_use]
pub fn analyze_balance(source: &str) -> Vec<Diagnostic> {
    let mut tallies: Vec<DelimiterTally> =
        DelimiterKind::ALL.iter().map(|&k| DelimiterTally::new(k)).collect();
    let mut diagnostics = Vec::new();
    let mut last_line = 0;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        for ch in line.chars() {
            for tally in &mut tallies {
                tally.feed(ch);
            }
        }
        for tally in &mut tallies {
            if let Some(diag) = tally.end_of_line(line_no) {
                diagnostics.push(diag);
            }
        }
    }

    for tally in &tallies {
        if let Some(diag) = tally.end_of_file(last_line) {
            diagnostics.push(diag);
        }
    }

    diagnostics
}
