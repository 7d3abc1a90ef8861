//! Line-pattern heuristic rules.
//!
//! Each rule is a tagged variant with an explicit enabled flag. Disabled
//! rules are still evaluated on every line but emit nothing: their
//! false-positive rate on real code (continuation lines, multi-line
//! generics, trailing `return`/`throw`) was judged too high, and silence is
//! preferred over noise. Keeping them as visible variants makes that a
//! policy choice rather than dead code.
//!
//! Rules match independently per line; a line can collect one diagnostic
//! per rule family.

use crate::models::Diagnostic;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The rule families known to the engine.
pub enum RuleKind {
    /// Numeric-typed binding assigned a quoted literal.
    LiteralIntoNumeric,
    /// Mandatory-parameter marker on a nullability-suffixed type.
    NullableRequired,
    /// Statement-shaped line without a terminator (suppressed).
    MissingTerminator,
    /// Bare `Function(` without type parameters (suppressed).
    UntypedClosure,
    /// `<` without a matching `>` on the same line (suppressed).
    UnmatchedGeneric,
}

impl RuleKind {
    fn message(self, line: &str) -> String {
        let context = line.trim();
        match self {
            Self::LiteralIntoNumeric => format!(
                "possible type mismatch: string literal assigned to numeric binding: {context}"
            ),
            Self::NullableRequired => {
                format!("nullable type marked as required: {context}")
            }
            Self::MissingTerminator => {
                format!("possible missing statement terminator: {context}")
            }
            Self::UntypedClosure => {
                format!("bare Function type without parameters: {context}")
            }
            Self::UnmatchedGeneric => {
                format!("unmatched generic bracket '<': {context}")
            }
        }
    }
}

/// A rule with its compiled matcher and surface policy.
pub struct Rule {
    pub kind: RuleKind,
    pub enabled: bool,
    matcher: Matcher,
}

enum Matcher {
    Line(Regex),
    Terminator { control: Regex, arrow: Regex },
    UntypedClosure(Regex),
    GenericImbalance,
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Self::Line(re) => re.is_match(line),
            Self::Terminator { control, arrow } => {
                terminator_candidate(line, control, arrow)
            }
            Self::UntypedClosure(re) => {
                re.is_match(line) && !line.contains('<') && !line.contains("void")
            }
            Self::GenericImbalance => line.contains('<') && !line.contains('>'),
        }
    }
}

// Statement-shaped but unterminated: non-empty, not a comment, not opened
// by a control keyword, and not ending in one of the usual trailers.
fn terminator_candidate(line: &str, control: &Regex, arrow: &Regex) -> bool {
    const TRAILERS: [&str; 8] = [";", "{", "}", "(", ")", ",", ":", "//"];
    let stripped = line.trim_end();
    let trimmed = stripped.trim_start();
    if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") {
        return false;
    }
    if TRAILERS.iter().any(|t| stripped.ends_with(t)) {
        return false;
    }
    !control.is_match(trimmed) && !arrow.is_match(trimmed)
}

/// The fixed, ordered rule set evaluated on every line.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the standard rules. Patterns are static and known-good.
    #[must_use]
    pub fn standard() -> Self {
        let rule = |kind, enabled, matcher| Rule {
            kind,
            enabled,
            matcher,
        };
        let re = |pat: &str| Regex::new(pat).expect("bad rule pattern");
        Self {
            rules: vec![
                rule(
                    RuleKind::LiteralIntoNumeric,
                    true,
                    Matcher::Line(re(r#"\bint\s+\w+\s*=\s*["']"#)),
                ),
                rule(
                    RuleKind::NullableRequired,
                    true,
                    Matcher::Line(re(r"\brequired\s+\w+\?\s+")),
                ),
                rule(
                    RuleKind::MissingTerminator,
                    false,
                    Matcher::Terminator {
                        control: re(r"^(?:if|else|for|while|switch|try|catch|finally|do)\b"),
                        arrow: re(r"=>\s*\{"),
                    },
                ),
                rule(
                    RuleKind::UntypedClosure,
                    false,
                    Matcher::UntypedClosure(re(r"\bFunction\s*\(")),
                ),
                rule(RuleKind::UnmatchedGeneric, false, Matcher::GenericImbalance),
            ],
        }
    }

    /// Evaluate every rule against every line. The match is computed before
    /// the enabled flag is consulted, so suppressed rules still run.
    #[must_use]
    pub fn analyze(&self, source: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            for rule in &self.rules {
                let hit = rule.matcher.matches(line);
                if hit && rule.enabled {
                    diagnostics.push(Diagnostic {
                        line: idx + 1,
                        message: rule.kind.message(line),
                    });
                }
            }
        }
        diagnostics
    }
}

/// Scan `source` with the standard rule set.
#[must_use]
pub fn analyze_patterns(source: &str) -> Vec<Diagnostic> {
    RuleSet::standard().analyze(source)
}
