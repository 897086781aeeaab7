use std::fmt;

use chrono::NaiveDateTime;

/// The structural checks a proposed event can fail, in the order they
/// are applied and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    EmptyTitle,
    EmptyLocation,
    MissingStart,
    MissingEnd,
    EndBeforeStart,
}

impl ViolationKind {
    /// User-facing message table. Kept apart from the checks themselves
    /// so the validation logic stays locale-free.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => "Tapahtuman nimi ei voi olla tyhjä",
            Self::EmptyLocation => "Tapahtumapaikka ei voi olla tyhjä",
            Self::MissingStart => "Virheellinen alkamisajankohta",
            Self::MissingEnd => "Virheellinen päättymisajankohta",
            Self::EndBeforeStart => "Päättymisajankohta ennen alkamisajankohtaa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

/// Checks a candidate event against the submission rules.
///
/// All checks run independently and every failure is collected, so the
/// caller can surface the complete list at once. An empty result means
/// the event may proceed.
///
/// The emptiness checks are plain length checks: a whitespace-only
/// title or location passes. That matches what the input form has
/// always accepted and is kept intentionally.
pub fn validate(
    title: &str,
    location: &str,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut fail = |kind| violations.push(Violation { kind });

    if title.is_empty() {
        fail(ViolationKind::EmptyTitle);
    }

    if location.is_empty() {
        fail(ViolationKind::EmptyLocation);
    }

    if start.is_none() {
        fail(ViolationKind::MissingStart);
    }

    if end.is_none() {
        fail(ViolationKind::MissingEnd);
    }

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            fail(ViolationKind::EndBeforeStart);
        }
    }

    violations
}
