//! Approximate entity-name matching.
//!
//! Names in the specification are written inconsistently ("Lightbulb", "Light Bulb",
//! "AirPurifier"). Matching normalises both sides and then tries a chain of strategies from
//! strict to permissive, stopping at the first that succeeds.

#[must_use]
/// Split camel case, lowercase and trim: `"AirPurifier"` becomes `"air purifier"`.
pub fn normalize(name: &str) -> String {
    regex!(r"([a-z])([A-Z])")
        .replace_all(name, "$1 $2")
        .to_lowercase()
        .trim()
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One way two normalised names can be considered equal.
pub enum MatchStrategy {
    /// Identical normalised forms.
    Exact,
    /// Identical once all spaces are removed (`lightbulb` vs `light bulb`).
    SpaceInsensitive,
    /// Either normalised form contains the other. Short names over-match here.
    Substring,
}

impl MatchStrategy {
    /// Every strategy, strictest first.
    pub const ALL: [Self; 3] = [Self::Exact, Self::SpaceInsensitive, Self::Substring];

    #[must_use]
    /// Test two already-normalised names.
    pub fn test(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::SpaceInsensitive => a.replace(' ', "") == b.replace(' ', ""),
            Self::Substring => a.contains(b) || b.contains(a),
        }
    }
}

#[must_use]
/// The first strategy under which `a` and `b` denote the same entity.
pub fn match_strategy(a: &str, b: &str) -> Option<MatchStrategy> {
    let (a, b) = (normalize(a), normalize(b));
    MatchStrategy::ALL
        .into_iter()
        .find(|strategy| strategy.test(&a, &b))
}

#[must_use]
/// Whether `a` and `b` name the same entity under any strategy.
pub fn matches(a: &str, b: &str) -> bool {
    match_strategy(a, b).is_some()
}

#[cfg(test)]
#[path = "tests/matcher.rs"]
mod tests;
