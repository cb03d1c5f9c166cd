//! Identifiers for the swappable parts of the beetle model.

use serde::{Deserialize, Serialize};

/// Interchangeable head meshes. Exactly one is visible once the model loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadVariant {
    #[serde(rename = "Head_A")]
    A,
    #[serde(rename = "Head_B")]
    B,
    #[serde(rename = "Head_C")]
    C,
}

impl HeadVariant {
    /// All variants in enumeration order; the first is shown on load
    pub const ALL: [HeadVariant; 3] = [HeadVariant::A, HeadVariant::B, HeadVariant::C];

    /// Short label for buttons
    pub fn label(self) -> &'static str {
        match self {
            HeadVariant::A => "A",
            HeadVariant::B => "B",
            HeadVariant::C => "C",
        }
    }
}

/// Pattern masks that can be applied to the carapace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Solid fill, backed by a generated 1x1 white texture
    Plain,
    #[default]
    Spots,
    Stripes,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [PatternKind::Plain, PatternKind::Spots, PatternKind::Stripes];

    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Plain => "Plain",
            PatternKind::Spots => "Spots",
            PatternKind::Stripes => "Stripes",
        }
    }

    /// Next pattern in enumeration order, wrapping around
    pub fn next(self) -> Self {
        match self {
            PatternKind::Plain => PatternKind::Spots,
            PatternKind::Spots => PatternKind::Stripes,
            PatternKind::Stripes => PatternKind::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_variant_wire_names() {
        let json = serde_json::to_string(&HeadVariant::B).unwrap();
        assert_eq!(json, "\"Head_B\"");
        let parsed: HeadVariant = serde_json::from_str("\"Head_C\"").unwrap();
        assert_eq!(parsed, HeadVariant::C);
        assert!(serde_json::from_str::<HeadVariant>("\"Head_D\"").is_err());
    }

    #[test]
    fn test_pattern_cycle_visits_all() {
        let mut pattern = PatternKind::Plain;
        let mut seen = Vec::new();
        for _ in 0..PatternKind::ALL.len() {
            seen.push(pattern);
            pattern = pattern.next();
        }
        assert_eq!(seen, PatternKind::ALL);
        assert_eq!(pattern, PatternKind::Plain);
    }
}
