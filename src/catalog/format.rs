//! Display formatting rules for wardrobe data

use std::fmt;

/// Formality tier derived from an item's numeric formality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormalityTier {
    Relaxed,
    Casual,
    Smart,
    Formal,
}

impl FormalityTier {
    /// Display label for the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            FormalityTier::Relaxed => "Relaxed",
            FormalityTier::Casual => "Casual",
            FormalityTier::Smart => "Smart",
            FormalityTier::Formal => "Formal",
        }
    }
}

impl fmt::Display for FormalityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a numeric formality level to its display tier.
///
/// An absent level is treated as 2. Levels are not clamped: values below 0
/// or above 4 are accepted and fall through to the nearest bucket.
pub fn classify_formality(level: Option<i64>) -> FormalityTier {
    let level = level.unwrap_or(2);
    if level >= 4 {
        FormalityTier::Formal
    } else if level >= 3 {
        FormalityTier::Smart
    } else if level >= 2 {
        FormalityTier::Casual
    } else {
        FormalityTier::Relaxed
    }
}

/// Format a raw category tag for display: the first character upper-cased,
/// the remainder lower-cased, and only the first underscore replaced by a
/// space ("rain_coat" becomes "Rain coat"). Later underscores are kept
/// as-is, and an empty string maps to itself.
pub fn format_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let formatted = format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase());
            formatted.replacen('_', " ", 1)
        }
    }
}

/// Confidence score as a whole-percent string.
///
/// The formula is applied verbatim; guarding against scores outside [0, 1]
/// is the caller's concern (1.2 gives "120").
pub fn format_confidence_percent(score: f64) -> String {
    format!("{}", (score * 100.0).round() as i64)
}
