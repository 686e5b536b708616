//! Source pattern normalization
//!
//! Rewrites legacy host abbreviations in rule patterns to their canonical
//! long form. Replacements are literal and applied in order.

use crate::config::Replacement;

/// Literal substring rewriter for source patterns
#[derive(Debug, Clone)]
pub struct PatternNormalizer {
    replacements: Vec<Replacement>,
}

impl PatternNormalizer {
    /// Create a normalizer from a replacement table
    pub fn new(replacements: Vec<Replacement>) -> Self {
        Self { replacements }
    }

    /// Apply every replacement; a missing substring is a no-op
    pub fn normalize(&self, pattern: &str) -> String {
        self.replacements
            .iter()
            .fold(pattern.to_string(), |acc, r| acc.replace(&r.from, &r.to))
    }
}

impl Default for PatternNormalizer {
    fn default() -> Self {
        Self::new(crate::config::ConverterConfig::default().replacements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r"^https?://prd-game-a[0-9]?-gbf\.akamaized\.net/assets/img/sp/assets/summon/b/2040056000\.png";

    #[test]
    fn test_rewrites_legacy_host() {
        let normalizer = PatternNormalizer::default();
        assert_eq!(
            normalizer.normalize(LEGACY),
            r"^https?://prd-game-a[0-9]?-granbluefantasy\.akamaized\.net/assets/img/sp/assets/summon/b/2040056000\.png"
        );
    }

    #[test]
    fn test_absent_substring_is_noop() {
        let normalizer = PatternNormalizer::default();
        assert_eq!(normalizer.normalize("zeta.png"), "zeta.png");
        assert_eq!(normalizer.normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = PatternNormalizer::default();
        let once = normalizer.normalize(LEGACY);
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn test_custom_table() {
        let normalizer = PatternNormalizer::new(vec![Replacement {
            from: "cdn-old".to_string(),
            to: "cdn".to_string(),
        }]);
        assert_eq!(normalizer.normalize("https://cdn-old/x"), "https://cdn/x");
    }
}
