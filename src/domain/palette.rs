// Category palettes - keyed colour lookup with a neutral fallback
use std::collections::HashMap;

pub const NEUTRAL_TONE: &str = "gray";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPalette {
    tones: HashMap<String, String>,
}

impl CategoryPalette {
    pub fn new(tones: HashMap<String, String>) -> Self {
        Self { tones }
    }

    /// Tone for a category. Compound keys such as `GiftCard|pay_later` fall
    /// back to their base (`GiftCard`) when the full key is not mapped.
    pub fn tone_for(&self, category: &str) -> &str {
        if let Some(tone) = self.tones.get(category) {
            return tone;
        }
        let base = category.split('|').next().unwrap_or(category);
        self.tones
            .get(base)
            .map(String::as_str)
            .unwrap_or(NEUTRAL_TONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment_palette() -> CategoryPalette {
        CategoryPalette::new(HashMap::from([
            ("Adyen".to_string(), "purple".to_string()),
            ("GiftCard".to_string(), "amber".to_string()),
        ]))
    }

    #[test]
    fn test_exact_and_base_lookup() {
        let palette = payment_palette();
        assert_eq!(palette.tone_for("Adyen"), "purple");
        assert_eq!(palette.tone_for("GiftCard|pay_later"), "amber");
    }

    #[test]
    fn test_unknown_category_is_neutral() {
        let palette = payment_palette();
        assert_eq!(palette.tone_for("Swish"), NEUTRAL_TONE);
        assert_eq!(palette.tone_for(""), NEUTRAL_TONE);
        assert_eq!(CategoryPalette::default().tone_for("Adyen"), NEUTRAL_TONE);
    }
}
