//! Brand palette and design tokens for the marketplace Web UI.
//!
//! Tokens are published as `--color-<id>` custom properties holding space-separated RGB
//! channels, which is the form Tailwind needs for opacity modifiers such as `bg-primary/80`.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier used in class names (e.g., "background").
    pub name: &'static str,
    /// Hex RGB value for the token.
    pub hex: &'static str,
}

impl ColorToken {
    /// Custom property name for the token.
    #[must_use]
    pub fn css_var(self) -> String {
        format!("--color-{}", self.name)
    }

    /// Space-separated decimal RGB channels, or `None` when `hex` is not `#RRGGBB`.
    #[must_use]
    pub fn rgb_channels(self) -> Option<String> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(format!(
            "{} {} {}",
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?
        ))
    }
}

/// Page backdrop, also used for controls sitting on the card.
pub const BACKGROUND: ColorToken = ColorToken {
    name: "background",
    hex: "#111316",
};
/// Elevated surfaces such as the login card and toasts.
pub const FOREGROUND: ColorToken = ColorToken {
    name: "foreground",
    hex: "#1F2226",
};
/// Focus rings and hover fills.
pub const PRIMARY: ColorToken = ColorToken {
    name: "primary",
    hex: "#4F85B1",
};
/// Input borders.
pub const SECONDARY: ColorToken = ColorToken {
    name: "secondary",
    hex: "#6C5387",
};

/// All tokens published to the document.
pub const TOKENS: [ColorToken; 4] = [BACKGROUND, FOREGROUND, PRIMARY, SECONDARY];

/// Inline `style` declaration defining every token as a custom property.
#[must_use]
pub fn inline_style() -> String {
    TOKENS
        .iter()
        .filter_map(|token| {
            token
                .rgb_channels()
                .map(|rgb| format!("{}: {rgb};", token.css_var()))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_decode_hex() {
        assert_eq!(PRIMARY.rgb_channels().as_deref(), Some("79 133 177"));
        let bad = ColorToken {
            name: "bad",
            hex: "4F85B1",
        };
        assert_eq!(bad.rgb_channels(), None);
        let short = ColorToken {
            name: "short",
            hex: "#FFF",
        };
        assert_eq!(short.rgb_channels(), None);
    }

    #[test]
    fn inline_style_lists_every_token() {
        let style = inline_style();
        for token in TOKENS {
            assert!(style.contains(&token.css_var()), "missing {}", token.name);
        }
        assert!(style.starts_with("--color-background: 17 19 22;"));
    }
}
