//! Color tokens for theming

use opal_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Background,
    Foreground,
}

/// Complete set of semantic color tokens
///
/// The same palette serves both schemes; dark mode swaps the roles of
/// `background` and `foreground` at the styling layer (the inverted-ink
/// convention) rather than carrying a second table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub background: Color,
    pub foreground: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::Secondary => self.secondary,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Background => self.background,
            ColorToken::Foreground => self.foreground,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: Color::from_hex(0x3B82F6),
            secondary: Color::from_hex(0x6366F1),
            success: Color::from_hex(0x22C55E),
            warning: Color::from_hex(0xF59E0B),
            error: Color::from_hex(0xEF4444),
            background: Color::from_hex(0xFFFFFF),
            foreground: Color::from_hex(0x1F2937),
        }
    }
}
