//! Shadow tokens for theming

use opal_core::{Color, Shadow};
use serde::{Deserialize, Serialize};

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowToken {
    /// The fixed soft drop shadow used by the base style applicator
    Soft,
    /// A slightly stronger shadow for floating surfaces (toasts, menus)
    Raised,
    None,
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub shadow_soft: Shadow,
    pub shadow_raised: Shadow,
    pub shadow_none: Shadow,
}

impl ShadowTokens {
    /// Get a shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Soft => &self.shadow_soft,
            ShadowToken::Raised => &self.shadow_raised,
            ShadowToken::None => &self.shadow_none,
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        let base = Color::BLACK;
        Self {
            shadow_soft: Shadow::new(0.0, 2.0, 4.0, 0.0, base.with_alpha(0.1)),
            shadow_raised: Shadow::new(0.0, 4.0, 8.0, 0.0, base.with_alpha(0.15)),
            shadow_none: Shadow::none(),
        }
    }
}
