//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

/// Complete set of radius tokens (px)
///
/// Fully-round (circular) corners are not a token; they are the
/// `BorderRadius::Full` style value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_2xl: f32,
}

impl RadiusTokens {
    /// Get a radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Xxl => self.radius_2xl,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 4.0,
            radius_md: 6.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_2xl: 20.0,
        }
    }
}
