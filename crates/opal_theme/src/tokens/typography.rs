//! Typography tokens for theming

use serde::{Deserialize, Serialize};

/// Font role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontToken {
    Body,
    Heading,
}

/// Complete set of typography tokens
///
/// Font sizes are logical pixels at a 16px root (`text_base` == 1rem).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub font_body: String,
    pub font_heading: String,

    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,

    pub weight_normal: u16,
    pub weight_semibold: u16,

    pub leading_tight: f32,
    pub leading_normal: f32,
}

impl TypographyTokens {
    /// Get a font family by role
    pub fn family(&self, token: FontToken) -> &str {
        match token {
            FontToken::Body => &self.font_body,
            FontToken::Heading => &self.font_heading,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_body: "'Inter', sans-serif".to_string(),
            font_heading: "'Poppins', sans-serif".to_string(),
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            weight_normal: 400,
            weight_semibold: 600,
            leading_tight: 1.25,
            leading_normal: 1.5,
        }
    }
}
