//! Breakpoint tokens for responsive layouts

use serde::{Deserialize, Serialize};

/// Breakpoint token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointToken {
    Sm,
    Md,
    Lg,
    Xl,
}

/// Complete set of breakpoint tokens (viewport width thresholds, px)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreakpointTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl BreakpointTokens {
    /// Get a width threshold by token key
    pub fn get(&self, token: BreakpointToken) -> f32 {
        match token {
            BreakpointToken::Sm => self.sm,
            BreakpointToken::Md => self.md,
            BreakpointToken::Lg => self.lg,
            BreakpointToken::Xl => self.xl,
        }
    }
}

impl Default for BreakpointTokens {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
        }
    }
}
