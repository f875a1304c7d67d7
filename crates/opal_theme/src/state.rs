//! Global theme state singleton
//!
//! Token tables are immutable; the color scheme flag is the only writable
//! field. The runtime model is cooperative and single-threaded, so the
//! `RwLock` exists to satisfy `Sync` for the singleton, not for parallelism:
//! the last completed `set_scheme` call determines all subsequent reads.

use std::sync::{Mutex, OnceLock, RwLock};

use crate::scheme::ColorScheme;
use crate::tokens::*;
use opal_core::{Color, Shadow};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global scheme callback - set by the document layer to reflect the active
/// scheme onto a root-level attribute (or trigger a repaint)
type SchemeCallback = Box<dyn Fn(ColorScheme) + Send + Sync>;

static SCHEME_CALLBACK: Mutex<Option<SchemeCallback>> = Mutex::new(None);

/// Set the scheme-changed callback
///
/// This should be called by the layer owning the element tree to register a
/// function that runs after every `set_scheme`.
pub fn set_scheme_callback<F>(callback: F)
where
    F: Fn(ColorScheme) + Send + Sync + 'static,
{
    *SCHEME_CALLBACK.lock().unwrap() = Some(Box::new(callback));
}

/// Invoke the registered scheme callback, if any
fn trigger_scheme_callback(scheme: ColorScheme) {
    if let Some(callback) = SCHEME_CALLBACK.lock().unwrap().as_ref() {
        callback(scheme);
    }
}

/// Global theme state - accessed directly by widgets during construction
pub struct ThemeState {
    /// Current color scheme (the only mutable shared state)
    scheme: RwLock<ColorScheme>,

    colors: ColorTokens,
    spacing: SpacingTokens,
    typography: TypographyTokens,
    breakpoints: BreakpointTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup)
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(scheme: ColorScheme) {
        let state = ThemeState {
            scheme: RwLock::new(scheme),
            colors: ColorTokens::default(),
            spacing: SpacingTokens::default(),
            typography: TypographyTokens::default(),
            breakpoints: BreakpointTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::default(),
        };

        let _ = THEME_STATE.set(state);
    }

    /// Initialize with the default (light) scheme
    pub fn init_default() {
        Self::init(ColorScheme::Light);
    }

    /// Get the global theme state instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme
    ///
    /// Overwrites the process-wide flag and invokes the registered scheme
    /// callback so a document layer can reflect `data-theme` onto its root.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.write().unwrap();
            if *current == scheme {
                return;
            }
            tracing::debug!(from = ?*current, to = ?scheme, "switching color scheme");
            *current = scheme;
        }
        trigger_scheme_callback(scheme);
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    // ========== Token Access ==========

    /// Get a color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    /// Get all color tokens
    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    /// Get a spacing token value
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    /// Get all spacing tokens
    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    /// Get a font family by role
    pub fn font(&self, token: FontToken) -> &str {
        self.typography.family(token)
    }

    /// Get all typography tokens
    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    /// Get a breakpoint threshold
    pub fn breakpoint(&self, token: BreakpointToken) -> f32 {
        self.breakpoints.get(token)
    }

    /// Get all breakpoint tokens
    pub fn breakpoints(&self) -> &BreakpointTokens {
        &self.breakpoints
    }

    /// Get a radius token value
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Get all radius tokens
    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    /// Get a shadow token value
    pub fn shadow(&self, token: ShadowToken) -> &Shadow {
        self.shadows.get(token)
    }

    /// Get all shadow tokens
    pub fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }
}
