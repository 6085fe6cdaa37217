//! Fixed light and dark color palettes
//!
//! A palette is swapped as a whole; there is no per-token mixing between
//! the two.

use super::ThemePreference;

/// A complete named set of color design tokens
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    /// Theme this palette belongs to
    pub theme: ThemePreference,
    tokens: &'static [(&'static str, &'static str)],
}

/// Palette used on first paint and while the light theme is active
pub const LIGHT: Palette = Palette {
    theme: ThemePreference::Light,
    tokens: &[
        ("--color-bg", "#ffffff"),
        ("--color-bg-secondary", "#f8fafc"),
        ("--color-bg-tertiary", "#f1f5f9"),
        ("--color-text", "#0f172a"),
        ("--color-text-secondary", "#475569"),
        ("--color-text-tertiary", "#64748b"),
        ("--color-border", "#e2e8f0"),
        ("--color-border-light", "#f1f5f9"),
        ("--color-primary", "#0f172a"),
        ("--color-primary-hover", "#1e293b"),
        ("--color-accent", "#3b82f6"),
        ("--color-accent-hover", "#2563eb"),
        ("--color-white", "#ffffff"),
        ("--color-black", "#0f172a"),
        ("--color-card-bg", "#ffffff"),
        ("--color-card-shadow", "rgba(0, 0, 0, 0.04)"),
        ("--color-code-bg", "#f8fafc"),
        ("--color-selection", "rgba(59, 130, 246, 0.2)"),
    ],
};

pub const DARK: Palette = Palette {
    theme: ThemePreference::Dark,
    tokens: &[
        ("--color-bg", "#0f172a"),
        ("--color-bg-secondary", "#1e293b"),
        ("--color-bg-tertiary", "#334155"),
        ("--color-text", "#f1f5f9"),
        ("--color-text-secondary", "#94a3b8"),
        ("--color-text-tertiary", "#64748b"),
        ("--color-border", "#334155"),
        ("--color-border-light", "#1e293b"),
        ("--color-primary", "#f1f5f9"),
        ("--color-primary-hover", "#ffffff"),
        ("--color-accent", "#60a5fa"),
        ("--color-accent-hover", "#93c5fd"),
        ("--color-white", "#f1f5f9"),
        ("--color-black", "#0f172a"),
        ("--color-card-bg", "#1e293b"),
        ("--color-card-shadow", "rgba(0, 0, 0, 0.2)"),
        ("--color-code-bg", "#1e293b"),
        ("--color-selection", "rgba(96, 165, 250, 0.3)"),
    ],
};

impl Palette {
    /// Palette for a theme
    pub fn of(theme: ThemePreference) -> &'static Palette {
        match theme {
            ThemePreference::Light => &LIGHT,
            ThemePreference::Dark => &DARK,
        }
    }

    /// Token/value pairs in declaration order
    pub fn tokens(&self) -> &'static [(&'static str, &'static str)] {
        self.tokens
    }

    /// Look up a single token value
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.tokens
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| *value)
    }

    /// Page background, also used for the `theme-color` meta tag
    pub fn background(&self) -> &'static str {
        self.get("--color-bg").unwrap_or("#ffffff")
    }

    /// Declarations only, e.g. `--color-bg: #ffffff; --color-text: ...;`
    pub fn css_variables(&self) -> String {
        self.tokens
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full stylesheet scoping the palette to `:root`
    pub fn stylesheet(&self) -> String {
        format!(
            ":root {{ {} }} ::selection {{ background: var(--color-selection); }} \
             ::-moz-selection {{ background: var(--color-selection); }}",
            self.css_variables()
        )
    }
}
