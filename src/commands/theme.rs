//! Inspect and change the persisted theme preference

use anyhow::Result;

use crate::theme::{ThemeSnapshot, ThemeStore};
use crate::Pressmark;

/// Theme subcommand actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the resolved preference
    Show,
    /// Flip and persist
    Toggle,
    /// Print the stylesheet, first-paint or resolved
    Css { resolved: bool },
    /// Forget the persisted preference
    Reset,
}

/// Run an action against a store and describe the outcome
pub fn apply(store: &mut ThemeStore, action: ThemeAction) -> String {
    match action {
        ThemeAction::Show => {
            let snapshot = store.initialize();
            describe(&snapshot)
        }
        ThemeAction::Toggle => {
            store.initialize();
            let snapshot = store.toggle();
            describe(&snapshot)
        }
        ThemeAction::Css { resolved } => {
            let snapshot = if resolved {
                store.initialize()
            } else {
                store.render()
            };
            snapshot.stylesheet()
        }
        ThemeAction::Reset => {
            store.clear_persisted();
            "Theme preference cleared".to_string()
        }
    }
}

fn describe(snapshot: &ThemeSnapshot) -> String {
    format!(
        "{} ({})",
        snapshot.preference,
        snapshot.preference.toggle_label()
    )
}

pub fn run(site: &Pressmark, action: ThemeAction, prefers_dark: Option<bool>) -> Result<()> {
    let mut store = site.theme_store(prefers_dark);
    println!("{}", apply(&mut store, action));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};
    use tempfile::TempDir;

    #[test]
    fn test_toggle_persists_across_stores() {
        let dir = TempDir::new().unwrap();
        let site = Pressmark::new(dir.path()).unwrap();

        let mut store = site.theme_store(None);
        assert_eq!(apply(&mut store, ThemeAction::Show), "light (Switch to dark mode)");

        let mut store = site.theme_store(None);
        assert_eq!(apply(&mut store, ThemeAction::Toggle), "dark (Switch to light mode)");

        // A fresh session still paints light first, then resolves dark
        let mut store = site.theme_store(Some(false));
        assert_eq!(
            apply(&mut store, ThemeAction::Css { resolved: false }),
            LIGHT.stylesheet()
        );
        assert_eq!(
            apply(&mut store, ThemeAction::Css { resolved: true }),
            DARK.stylesheet()
        );

        let mut store = site.theme_store(None);
        apply(&mut store, ThemeAction::Reset);
        let mut store = site.theme_store(Some(false));
        assert_eq!(apply(&mut store, ThemeAction::Show), "light (Switch to dark mode)");
    }
}
