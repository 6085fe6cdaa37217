//! Theme module - light/dark preference state and palettes

pub mod palette;
mod preference;
pub mod storage;
mod store;

pub use palette::Palette;
pub use preference::ThemePreference;
pub use storage::{DisabledStorage, JsonFileStorage, MemoryStorage, PreferenceStorage};
pub use store::{
    ColorSchemeSignal, PreferenceSource, SubscriptionId, ThemeHandle, ThemeSnapshot, ThemeStore,
    ROOT_ATTRIBUTE, STORAGE_KEY,
};
