//! Theme preference store
//!
//! Holds the single active [`ThemePreference`] for a session. The store starts
//! out light and keeps rendering the light palette until [`ThemeStore::initialize`]
//! has run, so the first paint always matches the server-rendered markup. The
//! stored or system preference is applied in that second pass, at the cost of a
//! one-frame flash for dark users.

use std::cell::RefCell;
use std::rc::Rc;

use super::palette::Palette;
use super::storage::PreferenceStorage;
use super::ThemePreference;

/// Storage key for the persisted preference
pub const STORAGE_KEY: &str = "theme";

/// Attribute set on the document root to scope the CSS variables
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// The operating environment's "prefers dark" signal
pub trait ColorSchemeSignal {
    /// `None` when the environment cannot tell
    fn prefers_dark(&self) -> Option<bool>;
}

impl ColorSchemeSignal for bool {
    fn prefers_dark(&self) -> Option<bool> {
        Some(*self)
    }
}

impl ColorSchemeSignal for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Where the initial preference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    Stored,
    System,
    Default,
}

/// What a render pass sees: the preference and the palette to paint with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub palette: &'static Palette,
}

impl ThemeSnapshot {
    fn of(preference: ThemePreference) -> Self {
        Self {
            preference,
            palette: Palette::of(preference),
        }
    }

    /// Stylesheet for this snapshot's palette
    pub fn stylesheet(&self) -> String {
        self.palette.stylesheet()
    }
}

/// Single source of truth for the active theme
pub struct ThemeStore {
    storage: Box<dyn PreferenceStorage>,
    signal: Box<dyn ColorSchemeSignal>,
    preference: ThemePreference,
    initialized: bool,
    root: Option<ThemePreference>,
}

impl ThemeStore {
    /// Create a store that has not yet run its initialization pass
    pub fn new<S, C>(storage: S, signal: C) -> Self
    where
        S: PreferenceStorage + 'static,
        C: ColorSchemeSignal + 'static,
    {
        Self {
            storage: Box::new(storage),
            signal: Box::new(signal),
            preference: ThemePreference::Light,
            initialized: false,
            root: None,
        }
    }

    /// Current preference
    pub fn get(&self) -> ThemePreference {
        self.preference
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Snapshot for the current render pass
    ///
    /// Until initialization completes this is always the light palette.
    pub fn render(&self) -> ThemeSnapshot {
        if self.initialized {
            ThemeSnapshot::of(self.preference)
        } else {
            ThemeSnapshot::of(ThemePreference::Light)
        }
    }

    /// Value of the `data-theme` root attribute, once it has been set
    pub fn root_attribute(&self) -> Option<(&'static str, &'static str)> {
        self.root.map(|theme| (ROOT_ATTRIBUTE, theme.as_str()))
    }

    /// Resolve the authoritative preference and apply it
    ///
    /// Runs once; later calls leave the state untouched.
    pub fn initialize(&mut self) -> ThemeSnapshot {
        if self.initialized {
            tracing::debug!("Theme store already initialized");
            return self.render();
        }

        let (preference, source) = self.resolve_initial();
        tracing::debug!("Initial theme {} from {:?}", preference, source);

        self.preference = preference;
        self.initialized = true;
        self.apply();
        self.render()
    }

    /// Flip between light and dark, persist, and re-apply
    pub fn toggle(&mut self) -> ThemeSnapshot {
        self.preference = self.preference.toggled();
        tracing::debug!("Theme toggled to {}", self.preference);
        self.apply();
        self.render()
    }

    /// Forget the persisted preference; the current value is kept
    pub fn clear_persisted(&mut self) {
        if let Err(e) = self.storage.remove_item(STORAGE_KEY) {
            tracing::warn!("Failed to clear stored theme: {}", e);
        }
    }

    fn resolve_initial(&self) -> (ThemePreference, PreferenceSource) {
        if let Some(stored) = self.read_stored() {
            return (stored, PreferenceSource::Stored);
        }
        if self.signal.prefers_dark() == Some(true) {
            return (ThemePreference::Dark, PreferenceSource::System);
        }
        (ThemePreference::Light, PreferenceSource::Default)
    }

    fn read_stored(&self) -> Option<ThemePreference> {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::debug!("Theme storage unreadable, treating as absent: {}", e);
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                None
            }
        }
    }

    fn apply(&mut self) {
        if let Err(e) = self.storage.set_item(STORAGE_KEY, self.preference.as_str()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        self.root = Some(self.preference);
    }
}

type Subscriber = Box<dyn FnMut(&ThemeSnapshot)>;

/// Shared handle injected at the root of the UI tree
///
/// Cloning the handle shares the same store. Not `Send`: the UI runs on one
/// thread.
#[derive(Clone)]
pub struct ThemeHandle {
    store: Rc<RefCell<ThemeStore>>,
    subscribers: Rc<RefCell<Vec<(usize, Subscriber)>>>,
    // Ids dropped while their list was taken out for notification
    removed: Rc<RefCell<Vec<usize>>>,
    next_id: Rc<RefCell<usize>>,
}

/// Token returned by [`ThemeHandle::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

impl ThemeHandle {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            removed: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(RefCell::new(0)),
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.store.borrow().get()
    }

    pub fn render(&self) -> ThemeSnapshot {
        self.store.borrow().render()
    }

    pub fn root_attribute(&self) -> Option<(&'static str, &'static str)> {
        self.store.borrow().root_attribute()
    }

    /// Run the initialization pass and notify subscribers if it changed anything
    pub fn initialize(&self) -> ThemeSnapshot {
        let (before, snapshot, first) = {
            let mut store = self.store.borrow_mut();
            let first = !store.is_initialized();
            let before = store.render();
            (before, store.initialize(), first)
        };
        if first && snapshot != before {
            self.notify(&snapshot);
        }
        snapshot
    }

    pub fn toggle(&self) -> ThemeSnapshot {
        let snapshot = self.store.borrow_mut().toggle();
        self.notify(&snapshot);
        snapshot
    }

    /// Register a callback run after every theme change
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ThemeSnapshot) + 'static,
    {
        let mut next = self.next_id.borrow_mut();
        let id = *next;
        *next += 1;
        self.subscribers.borrow_mut().push((id, Box::new(callback)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id.0);
        self.removed.borrow_mut().push(id.0);
    }

    fn notify(&self, snapshot: &ThemeSnapshot) {
        // Callbacks may use the handle, so none of our borrows are held while they run
        self.removed.borrow_mut().clear();
        let mut active = std::mem::take(&mut *self.subscribers.borrow_mut());
        for (_, callback) in active.iter_mut() {
            callback(snapshot);
        }
        let removed = std::mem::take(&mut *self.removed.borrow_mut());
        active.retain(|(id, _)| !removed.contains(id));
        let mut slot = self.subscribers.borrow_mut();
        active.append(&mut slot);
        *slot = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::theme::palette::{DARK, LIGHT};
    use crate::theme::storage::{DisabledStorage, MemoryStorage};

    /// Storage that shares its contents with the test after being boxed
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<MemoryStorage>>);

    impl PreferenceStorage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.borrow().get_item(key)
        }
        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().set_item(key, value)
        }
        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().remove_item(key)
        }
    }

    impl SharedStorage {
        fn stored(&self) -> Option<String> {
            self.0.borrow().get_item(STORAGE_KEY).unwrap()
        }
    }

    #[test]
    fn test_first_paint_is_light() {
        let storage = MemoryStorage::with_item(STORAGE_KEY, "dark");
        let mut store = ThemeStore::new(storage, true);

        let first = store.render();
        assert_eq!(first.preference, ThemePreference::Light);
        assert_eq!(first.palette, &LIGHT);
        assert_eq!(store.get(), ThemePreference::Light);
        assert_eq!(store.root_attribute(), None);

        let resolved = store.initialize();
        assert_eq!(resolved.palette, &DARK);
        assert_eq!(store.get(), ThemePreference::Dark);
        assert_eq!(store.root_attribute(), Some(("data-theme", "dark")));
    }

    #[test]
    fn test_resolution_order() {
        // Stored value wins over the system signal
        let mut store = ThemeStore::new(MemoryStorage::with_item(STORAGE_KEY, "light"), true);
        assert_eq!(store.initialize().preference, ThemePreference::Light);

        let mut store = ThemeStore::new(MemoryStorage::new(), true);
        assert_eq!(store.initialize().preference, ThemePreference::Dark);

        let mut store = ThemeStore::new(MemoryStorage::new(), None::<bool>);
        assert_eq!(store.initialize().preference, ThemePreference::Light);

        let mut store = ThemeStore::new(MemoryStorage::new(), false);
        assert_eq!(store.initialize().preference, ThemePreference::Light);
    }

    #[test]
    fn test_malformed_value_falls_back_to_signal() {
        let mut store = ThemeStore::new(MemoryStorage::with_item(STORAGE_KEY, "sepia"), true);
        assert_eq!(store.initialize().preference, ThemePreference::Dark);
    }

    #[test]
    fn test_disabled_storage_is_silent() {
        let mut store = ThemeStore::new(DisabledStorage, Some(true));
        assert_eq!(store.initialize().preference, ThemePreference::Dark);
        assert_eq!(store.toggle().preference, ThemePreference::Light);
        assert_eq!(store.root_attribute(), Some(("data-theme", "light")));
    }

    #[test]
    fn test_toggle_round_trip_persists() {
        let storage = SharedStorage::default();
        let mut store = ThemeStore::new(storage.clone(), false);
        store.initialize();
        assert_eq!(storage.stored().as_deref(), Some("light"));

        assert_eq!(store.toggle().preference, ThemePreference::Dark);
        assert_eq!(storage.stored().as_deref(), Some("dark"));

        assert_eq!(store.toggle().preference, ThemePreference::Light);
        assert_eq!(storage.stored().as_deref(), Some("light"));
    }

    #[test]
    fn test_initialize_runs_once() {
        let storage = SharedStorage::default();
        let mut store = ThemeStore::new(storage.clone(), true);
        store.initialize();
        store.toggle();
        assert_eq!(store.initialize().preference, ThemePreference::Light);
        assert_eq!(storage.stored().as_deref(), Some("light"));
    }

    #[test]
    fn test_clear_persisted() {
        let storage = SharedStorage::default();
        let mut store = ThemeStore::new(storage.clone(), false);
        store.initialize();
        store.toggle();
        store.clear_persisted();
        assert_eq!(storage.stored(), None);
        assert_eq!(store.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_handle_notifies_subscribers() {
        let handle = ThemeHandle::new(ThemeStore::new(MemoryStorage::new(), true));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let reader = handle.clone();
        let id = handle.subscribe(move |snapshot| {
            // Reading through the handle inside a callback must not panic
            assert_eq!(reader.get(), snapshot.preference);
            sink.borrow_mut().push(snapshot.palette.theme);
        });

        handle.initialize();
        handle.toggle();
        handle.unsubscribe(id);
        handle.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![ThemePreference::Dark, ThemePreference::Light]
        );
        assert_eq!(handle.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_handle_one_shot_subscriber() {
        let handle = ThemeHandle::new(ThemeStore::new(MemoryStorage::new(), false));
        let once = Rc::new(RefCell::new(0));
        let always = Rc::new(RefCell::new(0));
        let own_id: Rc<RefCell<Option<SubscriptionId>>> = Rc::new(RefCell::new(None));

        let counter = once.clone();
        let remover = handle.clone();
        let slot = own_id.clone();
        let id = handle.subscribe(move |_| {
            *counter.borrow_mut() += 1;
            if let Some(id) = *slot.borrow() {
                remover.unsubscribe(id);
            }
        });
        *own_id.borrow_mut() = Some(id);

        let counter = always.clone();
        handle.subscribe(move |_| *counter.borrow_mut() += 1);

        handle.toggle();
        handle.toggle();
        handle.toggle();

        assert_eq!(*once.borrow(), 1);
        assert_eq!(*always.borrow(), 3);
    }

    #[test]
    fn test_handle_initialize_without_change_is_quiet() {
        let handle = ThemeHandle::new(ThemeStore::new(MemoryStorage::new(), false));
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        handle.subscribe(move |_| *counter.borrow_mut() += 1);

        handle.initialize();
        assert_eq!(*count.borrow(), 0);
        assert_eq!(handle.root_attribute(), Some(("data-theme", "light")));
    }
}
