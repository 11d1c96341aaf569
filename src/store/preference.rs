//! OS-level color-scheme preference signal.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// Identifies a listener registered with a [`PreferenceSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new "prefers dark" value.
pub type PreferenceListener = Rc<dyn Fn(bool)>;

/// A source of the host's "prefers dark color scheme" setting.
///
/// The theme store only reads and listens; it never writes to the signal.
pub trait PreferenceSignal {
    /// Current value of the preference.
    fn prefers_dark(&self) -> bool;

    /// Registers a listener called whenever the preference changes.
    fn subscribe(&self, listener: PreferenceListener) -> ListenerId;

    /// Removes a previously registered listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ListenerId, PreferenceListener)>>,
}

impl Listeners {
    fn add(&self, listener: PreferenceListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    fn remove(&self, id: ListenerId) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn notify(&self, prefers_dark: bool) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<PreferenceListener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(prefers_dark);
        }
    }
}

/// A preference signal driven by the host.
///
/// Hosts that receive color-scheme change events (or tests) push them in
/// with [`ManualPreference::set_prefers_dark`]. Clones share state.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{ManualPreference, PreferenceSignal};
/// use std::rc::Rc;
/// use std::cell::Cell;
///
/// let signal = ManualPreference::new(false);
/// let seen = Rc::new(Cell::new(None));
/// let sink = Rc::clone(&seen);
/// signal.subscribe(Rc::new(move |dark: bool| sink.set(Some(dark))));
///
/// signal.set_prefers_dark(true);
/// assert_eq!(seen.get(), Some(true));
/// ```
#[derive(Clone)]
pub struct ManualPreference {
    value: Rc<Cell<bool>>,
    listeners: Rc<Listeners>,
}

impl ManualPreference {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            value: Rc::new(Cell::new(prefers_dark)),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Updates the preference, notifying listeners if it changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.value.replace(prefers_dark) != prefers_dark {
            self.listeners.notify(prefers_dark);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ManualPreference {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PreferenceSignal for ManualPreference {
    fn prefers_dark(&self) -> bool {
        self.value.get()
    }

    fn subscribe(&self, listener: PreferenceListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

type ModeDetector = fn() -> bool;

/// Preference signal backed by the operating system's light/dark setting.
///
/// The OS offers no push notification here, so the host calls
/// [`SystemPreference::poll`] on whatever cadence suits it (window focus,
/// a timer); listeners fire only when the detected mode changed.
#[derive(Clone)]
pub struct SystemPreference {
    detector: ModeDetector,
    last: Rc<Cell<bool>>,
    listeners: Rc<Listeners>,
}

impl SystemPreference {
    pub fn new() -> Self {
        Self::with_detector(os_prefers_dark)
    }

    /// Uses a custom detector instead of querying the OS.
    pub fn with_detector(detector: ModeDetector) -> Self {
        Self {
            detector,
            last: Rc::new(Cell::new(detector())),
            listeners: Rc::new(Listeners::default()),
        }
    }

    /// Re-detects the OS mode, returning `true` if it changed.
    pub fn poll(&self) -> bool {
        let now = (self.detector)();
        if self.last.replace(now) == now {
            return false;
        }
        tracing::debug!(prefers_dark = now, "system color scheme changed");
        self.listeners.notify(now);
        true
    }
}

impl Default for SystemPreference {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSignal for SystemPreference {
    fn prefers_dark(&self) -> bool {
        self.last.get()
    }

    fn subscribe(&self, listener: PreferenceListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

fn os_prefers_dark() -> bool {
    // Anything but an explicit dark setting counts as light.
    matches!(detect_os_theme(), OsThemeMode::Dark)
}

/// Scoped registration with a [`PreferenceSignal`].
///
/// The listener is removed when the guard is released or dropped.
pub struct PreferenceSubscription {
    signal: Weak<dyn PreferenceSignal>,
    id: Option<ListenerId>,
}

impl PreferenceSubscription {
    pub(crate) fn register(signal: &Rc<dyn PreferenceSignal>, listener: PreferenceListener) -> Self {
        let id = signal.subscribe(listener);
        Self {
            signal: Rc::downgrade(signal),
            id: Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Removes the listener. Calling this more than once is a no-op.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(signal) = self.signal.upgrade() {
                signal.unsubscribe(id);
            }
        }
    }
}

impl Drop for PreferenceSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for PreferenceSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceSubscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<usize>>, PreferenceListener) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, Rc::new(move |_: bool| sink.set(sink.get() + 1)))
    }

    #[test]
    fn test_manual_preference_notifies_on_change_only() {
        let signal = ManualPreference::new(false);
        let (count, listener) = counter();
        signal.subscribe(listener);

        signal.set_prefers_dark(false);
        assert_eq!(count.get(), 0);

        signal.set_prefers_dark(true);
        signal.set_prefers_dark(true);
        assert_eq!(count.get(), 1);
        assert!(signal.prefers_dark());
    }

    #[test]
    fn test_manual_preference_unsubscribe() {
        let signal = ManualPreference::new(false);
        let (count, listener) = counter();
        let id = signal.subscribe(listener);
        assert_eq!(signal.listener_count(), 1);

        signal.unsubscribe(id);
        signal.set_prefers_dark(true);
        assert_eq!(count.get(), 0);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_subscription_guard_releases_on_drop() {
        let manual = ManualPreference::new(false);
        let signal: Rc<dyn PreferenceSignal> = Rc::new(manual.clone());
        let (count, listener) = counter();

        {
            let guard = PreferenceSubscription::register(&signal, listener);
            assert!(guard.is_active());
            assert_eq!(manual.listener_count(), 1);
        }

        assert_eq!(manual.listener_count(), 0);
        manual.set_prefers_dark(true);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_subscription_release_is_idempotent() {
        let manual = ManualPreference::new(false);
        let signal: Rc<dyn PreferenceSignal> = Rc::new(manual.clone());
        let (_, listener) = counter();

        let mut guard = PreferenceSubscription::register(&signal, listener);
        guard.release();
        guard.release();
        assert!(!guard.is_active());
        assert_eq!(manual.listener_count(), 0);
    }

    #[test]
    fn test_system_preference_poll_with_detector() {
        let signal = SystemPreference::with_detector(|| true);
        assert!(signal.prefers_dark());
        // Detector is constant, so polling never reports a change.
        assert!(!signal.poll());
    }

    #[test]
    fn test_system_preference_poll_notifies_on_change() {
        use std::sync::atomic::{AtomicBool, Ordering};

        static OS_DARK: AtomicBool = AtomicBool::new(false);
        fn detect() -> bool {
            OS_DARK.load(Ordering::SeqCst)
        }

        let signal = SystemPreference::with_detector(detect);
        let (count, listener) = counter();
        signal.subscribe(listener);

        OS_DARK.store(true, Ordering::SeqCst);
        assert!(signal.poll());
        assert!(signal.prefers_dark());
        assert!(!signal.poll());
        assert_eq!(count.get(), 1);
    }
}
