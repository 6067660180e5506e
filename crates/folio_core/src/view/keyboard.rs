//! Window-level key bindings with scoped registration.
//!
//! # Responsibility
//! - Model the host's global key-event subscription as a registry.
//! - Hand out guards that deregister their listener on drop.
//!
//! # Invariants
//! - A listener lives exactly as long as its `KeySubscription`.
//! - The most recently registered live listener binding a key wins.
//! - Single-threaded: the hub is `Rc`-backed and never crosses threads.

use log::{debug, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::{Rc, Weak};

/// Host key names understood by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
}

impl Key {
    /// Stable host-side key name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Escape => "Escape",
            Self::Enter => "Enter",
        }
    }

    /// Parses a host key name. Names are case-sensitive.
    pub fn parse(value: &str) -> Result<Self, KeyParseError> {
        match value.trim() {
            "ArrowLeft" => Ok(Self::ArrowLeft),
            "ArrowRight" => Ok(Self::ArrowRight),
            "Escape" => Ok(Self::Escape),
            "Enter" => Ok(Self::Enter),
            other => Err(KeyParseError::Unsupported(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Unsupported(String),
}

impl Display for KeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(f, "unsupported key: `{value}`"),
        }
    }
}

impl Error for KeyParseError {}

/// What a bound key asks its listener to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    Close,
}

pub type KeyBindings = BTreeMap<Key, KeyAction>;
pub type ListenerId = u64;

/// Arrow keys page the carousel, escape closes it.
pub fn lightbox_bindings() -> KeyBindings {
    KeyBindings::from([
        (Key::ArrowLeft, KeyAction::Previous),
        (Key::ArrowRight, KeyAction::Next),
        (Key::Escape, KeyAction::Close),
    ])
}

#[derive(Debug, Default)]
struct HubState {
    next_id: ListenerId,
    listeners: Vec<Listener>,
}

#[derive(Debug)]
struct Listener {
    id: ListenerId,
    owner: &'static str,
    bindings: KeyBindings,
}

impl HubState {
    fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let index = self.listeners.iter().position(|listener| listener.id == id)?;
        Some(self.listeners.remove(index))
    }
}

/// Registry standing in for the window-level key listener list.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHub {
    state: Rc<RefCell<HubState>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bindings` for `owner` until the returned guard is dropped.
    pub fn subscribe(&self, owner: &'static str, bindings: KeyBindings) -> KeySubscription {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.push(Listener {
            id,
            owner,
            bindings,
        });
        debug!(
            "event=key_subscribe module=keyboard status=ok owner={owner} listener={id} active={}",
            state.listeners.len()
        );

        KeySubscription {
            id,
            hub: Rc::downgrade(&self.state),
        }
    }

    /// Finds the listener that should receive `key`.
    pub fn dispatch(&self, key: Key) -> Option<(ListenerId, KeyAction)> {
        self.state
            .borrow()
            .listeners
            .iter()
            .rev()
            .find_map(|listener| {
                listener
                    .bindings
                    .get(&key)
                    .map(|action| (listener.id, *action))
            })
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.state
            .borrow()
            .listeners
            .iter()
            .any(|listener| listener.id == id)
    }
}

/// Guard for one registered listener; deregisters on drop.
#[derive(Debug)]
pub struct KeySubscription {
    id: ListenerId,
    hub: Weak<RefCell<HubState>>,
}

impl KeySubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Deregisters now. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        let Some(state) = self.hub.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            warn!(
                "event=key_unsubscribe module=keyboard status=error reason=hub_busy listener={}",
                self.id
            );
            return;
        };
        if let Some(listener) = state.remove(self.id) {
            debug!(
                "event=key_unsubscribe module=keyboard status=ok owner={} listener={} active={}",
                listener.owner,
                listener.id,
                state.listeners.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{lightbox_bindings, Key, KeyAction, KeyBindings, KeyParseError, KeyboardHub};

    #[test]
    fn parses_supported_key_names() {
        assert_eq!(Key::parse("ArrowLeft").expect("parse"), Key::ArrowLeft);
        assert_eq!(Key::parse(" Escape ").expect("parse"), Key::Escape);
        assert_eq!(Key::parse("Enter").expect("parse"), Key::Enter);
    }

    #[test]
    fn rejects_unknown_or_differently_cased_keys() {
        assert_eq!(
            Key::parse("escape").expect_err("lowercase must fail"),
            KeyParseError::Unsupported("escape".to_string())
        );
        assert!(Key::parse("Tab").is_err());
    }

    #[test]
    fn dropping_subscription_deregisters_listener() {
        let hub = KeyboardHub::new();
        let subscription = hub.subscribe("test", lightbox_bindings());
        let id = subscription.id();
        assert_eq!(hub.listener_count(), 1);
        assert!(hub.is_registered(id));

        drop(subscription);
        assert_eq!(hub.listener_count(), 0);
        assert!(!hub.is_registered(id));
        assert_eq!(hub.dispatch(Key::Escape), None);
    }

    #[test]
    fn latest_listener_binding_a_key_wins() {
        let hub = KeyboardHub::new();
        let first = hub.subscribe("first", lightbox_bindings());
        let second = hub.subscribe(
            "second",
            KeyBindings::from([(Key::Escape, KeyAction::Previous)]),
        );

        assert_eq!(
            hub.dispatch(Key::Escape),
            Some((second.id(), KeyAction::Previous))
        );
        assert_eq!(
            hub.dispatch(Key::ArrowRight),
            Some((first.id(), KeyAction::Next))
        );

        second.release();
        assert_eq!(
            hub.dispatch(Key::Escape),
            Some((first.id(), KeyAction::Close))
        );
    }

    #[test]
    fn unbound_key_reaches_nobody() {
        let hub = KeyboardHub::new();
        let _subscription = hub.subscribe("test", lightbox_bindings());
        assert_eq!(hub.dispatch(Key::Enter), None);
    }

    #[test]
    fn guard_outliving_hub_is_harmless() {
        let hub = KeyboardHub::new();
        let subscription = hub.subscribe("test", lightbox_bindings());
        drop(hub);
        drop(subscription);
    }
}
