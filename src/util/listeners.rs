//! Token-based many-to-many listener registry.
//!
//! Used for the input action stream and the transition-complete broadcast.
//! Listeners are called in registration order. A listener that panics is
//! not isolated: the panic unwinds out of [`Listeners::emit`] and the
//! remaining listeners do not see that event.

use std::fmt;

/// Handle returned by [`Listeners::subscribe`]; pass it back to
/// [`Listeners::unsubscribe`] to remove exactly that listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Ordered set of callbacks receiving `&T`.
pub struct Listeners<T> {
    next_token: u64,
    entries: Vec<(ListenerToken, Callback<T>)>,
}

impl<T> Listeners<T> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_token: 0,
            entries: Vec::new(),
        }
    }

    /// Register a listener. Tokens are never reused.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.entries.push((token, Box::new(listener)));
        token
    }

    /// Remove the listener registered under `token`.
    ///
    /// Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(t, _)| *t != token);
        self.entries.len() != before
    }

    /// Deliver `event` to every registered listener.
    pub fn emit(&mut self, event: &T) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
