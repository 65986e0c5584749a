//! Ordered one-to-many subscription registry.
//!
//! The player is the only observable subject in the world: stateful tiles and
//! enemy collision watchers subscribe to it and are dispatched in
//! reverse-registration order after every settled player mutation. Handles
//! make the channel explicit: whoever subscribed must hold the handle to
//! unsubscribe, and misuse is a programming error rather than a runtime
//! condition.

/// Opaque ticket identifying one live subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

/// Ordered registry of subscribers carrying a payload of type `T`.
///
/// Dispatch order is reverse registration: the most recently subscribed
/// watcher reacts first. The registry never reuses handles.
#[derive(Debug)]
pub struct Subscriptions<T> {
    entries: Vec<(SubscriptionHandle, T)>,
    next_handle: u64,
}

impl<T> Subscriptions<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Registers a subscriber and returns the handle that identifies it.
    pub fn subscribe(&mut self, payload: T) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, payload));
        handle
    }

    /// Removes a subscriber, returning its payload.
    ///
    /// Panics when the handle is not attached: unsubscribing something that
    /// was never subscribed (or already removed) is a bug in the caller, not
    /// a recoverable condition.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> T {
        let index = self
            .entries
            .iter()
            .position(|(attached, _)| *attached == handle)
            .unwrap_or_else(|| panic!("{handle:?} is not attached to this subject"));
        self.entries.remove(index).1
    }

    /// Reports whether the handle is currently attached.
    #[must_use]
    pub fn contains(&self, handle: SubscriptionHandle) -> bool {
        self.entries.iter().any(|(attached, _)| *attached == handle)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no subscriptions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Captures the current subscribers in dispatch (reverse-registration)
    /// order.
    ///
    /// Dispatch works from a snapshot so that reactions may subscribe and
    /// unsubscribe freely mid-burst; reactors must re-check that they are
    /// still the party the handle was issued to.
    #[must_use]
    pub fn snapshot_rev(&self) -> Vec<(SubscriptionHandle, T)>
    where
        T: Copy,
    {
        self.entries.iter().rev().copied().collect()
    }
}

impl<T> Default for Subscriptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Subscriptions;

    #[test]
    fn dispatch_order_is_reverse_registration() {
        let mut subscriptions = Subscriptions::new();
        let first = subscriptions.subscribe('a');
        let second = subscriptions.subscribe('b');
        let third = subscriptions.subscribe('c');

        let order: Vec<char> = subscriptions
            .snapshot_rev()
            .into_iter()
            .map(|(_, payload)| payload)
            .collect();
        assert_eq!(order, vec!['c', 'b', 'a']);
        assert!(subscriptions.contains(first));
        assert!(subscriptions.contains(second));
        assert!(subscriptions.contains(third));
    }

    #[test]
    fn unsubscribe_returns_the_payload() {
        let mut subscriptions = Subscriptions::new();
        let handle = subscriptions.subscribe(42u8);
        assert_eq!(subscriptions.unsubscribe(handle), 42);
        assert!(subscriptions.is_empty());
    }

    #[test]
    fn handles_are_never_reused() {
        let mut subscriptions = Subscriptions::new();
        let first = subscriptions.subscribe(1u8);
        assert_eq!(subscriptions.unsubscribe(first), 1);
        let second = subscriptions.subscribe(2u8);
        assert_ne!(first, second);
        assert!(!subscriptions.contains(first));
    }

    #[test]
    #[should_panic(expected = "not attached")]
    fn unsubscribing_an_absent_handle_panics() {
        let mut subscriptions = Subscriptions::new();
        let handle = subscriptions.subscribe(0u8);
        let _ = subscriptions.unsubscribe(handle);
        let _ = subscriptions.unsubscribe(handle);
    }
}
