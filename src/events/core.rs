use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::ItemRef;

/// Token returned by [`Channel::subscribe`], used to unsubscribe later.
///
/// Tokens are unique for the lifetime of the process, so a token from one
/// channel never removes a listener from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

impl Subscription {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

type Listener<A> = Box<dyn FnMut(&A)>;

/// Ordered list of listeners for one notification kind.
pub struct Channel<A> {
    listeners: Vec<(Subscription, Listener<A>)>,
}

impl<A> Default for Channel<A> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<A> Channel<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&A) + 'static,
    {
        let subscription = Subscription::next();
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns `false` if the token is unknown here.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn emit(&mut self, payload: &A) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(payload);
        }
    }
}

impl Channel<()> {
    /// Fire a payload-less notification.
    pub fn notify(&mut self) {
        self.emit(&());
    }
}

impl<A> fmt::Debug for Channel<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Every notification an inventory emits.
#[derive(Debug)]
pub struct InventoryEvents<I> {
    /// An item was placed by `add` or `add_at`.
    pub item_added: Channel<ItemRef<I>>,
    /// An item was taken out by `remove`.
    pub item_removed: Channel<ItemRef<I>>,
    /// An item was released by `drop_item`, `drop_all` or resize eviction.
    pub item_dropped: Channel<ItemRef<I>>,
    pub cleared: Channel<()>,
    pub resized: Channel<()>,
}

impl<I> Default for InventoryEvents<I> {
    fn default() -> Self {
        Self {
            item_added: Channel::new(),
            item_removed: Channel::new(),
            item_dropped: Channel::new(),
            cleared: Channel::new(),
            resized: Channel::new(),
        }
    }
}

impl<I> InventoryEvents<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a listener from whichever channel holds it.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.item_added.unsubscribe(subscription)
            || self.item_removed.unsubscribe(subscription)
            || self.item_dropped.unsubscribe(subscription)
            || self.cleared.unsubscribe(subscription)
            || self.resized.unsubscribe(subscription)
    }
}
