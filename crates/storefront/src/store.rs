//! Shared state store: cart contents and the logged-in user.
//!
//! A single process-wide store with an explicit subscribe/notify contract.
//! Every [`Action`] replaces the slice it touches wholesale, then every
//! subscriber is called with the new snapshot before `dispatch` returns.
//!
//! Dispatches are serialized from reducer to last notification, so every
//! listener sees snapshots in dispatch order. Listeners run on the
//! dispatching thread without the state lock held, so they may read the
//! store. They must not dispatch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use food_villa_core::{CartLine, MenuItemId, Price};
use serde::Serialize;
use tracing::{debug, warn};

/// Cart slice of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartState {
    pub items: Vec<CartLine>,
}

impl CartState {
    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line's price.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLine::price).sum()
    }
}

/// User slice of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserState {
    pub logged_in_user: String,
}

/// Everything the store holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreState {
    pub cart: CartState,
    pub user: UserState,
}

/// Named updates the store accepts.
#[derive(Debug, Clone)]
pub enum Action {
    /// Append a line to the cart.
    AddItem(CartLine),
    /// Remove the line with the given item id, or the most recently added
    /// line when no id is given.
    RemoveItem(Option<MenuItemId>),
    /// Empty the cart.
    ClearCart,
    /// Replace the logged-in user's display name.
    SetUserName(String),
}

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&StoreState) + Send + Sync>;

/// The process-wide store.
///
/// Cheap to clone; clones share state and subscribers.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<AppStoreInner>,
}

struct AppStoreInner {
    state: RwLock<StoreState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    dispatching: Mutex<()>,
}

impl AppStore {
    /// Create a store with an empty cart and the given placeholder user.
    #[must_use]
    pub fn new(default_user: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStoreInner {
                state: RwLock::new(StoreState {
                    cart: CartState::default(),
                    user: UserState {
                        logged_in_user: default_user.into(),
                    },
                }),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                dispatching: Mutex::new(()),
            }),
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.read(Clone::clone)
    }

    /// Read a projection of the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&StoreState) -> T) -> T {
        self.read(selector)
    }

    /// Apply an action, notify every subscriber, and return the new state.
    pub fn dispatch(&self, action: Action) -> StoreState {
        // Held until every listener has seen this snapshot
        let _dispatching = self
            .inner
            .dispatching
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let snapshot = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            apply(&mut state, action);
            state.clone()
        };

        debug!(
            cart_items = snapshot.cart.len(),
            user = %snapshot.user.logged_in_user,
            "Store updated"
        );
        self.notify(&snapshot);
        snapshot
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&StoreState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let state = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn listeners(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, snapshot: &StoreState) {
        // Clone the list so listeners run without the lock held
        let listeners: Vec<Listener> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

/// Reducer: replace the touched slice with its updated copy.
fn apply(state: &mut StoreState, action: Action) {
    match action {
        Action::AddItem(line) => {
            let mut items = state.cart.items.clone();
            items.push(line);
            state.cart = CartState { items };
        }
        Action::RemoveItem(id) => {
            let mut items = state.cart.items.clone();
            match id {
                Some(id) => {
                    if let Some(pos) = items.iter().rposition(|line| line.item.id == id) {
                        items.remove(pos);
                    } else {
                        debug!(item_id = %id, "Remove requested for item not in cart");
                    }
                }
                None => {
                    items.pop();
                }
            }
            state.cart = CartState { items };
        }
        Action::ClearCart => {
            state.cart = CartState::default();
        }
        Action::SetUserName(name) => {
            let name = name.trim();
            if name.is_empty() {
                warn!("Ignoring blank user name");
                return;
            }
            state.user = UserState {
                logged_in_user: name.to_string(),
            };
        }
    }
}
