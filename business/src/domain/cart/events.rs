use tokio::sync::broadcast;

use crate::domain::shared::value_objects::SessionId;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum CartEventKind {
    ItemAdded { item_id: String },
    QuantityChanged { item_id: String, quantity: u8 },
    ItemRemoved { item_id: String },
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartEvent {
    pub session_id: SessionId,
    pub kind: CartEventKind,
}

/// In-process change notifications for carts.
///
/// Publishing with no subscribers is not an error; lagging subscribers miss
/// events and are expected to re-read the cart.
#[derive(Clone)]
pub struct CartNotifier {
    sender: broadcast::Sender<CartEvent>,
}

impl CartNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: CartEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.sender.subscribe()
    }
}

impl Default for CartNotifier {
    fn default() -> Self {
        Self::new()
    }
}
