//! # Stash Event System
//!
//! Input events flow from the UI layer to the session over a bounded
//! crossbeam channel.
//!
//! ```text
//! ┌─────────────┐      ┌─────────────┐      ┌─────────────┐
//! │  Input /    │─────>│   Event     │─────>│   Stash     │
//! │  Renderer   │      │   Channel   │      │   Session   │
//! └─────────────┘      └─────────────┘      └─────────────┘
//! ```
//!
//! The session drains the channel once per frame and applies the batch in
//! FIFO order.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use stashgrid_catalog::{ItemId, TabId};

/// Events the UI layer reports to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum StashEvent {
    // =========================================================================
    // Selection
    // =========================================================================
    /// A tab was clicked in the sidebar.
    SelectTab(TabId),

    /// The search box changed.
    SearchChanged(String),

    /// The rarity dropdown changed (raw selector value).
    RarityChanged(String),

    /// The category dropdown changed (raw selector value).
    CategoryChanged(String),

    // =========================================================================
    // Pointer
    // =========================================================================
    /// The pointer entered an item cell.
    PointerEntered {
        /// Item under the pointer.
        item_id: ItemId,
        /// Pointer x in screen coordinates.
        x: f32,
        /// Pointer y in screen coordinates.
        y: f32,
    },

    /// The pointer moved within the anchored item's cell.
    PointerMoved {
        /// Pointer x in screen coordinates.
        x: f32,
        /// Pointer y in screen coordinates.
        y: f32,
    },

    /// The pointer left the anchored item's cell.
    PointerLeft,

    // =========================================================================
    // Measurements
    // =========================================================================
    /// The detail panel was laid out at this size.
    PanelMeasured {
        /// Panel width.
        width: f32,
        /// Panel height.
        height: f32,
    },

    /// The viewport was resized.
    ViewportResized {
        /// Viewport width.
        width: f32,
        /// Viewport height.
        height: f32,
    },
}

/// Event bus between the UI layer and the session.
///
/// Bounded so a stalled session cannot grow memory without limit.
pub struct EventBus {
    sender: Sender<StashEvent>,
    receiver: Receiver<StashEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight before `send` starts
    ///   reporting a full channel.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender/receiver pair.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<StashEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the channel is full or the session is gone; the
    /// event is dropped in both cases.
    #[inline]
    pub fn send(&self, event: StashEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "event channel full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("event channel closed");
                false
            }
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<StashEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking), oldest first.
    #[inline]
    #[must_use]
    pub fn drain(&self) -> Vec<StashEvent> {
        self.receiver.try_iter().collect()
    }

    /// Receives one event (non-blocking).
    #[inline]
    #[must_use]
    pub fn try_recv(&self) -> Option<StashEvent> {
        self.receiver.try_recv().ok()
    }

    /// Returns the number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_send_receive() {
        let bus = EventBus::new(16);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(StashEvent::SelectTab("tab2".into())));
        assert!(receiver.has_events());
        assert_eq!(receiver.try_recv(), Some(StashEvent::SelectTab("tab2".into())));
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_drain_is_fifo() {
        let (sender, receiver) = EventBus::create_pair(16);

        sender.send(StashEvent::SearchChanged("e".into()));
        sender.send(StashEvent::SearchChanged("ex".into()));
        sender.send(StashEvent::PointerLeft);

        assert_eq!(receiver.pending_count(), 3);
        assert_eq!(
            receiver.drain(),
            vec![
                StashEvent::SearchChanged("e".into()),
                StashEvent::SearchChanged("ex".into()),
                StashEvent::PointerLeft,
            ]
        );
        assert!(!receiver.has_events());
    }

    #[test]
    fn test_full_channel_reports_false() {
        let (sender, receiver) = EventBus::create_pair(1);

        assert!(sender.send(StashEvent::PointerLeft));
        assert!(!sender.send(StashEvent::PointerLeft));
        assert_eq!(receiver.drain().len(), 1);
    }

    #[test]
    fn test_closed_channel_reports_false() {
        let bus = EventBus::new(4);
        let sender = bus.sender();
        drop(bus);

        assert!(!sender.send(StashEvent::PointerLeft));
    }
}
