// Reserved common events waiting to be run

use crate::engine::input::{ActionId, ActionScheduler};
use log::debug;
use std::collections::VecDeque;

/// FIFO of reserved common events.
///
/// Reservations are never merged: reserving the same event twice runs it twice.
#[derive(Debug, Default)]
pub struct CommonEventQueue {
    queue: VecDeque<ActionId>,
}

impl CommonEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an event is waiting to run
    pub fn is_reserved(&self, action: ActionId) -> bool {
        self.queue.contains(&action)
    }

    /// Take the oldest reserved event
    pub fn retrieve(&mut self) -> Option<ActionId> {
        self.queue.pop_front()
    }

    /// Run every reserved event in reservation order.
    /// Returns how many were run.
    pub fn run_pending(&mut self, mut run: impl FnMut(ActionId)) -> usize {
        let mut count = 0;
        while let Some(action) = self.retrieve() {
            debug!("Running common event {}", action);
            run(action);
            count += 1;
        }
        count
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl ActionScheduler for CommonEventQueue {
    fn reserve(&mut self, action: ActionId) {
        self.queue.push_back(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ActionId {
        ActionId::from_raw(raw).unwrap()
    }

    #[test]
    fn test_queue_creation() {
        let queue = CommonEventQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_reserve_and_retrieve_in_order() {
        let mut queue = CommonEventQueue::new();
        queue.reserve(id(3));
        queue.reserve(id(1));

        assert!(queue.is_reserved(id(3)));
        assert_eq!(queue.retrieve(), Some(id(3)));
        assert_eq!(queue.retrieve(), Some(id(1)));
        assert_eq!(queue.retrieve(), None);
    }

    #[test]
    fn test_duplicate_reservations_are_kept() {
        let mut queue = CommonEventQueue::new();
        queue.reserve(id(2));
        queue.reserve(id(2));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_run_pending_drains_queue() {
        let mut queue = CommonEventQueue::new();
        queue.reserve(id(4));
        queue.reserve(id(2));

        let mut ran = Vec::new();
        let count = queue.run_pending(|action| ran.push(action));

        assert_eq!(count, 2);
        assert_eq!(ran, vec![id(4), id(2)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = CommonEventQueue::new();
        queue.reserve(id(1));
        queue.clear();
        assert!(!queue.is_reserved(id(1)));
    }
}
