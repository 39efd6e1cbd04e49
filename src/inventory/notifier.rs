use std::fmt;

/// Handle for removing a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Synchronous broadcast list for inventory change notifications
///
/// Listeners are invoked in registration order, on the caller's thread,
/// with no arguments; they are expected to re-query the inventory rather
/// than receive a diff. A listener registered or removed while a broadcast
/// is in progress takes effect from the next broadcast.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_id: u64,
}

impl ChangeNotifier {
    /// Creates a notifier with no listeners
    pub fn new() -> Self {
        ChangeNotifier {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers a listener; returns a handle for later removal
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns true if it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invokes every listener, in registration order
    pub fn broadcast(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_broadcast_invokes_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&order);
        notifier.subscribe(move || first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        notifier.subscribe(move || second.borrow_mut().push("second"));

        notifier.broadcast();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut notifier = ChangeNotifier::new();

        let counter = Rc::clone(&count);
        let id = notifier.subscribe(move || *counter.borrow_mut() += 1);

        notifier.broadcast();
        assert!(notifier.unsubscribe(id));
        notifier.broadcast();

        assert_eq!(*count.borrow(), 1); // Only the first broadcast landed
        assert!(!notifier.unsubscribe(id)); // Already removed
    }

    #[test]
    fn test_broadcast_with_no_listeners_is_noop() {
        let mut notifier = ChangeNotifier::new();
        notifier.broadcast();
        assert_eq!(notifier.listener_count(), 0);
    }
}
