//! Fan-out message delivery.

use core::fmt;
use crossbeam::channel::{self, Receiver, Sender};
use log::trace;
use parking_lot::Mutex;
use std::sync::Arc;

enum Subscriber<M> {
    Channel(Sender<M>),
    Handler(Arc<dyn Fn(M) + Send + Sync>),
}

/// An append-only, fan-out channel of messages.
///
/// Every dispatched message is delivered to every subscriber. Clones share the same subscribers.
/// Channel subscribers whose receiver has been dropped are removed on the next dispatch.
pub struct Mailbox<M> {
    subscribers: Arc<Mutex<Vec<Subscriber<M>>>>,
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Mailbox {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<M> Default for Mailbox<M> {
    fn default() -> Self {
        Mailbox {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<M> fmt::Debug for Mailbox<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mailbox({} subscribers)", self.subscribers.lock().len())
    }
}

impl<M> Mailbox<M> {
    pub fn new() -> Mailbox<M> {
        Mailbox::default()
    }

    /// Returns true if both mailboxes deliver to the same subscribers.
    pub fn same_mailbox(&self, other: &Mailbox<M>) -> bool {
        Arc::ptr_eq(&self.subscribers, &other.subscribers)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl<M: Clone + Send + 'static> Mailbox<M> {
    /// Returns a receiver for all messages dispatched from now on.
    pub fn subscribe(&self) -> Receiver<M> {
        let (sender, receiver) = channel::unbounded();
        self.subscribers.lock().push(Subscriber::Channel(sender));
        receiver
    }

    /// Calls `handler` with every message dispatched from now on.
    pub fn subscribe_with<F>(&self, handler: F)
    where
        F: Fn(M) + Send + Sync + 'static,
    {
        self.subscribers
            .lock()
            .push(Subscriber::Handler(Arc::new(handler)));
    }

    /// Delivers a message to every subscriber.
    ///
    /// Handlers are called without holding the subscriber lock, so they may dispatch to other
    /// mailboxes (or subscribe to this one).
    pub fn dispatch(&self, message: M) {
        let handlers: Vec<_> = {
            let mut subscribers = self.subscribers.lock();
            subscribers.retain(|subscriber| match subscriber {
                Subscriber::Channel(sender) => sender.send(message.clone()).is_ok(),
                Subscriber::Handler(_) => true,
            });
            trace!("dispatching to {} subscribers", subscribers.len());
            subscribers
                .iter()
                .filter_map(|subscriber| match subscriber {
                    Subscriber::Handler(handler) => Some(Arc::clone(handler)),
                    Subscriber::Channel(_) => None,
                })
                .collect()
        };

        for handler in handlers {
            (*handler)(message.clone());
        }
    }

    /// Forwards every message dispatched here into `target`.
    ///
    /// Forwarding must not form a cycle.
    pub fn forward(&self, target: &Mailbox<M>) {
        let target = target.clone();
        self.subscribe_with(move |message| target.dispatch(message));
    }

    /// Forwards every message dispatched here into `target`, converted with `f`.
    pub fn forward_map<N, F>(&self, target: &Mailbox<N>, f: F)
    where
        N: Clone + Send + 'static,
        F: Fn(M) -> N + Send + Sync + 'static,
    {
        let target = target.clone();
        self.subscribe_with(move |message| target.dispatch(f(message)));
    }
}

#[test]
fn test_mailbox_fan_out() {
    let mailbox = Mailbox::new();
    let first = mailbox.subscribe();
    let second = mailbox.subscribe();

    mailbox.dispatch(1);
    mailbox.dispatch(2);

    assert_eq!(first.try_iter().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(second.try_iter().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_mailbox_drops_disconnected_receivers() {
    let mailbox = Mailbox::new();
    let receiver = mailbox.subscribe();
    drop(mailbox.subscribe());
    assert_eq!(mailbox.subscriber_count(), 2);

    mailbox.dispatch("hello");
    assert_eq!(
        mailbox.subscriber_count(),
        1,
        "the dropped receiver’s sender should be removed"
    );
    assert_eq!(receiver.try_recv(), Ok("hello"));
}

#[test]
fn test_mailbox_forwarding() {
    let screen = Mailbox::new();
    let stack = Mailbox::new();
    let manager = Mailbox::new();
    screen.forward(&stack);
    stack.forward(&manager);
    let received = manager.subscribe();

    let embedded = Mailbox::new();
    embedded.forward_map(&screen, |n: u8| u32::from(n) * 100);

    screen.dispatch(7u32);
    embedded.dispatch(3);

    assert_eq!(received.try_iter().collect::<Vec<_>>(), vec![7, 300]);
    assert!(screen.same_mailbox(&screen.clone()));
    assert!(!screen.same_mailbox(&stack));
}
