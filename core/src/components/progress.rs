use crate::component::Component;
use crate::layout::Layout;
use crate::style::{ProgressStyleSheet, StyleSheet};

/// Progress towards a total, with `partial <= total` always holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressCounter {
    partial: u32,
    total: u32,
}

impl ProgressCounter {
    /// Returns None if `partial` exceeds `total`.
    pub fn new(partial: u32, total: u32) -> Option<ProgressCounter> {
        if partial > total {
            None
        } else {
            Some(ProgressCounter { partial, total })
        }
    }

    /// A counter with no progress yet.
    pub fn initial(total: u32) -> ProgressCounter {
        ProgressCounter { partial: 0, total }
    }

    pub fn partial(&self) -> u32 {
        self.partial
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.total - self.partial
    }

    /// Completed fraction in `0..=1`; an empty total counts as complete.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            1.
        } else {
            f64::from(self.partial) / f64::from(self.total)
        }
    }

    /// Adds progress; returns None if that would exceed the total.
    pub fn add(&self, count: u32) -> Option<ProgressCounter> {
        ProgressCounter::new(self.partial.checked_add(count)?, self.total)
    }
}

pub fn progress<M>(counter: ProgressCounter) -> Component<M> {
    progress_with(counter, StyleSheet::default(), Layout::default())
}

pub fn progress_with<M>(
    counter: ProgressCounter,
    style: StyleSheet<ProgressStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Progress(counter, style, layout)
}

#[test]
fn test_progress_counter() {
    assert!(ProgressCounter::new(3, 2).is_none(), "partial can’t exceed total");
    let counter = ProgressCounter::initial(4);
    assert_eq!(counter.remaining(), 4);
    let counter = counter.add(3).unwrap();
    assert_eq!(counter.progress(), 0.75);
    assert_eq!(counter.add(2), None);
    assert_eq!(counter.add(1).map(|c| c.remaining()), Some(0));
    assert_eq!(ProgressCounter::initial(0).progress(), 1.);
}
