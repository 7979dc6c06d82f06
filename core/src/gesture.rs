use crate::mappable::{Mappable, Transform};

/// A user interaction that produces a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture<M> {
    Tap { message: M },
}

impl<M> Gesture<M> {
    pub fn tap(message: M) -> Gesture<M> {
        Gesture::Tap { message }
    }

    /// The message this gesture fires.
    pub fn message(&self) -> &M {
        match self {
            Gesture::Tap { message } => message,
        }
    }
}

impl<M: 'static> Mappable<M> for Gesture<M> {
    type Mapped<N: 'static> = Gesture<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> Gesture<N> {
        match self {
            Gesture::Tap { message } => Gesture::Tap {
                message: transform.apply(message),
            },
        }
    }
}
