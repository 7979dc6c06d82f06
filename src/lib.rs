//! Attaching roost component trees to a display.
//!
//! The component model lives in [`roost_core`]; this crate decides how a tree is attached (on its
//! own, pushed onto a navigation stack, or presented modally), keeps track of what is attached,
//! and routes the messages fired by attached components into mailboxes.
//!
//! A [`ComponentManager`] drives a [`Platform`], which does the native work. [`headless`] contains
//! a platform that renders into plain in-memory nodes:
//!
//! ```
//! use roost::headless::HeadlessPlatform;
//! use roost::roost_core::components::button::button;
//! use roost::roost_core::{container, RootComponent};
//! use roost::ComponentManager;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Msg {
//!     Save,
//! }
//!
//! let mut manager = ComponentManager::new(HeadlessPlatform::new());
//! let messages = manager.mailbox().subscribe();
//!
//! let handle = manager
//!     .present(container(vec![button("Save", Msg::Save)]), RootComponent::Simple, false)
//!     .unwrap();
//! let screen = manager.root().unwrap().top_screen().id();
//! manager.platform().tap(screen, &[0]).unwrap();
//!
//! assert_eq!(messages.try_recv(), Ok(Msg::Save));
//! # let _ = handle;
//! ```
//!
//! The library logs through the `log` facade and never installs a logger.

pub use roost_core;

pub mod decision;
mod error;
pub mod headless;
pub mod mailbox;
mod manager;
pub mod platform;
pub mod screen;

pub use error::{Error, UnsupportedRoot};
pub use mailbox::Mailbox;
pub use manager::{AttachmentHandle, ComponentManager, ManagerOptions};
pub use platform::Platform;
