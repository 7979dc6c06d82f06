//! Component model for roost.
//!
//! # Conceptual overview
//! Roost is a declarative UI library: application code describes a screen as an immutable tree of
//! typed components, and a platform renderer turns that tree into native widgets. This crate
//! contains the tree and everything that hangs off it; it does not render anything itself.
//!
//! ## Components
//! A [`Component`] is a plain value. Every kind of component (buttons, labels, tables, …) is one
//! case of the enum and carries a property bag, a style sheet and a layout. Components are cheap
//! to create and own their children, so building a new tree for every update is the expected way
//! of using them: the renderer re-renders wholesale and there is no diffing here.
//!
//! ## Messages
//! Components are generic over a message type `M`. Interactive components embed the messages
//! they fire (a button’s `on_tap`, a touchable’s gesture, …), and the platform delivers them to a
//! mailbox when the user interacts.
//!
//! Reusable pieces of UI are written against their own message type and embedded into a parent
//! with [`Mappable::map`], which rewrites every embedded message and leaves the rest of the tree
//! untouched:
//!
//! ```
//! use roost_core::components::button::button;
//! use roost_core::{container, Component, Mappable};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Dialog {
//!     Confirm,
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum App {
//!     Dialog(Dialog),
//! }
//!
//! let dialog: Component<Dialog> = container(vec![button("OK", Dialog::Confirm)]);
//! let embedded: Component<App> = dialog.map(App::Dialog);
//! assert_eq!(embedded, container(vec![button("OK", App::Dialog(Dialog::Confirm))]));
//! ```
//!
//! `map` is a functor: mapping the identity gives back an equal tree, and mapping twice is the
//! same as mapping the composition once. It never changes layout or style.
//!
//! ## Layout and style
//! [`Layout`](layout::Layout) and [`StyleSheet`](style::StyleSheet) values are opaque to the tree.
//! They are interpreted by the platform’s layout engine and renderer.
//!
//! ## Custom components
//! `Component::Custom` is an escape hatch: it only names an identifier that a platform-registered
//! renderer knows how to draw. Use [`validate_custom_components`](backend::validate_custom_components)
//! to make sure every identifier in a tree is registered before rendering it.
//!
//! ## Roots
//! A [`RootComponent`] describes how a tree is attached to a window: on its own, inside a
//! navigation stack, or inside tabs.

pub mod backend;
pub mod color;
pub mod component;
pub mod components;
mod error;
pub mod gesture;
pub mod layout;
mod mappable;
pub mod navigation;
mod rect;
pub mod root;
pub mod style;
pub mod zip_list;

pub use component::{container, container_with, custom, touchable, Component};
pub use error::Error;
pub use gesture::Gesture;
pub use mappable::{Callback, Mappable, Transform};
pub use rect::Rect;
pub use root::{RootComponent, RootKind};
pub use zip_list::{ShiftOperation, ZipList};
