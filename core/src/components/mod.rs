//! Property bags and constructors for each component kind.

pub mod button;
pub mod carousel;
pub mod collection;
pub mod image;
pub mod label;
pub mod map_view;
pub mod progress;
pub mod segmented;
pub mod table;
pub mod text_field;
