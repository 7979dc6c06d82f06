use crate::component::Component;
use crate::layout::Layout;
use crate::style::{EmptyStyleSheet, StyleSheet};
use cgmath::Vector2;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A named asset, resolved by the platform.
    Named(String),
    /// Encoded image data.
    Data(Arc<[u8]>),
}

/// An image. Images carry no messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub source: ImageSource,
    /// Intrinsic size in points, if known.
    pub size: Option<Vector2<f64>>,
}

impl Image {
    pub fn named(name: impl Into<String>) -> Image {
        Image {
            source: ImageSource::Named(name.into()),
            size: None,
        }
    }

    pub fn from_data(data: impl Into<Arc<[u8]>>) -> Image {
        Image {
            source: ImageSource::Data(data.into()),
            size: None,
        }
    }

    pub fn with_size(self, width: f64, height: f64) -> Image {
        Image {
            size: Some(Vector2::new(width, height)),
            ..self
        }
    }
}

pub fn image_view<M>(image: Image) -> Component<M> {
    image_view_with(image, StyleSheet::default(), Layout::default())
}

pub fn image_view_with<M>(
    image: Image,
    style: StyleSheet<EmptyStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::ImageView(image, style, layout)
}
