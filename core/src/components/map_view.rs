use crate::component::Component;
use crate::components::image::Image;
use crate::layout::Layout;
use crate::style::{EmptyStyleSheet, StyleSheet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapPlacemark {
    pub coordinates: Coordinates,
    pub icon: Option<Image>,
}

/// Map properties. Maps never fire messages.
#[derive(Debug, Clone, PartialEq)]
pub struct MapProperties {
    pub placemarks: Vec<MapPlacemark>,
    pub center: Option<Coordinates>,
    pub is_zoom_enabled: bool,
    pub zoom_level: f64,
    pub is_scroll_enabled: bool,
}

impl Default for MapProperties {
    fn default() -> Self {
        MapProperties {
            placemarks: Vec::new(),
            center: None,
            is_zoom_enabled: true,
            zoom_level: 1.,
            is_scroll_enabled: true,
        }
    }
}

pub fn map_properties<F: FnOnce(&mut MapProperties)>(configure: F) -> MapProperties {
    let mut properties = MapProperties::default();
    configure(&mut properties);
    properties
}

pub fn map_view<M>(properties: MapProperties) -> Component<M> {
    map_view_with(properties, StyleSheet::default(), Layout::default())
}

pub fn map_view_with<M>(
    properties: MapProperties,
    style: StyleSheet<EmptyStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::MapView(properties, style, layout)
}
