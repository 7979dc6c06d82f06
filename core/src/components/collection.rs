use crate::component::Component;
use crate::layout::Layout;
use crate::mappable::{Mappable, Transform};
use crate::style::{EmptyStyleSheet, StyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionInset {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl SectionInset {
    pub const ZERO: SectionInset = SectionInset {
        top: 0,
        left: 0,
        bottom: 0,
        right: 0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Vertical,
    Horizontal,
}

impl Default for ScrollDirection {
    fn default() -> Self {
        ScrollDirection::Vertical
    }
}

/// A collection cell; `identifier` groups cells the renderer may reuse for each other.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionItemProperties<M> {
    pub on_tap: Option<M>,
    pub identifier: String,
    pub content: Component<M>,
}

impl<M: 'static> Mappable<M> for CollectionItemProperties<M> {
    type Mapped<N: 'static> = CollectionItemProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> CollectionItemProperties<N> {
        CollectionItemProperties {
            on_tap: self.on_tap.map(|message| transform.apply(message)),
            identifier: self.identifier,
            content: self.content.map_with(transform),
        }
    }
}

pub fn collection_item<M>(
    on_tap: Option<M>,
    identifier: impl Into<String>,
    content: Component<M>,
) -> CollectionItemProperties<M> {
    CollectionItemProperties {
        on_tap,
        identifier: identifier.into(),
        content,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionProperties<M> {
    pub items: Vec<CollectionItemProperties<M>>,
    pub shows_vertical_scroll_indicator: bool,
    pub shows_horizontal_scroll_indicator: bool,
    pub items_width: u32,
    pub items_height: u32,
    pub minimum_interitem_spacing: u32,
    pub minimum_line_spacing: u32,
    pub scroll_direction: ScrollDirection,
    pub section_inset: SectionInset,
}

impl<M> CollectionProperties<M> {
    pub fn new(
        items: Vec<CollectionItemProperties<M>>,
        items_width: u32,
        items_height: u32,
    ) -> CollectionProperties<M> {
        CollectionProperties {
            items,
            shows_vertical_scroll_indicator: false,
            shows_horizontal_scroll_indicator: false,
            items_width,
            items_height,
            minimum_interitem_spacing: 0,
            minimum_line_spacing: 0,
            scroll_direction: ScrollDirection::default(),
            section_inset: SectionInset::ZERO,
        }
    }
}

impl<M: 'static> Mappable<M> for CollectionProperties<M> {
    type Mapped<N: 'static> = CollectionProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> CollectionProperties<N> {
        CollectionProperties {
            items: self
                .items
                .into_iter()
                .map(|item| item.map_with(transform))
                .collect(),
            shows_vertical_scroll_indicator: self.shows_vertical_scroll_indicator,
            shows_horizontal_scroll_indicator: self.shows_horizontal_scroll_indicator,
            items_width: self.items_width,
            items_height: self.items_height,
            minimum_interitem_spacing: self.minimum_interitem_spacing,
            minimum_line_spacing: self.minimum_line_spacing,
            scroll_direction: self.scroll_direction,
            section_inset: self.section_inset,
        }
    }
}

pub fn collection<M>(properties: CollectionProperties<M>) -> Component<M> {
    collection_with(properties, StyleSheet::default(), Layout::default())
}

pub fn collection_with<M>(
    properties: CollectionProperties<M>,
    style: StyleSheet<EmptyStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Collection(properties, style, layout)
}
