use crate::component::Component;
use crate::components::collection::SectionInset;
use crate::layout::Layout;
use crate::mappable::{Callback, Mappable, Transform};
use crate::style::{EmptyStyleSheet, StyleSheet};
use crate::zip_list::{ShiftOperation, ZipList};

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItemProperties<M> {
    pub on_tap: Option<M>,
    pub identifier: String,
    /// Boxed: carousel items sit inline in a `ZipList`.
    pub content: Box<Component<M>>,
}

impl<M: 'static> Mappable<M> for CarouselItemProperties<M> {
    type Mapped<N: 'static> = CarouselItemProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> CarouselItemProperties<N> {
        CarouselItemProperties {
            on_tap: self.on_tap.map(|message| transform.apply(message)),
            identifier: self.identifier,
            content: Box::new((*self.content).map_with(transform)),
        }
    }
}

pub fn carousel_item<M>(
    on_tap: Option<M>,
    identifier: impl Into<String>,
    content: Component<M>,
) -> CarouselItemProperties<M> {
    CarouselItemProperties {
        on_tap,
        identifier: identifier.into(),
        content: Box::new(content),
    }
}

/// A horizontally paged list whose focused item is the selected one.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselProperties<M> {
    pub items: Option<ZipList<CarouselItemProperties<M>>>,
    pub shows_scroll_indicator: bool,
    pub is_snap_to_cell_enabled: bool,
    /// Maps a selection change reported by the renderer to a message, if any.
    pub on_selection_change: Option<Callback<ShiftOperation, Option<M>>>,
    pub items_width: u32,
    pub items_height: u32,
    pub minimum_interitem_spacing: u32,
    pub minimum_line_spacing: u32,
    pub section_inset: SectionInset,
}

impl<M> CarouselProperties<M> {
    pub fn new(
        items: Option<ZipList<CarouselItemProperties<M>>>,
        items_width: u32,
        items_height: u32,
    ) -> CarouselProperties<M> {
        CarouselProperties {
            items,
            shows_scroll_indicator: false,
            is_snap_to_cell_enabled: false,
            on_selection_change: None,
            items_width,
            items_height,
            minimum_interitem_spacing: 0,
            minimum_line_spacing: 0,
            section_inset: SectionInset::ZERO,
        }
    }

    /// The message for a selection change, if the carousel wants one.
    pub fn selection_message(&self, operation: ShiftOperation) -> Option<M> {
        self.on_selection_change
            .as_ref()
            .and_then(|callback| callback.call(operation))
    }
}

impl<M: 'static> Mappable<M> for CarouselProperties<M> {
    type Mapped<N: 'static> = CarouselProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> CarouselProperties<N> {
        let selection_transform = transform.clone();
        CarouselProperties {
            items: self.items.map(|items| items.map_with(transform)),
            shows_scroll_indicator: self.shows_scroll_indicator,
            is_snap_to_cell_enabled: self.is_snap_to_cell_enabled,
            on_selection_change: self.on_selection_change.map(|callback| {
                callback.then(move |message: Option<M>| {
                    message.map(|message| selection_transform.apply(message))
                })
            }),
            items_width: self.items_width,
            items_height: self.items_height,
            minimum_interitem_spacing: self.minimum_interitem_spacing,
            minimum_line_spacing: self.minimum_line_spacing,
            section_inset: self.section_inset,
        }
    }
}

pub fn carousel_properties<M, F>(
    items_width: u32,
    items_height: u32,
    items: Option<ZipList<CarouselItemProperties<M>>>,
    configure: F,
) -> CarouselProperties<M>
where
    F: FnOnce(&mut CarouselProperties<M>),
{
    let mut properties = CarouselProperties::new(items, items_width, items_height);
    configure(&mut properties);
    properties
}

pub fn carousel<M>(properties: CarouselProperties<M>) -> Component<M> {
    carousel_with(properties, StyleSheet::default(), Layout::default())
}

pub fn carousel_with<M>(
    properties: CarouselProperties<M>,
    style: StyleSheet<EmptyStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Carousel(properties, style, layout)
}

#[test]
fn test_carousel_map_composes_selection_handler() {
    use crate::components::label::label;

    let items = ZipList::from_vec(
        vec![
            carousel_item(Some("first"), "card", label("one")),
            carousel_item(None, "card", label("two")),
        ],
        0,
    );
    let properties = carousel_properties(200, 120, items, |p| {
        p.is_snap_to_cell_enabled = true;
        p.on_selection_change = Some(Callback::new(|operation| match operation {
            ShiftOperation::Right(_) => Some("next"),
            ShiftOperation::Left(_) => None,
        }));
    });

    let mapped = properties.map(|message: &'static str| message.len());
    assert!(mapped.is_snap_to_cell_enabled);
    assert_eq!(mapped.items_width, 200);
    assert_eq!(mapped.selection_message(ShiftOperation::Right(1)), Some(4));
    assert_eq!(mapped.selection_message(ShiftOperation::Left(1)), None);

    let items = mapped.items.expect("items survive mapping");
    assert_eq!(items.center().on_tap, Some(5));
    assert_eq!(items.center_index(), 0, "mapping keeps the focus");
    assert_eq!(items.get(1).and_then(|item| item.on_tap), None);
    assert_eq!(*items.center().content, label("one"));
}
