use crate::component::Component;
use crate::components::image::Image;
use crate::layout::Layout;
use crate::mappable::{Mappable, Transform};
use crate::style::{SegmentedStyleSheet, StyleSheet};
use crate::zip_list::ZipList;

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    Title(String),
    Image(Image),
}

/// A single segment of a segmented control.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentProperties<M> {
    pub content: SegmentContent,
    pub on_tap: Option<M>,
    pub is_enabled: bool,
}

impl<M> SegmentProperties<M> {
    pub fn on_tap(self, message: M) -> SegmentProperties<M> {
        SegmentProperties {
            on_tap: Some(message),
            ..self
        }
    }

    pub fn enabled(self, is_enabled: bool) -> SegmentProperties<M> {
        SegmentProperties { is_enabled, ..self }
    }
}

impl<M: 'static> Mappable<M> for SegmentProperties<M> {
    type Mapped<N: 'static> = SegmentProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> SegmentProperties<N> {
        SegmentProperties {
            content: self.content,
            on_tap: self.on_tap.map(|message| transform.apply(message)),
            is_enabled: self.is_enabled,
        }
    }
}

/// An enabled segment with a title and no message.
pub fn segment<M>(title: impl Into<String>) -> SegmentProperties<M> {
    SegmentProperties {
        content: SegmentContent::Title(title.into()),
        on_tap: None,
        is_enabled: true,
    }
}

/// An enabled segment with an image and no message.
pub fn segment_image<M>(image: Image) -> SegmentProperties<M> {
    SegmentProperties {
        content: SegmentContent::Image(image),
        on_tap: None,
        is_enabled: true,
    }
}

/// A segmented control; the focused segment is the selected one.
pub fn segmented<M>(segments: ZipList<SegmentProperties<M>>) -> Component<M> {
    segmented_with(segments, StyleSheet::default(), Layout::default())
}

pub fn segmented_with<M>(
    segments: ZipList<SegmentProperties<M>>,
    style: StyleSheet<SegmentedStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Segmented(segments, style, layout)
}

#[test]
fn test_segment_map_rewrites_only_on_tap() {
    let plain = segment::<u8>("A");
    assert_eq!(plain.content, SegmentContent::Title("A".into()));
    assert!(plain.is_enabled);
    let mapped = plain.map(|m| m as u32 * 2);
    assert_eq!(mapped.content, SegmentContent::Title("A".into()));
    assert_eq!(mapped.on_tap, None);

    let tappable = segment("A").on_tap(4u8).enabled(false);
    let mapped = tappable.map(|m| m as u32 * 2);
    assert_eq!(mapped.content, SegmentContent::Title("A".into()));
    assert_eq!(mapped.on_tap, Some(8));
    assert!(!mapped.is_enabled, "non-message fields are left untouched");
}
