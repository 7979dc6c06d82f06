use crate::component::Component;
use crate::components::image::Image;
use crate::layout::Layout;
use crate::mappable::{Mappable, Transform};
use crate::style::{ButtonStyleSheet, StyleSheet};

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProperties<M> {
    pub text: Option<String>,
    pub is_active: bool,
    pub icon: Option<Image>,
    pub on_tap: Option<M>,
}

impl<M> Default for ButtonProperties<M> {
    fn default() -> Self {
        ButtonProperties {
            text: None,
            is_active: false,
            icon: None,
            on_tap: None,
        }
    }
}

impl<M: 'static> Mappable<M> for ButtonProperties<M> {
    type Mapped<N: 'static> = ButtonProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> ButtonProperties<N> {
        ButtonProperties {
            text: self.text,
            is_active: self.is_active,
            icon: self.icon,
            on_tap: self.on_tap.map(|message| transform.apply(message)),
        }
    }
}

/// Configures button properties starting from the defaults.
pub fn button_properties<M, F>(configure: F) -> ButtonProperties<M>
where
    F: FnOnce(&mut ButtonProperties<M>),
{
    let mut properties = ButtonProperties::default();
    configure(&mut properties);
    properties
}

/// A text button that fires `on_tap`, with the default style and layout.
pub fn button<M>(text: impl Into<String>, on_tap: M) -> Component<M> {
    let properties = ButtonProperties {
        text: Some(text.into()),
        on_tap: Some(on_tap),
        ..ButtonProperties::default()
    };
    button_with(properties, StyleSheet::default(), Layout::default())
}

pub fn button_with<M>(
    properties: ButtonProperties<M>,
    style: StyleSheet<ButtonStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Button(properties, style, layout)
}

#[test]
fn test_button_defaults() {
    let properties = button_properties::<(), _>(|_| {});
    assert_eq!(properties.text, None);
    assert!(!properties.is_active, "buttons are inactive by default");
    assert_eq!(properties.on_tap, None);

    match button("OK", 1) {
        Component::Button(properties, style, layout) => {
            assert_eq!(properties.text.as_deref(), Some("OK"));
            assert_eq!(properties.on_tap, Some(1));
            assert_eq!(style, StyleSheet::default());
            assert_eq!(layout, Layout::default());
        }
        other => panic!("expected a button, got {:?}", other),
    }
}
