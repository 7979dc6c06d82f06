use crate::component::Component;
use crate::layout::Layout;
use crate::style::{LabelStyleSheet, StyleSheet};

/// Label properties. Labels never fire messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelProperties {
    pub text: String,
    /// Replacement text applied once the label has been laid out, e.g. a truncated variant.
    pub text_after_layout: Option<String>,
}

pub fn label_properties(
    text: impl Into<String>,
    text_after_layout: Option<String>,
) -> LabelProperties {
    LabelProperties {
        text: text.into(),
        text_after_layout,
    }
}

/// A label with the default style and layout.
pub fn label<M>(text: impl Into<String>) -> Component<M> {
    label_with(
        label_properties(text, None),
        StyleSheet::default(),
        Layout::default(),
    )
}

pub fn label_with<M>(
    properties: LabelProperties,
    style: StyleSheet<LabelStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Label(properties, style, layout)
}
