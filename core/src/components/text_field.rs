use crate::component::Component;
use crate::layout::Layout;
use crate::mappable::{Callback, Mappable, Transform};
use crate::style::{StyleSheet, TextFieldStyleSheet};

/// Messages fired while the user edits a text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldEvents<M> {
    pub on_editing_begin: Option<M>,
    /// Receives the text after every change.
    pub on_editing_changed: Option<Callback<String, M>>,
    pub on_editing_end: Option<M>,
}

impl<M> Default for TextFieldEvents<M> {
    fn default() -> Self {
        TextFieldEvents {
            on_editing_begin: None,
            on_editing_changed: None,
            on_editing_end: None,
        }
    }
}

impl<M: 'static> Mappable<M> for TextFieldEvents<M> {
    type Mapped<N: 'static> = TextFieldEvents<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TextFieldEvents<N> {
        let changed_transform = transform.clone();
        TextFieldEvents {
            on_editing_begin: self.on_editing_begin.map(|message| transform.apply(message)),
            on_editing_changed: self
                .on_editing_changed
                .map(|callback| callback.then(move |message| changed_transform.apply(message))),
            on_editing_end: self.on_editing_end.map(|message| transform.apply(message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldProperties<M> {
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub is_secure: bool,
    /// Whether the return key ends editing.
    pub should_return: bool,
    pub events: TextFieldEvents<M>,
}

impl<M> Default for TextFieldProperties<M> {
    fn default() -> Self {
        TextFieldProperties {
            text: None,
            placeholder: None,
            is_secure: false,
            should_return: false,
            events: TextFieldEvents::default(),
        }
    }
}

impl<M: 'static> Mappable<M> for TextFieldProperties<M> {
    type Mapped<N: 'static> = TextFieldProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TextFieldProperties<N> {
        TextFieldProperties {
            text: self.text,
            placeholder: self.placeholder,
            is_secure: self.is_secure,
            should_return: self.should_return,
            events: self.events.map_with(transform),
        }
    }
}

pub fn text_field_properties<M, F>(configure: F) -> TextFieldProperties<M>
where
    F: FnOnce(&mut TextFieldProperties<M>),
{
    let mut properties = TextFieldProperties::default();
    configure(&mut properties);
    properties
}

pub fn text_field<M>(properties: TextFieldProperties<M>) -> Component<M> {
    text_field_with(properties, StyleSheet::default(), Layout::default())
}

pub fn text_field_with<M>(
    properties: TextFieldProperties<M>,
    style: StyleSheet<TextFieldStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::TextField(properties, style, layout)
}

#[test]
fn test_text_field_events_map() {
    #[derive(Debug, Clone, PartialEq)]
    enum Form {
        Begin,
        Changed(String),
    }

    let properties = text_field_properties(|p: &mut TextFieldProperties<Form>| {
        p.placeholder = Some("Name".into());
        p.events.on_editing_begin = Some(Form::Begin);
        p.events.on_editing_changed = Some(Callback::new(Form::Changed));
    });

    let mapped = properties.map(|message| (7, message));
    assert_eq!(mapped.placeholder.as_deref(), Some("Name"));
    assert_eq!(mapped.events.on_editing_begin, Some((7, Form::Begin)));
    assert_eq!(mapped.events.on_editing_end, None);
    let changed = mapped
        .events
        .on_editing_changed
        .expect("mapping keeps the change callback");
    assert_eq!(changed.call("Ada".into()), (7, Form::Changed("Ada".into())));
}
