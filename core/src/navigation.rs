//! Navigation and tab bar descriptors.

use crate::component::Component;
use crate::components::image::Image;
use crate::mappable::{Mappable, Transform};
use crate::style::{EmptyStyleSheet, NavigationBarStyleSheet, StyleSheet};

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationBarTitle<M> {
    Text(String),
    Image(Image),
    Component(Box<Component<M>>),
}

impl<M> NavigationBarTitle<M> {
    pub fn text(text: impl Into<String>) -> NavigationBarTitle<M> {
        NavigationBarTitle::Text(text.into())
    }
}

impl<M: 'static> Mappable<M> for NavigationBarTitle<M> {
    type Mapped<N: 'static> = NavigationBarTitle<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> NavigationBarTitle<N> {
        match self {
            NavigationBarTitle::Text(text) => NavigationBarTitle::Text(text),
            NavigationBarTitle::Image(image) => NavigationBarTitle::Image(image),
            NavigationBarTitle::Component(component) => {
                NavigationBarTitle::Component(Box::new(component.map_with(transform)))
            }
        }
    }
}

/// Chrome of a navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBar<M> {
    pub title: Option<NavigationBarTitle<M>>,
    pub on_back: Option<M>,
    pub hide_back_button_title: bool,
    pub is_hidden: bool,
    pub style: StyleSheet<NavigationBarStyleSheet>,
}

impl<M> Default for NavigationBar<M> {
    fn default() -> Self {
        NavigationBar {
            title: None,
            on_back: None,
            hide_back_button_title: false,
            is_hidden: false,
            style: StyleSheet::default(),
        }
    }
}

impl<M> NavigationBar<M> {
    pub fn on_back(self, message: M) -> NavigationBar<M> {
        NavigationBar {
            on_back: Some(message),
            ..self
        }
    }

    pub fn hidden(self, is_hidden: bool) -> NavigationBar<M> {
        NavigationBar { is_hidden, ..self }
    }

    pub fn hide_back_button_title(self, hide_back_button_title: bool) -> NavigationBar<M> {
        NavigationBar {
            hide_back_button_title,
            ..self
        }
    }

    pub fn style(self, style: StyleSheet<NavigationBarStyleSheet>) -> NavigationBar<M> {
        NavigationBar { style, ..self }
    }
}

impl<M: 'static> Mappable<M> for NavigationBar<M> {
    type Mapped<N: 'static> = NavigationBar<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> NavigationBar<N> {
        NavigationBar {
            title: self.title.map(|title| title.map_with(transform)),
            on_back: self.on_back.map(|message| transform.apply(message)),
            hide_back_button_title: self.hide_back_button_title,
            is_hidden: self.is_hidden,
            style: self.style,
        }
    }
}

/// A navigation bar with the given title and the default style.
pub fn navigation_bar<M>(title: NavigationBarTitle<M>) -> NavigationBar<M> {
    NavigationBar {
        title: Some(title),
        ..NavigationBar::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabBarItem<M> {
    pub title: String,
    pub icon: Option<Image>,
    pub on_tap: Option<M>,
}

impl<M: 'static> Mappable<M> for TabBarItem<M> {
    type Mapped<N: 'static> = TabBarItem<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TabBarItem<N> {
        TabBarItem {
            title: self.title,
            icon: self.icon,
            on_tap: self.on_tap.map(|message| transform.apply(message)),
        }
    }
}

/// Chrome of a tabbed root.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBar<M> {
    pub items: Vec<TabBarItem<M>>,
    pub style: StyleSheet<EmptyStyleSheet>,
}

impl<M: 'static> Mappable<M> for TabBar<M> {
    type Mapped<N: 'static> = TabBar<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TabBar<N> {
        TabBar {
            items: self
                .items
                .into_iter()
                .map(|item| item.map_with(transform))
                .collect(),
            style: self.style,
        }
    }
}

#[test]
fn test_navigation_bar_map() {
    use crate::components::button::button;

    let bar = navigation_bar(NavigationBarTitle::Component(Box::new(button("edit", 1u8))))
        .on_back(0u8)
        .hide_back_button_title(true);
    let mapped = bar.map(|m| format!("#{}", m));

    assert_eq!(mapped.on_back.as_deref(), Some("#0"));
    assert!(mapped.hide_back_button_title);
    match mapped.title {
        Some(NavigationBarTitle::Component(component)) => {
            assert_eq!(*component, button("edit", "#1".to_string()));
        }
        other => panic!("expected a component title, got {:?}", other),
    }
}
