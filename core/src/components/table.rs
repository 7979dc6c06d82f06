use crate::component::Component;
use crate::layout::Layout;
use crate::mappable::{Mappable, Transform};
use crate::style::{StyleSheet, TableStyleSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableItemSelectionStyle {
    None,
    Default,
}

impl Default for TableItemSelectionStyle {
    fn default() -> Self {
        TableItemSelectionStyle::Default
    }
}

/// A table row. The row content is an eager component tree; cell reuse is up to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TableItemProperties<M> {
    pub height: u32,
    pub on_tap: Option<M>,
    pub selection_style: TableItemSelectionStyle,
    pub content: Component<M>,
}

impl<M> TableItemProperties<M> {
    pub fn on_tap(self, message: M) -> TableItemProperties<M> {
        TableItemProperties {
            on_tap: Some(message),
            ..self
        }
    }

    pub fn selection_style(self, selection_style: TableItemSelectionStyle) -> Self {
        TableItemProperties {
            selection_style,
            ..self
        }
    }
}

impl<M: 'static> Mappable<M> for TableItemProperties<M> {
    type Mapped<N: 'static> = TableItemProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TableItemProperties<N> {
        TableItemProperties {
            height: self.height,
            on_tap: self.on_tap.map(|message| transform.apply(message)),
            selection_style: self.selection_style,
            content: self.content.map_with(transform),
        }
    }
}

pub fn table_item<M>(height: u32, content: Component<M>) -> TableItemProperties<M> {
    TableItemProperties {
        height,
        on_tap: None,
        selection_style: TableItemSelectionStyle::default(),
        content,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullToRefresh<M> {
    pub on_refresh: M,
    pub is_refreshing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableProperties<M> {
    pub items: Vec<TableItemProperties<M>>,
    pub shows_vertical_scroll_indicator: bool,
    pub shows_horizontal_scroll_indicator: bool,
    pub pull_to_refresh: Option<PullToRefresh<M>>,
}

impl<M> TableProperties<M> {
    pub fn new(items: Vec<TableItemProperties<M>>) -> TableProperties<M> {
        TableProperties {
            items,
            shows_vertical_scroll_indicator: true,
            shows_horizontal_scroll_indicator: false,
            pull_to_refresh: None,
        }
    }
}

impl<M: 'static> Mappable<M> for TableProperties<M> {
    type Mapped<N: 'static> = TableProperties<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> TableProperties<N> {
        TableProperties {
            items: self
                .items
                .into_iter()
                .map(|item| item.map_with(transform))
                .collect(),
            shows_vertical_scroll_indicator: self.shows_vertical_scroll_indicator,
            shows_horizontal_scroll_indicator: self.shows_horizontal_scroll_indicator,
            pull_to_refresh: self.pull_to_refresh.map(|refresh| PullToRefresh {
                on_refresh: transform.apply(refresh.on_refresh),
                is_refreshing: refresh.is_refreshing,
            }),
        }
    }
}

pub fn table_properties<M, F>(items: Vec<TableItemProperties<M>>, configure: F) -> TableProperties<M>
where
    F: FnOnce(&mut TableProperties<M>),
{
    let mut properties = TableProperties::new(items);
    configure(&mut properties);
    properties
}

pub fn table<M>(items: Vec<TableItemProperties<M>>) -> Component<M> {
    table_with(TableProperties::new(items), StyleSheet::default(), Layout::default())
}

pub fn table_with<M>(
    properties: TableProperties<M>,
    style: StyleSheet<TableStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Table(properties, style, layout)
}
