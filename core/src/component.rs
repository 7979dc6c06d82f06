//! The component tree.

use crate::components::button::ButtonProperties;
use crate::components::carousel::CarouselProperties;
use crate::components::collection::CollectionProperties;
use crate::components::image::Image;
use crate::components::label::LabelProperties;
use crate::components::map_view::MapProperties;
use crate::components::progress::ProgressCounter;
use crate::components::segmented::SegmentProperties;
use crate::components::table::TableProperties;
use crate::components::text_field::TextFieldProperties;
use crate::gesture::Gesture;
use crate::layout::Layout;
use crate::mappable::{Mappable, Transform};
use crate::style::{
    ButtonStyleSheet, EmptyStyleSheet, LabelStyleSheet, ProgressStyleSheet, SegmentedStyleSheet,
    StyleSheet, TableStyleSheet, TextFieldStyleSheet,
};
use crate::zip_list::ZipList;

/// An immutable description of a piece of UI, generic over the message type `M` its
/// interactions produce.
///
/// Most cases carry `(properties, style, layout)`. The exceptions are `Touchable`, which wraps a
/// single child and uses the child’s layout, and `Custom`, which is only an identifier resolved by
/// an externally registered renderer.
///
/// Equality is structural except for closures: a text field’s `on_editing_changed` and a
/// carousel’s `on_selection_change` compare equal only if they share the same closure. Mapping
/// wraps those closures in new ones, so `tree.map(|m| m) == tree` only holds for trees without
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum Component<M> {
    Button(ButtonProperties<M>, StyleSheet<ButtonStyleSheet>, Layout),
    Label(LabelProperties, StyleSheet<LabelStyleSheet>, Layout),
    TextField(TextFieldProperties<M>, StyleSheet<TextFieldStyleSheet>, Layout),
    MapView(MapProperties, StyleSheet<EmptyStyleSheet>, Layout),
    ImageView(Image, StyleSheet<EmptyStyleSheet>, Layout),
    Container(Vec<Component<M>>, StyleSheet<EmptyStyleSheet>, Layout),
    Table(TableProperties<M>, StyleSheet<TableStyleSheet>, Layout),
    Collection(CollectionProperties<M>, StyleSheet<EmptyStyleSheet>, Layout),
    Carousel(CarouselProperties<M>, StyleSheet<EmptyStyleSheet>, Layout),
    Touchable {
        gesture: Gesture<M>,
        child: Box<Component<M>>,
    },
    Segmented(
        ZipList<SegmentProperties<M>>,
        StyleSheet<SegmentedStyleSheet>,
        Layout,
    ),
    Progress(ProgressCounter, StyleSheet<ProgressStyleSheet>, Layout),
    Custom {
        identifier: String,
        layout: Layout,
    },
}

impl<M> Component<M> {
    /// The component’s layout; a touchable uses its child’s.
    pub fn layout(&self) -> &Layout {
        match self {
            Component::Button(_, _, layout)
            | Component::Label(_, _, layout)
            | Component::TextField(_, _, layout)
            | Component::MapView(_, _, layout)
            | Component::ImageView(_, _, layout)
            | Component::Container(_, _, layout)
            | Component::Table(_, _, layout)
            | Component::Collection(_, _, layout)
            | Component::Carousel(_, _, layout)
            | Component::Segmented(_, _, layout)
            | Component::Progress(_, _, layout)
            | Component::Custom { layout, .. } => layout,
            Component::Touchable { child, .. } => child.layout(),
        }
    }

    /// Replaces the layout; on a touchable, replaces the child’s.
    pub fn with_layout(self, layout: Layout) -> Component<M> {
        match self {
            Component::Button(p, s, _) => Component::Button(p, s, layout),
            Component::Label(p, s, _) => Component::Label(p, s, layout),
            Component::TextField(p, s, _) => Component::TextField(p, s, layout),
            Component::MapView(p, s, _) => Component::MapView(p, s, layout),
            Component::ImageView(p, s, _) => Component::ImageView(p, s, layout),
            Component::Container(c, s, _) => Component::Container(c, s, layout),
            Component::Table(p, s, _) => Component::Table(p, s, layout),
            Component::Collection(p, s, _) => Component::Collection(p, s, layout),
            Component::Carousel(p, s, _) => Component::Carousel(p, s, layout),
            Component::Segmented(p, s, _) => Component::Segmented(p, s, layout),
            Component::Progress(p, s, _) => Component::Progress(p, s, layout),
            Component::Custom { identifier, .. } => Component::Custom { identifier, layout },
            Component::Touchable { gesture, child } => Component::Touchable {
                gesture,
                child: Box::new(child.with_layout(layout)),
            },
        }
    }

    /// Identifiers of all custom components reachable through containers, in order.
    ///
    /// Only container children are searched; custom components nested in other kinds (e.g. a
    /// touchable or a table cell) are not included. Duplicates are kept.
    pub fn custom_component_identifiers(&self) -> Vec<String> {
        let mut identifiers = Vec::new();
        self.collect_custom_component_identifiers(&mut identifiers);
        identifiers
    }

    fn collect_custom_component_identifiers(&self, identifiers: &mut Vec<String>) {
        match self {
            Component::Container(children, _, _) => {
                for child in children {
                    child.collect_custom_component_identifiers(identifiers);
                }
            }
            Component::Custom { identifier, .. } => identifiers.push(identifier.clone()),
            _ => (),
        }
    }

    /// Components nested directly inside this one, in rendering order.
    ///
    /// Unlike [`custom_component_identifiers`](Component::custom_component_identifiers), this
    /// descends into every kind that holds components: containers, touchables, and the items of
    /// tables, collections and carousels.
    pub fn children(&self) -> Vec<&Component<M>> {
        match self {
            Component::Container(children, _, _) => children.iter().collect(),
            Component::Touchable { child, .. } => vec![&**child],
            Component::Table(properties, _, _) => {
                properties.items.iter().map(|item| &item.content).collect()
            }
            Component::Collection(properties, _, _) => {
                properties.items.iter().map(|item| &item.content).collect()
            }
            Component::Carousel(properties, _, _) => match &properties.items {
                Some(items) => items.iter().map(|item| &*item.content).collect(),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// A short name for the component kind, for logs and debugging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Component::Button(..) => "button",
            Component::Label(..) => "label",
            Component::TextField(..) => "text_field",
            Component::MapView(..) => "map_view",
            Component::ImageView(..) => "image_view",
            Component::Container(..) => "container",
            Component::Table(..) => "table",
            Component::Collection(..) => "collection",
            Component::Carousel(..) => "carousel",
            Component::Touchable { .. } => "touchable",
            Component::Segmented(..) => "segmented",
            Component::Progress(..) => "progress",
            Component::Custom { .. } => "custom",
        }
    }
}

impl<M: 'static> Mappable<M> for Component<M> {
    type Mapped<N: 'static> = Component<N>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> Component<N> {
        match self {
            Component::Button(properties, style, layout) => {
                Component::Button(properties.map_with(transform), style, layout)
            }
            Component::Label(properties, style, layout) => {
                Component::Label(properties, style, layout)
            }
            Component::TextField(properties, style, layout) => {
                Component::TextField(properties.map_with(transform), style, layout)
            }
            Component::MapView(properties, style, layout) => {
                Component::MapView(properties, style, layout)
            }
            Component::ImageView(image, style, layout) => Component::ImageView(image, style, layout),
            Component::Container(children, style, layout) => Component::Container(
                children
                    .into_iter()
                    .map(|child| child.map_with(transform))
                    .collect(),
                style,
                layout,
            ),
            Component::Table(properties, style, layout) => {
                Component::Table(properties.map_with(transform), style, layout)
            }
            Component::Collection(properties, style, layout) => {
                Component::Collection(properties.map_with(transform), style, layout)
            }
            Component::Carousel(properties, style, layout) => {
                Component::Carousel(properties.map_with(transform), style, layout)
            }
            Component::Touchable { gesture, child } => Component::Touchable {
                gesture: gesture.map_with(transform),
                child: Box::new(child.map_with(transform)),
            },
            Component::Segmented(segments, style, layout) => {
                Component::Segmented(segments.map_with(transform), style, layout)
            }
            Component::Progress(counter, style, layout) => {
                Component::Progress(counter, style, layout)
            }
            Component::Custom { identifier, layout } => Component::Custom { identifier, layout },
        }
    }
}

/// A container with the default style and layout.
pub fn container<M>(children: Vec<Component<M>>) -> Component<M> {
    container_with(children, StyleSheet::default(), Layout::default())
}

pub fn container_with<M>(
    children: Vec<Component<M>>,
    style: StyleSheet<EmptyStyleSheet>,
    layout: Layout,
) -> Component<M> {
    Component::Container(children, style, layout)
}

pub fn touchable<M>(gesture: Gesture<M>, child: Component<M>) -> Component<M> {
    Component::Touchable {
        gesture,
        child: Box::new(child),
    }
}

/// A component rendered by the custom renderer registered for `identifier`.
pub fn custom<M>(identifier: impl Into<String>, layout: Layout) -> Component<M> {
    Component::Custom {
        identifier: identifier.into(),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::button::{button, button_with, ButtonProperties};
    use crate::components::carousel::{carousel, carousel_item, CarouselProperties};
    use crate::components::collection::{collection, collection_item, CollectionProperties};
    use crate::components::image::{image_view, Image};
    use crate::components::label::label;
    use crate::components::map_view::{map_properties, map_view, Coordinates};
    use crate::components::progress::{progress, ProgressCounter};
    use crate::components::segmented::{segment, segmented};
    use crate::components::table::{table, table_item, table_properties, PullToRefresh};
    use crate::components::text_field::{text_field, text_field_properties};
    use crate::layout::{layout, Dimension};
    use crate::style::button_style_sheet;
    use crate::color::Color;

    #[derive(Debug, Clone, PartialEq)]
    enum Dialog {
        Confirm,
        Cancel,
        Select(u8),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum App {
        Dialog(Dialog),
        Other,
    }

    fn fixed(height: f64) -> Layout {
        layout(|l| l.dimensions.height = Dimension::fixed(height))
    }

    /// A tree that touches every component kind.
    fn every_kind() -> Component<Dialog> {
        let styled_button = button_with(
            ButtonProperties {
                text: Some("Confirm".into()),
                is_active: true,
                icon: Some(Image::named("check")),
                on_tap: Some(Dialog::Confirm),
            },
            button_style_sheet(|base, button| {
                base.background_color = Color::GREEN;
                button.text_size = 20;
            }),
            fixed(44.),
        );
        let field = text_field(text_field_properties(|p| {
            p.text = Some("hello".into());
            p.events.on_editing_end = Some(Dialog::Select(9));
        }));
        let segments = ZipList::from_vec(
            vec![
                segment("A").on_tap(Dialog::Select(0)),
                segment("B").on_tap(Dialog::Select(1)),
                segment("C"),
            ],
            1,
        )
        .unwrap();
        let rows = table_properties(
            vec![table_item(60, label("row")).on_tap(Dialog::Select(2))],
            |p| {
                p.pull_to_refresh = Some(PullToRefresh {
                    on_refresh: Dialog::Select(3),
                    is_refreshing: false,
                })
            },
        );
        let cells = CollectionProperties::new(
            vec![collection_item(
                Some(Dialog::Select(4)),
                "cell",
                button("go", Dialog::Select(5)),
            )],
            100,
            100,
        );
        let cards = CarouselProperties::new(
            ZipList::from_vec(
                vec![carousel_item(Some(Dialog::Select(6)), "card", label("card"))],
                0,
            ),
            300,
            200,
        );

        container(vec![
            styled_button,
            label("Are you sure?").with_layout(fixed(20.)),
            field,
            map_view(map_properties(|p| p.center = Some(Coordinates::new(1., 2.)))),
            image_view(Image::named("logo")),
            Component::Table(rows, StyleSheet::default(), fixed(300.)),
            collection(cells),
            carousel(cards),
            touchable(
                Gesture::tap(Dialog::Cancel),
                container(vec![label("Cancel"), custom("spinner", fixed(8.))]),
            ),
            segmented(segments),
            progress(ProgressCounter::new(1, 3).unwrap()),
            custom("chart", Layout::default()),
            table(Vec::new()),
        ])
    }

    fn embed(message: Dialog) -> App {
        App::Dialog(message)
    }

    fn tag(message: App) -> (u32, App) {
        (1, message)
    }

    #[test]
    fn test_map_identity() {
        let tree = every_kind();
        assert_eq!(tree.clone().map(|message| message), tree);
    }

    #[test]
    fn test_map_composition() {
        let tree = every_kind();
        let stepwise = tree.clone().map(embed).map(tag);
        let composed = tree.map(|message| tag(embed(message)));
        assert_eq!(stepwise, composed);
    }

    #[test]
    fn test_map_preserves_layout() {
        let tree = every_kind();
        let mapped = tree.clone().map(embed);
        assert_eq!(tree.layout(), mapped.layout());

        match (&tree, &mapped) {
            (Component::Container(before, _, _), Component::Container(after, _, _)) => {
                assert_eq!(before.len(), after.len(), "mapping preserves the shape");
                for (before, after) in before.iter().zip(after.iter()) {
                    assert_eq!(before.layout(), after.layout());
                    assert_eq!(before.kind_name(), after.kind_name());
                }
            }
            _ => panic!("expected containers"),
        }
    }

    #[test]
    fn test_map_rewrites_messages() {
        let mapped = every_kind().map(embed);
        let children = match mapped {
            Component::Container(children, _, _) => children,
            other => panic!("expected a container, got {:?}", other),
        };

        match &children[0] {
            Component::Button(properties, style, layout) => {
                assert_eq!(properties.on_tap, Some(App::Dialog(Dialog::Confirm)));
                assert_eq!(properties.text.as_deref(), Some("Confirm"));
                assert!(properties.is_active);
                assert_eq!(style.component.text_size, 20, "style is untouched");
                assert_eq!(layout, &fixed(44.));
            }
            other => panic!("expected a button, got {:?}", other),
        }

        match &children[8] {
            Component::Touchable { gesture, child } => {
                assert_eq!(gesture, &Gesture::tap(App::Dialog(Dialog::Cancel)));
                assert_eq!(child.kind_name(), "container");
            }
            other => panic!("expected a touchable, got {:?}", other),
        }

        match &children[9] {
            Component::Segmented(segments, _, _) => {
                assert_eq!(segments.center_index(), 1);
                let taps: Vec<_> = segments.iter().map(|s| s.on_tap.clone()).collect();
                assert_eq!(
                    taps,
                    vec![
                        Some(App::Dialog(Dialog::Select(0))),
                        Some(App::Dialog(Dialog::Select(1))),
                        None,
                    ]
                );
            }
            other => panic!("expected a segmented control, got {:?}", other),
        }

        match &children[5] {
            Component::Table(properties, _, _) => {
                assert_eq!(
                    properties.pull_to_refresh.as_ref().map(|p| &p.on_refresh),
                    Some(&App::Dialog(Dialog::Select(3)))
                );
                assert_eq!(properties.items[0].height, 60);
            }
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn test_touchable_layout_is_child_layout() {
        let tree: Component<()> = touchable(Gesture::tap(()), label("x").with_layout(fixed(12.)));
        assert_eq!(tree.layout(), &fixed(12.));

        let relaid = tree.with_layout(fixed(30.));
        match &relaid {
            Component::Touchable { child, .. } => assert_eq!(child.layout(), &fixed(30.)),
            other => panic!("expected a touchable, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_component_identifiers() {
        let tree: Component<()> = container(vec![
            custom("a", Layout::default()),
            label("between"),
            container(vec![
                custom("b", Layout::default()),
                custom("c", Layout::default()),
            ]),
        ]);
        assert_eq!(tree.custom_component_identifiers(), vec!["a", "b", "c"]);

        let hidden: Component<()> =
            touchable(Gesture::tap(()), custom("x", Layout::default()));
        assert!(
            hidden.custom_component_identifiers().is_empty(),
            "touchables are not searched"
        );

        let duplicated: Component<()> = container(vec![
            custom("a", Layout::default()),
            custom("a", Layout::default()),
        ]);
        assert_eq!(duplicated.custom_component_identifiers(), vec!["a", "a"]);
    }

    #[test]
    fn test_every_kind_identifiers() {
        assert_eq!(
            every_kind().custom_component_identifiers(),
            vec!["chart"],
            "the spinner inside the touchable is not reachable through containers"
        );
    }

    #[test]
    fn test_children_descend_into_every_holder() {
        let tree = every_kind();
        let kinds: Vec<_> = tree.children().iter().map(|c| c.kind_name()).collect();
        assert_eq!(kinds.len(), 13);

        let holders: Vec<_> = tree
            .children()
            .into_iter()
            .filter(|child| !child.children().is_empty())
            .map(|child| (child.kind_name(), child.children().len()))
            .collect();
        assert_eq!(
            holders,
            vec![("table", 1), ("collection", 1), ("carousel", 1), ("touchable", 1)],
            "leaf kinds and the empty table have no children"
        );
        assert!(label::<()>("leaf").children().is_empty());
    }
}
