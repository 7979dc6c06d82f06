//! Traits for renderers.

use crate::component::Component;
use crate::error::Error;
use std::collections::{BTreeSet, HashSet};

/// Materializes a component tree into native widgets.
pub trait Renderer<M> {
    /// The native container the tree is rendered into.
    type Container;

    /// Error type.
    type Error;

    /// Renders the tree into the container, replacing whatever was rendered before.
    fn render(
        &mut self,
        component: &Component<M>,
        container: &mut Self::Container,
    ) -> Result<(), Self::Error>;
}

/// Knows which custom component identifiers have a renderer.
pub trait CustomComponentRegistry {
    fn is_registered(&self, identifier: &str) -> bool;
}

impl CustomComponentRegistry for HashSet<String> {
    fn is_registered(&self, identifier: &str) -> bool {
        self.contains(identifier)
    }
}

impl CustomComponentRegistry for BTreeSet<String> {
    fn is_registered(&self, identifier: &str) -> bool {
        self.contains(identifier)
    }
}

impl<R: CustomComponentRegistry + ?Sized> CustomComponentRegistry for &R {
    fn is_registered(&self, identifier: &str) -> bool {
        (**self).is_registered(identifier)
    }
}

/// Checks that every custom component in the tree can be rendered.
///
/// Run this before rendering so a missing registration is reported up front instead of halfway
/// through a render. Walks every nested component (touchables and list items included), not only
/// containers. Returns the first unregistered identifier in depth-first order.
pub fn validate_custom_components<M, R>(component: &Component<M>, registry: &R) -> Result<(), Error>
where
    R: CustomComponentRegistry + ?Sized,
{
    if let Component::Custom { identifier, .. } = component {
        if !registry.is_registered(identifier) {
            return Err(Error::UnregisteredCustomComponent(identifier.clone()));
        }
    }
    component
        .children()
        .into_iter()
        .try_for_each(|child| validate_custom_components(child, registry))
}

#[test]
fn test_validate_custom_components() {
    use crate::component::{container, custom};
    use crate::layout::Layout;

    let tree: Component<()> = container(vec![
        custom("chart", Layout::default()),
        custom("map", Layout::default()),
    ]);

    let mut registry = HashSet::new();
    registry.insert("chart".to_string());
    assert_eq!(
        validate_custom_components(&tree, &registry),
        Err(Error::UnregisteredCustomComponent("map".into()))
    );

    registry.insert("map".to_string());
    assert_eq!(validate_custom_components(&tree, &registry), Ok(()));
}

#[test]
fn test_validation_searches_beyond_containers() {
    use crate::component::{custom, touchable};
    use crate::components::label::label;
    use crate::components::table::{table, table_item};
    use crate::gesture::Gesture;
    use crate::layout::Layout;

    let registry: HashSet<String> = HashSet::new();
    let wrapped: Component<u8> = touchable(Gesture::tap(1), custom("chart", Layout::default()));
    assert_eq!(
        validate_custom_components(&wrapped, &registry),
        Err(Error::UnregisteredCustomComponent("chart".into())),
        "a touchable’s child must be validated"
    );

    let rows: Component<u8> = table(vec![
        table_item(44, label("plain")),
        table_item(44, custom("sparkline", Layout::default())),
    ]);
    assert_eq!(
        validate_custom_components(&rows, &registry),
        Err(Error::UnregisteredCustomComponent("sparkline".into())),
        "table cells must be validated"
    );
}
