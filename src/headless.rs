//! An in-memory platform.
//!
//! Renders component trees into plain [`Node`] trees instead of native widgets and records every
//! native operation in a journal. Useful for tests and for driving the component manager without
//! a display.

use crate::mailbox::Mailbox;
use crate::platform::{Native, Platform, ScreenRequest};
use crate::screen::ScreenId;
use cgmath::{Point2, Vector2};
use log::debug;
use roost_core::backend::{CustomComponentRegistry, Renderer};
use roost_core::components::segmented::SegmentContent;
use roost_core::layout::{FixedLayoutEngine, LayoutEngine};
use roost_core::navigation::{NavigationBar, NavigationBarTitle};
use roost_core::{Component, Rect};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Headless platform errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlessError {
    #[error("no renderer registered for custom component `{0}`")]
    UnregisteredCustomComponent(String),
    #[error("unknown {0}")]
    UnknownScreen(ScreenId),
    #[error("unknown stack {0:?}")]
    UnknownStack(StackId),
    #[error("cannot pop the root screen of stack {0:?}")]
    CannotPopRoot(StackId),
    #[error("{0:?} is not presented")]
    NotPresented(Mounted),
    #[error("no component at {path:?} in {screen}")]
    NoSuchComponent { screen: ScreenId, path: Vec<usize> },
    /// Returned by an operation armed with [`HeadlessPlatform::fail_after`].
    #[error("simulated failure: {0}")]
    Simulated(&'static str),
}

/// Identifies a headless navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackId(usize);

/// Something the headless platform can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mounted {
    Screen(ScreenId),
    Stack(StackId),
}

impl<'a> From<Native<'a, StackId, ScreenId>> for Mounted {
    fn from(native: Native<'a, StackId, ScreenId>) -> Mounted {
        match native {
            Native::Screen(id) => Mounted::Screen(*id),
            Native::Stack(id) => Mounted::Stack(*id),
        }
    }
}

/// A native operation, as recorded in the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateScreen(ScreenId),
    UpdateScreen(ScreenId),
    CreateStack {
        stack: StackId,
        root: ScreenId,
    },
    Push {
        stack: StackId,
        screen: ScreenId,
        animated: bool,
    },
    Pop {
        stack: StackId,
        animated: bool,
    },
    RenderNavigationBar {
        stack: StackId,
        screen: ScreenId,
    },
    SetRoot(Mounted),
    PresentModally {
        presenter: Mounted,
        presented: Mounted,
        animated: bool,
    },
    DismissModal {
        presented: Mounted,
        animated: bool,
    },
}

/// A rendered component.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The component kind, as in [`Component::kind_name`].
    pub kind: &'static str,
    /// Visible text, if any.
    pub text: Option<String>,
    /// Frame relative to the parent node.
    pub frame: Rect,
    /// Set when rendered in debug mode.
    pub outlined: bool,
    pub children: Vec<Node>,
}

impl Node {
    fn empty() -> Node {
        Node {
            kind: "container",
            text: None,
            frame: Rect::zero(),
            outlined: false,
            children: Vec::new(),
        }
    }

    /// Returns the node at the given index path.
    pub fn get(&self, path: &[usize]) -> Option<&Node> {
        match path.split_first() {
            Some((index, rest)) => self.children.get(*index)?.get(rest),
            None => Some(self),
        }
    }

    /// All visible text in the subtree, depth-first.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.collect_texts(&mut texts);
        texts
    }

    fn collect_texts<'a>(&'a self, texts: &mut Vec<&'a str>) {
        if let Some(text) = &self.text {
            texts.push(text);
        }
        for child in &self.children {
            child.collect_texts(texts);
        }
    }
}

/// Renders component trees into nodes, framing each one with a layout engine.
pub struct HeadlessRenderer<'a, L = FixedLayoutEngine> {
    custom_components: &'a HashSet<String>,
    engine: &'a L,
    bounds: Rect,
    debug_mode: bool,
}

impl<'a> HeadlessRenderer<'a> {
    /// Creates a renderer using the [`FixedLayoutEngine`].
    pub fn new(
        custom_components: &'a HashSet<String>,
        bounds: Rect,
        debug_mode: bool,
    ) -> HeadlessRenderer<'a> {
        HeadlessRenderer::with_layout_engine(
            custom_components,
            &FixedLayoutEngine,
            bounds,
            debug_mode,
        )
    }
}

impl<'a, L: LayoutEngine> HeadlessRenderer<'a, L> {
    pub fn with_layout_engine(
        custom_components: &'a HashSet<String>,
        engine: &'a L,
        bounds: Rect,
        debug_mode: bool,
    ) -> HeadlessRenderer<'a, L> {
        HeadlessRenderer {
            custom_components,
            engine,
            bounds,
            debug_mode,
        }
    }

    fn node<M>(&self, component: &Component<M>, bounds: Rect) -> Result<Node, HeadlessError> {
        let frame = self.engine.frame(component.layout(), bounds);
        let local_bounds = Rect::new(Point2::new(0., 0.), frame.size);

        let text = match component {
            Component::Button(properties, _, _) => properties.text.clone(),
            Component::Label(properties, _, _) => Some(
                properties
                    .text_after_layout
                    .clone()
                    .unwrap_or_else(|| properties.text.clone()),
            ),
            Component::TextField(properties, _, _) => properties
                .text
                .clone()
                .or_else(|| properties.placeholder.clone()),
            Component::Segmented(segments, _, _) => match &segments.center().content {
                SegmentContent::Title(title) => Some(title.clone()),
                SegmentContent::Image(_) => None,
            },
            Component::Custom { identifier, .. } => {
                if !self.custom_components.is_registered(identifier) {
                    return Err(HeadlessError::UnregisteredCustomComponent(
                        identifier.clone(),
                    ));
                }
                Some(identifier.clone())
            }
            _ => None,
        };

        let children = component
            .children()
            .into_iter()
            .map(|child| self.node(child, local_bounds))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Node {
            kind: component.kind_name(),
            text,
            frame,
            outlined: self.debug_mode,
            children,
        })
    }
}

impl<'a, M, L: LayoutEngine> Renderer<M> for HeadlessRenderer<'a, L> {
    type Container = Node;
    type Error = HeadlessError;

    fn render(&mut self, component: &Component<M>, container: &mut Node) -> Result<(), HeadlessError> {
        *container = self.node(component, self.bounds)?;
        Ok(())
    }
}

/// What a tap on a component fires, if anything. The innermost message wins.
///
/// Returns `None` if the path doesn’t lead to a component.
fn tapped_message<M: Clone>(component: &Component<M>, path: &[usize]) -> Option<Option<M>> {
    let (index, rest) = match path.split_first() {
        Some((index, rest)) => (*index, rest),
        None => {
            return Some(match component {
                Component::Button(properties, _, _) => properties.on_tap.clone(),
                Component::Touchable { gesture, .. } => Some(gesture.message().clone()),
                Component::Segmented(segments, _, _) => {
                    let segment = segments.center();
                    segment.on_tap.clone().filter(|_| segment.is_enabled)
                }
                _ => None,
            })
        }
    };

    let (child, fallback) = match component {
        Component::Container(children, _, _) => (children.get(index)?, None),
        Component::Touchable { gesture, child } if index == 0 => {
            (&**child, Some(gesture.message().clone()))
        }
        Component::Table(properties, _, _) => {
            let item = properties.items.get(index)?;
            (&item.content, item.on_tap.clone())
        }
        Component::Collection(properties, _, _) => {
            let item = properties.items.get(index)?;
            (&item.content, item.on_tap.clone())
        }
        Component::Carousel(properties, _, _) => {
            let item = properties.items.as_ref()?.get(index)?;
            (&*item.content, item.on_tap.clone())
        }
        _ => return None,
    };

    Some(tapped_message(child, rest)?.or(fallback))
}

/// A screen rendered by the headless platform.
#[derive(Debug)]
pub struct HeadlessScreen<M> {
    component: Component<M>,
    mailbox: Mailbox<M>,
    node: Node,
    title: Option<String>,
    debug_mode: bool,
}

impl<M> HeadlessScreen<M> {
    /// The rendered tree.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The navigation bar title text, if the screen is on a stack and has one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(String::as_str)
    }

    pub fn component(&self) -> &Component<M> {
        &self.component
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}

fn title_text<M>(navigation_bar: &NavigationBar<M>) -> Option<String> {
    match &navigation_bar.title {
        Some(NavigationBarTitle::Text(text)) => Some(text.clone()),
        _ => None,
    }
}

/// A platform without a display.
///
/// Screens and stacks are forgotten once they’re popped, dismissed or replaced as the root.
#[derive(Debug)]
pub struct HeadlessPlatform<M, L = FixedLayoutEngine> {
    bounds: Rect,
    layout_engine: L,
    custom_components: HashSet<String>,
    screens: HashMap<ScreenId, HeadlessScreen<M>>,
    stacks: HashMap<StackId, Vec<ScreenId>>,
    stack_id_counter: usize,
    root: Option<Mounted>,
    presented: Vec<Mounted>,
    journal: Vec<Operation>,
    failure: Option<(usize, HeadlessError)>,
}

impl<M> Default for HeadlessPlatform<M> {
    fn default() -> Self {
        HeadlessPlatform::with_bounds(Rect::new(
            Point2::new(0., 0.),
            Vector2::new(375., 667.),
        ))
    }
}

impl<M> HeadlessPlatform<M> {
    pub fn new() -> HeadlessPlatform<M> {
        HeadlessPlatform::default()
    }

    /// Creates a headless platform whose screens have the given bounds.
    pub fn with_bounds(bounds: Rect) -> HeadlessPlatform<M> {
        HeadlessPlatform::with_layout_engine(bounds, FixedLayoutEngine)
    }
}

impl<M, L: LayoutEngine> HeadlessPlatform<M, L> {
    /// Creates a headless platform that frames components with the given layout engine.
    pub fn with_layout_engine(bounds: Rect, layout_engine: L) -> HeadlessPlatform<M, L> {
        HeadlessPlatform {
            bounds,
            layout_engine,
            custom_components: HashSet::new(),
            screens: HashMap::new(),
            stacks: HashMap::new(),
            stack_id_counter: 0,
            root: None,
            presented: Vec::new(),
            journal: Vec::new(),
            failure: None,
        }
    }

    /// Allows custom components with this identifier to be rendered.
    pub fn register_custom_component(&mut self, identifier: impl Into<String>) {
        self.custom_components.insert(identifier.into());
    }

    pub fn screen(&self, id: ScreenId) -> Option<&HeadlessScreen<M>> {
        self.screens.get(&id)
    }

    /// Number of live screens, on stacks or not.
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Screens on a stack, from the root to the top.
    pub fn stack(&self, id: StackId) -> Option<&[ScreenId]> {
        self.stacks.get(&id).map(Vec::as_slice)
    }

    pub fn root(&self) -> Option<Mounted> {
        self.root
    }

    /// Modally presented screens and stacks, from the bottom-most to the frontmost.
    pub fn presented(&self) -> &[Mounted] {
        &self.presented
    }

    /// The screen the user would currently see.
    pub fn visible_screen(&self) -> Option<ScreenId> {
        match self.presented.last().cloned().or(self.root)? {
            Mounted::Screen(id) => Some(id),
            Mounted::Stack(id) => self.stacks.get(&id)?.last().cloned(),
        }
    }

    pub fn journal(&self) -> &[Operation] {
        &self.journal
    }

    /// Returns the journal and starts a new one.
    pub fn take_journal(&mut self) -> Vec<Operation> {
        std::mem::replace(&mut self.journal, Vec::new())
    }

    /// Lets the next `successes` native operations through, then fails the one after with
    /// `error`.
    pub fn fail_after(&mut self, successes: usize, error: HeadlessError) {
        self.failure = Some((successes, error));
    }

    fn checkpoint(&mut self) -> Result<(), HeadlessError> {
        match self.failure.take() {
            Some((0, error)) => Err(error),
            Some((successes, error)) => {
                self.failure = Some((successes - 1, error));
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn render(&self, component: &Component<M>, debug_mode: bool) -> Result<Node, HeadlessError> {
        let mut node = Node::empty();
        HeadlessRenderer::with_layout_engine(
            &self.custom_components,
            &self.layout_engine,
            self.bounds,
            debug_mode,
        )
        .render(component, &mut node)?;
        Ok(node)
    }

    /// Forgets a screen, or a stack and every screen on it.
    fn release(&mut self, mounted: Mounted) {
        let screens = match mounted {
            Mounted::Screen(id) => vec![id],
            Mounted::Stack(id) => self.stacks.remove(&id).unwrap_or_default(),
        };
        for id in screens {
            self.screens.remove(&id);
        }
        debug!("released {:?}", mounted);
    }

    fn screen_mut(&mut self, id: ScreenId) -> Result<&mut HeadlessScreen<M>, HeadlessError> {
        self.screens
            .get_mut(&id)
            .ok_or(HeadlessError::UnknownScreen(id))
    }

    fn stack_mut(&mut self, id: StackId) -> Result<&mut Vec<ScreenId>, HeadlessError> {
        self.stacks
            .get_mut(&id)
            .ok_or(HeadlessError::UnknownStack(id))
    }
}

impl<M: Clone + Send + 'static, L: LayoutEngine> HeadlessPlatform<M, L> {
    /// Simulates a tap on the component at the index path and dispatches whatever message it
    /// fires through the screen’s mailbox.
    ///
    /// Index paths descend through containers, touchables and the items of tables, collections
    /// and carousels. Returns whether a message was dispatched.
    pub fn tap(&self, screen: ScreenId, path: &[usize]) -> Result<bool, HeadlessError> {
        let rendered = self
            .screens
            .get(&screen)
            .ok_or(HeadlessError::UnknownScreen(screen))?;
        let message = tapped_message(&rendered.component, path).ok_or_else(|| {
            HeadlessError::NoSuchComponent {
                screen,
                path: path.to_vec(),
            }
        })?;

        match message {
            Some(message) => {
                debug!("tap at {:?} in {} fired a message", path, screen);
                rendered.mailbox.dispatch(message);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<M: Clone + Send + 'static, L: LayoutEngine> Platform<M> for HeadlessPlatform<M, L> {
    type ScreenRef = ScreenId;
    type StackRef = StackId;
    type Error = HeadlessError;

    fn custom_components(&self) -> &dyn CustomComponentRegistry {
        &self.custom_components
    }

    fn create_screen(
        &mut self,
        request: ScreenRequest<'_, M>,
    ) -> Result<ScreenId, HeadlessError> {
        self.checkpoint()?;
        let node = self.render(request.component, request.debug_mode)?;
        self.screens.insert(
            request.id,
            HeadlessScreen {
                component: request.component.clone(),
                mailbox: request.mailbox.clone(),
                node,
                title: None,
                debug_mode: request.debug_mode,
            },
        );
        self.journal.push(Operation::CreateScreen(request.id));
        Ok(request.id)
    }

    fn update_screen(
        &mut self,
        screen: &mut ScreenId,
        component: &Component<M>,
        debug_mode: bool,
    ) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        let node = self.render(component, debug_mode)?;
        let rendered = self.screen_mut(*screen)?;
        rendered.component = component.clone();
        rendered.node = node;
        rendered.debug_mode = debug_mode;
        self.journal.push(Operation::UpdateScreen(*screen));
        Ok(())
    }

    fn create_stack(
        &mut self,
        root: &mut ScreenId,
        navigation_bar: &NavigationBar<M>,
    ) -> Result<StackId, HeadlessError> {
        self.checkpoint()?;
        self.screen_mut(*root)?.title = title_text(navigation_bar);
        let stack = StackId(self.stack_id_counter);
        self.stack_id_counter += 1;
        self.stacks.insert(stack, vec![*root]);
        self.journal.push(Operation::CreateStack { stack, root: *root });
        Ok(stack)
    }

    fn push_screen(
        &mut self,
        stack: &mut StackId,
        screen: &mut ScreenId,
        navigation_bar: &NavigationBar<M>,
        animated: bool,
    ) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        self.screen_mut(*screen)?.title = title_text(navigation_bar);
        self.stack_mut(*stack)?.push(*screen);
        self.journal.push(Operation::Push {
            stack: *stack,
            screen: *screen,
            animated,
        });
        Ok(())
    }

    fn pop_screen(&mut self, stack: &mut StackId, animated: bool) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        let screens = self.stack_mut(*stack)?;
        if screens.len() <= 1 {
            return Err(HeadlessError::CannotPopRoot(*stack));
        }
        if let Some(popped) = screens.pop() {
            self.screens.remove(&popped);
        }
        self.journal.push(Operation::Pop {
            stack: *stack,
            animated,
        });
        Ok(())
    }

    fn render_navigation_bar(
        &mut self,
        stack: &mut StackId,
        screen: &mut ScreenId,
        navigation_bar: &NavigationBar<M>,
    ) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        self.screen_mut(*screen)?.title = title_text(navigation_bar);
        self.journal.push(Operation::RenderNavigationBar {
            stack: *stack,
            screen: *screen,
        });
        Ok(())
    }

    fn set_root(&mut self, root: Native<'_, StackId, ScreenId>) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        let root = Mounted::from(root);
        let replaced = self.root.replace(root).into_iter();
        let dismissed = std::mem::replace(&mut self.presented, Vec::new());
        for mounted in replaced.chain(dismissed).filter(|mounted| *mounted != root) {
            self.release(mounted);
        }
        self.journal.push(Operation::SetRoot(root));
        Ok(())
    }

    fn present_modally(
        &mut self,
        presenter: Native<'_, StackId, ScreenId>,
        presented: Native<'_, StackId, ScreenId>,
        animated: bool,
    ) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        let presenter = Mounted::from(presenter);
        let presented = Mounted::from(presented);
        self.presented.push(presented);
        self.journal.push(Operation::PresentModally {
            presenter,
            presented,
            animated,
        });
        Ok(())
    }

    fn dismiss_modal(
        &mut self,
        presented: Native<'_, StackId, ScreenId>,
        animated: bool,
    ) -> Result<(), HeadlessError> {
        self.checkpoint()?;
        let presented = Mounted::from(presented);
        let index = self
            .presented
            .iter()
            .rposition(|mounted| *mounted == presented)
            .ok_or(HeadlessError::NotPresented(presented))?;
        // anything presented over the dismissed modal goes with it
        for mounted in self.presented.split_off(index) {
            self.release(mounted);
        }
        self.journal.push(Operation::DismissModal {
            presented,
            animated,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roost_core::components::button::button;
    use roost_core::components::label::label;
    use roost_core::components::table::{table, table_item};
    use roost_core::layout::{layout, Dimension, Layout};
    use roost_core::{container, custom, touchable, Gesture};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Save,
        Card,
        Row(usize),
    }

    #[test]
    fn renders_nodes_with_fixed_frames() {
        let registry = HashSet::new();
        let bounds = Rect::new(Point2::new(0., 0.), Vector2::new(320., 480.));
        let mut renderer = HeadlessRenderer::new(&registry, bounds, true);

        let header = label::<Msg>("Title").with_layout(layout(|l| {
            l.dimensions.height = Dimension::fixed(44.);
        }));
        let tree = container(vec![header, button("Save", Msg::Save)]);

        let mut node = Node::empty();
        renderer.render(&tree, &mut node).expect("should render");

        assert_eq!(node.kind, "container");
        assert_eq!(node.texts(), vec!["Title", "Save"]);
        assert_eq!(node.get(&[0]).map(|n| n.frame.size), Some(Vector2::new(320., 44.)));
        assert!(node.get(&[1]).map_or(false, |n| n.outlined), "debug mode outlines nodes");
        assert!(node.get(&[2]).is_none());
    }

    #[test]
    fn refuses_unregistered_custom_components() {
        let mut registry = HashSet::new();
        let mut renderer = HeadlessRenderer::new(&registry, Rect::zero(), false);
        let tree: Component<Msg> = container(vec![custom("chart", Default::default())]);
        let mut node = Node::empty();
        assert_eq!(
            renderer.render(&tree, &mut node),
            Err(HeadlessError::UnregisteredCustomComponent("chart".into()))
        );

        registry.insert("chart".to_string());
        let mut renderer = HeadlessRenderer::new(&registry, Rect::zero(), false);
        assert_eq!(renderer.render(&tree, &mut node), Ok(()));
        assert_eq!(node.texts(), vec!["chart"]);
    }

    #[test]
    fn taps_resolve_the_innermost_message() {
        let tree = container(vec![
            touchable(
                Gesture::tap(Msg::Card),
                container(vec![label("Card"), button("Save", Msg::Save)]),
            ),
            table(vec![
                table_item(44, label("First")).on_tap(Msg::Row(0)),
                table_item(44, label("Second")),
            ]),
        ]);

        assert_eq!(tapped_message(&tree, &[0]), Some(Some(Msg::Card)));
        assert_eq!(
            tapped_message(&tree, &[0, 0, 1]),
            Some(Some(Msg::Save)),
            "the button inside the touchable should win"
        );
        assert_eq!(
            tapped_message(&tree, &[0, 0, 0]),
            Some(Some(Msg::Card)),
            "a label inside the touchable falls back to the gesture"
        );
        assert_eq!(tapped_message(&tree, &[1, 0]), Some(Some(Msg::Row(0))));
        assert_eq!(tapped_message(&tree, &[1, 1]), Some(None));
        assert_eq!(tapped_message(&tree, &[0, 1]), None, "touchables have one child");
        assert_eq!(tapped_message(&tree, &[3]), None);
    }

    /// Shrinks every frame by a fixed amount on each edge.
    #[derive(Debug)]
    struct Inset(f64);

    impl LayoutEngine for Inset {
        fn frame(&self, _: &Layout, bounds: Rect) -> Rect {
            bounds.inset(self.0, self.0, self.0, self.0)
        }
    }

    #[test]
    fn platform_frames_with_its_layout_engine() {
        let bounds = Rect::new(Point2::new(0., 0.), Vector2::new(100., 100.));
        let mut platform: HeadlessPlatform<Msg, Inset> =
            HeadlessPlatform::with_layout_engine(bounds, Inset(10.));
        let tree = container(vec![label("Inset")]);

        let screen = platform
            .create_screen(ScreenRequest {
                id: ScreenId::new(),
                component: &tree,
                mailbox: &Mailbox::new(),
                debug_mode: false,
            })
            .expect("should render");
        let node = platform.screen(screen).map(HeadlessScreen::node).expect("should be rendered");

        assert_eq!(node.frame, Rect::new(Point2::new(10., 10.), Vector2::new(80., 80.)));
        assert_eq!(
            node.get(&[0]).map(|n| n.frame),
            Some(Rect::new(Point2::new(10., 10.), Vector2::new(60., 60.))),
            "children are framed within their parent’s bounds"
        );
    }

    #[test]
    fn armed_failures_skip_the_given_number_of_operations() {
        let mut platform: HeadlessPlatform<Msg> = HeadlessPlatform::new();
        platform.fail_after(1, HeadlessError::Simulated("second"));
        let tree = label("X");
        let mailbox = Mailbox::new();
        let request = |id| ScreenRequest {
            id,
            component: &tree,
            mailbox: &mailbox,
            debug_mode: false,
        };

        assert!(platform.create_screen(request(ScreenId::new())).is_ok());
        assert_eq!(
            platform.create_screen(request(ScreenId::new())),
            Err(HeadlessError::Simulated("second"))
        );
        assert!(platform.create_screen(request(ScreenId::new())).is_ok(), "failures fire once");
        assert_eq!(platform.screen_count(), 2);
    }
}
