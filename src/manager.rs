//! The component manager.

use crate::decision::{decide_present, decide_render, decide_render_with_root};
use crate::decision::{AttachmentKind, PresentAction, RenderAction};
use crate::error::{Error, UnsupportedRoot};
use crate::mailbox::Mailbox;
use crate::platform::{Platform, ScreenRequest};
use crate::screen::{Attachment, AttachmentId, Mount, NavigationStack, Screen, ScreenId};
use log::{debug, error, warn};
use roost_core::backend::validate_custom_components;
use roost_core::navigation::{NavigationBar, NavigationBarTitle};
use roost_core::{Component, RootComponent, RootKind};

/// Component manager options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Passed to the platform on every screen creation and update.
    pub debug_mode: bool,
    pub animate_push: bool,
    pub animate_presentation: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        ManagerOptions {
            debug_mode: false,
            animate_push: true,
            animate_presentation: true,
        }
    }
}

impl ManagerOptions {
    pub fn debug_mode(self, debug_mode: bool) -> ManagerOptions {
        ManagerOptions { debug_mode, ..self }
    }

    pub fn animate_push(self, animate_push: bool) -> ManagerOptions {
        ManagerOptions {
            animate_push,
            ..self
        }
    }

    pub fn animate_presentation(self, animate_presentation: bool) -> ManagerOptions {
        ManagerOptions {
            animate_presentation,
            ..self
        }
    }
}

/// Returned by [`ComponentManager::present`].
#[derive(Debug, Clone)]
pub struct AttachmentHandle<M> {
    /// The attachment the tree ended up in. Pushing onto a stack returns the stack’s id.
    pub id: AttachmentId,
    /// Messages fired by anything in that attachment.
    pub mailbox: Mailbox<M>,
}

type PlatformAttachment<M, P> =
    Attachment<M, <P as Platform<M>>::StackRef, <P as Platform<M>>::ScreenRef>;
type PlatformScreen<M, P> = Screen<M, <P as Platform<M>>::ScreenRef>;
type ManagerResult<T, M, P> = Result<T, Error<<P as Platform<M>>::Error>>;

/// Attaches component trees to the display and keeps track of what’s attached.
///
/// The manager owns the root attachment and a stack of modally presented attachments on top of
/// it. Every mutator takes `&mut self`, so attachment changes are serialized; share a manager
/// between threads by wrapping it in a mutex.
///
/// Trees are validated before anything native is touched: a failed validation or an unsupported
/// root leaves the manager unchanged.
pub struct ComponentManager<M, P: Platform<M>> {
    platform: P,
    options: ManagerOptions,
    mailbox: Mailbox<M>,
    root: Option<PlatformAttachment<M, P>>,
    modals: Vec<PlatformAttachment<M, P>>,
    version: u64,
}

impl<M, P> ComponentManager<M, P>
where
    M: Clone + Send + 'static,
    P: Platform<M>,
{
    pub fn new(platform: P) -> ComponentManager<M, P> {
        ComponentManager::with_options(platform, ManagerOptions::default())
    }

    pub fn with_options(platform: P, options: ManagerOptions) -> ComponentManager<M, P> {
        ComponentManager {
            platform,
            options,
            mailbox: Mailbox::new(),
            root: None,
            modals: Vec::new(),
            version: 0,
        }
    }

    /// Messages fired by everything this manager ever attached.
    pub fn mailbox(&self) -> &Mailbox<M> {
        &self.mailbox
    }

    pub fn root(&self) -> Option<&PlatformAttachment<M, P>> {
        self.root.as_ref()
    }

    /// Modally presented attachments, from the bottom-most to the frontmost.
    pub fn modals(&self) -> &[PlatformAttachment<M, P>] {
        &self.modals
    }

    /// Incremented by every successful change.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn current_kind(&self) -> Option<AttachmentKind> {
        self.root.as_ref().map(Attachment::kind)
    }

    /// Checks the tree and the navigation bar’s title component for unregistered custom
    /// components.
    fn validate(
        &self,
        component: &Component<M>,
        navigation_bar: Option<&NavigationBar<M>>,
    ) -> ManagerResult<(), M, P> {
        let registry = self.platform.custom_components();
        let title = match navigation_bar.and_then(|bar| bar.title.as_ref()) {
            Some(NavigationBarTitle::Component(title)) => Some(&**title),
            _ => None,
        };
        std::iter::once(component)
            .chain(title)
            .try_for_each(|tree| validate_custom_components(tree, registry))
            .map_err(|err| {
                error!("refusing to render: {}", err);
                Error::from(err)
            })
    }

    fn log_unsupported(err: UnsupportedRoot) -> UnsupportedRoot {
        error!("{}", err);
        err
    }

    /// Presents a tree.
    ///
    /// - modally, if anything is attached: over the frontmost attachment
    /// - as a stack while a stack is attached: pushed onto that stack
    /// - otherwise: replacing whatever is attached
    pub fn present(
        &mut self,
        component: Component<M>,
        root: RootComponent<M>,
        modally: bool,
    ) -> ManagerResult<AttachmentHandle<M>, M, P> {
        let action =
            decide_present(self.current_kind(), root, modally).map_err(Self::log_unsupported)?;
        self.validate(&component, action.navigation_bar())?;

        match action {
            PresentAction::Attach(root) => self.attach(component, root),
            PresentAction::Push(navigation_bar) => self.push(component, navigation_bar),
            PresentAction::PresentModally(root) => self.present_modally(component, root),
        }
    }

    /// Renders a tree into whatever is attached, in place.
    ///
    /// Updates the single screen or the stack’s top screen; if nothing is attached, attaches the
    /// tree as a simple root. Returns the mailbox of the screen the tree was rendered into.
    pub fn render(&mut self, component: Component<M>) -> ManagerResult<Mailbox<M>, M, P> {
        let action = decide_render(self.current_kind());
        self.validate(&component, action.navigation_bar())?;

        match action {
            RenderAction::Attach(root) => Ok(self.attach(component, root)?.mailbox),
            RenderAction::UpdateSingle | RenderAction::UpdateTop { .. } => {
                self.update_top(component, None)
            }
        }
    }

    /// Renders a tree with the given root, updating in place if the attached root has the same
    /// shape and attaching afresh otherwise.
    pub fn render_with_root(
        &mut self,
        component: Component<M>,
        root: RootComponent<M>,
    ) -> ManagerResult<(), M, P> {
        let action =
            decide_render_with_root(self.current_kind(), root).map_err(Self::log_unsupported)?;
        self.validate(&component, action.navigation_bar())?;

        match action {
            RenderAction::Attach(root) => self.attach(component, root).map(|_| ()),
            RenderAction::UpdateSingle => self.update_top(component, None).map(|_| ()),
            RenderAction::UpdateTop { navigation_bar } => {
                self.update_top(component, navigation_bar).map(|_| ())
            }
        }
    }

    /// Pops the top screen off the attached stack.
    ///
    /// Returns the popped screen’s id, or `None` if there was nothing to pop: the root isn’t a
    /// stack, or only its root screen is left.
    pub fn pop(&mut self, animated: bool) -> ManagerResult<Option<ScreenId>, M, P> {
        let stack = match self.root.as_mut().map(Attachment::mount_mut) {
            Some(Mount::Stack(stack)) if stack.len() > 1 => stack,
            _ => {
                warn!("nothing to pop");
                return Ok(None);
            }
        };

        let (native, _) = stack.native_and_top_mut();
        self.platform
            .pop_screen(native, animated)
            .map_err(Error::Platform)?;
        let popped = stack.pop().map(|screen| screen.id());
        debug!("popped {:?}", popped);
        self.version += 1;
        Ok(popped)
    }

    /// Dismisses the frontmost modal.
    ///
    /// Returns the dismissed attachment’s id, or `None` if nothing is presented modally.
    pub fn dismiss(&mut self, animated: bool) -> ManagerResult<Option<AttachmentId>, M, P> {
        let modal = match self.modals.last() {
            Some(modal) => modal,
            None => {
                warn!("nothing to dismiss");
                return Ok(None);
            }
        };

        self.platform
            .dismiss_modal(modal.native(), animated)
            .map_err(Error::Platform)?;
        let dismissed = self.modals.pop().map(|modal| modal.id());
        debug!("dismissed {:?}", dismissed);
        self.version += 1;
        Ok(dismissed)
    }

    fn build_screen(
        platform: &mut P,
        options: &ManagerOptions,
        component: Component<M>,
    ) -> ManagerResult<PlatformScreen<M, P>, M, P> {
        let id = ScreenId::new();
        let mailbox = Mailbox::new();
        let native = platform
            .create_screen(ScreenRequest {
                id,
                component: &component,
                mailbox: &mailbox,
                debug_mode: options.debug_mode,
            })
            .map_err(Error::Platform)?;
        debug!("created {}", id);
        Ok(Screen::new(id, component, mailbox, native))
    }

    fn build_attachment(
        platform: &mut P,
        options: &ManagerOptions,
        component: Component<M>,
        root: RootComponent<M>,
    ) -> ManagerResult<PlatformAttachment<M, P>, M, P> {
        let mount = match root {
            RootComponent::Simple => Mount::Single(Self::build_screen(platform, options, component)?),
            RootComponent::Stack(navigation_bar) => {
                let mut screen = Self::build_screen(platform, options, component)?;
                let native = platform
                    .create_stack(screen.native_mut(), &navigation_bar)
                    .map_err(Error::Platform)?;
                screen.set_navigation_bar(navigation_bar);
                Mount::Stack(NavigationStack::new(native, screen))
            }
            RootComponent::Tab(_) => {
                return Err(Self::log_unsupported(UnsupportedRoot(RootKind::Tab)).into())
            }
        };
        Ok(Attachment::new(mount))
    }

    fn attach(
        &mut self,
        component: Component<M>,
        root: RootComponent<M>,
    ) -> ManagerResult<AttachmentHandle<M>, M, P> {
        let attachment = Self::build_attachment(&mut self.platform, &self.options, component, root)?;
        self.platform
            .set_root(attachment.native())
            .map_err(Error::Platform)?;
        attachment.mailbox().forward(&self.mailbox);

        if !self.modals.is_empty() {
            debug!("dropping {} modals with the old root", self.modals.len());
            self.modals.clear();
        }

        let handle = AttachmentHandle {
            id: attachment.id(),
            mailbox: attachment.mailbox().clone(),
        };
        debug!("attached {:?} as the root ({})", attachment.kind(), handle.id);
        self.root = Some(attachment);
        self.version += 1;
        Ok(handle)
    }

    fn push(
        &mut self,
        component: Component<M>,
        navigation_bar: NavigationBar<M>,
    ) -> ManagerResult<AttachmentHandle<M>, M, P> {
        let animated = self.options.animate_push;

        if let Some(attachment) = &mut self.root {
            let id = attachment.id();
            if let Mount::Stack(stack) = attachment.mount_mut() {
                let mut screen = Self::build_screen(&mut self.platform, &self.options, component)?;
                let (native, _) = stack.native_and_top_mut();
                self.platform
                    .push_screen(native, screen.native_mut(), &navigation_bar, animated)
                    .map_err(Error::Platform)?;
                screen.set_navigation_bar(navigation_bar);
                debug!("pushed {} onto {}", screen.id(), id);
                stack.push(screen);
                self.version += 1;
                return Ok(AttachmentHandle {
                    id,
                    mailbox: stack.mailbox().clone(),
                });
            }
        }

        // only reachable if no stack is attached
        self.attach(component, RootComponent::Stack(navigation_bar))
    }

    fn present_modally(
        &mut self,
        component: Component<M>,
        root: RootComponent<M>,
    ) -> ManagerResult<AttachmentHandle<M>, M, P> {
        let animated = self.options.animate_presentation;
        let root_attachment = self.root.as_ref();
        let presenter = match self.modals.last().or(root_attachment) {
            Some(presenter) => presenter,
            None => return self.attach(component, root),
        };

        let attachment = Self::build_attachment(&mut self.platform, &self.options, component, root)?;
        self.platform
            .present_modally(presenter.native(), attachment.native(), animated)
            .map_err(Error::Platform)?;
        attachment.mailbox().forward(&self.mailbox);

        let handle = AttachmentHandle {
            id: attachment.id(),
            mailbox: attachment.mailbox().clone(),
        };
        debug!("presented {:?} modally ({})", attachment.kind(), handle.id);
        self.modals.push(attachment);
        self.version += 1;
        Ok(handle)
    }

    fn update_top(
        &mut self,
        component: Component<M>,
        navigation_bar: Option<NavigationBar<M>>,
    ) -> ManagerResult<Mailbox<M>, M, P> {
        let debug_mode = self.options.debug_mode;
        let mount = match self.root.as_mut().map(Attachment::mount_mut) {
            Some(mount) => mount,
            None => {
                let root = match navigation_bar {
                    Some(navigation_bar) => RootComponent::Stack(navigation_bar),
                    None => RootComponent::Simple,
                };
                return Ok(self.attach(component, root)?.mailbox);
            }
        };

        let screen = match mount {
            Mount::Single(screen) => {
                self.platform
                    .update_screen(screen.native_mut(), &component, debug_mode)
                    .map_err(Error::Platform)?;
                screen.set_component(component);
                screen
            }
            Mount::Stack(stack) => {
                let (native, screen) = stack.native_and_top_mut();
                self.platform
                    .update_screen(screen.native_mut(), &component, debug_mode)
                    .map_err(Error::Platform)?;
                // the native screen already shows the new tree
                screen.set_component(component);
                if let Some(navigation_bar) = navigation_bar {
                    self.platform
                        .render_navigation_bar(native, screen.native_mut(), &navigation_bar)
                        .map_err(Error::Platform)?;
                    screen.set_navigation_bar(navigation_bar);
                }
                screen
            }
        };

        debug!("updated {}", screen.id());
        self.version += 1;
        Ok(screen.mailbox().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessError, HeadlessPlatform, Mounted, Operation};
    use roost_core::components::button::button;
    use roost_core::components::label::label;
    use roost_core::layout::Layout;
    use roost_core::navigation::{navigation_bar, NavigationBarTitle, TabBar};
    use roost_core::style::StyleSheet;
    use roost_core::{container, custom, touchable, Gesture};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Open,
        Close,
    }

    type Manager = ComponentManager<Msg, HeadlessPlatform<Msg>>;

    fn manager() -> Manager {
        ComponentManager::new(HeadlessPlatform::new())
    }

    fn stack(title: &str) -> RootComponent<Msg> {
        RootComponent::Stack(navigation_bar(NavigationBarTitle::text(title)))
    }

    fn top_text(manager: &Manager) -> Vec<String> {
        let screen = manager.root().expect("should be attached").top_screen().id();
        let rendered = manager.platform().screen(screen).expect("should be rendered");
        rendered.node().texts().into_iter().map(String::from).collect()
    }

    #[test]
    fn attaching_replaces_the_root() {
        let mut manager = manager();
        let first = manager
            .present(label("X"), RootComponent::Simple, false)
            .expect("should attach");
        let root = manager.root().expect("should be attached");
        assert_eq!(root.kind(), AttachmentKind::Single);
        assert_eq!(root.id(), first.id);
        assert_eq!(root.top_screen().component(), &label("X"));

        let second = manager
            .present(label("X2"), stack("Inbox"), false)
            .expect("should attach");
        assert_ne!(first.id, second.id, "a fresh attachment has a fresh id");
        match manager.root().map(Attachment::mount) {
            Some(Mount::Stack(stack)) => {
                assert_eq!(stack.len(), 1);
                assert_eq!(stack.top().component(), &label("X2"));
            }
            other => panic!("expected a stack, got {:?}", other),
        }
        assert_eq!(manager.version(), 2);
    }

    #[test]
    fn pushing_onto_a_stack() {
        let mut manager = manager();
        let attached = manager
            .present(label("X"), stack("Inbox"), false)
            .expect("should attach");
        let pushed = manager
            .present(label("Y"), stack("Message"), false)
            .expect("should push");
        assert_eq!(attached.id, pushed.id, "pushing keeps the stack");

        let (root_screen, top_screen) = match manager.root().map(Attachment::mount) {
            Some(Mount::Stack(stack)) => {
                assert_eq!(stack.len(), 2);
                assert_eq!(stack.top().component(), &label("Y"));
                assert_eq!(stack.root().component(), &label("X"), "root is unchanged");
                (stack.root().id(), stack.top().id())
            }
            other => panic!("expected a stack, got {:?}", other),
        };
        let title = manager
            .platform()
            .screen(top_screen)
            .and_then(|screen| screen.title().map(String::from));
        assert_eq!(title.as_deref(), Some("Message"));

        assert_eq!(manager.pop(false).expect("should pop"), Some(top_screen));
        assert_eq!(
            manager.root().map(|root| root.top_screen().id()),
            Some(root_screen),
            "the first screen is reachable again by popping"
        );
        assert_eq!(
            manager.pop(false).expect("should not fail"),
            None,
            "the root screen is never popped"
        );
    }

    #[test]
    fn presenting_modally() {
        let mut manager = manager();
        let attached = manager
            .present(label("X"), RootComponent::Simple, false)
            .expect("should attach");
        let presented = manager
            .present(label("Modal"), stack("Compose"), true)
            .expect("should present");

        assert_ne!(attached.id, presented.id);
        assert_eq!(
            manager.root().map(|root| root.top_screen().component().clone()),
            Some(label("X")),
            "the current attachment is unchanged"
        );
        assert_eq!(manager.modals().len(), 1);
        assert_eq!(manager.modals()[0].kind(), AttachmentKind::Stack);
        assert_eq!(manager.platform().presented().len(), 1);

        assert_eq!(manager.dismiss(true).expect("should dismiss"), Some(presented.id));
        assert!(manager.modals().is_empty());
        assert_eq!(manager.dismiss(true).expect("should not fail"), None);
    }

    #[test]
    fn modals_are_dropped_with_the_root() {
        let mut manager = manager();
        manager
            .present(label("X"), RootComponent::Simple, false)
            .expect("should attach");
        manager
            .present(label("Modal"), RootComponent::Simple, true)
            .expect("should present");
        manager
            .present(label("Z"), stack("New"), false)
            .expect("should attach");

        assert!(manager.modals().is_empty());
        assert!(manager.platform().presented().is_empty());
    }

    #[test]
    fn modal_with_nothing_attached_attaches() {
        let mut manager = manager();
        manager
            .present(label("X"), RootComponent::Simple, true)
            .expect("should attach");
        assert!(manager.root().is_some());
        assert!(manager.modals().is_empty());
    }

    #[test]
    fn rendering_in_place() {
        let mut manager = manager();
        manager
            .present(label("X"), stack("Inbox"), false)
            .expect("should attach");
        let stack_id = manager.root().map(Attachment::id);
        manager.platform_mut().take_journal();

        manager.render(label("X2")).expect("should render");
        assert_eq!(top_text(&manager), vec!["X2"]);
        assert_eq!(manager.root().map(Attachment::id), stack_id, "still the same stack");
        let journal = manager.platform_mut().take_journal();
        assert_eq!(journal.len(), 1, "a bare render only updates the screen");
        assert!(matches!(journal[0], Operation::UpdateScreen(_)));

        manager
            .render_with_root(label("X3"), stack("Renamed"))
            .expect("should render");
        let journal = manager.platform_mut().take_journal();
        assert!(matches!(journal[0], Operation::UpdateScreen(_)));
        assert!(matches!(journal[1], Operation::RenderNavigationBar { .. }));
        assert_eq!(journal.len(), 2, "rendering in place creates nothing");

        let screen = manager.root().map(|root| root.top_screen());
        assert_eq!(
            screen.and_then(|screen| screen.navigation_bar()),
            Some(&navigation_bar(NavigationBarTitle::text("Renamed")))
        );

        manager
            .render_with_root(label("Single"), RootComponent::Simple)
            .expect("should attach");
        assert_eq!(manager.root().map(Attachment::kind), Some(AttachmentKind::Single));
    }

    #[test]
    fn render_without_a_root_attaches_a_single_screen() {
        let mut manager = manager();
        let mailbox = manager.render(label("X")).expect("should attach");
        let root = manager.root().expect("should be attached");
        assert_eq!(root.kind(), AttachmentKind::Single);
        assert!(mailbox.same_mailbox(root.mailbox()));
    }

    #[test]
    fn tab_roots_are_refused_without_side_effects() {
        let mut manager = manager();
        manager
            .present(label("X"), RootComponent::Simple, false)
            .expect("should attach");
        manager.platform_mut().take_journal();

        let tab = RootComponent::Tab(TabBar {
            items: Vec::new(),
            style: StyleSheet::default(),
        });
        let result = manager.present(label("Y"), tab.clone(), false);
        assert!(matches!(result, Err(Error::UnsupportedRoot(UnsupportedRoot(RootKind::Tab)))));
        let result = manager.render_with_root(label("Y"), tab);
        assert!(matches!(result, Err(Error::UnsupportedRoot(_))));

        assert!(manager.platform().journal().is_empty(), "nothing native happened");
        assert_eq!(manager.version(), 1);
    }

    #[test]
    fn unregistered_custom_components_are_refused() {
        let mut manager = manager();
        let tree = container(vec![custom("chart", Layout::default())]);

        let result = manager.present(tree.clone(), RootComponent::Simple, false);
        assert!(matches!(
            result,
            Err(Error::Component(roost_core::Error::UnregisteredCustomComponent(_)))
        ));
        assert!(manager.root().is_none());
        assert!(manager.platform().journal().is_empty());

        manager.platform_mut().register_custom_component("chart");
        manager
            .present(tree, RootComponent::Simple, false)
            .expect("should attach once registered");
        assert_eq!(top_text(&manager), vec!["chart"]);
    }

    #[test]
    fn custom_components_are_validated_at_any_depth() {
        let mut manager = manager();
        let tree = touchable(Gesture::tap(Msg::Open), custom("chart", Layout::default()));

        let result = manager.present(tree, RootComponent::Simple, false);
        assert!(
            matches!(
                result,
                Err(Error::Component(roost_core::Error::UnregisteredCustomComponent(ref id)))
                    if id == "chart"
            ),
            "a custom component inside a touchable should be refused before rendering"
        );

        let titled = RootComponent::Stack(navigation_bar(NavigationBarTitle::Component(
            Box::new(custom("logo", Layout::default())),
        )));
        let result = manager.render_with_root(label("X"), titled);
        assert!(matches!(result, Err(Error::Component(_))), "navigation bar titles are checked too");

        assert!(manager.root().is_none());
        assert!(manager.platform().journal().is_empty(), "nothing native happened");
        assert_eq!(manager.version(), 0);
    }

    #[test]
    fn dismissed_and_replaced_screens_are_released() {
        let mut manager = manager();
        manager
            .present(button("Open", Msg::Open), RootComponent::Simple, false)
            .expect("should attach");
        let first_root = manager.root().expect("should be attached").top_screen().id();
        manager
            .present(button("Close", Msg::Close), stack("Compose"), true)
            .expect("should present");
        let modal = manager.modals()[0].top_screen().id();
        assert!(manager.platform().tap(modal, &[]).expect("should tap"));

        manager.dismiss(false).expect("should dismiss");
        assert!(manager.platform().screen(modal).is_none(), "the dismissed screen is gone");
        assert_eq!(
            manager.platform().tap(modal, &[]),
            Err(HeadlessError::UnknownScreen(modal)),
            "a dismissed screen can’t be tapped"
        );
        assert_eq!(manager.platform().screen_count(), 1);

        manager
            .present(label("X"), stack("Inbox"), false)
            .expect("should attach");
        assert!(manager.platform().screen(first_root).is_none(), "the replaced root is gone");
        manager
            .present(label("Y"), stack("Details"), false)
            .expect("should push");
        manager
            .present(label("Modal"), RootComponent::Simple, true)
            .expect("should present");
        assert_eq!(manager.platform().screen_count(), 3);

        manager.pop(false).expect("should pop");
        assert_eq!(manager.platform().screen_count(), 2, "the popped screen is gone");
        manager
            .present(label("Z"), RootComponent::Simple, false)
            .expect("should attach");
        assert_eq!(
            manager.platform().screen_count(),
            1,
            "the old stack and its modal are released with the root"
        );
    }

    #[test]
    fn failed_navigation_bar_render_keeps_the_updated_tree() {
        let mut manager = manager();
        manager
            .present(label("X"), stack("Inbox"), false)
            .expect("should attach");
        manager
            .platform_mut()
            .fail_after(1, HeadlessError::Simulated("navigation bar"));

        let result = manager.render_with_root(label("X2"), stack("Renamed"));
        assert!(matches!(result, Err(Error::Platform(HeadlessError::Simulated(_)))));

        let screen = manager.root().expect("should be attached").top_screen();
        assert_eq!(
            screen.component(),
            &label("X2"),
            "the screen should record the tree the platform already shows"
        );
        assert_eq!(top_text(&manager), vec!["X2"]);
        assert_eq!(
            screen.navigation_bar(),
            Some(&navigation_bar(NavigationBarTitle::text("Inbox"))),
            "the navigation bar wasn’t re-rendered"
        );
    }

    #[test]
    fn messages_reach_every_mailbox() {
        let mut manager = ComponentManager::with_options(
            HeadlessPlatform::new(),
            ManagerOptions::default().debug_mode(true).animate_push(false),
        );
        let all = manager.mailbox().subscribe();

        let attached = manager
            .present(button("Open", Msg::Open), stack("Inbox"), false)
            .expect("should attach");
        let from_stack = attached.mailbox.subscribe();
        manager
            .present(button("Close", Msg::Close), stack("Details"), false)
            .expect("should push");

        let screens: Vec<_> = match manager.root().map(Attachment::mount) {
            Some(Mount::Stack(stack)) => stack.screens().map(|screen| screen.id()).collect(),
            other => panic!("expected a stack, got {:?}", other),
        };
        assert!(manager.platform().tap(screens[0], &[]).expect("should tap"));
        assert!(manager.platform().tap(screens[1], &[]).expect("should tap"));

        assert_eq!(all.try_iter().collect::<Vec<_>>(), vec![Msg::Open, Msg::Close]);
        assert_eq!(
            from_stack.try_iter().collect::<Vec<_>>(),
            vec![Msg::Open, Msg::Close]
        );

        let rendered = manager.platform().screen(screens[1]).expect("should be rendered");
        assert!(rendered.debug_mode(), "debug mode is passed to the platform");

        let stack = match manager.platform().root() {
            Some(Mounted::Stack(id)) => id,
            other => panic!("expected a stack, got {:?}", other),
        };
        let push = Operation::Push {
            stack,
            screen: screens[1],
            animated: false,
        };
        assert!(
            manager.platform().journal().contains(&push),
            "the push should honor the animation option"
        );
    }
}
