//! The native layer behind the component manager.

use crate::mailbox::Mailbox;
use crate::screen::ScreenId;
use core::fmt;
use roost_core::backend::CustomComponentRegistry;
use roost_core::navigation::NavigationBar;
use roost_core::Component;

/// A borrowed native handle of something that can be attached.
#[derive(Debug)]
pub enum Native<'a, S, R> {
    Screen(&'a R),
    Stack(&'a S),
}

/// Everything a platform needs to create a screen.
#[derive(Debug)]
pub struct ScreenRequest<'a, M> {
    pub id: ScreenId,
    pub component: &'a Component<M>,
    /// Messages fired by the rendered components must be dispatched here.
    pub mailbox: &'a Mailbox<M>,
    /// Outlines rendered components when set.
    pub debug_mode: bool,
}

/// Executes attachment decisions against native views.
///
/// The component manager calls these in a fixed order. It validates every tree against
/// [`custom_components`](Platform::custom_components) before calling anything else, so a
/// platform may treat an unregistered custom component during rendering as an internal error.
pub trait Platform<M> {
    /// A native screen.
    type ScreenRef;

    /// A native navigation stack.
    type StackRef;

    /// Error type.
    type Error: fmt::Debug;

    /// Custom components this platform can render.
    fn custom_components(&self) -> &dyn CustomComponentRegistry;

    /// Creates a native screen and renders the component into it.
    fn create_screen(
        &mut self,
        request: ScreenRequest<'_, M>,
    ) -> Result<Self::ScreenRef, Self::Error>;

    /// Replaces the contents of a screen.
    fn update_screen(
        &mut self,
        screen: &mut Self::ScreenRef,
        component: &Component<M>,
        debug_mode: bool,
    ) -> Result<(), Self::Error>;

    /// Creates a navigation stack with the given root screen.
    fn create_stack(
        &mut self,
        root: &mut Self::ScreenRef,
        navigation_bar: &NavigationBar<M>,
    ) -> Result<Self::StackRef, Self::Error>;

    /// Pushes a screen onto a stack.
    fn push_screen(
        &mut self,
        stack: &mut Self::StackRef,
        screen: &mut Self::ScreenRef,
        navigation_bar: &NavigationBar<M>,
        animated: bool,
    ) -> Result<(), Self::Error>;

    /// Pops the top screen off a stack.
    fn pop_screen(&mut self, stack: &mut Self::StackRef, animated: bool) -> Result<(), Self::Error>;

    /// Re-renders the navigation bar of a stack’s top screen.
    fn render_navigation_bar(
        &mut self,
        stack: &mut Self::StackRef,
        screen: &mut Self::ScreenRef,
        navigation_bar: &NavigationBar<M>,
    ) -> Result<(), Self::Error>;

    /// Makes the given screen or stack the window’s root, discarding anything presented on top
    /// of the previous root.
    fn set_root(
        &mut self,
        root: Native<'_, Self::StackRef, Self::ScreenRef>,
    ) -> Result<(), Self::Error>;

    /// Presents `presented` modally over `presenter`.
    fn present_modally(
        &mut self,
        presenter: Native<'_, Self::StackRef, Self::ScreenRef>,
        presented: Native<'_, Self::StackRef, Self::ScreenRef>,
        animated: bool,
    ) -> Result<(), Self::Error>;

    /// Dismisses a modally presented screen or stack.
    fn dismiss_modal(
        &mut self,
        presented: Native<'_, Self::StackRef, Self::ScreenRef>,
        animated: bool,
    ) -> Result<(), Self::Error>;
}
