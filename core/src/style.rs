//! Style sheets.
//!
//! Styles are inert payload as far as the component tree is concerned: they are carried through
//! `map` untouched and only interpreted by renderers.

use crate::color::Color;

pub const DEFAULT_FONT_SIZE: u32 = 17;

/// A font, identified by name. An empty name stands for the system font.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Font {
    pub name: String,
}

impl Font {
    pub fn named(name: impl Into<String>) -> Font {
        Font { name: name.into() }
    }

    pub fn is_system(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

impl Default for TextAlignment {
    fn default() -> Self {
        TextAlignment::Natural
    }
}

/// Style properties shared by every component kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStyleSheet {
    pub background_color: Color,
    pub corner_radius: Option<f64>,
    pub border_color: Color,
    pub border_width: f64,
    pub alpha: f64,
}

impl Default for BaseStyleSheet {
    fn default() -> Self {
        BaseStyleSheet {
            background_color: Color::CLEAR,
            corner_radius: None,
            border_color: Color::CLEAR,
            border_width: 0.,
            alpha: 1.,
        }
    }
}

/// A base style sheet plus the component-specific part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet<C> {
    pub base: BaseStyleSheet,
    pub component: C,
}

impl<C> StyleSheet<C> {
    pub fn new(component: C, base: BaseStyleSheet) -> StyleSheet<C> {
        StyleSheet { base, component }
    }
}

/// Style sheet for components without any style of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyStyleSheet;

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyleSheet {
    pub text_color: Color,
    pub text_font: Font,
    pub text_size: u32,
}

impl Default for ButtonStyleSheet {
    fn default() -> Self {
        ButtonStyleSheet {
            text_color: Color::BLACK,
            text_font: Font::default(),
            text_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyleSheet {
    pub text_color: Color,
    pub text_font: Font,
    pub text_size: u32,
    pub text_alignment: TextAlignment,
    pub adjust_to_fit_width: bool,
    /// Zero means unlimited.
    pub number_of_lines: u32,
    pub minimum_scale_factor: f64,
}

impl Default for LabelStyleSheet {
    fn default() -> Self {
        LabelStyleSheet {
            text_color: Color::BLACK,
            text_font: Font::default(),
            text_size: DEFAULT_FONT_SIZE,
            text_alignment: TextAlignment::default(),
            adjust_to_fit_width: false,
            number_of_lines: 0,
            minimum_scale_factor: 0.,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldStyleSheet {
    pub text_color: Color,
    pub text_font: Font,
    pub text_size: u32,
    pub text_alignment: TextAlignment,
}

impl Default for TextFieldStyleSheet {
    fn default() -> Self {
        TextFieldStyleSheet {
            text_color: Color::BLACK,
            text_font: Font::default(),
            text_size: DEFAULT_FONT_SIZE,
            text_alignment: TextAlignment::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedStyleSheet {
    pub text_font: Font,
    pub text_size: u32,
    pub text_color: Color,
    pub border_color: Color,
}

impl Default for SegmentedStyleSheet {
    fn default() -> Self {
        SegmentedStyleSheet {
            text_font: Font::default(),
            text_size: DEFAULT_FONT_SIZE,
            text_color: Color::BLUE,
            border_color: Color::BLUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressContentType {
    Color(Color),
    Image(crate::components::image::Image),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStyleSheet {
    pub progress_style: ProgressContentType,
    pub track_style: ProgressContentType,
}

impl Default for ProgressStyleSheet {
    fn default() -> Self {
        ProgressStyleSheet {
            progress_style: ProgressContentType::Color(Color::BLUE),
            track_style: ProgressContentType::Color(Color::from_hex(0xc7c7cc)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStyleSheet {
    pub separator_color: Color,
}

impl Default for TableStyleSheet {
    fn default() -> Self {
        TableStyleSheet {
            separator_color: Color::CLEAR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarStyle {
    Default,
    LightContent,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        StatusBarStyle::Default
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBarStyleSheet {
    pub tint_color: Color,
    pub title_text_color: Color,
    pub title_text_font: Font,
    pub title_text_size: u32,
    pub is_translucent: bool,
    pub status_bar_style: StatusBarStyle,
    pub separator_hidden: bool,
}

impl Default for NavigationBarStyleSheet {
    fn default() -> Self {
        NavigationBarStyleSheet {
            tint_color: Color::BLUE,
            title_text_color: Color::BLACK,
            title_text_font: Font::default(),
            title_text_size: DEFAULT_FONT_SIZE,
            is_translucent: true,
            status_bar_style: StatusBarStyle::default(),
            separator_hidden: false,
        }
    }
}

macro_rules! style_sheet_configurators {
    ($($(#[$attr:meta])* $name:ident => $component:ty;)+) => {
        $(
            $(#[$attr])*
            pub fn $name<F>(configure: F) -> StyleSheet<$component>
            where
                F: FnOnce(&mut BaseStyleSheet, &mut $component),
            {
                let mut base = BaseStyleSheet::default();
                let mut component = <$component>::default();
                configure(&mut base, &mut component);
                StyleSheet::new(component, base)
            }
        )+
    };
}

style_sheet_configurators! {
    /// Configures a style sheet for components without their own style.
    style_sheet => EmptyStyleSheet;
    button_style_sheet => ButtonStyleSheet;
    label_style_sheet => LabelStyleSheet;
    text_field_style_sheet => TextFieldStyleSheet;
    segmented_style_sheet => SegmentedStyleSheet;
    progress_style_sheet => ProgressStyleSheet;
    table_style_sheet => TableStyleSheet;
    navigation_bar_style_sheet => NavigationBarStyleSheet;
}

#[test]
fn test_style_sheet_configurator() {
    let style = button_style_sheet(|base, button| {
        base.background_color = Color::RED;
        base.corner_radius = Some(4.);
        button.text_size = 12;
    });
    assert_eq!(style.base.background_color, Color::RED);
    assert_eq!(style.base.corner_radius, Some(4.));
    assert_eq!(style.component.text_size, 12);
    assert_eq!(
        style.component.text_color,
        ButtonStyleSheet::default().text_color,
        "unconfigured fields keep their defaults"
    );
}
