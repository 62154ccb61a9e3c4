//! Button Component

use gpui::{
    AnyElement, App, ClickEvent, Div, ElementId, InteractiveElement, Interactivity, IntoElement,
    ParentElement, Pixels, Refineable, RenderOnce, Rgba, SharedString, Stateful,
    StatefulInteractiveElement, StyleRefinement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::constants::DISABLED_OPACITY;
use crate::theme::colors::NavColors;
use crate::theme::typography::Typography;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Filled neutral button
    Secondary,
    /// Transparent button with a border
    Outline,
    /// Transparent button without a border
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

/// Resolved visual treatment of a button
///
/// Colors come from the variant alone, metrics from the size alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub bg: Rgba,
    pub text: Rgba,
    pub hover_bg: Rgba,
    pub border: Option<Rgba>,
    pub padding_x: Pixels,
    pub padding_y: Pixels,
    pub font_size: Pixels,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let (bg, text, hover_bg, border) = match variant {
            ButtonVariant::Primary => (
                NavColors::button_primary_bg(),
                NavColors::text_light(),
                NavColors::button_primary_hover(),
                None,
            ),
            ButtonVariant::Secondary => (
                NavColors::button_secondary_bg(),
                NavColors::text_light(),
                NavColors::button_secondary_hover(),
                None,
            ),
            ButtonVariant::Outline => (
                NavColors::transparent(),
                NavColors::text_primary(),
                NavColors::button_subtle_hover(),
                Some(NavColors::button_outline_border()),
            ),
            ButtonVariant::Ghost => (
                NavColors::transparent(),
                NavColors::text_primary(),
                NavColors::button_subtle_hover(),
                None,
            ),
        };

        let (padding_x, padding_y, font_size) = match size {
            ButtonSize::Small => (px(12.0), px(6.0), px(Typography::TEXT_SM)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(Typography::TEXT_BASE)),
            ButtonSize::Large => (px(24.0), px(12.0), px(Typography::TEXT_LG)),
        };

        Self {
            bg,
            text,
            hover_bg,
            border,
            padding_x,
            padding_y,
            font_size,
        }
    }
}

/// A styled button component
///
/// Listeners and styles added by the caller through [`InteractiveElement`]
/// and [`Styled`] are kept and layered over the button's own. While the
/// button is disabled or loading, caller listeners are dropped along with the
/// click handler; caller styles still apply.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    base: Stateful<Div>,
    style: StyleRefinement,
    label: SharedString,
    children: Vec<AnyElement>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        let id = id.into();
        Self {
            base: div().id(id.clone()),
            id,
            style: StyleRefinement::default(),
            label: label.into(),
            children: Vec::new(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Whether a click would reach the handler
    pub fn is_actionable(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// The resolved visual treatment for this button
    pub fn resolved_style(&self) -> ButtonStyle {
        ButtonStyle::resolve(self.variant, self.size)
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl InteractiveElement for Button {
    fn interactivity(&mut self) -> &mut Interactivity {
        self.base.interactivity()
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let actionable = self.is_actionable();
        let style = self.resolved_style();

        let base = if actionable {
            self.base
        } else {
            div().id(self.id)
        };

        let mut element = base
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(style.padding_x)
            .py(style.padding_y)
            .bg(style.bg)
            .text_color(style.text)
            .text_size(style.font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .when_some(style.border, |this, border| this.border_1().border_color(border));

        if actionable {
            let hover_bg = style.hover_bg;
            element = element.cursor_pointer().hover(move |s| s.bg(hover_bg));
        } else {
            element = element.cursor_not_allowed().opacity(DISABLED_OPACITY);
        }

        element.style().refine(&self.style);

        let mut element = element
            .when(self.loading, |this| this.child(Icon::new(IconName::Loader).size_4()))
            .child(self.label)
            .children(self.children);

        if actionable {
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
