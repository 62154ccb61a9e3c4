//! Header Component
//!
//! Navigation header with a logo region, a horizontal menu for wide windows
//! and a collapsible panel for compact ones.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Pixels,
    Render, SharedString, StatefulInteractiveElement, StyleRefinement, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{Icon, IconName, h_flex, v_flex};

use super::menu_item::{Activation, ClickHandler, MenuItem};
use super::mobile_menu::MobileMenu;
use crate::constants::{
    COMPACT_BREAKPOINT, DEFAULT_LOGO_HREF, DISABLED_OPACITY, HEADER_HEIGHT, TOUCH_TARGET_HEIGHT,
};
use crate::helpers::{LinkTarget, StyleLayers, refinement};
use crate::theme::colors::NavColors;
use crate::theme::typography::Typography;

/// Builds the custom logo element on every render
pub type LogoBuilder = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

/// Which menu surfaces a header uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Pick from the window width
    #[default]
    Auto,
    /// Horizontal menu
    Wide,
    /// Toggle button and collapsible panel
    Compact,
}

impl HeaderLayout {
    pub fn is_compact(self, viewport_width: Pixels) -> bool {
        match self {
            HeaderLayout::Auto => viewport_width < px(COMPACT_BREAKPOINT),
            HeaderLayout::Wide => false,
            HeaderLayout::Compact => true,
        }
    }
}

/// How the logo reacts to a click
#[derive(Clone)]
pub enum LogoBehavior {
    Action(ClickHandler),
    Link(LinkTarget),
}

/// Visibility of the menu surfaces for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSurfaces {
    pub desktop_list: bool,
    pub toggle: bool,
    pub mobile_panel: bool,
}

impl MenuSurfaces {
    pub fn resolve(compact: bool, mobile_menu_button: bool, has_items: bool, menu: MobileMenu) -> Self {
        Self {
            desktop_list: !compact,
            toggle: compact && mobile_menu_button && has_items,
            mobile_panel: compact && mobile_menu_button && menu.is_open(),
        }
    }
}

/// Header configuration
///
/// Styles applied through [`Styled`] are layered last on the container, so
/// they override the header's own base and sticky styling.
#[derive(Clone)]
pub struct HeaderProps {
    logo: Option<LogoBuilder>,
    logo_text: Option<SharedString>,
    logo_href: SharedString,
    on_logo_click: Option<ClickHandler>,
    menu_items: Vec<MenuItem>,
    style: StyleRefinement,
    mobile_menu_button: bool,
    sticky: bool,
    layout: HeaderLayout,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            logo: None,
            logo_text: None,
            logo_href: DEFAULT_LOGO_HREF.into(),
            on_logo_click: None,
            menu_items: Vec::new(),
            style: StyleRefinement::default(),
            mobile_menu_button: true,
            sticky: false,
            layout: HeaderLayout::Auto,
        }
    }
}

impl HeaderProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom logo element
    pub fn logo<E: IntoElement>(mut self, builder: impl Fn(&mut Window, &mut App) -> E + 'static) -> Self {
        self.logo = Some(Rc::new(move |window: &mut Window, cx: &mut App| {
            builder(window, cx).into_any_element()
        }));
        self
    }

    /// Set the text shown after the logo
    pub fn logo_text(mut self, text: impl Into<SharedString>) -> Self {
        self.logo_text = Some(text.into());
        self
    }

    /// Set the logo link target
    pub fn logo_href(mut self, href: impl Into<SharedString>) -> Self {
        self.logo_href = href.into();
        self
    }

    /// Handle logo clicks instead of following the logo link
    pub fn on_logo_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_logo_click = Some(Rc::new(handler));
        self
    }

    /// Replace the menu items
    pub fn menu_items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.menu_items = items.into_iter().collect();
        self
    }

    /// Append a menu item
    pub fn menu_item(mut self, item: MenuItem) -> Self {
        self.menu_items.push(item);
        self
    }

    /// Show the compact menu toggle (default true)
    pub fn mobile_menu_button(mut self, show: bool) -> Self {
        self.mobile_menu_button = show;
        self
    }

    /// Keep the header pinned above the content that follows it (default false)
    ///
    /// The header stays in flow and never shrinks, so a scrolling sibling
    /// below it cannot push it out of view; it also occludes pointer events.
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Force a layout instead of deriving it from the window width
    pub fn layout(mut self, layout: HeaderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn logo_behavior(&self) -> LogoBehavior {
        match &self.on_logo_click {
            Some(handler) => LogoBehavior::Action(handler.clone()),
            None => LogoBehavior::Link(LinkTarget::parse(self.logo_href.clone())),
        }
    }

    /// Container style: base, then sticky, then caller refinements
    pub fn container_layers(&self) -> StyleLayers {
        StyleLayers::new(refinement(|d| {
            d.relative()
                .w_full()
                .bg(NavColors::header_bg())
                .border_b_1()
                .border_color(NavColors::header_border())
        }))
        .layer_if(self.sticky, || refinement(|d| d.flex_shrink_0()))
        .layer(self.style.clone())
    }
}

impl Styled for HeaderProps {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

/// Header view
pub struct Header {
    props: HeaderProps,
    mobile_menu: MobileMenu,
}

impl Header {
    pub fn new(props: HeaderProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            mobile_menu: MobileMenu::default(),
        }
    }

    pub fn props(&self) -> &HeaderProps {
        &self.props
    }

    /// Replace the configuration, keeping the menu state
    pub fn set_props(&mut self, props: HeaderProps, cx: &mut Context<Self>) {
        self.props = props;
        if self.props.menu_items.is_empty() {
            self.mobile_menu.close();
        }
        cx.notify();
    }

    pub fn mobile_menu(&self) -> MobileMenu {
        self.mobile_menu
    }

    pub fn toggle_mobile_menu(&mut self, cx: &mut Context<Self>) {
        let state = self.mobile_menu.toggle();
        tracing::debug!(?state, "Mobile menu toggled");
        cx.notify();
    }

    /// Update the menu state for an activation of item `ix`
    fn activation_for(&mut self, ix: usize) -> Activation {
        let Some(item) = self.props.menu_items.get(ix) else {
            return Activation::Ignored;
        };
        let activation = item.kind().activate(&mut self.mobile_menu);
        tracing::debug!(label = %item.label(), ?activation, "Menu item activated");
        activation
    }

    fn activate_item(&mut self, ix: usize, event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let was_open = self.mobile_menu.is_open();
        let activation = self.activation_for(ix);
        if was_open != self.mobile_menu.is_open() {
            cx.notify();
        }

        match activation {
            Activation::Navigate(target) => target.follow(window, cx),
            Activation::Invoke => {
                let handler = self.props.menu_items.get(ix).and_then(|item| item.handler().cloned());
                if let Some(handler) = handler {
                    // Run after this update so the handler may touch the header.
                    let event = event.clone();
                    window.defer(cx, move |window, cx| handler(&event, window, cx));
                }
            }
            Activation::Ignored => {
                tracing::trace!(ix, "Ignored activation");
            }
        }
    }

    fn render_logo(&self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let logo = self.props.logo.as_ref().map(|builder| builder(window, cx));

        let content = h_flex()
            .items_center()
            .gap_2()
            .children(logo)
            .when_some(self.props.logo_text.clone(), |this, text| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_XL))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(NavColors::text_primary())
                        .child(text),
                )
            });

        let wrapper = div()
            .id("header-logo")
            .flex_shrink_0()
            .cursor_pointer()
            .child(content);

        match self.props.logo_behavior() {
            LogoBehavior::Action(handler) => {
                wrapper.on_click(move |event: &ClickEvent, window, cx| handler(event, window, cx))
            }
            LogoBehavior::Link(target) => {
                wrapper.on_click(move |_event: &ClickEvent, window, cx| target.follow(window, cx))
            }
        }
    }

    fn render_menu_item(&self, ix: usize, item: &MenuItem, compact: bool, cx: &mut Context<Self>) -> AnyElement {
        let kind = item.kind();
        let surface = if compact { "mobile" } else { "desktop" };

        let (text_color, bg) = if item.is_disabled() {
            (NavColors::text_muted(), NavColors::transparent())
        } else if item.is_active() {
            (NavColors::nav_active_text(), NavColors::nav_active_bg())
        } else {
            (NavColors::text_secondary(), NavColors::transparent())
        };

        let entry = div()
            .id(SharedString::from(format!("{surface}-nav-item-{ix}")))
            .px_3()
            .rounded_md()
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(text_color)
            .bg(bg)
            .child(item.label().clone());

        let entry = if compact {
            entry
                .w_full()
                .min_h(px(TOUCH_TARGET_HEIGHT))
                .flex()
                .items_center()
                .text_size(px(Typography::TEXT_BASE))
        } else {
            entry.py_2().text_size(px(Typography::TEXT_SM))
        };

        #[cfg(test)]
        let entry = {
            let selector = format!("{surface}-nav-item-{ix}");
            entry.debug_selector(move || selector)
        };

        if !kind.is_interactive() {
            return entry
                .opacity(DISABLED_OPACITY)
                .cursor_not_allowed()
                .into_any_element();
        }

        entry
            .cursor_pointer()
            .hover(|s| s.bg(NavColors::nav_hover_bg()))
            .on_click(cx.listener(move |this, event: &ClickEvent, window, cx| {
                this.activate_item(ix, event, window, cx);
            }))
            .into_any_element()
    }

    fn render_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let icon = if self.mobile_menu.is_open() {
            IconName::Close
        } else {
            IconName::Menu
        };

        let toggle = div().id("mobile-menu-toggle");

        #[cfg(test)]
        let toggle = toggle.debug_selector(|| "mobile-menu-toggle".into());

        toggle
            .p_2()
            .rounded_md()
            .text_color(NavColors::text_secondary())
            .cursor_pointer()
            .hover(|s| s.bg(NavColors::nav_hover_bg()))
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.toggle_mobile_menu(cx);
            }))
            .child(Icon::new(icon).size_5())
    }
}

impl Render for Header {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let compact = self.props.layout.is_compact(window.viewport_size().width);
        let surfaces = MenuSurfaces::resolve(
            compact,
            self.props.mobile_menu_button,
            !self.props.menu_items.is_empty(),
            self.mobile_menu,
        );

        let logo = self.render_logo(window, cx);

        let mut desktop_items = Vec::new();
        if surfaces.desktop_list {
            for (ix, item) in self.props.menu_items.iter().enumerate() {
                desktop_items.push(self.render_menu_item(ix, item, false, cx));
            }
        }

        let mut mobile_items = Vec::new();
        if surfaces.mobile_panel {
            for (ix, item) in self.props.menu_items.iter().enumerate() {
                mobile_items.push(self.render_menu_item(ix, item, true, cx));
            }
        }

        let toggle = surfaces.toggle.then(|| self.render_toggle(cx));

        let bar = h_flex()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .px_4()
            .items_center()
            .justify_between()
            .child(logo)
            .when(surfaces.desktop_list, |this| {
                this.child(h_flex().items_center().gap_1().children(desktop_items))
            })
            .children(toggle);

        self.props
            .container_layers()
            .apply(v_flex())
            .when(self.props.sticky, |this| this.occlude())
            .child(bar)
            .when(surfaces.mobile_panel, |this| {
                this.child(
                    v_flex()
                        .w_full()
                        .px_2()
                        .pb_3()
                        .gap_1()
                        .bg(NavColors::panel_bg())
                        .border_t_1()
                        .border_color(NavColors::header_border())
                        .children(mobile_items),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use gpui::{Entity, Modifiers, Position, TestAppContext, VisualTestContext};

    use super::*;
    use crate::components::layout::menu_item::MenuItemKind;
    use crate::helpers::Navigate;

    fn header(props: HeaderProps) -> Header {
        Header {
            props,
            mobile_menu: MobileMenu::default(),
        }
    }

    #[test]
    fn test_defaults() {
        let props = HeaderProps::new();
        assert!(props.items().is_empty());
        assert!(props.mobile_menu_button);
        assert!(!props.sticky);
        assert!(matches!(
            props.logo_behavior(),
            LogoBehavior::Link(LinkTarget::Route(href)) if href == SharedString::from("/")
        ));
    }

    #[test]
    fn test_logo_handler_beats_href() {
        let props = HeaderProps::new()
            .logo_href("/home")
            .on_logo_click(|_, _, _| {});
        assert!(matches!(props.logo_behavior(), LogoBehavior::Action(_)));
    }

    #[test]
    fn test_explicit_logo_href() {
        let props = HeaderProps::new().logo_href("https://acme.test");
        assert!(matches!(
            props.logo_behavior(),
            LogoBehavior::Link(target) if target.is_external()
        ));
    }

    #[test]
    fn test_scenario_home_and_disabled_logout() {
        let mut header = header(
            HeaderProps::new().logo_text("Acme").menu_items([
                MenuItem::new("Home").href("/"),
                MenuItem::new("Logout").on_click(|_, _, _| {}).disabled(true),
            ]),
        );

        let items = header.props().items();
        assert!(matches!(items[0].kind(), MenuItemKind::Link(_)));
        assert_eq!(items[1].kind(), MenuItemKind::Disabled);

        header.mobile_menu.toggle();
        assert_eq!(header.activation_for(1), Activation::Ignored);
        assert!(header.mobile_menu().is_open());

        assert!(matches!(header.activation_for(0), Activation::Navigate(_)));
        assert!(!header.mobile_menu().is_open());
    }

    #[test]
    fn test_out_of_range_activation_is_ignored() {
        let mut header = header(HeaderProps::new());
        header.mobile_menu.toggle();
        assert_eq!(header.activation_for(3), Activation::Ignored);
        assert!(header.mobile_menu().is_open());
    }

    #[test]
    fn test_duplicate_labels_resolve_by_position() {
        let mut header = header(HeaderProps::new().menu_items([
            MenuItem::new("Docs").href("/v1/docs"),
            MenuItem::new("Docs").href("/v2/docs"),
        ]));

        assert_eq!(
            header.activation_for(1),
            Activation::Navigate(LinkTarget::Route("/v2/docs".into()))
        );
    }

    #[test]
    fn test_surfaces_wide() {
        let surfaces = MenuSurfaces::resolve(false, true, true, MobileMenu::Open);
        assert!(surfaces.desktop_list);
        assert!(!surfaces.toggle);
        assert!(!surfaces.mobile_panel);
    }

    #[test]
    fn test_surfaces_compact() {
        let closed = MenuSurfaces::resolve(true, true, true, MobileMenu::Closed);
        assert!(closed.toggle);
        assert!(!closed.mobile_panel);

        let open = MenuSurfaces::resolve(true, true, true, MobileMenu::Open);
        assert!(open.mobile_panel);
    }

    #[test]
    fn test_toggle_needs_items_and_flag() {
        assert!(!MenuSurfaces::resolve(true, true, false, MobileMenu::Closed).toggle);
        assert!(!MenuSurfaces::resolve(true, false, true, MobileMenu::Closed).toggle);
        assert!(!MenuSurfaces::resolve(true, false, true, MobileMenu::Open).mobile_panel);
    }

    #[test]
    fn test_layout_breakpoint() {
        assert!(HeaderLayout::Auto.is_compact(px(500.0)));
        assert!(!HeaderLayout::Auto.is_compact(px(1024.0)));
        assert!(HeaderLayout::Compact.is_compact(px(1024.0)));
        assert!(!HeaderLayout::Wide.is_compact(px(320.0)));
    }

    #[test]
    fn test_container_layers_order() {
        let plain = HeaderProps::new().container_layers();
        assert_eq!(plain.len(), 2);
        assert_eq!(plain.compose().position, Some(Position::Relative));

        let sticky = HeaderProps::new().sticky(true).container_layers();
        assert_eq!(sticky.len(), 3);
        let composed = sticky.compose();
        assert_eq!(composed.position, Some(Position::Relative));
        assert_eq!(composed.flex_shrink, Some(0.0));

        let overridden = HeaderProps::new().sticky(true).flex_shrink().container_layers();
        assert_eq!(overridden.compose().flex_shrink, Some(1.0));
    }

    #[test]
    fn test_sticky_stays_in_flow() {
        let layers = HeaderProps::new().sticky(true).absolute().container_layers();
        assert_eq!(layers.compose().position, Some(Position::Absolute));

        for sticky in [false, true] {
            let composed = HeaderProps::new().sticky(sticky).container_layers().compose();
            assert_ne!(composed.position, Some(Position::Absolute));
        }
    }

    fn counted_props(layout: HeaderLayout, calls: &Rc<Cell<usize>>, logout_disabled: bool) -> HeaderProps {
        let calls = calls.clone();
        HeaderProps::new().logo_text("Acme").layout(layout).menu_items([
            MenuItem::new("Home").href("/"),
            MenuItem::new("Logout")
                .on_click(move |_, _, _| calls.set(calls.get() + 1))
                .disabled(logout_disabled),
        ])
    }

    fn open_header(cx: &mut TestAppContext, props: HeaderProps) -> (Entity<Header>, &mut VisualTestContext) {
        cx.update(|cx| gpui_component::init(cx));
        let (header, cx) = cx.add_window_view(move |_window, cx| Header::new(props, cx));
        cx.run_until_parked();
        (header, cx)
    }

    fn click(cx: &mut VisualTestContext, selector: &'static str) {
        let bounds = cx
            .debug_bounds(selector)
            .unwrap_or_else(|| panic!("{selector} is not painted"));
        cx.simulate_click(bounds.center(), Modifiers::none());
        cx.run_until_parked();
    }

    fn menu_state(header: &Entity<Header>, cx: &mut VisualTestContext) -> MobileMenu {
        header.read_with(cx, |header, _| header.mobile_menu())
    }

    #[gpui::test]
    fn test_desktop_action_fires_once(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (header, cx) = open_header(cx, counted_props(HeaderLayout::Wide, &calls, false));

        assert!(cx.debug_bounds("mobile-menu-toggle").is_none());
        click(cx, "desktop-nav-item-1");

        assert_eq!(calls.get(), 1);
        assert_eq!(menu_state(&header, cx), MobileMenu::Closed);
    }

    #[gpui::test]
    fn test_mobile_action_fires_once_and_closes(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (header, cx) = open_header(cx, counted_props(HeaderLayout::Compact, &calls, false));

        click(cx, "mobile-menu-toggle");
        assert_eq!(menu_state(&header, cx), MobileMenu::Open);

        click(cx, "mobile-nav-item-1");
        assert_eq!(calls.get(), 1);
        assert_eq!(menu_state(&header, cx), MobileMenu::Closed);
        assert!(cx.debug_bounds("mobile-nav-item-1").is_none());
    }

    #[gpui::test]
    fn test_disabled_item_is_inert(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (header, cx) = open_header(cx, counted_props(HeaderLayout::Compact, &calls, true));

        click(cx, "mobile-menu-toggle");
        click(cx, "mobile-nav-item-1");

        assert_eq!(calls.get(), 0);
        assert_eq!(menu_state(&header, cx), MobileMenu::Open);
    }

    #[gpui::test]
    fn test_disabled_desktop_item_is_inert(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (_header, cx) = open_header(cx, counted_props(HeaderLayout::Wide, &calls, true));

        click(cx, "desktop-nav-item-1");
        assert_eq!(calls.get(), 0);
    }

    #[gpui::test]
    fn test_toggle_flips_once_per_click(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (header, cx) = open_header(cx, counted_props(HeaderLayout::Compact, &calls, false));

        assert_eq!(menu_state(&header, cx), MobileMenu::Closed);
        for expected in [MobileMenu::Open, MobileMenu::Closed, MobileMenu::Open] {
            click(cx, "mobile-menu-toggle");
            assert_eq!(menu_state(&header, cx), expected);
        }
        assert_eq!(calls.get(), 0);
    }

    #[gpui::test]
    fn test_route_link_dispatches_navigate(cx: &mut TestAppContext) {
        let calls = Rc::new(Cell::new(0));
        let (header, cx) = open_header(cx, counted_props(HeaderLayout::Compact, &calls, false));

        let hrefs = Rc::new(RefCell::new(Vec::new()));
        let captured = hrefs.clone();
        cx.update(|_window, cx| {
            cx.on_action(move |action: &Navigate, _cx| captured.borrow_mut().push(action.href.clone()));
        });

        click(cx, "mobile-menu-toggle");
        click(cx, "mobile-nav-item-0");

        assert_eq!(*hrefs.borrow(), vec!["/".to_string()]);
        assert_eq!(menu_state(&header, cx), MobileMenu::Closed);
        assert_eq!(calls.get(), 0);
    }
}
