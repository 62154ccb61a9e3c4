//! Gallery - Component Showcase
//!
//! A header built from the bundled menu config over a grid of every button
//! variant and size.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*, px,
};
use gpui_component::{Icon, h_flex, v_flex};

use crate::assets::NavIconName;
use crate::components::{Button, ButtonSize, ButtonVariant, Header, HeaderProps};
use crate::config::NavConfig;
use crate::theme::colors::NavColors;
use crate::theme::typography::Typography;

/// Menu shown in the gallery header
const GALLERY_MENU: &str = include_str!("../../assets/gallery.toml");

const VARIANTS: [(ButtonVariant, &str); 4] = [
    (ButtonVariant::Primary, "Primary"),
    (ButtonVariant::Secondary, "Secondary"),
    (ButtonVariant::Outline, "Outline"),
    (ButtonVariant::Ghost, "Ghost"),
];

const SIZES: [(ButtonSize, &str); 3] = [
    (ButtonSize::Small, "sm"),
    (ButtonSize::Medium, "md"),
    (ButtonSize::Large, "lg"),
];

/// Gallery view
pub struct Gallery {
    header: Entity<Header>,
    clicks: usize,
    saving: bool,
}

impl Gallery {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let props = match NavConfig::from_toml_str(GALLERY_MENU) {
            Ok(config) => config.into_props(),
            Err(err) => {
                tracing::warn!(%err, "Gallery menu config is invalid, using a bare header");
                HeaderProps::new().logo_text("navkit")
            }
        };
        let props = props.logo(|_window, _cx| Icon::from(NavIconName::Logo).size_6());

        let header = cx.new(|cx| Header::new(props, cx));

        Self {
            header,
            clicks: 0,
            saving: false,
        }
    }

    fn render_section(title: &'static str) -> impl IntoElement {
        div()
            .text_size(px(Typography::TEXT_LG))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(NavColors::text_primary())
            .child(title)
    }

    fn render_variant_row(
        &self,
        variant: ButtonVariant,
        name: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let mut row = h_flex().items_center().gap_3().child(
            div()
                .w(px(96.0))
                .text_size(px(Typography::TEXT_SM))
                .text_color(NavColors::text_secondary())
                .child(name),
        );

        for (size, size_name) in SIZES {
            row = row.child(
                Button::new(
                    SharedString::from(format!("button-{name}-{size_name}")),
                    format!("{name} {size_name}"),
                )
                .variant(variant)
                .size(size)
                .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                    this.clicks += 1;
                    tracing::info!(variant = name, size = size_name, clicks = this.clicks, "Button clicked");
                    cx.notify();
                })),
            );
        }

        row
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut variants = v_flex().gap_3();
        for (variant, name) in VARIANTS {
            variants = variants.child(self.render_variant_row(variant, name, cx));
        }

        let saving = self.saving;
        let states = h_flex()
            .items_center()
            .gap_3()
            .child(
                Button::primary("toggle-saving", if saving { "Stop" } else { "Start saving" })
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.saving = !this.saving;
                        cx.notify();
                    })),
            )
            .child(
                Button::primary("save", "Save")
                    .loading(saving)
                    .on_click(|_event, _window, _cx| tracing::info!("Save clicked")),
            )
            .child(
                Button::outline("disabled", "Disabled")
                    .disabled(true)
                    .on_click(|_event, _window, _cx| tracing::warn!("Disabled button fired")),
            );

        v_flex()
            .size_full()
            .bg(NavColors::page_bg())
            .child(self.header.clone())
            .child(
                v_flex()
                    .p_6()
                    .gap_6()
                    .child(Self::render_section("Variants and sizes"))
                    .child(variants)
                    .child(Self::render_section("States"))
                    .child(states)
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(NavColors::text_secondary())
                            .child(format!("Clicks: {}", self.clicks)),
                    ),
            )
    }
}
