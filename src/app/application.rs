//! Application - Gallery Initialization and Window Management
//!
//! Opens a window showcasing the header and button components.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::gallery::Gallery;
use crate::assets::Assets;
use crate::constants::{GALLERY_WINDOW_HEIGHT, GALLERY_WINDOW_WIDTH};
use crate::helpers::{MenuCommand, Navigate};

actions!(navkit, [Quit]);

/// Create the gallery key bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new("secondary-q", Quit, None)]
}

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|action: &Navigate, _cx: &mut App| {
            tracing::info!(href = %action.href, "Navigate requested");
        });
        cx.on_action(|action: &MenuCommand, _cx: &mut App| {
            tracing::info!(command = %action.name, "Menu command");
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(GALLERY_WINDOW_WIDTH), px(GALLERY_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("navkit gallery")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Gallery::new(window, cx))
        }) {
            tracing::error!(%err, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
