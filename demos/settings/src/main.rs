//! Settings screen demo
//!
//! The sample call site for the adaptive core: a settings screen with two
//! appearance toggles, a clickable label, and a long-press context menu,
//! switchable between Cupertino and Material 3 (and light/dark) at runtime
//! with a crossfade. The script below stands in for a user session: flip
//! the Material toggle, open the menu with a long press, tap outside it.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lookfeel_app::{platform_name, AdaptiveApp, AppConfig, AppError, FrameOutput};
use lookfeel_components::{
    context_menu, icon_button, label, navigation_bar, navigation_item, scaffold, section, toggle,
    top_bar, Adaptive,
};
use lookfeel_core::{
    Bounds, DesignLanguage, IconGlyph, InputEvent, LookAndFeelSelection, TopBarKind,
};
use lookfeel_overlay::{OverlayId, OverlayManager};
use tracing::info;

/// Where the host lays out the context-menu anchor and its menu. A real
/// shell would take these from layout; the demo pins them.
const ANCHOR_BOUNDS: Bounds = Bounds {
    x: 16.0,
    y: 420.0,
    width: 288.0,
    height: 44.0,
};
const MENU_BOUNDS: Bounds = Bounds {
    x: 16.0,
    y: 470.0,
    width: 200.0,
    height: 96.0,
};

/// Logical screen state, owned by the host. It survives every look-and-feel
/// swap untouched because nothing in the core stores it.
struct HostState {
    material: AtomicBool,
    dark: AtomicBool,
    nav_selected: AtomicUsize,
}

/// Actions queued by component callbacks and applied by the frame loop,
/// keeping the shell the single mutator.
#[derive(Clone, Copy, Debug)]
enum HostAction {
    SetMaterial(bool),
    SetDark(bool),
    SelectNav(usize),
    OpenMenu,
}

type ActionQueue = Arc<Mutex<Vec<HostAction>>>;

fn push(actions: &ActionQueue, action: HostAction) {
    actions.lock().unwrap().push(action);
}

fn settings_screen(
    state: &Arc<HostState>,
    actions: &ActionQueue,
    overlays: &OverlayManager,
    menu: OverlayId,
) -> Adaptive {
    let material = state.material.load(Ordering::SeqCst);
    let dark = state.dark.load(Ordering::SeqCst);
    let nav_selected = state.nav_selected.load(Ordering::SeqCst);

    let bar = top_bar("Settings")
        .top_bar_kind(TopBarKind::Small)
        .child(icon_button(IconGlyph::ArrowBack));

    let nav = navigation_bar().children((0..3).map(|index| {
        let actions = Arc::clone(actions);
        navigation_item("Settings", IconGlyph::Settings, index == nav_selected)
            .on_activate(move || push(&actions, HostAction::SelectNav(index)))
    }));

    let appearance = section()
        .title("Appearance")
        .caption("Change appearance of the application")
        .child(
            toggle("Use Material UI", material).id("use-material").on_toggle({
                let actions = Arc::clone(actions);
                move |on| push(&actions, HostAction::SetMaterial(on))
            }),
        )
        .child(toggle("Dark mode", dark).id("dark-mode").on_toggle({
            let actions = Arc::clone(actions);
            move |on| push(&actions, HostAction::SetDark(on))
        }));

    let extras = section()
        .child(label("Clickable Label").id("clickable").on_activate(|| {}))
        .child(context_menu(
            overlays.is_visible(menu),
            label("Context menu (long press)")
                .id("menu-anchor")
                .on_long_press({
                    let actions = Arc::clone(actions);
                    move || push(&actions, HostAction::OpenMenu)
                }),
            [
                label("Option 1").icon(IconGlyph::Person),
                label("Option 2").icon(IconGlyph::Send),
            ],
        ));

    scaffold().child(bar).child(appearance).child(extras).child(nav)
}

fn describe(output: &FrameOutput) {
    for pass in &output.passes {
        info!(
            frame = output.frame,
            language = %pass.selection.language,
            dark = pass.selection.is_dark(),
            opacity = pass.opacity as f64,
            input = pass.accepts_input,
            nodes = pass.visual.count_nodes() as u64,
            "pass"
        );
    }
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(platform = platform_name(), "starting settings demo");

    // Startup selection from lookfeel.toml when present, Cupertino/light
    // otherwise. An unknown language id in the file is a hard error.
    let config_path = Path::new("lookfeel.toml");
    let initial = if config_path.exists() {
        AppConfig::load(config_path)?.selection()?
    } else {
        LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false)
    };

    let mut app = AdaptiveApp::new(initial)?;
    let menu = app.overlays_mut().register();

    let state = Arc::new(HostState {
        material: AtomicBool::new(initial.language == DesignLanguage::Material3),
        dark: AtomicBool::new(initial.is_dark()),
        nav_selected: AtomicUsize::new(0),
    });
    let actions: ActionQueue = Arc::new(Mutex::new(Vec::new()));

    let build = {
        let state = Arc::clone(&state);
        let actions = Arc::clone(&actions);
        move |overlays: &OverlayManager| settings_screen(&state, &actions, overlays, menu)
    };

    // Initial stable frame.
    describe(&app.frame(&[], &build)?);

    // Long press on the anchor opens the menu; the next frame shows it.
    let tree = build(app.overlays());
    if let Some(anchor) = tree.find("menu-anchor") {
        anchor.long_press();
    }
    drain_actions(&mut app, &state, &actions, menu);
    describe(&app.frame(&[], &build)?);

    // A tap outside the menu dismisses it before that frame renders.
    describe(&app.frame(&[InputEvent::PointerDown { x: 4.0, y: 4.0 }], &build)?);

    // Flip "Use Material UI": host state changes, then the selection, and
    // the controller crossfades to the Material bundle.
    let tree = build(app.overlays());
    if let Some(node) = tree.find("use-material") {
        node.set_toggled(true);
    }
    drain_actions(&mut app, &state, &actions, menu);

    describe(&app.frame(&[], &build)?);
    let settled = app.run_until_stable(1_000, &build)?;
    describe(&settled);

    info!(language = %app.selection().language, "settled");
    Ok(())
}

/// Apply queued component callbacks. This is the host mutation path: toggle
/// callbacks feed `set_selection`, gestures feed the overlay manager.
fn drain_actions(
    app: &mut AdaptiveApp,
    state: &Arc<HostState>,
    actions: &ActionQueue,
    menu: OverlayId,
) {
    let drained: Vec<HostAction> = actions.lock().unwrap().drain(..).collect();
    for action in drained {
        match action {
            HostAction::SetMaterial(on) => {
                state.material.store(on, Ordering::SeqCst);
                let language = if on {
                    DesignLanguage::Material3
                } else {
                    DesignLanguage::Cupertino
                };
                app.set_selection(language, state.dark.load(Ordering::SeqCst));
            }
            HostAction::SetDark(dark) => {
                state.dark.store(dark, Ordering::SeqCst);
                let language = if state.material.load(Ordering::SeqCst) {
                    DesignLanguage::Material3
                } else {
                    DesignLanguage::Cupertino
                };
                app.set_selection(language, dark);
            }
            HostAction::SelectNav(index) => {
                state.nav_selected.store(index, Ordering::SeqCst);
            }
            HostAction::OpenMenu => {
                if app.overlays_mut().open(menu, ANCHOR_BOUNDS) {
                    app.overlays_mut().set_content_bounds(menu, MENU_BOUNDS);
                }
            }
        }
    }
}
