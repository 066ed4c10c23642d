//! End-to-end switching scenario: a settings screen built once against the
//! facade, flipped from Cupertino to Material 3 at runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lookfeel_app::AdaptiveApp;
use lookfeel_components::{scaffold, section, toggle, Adaptive};
use lookfeel_core::{
    Bounds, DesignLanguage, InputEvent, LookAndFeelSelection, Primitive,
};
use lookfeel_overlay::OverlayManager;
use lookfeel_transition::SwitchState;

fn build_screen(material_on: &Arc<AtomicBool>) -> impl Fn(&OverlayManager) -> Adaptive {
    let material_on = Arc::clone(material_on);
    move |_overlays| {
        scaffold().child(
            section().title("Appearance").child(
                toggle("Use Material UI", material_on.load(Ordering::SeqCst)).id("use-material"),
            ),
        )
    }
}

#[test]
fn switching_scenario_cupertino_to_material() {
    let initial = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false);
    let mut app = AdaptiveApp::new(initial).unwrap();

    let material_on = Arc::new(AtomicBool::new(false));
    let build = build_screen(&material_on);

    // Stable Cupertino frame: one pass, toggle off, rendered by Cupertino.
    let output = app.frame(&[], &build).unwrap();
    assert_eq!(output.passes.len(), 1);
    let visual = &output.passes[0].visual;
    assert_eq!(visual.language, DesignLanguage::Cupertino);
    assert!(visual.find_text("Use Material UI").is_some());
    assert_eq!(
        visual.find_switch().map(|v| &v.primitive),
        Some(&Primitive::Switch { on: false })
    );

    // The user flips the toggle; the host mutates its state and selection.
    let tree = build(app.overlays());
    assert!(tree.find("use-material").is_some());
    material_on.store(true, Ordering::SeqCst);
    app.set_selection(DesignLanguage::Material3, false);

    match app.switch_state() {
        SwitchState::Transitioning { from, to, progress } => {
            assert_eq!(from.language, DesignLanguage::Cupertino);
            assert_eq!(to.language, DesignLanguage::Material3);
            assert_eq!(progress, 0.0);
        }
        other => panic!("expected transition, got {other:?}"),
    }

    // Mid-transition frames composite both trees; only the incoming one
    // receives input, and the toggle already reads true in both.
    let output = app.frame(&[], &build).unwrap();
    assert_eq!(output.passes.len(), 2);
    assert!(!output.passes[0].accepts_input);
    assert_eq!(output.passes[0].visual.language, DesignLanguage::Cupertino);
    assert_eq!(output.passes[1].visual.language, DesignLanguage::Material3);
    assert_eq!(
        output.input_pass().map(|p| p.selection.language),
        Some(DesignLanguage::Material3)
    );
    for pass in &output.passes {
        assert_eq!(
            pass.visual.find_switch().map(|v| &v.primitive),
            Some(&Primitive::Switch { on: true })
        );
    }

    // Run to completion: exactly one stable Material pass, toggle still true.
    let output = app.run_until_stable(1_000, &build).unwrap();
    assert!(!output.transitioning);
    assert_eq!(
        app.switch_state(),
        SwitchState::Stable(LookAndFeelSelection::with_dark(
            DesignLanguage::Material3,
            false
        ))
    );
    assert_eq!(output.passes.len(), 1);
    let visual = &output.passes[0].visual;
    assert_eq!(visual.language, DesignLanguage::Material3);
    assert_eq!(
        visual.find_switch().map(|v| &v.primitive),
        Some(&Primitive::Switch { on: true })
    );
}

#[test]
fn outside_interaction_dismisses_menu_before_render() {
    use lookfeel_components::{context_menu, label};

    let initial = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false);
    let mut app = AdaptiveApp::new(initial).unwrap();
    let menu = app.overlays_mut().register();

    let build = move |overlays: &OverlayManager| {
        scaffold().child(context_menu(
            overlays.is_visible(menu),
            label("Context menu (long press)").id("menu-anchor"),
            [label("Option 1"), label("Option 2")],
        ))
    };

    // Hidden: the menu items are absent and nothing is elevated.
    let output = app.frame(&[], &build).unwrap();
    assert!(output.passes[0].visual.find_text("Option 1").is_none());
    assert!(output.passes[0]
        .visual
        .find(&|v| v.style.elevation >= 10.0)
        .is_none());

    // Long press recognized by the host opens the menu.
    let anchor_bounds = Bounds::new(16.0, 200.0, 280.0, 44.0);
    assert!(app.overlays_mut().open(menu, anchor_bounds));
    app.overlays_mut()
        .set_content_bounds(menu, Bounds::new(16.0, 250.0, 180.0, 88.0));

    let output = app.frame(&[], &build).unwrap();
    let visual = &output.passes[0].visual;
    assert!(visual.find_text("Option 1").is_some());
    assert!(visual.find_text("Option 2").is_some());
    // Anchor emphasis is a pure function of visibility.
    assert!(visual.find(&|v| v.style.elevation == 10.0).is_some());

    // A tap outside the menu dismisses it in the same frame it renders.
    let output = app
        .frame(&[InputEvent::PointerDown { x: 4.0, y: 4.0 }], &build)
        .unwrap();
    assert!(!app.overlays().is_visible(menu));
    assert!(output.passes[0].visual.find_text("Option 1").is_none());
}
