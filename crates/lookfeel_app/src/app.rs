//! Adaptive application shell
//!
//! Frame ordering guarantee: input routed during frame N (overlay dismissals
//! included) and selection changes observed during frame N are reflected in
//! frame N's render passes — input first, then the controller tick, then
//! rendering.

use lookfeel_core::{
    ConfigError, DesignLanguage, InputEvent, LookAndFeelSelection, Visual,
};
use lookfeel_components::Adaptive;
use lookfeel_overlay::OverlayManager;
use lookfeel_theme::{LanguageRegistry, LookAndFeel};
use lookfeel_transition::{FrameClock, SwitchState, TransitionConfig, TransitionController};

use crate::error::AppError;

/// One composited render pass of the frame.
#[derive(Clone, Debug)]
pub struct ComposedPass {
    pub selection: LookAndFeelSelection,
    pub opacity: f32,
    pub accepts_input: bool,
    pub visual: Visual,
}

/// Everything one frame produced.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub frame: u64,
    pub passes: Vec<ComposedPass>,
    pub transitioning: bool,
}

impl FrameOutput {
    /// The pass currently receiving input.
    pub fn input_pass(&self) -> Option<&ComposedPass> {
        self.passes.iter().find(|p| p.accepts_input)
    }
}

/// The host shell: registry, ambient context, controller, overlays, clock.
pub struct AdaptiveApp {
    registry: LanguageRegistry,
    lookfeel: LookAndFeel,
    controller: TransitionController,
    overlays: OverlayManager,
    clock: FrameClock,
}

impl AdaptiveApp {
    /// Build the shell with the built-in bundles.
    ///
    /// Registry completeness is verified here, so a misconfigured bundle
    /// fails at startup rather than mid-render.
    pub fn new(initial: LookAndFeelSelection) -> Result<Self, ConfigError> {
        Self::with_transition_config(initial, TransitionConfig::default())
    }

    pub fn with_transition_config(
        initial: LookAndFeelSelection,
        config: TransitionConfig,
    ) -> Result<Self, ConfigError> {
        let registry = LanguageRegistry::with_builtin()?;
        registry.verify_complete()?;
        tracing::debug!(language = %initial.language, dark = initial.is_dark(), "adaptive app initialized");
        Ok(Self {
            registry,
            lookfeel: LookAndFeel::new(),
            controller: TransitionController::with_config(initial, config),
            overlays: OverlayManager::new(),
            clock: FrameClock::at_fps(60.0),
        })
    }

    /// The host's only mutation entry point, invoked from toggle callbacks.
    pub fn set_selection(&mut self, language: DesignLanguage, dark: bool) {
        self.controller
            .set_selection(LookAndFeelSelection::with_dark(language, dark));
    }

    /// The authoritative selection (the incoming target mid-transition).
    pub fn selection(&self) -> LookAndFeelSelection {
        self.controller.current()
    }

    pub fn switch_state(&self) -> SwitchState {
        self.controller.state()
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn overlays(&self) -> &OverlayManager {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> &mut OverlayManager {
        &mut self.overlays
    }

    /// Run one frame.
    ///
    /// `build` constructs the semantic tree from host state; it runs once
    /// per live pass, and the same host state feeds both passes of a
    /// transition frame, so logical state survives the swap unchanged.
    pub fn frame<F>(&mut self, events: &[InputEvent], build: F) -> Result<FrameOutput, AppError>
    where
        F: Fn(&OverlayManager) -> Adaptive,
    {
        for event in events {
            if let InputEvent::PointerDown { x, y } = *event {
                let outcome = self.overlays.pointer_down(x, y);
                tracing::trace!(?event, ?outcome, "pointer routed");
            }
        }

        let tick = self.clock.advance();
        self.controller.tick(tick.dt_ms);

        let mut passes = Vec::with_capacity(2);
        for pass in self.controller.render_passes() {
            let tree = build(&self.overlays);
            let visual = self
                .lookfeel
                .provide(&self.registry, pass.selection, |lf| tree.render(lf))??;
            passes.push(ComposedPass {
                selection: pass.selection,
                opacity: pass.opacity,
                accepts_input: pass.accepts_input,
                visual,
            });
        }

        Ok(FrameOutput {
            frame: tick.frame,
            passes,
            transitioning: self.controller.is_transitioning(),
        })
    }

    /// Run frames with no input until the controller settles.
    pub fn run_until_stable<F>(
        &mut self,
        max_frames: usize,
        build: F,
    ) -> Result<FrameOutput, AppError>
    where
        F: Fn(&OverlayManager) -> Adaptive,
    {
        let mut output = self.frame(&[], &build)?;
        for _ in 0..max_frames {
            if !output.transitioning {
                break;
            }
            output = self.frame(&[], &build)?;
        }
        Ok(output)
    }
}
