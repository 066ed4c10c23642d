//! Switch/transition controller
//!
//! The state machine is `Stable(current)` or
//! `Transitioning { from, to, progress }`. A selection change moves
//! `Stable(A)` to `Transitioning(A, B, 0)`; progress advances monotonically
//! on the frame clock until it reaches 1, then the machine settles on
//! `Stable(B)` exactly once. Logical component state (toggle values, scroll
//! offsets) is owned by the host, not the controller, so it survives the
//! swap unchanged.

use lookfeel_core::LookAndFeelSelection;
use smallvec::{smallvec, SmallVec};

use crate::easing::Easing;

/// Controller state: settled on one selection, or crossfading between two.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwitchState {
    Stable(LookAndFeelSelection),
    Transitioning {
        from: LookAndFeelSelection,
        to: LookAndFeelSelection,
        progress: f32,
    },
}

/// Which tree receives input while a transition runs.
///
/// The outgoing tree is always input-disabled the moment a transition
/// starts, so nothing can act on stale design-language semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputPolicy {
    /// The incoming tree receives input from the first transition frame.
    #[default]
    IncomingImmediately,
    /// The incoming tree receives input once progress passes the threshold.
    AfterProgress(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    pub duration_ms: f32,
    pub easing: Easing,
    pub input_policy: InputPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250.0,
            easing: Easing::EaseInOut,
            input_policy: InputPolicy::default(),
        }
    }
}

/// One composited render pass of the semantic tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPass {
    pub selection: LookAndFeelSelection,
    pub opacity: f32,
    pub accepts_input: bool,
}

/// Observes selection changes and drives the crossfade.
#[derive(Debug)]
pub struct TransitionController {
    state: SwitchState,
    elapsed_ms: f32,
    config: TransitionConfig,
}

impl TransitionController {
    pub fn new(initial: LookAndFeelSelection) -> Self {
        Self::with_config(initial, TransitionConfig::default())
    }

    pub fn with_config(initial: LookAndFeelSelection, config: TransitionConfig) -> Self {
        Self {
            state: SwitchState::Stable(initial),
            elapsed_ms: 0.0,
            config,
        }
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, SwitchState::Transitioning { .. })
    }

    /// The authoritative selection: the incoming target while transitioning.
    pub fn current(&self) -> LookAndFeelSelection {
        match self.state {
            SwitchState::Stable(selection) => selection,
            SwitchState::Transitioning { to, .. } => to,
        }
    }

    /// Host entry point for selection changes.
    ///
    /// A change to the already-stable selection or the in-flight target is a
    /// no-op, so repeated identical calls run at most one transition. A
    /// change landing mid-flight retargets the active transition: the
    /// previously incoming selection becomes the outgoing one and progress
    /// restarts at 0. Transitions never stack.
    pub fn set_selection(&mut self, target: LookAndFeelSelection) {
        match self.state {
            SwitchState::Stable(current) if current == target => {
                tracing::trace!(?target, "selection unchanged");
            }
            SwitchState::Stable(current) => {
                tracing::debug!(from = %current.language, to = %target.language, "transition started");
                self.state = SwitchState::Transitioning {
                    from: current,
                    to: target,
                    progress: 0.0,
                };
                self.elapsed_ms = 0.0;
            }
            SwitchState::Transitioning { to, .. } if to == target => {
                tracing::trace!(?target, "already transitioning to target");
            }
            SwitchState::Transitioning { to, .. } => {
                tracing::debug!(from = %to.language, to = %target.language, "transition retargeted");
                self.state = SwitchState::Transitioning {
                    from: to,
                    to: target,
                    progress: 0.0,
                };
                self.elapsed_ms = 0.0;
            }
        }
    }

    /// Advance by one frame tick.
    ///
    /// Returns true while a transition is still running; the cooperative
    /// scheduler keeps re-invoking once per frame until it returns false.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let SwitchState::Transitioning { from, to, .. } = self.state else {
            return false;
        };

        self.elapsed_ms += dt_ms.max(0.0);
        let duration = self.config.duration_ms.max(f32::EPSILON);
        let progress = (self.elapsed_ms / duration).clamp(0.0, 1.0);

        if progress >= 1.0 {
            tracing::debug!(to = %to.language, "transition complete");
            self.state = SwitchState::Stable(to);
            false
        } else {
            self.state = SwitchState::Transitioning { from, to, progress };
            true
        }
    }

    /// The passes to composite this frame, in paint order (outgoing first).
    pub fn render_passes(&self) -> SmallVec<[RenderPass; 2]> {
        match self.state {
            SwitchState::Stable(selection) => smallvec![RenderPass {
                selection,
                opacity: 1.0,
                accepts_input: true,
            }],
            SwitchState::Transitioning { from, to, progress } => {
                let eased = self.config.easing.apply(progress);
                let incoming_input = match self.config.input_policy {
                    InputPolicy::IncomingImmediately => true,
                    InputPolicy::AfterProgress(threshold) => progress >= threshold,
                };
                smallvec![
                    RenderPass {
                        selection: from,
                        opacity: 1.0 - eased,
                        accepts_input: false,
                    },
                    RenderPass {
                        selection: to,
                        opacity: eased,
                        accepts_input: incoming_input,
                    },
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookfeel_core::DesignLanguage;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    fn cupertino() -> LookAndFeelSelection {
        LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false)
    }

    fn material() -> LookAndFeelSelection {
        LookAndFeelSelection::with_dark(DesignLanguage::Material3, false)
    }

    fn run_to_stable(controller: &mut TransitionController) -> usize {
        let mut frames = 0;
        while controller.tick(FRAME_MS) {
            frames += 1;
            assert!(frames < 10_000, "transition never settled");
        }
        frames
    }

    #[test]
    fn test_selection_is_idempotent() {
        let mut controller = TransitionController::new(cupertino());

        controller.set_selection(cupertino());
        assert_eq!(controller.state(), SwitchState::Stable(cupertino()));

        controller.set_selection(material());
        assert!(controller.is_transitioning());

        // Repeating the in-flight target changes nothing.
        let before = controller.state();
        controller.set_selection(material());
        assert_eq!(controller.state(), before);

        run_to_stable(&mut controller);
        assert_eq!(controller.state(), SwitchState::Stable(material()));

        // And once stable, the same selection starts no second transition.
        controller.set_selection(material());
        assert_eq!(controller.state(), SwitchState::Stable(material()));
    }

    #[test]
    fn test_transition_completes_with_monotonic_progress() {
        let mut controller = TransitionController::new(cupertino());
        controller.set_selection(material());

        match controller.state() {
            SwitchState::Transitioning { from, to, progress } => {
                assert_eq!(from, cupertino());
                assert_eq!(to, material());
                assert_eq!(progress, 0.0);
            }
            other => panic!("expected transition, got {other:?}"),
        }

        let mut last_progress = 0.0;
        let mut stable_count = 0;
        for _ in 0..1_000 {
            let running = controller.tick(FRAME_MS);
            match controller.state() {
                SwitchState::Transitioning { progress, .. } => {
                    assert!((0.0..=1.0).contains(&progress));
                    assert!(progress >= last_progress, "progress regressed");
                    last_progress = progress;
                }
                SwitchState::Stable(selection) => {
                    assert_eq!(selection, material());
                    stable_count += 1;
                }
            }
            if !running {
                break;
            }
        }
        assert_eq!(stable_count, 1, "reached Stable exactly once");
    }

    #[test]
    fn test_retrigger_coalesces_to_newest_target() {
        let dark_material = LookAndFeelSelection::with_dark(DesignLanguage::Material3, true);

        let mut controller = TransitionController::new(cupertino());
        controller.set_selection(material());
        controller.tick(FRAME_MS);
        controller.tick(FRAME_MS);

        controller.set_selection(dark_material);
        match controller.state() {
            SwitchState::Transitioning { from, to, progress } => {
                assert_eq!(from, material());
                assert_eq!(to, dark_material);
                assert_eq!(progress, 0.0);
            }
            other => panic!("expected retargeted transition, got {other:?}"),
        }

        let mut saw_stable_material = false;
        while controller.tick(FRAME_MS) {
            if controller.state() == SwitchState::Stable(material()) {
                saw_stable_material = true;
            }
        }
        assert!(!saw_stable_material, "intermediate target must never settle");
        assert_eq!(controller.state(), SwitchState::Stable(dark_material));
    }

    #[test]
    fn test_dark_toggle_uses_the_same_machine() {
        let light = cupertino();
        let dark = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, true);

        let mut controller = TransitionController::new(light);
        controller.set_selection(dark);
        assert!(controller.is_transitioning());
        run_to_stable(&mut controller);
        assert_eq!(controller.state(), SwitchState::Stable(dark));
    }

    #[test]
    fn test_outgoing_pass_is_input_disabled_immediately() {
        let mut controller = TransitionController::new(cupertino());
        controller.set_selection(material());

        let passes = controller.render_passes();
        assert_eq!(passes.len(), 2);
        assert!(!passes[0].accepts_input, "outgoing must not receive input");
        assert!(passes[1].accepts_input);
        assert_eq!(passes[0].selection, cupertino());
        assert_eq!(passes[1].selection, material());
    }

    #[test]
    fn test_input_policy_threshold() {
        let config = TransitionConfig {
            input_policy: InputPolicy::AfterProgress(0.5),
            ..TransitionConfig::default()
        };
        let mut controller = TransitionController::with_config(cupertino(), config);
        controller.set_selection(material());

        assert!(!controller.render_passes()[1].accepts_input);

        while let SwitchState::Transitioning { progress, .. } = controller.state() {
            if progress >= 0.5 {
                break;
            }
            controller.tick(FRAME_MS);
        }
        assert!(controller.render_passes()[1].accepts_input);
    }

    #[test]
    fn test_pass_opacities_are_complementary() {
        let mut controller = TransitionController::new(cupertino());
        controller.set_selection(material());

        while controller.tick(FRAME_MS) {
            let passes = controller.render_passes();
            if passes.len() == 2 {
                assert!((passes[0].opacity + passes[1].opacity - 1.0).abs() < 1e-5);
            }
        }
        let settled = controller.render_passes();
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].opacity, 1.0);
        assert!(settled[0].accepts_input);
    }
}
