use crate::core::error::WizardError;
use crate::core::hooks::WizardHooks;
use crate::core::step::{
    SharedStep, Step, StepKind, StepStatus, collect_summary, sorted_by_position,
};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

/// Outcome of [`Controller::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Switched(StepKind),
    Completed,
}

/// Non-owning link from a step back to its controller.
#[derive(Clone)]
pub struct ControllerHandle {
    hooks: Weak<WizardHooks>,
}

impl ControllerHandle {
    /// Returns `false` when the controller no longer exists.
    pub fn on_step_content_reported(&self, step: &dyn Step) -> bool {
        let Some(hooks) = self.hooks.upgrade() else {
            tracing::trace!(kind = %step.kind(), "controller dropped, content change ignored");
            return false;
        };
        tracing::trace!(kind = %step.kind(), "step content reported");
        hooks.content_changed(step);
        true
    }

    pub fn is_attached(&self) -> bool {
        self.hooks.strong_count() > 0
    }
}

impl fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Linear wizard over a fixed, position-ordered set of steps.
pub struct Controller {
    steps: Vec<SharedStep>,
    current: usize,
    hooks: Rc<WizardHooks>,
}

impl Controller {
    /// Orders `steps` by position, checks that positions run `0..N` without
    /// repeats and that no step belongs to a live controller, then registers
    /// the new controller on every step.
    pub fn new(steps: Vec<SharedStep>, hooks: WizardHooks) -> Result<Self, WizardError> {
        let steps = sorted_by_position(steps);
        if let Err(err) = validate_positions(&steps) {
            tracing::warn!(error = %err, "rejected wizard steps");
            return Err(err);
        }

        let controller = Self {
            steps,
            current: 0,
            hooks: Rc::new(hooks),
        };
        let handle = controller.handle();
        for step in &controller.steps {
            step.borrow_mut().set_controller(handle.clone());
        }

        tracing::debug!(steps = controller.len(), "wizard ready");
        Ok(controller)
    }

    fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            hooks: Rc::downgrade(&self.hooks),
        }
    }

    pub fn steps(&self) -> &[SharedStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> &SharedStep {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_kind(&self) -> StepKind {
        self.current().borrow().kind()
    }

    pub fn step_at(&self, index: usize) -> Option<&SharedStep> {
        self.steps.get(index)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    pub fn is_on_final(&self) -> bool {
        self.current_kind().is_final()
    }

    pub fn status_at(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current) {
            Ordering::Less => StepStatus::Done,
            Ordering::Equal => StepStatus::Active,
            Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Move to the next step, or fire completion when already on the last.
    pub fn advance(&mut self) -> Navigation {
        let next = self.current + 1;
        if next >= self.steps.len() {
            tracing::debug!(kind = %self.current_kind(), "wizard complete");
            self.hooks.complete();
            return Navigation::Completed;
        }

        self.set_current(next);
        let kind = self.current_kind();
        if kind.is_final() {
            tracing::debug!("reached final step");
            self.hooks.reach_final();
        }
        Navigation::Switched(kind)
    }

    /// Move to the previous step. At the first step this re-selects it.
    pub fn retreat(&mut self) -> StepKind {
        self.set_current(self.current.saturating_sub(1));
        self.current_kind()
    }

    /// Return to the first step and clear every step in order.
    pub fn reset(&mut self) -> StepKind {
        self.set_current(0);
        for step in &self.steps {
            step.borrow_mut().clear_form();
        }
        tracing::debug!("wizard reset");
        self.current_kind()
    }

    /// Same path a registered step takes through its [`ControllerHandle`].
    pub fn on_step_content_reported(&self, step: &dyn Step) -> bool {
        self.handle().on_step_content_reported(step)
    }

    /// Summary text of every non-final step, in stage order.
    pub fn summary(&self) -> IndexMap<StepKind, String> {
        collect_summary(&self.steps)
    }

    // Every write fires the switch hook, including a write of the same step.
    fn set_current(&mut self, position: usize) {
        self.current = position;
        let step = &self.steps[position];
        let kind = step.borrow().kind();
        tracing::debug!(%kind, position, "step switched");
        self.hooks.step_switched(step);
    }
}

fn validate_positions(steps: &[SharedStep]) -> Result<(), WizardError> {
    if steps.is_empty() {
        return Err(WizardError::EmptySteps);
    }
    for (expected, step) in steps.iter().enumerate() {
        let step = step.borrow();
        let found = step.position();
        match found.cmp(&expected) {
            Ordering::Equal => {
                if step.controller().is_some_and(ControllerHandle::is_attached) {
                    return Err(WizardError::AlreadyRegistered { kind: step.kind() });
                }
            }
            Ordering::Less => {
                return Err(WizardError::DuplicatePosition {
                    kind: step.kind(),
                    position: found,
                });
            }
            Ordering::Greater => return Err(WizardError::PositionGap { expected, found }),
        }
    }
    Ok(())
}
