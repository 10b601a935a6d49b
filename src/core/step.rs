use crate::core::controller::ControllerHandle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Role of a step in the wizard. Declaration order is stage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Name,
    Message,
    Image,
    Final,
}

impl StepKind {
    /// The reserved summary tag.
    pub const FINAL: StepKind = StepKind::Final;

    pub const ALL: [StepKind; 4] = [
        StepKind::Name,
        StepKind::Message,
        StepKind::Image,
        StepKind::Final,
    ];

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn is_final(self) -> bool {
        self == Self::FINAL
    }

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Name => "Name",
            StepKind::Message => "Message",
            StepKind::Image => "Image",
            StepKind::Final => "Summary",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stage of the wizard.
///
/// Implementors hold their own content and report completion. The
/// controller link is installed by [`Controller::new`](crate::Controller::new)
/// and is non-owning.
pub trait Step {
    fn kind(&self) -> StepKind;

    fn position(&self) -> usize {
        self.kind().position()
    }

    fn is_complete(&self) -> bool {
        true
    }

    /// Reset held content to its empty state. Must be idempotent.
    fn clear_form(&mut self);

    /// Presentation hint only; the wizard state is untouched.
    fn dismiss_input(&mut self) {}

    /// Text contributed to the summary view, if any.
    fn summary(&self) -> Option<String> {
        None
    }

    fn controller(&self) -> Option<&ControllerHandle>;

    fn set_controller(&mut self, controller: ControllerHandle);
}

impl<'a> dyn Step + 'a {
    /// Forward a content change to the owning controller when this step is
    /// complete. Steps that were never registered, or whose controller has
    /// been dropped, ignore the call.
    pub fn notify_content_changed(&self) -> bool {
        if !self.is_complete() {
            return false;
        }
        match self.controller() {
            Some(controller) => controller.on_step_content_reported(self),
            None => {
                tracing::trace!(kind = %self.kind(), "content change on unregistered step");
                false
            }
        }
    }
}

pub type SharedStep = Rc<RefCell<dyn Step>>;

pub fn shared<S: Step + 'static>(step: S) -> SharedStep {
    Rc::new(RefCell::new(step))
}

/// Order steps ascending by position.
pub fn sorted_by_position(mut steps: Vec<SharedStep>) -> Vec<SharedStep> {
    steps.sort_by_key(|step| step.borrow().position());
    steps
}

/// Summary text of every non-final step, in the order given.
///
/// Borrows each step in turn, so no step may be mutably borrowed.
pub fn collect_summary(steps: &[SharedStep]) -> IndexMap<StepKind, String> {
    steps
        .iter()
        .filter_map(|step| {
            let step = step.borrow();
            let kind = step.kind();
            if kind.is_final() {
                return None;
            }
            step.summary().map(move |text| (kind, text))
        })
        .collect()
}

/// Status of a step relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}
