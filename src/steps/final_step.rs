use crate::core::controller::ControllerHandle;
use crate::core::step::{Step, StepKind};
use indexmap::IndexMap;
use unicode_width::UnicodeWidthStr;

/// Read-only review of the other steps, filled when the wizard reaches it.
#[derive(Default)]
pub struct FinalStep {
    entries: IndexMap<StepKind, String>,
    controller: Option<ControllerHandle>,
}

impl FinalStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &IndexMap<StepKind, String> {
        &self.entries
    }

    pub fn fill(&mut self, entries: IndexMap<StepKind, String>) {
        self.entries = entries;
        <dyn Step>::notify_content_changed(self);
    }

    /// One `label  value` line per entry, labels padded to a common width.
    pub fn lines(&self) -> Vec<String> {
        let width = self
            .entries
            .keys()
            .map(|kind| kind.label().width())
            .max()
            .unwrap_or(0);
        self.entries
            .iter()
            .map(|(kind, value)| {
                let label = kind.label();
                let pad = " ".repeat(width - label.width());
                format!("{label}{pad}  {value}")
            })
            .collect()
    }
}

impl Step for FinalStep {
    fn kind(&self) -> StepKind {
        StepKind::Final
    }

    fn clear_form(&mut self) {
        self.entries.clear();
    }

    fn controller(&self) -> Option<&ControllerHandle> {
        self.controller.as_ref()
    }

    fn set_controller(&mut self, controller: ControllerHandle) {
        self.controller = Some(controller);
    }
}
