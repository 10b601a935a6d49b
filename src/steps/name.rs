use crate::core::controller::ControllerHandle;
use crate::core::step::{Step, StepKind};
use crate::steps::validators::{self, Validator};

/// First and last name. Complete once the first name is filled in.
pub struct NameStep {
    first_name: String,
    last_name: String,
    validators: Vec<Validator>,
    controller: Option<ControllerHandle>,
}

impl NameStep {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            validators: vec![validators::required()],
            controller: None,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
        <dyn Step>::notify_content_changed(self);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
        <dyn Step>::notify_content_changed(self);
    }

    pub fn set_name(&mut self, first: impl Into<String>, last: impl Into<String>) {
        self.first_name = first.into();
        self.last_name = last.into();
        <dyn Step>::notify_content_changed(self);
    }

    pub fn error(&self) -> Option<String> {
        validators::run_validators(&self.validators, &self.first_name).err()
    }
}

impl Default for NameStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for NameStep {
    fn kind(&self) -> StepKind {
        StepKind::Name
    }

    fn is_complete(&self) -> bool {
        self.error().is_none()
    }

    fn clear_form(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
    }

    fn summary(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        (!full.is_empty()).then(|| full.to_string())
    }

    fn controller(&self) -> Option<&ControllerHandle> {
        self.controller.as_ref()
    }

    fn set_controller(&mut self, controller: ControllerHandle) {
        self.controller = Some(controller);
    }
}
