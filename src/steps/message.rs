use crate::core::controller::ControllerHandle;
use crate::core::step::{Step, StepKind};
use crate::steps::validators::{self, Validator};

pub struct MessageStep {
    body: String,
    validators: Vec<Validator>,
    controller: Option<ControllerHandle>,
}

impl MessageStep {
    pub fn new(min_length: usize) -> Self {
        Self {
            body: String::new(),
            validators: vec![validators::required(), validators::min_length(min_length)],
            controller: None,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.body = value.into();
        <dyn Step>::notify_content_changed(self);
    }

    pub fn error(&self) -> Option<String> {
        validators::run_validators(&self.validators, &self.body).err()
    }
}

impl Step for MessageStep {
    fn kind(&self) -> StepKind {
        StepKind::Message
    }

    fn is_complete(&self) -> bool {
        self.error().is_none()
    }

    fn clear_form(&mut self) {
        self.body.clear();
    }

    fn summary(&self) -> Option<String> {
        let body = self.body.trim();
        (!body.is_empty()).then(|| body.to_string())
    }

    fn controller(&self) -> Option<&ControllerHandle> {
        self.controller.as_ref()
    }

    fn set_controller(&mut self, controller: ControllerHandle) {
        self.controller = Some(controller);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_length_counts_trimmed_chars() {
        let mut step = MessageStep::new(3);
        step.set_body("  hé ");
        assert_eq!(step.error().as_deref(), Some("Minimum length is 3"));
        step.set_body("héé");
        assert!(step.is_complete());
    }
}
