use crate::core::controller::ControllerHandle;
use crate::core::step::{Step, StepKind};
use crate::steps::validators::{self, Validator};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// An attached image file, referenced by path.
pub struct ImageStep {
    path: Option<PathBuf>,
    validators: Vec<Validator>,
    controller: Option<ControllerHandle>,
}

impl ImageStep {
    pub fn new(extensions: &[String]) -> Self {
        Self {
            path: None,
            validators: vec![validators::required(), validators::file_extension(extensions)],
            controller: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn attach(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        <dyn Step>::notify_content_changed(self);
    }

    pub fn detach(&mut self) {
        self.path = None;
        <dyn Step>::notify_content_changed(self);
    }

    pub fn error(&self) -> Option<String> {
        let value = self
            .path
            .as_deref()
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default();
        validators::run_validators(&self.validators, &value).err()
    }
}

impl Default for ImageStep {
    fn default() -> Self {
        let extensions: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect();
        Self::new(&extensions)
    }
}

impl Step for ImageStep {
    fn kind(&self) -> StepKind {
        StepKind::Image
    }

    fn is_complete(&self) -> bool {
        self.error().is_none()
    }

    fn clear_form(&mut self) {
        self.path = None;
    }

    fn summary(&self) -> Option<String> {
        self.path
            .as_deref()
            .map(|path| path.display().to_string())
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
    fn rejects_unlisted_extension() {
        let mut step = ImageStep::new(&["png".to_string()]);
        step.attach("notes.txt");
        assert!(!step.is_complete());
        assert_eq!(step.error().as_deref(), Some("Expected one of: png"));
        step.attach("cat.png");
        assert!(step.is_complete());
        step.detach();
        assert_eq!(step.error().as_deref(), Some("This field is required"));
    }
}
