use crate::core::step::{SharedStep, Step};
use std::rc::Rc;

type StepCallback = Box<dyn Fn(&dyn Step)>;
type SwitchCallback = Box<dyn Fn(&SharedStep)>;
type Callback = Box<dyn Fn()>;

/// Host callbacks fired by the controller. Unset slots do nothing.
///
/// Callbacks run synchronously. The content-changed callback receives the
/// reporting step while that step is borrowed by its own setter. The switch
/// callback receives the shared handle with no borrow held, so it may update
/// the newly active step.
#[derive(Default)]
pub struct WizardHooks {
    content_changed: Option<StepCallback>,
    step_switched: Option<SwitchCallback>,
    reach_final: Option<Callback>,
    complete: Option<Callback>,
}

impl WizardHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_content_changed(mut self, f: impl Fn(&dyn Step) + 'static) -> Self {
        self.content_changed = Some(Box::new(f));
        self
    }

    pub fn on_step_switched(mut self, f: impl Fn(&SharedStep) + 'static) -> Self {
        self.step_switched = Some(Box::new(f));
        self
    }

    pub fn on_reach_final(mut self, f: impl Fn() + 'static) -> Self {
        self.reach_final = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl Fn() + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }

    /// Route every slot to a single host object.
    ///
    /// The hooks keep the host alive; a host that also owns the controller
    /// forms a reference cycle.
    pub fn from_host<H: WizardHost + 'static>(host: Rc<H>) -> Self {
        let switched = Rc::clone(&host);
        let changed = Rc::clone(&host);
        let reach_final = Rc::clone(&host);
        Self::new()
            .on_step_switched(move |step| switched.step_switched(step))
            .on_content_changed(move |step| changed.content_changed(step))
            .on_reach_final(move || reach_final.reach_final())
            .on_complete(move || host.complete())
    }

    pub(crate) fn content_changed(&self, step: &dyn Step) {
        if let Some(f) = &self.content_changed {
            f(step);
        }
    }

    pub(crate) fn step_switched(&self, step: &SharedStep) {
        if let Some(f) = &self.step_switched {
            f(step);
        }
    }

    pub(crate) fn reach_final(&self) {
        if let Some(f) = &self.reach_final {
            f();
        }
    }

    pub(crate) fn complete(&self) {
        if let Some(f) = &self.complete {
            f();
        }
    }
}

/// Object-style alternative to closures for hosts that keep their own state.
pub trait WizardHost {
    fn step_switched(&self, step: &SharedStep);

    fn content_changed(&self, step: &dyn Step);

    fn reach_final(&self) {}

    fn complete(&self) {}
}
