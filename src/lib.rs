pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod steps;

pub use crate::core::controller;
pub use crate::core::error;
pub use crate::core::hooks;
pub use crate::core::step;

pub use config::WizardConfig;
pub use crate::core::controller::{Controller, ControllerHandle, Navigation};
pub use crate::core::error::{ConfigError, WizardError};
pub use crate::core::hooks::{WizardHooks, WizardHost};
pub use crate::core::step::{
    SharedStep, Step, StepKind, StepStatus, collect_summary, shared, sorted_by_position,
};
