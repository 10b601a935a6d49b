use crate::core::step::StepKind;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    StepSwitched(StepKind),
    ContentChanged(StepKind),
    ReachedFinal,
    Completed,
    Incomplete { kind: StepKind, reason: String },
    Ignored(StepKind),
}

/// Events recorded by the wizard hooks and drained by the app once the
/// controller call that produced them has returned.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn next_ready(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }
}
