//! Line-driven host session around a [`Controller`].

pub mod command;
pub mod event;

use crate::config::WizardConfig;
use crate::core::controller::Controller;
use crate::core::error::WizardError;
use crate::core::hooks::WizardHooks;
use crate::core::step::{SharedStep, StepKind};
use crate::steps::{FinalStep, ImageStep, MessageStep, NameStep};
use command::Command;
use event::{AppEvent, EventQueue};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

pub struct App {
    config: WizardConfig,
    controller: Controller,
    name: Rc<RefCell<NameStep>>,
    message: Rc<RefCell<MessageStep>>,
    image: Rc<RefCell<ImageStep>>,
    review: Rc<RefCell<FinalStep>>,
    events: Rc<RefCell<EventQueue>>,
    submission: Option<IndexMap<StepKind, String>>,
    should_exit: bool,
}

impl App {
    pub fn new(config: WizardConfig) -> Result<Self, WizardError> {
        let name = Rc::new(RefCell::new(NameStep::new()));
        let message = Rc::new(RefCell::new(MessageStep::new(config.message.min_length)));
        let image = Rc::new(RefCell::new(ImageStep::new(&config.image.extensions)));
        let review = Rc::new(RefCell::new(FinalStep::new()));
        let events = Rc::new(RefCell::new(EventQueue::new()));

        let steps: Vec<SharedStep> = vec![
            name.clone(),
            message.clone(),
            image.clone(),
            review.clone(),
        ];
        let controller = Controller::new(steps, queue_hooks(&events))?;

        Ok(Self {
            config,
            controller,
            name,
            message,
            image,
            review,
            events,
            submission: None,
            should_exit: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn current_kind(&self) -> StepKind {
        self.controller.current_kind()
    }

    pub fn prompt(&self) -> &str {
        self.config.prompt(self.current_kind())
    }

    /// One-based index of the active step and the step count.
    pub fn progress(&self) -> (usize, usize) {
        (self.controller.current_index() + 1, self.controller.len())
    }

    pub fn review_lines(&self) -> Vec<String> {
        self.review.borrow().lines()
    }

    pub fn submission(&self) -> Option<&IndexMap<StepKind, String>> {
        self.submission.as_ref()
    }

    pub fn submission_json(&self) -> serde_json::Result<Option<String>> {
        self.submission
            .as_ref()
            .map(serde_json::to_string_pretty)
            .transpose()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Apply `command` and return the events it produced, in firing order.
    pub fn handle(&mut self, command: Command) -> Vec<AppEvent> {
        match command {
            Command::Next => self.next(),
            Command::Back => {
                self.dismiss_current();
                self.controller.retreat();
            }
            Command::Reset => {
                self.dismiss_current();
                self.submission = None;
                self.controller.reset();
            }
            Command::Quit => self.should_exit = true,
            Command::Input(text) => self.apply_input(&text),
            Command::Noop => {}
        }
        self.drain()
    }

    fn next(&mut self) {
        if let Some(reason) = self.current_error() {
            let kind = self.current_kind();
            self.events
                .borrow_mut()
                .emit(AppEvent::Incomplete { kind, reason });
            return;
        }
        self.dismiss_current();
        self.controller.advance();
    }

    fn apply_input(&mut self, text: &str) {
        let kind = self.current_kind();
        match kind {
            StepKind::Name => {
                let (first, last) = split_name(text);
                self.name.borrow_mut().set_name(first, last);
            }
            StepKind::Message => self.message.borrow_mut().set_body(text),
            StepKind::Image => self.image.borrow_mut().attach(text),
            StepKind::Final => {
                self.events.borrow_mut().emit(AppEvent::Ignored(kind));
                return;
            }
        }
        if let Some(reason) = self.current_error() {
            self.events
                .borrow_mut()
                .emit(AppEvent::Incomplete { kind, reason });
        }
    }

    fn current_error(&self) -> Option<String> {
        match self.current_kind() {
            StepKind::Name => self.name.borrow().error(),
            StepKind::Message => self.message.borrow().error(),
            StepKind::Image => self.image.borrow().error(),
            StepKind::Final => None,
        }
    }

    fn dismiss_current(&self) {
        self.controller.current().borrow_mut().dismiss_input();
    }

    fn drain(&mut self) -> Vec<AppEvent> {
        let mut drained = Vec::new();
        loop {
            let next = self.events.borrow_mut().next_ready();
            let Some(event) = next else {
                break;
            };
            match &event {
                AppEvent::ReachedFinal => {
                    let summary = self.controller.summary();
                    self.review.borrow_mut().fill(summary);
                }
                AppEvent::Completed => {
                    self.submission = Some(self.controller.summary());
                    self.should_exit = true;
                }
                _ => {}
            }
            drained.push(event);
        }
        drained
    }
}

fn queue_hooks(events: &Rc<RefCell<EventQueue>>) -> WizardHooks {
    let changed = Rc::clone(events);
    let switched = Rc::clone(events);
    let reach_final = Rc::clone(events);
    let complete = Rc::clone(events);
    WizardHooks::new()
        .on_content_changed(move |step| {
            changed
                .borrow_mut()
                .emit(AppEvent::ContentChanged(step.kind()));
        })
        .on_step_switched(move |step| {
            switched
                .borrow_mut()
                .emit(AppEvent::StepSwitched(step.borrow().kind()));
        })
        .on_reach_final(move || reach_final.borrow_mut().emit(AppEvent::ReachedFinal))
        .on_complete(move || complete.borrow_mut().emit(AppEvent::Completed))
}

fn split_name(text: &str) -> (&str, &str) {
    match text.trim().split_once(char::is_whitespace) {
        Some((first, last)) => (first, last.trim()),
        None => (text.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = WizardConfig::default();
        config.message.min_length = 5;
        App::new(config).expect("app")
    }

    fn input(text: &str) -> Command {
        Command::Input(text.to_string())
    }

    #[test]
    fn next_is_refused_until_step_is_complete() {
        let mut app = app();
        let events = app.handle(Command::Next);
        assert_eq!(
            events,
            vec![AppEvent::Incomplete {
                kind: StepKind::Name,
                reason: "This field is required".to_string(),
            }]
        );
        assert_eq!(app.current_kind(), StepKind::Name);
    }

    #[test]
    fn short_message_reports_reason() {
        let mut app = app();
        app.handle(input("Ada"));
        app.handle(Command::Next);
        let events = app.handle(input("hi"));
        assert_eq!(
            events,
            vec![AppEvent::Incomplete {
                kind: StepKind::Message,
                reason: "Minimum length is 5".to_string(),
            }]
        );
    }

    #[test]
    fn full_run_fills_review_and_submits() {
        let mut app = app();
        assert_eq!(app.handle(input("Ada Lovelace")), vec![AppEvent::ContentChanged(StepKind::Name)]);
        assert_eq!(app.handle(Command::Next), vec![AppEvent::StepSwitched(StepKind::Message)]);
        app.handle(input("Hello engine"));
        app.handle(Command::Next);
        app.handle(input("engine.png"));
        assert_eq!(app.progress(), (3, 4));

        assert_eq!(
            app.handle(Command::Next),
            vec![
                AppEvent::StepSwitched(StepKind::Final),
                AppEvent::ReachedFinal,
                AppEvent::ContentChanged(StepKind::Final),
            ]
        );
        assert_eq!(
            app.review_lines(),
            vec![
                "Name     Ada Lovelace".to_string(),
                "Message  Hello engine".to_string(),
                "Image    engine.png".to_string(),
            ]
        );
        assert_eq!(app.handle(input("edit")), vec![AppEvent::Ignored(StepKind::Final)]);

        assert_eq!(app.handle(Command::Next), vec![AppEvent::Completed]);
        assert!(app.should_exit());
        let json = app.submission_json().expect("json").expect("submitted");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["name"], "Ada Lovelace");
        assert_eq!(value["image"], "engine.png");
    }

    #[test]
    fn reset_clears_everything() {
        let mut app = app();
        app.handle(input("Ada"));
        app.handle(Command::Next);
        app.handle(input("Hello there"));
        assert_eq!(app.handle(Command::Reset), vec![AppEvent::StepSwitched(StepKind::Name)]);
        assert_eq!(app.current_kind(), StepKind::Name);
        assert!(app.controller.summary().is_empty());
        assert_eq!(app.submission(), None);
    }

    #[test]
    fn back_from_first_step_stays_put() {
        let mut app = app();
        assert_eq!(app.handle(Command::Back), vec![AppEvent::StepSwitched(StepKind::Name)]);
        assert_eq!(app.progress(), (1, 4));
    }

    #[test]
    fn split_name_keeps_multi_word_last_name() {
        assert_eq!(split_name(" Ada  King Lovelace "), ("Ada", "King Lovelace"));
        assert_eq!(split_name("Ada"), ("Ada", ""));
    }
}
