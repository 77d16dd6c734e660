use std::rc::Rc;

use log::{debug, info};

use super::questions::QuestionSet;
use super::scoring::{total_score, AnswerRecord, Level};
use super::surface::{
    ConfirmPrompt, ControlState, ModalPhase, OptionView, QuestionView, QuizSurface, ResultView,
    Scheduler, ScrollTarget, TimerEvent,
};
use crate::config;

const CONFIRM_CLOSE: &str = "Close the quiz? Your answers will be lost.";
const CONFIRM_EMPTY_SUBMIT: &str = "You have not answered any questions. Submit anyway?";
const CONFIRM_RESET: &str = "Reset all answers?";
const CONFIRM_RETAKE: &str = "Retake quiz? This will reset your answers.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Closed,
    InProgress { cursor: usize },
    Completed { score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTiming {
    pub auto_advance_ms: u32,
    pub auto_submit_ms: u32,
    pub modal_enter_ms: u32,
    pub modal_leave_ms: u32,
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            auto_advance_ms: config::AUTO_ADVANCE_DELAY_MS,
            auto_submit_ms: config::AUTO_SUBMIT_DELAY_MS,
            modal_enter_ms: config::MODAL_ENTER_DELAY_MS,
            modal_leave_ms: config::MODAL_LEAVE_DELAY_MS,
        }
    }
}

/// Owns one quiz attempt and drives the page through its capabilities.
///
/// Scheduled events carry the epoch they were issued under. Any user action
/// that moves the flow bumps the epoch, so a pending auto-advance or
/// auto-submit from before that action is dropped on delivery.
pub struct QuizController<S, P, T> {
    questions: Rc<QuestionSet>,
    answers: AnswerRecord,
    state: FlowState,
    modal: ModalPhase,
    next_armed: bool,
    flow_epoch: u64,
    modal_epoch: u64,
    timing: QuizTiming,
    surface: S,
    prompt: P,
    scheduler: T,
}

impl<S, P, T> QuizController<S, P, T>
where
    S: QuizSurface,
    P: ConfirmPrompt,
    T: Scheduler,
{
    pub fn new(questions: Rc<QuestionSet>, surface: S, prompt: P, scheduler: T) -> Self {
        let answers = AnswerRecord::new(questions.len());
        Self {
            questions,
            answers,
            state: FlowState::Closed,
            modal: ModalPhase::Hidden,
            next_armed: false,
            flow_epoch: 0,
            modal_epoch: 0,
            timing: QuizTiming::default(),
            surface,
            prompt,
            scheduler,
        }
    }

    pub fn with_timing(mut self, timing: QuizTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn modal(&self) -> ModalPhase {
        self.modal
    }

    #[cfg(test)]
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn open(&mut self) {
        info!("Opening quiz");
        self.modal_epoch += 1;
        self.set_modal(ModalPhase::Entering);
        self.surface.set_page_locked(true);
        self.scheduler.schedule(
            self.timing.modal_enter_ms,
            TimerEvent::ModalShown {
                epoch: self.modal_epoch,
            },
        );
        self.restart();
        self.surface.focus_first_option();
    }

    /// Returns false when the close was refused or there was nothing to close.
    pub fn close(&mut self, silent: bool) -> bool {
        if !self.modal.is_visible() {
            return false;
        }
        if !silent && self.answers.any_answered() && !self.prompt.confirm(CONFIRM_CLOSE) {
            debug!("Close declined, keeping quiz open");
            return false;
        }

        info!("Closing quiz");
        self.flow_epoch += 1;
        self.modal_epoch += 1;
        self.answers.clear();
        self.state = FlowState::Closed;
        self.set_modal(ModalPhase::Leaving);
        self.surface.set_page_locked(false);
        self.scheduler.schedule(
            self.timing.modal_leave_ms,
            TimerEvent::ModalHidden {
                epoch: self.modal_epoch,
            },
        );
        true
    }

    pub fn select(&mut self, question: usize, option: usize) {
        let FlowState::InProgress { cursor } = self.state else {
            debug!("Ignoring selection outside an attempt");
            return;
        };
        let in_range = self
            .questions
            .get(question)
            .map_or(false, |q| option < q.option_count());
        if question != cursor || !in_range {
            debug!("Ignoring selection {} for question {} (showing {})", option, question, cursor);
            return;
        }

        self.answers.select(question, option);
        self.surface.mark_selected(option);

        let last = question == self.questions.last_index();
        self.next_armed = !last;
        self.surface.set_controls(ControlState {
            previous: cursor > 0,
            next: !last,
            submit: true,
        });

        self.flow_epoch += 1;
        let epoch = self.flow_epoch;
        if last {
            self.scheduler
                .schedule(self.timing.auto_submit_ms, TimerEvent::AutoSubmit { epoch });
        } else {
            self.scheduler.schedule(
                self.timing.auto_advance_ms,
                TimerEvent::AutoAdvance {
                    from: question,
                    epoch,
                },
            );
        }
    }

    pub fn previous(&mut self) {
        if let FlowState::InProgress { cursor } = self.state {
            if cursor > 0 {
                self.show_question(cursor - 1);
            }
        }
    }

    pub fn next(&mut self) {
        if let FlowState::InProgress { cursor } = self.state {
            if self.next_armed && cursor < self.questions.last_index() {
                self.show_question(cursor + 1);
            }
        }
    }

    /// Returns false if the attempt was not submitted.
    pub fn submit(&mut self) -> bool {
        if !matches!(self.state, FlowState::InProgress { .. }) {
            return false;
        }
        if !self.answers.any_answered() && !self.prompt.confirm(CONFIRM_EMPTY_SUBMIT) {
            return false;
        }
        self.complete();
        true
    }

    pub fn reset(&mut self) {
        if matches!(self.state, FlowState::InProgress { .. }) && self.prompt.confirm(CONFIRM_RESET) {
            info!("Resetting quiz answers");
            self.restart();
            self.surface.scroll_to(ScrollTarget::Top);
        }
    }

    pub fn retake(&mut self) {
        if matches!(self.state, FlowState::Completed { .. }) && self.prompt.confirm(CONFIRM_RETAKE) {
            info!("Retaking quiz");
            self.restart();
        }
    }

    pub fn deliver(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::AutoAdvance { from, epoch } if epoch == self.flow_epoch => {
                let still_showing = self.state == (FlowState::InProgress { cursor: from });
                if still_showing && from < self.questions.last_index() {
                    self.show_question(from + 1);
                    self.surface.focus_first_option();
                }
            }
            TimerEvent::AutoSubmit { epoch } if epoch == self.flow_epoch => {
                self.submit();
            }
            TimerEvent::ModalShown { epoch } if epoch == self.modal_epoch => {
                if self.modal == ModalPhase::Entering {
                    self.set_modal(ModalPhase::Open);
                }
            }
            TimerEvent::ModalHidden { epoch } if epoch == self.modal_epoch => {
                if self.modal == ModalPhase::Leaving {
                    self.set_modal(ModalPhase::Hidden);
                }
            }
            stale => debug!("Dropping stale timer event {:?}", stale),
        }
    }

    fn restart(&mut self) {
        self.answers.clear();
        self.surface.show_question_card();
        self.show_question(0);
    }

    fn show_question(&mut self, index: usize) {
        let Some(question) = self.questions.get(index) else {
            return;
        };
        self.flow_epoch += 1;
        self.state = FlowState::InProgress { cursor: index };
        self.next_armed = false;

        let selected = self.answers.get(index);
        let last = self.questions.last_index();
        let view = QuestionView {
            index,
            number: index + 1,
            total: self.questions.len(),
            prompt: question.prompt().to_string(),
            hint: question.hint().to_string(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(i, label)| OptionView {
                    label: label.clone(),
                    selected: selected == Some(i),
                })
                .collect(),
            progress: if last == 0 {
                1.0
            } else {
                index as f64 / last as f64
            },
        };
        self.surface.render_question(&view);
        self.surface.set_controls(ControlState {
            previous: index > 0,
            next: false,
            submit: selected.is_some(),
        });
        self.surface.scroll_to(ScrollTarget::Prompt);
    }

    fn complete(&mut self) {
        self.flow_epoch += 1;
        let score = total_score(&self.questions, &self.answers);
        let level = Level::from_score(score);
        let content = level.content();
        info!("Quiz submitted with score {} ({:?})", score, level);

        self.state = FlowState::Completed { score };
        self.surface.show_result(&ResultView {
            score,
            level,
            label: content.label.to_string(),
            badge_class: content.badge_class.to_string(),
            meaning: content.meaning.to_string(),
            recommendations: content.recommendations.iter().map(|r| r.to_string()).collect(),
        });
        self.surface.scroll_to(ScrollTarget::Result);
    }

    fn set_modal(&mut self, phase: ModalPhase) {
        self.modal = phase;
        self.surface.set_modal(phase);
    }
}
