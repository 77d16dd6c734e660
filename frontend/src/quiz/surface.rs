//! Capabilities the quiz controller needs from the page.
//!
//! Surface methods default to doing nothing, so a surface that lacks a region
//! simply skips that update.

use super::scoring::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    /// Mounted and visible, waiting one tick before the open transition runs.
    Entering,
    Open,
    /// Hide transition running; removed from layout once it ends.
    Leaving,
}

impl ModalPhase {
    pub fn is_visible(self) -> bool {
        matches!(self, ModalPhase::Entering | ModalPhase::Open)
    }
}

/// Where the dialog should scroll after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Bring the question prompt into view, moving as little as possible.
    Prompt,
    /// Center the result panel.
    Result,
    /// Back to the top of the dialog.
    Top,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub hint: String,
    pub options: Vec<OptionView>,
    /// 0.0 on the first question, 1.0 on the last.
    pub progress: f64,
}

impl QuestionView {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub previous: bool,
    pub next: bool,
    pub submit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub score: u32,
    pub level: Level,
    pub label: String,
    pub badge_class: String,
    pub meaning: String,
    pub recommendations: Vec<String>,
}

pub trait QuizSurface {
    fn set_modal(&mut self, _phase: ModalPhase) {}
    fn set_page_locked(&mut self, _locked: bool) {}
    /// Shows the question card and hides the result panel.
    fn show_question_card(&mut self) {}
    fn render_question(&mut self, _view: &QuestionView) {}
    fn mark_selected(&mut self, _option: usize) {}
    fn set_controls(&mut self, _controls: ControlState) {}
    /// Hides the question card and shows the result panel.
    fn show_result(&mut self, _result: &ResultView) {}
    fn focus_first_option(&mut self) {}
    fn scroll_to(&mut self, _target: ScrollTarget) {}
}

/// Blocking yes/no question put to the user before discarding answers.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    AutoAdvance { from: usize, epoch: u64 },
    AutoSubmit { epoch: u64 },
    ModalShown { epoch: u64 },
    ModalHidden { epoch: u64 },
}

/// Hands `event` back to the controller after `delay_ms`.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent);
}
