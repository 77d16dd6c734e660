use log::Level;

/// Element the quiz modal is mounted into. Without it the quiz stays inert.
pub const MODAL_HOST_ID: &str = "quizModal";

/// Any click landing inside this element opens the quiz.
pub const START_TRIGGER_SELECTOR: &str = "#startQuizBtn";

pub const BODY_MODAL_CLASS: &str = "modal-open";

pub const AUTO_ADVANCE_DELAY_MS: u32 = 420;
pub const AUTO_SUBMIT_DELAY_MS: u32 = 600;
pub const MODAL_ENTER_DELAY_MS: u32 = 20;
pub const MODAL_LEAVE_DELAY_MS: u32 = 260;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
