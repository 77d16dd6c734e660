use std::rc::Rc;

use log::{error, info, warn};

mod config;
mod dom;
mod quiz {
    pub mod controller;
    pub mod questions;
    pub mod scoring;
    pub mod surface;
    pub mod view_model;
}
mod components {
    pub mod quiz_modal;
}

use components::quiz_modal::{QuizModal, QuizModalProps};
use quiz::controller::QuizTiming;
use quiz::questions::QuestionSet;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let questions = match QuestionSet::builtin() {
        Ok(questions) => Rc::new(questions),
        Err(e) => {
            error!("Quiz: invalid question set: {}", e);
            return;
        }
    };

    let Some(host) = dom::element_by_id(config::MODAL_HOST_ID) else {
        warn!("Quiz: #{} missing; quiz will not initialize.", config::MODAL_HOST_ID);
        return;
    };

    info!("Starting quiz with {} questions", questions.len());
    let props = QuizModalProps {
        questions,
        timing: QuizTiming::default(),
    };
    yew::Renderer::<QuizModal>::with_root_and_props(host, props).render();
}
