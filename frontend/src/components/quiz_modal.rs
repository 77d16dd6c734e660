use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, ScrollLogicalPosition};
use wasm_bindgen::JsCast;
use yew::html::Scope;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DocumentListener};
use crate::quiz::controller::{QuizController, QuizTiming};
use crate::quiz::questions::QuestionSet;
use crate::quiz::surface::{
    ConfirmPrompt, ModalPhase, QuestionView, ResultView, Scheduler, ScrollTarget, TimerEvent,
};
use crate::quiz::view_model::QuizViewModel;

pub struct BrowserPrompt;

impl ConfirmPrompt for BrowserPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        dom::confirm(message)
    }
}

/// Posts timer events back into the component once the delay has passed.
pub struct LinkScheduler {
    link: Scope<QuizModal>,
}

impl Scheduler for LinkScheduler {
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) {
        let link = self.link.clone();
        let timeout = Timeout::new(delay_ms, move || {
            link.send_message(QuizModalMsg::Timer(event));
        });
        timeout.forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizModalProps {
    pub questions: Rc<QuestionSet>,
    #[prop_or_default]
    pub timing: QuizTiming,
}

pub enum QuizModalMsg {
    Open,
    Close,
    CloseSilently,
    Select { question: usize, option: usize },
    Previous,
    Next,
    Submit,
    Reset,
    Retake,
    Timer(TimerEvent),
}

pub struct QuizModal {
    controller: QuizController<QuizViewModel, BrowserPrompt, LinkScheduler>,
    first_option: NodeRef,
    dialog: NodeRef,
    prompt: NodeRef,
    result: NodeRef,
    _listeners: Vec<DocumentListener>,
}

impl Component for QuizModal {
    type Message = QuizModalMsg;
    type Properties = QuizModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = LinkScheduler {
            link: ctx.link().clone(),
        };
        let controller = QuizController::new(
            ctx.props().questions.clone(),
            QuizViewModel::default(),
            BrowserPrompt,
            scheduler,
        )
        .with_timing(ctx.props().timing);

        // Delegated so the trigger still works if the page swaps the button out.
        let open_link = ctx.link().clone();
        let start = DocumentListener::new("click", move |event: Event| {
            if dom::event_within(&event, config::START_TRIGGER_SELECTOR) {
                event.prevent_default();
                event.stop_propagation();
                open_link.send_message(QuizModalMsg::Open);
            }
        });

        let escape_link = ctx.link().clone();
        let escape = DocumentListener::new("keydown", move |event: Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if is_escape {
                escape_link.send_message(QuizModalMsg::Close);
            }
        });

        Self {
            controller,
            first_option: NodeRef::default(),
            dialog: NodeRef::default(),
            prompt: NodeRef::default(),
            result: NodeRef::default(),
            _listeners: start.into_iter().chain(escape).collect(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let quiz = &mut self.controller;
        match msg {
            QuizModalMsg::Open => quiz.open(),
            QuizModalMsg::Close => {
                quiz.close(false);
            }
            QuizModalMsg::CloseSilently => {
                quiz.close(true);
            }
            QuizModalMsg::Select { question, option } => quiz.select(question, option),
            QuizModalMsg::Previous => quiz.previous(),
            QuizModalMsg::Next => quiz.next(),
            QuizModalMsg::Submit => {
                quiz.submit();
            }
            QuizModalMsg::Reset => quiz.reset(),
            QuizModalMsg::Retake => quiz.retake(),
            QuizModalMsg::Timer(event) => quiz.deliver(event),
        }
        debug!("Quiz now {:?}, modal {:?}", quiz.state(), quiz.modal());
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let view = self.controller.surface_mut();
        dom::set_body_class(config::BODY_MODAL_CLASS, view.page_locked);
        if view.take_focus_request() {
            match self.first_option.cast::<HtmlElement>() {
                Some(button) => {
                    if button.focus().is_err() {
                        debug!("Could not focus first option");
                    }
                }
                None => debug!("No option button to focus"),
            }
        }
        match view.take_scroll_request() {
            Some(ScrollTarget::Prompt) => {
                if let Some(prompt) = self.prompt.cast::<Element>() {
                    dom::scroll_into_view(&prompt, ScrollLogicalPosition::Nearest);
                }
            }
            Some(ScrollTarget::Result) => {
                if let Some(result) = self.result.cast::<Element>() {
                    dom::scroll_into_view(&result, ScrollLogicalPosition::Center);
                }
            }
            Some(ScrollTarget::Top) => {
                if let Some(dialog) = self.dialog.cast::<Element>() {
                    dialog.set_scroll_top(0);
                }
            }
            None => {}
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        dom::set_body_class(config::BODY_MODAL_CLASS, false);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.controller.surface();
        let close = ctx.link().callback(|_| QuizModalMsg::Close);

        let (phase_class, data_open) = match view.modal {
            ModalPhase::Hidden => ("quiz-hidden", "false"),
            ModalPhase::Entering => ("quiz-entering", "false"),
            ModalPhase::Open => ("quiz-open", "true"),
            ModalPhase::Leaving => ("quiz-leaving", "false"),
        };

        let body = if view.showing_result {
            view.result.as_ref().map(|result| self.result_panel(ctx, result))
        } else {
            view.question.as_ref().map(|question| self.question_card(ctx, question))
        }
        .unwrap_or_else(|| html! {});

        html! {
            <div class={classes!("quiz-modal", phase_class)} data-open={data_open} role="dialog" aria-modal="true">
                <style>{QUIZ_CSS}</style>
                <div class="quiz-overlay" onclick={close.clone()}></div>
                <div class="quiz-dialog" ref={self.dialog.clone()}>
                    <button type="button" class="quiz-close" aria-label="Close quiz" onclick={close}>
                        {"✕"}
                    </button>
                    { body }
                </div>
            </div>
        }
    }
}

impl QuizModal {
    fn question_card(&self, ctx: &Context<Self>, question: &QuestionView) -> Html {
        let controls = self.controller.surface().controls;
        let link = ctx.link();

        html! {
            <div class="quiz-card">
                <div class="quiz-progress">
                    <div class="quiz-progress-bar" style={format!("width: {}%;", question.progress_percent())}></div>
                </div>
                <p class="quiz-number">{ question.heading() }</p>
                <h3 class="quiz-text" ref={self.prompt.clone()}>{ &question.prompt }</h3>
                <p class="quiz-hint">{ &question.hint }</p>
                <div class="quiz-options">
                    { for question.options.iter().enumerate().map(|(option, entry)| {
                        let index = question.index;
                        let onclick = link.callback(move |_| QuizModalMsg::Select { question: index, option });
                        let node_ref = if option == 0 { self.first_option.clone() } else { NodeRef::default() };
                        html! {
                            <button
                                type="button"
                                ref={node_ref}
                                class={classes!("option-btn", entry.selected.then(|| "selected"))}
                                aria-pressed={if entry.selected { "true" } else { "false" }}
                                {onclick}
                            >
                                { &entry.label }
                            </button>
                        }
                    }) }
                </div>
                <div class="quiz-controls">
                    <button type="button" class="quiz-btn" disabled={!controls.previous} onclick={link.callback(|_| QuizModalMsg::Previous)}>
                        {"Previous"}
                    </button>
                    <button type="button" class="quiz-btn" disabled={!controls.next} onclick={link.callback(|_| QuizModalMsg::Next)}>
                        {"Next"}
                    </button>
                    <button type="button" class="quiz-btn primary" disabled={!controls.submit} onclick={link.callback(|_| QuizModalMsg::Submit)}>
                        {"Submit"}
                    </button>
                    <button type="button" class="quiz-btn subtle" onclick={link.callback(|_| QuizModalMsg::Reset)}>
                        {"Reset"}
                    </button>
                </div>
            </div>
        }
    }

    fn result_panel(&self, ctx: &Context<Self>, result: &ResultView) -> Html {
        let link = ctx.link();

        html! {
            <div class="quiz-result" ref={self.result.clone()}>
                <h3>{"Your result"}</h3>
                <p class="quiz-score">{"Score: "}<strong>{ result.score.to_string() }</strong></p>
                <span class={classes!("level", result.badge_class.clone())}>{ &result.label }</span>
                <p class="quiz-meaning">{ &result.meaning }</p>
                <ul class="quiz-recommendations">
                    { for result.recommendations.iter().map(|rec| html! { <li>{ rec }</li> }) }
                </ul>
                <div class="quiz-controls">
                    <button type="button" class="quiz-btn primary" onclick={link.callback(|_| QuizModalMsg::Retake)}>
                        {"Retake"}
                    </button>
                    <button type="button" class="quiz-btn" onclick={link.callback(|_| QuizModalMsg::CloseSilently)}>
                        {"Close"}
                    </button>
                </div>
            </div>
        }
    }
}

const QUIZ_CSS: &str = r#"
    .quiz-modal {
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        transition: opacity 0.25s ease;
    }
    .quiz-modal.quiz-hidden {
        display: none;
    }
    .quiz-modal[data-open="true"] {
        opacity: 1;
    }
    .quiz-overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
    }
    .quiz-dialog {
        position: relative;
        width: min(640px, 92vw);
        max-height: 90vh;
        overflow-y: auto;
        background: #1a1a1a;
        color: #eee;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
    }
    .quiz-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: #aaa;
        font-size: 1.2rem;
        cursor: pointer;
    }
    .quiz-progress {
        height: 6px;
        background: rgba(255, 255, 255, 0.1);
        border-radius: 3px;
        margin-bottom: 1.5rem;
    }
    .quiz-progress-bar {
        height: 100%;
        background: #7EB2FF;
        border-radius: 3px;
        transition: width 0.3s ease;
    }
    .quiz-number {
        color: #999;
        font-size: 0.9rem;
    }
    .quiz-hint {
        color: #888;
        font-size: 0.85rem;
        min-height: 1em;
    }
    .quiz-options {
        display: flex;
        flex-direction: column;
        gap: 0.6rem;
        margin: 1rem 0;
    }
    .option-btn {
        text-align: left;
        padding: 0.8rem 1rem;
        border-radius: 8px;
        border: 1px solid rgba(126, 178, 255, 0.3);
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .option-btn.selected {
        background: rgba(126, 178, 255, 0.2);
        border-color: #7EB2FF;
    }
    .quiz-controls {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .quiz-btn {
        padding: 0.6rem 1.2rem;
        border-radius: 8px;
        border: none;
        background: #333;
        color: #fff;
        cursor: pointer;
    }
    .quiz-btn.primary {
        background: #1E90FF;
    }
    .quiz-btn.subtle {
        background: transparent;
        color: #aaa;
    }
    .quiz-btn:disabled {
        opacity: 0.4;
        cursor: not-allowed;
    }
    .level {
        display: inline-block;
        padding: 0.3rem 0.8rem;
        border-radius: 999px;
        font-weight: bold;
    }
    .level-low { background: #2e7d32; }
    .level-mod { background: #f9a825; color: #111; }
    .level-high { background: #c62828; }
    @media (max-width: 600px) {
        .quiz-dialog {
            padding: 1.2rem;
        }
    }
"#;
