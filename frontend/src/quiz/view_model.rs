use super::surface::{ControlState, ModalPhase, QuestionView, QuizSurface, ResultView, ScrollTarget};

/// Everything the quiz modal renders, written by the controller through [`QuizSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuizViewModel {
    pub modal: ModalPhase,
    pub page_locked: bool,
    pub showing_result: bool,
    pub question: Option<QuestionView>,
    pub controls: ControlState,
    pub result: Option<ResultView>,
    focus_requested: bool,
    scroll_request: Option<ScrollTarget>,
}

impl Default for QuizViewModel {
    fn default() -> Self {
        Self {
            modal: ModalPhase::Hidden,
            page_locked: false,
            showing_result: false,
            question: None,
            controls: ControlState::default(),
            result: None,
            focus_requested: false,
            scroll_request: None,
        }
    }
}

impl QuizViewModel {
    /// Returns true once per focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Latest pending scroll, handed out once.
    pub fn take_scroll_request(&mut self) -> Option<ScrollTarget> {
        self.scroll_request.take()
    }

    #[cfg(test)]
    pub fn selected_option(&self) -> Option<usize> {
        self.question
            .as_ref()
            .and_then(|q| q.options.iter().position(|o| o.selected))
    }
}

impl QuizSurface for QuizViewModel {
    fn set_modal(&mut self, phase: ModalPhase) {
        self.modal = phase;
    }

    fn set_page_locked(&mut self, locked: bool) {
        self.page_locked = locked;
    }

    fn show_question_card(&mut self) {
        self.showing_result = false;
    }

    fn render_question(&mut self, view: &QuestionView) {
        self.question = Some(view.clone());
    }

    fn mark_selected(&mut self, option: usize) {
        if let Some(question) = self.question.as_mut() {
            for (index, entry) in question.options.iter_mut().enumerate() {
                entry.selected = index == option;
            }
        }
    }

    fn set_controls(&mut self, controls: ControlState) {
        self.controls = controls;
    }

    fn show_result(&mut self, result: &ResultView) {
        self.result = Some(result.clone());
        self.showing_result = true;
    }

    fn focus_first_option(&mut self) {
        self.focus_requested = true;
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        self.scroll_request = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::surface::OptionView;

    fn view(selected: Option<usize>) -> QuestionView {
        QuestionView {
            index: 0,
            number: 1,
            total: 2,
            prompt: "prompt".to_string(),
            hint: String::new(),
            options: (0..3)
                .map(|i| OptionView {
                    label: format!("option {}", i),
                    selected: selected == Some(i),
                })
                .collect(),
            progress: 0.0,
        }
    }

    #[test]
    fn mark_selected_keeps_a_single_selection() {
        let mut model = QuizViewModel::default();
        model.render_question(&view(Some(0)));
        model.mark_selected(2);
        assert_eq!(model.selected_option(), Some(2));
        let selected = model
            .question
            .as_ref()
            .unwrap()
            .options
            .iter()
            .filter(|o| o.selected)
            .count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn mark_selected_without_question_is_ignored() {
        let mut model = QuizViewModel::default();
        model.mark_selected(1);
        assert_eq!(model, QuizViewModel::default());
    }

    #[test]
    fn focus_request_is_one_shot() {
        let mut model = QuizViewModel::default();
        assert!(!model.take_focus_request());
        model.focus_first_option();
        assert!(model.take_focus_request());
        assert!(!model.take_focus_request());
    }

    #[test]
    fn scroll_request_is_one_shot_and_latest_wins() {
        let mut model = QuizViewModel::default();
        assert_eq!(model.take_scroll_request(), None);
        model.scroll_to(ScrollTarget::Prompt);
        model.scroll_to(ScrollTarget::Top);
        assert_eq!(model.take_scroll_request(), Some(ScrollTarget::Top));
        assert_eq!(model.take_scroll_request(), None);
    }

    #[test]
    fn heading_and_percent() {
        let mut question = view(None);
        question.number = 4;
        question.total = 10;
        question.progress = 3.0 / 9.0;
        assert_eq!(question.heading(), "Question 4 of 10");
        assert_eq!(question.progress_percent(), 33);
    }
}
