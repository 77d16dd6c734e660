use super::questions::QuestionSet;

/// Selected option per question for one attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    selections: Vec<Option<usize>>,
}

impl AnswerRecord {
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: vec![None; question_count],
        }
    }

    pub fn get(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn any_answered(&self) -> bool {
        self.selections.iter().any(Option::is_some)
    }

    #[cfg(test)]
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Overwrites any earlier choice for `question`. Out of range indices are ignored.
    pub fn select(&mut self, question: usize, option: usize) {
        if let Some(slot) = self.selections.get_mut(question) {
            *slot = Some(option);
        }
    }

    pub fn clear(&mut self) {
        self.selections.iter_mut().for_each(|s| *s = None);
    }
}

/// Sum of the points behind every selected option. Unanswered questions add nothing.
pub fn total_score(questions: &QuestionSet, answers: &AnswerRecord) -> u32 {
    questions
        .iter()
        .enumerate()
        .filter_map(|(index, question)| {
            answers
                .get(index)
                .and_then(|option| question.score_for(option))
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    pub fn from_score(total: u32) -> Self {
        match total {
            0..=10 => Level::Low,
            11..=20 => Level::Moderate,
            _ => Level::High,
        }
    }

    pub fn content(self) -> &'static LevelContent {
        match self {
            Level::Low => &LOW,
            Level::Moderate => &MODERATE,
            Level::High => &HIGH,
        }
    }
}

pub struct LevelContent {
    pub label: &'static str,
    pub badge_class: &'static str,
    pub meaning: &'static str,
    pub recommendations: &'static [&'static str],
}

static LOW: LevelContent = LevelContent {
    label: "Low Influence",
    badge_class: "level-low",
    meaning: "You show low susceptibility to algorithm-driven persuasion. You browse but rarely make impulsive purchases due to social media.",
    recommendations: &[
        "Keep checking reviews & compare prices before buying.",
        "Maintain awareness of emotional triggers that can lead to impulse buys.",
        "Consider setting small budgets for discretionary online spending.",
    ],
};

static MODERATE: LevelContent = LevelContent {
    label: "Moderate Influence",
    badge_class: "level-mod",
    meaning: "You are moderately influenced by social media algorithms and trends. You sometimes make purchases after exposure to ads or influencer posts.",
    recommendations: &[
        "Wait 24 hours before buying viral items to avoid impulse purchases.",
        "Follow creators who provide objective, evidence-based reviews.",
        "Use a wishlist-first approach — move to cart only after reflection.",
    ],
};

static HIGH: LevelContent = LevelContent {
    label: "High Influence",
    badge_class: "level-high",
    meaning: "You are highly influenced by algorithmic content — frequent exposure correlates with higher purchasing behavior.",
    recommendations: &[
        "Turn off ad personalization or limit ad tracking in your settings.",
        "Unfollow or mute accounts that trigger impulse buying.",
        "Set a weekly spending cap and use a wishlist-first, buy-later rule.",
        "Ask: \"Did I find this, or did the algorithm find me?\" before purchasing.",
    ],
};
