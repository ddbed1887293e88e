use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reply categories for the response classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Question,
    Shouting,
    ShoutingQuestion,
    Silence,
    Default,
}

impl Reply {
    pub fn tag(self) -> &'static str {
        match self {
            Reply::Question => "question",
            Reply::Shouting => "shouting",
            Reply::ShoutingQuestion => "shouting_question",
            Reply::Silence => "silence",
            Reply::Default => "default",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Reply::Question => "Sure.",
            Reply::Shouting => "Whoa, chill out!",
            Reply::ShoutingQuestion => "Calm down, I know what I'm doing!",
            Reply::Silence => "Fine. Be that way!",
            Reply::Default => "Whatever.",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Reply> {
        match tag {
            "question" => Some(Reply::Question),
            "shouting" => Some(Reply::Shouting),
            "shouting_question" => Some(Reply::ShoutingQuestion),
            "silence" => Some(Reply::Silence),
            "default" => Some(Reply::Default),
            _ => None,
        }
    }
}

/// What the cipher does when the text outruns the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOverflow {
    Reject,
    #[default]
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

impl MatchOutcome {
    pub fn parse(result: &str) -> Option<MatchOutcome> {
        match result {
            "win" => Some(MatchOutcome::Win),
            "loss" => Some(MatchOutcome::Loss),
            "draw" => Some(MatchOutcome::Draw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub name: String,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matches: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
        }
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
        self.points += 3;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.points += 1;
    }

    /// Standings order: points descending, then name ascending.
    pub fn standings_cmp(&self, other: &TeamRecord) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| self.name.cmp(&other.name))
    }
}
