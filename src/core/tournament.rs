use crate::config::toml_config::{TournamentConfig, DEFAULT_NAME_WIDTH};
use crate::domain::model::{MatchOutcome, TeamRecord};
use std::collections::HashMap;

/// Accumulates `team;team;result` lines into a standings table.
#[derive(Debug, Clone)]
pub struct Tournament {
    name_width: usize,
    teams: HashMap<String, TeamRecord>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    pub fn new() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            teams: HashMap::new(),
        }
    }

    pub fn from_config(config: &TournamentConfig) -> Self {
        Self {
            name_width: config.name_width(),
            teams: HashMap::new(),
        }
    }

    /// Builds a fresh table for `scores`; state gathered through
    /// [`Tournament::record`] is left untouched.
    pub fn tally(&self, scores: &str) -> String {
        let mut fresh = Self {
            name_width: self.name_width,
            teams: HashMap::new(),
        };
        fresh.record(scores);
        fresh.render()
    }

    /// Applies every well-formed line of `scores` and returns how many were applied.
    /// Lines without exactly three fields are skipped.
    pub fn record(&mut self, scores: &str) -> usize {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(scores.as_bytes());

        let mut applied = 0;
        for (line, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::debug!("Skipping unreadable line {}: {}", line + 1, e);
                    continue;
                }
            };

            if row.len() != 3 {
                tracing::debug!(
                    "Skipping line {}: expected 3 fields, found {}",
                    line + 1,
                    row.len()
                );
                continue;
            }

            self.apply(&row[0], &row[1], &row[2]);
            applied += 1;
        }

        tracing::trace!("Applied {} match lines", applied);
        applied
    }

    fn apply(&mut self, home: &str, away: &str, result: &str) {
        self.register(home);
        self.register(away);

        match MatchOutcome::parse(result) {
            Some(MatchOutcome::Win) => {
                self.team_mut(home, TeamRecord::record_win);
                self.team_mut(away, TeamRecord::record_loss);
            }
            Some(MatchOutcome::Loss) => {
                self.team_mut(home, TeamRecord::record_loss);
                self.team_mut(away, TeamRecord::record_win);
            }
            Some(MatchOutcome::Draw) => {
                self.team_mut(home, TeamRecord::record_draw);
                self.team_mut(away, TeamRecord::record_draw);
            }
            // Both teams still count the match played.
            None => tracing::debug!("Ignoring unknown result '{}'", result),
        }
    }

    fn register(&mut self, name: &str) {
        self.teams
            .entry(name.to_string())
            .or_insert_with(|| TeamRecord::new(name))
            .matches += 1;
    }

    fn team_mut(&mut self, name: &str, update: fn(&mut TeamRecord)) {
        if let Some(team) = self.teams.get_mut(name) {
            update(team);
        }
    }

    pub fn standings(&self) -> Vec<&TeamRecord> {
        let mut teams: Vec<&TeamRecord> = self.teams.values().collect();
        teams.sort_by(|a, b| a.standings_cmp(b));
        teams
    }

    /// Names are padded by character count, so multi-byte names keep the
    /// columns aligned.
    pub fn render(&self) -> String {
        let width = self.name_width;
        let mut output = format!("{:<width$}| MP |  W |  D |  L |  P", "Team");

        for team in self.standings() {
            output.push('\n');
            output.push_str(&format!(
                "{:<width$}|  {} |  {} |  {} |  {} |  {}",
                team.name, team.matches, team.wins, team.draws, team.losses, team.points
            ));
        }

        output
    }
}
