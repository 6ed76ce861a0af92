//! Without-replacement random team draw.
//!
//! A [`TeamPicker`] splits a fixed list of teams into two sequences: the
//! teams still eligible in the current cycle and the teams already chosen.
//! Every draw moves one team from the first to the second. When the
//! eligible sequence runs dry, the cycle restarts with every chosen team
//! eligible again.

use rand::Rng;

use crate::error::CoreError;

/// Teams the picker service starts with when none are configured.
pub const DEFAULT_TEAMS: [&str; 4] = ["Team A", "Team B", "Team C", "Team D"];

/// Result of a single draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The team that was picked.
    pub selected: String,
    /// Teams still eligible after this draw, in pool order.
    pub remaining: Vec<String>,
}

/// Round-robin picker state.
///
/// Invariant: `remaining` and `chosen` together hold every configured team
/// exactly once.
#[derive(Debug, Clone, Default)]
pub struct TeamPicker {
    remaining: Vec<String>,
    chosen: Vec<String>,
}

impl TeamPicker {
    /// Build a picker with every distinct team eligible and nothing chosen.
    ///
    /// Duplicate names are collapsed, keeping the first occurrence.
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut remaining: Vec<String> = Vec::new();
        for team in teams {
            let team = team.into();
            if !remaining.contains(&team) {
                remaining.push(team);
            }
        }
        Self {
            remaining,
            chosen: Vec::new(),
        }
    }

    /// Teams not yet chosen in the current cycle.
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    /// Teams already chosen in the current cycle, in draw order.
    pub fn chosen(&self) -> &[String] {
        &self.chosen
    }

    /// Draw one team using the thread-local RNG.
    pub fn draw(&mut self) -> Result<Draw, CoreError> {
        self.draw_with(&mut rand::rng())
    }

    /// Draw one team uniformly at random from the eligible pool.
    ///
    /// Refills the pool from the chosen teams first when it is empty.
    /// Fails with [`CoreError::EmptyRoster`] only when the picker holds no
    /// teams at all, in which case the state is left untouched.
    pub fn draw_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Draw, CoreError> {
        if self.remaining.is_empty() {
            self.remaining = std::mem::take(&mut self.chosen);
        }
        if self.remaining.is_empty() {
            return Err(CoreError::EmptyRoster);
        }

        let index = rng.random_range(0..self.remaining.len());
        let selected = self.remaining.remove(index);
        self.chosen.push(selected.clone());

        Ok(Draw {
            selected,
            remaining: self.remaining.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn default_picker() -> TeamPicker {
        TeamPicker::new(DEFAULT_TEAMS)
    }

    fn all_teams(picker: &TeamPicker) -> Vec<String> {
        let mut teams: Vec<String> = picker
            .remaining()
            .iter()
            .chain(picker.chosen())
            .cloned()
            .collect();
        teams.sort();
        teams
    }

    fn expected_teams() -> Vec<String> {
        let mut teams: Vec<String> = DEFAULT_TEAMS.iter().map(|t| t.to_string()).collect();
        teams.sort();
        teams
    }

    #[test]
    fn starts_with_everything_remaining() {
        let picker = default_picker();
        assert_eq!(picker.remaining(), DEFAULT_TEAMS);
        assert!(picker.chosen().is_empty());
    }

    #[test]
    fn new_collapses_duplicates() {
        let picker = TeamPicker::new(["Red", "Blue", "Red"]);
        assert_eq!(picker.remaining(), ["Red", "Blue"]);
    }

    #[test]
    fn draw_moves_one_team() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picker = default_picker();

        let draw = picker.draw_with(&mut rng).unwrap();

        assert_eq!(picker.remaining().len(), 3);
        assert_eq!(picker.chosen(), [draw.selected.clone()]);
        assert_eq!(draw.remaining, picker.remaining());
        assert!(!draw.remaining.contains(&draw.selected));
    }

    #[test]
    fn partition_holds_across_many_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut picker = default_picker();

        for _ in 0..50 {
            let before = picker.remaining().len();
            picker.draw_with(&mut rng).unwrap();
            assert_eq!(all_teams(&picker), expected_teams());
            if before > 0 {
                assert_eq!(picker.remaining().len(), before - 1);
            }
        }
    }

    #[test]
    fn full_cycle_returns_each_team_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut picker = default_picker();

        let drawn: BTreeSet<String> = (0..4)
            .map(|_| picker.draw_with(&mut rng).unwrap().selected)
            .collect();

        assert_eq!(drawn.len(), 4);
        assert_eq!(drawn.into_iter().collect::<Vec<_>>(), expected_teams());
        assert!(picker.remaining().is_empty());
        assert_eq!(picker.chosen().len(), 4);
    }

    #[test]
    fn fifth_draw_restarts_cycle() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut picker = default_picker();
        for _ in 0..4 {
            picker.draw_with(&mut rng).unwrap();
        }

        let draw = picker.draw_with(&mut rng).unwrap();

        assert!(DEFAULT_TEAMS.contains(&draw.selected.as_str()));
        assert_eq!(draw.remaining.len(), 3);
        assert_eq!(picker.chosen(), [draw.selected]);
        assert_eq!(all_teams(&picker), expected_teams());
    }

    #[test]
    fn single_team_is_drawn_every_time() {
        let mut picker = TeamPicker::new(["Solo"]);
        for _ in 0..3 {
            let draw = picker.draw().unwrap();
            assert_eq!(draw.selected, "Solo");
            assert!(draw.remaining.is_empty());
        }
    }

    #[test]
    fn empty_roster_is_an_error() {
        let mut picker = TeamPicker::new(Vec::<String>::new());
        assert_matches!(picker.draw(), Err(CoreError::EmptyRoster));
        assert!(picker.remaining().is_empty());
        assert!(picker.chosen().is_empty());
    }
}
