//! Structural checks on a matchup before anything downstream consumes it.

use serde::Serialize;
use thiserror::Error;

use crate::models::{League, MatchupDraft};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("league is missing")]
    MissingLeague,
    #[error("pick team is missing")]
    MissingPickTeam,
    #[error("opponent team is missing")]
    MissingOpponent,
    #[error("spread is missing")]
    MissingSpread,
    #[error("spread is not a finite number")]
    NonFiniteSpread,
    #[error("pick and opponent are the same team ({team})")]
    SameTeam { team: String },
    #[error("{team} plays in {team_league}, not {league}")]
    LeagueMismatch {
        team: String,
        team_league: League,
        league: League,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn validate(draft: &MatchupDraft) -> ValidationReport {
    let mut errors = Vec::new();

    if draft.league.is_none() {
        errors.push(ValidationError::MissingLeague);
    }
    if draft.pick_team.is_none() {
        errors.push(ValidationError::MissingPickTeam);
    }
    if draft.opponent_team.is_none() {
        errors.push(ValidationError::MissingOpponent);
    }
    match draft.spread {
        None => errors.push(ValidationError::MissingSpread),
        Some(spread) if !spread.is_finite() => errors.push(ValidationError::NonFiniteSpread),
        Some(_) => {}
    }

    if let (Some(pick), Some(opponent)) = (&draft.pick_team, &draft.opponent_team) {
        if pick.is_same_team(opponent) {
            errors.push(ValidationError::SameTeam {
                team: pick.full_name(),
            });
        }
    }

    if let Some(league) = draft.league {
        for team in [&draft.pick_team, &draft.opponent_team].into_iter().flatten() {
            if team.league != league {
                errors.push(ValidationError::LeagueMismatch {
                    team: team.full_name(),
                    team_league: team.league,
                    league,
                });
            }
        }
    }

    ValidationReport::from_errors(errors)
}
