//! League detection: caller hint, keyword, or a vote among named teams.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::ParseError;
use crate::league_config::league_for_keyword;
use crate::matching::{AliasHit, Token};
use crate::models::League;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueSource {
    Hint,
    Keyword,
    /// Voted by the team names in the text
    Inferred,
}

/// Decide the league: caller hint, then an explicit keyword, then a vote
/// among the leagues owning the mentioned teams. A team counts once per
/// league no matter how often it is named.
pub fn detect_league(
    tokens: &[Token<'_>],
    hits: &[AliasHit],
    hint: Option<League>,
) -> Result<(League, LeagueSource), ParseError> {
    if let Some(league) = hint {
        return Ok((league, LeagueSource::Hint));
    }

    if let Some(league) = keyword_league(tokens) {
        debug!("league {} named explicitly", league);
        return Ok((league, LeagueSource::Keyword));
    }

    let teams: FxHashSet<(League, String)> = hits
        .iter()
        .flat_map(|hit| hit.entries.iter())
        .map(|e| (e.league, e.team.abbreviation.to_uppercase()))
        .collect();

    let mut votes: FxHashMap<League, usize> = FxHashMap::default();
    for (league, _) in &teams {
        *votes.entry(*league).or_default() += 1;
    }

    let mut tally: Vec<(League, usize)> = League::PRIORITY
        .iter()
        .filter_map(|l| votes.get(l).map(|n| (*l, *n)))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    debug!("league votes: {:?}", tally);

    match tally.as_slice() {
        [] => Err(ParseError::MissingLeague {
            reason: "no league keyword and no known team names".to_string(),
        }),
        [(top, n), (runner, m), ..] if n == m => Err(ParseError::MissingLeague {
            reason: format!("team names fit {} and {} equally well", top, runner),
        }),
        [(top, _), ..] => Ok((*top, LeagueSource::Inferred)),
    }
}

/// A league keyword as a single word or a two-word phrase ("puck line").
fn keyword_league(tokens: &[Token<'_>]) -> Option<League> {
    tokens.iter().enumerate().find_map(|(i, token)| {
        league_for_keyword(&token.norm).or_else(|| {
            let next = tokens.get(i + 1)?;
            league_for_keyword(&format!("{} {}", token.norm, next.norm))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{tokenize, AliasIndex};

    fn detect(text: &str) -> Result<(League, LeagueSource), ParseError> {
        let hits = AliasIndex::builtin().scan(text, None);
        detect_league(&tokenize(text), &hits, None)
    }

    #[test]
    fn test_hint_wins() {
        let hits = AliasIndex::builtin().scan("Lakers -3", None);
        let (league, source) =
            detect_league(&tokenize("Lakers -3"), &hits, Some(League::NHL)).unwrap();
        assert_eq!(league, League::NHL);
        assert_eq!(source, LeagueSource::Hint);
    }

    #[test]
    fn test_keyword() {
        assert_eq!(detect("NFL: Jets vs Giants -3").unwrap(), (League::NFL, LeagueSource::Keyword));
        assert_eq!(detect("hockey, Jets -1.5").unwrap().0, League::NHL);
        assert_eq!(detect("Jets puck line -1.5").unwrap().0, League::NHL);
    }

    #[test]
    fn test_inferred_by_votes() {
        assert_eq!(detect("Bills at Chiefs +3").unwrap(), (League::NFL, LeagueSource::Inferred));
        // "Kings" is NBA and NHL, "Ducks" settles it
        assert_eq!(detect("Kings vs Ducks -1.5").unwrap().0, League::NHL);
        assert_eq!(detect("Panthers vs Lightning -1.5").unwrap().0, League::NHL);
    }

    #[test]
    fn test_mixed_leagues_fail() {
        let err = detect("Lakers vs Chiefs -3").unwrap_err();
        assert_eq!(err.kind(), "missing-league");
    }

    #[test]
    fn test_repeated_team_votes_once() {
        let err = detect("Lakers vs Chiefs, I'm taking the Lakers -3").unwrap_err();
        assert_eq!(err.kind(), "missing-league");
        assert_eq!(
            detect("Habs @ Leafs, I like the Habs +1.5").unwrap().0,
            League::NHL
        );
    }

    #[test]
    fn test_no_teams_fail() {
        let err = detect("take the over tonight").unwrap_err();
        assert_eq!(err.kind(), "missing-league");
    }
}
