//! Venue inference, always from the pick team's point of view.
//!
//! Evidence is tried in order and the first hit wins:
//! 1. neutral-site phrasing
//! 2. the "A at B" structure (A away, B home)
//! 3. "at/in/@ <place>" naming one team's home city, venue or city
//! 4. home/away/road/hosting words near a team mention
//! 5. "in <alias>" naming one team
//!
//! Without evidence the game is assumed neutral.

use regex::Regex;
use tracing::debug;

use super::teams::{Connector, TeamPair};
use super::{Side, Span};
use crate::matching::{contains_phrase, normalize, AliasHit};
use crate::models::Venue;

/// Shortest place phrase allowed to match inside a longer venue or city name.
const MIN_PARTIAL_PLACE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueCall {
    pub venue: Venue,
    /// No evidence in the text; neutral was assumed
    pub assumed: bool,
}

impl VenueCall {
    fn stated(venue: Venue) -> Self {
        Self {
            venue,
            assumed: false,
        }
    }

    /// The pick's venue given which side is at home.
    fn home_side(home: Side, pick: Side) -> Self {
        Self::stated(if home == pick { Venue::Home } else { Venue::Away })
    }
}

fn neutral_phrase() -> &'static Regex {
    static_regex!(r"(?i)\bneutral\b")
}

fn place_phrase() -> &'static Regex {
    static_regex!(
        r"(?i)(?:\b(?:at|in)\s+|@\s*)((?:the\s+)?[[:alpha:]][\w'’.&-]*(?:\s+[[:alnum:]][\w'’.&-]*){0,3})"
    )
}

fn venue_word() -> &'static Regex {
    static_regex!(r"(?i)\b(home|hosting|hosts?|away|road|visiting|visitors?)\b")
}

fn in_phrase() -> &'static Regex {
    static_regex!(r"(?i)\bin\s+")
}

pub fn infer_venue(
    text: &str,
    pair: &TeamPair,
    pick: Side,
    hits: &[AliasHit],
    window: usize,
) -> VenueCall {
    if neutral_phrase().is_match(text) {
        debug!("venue: neutral site stated");
        return VenueCall::stated(Venue::Neutral);
    }

    if pair.connector == Some(Connector::At) {
        debug!("venue: {} is at home by structure", pair.second.team.name);
        return VenueCall::home_side(Side::Second, pick);
    }

    if let Some(home) = home_by_place(text, pair) {
        debug!("venue: place names {}", pair.team(home).team.name);
        return VenueCall::home_side(home, pick);
    }

    if let Some(venue) = venue_by_word(text, pair, pick, window) {
        debug!("venue: {} by nearby wording", venue);
        return VenueCall::stated(venue);
    }

    if let Some(home) = home_by_alias(text, pair, hits) {
        debug!("venue: \"in\" names {}", pair.team(home).team.name);
        return VenueCall::home_side(home, pick);
    }

    VenueCall {
        venue: Venue::Neutral,
        assumed: true,
    }
}

fn place_matches(place: &str, field: &str) -> bool {
    !field.is_empty()
        && (place == field
            || contains_phrase(place, field)
            || (place.len() >= MIN_PARTIAL_PLACE_LEN && contains_phrase(field, place)))
}

/// A place phrase that matches exactly one team's home city, venue or city.
fn home_by_place(text: &str, pair: &TeamPair) -> Option<Side> {
    let fields = |side: Side| {
        let team = &pair.team(side).team;
        [
            normalize(&team.home_city),
            normalize(&team.venue),
            normalize(&team.city),
        ]
    };
    let first = fields(Side::First);
    let second = fields(Side::Second);

    for caps in place_phrase().captures_iter(text) {
        let Some(place) = caps.get(1) else { continue };
        let normalized = normalize(place.as_str());
        let mut words: Vec<&str> = normalized.split_whitespace().collect();
        if words.first() == Some(&"the") {
            words.remove(0);
        }

        // Longest prefix first so "Kansas City tonight" still finds "kansas city"
        for n in (1..=words.len()).rev() {
            let candidate = words[..n].join(" ");
            let a = first.iter().any(|f| place_matches(&candidate, f));
            let b = second.iter().any(|f| place_matches(&candidate, f));
            match (a, b) {
                (true, false) => return Some(Side::First),
                (false, true) => return Some(Side::Second),
                (true, true) => break,
                (false, false) => {}
            }
        }
    }
    None
}

fn distance(a: Span, b: Span) -> usize {
    if a.end <= b.start {
        b.start - a.end
    } else if b.end <= a.start {
        a.start - b.end
    } else {
        0
    }
}

/// Home/away wording attaches to the closest team mention within `window`.
fn venue_by_word(text: &str, pair: &TeamPair, pick: Side, window: usize) -> Option<Venue> {
    let nearest = |word: Span, side: Side| {
        pair.spans(side)
            .iter()
            .map(|s| distance(word, *s))
            .min()
            .unwrap_or(usize::MAX)
    };

    for m in venue_word().find_iter(text) {
        let venue = match m.as_str().to_lowercase().as_str() {
            "home" | "hosting" | "host" | "hosts" => Venue::Home,
            _ => Venue::Away,
        };
        let word = Span::new(m.start(), m.end());
        let to_pick = nearest(word, pick);
        let to_opponent = nearest(word, pick.other());

        if to_pick <= window && to_pick <= to_opponent {
            return Some(venue);
        }
        if to_opponent <= window {
            return Some(venue.flipped());
        }
    }
    None
}

/// "in Philly": an alias right after "in" that names only one of the teams.
fn home_by_alias(text: &str, pair: &TeamPair, hits: &[AliasHit]) -> Option<Side> {
    in_phrase().find_iter(text).find_map(|m| {
        let hit = hits.iter().find(|h| h.start == m.end())?;
        match (hit.names(&pair.first.team), hit.names(&pair.second.team)) {
            (true, false) => Some(Side::First),
            (false, true) => Some(Side::Second),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{tokenize, AliasIndex, TeamResolver};
    use crate::models::League;
    use crate::parser::teams::extract_teams;

    /// Venue for the first-listed team.
    fn venue(text: &str, league: League) -> VenueCall {
        let hits = AliasIndex::builtin().scan(text, Some(league));
        let pair = extract_teams(&tokenize(text), &hits, &TeamResolver::builtin(), league)
            .unwrap();
        infer_venue(text, &pair, Side::First, &hits, 30)
    }

    #[test]
    fn test_neutral_phrase() {
        let call = venue("Bills at Chiefs -3, neutral site", League::NFL);
        assert_eq!(call, VenueCall::stated(Venue::Neutral));
    }

    #[test]
    fn test_at_structure() {
        assert_eq!(venue("Bills at Chiefs +3", League::NFL).venue, Venue::Away);
        assert_eq!(venue("Bills @ Chiefs +3", League::NFL).venue, Venue::Away);
    }

    #[test]
    fn test_place_names_home_city() {
        let call = venue("Bills vs Chiefs +3 in Kansas City tonight", League::NFL);
        assert_eq!(call, VenueCall::stated(Venue::Away));
        let call = venue("Bills vs Chiefs +3 at Highmark Stadium", League::NFL);
        assert_eq!(call.venue, Venue::Home);
        let call = venue("Bills vs Chiefs +3 at Arrowhead", League::NFL);
        assert_eq!(call.venue, Venue::Away);
    }

    #[test]
    fn test_shared_stadium_is_no_evidence() {
        let call = venue("Jets vs Giants +3 at MetLife Stadium", League::NFL);
        assert!(call.assumed);
    }

    #[test]
    fn test_home_word_near_team() {
        let call = venue("Chiefs -3.5 vs Bills, Chiefs at home", League::NFL);
        assert_eq!(call.venue, Venue::Home);
        let call = venue("Chiefs vs Bills -3, Bills on the road", League::NFL);
        assert_eq!(call.venue, Venue::Home);
    }

    #[test]
    fn test_home_word_nearer_opponent_is_inverted() {
        let call = venue("Chiefs vs Bills -3, Bills at home", League::NFL);
        assert_eq!(call, VenueCall::stated(Venue::Away));
    }

    #[test]
    fn test_home_word_outside_window_is_ignored() {
        let call = venue(
            "Chiefs vs Bills -3, weather looks great for the game this weekend at home",
            League::NFL,
        );
        assert!(call.assumed);
        assert_eq!(call.venue, Venue::Neutral);

        // Falls through to the "in <alias>" rule
        let call = venue(
            "Eagles vs Cowboys -2 in Philly, tickets were bought many weeks ago for the road trip",
            League::NFL,
        );
        assert_eq!(call, VenueCall::stated(Venue::Home));
    }

    #[test]
    fn test_window_is_configurable() {
        let text = "Chiefs -3.5 vs Bills, Chiefs at home";
        let hits = AliasIndex::builtin().scan(text, Some(League::NFL));
        let pair = extract_teams(&tokenize(text), &hits, &TeamResolver::builtin(), League::NFL)
            .unwrap();
        assert_eq!(infer_venue(text, &pair, Side::First, &hits, 30).venue, Venue::Home);
        assert!(infer_venue(text, &pair, Side::First, &hits, 2).assumed);
    }

    #[test]
    fn test_in_alias() {
        let call = venue("Eagles vs Cowboys -2 in Philly", League::NFL);
        assert_eq!(call.venue, Venue::Home);
    }

    #[test]
    fn test_default_neutral_assumed() {
        let call = venue("Chiefs vs Bills -3", League::NFL);
        assert_eq!(
            call,
            VenueCall {
                venue: Venue::Neutral,
                assumed: true
            }
        );
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Span::new(0, 4), Span::new(6, 9)), 2);
        assert_eq!(distance(Span::new(6, 9), Span::new(0, 4)), 2);
        assert_eq!(distance(Span::new(0, 9), Span::new(3, 4)), 0);
    }
}
