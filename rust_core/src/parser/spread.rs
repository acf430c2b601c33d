//! Point spread extraction and attachment.

use regex::{Captures, Regex};
use tracing::debug;

use super::teams::TeamPair;
use super::{Side, Span};

pub const MIN_SPREAD: f64 = 0.5;
pub const MAX_SPREAD: f64 = 50.0;

/// Words allowed between a team and a spread phrase ("Chiefs are 3 point favorites").
const PHRASE_FILLERS: &[&str] = &["are", "is", "as", "the", "a", "an", "being"];

const SPELLED_NUMBERS: &[(&str, f64)] = &[
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadForm {
    /// "+3.5", "-7 pts"
    Signed,
    /// "favored by 3", "3 point favorite"
    Favorite,
    /// "3 point underdog", "underdogs by 3"
    Underdog,
    /// "minus three and a half"
    Spelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadMention {
    /// Value as written, for whichever team it was written next to
    pub value: f64,
    pub span: Span,
    pub form: SpreadForm,
}

fn signed() -> &'static Regex {
    static_regex!(r"(?i)(?:^|[\s(\[])([+\-\x{2212}])\s?(\d{1,3}(?:\.\d+)?)(\s?½)?(?:\s?(?:points?|pts?)\b)?")
}

fn favored_by() -> &'static Regex {
    static_regex!(r"(?i)\bfavou?red\s+by\s+(\d{1,2}(?:\.\d+)?)(\s?½)?(?:\s*(?:points?|pts?)\b)?")
}

fn favorite() -> &'static Regex {
    static_regex!(r"(?i)\b(\d{1,2}(?:\.\d+)?)(\s?½)?(?:[\s-]*(?:points?|pts?))?[\s-]*favou?rites?\b")
}

fn underdog() -> &'static Regex {
    static_regex!(r"(?i)\b(\d{1,2}(?:\.\d+)?)(\s?½)?(?:[\s-]*(?:points?|pts?))?[\s-]*(?:under)?dogs?\b")
}

fn underdog_by() -> &'static Regex {
    static_regex!(r"(?i)\b(?:under)?dogs?\s+by\s+(\d{1,2}(?:\.\d+)?)(\s?½)?(?:\s*(?:points?|pts?)\b)?")
}

fn spelled() -> &'static Regex {
    static_regex!(r"(?i)\b(minus|plus)\s+(one|two|three|four|five|six|seven)(\s+and\s+a\s+half)?(?:\s+points?)?\b")
}

fn in_range(value: f64) -> bool {
    (MIN_SPREAD..=MAX_SPREAD).contains(&value.abs())
}

fn magnitude(caps: &Captures<'_>) -> Option<f64> {
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    let half = if caps.get(2).is_some() { 0.5 } else { 0.0 };
    Some(number + half)
}

/// Locate the spread. Signed numbers take priority over favorite phrasing,
/// then underdog phrasing, then spelled-out numbers.
pub fn find_spread(text: &str) -> Option<SpreadMention> {
    let found = signed_number(text)
        .or_else(|| earliest_phrase(text, &[favored_by(), favorite()], -1.0, SpreadForm::Favorite))
        .or_else(|| earliest_phrase(text, &[underdog(), underdog_by()], 1.0, SpreadForm::Underdog))
        .or_else(|| spelled_out(text));

    if let Some(mention) = &found {
        debug!(
            "spread {:+} ({:?}) at {}..{}",
            mention.value, mention.form, mention.span.start, mention.span.end
        );
    }
    found
}

fn signed_number(text: &str) -> Option<SpreadMention> {
    signed().captures_iter(text).find_map(|caps| {
        let sign_match = caps.get(1)?;
        let sign = if sign_match.as_str() == "+" { 1.0 } else { -1.0 };
        let number: f64 = caps.get(2)?.as_str().parse().ok()?;
        let half = if caps.get(3).is_some() { 0.5 } else { 0.0 };
        let value = sign * (number + half);
        let end = caps.get(0)?.end();

        in_range(value).then(|| SpreadMention {
            value,
            span: Span::new(sign_match.start(), end),
            form: SpreadForm::Signed,
        })
    })
}

fn earliest_phrase(
    text: &str,
    patterns: &[&Regex],
    sign: f64,
    form: SpreadForm,
) -> Option<SpreadMention> {
    patterns
        .iter()
        .filter_map(|re| {
            re.captures_iter(text).find_map(|caps| {
                let value = sign * magnitude(&caps)?;
                let whole = caps.get(0)?;
                in_range(value).then(|| SpreadMention {
                    value,
                    span: Span::new(whole.start(), whole.end()),
                    form,
                })
            })
        })
        .min_by_key(|m| m.span.start)
}

fn spelled_out(text: &str) -> Option<SpreadMention> {
    let caps = spelled().captures(text)?;
    let sign = if caps[1].eq_ignore_ascii_case("plus") { 1.0 } else { -1.0 };
    let number = SPELLED_NUMBERS
        .iter()
        .find(|(word, _)| caps[2].eq_ignore_ascii_case(word))
        .map(|(_, n)| *n)?;
    let half = if caps.get(3).is_some() { 0.5 } else { 0.0 };
    let whole = caps.get(0)?;

    Some(SpreadMention {
        value: sign * (number + half),
        span: Span::new(whole.start(), whole.end()),
        form: SpreadForm::Spelled,
    })
}

/// The team the spread was written next to, if any. A mention directly to
/// the left wins over one directly to the right.
pub fn attached_side(text: &str, mention: &SpreadMention, pair: &TeamPair) -> Option<Side> {
    let fillers_allowed = mention.form != SpreadForm::Signed;
    let sides = [Side::First, Side::Second];

    let left = sides
        .iter()
        .flat_map(|&side| pair.spans(side).iter().map(move |span| (side, *span)))
        .filter(|(_, span)| span.end <= mention.span.start)
        .filter(|(_, span)| is_adjacent(&text[span.end..mention.span.start], fillers_allowed))
        .min_by_key(|(_, span)| mention.span.start - span.end);
    if let Some((side, _)) = left {
        return Some(side);
    }

    sides
        .iter()
        .flat_map(|&side| pair.spans(side).iter().map(move |span| (side, *span)))
        .filter(|(_, span)| span.start >= mention.span.end)
        .filter(|(_, span)| is_adjacent(&text[mention.span.end..span.start], fillers_allowed))
        .min_by_key(|(_, span)| span.start - mention.span.end)
        .map(|(side, _)| side)
}

fn is_adjacent(gap: &str, fillers_allowed: bool) -> bool {
    if gap.contains('\n') {
        return false;
    }
    gap.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .all(|w| fillers_allowed && PHRASE_FILLERS.contains(&w.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> Option<f64> {
        find_spread(text).map(|m| m.value)
    }

    // ------------------------------------------------------------------------
    // Signed numbers
    // ------------------------------------------------------------------------

    #[test]
    fn test_signed_spread() {
        assert_eq!(value("Chiefs -3.5 vs Bills"), Some(-3.5));
        assert_eq!(value("Bills +7 at Chiefs"), Some(7.0));
        assert_eq!(value("Bills \u{2212}2.5"), Some(-2.5));
        assert_eq!(value("Bills +3½"), Some(3.5));
        assert_eq!(value("Bills + 6 points"), Some(6.0));
    }

    #[test]
    fn test_signed_spread_span_covers_points() {
        let text = "Bills +6 pts tonight";
        let m = find_spread(text).unwrap();
        assert_eq!(&text[m.span.start..m.span.end], "+6 pts");
    }

    #[test]
    fn test_scores_and_odds_are_not_spreads() {
        assert_eq!(value("Bills won 24-17 last time"), None);
        assert_eq!(value("odds -110"), None);
        assert_eq!(value("the 2024-25 season, Bills +2"), Some(2.0));
        assert_eq!(value("Bills +0"), None);
        assert_eq!(value("Bills -75"), None);
    }

    #[test]
    fn test_hyphenated_words_are_not_spreads() {
        assert_eq!(value("Celtics vs Heat game-7, Celtics -4.5"), Some(-4.5));
        assert_eq!(value("Bills vs Chiefs week-3, Bills +2"), Some(2.0));
        assert_eq!(value("Bills (+2.5) at Chiefs"), Some(2.5));
        assert_eq!(value("round-2 rematch"), None);
    }

    // ------------------------------------------------------------------------
    // Phrases
    // ------------------------------------------------------------------------

    #[test]
    fn test_favorite_phrases() {
        assert_eq!(value("Chiefs are favored by 3"), Some(-3.0));
        assert_eq!(value("Chiefs are 3.5 point favorites"), Some(-3.5));
        assert_eq!(value("the Celtics as a 6-point favorite"), Some(-6.0));
    }

    #[test]
    fn test_underdog_phrases() {
        assert_eq!(value("Bills are 4 point underdogs"), Some(4.0));
        assert_eq!(value("Bills underdogs by 2.5"), Some(2.5));
    }

    #[test]
    fn test_signed_beats_phrase() {
        assert_eq!(value("Chiefs favored by 3, I'm on Bills +3"), Some(3.0));
    }

    #[test]
    fn test_spelled_out() {
        assert_eq!(value("Lakers minus three"), Some(-3.0));
        assert_eq!(value("Lakers plus seven and a half"), Some(7.5));
        assert_eq!(value("Lakers plus a lot"), None);
        assert_eq!(value("Chiefs minus ten"), None);
        assert_eq!(value("Chiefs plus eight and a half"), None);
    }
}
