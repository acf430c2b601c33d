//! American odds extraction.

use regex::Regex;

use super::Span;

/// American odds below this magnitude do not exist.
pub const MIN_ODDS_MAGNITUDE: i32 = 100;

/// The price callers conventionally assume when none is given.
pub const DEFAULT_ODDS: i32 = -110;

fn labeled_odds() -> &'static Regex {
    static_regex!(r"(?i)(?:\bodds\b(?:\s+of)?|\bat\b|@)\s*:?\s*([+\-\x{2212}]\d{3,4})\b")
}

fn bare_odds() -> &'static Regex {
    static_regex!(r"(?:^|[^\w.])([+\-\x{2212}]\d{3})\b")
}

fn parse_odds(raw: &str) -> Option<i32> {
    raw.replace('\u{2212}', "-")
        .parse::<i32>()
        .ok()
        .filter(|n| n.abs() >= MIN_ODDS_MAGNITUDE)
}

/// American odds after "odds"/"at"/"@", else a lone signed three-digit
/// number that is not part of the spread.
pub fn find_odds(text: &str, spread: Span) -> Option<i32> {
    let labeled = labeled_odds()
        .captures_iter(text)
        .find_map(|caps| parse_odds(caps.get(1)?.as_str()));
    if labeled.is_some() {
        return labeled;
    }

    bare_odds().captures_iter(text).find_map(|caps| {
        let number = caps.get(1)?;
        let overlaps = number.start() < spread.end && spread.start < number.end();
        if overlaps {
            return None;
        }
        parse_odds(number.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(text: &str) -> Option<i32> {
        find_odds(text, Span::new(0, 0))
    }

    #[test]
    fn test_labeled_odds() {
        assert_eq!(odds("Chiefs -3.5, odds -110"), Some(-110));
        assert_eq!(odds("Chiefs -3.5 odds: +105"), Some(105));
        assert_eq!(odds("Chiefs -3.5 at -115"), Some(-115));
        assert_eq!(odds("Chiefs -3.5 @ +1200"), Some(1200));
        assert_eq!(odds("Chiefs -3.5, odds of \u{2212}120"), Some(-120));
    }

    #[test]
    fn test_bare_odds() {
        assert_eq!(odds("Chiefs -3.5 -110"), Some(-110));
        assert_eq!(odds("Chiefs -3.5 (+150)"), Some(150));
    }

    #[test]
    fn test_bare_odds_skip_spread() {
        let text = "Chiefs -110 something";
        assert_eq!(find_odds(text, Span::new(7, 11)), None);
    }

    #[test]
    fn test_small_numbers_are_not_odds() {
        assert_eq!(odds("Chiefs -3.5"), None);
        assert_eq!(odds("Chiefs -3.5, odds -099"), None);
        assert_eq!(odds("Chiefs at 2024"), None);
    }
}
