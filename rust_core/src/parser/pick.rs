//! Explicit pick phrasing ("taking X", "my pick is X").

use regex::Regex;
use tracing::debug;

use super::teams::TeamPair;
use super::Side;

fn pick_phrase() -> &'static Regex {
    static_regex!(
        r"(?i)\b(?:i[’']?m\s+taking|i\s+am\s+taking|i[’']ll\s+take|my\s+pick\s+is|betting\s+on|bet\s+on|going\s+with|taking|take|backing|riding|hammering|i\s+(?:like|want|choose|pick|love))\b"
    )
}

/// The team named right after an explicit pick phrase ("I'm taking X").
/// The team mention must start within `window` bytes of the phrase.
pub fn explicit_pick(text: &str, pair: &TeamPair, window: usize) -> Option<Side> {
    for phrase in pick_phrase().find_iter(text) {
        let limit = phrase.end() + window;
        let named = [Side::First, Side::Second]
            .into_iter()
            .flat_map(|side| pair.spans(side).iter().map(move |span| (side, span.start)))
            .filter(|(_, start)| *start >= phrase.end() && *start <= limit)
            .min_by_key(|(_, start)| *start);

        if let Some((side, _)) = named {
            debug!(
                "pick phrase {:?} names {}",
                phrase.as_str(),
                pair.team(side).team.name
            );
            return Some(side);
        }
    }
    None
}
