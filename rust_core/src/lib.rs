//! Spreadline Core - team alias resolution and spread matchup parsing.
//!
//! This crate provides:
//! - A built-in NFL/NBA/NHL roster with JSON override support
//! - A normalized alias index shared across threads
//! - Confidence-scored team resolution (exact, contains, fuzzy)
//! - A staged parser that turns one sentence into a `ParsedMatchup`
//! - Structural validation of parsed or hand-built matchups
//! - Parallel batch parsing via rayon

pub mod league_config;
pub mod matching;
pub mod models;
pub mod parser;
pub mod roster;
pub mod validator;

pub use matching::{AliasIndex, ResolveError, ResolverConfig, TeamResolver};
pub use models::{
    ClarificationField, League, MatchKind, MatchupDraft, ParsedMatchup, ResolvedTeam, TeamRecord,
    Venue,
};
pub use parser::{parse, MatchupParser, ParseError, ParserConfig, ParsingResult};
pub use roster::{Roster, RosterError};
pub use validator::{validate, ValidationError, ValidationReport};
