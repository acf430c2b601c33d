use super::TeamSeed;

/// Format: name, city, abbreviation, venue, home city, curated aliases.
/// City, abbreviation and "<city> <name>" are indexed automatically.
pub static NBA_TEAMS: &[TeamSeed] = &[
    TeamSeed::new("Hawks", "Atlanta", "ATL", "State Farm Arena", "Atlanta", &[]),
    TeamSeed::new("Celtics", "Boston", "BOS", "TD Garden", "Boston", &["celts"]),
    TeamSeed::new("Nets", "Brooklyn", "BKN", "Barclays Center", "Brooklyn", &["bklyn nets"]),
    TeamSeed::new("Hornets", "Charlotte", "CHA", "Spectrum Center", "Charlotte", &[]),
    TeamSeed::new("Bulls", "Chicago", "CHI", "United Center", "Chicago", &[]),
    TeamSeed::new(
        "Cavaliers",
        "Cleveland",
        "CLE",
        "Rocket Mortgage FieldHouse",
        "Cleveland",
        &["cavs"],
    ),
    TeamSeed::new(
        "Mavericks",
        "Dallas",
        "DAL",
        "American Airlines Center",
        "Dallas",
        &["mavs"],
    ),
    TeamSeed::new("Nuggets", "Denver", "DEN", "Ball Arena", "Denver", &["nugs"]),
    TeamSeed::new("Pistons", "Detroit", "DET", "Little Caesars Arena", "Detroit", &[]),
    TeamSeed::new(
        "Warriors",
        "Golden State",
        "GSW",
        "Chase Center",
        "San Francisco",
        &["dubs", "golden st"],
    ),
    TeamSeed::new("Rockets", "Houston", "HOU", "Toyota Center", "Houston", &[]),
    TeamSeed::new(
        "Pacers",
        "Indiana",
        "IND",
        "Gainbridge Fieldhouse",
        "Indianapolis",
        &["indy"],
    ),
    TeamSeed::new(
        "Clippers",
        "Los Angeles",
        "LAC",
        "Intuit Dome",
        "Inglewood",
        &["clips", "la", "la clippers"],
    ),
    TeamSeed::new(
        "Lakers",
        "Los Angeles",
        "LAL",
        "Crypto.com Arena",
        "Los Angeles",
        &["la", "la lakers", "lake show"],
    ),
    TeamSeed::new("Grizzlies", "Memphis", "MEM", "FedExForum", "Memphis", &["grizz"]),
    TeamSeed::new("Heat", "Miami", "MIA", "Kaseya Center", "Miami", &[]),
    TeamSeed::new("Bucks", "Milwaukee", "MIL", "Fiserv Forum", "Milwaukee", &[]),
    TeamSeed::new(
        "Timberwolves",
        "Minnesota",
        "MIN",
        "Target Center",
        "Minneapolis",
        &["wolves", "t wolves", "twolves"],
    ),
    TeamSeed::new(
        "Pelicans",
        "New Orleans",
        "NOP",
        "Smoothie King Center",
        "New Orleans",
        &["pels", "nola"],
    ),
    TeamSeed::new(
        "Knicks",
        "New York",
        "NYK",
        "Madison Square Garden",
        "New York",
        &["ny", "ny knicks"],
    ),
    TeamSeed::new("Thunder", "Oklahoma City", "OKC", "Paycom Center", "Oklahoma City", &[]),
    TeamSeed::new("Magic", "Orlando", "ORL", "Kia Center", "Orlando", &[]),
    TeamSeed::new(
        "76ers",
        "Philadelphia",
        "PHI",
        "Xfinity Mobile Arena",
        "Philadelphia",
        &["sixers", "philly", "philly sixers"],
    ),
    TeamSeed::new("Suns", "Phoenix", "PHX", "Mortgage Matchup Center", "Phoenix", &[]),
    TeamSeed::new(
        "Trail Blazers",
        "Portland",
        "POR",
        "Moda Center",
        "Portland",
        &["blazers", "rip city"],
    ),
    TeamSeed::new("Kings", "Sacramento", "SAC", "Golden 1 Center", "Sacramento", &["sac kings"]),
    TeamSeed::new("Spurs", "San Antonio", "SAS", "Frost Bank Center", "San Antonio", &[]),
    TeamSeed::new("Raptors", "Toronto", "TOR", "Scotiabank Arena", "Toronto", &["raps"]),
    TeamSeed::new("Jazz", "Utah", "UTA", "Delta Center", "Salt Lake City", &[]),
    TeamSeed::new(
        "Wizards",
        "Washington",
        "WAS",
        "Capital One Arena",
        "Washington",
        &["wiz"],
    ),
];
