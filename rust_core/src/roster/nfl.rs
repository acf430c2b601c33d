use super::TeamSeed;

pub static NFL_TEAMS: &[TeamSeed] = &[
    TeamSeed::new(
        "Cardinals",
        "Arizona",
        "ARI",
        "State Farm Stadium",
        "Glendale",
        &["cards", "zona"],
    ),
    TeamSeed::new(
        "Falcons",
        "Atlanta",
        "ATL",
        "Mercedes-Benz Stadium",
        "Atlanta",
        &["dirty birds"],
    ),
    TeamSeed::new("Ravens", "Baltimore", "BAL", "M&T Bank Stadium", "Baltimore", &[]),
    TeamSeed::new("Bills", "Buffalo", "BUF", "Highmark Stadium", "Orchard Park", &[]),
    TeamSeed::new(
        "Panthers",
        "Carolina",
        "CAR",
        "Bank of America Stadium",
        "Charlotte",
        &[],
    ),
    TeamSeed::new("Bears", "Chicago", "CHI", "Soldier Field", "Chicago", &["da bears"]),
    TeamSeed::new("Bengals", "Cincinnati", "CIN", "Paycor Stadium", "Cincinnati", &["cincy"]),
    TeamSeed::new(
        "Browns",
        "Cleveland",
        "CLE",
        "Huntington Bank Field",
        "Cleveland",
        &[],
    ),
    TeamSeed::new(
        "Cowboys",
        "Dallas",
        "DAL",
        "AT&T Stadium",
        "Arlington",
        &["americas team"],
    ),
    TeamSeed::new("Broncos", "Denver", "DEN", "Empower Field", "Denver", &["mile high"]),
    TeamSeed::new("Lions", "Detroit", "DET", "Ford Field", "Detroit", &[]),
    TeamSeed::new("Packers", "Green Bay", "GB", "Lambeau Field", "Green Bay", &["pack"]),
    TeamSeed::new("Texans", "Houston", "HOU", "NRG Stadium", "Houston", &[]),
    TeamSeed::new(
        "Colts",
        "Indianapolis",
        "IND",
        "Lucas Oil Stadium",
        "Indianapolis",
        &["indy"],
    ),
    TeamSeed::new(
        "Jaguars",
        "Jacksonville",
        "JAX",
        "EverBank Stadium",
        "Jacksonville",
        &["jags", "jax jaguars"],
    ),
    TeamSeed::new("Chiefs", "Kansas City", "KC", "Arrowhead Stadium", "Kansas City", &[]),
    TeamSeed::new(
        "Raiders",
        "Las Vegas",
        "LV",
        "Allegiant Stadium",
        "Las Vegas",
        &["vegas"],
    ),
    TeamSeed::new(
        "Chargers",
        "Los Angeles",
        "LAC",
        "SoFi Stadium",
        "Inglewood",
        &["bolts", "la", "la chargers"],
    ),
    TeamSeed::new(
        "Rams",
        "Los Angeles",
        "LAR",
        "SoFi Stadium",
        "Inglewood",
        &["la", "la rams"],
    ),
    TeamSeed::new(
        "Dolphins",
        "Miami",
        "MIA",
        "Hard Rock Stadium",
        "Miami Gardens",
        &["fins", "phins"],
    ),
    TeamSeed::new(
        "Vikings",
        "Minnesota",
        "MIN",
        "U.S. Bank Stadium",
        "Minneapolis",
        &["vikes"],
    ),
    TeamSeed::new(
        "Patriots",
        "New England",
        "NE",
        "Gillette Stadium",
        "Foxborough",
        &["pats"],
    ),
    TeamSeed::new(
        "Saints",
        "New Orleans",
        "NO",
        "Caesars Superdome",
        "New Orleans",
        &["nola"],
    ),
    TeamSeed::new(
        "Giants",
        "New York",
        "NYG",
        "MetLife Stadium",
        "East Rutherford",
        &["ny", "ny giants", "big blue"],
    ),
    TeamSeed::new(
        "Jets",
        "New York",
        "NYJ",
        "MetLife Stadium",
        "East Rutherford",
        &["ny", "ny jets", "gang green"],
    ),
    TeamSeed::new(
        "Eagles",
        "Philadelphia",
        "PHI",
        "Lincoln Financial Field",
        "Philadelphia",
        &["philly", "birds", "the linc"],
    ),
    TeamSeed::new("Steelers", "Pittsburgh", "PIT", "Acrisure Stadium", "Pittsburgh", &[]),
    TeamSeed::new(
        "49ers",
        "San Francisco",
        "SF",
        "Levi's Stadium",
        "Santa Clara",
        &["niners", "forty niners"],
    ),
    TeamSeed::new("Seahawks", "Seattle", "SEA", "Lumen Field", "Seattle", &[]),
    TeamSeed::new(
        "Buccaneers",
        "Tampa Bay",
        "TB",
        "Raymond James Stadium",
        "Tampa",
        &["bucs"],
    ),
    TeamSeed::new("Titans", "Tennessee", "TEN", "Nissan Stadium", "Nashville", &[]),
    TeamSeed::new(
        "Commanders",
        "Washington",
        "WAS",
        "Northwest Stadium",
        "Landover",
        &[],
    ),
];
