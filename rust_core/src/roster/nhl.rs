use super::TeamSeed;

pub static NHL_TEAMS: &[TeamSeed] = &[
    TeamSeed::new("Ducks", "Anaheim", "ANA", "Honda Center", "Anaheim", &[]),
    TeamSeed::new("Bruins", "Boston", "BOS", "TD Garden", "Boston", &[]),
    TeamSeed::new("Sabres", "Buffalo", "BUF", "KeyBank Center", "Buffalo", &[]),
    TeamSeed::new(
        "Flames",
        "Calgary",
        "CGY",
        "Scotiabank Saddledome",
        "Calgary",
        &[],
    ),
    TeamSeed::new("Hurricanes", "Carolina", "CAR", "Lenovo Center", "Raleigh", &["canes"]),
    TeamSeed::new("Blackhawks", "Chicago", "CHI", "United Center", "Chicago", &[]),
    TeamSeed::new("Avalanche", "Colorado", "COL", "Ball Arena", "Denver", &["avs"]),
    TeamSeed::new(
        "Blue Jackets",
        "Columbus",
        "CBJ",
        "Nationwide Arena",
        "Columbus",
        &["jackets"],
    ),
    TeamSeed::new("Stars", "Dallas", "DAL", "American Airlines Center", "Dallas", &[]),
    TeamSeed::new(
        "Red Wings",
        "Detroit",
        "DET",
        "Little Caesars Arena",
        "Detroit",
        &["wings"],
    ),
    TeamSeed::new("Oilers", "Edmonton", "EDM", "Rogers Place", "Edmonton", &[]),
    TeamSeed::new(
        "Panthers",
        "Florida",
        "FLA",
        "Amerant Bank Arena",
        "Sunrise",
        &["cats"],
    ),
    TeamSeed::new(
        "Kings",
        "Los Angeles",
        "LAK",
        "Crypto.com Arena",
        "Los Angeles",
        &["la", "la kings"],
    ),
    TeamSeed::new("Wild", "Minnesota", "MIN", "Xcel Energy Center", "Saint Paul", &[]),
    TeamSeed::new("Canadiens", "Montreal", "MTL", "Bell Centre", "Montreal", &["habs"]),
    TeamSeed::new(
        "Predators",
        "Nashville",
        "NSH",
        "Bridgestone Arena",
        "Nashville",
        &["preds"],
    ),
    TeamSeed::new(
        "Devils",
        "New Jersey",
        "NJD",
        "Prudential Center",
        "Newark",
        &["nj devils"],
    ),
    TeamSeed::new(
        "Islanders",
        "New York",
        "NYI",
        "UBS Arena",
        "Elmont",
        &["isles", "ny islanders"],
    ),
    TeamSeed::new(
        "Rangers",
        "New York",
        "NYR",
        "Madison Square Garden",
        "New York",
        &["ny", "ny rangers", "blueshirts"],
    ),
    TeamSeed::new("Senators", "Ottawa", "OTT", "Canadian Tire Centre", "Ottawa", &["sens"]),
    TeamSeed::new(
        "Flyers",
        "Philadelphia",
        "PHI",
        "Xfinity Mobile Arena",
        "Philadelphia",
        &["philly"],
    ),
    TeamSeed::new("Penguins", "Pittsburgh", "PIT", "PPG Paints Arena", "Pittsburgh", &["pens"]),
    TeamSeed::new("Sharks", "San Jose", "SJS", "SAP Center", "San Jose", &[]),
    TeamSeed::new("Kraken", "Seattle", "SEA", "Climate Pledge Arena", "Seattle", &[]),
    TeamSeed::new(
        "Blues",
        "St. Louis",
        "STL",
        "Enterprise Center",
        "St. Louis",
        &["saint louis"],
    ),
    TeamSeed::new("Lightning", "Tampa Bay", "TBL", "Amalie Arena", "Tampa", &["bolts"]),
    TeamSeed::new(
        "Maple Leafs",
        "Toronto",
        "TOR",
        "Scotiabank Arena",
        "Toronto",
        &["leafs"],
    ),
    TeamSeed::new(
        "Mammoth",
        "Utah",
        "UTA",
        "Delta Center",
        "Salt Lake City",
        &["utah hockey club"],
    ),
    TeamSeed::new("Canucks", "Vancouver", "VAN", "Rogers Arena", "Vancouver", &["nucks"]),
    TeamSeed::new(
        "Golden Knights",
        "Vegas",
        "VGK",
        "T-Mobile Arena",
        "Las Vegas",
        &["knights"],
    ),
    TeamSeed::new(
        "Capitals",
        "Washington",
        "WSH",
        "Capital One Arena",
        "Washington",
        &["caps"],
    ),
    TeamSeed::new("Jets", "Winnipeg", "WPG", "Canada Life Centre", "Winnipeg", &[]),
];
