//! Static reference data: known station abbreviations and route numbers.

/// Station abbreviation (lowercase) and display name.
pub const STATIONS: &[(&str, &str)] = &[
    ("12th", "12th St. Oakland City Center"),
    ("16th", "16th St. Mission"),
    ("19th", "19th St. Oakland"),
    ("24th", "24th St. Mission"),
    ("antc", "Antioch"),
    ("ashb", "Ashby"),
    ("balb", "Balboa Park"),
    ("bayf", "Bay Fair"),
    ("bery", "Berryessa/North San Jose"),
    ("cast", "Castro Valley"),
    ("civc", "Civic Center/UN Plaza"),
    ("cols", "Coliseum"),
    ("colm", "Colma"),
    ("conc", "Concord"),
    ("daly", "Daly City"),
    ("dbrd", "Downtown Berkeley"),
    ("dela", "El Cerrito del Norte"),
    ("dubl", "Dublin/Pleasanton"),
    ("embr", "Embarcadero"),
    ("frmt", "Fremont"),
    ("ftvl", "Fruitvale"),
    ("glen", "Glen Park"),
    ("hayw", "Hayward"),
    ("lafy", "Lafayette"),
    ("lake", "Lake Merritt"),
    ("mcar", "MacArthur"),
    ("mlbr", "Millbrae"),
    ("mlpt", "Milpitas"),
    ("mont", "Montgomery St."),
    ("nbrk", "North Berkeley"),
    ("ncon", "North Concord/Martinez"),
    ("oakl", "Oakland International Airport"),
    ("orin", "Orinda"),
    ("pctr", "Pittsburg Center"),
    ("phil", "Pleasant Hill/Contra Costa Centre"),
    ("pitt", "Pittsburg/Bay Point"),
    ("plza", "El Cerrito Plaza"),
    ("powl", "Powell St."),
    ("rich", "Richmond"),
    ("rock", "Rockridge"),
    ("sanl", "San Leandro"),
    ("sbrn", "San Bruno"),
    ("sfia", "San Francisco International Airport"),
    ("shay", "South Hayward"),
    ("ssan", "South San Francisco"),
    ("ucty", "Union City"),
    ("warm", "Warm Springs/South Fremont"),
    ("wcrk", "Walnut Creek"),
    ("wdub", "West Dublin/Pleasanton"),
    ("woak", "West Oakland"),
];

/// Route numbers the API accepts for `route=`.
pub const ROUTES: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20",
];

/// Display name for a station abbreviation, matched case-insensitively.
pub fn station_name(code: &str) -> Option<&'static str> {
    STATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

pub(crate) fn is_known_station(code: &str) -> bool {
    station_name(code).is_some()
}

pub(crate) fn is_known_route(route: &str) -> bool {
    ROUTES.contains(&route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_codes_are_four_lowercase_chars() {
        for (code, _) in STATIONS {
            assert_eq!(code.len(), 4, "{code}");
            assert_eq!(*code, code.to_ascii_lowercase());
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(station_name("EMBR"), Some("Embarcadero"));
        assert_eq!(station_name("embr"), Some("Embarcadero"));
        assert_eq!(station_name("xxxx"), None);
    }

    #[test]
    fn routes_are_exact() {
        assert!(is_known_route("7"));
        assert!(!is_known_route("07"));
        assert!(!is_known_route("21"));
    }
}
