//! Parameter validators.
//!
//! Every parameter a public operation puts on the wire passes through one of
//! these first. Each is a pure predicate: `Ok(())` or
//! [`BartError::Validation`] naming the field and the rejected value.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{BartError, Result};
use crate::stations::{is_known_route, is_known_station};

const NOW_LITERALS: [&str; 2] = ["today", "now"];

/// Known station abbreviation (any case) or `all`.
pub fn station(field: &str, orig: &str) -> Result<()> {
    if orig.eq_ignore_ascii_case("all") || is_known_station(orig) {
        Ok(())
    } else {
        Err(BartError::invalid(field, orig))
    }
}

/// Known route number, `all` or `ALL`.
pub fn route(route: &str) -> Result<()> {
    if matches!(route, "all" | "ALL") || is_known_route(route) {
        Ok(())
    } else {
        Err(BartError::invalid("route", route))
    }
}

/// `today`, `now` or `mm/dd/yyyy`; the year must have four digits.
pub fn date(date: &str) -> Result<()> {
    let four_digit_year = date
        .rsplit('/')
        .next()
        .is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()));
    let parses = four_digit_year && NaiveDate::parse_from_str(date, "%m/%d/%Y").is_ok();
    if NOW_LITERALS.contains(&date) || parses {
        Ok(())
    } else {
        Err(BartError::invalid("date", date))
    }
}

/// `today`, `now` or `h:mm am|pm`; the space before the meridian is optional.
pub fn time(time: &str) -> Result<()> {
    let parses = ["%I:%M%p", "%I:%M %p"]
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(time, fmt).is_ok());
    if NOW_LITERALS.contains(&time) || parses {
        Ok(())
    } else {
        Err(BartError::invalid("time", time))
    }
}

pub fn platform(plat: i32) -> Result<()> {
    if (1..=4).contains(&plat) {
        Ok(())
    } else {
        Err(BartError::invalid("plat", plat))
    }
}

/// `n` or `s`.
pub fn direction(dir: &str) -> Result<()> {
    if matches!(dir, "n" | "s") {
        Ok(())
    } else {
        Err(BartError::invalid("dir", dir))
    }
}

/// Trips before/after the requested time, 0 through 4.
pub fn trip_count(field: &str, count: i32) -> Result<()> {
    if (0..=4).contains(&count) {
        Ok(())
    } else {
        Err(BartError::invalid(field, count))
    }
}

pub fn legend(flag: i32) -> Result<()> {
    if flag == 0 || flag == 1 {
        Ok(())
    } else {
        Err(BartError::invalid("l", flag))
    }
}

/// Weekday, Saturday or Sunday/holiday: `w`, `s`, `h` in any case.
pub fn schedule_type(st: &str) -> Result<()> {
    if matches!(st.to_ascii_lowercase().as_str(), "w" | "s" | "h") {
        Ok(())
    } else {
        Err(BartError::invalid("st", st))
    }
}

/// A scheduled train, as used by the load factor command.
///
/// Encoded as the 4-character origin station, a 2-digit route number and the
/// train sequence number, e.g. `ASHB0746` is station `ASHB`, route `07`,
/// train `46`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainId {
    station: String,
    route: String,
    train: String,
}

impl TrainId {
    /// Decompose and validate a train identifier. `field` names the request
    /// parameter in error messages (`ld1`, `ld2`, `ld3`).
    pub fn parse(field: &str, raw: &str) -> Result<Self> {
        let (station, rest) = split_at_char(raw, 4)
            .ok_or_else(|| BartError::invalid(format!("{field}.station"), raw))?;
        if !is_known_station(station) {
            return Err(BartError::invalid(format!("{field}.station"), station));
        }

        let (route, train) = split_at_char(rest, 2)
            .ok_or_else(|| BartError::invalid(format!("{field}.route"), rest))?;
        if !all_digits(route) {
            return Err(BartError::invalid(format!("{field}.route"), route));
        }
        if !all_digits(train) {
            return Err(BartError::invalid(format!("{field}.train"), train));
        }

        Ok(Self {
            station: station.to_string(),
            route: route.to_string(),
            train: train.to_string(),
        })
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn train(&self) -> &str {
        &self.train
    }
}

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.station, self.route, self.train)
    }
}

fn split_at_char(s: &str, n: usize) -> Option<(&str, &str)> {
    let idx = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    if s[..idx].chars().count() == n {
        Some(s.split_at(idx))
    } else {
        None
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::STATIONS;

    fn rejected_field(result: Result<()>) -> String {
        match result {
            Err(BartError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn every_known_station_is_accepted_in_any_case() {
        for (code, _) in STATIONS {
            assert!(station("orig", code).is_ok());
            assert!(station("orig", &code.to_uppercase()).is_ok());
        }
        assert!(station("orig", "all").is_ok());
        assert!(station("orig", "ALL").is_ok());
    }

    #[test]
    fn unknown_stations_are_rejected() {
        for bad in ["xxxx", "", "embrx", "emb", "alll"] {
            assert_eq!(rejected_field(station("orig", bad)), "orig");
        }
        assert_eq!(rejected_field(station("dest", "nope")), "dest");
    }

    #[test]
    fn routes_accept_both_all_aliases() {
        assert!(route("all").is_ok());
        assert!(route("ALL").is_ok());
        assert!(route("12").is_ok());
        assert!(route("All").is_err());
        assert!(route("99").is_err());
    }

    #[test]
    fn dates() {
        assert!(date("today").is_ok());
        assert!(date("now").is_ok());
        assert!(date("01/15/2024").is_ok());
        assert!(date("2/29/2024").is_ok());
        assert!(date("12/31/1999").is_ok());

        assert!(date("13/01/2024").is_err());
        assert!(date("02/30/2024").is_err());
        assert!(date("2024-01-15").is_err());
        assert!(date("tomorrow").is_err());
        assert!(date("1/1/24").is_err());
        assert!(date("1/1/024").is_err());
        assert!(date("1/1/20245").is_err());
        assert!(date("1/1/+2024").is_err());
        assert_eq!(rejected_field(date("")), "date");
    }

    #[test]
    fn times() {
        assert!(time("now").is_ok());
        assert!(time("today").is_ok());
        assert!(time("4:30pm").is_ok());
        assert!(time("4:30 pm").is_ok());
        assert!(time("11:05AM").is_ok());

        assert!(time("16:30").is_err());
        assert!(time("13:00pm").is_err());
        assert!(time("4:30").is_err());
        assert_eq!(rejected_field(time("noon")), "time");
    }

    #[test]
    fn platform_range() {
        for p in 1..=4 {
            assert!(platform(p).is_ok());
        }
        assert!(platform(0).is_err());
        assert!(platform(5).is_err());
        assert!(platform(-1).is_err());
    }

    #[test]
    fn direction_is_north_or_south_only() {
        assert!(direction("n").is_ok());
        assert!(direction("s").is_ok());
        for bad in ["e", "w", "N", "north", ""] {
            assert_eq!(rejected_field(direction(bad)), "dir");
        }
    }

    #[test]
    fn trip_count_range() {
        for n in 0..=4 {
            assert!(trip_count("b", n).is_ok());
        }
        assert_eq!(rejected_field(trip_count("b", -1)), "b");
        assert_eq!(rejected_field(trip_count("a", 5)), "a");
    }

    #[test]
    fn legend_flag() {
        assert!(legend(0).is_ok());
        assert!(legend(1).is_ok());
        assert!(legend(-1).is_err());
        assert!(legend(2).is_err());
    }

    #[test]
    fn schedule_types() {
        for st in ["w", "s", "h", "W", "S", "H"] {
            assert!(schedule_type(st).is_ok());
        }
        for bad in ["x", "", "ws", "weekday"] {
            assert_eq!(rejected_field(schedule_type(bad)), "st");
        }
    }

    #[test]
    fn train_id_decomposes() {
        let id = TrainId::parse("ld1", "ASHB0746").unwrap();
        assert_eq!(id.station(), "ASHB");
        assert_eq!(id.route(), "07");
        assert_eq!(id.train(), "46");
        assert_eq!(id.to_string(), "ASHB0746");
    }

    #[test]
    fn train_id_names_the_failing_part() {
        let field = |raw: &str| match TrainId::parse("ld2", raw) {
            Err(BartError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(field("XXXX0746"), "ld2.station");
        assert_eq!(field("ASH"), "ld2.station");
        assert_eq!(field("ASHBx746"), "ld2.route");
        assert_eq!(field("ASHB0"), "ld2.route");
        assert_eq!(field("ASHB07"), "ld2.train");
        assert_eq!(field("ASHB074x"), "ld2.train");
    }
}
