//! Real-time endpoint (`etd`).

use crate::client::{Client, Params};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::reply::Reply;
use crate::validate;

/// Build the `etd` query. A platform takes precedence over a direction; when
/// both are given the direction is validated but left off the request. For
/// `orig=all` neither selector is sent.
pub(crate) fn departure_params(orig: &str, plat: Option<i32>, dir: Option<&str>) -> Result<Params> {
    validate::station("orig", orig)?;
    if let Some(plat) = plat {
        validate::platform(plat)?;
    }
    if let Some(dir) = dir {
        validate::direction(dir)?;
    }

    let mut params: Params = vec![("orig", orig.to_string())];
    if orig.eq_ignore_ascii_case("all") {
        return Ok(params);
    }
    match (plat, dir) {
        (Some(plat), _) => params.push(("plat", plat.to_string())),
        (None, Some(dir)) => params.push(("dir", dir.to_string())),
        (None, None) => {}
    }
    Ok(params)
}

impl Client {
    /// Estimated departures from `orig` (a station abbreviation or `all`),
    /// optionally narrowed to one platform (1-4) or direction (`n`/`s`).
    pub fn estimated_departures(
        &self,
        orig: &str,
        plat: Option<i32>,
        dir: Option<&str>,
    ) -> Result<Reply> {
        let params = departure_params(orig, plat, dir)?;
        self.call_api(Endpoint::EstimatedDeparture, "etd", &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BartError;

    fn keys(params: &Params) -> Vec<&str> {
        params.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn platform_wins_over_direction() {
        let params = departure_params("embr", Some(2), Some("n")).unwrap();
        assert_eq!(
            params,
            vec![("orig", "embr".to_string()), ("plat", "2".to_string())]
        );
    }

    #[test]
    fn direction_alone() {
        let params = departure_params("RICH", None, Some("s")).unwrap();
        assert_eq!(keys(&params), vec!["orig", "dir"]);
        assert_eq!(params[1].1, "s");
    }

    #[test]
    fn station_only() {
        let params = departure_params("all", None, None).unwrap();
        assert_eq!(keys(&params), vec!["orig"]);
    }

    #[test]
    fn all_stations_drops_selectors() {
        let params = departure_params("all", Some(2), None).unwrap();
        assert_eq!(keys(&params), vec!["orig"]);

        let params = departure_params("ALL", None, Some("n")).unwrap();
        assert_eq!(keys(&params), vec!["orig"]);

        let err = departure_params("all", Some(7), None).unwrap_err();
        assert!(matches!(err, BartError::Validation { ref field, .. } if field == "plat"));
    }

    #[test]
    fn checks_follow_parameter_order() {
        let err = departure_params("xxxx", Some(9), Some("e")).unwrap_err();
        assert!(matches!(err, BartError::Validation { ref field, .. } if field == "orig"));

        let err = departure_params("embr", Some(9), Some("e")).unwrap_err();
        assert!(matches!(err, BartError::Validation { ref field, .. } if field == "plat"));

        let err = departure_params("embr", Some(1), Some("e")).unwrap_err();
        assert!(matches!(err, BartError::Validation { ref field, .. } if field == "dir"));
    }
}
