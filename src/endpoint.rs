use std::fmt;
use std::str::FromStr;

use crate::error::BartError;
use crate::util::urljoin;

/// One of the API's service areas, each served from its own `.aspx` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `bsa`: service advisories, train count, elevator status
    Advisory,
    /// `etd`: real-time estimated departures
    EstimatedDeparture,
    /// `route`: route configuration
    Route,
    /// `sched`: schedules, fares, load factors
    Schedule,
    /// `stn`: station information
    Station,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Advisory,
        Endpoint::EstimatedDeparture,
        Endpoint::Route,
        Endpoint::Schedule,
        Endpoint::Station,
    ];

    /// Wire name of the endpoint.
    pub const fn code(self) -> &'static str {
        match self {
            Endpoint::Advisory => "bsa",
            Endpoint::EstimatedDeparture => "etd",
            Endpoint::Route => "route",
            Endpoint::Schedule => "sched",
            Endpoint::Station => "stn",
        }
    }

    /// Absolute URL of the endpoint under `base`.
    pub fn url(self, base: &str) -> String {
        urljoin(base, &format!("{}.aspx", self.code()))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Endpoint {
    type Err = BartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.code() == s)
            .ok_or_else(|| BartError::UnknownEndpoint {
                name: s.to_string(),
            })
    }
}
