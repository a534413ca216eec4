//! Schedule endpoint (`sched`): trip planning, fares, holidays, load factors
//! and published schedules.

use serde_json::{Map, Value};

use crate::client::{Client, Params};
use crate::endpoint::Endpoint;
use crate::error::{BartError, Result};
use crate::reply::Reply;
use crate::validate::{self, TrainId};

/// Trip between two stations, for the `arrive` and `depart` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub orig: String,
    pub dest: String,
    /// `h:mm am|pm` or `now`
    pub time: String,
    /// `mm/dd/yyyy`, `today` or `now`
    pub date: String,
    /// Trips before the requested time, 0-4
    pub before: i32,
    /// Trips after the requested time, 0-4
    pub after: i32,
    /// 1 to include the legend
    pub legend: i32,
}

impl TripQuery {
    /// Trip leaving or arriving now, two trips either side, no legend.
    pub fn new(orig: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            orig: orig.into(),
            dest: dest.into(),
            time: "now".to_string(),
            date: "now".to_string(),
            before: 2,
            after: 2,
            legend: 0,
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub(crate) fn params(&self) -> Result<Params> {
        validate::station("orig", &self.orig)?;
        validate::station("dest", &self.dest)?;
        validate::time(&self.time)?;
        validate::date(&self.date)?;
        validate::trip_count("b", self.before)?;
        validate::trip_count("a", self.after)?;
        validate::legend(self.legend)?;

        Ok(vec![
            ("orig", self.orig.clone()),
            ("dest", self.dest.clone()),
            ("time", self.time.clone()),
            ("date", self.date.clone()),
            ("b", self.before.to_string()),
            ("a", self.after.to_string()),
            ("l", self.legend.to_string()),
        ])
    }
}

/// Build the `load` query. Empty identifiers count as absent; a third train
/// needs a second one since the slots are positional.
pub(crate) fn load_params(
    ld1: &str,
    ld2: Option<&str>,
    ld3: Option<&str>,
    st: &str,
) -> Result<Params> {
    let ld2 = ld2.filter(|s| !s.is_empty());
    let ld3 = ld3.filter(|s| !s.is_empty());

    let mut params: Params = vec![("ld1", TrainId::parse("ld1", ld1)?.to_string())];
    match (ld2, ld3) {
        (None, Some(ld3)) => return Err(BartError::invalid("ld3", ld3)),
        (Some(ld2), ld3) => {
            params.push(("ld2", TrainId::parse("ld2", ld2)?.to_string()));
            if let Some(ld3) = ld3 {
                params.push(("ld3", TrainId::parse("ld3", ld3)?.to_string()));
            }
        }
        (None, None) => {}
    }

    validate::schedule_type(st)?;
    params.push(("st", st.to_string()));
    Ok(params)
}

impl Client {
    /// Trips arriving at `dest` around the requested time.
    pub fn arrivals(&self, trip: &TripQuery) -> Result<Reply> {
        let params = trip.params()?;
        self.call_api(Endpoint::Schedule, "arrive", &params)?
            .into_field("schedule")
    }

    /// Trips departing `orig` around the requested time.
    pub fn departures(&self, trip: &TripQuery) -> Result<Reply> {
        let params = trip.params()?;
        self.call_api(Endpoint::Schedule, "depart", &params)?
            .into_field("schedule")
    }

    /// Fare between two stations: `{"trip": ..., "fares": ...}`, with
    /// `fares` present only when the API sent the per-class breakdown.
    pub fn fare(&self, orig: &str, dest: &str, date: &str, sched: Option<u32>) -> Result<Reply> {
        validate::station("orig", orig)?;
        validate::station("dest", dest)?;
        validate::date(date)?;

        let mut params: Params = vec![
            ("orig", orig.to_string()),
            ("dest", dest.to_string()),
            ("date", date.to_string()),
        ];
        if let Some(sched) = sched {
            params.push(("sched", sched.to_string()));
        }

        let reply = self.call_api(Endpoint::Schedule, "fare", &params)?;
        let fares = reply.data.get("fares").cloned();

        let Reply { data, advisory } = reply.into_field("trip")?;
        let mut out = Map::new();
        out.insert("trip".to_string(), data);
        if let Some(fares) = fares {
            out.insert("fares".to_string(), fares);
        }

        Ok(Reply {
            data: Value::Object(out),
            advisory,
        })
    }

    /// Holidays on which the system runs a non-weekday schedule.
    pub fn holidays(&self) -> Result<Reply> {
        self.call_api(Endpoint::Schedule, "holiday", &Params::new())?
            .into_field("holidays")
    }

    /// Estimated load factor for up to three scheduled trains, e.g.
    /// `load_factor("ASHB0746", None, None, "w")`.
    pub fn load_factor(
        &self,
        ld1: &str,
        ld2: Option<&str>,
        ld3: Option<&str>,
        st: &str,
    ) -> Result<Reply> {
        let params = load_params(ld1, ld2, ld3, st)?;
        self.call_api(Endpoint::Schedule, "load", &params)?
            .into_field("load")
    }

    /// Full schedule of one route.
    pub fn route_schedule(
        &self,
        route: &str,
        sched: Option<u32>,
        date: &str,
        time: &str,
        legend: i32,
    ) -> Result<Reply> {
        validate::route(route)?;
        validate::date(date)?;
        validate::time(time)?;
        validate::legend(legend)?;

        let mut params: Params = vec![("route", route.to_string())];
        if let Some(sched) = sched {
            params.push(("sched", sched.to_string()));
        }
        params.push(("date", date.to_string()));
        params.push(("time", time.to_string()));
        params.push(("l", legend.to_string()));

        self.call_api(Endpoint::Schedule, "routesched", &params)?
            .into_field("route")
    }

    /// Schedules currently published.
    pub fn schedules(&self) -> Result<Reply> {
        self.call_api(Endpoint::Schedule, "scheds", &Params::new())?
            .into_field("schedules")
    }

    /// Special schedule notices in effect.
    pub fn special_schedules(&self, legend: i32) -> Result<Reply> {
        validate::legend(legend)?;
        let params: Params = vec![("l", legend.to_string())];
        self.call_api(Endpoint::Schedule, "special", &params)?
            .into_field("special_schedules")
    }

    /// All trains stopping at `orig` on `date`.
    pub fn station_schedule(&self, orig: &str, date: &str, legend: i32) -> Result<Reply> {
        validate::station("orig", orig)?;
        validate::date(date)?;
        validate::legend(legend)?;

        let params: Params = vec![
            ("orig", orig.to_string()),
            ("date", date.to_string()),
            ("l", legend.to_string()),
        ];
        self.call_api(Endpoint::Schedule, "stnsched", &params)?
            .into_field("station")
    }
}
