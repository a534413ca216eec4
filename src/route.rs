//! Route endpoint (`route`).
//!
//! When both a schedule number and a date are sent the API uses the schedule
//! and ignores the date.

use crate::client::{Client, Params};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::reply::Reply;
use crate::validate;

impl Client {
    /// Configuration of `route` (a route number or `all`) under the given
    /// schedule, or the schedule in effect on `date`.
    pub fn route_info(&self, route: &str, sched: Option<u32>, date: &str) -> Result<Reply> {
        validate::route(route)?;
        validate::date(date)?;

        let mut params: Params = vec![("route", route.to_string())];
        if let Some(sched) = sched {
            params.push(("sched", sched.to_string()));
        }
        params.push(("date", date.to_string()));

        self.call_api(Endpoint::Route, "routeinfo", &params)?
            .into_field("routes")
    }

    /// All routes of the given schedule, or the schedule in effect on `date`.
    pub fn routes(&self, sched: Option<u32>, date: &str) -> Result<Reply> {
        validate::date(date)?;

        let mut params = Params::new();
        if let Some(sched) = sched {
            params.push(("sched", sched.to_string()));
        }
        params.push(("date", date.to_string()));

        self.call_api(Endpoint::Route, "routes", &params)?
            .into_field("routes")
    }
}
