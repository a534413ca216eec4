//! Advisory endpoint (`bsa`): service advisories, active train count and
//! elevator status.

use crate::client::{Client, Params};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::reply::Reply;
use crate::validate;

impl Client {
    /// Current service advisories for `orig` (a station abbreviation or `all`).
    pub fn current_advisory(&self, orig: &str) -> Result<Reply> {
        validate::station("orig", orig)?;
        let params: Params = vec![("orig", orig.to_string())];
        self.call_api(Endpoint::Advisory, "bsa", &params)?
            .into_field("bsa")
    }

    /// Number of trains currently active in the system.
    pub fn train_count(&self) -> Result<Reply> {
        self.call_api(Endpoint::Advisory, "count", &Params::new())?
            .into_field("traincount")
    }

    /// Current elevator outages.
    pub fn elevator_status(&self) -> Result<Reply> {
        self.call_api(Endpoint::Advisory, "elev", &Params::new())?
            .into_field("bsa")
    }
}
