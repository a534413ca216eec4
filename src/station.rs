//! Station endpoint (`stn`).

use serde_json::{Map, Value};

use crate::client::{Client, Params};
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::reply::Reply;
use crate::validate;

impl Client {
    /// How to reach `orig` and what is around it.
    ///
    /// The payload is `{"stations": ...}`; with `legend == 1` it also carries
    /// `"legend"`, taken from the response's message area (`null` if the API
    /// sent none).
    pub fn station_access(&self, orig: &str, legend: i32) -> Result<Reply> {
        validate::station("orig", orig)?;
        validate::legend(legend)?;

        let params: Params = vec![("orig", orig.to_string()), ("l", legend.to_string())];
        let reply = self.call_api(Endpoint::Station, "stnaccess", &params)?;
        let legend_value =
            (legend == 1).then(|| reply.message("legend").cloned().unwrap_or_default());

        let Reply { data, advisory } = reply.into_field("stations")?;
        let mut out = Map::new();
        out.insert("stations".to_string(), data);
        if let Some(legend_value) = legend_value {
            out.insert("legend".to_string(), legend_value);
        }

        Ok(Reply {
            data: Value::Object(out),
            advisory,
        })
    }

    /// Detailed information about one station.
    pub fn station_info(&self, orig: &str) -> Result<Reply> {
        validate::station("orig", orig)?;
        let params: Params = vec![("orig", orig.to_string())];
        self.call_api(Endpoint::Station, "stninfo", &params)?
            .into_field("stations")
    }

    /// Every station in the system.
    pub fn stations(&self) -> Result<Reply> {
        self.call_api(Endpoint::Station, "stns", &Params::new())?
            .into_field("stations")
    }
}
