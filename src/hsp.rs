//! Client for the Historical Service Performance (HSP) API.
//!
//! Two POST endpoints are used: `serviceMetrics` finds the runs (rids)
//! between two stations in a time window, and `serviceDetails` returns
//! every calling point of one run with its scheduled and actual times.

use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::journey::JourneyRequest;
use crate::window::{DayCategory, SearchWindow};

const METRICS_ENDPOINT: &str = "Service Metrics";
const DETAILS_ENDPOINT: &str = "Service Detail";

/// Body of a `serviceMetrics` request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    pub from_loc: String,
    pub to_loc: String,
    pub from_time: String,
    pub to_time: String,
    pub from_date: String,
    pub to_date: String,
    pub days: DayCategory,
}

impl MetricsQuery {
    /// Search a single day, starting at the requested departure.
    pub fn new(request: &JourneyRequest, window_minutes: u32) -> MetricsQuery {
        let window = SearchWindow::new(request.departure, request.date, window_minutes);
        let date = request.date.format("%Y-%m-%d").to_string();
        MetricsQuery {
            from_loc: request.origin.to_string(),
            to_loc: request.destination.to_string(),
            from_time: window.from_time.to_string(),
            to_time: window.to_time.to_string(),
            from_date: date.clone(),
            to_date: date,
            days: window.days,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DetailsQuery {
    pub rid: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServiceMetrics {
    #[serde(rename = "Services", default)]
    pub services: Vec<Service>,
}

impl ServiceMetrics {
    /// Every rid of every service, in response order.
    pub fn rids(&self) -> Vec<String> {
        self.services
            .iter()
            .flat_map(|s| s.attributes.rids.iter().cloned())
            .collect()
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Service {
    #[serde(rename = "serviceAttributesMetrics", default)]
    pub attributes: ServiceAttributesMetrics,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServiceAttributesMetrics {
    #[serde(default)]
    pub origin_location: String,
    #[serde(default)]
    pub destination_location: String,
    #[serde(default)]
    pub gbtt_ptd: String,
    #[serde(default)]
    pub gbtt_pta: String,
    #[serde(default)]
    pub toc_code: String,
    #[serde(default)]
    pub rids: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServiceDetails {
    #[serde(rename = "serviceAttributesDetails", default)]
    pub attributes: ServiceAttributesDetails,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServiceAttributesDetails {
    #[serde(default)]
    pub date_of_service: String,
    #[serde(default)]
    pub toc_code: String,
    #[serde(default)]
    pub rid: String,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// One calling point. Times are HHMM strings, empty when HSP has none.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub location: String,
    #[serde(default)]
    pub gbtt_ptd: String,
    #[serde(default)]
    pub gbtt_pta: String,
    #[serde(default)]
    pub actual_td: String,
    #[serde(default)]
    pub actual_ta: String,
    #[serde(default)]
    pub late_canc_reason: String,
}

/// The two HSP calls, so the lookup can run against a fake.
#[allow(async_fn_in_trait)]
pub trait HspApi {
    async fn service_metrics(&self, query: &MetricsQuery) -> Result<ServiceMetrics>;
    async fn service_details(&self, rid: &str) -> Result<ServiceDetails>;
}

pub struct HspClient {
    http: reqwest::Client,
    config: Config,
}

impl HspClient {
    pub fn new(config: Config) -> Result<HspClient> {
        let http = reqwest::Client::builder().build()?;
        Ok(HspClient { http, config })
    }

    async fn post<B, T>(&self, endpoint: &'static str, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} returned {}", url, status);
            return Err(Error::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let it: T = response.json().await?;
        Ok(it)
    }
}

impl HspApi for HspClient {
    async fn service_metrics(&self, query: &MetricsQuery) -> Result<ServiceMetrics> {
        debug!("metrics query: {:?}", query);
        self.post(METRICS_ENDPOINT, "serviceMetrics", query).await
    }

    async fn service_details(&self, rid: &str) -> Result<ServiceDetails> {
        let query = DetailsQuery {
            rid: rid.to_string(),
        };
        self.post(DETAILS_ENDPOINT, "serviceDetails", &query).await
    }
}
