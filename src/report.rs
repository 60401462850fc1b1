use std::fmt;

use log::{debug, info};

use crate::error::Result;
use crate::hsp::{HspApi, Location, MetricsQuery};
use crate::journey::{Crs, JourneyRequest};
use crate::window::Hhmm;

/// Arrival of the matched train at the requested destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    pub origin: Crs,
    pub destination: Crs,
    pub date: String,
    pub departure: Hhmm,
    pub rid: String,
    pub scheduled: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Arrived(Arrival),
    NoMatch,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Arrived(a) => {
                writeln!(
                    f,
                    "{} -> {} ({} {})",
                    a.origin, a.destination, a.date, a.departure
                )?;
                writeln!(f, "Scheduled Arrival: {}", a.scheduled)?;
                write!(f, "Actual Arrival: {}", a.actual)
            }
            Outcome::NoMatch => write!(f, "No service match"),
        }
    }
}

/// First calling point at `destination`; codes are unique within a run.
pub fn find_stop<'a>(locations: &'a [Location], destination: &Crs) -> Option<&'a Location> {
    locations
        .iter()
        .find(|l| l.location == destination.as_str())
}

/// Find the first run matching `request` and report its arrival at the destination.
///
/// The details call is only made once the metrics call has produced a rid.
pub async fn lookup<A: HspApi>(
    api: &A,
    request: &JourneyRequest,
    window_minutes: u32,
) -> Result<Outcome> {
    let query = MetricsQuery::new(request, window_minutes);
    let metrics = api.service_metrics(&query).await?;

    let rids = metrics.rids();
    let rid = match rids.first() {
        Some(rid) => rid,
        None => {
            info!(
                "no services {} -> {} between {} and {}",
                query.from_loc, query.to_loc, query.from_time, query.to_time
            );
            return Ok(Outcome::NoMatch);
        }
    };
    debug!("{} candidate runs, using {}", rids.len(), rid);

    let details = api.service_details(rid).await?;
    let locations = &details.attributes.locations;
    let stop = match find_stop(locations, &request.destination) {
        Some(stop) => stop,
        None => {
            info!(
                "run {} has {} calling points, none at {}",
                rid,
                locations.len(),
                request.destination
            );
            return Ok(Outcome::NoMatch);
        }
    };

    Ok(Outcome::Arrived(Arrival {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        date: query.from_date,
        departure: request.departure,
        rid: rid.clone(),
        scheduled: stop.gbtt_pta.clone(),
        actual: stop.actual_ta.clone(),
    }))
}
