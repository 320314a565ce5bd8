use chrono::{NaiveDate, NaiveTime};

use crate::selector::{Area, Param, Satellite};

/// Base URL of the INMET satellite catalog.
pub const BASE_URL: &str = "https://apisat.inmet.gov.br";

/// The catalog's day token: `YYYY-MM-DDT03:00:00.000Z`. 03:00 UTC is local
/// midnight in Brasília.
fn day_token(date: NaiveDate) -> String {
    format!("{}T03:00:00.000Z", date.format("%Y-%m-%d"))
}

/// Listing of areas available for a satellite.
pub fn areas_url(sat: Satellite) -> String {
    format!("{BASE_URL}/areas/{}", sat.code())
}

/// Listing of parameters available for a satellite in an area.
pub fn params_url(sat: Satellite, area: Area) -> String {
    format!("{BASE_URL}/parametros/{}/{}", sat.code(), area.code())
}

/// Listing of hours with imagery on the given day.
pub fn hours_url(sat: Satellite, area: Area, param: Param, date: NaiveDate) -> String {
    format!(
        "{BASE_URL}/horas/{}/{}/{}/{}",
        sat.code(),
        area.code(),
        param.code(),
        day_token(date)
    )
}

/// A single image at an exact hour.
pub fn image_url(
    sat: Satellite,
    area: Area,
    param: Param,
    date: NaiveDate,
    time: NaiveTime,
) -> String {
    format!(
        "{BASE_URL}/{}/{}/{}/{}/{}",
        sat.code(),
        area.code(),
        param.code(),
        day_token(date),
        time.format("%H:%M")
    )
}

/// The full image series for one day, newest first.
pub fn series_url(sat: Satellite, area: Area, param: Param, date: NaiveDate) -> String {
    format!(
        "{BASE_URL}/{}/{}/{}/{}",
        sat.code(),
        area.code(),
        param.code(),
        date.format("%Y-%m-%d")
    )
}
