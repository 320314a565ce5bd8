use chrono::NaiveDate;

use crate::client::{fetch_listing, CatalogEntry};
use crate::endpoint::{areas_url, hours_url, params_url};
use crate::error::{NimbusError, Result};
use crate::selector::{Area, Param, Satellite};

/// Decode an areas listing into typed area codes. A single undecodable
/// entry fails the whole listing rather than narrowing the valid set.
pub fn decode_areas(listing: &[CatalogEntry]) -> Result<Vec<Area>> {
    listing.iter().map(|e| Area::from_code(&e.sigla)).collect()
}

/// Decode a parameters listing into typed parameter codes.
pub fn decode_params(listing: &[CatalogEntry]) -> Result<Vec<Param>> {
    listing.iter().map(|e| Param::from_code(&e.sigla)).collect()
}

/// Areas the catalog currently advertises for `sat`.
pub fn valid_areas(sat: Satellite) -> Result<Vec<Area>> {
    let listing = fetch_listing(&areas_url(sat))?;
    decode_areas(&listing)
}

/// Parameters the catalog currently advertises for `sat` in `area`.
pub fn valid_params(sat: Satellite, area: Area) -> Result<Vec<Param>> {
    let listing = fetch_listing(&params_url(sat, area))?;
    decode_params(&listing)
}

/// Hour tokens with imagery on the given day.
pub fn available_hours(
    sat: Satellite,
    area: Area,
    param: Param,
    date: NaiveDate,
) -> Result<Vec<String>> {
    let listing = fetch_listing(&hours_url(sat, area, param, date))?;
    Ok(listing.into_iter().map(|e| e.sigla).collect())
}

/// Membership check against an already-decoded areas listing.
pub fn check_area(sat: Satellite, area: Area, advertised: &[Area]) -> Result<()> {
    if advertised.contains(&area) {
        Ok(())
    } else {
        Err(NimbusError::UnsupportedArea {
            satellite: sat.code().to_string(),
            area: area.code().to_string(),
        })
    }
}

/// Membership check against an already-decoded parameters listing.
pub fn check_param(sat: Satellite, area: Area, param: Param, advertised: &[Param]) -> Result<()> {
    if advertised.contains(&param) {
        Ok(())
    } else {
        Err(NimbusError::UnsupportedParam {
            satellite: sat.code().to_string(),
            area: area.code().to_string(),
            param: param.code().to_string(),
        })
    }
}

/// Confirm the catalog advertises `area` for `sat`.
pub fn validate_area(sat: Satellite, area: Area) -> Result<()> {
    let advertised = valid_areas(sat)?;
    check_area(sat, area, &advertised)
}

/// Confirm the catalog advertises `param` for `sat` in `area`.
///
/// Parameter listings are area-scoped, so callers must have validated the
/// area first.
pub fn validate_param(sat: Satellite, area: Area, param: Param) -> Result<()> {
    let advertised = valid_params(sat, area)?;
    check_param(sat, area, param, &advertised)
}
