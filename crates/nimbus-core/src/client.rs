use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{NimbusError, Result};

/// One (code, display name) row of a catalog listing.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "Sigla")]
    pub sigla: String,
    #[serde(alias = "Nome")]
    pub nome: String,
}

/// One frame of an image series: metadata plus a base64 data URI.
#[derive(Clone, Debug, Deserialize)]
pub struct ImageEntry {
    #[serde(alias = "Nome")]
    pub nome: String,
    #[serde(alias = "Satelite")]
    pub satelite: String,
    #[serde(alias = "Parametro")]
    pub parametro: String,
    #[serde(alias = "Data")]
    pub data: String,
    #[serde(alias = "Hora")]
    pub hora: String,
    #[serde(alias = "Base64")]
    pub base64: String,
}

/// One blocking GET against the catalog. No retries, no caching; a non-2xx
/// status is terminal and the body must be JSON.
///
/// The body is read as text and decoded separately so transport failures
/// and malformed responses surface as distinct errors.
pub fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    debug!(url, "catalog request");
    let resp = reqwest::blocking::get(url)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(NimbusError::Status(status.to_string()));
    }
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}

pub fn fetch_listing(url: &str) -> Result<Vec<CatalogEntry>> {
    get_json(url)
}

pub fn fetch_series(url: &str) -> Result<Vec<ImageEntry>> {
    get_json(url)
}
