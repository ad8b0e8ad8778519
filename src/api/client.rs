//! Typed client for the simulation backend.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use url::Url;

use super::error::{extract_detail, ApiError};
use crate::models::{
    AssignmentRequest, AssignmentResponse, DistrictsResponse, EarthquakeResult, HealthResponse,
    Hospital, LiveFloodSnapshot, NearestAmbulanceResponse, ResourceUnit, ResourceUpdate,
    ResourceUpdatesRequest, Severity, SimulationResult,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the backend API.
///
/// Cheap to clone; all methods return typed payloads or an [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        // Joins below are relative; the base path must end with a slash
        // or its last segment would be replaced.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(concat!("Deodar/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.get(url).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, "backend call failed");
            return Err(ApiError::Status {
                status,
                detail: extract_detail(&body),
            });
        }
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("health", &[]).await
    }

    /// `GET /simulate-flood`
    pub async fn simulate_flood(
        &self,
        intensity: Severity,
        rainfall: Option<f64>,
    ) -> Result<SimulationResult, ApiError> {
        let mut query = vec![("intensity", intensity.to_string())];
        if let Some(mm) = rainfall {
            query.push(("rainfall", mm.to_string()));
        }
        self.get_json("simulate-flood", &query).await
    }

    /// `GET /simulate-earthquake`
    pub async fn simulate_earthquake(
        &self,
        magnitude: f64,
        epicenter: &str,
    ) -> Result<EarthquakeResult, ApiError> {
        let query = [
            ("magnitude", magnitude.to_string()),
            ("epicenter", epicenter.to_string()),
        ];
        self.get_json("simulate-earthquake", &query).await
    }

    /// `GET /districts`
    pub async fn districts(&self) -> Result<DistrictsResponse, ApiError> {
        self.get_json("districts", &[]).await
    }

    /// `GET /resources`
    pub async fn resources(&self) -> Result<Vec<ResourceUnit>, ApiError> {
        self.get_json("resources", &[]).await
    }

    /// `GET /resources/available-ambulances`
    pub async fn available_ambulances(&self) -> Result<Vec<ResourceUnit>, ApiError> {
        self.get_json("resources/available-ambulances", &[]).await
    }

    /// `GET /resources/nearest-ambulance`
    pub async fn nearest_ambulance(
        &self,
        district_id: &str,
    ) -> Result<NearestAmbulanceResponse, ApiError> {
        let query = [("district_id", district_id.to_string())];
        self.get_json("resources/nearest-ambulance", &query).await
    }

    /// `GET /hospitals`
    pub async fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.get_json("hospitals", &[]).await
    }

    /// `POST /resources/assign`
    pub async fn assign_resources(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentResponse, ApiError> {
        self.post_json("resources/assign", request).await
    }

    /// `POST /resources/update`
    pub async fn update_resources(
        &self,
        updates: Vec<ResourceUpdate>,
    ) -> Result<Vec<ResourceUnit>, ApiError> {
        let body = ResourceUpdatesRequest { updates };
        self.post_json("resources/update", &body).await
    }

    /// `GET /intelligence/flood-live`
    pub async fn flood_live(&self) -> Result<LiveFloodSnapshot, ApiError> {
        self.get_json("intelligence/flood-live", &[]).await
    }

    /// `GET /intelligence/{endpoint}`. Display-only panels consume these
    /// as opaque JSON.
    pub async fn intelligence_get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        self.get_json(&format!("intelligence/{endpoint}"), query)
            .await
    }

    /// `POST /intelligence/{endpoint}`
    pub async fn intelligence_post(&self, endpoint: &str, body: &Value) -> Result<Value, ApiError> {
        self.post_json(&format!("intelligence/{endpoint}"), body)
            .await
    }
}
