use crate::models::{Spectacle, SpectacleInput, SpectacleWithPerformances};
use crate::services::ApiClient;
use crate::utils::ApiError;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
}

impl SearchParams {
    pub fn by_name(name: &str) -> Self {
        Self { name: Some(name.to_string()), ..Self::default() }
    }

    fn to_query(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(format!("name={}", urlencode(name)));
        }
        if let Some(genre) = &self.genre {
            pairs.push(format!("category={}", urlencode(genre)));
        }
        if let Some(min) = self.min_duration {
            pairs.push(format!("minDuration={}", min));
        }
        if let Some(max) = self.max_duration {
            pairs.push(format!("maxDuration={}", max));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

fn urlencode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

pub async fn get_all(client: &ApiClient) -> Result<Vec<Spectacle>, ApiError> {
    client.get("/spectacles").await
}

pub async fn get_by_id(client: &ApiClient, id: &str) -> Result<Spectacle, ApiError> {
    client.get(&format!("/spectacles/{}", id)).await
}

/// Spectacle + ses représentations, pour le choix en réservation
pub async fn get_with_performances(
    client: &ApiClient,
    id: &str,
) -> Result<SpectacleWithPerformances, ApiError> {
    client.get(&format!("/spectacles/{}/performances", id)).await
}

pub async fn search(
    client: &ApiClient,
    params: &SearchParams,
) -> Result<Vec<Spectacle>, ApiError> {
    client.get(&format!("/spectacles/search{}", params.to_query())).await
}

pub async fn create(
    client: &ApiClient,
    data: &SpectacleInput,
) -> Result<Spectacle, ApiError> {
    log::info!("🎭 Création du spectacle {}", data.name);
    client.post("/spectacles", data).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    data: &SpectacleInput,
) -> Result<Spectacle, ApiError> {
    client.put(&format!("/spectacles/{}", id), data).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    log::info!("🗑️ Suppression du spectacle {}", id);
    client.delete(&format!("/spectacles/{}", id)).await
}
