use crate::models::{NewPerformance, Performance, PerformanceStatus};
use crate::services::ApiClient;
use crate::utils::ApiError;

pub async fn get_all(client: &ApiClient) -> Result<Vec<Performance>, ApiError> {
    client.get("/performances").await
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> Result<Performance, ApiError> {
    client.get(&format!("/performances/{}", id)).await
}

/// Ajoute une représentation à un spectacle (admin)
pub async fn create(
    client: &ApiClient,
    spectacle_id: &str,
    data: &NewPerformance,
) -> Result<Performance, ApiError> {
    log::info!("🗓️ Nouvelle représentation pour le spectacle {}", spectacle_id);
    client
        .post(&format!("/spectacles/{}/performances", spectacle_id), data)
        .await
}

pub async fn update(
    client: &ApiClient,
    performance: &Performance,
) -> Result<Performance, ApiError> {
    client
        .put(&format!("/performances/{}", performance.id), performance)
        .await
}

/// Annulation: la représentation passe au statut non réservable
pub async fn cancel(
    client: &ApiClient,
    performance: &Performance,
) -> Result<Performance, ApiError> {
    log::info!("🚫 Annulation de la représentation {}", performance.id);
    let cancelled = Performance {
        status: PerformanceStatus::Cancelled,
        ..performance.clone()
    };
    update(client, &cancelled).await
}
