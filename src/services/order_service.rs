use crate::models::{CreateOrderRequest, Order};
use crate::services::ApiClient;
use crate::utils::ApiError;

/// Commandes de la session courante, les plus récentes d'abord (ordre serveur)
pub async fn get_my_orders(client: &ApiClient) -> Result<Vec<Order>, ApiError> {
    client.get("/orders").await
}

/// Crée la commande à partir des lignes (représentation, quantité) et de la
/// référence de paiement tokenisée. Le backend vérifie disponibilité et prix.
pub async fn create(client: &ApiClient, request: &CreateOrderRequest) -> Result<Order, ApiError> {
    log::info!(
        "🛒 Création de commande ({} ligne(s))",
        request.items.len()
    );
    client.post("/orders", request).await
}
