// ============================================================================
// USE ORDERS HOOK - Commandes de la session courante
// ============================================================================

use yew::prelude::*;

use crate::hooks::auth_context::use_auth_context;
use crate::hooks::use_auth::UseAuthHandle;
use crate::models::{CreateOrderRequest, Order};
use crate::services::{order_service, ApiClient};
use crate::utils::ApiError;

#[derive(Clone, PartialEq)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Insertion optimiste: la commande fraîche passe en tête, sans refetch
fn prepend_order(mut orders: Vec<Order>, order: Order) -> Vec<Order> {
    orders.insert(0, order);
    orders
}

#[derive(Clone)]
pub struct UseOrdersHandle {
    pub state: UseStateHandle<OrdersState>,
    pub refetch: Callback<()>,
    auth: UseAuthHandle,
}

impl UseOrdersHandle {
    /// Crée la commande; en succès elle est insérée en tête de liste et
    /// renvoyée; en échec l'état garde la liste telle quelle, l'erreur est
    /// enregistrée ET propagée au formulaire appelant.
    pub async fn create(&self, request: CreateOrderRequest) -> Result<Order, ApiError> {
        match order_service::create(&self.auth.api_client(), &request).await {
            Ok(order) => {
                let current = (*self.state).clone();
                self.state.set(OrdersState {
                    orders: prepend_order(current.orders, order.clone()),
                    loading: current.loading,
                    error: None,
                });
                Ok(order)
            }
            Err(error) => {
                let current = (*self.state).clone();
                self.state.set(OrdersState {
                    error: Some(error.user_message()),
                    ..current
                });
                Err(error)
            }
        }
    }
}

fn load_orders(state: UseStateHandle<OrdersState>, client: ApiClient) {
    wasm_bindgen_futures::spawn_local(async move {
        state.set(OrdersState {
            orders: (*state).orders.clone(),
            loading: true,
            error: None,
        });

        match order_service::get_my_orders(&client).await {
            Ok(orders) => {
                log::info!("🎟️ Commandes chargées: {}", orders.len());
                state.set(OrdersState { orders, loading: false, error: None });
            }
            Err(error) => {
                log::error!("❌ Erreur chargement commandes: {}", error);
                // la liste précédente reste affichable à côté de l'erreur
                state.set(OrdersState {
                    orders: (*state).orders.clone(),
                    loading: false,
                    error: Some(error.user_message()),
                });
            }
        }
    });
}

#[hook]
pub fn use_orders() -> UseOrdersHandle {
    let auth = use_auth_context();
    let state = use_state(|| OrdersState {
        orders: Vec::new(),
        loading: true,
        error: None,
    });

    // Chargement au montage, relancé si la session change (login/logout)
    {
        let state = state.clone();
        let auth = auth.clone();
        use_effect_with(auth.token(), move |_| {
            load_orders(state, auth.api_client());
            || ()
        });
    }

    let refetch = {
        let state = state.clone();
        let auth = auth.clone();
        Callback::from(move |_| load_orders(state.clone(), auth.api_client()))
    };

    UseOrdersHandle { state, refetch, auth }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64) -> Order {
        serde_json::from_str(&format!(
            r#"{{"id":{},"createdAt":"2026-03-01T10:00:00","status":"Paid"}}"#,
            id
        ))
        .unwrap()
    }

    #[test]
    fn fresh_order_goes_first() {
        let orders = prepend_order(vec![order(1), order(2)], order(3));
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn prepend_into_empty_list() {
        let orders = prepend_order(Vec::new(), order(9));
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 9);
    }
}
