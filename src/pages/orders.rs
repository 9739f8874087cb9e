use yew::prelude::*;

use crate::hooks::use_orders;
use crate::utils::dates::format_date_fr;

#[derive(Properties, PartialEq)]
pub struct OrdersProps {
    /// Bannière de succès après un paiement, portée par la navigation
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(Orders)]
pub fn orders(props: &OrdersProps) -> Html {
    let orders = use_orders();
    let state = orders.state.clone();

    // arrivée depuis le paiement: recharger pour voir la commande confirmée
    {
        let refetch = orders.refetch.clone();
        use_effect_with(props.message.clone(), move |message| {
            if message.is_some() {
                refetch.emit(());
            }
            || ()
        });
    }

    if state.loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    html! {
        <div class="orders-page">
            <h2>{"Mes Commandes"}</h2>
            if let Some(message) = props.message.clone() {
                <div class="alert success">{message}</div>
            }
            if let Some(message) = (*state).error.clone() {
                <div class="alert error">{message}</div>
            }
            <div class="orders-list">
                if state.orders.is_empty() {
                    <p>{"Aucune commande pour le moment."}</p>
                } else {
                    { for state.orders.iter().map(|order| html! {
                        <div key={order.id} class="order-card">
                            <h3>{format!("Commande #{}", order.id)}</h3>
                            <div class="order-info">
                                <p><strong>{"Spectacle: "}</strong>{order.spectacle_name().to_string()}</p>
                                <p>{format!("Date: {}", format_date_fr(&order.created_at))}</p>
                                <p>{format!("Statut: {}", order.status)}</p>
                                <p>{format!("Prix payé: {:.2}€", order.total_price.unwrap_or(0.0))}</p>
                                <p>{format!("Nombre de tickets: {}", order.ticket_count())}</p>
                            </div>
                        </div>
                    }) }
                }
            </div>
        </div>
    }
}
