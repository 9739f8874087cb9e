use yew::prelude::*;

use crate::app::Page;
use crate::models::{Performance, PerformanceStatus};
use crate::services::{performance_service, ApiClient};
use crate::utils::dates::format_datetime_fr;

#[derive(Properties, PartialEq)]
pub struct RepresentationsProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Representations)]
pub fn representations(props: &RepresentationsProps) -> Html {
    let performances = use_state(Vec::<Performance>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let performances = performances.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match performance_service::get_all(&ApiClient::new()).await {
                    Ok(list) => {
                        log::info!("🗓️ Représentations chargées: {}", list.len());
                        performances.set(list);
                    }
                    Err(err) => {
                        log::error!("❌ Erreur chargement représentations: {}", err);
                        error.set(Some(err.user_message()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    let status_label = |status: PerformanceStatus| match status {
        PerformanceStatus::Scheduled => "Programmée",
        PerformanceStatus::Cancelled => "Annulée",
        PerformanceStatus::Completed => "Terminée",
        PerformanceStatus::Unknown => "Statut inconnu",
    };

    html! {
        <div class="representations-page">
            <h2>{"Représentations"}</h2>
            if let Some(message) = (*error).clone() {
                <div class="alert error">{message}</div>
            }
            <div class="representations-list">
                { for performances.iter().map(|performance| html! {
                    <div key={performance.id} class="representation-card">
                        <h3>{format!("Représentation #{}", performance.id)}</h3>
                        <div class="representation-info">
                            <p>{format!("Date: {}", format_datetime_fr(&performance.date))}</p>
                            <p>{format!("Capacité: {}", performance.capacity)}</p>
                            <p>{format!("Prix: {}€", performance.unit_price)}</p>
                            <p>{format!("Places disponibles: {}", performance.available_tickets)}</p>
                            <p>{format!("Statut: {}", status_label(performance.status))}</p>
                        </div>
                        if performance.is_bookable() {
                            <button
                                class="btn btn-primary"
                                onclick={{
                                    let on_navigate = props.on_navigate.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_navigate.emit(Page::Spectacles);
                                    })
                                }}
                            >
                                {"Réserver"}
                            </button>
                        }
                    </div>
                }) }
            </div>
        </div>
    }
}
