use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Performance, Spectacle};
use crate::services::{spectacle_service, ApiClient};
use crate::utils::dates::format_datetime_fr;
use crate::utils::validators;

/// Seules les représentations à venir et encore ouvertes à la vente sont
/// proposées à la réservation.
fn bookable_performances(performances: Vec<Performance>) -> Vec<Performance> {
    performances.into_iter().filter(|p| p.is_bookable()).collect()
}

#[derive(Properties, PartialEq)]
pub struct ReservationModalProps {
    pub spectacle: Spectacle,
    pub on_close: Callback<()>,
    /// (id de représentation, quantité) - le brouillon part vers le paiement
    pub on_confirm: Callback<(i64, u32)>,
}

#[function_component(ReservationModal)]
pub fn reservation_modal(props: &ReservationModalProps) -> Html {
    let performances = use_state(Vec::<Performance>::new);
    let loading = use_state(|| true);
    let selected = use_state(|| None::<i64>);
    let quantity_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    // Charger les représentations du spectacle à l'ouverture.
    // Le brouillon (sélection + quantité) est local: fermer la modale le jette.
    {
        let performances = performances.clone();
        let loading = loading.clone();
        let selected = selected.clone();
        let error = error.clone();
        use_effect_with(props.spectacle.id.clone(), move |spectacle_id| {
            let spectacle_id = spectacle_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);
                match spectacle_service::get_with_performances(&ApiClient::new(), &spectacle_id)
                    .await
                {
                    Ok(detail) => {
                        let available = bookable_performances(detail.performances);
                        if available.is_empty() {
                            error.set(Some(
                                "Aucune représentation disponible pour ce spectacle".to_string(),
                            ));
                        } else {
                            selected.set(available.first().map(|p| p.id));
                        }
                        performances.set(available);
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

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            selected.set(value.parse::<i64>().ok());
        })
    };

    let on_submit = {
        let selected = selected.clone();
        let quantity_ref = quantity_ref.clone();
        let error = error.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let quantity = quantity_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<u32>().ok())
                .unwrap_or(0);

            let field_errors = validators::validate_reservation(*selected, quantity);
            if let Some(message) =
                field_errors.get("performance").or(field_errors.get("quantity"))
            {
                error.set(Some(message.to_string()));
                return;
            }

            if let Some(performance_id) = *selected {
                on_confirm.emit((performance_id, quantity));
            }
        })
    };

    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={stop_propagation}>
                <div class="modal-header">
                    <h3>{format!("Réserver {}", props.spectacle.name)}</h3>
                    <button
                        class="btn-close"
                        onclick={props.on_close.reform(|_| ())}
                        aria-label="Fermer"
                    >
                        {"×"}
                    </button>
                </div>
                <form class="modal-body" onsubmit={on_submit}>
                    if *loading {
                        <div class="loading">{"Chargement des représentations..."}</div>
                    } else if performances.is_empty() {
                        <div class="form-error">{"Aucune représentation disponible"}</div>
                    } else {
                        <label>
                            {"Représentation"}
                            <select onchange={on_select} required=true>
                                { for performances.iter().map(|perf| {
                                    html! {
                                        <option
                                            value={perf.id.to_string()}
                                            selected={Some(perf.id) == *selected}
                                        >
                                            {format!(
                                                "{} - {}€ ({} places disponibles)",
                                                format_datetime_fr(&perf.date),
                                                perf.unit_price,
                                                perf.available_tickets,
                                            )}
                                        </option>
                                    }
                                }) }
                            </select>
                        </label>
                        <label>
                            {"Quantité de tickets"}
                            <input
                                type="number"
                                min="1"
                                max="10"
                                value="1"
                                ref={quantity_ref}
                                required=true
                            />
                        </label>
                    }
                    if let Some(message) = (*error).clone() {
                        <div class="form-error">{message}</div>
                    }
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={props.on_close.reform(|_| ())}
                        >
                            {"Annuler"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*loading || performances.is_empty()}
                        >
                            {"Confirmer la réservation"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformanceStatus;

    fn performance(id: i64, status: PerformanceStatus, available: u32) -> Performance {
        Performance {
            id,
            spectacle_id: "s1".into(),
            date: "2026-09-12T20:30:00".into(),
            capacity: 100,
            unit_price: 30.0,
            available_tickets: available,
            status,
        }
    }

    #[test]
    fn only_scheduled_with_seats_are_offered() {
        let offered = bookable_performances(vec![
            performance(1, PerformanceStatus::Scheduled, 5),
            performance(2, PerformanceStatus::Scheduled, 0),
            performance(3, PerformanceStatus::Cancelled, 8),
            performance(4, PerformanceStatus::Completed, 8),
            performance(5, PerformanceStatus::Scheduled, 1),
        ]);
        let ids: Vec<i64> = offered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(bookable_performances(Vec::new()).is_empty());
    }
}
