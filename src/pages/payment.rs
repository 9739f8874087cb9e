use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Page;
use crate::config::CONFIG;
use crate::hooks::{use_auth_context, use_orders};
use crate::models::{CreateOrderRequest, OrderItem, Performance, Spectacle};
use crate::services::{performance_service, spectacle_service, ApiClient};
use crate::utils::dates::format_datetime_fr;
use crate::utils::stripe_ffi;

#[derive(Properties, PartialEq)]
pub struct PaymentProps {
    /// Brouillon de réservation issu de la modale
    pub performance_id: i64,
    pub quantity: u32,
    pub on_navigate: Callback<Page>,
}

/// Page de paiement. La carte vit dans le Card Element de Stripe (iframe),
/// on ne manipule ici que la référence tokenisée (pm_...).
#[function_component(Payment)]
pub fn payment(props: &PaymentProps) -> Html {
    let auth = use_auth_context();
    let orders = use_orders();
    let performance = use_state(|| None::<Performance>);
    let spectacle = use_state(|| None::<Spectacle>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let card_name_ref = use_node_ref();

    // Détail représentation + spectacle pour le récapitulatif
    {
        let performance = performance.clone();
        let spectacle = spectacle.clone();
        let error = error.clone();
        use_effect_with(props.performance_id, move |performance_id| {
            let performance_id = *performance_id;
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                match performance_service::get_by_id(&client, performance_id).await {
                    Ok(perf) => {
                        match spectacle_service::get_by_id(&client, &perf.spectacle_id).await {
                            Ok(spec) => spectacle.set(Some(spec)),
                            Err(err) => {
                                log::error!("❌ Erreur chargement spectacle: {}", err);
                                error.set(Some(err.user_message()));
                            }
                        }
                        performance.set(Some(perf));
                    }
                    Err(err) => {
                        log::error!("❌ Erreur chargement représentation: {}", err);
                        error.set(Some(err.user_message()));
                    }
                }
            });
            || ()
        });
    }

    // Montage du Card Element une fois le conteneur rendu
    use_effect_with((), move |_| {
        if CONFIG.stripe_configured() {
            stripe_ffi::mount_stripe_card_element(&CONFIG.stripe_publishable_key, "card-element");
        }
        move || {
            if CONFIG.stripe_configured() {
                stripe_ffi::unmount_stripe_card_element();
            }
        }
    });

    let on_submit = {
        let auth = auth.clone();
        let orders = orders.clone();
        let card_name_ref = card_name_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();
        let performance_id = props.performance_id;
        let quantity = props.quantity;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let card_name = card_name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if card_name.trim().is_empty() {
                error.set(Some("Nom sur la carte requis".to_string()));
                return;
            }

            loading.set(true);
            let auth = auth.clone();
            let orders = orders.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let email = auth.user().map(|u| u.email).unwrap_or_default();

                // 1. Tokenisation de la carte chez Stripe
                let payment_method_id = match stripe_ffi::create_card_payment_method(
                    card_name.trim(),
                    &email,
                )
                .await
                {
                    Ok(value) => value.as_string(),
                    Err(js_error) => {
                        error.set(Some(stripe_ffi::stripe_error_message(js_error)));
                        loading.set(false);
                        return;
                    }
                };

                // 2. Création de la commande avec la référence de paiement
                let request = CreateOrderRequest {
                    items: vec![OrderItem { performance_id, quantity }],
                    payment_method_id,
                };
                match orders.create(request).await {
                    Ok(order) => {
                        log::info!("✅ Paiement accepté, commande #{}", order.id);
                        let email_message = if email.is_empty() {
                            String::new()
                        } else {
                            format!(" Un email de confirmation vous a été envoyé à {}.", email)
                        };
                        on_navigate.emit(Page::Orders {
                            message: Some(format!(
                                "Paiement effectué avec succès !{}",
                                email_message
                            )),
                        });
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    // Stripe non configuré: pas de formulaire du tout
    if !CONFIG.stripe_configured() {
        return html! {
            <div class="payment-page">
                <div class="payment-container">
                    <div class="alert error">
                        {"Stripe n'est pas configuré. Ajoutez STRIPE_PUBLISHABLE_KEY dans votre environnement."}
                    </div>
                </div>
            </div>
        };
    }

    let (Some(perf), Some(show)) = ((*performance).clone(), (*spectacle).clone()) else {
        return html! {
            <div class="payment-page">
                if let Some(message) = (*error).clone() {
                    <div class="alert error">{message}</div>
                } else {
                    <div class="loading">{"Chargement..."}</div>
                }
            </div>
        };
    };

    let total = perf.unit_price * props.quantity as f64;

    html! {
        <div class="payment-page">
            <div class="payment-container">
                <div class="payment-summary">
                    <h2>{"Récapitulatif de votre commande"}</h2>
                    <div class="summary-card">
                        <h3>{show.name.clone()}</h3>
                        <p class="performance-date">{format_datetime_fr(&perf.date)}</p>
                        <div class="summary-details">
                            <p>{format!("Quantité: {} ticket(s)", props.quantity)}</p>
                            <p>{format!("Prix unitaire: {:.2}€", perf.unit_price)}</p>
                            <p class="total-price">
                                <strong>{format!("Total: {:.2}€", total)}</strong>
                            </p>
                        </div>
                    </div>
                </div>

                <div class="payment-form-container">
                    <h2>{"Informations de paiement"}</h2>
                    if let Some(message) = (*error).clone() {
                        <div class="alert error">{message}</div>
                    }

                    <form class="payment-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="card-element">{"Numéro de carte"}</label>
                            <div id="card-element" class="stripe-card-element"></div>
                        </div>

                        <div class="form-group">
                            <label for="card-name">{"Nom sur la carte"}</label>
                            <input
                                type="text"
                                id="card-name"
                                placeholder="JEAN DUPONT"
                                ref={card_name_ref}
                                required=true
                            />
                        </div>

                        <div class="payment-info">
                            <p class="info-text">
                                <small>
                                    {"💳 Le paiement est traité par Stripe. Un email de confirmation vous sera envoyé après validation."}
                                </small>
                            </p>
                        </div>

                        <div class="form-actions">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                disabled={*loading}
                                onclick={{
                                    let on_navigate = props.on_navigate.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        on_navigate.emit(Page::Spectacles)
                                    })
                                }}
                            >
                                {"Annuler"}
                            </button>
                            <button type="submit" class="btn btn-primary" disabled={*loading}>
                                { if *loading {
                                    "Traitement...".to_string()
                                } else {
                                    format!("Payer {:.2}€", total)
                                } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
