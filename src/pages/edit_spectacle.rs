use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Page;
use crate::hooks::use_auth_context;
use crate::models::{NewPerformance, Performance, PerformanceStatus, SpectacleInput};
use crate::services::{performance_service, spectacle_service, ApiClient};
use crate::utils::dates::format_datetime_fr;

#[derive(Properties, PartialEq)]
pub struct EditSpectacleProps {
    pub id: String,
    pub on_navigate: Callback<Page>,
}

/// Écran admin d'édition: le spectacle lui-même, plus la gestion de ses
/// représentations (ajout, annulation). Monté derrière la garde Admin.
#[function_component(EditSpectacle)]
pub fn edit_spectacle(props: &EditSpectacleProps) -> Html {
    let auth = use_auth_context();
    let name = use_state(String::new);
    let description = use_state(String::new);
    let duration = use_state(String::new);
    let genre = use_state(String::new);
    let date = use_state(String::new);
    let image_url = use_state(String::new);
    let performances = use_state(Vec::<Performance>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    // refs du formulaire d'ajout de représentation
    let perf_date_ref = use_node_ref();
    let perf_capacity_ref = use_node_ref();
    let perf_price_ref = use_node_ref();

    // Chargement du spectacle et de ses représentations
    {
        let name = name.clone();
        let description = description.clone();
        let duration = duration.clone();
        let genre = genre.clone();
        let date = date.clone();
        let image_url = image_url.clone();
        let performances = performances.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);
                match spectacle_service::get_with_performances(&ApiClient::new(), &id).await {
                    Ok(detail) => {
                        let spectacle = detail.spectacle;
                        name.set(spectacle.name);
                        description.set(spectacle.description);
                        duration.set(spectacle.duration);
                        genre.set(spectacle.genre);
                        date.set(spectacle.date.unwrap_or_default());
                        image_url.set(spectacle.image_url.unwrap_or_default());
                        performances.set(detail.performances);
                    }
                    Err(err) => {
                        log::error!("❌ Erreur chargement spectacle: {}", err);
                        error.set(Some(err.user_message()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let id = props.id.clone();
        let name = name.clone();
        let description = description.clone();
        let duration = duration.clone();
        let genre = genre.clone();
        let date = date.clone();
        let image_url = image_url.clone();
        let error = error.clone();
        let success = success.clone();
        let saving = saving.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);

            if name.is_empty() || duration.is_empty() || genre.is_empty() {
                error.set(Some(
                    "Veuillez remplir tous les champs obligatoires".to_string(),
                ));
                return;
            }

            let input = SpectacleInput {
                name: (*name).clone(),
                description: (*description).clone(),
                duration: (*duration).clone(),
                genre: (*genre).clone(),
                date: (!date.is_empty()).then(|| (*date).clone()),
                image_url: (!image_url.is_empty()).then(|| (*image_url).clone()),
            };

            saving.set(true);
            let client = auth.api_client();
            let id = id.clone();
            let error = error.clone();
            let success = success.clone();
            let saving = saving.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match spectacle_service::update(&client, &id, &input).await {
                    Ok(_) => {
                        success.set(Some("Spectacle modifié avec succès !".to_string()));
                        Timeout::new(2000, move || on_navigate.emit(Page::Spectacles)).forget();
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                saving.set(false);
            });
        })
    };

    let on_add_performance = {
        let auth = auth.clone();
        let id = props.id.clone();
        let performances = performances.clone();
        let error = error.clone();
        let perf_date_ref = perf_date_ref.clone();
        let perf_capacity_ref = perf_capacity_ref.clone();
        let perf_price_ref = perf_price_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let perf_date = perf_date_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let capacity = perf_capacity_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<u32>().ok());
            let unit_price = perf_price_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<f64>().ok());

            let (Some(capacity), Some(unit_price)) = (capacity, unit_price) else {
                error.set(Some(
                    "Capacité et prix doivent être des nombres valides".to_string(),
                ));
                return;
            };
            if perf_date.is_empty() || capacity == 0 || unit_price <= 0.0 {
                error.set(Some(
                    "Date, capacité et prix sont requis pour une représentation".to_string(),
                ));
                return;
            }

            let new_performance = NewPerformance { date: perf_date, capacity, unit_price };
            let client = auth.api_client();
            let id = id.clone();
            let performances = performances.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match performance_service::create(&client, &id, &new_performance).await {
                    Ok(created) => {
                        let mut list = (*performances).clone();
                        list.push(created);
                        performances.set(list);
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    let on_cancel_performance = {
        let auth = auth.clone();
        let performances = performances.clone();
        let error = error.clone();
        Callback::from(move |performance: Performance| {
            let client = auth.api_client();
            let performances = performances.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match performance_service::cancel(&client, &performance).await {
                    Ok(cancelled) => {
                        let list = (*performances)
                            .clone()
                            .into_iter()
                            .map(|p| if p.id == cancelled.id { cancelled.clone() } else { p })
                            .collect();
                        performances.set(list);
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    html! {
        <div class="creation-page">
            <h2>{"Modifier le spectacle"}</h2>

            if let Some(message) = (*error).clone() {
                <div class="alert error">{message}</div>
            }
            if let Some(message) = (*success).clone() {
                <div class="alert success">{message}</div>
            }

            <form class="creation-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">
                        {"Nom du spectacle "}<span class="required">{"*"}</span>
                    </label>
                    <input
                        type="text"
                        id="name"
                        value={(*name).clone()}
                        oninput={bind_input(name.clone())}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        value={(*description).clone()}
                        oninput={{
                            let description = description.clone();
                            Callback::from(move |e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                description.set(area.value());
                            })
                        }}
                        rows="4"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="duration">
                            {"Durée "}<span class="required">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="duration"
                            value={(*duration).clone()}
                            oninput={bind_input(duration.clone())}
                            required=true
                            placeholder="Ex: 2h10"
                        />
                    </div>

                    <div class="form-group">
                        <label for="genre">
                            {"Type "}<span class="required">{"*"}</span>
                        </label>
                        <select
                            id="genre"
                            onchange={{
                                let genre = genre.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    genre.set(select.value());
                                })
                            }}
                            required=true
                        >
                            { for super::creation::GENRES.iter().map(|g| html! {
                                <option value={*g} selected={*genre == *g}>{*g}</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="image_url">{"URL de l'image (optionnel)"}</label>
                    <input
                        type="url"
                        id="image_url"
                        value={(*image_url).clone()}
                        oninput={bind_input(image_url.clone())}
                    />
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={{
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Spectacles))
                        }}
                    >
                        {"Annuler"}
                    </button>
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        { if *saving { "Enregistrement..." } else { "Enregistrer les modifications" } }
                    </button>
                </div>
            </form>

            <section class="performances-admin">
                <h3>{"Représentations"}</h3>
                if performances.is_empty() {
                    <p>{"Aucune représentation programmée."}</p>
                }
                <ul class="performances-list">
                    { for performances.iter().map(|performance| {
                        let cancellable = performance.status == PerformanceStatus::Scheduled;
                        let on_cancel = {
                            let on_cancel_performance = on_cancel_performance.clone();
                            let performance = performance.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_cancel_performance.emit(performance.clone())
                            })
                        };
                        html! {
                            <li key={performance.id} class="performance-row">
                                <span>{format_datetime_fr(&performance.date)}</span>
                                <span>{format!("{} places", performance.capacity)}</span>
                                <span>{format!("{}€", performance.unit_price)}</span>
                                <span>{format!("{} restantes", performance.available_tickets)}</span>
                                if cancellable {
                                    <button class="btn btn-danger" onclick={on_cancel}>
                                        {"Annuler"}
                                    </button>
                                } else {
                                    <span class="performance-status">{format!("{:?}", performance.status)}</span>
                                }
                            </li>
                        }
                    }) }
                </ul>

                <form class="performance-form" onsubmit={on_add_performance}>
                    <h4>{"Ajouter une représentation"}</h4>
                    <div class="form-row">
                        <input type="datetime-local" ref={perf_date_ref} required=true />
                        <input
                            type="number"
                            min="1"
                            placeholder="Capacité"
                            ref={perf_capacity_ref}
                            required=true
                        />
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="Prix unitaire (€)"
                            ref={perf_price_ref}
                            required=true
                        />
                        <button type="submit" class="btn btn-primary">{"Ajouter"}</button>
                    </div>
                </form>
            </section>
        </div>
    }
}
