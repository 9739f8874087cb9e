use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::Page;
use crate::hooks::use_auth_context;
use crate::models::SpectacleInput;
use crate::services::spectacle_service;
use crate::utils::validators::is_valid_future_date;

pub(crate) const GENRES: [&str; 8] = [
    "Comédie",
    "Drame",
    "Comédie musicale",
    "Drame musical",
    "Ballet",
    "Impro",
    "Conte musical",
    "Théâtre",
];

#[derive(Properties, PartialEq)]
pub struct CreationProps {
    pub on_navigate: Callback<Page>,
}

/// Écran admin de création de spectacle (monté derrière la garde Admin)
#[function_component(Creation)]
pub fn creation(props: &CreationProps) -> Html {
    let auth = use_auth_context();
    let name = use_state(String::new);
    let description = use_state(String::new);
    let duration = use_state(String::new);
    let genre = use_state(String::new);
    let date = use_state(String::new);
    let image_url = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let name = name.clone();
        let description = description.clone();
        let duration = duration.clone();
        let genre = genre.clone();
        let date = date.clone();
        let image_url = image_url.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);

            if name.is_empty() || description.is_empty() || duration.is_empty() || genre.is_empty()
            {
                error.set(Some(
                    "Veuillez remplir tous les champs obligatoires".to_string(),
                ));
                return;
            }
            if !date.is_empty() && !is_valid_future_date(&date) {
                error.set(Some("La date doit être dans le futur".to_string()));
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

            loading.set(true);
            let client = auth.api_client();
            let name = name.clone();
            let description = description.clone();
            let duration = duration.clone();
            let genre = genre.clone();
            let date = date.clone();
            let image_url = image_url.clone();
            let error = error.clone();
            let success = success.clone();
            let loading = loading.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match spectacle_service::create(&client, &input).await {
                    Ok(created) => {
                        log::info!("✅ Spectacle créé: {}", created.name);
                        success.set(Some("Spectacle créé avec succès !".to_string()));
                        name.set(String::new());
                        description.set(String::new());
                        duration.set(String::new());
                        genre.set(String::new());
                        date.set(String::new());
                        image_url.set(String::new());

                        // retour au catalogue après 2 secondes
                        Timeout::new(2000, move || on_navigate.emit(Page::Spectacles)).forget();
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="creation-page">
            <h2>{"Créer un nouveau spectacle"}</h2>

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
                        placeholder="Ex: Le Roi Lion"
                    />
                </div>

                <div class="form-group">
                    <label for="description">
                        {"Description "}<span class="required">{"*"}</span>
                    </label>
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
                        required=true
                        rows="4"
                        placeholder="Description du spectacle..."
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
                            <option value="" selected={genre.is_empty()}>
                                {"Sélectionner un type"}
                            </option>
                            { for GENRES.iter().map(|g| html! {
                                <option value={*g} selected={*genre == *g}>{*g}</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="date">{"Date (optionnel)"}</label>
                        <input
                            type="date"
                            id="date"
                            value={(*date).clone()}
                            oninput={bind_input(date.clone())}
                        />
                    </div>

                    <div class="form-group">
                        <label for="image_url">{"URL de l'image (optionnel)"}</label>
                        <input
                            type="url"
                            id="image_url"
                            value={(*image_url).clone()}
                            oninput={bind_input(image_url.clone())}
                            placeholder="https://exemple.com/image.jpg"
                        />
                    </div>
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
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        { if *loading { "Création..." } else { "Créer le spectacle" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
