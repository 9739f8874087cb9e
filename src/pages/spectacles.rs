use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Page;
use crate::components::{ReservationModal, SpectacleCard};
use crate::hooks::{use_auth_context, use_spectacles};
use crate::models::Spectacle;
use crate::services::spectacle_service::{self, SearchParams};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SpectaclesProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Spectacles)]
pub fn spectacles(props: &SpectaclesProps) -> Html {
    let auth = use_auth_context();
    let catalogue = use_spectacles();
    let selected = use_state(|| None::<Spectacle>);
    // résultats de recherche: None = pas de filtre, la liste du hook s'affiche
    let search_results = use_state(|| None::<Vec<Spectacle>>);
    let search_error = use_state(|| None::<String>);
    let search_ref = use_node_ref();

    let on_reserve = {
        let selected = selected.clone();
        Callback::from(move |spectacle: Spectacle| selected.set(Some(spectacle)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let on_confirm = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |(performance_id, quantity): (i64, u32)| {
            on_navigate.emit(Page::Payment { performance_id, quantity });
        })
    };

    let on_edit = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |id: String| on_navigate.emit(Page::EditSpectacle { id }))
    };

    let on_delete = {
        let auth = auth.clone();
        let refetch = catalogue.refetch.clone();
        let search_results = search_results.clone();
        Callback::from(move |id: String| {
            let client = auth.api_client();
            let refetch = refetch.clone();
            let search_results = search_results.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match spectacle_service::delete(&client, &id).await {
                    Ok(()) => {
                        search_results.set(None);
                        refetch.emit(());
                    }
                    Err(err) => log::error!("❌ Erreur suppression spectacle: {}", err),
                }
            });
        })
    };

    let on_search = {
        let search_results = search_results.clone();
        let search_error = search_error.clone();
        let search_ref = search_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = search_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let query = query.trim().to_string();

            // champ vide: retour à la liste complète du hook
            if query.is_empty() {
                search_results.set(None);
                search_error.set(None);
                return;
            }

            let search_results = search_results.clone();
            let search_error = search_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                search_error.set(None);
                match spectacle_service::search(&ApiClient::new(), &SearchParams::by_name(&query))
                    .await
                {
                    Ok(results) => search_results.set(Some(results)),
                    Err(err) => search_error.set(Some(err.user_message())),
                }
            });
        })
    };

    let state = catalogue.state.clone();
    if state.loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    let is_admin = auth.is_admin();
    let shown: Vec<Spectacle> = match &*search_results {
        Some(results) => results.clone(),
        None => state.spectacles.clone(),
    };

    html! {
        <div class="spectacles-page">
            <h2>{"Nos Spectacles"}</h2>

            <form class="search-bar" onsubmit={on_search}>
                <input
                    type="search"
                    placeholder="Rechercher un spectacle..."
                    ref={search_ref}
                />
                <button type="submit" class="btn btn-secondary">{"Rechercher"}</button>
            </form>

            if let Some(message) = (*state).error.clone() {
                <div class="alert error">{message}</div>
            }
            if let Some(message) = (*search_error).clone() {
                <div class="alert error">{message}</div>
            }

            if shown.is_empty() {
                <p>{"Aucun spectacle ne correspond à votre recherche."}</p>
            }

            <div class="spectacles-grid">
                { for shown.iter().map(|spectacle| html! {
                    <SpectacleCard
                        key={spectacle.id.clone()}
                        spectacle={spectacle.clone()}
                        on_reserve={on_reserve.clone()}
                        is_admin={is_admin}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                    />
                }) }
            </div>

            if let Some(spectacle) = (*selected).clone() {
                <ReservationModal
                    {spectacle}
                    on_close={on_close}
                    on_confirm={on_confirm}
                />
            }
        </div>
    }
}
