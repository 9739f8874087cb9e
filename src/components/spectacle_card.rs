use yew::prelude::*;

use crate::models::Spectacle;
use crate::utils::constants::DEFAULT_SPECTACLE_IMAGE;
use crate::utils::dates::format_date_fr;

#[derive(Properties, PartialEq)]
pub struct SpectacleCardProps {
    pub spectacle: Spectacle,
    pub on_reserve: Callback<Spectacle>,
    /// Actions d'administration (modifier/supprimer) sur la carte
    #[prop_or(false)]
    pub is_admin: bool,
    #[prop_or_default]
    pub on_edit: Callback<String>,
    #[prop_or_default]
    pub on_delete: Callback<String>,
}

#[function_component(SpectacleCard)]
pub fn spectacle_card(props: &SpectacleCardProps) -> Html {
    let spectacle = &props.spectacle;
    let image = spectacle
        .image_url
        .clone()
        .unwrap_or_else(|| DEFAULT_SPECTACLE_IMAGE.to_string());

    let on_reserve = {
        let on_reserve = props.on_reserve.clone();
        let spectacle = spectacle.clone();
        Callback::from(move |_: MouseEvent| on_reserve.emit(spectacle.clone()))
    };

    html! {
        <div class="spectacle-card">
            <div class="spectacle-thumb">
                <img src={image} alt={spectacle.name.clone()} />
            </div>
            <div class="spectacle-content">
                <h3>{spectacle.name.clone()}</h3>
                <p class="spectacle-desc">{spectacle.description.clone()}</p>
                <div class="spectacle-meta">
                    if let Some(date) = &spectacle.date {
                        <span>{format_date_fr(date)}</span>
                    }
                    <span>{format!("Durée: {}", spectacle.duration)}</span>
                    <span>{format!("Type: {}", spectacle.genre)}</span>
                </div>
                <button class="btn btn-primary" onclick={on_reserve}>
                    {"Réserver"}
                </button>
                if props.is_admin {
                    <div class="card-admin-actions">
                        <button class="btn btn-secondary" onclick={{
                            let on_edit = props.on_edit.clone();
                            let id = spectacle.id.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                        }}>
                            {"Modifier"}
                        </button>
                        <button class="btn btn-danger" onclick={{
                            let on_delete = props.on_delete.clone();
                            let id = spectacle.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        }}>
                            {"Supprimer"}
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
