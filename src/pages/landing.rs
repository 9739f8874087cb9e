use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let go = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page.clone());
        })
    };

    html! {
        <div class="landing">
            <section class="hero">
                <div class="hero__content">
                    <p class="hero__eyebrow">{"Théâtre & émotions en direct"}</p>
                    <h2>{"Réservez vos prochaines soirées en quelques clics"}</h2>
                    <p class="hero__subtitle">
                        {"Découvrez les spectacles à l'affiche, choisissez votre représentation \
                          et réservez vos places au meilleur tarif."}
                    </p>
                    <div class="hero__cta">
                        <a href="#" class="btn btn-primary" onclick={go(Page::Spectacles)}>
                            {"Voir les spectacles"}
                        </a>
                        <a href="#" class="btn btn-secondary" onclick={go(Page::Representations)}>
                            {"Représentations à venir"}
                        </a>
                    </div>
                </div>
            </section>

            <section class="features">
                <a href="#" class="feature-card feature-card-link" onclick={go(Page::Representations)}>
                    <h3>{"Programmation claire"}</h3>
                    <p>{"Filtres par spectacle et représentation pour trouver rapidement."}</p>
                </a>
                <a href="#" class="feature-card feature-card-link" onclick={go(Page::Spectacles)}>
                    <h3>{"Spectacles"}</h3>
                    <p>{"Consultez les spectacles à l'affiche et réservez vos places."}</p>
                </a>
                <a href="#" class="feature-card feature-card-link" onclick={go(Page::orders())}>
                    <h3>{"Suivi de vos commandes"}</h3>
                    <p>{"Retrouvez vos réservations et billets en un clin d'œil."}</p>
                </a>
            </section>
        </div>
    }
}
