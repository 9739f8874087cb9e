use yew::prelude::*;

use crate::app::Page;
use crate::hooks::use_auth_context;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_auth_context();
    let session = auth.session();

    let nav_link = |label: &str, page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page.clone());
        });
        html! { <a href="#" {onclick}>{label}</a> }
    };

    html! {
        <header class="header">
            <div class="header-container">
                <a href="#" class="logo" onclick={{
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(Page::Landing);
                    })
                }}>
                    <h1>{"Théâtre"}</h1>
                </a>
                <nav class="nav">
                    { nav_link("Spectacles", Page::Spectacles) }
                    { nav_link("Représentations", Page::Representations) }
                    if session.is_authenticated() {
                        { nav_link("Mes Commandes", Page::orders()) }
                    }
                    // liens admin, cohérents avec les gardes d'écran
                    if session.is_admin() {
                        { nav_link("Créer un spectacle", Page::Creation) }
                        { nav_link("Dashboard", Page::Dashboard) }
                    }
                    { nav_link("Mon Compte", Page::User) }
                </nav>
            </div>
        </header>
    }
}
