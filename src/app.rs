use yew::prelude::*;

use crate::components::{Footer, Header, RequireRole, RequiredRole};
use crate::hooks::AuthContextProvider;
use crate::pages::{
    Creation, Dashboard, EditSpectacle, Landing, Orders, Payment, Representations, Spectacles,
    User,
};

/// Écrans de l'application. La navigation est un simple état racine:
/// les données de transition (bannière de succès, brouillon de
/// réservation) voyagent dans la variante et meurent à la navigation
/// suivante.
#[derive(Clone, PartialEq)]
pub enum Page {
    Landing,
    Spectacles,
    Representations,
    Orders { message: Option<String> },
    User,
    Creation,
    EditSpectacle { id: String },
    Dashboard,
    Payment { performance_id: i64, quantity: u32 },
}

impl Page {
    pub fn orders() -> Self {
        Page::Orders { message: None }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthContextProvider>
            <AppShell />
        </AuthContextProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let page = use_state(|| Page::Landing);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    // écran par défaut quand une garde refuse l'accès
    let on_redirect = {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(Page::Landing))
    };

    let content = match (*page).clone() {
        Page::Landing => html! { <Landing on_navigate={on_navigate.clone()} /> },
        Page::Spectacles => html! { <Spectacles on_navigate={on_navigate.clone()} /> },
        Page::Representations => {
            html! { <Representations on_navigate={on_navigate.clone()} /> }
        }
        Page::Orders { message } => html! { <Orders {message} /> },
        Page::User => html! { <User on_navigate={on_navigate.clone()} /> },
        Page::Creation => html! {
            <RequireRole role={RequiredRole::Admin} on_redirect={on_redirect.clone()}>
                <Creation on_navigate={on_navigate.clone()} />
            </RequireRole>
        },
        Page::EditSpectacle { id } => html! {
            <RequireRole role={RequiredRole::Admin} on_redirect={on_redirect.clone()}>
                <EditSpectacle {id} on_navigate={on_navigate.clone()} />
            </RequireRole>
        },
        Page::Dashboard => html! {
            <RequireRole role={RequiredRole::Admin} on_redirect={on_redirect.clone()}>
                <Dashboard />
            </RequireRole>
        },
        Page::Payment { performance_id, quantity } => html! {
            <RequireRole role={RequiredRole::Authenticated} on_redirect={{
                // sans session, le paiement renvoie vers la connexion
                let page = page.clone();
                Callback::from(move |_: ()| page.set(Page::User))
            }}>
                <Payment {performance_id} {quantity} on_navigate={on_navigate.clone()} />
            </RequireRole>
        },
    };

    html! {
        <div class="app-layout">
            <Header on_navigate={on_navigate.clone()} />
            <main class="main-content">
                { content }
            </main>
            <Footer />
        </div>
    }
}
