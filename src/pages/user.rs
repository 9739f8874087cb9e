use yew::prelude::*;

use crate::app::Page;
use crate::components::{CreateAccount, LoginForm};
use crate::hooks::use_auth_context;

#[derive(Clone, Copy, PartialEq)]
enum View {
    Menu,
    Login,
    CreateAccount,
    Profile,
}

#[derive(Properties, PartialEq)]
pub struct UserProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(User)]
pub fn user(props: &UserProps) -> Html {
    let auth = use_auth_context();
    let session = auth.session();
    let view = use_state(|| View::Menu);

    // la vue suit la session: connecté => profil, sinon menu
    {
        let view = view.clone();
        use_effect_with(session.clone(), move |session| {
            if session.is_authenticated() {
                view.set(View::Profile);
            } else if *view == View::Profile {
                view.set(View::Menu);
            }
            || ()
        });
    }

    // Profil re-synchronisé à l'arrivée sur la page. Un token caduc (401)
    // déconnecte via le provider - rien d'autre à faire ici.
    {
        let auth = auth.clone();
        use_effect_with(auth.token(), move |_| {
            if auth.is_authenticated() {
                let auth = auth.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = auth.refresh_current_user().await {
                        log::warn!("⚠️ Profil non rafraîchi: {}", err);
                    }
                });
            }
            || ()
        });
    }

    if session.loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    let go = |target: View| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(target))
    };

    let back_button = html! {
        <button class="btn-back" onclick={go(View::Menu)}>
            {"← Retour"}
        </button>
    };

    match *view {
        View::Menu => html! {
            <div class="user-page">
                <h2>{"Mon Compte"}</h2>
                <div class="auth-menu">
                    <button class="btn btn-primary btn-large" onclick={go(View::Login)}>
                        {"Se connecter"}
                    </button>
                    <button class="btn btn-primary btn-large" onclick={go(View::CreateAccount)}>
                        {"Créer un compte"}
                    </button>
                </div>
            </div>
        },
        View::Login => html! {
            <div class="user-page">
                { back_button }
                <LoginForm
                    on_success={{
                        let view = view.clone();
                        Callback::from(move |_| view.set(View::Profile))
                    }}
                    on_switch_to_create={{
                        let view = view.clone();
                        Callback::from(move |_| view.set(View::CreateAccount))
                    }}
                />
            </div>
        },
        View::CreateAccount => html! {
            <div class="user-page">
                { back_button }
                <CreateAccount
                    on_created={{
                        let view = view.clone();
                        Callback::from(move |_| view.set(View::Profile))
                    }}
                    on_switch_to_login={{
                        let view = view.clone();
                        Callback::from(move |_| view.set(View::Login))
                    }}
                />
            </div>
        },
        View::Profile => match session.user {
            Some(user) => {
                let on_logout = {
                    let auth = auth.clone();
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| {
                        auth.logout();
                        on_navigate.emit(Page::Landing);
                    })
                };

                html! {
                    <div class="user-page">
                        <h2>{"Mon Compte"}</h2>
                        <div class="user-profile">
                            <div class="profile-info">
                                <p><strong>{"Nom: "}</strong>{user.name.clone()}</p>
                                <p><strong>{"Prénom: "}</strong>{user.surname.clone()}</p>
                                <p><strong>{"Email: "}</strong>{user.email.clone()}</p>
                                <p><strong>{"Rôle: "}</strong>{format!("{:?}", user.role)}</p>
                                if let Some(age) = user.age {
                                    <p><strong>{"Âge: "}</strong>{age}</p>
                                }
                                if let Some(phone) = &user.phone {
                                    <p><strong>{"Téléphone: "}</strong>{phone.clone()}</p>
                                }
                                if let Some(confirmed) = user.confirmed_users {
                                    <p>
                                        <strong>{"Compte confirmé: "}</strong>
                                        { if confirmed { "Oui" } else { "Non" } }
                                    </p>
                                }
                            </div>
                            <div class="profile-actions">
                                <button class="btn btn-primary" onclick={on_logout}>
                                    {"Se déconnecter"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }
            None => html! { <div class="user-page">{"Veuillez vous connecter"}</div> },
        },
    }
}
