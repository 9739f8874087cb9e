use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::RegisterRequest;
use crate::utils::validators::{self, PasswordPolicy};

#[derive(Properties, PartialEq)]
pub struct CreateAccountProps {
    pub on_created: Callback<()>,
    pub on_switch_to_login: Callback<()>,
}

#[function_component(CreateAccount)]
pub fn create_account(props: &CreateAccountProps) -> Html {
    let auth = use_auth_context();
    let name = use_state(String::new);
    let surname = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(validators::FieldErrors::new);
    let submit_error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let policy = PasswordPolicy::check(&password);

    let bind = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let name = name.clone();
        let surname = surname.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let submit_error = submit_error.clone();
        let loading = loading.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_error.set(None);

            let field_errors =
                validators::validate_registration(&name, &surname, &email, &password);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(validators::FieldErrors::new());

            let request = RegisterRequest {
                name: name.trim().to_string(),
                surname: surname.trim().to_string(),
                email: (*email).clone(),
                password: (*password).clone(),
            };

            loading.set(true);
            let auth = auth.clone();
            let submit_error = submit_error.clone();
            let loading = loading.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth.register(request).await {
                    Ok(_) => on_created.emit(()),
                    Err(err) => submit_error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(message) => html! { <span class="field-error">{*message}</span> },
            None => Html::default(),
        }
    };

    let criterion = |ok: bool, label: &str| {
        html! { <li class={if ok { "valid" } else { "invalid" }}>{label}</li> }
    };

    html! {
        <div class="auth-form">
            <h2>{"Créer un compte"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Nom"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        value={(*name).clone()}
                        oninput={bind(name.clone())}
                        required=true
                        placeholder="Votre nom"
                    />
                    { field_error("name") }
                </div>

                <div class="form-group">
                    <label for="surname">{"Prénom"}</label>
                    <input
                        type="text"
                        id="surname"
                        name="surname"
                        value={(*surname).clone()}
                        oninput={bind(surname.clone())}
                        required=true
                        placeholder="Votre prénom"
                    />
                    { field_error("surname") }
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={(*email).clone()}
                        oninput={bind(email.clone())}
                        required=true
                        placeholder="votre.email@exemple.com"
                    />
                    { field_error("email") }
                </div>

                <div class="form-group">
                    <label for="password">{"Mot de passe"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        value={(*password).clone()}
                        oninput={bind(password.clone())}
                        required=true
                        placeholder="Votre mot de passe"
                    />
                    { field_error("password") }

                    if !password.is_empty() {
                        <div class="password-requirements">
                            <p class="requirements-title">{"Le mot de passe doit contenir :"}</p>
                            <ul class="requirements-list">
                                { criterion(policy.length, "Au moins 12 caractères") }
                                { criterion(policy.uppercase, "Au moins 1 majuscule") }
                                { criterion(policy.special, "Au moins 1 caractère spécial") }
                            </ul>
                        </div>
                    }
                </div>

                if let Some(message) = (*submit_error).clone() {
                    <div class="error-message">{message}</div>
                }

                <button type="submit" class="btn btn-primary" disabled={*loading}>
                    { if *loading { "Création..." } else { "Créer mon compte" } }
                </button>
            </form>

            <div class="auth-switch">
                <p>{"Vous avez déjà un compte ?"}</p>
                <button
                    type="button"
                    class="btn-link"
                    onclick={props.on_switch_to_login.reform(|_| ())}
                >
                    {"Se connecter"}
                </button>
            </div>
        </div>
    }
}
