use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::utils::validators;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_success: Callback<()>,
    pub on_switch_to_create: Callback<()>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let auth = use_auth_context();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            // Validation locale: jamais d'appel réseau avec un champ invalide
            let field_errors = validators::validate_login(&email, &password);
            if let Some(message) = field_errors.get("email").or(field_errors.get("password")) {
                error.set(Some(message.to_string()));
                return;
            }

            loading.set(true);
            let auth = auth.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth.login(email, password).await {
                    Ok(_) => on_success.emit(()),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="auth-form">
            <h2>{"Se connecter"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="votre.email@exemple.com"
                        ref={email_ref}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Mot de passe"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Votre mot de passe"
                        ref={password_ref}
                        required=true
                    />
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="error-message">{message}</div>
                }

                <button type="submit" class="btn btn-primary" disabled={*loading}>
                    { if *loading { "Connexion..." } else { "Se connecter" } }
                </button>
            </form>

            <div class="auth-switch">
                <p>{"Vous n'avez pas de compte ?"}</p>
                <button
                    type="button"
                    class="btn-link"
                    onclick={props.on_switch_to_create.reform(|_| ())}
                >
                    {"Créer un compte"}
                </button>
            </div>
        </div>
    }
}
