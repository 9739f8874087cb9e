use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::hooks::AuthSession;

/// Prédicat de rôle exigé par un écran protégé
#[derive(Clone, Copy, PartialEq)]
pub enum RequiredRole {
    Authenticated,
    Organizer,
    Admin,
}

impl RequiredRole {
    pub fn allows(&self, session: &AuthSession) -> bool {
        match self {
            RequiredRole::Authenticated => session.is_authenticated(),
            RequiredRole::Organizer => session.is_organizer(),
            RequiredRole::Admin => session.is_admin(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    pub role: RequiredRole,
    /// Émis quand l'accès est refusé: l'app renvoie vers l'écran par défaut
    pub on_redirect: Callback<()>,
    pub children: Children,
}

/// Garde d'écran. Tant que l'initialisation de session n'est pas terminée:
/// placeholder neutre, ni contenu protégé ni redirection. Ensuite, prédicat
/// faux => redirection et rien d'autre n'est rendu. Le contrôle se rejoue à
/// chaque changement de session (login/logout pendant que l'écran est monté).
#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let auth = use_auth_context();
    let session = auth.session();

    {
        let on_redirect = props.on_redirect.clone();
        let role = props.role;
        use_effect_with(session.clone(), move |session| {
            if !session.loading && !role.allows(session) {
                log::warn!("🚫 Accès refusé, redirection");
                on_redirect.emit(());
            }
            || ()
        });
    }

    if session.loading {
        return html! { <div class="loading">{"Chargement..."}</div> };
    }

    if !props.role.allows(&session) {
        return Html::default();
    }

    html! { <>{ props.children.clone() }</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserProfile};

    fn session_with_role(role: Role) -> AuthSession {
        AuthSession::established(
            UserProfile {
                id: 1,
                name: "Durand".into(),
                surname: "Alice".into(),
                email: "alice@exemple.fr".into(),
                role,
                age: None,
                phone: None,
                confirmed_users: None,
            },
            "jwt".into(),
        )
    }

    #[test]
    fn admin_gate_only_opens_for_admins() {
        assert!(RequiredRole::Admin.allows(&session_with_role(Role::Admin)));
        assert!(!RequiredRole::Admin.allows(&session_with_role(Role::Organizer)));
        assert!(!RequiredRole::Admin.allows(&session_with_role(Role::Client)));
        assert!(!RequiredRole::Admin.allows(&AuthSession::logged_out()));
    }

    #[test]
    fn authenticated_gate_accepts_any_role() {
        for role in [Role::Client, Role::Organizer, Role::Admin] {
            assert!(RequiredRole::Authenticated.allows(&session_with_role(role)));
        }
        assert!(!RequiredRole::Authenticated.allows(&AuthSession::logged_out()));
    }

    #[test]
    fn uninitialized_session_shows_placeholder_not_redirect() {
        // la garde ne redirige jamais tant que loading est vrai, même pour
        // une session encore vide qui sera admin après restauration
        let initializing = AuthSession::initializing();
        assert!(initializing.loading);
        assert!(!RequiredRole::Admin.allows(&initializing));
        // le refus pendant loading est ignoré par l'effet (cf. condition)
    }
}
