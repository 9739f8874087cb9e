// ============================================================================
// USE AUTH HOOK - Autoridad única de sesión
// ============================================================================
// Quién está conectado y con qué privilegios. Los consumidores pasan por
// el context provider (auth_context.rs), nunca por localStorage.
// ============================================================================

use yew::prelude::*;

use crate::models::{AuthResponse, RegisterRequest, Role, UserProfile};
use crate::services::{auth_service, ApiClient};
use crate::utils::{storage, ApiError};

/// Estado de sesión. user y token van siempre juntos: el swap en
/// login/register es atómico (un solo state.set).
#[derive(Clone, PartialEq)]
pub struct AuthSession {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    /// true mientras la restauración inicial no ha terminado
    pub loading: bool,
    /// último error de auth, transitorio
    pub error: Option<String>,
}

impl AuthSession {
    /// Estado inicial, antes de leer localStorage
    pub fn initializing() -> Self {
        Self { user: None, token: None, loading: true, error: None }
    }

    /// Sin sesión, inicialización terminada
    pub fn logged_out() -> Self {
        Self { user: None, token: None, loading: false, error: None }
    }

    pub fn established(user: UserProfile, token: String) -> Self {
        Self { user: Some(user), token: Some(token), loading: false, error: None }
    }

    // Flags derivados, calculados en cada lectura (nunca cacheados)

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_organizer(&self) -> bool {
        self.role() == Some(Role::Organizer)
    }

    pub fn is_client(&self) -> bool {
        self.role() == Some(Role::Client)
    }
}

/// Recuperación de sesión caducada: un 401 del refresh invalida toda la
/// sesión, cualquier otro fallo la deja intacta.
fn session_after_refresh_error(current: &AuthSession, error: &ApiError) -> AuthSession {
    if error.is_unauthorized() {
        AuthSession::logged_out()
    } else {
        current.clone()
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    state: UseStateHandle<AuthSession>,
}

impl UseAuthHandle {
    pub fn session(&self) -> AuthSession {
        (*self.state).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.token.clone()
    }

    /// Cliente HTTP autenticado con el token actual
    pub fn api_client(&self) -> ApiClient {
        ApiClient::with_token(self.state.token.clone())
    }

    /// Login. En éxito persiste user+token juntos y reemplaza la sesión
    /// entera; en fallo la sesión anterior queda intacta y el error se
    /// propaga al formulario llamador.
    pub async fn login(&self, email: String, password: String) -> Result<AuthResponse, ApiError> {
        self.clear_error();
        match auth_service::login(&ApiClient::new(), &email, &password).await {
            Ok(response) => {
                log::info!("✅ Connexion réussie: {}", response.user.email);
                let _ = storage::save_session(&response.user, &response.token);
                self.state.set(AuthSession::established(
                    response.user.clone(),
                    response.token.clone(),
                ));
                Ok(response)
            }
            Err(error) => {
                log::error!("❌ Échec de connexion: {}", error);
                self.record_error(&error);
                Err(error)
            }
        }
    }

    /// Mismo contrato que login: registrar abre sesión
    pub async fn register(&self, data: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.clear_error();
        match auth_service::register(&ApiClient::new(), &data).await {
            Ok(response) => {
                log::info!("✅ Compte créé: {}", response.user.email);
                let _ = storage::save_session(&response.user, &response.token);
                self.state.set(AuthSession::established(
                    response.user.clone(),
                    response.token.clone(),
                ));
                Ok(response)
            }
            Err(error) => {
                log::error!("❌ Échec de création de compte: {}", error);
                self.record_error(&error);
                Err(error)
            }
        }
    }

    /// Idempotente: borrar una sesión ya ausente no hace nada
    pub fn logout(&self) {
        let _ = storage::clear_session();
        log::info!("👋 Déconnexion");
        self.state.set(AuthSession::logged_out());
    }

    /// Re-lee el perfil con el token actual. En éxito re-persiste SOLO el
    /// user (token sin cambios). Un 401 aquí significa token caducado:
    /// logout antes de propagar - es la única vía de recuperación.
    pub async fn refresh_current_user(&self) -> Result<UserProfile, ApiError> {
        match auth_service::get_current_user(&self.api_client()).await {
            Ok(user) => {
                let _ = storage::save_user(&user);
                let mut session = (*self.state).clone();
                session.user = Some(user.clone());
                self.state.set(session);
                Ok(user)
            }
            Err(error) => {
                log::error!("❌ Échec du rafraîchissement du profil: {}", error);
                let next = session_after_refresh_error(&self.state, &error);
                if !next.is_authenticated() && self.state.is_authenticated() {
                    let _ = storage::clear_session();
                    log::warn!("⚠️ Session expirée, déconnexion");
                }
                self.state.set(next);
                Err(error)
            }
        }
    }

    fn clear_error(&self) {
        if self.state.error.is_some() {
            let mut session = (*self.state).clone();
            session.error = None;
            self.state.set(session);
        }
    }

    fn record_error(&self, error: &ApiError) {
        let mut session = (*self.state).clone();
        session.error = Some(error.user_message());
        self.state.set(session);
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthSession::initializing);

    // Restauración de la sesión persistida, una sola vez al montar.
    // Pase lo que pase, loading termina en false exactamente una vez.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            match storage::load_session() {
                Some((user, token)) => {
                    log::info!("✅ Session restaurée: {}", user.email);
                    state.set(AuthSession::established(user, token));
                }
                None => {
                    state.set(AuthSession::logged_out());
                }
            }
            || ()
        });
    }

    UseAuthHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserProfile {
        UserProfile {
            id: 1,
            name: "Durand".into(),
            surname: "Alice".into(),
            email: "alice@exemple.fr".into(),
            role,
            age: None,
            phone: None,
            confirmed_users: None,
        }
    }

    #[test]
    fn initializing_is_unauthenticated_and_loading() {
        let session = AuthSession::initializing();
        assert!(session.loading);
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn established_session_derives_exactly_one_role_flag() {
        let session = AuthSession::established(user(Role::Admin), "jwt".into());
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert!(!session.is_organizer());
        assert!(!session.is_client());

        let session = AuthSession::established(user(Role::Client), "jwt".into());
        assert!(session.is_client());
        assert!(!session.is_admin());
        assert!(!session.is_organizer());
    }

    #[test]
    fn logged_out_is_stable_under_repetition() {
        // logout() aplica siempre este mismo estado: repetirlo es no-op
        let first = AuthSession::logged_out();
        let second = AuthSession::logged_out();
        assert_eq!(first.is_authenticated(), second.is_authenticated());
        assert!(!first.loading && !second.loading);
        assert!(first == second);
    }

    #[test]
    fn refresh_401_matches_explicit_logout() {
        let current = AuthSession::established(user(Role::Organizer), "jwt".into());
        let unauthorized = ApiError::Http { status: 401, message: None };

        let after = session_after_refresh_error(&current, &unauthorized);
        assert!(after == AuthSession::logged_out());
    }

    #[test]
    fn refresh_non_401_keeps_the_session() {
        let current = AuthSession::established(user(Role::Client), "jwt".into());
        for error in [
            ApiError::Network("offline".into()),
            ApiError::Http { status: 500, message: None },
            ApiError::Parse("bad body".into()),
        ] {
            let after = session_after_refresh_error(&current, &error);
            assert!(after.is_authenticated());
            assert!(after == current);
        }
    }
}
