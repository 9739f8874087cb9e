use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::services::ApiClient;
use crate::utils::ApiError;

/// Login con email y contraseña. La respuesta trae { token, user }.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    log::info!("🔐 Connexion de {}", email);
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    client.post("/auth/login", &request).await
}

/// Crea la cuenta y abre sesión en el mismo paso (mismo contrato que login)
pub async fn register(
    client: &ApiClient,
    data: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    log::info!("📝 Création de compte pour {}", data.email);
    client.post("/auth/register", data).await
}

/// Perfil del usuario actual según el token bearer del cliente
pub async fn get_current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get("/auth/me").await
}
