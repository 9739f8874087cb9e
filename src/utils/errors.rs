// ============================================================================
// GESTION CENTRALIZADA DE ERRORES API
// ============================================================================
// Los fallos de red/HTTP se clasifican UNA sola vez, en la frontera HTTP.
// Las vistas solo consumen user_message().
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Pas de réponse du serveur (fetch rejeté)
    #[error("network error: {0}")]
    Network(String),

    /// Réponse HTTP non-2xx, avec le message du body quand il existe
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// Body 2xx illisible
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message utilisateur fixe par classe d'erreur. Jamais de retry
    /// automatique: l'appelant décide quoi faire du message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Erreur de connexion. Vérifiez votre connexion internet.".to_string()
            }
            ApiError::Http { status, message } => match status {
                400 => "Données invalides. Vérifiez les informations saisies.".to_string(),
                401 => "Non autorisé. Veuillez vous connecter.".to_string(),
                403 => "Accès refusé. Vous n'avez pas les permissions nécessaires.".to_string(),
                404 => "Ressource introuvable.".to_string(),
                500 => "Erreur serveur. Veuillez réessayer plus tard.".to_string(),
                _ => format!(
                    "Erreur {}: {}",
                    status,
                    message.as_deref().unwrap_or("Erreur serveur")
                ),
            },
            ApiError::Parse(_) => "Une erreur est survenue. Veuillez réessayer.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http { status, message: None }
    }

    #[test]
    fn each_status_class_has_its_fixed_message() {
        assert_eq!(
            http(400).user_message(),
            "Données invalides. Vérifiez les informations saisies."
        );
        assert_eq!(http(401).user_message(), "Non autorisé. Veuillez vous connecter.");
        assert_eq!(
            http(403).user_message(),
            "Accès refusé. Vous n'avez pas les permissions nécessaires."
        );
        assert_eq!(http(404).user_message(), "Ressource introuvable.");
        assert_eq!(
            http(500).user_message(),
            "Erreur serveur. Veuillez réessayer plus tard."
        );
    }

    #[test]
    fn unlisted_status_keeps_the_code_and_server_detail() {
        let err = ApiError::Http { status: 418, message: Some("théière".into()) };
        assert_eq!(err.user_message(), "Erreur 418: théière");
        assert_eq!(http(418).user_message(), "Erreur 418: Erreur serveur");
    }

    #[test]
    fn network_failure_has_the_connectivity_message() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(
            err.user_message(),
            "Erreur de connexion. Vérifiez votre connexion internet."
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn only_401_is_unauthorized() {
        assert!(http(401).is_unauthorized());
        assert!(!http(403).is_unauthorized());
        assert!(!ApiError::Parse("x".into()).is_unauthorized());
    }
}
