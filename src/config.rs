use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub stripe_publishable_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:7035/api".to_string(),
            backend_url_production: "https://api.usine-emotions.fr/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            stripe_publishable_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:7035/api").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.usine-emotions.fr/api").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            stripe_publishable_key: option_env!("STRIPE_PUBLISHABLE_KEY")
                .unwrap_or("").to_string(),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// La clé publique Stripe est vide quand le paiement n'est pas configuré
    pub fn stripe_configured(&self) -> bool {
        !self.stripe_publishable_key.is_empty()
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), config.backend_url_development);

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production);
    }

    #[test]
    fn stripe_unconfigured_by_default() {
        assert!(!AppConfig::default().stripe_configured());
    }
}
