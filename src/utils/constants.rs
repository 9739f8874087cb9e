/// Claves de localStorage - SOLO el proveedor de sesión las toca
pub const STORAGE_KEY_USER: &str = "billetterie_user";
pub const STORAGE_KEY_TOKEN: &str = "billetterie_token";

/// Dataset CSV du dashboard admin
pub const RESERVATIONS_CSV_PATH: &str = "/assets/reservations.csv";

/// Image par défaut des cartes spectacle
pub const DEFAULT_SPECTACLE_IMAGE: &str = "/assets/theater.jpg";
