use std::collections::HashMap;

use chrono::{Local, NaiveDate};

/// Erreurs de formulaire par champ, affichées inline - elles n'atteignent
/// jamais la couche réseau.
pub type FieldErrors = HashMap<&'static str, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) || local.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
        && !domain.contains(char::is_whitespace)
}

/// Connexion: 6 caractères minimum
pub fn is_valid_login_password(password: &str) -> bool {
    password.len() >= 6
}

/// Critères affichés en direct sous le champ mot de passe à l'inscription
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PasswordPolicy {
    pub length: bool,
    pub uppercase: bool,
    pub special: bool,
}

impl PasswordPolicy {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 12,
            uppercase: password.chars().any(|c| c.is_uppercase()),
            special: password.chars().any(|c| {
                r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#.contains(c)
            }),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.length && self.uppercase && self.special
    }
}

/// Date au format YYYY-MM-DD, aujourd'hui ou plus tard
pub fn is_valid_future_date(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed >= Local::now().date_naive(),
        Err(_) => false,
    }
}

/// Quantité de tickets par réservation: entre 1 et 10
pub fn is_valid_ticket_quantity(quantity: u32) -> bool {
    (1..=10).contains(&quantity)
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.insert("email", "Email invalide");
    }
    if !is_valid_login_password(password) {
        errors.insert("password", "Le mot de passe doit contenir au moins 6 caractères");
    }
    errors
}

pub fn validate_registration(
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "Le nom est requis");
    }
    if surname.trim().is_empty() {
        errors.insert("surname", "Le prénom est requis");
    }
    if !is_valid_email(email) {
        errors.insert("email", "Veuillez entrer un email valide");
    }
    if !PasswordPolicy::check(password).is_satisfied() {
        errors.insert("password", "Le mot de passe ne respecte pas les critères requis");
    }
    errors
}

pub fn validate_reservation(performance_id: Option<i64>, quantity: u32) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if performance_id.is_none() {
        errors.insert("performance", "Veuillez sélectionner une représentation");
    }
    if !is_valid_ticket_quantity(quantity) {
        errors.insert("quantity", "La quantité doit être entre 1 et 10");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_structure_is_checked() {
        assert!(is_valid_email("a@b.fr"));
        assert!(is_valid_email("jean.dupont@exemple.co.uk"));
        assert!(!is_valid_email("pas-un-email"));
        assert!(!is_valid_email("@exemple.fr"));
        assert!(!is_valid_email("jean@exemple"));
        assert!(!is_valid_email("jean dupont@exemple.fr"));
        assert!(!is_valid_email("jean@exemple."));
    }

    #[test]
    fn registration_password_policy() {
        let weak = PasswordPolicy::check("abc");
        assert!(!weak.length && !weak.uppercase && !weak.special);

        assert!(!PasswordPolicy::check("longmaisminuscule!").is_satisfied());
        assert!(!PasswordPolicy::check("LongSansSpecial9").is_satisfied());
        assert!(PasswordPolicy::check("Treslong&Valide!").is_satisfied());
    }

    #[test]
    fn ticket_quantity_bounds() {
        assert!(!is_valid_ticket_quantity(0));
        assert!(is_valid_ticket_quantity(1));
        assert!(is_valid_ticket_quantity(10));
        assert!(!is_valid_ticket_quantity(11));
    }

    #[test]
    fn future_date_rejects_garbage_and_past() {
        assert!(!is_valid_future_date(""));
        assert!(!is_valid_future_date("12/05/2026"));
        assert!(!is_valid_future_date("2001-01-01"));
        assert!(is_valid_future_date("2999-12-31"));
    }

    #[test]
    fn login_validation_reports_per_field() {
        let errors = validate_login("a@b.com", "x");
        assert!(errors.get("email").is_none());
        assert_eq!(
            errors.get("password"),
            Some(&"Le mot de passe doit contenir au moins 6 caractères")
        );

        assert!(validate_login("bob@exemple.fr", "secret-assez-long").is_empty());
    }

    #[test]
    fn registration_validation_reports_per_field() {
        let errors = validate_registration(" ", "", "mauvais", "court");
        assert_eq!(errors.len(), 4);

        let ok = validate_registration("Durand", "Alice", "alice@exemple.fr", "Treslong&Valide!");
        assert!(ok.is_empty());
    }

    #[test]
    fn reservation_validation() {
        let errors = validate_reservation(None, 0);
        assert!(errors.contains_key("performance"));
        assert!(errors.contains_key("quantity"));
        assert!(validate_reservation(Some(3), 2).is_empty());
    }
}
