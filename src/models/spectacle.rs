use serde::{Deserialize, Serialize};

use crate::models::Performance;

/// Un spectacle à l'affiche. Les ids sont des chaînes: le backend expose
/// des identifiants opaques et le jeu de démonstration utilise f1..f6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectacle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "Type")]
    pub genre: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload de création/modification côté admin
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpectacleInput {
    pub name: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "Type")]
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Réponse de /spectacles/{id}/performances
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpectacleWithPerformances {
    #[serde(flatten)]
    pub spectacle: Spectacle,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_travels_as_capitalized_type() {
        let spectacle = Spectacle {
            id: "s1".into(),
            name: "Le Dindon".into(),
            description: "Feydeau".into(),
            duration: "1h45".into(),
            genre: "Comédie".into(),
            date: None,
            image_url: None,
        };
        let json = serde_json::to_string(&spectacle).unwrap();
        assert!(json.contains(r#""Type":"Comédie""#));

        let back: Spectacle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spectacle);
    }
}
