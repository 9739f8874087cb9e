// ============================================================================
// USE SPECTACLES HOOK - Catálogo de espectáculos
// ============================================================================

use yew::prelude::*;

use crate::models::Spectacle;
use crate::services::{spectacle_service, ApiClient};
use crate::utils::constants::DEFAULT_SPECTACLE_IMAGE;
use crate::utils::ApiError;

/// Jeu de démonstration affiché quand le backend ne renvoie rien: l'écran
/// catalogue ne doit jamais être vide. Décision produit assumée, voir
/// DESIGN.md.
fn fallback_spectacles() -> Vec<Spectacle> {
    let demo = [
        ("f1", "Le Roi Lion", "Un voyage musical au cœur de la savane.", "2h10", "Comédie musicale", "2024-02-10"),
        ("f2", "Phantom", "Mystère et passion dans les coulisses de l'opéra.", "2h00", "Drame musical", "2024-03-05"),
        ("f3", "Le Dindon", "Feydeau et ses portes qui claquent, version moderne.", "1h45", "Comédie", "2024-04-12"),
        ("f4", "Lac des Cygnes", "Le ballet classique intemporel revisité.", "2h05", "Ballet", "2024-05-20"),
        ("f5", "Impro Show", "Une soirée d'improvisation participative et pleine de rires.", "1h30", "Impro", "2024-06-08"),
        ("f6", "Peau d'Âne", "Le conte revisité avec musique et poésie.", "1h50", "Conte musical", "2024-07-02"),
    ];

    demo.into_iter()
        .map(|(id, name, description, duration, genre, date)| Spectacle {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            genre: genre.to_string(),
            date: Some(date.to_string()),
            image_url: Some(DEFAULT_SPECTACLE_IMAGE.to_string()),
        })
        .collect()
}

/// Résultat d'un fetch -> état affichable. Liste vide ou échec: le jeu de
/// démonstration prend la place; le message d'erreur est conservé à côté.
fn apply_fetch_result(
    result: Result<Vec<Spectacle>, ApiError>,
) -> (Vec<Spectacle>, Option<String>) {
    match result {
        Ok(spectacles) if !spectacles.is_empty() => (spectacles, None),
        Ok(_) => {
            log::warn!("⚠️ Catalogue vide, affichage du jeu de démonstration");
            (fallback_spectacles(), None)
        }
        Err(error) => {
            log::error!("❌ Erreur chargement spectacles: {}", error);
            (fallback_spectacles(), Some(error.user_message()))
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SpectaclesState {
    pub spectacles: Vec<Spectacle>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseSpectaclesHandle {
    pub state: UseStateHandle<SpectaclesState>,
    pub refetch: Callback<()>,
}

fn load_spectacles(state: UseStateHandle<SpectaclesState>) {
    wasm_bindgen_futures::spawn_local(async move {
        state.set(SpectaclesState {
            spectacles: (*state).spectacles.clone(),
            loading: true,
            error: None,
        });

        let result = spectacle_service::get_all(&ApiClient::new()).await;
        let (spectacles, error) = apply_fetch_result(result);
        log::info!("🎭 Spectacles affichés: {}", spectacles.len());
        state.set(SpectaclesState { spectacles, loading: false, error });
    });
}

#[hook]
pub fn use_spectacles() -> UseSpectaclesHandle {
    let state = use_state(|| SpectaclesState {
        spectacles: Vec::new(),
        loading: true,
        error: None,
    });

    // Premier chargement au montage
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            load_spectacles(state);
            || ()
        });
    }

    let refetch = {
        let state = state.clone();
        Callback::from(move |_| load_spectacles(state.clone()))
    };

    UseSpectaclesHandle { state, refetch }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectacle(id: &str) -> Spectacle {
        Spectacle {
            id: id.to_string(),
            name: "Hamlet".into(),
            description: "Elseneur".into(),
            duration: "2h30".into(),
            genre: "Théâtre".into(),
            date: None,
            image_url: None,
        }
    }

    #[test]
    fn fallback_dataset_has_six_demo_shows() {
        let demo = fallback_spectacles();
        assert_eq!(demo.len(), 6);
        assert_eq!(demo[0].name, "Le Roi Lion");
        assert!(demo.iter().all(|s| s.image_url.is_some()));
    }

    #[test]
    fn server_data_is_kept_in_server_order() {
        let (shown, error) =
            apply_fetch_result(Ok(vec![spectacle("b"), spectacle("a")]));
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].id, "b");
        assert!(error.is_none());
    }

    #[test]
    fn empty_collection_substitutes_the_demo_dataset() {
        let (shown, error) = apply_fetch_result(Ok(Vec::new()));
        assert_eq!(shown, fallback_spectacles());
        assert!(error.is_none());
    }

    #[test]
    fn fetch_failure_substitutes_the_demo_dataset_and_keeps_the_message() {
        let (shown, error) =
            apply_fetch_result(Err(ApiError::Http { status: 500, message: None }));
        assert_eq!(shown, fallback_spectacles());
        assert_eq!(
            error.as_deref(),
            Some("Erreur serveur. Veuillez réessayer plus tard.")
        );
    }
}
