// ============================================================================
// AUTH CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// Usa Context API de Yew para inyectar UseAuthHandle globalmente.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone la sesión a todos los hijos
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Acceso a la sesión desde cualquier componente bajo el provider
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>()
        .expect("use_auth_context doit être utilisé dans un AuthContextProvider")
}
