// ============================================================================
// STRIPE FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para assets/stripe-elements.js - Sin estado, sin lógica.
// Los datos de tarjeta viven en el iframe de Stripe, nunca en Rust.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Monta el Card Element de Stripe en el contenedor indicado
    #[wasm_bindgen(js_name = mountStripeCardElement)]
    pub fn mount_stripe_card_element(publishable_key: &str, container_id: &str);

    /// Tokeniza la tarjeta y resuelve con el id del payment method (pm_...)
    #[wasm_bindgen(js_name = createCardPaymentMethod, catch)]
    pub async fn create_card_payment_method(
        cardholder_name: &str,
        email: &str,
    ) -> Result<JsValue, JsValue>;

    /// Desmonta el Card Element al salir de la página de pago
    #[wasm_bindgen(js_name = unmountStripeCardElement)]
    pub fn unmount_stripe_card_element();
}

/// Mensaje de error legible desde el rechazo JS de Stripe
pub fn stripe_error_message(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| "Erreur lors de la création du moyen de paiement".to_string())
}
