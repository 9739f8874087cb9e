use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <img class="footer-logo" src="/assets/logotheatre.png" alt="L'Usine à Émotions" />
                </div>
                <p>{"© 2024 Billetterie Spectacles. Tous droits réservés."}</p>
            </div>
        </footer>
    }
}
