//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Portal de Empleo"</h1>
                <p class="home-card__subtitle">
                    "Conecta con las mejores oportunidades laborales y destaca tu perfil profesional."
                </p>
                <div class="home-card__features">
                    <div class="home-feature home-feature--jobs">
                        <h3>"Vacantes a tu medida"</h3>
                        <p>"Explora ofertas laborales según tu perfil y ubicación."</p>
                    </div>
                    <div class="home-feature home-feature--apply">
                        <h3>"Postúlate fácil"</h3>
                        <p>"Aplica a vacantes en segundos con un solo clic."</p>
                    </div>
                    <div class="home-feature home-feature--profile">
                        <h3>"Perfil profesional"</h3>
                        <p>"Gestiona tu experiencia, habilidades y formación."</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
