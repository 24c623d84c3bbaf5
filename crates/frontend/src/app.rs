use crate::shared::config::load_config;
use crate::usecases::u601_text_to_latex::TextToLatexPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => view! { <TextToLatexPage config=config /> }.into_any(),
        Err(e) => {
            log::error!("Invalid client configuration: {:#}", e);
            view! {
                <div class="container">
                    <div class="error-message">{format!("Error de configuración: {}", e)}</div>
                </div>
            }
            .into_any()
        }
    }
}
