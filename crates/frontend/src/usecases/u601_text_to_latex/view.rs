use super::view_model::TextToLatexViewModel;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::config::Config;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_text_to_latex::TextToLatex;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn TextToLatexPage(config: Config) -> impl IntoView {
    let vm = TextToLatexViewModel::new(&config);
    let state = vm.state;

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let input_text = Signal::derive(move || state.with(|s| s.input_text.clone()));

    let on_input = {
        let vm = vm.clone();
        Callback::new(move |text: String| vm.set_input(text))
    };
    let on_convert = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.convert_command())
    };
    let on_generate = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.generate_pdf_command())
    };
    let on_download = Callback::new(move |_: MouseEvent| vm.download_command());

    view! {
        <div class="container">
            <h1 class="app-title">{TextToLatex::display_name()}</h1>

            <div class="converter-section">
                <h2>"Texto de entrada"</h2>
                <Textarea
                    id="input-text"
                    class="input-textarea"
                    value=input_text
                    on_input=on_input
                    placeholder="Pega aquí tu texto para convertir a LaTeX..."
                    rows=10
                />
                <Button class="convert-button" disabled=is_loading on_click=on_convert>
                    {move || if is_loading.get() { "Convirtiendo..." } else { "Convertir a LaTeX" }}
                </Button>
            </div>

            <Show when=move || state.with(|s| s.has_latex())>
                <div class="result-section">
                    <h2>"Código LaTeX generado"</h2>
                    <div class="latex-code-container">
                        <pre class="latex-code">{move || state.with(|s| s.latex_code.clone())}</pre>
                    </div>
                    <div class="action-buttons">
                        <Button class="generate-button" disabled=is_loading on_click=on_generate>
                            {move || if is_loading.get() { "Generando..." } else { "Generar PDF" }}
                        </Button>
                        {move || {
                            state
                                .with(|s| s.pdf_id.is_some())
                                .then(|| view! {
                                    <Button class="download-button" on_click=on_download>
                                        "Descargar PDF"
                                    </Button>
                                })
                        }}
                    </div>
                </div>
            </Show>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error-message">{e}</div> })}
        </div>
    }
}
