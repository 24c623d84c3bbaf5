use super::api::HttpConversionApi;
use super::controller::ConverterController;
use super::model::ConverterState;
use crate::shared::browser::BrowserNavigator;
use crate::shared::config::Config;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

type PageController =
    ConverterController<RwSignal<ConverterState>, HttpConversionApi, BrowserNavigator>;

/// ViewModel for the text-to-LaTeX page
#[derive(Clone)]
pub struct TextToLatexViewModel {
    pub state: RwSignal<ConverterState>,
    controller: Arc<PageController>,
}

impl TextToLatexViewModel {
    pub fn new(config: &Config) -> Self {
        let controller = ConverterController::new(
            RwSignal::new(ConverterState::default()),
            HttpConversionApi::new(config.api.base_url.clone()),
            BrowserNavigator,
        );
        Self {
            state: *controller.store(),
            controller: Arc::new(controller),
        }
    }

    pub fn set_input(&self, text: String) {
        self.state.update(|s| s.input_text = text);
    }

    pub fn convert_command(&self) {
        let controller = Arc::clone(&self.controller);
        spawn_local(async move {
            // outcome is already reflected in the state
            _ = controller.convert_to_latex().await;
        });
    }

    pub fn generate_pdf_command(&self) {
        let controller = Arc::clone(&self.controller);
        spawn_local(async move {
            _ = controller.generate_pdf().await;
        });
    }

    pub fn download_command(&self) {
        self.controller.download_pdf();
    }
}
