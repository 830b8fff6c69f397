// crates/truecity-core/src/session.rs
use crate::config::SelectorConfig;
use crate::controller::{CascadeController, FetchRequest, Widgets};
use crate::error::ValidationError;
use crate::messages::Messages;
use crate::serializer::Committed;
use crate::source::LocationSource;
use crate::widget::{Feedback, SelectList};

/// Runs a [`CascadeController`] against a [`LocationSource`]: every change
/// is followed through to the last cascading fetch before the call returns.
pub struct CascadeSession<S, W, F> {
    source: S,
    controller: CascadeController<W, F>,
}

impl<S: LocationSource, W: SelectList, F: Feedback> CascadeSession<S, W, F> {
    /// Initialize the selector and restore the stored selection, if it still
    /// fits the preselected country.
    pub async fn initialize(
        source: S,
        config: &SelectorConfig,
        lists: Widgets<W>,
        feedback: F,
        messages: Messages,
        stored: Option<&str>,
    ) -> Self {
        let (controller, first) =
            CascadeController::initialize(config, lists, feedback, messages, stored);
        let mut session = Self { source, controller };
        session.drive(first).await;
        session
    }

    pub async fn select_country(&mut self, code: &str) {
        let next = self.controller.on_country_change(code);
        self.drive(next).await;
    }

    pub async fn select_region(&mut self, code: &str) {
        let next = self.controller.on_region_change(code);
        self.drive(next).await;
    }

    pub fn select_city(&mut self, code: &str) {
        self.controller.on_city_change(code);
    }

    /// Fetch the regions of the selected country again.
    pub async fn reload_regions(&mut self) {
        let country = self.controller.list(crate::model::Level::Country).value();
        if country.is_empty() {
            return;
        }
        let request = self.controller.load_regions(&country);
        self.drive(Some(request)).await;
    }

    pub fn commit(&mut self) -> Result<Committed, ValidationError> {
        self.controller.commit()
    }

    pub fn controller(&self) -> &CascadeController<W, F> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CascadeController<W, F> {
        &mut self.controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> (S, CascadeController<W, F>) {
        (self.source, self.controller)
    }

    async fn drive(&mut self, mut next: Option<FetchRequest>) {
        while let Some(request) = next {
            let result = self.source.fetch(&request).await;
            next = self.controller.complete(&request, result);
        }
    }
}
