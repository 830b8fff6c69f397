// crates/truecity-core/src/controller.rs

//! # Cascade controller
//!
//! Keeps the country, region and city lists consistent. The controller does
//! no I/O: whenever a level needs data it hands out a [`FetchRequest`], and
//! the caller feeds the outcome back through [`CascadeController::complete`].
//! That answer may produce the next request (a restored region cascading into
//! its cities), so drivers loop until `None`.
//!
//! Every request carries a per-level sequence number. Only the newest request
//! of a level may populate it; clearing a level (its parent changed) also
//! invalidates whatever was in flight for it. With two quick country changes
//! the second one wins no matter which response arrives last.

use crate::config::SelectorConfig;
use crate::error::{DataLoadError, ValidationError};
use crate::messages::{MessageKey, Messages};
use crate::model::{Entry, Level, PendingSeed, Selection};
use crate::options::prepare_options;
use crate::serializer::{self, Committed};
use crate::widget::{Feedback, SelectList};

/// A location file the controller is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Level the data will populate: `Region` or `City`.
    pub target: Level,
    pub seq: u64,
    pub country: String,
    pub region: Option<String>,
}

impl FetchRequest {
    /// Level whose file holds the data: the country file lists regions,
    /// the region file lists cities.
    pub fn file(&self) -> Level {
        self.target.parent().unwrap_or(Level::Country)
    }

    /// Path below the base: `countries/{cc}.json` or `regions/{cc}_{rc}.json`.
    pub fn relative_path(&self) -> String {
        match &self.region {
            Some(region) => format!("regions/{}_{}.json", self.country, region),
            None => format!("countries/{}.json", self.country),
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.relative_path())
    }
}

/// The three dropdowns of one selector.
#[derive(Debug, Clone, Default)]
pub struct Widgets<W> {
    pub country: W,
    pub region: W,
    pub city: W,
}

pub struct CascadeController<W, F> {
    id: String,
    messages: Messages,
    lists: Widgets<W>,
    feedback: F,
    seed: PendingSeed,
    /// Newest sequence number issued per level, indexed by `Level as usize`.
    issued: [u64; 3],
    region_armed: bool,
    city_armed: bool,
}

impl<W: SelectList, F: Feedback> CascadeController<W, F> {
    /// Set up a selector and, when the host already selected a country,
    /// return the request for its regions.
    ///
    /// A stored value for a different country than the preselected one is
    /// dropped entirely before anything is fetched.
    pub fn initialize(
        config: &SelectorConfig,
        lists: Widgets<W>,
        feedback: F,
        messages: Messages,
        stored: Option<&str>,
    ) -> (Self, Option<FetchRequest>) {
        let mut this = Self {
            id: config.unique_id().to_owned(),
            messages,
            lists,
            feedback,
            seed: serializer::seed(stored),
            issued: [0; 3],
            region_armed: false,
            city_armed: false,
        };

        let current = this.lists.country.value();
        if current.is_empty() {
            tracing::debug!(field = %this.id, "no country preselected");
            return (this, None);
        }
        this.discard_seed_unless_for(&current);
        let request = this.load_regions(&current);
        (this, Some(request))
    }

    /// The user picked another country (or none).
    pub fn on_country_change(&mut self, code: &str) -> Option<FetchRequest> {
        self.lists.country.set_value(code);
        let code = self.lists.country.value();
        self.feedback.clear_banner();

        self.reset(Level::Region);
        self.reset(Level::City);

        if code.is_empty() {
            return None;
        }
        self.discard_seed_unless_for(&code);
        Some(self.load_regions(&code))
    }

    /// The user picked another region. Ignored until regions were populated.
    pub fn on_region_change(&mut self, code: &str) -> Option<FetchRequest> {
        if !self.region_armed {
            tracing::debug!(field = %self.id, "region list not populated yet, ignoring change");
            return None;
        }
        self.lists.region.set_value(code);
        let code = self.lists.region.value();
        self.feedback.clear_banner();

        self.reset(Level::City);
        // A city saved for another region must not reappear.
        self.seed.take(Level::City);

        let country = self.lists.country.value();
        if code.is_empty() || country.is_empty() {
            return None;
        }
        Some(self.load_cities(&country, &code))
    }

    /// The user picked a city. Cities have no children; only the banner goes.
    pub fn on_city_change(&mut self, code: &str) {
        if !self.city_armed {
            tracing::debug!(field = %self.id, "city list not populated yet, ignoring change");
            return;
        }
        self.lists.city.set_value(code);
        self.feedback.clear_banner();
    }

    /// Request the regions of `country`. Calling it again simply supersedes
    /// the previous request.
    pub fn load_regions(&mut self, country: &str) -> FetchRequest {
        self.issue(Level::Region, country, None)
    }

    pub fn load_cities(&mut self, country: &str, region: &str) -> FetchRequest {
        self.issue(Level::City, country, Some(region))
    }

    /// Feed back the outcome of a request. Returns the follow-up request
    /// when a restored region needs its cities.
    pub fn complete(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<Entry>, DataLoadError>,
    ) -> Option<FetchRequest> {
        match result {
            Ok(entries) => match request.target {
                Level::Region => self.populate_regions(request, entries),
                Level::City => {
                    self.populate_cities(request, entries);
                    None
                }
                Level::Country => None,
            },
            Err(error) => {
                self.fail(request, &error);
                None
            }
        }
    }

    /// Rebuild the region list from the country file.
    pub fn populate_regions(&mut self, request: &FetchRequest, entries: Vec<Entry>) -> Option<FetchRequest> {
        if !self.accept(request) {
            return None;
        }
        // New region list: whatever the city level held belongs to the old one.
        self.reset(Level::City);
        let options = prepare_options(Level::Region, entries, &self.messages);
        tracing::debug!(field = %self.id, country = %request.country, count = options.len(), "populating regions");

        let list = &mut self.lists.region;
        list.replace_options(options);
        match self.seed.take(Level::Region) {
            Some(part) => list.set_value(&part.value),
            None => list.set_value(""),
        }
        list.refresh();
        self.region_armed = true;

        let region = self.lists.region.value();
        if region.is_empty() {
            // The stored region is gone; its city is stale as well.
            self.seed.take(Level::City);
            return None;
        }
        Some(self.load_cities(&request.country, &region))
    }

    /// Rebuild the city list from the region file.
    pub fn populate_cities(&mut self, request: &FetchRequest, entries: Vec<Entry>) {
        if !self.accept(request) {
            return;
        }
        let options = prepare_options(Level::City, entries, &self.messages);
        tracing::debug!(field = %self.id, region = ?request.region, count = options.len(), "populating cities");

        let list = &mut self.lists.city;
        list.replace_options(options);
        match self.seed.take(Level::City) {
            Some(part) => list.set_value(&part.value),
            None => list.set_value(""),
        }
        list.refresh();
        self.city_armed = true;
    }

    /// Validate and serialize the current selection. On failure the banner
    /// asks for a city and nothing is produced.
    pub fn commit(&mut self) -> Result<Committed, ValidationError> {
        let result = serializer::commit(&self.selection(), &self.messages);
        self.feedback.clear_banner();
        if let Err(e) = &result {
            tracing::debug!(field = %self.id, error = %e, "commit refused");
            self.feedback.show_banner(self.messages.get(MessageKey::SelectACity));
        }
        result
    }

    pub fn selection(&self) -> Selection {
        Selection {
            country: self.lists.country.selected_option(),
            region: self.lists.region.selected_option(),
            city: self.lists.city.selected_option(),
        }
    }

    /// `true` if `request` is the newest one issued for its level.
    pub fn is_current(&self, request: &FetchRequest) -> bool {
        self.issued[request.target as usize] == request.seq
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn list(&self, level: Level) -> &W {
        match level {
            Level::Country => &self.lists.country,
            Level::Region => &self.lists.region,
            Level::City => &self.lists.city,
        }
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn pending_seed(&self) -> &PendingSeed {
        &self.seed
    }

    pub fn into_parts(self) -> (Widgets<W>, F) {
        (self.lists, self.feedback)
    }

    // --- Internal Helpers ---

    fn list_mut(&mut self, level: Level) -> &mut W {
        match level {
            Level::Country => &mut self.lists.country,
            Level::Region => &mut self.lists.region,
            Level::City => &mut self.lists.city,
        }
    }

    fn issue(&mut self, target: Level, country: &str, region: Option<&str>) -> FetchRequest {
        let seq = &mut self.issued[target as usize];
        *seq += 1;
        FetchRequest {
            target,
            seq: *seq,
            country: country.to_owned(),
            region: region.map(str::to_owned),
        }
    }

    /// Empty a dependent list (badges first) and orphan its pending request.
    fn reset(&mut self, level: Level) {
        self.issued[level as usize] += 1;
        let list = self.list_mut(level);
        list.dismiss_selection();
        list.clear();
    }

    fn accept(&self, request: &FetchRequest) -> bool {
        let current = self.is_current(request);
        if !current {
            tracing::debug!(
                field = %self.id,
                path = %request.relative_path(),
                seq = request.seq,
                "dropping stale response"
            );
        }
        current
    }

    fn fail(&mut self, request: &FetchRequest, error: &DataLoadError) {
        if !self.accept(request) {
            return;
        }
        tracing::warn!(field = %self.id, %error, "error fetching location data");
        let mut level = Some(request.target);
        while let Some(l) = level {
            self.list_mut(l).clear();
            level = l.child();
        }
        self.feedback.notify_error(self.messages.get(error.message_key()));
    }

    fn discard_seed_unless_for(&mut self, country: &str) {
        if self.seed.country_code().is_some_and(|c| c != country) {
            tracing::debug!(field = %self.id, seeded = ?self.seed.country_code(), country, "discarding stored location for another country");
            self.seed.discard();
        }
    }
}
