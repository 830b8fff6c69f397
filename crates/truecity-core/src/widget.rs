// crates/truecity-core/src/widget.rs

//! # Widgets
//!
//! The controller drives three dropdowns through [`SelectList`] and reports
//! problems through [`Feedback`]. Concrete UIs (an autocomplete with
//! "selected item" badges, a terminal, a DOM `<select>`) implement these
//! traits; [`MemorySelect`] and [`RecordingFeedback`] are in-memory versions.

use crate::model::LocationOption;

/// A dropdown whose selection can be cleared, possibly enhanced by a
/// separate presentation layer that only catches up on [`SelectList::refresh`].
pub trait SelectList {
    /// Replace every option. Implementations put the empty option first.
    fn replace_options(&mut self, options: Vec<LocationOption>);

    /// Select `code`. A code that is not among the options selects nothing.
    fn set_value(&mut self, code: &str);

    /// Code of the selected option, empty when nothing is selected.
    fn value(&self) -> String;

    /// Text currently displayed for the selected option.
    fn selected_label(&self) -> Option<String>;

    /// Ask the presentation layer to re-render from the list state.
    fn refresh(&mut self);

    /// Dismiss selected-item badges through their own removal trigger.
    /// Plain lists have nothing to dismiss.
    fn dismiss_selection(&mut self) {}

    /// Empty the list down to the blank option and re-render.
    fn clear(&mut self) {
        self.replace_options(Vec::new());
        self.set_value("");
        self.refresh();
    }

    fn selected_option(&self) -> Option<LocationOption> {
        let code = self.value();
        if code.is_empty() {
            return None;
        }
        let label = self.selected_label().unwrap_or_default();
        Some(LocationOption::new(code, label))
    }
}

/// Sink for user-visible problems.
pub trait Feedback {
    /// Transient error notification (load failures).
    fn notify_error(&mut self, message: &str);
    /// Inline banner inside the selector body (validation).
    fn show_banner(&mut self, message: &str);
    fn clear_banner(&mut self);
}

/// In-memory dropdown.
///
/// `badge` stands in for an enhancement layer: it only follows the list on
/// [`SelectList::refresh`] and is emptied by [`SelectList::dismiss_selection`].
#[derive(Debug, Clone, Default)]
pub struct MemorySelect {
    options: Vec<LocationOption>,
    value: String,
    placeholder: String,
    badge: Option<String>,
    refreshes: usize,
    dismissals: usize,
}

impl MemorySelect {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            options: vec![LocationOption::none()],
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// A list the host has already filled, e.g. the country list with the
    /// user's profile country selected.
    pub fn prefilled(options: Vec<LocationOption>, value: &str) -> Self {
        let mut list = Self::new("");
        list.replace_options(options);
        list.set_value(value);
        list.refresh();
        list
    }

    pub fn options(&self) -> &[LocationOption] {
        &self.options
    }

    /// Options without the leading blank one.
    pub fn choices(&self) -> &[LocationOption] {
        self.options.get(1..).unwrap_or_default()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    pub fn dismiss_count(&self) -> usize {
        self.dismissals
    }
}

impl SelectList for MemorySelect {
    fn replace_options(&mut self, options: Vec<LocationOption>) {
        self.options.clear();
        self.options.push(LocationOption::none());
        self.options.extend(options.into_iter().filter(|o| !o.is_none()));
        self.value.clear();
    }

    fn set_value(&mut self, code: &str) {
        self.value = if self.options.iter().any(|o| o.code == code) {
            code.to_owned()
        } else {
            String::new()
        };
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn selected_label(&self) -> Option<String> {
        if self.value.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| o.code == self.value)
            .map(|o| o.display_name.clone())
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
        self.badge = self.selected_label();
    }

    fn dismiss_selection(&mut self) {
        if self.badge.take().is_some() {
            self.dismissals += 1;
        }
    }
}

/// Keeps what was shown, for tests and non-interactive front ends.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pub notifications: Vec<String>,
    pub banner: Option<String>,
}

impl Feedback for RecordingFeedback {
    fn notify_error(&mut self, message: &str) {
        self.notifications.push(message.to_owned());
    }

    fn show_banner(&mut self, message: &str) {
        self.banner = Some(message.to_owned());
    }

    fn clear_banner(&mut self) {
        self.banner = None;
    }
}

/// Sends everything to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn notify_error(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn show_banner(&mut self, message: &str) {
        tracing::info!(banner = message);
    }

    fn clear_banner(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_selects_nothing() {
        let mut list = MemorySelect::new("Select a region");
        list.replace_options(vec![LocationOption::new("a", "Alpha")]);
        list.set_value("zz");
        assert_eq!(list.value(), "");
        list.set_value("a");
        assert_eq!(list.selected_label().as_deref(), Some("Alpha"));
    }

    #[test]
    fn badge_only_follows_refresh() {
        let mut list = MemorySelect::prefilled(vec![LocationOption::new("a", "Alpha")], "a");
        assert_eq!(list.badge(), Some("Alpha"));

        list.replace_options(Vec::new());
        assert_eq!(list.value(), "");
        assert_eq!(list.badge(), Some("Alpha"), "raw list cleared, badge still shown");

        list.refresh();
        assert_eq!(list.badge(), None);
    }

    #[test]
    fn clear_leaves_only_blank_option() {
        let mut list = MemorySelect::prefilled(vec![LocationOption::new("a", "Alpha")], "a");
        list.dismiss_selection();
        list.clear();
        assert_eq!(list.options(), &[LocationOption::none()]);
        assert!(list.choices().is_empty());
        assert_eq!(list.dismiss_count(), 1);
        assert_eq!(list.badge(), None);
    }

    #[test]
    fn clear_keeps_placeholder_and_rerenders() {
        let mut list = MemorySelect::new("Select a city");
        list.replace_options(vec![LocationOption::new("c1", "One")]);
        list.set_value("c1");
        list.refresh();
        assert_eq!(list.refresh_count(), 1);

        list.clear();
        assert_eq!(list.refresh_count(), 2);
        assert_eq!(list.placeholder(), "Select a city");
        assert_eq!(list.value(), "");
    }
}
