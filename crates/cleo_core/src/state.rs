use crate::contact::{ContactField, ContactForm, SubmissionOutcome, SubmitAttempt};
use crate::news::{NewsItem, PriorityTable, SearchState, SortOrder};
use crate::route::Route;
use crate::view_model::{AppViewModel, ContactFormView, NewsPageView, Notification};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    route: Route,
    news: Vec<NewsItem>,
    priorities: PriorityTable,
    search: SearchState,
    contact: ContactForm,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_news(news: Vec<NewsItem>, priorities: PriorityTable) -> Self {
        Self {
            news,
            priorities,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let ranked = self.search.rank(&self.news, &self.priorities);
        AppViewModel {
            route: self.route,
            news: NewsPageView::from_ranked(&self.search, ranked),
            contact: ContactFormView::from_form(&self.contact),
            notification: Notification::for_status(self.contact.status()),
            dirty: self.dirty,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns false when already on `route`.
    pub(crate) fn set_route(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        self.route = route;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search.search_term != term {
            self.search.search_term = term;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_sort_order(&mut self, order: SortOrder) {
        if self.search.sort_order != order {
            self.search.sort_order = order;
            self.mark_dirty();
        }
    }

    pub(crate) fn update_field(&mut self, field: ContactField, value: String) {
        if self.contact.values().get(field) != value {
            self.contact.update_field(field, value);
            self.mark_dirty();
        }
    }

    pub(crate) fn touch_field(&mut self, field: ContactField) {
        if !self.contact.touched().is_touched(field) {
            self.contact.touch(field);
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_submit(&mut self) -> SubmitAttempt {
        let attempt = self.contact.begin_submit();
        if !matches!(attempt, SubmitAttempt::InFlight) {
            self.mark_dirty();
        }
        attempt
    }

    pub(crate) fn complete_submit(&mut self, outcome: SubmissionOutcome) -> bool {
        let applied = self.contact.complete_submit(outcome);
        if applied {
            self.mark_dirty();
        }
        applied
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.contact.dismiss_notification() {
            self.mark_dirty();
        }
    }
}
