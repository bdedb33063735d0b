use crate::contact::{ContactForm, ContactFormValues, SubmissionStatus, ValidationResult};
use crate::news::{NewsItem, RankedView, SearchState, SortOrder};
use crate::route::Route;

/// Shown in place of a missing news image.
pub const IMAGE_PLACEHOLDER: &str = "Image Coming Soon";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: Route,
    pub news: NewsPageView,
    pub contact: ContactFormView,
    pub notification: Option<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsPageView {
    pub search_term: String,
    pub sort_order: SortOrder,
    pub matching: Vec<NewsCardView>,
    pub other: Vec<NewsCardView>,
    /// A search is active and matched nothing.
    pub no_results: bool,
    /// A search is active and there are non-matching articles to list below.
    pub show_other_articles: bool,
}

impl NewsPageView {
    pub(crate) fn from_ranked(search: &SearchState, ranked: RankedView) -> Self {
        let searching = search.is_searching();
        Self {
            search_term: search.search_term.clone(),
            sort_order: search.sort_order,
            no_results: searching && ranked.matching_news.is_empty(),
            show_other_articles: searching && !ranked.other_news.is_empty(),
            matching: ranked.matching_news.iter().map(NewsCardView::from).collect(),
            other: ranked.other_news.iter().map(NewsCardView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCardView {
    pub byline: String,
    pub title: String,
    pub link: String,
    pub image: Option<String>,
}

impl NewsCardView {
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(IMAGE_PLACEHOLDER)
    }
}

impl From<&NewsItem> for NewsCardView {
    fn from(item: &NewsItem) -> Self {
        Self {
            byline: format!("{} — {}", item.source, item.date),
            title: item.title.clone(),
            link: item.link.clone(),
            image: item.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormView {
    pub values: ContactFormValues,
    /// Inline errors, limited to touched fields.
    pub errors: ValidationResult,
    pub status: SubmissionStatus,
    pub submit_enabled: bool,
}

impl ContactFormView {
    pub(crate) fn from_form(form: &ContactForm) -> Self {
        Self {
            values: form.values().clone(),
            errors: form.visible_errors(),
            status: form.status(),
            submit_enabled: form.status() != SubmissionStatus::Submitting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: &'static str,
}

impl Notification {
    pub fn for_status(status: SubmissionStatus) -> Option<Self> {
        match status {
            SubmissionStatus::Success => Some(Self {
                severity: Severity::Success,
                text: "Message sent successfully!",
            }),
            SubmissionStatus::Error => Some(Self {
                severity: Severity::Error,
                text: "Failed to send message. Please try again.",
            }),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}
