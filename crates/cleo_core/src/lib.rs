//! CLEO site core: pure state machine, news ranking and contact-form logic.
mod contact;
mod effect;
mod manifest;
mod msg;
mod news;
mod route;
mod state;
mod update;
mod view_model;

pub use contact::{
    is_valid_email, validate, ContactField, ContactFieldParseError, ContactForm, ContactFormValues, ContactSubmission,
    FieldError, SubmissionOutcome, SubmissionStatus, SubmitAttempt, TouchedFields,
    ValidationResult,
};
pub use effect::Effect;
pub use manifest::{editorial_priorities, news_manifest};
pub use msg::Msg;
pub use news::{
    rank, DateParseError, NewsDate, NewsItem, PriorityTable, RankedView, SearchState, SortOrder,
    SortOrderParseError, UNRANKED,
};
pub use route::Route;
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, ContactFormView, NewsCardView, NewsPageView, Notification, Severity,
    IMAGE_PLACEHOLDER,
};
