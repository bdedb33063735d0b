#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User followed a link or typed a location.
    Navigate(String),
    /// User edited the news search box.
    SearchChanged(String),
    /// User picked a news sort order.
    SortOrderChanged(crate::SortOrder),
    /// User edited one contact form field.
    FieldChanged {
        field: crate::ContactField,
        value: String,
    },
    /// A contact form field lost focus.
    FieldBlurred(crate::ContactField),
    /// User clicked Send Message.
    SubmitClicked,
    /// Mail relay finished the in-flight submission.
    SubmissionFinished(crate::SubmissionOutcome),
    /// Notification closed by the user or its auto-hide timer.
    NotificationDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
