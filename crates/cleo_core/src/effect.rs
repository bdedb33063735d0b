#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver the submission through the mail relay, then report back with
    /// `Msg::SubmissionFinished`.
    SendContactMessage(crate::ContactSubmission),
    /// Reset the viewport after a route change.
    ScrollToTop,
}
