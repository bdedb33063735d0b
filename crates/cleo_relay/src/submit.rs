use cleo_core::{ContactForm, SubmissionOutcome, SubmitAttempt};
use site_logging::site_warn;

use crate::relay::MailRelay;
use crate::{RelayError, TemplateParams};

/// Collapses a relay result to the two outcomes the form understands.
pub fn outcome_of(result: &Result<(), RelayError>) -> SubmissionOutcome {
    match result {
        Ok(()) => SubmissionOutcome::Delivered,
        Err(err) => {
            site_warn!("mail relay send failed: {}", err);
            SubmissionOutcome::Failed
        }
    }
}

/// Drives one submission end to end: validate, send once, apply the outcome.
///
/// Invalid input and an already in-flight submission return without calling
/// the relay. There is no retry; a failure leaves the form values in place.
pub async fn submit_contact(
    form: &mut ContactForm,
    relay: &dyn MailRelay,
    to_name: &str,
) -> SubmitAttempt {
    let attempt = form.begin_submit();
    if let SubmitAttempt::Started(submission) = &attempt {
        let params = TemplateParams::from_submission(submission, to_name);
        let result = relay.send(&params).await;
        form.complete_submit(outcome_of(&result));
    }
    attempt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;

    #[test]
    fn every_relay_error_collapses_to_failed() {
        for kind in [
            FailureKind::Unavailable,
            FailureKind::Timeout,
            FailureKind::HttpStatus(401),
        ] {
            let result = Err(RelayError::new(kind, "down"));
            assert_eq!(outcome_of(&result), SubmissionOutcome::Failed);
        }
        assert_eq!(outcome_of(&Ok(())), SubmissionOutcome::Delivered);
    }
}
