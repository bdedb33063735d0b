use cleo_core::ContactSubmission;
use serde::Serialize;

pub const DEFAULT_RECIPIENT_NAME: &str = "CLEO Initiative";

/// Key/value payload filled into the relay's message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
}

impl TemplateParams {
    pub fn from_submission(submission: &ContactSubmission, to_name: &str) -> Self {
        Self {
            from_name: format!("{} {}", submission.first_name, submission.last_name),
            from_email: submission.email.clone(),
            message: submission.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// Public key; EmailJS names it `user_id`.
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_joins_first_and_last() {
        let submission = ContactSubmission {
            first_name: "Katherine".to_string(),
            last_name: "Johnson".to_string(),
            email: "kj@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let params = TemplateParams::from_submission(&submission, DEFAULT_RECIPIENT_NAME);

        assert_eq!(params.from_name, "Katherine Johnson");
        assert_eq!(params.from_email, "kj@example.com");
        assert_eq!(params.to_name, "CLEO Initiative");
    }
}
