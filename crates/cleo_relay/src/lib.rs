//! CLEO relay: mail-relay capability, its EmailJS client and effect execution.
mod handle;
mod relay;
mod submit;
mod template;
mod types;

pub use handle::RelayHandle;
pub use relay::{EmailJsRelay, MailRelay, RelaySettings, DEFAULT_ENDPOINT};
pub use submit::{outcome_of, submit_contact};
pub use template::{EmailJsRequest, TemplateParams, DEFAULT_RECIPIENT_NAME};
pub use types::{FailureKind, RelayError, RelayEvent};
