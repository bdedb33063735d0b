use cleo_core::{Effect, Msg};
use cleo_relay::{outcome_of, RelayEvent, RelayHandle, TemplateParams};
use site_logging::site_info;

use super::config::SiteConfig;

pub struct EffectRunner {
    relay: RelayHandle,
    to_name: String,
    scroll_reset: bool,
}

impl EffectRunner {
    pub fn new(config: &SiteConfig) -> std::io::Result<Self> {
        Ok(Self {
            relay: RelayHandle::new(config.relay.to_settings())?,
            to_name: config.relay.to_name.clone(),
            scroll_reset: false,
        })
    }

    /// Executes effects; returns messages that must be dispatched right away.
    pub fn enqueue(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::SendContactMessage(submission) => {
                    let params = TemplateParams::from_submission(&submission, &self.to_name);
                    site_info!(
                        "SendContactMessage from_email_len={} message_len={}",
                        params.from_email.len(),
                        params.message.len()
                    );
                    let queued = self.relay.send(params);
                    if queued.is_err() {
                        immediate.push(Msg::SubmissionFinished(outcome_of(&queued)));
                    }
                }
                Effect::ScrollToTop => {
                    self.scroll_reset = true;
                }
            }
        }
        immediate
    }

    /// Returns whether a scroll reset was requested since the last call.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    pub fn poll(&self) -> Option<Msg> {
        self.relay.try_recv().map(|event| match event {
            RelayEvent::Completed { result } => Msg::SubmissionFinished(outcome_of(&result)),
        })
    }
}
