use site_logging::{site_debug, site_info};

use crate::{AppState, Effect, Msg, Route, SubmissionOutcome, SubmitAttempt};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(href) => {
            let route = Route::from_path(&href);
            if state.set_route(route) {
                site_debug!("navigated to {:?} via {:?}", route, href);
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::SortOrderChanged(order) => {
            state.set_sort_order(order);
            Vec::new()
        }
        Msg::FieldChanged { field, value } => {
            state.update_field(field, value);
            Vec::new()
        }
        Msg::FieldBlurred(field) => {
            state.touch_field(field);
            Vec::new()
        }
        Msg::SubmitClicked => match state.begin_submit() {
            SubmitAttempt::Started(submission) => {
                site_info!("contact submission started");
                vec![Effect::SendContactMessage(submission)]
            }
            SubmitAttempt::Invalid(result) => {
                site_debug!(
                    "contact submission blocked by invalid fields {:?}",
                    result.invalid_fields()
                );
                Vec::new()
            }
            SubmitAttempt::InFlight => {
                site_debug!("contact submission ignored; one is already in flight");
                Vec::new()
            }
        },
        Msg::SubmissionFinished(outcome) => {
            if state.complete_submit(outcome) {
                match outcome {
                    SubmissionOutcome::Delivered => site_info!("contact submission delivered"),
                    SubmissionOutcome::Failed => site_info!("contact submission failed"),
                }
            } else {
                site_debug!("stray submission outcome {:?} ignored", outcome);
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
