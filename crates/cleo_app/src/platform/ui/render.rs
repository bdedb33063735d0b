use std::fmt::Write;

use cleo_core::{
    AppViewModel, ContactField, ContactFormView, NewsCardView, NewsPageView, Route, Severity,
    SortOrder, SubmissionStatus,
};

const RULE: &str = "------------------------------------------------------------";

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    render_nav(&mut out, view.route);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", view.route.title());
    let _ = writeln!(out);

    match view.route {
        Route::News => render_news(&mut out, &view.news),
        Route::Contact => render_contact(&mut out, &view.contact),
        Route::NotFound => {
            let _ = writeln!(out, "Nothing lives here. Try `go /`.");
        }
        _ => {
            let _ = writeln!(out, "(static page content)");
        }
    }

    if let Some(notification) = &view.notification {
        let tag = match notification.severity {
            Severity::Success => "OK",
            Severity::Error => "ERROR",
        };
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "[{tag}] {}  (dismiss to close)", notification.text);
    }
    out
}

fn render_nav(out: &mut String, current: Route) {
    let links: Vec<String> = Route::PAGES
        .into_iter()
        .map(|route| {
            if route == current {
                format!("[{}]", route.path())
            } else {
                route.path().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", links.join("  "));
}

fn render_news(out: &mut String, news: &NewsPageView) {
    let sort_labels: Vec<String> = SortOrder::ALL
        .into_iter()
        .map(|order| {
            if order == news.sort_order {
                format!("({})", order.label())
            } else {
                order.label().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Search: {:?}", news.search_term);
    let _ = writeln!(out, "Sort By Date: {}", sort_labels.join(" | "));
    let _ = writeln!(out);

    for card in &news.matching {
        render_card(out, card);
    }
    if news.no_results {
        let _ = writeln!(
            out,
            "No news articles found matching \"{}\"",
            news.search_term
        );
    }
    if news.show_other_articles {
        let _ = writeln!(out, "---------------------- Other Articles ----------------------");
        for card in &news.other {
            render_card(out, card);
        }
    }
}

fn render_card(out: &mut String, card: &NewsCardView) {
    let _ = writeln!(out, "  {}", card.byline);
    let _ = writeln!(out, "  {}", card.title);
    let _ = writeln!(out, "  {}  [{}]", card.link, card.image_or_placeholder());
    let _ = writeln!(out);
}

fn render_contact(out: &mut String, contact: &ContactFormView) {
    for field in ContactField::ALL {
        let _ = writeln!(
            out,
            "{:<11} {}",
            format!("{}:", field.label()),
            contact.values.get(field)
        );
        if let Some(error) = contact.errors.error(field) {
            let _ = writeln!(out, "{:<11} ! {}", "", error);
        }
    }
    let _ = writeln!(out);
    let button = match contact.status {
        SubmissionStatus::Submitting => "Sending...",
        _ => "Send Message",
    };
    let _ = writeln!(out, "<{button}>");
}

#[cfg(test)]
mod tests {
    use cleo_core::{
        editorial_priorities, news_manifest, update, AppState, ContactField, Msg,
    };

    use super::*;

    fn news_state() -> AppState {
        let state = AppState::with_news(news_manifest().unwrap(), editorial_priorities());
        update(state, Msg::Navigate("/news".to_string())).0
    }

    #[test]
    fn news_page_lists_other_articles_under_divider() {
        let (state, _) = update(news_state(), Msg::SearchChanged("MIT".to_string()));
        let text = render(&state.view());

        assert!(text.contains("[/news]"));
        assert!(text.contains("MIT AgeLab — 3/19/2024"));
        let divider = text.find("Other Articles").expect("divider");
        let cbs = text.find("On the Road with Steve Hartman, CBS").expect("cbs card");
        assert!(cbs > divider);
    }

    #[test]
    fn news_page_reports_empty_search() {
        let (state, _) = update(news_state(), Msg::SearchChanged("zebra".to_string()));
        let text = render(&state.view());

        assert!(text.contains("No news articles found matching \"zebra\""));
    }

    #[test]
    fn contact_page_shows_touched_errors_only() {
        let (state, _) = update(AppState::new(), Msg::Navigate("/contact".to_string()));
        let (state, _) = update(
            state,
            Msg::FieldChanged {
                field: ContactField::Email,
                value: "nope".to_string(),
            },
        );
        let (state, _) = update(state, Msg::FieldBlurred(ContactField::Email));
        let text = render(&state.view());

        assert!(text.contains("Enter a valid email"));
        assert!(!text.contains("First name is required"));
        assert!(text.contains("<Send Message>"));
    }
}
