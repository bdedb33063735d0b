use cleo_core::{ContactField, Msg, SortOrder};

pub const HELP: &str = "\
Commands:
  go <path>              open a page (/, /about, /news, /contact, /get-started, /testimonials, /faq)
  search [term]          filter news; no term clears the search
  sort <order>           recommended | newest | oldest
  set <field> [value]    firstName | lastName | email | message
  submit                 send the contact form
  dismiss                close the notification
  help                   show this text
  quit                   leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
}

/// Maps one input line to the messages a browser event would produce.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (verb, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    // The search term is sent as typed; whitespace-only terms reach the ranker.
    let rest = raw.trim();

    let msgs = match verb.to_ascii_lowercase().as_str() {
        "" => Vec::new(),
        "go" | "open" => {
            if rest.is_empty() {
                return Err("usage: go <path>".to_string());
            }
            vec![Msg::Navigate(rest.to_string())]
        }
        "search" => vec![Msg::SearchChanged(raw.to_string())],
        "sort" => {
            let order = rest.parse::<SortOrder>().map_err(|err| err.to_string())?;
            vec![Msg::SortOrderChanged(order)]
        }
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim()),
                None => (rest, ""),
            };
            let field = name.parse::<ContactField>().map_err(|err| err.to_string())?;
            // Typing into a field and moving on: edit, then blur.
            vec![
                Msg::FieldChanged {
                    field,
                    value: value.to_string(),
                },
                Msg::FieldBlurred(field),
            ]
        }
        "submit" | "send" => vec![Msg::SubmitClicked],
        "dismiss" | "close" => vec![Msg::NotificationDismissed],
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(format!("unknown command {other:?}; try help")),
    };
    Ok(Command::Dispatch(msgs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_sends_the_term_as_typed() {
        assert_eq!(
            parse_command("search  honor society "),
            Ok(Command::Dispatch(vec![Msg::SearchChanged(
                " honor society ".to_string()
            )]))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Command::Dispatch(vec![Msg::SearchChanged(String::new())]))
        );
    }

    #[test]
    fn whitespace_only_search_term_is_not_swallowed() {
        assert_eq!(
            parse_command("search   "),
            Ok(Command::Dispatch(vec![Msg::SearchChanged("  ".to_string())]))
        );
    }

    #[test]
    fn set_edits_then_blurs() {
        assert_eq!(
            parse_command("set email ada@example.com"),
            Ok(Command::Dispatch(vec![
                Msg::FieldChanged {
                    field: ContactField::Email,
                    value: "ada@example.com".to_string(),
                },
                Msg::FieldBlurred(ContactField::Email),
            ]))
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_command("sort sideways").is_err());
        let err = parse_command("set phone 555").unwrap_err();
        assert!(err.starts_with("unknown contact field \"phone\""), "{err}");
        assert!(parse_command("go").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("   "), Ok(Command::Dispatch(Vec::new())));
        assert_eq!(
            parse_command("sort newest"),
            Ok(Command::Dispatch(vec![Msg::SortOrderChanged(
                SortOrder::Newest
            )]))
        );
    }
}
