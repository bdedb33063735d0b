use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use cleo_core::{editorial_priorities, news_manifest, update, AppState, Msg};
use site_logging::{site_debug, site_info, site_trace};

use super::config::SiteConfig;
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

const TICK_INTERVAL: Duration = Duration::from_millis(75);
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

enum InputEvent {
    Line(String),
    Closed,
}

pub fn run_app(config: &SiteConfig) -> anyhow::Result<()> {
    let news = news_manifest().context("news manifest is malformed")?;
    site_info!("loaded {} news items", news.len());

    let effects = EffectRunner::new(config).context("failed to start mail relay runtime")?;
    let mut shell = Shell {
        config,
        state: AppState::with_news(news, editorial_priorities()),
        effects,
        notification_since: None,
        out: io::stdout(),
    };

    let input_rx = spawn_input_reader();

    shell.dispatch(Msg::Navigate(config.start_path.clone()))?;
    shell.force_render()?;

    loop {
        match input_rx.recv_timeout(TICK_INTERVAL) {
            Ok(InputEvent::Line(line)) => match parse_command(&line) {
                Ok(Command::Dispatch(msgs)) => {
                    for msg in msgs {
                        shell.dispatch(msg)?;
                    }
                }
                Ok(Command::Help) => shell.print(HELP)?,
                Ok(Command::Quit) => break,
                Err(err) => shell.print(&err)?,
            },
            Ok(InputEvent::Closed) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        while let Some(msg) = shell.effects.poll() {
            shell.dispatch(msg)?;
        }
        shell.expire_notification()?;
        shell.dispatch(Msg::Tick)?;
    }

    site_info!("shell closed");
    Ok(())
}

fn spawn_input_reader() -> mpsc::Receiver<InputEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(InputEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(InputEvent::Closed);
    });
    rx
}

struct Shell<'a> {
    config: &'a SiteConfig,
    state: AppState,
    effects: EffectRunner,
    notification_since: Option<Instant>,
    out: io::Stdout,
}

impl Shell<'_> {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            if msg == Msg::Tick {
                site_trace!("dispatch Tick");
            } else {
                site_debug!("dispatch {:?}", msg);
            }
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.effects.enqueue(effects));
        }

        if self.state.consume_dirty() {
            self.track_notification();
            self.force_render()?;
        }
        Ok(())
    }

    fn track_notification(&mut self) {
        let showing = self.state.view().notification.is_some();
        match (showing, self.notification_since) {
            (true, None) => self.notification_since = Some(Instant::now()),
            (false, Some(_)) => self.notification_since = None,
            _ => {}
        }
    }

    fn expire_notification(&mut self) -> io::Result<()> {
        let expired = self
            .notification_since
            .is_some_and(|since| since.elapsed() >= self.config.notification_auto_hide());
        if expired {
            self.dispatch(Msg::NotificationDismissed)?;
        }
        Ok(())
    }

    fn force_render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        let mut out = self.out.lock();
        if self.effects.take_scroll_reset() {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(render(&view).as_bytes())?;
        out.write_all(b"> ")?;
        out.flush()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{text}")?;
        out.write_all(b"> ")?;
        out.flush()
    }
}
