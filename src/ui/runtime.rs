use crate::config::Config;
use crate::error::AppError;
use crate::motion::{HostMotionPreference, MotionPreference};
use crate::store::UiStore;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Run the showcase until the user quits or a shutdown signal arrives.
pub async fn run(config: &Config, store: UiStore, host: &HostMotionPreference) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new();
    let mut input = events.spawn_input_reader(INPUT_POLL);
    let motion = events.forward_motion(host.subscribe());
    let shutdown = events.forward_shutdown();
    let host_signals = host.listen()?;

    let mut app = App::new(config, store, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    let mut ticker = tokio::time::interval(config.ui.tick_rate());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(AppError::from(err));
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => app.on_tick(),
            event = events.next() => match event {
                Some(event) => app.handle_event(event),
                None => break Ok(()),
            },
        }
    };

    app.shutdown();
    input.stop();
    motion.abort();
    shutdown.abort();
    host_signals.abort();
    drop(guard);
    result
}
