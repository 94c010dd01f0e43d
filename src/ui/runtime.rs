use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::fetch::PageSource;
use crate::pager::{persist_and_log, PagerStore};
use crate::persist::KeyValueStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the viewer until the user quits.
///
/// Key events, ticks and fetch outcomes are multiplexed onto this one loop,
/// which is the only place the pager store is touched.
pub async fn run<S: PageSource>(
    source: S,
    storage: Arc<dyn KeyValueStore>,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (store, mut outcomes) = PagerStore::with_channel(source);
    let mut app = App::new(store);
    let mut events = EventHandler::new(tick_rate);

    app.start(persist_and_log(storage));

    let result = loop {
        let view = app.view();
        if let Err(err) = terminal.draw(|frame| draw(frame, &view)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    handle_key(&mut app, key);
                }
                Some(AppEvent::Resize | AppEvent::Tick) => {}
                None => break Ok(()),
            },
            Some(outcome) = outcomes.recv() => app.on_fetch_outcome(outcome),
        }
    };

    app.shutdown();
    events.stop();
    drop(guard);
    tracing::info!("Viewer closed");
    result
}
