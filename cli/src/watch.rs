//! Periodic overview refresh for `votestats watch`.
//!
//! Drives the same `Screen` refresh contract the browser uses: a tick only
//! starts a request once the previous one has settled. One shutdown future
//! is held for the whole loop and raced against both the in-flight fetch and
//! the idle wait, so an interrupt is never lost between iterations.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use std::future::Future;
use std::time::Duration;

use votestats::loader::load_overview;
use votestats::{Overview, RoleFilter, Screen, StatsSource};

use crate::{CliError, log_fetch_error, render};

/// Render frames until `shutdown` resolves.
///
/// # Errors
///
/// Propagates `emit` failures and a failed shutdown listener.
pub async fn watch<S, F, E>(
    source: &S,
    filter: &RoleFilter,
    period: Duration,
    shutdown: F,
    mut emit: E,
) -> Result<(), CliError>
where
    S: StatsSource + ?Sized,
    F: Future<Output = std::io::Result<()>>,
    E: FnMut(&str) -> Result<(), CliError>,
{
    let mut ticks = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    let mut screen: Screen<Overview> = Screen::new();
    let mut pending = screen.begin_initial();
    tokio::pin!(shutdown);
    emit(&frame(&screen, filter))?;

    loop {
        if let Some(ticket) = pending.take() {
            let fetched = tokio::select! {
                fetched = load_overview(source) => fetched,
                signal = &mut shutdown => return stop(&mut screen, signal),
            };
            let outcome = fetched.inspect_err(log_fetch_error).map_err(|e| e.user_message());
            screen.settle(ticket, outcome);
            emit(&frame(&screen, filter))?;
        }
        tokio::select! {
            _ = ticks.tick() => {
                pending = screen.begin_refresh();
            }
            signal = &mut shutdown => return stop(&mut screen, signal),
        }
    }
}

fn stop(screen: &mut Screen<Overview>, signal: std::io::Result<()>) -> Result<(), CliError> {
    screen.retire();
    signal?;
    tracing::info!("watch stopped");
    Ok(())
}

fn frame(screen: &Screen<Overview>, filter: &RoleFilter) -> String {
    let body = render::screen(screen, "📊 Loading voting statistics...", |overview| {
        render::overview(overview, filter)
    });
    format!("{}{body}", render::CLEAR)
}
