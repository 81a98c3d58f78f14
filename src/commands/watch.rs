use crate::{
    db::shifts::{ShiftStore, Shifts},
    libs::{
        config::{Config, WatchConfig},
        duration::live_duration,
        formatter::format_duration,
        messages::Message,
        scheduler,
        shift::{Shift, ShiftGroup},
    },
    msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime};
use clap::Args;
use tokio::sync::oneshot;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between checks while no shift is running
    #[arg(long, short)]
    interval: Option<u64>,
}

/// Drives the auto-transition tick against a store.
///
/// Keeps the last good snapshot so a failed load never loses state, and
/// writes back only when a tick changed something.
pub struct Watcher<S: ShiftStore> {
    store: S,
    owner: String,
    snapshot: Vec<Shift>,
    last_shown: Option<i64>,
}

impl<S: ShiftStore> Watcher<S> {
    pub fn new(store: S, owner: &str) -> Self {
        Self {
            store,
            owner: owner.to_string(),
            snapshot: Vec::new(),
            last_shown: None,
        }
    }

    pub fn snapshot(&self) -> &[Shift] {
        &self.snapshot
    }

    /// One tick at `now`. Returns whether any shift was started.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let current = match self.store.load_shifts(&self.owner) {
            Ok(shifts) => shifts,
            Err(e) => {
                msg_warning!(Message::WatchLoadFailed(e.to_string()));
                self.snapshot.clone()
            }
        };

        let due = current.iter().filter(|s| scheduler::is_due(s, now)).count();
        let (next, changed) = scheduler::advance(&current, now);
        if changed {
            match self.store.save_shifts(&self.owner, &next) {
                Ok(()) => msg_info!(Message::ShiftsAutoStarted(due)),
                Err(e) => msg_error!(Message::WatchSaveFailed(e.to_string())),
            }
        }
        self.snapshot = next;
        changed
    }

    /// Prints the running shift's elapsed time once per minute of progress.
    fn show_progress(&mut self, now: NaiveDateTime) {
        let elapsed = self.snapshot.running().map(|s| live_duration(s, now));
        if elapsed != self.last_shown {
            if let Some(minutes) = elapsed {
                msg_print!(Message::LiveDuration(format_duration(&Duration::minutes(minutes))));
            }
            self.last_shown = elapsed;
        }
    }
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let mut watch: WatchConfig = config.watch_or_default();
    if let Some(interval) = args.interval {
        watch.tick_interval = interval;
    }

    let mut watcher = Watcher::new(Shifts::new()?, &config.owner_id());
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => msg_info!(Message::WatchReceivedCtrlC),
            Err(e) => msg_error!(Message::WatchSignalFailed(e.to_string())),
        }
        let _ = shutdown_tx.send(());
    });

    msg_info!(Message::WatchStarted(watch.tick_interval));
    loop {
        let now = Local::now().naive_local();
        watcher.tick(now);
        watcher.show_progress(now);

        let wait = scheduler::tick_interval(watcher.snapshot(), &watch);
        tokio::select! {
            _ = &mut shutdown_rx => break,
            _ = tokio::time::sleep(wait) => {}
        }
    }

    msg_info!(Message::WatchStopped);
    Ok(())
}
