// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay a recorded battle
//!
//! A fresh bot is created for every round. Each round's bot gets its own
//! enemy tracker; statistics and bullet ids are shared by the whole
//! session. After every turn the accuracy-based firing system shoots at
//! the most recently scanned enemy.

use crate::error::RbError;
use crate::output::{self, OutputFormat, Table};
use clap::Args;
use rb_adapters::TracingLogger;
use rb_bot::{
    load_trace, AccuracyBasedFiringSystem, Bot, BotConfig, EnemyStatistics, EnemyTracker,
    HostEvent, Session,
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines trace of host callbacks
    pub trace: PathBuf,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the replayed bot
    #[arg(long, default_value = "Robobus")]
    pub name: String,

    /// Output format
    #[arg(long, short, value_enum, default_value_t)]
    pub output: OutputFormat,
}

pub fn handle(args: ReplayArgs) -> anyhow::Result<()> {
    let (config, events) = load_inputs(&args)?;
    let summary = replay(&args.name, config, events);
    output::print(&summary, args.output)
}

/// Read the optional config file, then the trace
fn load_inputs(args: &ReplayArgs) -> Result<(BotConfig, Vec<HostEvent>), RbError> {
    let config = match &args.config {
        Some(path) => BotConfig::load(path).map_err(|e| RbError::config(path, e))?,
        None => BotConfig::default(),
    };
    let events = load_trace(&args.trace).map_err(|e| RbError::trace(&args.trace, e))?;
    Ok((config, events))
}

/// One round: its bot and the plugins plugged into it
struct Round {
    bot: Bot,
    tracker: Rc<EnemyTracker>,
}

impl Round {
    fn begin(session: &mut Session) -> Self {
        let mut bot = session.next_round();
        let tracker = bot.plug(Rc::new(EnemyTracker::new(session.config().tracker)));
        bot.start_round();
        Self { bot, tracker }
    }

    /// Feed one event; returns true when the firing system fired
    fn step(&mut self, event: HostEvent, firing: &AccuracyBasedFiringSystem) -> bool {
        let scanned = match &event {
            HostEvent::ScannedRobot(scan) => Some(scan.name.clone()),
            _ => None,
        };
        let turn = matches!(event, HostEvent::NextTurn);

        self.bot.handle(event);

        if let Some(name) = scanned {
            self.bot.lock_target(name);
        }
        turn && !self.bot.is_round_ended() && firing.execute(&mut self.bot).is_some()
    }
}

pub(crate) fn replay(name: &str, config: BotConfig, events: Vec<HostEvent>) -> Summary {
    let logger = Rc::new(TracingLogger::for_bot(name));
    let mut session = Session::new(name, config, logger);
    let firing = AccuracyBasedFiringSystem::new(session.config().firing);

    let total = events.len();
    let mut shots = 0;
    let mut current: Option<Round> = None;

    for event in events {
        let needs_round = match &current {
            None => true,
            Some(round) => round.bot.is_round_ended() && event != HostEvent::BattleEnded,
        };
        if needs_round {
            current = Some(Round::begin(&mut session));
        }
        let Some(round) = current.as_mut() else {
            continue;
        };
        // rounds are opened above; the marker itself carries nothing
        if event == HostEvent::RoundStarted {
            continue;
        }
        if round.step(event, &firing) {
            shots += 1;
        }
    }

    let tracked = current
        .map(|round| round.tracker.known_enemies())
        .unwrap_or_default();
    tracing::info!(bot = name, rounds = session.rounds(), shots, "replay finished");

    Summary::new(name, &session, total, shots, tracked)
}

#[derive(Debug, Serialize)]
pub struct EnemyRow {
    pub name: String,
    pub fired: u32,
    pub hits: u32,
    pub misses: u32,
    pub lost: u32,
    pub accuracy: f64,
}

impl EnemyRow {
    fn new(name: impl Into<String>, stats: EnemyStatistics) -> Self {
        Self {
            name: name.into(),
            fired: stats.fired,
            hits: stats.hits,
            misses: stats.misses,
            lost: stats.lost,
            accuracy: stats.accuracy(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub bot: String,
    pub rounds: u32,
    pub events: usize,
    pub shots: usize,
    pub enemies: Vec<EnemyRow>,
    pub total: EnemyRow,
    /// Enemies the last round's tracker saw
    pub tracked: Vec<String>,
}

impl Summary {
    fn new(
        name: &str,
        session: &Session,
        events: usize,
        shots: usize,
        tracked: Vec<String>,
    ) -> Self {
        let statistics = session.statistics();
        Self {
            bot: name.to_string(),
            rounds: session.rounds(),
            events,
            shots,
            enemies: statistics
                .enemies()
                .into_iter()
                .map(|(name, stats)| EnemyRow::new(name, stats))
                .collect(),
            total: EnemyRow::new("TOTAL", statistics.totals()),
            tracked,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bot: {} ({} rounds, {} events, {} shots)",
            self.bot, self.rounds, self.events, self.shots
        )?;
        let mut table = Table::new(["ENEMY", "FIRED", "HITS", "MISSES", "LOST", "ACCURACY"]);
        for row in self.enemies.iter().chain(std::iter::once(&self.total)) {
            table.row([
                row.name.clone(),
                row.fired.to_string(),
                row.hits.to_string(),
                row.misses.to_string(),
                row.lost.to_string(),
                format!("{:.1}%", row.accuracy * 100.0),
            ]);
        }
        write!(f, "{}", table)?;
        if !self.tracked.is_empty() {
            writeln!(f, "Tracked: {}", self.tracked.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
