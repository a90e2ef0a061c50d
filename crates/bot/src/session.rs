// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One battle: a bot per round sharing statistics and bullet ids

use crate::bot::Bot;
use crate::config::BotConfig;
use crate::plugins::{BotStatistics, Statistics};
use rb_core::{Logger, SequentialIdGen};
use std::rc::Rc;

pub struct Session {
    name: String,
    config: BotConfig,
    logger: Rc<dyn Logger>,
    statistics: Statistics,
    bullet_ids: SequentialIdGen,
    rounds: u32,
}

impl Session {
    pub fn new(name: impl Into<String>, config: BotConfig, logger: Rc<dyn Logger>) -> Self {
        Self {
            name: name.into(),
            config,
            logger,
            statistics: BotStatistics::shared(),
            bullet_ids: SequentialIdGen::new("bullet"),
            rounds: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Rounds started so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// A fresh bot for the next round
    pub fn next_round(&mut self) -> Bot {
        self.rounds += 1;
        tracing::info!(bot = %self.name, round = self.rounds, "starting round");
        Bot::new(
            self.name.clone(),
            Rc::clone(&self.logger),
            Rc::clone(&self.statistics),
            self.config.registry,
        )
        .with_bullet_ids(self.bullet_ids.clone())
    }
}
