// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::host::{BotStatus, BulletHitEvent, BulletMissedEvent};
use crate::plugins::{BotStatistics, Statistics};
use rb_adapters::FakeLogger;
use rb_core::RegistryConfig;
use std::rc::Rc;
use yare::parameterized;

fn bot_with(statistics: Statistics) -> Bot {
    let mut bot = Bot::new(
        "Tester",
        Rc::new(FakeLogger::new()),
        statistics,
        RegistryConfig::default(),
    );
    bot.start_round();
    bot
}

/// Fire `fired` bullets at Crazy, `hits` of which land, cooling the gun between shots
fn shoot(bot: &mut Bot, fired: u32, hits: u32) {
    bot.lock_target("Crazy");
    for n in 0..fired {
        let Some(bullet) = bot.fire(1.0) else {
            panic!("gun should be cool");
        };
        if n < hits {
            bot.on_bullet_hit(BulletHitEvent {
                bullet: bullet.id,
                victim: "Crazy".to_string(),
                victim_energy: 50.0,
            });
        } else {
            bot.on_bullet_missed(BulletMissedEvent { bullet: bullet.id });
        }
        let cooled = BotStatus {
            gun_heat: 0.0,
            ..bot.status().clone()
        };
        bot.on_status(cooled);
    }
}

#[test]
fn holds_fire_without_target() {
    let bot = bot_with(BotStatistics::shared());
    assert_eq!(AccuracyBasedFiringSystem::default().fire_power(&bot), 0.0);
}

#[test]
fn medium_power_before_first_shot() {
    let mut bot = bot_with(BotStatistics::shared());
    bot.lock_target("Crazy");
    assert_eq!(
        AccuracyBasedFiringSystem::default().fire_power(&bot),
        MEDIUM_BULLET_POWER
    );
    assert_eq!(MEDIUM_BULLET_POWER, 1.55);
}

#[parameterized(
    perfect = { 4, 4, MAX_BULLET_POWER },
    three_quarters = { 4, 3, MAX_BULLET_POWER },
    half = { 4, 2, MEDIUM_BULLET_POWER },
    quarter = { 4, 1, MIN_BULLET_POWER },
    none = { 4, 0, 0.0 },
)]
fn power_follows_accuracy(fired: u32, hits: u32, expected: f64) {
    let mut bot = bot_with(BotStatistics::shared());
    shoot(&mut bot, fired, hits);
    assert_eq!(AccuracyBasedFiringSystem::default().fire_power(&bot), expected);
}

#[test]
fn thresholds_are_adjustable() {
    let mut bot = bot_with(BotStatistics::shared());
    shoot(&mut bot, 4, 1);

    let eager = AccuracyBasedFiringSystem::default()
        .fire_max_at(0.25)
        .fire_medium_at(0.2)
        .fire_min_at(0.1);
    assert_eq!(eager.fire_power(&bot), MAX_BULLET_POWER);
}

#[test]
fn execute_fires_computed_power() {
    let mut bot = bot_with(BotStatistics::shared());
    bot.lock_target("Crazy");

    let bullet = AccuracyBasedFiringSystem::default().execute(&mut bot);
    assert_eq!(bullet.map(|b| b.power), Some(MEDIUM_BULLET_POWER));
}

#[test]
fn execute_with_zero_power_does_not_fire() {
    let statistics = BotStatistics::shared();
    let mut bot = bot_with(statistics.clone());
    shoot(&mut bot, 4, 0);

    assert!(AccuracyBasedFiringSystem::default().execute(&mut bot).is_none());
    assert_eq!(statistics.for_enemy("Crazy").fired, 4);
}
