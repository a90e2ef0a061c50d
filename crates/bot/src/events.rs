// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event names raised by the bot facade
//!
//! Plugins may raise names of their own through `Bot::broadcast`; the
//! registry does not restrict the vocabulary.

pub const ROUND_STARTED: &str = "ROUND_STARTED";
pub const NEXT_TURN: &str = "NEXT_TURN";
pub const ENEMY_SCANNED: &str = "ENEMY_SCANNED";
pub const BULLET_FIRED: &str = "BULLET_FIRED";
pub const BULLET_HIT: &str = "BULLET_HIT";
pub const BULLET_HIT_BULLET: &str = "BULLET_HIT_BULLET";
pub const BULLET_MISSED: &str = "BULLET_MISSED";
pub const HIT_BY_BULLET: &str = "HIT_BY_BULLET";
pub const ROBOT_DEATH: &str = "ROBOT_DEATH";
pub const HIT_ROBOT: &str = "HIT_ROBOT";
pub const HIT_WALL: &str = "HIT_WALL";
pub const PAINT: &str = "PAINT";
pub const DRAW: &str = "DRAW";
pub const DEATH: &str = "DEATH";
pub const WIN: &str = "WIN";
pub const ROUND_ENDED: &str = "ROUND_ENDED";
pub const BATTLE_ENDED: &str = "BATTLE_ENDED";

/// Every name the facade raises, in lifecycle order
pub const ALL: [&str; 17] = [
    ROUND_STARTED,
    NEXT_TURN,
    ENEMY_SCANNED,
    BULLET_FIRED,
    BULLET_HIT,
    BULLET_HIT_BULLET,
    BULLET_MISSED,
    HIT_BY_BULLET,
    ROBOT_DEATH,
    HIT_ROBOT,
    HIT_WALL,
    PAINT,
    DRAW,
    DEATH,
    WIN,
    ROUND_ENDED,
    BATTLE_ENDED,
];
