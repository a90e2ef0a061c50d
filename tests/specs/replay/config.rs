//! Replay configuration specs

use crate::prelude::*;

const MISS_THEN_TURN: &str = r#"{"type":"scanned_robot","name":"Crazy","bearing":0.0,"distance":150,"heading":1.0,"velocity":8,"energy":100}
{"type":"next_turn"}
{"type":"bullet_missed","bullet":"bullet-1"}
{"type":"status","gun_heat":0}
{"type":"next_turn"}
"#;

#[test]
fn default_thresholds_hold_fire_after_a_miss() {
    let temp = Project::empty();
    temp.file("battle.jsonl", MISS_THEN_TURN);

    temp.rb()
        .args(&["replay", "battle.jsonl"])
        .passes()
        .stdout_has("1 shots");
}

#[test]
fn config_thresholds_change_fire_power() {
    let temp = Project::empty();
    temp.file("battle.jsonl", MISS_THEN_TURN);
    temp.file("bot.toml", "[firing]\nfire_min_at = 0.0\n");

    temp.rb()
        .args(&["replay", "battle.jsonl", "--config", "bot.toml"])
        .passes()
        .stdout_has("2 shots");
}

#[test]
fn unknown_config_key_fails() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);
    temp.file("bot.toml", "[tracker]\nhistory = 3\n");

    temp.rb()
        .args(&["replay", "battle.jsonl", "--config", "bot.toml"])
        .fails()
        .stderr_has("Invalid config 'bot.toml'")
        .stderr_has("unknown keys are rejected");
}

#[test]
fn invalid_threshold_order_fails() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);
    temp.file("bot.toml", "[firing]\nfire_min_at = 0.9\n");

    temp.rb()
        .args(&["replay", "battle.jsonl", "--config", "bot.toml"])
        .fails()
        .stderr_has("fire_max_at >= fire_medium_at >= fire_min_at");
}

#[test]
fn missing_config_file_fails() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    temp.rb()
        .args(&["replay", "battle.jsonl", "--config", "absent.toml"])
        .fails()
        .stderr_has("Check the path passed to --config");
}
