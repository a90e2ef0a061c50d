//! Replay summary specs

use crate::prelude::*;

#[test]
fn replay_prints_statistics_table() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    temp.rb()
        .args(&["replay", "battle.jsonl", "--name", "Walker"])
        .passes()
        .stdout_has("Bot: Walker (2 rounds, 15 events, 3 shots)")
        .stdout_has("ENEMY")
        .stdout_has("Tracked: Walls");
}

#[test]
fn replay_table_rows() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    let run = temp.rb().args(&["replay", "battle.jsonl"]).passes();

    let rows: Vec<Vec<&str>> = run
        .stdout()
        .lines()
        .skip(2)
        .take(3)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(rows[0], vec!["Crazy", "2", "1", "1", "0", "50.0%"]);
    assert_eq!(rows[1], vec!["Walls", "1", "0", "0", "1", "0.0%"]);
    assert_eq!(rows[2], vec!["TOTAL", "3", "1", "1", "1", "33.3%"]);
}

#[test]
fn replay_as_json() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    let run = temp
        .rb()
        .args(&["replay", "battle.jsonl", "-o", "json"])
        .passes();

    let summary: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();
    assert_eq!(summary["bot"], "Robobus");
    assert_eq!(summary["rounds"], 2);
    assert_eq!(summary["enemies"][0]["name"], "Crazy");
    assert_eq!(summary["enemies"][0]["accuracy"], 0.5);
    assert_eq!(summary["total"]["fired"], 3);
    assert_eq!(summary["enemies"][1]["lost"], 1);
}

#[test]
fn replay_logs_registrations_to_file() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    temp.rb()
        .args(&["--log-file", "logs/rb.log", "replay", "battle.jsonl"])
        .passes()
        .stdout_has("Bot: Robobus");

    let log = std::fs::read_to_string(temp.path().join("logs/rb.log")).unwrap();
    assert!(log.contains("Registering EnemyTracker::register_enemy to ENEMY_SCANNED."));
    assert!(log.contains("Registering BotStatistics::on_bullet_fired to BULLET_FIRED."));
}

#[test]
fn replay_logs_to_stderr_by_default() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    temp.rb()
        .args(&["replay", "battle.jsonl"])
        .passes()
        .stderr_has("replay finished")
        .stdout_lacks("Registering");
}

#[test]
fn quiet_filter_silences_logs() {
    let temp = Project::empty();
    temp.file("battle.jsonl", BATTLE_TRACE);

    temp.rb()
        .env("RUST_LOG", "off")
        .args(&["replay", "battle.jsonl"])
        .passes()
        .stderr_lacks("Registering");
}
