//! CLI help and vocabulary specs

use crate::prelude::*;

#[test]
fn rb_binary_is_built_next_to_the_specs() {
    let specs = std::env::current_exe().unwrap();
    let profile_dir = specs.parent().and_then(|deps| deps.parent()).unwrap();

    assert!(rb_binary().exists());
    assert_eq!(rb_binary().parent(), Some(profile_dir));
}

#[test]
fn help_lists_commands() {
    Project::empty()
        .rb()
        .args(&["--help"])
        .passes()
        .stdout_has("replay")
        .stdout_has("events");
}

#[test]
fn events_lists_vocabulary_in_lifecycle_order() {
    let run = Project::empty().rb().args(&["events"]).passes();

    let names: Vec<&str> = run.stdout().lines().collect();
    assert_eq!(names.len(), 17);
    assert_eq!(names.first(), Some(&"ROUND_STARTED"));
    assert_eq!(names.last(), Some(&"BATTLE_ENDED"));
    assert!(names.contains(&"ENEMY_SCANNED"));
}

#[test]
fn events_text_is_one_name_per_line() {
    Project::empty()
        .rb()
        .args(&["events"])
        .passes()
        .stdout_eq(concat!(
            "ROUND_STARTED\n",
            "NEXT_TURN\n",
            "ENEMY_SCANNED\n",
            "BULLET_FIRED\n",
            "BULLET_HIT\n",
            "BULLET_HIT_BULLET\n",
            "BULLET_MISSED\n",
            "HIT_BY_BULLET\n",
            "ROBOT_DEATH\n",
            "HIT_ROBOT\n",
            "HIT_WALL\n",
            "PAINT\n",
            "DRAW\n",
            "DEATH\n",
            "WIN\n",
            "ROUND_ENDED\n",
            "BATTLE_ENDED\n",
        ));
}

#[test]
fn events_as_json() {
    let run = Project::empty()
        .rb()
        .args(&["events", "--output", "json"])
        .passes();

    let names: Vec<String> = serde_json::from_str(run.stdout()).unwrap();
    assert_eq!(names[2], "ENEMY_SCANNED");
}
