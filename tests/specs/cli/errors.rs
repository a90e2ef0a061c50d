//! CLI error specs

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    Project::empty()
        .rb()
        .args(&["teleport"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn missing_trace_file_fails() {
    Project::empty()
        .rb()
        .args(&["replay", "nowhere.jsonl"])
        .fails()
        .stderr_has("Cannot read trace 'nowhere.jsonl'")
        .stderr_has("suggestions:");
}

#[test]
fn malformed_trace_reports_line_number() {
    let temp = Project::empty();
    temp.file(
        "battle.jsonl",
        "{\"type\":\"round_started\"}\n# comment\n{\"type\":\"next_turn\"\n",
    );

    temp.rb()
        .args(&["replay", "battle.jsonl"])
        .fails()
        .stderr_has("Malformed trace 'battle.jsonl' at line 3")
        .stderr_has("rb events");
}

#[test]
fn unknown_event_type_is_malformed() {
    let temp = Project::empty();
    temp.file("battle.jsonl", "{\"type\":\"teleport\"}\n");

    temp.rb()
        .args(&["replay", "battle.jsonl"])
        .fails()
        .stderr_has("at line 1");
}
