//! Tests for CLI argument parsing.

use clap::Parser;
use orion_cli::{Cli, Command};

#[test]
fn cli_parse_start() {
    let cli = Cli::parse_from([
        "orion",
        "start",
        "--from",
        "Shibuya Station",
        "--duration",
        "90",
        "--scope",
        "2.5",
        "--budget",
        "1500",
    ]);
    match cli.command {
        Command::Start(start) => {
            assert_eq!(start.start_point, "Shibuya Station");
            assert_eq!(start.duration, 90);
            assert_eq!(start.scope, 2.5);
            assert_eq!(start.budget, Some(1500));
        }
        _ => panic!("expected Start command"),
    }
}

#[test]
fn cli_parse_start_without_budget() {
    let cli = Cli::parse_from([
        "orion", "start", "--from", "Ueno", "--duration", "60", "--scope", "1",
    ]);
    match cli.command {
        Command::Start(start) => assert!(start.budget.is_none()),
        _ => panic!("expected Start command"),
    }
}

#[test]
fn cli_rejects_duration_out_of_range() {
    let result = Cli::try_parse_from([
        "orion", "start", "--from", "Ueno", "--duration", "10", "--scope", "1",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_budget_out_of_range() {
    let result = Cli::try_parse_from([
        "orion", "start", "--from", "Ueno", "--duration", "60", "--scope", "1", "--budget",
        "20000",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_send() {
    let cli = Cli::parse_from(["orion", "send", "a cat on a red bicycle"]);
    match cli.command {
        Command::Send(send) => assert_eq!(send.trigger, "a cat on a red bicycle"),
        _ => panic!("expected Send command"),
    }
}

#[test]
fn cli_parse_reserved_command_as_trigger() {
    let cli = Cli::parse_from(["orion", "send", "/reroll"]);
    assert!(matches!(cli.command, Command::Send(ref send) if send.trigger == "/reroll"));
}

#[test]
fn cli_parse_chat_history_reset() {
    assert!(matches!(Cli::parse_from(["orion", "chat"]).command, Command::Chat(_)));
    assert!(matches!(Cli::parse_from(["orion", "history"]).command, Command::History));
    assert!(matches!(Cli::parse_from(["orion", "reset"]).command, Command::Reset));
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::parse_from([
        "orion",
        "--model",
        "gemini-1.5-flash",
        "--session",
        "/tmp/orion.json",
        "--no-stream",
        "-vv",
        "chat",
    ]);
    assert_eq!(cli.model.as_deref(), Some("gemini-1.5-flash"));
    assert_eq!(cli.session.as_deref(), Some(std::path::Path::new("/tmp/orion.json")));
    assert!(cli.no_stream);
    assert_eq!(cli.verbose, 2);
}
