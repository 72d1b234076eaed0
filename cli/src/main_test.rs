use std::io::Cursor;

use super::*;

fn snapshots(input: &str) -> Vec<Snapshot> {
    parse_snapshots(Cursor::new(input), "test").unwrap()
}

#[test]
fn parse_snapshots_skips_blank_and_comment_lines() {
    let parsed = snapshots(
        "# boot\n{\"loading\":true}\n\n{\"user\":{\"id\":\"u1\"},\"profile\":null}\n",
    );
    assert_eq!(parsed.len(), 2);
    assert!(parsed[0].loading);
    assert!(parsed[1].user.is_some());
    assert!(parsed[1].profile.is_none());
}

#[test]
fn parse_snapshots_reports_line_number() {
    let err = parse_snapshots(Cursor::new("{\"loading\":true}\nnot json\n"), "test").unwrap_err();
    assert!(matches!(err, CliError::Snapshot { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn decision_table_covers_every_combination() {
    let rows = decision_table(&RouteGuard::default(), "/game");
    assert_eq!(rows.len(), 16);

    let loading = rows.iter().filter(|r| matches!(r.decision, RenderDecision::ShowLoading { .. })).count();
    let login = rows.iter().filter(|r| matches!(r.decision, RenderDecision::RedirectToLogin(_))).count();
    let home = rows.iter().filter(|r| matches!(r.decision, RenderDecision::RedirectToHome(_))).count();
    let render = rows.iter().filter(|r| r.decision == RenderDecision::RenderChildren).count();
    assert_eq!((loading, login, home, render), (8, 3, 1, 4));
}

#[test]
fn decision_table_rows_match_guard() {
    let guard = RouteGuard::default();
    for row in decision_table(&guard, "/game") {
        if row.loading {
            continue;
        }
        let authenticated = row.user && row.profile;
        match (row.require_auth, authenticated) {
            (true, false) => assert!(matches!(row.decision, RenderDecision::RedirectToLogin(_)), "{row:?}"),
            (false, true) => assert!(matches!(row.decision, RenderDecision::RedirectToHome(_)), "{row:?}"),
            _ => assert_eq!(row.decision, RenderDecision::RenderChildren, "{row:?}"),
        }
    }
}

#[test]
fn replay_protected_route_through_sign_in() {
    let steps = replay(
        RouteGuard::default(),
        GuardConfig::protected(),
        "/game",
        snapshots(
            "{\"loading\":true}\n\
             {\"loading\":false}\n\
             {\"user\":{\"id\":\"u1\"}}\n\
             {\"user\":{\"id\":\"u1\"},\"profile\":{\"id\":\"u1\"}}\n",
        ),
    );

    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0].decision.label(), "loading");
    assert!(steps[0].navigations.is_empty());
    assert_eq!(steps[1].decision.label(), "loading");

    assert_eq!(steps[2].decision.label(), "redirect-login");
    assert_eq!(steps[2].navigations.len(), 1);
    assert_eq!(steps[2].navigations[0].href(), "/auth?from=%2Fgame");

    // Session without profile keeps the same redirect, so no second navigation.
    assert_eq!(steps[3].decision.label(), "redirect-login");
    assert!(steps[3].navigations.is_empty());

    assert_eq!(steps[4].decision, RenderDecision::RenderChildren);
    assert!(steps[4].navigations.is_empty());
}

#[test]
fn replay_anonymous_only_route_sends_signed_in_player_home() {
    let steps = replay(
        RouteGuard::default(),
        GuardConfig::anonymous_only(),
        "/auth",
        snapshots("{\"loading\":false}\n{\"user\":{\"id\":\"u1\"},\"profile\":{\"id\":\"u1\"}}\n"),
    );
    assert_eq!(steps[1].decision, RenderDecision::RenderChildren);
    assert_eq!(steps[2].decision.label(), "redirect-home");
    assert_eq!(steps[2].navigations[0].href(), "/game");
}

#[test]
fn describe_formats_each_decision() {
    let guard = RouteGuard::default();
    assert_eq!(describe(&guard.evaluate(&Snapshot::loading(), GuardConfig::protected(), "/game")), "loading (Loading...)");
    assert_eq!(
        describe(&guard.evaluate(&Snapshot::anonymous(), GuardConfig::protected(), "/game")),
        "redirect-login -> /auth?from=%2Fgame"
    );
    assert_eq!(describe(&RenderDecision::RenderChildren), "render");
}

#[test]
fn route_targets_prefer_flags() {
    let cli = Cli::parse_from(["gate-cli", "--home", "/lobby", "table"]);
    let targets = route_targets(&cli).unwrap();
    assert_eq!(targets.home, "/lobby");
}

#[test]
fn route_targets_reject_relative_flag() {
    let cli = Cli::parse_from(["gate-cli", "--login", "auth", "table"]);
    assert!(matches!(route_targets(&cli), Err(CliError::Config(_))));
}
