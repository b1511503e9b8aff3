//! Integration tests for tie explanations.

use league_standings::{
    compute_group, compute_standings, resolve_ties, GameResult, GroupConfig, HeadToHeadScope,
    TeamEntry, TeamId, Tiebreaker,
};

fn pool(names: &[&str], qualifying_spots: usize) -> GroupConfig {
    let teams = names.iter().map(|n| TeamEntry::new(*n)).collect();
    GroupConfig::pool(teams, qualifying_spots, 1)
}

fn id(config: &GroupConfig, name: &str) -> TeamId {
    config.team_by_name(name).unwrap().id
}

fn results(config: &GroupConfig, scores: &[(&str, &str, u32, u32)]) -> Vec<GameResult> {
    scores
        .iter()
        .map(|&(h, a, hs, as_)| GameResult::played(id(config, h), id(config, a), hs, as_))
        .collect()
}

#[test]
fn reports_deciding_tiebreaker_and_earlier_tied_values() {
    let config = pool(&["A", "B", "C", "D"], 2);
    // A and B: one win each, drew each other, B has the better differential.
    let games = results(
        &config,
        &[("A", "B", 1, 1), ("A", "C", 1, 0), ("B", "D", 4, 0), ("C", "D", 0, 0)],
    );
    let rows = compute_standings(&config, &games);
    let report = resolve_ties(&rows, &games, &config.tiebreaker_order);

    let ab = report
        .iter()
        .find(|r| r.teams_involved == (id(&config, "B"), id(&config, "A")))
        .unwrap();
    assert_eq!(ab.resolved_by, Tiebreaker::GoalDifferential);
    assert_eq!(ab.detail, "B ahead of A on goal differential: +4 vs +1");
    assert_eq!(ab.tied_values.len(), 2);
    assert_eq!(ab.tied_values["Wins"], 1);
    assert_eq!(ab.tied_values["Head-to-Head"], 1);
}

#[test]
fn pairs_on_different_points_or_without_games_are_skipped() {
    let config = pool(&["A", "B", "C", "D"], 2);
    let games = results(&config, &[("A", "B", 1, 0)]);
    let rows = compute_standings(&config, &games);
    let report = resolve_ties(&rows, &games, &config.tiebreaker_order);

    // C and D have not played; D vs B is decided on goal differential.
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].teams_involved, (id(&config, "D"), id(&config, "B")));
    assert_eq!(report[0].resolved_by, Tiebreaker::GoalDifferential);
}

#[test]
fn unbreakable_ties_have_no_explanation() {
    let config = pool(&["A", "B"], 1);
    let games = results(&config, &[("A", "B", 2, 2)]);
    let standings = compute_group(&config, &games);

    assert!(standings.resolutions.is_empty());
    assert!(standings.standings.iter().all(|r| r.standings.tied_unresolved));
}

#[test]
fn explanation_uses_direct_games_only() {
    // A, C and D each beat one of the others: the three-way mini-table is level and
    // standings fall through to goal differential (A, C, D). The direct game between
    // A and C went to C, which is what the explanation reports.
    let mut config = pool(&["A", "B", "C", "D"], 2);
    config
        .set_tiebreaker_order(vec![
            Tiebreaker::HeadToHead,
            Tiebreaker::GoalDifferential,
            Tiebreaker::GoalsFor,
        ])
        .unwrap();
    let games = results(
        &config,
        &[
            ("A", "B", 1, 2),
            ("A", "C", 1, 2),
            ("A", "D", 2, 0),
            ("B", "C", 2, 1),
            ("B", "D", 3, 2),
            ("C", "D", 2, 3),
        ],
    );
    let rows = compute_standings(&config, &games);
    let order: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["B", "A", "C", "D"]);

    let report = resolve_ties(&rows, &games, &config.tiebreaker_order);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].teams_involved, (id(&config, "A"), id(&config, "C")));
    assert_eq!(report[0].resolved_by, Tiebreaker::HeadToHead);
    assert_eq!(report[0].detail, "C ahead of A on head-to-head: 2 pts vs 0 pts");
    assert!(report[0].tied_values.is_empty());
}

#[test]
fn head_to_head_before_wins_orders_by_wins_but_reports_direct_games() {
    let mut config = pool(&["A", "B", "C", "D", "E"], 2);
    config.head_to_head_scope = HeadToHeadScope::PointsAndWins;
    config
        .set_tiebreaker_order(vec![Tiebreaker::HeadToHead, Tiebreaker::GoalsFor])
        .unwrap();
    let games = results(
        &config,
        &[
            ("A", "B", 2, 2),
            ("A", "C", 1, 0),
            ("A", "D", 0, 1),
            ("A", "E", 0, 0),
            ("B", "C", 1, 0),
            ("C", "D", 0, 1),
            ("C", "E", 1, 1),
            ("D", "E", 1, 2),
        ],
    );
    let rows = compute_standings(&config, &games);
    // D (two wins) heads A and E (one win each) at the head-to-head step.
    assert_eq!(rows[0].name, "D");

    let report = resolve_ties(&rows, &games, &config.tiebreaker_order);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].teams_involved, (id(&config, "D"), id(&config, "A")));
    assert_eq!(report[0].resolved_by, Tiebreaker::HeadToHead);
    assert_eq!(report[0].detail, "D ahead of A on head-to-head: 2 pts vs 0 pts");
}
