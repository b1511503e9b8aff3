//! Integration tests for CSV game import.

use chrono::NaiveDate;
use league_standings::{import_games_str, GroupConfig, ImportError, TeamEntry};

fn pool() -> GroupConfig {
    let teams = ["Hawks", "Owls", "Jays"].iter().map(|n| TeamEntry::new(*n)).collect();
    GroupConfig::pool(teams, 2, 1)
}

#[test]
fn imports_played_and_scheduled_games() {
    let config = pool();
    let csv = "\
home,away,home_score,away_score,date
Hawks,Owls,3,1,2025-01-11
owls , JAYS ,,,2025-01-18
Jays,Hawks,2,,
";
    let games = import_games_str(&config, csv).unwrap();
    assert_eq!(games.len(), 3);

    let hawks = config.team_by_name("Hawks").unwrap().id;
    let owls = config.team_by_name("Owls").unwrap().id;
    assert_eq!(games[0].home_team, hawks);
    assert_eq!(games[0].away_team, owls);
    assert_eq!(games[0].final_score(), Some((3, 1)));
    assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2025, 1, 11));

    assert!(!games[1].played);
    assert_eq!(games[1].final_score(), None);

    // One score only: kept, but not counted.
    assert_eq!(games[2].home_score, Some(2));
    assert!(!games[2].played);
}

#[test]
fn columns_may_come_in_any_order() {
    let config = pool();
    let csv = "away_score,home_score,away,home\n0,2,Jays,Owls\n";
    let games = import_games_str(&config, csv).unwrap();
    assert_eq!(games[0].home_team, config.team_by_name("Owls").unwrap().id);
    assert_eq!(games[0].final_score(), Some((2, 0)));
}

#[test]
fn rows_with_unknown_teams_are_skipped() {
    let config = pool();
    let csv = "home,away,home_score,away_score\nHawks,Eagles,5,0\nHawks,Jays,1,0\n";
    let games = import_games_str(&config, csv).unwrap();
    assert_eq!(games.len(), 1);
}

#[test]
fn bad_scores_and_dates_report_the_line() {
    let config = pool();
    let err = import_games_str(&config, "home,away,home_score,away_score\nHawks,Owls,three,1\n")
        .unwrap_err();
    assert_eq!(
        err,
        ImportError::InvalidScore {
            line: 2,
            value: "three".to_string()
        }
    );

    let err = import_games_str(
        &config,
        "home,away,home_score,away_score,date\nHawks,Owls,1,1,11/01/2025\n",
    )
    .unwrap_err();
    assert!(matches!(err, ImportError::InvalidDate { line: 2, .. }));
}

#[test]
fn missing_column_is_an_error() {
    let config = pool();
    let err = import_games_str(&config, "home,away,home_score\nHawks,Owls,1\n").unwrap_err();
    assert_eq!(err, ImportError::MissingColumn("away_score"));
    assert_eq!(err.to_string(), "Missing column 'away_score'");
}
