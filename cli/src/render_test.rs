use serde_json::json;
use votestats::endpoint::parse_overview;
use votestats::loader::DualLoad;
use votestats::{Candidate, CandidateStat, VotingStats};

use super::*;

fn scenario() -> Overview {
    let body = json!({
        "success": true,
        "overall": { "totalUsers": 100, "votedUsers": 40, "votingPercentage": 40 },
        "roleStats": {
            "president": {
                "totalUsers": 100,
                "votedUsers": 40,
                "votingPercentage": 40,
                "candidateStats": [
                    { "_id": "a", "name": "A", "count": 30, "percentage": 75 },
                    { "_id": "b", "name": "B", "count": 10, "percentage": 25 }
                ]
            }
        }
    });
    parse_overview(200, &body.to_string()).unwrap()
}

#[test]
fn text_bar_fills_proportionally_and_clamps() {
    assert_eq!(text_bar(50.0, 4), "██░░");
    assert_eq!(text_bar(0.0, 3), "░░░");
    assert_eq!(text_bar(250.0, 3), "███");
    assert_eq!(text_bar(f64::NAN, 2), "░░");
}

#[test]
fn overview_shows_totals_and_rows_in_order() {
    let out = overview(&scenario(), &RoleFilter::All);
    assert!(out.contains("Registered Voters:   100"));
    assert!(out.contains("Active Participants: 40"));
    assert!(out.contains("Participation Rate:  40%"));
    let a = out.find("75% (30 votes)").unwrap();
    let b = out.find("25% (10 votes)").unwrap();
    assert!(a < b);
    assert!(out.contains("40 of 100 eligible voters have participated"));
}

#[test]
fn unknown_role_filter_renders_no_cards() {
    let out = overview(&scenario(), &RoleFilter::parse("treasury"));
    assert!(out.contains("No statistics for role \"treasury\""));
    assert!(!out.contains("(30 votes)"));
}

#[test]
fn results_lists_every_candidate() {
    let load = DualLoad {
        candidates: Ok(derive::style_candidates(vec![
            Candidate { id: "a".to_owned(), name: "Alice".to_owned(), party: None },
            Candidate { id: "z".to_owned(), name: "Zed".to_owned(), party: Some("Green".to_owned()) },
        ])),
        stats: Ok(VotingStats {
            total_users: 10,
            voted_users: 4,
            voting_percentage: 40.0,
            candidate_stats: vec![CandidateStat { id: "a".to_owned(), count: 4, ..CandidateStat::default() }],
        }),
    };
    let out = results(&load.into_result().unwrap());
    assert!(out.contains("Independent Party"));
    assert!(out.contains("100% (4 votes)"));
    assert!(out.contains("Zed"));
    assert!(out.contains("0% (0 votes)"));
}

#[test]
fn screen_renders_loading_error_and_refreshing() {
    let mut s = Screen::<u8>::new();
    assert_eq!(screen(&s, "📊 Loading...", |_| String::new()), "📊 Loading...\n");

    let ticket = s.begin_initial().unwrap();
    s.settle(ticket, Err("Network error fetching stats".to_owned()));
    assert_eq!(screen(&s, "", |_| String::new()), "❌ Network error fetching stats\n");

    let _refresh = s.begin_refresh().unwrap();
    assert!(screen(&s, "", |_| String::new()).ends_with("Refreshing...\n"));
}
