use super::*;
use crate::endpoint::parse_overview;
use crate::model::OverallStats;
use indexmap::IndexMap;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn candidate(id: &str, name: &str) -> Candidate {
    Candidate {
        id: id.to_owned(),
        name: name.to_owned(),
        party: None,
    }
}

fn stat(id: &str, count: u64) -> CandidateStat {
    CandidateStat {
        id: id.to_owned(),
        name: String::new(),
        count,
        percentage: 0.0,
    }
}

fn shared_stat(id: &str, name: &str, percentage: f64) -> CandidateStat {
    CandidateStat {
        id: id.to_owned(),
        name: name.to_owned(),
        count: 0,
        percentage,
    }
}

fn voting(voted: u64, candidate_stats: Vec<CandidateStat>) -> VotingStats {
    VotingStats {
        total_users: 100,
        voted_users: voted,
        voting_percentage: 0.0,
        candidate_stats,
    }
}

fn overview_with(roles: &[(&str, RoleStats)]) -> Overview {
    let mut role_stats = IndexMap::new();
    for (key, role) in roles {
        role_stats.insert((*key).to_owned(), role.clone());
    }
    Overview {
        overall: OverallStats {
            total_users: 10,
            voted_users: 5,
            voting_percentage: 50.0,
        },
        role_stats,
    }
}

// =============================================================
// Candidate styling
// =============================================================

#[test]
fn missing_party_defaults_to_independent() {
    let styled = style_candidates(vec![
        candidate("c1", "Alice"),
        Candidate {
            party: Some("Green".to_owned()),
            ..candidate("c2", "Bob")
        },
        Candidate {
            party: Some(String::new()),
            ..candidate("c3", "Cara")
        },
    ]);
    assert_eq!(styled[0].party, DEFAULT_PARTY);
    assert_eq!(styled[1].party, "Green");
    assert_eq!(styled[2].party, DEFAULT_PARTY);
}

#[test]
fn candidate_avatars_cycle_by_position() {
    let styled = style_candidates((0..4).map(|i| candidate(&format!("c{i}"), "X")).collect());
    assert_eq!(styled[0].emoji, styled[3].emoji);
    assert_eq!(styled[0].swatch, styled[3].swatch);
    assert_ne!(styled[0].swatch, styled[1].swatch);
}

// =============================================================
// Join
// =============================================================

#[test]
fn join_matches_by_id() {
    let candidates = style_candidates(vec![candidate("c1", "Alice")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("c1", 7)]));
    assert_eq!(rows[0].count, 7);
    assert!((rows[0].percentage - 70.0).abs() < f64::EPSILON);
}

#[test]
fn join_falls_back_to_name() {
    let candidates = style_candidates(vec![candidate("zz-9", "Alice")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("Alice", 7)]));
    assert_eq!(rows[0].count, 7);
}

#[test]
fn id_match_wins_over_earlier_name_match() {
    let candidates = style_candidates(vec![candidate("c1", "Alice")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("Alice", 2), stat("c1", 5)]));
    assert_eq!(rows[0].count, 5);
}

#[test]
fn unmatched_candidate_renders_with_zero() {
    let candidates = style_candidates(vec![candidate("c1", "Alice"), candidate("c2", "Bob")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("c1", 4)]));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].candidate.name, "Bob");
    assert_eq!(rows[1].count, 0);
    assert!(rows[1].percentage.abs() < f64::EPSILON);
}

#[test]
fn null_keyed_bucket_never_matches_blank_candidate() {
    let candidates = style_candidates(vec![candidate("", "")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("", 3)]));
    assert_eq!(rows[0].count, 0);
}

#[test]
fn one_row_per_candidate_not_per_stat() {
    let candidates = style_candidates(vec![candidate("c1", "Alice")]);
    let rows = join_candidates(&candidates, &voting(10, vec![stat("c1", 4), stat("c9", 6)]));
    assert_eq!(rows.len(), 1);
}

#[test]
fn zero_voters_gives_zero_percent_never_nan() {
    let candidates = style_candidates(vec![candidate("c1", "Alice"), candidate("c2", "Bob")]);
    let rows = join_candidates(&candidates, &voting(0, vec![stat("c1", 3)]));
    for row in rows {
        assert!(!row.percentage.is_nan());
        assert!(row.percentage.abs() < f64::EPSILON);
    }
}

#[test]
fn share_rounds_to_one_decimal() {
    assert!((share_of_votes(1, 3) - 33.3).abs() < 1e-9);
    assert!((share_of_votes(2, 3) - 66.7).abs() < 1e-9);
    assert!((share_of_votes(3, 3) - 100.0).abs() < 1e-9);
}

// =============================================================
// Chart + bars
// =============================================================

#[test]
fn bar_heights_are_relative_to_max_share() {
    let heights = bar_heights(&[shared_stat("a", "A", 75.0), shared_stat("b", "B", 25.0)]);
    assert!((heights[0] - CHART_BAR_MAX_PX).abs() < 1e-9);
    assert!((heights[1] - CHART_BAR_MAX_PX / 3.0).abs() < 1e-9);
}

#[test]
fn all_zero_shares_render_at_minimum_height() {
    let heights = bar_heights(&[shared_stat("a", "A", 0.0), shared_stat("b", "B", 0.0)]);
    assert_eq!(heights, vec![CHART_BAR_MIN_PX, CHART_BAR_MIN_PX]);
}

#[test]
fn tiny_share_is_lifted_to_minimum_height() {
    let heights = bar_heights(&[shared_stat("a", "A", 99.0), shared_stat("b", "B", 1.0)]);
    assert!((heights[1] - CHART_BAR_MIN_PX).abs() < 1e-9);
}

#[test]
fn bar_width_clamps_out_of_range_values() {
    assert!((bar_width(140.0) - 100.0).abs() < f64::EPSILON);
    assert!(bar_width(-3.0).abs() < f64::EPSILON);
    assert!(bar_width(f64::NAN).abs() < f64::EPSILON);
}

// =============================================================
// Role views, filter, summary
// =============================================================

#[test]
fn role_view_keeps_stat_order_and_hides_chart_without_votes() {
    let role = RoleStats {
        role: "secretary".to_owned(),
        total_users: 10,
        voted_users: 0,
        voting_percentage: 0.0,
        candidate_stats: vec![shared_stat("x", "Xavier Long", 0.0), shared_stat("y", "Yu", 0.0)],
    };
    let view = role_view("secretary", &role);
    assert_eq!(view.title, "Secretary");
    assert!(!view.show_chart);
    assert_eq!(view.rows[0].chart_label, "Xavier");
    assert_eq!(view.rows[1].stat.id, "y");
    assert!(view.rows.iter().all(|row| (row.chart_height - CHART_BAR_MIN_PX).abs() < 1e-9));
}

#[test]
fn role_view_palette_cycles_past_five_candidates() {
    let role = RoleStats {
        candidate_stats: (0..7).map(|i| shared_stat(&format!("c{i}"), "N", 1.0)).collect(),
        ..RoleStats::default()
    };
    let view = role_view("treasury", &role);
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.rows[5].swatch, view.rows[0].swatch);
    assert_eq!(view.rows[6].emoji, view.rows[1].emoji);
}

#[test]
fn filter_parse_recognizes_all() {
    assert_eq!(RoleFilter::parse("all"), RoleFilter::All);
    assert_eq!(RoleFilter::parse(" ALL "), RoleFilter::All);
    assert_eq!(RoleFilter::parse(""), RoleFilter::All);
    assert_eq!(RoleFilter::parse("president"), RoleFilter::Role("president".to_owned()));
    assert_eq!(RoleFilter::Role("treasury".to_owned()).key(), "treasury");
}

#[test]
fn select_roles_filters_without_touching_data() {
    let overview = overview_with(&[
        ("president", RoleStats::default()),
        ("treasury", RoleStats::default()),
    ]);
    assert_eq!(select_roles(&overview, &RoleFilter::All).len(), 2);

    let only = select_roles(&overview, &RoleFilter::Role("treasury".to_owned()));
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].key, "treasury");

    assert!(select_roles(&overview, &RoleFilter::Role("secretary".to_owned())).is_empty());
    assert_eq!(overview.role_stats.len(), 2);
}

#[test]
fn role_tabs_list_registry_then_extra_roles() {
    let overview = overview_with(&[("auditor", RoleStats::default()), ("president", RoleStats::default())]);
    let tabs = role_tabs(&overview);
    let keys: Vec<&str> = tabs.iter().map(|tab| tab.filter.key()).collect();
    assert_eq!(keys, vec!["all", "president", "vicePresident", "secretary", "treasury", "auditor"]);
    assert_eq!(tabs[5].icon, palette::FALLBACK_ROLE_ICON);
}

#[test]
fn summary_has_one_tile_per_role() {
    let overview = overview_with(&[
        (
            "president",
            RoleStats {
                voting_percentage: 60.0,
                ..RoleStats::default()
            },
        ),
        (
            "auditor",
            RoleStats {
                voting_percentage: 20.0,
                ..RoleStats::default()
            },
        ),
    ]);
    let summary = summary(&overview);
    assert_eq!(summary.participants, 5);
    assert_eq!(summary.eligible, 10);
    assert!((summary.progress_width - 50.0).abs() < f64::EPSILON);
    assert_eq!(summary.tiles.len(), 2);
    assert_eq!(summary.tiles[0].title, "President");
    assert_eq!(summary.tiles[1].title, "auditor");
    assert!((summary.tiles[1].participation - 20.0).abs() < f64::EPSILON);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_percentage_trims_trailing_zeros() {
    assert_eq!(format_percentage(40.0), "40");
    assert_eq!(format_percentage(12.5), "12.5");
    assert_eq!(format_percentage(33.333), "33.333");
    assert_eq!(format_percentage(66.7), "66.7");
    assert_eq!(format_percentage(100.0), "100");
    assert_eq!(format_percentage(0.0), "0");
    assert_eq!(format_percentage(-0.0), "0");
    assert_eq!(format_percentage(f64::NAN), "0");
}

#[test]
fn first_name_takes_first_word() {
    assert_eq!(first_name("Ada Lovelace"), "Ada");
    assert_eq!(first_name("Plato"), "Plato");
    assert_eq!(first_name(""), "");
}

// =============================================================
// End-to-end: wire payload to rendered values
// =============================================================

#[test]
fn overview_payload_renders_counters_and_ordered_rows() {
    let body = json!({
        "success": true,
        "overall": {"totalUsers": 100, "votedUsers": 40, "votingPercentage": 40},
        "roleStats": {
            "president": {
                "role": "president",
                "totalUsers": 100,
                "votedUsers": 40,
                "votingPercentage": 40,
                "candidateStats": [
                    {"_id": "a", "name": "A", "count": 30, "percentage": 75},
                    {"_id": "b", "name": "B", "count": 10, "percentage": 25}
                ]
            }
        }
    })
    .to_string();
    let overview = parse_overview(200, &body).unwrap();

    assert_eq!(overview.overall.total_users.to_string(), "100");
    assert_eq!(overview.overall.voted_users.to_string(), "40");
    assert_eq!(format!("{}%", format_percentage(overview.overall.voting_percentage)), "40%");

    let cards = select_roles(&overview, &RoleFilter::All);
    assert_eq!(cards.len(), 1);
    let shown: Vec<String> = cards[0]
        .rows
        .iter()
        .map(|row| format!("{} {}%", row.stat.name, format_percentage(row.stat.percentage)))
        .collect();
    assert_eq!(shown, vec!["A 75%", "B 25%"]);
    assert!(cards[0].show_chart);
}

#[test]
fn overview_never_recomputes_server_percentages() {
    let role = RoleStats {
        voted_users: 10,
        candidate_stats: vec![
            CandidateStat {
                count: 9,
                percentage: 10.0,
                ..shared_stat("a", "A", 0.0)
            },
            CandidateStat {
                count: 1,
                percentage: 10.0,
                ..shared_stat("b", "B", 0.0)
            },
        ],
        ..RoleStats::default()
    };
    let view = role_view("president", &role);
    let total: f64 = view.rows.iter().map(|row| row.stat.percentage).sum();
    assert!((total - 20.0).abs() < f64::EPSILON);
}
