use super::*;
use serde_json::json;

fn overview_body() -> String {
    json!({
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
    .to_string()
}

// =============================================================
// URLs and headers
// =============================================================

#[test]
fn endpoint_url_joins_without_double_slash() {
    assert_eq!(
        endpoint_url("http://localhost:1200/", STATS_PATH),
        "http://localhost:1200/api/vote/stats"
    );
    assert_eq!(
        endpoint_url("http://localhost:1200", CANDIDATES_PATH),
        "http://localhost:1200/api/vote/candidates"
    );
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn endpoint_display_names_method_and_path() {
    assert_eq!(Endpoint::Candidates.to_string(), "GET /api/vote/candidates [candidates]");
    assert_eq!(Endpoint::VotingStats.path(), STATS_PATH);
}

// =============================================================
// Overview contract
// =============================================================

#[test]
fn overview_success_returns_payload() {
    let overview = parse_overview(200, &overview_body()).unwrap();
    assert_eq!(overview.overall.total_users, 100);
    let president = &overview.role_stats["president"];
    assert_eq!(president.candidate_stats.len(), 2);
    assert_eq!(president.candidate_stats[0].count, 30);
}

#[test]
fn overview_keeps_role_order_of_raw_body() {
    let body = r#"{"success":true,"overall":{"totalUsers":3,"votedUsers":1,"votingPercentage":33.3},
        "roleStats":{"treasury":{},"president":{},"secretary":{}}}"#;
    let overview = parse_overview(200, body).unwrap();
    let keys: Vec<&str> = overview.role_stats.keys().map(String::as_str).collect();
    assert_eq!(keys, ["treasury", "president", "secretary"]);
}

#[test]
fn overview_success_false_is_rejection_with_message() {
    let body = json!({"success": false, "message": "Voting closed"}).to_string();
    let err = parse_overview(200, &body).unwrap_err();
    assert_eq!(
        err,
        FetchError::Rejected {
            endpoint: Endpoint::Overview,
            status: 200,
            message: Some("Voting closed".to_owned()),
        }
    );
    assert_eq!(err.user_message(), "Voting closed");
}

#[test]
fn overview_missing_success_flag_is_rejection() {
    let body = json!({"overall": {}, "roleStats": {}}).to_string();
    let err = parse_overview(200, &body).unwrap_err();
    assert_eq!(err.user_message(), "Failed to fetch voting stats");
}

#[test]
fn overview_non_ok_status_reads_message() {
    let body = json!({"message": "Internal error"}).to_string();
    let err = parse_overview(500, &body).unwrap_err();
    assert_eq!(err.user_message(), "Internal error");
}

#[test]
fn overview_non_ok_status_tolerates_html_body() {
    let err = parse_overview(502, "<html>Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, FetchError::Rejected { status: 502, message: None, .. }));
    assert_eq!(err.user_message(), "Failed to fetch voting stats");
}

#[test]
fn overview_ok_status_with_garbage_is_decode_error() {
    let err = parse_overview(200, "not json").unwrap_err();
    assert!(matches!(err, FetchError::Decode { endpoint: Endpoint::Overview, .. }));
}

// =============================================================
// Candidates contract
// =============================================================

#[test]
fn candidates_success_returns_list_in_order() {
    let body = json!({
        "success": true,
        "candidates": [
            {"_id": "c1", "name": "Alice", "party": "Blue"},
            {"_id": "c2", "name": "Bob"}
        ]
    })
    .to_string();
    let candidates = parse_candidates(200, &body).unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].name, "Alice");
    assert_eq!(candidates[1].party, None);
}

#[test]
fn candidates_with_null_name_still_decode() {
    let body = r#"{"success":true,"candidates":[{"_id":"c1","name":null},{"_id":"c2","name":"Bob"}]}"#;
    let candidates = parse_candidates(200, body).unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].name.is_empty());
    assert_eq!(candidates[1].name, "Bob");
}

#[test]
fn candidates_success_false_uses_fallback() {
    let body = json!({"success": false}).to_string();
    let err = parse_candidates(200, &body).unwrap_err();
    assert_eq!(err.user_message(), "Failed to load candidates");
}

// =============================================================
// Authenticated stats contract
// =============================================================

#[test]
fn voting_stats_needs_no_success_flag() {
    let body = json!({
        "totalUsers": 10,
        "votedUsers": 5,
        "votingPercentage": 50,
        "candidateStats": [{"_id": "c1", "count": 5}]
    })
    .to_string();
    let stats = parse_voting_stats(200, &body).unwrap();
    assert_eq!(stats.voted_users, 5);
    assert_eq!(stats.candidate_stats[0].count, 5);
}

#[test]
fn voting_stats_null_bucket_id_keeps_other_rows() {
    let body = r#"{"totalUsers":10,"votedUsers":3,"votingPercentage":30,
        "candidateStats":[{"_id":null,"count":1},{"_id":"c1","count":2}]}"#;
    let stats = parse_voting_stats(200, body).unwrap();
    assert_eq!(stats.candidate_stats.len(), 2);
    assert!(stats.candidate_stats[0].id.is_empty());
    assert_eq!(stats.candidate_stats[1].count, 2);
}

#[test]
fn voting_stats_unauthorized_is_rejection() {
    let body = json!({"message": "Invalid token"}).to_string();
    let err = parse_voting_stats(401, &body).unwrap_err();
    assert_eq!(
        err,
        FetchError::Rejected {
            endpoint: Endpoint::VotingStats,
            status: 401,
            message: Some("Invalid token".to_owned()),
        }
    );
}
