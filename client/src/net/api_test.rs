#![cfg(not(feature = "hydrate"))]

use super::*;
use futures::executor::block_on;

#[test]
fn api_base_defaults_to_local_backend() {
    if option_env!("VOTE_API_BASE").is_none() {
        assert_eq!(api_base(), "http://localhost:1200");
    }
}

#[test]
fn url_joins_base_and_endpoint_path() {
    let source = BrowserSource::new("https://votes.example.org/");
    assert_eq!(source.url(Endpoint::Overview), "https://votes.example.org/api/vote/stats");
    assert_eq!(source.url(Endpoint::Candidates), "https://votes.example.org/api/vote/candidates");
}

#[test]
fn server_side_calls_fail_as_network_errors() {
    let source = BrowserSource::default();
    let err = block_on(source.fetch_overview()).unwrap_err();
    assert_eq!(err, not_available(Endpoint::Overview));
    assert_eq!(err.user_message(), "Network error fetching stats");
}

#[test]
fn server_side_authenticated_call_names_its_endpoint() {
    let source = BrowserSource::default();
    let err = block_on(source.fetch_voting_stats("tok")).unwrap_err();
    assert_eq!(err.endpoint(), Endpoint::VotingStats);
    let err = block_on(source.fetch_candidates()).unwrap_err();
    assert_eq!(err.user_message(), "Network error fetching candidates");
}
