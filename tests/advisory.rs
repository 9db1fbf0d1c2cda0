//! Advisory client integration tests.

use core::sync::atomic::{AtomicUsize, Ordering};
use core::time::Duration;
use std::sync::{Arc, Mutex};
use std::thread;

use bjcore::advisory::{
    AdvisoryClient, AdvisoryError, AdvisoryRequest, AdvisoryTransport, FALLBACK, TransportError,
    parse_response,
};
use bjcore::{AdvisoryOptions, Card, Game, Rank, Recommendation, ScriptedSource, Suit, TableOptions};

fn answering(body: &'static str) -> impl AdvisoryTransport {
    move |_: &AdvisoryRequest| -> Result<String, TransportError> { Ok(body.to_string()) }
}

fn failing() -> impl AdvisoryTransport {
    |_: &AdvisoryRequest| -> Result<String, TransportError> {
        Err(TransportError::Failed("connection refused".to_string()))
    }
}

#[test]
fn parses_known_recommendations() {
    assert_eq!(
        parse_response(r#"{"recommendation":"Hit"}"#).unwrap(),
        Recommendation::Hit
    );
    assert_eq!(
        parse_response(r#"{"recommendation":"Stand"}"#).unwrap(),
        Recommendation::Stand
    );
    assert_eq!(
        parse_response(r#"{"recommendation":" Hit\n"}"#).unwrap(),
        Recommendation::Hit
    );
}

#[test]
fn rejects_nonconforming_bodies() {
    assert!(matches!(
        parse_response(r#"{"recommendation":null}"#),
        Err(AdvisoryError::MissingRecommendation)
    ));
    assert!(matches!(
        parse_response("{}"),
        Err(AdvisoryError::MissingRecommendation)
    ));
    assert!(matches!(
        parse_response(r#"{"recommendation":"Double"}"#),
        Err(AdvisoryError::Unrecognized(text)) if text == "Double"
    ));
    assert!(matches!(
        parse_response("<html>502</html>"),
        Err(AdvisoryError::Parse(_))
    ));
}

#[test]
fn returns_service_answer() {
    let client = AdvisoryClient::new(answering(r#"{"recommendation":"Hit"}"#));
    assert_eq!(client.recommend(12, 10), Recommendation::Hit);
}

#[test]
fn falls_back_to_stand_on_failure() {
    let client = AdvisoryClient::new(failing());
    assert_eq!(client.recommend(12, 10), Recommendation::Stand);
    assert!(matches!(
        client.try_recommend(&AdvisoryRequest::new(12, 10)),
        Err(AdvisoryError::Transport(TransportError::Failed(_)))
    ));

    let client = AdvisoryClient::new(answering(r#"{"recommendation":null}"#));
    assert_eq!(client.recommend(20, 6), Recommendation::Stand);

    let client = AdvisoryClient::new(answering("not json"));
    assert_eq!(client.recommend(20, 6), Recommendation::Stand);
}

#[test]
fn fallback_is_always_stand() {
    assert_eq!(FALLBACK, Recommendation::Stand);
    let client = AdvisoryClient::with_options(failing(), AdvisoryOptions::default());
    assert_eq!(client.recommend(8, 9), Recommendation::Stand);
}

#[test]
fn slow_service_times_out() {
    let slow = |_: &AdvisoryRequest| -> Result<String, TransportError> {
        thread::sleep(Duration::from_millis(500));
        Ok(r#"{"recommendation":"Hit"}"#.to_string())
    };
    let options = AdvisoryOptions::default().with_timeout(Duration::from_millis(20));
    let client = AdvisoryClient::with_options(slow, options);

    assert!(matches!(
        client.try_recommend(&AdvisoryRequest::new(16, 10)),
        Err(AdvisoryError::Transport(TransportError::Timeout))
    ));
    assert_eq!(client.recommend(16, 10), Recommendation::Stand);
}

#[test]
fn hung_requests_are_capped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let hanging = {
        let calls = Arc::clone(&calls);
        move |_: &AdvisoryRequest| -> Result<String, TransportError> {
            calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(300));
            Ok(r#"{"recommendation":"Hit"}"#.to_string())
        }
    };
    let options = AdvisoryOptions::default()
        .with_timeout(Duration::from_millis(10))
        .with_max_pending(2);
    let client = AdvisoryClient::with_options(hanging, options);
    let request = AdvisoryRequest::new(16, 10);

    for _ in 0..2 {
        assert!(matches!(
            client.try_recommend(&request),
            Err(AdvisoryError::Transport(TransportError::Timeout))
        ));
    }
    assert!(matches!(
        client.try_recommend(&request),
        Err(AdvisoryError::Transport(TransportError::Busy))
    ));
    assert_eq!(client.recommend_for(&request), Recommendation::Stand);
    assert_eq!(client.pending(), 2);

    thread::sleep(Duration::from_millis(700));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(client.pending(), 0);
    assert!(matches!(
        client.try_recommend(&request),
        Err(AdvisoryError::Transport(TransportError::Timeout))
    ));
}

#[test]
fn panicking_transport_releases_its_slot() {
    let broken = |_: &AdvisoryRequest| -> Result<String, TransportError> {
        panic!("transport bug");
    };
    let client = AdvisoryClient::with_options(broken, AdvisoryOptions::default().with_max_pending(1));

    for _ in 0..3 {
        assert!(matches!(
            client.try_recommend(&AdvisoryRequest::new(16, 10)),
            Err(AdvisoryError::Transport(TransportError::Disconnected))
        ));
    }
}

#[test]
fn panicking_transport_is_contained() {
    let broken = |_: &AdvisoryRequest| -> Result<String, TransportError> {
        panic!("transport bug");
    };
    let client = AdvisoryClient::new(broken);

    assert!(matches!(
        client.try_recommend(&AdvisoryRequest::new(16, 10)),
        Err(AdvisoryError::Transport(TransportError::Disconnected))
    ));
    assert_eq!(client.recommend(16, 10), Recommendation::Stand);
}

#[test]
fn game_request_carries_total_and_up_card_only() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = {
        let seen = Arc::clone(&seen);
        move |request: &AdvisoryRequest| -> Result<String, TransportError> {
            seen.lock().unwrap().push(request.query_string());
            Ok(r#"{"recommendation":"Stand"}"#.to_string())
        }
    };
    let client = AdvisoryClient::new(recorder);

    let draws = [Rank::Nine, Rank::Seven, Rank::Six, Rank::Queen]
        .map(|rank| Card::new(rank, Suit::Hearts));
    let game = Game::with_source(TableOptions::default(), ScriptedSource::new(draws));
    game.place_bet(10).unwrap();

    let before = game.snapshot();
    let request = game.advisory_request().unwrap();
    assert_eq!(client.recommend_for(&request), Recommendation::Stand);
    assert_eq!(client.recommend_for(&request), Recommendation::Stand);

    assert_eq!(game.snapshot(), before);
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["playerTotal=16&dealerCard=6"; 2]
    );
}
