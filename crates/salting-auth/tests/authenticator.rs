//! End-to-end tests for issuing and verifying password tokens.

use std::sync::Arc;

use salting_auth::{AuthError, Authenticator, SeededSaltSource, Token};

// ============================================================================
// Test helpers
// ============================================================================

fn is_token_with_cost(token: &str, cost: u32) -> bool {
    let prefix = format!("$0001${cost}$");
    match token.strip_prefix(&prefix) {
        Some(payload) => {
            payload.len() == 43
                && payload
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        }
        None => false,
    }
}

fn assert_malformed(auth: &Authenticator, token: &str) {
    match auth.authenticate(b"Tr0ub4dor&3", token) {
        Err(AuthError::MalformedToken(_)) => {}
        other => panic!("expected MalformedToken for {token:?}, got {other:?}"),
    }
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn troubadour_scenario() {
    let auth = Authenticator::new(4).unwrap();
    let token = auth.hash(b"Tr0ub4dor&3").unwrap();

    assert!(is_token_with_cost(&token, 4), "unexpected token shape: {token}");
    assert!(auth.authenticate(b"Tr0ub4dor&3", &token).unwrap());
    assert!(!auth.authenticate(b"tr0ub4dor&3", &token).unwrap());
}

#[test]
fn no_false_positives_across_sample() {
    let auth = Authenticator::new(0).unwrap();
    let passwords: Vec<String> = (0..64).map(|i| format!("password-{i}")).collect();
    let tokens: Vec<String> = passwords
        .iter()
        .map(|p| auth.hash(p.as_bytes()).unwrap())
        .collect();

    for (i, token) in tokens.iter().enumerate() {
        for (j, password) in passwords.iter().enumerate() {
            let matched = auth.authenticate(password.as_bytes(), token).unwrap();
            assert_eq!(matched, i == j, "password {j} against token {i}");
        }
    }
}

#[test]
fn round_trip_at_every_low_cost() {
    for cost in 0..=6 {
        let auth = Authenticator::new(cost).unwrap();
        let token = auth.hash(b"pa55word!").unwrap();
        assert!(is_token_with_cost(&token, cost as u32));
        assert!(auth.authenticate(b"pa55word!", &token).unwrap());
    }
}

#[test]
fn cost_embedding_survives_verifier_cost_change() {
    let issuer = Authenticator::new(5).unwrap();
    let token = issuer.hash(b"pw").unwrap();

    for verifier_cost in [0, 1, 16, 30] {
        let verifier = Authenticator::new(verifier_cost).unwrap();
        assert_eq!(Token::parse(&token).unwrap().cost().get(), 5);
        assert!(verifier.authenticate(b"pw", &token).unwrap());
        assert_eq!(verifier.needs_rehash(&token).unwrap(), verifier_cost != 5);
    }
}

#[test]
fn malformed_tokens_are_errors() {
    let auth = Authenticator::new(0).unwrap();
    let good = auth.hash(b"Tr0ub4dor&3").unwrap();
    let payload = good.rsplit('$').next().unwrap().to_string();

    assert_malformed(&auth, "not-a-token");
    assert_malformed(&auth, &format!("$0001${payload}"));
    assert_malformed(&auth, &format!("$0001$0$0${payload}"));
    assert_malformed(&auth, &format!("$0001$0${}", &payload[..42]));
    assert_malformed(&auth, &format!("$0001$0${payload}x"));
    assert_malformed(&auth, &format!("$0001$31${payload}"));
    assert_malformed(&auth, &format!("$0001$-1${payload}"));
}

#[test]
fn construction_bounds() {
    for cost in [-1, 31] {
        assert!(matches!(
            Authenticator::new(cost),
            Err(AuthError::InvalidParameter { .. })
        ));
    }
    assert!(Authenticator::new(0).is_ok());
    assert!(Authenticator::new(30).is_ok());
}

#[test]
fn seeded_tokens_are_reproducible_across_instances() {
    let issue = |seed| {
        let auth =
            Authenticator::with_salt_source(2, Arc::new(SeededSaltSource::new(seed))).unwrap();
        (0..3)
            .map(|_| auth.hash(b"pw").unwrap())
            .collect::<Vec<_>>()
    };
    let first = issue(9);
    assert_eq!(first, issue(9));
    assert_ne!(first, issue(10));
    assert_ne!(first[0], first[1]);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn shared_instance_across_threads() {
    let auth = Authenticator::new(1).unwrap();
    let tokens: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let auth = &auth;
                scope.spawn(move || {
                    let password = format!("thread-{i}");
                    let token = auth.hash(password.as_bytes()).unwrap();
                    assert!(auth.authenticate(password.as_bytes(), &token).unwrap());
                    token
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut salts: Vec<_> = tokens
        .iter()
        .map(|t| *Token::parse(t).unwrap().salt())
        .collect();
    salts.sort();
    salts.dedup();
    assert_eq!(salts.len(), tokens.len());
}

#[test]
fn seeded_source_never_repeats_under_contention() {
    let auth = Authenticator::with_salt_source(0, Arc::new(SeededSaltSource::new(1))).unwrap();
    let tokens: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (0..16).map(|_| auth.hash(b"pw").unwrap()).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let mut unique = tokens.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 64);
}

#[tokio::test(flavor = "multi_thread")]
async fn hashing_off_the_async_path() {
    let auth = Arc::new(Authenticator::new(4).unwrap());

    let issuer = Arc::clone(&auth);
    let token = tokio::task::spawn_blocking(move || issuer.hash(b"Tr0ub4dor&3"))
        .await
        .unwrap()
        .unwrap();

    let verifier = Arc::clone(&auth);
    let matched = tokio::task::spawn_blocking(move || verifier.authenticate(b"Tr0ub4dor&3", &token))
        .await
        .unwrap()
        .unwrap();
    assert!(matched);
}
