//! Unit tests for the session module
//!
//! Tests cover:
//! - Loading from a store
//! - Sign-in and sign-out
//! - Auth code generation

use super::super::session::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_empty_store_is_signed_out() {
    let store = MemoryStore::default();
    let session = Session::load(&store);

    assert!(!session.is_authenticated());
    assert_eq!(session.auth_code(), None);
}

#[test]
fn test_stored_code_is_signed_in() {
    let store = MemoryStore::with_code("48213");
    let session = Session::load(&store);

    assert!(session.is_authenticated());
    assert_eq!(session.auth_code(), Some("48213"));
}

#[test]
fn test_empty_code_counts_as_signed_out() {
    let store = MemoryStore::with_code("");
    assert!(!Session::load(&store).is_authenticated());
}

#[test]
fn test_sign_in_writes_store() {
    let store = MemoryStore::default();
    let session = Session::sign_in(&store, "12345".to_string()).unwrap();

    assert!(session.is_authenticated());
    assert_eq!(store.read().unwrap(), Some("12345".to_string()));
    assert_eq!(Session::load(&store), session);
}

#[test]
fn test_sign_out_clears_store() {
    let store = MemoryStore::with_code("12345");
    let session = Session::sign_out(&store).unwrap();

    assert_eq!(session, Session::default());
    assert!(!session.is_authenticated());
    assert_eq!(store.read().unwrap(), None);
}

#[test]
fn test_sign_out_when_already_signed_out() {
    let store = MemoryStore::default();
    assert!(Session::sign_out(&store).is_ok());
    assert!(!Session::load(&store).is_authenticated());
}

#[test]
fn test_auth_codes_are_five_digits() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let code = generate_auth_code(&mut rng);
        let value: u32 = code.parse().unwrap();
        assert_eq!(code.len(), 5);
        assert!((10_000..=99_999).contains(&value));
    }
}
