//! Credential directory integration tests.
//!
//! These run against the real Argon2id hasher with cheap cost parameters.

use std::sync::Arc;
use std::thread;

use credential_service_lib::service::{CredentialDirectory, CredentialService};
use domain::{CredentialHasher, DomainError, HashParams, LoginOutcome};

fn create_directory() -> CredentialDirectory {
    CredentialDirectory::with_params(HashParams::new(256, 1, 1)).unwrap()
}

#[test]
fn test_register() {
    let directory = create_directory();

    assert!(directory.register("user1@user.com", "12345"));
    assert!(!directory.register("user1@user.com", "dogandcat"));
    assert!(!directory.register("", "mytaylorisrich"));
    assert!(!directory.register("user4@user.com", ""));
    assert!(!directory.register("", ""));

    assert_eq!(directory.len(), 1);
}

#[test]
fn test_login() {
    let directory = create_directory();

    let users = [
        ("user6@user.com", "12345"),
        ("user7@user.com", "dogandcat"),
        ("user8@user.com", "mytaylorisrich"),
        ("user9@user.com", "01012000"),
        ("user10@user.com", "imbored"),
    ];
    for (email, password) in users {
        assert!(directory.register(email, password));
    }

    assert_eq!(directory.login("user6@user.com", "12345").code(), 1);
    assert_eq!(directory.login("user7@user.com", "catandmouse").code(), -2);
    assert_eq!(directory.login("user18@user.com", "mytaylorisrich").code(), -1);
    assert_eq!(directory.login("", "01012000").code(), -1);
    assert_eq!(directory.login("user10@user.com", "").code(), -2);
}

#[test]
fn test_every_registered_pair_logs_in() {
    let directory = create_directory();
    let users = [
        ("user6@user.com", "12345"),
        ("user9@user.com", "01012000"),
        ("  @ ", "   "),
    ];

    for (email, password) in users {
        assert!(directory.register(email, password));
    }
    for (email, password) in users {
        assert_eq!(directory.login(email, password), LoginOutcome::Ok);
    }
}

#[test]
fn test_failed_register_keeps_original_password() {
    let directory = create_directory();
    assert!(directory.register("user1@user.com", "12345"));

    for _ in 0..3 {
        assert!(!directory.register("user1@user.com", "dogandcat"));
    }

    assert_eq!(directory.login("user1@user.com", "12345"), LoginOutcome::Ok);
    assert_eq!(
        directory.login("user1@user.com", "dogandcat"),
        LoginOutcome::BadPassword
    );
}

#[test]
fn test_rejected_empty_input_leaves_no_record() {
    let directory = create_directory();

    assert!(!directory.register("user4@user.com", ""));
    assert!(!directory.register("", "mytaylorisrich"));

    assert!(directory.is_empty());
    assert_eq!(
        directory.login("user4@user.com", ""),
        LoginOutcome::UnknownEmail
    );
}

#[test]
fn test_try_register_distinguishes_failures() {
    let directory = create_directory();

    let record = directory.try_register("user1@user.com", "12345").unwrap();
    assert_eq!(record.email(), "user1@user.com");
    assert!(directory.hasher().verify(record.password_hash(), "12345"));

    assert!(matches!(
        directory.try_register("user1@user.com", "12345"),
        Err(DomainError::Conflict(_))
    ));
    assert!(matches!(
        directory.try_register("", "12345"),
        Err(DomainError::Validation(_))
    ));
}

#[test]
fn test_stored_hash_is_salted_argon2id() {
    let directory = create_directory();

    let first = directory.try_register("a@user.com", "same").unwrap();
    let second = directory.try_register("b@user.com", "same").unwrap();

    assert!(first.password_hash().as_str().starts_with("$argon2id$v=19$m=256,t=1,p=1$"));
    assert_ne!(first.password_hash(), second.password_hash());
}

#[test]
fn test_concurrent_register_same_email() {
    let directory = Arc::new(create_directory());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let directory = Arc::clone(&directory);
            thread::spawn(move || directory.register("race@user.com", &format!("password{}", i)))
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|registered| *registered)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_concurrent_register_distinct_emails() {
    let directory = Arc::new(create_directory());

    thread::scope(|scope| {
        for i in 0..8 {
            let directory = &directory;
            scope.spawn(move || {
                assert!(directory.register(&format!("user{}@user.com", i), "12345"));
            });
        }
    });

    assert_eq!(directory.len(), 8);
    assert_eq!(directory.login("user3@user.com", "12345"), LoginOutcome::Ok);
}

#[test]
fn test_directory_behind_trait_object() {
    let directory: Box<dyn CredentialService> = Box::new(create_directory());

    assert!(directory.register("user1@user.com", "12345"));
    assert!(directory.contains("user1@user.com"));
    assert_eq!(directory.login("user1@user.com", "12345"), LoginOutcome::Ok);
}
