//! API Integration Tests
//!
//! These tests require a running MongoDB instance (MONGODB_URI, defaulting
//! to the local instance). They run against the `murmur_test` database and
//! are skipped silently when the store is unreachable.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// A well-formed id that does not exist in the store
fn absent_id() -> String {
    unique_suffix()[..24].to_string()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserBody::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.username, request.username);
    assert_eq!(created.email, request.email);
    assert!(created.thoughts.is_empty());

    let response = server.get(&format!("/api/users/{}", created.id)).await.unwrap();
    let fetched: UserJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.username, request.username);
    assert_eq!(fetched.email, request.email);
    assert_eq!(fetched.friend_count, 0);
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserBody::unique();

    server.post("/api/users", &request).await.unwrap();

    // Same username, fresh email
    let duplicate = CreateUserBody {
        username: request.username.clone(),
        email: format!("{}@example.com", unique_suffix()),
    };
    let response = server.post("/api/users", &duplicate).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_user_malformed_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserBody {
        username: format!("user_{}", unique_suffix()),
        email: "not-an-email".to_string(),
    };

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Well-formed but absent id
    let response = server.get(&format!("/api/users/{}", absent_id())).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Malformed id
    let response = server.get("/api/users/not-a-valid-id").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserBody::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let created: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let new_name = format!("renamed_{}", unique_suffix());
    let update = UpdateUserBody {
        username: Some(new_name.clone()),
        email: None,
    };
    let response = server
        .put(&format!("/api/users/{}", created.id), &update)
        .await
        .unwrap();
    let updated: UserJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.username, new_name);
    assert_eq!(updated.email, request.email);
}

// ============================================================================
// Friend Tests
// ============================================================================

#[tokio::test]
async fn test_add_friend_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let bea: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/users/{}/friends/{}", ana.id, bea.id);
    server.post_empty(&path).await.unwrap();
    let response = server.post_empty(&path).await.unwrap();
    let after: UserJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(after.friends.len(), 1);
    assert_eq!(after.friend_count, 1);

    // No reciprocal edge
    let response = server.get(&format!("/api/users/{}", bea.id)).await.unwrap();
    let bea_profile: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bea_profile.friend_count, 0);
}

#[tokio::test]
async fn test_remove_missing_friend_is_noop() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let bea: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/users/{}/friends/{}", ana.id, bea.id))
        .await
        .unwrap();
    let after: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(after.friends.is_empty());
}

#[tokio::test]
async fn test_add_self_as_friend_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty(&format!("/api/users/{}/friends/{}", ana.id, ana.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_add_friend_missing_user_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let bea: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty(&format!("/api/users/{}/friends/{}", absent_id(), bea.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Thought Tests
// ============================================================================

#[tokio::test]
async fn test_create_thought_appends_to_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&ana.id, "hello"))
        .await
        .unwrap();
    let thought: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(thought.text, "hello");
    assert_eq!(thought.user_id, ana.id);

    let response = server.get(&format!("/api/users/{}", ana.id)).await.unwrap();
    let profile: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.thoughts.len(), 1);
    assert_eq!(
        profile.thoughts[0].get("id").and_then(|v| v.as_str()),
        Some(thought.id.as_str())
    );
}

#[tokio::test]
async fn test_create_thought_for_missing_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&absent_id(), "hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_thought() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&ana.id, "before"))
        .await
        .unwrap();
    let thought: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put(
            &format!("/api/thoughts/{}", thought.id),
            &UpdateThoughtBody {
                text: "after".to_string(),
            },
        )
        .await
        .unwrap();
    let updated: ThoughtJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.text, "after");
}

#[tokio::test]
async fn test_delete_thought_pulls_owner_reference() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&ana.id, "hello"))
        .await
        .unwrap();
    let thought: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete(&format!("/api/thoughts/{}", thought.id)).await.unwrap();
    let message: MessageJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(message.message.contains("deleted"));

    let response = server.get(&format!("/api/thoughts/{}", thought.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&format!("/api/users/{}", ana.id)).await.unwrap();
    let profile: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(profile.thoughts.is_empty());
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_set_semantics() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&ana.id, "hello"))
        .await
        .unwrap();
    let thought: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/thoughts/{}/reactions", thought.id);
    let reaction = ReactionBody::new(&ana.username, "nice").with_id();

    let response = server.post(&path, &reaction).await.unwrap();
    let first: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.reaction_count, 1);

    // Identical identity: still a single occurrence
    let response = server.post(&path, &reaction).await.unwrap();
    let second: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.reaction_count, 1);

    let reaction_id = reaction.id.as_deref().unwrap();
    let response = server
        .delete(&format!("/api/thoughts/{}/reactions/{}", thought.id, reaction_id))
        .await
        .unwrap();
    let removed: ThoughtJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed.reaction_count, 0);

    // Second removal is a no-op
    let response = server
        .delete(&format!("/api/thoughts/{}/reactions/{}", thought.id, reaction_id))
        .await
        .unwrap();
    let noop: ThoughtJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(noop.reaction_count, 0);
}

#[tokio::test]
async fn test_reaction_on_missing_thought() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            &format!("/api/thoughts/{}/reactions", absent_id()),
            &ReactionBody::new("ghost", "boo"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_user_lifecycle_with_cascade() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Signup
    let response = server.post("/api/users", &CreateUserBody::unique()).await.unwrap();
    let ana: UserJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!ana.id.is_empty());

    // Post a thought
    let response = server
        .post("/api/thoughts", &CreateThoughtBody::new(&ana.id, "hi"))
        .await
        .unwrap();
    let thought: ThoughtJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Profile shows the reference
    let response = server.get(&format!("/api/users/{}", ana.id)).await.unwrap();
    let profile: UserJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.thoughts.len(), 1);

    // Delete the user; the cascade removes the thought
    let response = server.delete(&format!("/api/users/{}", ana.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/thoughts/{}", thought.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&format!("/api/users/{}", ana.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
