//! Integration tests for the Connect Four bot endpoint.

mod common;

use axum::http::StatusCode;
use connect_four_test_support::SequenceRng;
use sqlx::PgPool;

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";
const CAROL: &str = "carol@example.com";

#[tokio::test]
async fn test_game_against_computer_plays_both_half_moves() {
    // Arrange
    let app = common::build_test_app(SequenceRng::new(vec![6]));
    let (status, json) = common::send_chat(app.clone(), ALICE, "start game with computer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        common::contents_for(&json, ALICE)[0],
        "**You started a new game with the computer!**"
    );

    // Act
    let (status, json) = common::send_chat(app, ALICE, "move 1").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let to_alice = common::contents_for(&json, ALICE);
    assert_eq!(to_alice[0], "You placed your token in column 1.");
    assert!(to_alice.contains(&"**the Computer moved in column 7**."));
    assert!(to_alice.last().unwrap().starts_with("**It's your move!**"));
}

#[tokio::test]
async fn test_invitation_accept_and_first_move() {
    let app = common::build_test_app(SequenceRng::new(vec![]));

    let (_, invite) = common::send_chat(app.clone(), ALICE, "start game with bob@example.com").await;
    assert!(common::contents_for(&invite, BOB)[0].contains("has invited you"));

    let (_, accept) = common::send_chat(app.clone(), BOB, "accept").await;
    assert_eq!(
        common::contents_for(&accept, BOB),
        vec![
            "You accepted the invitation to play with alice@example.com",
            "Waiting for alice@example.com to move",
        ]
    );
    assert!(common::contents_for(&accept, ALICE)[2].starts_with("**It's your move!**"));

    let (_, first) = common::send_chat(app, ALICE, "move 4").await;
    assert_eq!(
        common::contents_for(&first, BOB)[0],
        "**alice@example.com moved in column 4**."
    );
}

#[tokio::test]
async fn test_outsider_is_told_bot_is_busy() {
    let app = common::build_test_app(SequenceRng::new(vec![]));
    common::send_chat(app.clone(), ALICE, "start game with bob@example.com").await;

    let (status, json) = common::send_chat(app, CAROL, "accept").await;

    assert_eq!(status, StatusCode::OK);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["recipient"], CAROL);
    assert!(
        messages[0]["content"]
            .as_str()
            .unwrap()
            .contains("other users are already using the bot")
    );
}

#[tokio::test]
async fn test_status_reports_pending_invitation() {
    let app = common::build_test_app(SequenceRng::new(vec![]));
    common::send_chat(app.clone(), ALICE, "start game with bob@example.com").await;

    let (_, json) = common::send_chat(app, CAROL, "status").await;

    assert!(
        common::contents_for(&json, CAROL)[0]
            .ends_with("alice@example.com's invitation to play bob@example.com is still pending. Wait for the game to finish to play a game.")
    );
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_session_survives_in_postgres_between_requests(pool: PgPool) {
    let app = common::build_pg_test_app(pool.clone(), SequenceRng::new(vec![]));
    common::send_chat(app.clone(), ALICE, "start game with bob@example.com").await;

    let (_, json) = common::send_chat(app, BOB, "decline").await;

    assert!(common::contents_for(&json, ALICE)[0].contains("has declined your invitation"));
    let stored: serde_json::Value =
        sqlx::query_scalar("SELECT value FROM bot_storage WHERE key = $1")
            .bind(common::CONTEXT)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, serde_json::json!({ "state": "waiting" }));
}
