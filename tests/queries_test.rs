//! End-to-end tests for the top-level queries against a mock API

use demonlist::{level_list, players_ranking, ApiClient, DemonlistError, LevelList, Ranking};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POLAND_FLAG: &str = "\u{1F1F5}\u{1F1F1}";

async fn mock_players_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users/top"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "place": 1, "username": "Alice", "score": 571.29, "country": "Poland"},
                {"id": 2, "place": 2, "username": "Bob", "score": 300, "country": "Unknown"}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_players_ranking_default_text() {
    let server = MockServer::start().await;
    mock_players_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let ranking = players_ranking(&client, 0, None).await.unwrap();

    match ranking {
        Ranking::Text(text) => {
            assert_eq!(
                text,
                format!("1. {POLAND_FLAG}Alice | Score: 571.29\n2. Bob | Score: 300\n")
            );
        }
        other => panic!("Expected text output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_players_ranking_list_entries() {
    let server = MockServer::start().await;
    mock_players_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let ranking = players_ranking(&client, 0, Some("list")).await.unwrap();

    match ranking {
        Ranking::Entries(entries) => {
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].place, 1);
            assert_eq!(entries[0].name, "Alice");
            assert_eq!(entries[0].flag, POLAND_FLAG);
            // The "Unknown" sentinel suppresses the flag glyph
            assert_eq!(entries[1].flag, "");
        }
        other => panic!("Expected list output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_players_ranking_modes_agree() {
    let server = MockServer::start().await;
    mock_players_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let text = match players_ranking(&client, 0, Some("default")).await.unwrap() {
        Ranking::Text(text) => text,
        other => panic!("Expected text output, got {:?}", other),
    };
    let entries = match players_ranking(&client, 0, Some("list")).await.unwrap() {
        Ranking::Entries(entries) => entries,
        other => panic!("Expected list output, got {:?}", other),
    };

    // Every text line corresponds 1:1 to a list entry in the same order
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), entries.len());
    for (line, entry) in lines.iter().zip(&entries) {
        assert!(line.starts_with(&format!("{}. ", entry.place)));
        assert!(line.contains(&entry.name));
    }
}

#[tokio::test]
async fn test_players_ranking_passes_offset_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/top"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let ranking = players_ranking(&client, 150, None).await.unwrap();

    match ranking {
        Ranking::Text(text) => assert!(text.is_empty()),
        other => panic!("Expected text output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_players_ranking_rejects_unknown_mode_before_fetch() {
    let server = MockServer::start().await;

    let client = ApiClient::with_base_url(server.uri());
    let err = players_ranking(&client, 0, Some("table")).await.unwrap_err();

    match err {
        DemonlistError::InvalidDisplayMode { mode } => assert_eq!(mode, "table"),
        other => panic!("Expected InvalidDisplayMode, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_players_ranking_surfaces_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/top"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::with_base_url(server.uri());
    let err = players_ranking(&client, 0, None).await.unwrap_err();

    assert!(matches!(err, DemonlistError::Transport { .. }));
}

async fn mock_classic_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/levels/classic"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "place": 1,
                    "level_id": 86407629,
                    "name": "Acheron",
                    "verifier": "Zoink",
                    "creator": "ryamu",
                    "video": "https://youtu.be/a",
                    "minimal_percent": 60,
                    "score": 600.0
                },
                {
                    "place": 2,
                    "level_id": 777,
                    "name": "Sonic Wave",
                    "verifier": "Cyclic",
                    "creator": "Cyclic",
                    "video": "https://youtu.be/b",
                    "minimal_percent": 55,
                    "score": 520.25
                }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_level_list_default_text() {
    let server = MockServer::start().await;
    mock_classic_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let list = level_list(&client, 0, None, "classic", false).await.unwrap();

    match list {
        LevelList::Text(text) => {
            assert_eq!(
                text,
                "1. Acheron verified by Zoink\n2. Sonic Wave verified by Cyclic\n"
            );
        }
        other => panic!("Expected text output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_level_list_structured_entries() {
    let server = MockServer::start().await;
    mock_classic_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let list = level_list(&client, 0, Some("list"), "classic", false)
        .await
        .unwrap();

    match list {
        LevelList::Levels(levels) => {
            assert_eq!(levels.len(), 2);
            assert_eq!(levels[0].id, 86407629);
            assert_eq!(levels[0].name, "Acheron");
            assert_eq!(levels[0].pos, 1);
            assert_eq!(levels[0].list_percent, 60);
            assert_eq!(levels[1].creator, "Cyclic");
            assert_eq!(levels[1].score, 520.25);
        }
        other => panic!("Expected level entries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_level_list_as_names() {
    let server = MockServer::start().await;
    mock_classic_page(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let list = level_list(&client, 0, None, "classic", true).await.unwrap();

    match list {
        LevelList::Names(names) => assert_eq!(names, vec!["Acheron", "Sonic Wave"]),
        other => panic!("Expected names, got {:?}", other),
    }
}

#[tokio::test]
async fn test_level_list_rejects_unknown_kind_before_fetch() {
    let server = MockServer::start().await;

    let client = ApiClient::with_base_url(server.uri());
    let err = level_list(&client, 0, None, "bogus", false).await.unwrap_err();

    match err {
        DemonlistError::InvalidListKind { kind } => assert_eq!(kind, "bogus"),
        other => panic!("Expected InvalidListKind, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_level_list_rejects_display_mode_with_as_names() {
    let server = MockServer::start().await;

    let client = ApiClient::with_base_url(server.uri());
    let err = level_list(&client, 0, Some("list"), "classic", true)
        .await
        .unwrap_err();

    match err {
        DemonlistError::ConflictingOptions { left, right } => {
            assert_eq!(left, "display_mode");
            assert_eq!(right, "as_names");
        }
        other => panic!("Expected ConflictingOptions, got {:?}", other),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

async fn mock_future_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/levels/future"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"name": "Upcoming", "verifier": "somebody", "record": 87, "status": 1},
                {"name": "Mystery", "verifier": "anybody", "status": 0}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_future_list_default_text() {
    let server = MockServer::start().await;
    mock_future_list(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let list = level_list(&client, 0, None, "future", false).await.unwrap();

    match list {
        LevelList::Text(text) => {
            assert_eq!(
                text,
                "Upcoming | Status: In progress\nMystery | Status: Unknown\n"
            );
        }
        other => panic!("Expected text output, got {:?}", other),
    }
}

#[tokio::test]
async fn test_future_list_structured_entries() {
    let server = MockServer::start().await;
    mock_future_list(&server).await;

    let client = ApiClient::with_base_url(server.uri());
    let list = level_list(&client, 0, Some("list"), "future", false)
        .await
        .unwrap();

    match list {
        LevelList::Future(levels) => {
            assert_eq!(levels.len(), 2);
            assert_eq!(levels[0].name, "Upcoming");
            assert_eq!(levels[0].record, "87%");
            assert_eq!(levels[0].status, "In progress");
            // Missing record percent renders as 0%
            assert_eq!(levels[1].record, "0%");
        }
        other => panic!("Expected future entries, got {:?}", other),
    }
}

#[tokio::test]
async fn test_future_list_rejects_unknown_mode_before_fetch() {
    let server = MockServer::start().await;

    let client = ApiClient::with_base_url(server.uri());
    let err = level_list(&client, 0, Some("grid"), "future", false)
        .await
        .unwrap_err();

    assert!(matches!(err, DemonlistError::InvalidDisplayMode { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
