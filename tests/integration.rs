//! Integration tests against a real Redis Stack server.
//!
//! Tests use testcontainers for portability - no external docker-compose required.
//!
//! # Running Tests
//! ```bash
//! # Run all integration tests (requires Docker)
//! cargo test --test integration -- --ignored
//! ```

use redis::AsyncCommands;
use testcontainers::{clients::Cli, core::WaitFor, Container, GenericImage};

use ftsearch::search::{
    DropIndex, FieldFilter, Highlight, IndexOptions, NumericAttribute, QueryOptions, TagAttribute,
    TextAttribute,
};
use ftsearch::{ClientConfig, SearchClient, SearchError};

// =============================================================================
// Container Helpers
// =============================================================================

/// Redis Stack ships the search module
fn redis_stack_container(docker: &Cli) -> Container<'_, GenericImage> {
    let image = GenericImage::new("redis/redis-stack-server", "7.2.0-v10")
        .with_exposed_port(6379)
        .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"));
    docker.run(image)
}

fn config_for(container: &Container<'_, GenericImage>) -> ClientConfig {
    ClientConfig {
        redis_url: format!("redis://127.0.0.1:{}", container.get_host_port_ipv4(6379)),
        response_timeout_ms: Some(5_000),
        ..Default::default()
    }
}

fn unique_index(name: &str) -> String {
    format!("idx:{}:{}", name, uuid::Uuid::new_v4().simple())
}

async fn seed_books(url: &str, prefix: &str) {
    let client = redis::Client::open(url).unwrap();
    let mut conn = client.get_multiplexed_async_connection().await.unwrap();

    let books = [
        ("1", "Rust in Action", "systems,rust", 2021),
        ("2", "Programming Rust", "systems,rust", 2017),
        ("3", "The Go Programming Language", "systems,go", 2015),
    ];
    for (id, title, tags, year) in books {
        let key = format!("{}{}", prefix, id);
        let _: () = conn
            .hset_multiple(&key, &[("title", title.to_string()), ("tags", tags.to_string()), ("year", year.to_string())])
            .await
            .unwrap();
    }
}

async fn wait_for_indexing() {
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
}

// =============================================================================
// Happy Path Tests
// =============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn happy_create_search_drop() {
    let docker = Cli::default();
    let redis = redis_stack_container(&docker);
    let config = config_for(&redis);

    let prefix = format!("book:{}:", uuid::Uuid::new_v4().simple());
    seed_books(&config.redis_url, &prefix).await;

    let client = SearchClient::connect(&config).await.expect("Failed to connect");
    let index = unique_index("books");

    let options = IndexOptions::new()
        .on_hash()
        .add_prefix(&prefix)
        .add_attribute(TextAttribute::new("title").sortable())
        .add_attribute(TagAttribute::new("tags"))
        .add_attribute(NumericAttribute::new("year").sortable());
    client.create_index(&index, &options).await.expect("FT.CREATE failed");
    wait_for_indexing().await;

    // Full content
    let results = client
        .search(&QueryOptions::new(&index, "rust"))
        .await
        .expect("FT.SEARCH failed");
    assert_eq!(results.total, 2);
    for result in results.iter() {
        assert!(result.field("title").unwrap().contains("Rust"));
        assert!(result.score.is_none());
    }

    // Scores, no content
    let results = client
        .search(&QueryOptions::new(&index, "@tags:{systems}").with_scores().no_content())
        .await
        .expect("FT.SEARCH failed");
    assert_eq!(results.total, 3);
    assert!(results.iter().all(|r| r.score.is_some() && r.fields.is_none()));

    // Numeric filter with exclusive bound
    let results = client
        .search(
            &QueryOptions::new(&index, "*")
                .add_filter(FieldFilter::new("year").with_min_exclusive(2017.0))
                .add_return_field("title"),
        )
        .await
        .expect("FT.SEARCH failed");
    assert_eq!(results.total, 1);
    assert_eq!(results.results[0].field("title"), Some("Rust in Action"));

    client
        .drop_index(&DropIndex::new(&index).with_delete_documents())
        .await
        .expect("FT.DROPINDEX failed");
}

#[tokio::test]
#[ignore] // Requires Docker
async fn happy_highlight_and_limit() {
    let docker = Cli::default();
    let redis = redis_stack_container(&docker);
    let config = config_for(&redis);

    let prefix = format!("book:{}:", uuid::Uuid::new_v4().simple());
    seed_books(&config.redis_url, &prefix).await;

    let client = SearchClient::connect(&config).await.unwrap();
    let index = unique_index("hl");
    let options = IndexOptions::new()
        .add_prefix(&prefix)
        .add_attribute(TextAttribute::new("title"));
    client.create_index(&index, &options).await.unwrap();
    wait_for_indexing().await;

    let results = client
        .search(
            &QueryOptions::new(&index, "programming")
                .with_highlight(Highlight::new().add_field("title").with_tags("<b>", "</b>"))
                .with_limit(0, 1),
        )
        .await
        .unwrap();

    assert_eq!(results.total, 2);
    assert_eq!(results.len(), 1);
    assert!(results.results[0].field("title").unwrap().contains("<b>"));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn happy_reindex_replaces_schema() {
    let docker = Cli::default();
    let redis = redis_stack_container(&docker);
    let config = config_for(&redis);

    let client = SearchClient::connect(&config).await.unwrap();
    let index = unique_index("re");

    // First call: nothing to drop yet
    let options = IndexOptions::new().add_attribute(TextAttribute::new("title"));
    client.reindex(&index, &options).await.unwrap();

    let options = options.add_attribute(NumericAttribute::new("year"));
    client.reindex(&index, &options).await.unwrap();

    client.drop_index(&DropIndex::new(&index)).await.unwrap();
}

// =============================================================================
// Failure Tests
// =============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn failure_server_errors_pass_through() {
    let docker = Cli::default();
    let redis = redis_stack_container(&docker);
    let client = SearchClient::connect(&config_for(&redis)).await.unwrap();

    let err = client
        .search(&QueryOptions::new("idx:missing", "*"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));

    let err = client
        .drop_index(&DropIndex::new("idx:missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Transport(_)));
}
