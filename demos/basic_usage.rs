// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

//! Basic ftsearch usage example.
//!
//! Demonstrates:
//! 1. Building FT.CREATE / FT.SEARCH / FT.DROPINDEX commands
//! 2. Running them through a transport and decoding the reply
//! 3. Displaying the recorded metrics
//!
//! Without arguments the commands run against a scripted in-memory transport.
//! Pass a URL to run against a live Redis Stack server instead.
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example basic_usage -- redis://localhost:6379
//! ```

use ftsearch::search::{
    DropIndex, FieldFilter, Highlight, IndexOptions, NumericAttribute, QueryOptions, QueryResults,
    Summarize, TagAttribute, TextAttribute,
};
use ftsearch::transport::MemoryTransport;
use ftsearch::{ClientConfig, SearchClient, SearchError};
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use redis::Value;

const INDEX: &str = "idx:tickets";

fn index_options() -> IndexOptions {
    IndexOptions::new()
        .on_json()
        .add_prefix("ticket:")
        .add_attribute(TextAttribute::new("$.metadata.type").with_alias("type"))
        .add_attribute(TextAttribute::new("$.metadata.client_id").with_alias("client_id"))
        .add_attribute(
            TextAttribute::new("$.metadata.subject")
                .with_alias("subject")
                .with_weight(2.0),
        )
        .add_attribute(TagAttribute::new("$.status").with_alias("status"))
        .add_attribute(NumericAttribute::new("$.priority").with_alias("priority").sortable())
}

fn ticket_query() -> QueryOptions {
    QueryOptions::new(INDEX, "@subject:refund")
        .with_scores()
        .add_filter(FieldFilter::new("priority").with_min_inclusive(2.0))
        .add_return_field("subject")
        .with_summarize(Summarize::default().add_field("subject"))
        .with_highlight(Highlight::new().with_tags("<b>", "</b>"))
        .with_limit(0, 5)
}

fn print_results(results: &QueryResults) {
    println!("   {} total match(es), {} returned", results.total, results.len());
    for result in results.iter() {
        println!(
            "   • {} (score {:?}) subject={:?}",
            result.key,
            result.score,
            result.field("subject")
        );
    }
}

async fn run_scripted() -> Result<(), SearchError> {
    let transport = MemoryTransport::new();
    transport.push_reply(Value::Okay);
    transport.push_reply(Value::Array(vec![
        Value::Int(1),
        Value::BulkString(b"ticket:42".to_vec()),
        Value::BulkString(b"3.5".to_vec()),
        Value::Array(vec![
            Value::BulkString(b"subject".to_vec()),
            Value::BulkString(b"<b>Refund</b> for order 1182...".to_vec()),
        ]),
    ]));
    transport.push_reply(Value::Okay);

    let client = SearchClient::new(transport);
    client.create_index(INDEX, &index_options()).await?;
    print_results(&client.search(&ticket_query()).await?);
    client.drop_index(&DropIndex::new(INDEX)).await?;

    println!("\n📜 Commands sent:");
    for command in client.transport().commands() {
        println!("   {}", command);
    }
    Ok(())
}

async fn run_live(url: String) -> Result<(), SearchError> {
    let config = ClientConfig {
        redis_url: url,
        response_timeout_ms: Some(2_000),
        ..Default::default()
    };
    let client = SearchClient::connect(&config).await?;
    client.reindex(INDEX, &index_options()).await?;
    print_results(&client.search(&ticket_query()).await?);
    client.drop_index(&DropIndex::new(INDEX)).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder.install().expect("failed to install metrics recorder");

    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    println!("\n🔧 Rendered commands:");
    println!("   {}", index_options().create_command(INDEX));
    println!("   {}", ticket_query().search_command());
    println!("   {}", DropIndex::new(INDEX).with_delete_documents().command());

    println!("\n🔍 Executing...");
    match std::env::args().nth(1) {
        Some(url) => run_live(url).await?,
        None => run_scripted().await?,
    }

    dump_metrics(&snapshotter);
    Ok(())
}

fn dump_metrics(snapshotter: &Snapshotter) {
    println!("\n📊 Metrics:");
    for (composite_key, _, _, value) in snapshotter.snapshot().into_vec() {
        let (_kind, key) = composite_key.into_parts();
        let labels: Vec<_> = key
            .labels()
            .map(|l| format!("{}={}", l.key(), l.value()))
            .collect();
        let label_str = if labels.is_empty() {
            String::new()
        } else {
            format!("{{{}}}", labels.join(","))
        };

        match value {
            DebugValue::Counter(v) => println!("   {}{} = {}", key.name(), label_str, v),
            DebugValue::Gauge(v) => println!("   {}{} = {}", key.name(), label_str, v.into_inner()),
            DebugValue::Histogram(samples) => {
                let sum: f64 = samples.iter().map(|v| v.into_inner()).sum();
                println!("   {}{} count={} sum={:.4}", key.name(), label_str, samples.len(), sum);
            }
        }
    }
}
