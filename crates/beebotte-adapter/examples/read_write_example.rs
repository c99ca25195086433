/*
[INPUT]:  API credentials from the environment and a channel/resource
[OUTPUT]: Persisted and published values, read back from the platform
[POS]:    Examples - data flow demonstration
[UPDATE]: When data endpoints change
*/

use beebotte_adapter::*;
use serde_json::json;

/// Example: write, publish and read
///
/// 1. Create HTTP client
/// 2. Persist a value and publish a transient one
/// 3. Read recent records through a resource handle
#[tokio::main]
async fn main() {
    println!("=== Beebotte Read/Write Example ===\n");

    let (key_id, secret_key) = match (
        std::env::var("BEEBOTTE_KEY_ID"),
        std::env::var("BEEBOTTE_SECRET_KEY"),
    ) {
        (Ok(key_id), Ok(secret_key)) => (key_id, secret_key),
        _ => {
            eprintln!("Set BEEBOTTE_KEY_ID and BEEBOTTE_SECRET_KEY to run this example");
            return;
        }
    };

    let client = match BeebotteClient::new(Credentials::new(key_id, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let temperature = client.resource("sensors", "temperature");

    match temperature.write(&21.5, None).await {
        Ok(_) => println!("✓ value persisted"),
        Err(e) => eprintln!("write failed: {}", e),
    }

    match temperature.publish(&json!({"alert": "door open"}), None).await {
        Ok(_) => println!("✓ transient message published"),
        Err(e) => eprintln!("publish failed: {}", e),
    }

    let options = ReadOptions::default().with_query(
        ReadQuery::new()
            .limit(5)
            .source(ReadSource::Live)
            .time_range(TimeRange::Hours(1)),
    );
    match temperature.read(&options).await {
        Ok(records) => {
            for record in records {
                println!("  {:?} @ {:?}", record.data, record.ts);
            }
        }
        Err(BeebotteError::Api(api)) => eprintln!("API rejected read ({}): {}", api.kind, api),
        Err(e) => eprintln!("read failed: {}", e),
    }
}
