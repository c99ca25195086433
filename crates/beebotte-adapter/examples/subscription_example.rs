/*
[INPUT]:  API credentials from the environment
[OUTPUT]: Subscription tokens for a real-time client session
[POS]:    Examples - subscription signing demonstration
[UPDATE]: When subscription signing changes
*/

use beebotte_adapter::*;

/// Example: computing subscription tokens
///
/// A real-time client sends its session id to your backend; the backend
/// signs the requested channel access and returns the token.
fn main() {
    println!("=== Beebotte Subscription Token Example ===\n");

    let key_id = std::env::var("BEEBOTTE_KEY_ID").unwrap_or_else(|_| "demo-key".to_string());
    let secret_key = std::env::var("BEEBOTTE_SECRET_KEY").unwrap_or_else(|_| "demo-secret".to_string());

    let client = match BeebotteClient::new(Credentials::new(key_id, secret_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let request = SubscriptionRequest::new("1234.5678", "private-sensors")
        .resource("temperature")
        .ttl(3600)
        .read(true);
    println!("token: {}", client.subscription_token(&request));

    let presence = SubscriptionRequest::new("1234.5678", "presence:lobby").read(true);
    match serde_json::to_string(&client.subscription_auth(&presence)) {
        Ok(json) => println!("auth object: {}", json),
        Err(e) => eprintln!("Failed to encode auth object: {}", e),
    }
}
