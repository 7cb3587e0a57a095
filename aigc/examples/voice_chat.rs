//! Voice chat walkthrough example.
//!
//! Validates an API key, fetches scene configuration, then starts and stops
//! a voice chat session.
//!
//! Run with:
//! ```bash
//! export UPATH_API_KEY="your-api-key"
//! cargo run --example voice_chat
//! ```

use std::env;

use upath_aigc::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get API key from environment
    let api_key = env::var("UPATH_API_KEY").expect("UPATH_API_KEY environment variable not set");

    // Create client
    let client = Client::new()?;

    // Example 1: Validate the key
    println!("Example 1: Validate the API key");
    println!("---");

    let check = client.scene().validate_api_key(Some(&api_key)).await;
    if !check.valid {
        eprintln!("key rejected: {}", check.message.unwrap_or_default());
        return Ok(());
    }
    println!("key accepted");

    // Example 2: Fetch scene configuration
    println!("\n\nExample 2: Fetch scene configuration");
    println!("---");

    let config = client.scene().get_scenes(Some(&api_key), None).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    let scene_id = config
        .pointer("/scenes/0/scene_id")
        .and_then(|v| v.as_str())
        .map(str::to_owned);

    // Example 3: Start and stop a voice chat session
    println!("\n\nExample 3: Start and stop a voice chat session");
    println!("---");

    let Some(scene_id) = scene_id else {
        println!("no scene available, skipping voice chat");
        return Ok(());
    };

    let started = client.voice_chat().start(Some(&api_key), &scene_id).await?;
    println!("started: {started}");

    let stopped = client.voice_chat().stop(Some(&api_key), &scene_id).await?;
    println!("stopped: {stopped}");

    println!("\nDone!");
    Ok(())
}
