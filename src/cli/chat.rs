use anyhow::{Result, bail};

use crate::core::AppConfig;
use crate::relay::{ChatRequest, Relay};

/// Send one message through the relay and print the reply content.
pub async fn run(message: String) -> Result<()> {
    let config = AppConfig::default();
    let relay = Relay::new(&config);

    match relay.handle(ChatRequest { text: message }).await {
        Ok(reply) => {
            println!("{}", reply.content);
            Ok(())
        }
        Err(err) => bail!("{}", err),
    }
}
