use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime configuration, read from the environment once at startup and
/// passed by reference into the relay. The API credential is never
/// logged.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub request_timeout: Duration,
    pub max_message_len: usize,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
    // Empty means any origin is allowed
    pub allowed_origins: Vec<String>,
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("RELAY_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").expect("Missing env var OPENAI_API_KEY");
        let openai_model =
            env::var("RELAY_LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let request_timeout = Duration::from_secs(env_parse("RELAY_TIMEOUT_SECS", 30));
        let max_message_len = env_parse("RELAY_MAX_MESSAGE_LEN", 4096);
        let max_retries = env_parse("RELAY_MAX_RETRIES", 2);
        let retry_base_delay =
            Duration::from_millis(env_parse("RELAY_RETRY_BASE_DELAY_MS", 250));
        let allowed_origins = env::var("RELAY_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            request_timeout,
            max_message_len,
            max_retries,
            retry_base_delay,
            allowed_origins,
        }
    }
}
