use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct SlackContext {
    pub webhook_url: Option<String>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub slack: SlackContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct SlackConfig {
    pub webhook_url: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub slack: SlackConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        // A missing webhook url must not abort startup; the order endpoint
        // answers with a configuration error until it is set.
        let slack_webhook_url = env::var("SLACK_WEBHOOK_URL").ok();

        Self {
            app: AppConfig { host, port },
            slack: SlackConfig {
                webhook_url: slack_webhook_url,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            slack: SlackContext {
                webhook_url: self.slack.webhook_url,
            },
        }
    }
}
