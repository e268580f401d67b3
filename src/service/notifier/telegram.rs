//! Telegram notifier built on `teloxide`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use teloxide::{prelude::*, types::ChatId};
use tracing::{debug, error, instrument};

use crate::base::{
    config::Config,
    error::{ConfigError, NotifyError},
    types::Receipt,
};

use super::{GenericNotifier, Notifier};

// Extra methods on `Notifier` applied by the telegram implementation.

impl Notifier {
    /// Creates a new Telegram notifier.
    pub fn telegram(config: &Config) -> Result<Self, ConfigError> {
        let notifier = TelegramNotifier::new(config)?;
        Ok(Self { inner: Arc::new(notifier) })
    }
}

// Specific implementations.

/// Telegram notifier implementation.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier for the configured chat.
    #[instrument(name = "TelegramNotifier::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut bot = Bot::new(config.telegram_token.clone());

        if let Some(url) = &config.telegram_api_url {
            let url = Url::parse(url).map_err(|e| ConfigError::invalid("TELEGRAM_API_URL", e.to_string()))?;
            bot = bot.set_api_url(url);
        }

        Ok(Self {
            bot,
            chat_id: ChatId(config.chat_id()?),
        })
    }
}

#[async_trait]
impl GenericNotifier for TelegramNotifier {
    #[instrument(skip(self))]
    async fn notify(&self, text: &str) -> Result<Receipt, NotifyError> {
        let sent = self.bot.send_message(self.chat_id, text.to_string()).await.map_err(|e| {
            let err = NotifyError { chat_id: self.chat_id.0, message: e.to_string() };
            error!("{}", err);
            err
        })?;

        debug!(message_id = sent.id.0, "Bot sent message: \"{}\"", text);

        Ok(Receipt { message_id: sent.id.0 })
    }
}
