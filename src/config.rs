//! App Configuration
//!
//! UI strings, seed posts and logger settings, embedded at build time from
//! `assets/config.json`. Missing fields fall back to the built-in defaults.

use std::collections::HashSet;

use log::LevelFilter;
use rolling_logger::{LoggerConfig, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::models::Post;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub heading: String,
    pub labels: Labels,
    pub seed_posts: Vec<Post>,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            heading: "Мои Посты".to_string(),
            labels: Labels::default(),
            seed_posts: default_seed_posts(),
            log: LogConfig::default(),
        }
    }
}

/// Text shown by cards, menus and dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Message of the edit prompt
    pub edit_prompt: String,
    /// Message of the delete confirmation
    pub delete_confirm: String,
    /// Indicator rendered on favorite cards
    pub favorite_badge: String,
    /// Glyph of the button that toggles the menu
    pub menu_trigger: String,
    pub edit_action: String,
    pub delete_action: String,
    pub favorite_action: String,
    /// Shown by the list once every post is deleted
    pub empty_list: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            edit_prompt: "Введите новый текст поста:".to_string(),
            delete_confirm: "Вы уверены, что хотите удалить этот пост?".to_string(),
            favorite_badge: "⭐ В избранном".to_string(),
            menu_trigger: "⋮".to_string(),
            edit_action: "Редактировать".to_string(),
            delete_action: "Удалить".to_string(),
            favorite_action: "В избранное".to_string(),
            empty_list: "Постов нет".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of off/error/warn/info/debug/trace
    pub level: String,
    pub capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to `Info`
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.level.parse().unwrap_or(LevelFilter::Info),
            capacity: self.capacity,
        }
    }
}

fn default_seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "Post 1", "Это пример контента для карточки поста."),
        Post::new(
            2,
            "Post 2",
            "Это второй пример карточки поста с немного другим содержанием.",
        ),
    ]
}

impl AppConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: AppConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Config compiled into the binary
    pub fn embedded() -> Result<Self, String> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Post ids must be unique
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for post in &self.seed_posts {
            if !seen.insert(post.id) {
                return Err(format!("duplicate post id {}", post.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config.seed_posts.len(), 2);
        assert_eq!(config.seed_posts[0].id, 1);
        assert_eq!(config.seed_posts[1].title, "Post 2");
        assert_eq!(config.log.to_logger_config().level, LevelFilter::Debug);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_json(r#"{ "heading": "Posts" }"#).unwrap();
        assert_eq!(config.heading, "Posts");
        assert_eq!(config.labels, Labels::default());
        assert_eq!(config.seed_posts, default_seed_posts());

        let config = AppConfig::from_json(r#"{ "labels": { "menu_trigger": "..." } }"#).unwrap();
        assert_eq!(config.labels.menu_trigger, "...");
        assert_eq!(config.labels.edit_action, Labels::default().edit_action);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "seed_posts": [
                { "id": 7, "title": "a", "content": "x" },
                { "id": 7, "title": "b", "content": "y" }
            ]
        }"#;
        let err = AppConfig::from_json(json).unwrap_err();
        assert!(err.contains("duplicate post id 7"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let log = LogConfig {
            level: "loud".to_string(),
            capacity: 5,
        };
        let logger = log.to_logger_config();
        assert_eq!(logger.level, LevelFilter::Info);
        assert_eq!(logger.capacity, 5);
    }
}
