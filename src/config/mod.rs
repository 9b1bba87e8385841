use poise::serenity_prelude as serenity;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Bot settings, read from `config/bot.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Guild whose role set the bot manages
    pub guild_id: u64,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "~".to_string()
}

impl BotConfig {
    /// Load bot configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: BotConfig = toml::from_str(&content)?;

        // GuildId is non-zero; 0 is the placeholder shipped in the repo
        if config.guild_id == 0 {
            return Err("guild_id must be set in config/bot.toml".into());
        }

        Ok(config)
    }

    pub fn guild(&self) -> serenity::GuildId {
        serenity::GuildId::new(self.guild_id)
    }
}

/// Initialize the bot configuration
pub fn init_config() -> Result<BotConfig, Box<dyn std::error::Error>> {
    let config_path = "config/bot.toml";
    BotConfig::load_from_file(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: BotConfig = toml::from_str(
            r#"
            guild_id = 123456789
            prefix = "!"
            "#,
        )
        .unwrap();

        assert_eq!(config.guild_id, 123456789);
        assert_eq!(config.prefix, "!");
    }

    #[test]
    fn test_prefix_defaults_to_tilde() {
        let config: BotConfig = toml::from_str("guild_id = 42").unwrap();

        assert_eq!(config.prefix, "~");
        assert_eq!(config.guild(), serenity::GuildId::new(42));
    }
}
