use anyhow::Result;
use serde::{Deserialize, Serialize};
use serenity::model::id::{GuildId, RoleId};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
    pub guild_id: GuildId,
    pub port: u16,
    pub log_level: String,
    pub admin_role_id: Option<RoleId>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            discord_token: env::var("TOKEN")
                .map_err(|_| anyhow::anyhow!("TOKEN environment variable not set"))?,
            application_id: env::var("CLIENT_ID")
                .map_err(|_| anyhow::anyhow!("CLIENT_ID environment variable not set"))?
                .parse()
                .map_err(|_| anyhow::anyhow!("CLIENT_ID must be a numeric application id"))?,
            guild_id: env::var("GUILD_ID")
                .map_err(|_| anyhow::anyhow!("GUILD_ID environment variable not set"))?
                .parse::<u64>()
                .map(GuildId)
                .map_err(|_| anyhow::anyhow!("GUILD_ID must be a numeric guild id"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            admin_role_id: env::var("ADMIN_ROLE_ID")
                .ok()
                .and_then(|id| id.parse::<u64>().ok())
                .map(RoleId),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn set_required() {
        env::set_var("TOKEN", "test_token");
        env::set_var("CLIENT_ID", "123456789012345678");
        env::set_var("GUILD_ID", "987654321098765432");
    }

    fn clear_all() {
        for var in [
            "TOKEN",
            "CLIENT_ID",
            "GUILD_ID",
            "PORT",
            "LOG_LEVEL",
            "ADMIN_ROLE_ID",
        ] {
            env::remove_var(var);
        }
    }

    // Environment variables are process-global, so all scenarios run in one
    // test to avoid interference under the parallel test runner.
    #[test]
    fn test_config_from_env() {
        clear_all();
        assert!(Config::from_env().is_err());

        set_required();
        let config = Config::from_env().unwrap();
        assert_eq!(config.discord_token, "test_token");
        assert_eq!(config.application_id, 123456789012345678);
        assert_eq!(config.guild_id, GuildId(987654321098765432));
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert!(config.admin_role_id.is_none());

        env::set_var("PORT", "8080");
        env::set_var("ADMIN_ROLE_ID", "111222333444555666");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_role_id, Some(RoleId(111222333444555666)));

        env::set_var("GUILD_ID", "not-a-snowflake");
        assert!(Config::from_env().is_err());

        clear_all();
    }
}
