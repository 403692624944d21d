use serde::Deserialize;

/// Environment-backed configuration. Every field has a default that matches
/// the public Compiler Explorer instance, so a plain invocation needs no
/// environment at all.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub source_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "https://godbolt.org".into(),
            source_file: "main.cpp".into(),
        }
    }
}

impl Config {
    /// Reads `BASE_URL` and `SOURCE_FILE` from the environment, falling back
    /// to the defaults for anything the environment does not supply.
    pub fn from_env() -> Config {
        match envy::from_env::<Config>() {
            Ok(config) => config,
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_target_the_public_instance() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://godbolt.org");
        assert_eq!(config.source_file, "main.cpp");
    }
}
