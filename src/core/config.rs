use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
    pub ansi: bool,
}

/// Categories the demo binary builds on startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub categories: Vec<SeedCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCategory {
    pub name: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            logging: LoggingConfig::from_env()?,
            seed: SeedConfig::from_env()?,
        })
    }
}

impl LoggingConfig {
    const DEFAULT_FILTER: &'static str = "info";

    pub fn from_env() -> Result<Self, String> {
        let filter = env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FILTER.to_string());

        let ansi = env::var("LOG_ANSI")
            .unwrap_or_else(|_| "true".to_string())
            .trim()
            .parse::<bool>()
            .map_err(|_| "LOG_ANSI must be true or false".to_string())?;

        Ok(Self { filter, ansi })
    }
}

impl SeedConfig {
    const DEFAULT_SEED: &'static str = "Filme=Filme Description;Séries=Séries Description";

    pub fn from_env() -> Result<Self, String> {
        let raw = env::var("CATEGORY_SEED").unwrap_or_else(|_| Self::DEFAULT_SEED.to_string());
        Ok(Self::parse(&raw))
    }

    /// Parse `name=description` entries separated by `;`
    ///
    /// A bare `name` gets an empty description. Blank entries are skipped;
    /// names are not validated here so the binary can report rejections.
    pub fn parse(raw: &str) -> Self {
        let categories = raw
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((name, description)) => SeedCategory {
                    name: name.trim().to_string(),
                    description: description.trim().to_string(),
                },
                None => SeedCategory {
                    name: entry.to_string(),
                    description: String::new(),
                },
            })
            .collect();

        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str, description: &str) -> SeedCategory {
        SeedCategory {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_seed_default_value() {
        let config = SeedConfig::parse(SeedConfig::DEFAULT_SEED);
        assert_eq!(
            config.categories,
            vec![
                seed("Filme", "Filme Description"),
                seed("Séries", "Séries Description"),
            ]
        );
    }

    #[test]
    fn test_seed_bare_names_and_whitespace() {
        let config = SeedConfig::parse("  Docs ; Music = Songs and albums ;;  ");
        assert_eq!(
            config.categories,
            vec![seed("Docs", ""), seed("Music", "Songs and albums")]
        );
    }

    #[test]
    fn test_seed_keeps_empty_names_for_reporting() {
        let config = SeedConfig::parse("=orphan description");
        assert_eq!(config.categories, vec![seed("", "orphan description")]);
    }

    #[test]
    fn test_seed_description_may_contain_equals() {
        let config = SeedConfig::parse("Math=a=b");
        assert_eq!(config.categories, vec![seed("Math", "a=b")]);
    }

    #[test]
    fn test_seed_empty_input() {
        assert!(SeedConfig::parse("").categories.is_empty());
    }
}
