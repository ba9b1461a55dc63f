use crate::pipeline::report::BatchPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub batch_policy: BatchPolicy,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "fitness_tracker=info".to_string(),
            batch_policy: BatchPolicy::default(),
            parallel: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_filter = lookup("FITNESS_LOG_FILTER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let batch_policy = lookup("FITNESS_BATCH_POLICY")
            .and_then(|s| BatchPolicy::from_name(&s))
            .unwrap_or(defaults.batch_policy);

        let parallel = lookup("FITNESS_PARALLEL")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.parallel);

        Self {
            log_filter,
            batch_policy,
            parallel,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
