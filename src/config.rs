use std::env::VarError;
use thiserror::Error;

pub const JIRA_URL: &str = "JIRA_URL";
pub const JIRA_USER: &str = "JIRA_USER";
pub const JIRA_TOKEN: &str = "JIRA_TOKEN";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Environment variable {0} not set.")]
    MissingVariable(&'static str),
    #[error("Environment variable {0} is not valid unicode.")]
    InvalidVariable(&'static str),
}

/// Connection settings for one JIRA instance. `base_url` is used as given.
#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub user: String,
    pub token: String,
}

impl JiraConfig {
    /// Checks `JIRA_URL`, `JIRA_USER` and `JIRA_TOKEN` in that order and stops at the first one
    /// that is missing or unreadable. `lookup` has the shape of `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let require = |key: &'static str| {
            lookup(key).map_err(|e| match e {
                VarError::NotPresent => ConfigurationError::MissingVariable(key),
                VarError::NotUnicode(_) => ConfigurationError::InvalidVariable(key),
            })
        };

        Ok(Self {
            base_url: require(JIRA_URL)?,
            user: require(JIRA_USER)?,
            token: require(JIRA_TOKEN)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::ffi::OsString;

    pub(crate) fn lookup_in(
        env: &HashMap<String, String>,
    ) -> impl Fn(&str) -> Result<String, VarError> + '_ {
        move |key: &str| env.get(key).cloned().ok_or(VarError::NotPresent)
    }

    pub(crate) fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    pub(crate) fn full_env() -> HashMap<String, String> {
        env_of(&[
            (JIRA_URL, "https://jira.example.com"),
            (JIRA_USER, "alice"),
            (JIRA_TOKEN, "secret"),
        ])
    }

    #[test]
    fn loads_all_variables() {
        let env = full_env();
        let config = JiraConfig::from_lookup(lookup_in(&env)).unwrap();

        assert_eq!(config.base_url, "https://jira.example.com");
        assert_eq!(config.user, "alice");
        assert_eq!(config.token, "secret");
    }

    #[test]
    fn each_missing_variable_is_named() {
        for missing in [JIRA_URL, JIRA_USER, JIRA_TOKEN] {
            let mut env = full_env();
            env.remove(missing);

            let err = JiraConfig::from_lookup(lookup_in(&env)).unwrap_err();
            assert_eq!(err, ConfigurationError::MissingVariable(missing));
            assert!(err.to_string().contains(missing));
        }
    }

    #[test]
    fn stops_at_first_missing_variable() {
        let env = env_of(&[(JIRA_URL, "https://jira.example.com")]);
        let looked_up = RefCell::new(Vec::new());

        let err = JiraConfig::from_lookup(|key| {
            looked_up.borrow_mut().push(key.to_string());
            env.get(key).cloned().ok_or(VarError::NotPresent)
        })
        .unwrap_err();

        assert_eq!(err, ConfigurationError::MissingVariable(JIRA_USER));
        assert_eq!(*looked_up.borrow(), vec![JIRA_URL, JIRA_USER]);
    }

    #[test]
    fn non_unicode_value_is_not_reported_as_missing() {
        let env = full_env();

        let err = JiraConfig::from_lookup(|key| {
            if key == JIRA_USER {
                Err(VarError::NotUnicode(OsString::from("al\u{fffd}ce")))
            } else {
                lookup_in(&env)(key)
            }
        })
        .unwrap_err();

        assert_eq!(err, ConfigurationError::InvalidVariable(JIRA_USER));
        assert_eq!(
            err.to_string(),
            "Environment variable JIRA_USER is not valid unicode."
        );
    }

    #[test]
    fn empty_value_counts_as_set() {
        let mut env = full_env();
        env.insert(JIRA_TOKEN.to_string(), String::new());

        let config = JiraConfig::from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.token, "");
    }

    #[test]
    fn base_url_is_not_normalized() {
        let mut env = full_env();
        env.insert(JIRA_URL.to_string(), "https://jira.example.com/".to_string());

        let config = JiraConfig::from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(config.base_url, "https://jira.example.com/");
    }
}
