//! Environment ids of the form `[namespace/]Name[-vN]`.
use crate::error::RolloutError;
use log::warn;
use std::{fmt, str::FromStr};

/// A parsed environment id, e.g. `Taxi-v3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvId {
    /// Optional namespace before a `/`.
    pub namespace: Option<String>,

    /// Name of the environment.
    pub name: String,

    /// Version after the `-v` suffix.
    pub version: Option<u32>,
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '.' | '-')
}

fn is_namespace_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '-')
}

impl EnvId {
    /// Parses an environment id.
    pub fn parse(id: &str) -> Result<Self, RolloutError> {
        let malformed = || RolloutError::MalformedEnvId(id.to_string());

        let (namespace, rest) = match id.split_once('/') {
            Some((ns, rest)) => {
                if ns.is_empty() || !ns.chars().all(is_namespace_char) {
                    return Err(malformed());
                }
                (Some(ns.to_string()), rest)
            }
            None => (None, id),
        };

        let (name, version) = match rest.rsplit_once("-v") {
            Some((name, v)) if !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()) => {
                (name, Some(v.parse::<u32>().map_err(|_| malformed())?))
            }
            _ => (rest, None),
        };

        if name.is_empty() || !name.chars().all(is_name_char) {
            return Err(malformed());
        }

        Ok(Self {
            namespace,
            name: name.to_string(),
            version,
        })
    }

    /// Checks this id against the single registered environment `name-v{latest}`.
    ///
    /// An id without version resolves to the latest one.
    pub fn ensure(&self, name: &str, latest: u32) -> Result<(), RolloutError> {
        if self.namespace.is_some() || self.name != name {
            return Err(RolloutError::UnknownEnv(self.to_string()));
        }

        let latest_id = format!("{}-v{}", name, latest);
        match self.version {
            None => {
                warn!("Using the latest versioned environment {}", latest_id);
                Ok(())
            }
            Some(v) if v < latest => Err(RolloutError::DeprecatedEnv {
                id: self.to_string(),
                latest: latest_id,
            }),
            Some(v) if v > latest => Err(RolloutError::VersionNotFound {
                id: self.to_string(),
                latest: latest_id,
            }),
            Some(_) => Ok(()),
        }
    }
}

impl FromStr for EnvId {
    type Err = RolloutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ns) = &self.namespace {
            write!(f, "{}/", ns)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(v) = self.version {
            write!(f, "-v{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids() {
        let id = EnvId::parse("Taxi-v3").unwrap();
        assert_eq!(id.namespace, None);
        assert_eq!(id.name, "Taxi");
        assert_eq!(id.version, Some(3));

        let id: EnvId = "toy_text/Frozen-Lake-v12".parse().unwrap();
        assert_eq!(id.namespace.as_deref(), Some("toy_text"));
        assert_eq!(id.name, "Frozen-Lake");
        assert_eq!(id.version, Some(12));
        assert_eq!(id.to_string(), "toy_text/Frozen-Lake-v12");

        let id = EnvId::parse("Taxi").unwrap();
        assert_eq!(id.version, None);
        assert_eq!(id.to_string(), "Taxi");

        assert!(matches!(EnvId::parse(""), Err(RolloutError::MalformedEnvId(_))));
        assert!(matches!(EnvId::parse("-v3"), Err(RolloutError::MalformedEnvId(_))));
        assert!(matches!(EnvId::parse("/Taxi"), Err(RolloutError::MalformedEnvId(_))));
        assert!(matches!(EnvId::parse("Ta xi-v3"), Err(RolloutError::MalformedEnvId(_))));
    }

    #[test]
    fn ensure_versions() {
        assert!(EnvId::parse("Taxi-v3").unwrap().ensure("Taxi", 3).is_ok());
        assert!(EnvId::parse("Taxi").unwrap().ensure("Taxi", 3).is_ok());

        match EnvId::parse("Taxi-v2").unwrap().ensure("Taxi", 3) {
            Err(RolloutError::DeprecatedEnv { id, latest }) => {
                assert_eq!(id, "Taxi-v2");
                assert_eq!(latest, "Taxi-v3");
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            EnvId::parse("Taxi-v9").unwrap().ensure("Taxi", 3),
            Err(RolloutError::VersionNotFound { .. })
        ));
        assert!(matches!(
            EnvId::parse("CartPole-v1").unwrap().ensure("Taxi", 3),
            Err(RolloutError::UnknownEnv(id)) if id == "CartPole-v1"
        ));
        assert!(matches!(
            EnvId::parse("toy/Taxi-v3").unwrap().ensure("Taxi", 3),
            Err(RolloutError::UnknownEnv(_))
        ));
    }
}
