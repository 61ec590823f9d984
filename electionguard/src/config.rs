use crate::*;
use std::convert::TryFrom;
use std::env::var;
use tracing::info;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub parameters: ParameterSet,
    pub acceleration: PowRadixOption,
    pub dlog_max: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parameters: ParameterSet::Production4096,
            acceleration: PowRadixOption::default(),
            dlog_max: DEFAULT_DLOG_MAX,
        }
    }
}

impl Config {
    /// Read `ELECTIONGUARD_GROUP`, `ELECTIONGUARD_POW_RADIX_BITS`, and `ELECTIONGUARD_DLOG_MAX`.
    /// Unset variables take their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Config::from_lookup(|key| var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let parameters = match lookup("ELECTIONGUARD_GROUP") {
            Some(val) => val.parse()?,
            None => defaults.parameters,
        };

        let acceleration = match lookup("ELECTIONGUARD_POW_RADIX_BITS") {
            Some(val) => {
                let bits: u8 = val.trim().parse().map_err(|_| {
                    Error::Config(format!(
                        "ELECTIONGUARD_POW_RADIX_BITS must be a number, got '{}'",
                        val
                    ))
                })?;
                PowRadixOption::try_from(bits).map_err(|_| {
                    Error::Config(format!(
                        "ELECTIONGUARD_POW_RADIX_BITS must be one of 0, 8, 12, 16, got {}",
                        bits
                    ))
                })?
            }
            None => defaults.acceleration,
        };

        let dlog_max = match lookup("ELECTIONGUARD_DLOG_MAX") {
            Some(val) => val.trim().parse().map_err(|_| {
                Error::Config(format!("ELECTIONGUARD_DLOG_MAX must be a number, got '{}'", val))
            })?,
            None => defaults.dlog_max,
        };

        Ok(Config {
            parameters,
            acceleration,
            dlog_max,
        })
    }

    pub fn group_context(&self) -> GroupContext {
        info!(
            group = self.parameters.name(),
            pow_radix_bits = self.acceleration.bits(),
            dlog_max = self.dlog_max,
            "building group context"
        );
        GroupContext::with_dlog_max(self.parameters, self.acceleration, self.dlog_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parameters, ParameterSet::Production4096);
        assert_eq!(config.acceleration, PowRadixOption::LowMemory);
        assert_eq!(config.dlog_max, 100_000);
    }

    #[test]
    fn reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("ELECTIONGUARD_GROUP", "tiny"),
            ("ELECTIONGUARD_POW_RADIX_BITS", "0"),
            ("ELECTIONGUARD_DLOG_MAX", "500"),
        ]))
        .unwrap();
        assert_eq!(config.parameters, ParameterSet::Tiny);
        assert_eq!(config.acceleration, PowRadixOption::NoAcceleration);

        let group = config.group_context();
        assert_eq!(group.dlog_max(), 500);
        assert_eq!(group.parameters(), ParameterSet::Tiny);
    }

    #[test]
    fn rejects_bad_values() {
        for vars in &[
            [("ELECTIONGUARD_GROUP", "2048")],
            [("ELECTIONGUARD_POW_RADIX_BITS", "10")],
            [("ELECTIONGUARD_POW_RADIX_BITS", "lots")],
            [("ELECTIONGUARD_DLOG_MAX", "-1")],
        ] {
            assert!(matches!(Config::from_lookup(lookup(vars)), Err(Error::Config(_))));
        }
    }
}
