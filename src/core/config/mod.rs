use thiserror::Error;

/// Errors produced while reading command-line flags
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("flag `{0}` expects a value")]
    MissingValue(&'static str),
    #[error("flag `{flag}` expects a positive integer, got `{value}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("flag `{0}` is required")]
    MissingFlag(&'static str),
}

/// Validated run parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub producers: usize,
    pub consumers: usize,
    pub initial_capacity: usize,
    pub timeout_secs: u64,
}

impl SimulationConfig {
    /// Parse `-p -c -s -t` flags; all four are required positive integers
    pub fn parse_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut producers = None;
        let mut consumers = None;
        let mut initial_capacity = None;
        let mut timeout_secs = None;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let flag = match arg.as_str() {
                "-p" => "-p",
                "-c" => "-c",
                "-s" => "-s",
                "-t" => "-t",
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            };
            let value = iter.next().ok_or(ConfigError::MissingValue(flag))?;
            let parsed = parse_positive(flag, &value)?;
            match flag {
                "-p" => producers = Some(parsed),
                "-c" => consumers = Some(parsed),
                "-s" => initial_capacity = Some(parsed),
                _ => timeout_secs = Some(parsed as u64),
            }
        }

        Ok(Self {
            producers: producers.ok_or(ConfigError::MissingFlag("-p"))?,
            consumers: consumers.ok_or(ConfigError::MissingFlag("-c"))?,
            initial_capacity: initial_capacity.ok_or(ConfigError::MissingFlag("-s"))?,
            timeout_secs: timeout_secs.ok_or(ConfigError::MissingFlag("-t"))?,
        })
    }
}

fn parse_positive(flag: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            flag,
            value: value.to_string(),
        }),
    }
}

/// Usage message printed when argument parsing fails
pub fn usage(program: &str) -> String {
    format!("usage: {program} -p <producers> -c <consumers> -s <initial_capacity> -t <timeout_seconds>")
}
