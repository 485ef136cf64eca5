/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads an environment variable, treating blank values as absent
fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is missing, blank or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// Parsed value if found and valid, None otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = read_env(env_var)?;
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}: cannot parse {:?}: {:?}", env_var, val, e);
            None
        }
    }
}
