/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but cannot be parsed is logged and replaced by the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` if unset, empty or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Reads a boolean flag; accepts `1/0`, `true/false`, `yes/no`, `on/off` in any case
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            "" => default,
            other => {
                error!("Failed to parse {} flag: {}, using default", env_var, other);
                default
            }
        },
        Err(_) => default,
    }
}
