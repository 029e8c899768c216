use anyhow::{Context, Result};
use std::env;
use std::fs;

/// Retrieve some environment variable value by its name. Also checks if the environment variable
/// value is in some file, the path to which is retrieved from an environment variable by the
/// given name concatenated with `_FILE`.
///
/// Returns [Result::Ok()] with the trimmed value if one is found in either place; returns
/// [Result::Err()] otherwise.
pub fn get_env_var(name: &str) -> Result<String> {
    let value = match env::var(name) {
        Ok(s) => s,
        Err(e) => get_from_file(name).with_context(|| {
            format!(
                "Could not find a value for {} nor for {}_FILE. Original Error: {:?}",
                name, name, e
            )
        })?,
    };
    Ok(value.trim().to_string())
}

/// Same as [get_env_var], but falls back to `default` when neither variable is set.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    get_env_var(name).unwrap_or_else(|_| String::from(default))
}

fn get_from_file(name: &str) -> Result<String> {
    let path = env::var(format!("{}_FILE", name))?;
    Ok(fs::read_to_string(path)?)
}

pub mod variables {
    pub use crate::environment_variables::*;
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_env_var_returns_trimmed_value_given_variable_set() {
        // Arrange
        let name = "AUTOSCAN_TEST_DIRECT_VALUE";
        env::set_var(name, "  some value \n");

        // Act
        let actual = get_env_var(name);

        // Assert
        assert_eq!("some value", actual.unwrap());
    }

    #[test]
    fn get_env_var_reads_file_given_only_file_variable_set() {
        // Arrange
        let name = "AUTOSCAN_TEST_FILE_VALUE";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-from-file").unwrap();
        env::remove_var(name);
        env::set_var(format!("{}_FILE", name), file.path());

        // Act
        let actual = get_env_var(name);

        // Assert
        assert_eq!("secret-from-file", actual.unwrap());
    }

    #[test]
    fn get_env_var_returns_error_given_nothing_set() {
        // Arrange
        let name = "AUTOSCAN_TEST_MISSING_VALUE";

        // Act
        let actual = get_env_var(name);

        // Assert
        assert!(actual.is_err());
    }

    #[test]
    fn get_env_var_or_returns_default_given_nothing_set() {
        // Act
        let actual = get_env_var_or("AUTOSCAN_TEST_DEFAULTED_VALUE", "3030");

        // Assert
        assert_eq!("3030", actual);
    }
}
