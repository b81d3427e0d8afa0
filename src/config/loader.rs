//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{GeneratorConfig, OptionalStyle};
use crate::domain::errors::TemplateError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CFGTEMPLATE";

/// Loads settings from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into GeneratorConfig
/// 4. Applies environment variable overrides (CFGTEMPLATE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - An override value cannot be parsed
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use cfgtemplate::config::loader::load_config;
///
/// let config = load_config("cfgtemplate.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TemplateError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TemplateError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: GeneratorConfig = toml::from_str(&contents)
        .map_err(|e| TemplateError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        TemplateError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        path = %path.display(),
        optional_style = %config.generator.optional_style,
        include_optional = config.generator.include_optional,
        "Settings loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All unset variables are reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| TemplateError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TemplateError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

fn parse_bool_override(section: &str, key: &str, val: &str) -> Result<bool> {
    val.parse().map_err(|e| {
        TemplateError::Configuration(format!(
            "Invalid value '{val}' for {ENV_PREFIX}_{section}_{key}: {e}"
        ))
    })
}

/// Applies environment variable overrides using the CFGTEMPLATE_* prefix
///
/// Environment variables follow the pattern: CFGTEMPLATE_<SECTION>_<KEY>
/// For example: CFGTEMPLATE_GENERATOR_OPTIONAL_STYLE, CFGTEMPLATE_LOGGING_LOG_LEVEL
fn apply_env_overrides(config: &mut GeneratorConfig) -> Result<()> {
    // Generator overrides
    if let Some(val) = env_override("GENERATOR", "OPTIONAL_STYLE") {
        config.generator.optional_style =
            OptionalStyle::from_str(&val).map_err(TemplateError::Configuration)?;
    }
    if let Some(val) = env_override("GENERATOR", "INCLUDE_OPTIONAL") {
        config.generator.include_optional =
            parse_bool_override("GENERATOR", "INCLUDE_OPTIONAL", &val)?;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING", "LOG_LEVEL") {
        config.logging.log_level = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool_override("LOGGING", "LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CFGTEMPLATE_UNIT_LOG_DIR", "/tmp/unit-logs");
        let input = "local_path = \"${CFGTEMPLATE_UNIT_LOG_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "local_path = \"/tmp/unit-logs\"\n");
        std::env::remove_var("CFGTEMPLATE_UNIT_LOG_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CFGTEMPLATE_UNIT_MISSING");
        let input = "local_path = \"${CFGTEMPLATE_UNIT_MISSING}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("CFGTEMPLATE_UNIT_COMMENTED");
        let input = "# local_path = \"${CFGTEMPLATE_UNIT_COMMENTED}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${CFGTEMPLATE_UNIT_COMMENTED}"));
    }

    #[test]
    fn test_parse_bool_override() {
        assert!(parse_bool_override("LOGGING", "LOCAL_ENABLED", "true").unwrap());
        assert!(!parse_bool_override("LOGGING", "LOCAL_ENABLED", "false").unwrap());

        let err = parse_bool_override("GENERATOR", "INCLUDE_OPTIONAL", "flase").unwrap_err();
        assert!(matches!(err, TemplateError::Configuration(_)));
        assert!(err
            .to_string()
            .contains("CFGTEMPLATE_GENERATOR_INCLUDE_OPTIONAL"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-cfgtemplate.toml");
        assert!(matches!(result, Err(TemplateError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[generator]
optional_style = "comment_each_line"

[logging]
log_level = "warn"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.generator.optional_style,
            OptionalStyle::CommentEachLine
        );
        assert!(config.generator.include_optional);
        assert_eq!(config.logging.log_level, "warn");
    }
}
