//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::Jail;
use semroute_config::{ConfigError, SemrouteConfig};

#[test]
fn loads_llm_config_from_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".semroute")?;
        jail.create_file(
            ".semroute/config.toml",
            r#"
[llm]
provider = "qwen"
api_key = "toml-key"
model = "qwen-turbo"
max_tokens = 128
"#,
        )?;

        let config = SemrouteConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.llm.provider, "qwen");
        assert_eq!(config.llm.api_key, "toml-key");
        assert_eq!(config.llm.model, "qwen-turbo");
        assert_eq!(config.llm.max_tokens, 128);
        assert!(config.llm.base_url.is_empty());
        assert!(config.llm.is_configured());
        Ok(())
    });
}

#[test]
fn loads_extract_and_index_sections() {
    Jail::expect_with(|jail| {
        jail.create_dir(".semroute")?;
        jail.create_file(
            ".semroute/config.toml",
            r#"
[extract]
max_lines = 40

[index]
out_dir = "build/skills"
extensions = ["cc", "hh"]
"#,
        )?;

        let config = SemrouteConfig::load_for_project(jail.directory()).expect("config loads");
        assert_eq!(config.extract.max_lines, 40);
        assert_eq!(config.extract.max_chars, 4000);
        assert_eq!(config.index.out_dir, "build/skills");
        assert_eq!(config.index.extensions, vec!["cc", "hh"]);
        Ok(())
    });
}

#[test]
fn rejects_zero_line_cap() {
    Jail::expect_with(|jail| {
        jail.create_dir(".semroute")?;
        jail.create_file(".semroute/config.toml", "[extract]\nmax_lines = 0\n")?;

        let result = SemrouteConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".semroute")?;
        jail.create_file(".semroute/config.toml", "[llm\nprovider = ")?;

        let result = SemrouteConfig::load_for_project(jail.directory());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
