//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// 텍스트 분해 기본 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JasoConfig {
    /// 한글 외 문자는 Latin-1 범위만 남길지 여부
    #[serde(default = "default_latin_filter")]
    pub latin_filter: bool,
    /// 한글 한 글자를 분해한 뒤 붙일 구분자
    #[serde(default = "default_compose_separator")]
    pub compose_separator: String,
}

fn default_latin_filter() -> bool {
    true
}

fn default_compose_separator() -> String {
    String::new()
}

impl Default for JasoConfig {
    fn default() -> Self {
        Self {
            latin_filter: default_latin_filter(),
            compose_separator: default_compose_separator(),
        }
    }
}

impl JasoConfig {
    /// 명령줄에서 지정한 값으로 덮어쓴 설정
    /// 지정하지 않은 항목(None)은 그대로 둔다
    pub fn with_overrides(
        mut self,
        latin_filter: Option<bool>,
        compose_separator: Option<String>,
    ) -> Self {
        if let Some(latin_filter) = latin_filter {
            self.latin_filter = latin_filter;
        }
        if let Some(separator) = compose_separator {
            self.compose_separator = separator;
        }
        self
    }
}

/// 설정 파일 경로
/// $XDG_CONFIG_HOME/jaso/config.json, 없으면 ~/.config/jaso/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |key: &str| {
        std::env::var(key)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("jaso").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> JasoConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => JasoConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            JasoConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<JasoConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    log::debug!("설정 로드: {}", path.display());
    Ok(config)
}

/// 지정한 경로에 설정 저장 (상위 디렉토리가 없으면 생성)
pub fn save_config_to(path: &Path, config: &JasoConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JasoConfig::default();
        assert!(config.latin_filter);
        assert_eq!(config.compose_separator, "");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = JasoConfig {
            latin_filter: false,
            compose_separator: "|".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: JasoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 구분자만 있는 설정 파일이면 필터는 기본값
        let json = r#"{"compose_separator": " "}"#;
        let config: JasoConfig = serde_json::from_str(json).unwrap();
        assert!(config.latin_filter);
        assert_eq!(config.compose_separator, " ");

        let config: JasoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, JasoConfig::default());
    }

    #[test]
    fn test_overrides_can_turn_filter_back_on() {
        let from_file = JasoConfig {
            latin_filter: false,
            compose_separator: "/".to_string(),
        };
        let config = from_file.clone().with_overrides(Some(true), None);
        assert!(config.latin_filter);
        assert_eq!(config.compose_separator, "/");

        let config = from_file.clone().with_overrides(None, None);
        assert_eq!(config, from_file);

        let config = JasoConfig::default().with_overrides(Some(false), Some(" ".to_string()));
        assert!(!config.latin_filter);
        assert_eq!(config.compose_separator, " ");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("jaso-config-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let config = JasoConfig {
            latin_filter: false,
            compose_separator: "/".to_string(),
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("jaso-config-test-does-not-exist.json");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json_is_json_error() {
        let path = std::env::temp_dir().join(format!("jaso-config-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("jaso/config.json"));
    }
}
