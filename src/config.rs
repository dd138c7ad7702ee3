use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::duct::{DuctCalcError, ParameterSet};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// 덕트 계산 파라미터
    pub parameters: ParameterSet,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 파라미터 값이 유효하지 않음
    #[error("{0}")]
    Invalid(#[from] DuctCalcError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

/// TOML 문자열을 설정으로 읽고 파라미터를 검증한다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    cfg.parameters.validate()?;
    for advisory in cfg.parameters.advisories() {
        warn!(%advisory, "configured parameter outside recommended range");
    }
    Ok(cfg)
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
