use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::assets::DEFAULT_LOGO_URLS;
use crate::chart::ChartSize;
use crate::scenario::ScenarioInput;

pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/es)
    pub language: String,
    /// 사용자 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    /// 상단에 표시할 원격 로고 주소
    pub logo_urls: Vec<String>,
    /// 매출 표기에 쓰는 통화 기호
    pub currency_symbol: String,
    /// 차트 렌더링/내보내기 크기
    pub chart: ChartSize,
    /// 시작 시 슬라이더 위치
    pub initial: ScenarioInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            logo_urls: DEFAULT_LOGO_URLS.iter().map(|s| s.to_string()).collect(),
            currency_symbol: "$".into(),
            chart: ChartSize::default(),
            initial: ScenarioInput::default(),
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

/// TOML 문자열에서 설정을 읽는다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    Ok(cfg)
}

/// 주어진 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 반환한다.
///
/// 설정 파일은 읽기만 하며 프로그램이 다시 쓰지 않는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = parse(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

/// 작업 디렉터리의 config.toml을 로드하거나 없으면 기본 설정을 사용한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}
