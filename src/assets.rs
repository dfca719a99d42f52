//! 원격 로고 이미지 로더. 실패해도 화면의 나머지 부분은 계속 그린다.

/// 기본 로고 주소 (config.toml의 `logo_urls`로 교체 가능).
pub const DEFAULT_LOGO_URLS: [&str; 2] = [
    "https://www.example.org/assets/logos/cooperative.png",
    "https://www.example.org/assets/logos/university.png",
];

/// RGBA8로 디코딩된 로고.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLogo {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// 로고 한 개의 로드 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoSlot {
    Loaded(DecodedLogo),
    /// 화면에 그대로 표시할 오류 메시지
    Failed { url: String, message: String },
}

impl LogoSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LogoSlot::Loaded(_))
    }
}

/// 로고 로드 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum LogoError {
    /// 요청 실패 (연결, 잘못된 주소, 비정상 상태 코드)
    Request(reqwest::Error),
    /// 이미지 디코딩 실패
    Decode(image::ImageError),
}

impl std::fmt::Display for LogoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoError::Request(e) => write!(f, "logo request failed: {e}"),
            LogoError::Decode(e) => write!(f, "logo could not be decoded: {e}"),
        }
    }
}

impl std::error::Error for LogoError {}

impl From<reqwest::Error> for LogoError {
    fn from(value: reqwest::Error) -> Self {
        LogoError::Request(value)
    }
}

impl From<image::ImageError> for LogoError {
    fn from(value: image::ImageError) -> Self {
        LogoError::Decode(value)
    }
}

/// 바이트 열을 RGBA 이미지로 디코딩한다.
pub fn decode_logo(url: &str, bytes: &[u8]) -> Result<DecodedLogo, LogoError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedLogo {
        url: url.to_string(),
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// 인증 없이 동기식 GET으로 로고를 가져온다. 재시도는 하지 않는다.
pub fn fetch_logo(url: &str) -> Result<DecodedLogo, LogoError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    decode_logo(url, &bytes)
}

/// 모든 로고를 순서대로 가져온다. 실패는 슬롯에 기록할 뿐 전파하지 않는다.
pub fn load_logos<S: AsRef<str>>(urls: &[S]) -> Vec<LogoSlot> {
    urls.iter()
        .map(|url| {
            let url = url.as_ref();
            match fetch_logo(url) {
                Ok(logo) => {
                    tracing::info!(url, width = logo.width, height = logo.height, "logo loaded");
                    LogoSlot::Loaded(logo)
                }
                Err(e) => {
                    tracing::warn!(url, error = %e, "logo unavailable");
                    LogoSlot::Failed {
                        url: url.to_string(),
                        message: e.to_string(),
                    }
                }
            }
        })
        .collect()
}
