//! 기준값 대비 예측값 비교 막대 차트.

pub mod export;
pub mod model;
pub mod render;

pub use export::*;
pub use model::*;
pub use render::*;

/// 차트 렌더링/내보내기 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ChartError {
    /// 폭 또는 높이가 0
    EmptyCanvas,
    /// plotters 그리기 오류
    Draw(String),
    /// 픽셀 버퍼 길이가 크기와 맞지 않음
    BufferSize { expected: usize, actual: usize },
    /// PNG 인코딩 오류
    Encode(image::ImageError),
    /// 파일 입출력 오류
    Io(std::io::Error),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::EmptyCanvas => write!(f, "chart size must be non-zero"),
            ChartError::Draw(e) => write!(f, "chart drawing failed: {e}"),
            ChartError::BufferSize { expected, actual } => {
                write!(f, "pixel buffer has {actual} bytes, expected {expected}")
            }
            ChartError::Encode(e) => write!(f, "PNG encoding failed: {e}"),
            ChartError::Io(e) => write!(f, "file write failed: {e}"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<image::ImageError> for ChartError {
    fn from(value: image::ImageError) -> Self {
        ChartError::Encode(value)
    }
}

impl From<std::io::Error> for ChartError {
    fn from(value: std::io::Error) -> Self {
        ChartError::Io(value)
    }
}
