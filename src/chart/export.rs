use std::fs;
use std::io::Cursor;
use std::path::Path;

use super::model::{ChartSize, ComparisonChart};
use super::render::render_rgb;
use super::ChartError;
use crate::scenario::Metric;

/// RGB 버퍼를 메모리 내 PNG 바이트로 직렬화한다.
pub fn encode_png(rgb: Vec<u8>, size: ChartSize) -> Result<Vec<u8>, ChartError> {
    let expected = size.rgb_len();
    let actual = rgb.len();
    let img = image::RgbImage::from_raw(size.width, size.height, rgb)
        .ok_or(ChartError::BufferSize { expected, actual })?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageOutputFormat::Png)?;
    Ok(out.into_inner())
}

/// 차트를 그린 뒤 PNG 바이트로 반환한다 (다운로드용).
pub fn png_bytes(chart: &ComparisonChart, size: ChartSize) -> Result<Vec<u8>, ChartError> {
    let rgb = render_rgb(chart, size)?;
    encode_png(rgb, size)
}

/// 지표별 기본 내보내기 파일 이름.
pub fn file_name(metric: Metric) -> String {
    format!("{}.png", metric.file_stem())
}

/// 차트를 PNG 파일로 저장한다.
pub fn write_png(chart: &ComparisonChart, size: ChartSize, path: &Path) -> Result<(), ChartError> {
    let bytes = png_bytes(chart, size)?;
    fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "chart exported");
    Ok(())
}
