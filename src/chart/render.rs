use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::model::{ChartSize, ComparisonChart};
use super::ChartError;
use crate::format::group_thousands;

const BASELINE_COLOR: RGBColor = RGBColor(158, 158, 158);
const PROJECTION_COLOR: RGBColor = RGBColor(46, 125, 50);
const FONT: &str = "sans-serif";

/// 차트를 RGB(픽셀당 3바이트) 버퍼로 그린다.
pub fn render_rgb(chart: &ComparisonChart, size: ChartSize) -> Result<Vec<u8>, ChartError> {
    if size.width == 0 || size.height == 0 {
        return Err(ChartError::EmptyCanvas);
    }
    let mut buf = vec![0u8; size.rgb_len()];
    draw(chart, &mut buf, (size.width, size.height))
        .map_err(|e| ChartError::Draw(e.to_string()))?;
    tracing::debug!(metric = ?chart.metric, width = size.width, height = size.height, "chart rendered");
    Ok(buf)
}

fn draw(
    chart: &ComparisonChart,
    buf: &mut [u8],
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::with_buffer(buf, size).into_drawing_area();
    root.fill(&WHITE)?;

    let y_upper = chart.y_upper();
    let decimals = chart.axis_decimals();
    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.title.as_str(), (FONT, 22))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(84)
        .build_cartesian_2d((0u32..1u32).into_segmented(), 0f64..y_upper)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.1))
        .light_line_style(TRANSPARENT)
        .x_labels(2)
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(0) => chart.baseline_label.clone(),
            SegmentValue::CenterOf(_) => chart.projected_label.clone(),
            _ => String::new(),
        })
        .y_desc(chart.axis_desc.as_str())
        .y_label_formatter(&|y| group_thousands(*y, decimals))
        .label_style((FONT, 14))
        .draw()?;

    let colors = [BASELINE_COLOR, PROJECTION_COLOR];
    ctx.draw_series(
        chart
            .values()
            .into_iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (value, color))| {
                let i = i as u32;
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), value)],
                    color.filled(),
                );
                bar.set_margin(0, 0, 36, 36);
                bar
            }),
    )?;

    let label_style =
        TextStyle::from((FONT, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.values().into_iter().enumerate().map(|(i, value)| {
        Text::new(
            chart.value_label(value),
            (SegmentValue::CenterOf(i as u32), value),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}
