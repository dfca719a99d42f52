use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_kg};
use crate::scenario::{Metric, ScenarioMetrics};

/// 최대값 위로 남겨두는 y축 여유 비율.
pub const HEADROOM: f64 = 1.15;

/// 렌더링 픽셀 크기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 420,
        }
    }
}

impl ChartSize {
    /// RGB 버퍼 길이 [byte]
    pub fn rgb_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// 차트에 들어가는 표시 문자열 묶음. 언어 설정에 따라 채운다.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub avoided_title: String,
    pub valorized_title: String,
    pub revenue_title: String,
    pub baseline: String,
    pub projection: String,
    pub mass_axis: String,
    pub currency_axis: String,
    pub currency_symbol: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            avoided_title: "Avoided agrochemicals".into(),
            valorized_title: "Valorized material".into(),
            revenue_title: "Generated revenue".into(),
            baseline: "Baseline".into(),
            projection: "Projection".into(),
            mass_axis: "kg / year".into(),
            currency_axis: "currency / year".into(),
            currency_symbol: "$".into(),
        }
    }
}

impl ChartLabels {
    pub fn title(&self, metric: Metric) -> &str {
        match metric {
            Metric::AvoidedAgrochemicals => &self.avoided_title,
            Metric::ValorizedMaterial => &self.valorized_title,
            Metric::Revenue => &self.revenue_title,
        }
    }
}

/// 두 막대(기준값, 예측값) 비교 차트 한 장의 데이터.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub metric: Metric,
    pub title: String,
    pub baseline_label: String,
    pub projected_label: String,
    pub axis_desc: String,
    pub currency_symbol: String,
    pub baseline: f64,
    pub projected: f64,
}

impl ComparisonChart {
    pub fn new(metric: Metric, metrics: &ScenarioMetrics, labels: &ChartLabels) -> Self {
        let axis_desc = if metric.is_currency() {
            labels.currency_axis.clone()
        } else {
            labels.mass_axis.clone()
        };
        Self {
            metric,
            title: labels.title(metric).to_string(),
            baseline_label: labels.baseline.clone(),
            projected_label: labels.projection.clone(),
            axis_desc,
            currency_symbol: labels.currency_symbol.clone(),
            baseline: metric.baseline(),
            projected: metric.projected(metrics),
        }
    }

    pub fn values(&self) -> [f64; 2] {
        [self.baseline, self.projected]
    }

    /// y축 상한 = max(최대값 × 1.15, 지표별 최저 상한)
    pub fn y_upper(&self) -> f64 {
        let max = self.baseline.max(self.projected);
        (max * HEADROOM).max(self.metric.axis_floor())
    }

    /// 막대 위에 표시하는 값 문자열.
    pub fn value_label(&self, value: f64) -> String {
        if self.metric.is_currency() {
            format_currency(value, &self.currency_symbol)
        } else {
            format_kg(value)
        }
    }

    /// y축 눈금 소수 자릿수. 상한이 작으면 소수 1자리.
    pub fn axis_decimals(&self) -> usize {
        if self.y_upper() < 10.0 {
            1
        } else {
            0
        }
    }
}
