use crate::assets::LogoSlot;
use crate::chart::{ChartLabels, ComparisonChart};
use crate::scenario::{compute_metrics, Metric, ScenarioInput, ScenarioMetrics};

/// 한 번의 상호작용에 대해 화면에 그릴 모든 값.
///
/// 입력 → 지표 → 차트 순서로 왼쪽에서 오른쪽으로만 흐르며,
/// 로고 상태는 지표/차트 계산에 영향을 주지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub input: ScenarioInput,
    pub metrics: ScenarioMetrics,
    pub charts: [ComparisonChart; 3],
    pub logos: Vec<LogoSlot>,
}

impl DashboardSnapshot {
    pub fn build(input: &ScenarioInput, labels: &ChartLabels, logos: Vec<LogoSlot>) -> Self {
        let input = input.clamped();
        let metrics = compute_metrics(&input);
        let charts = Metric::ALL.map(|metric| ComparisonChart::new(metric, &metrics, labels));
        Self {
            input,
            metrics,
            charts,
            logos,
        }
    }

    pub fn chart(&self, metric: Metric) -> &ComparisonChart {
        match metric {
            Metric::AvoidedAgrochemicals => &self.charts[0],
            Metric::ValorizedMaterial => &self.charts[1],
            Metric::Revenue => &self.charts[2],
        }
    }

    /// 로드에 실패한 로고의 (주소, 메시지) 목록.
    pub fn logo_errors(&self) -> Vec<(&str, &str)> {
        self.logos
            .iter()
            .filter_map(|slot| match slot {
                LogoSlot::Failed { url, message } => Some((url.as_str(), message.as_str())),
                LogoSlot::Loaded(_) => None,
            })
            .collect()
    }
}
