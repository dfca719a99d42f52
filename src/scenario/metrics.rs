use super::inputs::ScenarioInput;

/// 구축된 협력 관계 수 (입력과 무관한 고정값).
pub const PARTNERSHIP_COUNT: u32 = 5;
/// 산업 공생 연계 수 (입력과 무관한 고정값).
pub const SYMBIOSIS_COUNT: u32 = 6;

/// 프로젝트 개입이 없을 때의 기준값. 다시 계산하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub avoided_agrochemicals_kg: f64,
    pub valorized_material_kg: f64,
    pub revenue: f64,
}

pub const BASELINE: Baseline = Baseline {
    avoided_agrochemicals_kg: 0.0,
    valorized_material_kg: 800.0,
    revenue: 0.0,
};

/// 현재 입력에 대한 예측 지표.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioMetrics {
    /// 회피된 농약 사용량 [kg/년]
    pub avoided_agrochemicals_kg: f64,
    /// 가치화된 2차 원료량 [kg/년]
    pub valorized_material_kg: f64,
    /// 연간 매출 [통화/년]
    pub revenue: f64,
    pub partnerships: u32,
    pub symbioses: u32,
}

/// 네 입력으로 파생 지표를 계산한다. 오류 경로는 없다.
pub fn compute_metrics(input: &ScenarioInput) -> ScenarioMetrics {
    let volume = input.production_kg_per_year;
    ScenarioMetrics {
        avoided_agrochemicals_kg: volume * input.substitution_factor,
        valorized_material_kg: volume * (input.secondary_pct / 100.0),
        revenue: volume * input.unit_price,
        partnerships: PARTNERSHIP_COUNT,
        symbioses: SYMBIOSIS_COUNT,
    }
}

/// 기준값과 비교해 차트로 그리는 세 지표.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    AvoidedAgrochemicals,
    ValorizedMaterial,
    Revenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::AvoidedAgrochemicals,
        Metric::ValorizedMaterial,
        Metric::Revenue,
    ];

    pub fn baseline(self) -> f64 {
        match self {
            Metric::AvoidedAgrochemicals => BASELINE.avoided_agrochemicals_kg,
            Metric::ValorizedMaterial => BASELINE.valorized_material_kg,
            Metric::Revenue => BASELINE.revenue,
        }
    }

    pub fn projected(self, metrics: &ScenarioMetrics) -> f64 {
        match self {
            Metric::AvoidedAgrochemicals => metrics.avoided_agrochemicals_kg,
            Metric::ValorizedMaterial => metrics.valorized_material_kg,
            Metric::Revenue => metrics.revenue,
        }
    }

    /// 예측값 - 기준값
    pub fn delta(self, metrics: &ScenarioMetrics) -> f64 {
        self.projected(metrics) - self.baseline()
    }

    /// y축 상한의 최저값. 값이 모두 0이어도 축이 보이도록 한다.
    pub fn axis_floor(self) -> f64 {
        match self {
            Metric::AvoidedAgrochemicals => 1.0,
            Metric::ValorizedMaterial => 100.0,
            Metric::Revenue => 100_000.0,
        }
    }

    /// 내보내기 파일 이름의 stem.
    pub fn file_stem(self) -> &'static str {
        match self {
            Metric::AvoidedAgrochemicals => "avoided_agrochemicals",
            Metric::ValorizedMaterial => "valorized_material",
            Metric::Revenue => "revenue",
        }
    }

    pub fn is_currency(self) -> bool {
        matches!(self, Metric::Revenue)
    }
}
