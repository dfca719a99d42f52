use serde::{Deserialize, Serialize};

/// 슬라이더 하나의 허용 범위와 기본값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl InputRange {
    /// 값을 범위 안으로 자른다. NaN/무한대는 기본값으로 대체한다.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 연간 생산량 [kg/년]
pub const PRODUCTION_RANGE: InputRange = InputRange {
    min: 1000.0,
    max: 20000.0,
    step: 100.0,
    default: 10000.0,
};

/// 대체 계수 [kg 농약 / kg 제품]
pub const SUBSTITUTION_RANGE: InputRange = InputRange {
    min: 0.1,
    max: 1.0,
    step: 0.05,
    default: 0.2,
};

/// 2차 원료 사용 비율 [%]
pub const SECONDARY_PCT_RANGE: InputRange = InputRange {
    min: 40.0,
    max: 70.0,
    step: 1.0,
    default: 60.0,
};

/// 판매 단가 [통화/kg]
pub const UNIT_PRICE_RANGE: InputRange = InputRange {
    min: 2000.0,
    max: 10000.0,
    step: 100.0,
    default: 3000.0,
};

/// 대시보드의 네 가지 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    /// 연간 생산량 [kg/년]
    pub production_kg_per_year: f64,
    /// 대체 계수 [kg/kg]
    pub substitution_factor: f64,
    /// 2차 원료 비율 [%]
    pub secondary_pct: f64,
    /// 판매 단가 [통화/kg]
    pub unit_price: f64,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            production_kg_per_year: PRODUCTION_RANGE.default,
            substitution_factor: SUBSTITUTION_RANGE.default,
            secondary_pct: SECONDARY_PCT_RANGE.default,
            unit_price: UNIT_PRICE_RANGE.default,
        }
    }
}

impl ScenarioInput {
    /// 모든 필드를 슬라이더 범위 안으로 맞춘 사본을 반환한다.
    pub fn clamped(&self) -> Self {
        Self {
            production_kg_per_year: PRODUCTION_RANGE.clamp(self.production_kg_per_year),
            substitution_factor: SUBSTITUTION_RANGE.clamp(self.substitution_factor),
            secondary_pct: SECONDARY_PCT_RANGE.clamp(self.secondary_pct),
            unit_price: UNIT_PRICE_RANGE.clamp(self.unit_price),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        PRODUCTION_RANGE.contains(self.production_kg_per_year)
            && SUBSTITUTION_RANGE.contains(self.substitution_factor)
            && SECONDARY_PCT_RANGE.contains(self.secondary_pct)
            && UNIT_PRICE_RANGE.contains(self.unit_price)
    }
}
