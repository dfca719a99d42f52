//! 시나리오 입력과 파생 지표 계산 모듈 모음.

pub mod inputs;
pub mod metrics;

pub use inputs::*;
pub use metrics::*;
