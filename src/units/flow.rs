use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m3/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
}

const SECONDS_PER_HOUR: f64 = 3600.0;

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / SECONDS_PER_HOUR,
    }
}

fn from_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value * SECONDS_PER_HOUR,
    }
}

/// 체적 유량을 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let base = to_m3_per_s(value, from);
    from_m3_per_s(base, to)
}
