use serde::{Deserialize, Serialize};

use crate::units::{convert_flow, FlowUnit};

/// 허용 유속 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct CapacityInput {
    pub friction_factor: f64,
    /// 수력직경 [m]
    pub hydraulic_diameter_m: f64,
    /// 단면적 [m2]
    pub area_m2: f64,
    /// 허용 압력손실 [Pa/m]
    pub pressure_drop_pa_per_m: f64,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 설계 최대 유속 [m/s]
    pub velocity_ceiling_m_per_s: f64,
    /// 플렉시블 덕트일 때만 Some
    pub derate_factor: Option<f64>,
}

/// 허용 유속 계산 결과(반올림 전).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityResult {
    /// 압력손실 기준 최대 유속(보정계수 적용 후) [m/s]
    pub pressure_limited_velocity_m_per_s: f64,
    /// 설계 유속 = min(최대 유속, 압력손실 기준 유속) [m/s]
    pub velocity_m_per_s: f64,
    /// 풍량 [m3/h]
    pub airflow_m3_per_h: f64,
}

/// 표에 싣는 반올림된 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// 풍량 [m3/h], 정수 반올림
    pub airflow_m3_per_h: u64,
    /// 실제 유속 [m/s], 소수 첫째 자리 반올림
    pub velocity_m_per_s: f64,
}

impl CapacityResult {
    pub fn rounded(&self) -> FlowResult {
        FlowResult {
            airflow_m3_per_h: self.airflow_m3_per_h.round() as u64,
            velocity_m_per_s: round_to_tenth(self.velocity_m_per_s),
        }
    }
}

/// Darcy-Weisbach 식 Δp/L = f ρ v² / (2D) 을 v 에 대해 푼다.
pub fn pressure_limited_velocity(
    friction_factor: f64,
    hydraulic_diameter_m: f64,
    pressure_drop_pa_per_m: f64,
    density_kg_per_m3: f64,
) -> f64 {
    (2.0 * pressure_drop_pa_per_m * hydraulic_diameter_m / (friction_factor * density_kg_per_m3))
        .sqrt()
}

/// 압력손실 한계와 설계 최대 유속 중 작은 쪽으로 유속을 정하고 풍량을 구한다.
pub fn solve(input: CapacityInput) -> CapacityResult {
    let mut v_max = pressure_limited_velocity(
        input.friction_factor,
        input.hydraulic_diameter_m,
        input.pressure_drop_pa_per_m,
        input.density_kg_per_m3,
    );
    if let Some(derate) = input.derate_factor {
        v_max /= derate;
    }
    let velocity = input.velocity_ceiling_m_per_s.min(v_max);
    let airflow_m3_s = velocity * input.area_m2;
    CapacityResult {
        pressure_limited_velocity_m_per_s: v_max,
        velocity_m_per_s: velocity,
        airflow_m3_per_h: convert_flow(
            airflow_m3_s,
            FlowUnit::CubicMeterPerSecond,
            FlowUnit::CubicMeterPerHour,
        ),
    }
}

/// 소수 첫째 자리 반올림. 상한 유속 검사는 반올림 전 값 기준이다.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
