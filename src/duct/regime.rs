use serde::{Deserialize, Serialize};

/// 이 값 미만이면 층류.
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// 이 값 초과면 난류.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수로 영역을 판정한다. 2000과 4000 자체는 천이 영역이다.
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds > TURBULENT_LIMIT {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Transitional
        }
    }
}

/// 레이놀즈수 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeClassification {
    pub reynolds: f64,
    pub regime: FlowRegime,
}

/// Re = v * Dh / ν 를 계산하고 유동 영역을 판정한다.
///
/// 유속은 설계 최대 유속을 그대로 쓴다. 압력손실로 줄어든 실제 유속으로 다시
/// 판정하지 않는 1회 근사이다.
pub fn classify(
    velocity_m_per_s: f64,
    hydraulic_diameter_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> RegimeClassification {
    let reynolds = velocity_m_per_s * hydraulic_diameter_m / kinematic_viscosity_m2_per_s;
    RegimeClassification {
        reynolds,
        regime: FlowRegime::from_reynolds(reynolds),
    }
}
