use serde::{Deserialize, Serialize};

use super::error::DuctCalcError;

/// 덕트 계산 입력 파라미터 묶음.
///
/// 계산 엔진은 이 값을 절대 수정하지 않는다. 값을 바꾸려면 새 인스턴스를 만들어
/// 통째로 교체한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// 설계 최대 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 단위 길이당 허용 압력손실 [Pa/m]
    pub pressure_drop_pa_per_m: f64,
    /// 절대 조도 [m]
    pub roughness_m: f64,
    /// 플렉시블 덕트 보정계수 (>= 1)
    pub flex_derate_factor: f64,
    /// 공기 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 공기 동점성계수 [m2/s]
    pub kinematic_viscosity_m2_per_s: f64,
}

pub const DEFAULT_VELOCITY_M_PER_S: f64 = 10.0;
pub const DEFAULT_PRESSURE_DROP_PA_PER_M: f64 = 1.2;
pub const DEFAULT_ROUGHNESS_M: f64 = 0.0001;
pub const DEFAULT_FLEX_DERATE_FACTOR: f64 = 1.5;
pub const DEFAULT_DENSITY_KG_PER_M3: f64 = 1.2;
pub const DEFAULT_KINEMATIC_VISCOSITY_M2_PER_S: f64 = 0.000015;

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            velocity_m_per_s: DEFAULT_VELOCITY_M_PER_S,
            pressure_drop_pa_per_m: DEFAULT_PRESSURE_DROP_PA_PER_M,
            roughness_m: DEFAULT_ROUGHNESS_M,
            flex_derate_factor: DEFAULT_FLEX_DERATE_FACTOR,
            density_kg_per_m3: DEFAULT_DENSITY_KG_PER_M3,
            kinematic_viscosity_m2_per_s: DEFAULT_KINEMATIC_VISCOSITY_M2_PER_S,
        }
    }
}

/// 권장 범위를 벗어난 파라미터 알림. 계산은 그대로 진행된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterAdvisory {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for ParameterAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} = {} 이(가) 권장 범위 [{}, {}] 밖입니다",
            self.field, self.value, self.min, self.max
        )
    }
}

impl ParameterSet {
    /// (필드명, 값) 목록. 검증과 출력에서 같은 순서를 쓴다.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("velocity_m_per_s", self.velocity_m_per_s),
            ("pressure_drop_pa_per_m", self.pressure_drop_pa_per_m),
            ("roughness_m", self.roughness_m),
            ("flex_derate_factor", self.flex_derate_factor),
            ("density_kg_per_m3", self.density_kg_per_m3),
            (
                "kinematic_viscosity_m2_per_s",
                self.kinematic_viscosity_m2_per_s,
            ),
        ]
    }

    /// 모든 값이 0보다 큰 유한한 수인지, 보정계수가 1 이상인지 확인한다.
    pub fn validate(&self) -> Result<(), DuctCalcError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(DuctCalcError::InvalidParameter { field, value });
            }
        }
        if self.flex_derate_factor < 1.0 {
            return Err(DuctCalcError::DerateBelowOne {
                field: "flex_derate_factor",
                value: self.flex_derate_factor,
            });
        }
        Ok(())
    }

    /// 검증을 통과한 경우에만 자기 자신을 돌려준다.
    pub fn validated(self) -> Result<Self, DuctCalcError> {
        self.validate()?;
        Ok(self)
    }

    /// 입력 화면의 권장 범위를 벗어난 항목을 모은다.
    pub fn advisories(&self) -> Vec<ParameterAdvisory> {
        self.fields()
            .into_iter()
            .zip(RECOMMENDED_RANGES)
            .filter(|((_, value), (min, max))| value < min || value > max)
            .map(|((field, value), (min, max))| ParameterAdvisory {
                field,
                value,
                min,
                max,
            })
            .collect()
    }
}

// fields() 순서와 동일해야 한다.
const RECOMMENDED_RANGES: [(f64, f64); 6] = [
    (1.0, 20.0),
    (0.1, 5.0),
    (0.00001, 0.001),
    (1.0, 3.0),
    (0.8, 1.5),
    (0.00001, 0.0001),
];
