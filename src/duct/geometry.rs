use serde::{Deserialize, Serialize};

use super::error::DuctCalcError;
use crate::units::length::cm_to_m;

/// 사각 덕트 허용 종횡비(긴 변 / 짧은 변).
pub const MAX_ASPECT_RATIO: f64 = 4.0;

/// 덕트 형상 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuctShape {
    Rectangular,
    Round,
    Flexible,
}

impl DuctShape {
    /// 플렉시블 보정계수를 적용하는 형상인지 여부.
    pub fn is_derated(self) -> bool {
        matches!(self, DuctShape::Flexible)
    }
}

/// 형상별 원 치수 [cm].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DuctSize {
    Rectangular { width_cm: f64, height_cm: f64 },
    Round { diameter_cm: f64 },
    Flexible { diameter_cm: f64 },
}

impl DuctSize {
    pub fn shape(&self) -> DuctShape {
        match self {
            DuctSize::Rectangular { .. } => DuctShape::Rectangular,
            DuctSize::Round { .. } => DuctShape::Round,
            DuctSize::Flexible { .. } => DuctShape::Flexible,
        }
    }
}

/// 치수로부터 얻은 단면 특성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctGeometry {
    pub size: DuctSize,
    /// 단면적 [m2]
    pub area_m2: f64,
    /// 젖음 둘레 [m]
    pub perimeter_m: f64,
    /// 수력직경 [m]
    pub hydraulic_diameter_m: f64,
}

impl DuctGeometry {
    pub fn shape(&self) -> DuctShape {
        self.size.shape()
    }
}

/// 단면적, 젖음 둘레, 수력직경을 계산한다.
///
/// 사각 덕트의 종횡비가 4를 넘으면 `Ok(None)`을 돌려준다. 이는 정상적인 결과이며
/// 표에서는 빈 칸이 된다.
pub fn resolve(size: DuctSize) -> Result<Option<DuctGeometry>, DuctCalcError> {
    match size {
        DuctSize::Rectangular {
            width_cm,
            height_cm,
        } => {
            check_dimension("width", width_cm)?;
            check_dimension("height", height_cm)?;
            // 종횡비는 cm 값으로 비교한다. 정확히 4:1 은 허용.
            if width_cm / height_cm > MAX_ASPECT_RATIO || height_cm / width_cm > MAX_ASPECT_RATIO
            {
                return Ok(None);
            }
            let w = cm_to_m(width_cm);
            let h = cm_to_m(height_cm);
            let area = w * h;
            let perimeter = 2.0 * (w + h);
            Ok(Some(DuctGeometry {
                size,
                area_m2: area,
                perimeter_m: perimeter,
                hydraulic_diameter_m: 4.0 * area / perimeter,
            }))
        }
        DuctSize::Round { diameter_cm } | DuctSize::Flexible { diameter_cm } => {
            check_dimension("diameter", diameter_cm)?;
            let d = cm_to_m(diameter_cm);
            Ok(Some(DuctGeometry {
                size,
                area_m2: std::f64::consts::PI * (d / 2.0).powi(2),
                perimeter_m: std::f64::consts::PI * d,
                hydraulic_diameter_m: d,
            }))
        }
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), DuctCalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DuctCalcError::InvalidDimension { name, value })
    }
}
