use tracing::trace;

use super::capacity::{self, CapacityInput, CapacityResult, FlowResult};
use super::error::DuctCalcError;
use super::friction::friction_factor;
use super::geometry::{self, DuctGeometry, DuctSize};
use super::params::ParameterSet;
use super::regime::{classify, RegimeClassification};

/// 덕트 하나에 대한 전체 계산 과정과 중간값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctEvaluation {
    pub geometry: DuctGeometry,
    pub classification: RegimeClassification,
    /// 유효 조도 / 수력직경
    pub relative_roughness: f64,
    pub friction_factor: f64,
    pub capacity: CapacityResult,
}

impl DuctEvaluation {
    pub fn flow(&self) -> FlowResult {
        self.capacity.rounded()
    }
}

/// 치수 → 수력직경 → Re → 마찰계수 → 허용 풍량을 한 번에 계산한다.
///
/// 파라미터는 호출 측에서 검증되었다고 가정하지 않고 매번 확인한다.
/// 종횡비 초과 사각 덕트는 `Ok(None)`.
pub fn evaluate(
    size: DuctSize,
    params: &ParameterSet,
) -> Result<Option<DuctEvaluation>, DuctCalcError> {
    params.validate()?;
    Ok(geometry::resolve(size)?.map(|geometry| evaluate_resolved(geometry, params)))
}

/// 반올림된 풍량/유속만 필요할 때 쓴다.
pub fn max_airflow(
    size: DuctSize,
    params: &ParameterSet,
) -> Result<Option<FlowResult>, DuctCalcError> {
    Ok(evaluate(size, params)?.map(|eval| eval.flow()))
}

/// 검증된 파라미터와 해석된 형상으로 나머지 단계를 수행한다.
pub(crate) fn evaluate_resolved(geometry: DuctGeometry, params: &ParameterSet) -> DuctEvaluation {
    let derated = geometry.shape().is_derated();
    let effective_roughness = if derated {
        params.roughness_m * params.flex_derate_factor
    } else {
        params.roughness_m
    };

    let classification = classify(
        params.velocity_m_per_s,
        geometry.hydraulic_diameter_m,
        params.kinematic_viscosity_m2_per_s,
    );
    let relative_roughness = effective_roughness / geometry.hydraulic_diameter_m;
    let f = friction_factor(
        classification.regime,
        classification.reynolds,
        relative_roughness,
    );

    let capacity = capacity::solve(CapacityInput {
        friction_factor: f,
        hydraulic_diameter_m: geometry.hydraulic_diameter_m,
        area_m2: geometry.area_m2,
        pressure_drop_pa_per_m: params.pressure_drop_pa_per_m,
        density_kg_per_m3: params.density_kg_per_m3,
        velocity_ceiling_m_per_s: params.velocity_m_per_s,
        derate_factor: derated.then_some(params.flex_derate_factor),
    });

    trace!(
        size = ?geometry.size,
        reynolds = classification.reynolds,
        regime = ?classification.regime,
        friction_factor = f,
        velocity = capacity.velocity_m_per_s,
        airflow = capacity.airflow_m3_per_h,
        "duct evaluated"
    );

    DuctEvaluation {
        geometry,
        classification,
        relative_roughness,
        friction_factor: f,
        capacity,
    }
}
