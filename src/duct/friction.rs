use super::regime::{FlowRegime, LAMINAR_LIMIT, TURBULENT_LIMIT};

/// 층류 마찰계수 f = 64 / Re
pub fn laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

/// Altshul-Tsal 근사: f = 0.11 * (ε/D + 68/Re)^0.25
pub fn altshul_tsal(relative_roughness: f64, reynolds: f64) -> f64 {
    0.11 * (relative_roughness + 68.0 / reynolds).powf(0.25)
}

/// 유동 영역별 Darcy 마찰계수를 계산한다.
///
/// 천이 영역은 Re=2000의 층류 값과 Re=4000의 난류 값을 (Re - 2000)/2000 비율로
/// 선형 보간한다. 난류 끝점은 실제 Re가 아니라 고정된 4000에서 평가한다.
pub fn friction_factor(regime: FlowRegime, reynolds: f64, relative_roughness: f64) -> f64 {
    match regime {
        FlowRegime::Laminar => laminar(reynolds),
        FlowRegime::Turbulent => altshul_tsal(relative_roughness, reynolds),
        FlowRegime::Transitional => {
            let f_lam = laminar(LAMINAR_LIMIT);
            let f_turb = altshul_tsal(relative_roughness, TURBULENT_LIMIT);
            let span = TURBULENT_LIMIT - LAMINAR_LIMIT;
            f_lam + (reynolds - LAMINAR_LIMIT) * (f_turb - f_lam) / span
        }
    }
}
