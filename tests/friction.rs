//! 마찰계수/유동영역 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use duct_sizing_toolbox::duct::friction::{altshul_tsal, laminar};
use duct_sizing_toolbox::duct::{classify, friction_factor, FlowRegime};

#[test]
fn regime_boundaries() {
    assert_eq!(FlowRegime::from_reynolds(1999.999), FlowRegime::Laminar);
    assert_eq!(FlowRegime::from_reynolds(2000.0), FlowRegime::Transitional);
    assert_eq!(FlowRegime::from_reynolds(4000.0), FlowRegime::Transitional);
    assert_eq!(FlowRegime::from_reynolds(4000.001), FlowRegime::Turbulent);
}

#[test]
fn classify_uses_velocity_times_diameter_over_viscosity() {
    let c = classify(10.0, 1.0, 0.000015);
    assert_relative_eq!(c.reynolds, 666_666.666_666_666_6, max_relative = 1e-12);
    assert_eq!(c.regime, FlowRegime::Turbulent);

    let slow = classify(0.02, 1.0, 0.000015);
    assert_eq!(slow.regime, FlowRegime::Laminar);
}

#[test]
fn laminar_is_exactly_64_over_re() {
    for re in [1.0, 10.0, 250.0, 1234.5, 1999.0] {
        assert_eq!(friction_factor(FlowRegime::Laminar, re, 0.001), 64.0 / re);
    }
}

#[test]
fn turbulent_is_exactly_altshul_tsal() {
    for (re, rr) in [(4001.0_f64, 0.0_f64), (50_000.0, 1e-4), (666_666.0, 1e-4), (2e6, 5e-3)] {
        let expected = 0.11 * (rr + 68.0 / re).powf(0.25);
        assert_eq!(friction_factor(FlowRegime::Turbulent, re, rr), expected);
    }
}

#[test]
fn transitional_band_is_continuous_at_edges() {
    let rr = 2e-4;
    let at_2000 = friction_factor(FlowRegime::Transitional, 2000.0, rr);
    assert_abs_diff_eq!(at_2000, laminar(2000.0), epsilon = 1e-15);

    let at_4000 = friction_factor(FlowRegime::Transitional, 4000.0, rr);
    assert_abs_diff_eq!(at_4000, altshul_tsal(rr, 4000.0), epsilon = 1e-15);
}

#[test]
fn transitional_midpoint_is_linear_blend_with_fixed_turbulent_endpoint() {
    let rr = 1e-3;
    let f1 = 64.0 / 2000.0;
    let f2 = 0.11 * (rr + 68.0 / 4000.0_f64).powf(0.25);
    let mid = friction_factor(FlowRegime::Transitional, 3000.0, rr);
    assert_relative_eq!(mid, (f1 + f2) / 2.0, max_relative = 1e-12);
    // 실제 Re(3000)로 평가한 난류식과는 다르다.
    assert!((mid - altshul_tsal(rr, 3000.0)).abs() > 1e-6);
}
