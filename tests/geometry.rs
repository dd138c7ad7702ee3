//! 단면 해석(면적, 수력직경, 종횡비) 테스트.
use approx::assert_relative_eq;
use duct_sizing_toolbox::duct::table::RECTANGULAR_SIDES_CM;
use duct_sizing_toolbox::duct::{resolve, DuctCalcError, DuctShape, DuctSize};

#[test]
fn round_duct_hydraulic_diameter_equals_diameter() {
    let g = resolve(DuctSize::Round { diameter_cm: 100.0 })
        .expect("valid")
        .expect("present");
    assert_relative_eq!(g.hydraulic_diameter_m, 1.0);
    assert_relative_eq!(g.area_m2, std::f64::consts::PI * 0.25, max_relative = 1e-12);
    assert_eq!(g.shape(), DuctShape::Round);
}

#[test]
fn flexible_duct_uses_circular_section() {
    let g = resolve(DuctSize::Flexible { diameter_cm: 12.5 })
        .expect("valid")
        .expect("present");
    assert_relative_eq!(g.hydraulic_diameter_m, 0.125, max_relative = 1e-12);
    assert!(g.shape().is_derated());
}

#[test]
fn rectangular_hydraulic_diameter() {
    let g = resolve(DuctSize::Rectangular {
        width_cm: 100.0,
        height_cm: 50.0,
    })
    .expect("valid")
    .expect("present");
    assert_relative_eq!(g.area_m2, 0.5, max_relative = 1e-12);
    assert_relative_eq!(g.perimeter_m, 3.0, max_relative = 1e-12);
    assert_relative_eq!(g.hydraulic_diameter_m, 2.0 / 3.0, max_relative = 1e-12);
}

#[test]
fn exactly_four_to_one_is_allowed() {
    let size = DuctSize::Rectangular {
        width_cm: 5.0,
        height_cm: 20.0,
    };
    assert!(resolve(size).expect("valid").is_some());
}

#[test]
fn aspect_ratio_property_over_grid() {
    for &h in &RECTANGULAR_SIDES_CM {
        for &w in &RECTANGULAR_SIDES_CM {
            let g = resolve(DuctSize::Rectangular {
                width_cm: w,
                height_cm: h,
            })
            .expect("valid");
            let ratio = w.max(h) / w.min(h);
            if ratio > 4.0 {
                assert!(g.is_none(), "{w}x{h} should be absent");
            } else {
                let g = g.unwrap_or_else(|| panic!("{w}x{h} should be present"));
                assert!(g.area_m2 > 0.0 && g.hydraulic_diameter_m > 0.0);
            }
        }
    }
}

#[test]
fn non_positive_dimension_is_rejected() {
    let err = resolve(DuctSize::Round { diameter_cm: 0.0 }).unwrap_err();
    assert!(matches!(err, DuctCalcError::InvalidDimension { name: "diameter", .. }));

    let err = resolve(DuctSize::Rectangular {
        width_cm: 10.0,
        height_cm: f64::NAN,
    })
    .unwrap_err();
    assert!(matches!(err, DuctCalcError::InvalidDimension { name: "height", .. }));
}
