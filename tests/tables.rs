//! 표 생성과 스냅샷 교체 테스트.
use duct_sizing_toolbox::duct::table::{
    FLEXIBLE_DIAMETERS_CM, RECTANGULAR_SIDES_CM, ROUND_DIAMETERS_CM,
};
use duct_sizing_toolbox::duct::{regenerate, DuctCalcError, ParameterSet, TableSession};

#[test]
fn table_shapes_are_fixed() {
    for params in [
        ParameterSet::default(),
        ParameterSet {
            velocity_m_per_s: 2.0,
            pressure_drop_pa_per_m: 0.3,
            ..ParameterSet::default()
        },
    ] {
        let tables = regenerate(&params).expect("tables");
        assert_eq!(tables.rectangular.widths_cm.len(), 40);
        assert_eq!(tables.rectangular.rows.len(), 40);
        assert!(tables.rectangular.rows.iter().all(|r| r.cells.len() == 40));
        assert_eq!(tables.round.len(), 26);
        assert_eq!(tables.flexible.len(), 14);
    }
}

#[test]
fn dimension_sets_are_in_order() {
    assert_eq!(RECTANGULAR_SIDES_CM[0], 5.0);
    assert_eq!(RECTANGULAR_SIDES_CM[39], 200.0);
    assert!(RECTANGULAR_SIDES_CM.windows(2).all(|w| w[1] - w[0] == 5.0));

    let tables = regenerate(&ParameterSet::default()).expect("tables");
    let round: Vec<f64> = tables.round.iter().map(|r| r.diameter_cm).collect();
    assert_eq!(round, ROUND_DIAMETERS_CM.to_vec());
    let flex: Vec<f64> = tables.flexible.iter().map(|r| r.diameter_cm).collect();
    assert_eq!(flex, FLEXIBLE_DIAMETERS_CM.to_vec());
}

#[test]
fn rectangular_cells_follow_aspect_ratio() {
    let tables = regenerate(&ParameterSet::default()).expect("tables");
    let rect = &tables.rectangular;
    assert_eq!(rect.cell(5.0, 5.0), Some(17));
    assert_eq!(rect.cell(10.0, 20.0), Some(252));
    assert_eq!(rect.cell(5.0, 20.0), rect.cell(20.0, 5.0));
    assert_eq!(rect.cell(5.0, 25.0), None);
    assert_eq!(rect.cell(200.0, 45.0), None);
    assert_eq!(rect.cell(200.0, 50.0), Some(rect.cell(50.0, 200.0).expect("present")));
    // 표에 없는 치수
    assert_eq!(rect.cell(7.0, 5.0), None);

    for (i, row) in rect.rows.iter().enumerate() {
        for (j, cell) in row.cells.iter().enumerate() {
            let (h, w) = (RECTANGULAR_SIDES_CM[i], RECTANGULAR_SIDES_CM[j]);
            assert_eq!(cell.is_none(), w.max(h) / w.min(h) > 4.0, "{w}x{h}");
        }
    }
}

#[test]
fn regeneration_is_deterministic() {
    let params = ParameterSet::default();
    assert_eq!(regenerate(&params).expect("a"), regenerate(&params).expect("b"));
}

#[test]
fn regenerate_rejects_invalid_parameters() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let params = ParameterSet {
            density_kg_per_m3: bad,
            ..ParameterSet::default()
        };
        assert!(matches!(
            regenerate(&params),
            Err(DuctCalcError::InvalidParameter {
                field: "density_kg_per_m3",
                ..
            })
        ));
    }
}

#[test]
fn session_swaps_parameters_and_tables_together() {
    let mut session = TableSession::new(ParameterSet::default()).expect("session");
    let old_tables = session.tables();
    let old_params = session.parameters();

    let next = ParameterSet {
        velocity_m_per_s: 4.0,
        ..ParameterSet::default()
    };
    session.update(next).expect("update");

    assert_eq!(*session.parameters(), next);
    assert_eq!(*session.tables(), regenerate(&next).expect("tables"));
    // 이전 스냅샷을 들고 있던 쪽은 완전한 이전 값을 그대로 본다.
    assert_eq!(*old_params, ParameterSet::default());
    assert_eq!(*old_tables, regenerate(&ParameterSet::default()).expect("tables"));
}

#[test]
fn session_keeps_previous_snapshot_on_invalid_update() {
    let mut session = TableSession::new(ParameterSet::default()).expect("session");
    let before = session.tables();

    let bad = ParameterSet {
        flex_derate_factor: 0.5,
        ..ParameterSet::default()
    };
    assert!(matches!(
        session.update(bad),
        Err(DuctCalcError::DerateBelowOne { .. })
    ));
    assert_eq!(*session.parameters(), ParameterSet::default());
    assert_eq!(*session.tables(), *before);
}

#[test]
fn session_reset_restores_defaults() {
    let mut session = TableSession::new(ParameterSet {
        pressure_drop_pa_per_m: 3.0,
        ..ParameterSet::default()
    })
    .expect("session");
    session.reset().expect("reset");
    assert_eq!(*session.parameters(), ParameterSet::default());
    assert_eq!(session.tables().round[1].airflow_m3_per_h, 28_274);
}
