use serde::{Deserialize, Serialize};
use tracing::debug;

use super::airflow::evaluate_resolved;
use super::error::DuctCalcError;
use super::geometry::{self, DuctSize};
use super::params::ParameterSet;

/// 사각 덕트 가로/세로 치수 [cm]. 5~200cm, 5cm 간격.
pub const RECTANGULAR_SIDES_CM: [f64; 40] = [
    5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0,
    80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0, 130.0, 135.0, 140.0, 145.0,
    150.0, 155.0, 160.0, 165.0, 170.0, 175.0, 180.0, 185.0, 190.0, 195.0, 200.0,
];

/// 원형 덕트 표준 직경 [cm].
pub const ROUND_DIAMETERS_CM: [f64; 26] = [
    80.0, 100.0, 112.0, 125.0, 140.0, 150.0, 160.0, 180.0, 200.0, 224.0, 250.0, 280.0, 300.0,
    315.0, 355.0, 400.0, 450.0, 500.0, 560.0, 630.0, 710.0, 800.0, 900.0, 1000.0, 1120.0, 1250.0,
];

/// 플렉시블 덕트 표준 직경 [cm].
pub const FLEXIBLE_DIAMETERS_CM: [f64; 14] = [
    10.0, 12.5, 15.0, 16.0, 18.0, 20.0, 22.4, 25.0, 28.0, 31.5, 35.5, 40.0, 45.0, 50.0,
];

/// 사각 덕트 표의 한 행(세로 치수 고정).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularRow {
    pub height_cm: f64,
    /// `widths_cm` 순서의 풍량 [m3/h]. 종횡비 초과 칸은 None.
    pub cells: Vec<Option<u64>>,
}

/// 세로(행) × 가로(열) 풍량 표.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularTable {
    pub widths_cm: Vec<f64>,
    pub rows: Vec<RectangularRow>,
}

impl RectangularTable {
    /// (세로, 가로) 칸의 풍량. 표에 없는 치수거나 빈 칸이면 None.
    pub fn cell(&self, height_cm: f64, width_cm: f64) -> Option<u64> {
        let col = self.widths_cm.iter().position(|w| *w == width_cm)?;
        self.rows
            .iter()
            .find(|row| row.height_cm == height_cm)
            .and_then(|row| row.cells.get(col).copied().flatten())
    }

    /// 빈 칸 개수.
    pub fn absent_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|c| c.is_none()).count())
            .sum()
    }
}

/// 원형/플렉시블 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularRow {
    pub diameter_cm: f64,
    pub airflow_m3_per_h: u64,
    pub velocity_m_per_s: f64,
}

/// 한 번의 재계산으로 만들어지는 세 표 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuctTables {
    pub rectangular: RectangularTable,
    pub round: Vec<CircularRow>,
    pub flexible: Vec<CircularRow>,
}

/// 파라미터를 검증한 뒤 세 표를 모두 새로 만든다.
///
/// 같은 입력이면 항상 같은 결과를 낸다. 이전 결과에 의존하지 않는다.
pub fn regenerate(params: &ParameterSet) -> Result<DuctTables, DuctCalcError> {
    params.validate()?;

    let rectangular = rectangular_table(params)?;
    let round = circular_rows(&ROUND_DIAMETERS_CM, params, |diameter_cm| DuctSize::Round {
        diameter_cm,
    })?;
    let flexible = circular_rows(&FLEXIBLE_DIAMETERS_CM, params, |diameter_cm| {
        DuctSize::Flexible { diameter_cm }
    })?;

    debug!(
        ?params,
        rectangular_rows = rectangular.rows.len(),
        rectangular_absent = rectangular.absent_count(),
        round_rows = round.len(),
        flexible_rows = flexible.len(),
        "duct tables regenerated"
    );

    Ok(DuctTables {
        rectangular,
        round,
        flexible,
    })
}

fn rectangular_table(params: &ParameterSet) -> Result<RectangularTable, DuctCalcError> {
    let mut rows = Vec::with_capacity(RECTANGULAR_SIDES_CM.len());
    for &height_cm in &RECTANGULAR_SIDES_CM {
        let mut cells = Vec::with_capacity(RECTANGULAR_SIDES_CM.len());
        for &width_cm in &RECTANGULAR_SIDES_CM {
            let cell = geometry::resolve(DuctSize::Rectangular {
                width_cm,
                height_cm,
            })?
            .map(|geom| evaluate_resolved(geom, params).flow().airflow_m3_per_h);
            cells.push(cell);
        }
        rows.push(RectangularRow { height_cm, cells });
    }
    Ok(RectangularTable {
        widths_cm: RECTANGULAR_SIDES_CM.to_vec(),
        rows,
    })
}

fn circular_rows(
    diameters_cm: &[f64],
    params: &ParameterSet,
    make_size: impl Fn(f64) -> DuctSize,
) -> Result<Vec<CircularRow>, DuctCalcError> {
    diameters_cm
        .iter()
        .filter_map(|&diameter_cm| match geometry::resolve(make_size(diameter_cm)) {
            Ok(Some(geom)) => {
                let flow = evaluate_resolved(geom, params).flow();
                Some(Ok(CircularRow {
                    diameter_cm,
                    airflow_m3_per_h: flow.airflow_m3_per_h,
                    velocity_m_per_s: flow.velocity_m_per_s,
                }))
            }
            // 원형 단면은 종횡비 제한이 없다.
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}
