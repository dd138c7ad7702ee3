//! 덕트 허용 풍량 계산 모듈 모음.
//!
//! 치수 → 수력직경 → 레이놀즈수/유동영역 → 마찰계수 → 허용 유속/풍량 순서로
//! 한 방향으로만 계산이 흐른다.

pub mod airflow;
pub mod capacity;
pub mod error;
pub mod friction;
pub mod geometry;
pub mod params;
pub mod regime;
pub mod session;
pub mod table;

pub use airflow::{evaluate, max_airflow, DuctEvaluation};
pub use capacity::{solve, CapacityInput, CapacityResult, FlowResult};
pub use error::DuctCalcError;
pub use friction::friction_factor;
pub use geometry::{resolve, DuctGeometry, DuctShape, DuctSize};
pub use params::{ParameterAdvisory, ParameterSet};
pub use regime::{classify, FlowRegime, RegimeClassification};
pub use session::TableSession;
pub use table::{regenerate, CircularRow, DuctTables, RectangularRow, RectangularTable};
