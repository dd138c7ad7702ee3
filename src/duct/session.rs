use std::sync::Arc;

use tracing::{debug, warn};

use super::error::DuctCalcError;
use super::params::ParameterSet;
use super::table::{regenerate, DuctTables};

/// 현재 파라미터와 그로부터 만든 표를 한 쌍의 스냅샷으로 보관한다.
///
/// 새 파라미터는 검증과 재계산이 모두 끝난 뒤에만 교체되므로, 읽는 쪽은 항상
/// 이전 쌍 또는 새 쌍 전체만 보게 된다.
#[derive(Debug, Clone)]
pub struct TableSession {
    params: Arc<ParameterSet>,
    tables: Arc<DuctTables>,
}

impl TableSession {
    pub fn new(params: ParameterSet) -> Result<Self, DuctCalcError> {
        let tables = build(&params)?;
        Ok(Self {
            params: Arc::new(params),
            tables: Arc::new(tables),
        })
    }

    /// 현재 파라미터 스냅샷.
    pub fn parameters(&self) -> Arc<ParameterSet> {
        Arc::clone(&self.params)
    }

    /// 현재 표 스냅샷.
    pub fn tables(&self) -> Arc<DuctTables> {
        Arc::clone(&self.tables)
    }

    /// 새 파라미터로 표를 다시 만들고 교체한다. 실패하면 기존 스냅샷을 유지한다.
    pub fn update(&mut self, params: ParameterSet) -> Result<(), DuctCalcError> {
        if params == *self.params {
            debug!("parameters unchanged, skipping regeneration");
            return Ok(());
        }
        let tables = build(&params)?;
        self.params = Arc::new(params);
        self.tables = Arc::new(tables);
        Ok(())
    }

    /// 기본 파라미터로 되돌린다.
    pub fn reset(&mut self) -> Result<(), DuctCalcError> {
        self.update(ParameterSet::default())
    }
}

fn build(params: &ParameterSet) -> Result<DuctTables, DuctCalcError> {
    for advisory in params.advisories() {
        warn!(%advisory, "parameter outside recommended range");
    }
    regenerate(params)
}
