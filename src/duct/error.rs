use thiserror::Error;

/// 덕트 계산 오류를 표현한다.
///
/// 종횡비 초과는 오류가 아니라 `None`(빈 칸)으로 처리하므로 여기에 포함되지 않는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DuctCalcError {
    /// 파라미터가 0 이하이거나 유한하지 않은 경우
    #[error("설정 오류: {field} 값은 0보다 큰 유한한 수여야 합니다 (입력값 {value})")]
    InvalidParameter { field: &'static str, value: f64 },

    /// 플렉시블 보정계수가 1 미만인 경우
    #[error("설정 오류: {field} 값은 1 이상이어야 합니다 (입력값 {value})")]
    DerateBelowOne { field: &'static str, value: f64 },

    /// 덕트 치수가 0 이하이거나 유한하지 않은 경우
    #[error("입력 오류: {name} 치수는 0보다 커야 합니다 (입력값 {value} cm)")]
    InvalidDimension { name: &'static str, value: f64 },
}
