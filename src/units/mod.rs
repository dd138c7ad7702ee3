//! 덕트 계산에 쓰이는 고정 단위 변환(cm/m, m3/s/m3/h) 모음.

pub mod flow;
pub mod length;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
