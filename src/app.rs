use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::duct::{DuctCalcError, TableSession};
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 덕트 계산 오류
    #[error("덕트 계산 오류: {0}")]
    Calc(#[from] DuctCalcError),
    /// 로깅 초기화 오류
    #[error("로깅 초기화 오류: {0}")]
    Logging(String),
}

/// 대화형 CLI 메인 루프를 실행한다.
///
/// 파라미터 편집은 새 스냅샷을 만들어 세션에 넘기고, 저장 시 세션의 현재 값을
/// 설정 파일에 기록한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    let mut session = TableSession::new(config.parameters)?;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Tables => ui_cli::handle_tables(tr, &session)?,
            MenuChoice::SingleDuct => ui_cli::handle_single_duct(tr, &session)?,
            MenuChoice::Parameters => ui_cli::handle_parameters(tr, &mut session)?,
            MenuChoice::Reset => {
                session.reset()?;
                println!("{}", tr.t(keys::PARAMS_RESET));
            }
            MenuChoice::Save => {
                config.parameters = *session.parameters();
                config.save(config_path)?;
                println!("{} {}", tr.t(keys::CONFIG_SAVED), config_path.display());
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
