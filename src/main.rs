use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use duct_sizing_toolbox::app::{self, AppError};
use duct_sizing_toolbox::config::{self, Config, DEFAULT_CONFIG_PATH};
use duct_sizing_toolbox::duct::{evaluate, regenerate, DuctSize, ParameterSet};
use duct_sizing_toolbox::i18n::{self, keys, Translator};
use duct_sizing_toolbox::ui_cli::{self, TableSelection};

/// HVAC 덕트 허용 풍량 계산기
#[derive(Parser)]
#[command(name = "duct_sizing_toolbox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Maximum airflow tables for rectangular, round and flexible ducts", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// UI 언어 (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 로그 레벨 (trace, debug, info, warn, error). RUST_LOG가 있으면 그쪽이 우선한다.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 풍량 표 출력
    Tables {
        /// 출력할 표 (기본: 전체)
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// 덕트 하나의 계산 과정 출력
    Duct {
        #[arg(long, value_enum)]
        shape: ShapeArg,
        /// 가로 [cm] (사각)
        #[arg(long, required_if_eq("shape", "rectangular"))]
        width: Option<f64>,
        /// 세로 [cm] (사각)
        #[arg(long, required_if_eq("shape", "rectangular"))]
        height: Option<f64>,
        /// 직경 [cm] (원형/플렉시블)
        #[arg(long, required_if_eq_any([("shape", "round"), ("shape", "flexible")]))]
        diameter: Option<f64>,
        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// 적용될 파라미터를 TOML로 출력
    Params {
        #[command(flatten)]
        overrides: ParamOverrides,
    },
    /// 대화형 메뉴 (기본)
    Interactive,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Rectangular,
    Round,
    Flexible,
}

/// 설정 파일 값을 덮어쓰는 파라미터.
#[derive(Args, Default)]
struct ParamOverrides {
    /// 최대 유속 [m/s]
    #[arg(long)]
    velocity: Option<f64>,
    /// 압력손실 [Pa/m]
    #[arg(long)]
    pressure_drop: Option<f64>,
    /// 조도 [m]
    #[arg(long)]
    roughness: Option<f64>,
    /// 플렉시블 보정계수
    #[arg(long)]
    flex_factor: Option<f64>,
    /// 공기 밀도 [kg/m3]
    #[arg(long)]
    density: Option<f64>,
    /// 동점성계수 [m2/s]
    #[arg(long)]
    viscosity: Option<f64>,
}

impl ParamOverrides {
    /// 기존 값을 바꾸지 않고 덮어쓴 새 파라미터를 만든다.
    fn apply(&self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            velocity_m_per_s: self.velocity.unwrap_or(base.velocity_m_per_s),
            pressure_drop_pa_per_m: self.pressure_drop.unwrap_or(base.pressure_drop_pa_per_m),
            roughness_m: self.roughness.unwrap_or(base.roughness_m),
            flex_derate_factor: self.flex_factor.unwrap_or(base.flex_derate_factor),
            density_kg_per_m3: self.density.unwrap_or(base.density_kg_per_m3),
            kinematic_viscosity_m2_per_s: self
                .viscosity
                .unwrap_or(base.kinematic_viscosity_m2_per_s),
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    init_logging(&cli.log_level)?;

    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, None);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Tables { shape, overrides } => {
            let params = overrides.apply(cfg.parameters);
            report_advisories(&tr, &params);
            let tables = regenerate(&params)?;
            let selection = match shape {
                None => TableSelection::All,
                Some(ShapeArg::Rectangular) => TableSelection::Rectangular,
                Some(ShapeArg::Round) => TableSelection::Round,
                Some(ShapeArg::Flexible) => TableSelection::Flexible,
            };
            print!("{}", ui_cli::render_tables(&tr, &tables, selection));
        }
        Commands::Duct {
            shape,
            width,
            height,
            diameter,
            overrides,
        } => {
            let params = overrides.apply(cfg.parameters);
            report_advisories(&tr, &params);
            let size = duct_size(shape, width, height, diameter);
            match evaluate(size, &params)? {
                Some(eval) => print!("{}", ui_cli::render_evaluation(&tr, &eval)),
                None => println!("{}", tr.t(keys::RESULT_ASPECT_EXCEEDED)),
            }
        }
        Commands::Params { overrides } => {
            let params = overrides.apply(cfg.parameters).validated()?;
            let preview = Config {
                language: cfg.language.clone(),
                parameters: params,
            };
            print!("{}", preview.to_toml()?);
        }
        Commands::Interactive => app::run(&mut cfg, &cli.config, &tr)?,
    }
    Ok(())
}

fn duct_size(
    shape: ShapeArg,
    width: Option<f64>,
    height: Option<f64>,
    diameter: Option<f64>,
) -> DuctSize {
    // 형상별 필수 치수는 clap 에서 강제된다.
    match shape {
        ShapeArg::Rectangular => DuctSize::Rectangular {
            width_cm: width.unwrap_or(0.0),
            height_cm: height.unwrap_or(0.0),
        },
        ShapeArg::Round => DuctSize::Round {
            diameter_cm: diameter.unwrap_or(0.0),
        },
        ShapeArg::Flexible => DuctSize::Flexible {
            diameter_cm: diameter.unwrap_or(0.0),
        },
    }
}

fn report_advisories(tr: &Translator, params: &ParameterSet) {
    for advisory in params.advisories() {
        eprintln!("{} {advisory}", tr.t(keys::PARAMS_ADVISORY));
    }
}

fn init_logging(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_duct_requires_diameter() {
        for shape in ["round", "flexible"] {
            let err = Cli::try_parse_from(["duct_sizing_toolbox", "duct", "--shape", shape])
                .err()
                .expect("missing diameter must be rejected");
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn diameter_is_parsed_for_circular_duct() {
        let cli = Cli::try_parse_from([
            "duct_sizing_toolbox",
            "duct",
            "--shape",
            "flexible",
            "--diameter",
            "22.4",
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Duct {
                shape, diameter, ..
            }) => {
                assert!(shape == ShapeArg::Flexible);
                assert_eq!(diameter, Some(22.4));
            }
            _ => panic!("expected duct command"),
        }
    }

    #[test]
    fn rectangular_duct_does_not_need_diameter() {
        let cli = Cli::try_parse_from([
            "duct_sizing_toolbox",
            "duct",
            "--shape",
            "rectangular",
            "--width",
            "20",
            "--height",
            "10",
        ]);
        assert!(cli.is_ok());
    }
}
