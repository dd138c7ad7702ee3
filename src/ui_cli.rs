use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::AppError;
use crate::duct::{
    evaluate, CircularRow, DuctEvaluation, DuctSize, DuctTables, FlowRegime, ParameterSet,
    RectangularTable, TableSession,
};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Tables,
    SingleDuct,
    Parameters,
    Reset,
    Save,
    Exit,
}

/// 출력할 표 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSelection {
    All,
    Rectangular,
    Round,
    Flexible,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_TABLES,
        keys::MAIN_MENU_SINGLE_DUCT,
        keys::MAIN_MENU_PARAMETERS,
        keys::MAIN_MENU_RESET,
        keys::MAIN_MENU_SAVE,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Tables),
            "2" => return Ok(MenuChoice::SingleDuct),
            "3" => return Ok(MenuChoice::Parameters),
            "4" => return Ok(MenuChoice::Reset),
            "5" => return Ok(MenuChoice::Save),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 표 출력 메뉴를 처리한다.
pub fn handle_tables(tr: &Translator, session: &TableSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TABLES_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match parse_table_selection(&sel) {
        Some(selection) => print!("{}", render_tables(tr, &session.tables(), selection)),
        None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 표 메뉴 입력을 해석한다. 빈 입력은 전체, 목록에 없는 값은 None.
pub fn parse_table_selection(input: &str) -> Option<TableSelection> {
    match input.trim() {
        "" | "1" => Some(TableSelection::All),
        "2" => Some(TableSelection::Rectangular),
        "3" => Some(TableSelection::Round),
        "4" => Some(TableSelection::Flexible),
        _ => None,
    }
}

/// 단일 덕트 계산 메뉴를 처리한다.
pub fn handle_single_duct(tr: &Translator, session: &TableSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DUCT_HEADING));
    println!("{}", tr.t(keys::DUCT_SHAPE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let size = match sel.trim() {
        "1" => DuctSize::Rectangular {
            width_cm: read_f64(tr, tr.t(keys::PROMPT_WIDTH))?,
            height_cm: read_f64(tr, tr.t(keys::PROMPT_HEIGHT))?,
        },
        "2" => DuctSize::Round {
            diameter_cm: read_f64(tr, tr.t(keys::PROMPT_DIAMETER))?,
        },
        "3" => DuctSize::Flexible {
            diameter_cm: read_f64(tr, tr.t(keys::PROMPT_DIAMETER))?,
        },
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    match evaluate(size, &session.parameters()) {
        Ok(Some(eval)) => print!("{}", render_evaluation(tr, &eval)),
        Ok(None) => println!("{}", tr.t(keys::RESULT_ASPECT_EXCEEDED)),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 파라미터 편집 메뉴를 처리한다. 입력 전체로 새 스냅샷을 만든 뒤 한 번에 교체한다.
pub fn handle_parameters(tr: &Translator, session: &mut TableSession) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PARAMS_HEADING));
    println!("{}", tr.t(keys::PARAMS_HINT_KEEP));
    let current = *session.parameters();
    let next = ParameterSet {
        velocity_m_per_s: read_f64_or(tr, keys::PROMPT_VELOCITY, current.velocity_m_per_s)?,
        pressure_drop_pa_per_m: read_f64_or(
            tr,
            keys::PROMPT_PRESSURE_DROP,
            current.pressure_drop_pa_per_m,
        )?,
        roughness_m: read_f64_or(tr, keys::PROMPT_ROUGHNESS, current.roughness_m)?,
        flex_derate_factor: read_f64_or(
            tr,
            keys::PROMPT_FLEX_FACTOR,
            current.flex_derate_factor,
        )?,
        density_kg_per_m3: read_f64_or(tr, keys::PROMPT_DENSITY, current.density_kg_per_m3)?,
        kinematic_viscosity_m2_per_s: read_f64_or(
            tr,
            keys::PROMPT_VISCOSITY,
            current.kinematic_viscosity_m2_per_s,
        )?,
    };
    match session.update(next) {
        Ok(()) => {
            println!("{}", tr.t(keys::PARAMS_UPDATED));
            for advisory in next.advisories() {
                println!("{} {advisory}", tr.t(keys::PARAMS_ADVISORY));
            }
        }
        Err(e) => println!("{} {e}", tr.t(keys::PARAMS_REJECTED)),
    }
    Ok(())
}

/// 선택한 표들을 문자열로 만든다.
pub fn render_tables(tr: &Translator, tables: &DuctTables, selection: TableSelection) -> String {
    let mut out = String::new();
    if matches!(selection, TableSelection::All | TableSelection::Rectangular) {
        out.push_str(&render_rectangular_table(tr, &tables.rectangular));
    }
    if matches!(selection, TableSelection::All | TableSelection::Round) {
        out.push_str(&render_circular_table(
            tr,
            tr.t(keys::ROUND_HEADING),
            &tables.round,
        ));
    }
    if matches!(selection, TableSelection::All | TableSelection::Flexible) {
        out.push_str(&render_circular_table(
            tr,
            tr.t(keys::FLEX_HEADING),
            &tables.flexible,
        ));
    }
    out
}

/// 사각 덕트 표. 빈 칸은 공백으로 남긴다.
pub fn render_rectangular_table(tr: &Translator, table: &RectangularTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RECT_HEADING));
    let _ = write!(out, "{:>8}", tr.t(keys::RECT_AXIS));
    for w in &table.widths_cm {
        let _ = write!(out, "{w:>8}");
    }
    out.push('\n');
    for row in &table.rows {
        let _ = write!(out, "{:>8}", row.height_cm);
        for cell in &row.cells {
            match cell {
                Some(airflow) => {
                    let _ = write!(out, "{airflow:>8}");
                }
                None => out.push_str(&" ".repeat(8)),
            }
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", tr.t(keys::RECT_NOTE_EMPTY));
    out
}

/// 원형/플렉시블 덕트 표.
pub fn render_circular_table(tr: &Translator, heading: &str, rows: &[CircularRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(
        out,
        "{:>14} {:>14} {:>14}",
        tr.t(keys::COL_DIAMETER),
        tr.t(keys::COL_AIRFLOW),
        tr.t(keys::COL_VELOCITY)
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>14} {:>14} {:>14.1}",
            row.diameter_cm, row.airflow_m3_per_h, row.velocity_m_per_s
        );
    }
    out
}

/// 단일 덕트 계산의 중간값과 결과.
pub fn render_evaluation(tr: &Translator, eval: &DuctEvaluation) -> String {
    let flow = eval.flow();
    let mut out = String::new();
    let _ = writeln!(out, "{} {:.4} m2", tr.t(keys::RESULT_AREA), eval.geometry.area_m2);
    let _ = writeln!(
        out,
        "{} {:.4} m",
        tr.t(keys::RESULT_HYDRAULIC_DIAMETER),
        eval.geometry.hydraulic_diameter_m
    );
    let _ = writeln!(
        out,
        "{} {:.0} ({})",
        tr.t(keys::RESULT_REYNOLDS),
        eval.classification.reynolds,
        regime_label(tr, eval.classification.regime)
    );
    let _ = writeln!(out, "{} {:.5}", tr.t(keys::RESULT_FRICTION), eval.friction_factor);
    let _ = writeln!(
        out,
        "{} {:.2} m/s",
        tr.t(keys::RESULT_PRESSURE_LIMIT),
        eval.capacity.pressure_limited_velocity_m_per_s
    );
    let _ = writeln!(
        out,
        "{} {:.1} m/s",
        tr.t(keys::RESULT_VELOCITY),
        flow.velocity_m_per_s
    );
    let _ = writeln!(
        out,
        "{} {} m3/h",
        tr.t(keys::RESULT_AIRFLOW),
        flow.airflow_m3_per_h
    );
    out
}

pub fn regime_label(tr: &Translator, regime: FlowRegime) -> &str {
    match regime {
        FlowRegime::Laminar => tr.t(keys::REGIME_LAMINAR),
        FlowRegime::Transitional => tr.t(keys::REGIME_TRANSITIONAL),
        FlowRegime::Turbulent => tr.t(keys::REGIME_TURBULENT),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, label_key: &str, current: f64) -> Result<f64, AppError> {
    let prompt = format!("{} ({current}): ", tr.t(label_key));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
