use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_TABLES: &str = "main_menu.tables";
    pub const MAIN_MENU_SINGLE_DUCT: &str = "main_menu.single_duct";
    pub const MAIN_MENU_PARAMETERS: &str = "main_menu.parameters";
    pub const MAIN_MENU_RESET: &str = "main_menu.reset";
    pub const MAIN_MENU_SAVE: &str = "main_menu.save";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const TABLES_OPTIONS: &str = "tables.options";
    pub const RECT_HEADING: &str = "tables.rect_heading";
    pub const RECT_AXIS: &str = "tables.rect_axis";
    pub const RECT_NOTE_EMPTY: &str = "tables.rect_note_empty";
    pub const ROUND_HEADING: &str = "tables.round_heading";
    pub const FLEX_HEADING: &str = "tables.flex_heading";
    pub const COL_DIAMETER: &str = "tables.col_diameter";
    pub const COL_AIRFLOW: &str = "tables.col_airflow";
    pub const COL_VELOCITY: &str = "tables.col_velocity";

    pub const DUCT_HEADING: &str = "duct.heading";
    pub const DUCT_SHAPE_OPTIONS: &str = "duct.shape_options";
    pub const PROMPT_WIDTH: &str = "prompt.width";
    pub const PROMPT_HEIGHT: &str = "prompt.height";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const RESULT_ASPECT_EXCEEDED: &str = "result.aspect_exceeded";
    pub const RESULT_AREA: &str = "result.area";
    pub const RESULT_HYDRAULIC_DIAMETER: &str = "result.hydraulic_diameter";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION: &str = "result.friction";
    pub const RESULT_PRESSURE_LIMIT: &str = "result.pressure_limit";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_AIRFLOW: &str = "result.airflow";
    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TRANSITIONAL: &str = "regime.transitional";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";

    pub const PARAMS_HEADING: &str = "params.heading";
    pub const PARAMS_HINT_KEEP: &str = "params.hint_keep";
    pub const PROMPT_VELOCITY: &str = "prompt.velocity";
    pub const PROMPT_PRESSURE_DROP: &str = "prompt.pressure_drop";
    pub const PROMPT_ROUGHNESS: &str = "prompt.roughness";
    pub const PROMPT_FLEX_FACTOR: &str = "prompt.flex_factor";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_VISCOSITY: &str = "prompt.viscosity";
    pub const PARAMS_UPDATED: &str = "params.updated";
    pub const PARAMS_REJECTED: &str = "params.rejected";
    pub const PARAMS_RESET: &str = "params.reset";
    pub const PARAMS_ADVISORY: &str = "params.advisory";
    pub const CONFIG_SAVED: &str = "config.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순. 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|val| normalize_locale_string(&val))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Duct Sizing Toolbox ===",
        MAIN_MENU_TABLES => "1) 풍량 표 출력",
        MAIN_MENU_SINGLE_DUCT => "2) 단일 덕트 계산",
        MAIN_MENU_PARAMETERS => "3) 파라미터 변경",
        MAIN_MENU_RESET => "4) 기본값 복원",
        MAIN_MENU_SAVE => "5) 설정 저장",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        TABLES_OPTIONS => "1) 전체  2) 사각 덕트  3) 원형 덕트  4) 플렉시블 덕트",
        RECT_HEADING => "\n-- 사각 덕트 최대 풍량 (m3/h), 종횡비 ≤ 4:1 --",
        RECT_AXIS => "H\\W(cm)",
        RECT_NOTE_EMPTY => "* 빈 칸은 종횡비 4:1 초과(비권장)",
        ROUND_HEADING => "\n-- 원형 덕트 --",
        FLEX_HEADING => "\n-- 플렉시블 덕트 --",
        COL_DIAMETER => "직경(cm)",
        COL_AIRFLOW => "풍량(m3/h)",
        COL_VELOCITY => "유속(m/s)",
        DUCT_HEADING => "\n-- 단일 덕트 계산 --",
        DUCT_SHAPE_OPTIONS => "1) 사각  2) 원형  3) 플렉시블",
        PROMPT_WIDTH => "가로 [cm]: ",
        PROMPT_HEIGHT => "세로 [cm]: ",
        PROMPT_DIAMETER => "직경 [cm]: ",
        RESULT_ASPECT_EXCEEDED => "종횡비 4:1 초과로 결과가 없습니다.",
        RESULT_AREA => "단면적:",
        RESULT_HYDRAULIC_DIAMETER => "수력직경:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FRICTION => "마찰계수:",
        RESULT_PRESSURE_LIMIT => "압력손실 기준 최대 유속:",
        RESULT_VELOCITY => "설계 유속:",
        RESULT_AIRFLOW => "최대 풍량:",
        REGIME_LAMINAR => "층류",
        REGIME_TRANSITIONAL => "천이",
        REGIME_TURBULENT => "난류",
        PARAMS_HEADING => "\n-- 파라미터 --",
        PARAMS_HINT_KEEP => "엔터를 누르면 현재 값을 유지합니다.",
        PROMPT_VELOCITY => "최대 유속 [m/s]",
        PROMPT_PRESSURE_DROP => "압력손실 [Pa/m]",
        PROMPT_ROUGHNESS => "판금 조도 [m]",
        PROMPT_FLEX_FACTOR => "플렉시블 보정계수",
        PROMPT_DENSITY => "공기 밀도 [kg/m3]",
        PROMPT_VISCOSITY => "공기 동점성계수 [m2/s]",
        PARAMS_UPDATED => "파라미터가 적용되어 표를 다시 계산했습니다.",
        PARAMS_REJECTED => "파라미터가 거부되어 이전 값을 유지합니다:",
        PARAMS_RESET => "기본 파라미터로 복원했습니다.",
        PARAMS_ADVISORY => "주의:",
        CONFIG_SAVED => "설정을 저장했습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Duct Sizing Toolbox ===",
        MAIN_MENU_TABLES => "1) Print airflow tables",
        MAIN_MENU_SINGLE_DUCT => "2) Evaluate a single duct",
        MAIN_MENU_PARAMETERS => "3) Edit parameters",
        MAIN_MENU_RESET => "4) Reset to defaults",
        MAIN_MENU_SAVE => "5) Save settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        TABLES_OPTIONS => "1) All  2) Rectangular  3) Round  4) Flexible",
        RECT_HEADING => "\n-- Rectangular Ducts - Maximum Airflow (m3/h) - Aspect Ratio <= 4:1 --",
        RECT_AXIS => "H\\W(cm)",
        RECT_NOTE_EMPTY => "* Empty cells indicate aspect ratio > 4:1 (not recommended)",
        ROUND_HEADING => "\n-- Round Ducts --",
        FLEX_HEADING => "\n-- Flexible Ducts --",
        COL_DIAMETER => "Diameter(cm)",
        COL_AIRFLOW => "Airflow(m3/h)",
        COL_VELOCITY => "Velocity(m/s)",
        DUCT_HEADING => "\n-- Single Duct --",
        DUCT_SHAPE_OPTIONS => "1) Rectangular  2) Round  3) Flexible",
        PROMPT_WIDTH => "Width [cm]: ",
        PROMPT_HEIGHT => "Height [cm]: ",
        PROMPT_DIAMETER => "Diameter [cm]: ",
        RESULT_ASPECT_EXCEEDED => "Aspect ratio exceeds 4:1; no result.",
        RESULT_AREA => "Area:",
        RESULT_HYDRAULIC_DIAMETER => "Hydraulic diameter:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FRICTION => "Friction factor:",
        RESULT_PRESSURE_LIMIT => "Pressure-limited velocity:",
        RESULT_VELOCITY => "Design velocity:",
        RESULT_AIRFLOW => "Maximum airflow:",
        REGIME_LAMINAR => "laminar",
        REGIME_TRANSITIONAL => "transitional",
        REGIME_TURBULENT => "turbulent",
        PARAMS_HEADING => "\n-- Parameters --",
        PARAMS_HINT_KEEP => "Press enter to keep the current value.",
        PROMPT_VELOCITY => "Maximum air velocity [m/s]",
        PROMPT_PRESSURE_DROP => "Pressure drop [Pa/m]",
        PROMPT_ROUGHNESS => "Sheet metal roughness [m]",
        PROMPT_FLEX_FACTOR => "Flexible duct factor",
        PROMPT_DENSITY => "Air density [kg/m3]",
        PROMPT_VISCOSITY => "Air kinematic viscosity [m2/s]",
        PARAMS_UPDATED => "Parameters applied; tables regenerated.",
        PARAMS_REJECTED => "Parameters rejected; previous values kept:",
        PARAMS_RESET => "Parameters reset to defaults.",
        PARAMS_ADVISORY => "Note:",
        CONFIG_SAVED => "Settings saved:",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_falls_back_to_english() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
    }

    #[test]
    fn korean_strings_are_used_for_ko() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.t(keys::REGIME_TURBULENT), "난류");
    }

    #[test]
    fn overrides_flatten_sections() {
        let map = parse_toml_to_map("[general]\napp_exit = \"bye\"\n").expect("map");
        assert_eq!(map.get(keys::APP_EXIT).map(String::as_str), Some("bye"));
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-US")), "en");
    }
}
