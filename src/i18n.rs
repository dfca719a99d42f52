use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::chart::ChartLabels;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "general.app_title";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const LANGUAGE: &str = "general.language";

    pub const INPUTS_HEADING: &str = "inputs.heading";
    pub const INPUT_PRODUCTION: &str = "inputs.production";
    pub const INPUT_SUBSTITUTION: &str = "inputs.substitution";
    pub const INPUT_SECONDARY_PCT: &str = "inputs.secondary_pct";
    pub const INPUT_UNIT_PRICE: &str = "inputs.unit_price";
    pub const TIP_PRODUCTION: &str = "inputs.tip_production";
    pub const TIP_SUBSTITUTION: &str = "inputs.tip_substitution";
    pub const TIP_SECONDARY_PCT: &str = "inputs.tip_secondary_pct";
    pub const TIP_UNIT_PRICE: &str = "inputs.tip_unit_price";
    pub const RESET_DEFAULTS: &str = "inputs.reset_defaults";
    pub const RELOAD_LOGOS: &str = "inputs.reload_logos";

    pub const METRICS_HEADING: &str = "metrics.heading";
    pub const METRIC_AVOIDED: &str = "metrics.avoided";
    pub const METRIC_VALORIZED: &str = "metrics.valorized";
    pub const METRIC_REVENUE: &str = "metrics.revenue";
    pub const METRIC_PARTNERSHIPS: &str = "metrics.partnerships";
    pub const METRIC_SYMBIOSES: &str = "metrics.symbioses";
    pub const DELTA_VS_BASELINE: &str = "metrics.delta_vs_baseline";

    pub const CHARTS_HEADING: &str = "charts.heading";
    pub const CHART_AVOIDED_TITLE: &str = "charts.avoided_title";
    pub const CHART_VALORIZED_TITLE: &str = "charts.valorized_title";
    pub const CHART_REVENUE_TITLE: &str = "charts.revenue_title";
    pub const BASELINE: &str = "charts.baseline";
    pub const PROJECTION: &str = "charts.projection";
    pub const AXIS_MASS: &str = "charts.axis_mass";
    pub const AXIS_CURRENCY: &str = "charts.axis_currency";
    pub const DOWNLOAD_PNG: &str = "charts.download_png";
    pub const EXPORT_SAVED: &str = "charts.export_saved";
    pub const EXPORT_FAILED: &str = "charts.export_failed";
    pub const CHART_RENDER_FAILED: &str = "charts.render_failed";

    pub const INFO_HEADING: &str = "info.heading";
    pub const INFO_BODY: &str = "info.body";
    pub const LOGO_ERROR: &str = "info.logo_error";

    pub const FORMULA_BUTTON: &str = "formula.button";
    pub const FORMULA_AVOIDED: &str = "formula.avoided";
    pub const FORMULA_VALORIZED: &str = "formula.valorized";
    pub const FORMULA_REVENUE: &str = "formula.revenue";
    pub const FORMULA_CONSTANTS: &str = "formula.constants";
    pub const FORMULA_AXIS: &str = "formula.axis";

    pub const ABOUT_BUTTON: &str = "about.button";
    pub const ABOUT_BODY: &str = "about.body";

    pub const CLI_PROMPT_VALUE: &str = "cli.prompt_value";
    pub const CLI_REPORT_HEADING: &str = "cli.report_heading";
    pub const CLI_INPUTS_HEADING: &str = "cli.inputs_heading";
    pub const CLI_AXIS_UPPER: &str = "cli.axis_upper";
    pub const CLI_EXPORTED: &str = "cli.exported";
    pub const CLI_LOGO_OK: &str = "cli.logo_ok";
    pub const CLI_LOGO_FAILED: &str = "cli.logo_failed";
    pub const CLI_CLAMPED: &str = "cli.clamped";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("es") {
            Language::Es
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
    /// 언어 코드(en/es)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
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

    /// 번역을 가져온다. 언어팩 → 내장 스페인어/영어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Es => es(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or(key).to_string()
    }

    /// 현재 언어로 차트 문자열 묶음을 만든다.
    pub fn chart_labels(&self, currency_symbol: &str) -> ChartLabels {
        ChartLabels {
            avoided_title: self.t(keys::CHART_AVOIDED_TITLE),
            valorized_title: self.t(keys::CHART_VALORIZED_TITLE),
            revenue_title: self.t(keys::CHART_REVENUE_TITLE),
            baseline: self.t(keys::BASELINE),
            projection: self.t(keys::PROJECTION),
            mass_axis: self.t(keys::AXIS_MASS),
            currency_axis: self.t(keys::AXIS_CURRENCY),
            currency_symbol: currency_symbol.to_string(),
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
        other if other.starts_with("es") => Some("es".into()),
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
        "es" => Some("es".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Some(code) = std::env::var(var).ok().as_deref().and_then(normalize_locale_string) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    // [charts] baseline = ".." 와 charts.baseline = ".." 모두 점 표기 키로 편다
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
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

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Agro Valorization Dashboard",
        ERROR_PREFIX => "Error",
        LANGUAGE => "Language",
        INPUTS_HEADING => "Scenario inputs",
        INPUT_PRODUCTION => "Production volume (kg/year)",
        INPUT_SUBSTITUTION => "Substitution factor (kg/kg)",
        INPUT_SECONDARY_PCT => "Secondary material (%)",
        INPUT_UNIT_PRICE => "Unit sale price (per kg)",
        TIP_PRODUCTION => "Annual bio-input production.",
        TIP_SUBSTITUTION => "Kilograms of synthetic agrochemical replaced by each kilogram of product.",
        TIP_SECONDARY_PCT => "Share of the product made from recovered by-products.",
        TIP_UNIT_PRICE => "Sale price per kilogram of product.",
        RESET_DEFAULTS => "Reset to defaults",
        RELOAD_LOGOS => "Reload logos",
        METRICS_HEADING => "Projected impact",
        METRIC_AVOIDED => "Avoided agrochemicals",
        METRIC_VALORIZED => "Valorized material",
        METRIC_REVENUE => "Generated revenue",
        METRIC_PARTNERSHIPS => "Partnerships",
        METRIC_SYMBIOSES => "Industrial symbioses",
        DELTA_VS_BASELINE => "{delta} vs baseline",
        CHARTS_HEADING => "Baseline vs projection",
        CHART_AVOIDED_TITLE => "Avoided agrochemicals (kg/year)",
        CHART_VALORIZED_TITLE => "Valorized material (kg/year)",
        CHART_REVENUE_TITLE => "Generated revenue (per year)",
        BASELINE => "Baseline",
        PROJECTION => "Projection",
        AXIS_MASS => "kg / year",
        AXIS_CURRENCY => "revenue / year",
        DOWNLOAD_PNG => "Download PNG",
        EXPORT_SAVED => "Saved: {path}",
        EXPORT_FAILED => "Export failed: {error}",
        CHART_RENDER_FAILED => "Chart could not be drawn: {error}",
        INFO_HEADING => "About this model",
        INFO_BODY => "Every value is recomputed from the four sliders. The baseline is a fixed reference without project intervention: no avoided agrochemicals, 800 kg of material already valorized and no revenue.",
        LOGO_ERROR => "Could not load logo {url}: {error}",
        FORMULA_BUTTON => "Formula reference",
        FORMULA_AVOIDED => "Avoided agrochemicals = volume × substitution factor",
        FORMULA_VALORIZED => "Valorized material = volume × (secondary % / 100)",
        FORMULA_REVENUE => "Revenue = volume × unit price",
        FORMULA_CONSTANTS => "Partnerships (5) and symbioses (6) are fixed counts.",
        FORMULA_AXIS => "Chart y-axis: 15% above the largest bar, at least 1 kg / 100 kg / 100,000.",
        ABOUT_BUTTON => "Help / About",
        ABOUT_BODY => "Single-point evaluation of a circular-economy bio-input project. Nothing is saved between sessions.",
        CLI_PROMPT_VALUE => "{name} [{min} - {max}]: ",
        CLI_REPORT_HEADING => "\n=== Projected impact ===",
        CLI_INPUTS_HEADING => "\n-- Inputs --",
        CLI_AXIS_UPPER => "y-axis upper",
        CLI_EXPORTED => "Exported {path}",
        CLI_LOGO_OK => "Logo OK: {url} ({width}x{height})",
        CLI_LOGO_FAILED => "Logo failed: {url}: {error}",
        CLI_CLAMPED => "Value out of range; using {value}.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Tablero de Valorización Agroindustrial",
        ERROR_PREFIX => "Error",
        LANGUAGE => "Idioma",
        INPUTS_HEADING => "Parámetros del escenario",
        INPUT_PRODUCTION => "Volumen de producción (kg/año)",
        INPUT_SUBSTITUTION => "Factor de sustitución (kg/kg)",
        INPUT_SECONDARY_PCT => "Material secundario (%)",
        INPUT_UNIT_PRICE => "Precio de venta (por kg)",
        TIP_PRODUCTION => "Producción anual del bioinsumo.",
        TIP_SUBSTITUTION => "Kilogramos de agroquímico sintético reemplazados por cada kilogramo de producto.",
        TIP_SECONDARY_PCT => "Proporción del producto elaborada con subproductos recuperados.",
        TIP_UNIT_PRICE => "Precio de venta por kilogramo de producto.",
        RESET_DEFAULTS => "Restablecer valores",
        RELOAD_LOGOS => "Recargar logos",
        METRICS_HEADING => "Impacto proyectado",
        METRIC_AVOIDED => "Agroquímicos evitados",
        METRIC_VALORIZED => "Material valorizado",
        METRIC_REVENUE => "Ingresos generados",
        METRIC_PARTNERSHIPS => "Alianzas",
        METRIC_SYMBIOSES => "Simbiosis industriales",
        DELTA_VS_BASELINE => "{delta} frente a la línea base",
        CHARTS_HEADING => "Línea base vs proyección",
        CHART_AVOIDED_TITLE => "Agroquímicos evitados (kg/año)",
        CHART_VALORIZED_TITLE => "Material valorizado (kg/año)",
        CHART_REVENUE_TITLE => "Ingresos generados (por año)",
        BASELINE => "Línea base",
        PROJECTION => "Proyección",
        AXIS_MASS => "kg / año",
        AXIS_CURRENCY => "ingresos / año",
        DOWNLOAD_PNG => "Descargar PNG",
        EXPORT_SAVED => "Guardado: {path}",
        EXPORT_FAILED => "No se pudo exportar: {error}",
        CHART_RENDER_FAILED => "No se pudo dibujar el gráfico: {error}",
        INFO_HEADING => "Sobre este modelo",
        INFO_BODY => "Todos los valores se recalculan a partir de los cuatro controles. La línea base es una referencia fija sin intervención del proyecto: sin agroquímicos evitados, 800 kg de material ya valorizado y sin ingresos.",
        LOGO_ERROR => "No se pudo cargar el logo {url}: {error}",
        FORMULA_BUTTON => "Fórmulas",
        FORMULA_AVOIDED => "Agroquímicos evitados = volumen × factor de sustitución",
        FORMULA_VALORIZED => "Material valorizado = volumen × (% secundario / 100)",
        FORMULA_REVENUE => "Ingresos = volumen × precio unitario",
        FORMULA_CONSTANTS => "Las alianzas (5) y simbiosis (6) son conteos fijos.",
        FORMULA_AXIS => "Eje y: 15% sobre la barra más alta, mínimo 1 kg / 100 kg / 100.000.",
        ABOUT_BUTTON => "Ayuda / Acerca de",
        ABOUT_BODY => "Evaluación puntual de un proyecto de bioinsumos de economía circular. No se guarda nada entre sesiones.",
        CLI_PROMPT_VALUE => "{name} [{min} - {max}]: ",
        CLI_REPORT_HEADING => "\n=== Impacto proyectado ===",
        CLI_INPUTS_HEADING => "\n-- Parámetros --",
        CLI_AXIS_UPPER => "límite del eje y",
        CLI_EXPORTED => "Exportado {path}",
        CLI_LOGO_OK => "Logo OK: {url} ({width}x{height})",
        CLI_LOGO_FAILED => "Logo con error: {url}: {error}",
        CLI_CLAMPED => "Valor fuera de rango; se usa {value}.",
        ERROR_INVALID_NUMBER => "Ingrese un número.",
        _ => return None,
    })
}
