//! 화면/차트/CLI에서 공통으로 쓰는 숫자 표기.

/// 천 단위 구분 기호(,)를 넣어 고정 소수점으로 표기한다.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // 반올림 결과가 0이면 부호를 붙이지 않는다 (-0 방지)
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// 질량 표기. 정수면 소수점 없이, 아니면 소수 1자리.
pub fn format_kg(value: f64) -> String {
    let decimals = if (value - value.round()).abs() < 1e-9 { 0 } else { 1 };
    format!("{} kg", group_thousands(value, decimals))
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{symbol}{}", group_thousands(value.abs(), 0))
    } else {
        format!("{symbol}{}", group_thousands(value, 0))
    }
}

/// 기준값 대비 증감 표기 (+/- 부호 포함).
pub fn format_delta(formatted_abs: &str, delta: f64) -> String {
    if delta > 0.0 {
        format!("+{formatted_abs}")
    } else if delta < 0.0 {
        format!("-{formatted_abs}")
    } else {
        formatted_abs.to_string()
    }
}

/// `{name}` 형태의 자리표시자를 채운다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}
