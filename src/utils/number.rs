/// 以 JavaScript `parseFloat` 的規則解析數字：取最長的合法數字前綴，
/// 解析不到任何數字時回傳 NaN。
pub fn parse_decimal(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut cursor = end + 1;
        let mut fraction_digits = 0;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
            fraction_digits += 1;
        }
        if digits + fraction_digits > 0 {
            end = cursor;
            digits += fraction_digits;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // 指數部分必須至少有一位數字才算數
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// HTML `type=number` 接受的浮點數語法：`-`? 數字 (`.` 數字)? 指數?，
/// 不允許 `+` 開頭、結尾的小數點或前後空白
pub fn is_valid_floating_point_number(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut cursor = usize::from(bytes.first() == Some(&b'-'));

    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let integer_digits = count_digits(cursor);
    cursor += integer_digits;
    if bytes.get(cursor) == Some(&b'.') {
        let fraction_digits = count_digits(cursor + 1);
        if fraction_digits == 0 {
            return false;
        }
        cursor += 1 + fraction_digits;
    } else if integer_digits == 0 {
        return false;
    }

    if matches!(bytes.get(cursor), Some(b'e') | Some(b'E')) {
        cursor += 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let exponent_digits = count_digits(cursor);
        if exponent_digits == 0 {
            return false;
        }
        cursor += exponent_digits;
    }

    cursor == bytes.len()
}
