/// 金額格式化，預設為巴西雷亞爾 (pt-BR / BRL)
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    symbol: String,
    group_separator: char,
    decimal_separator: char,
}

impl CurrencyFormatter {
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            group_separator: '.',
            decimal_separator: ',',
        }
    }

    /// 兩位小數，以最短十進位表示做四捨五入 (遠離零)；負值 (含 -0) 一律帶負號，
    /// 符號與數字之間是不換行空白
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}\u{a0}NaN", self.symbol);
        }
        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{}{}\u{a0}\u{221e}", sign, self.symbol);
        }

        let (units, cents) = round_to_cents(&value.abs().to_string());
        format!(
            "{}{}\u{a0}{}{}{}",
            sign,
            self.symbol,
            self.group_digits(&units),
            self.decimal_separator,
            cents
        )
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// 直接在十進位字串上進位，避免乘以 100 帶來的浮點誤差與整數溢位
fn round_to_cents(repr: &str) -> (String, String) {
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr, ""));
    let fraction = fraction.as_bytes();

    let mut digits: Vec<u8> = integer.bytes().map(|b| b - b'0').collect();
    for position in 0..2 {
        digits.push(fraction.get(position).map_or(0, |b| b - b'0'));
    }

    if fraction.get(2).is_some_and(|b| *b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    (digits_to_text(&digits[..split]), digits_to_text(&digits[split..]))
}

fn digits_to_text(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::brl()
    }
}
