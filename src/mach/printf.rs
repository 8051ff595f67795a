use std::rc::Rc;

/// Widths and precisions above this are not conversions; the sequence
/// is copied verbatim like any other unsupported one.
const MAX_FIELD: usize = 4096;

/// ## Print format template
///
/// A C `printf` template applied to a single register value.
/// The template is split into pieces once, when the instruction is built,
/// so rendering never has to parse it again.
///
/// Every conversion in the template consumes the same value:
/// `"%f or %e"` renders the register twice.

#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    text: Rc<str>,
    pieces: Rc<[Piece]>,
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Conversion(Conversion),
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Conversion {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: char,
}

impl Format {
    pub fn new(text: &str) -> Format {
        Format {
            text: text.into(),
            pieces: parse(text).into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn render(&self, value: f64) -> String {
        let mut s = String::new();
        for piece in self.pieces.iter() {
            match piece {
                Piece::Text(text) => s.push_str(text),
                Piece::Conversion(conversion) => s.push_str(&conversion.render(value)),
            }
        }
        s
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse(text: &str) -> Vec<Piece> {
    let mut pieces = vec![];
    let mut literal = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }
        let mut raw = String::from("%");
        let mut conversion = Conversion::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => conversion.left = true,
                '+' => conversion.plus = true,
                ' ' => conversion.space = true,
                '0' => conversion.zero = true,
                '#' => conversion.alternate = true,
                _ => break,
            }
            raw.push(flag);
            chars.next();
        }
        conversion.width = digits(&mut chars, &mut raw);
        if chars.peek() == Some(&'.') {
            raw.push('.');
            chars.next();
            conversion.precision = Some(digits(&mut chars, &mut raw).unwrap_or(0));
        }
        while let Some(&length) = chars.peek() {
            if !matches!(length, 'h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't') {
                break;
            }
            raw.push(length);
            chars.next();
        }
        let oversized = conversion.width.map_or(false, |w| w > MAX_FIELD)
            || conversion.precision.map_or(false, |p| p > MAX_FIELD);
        match chars.next() {
            Some('%') if raw == "%" => literal.push('%'),
            Some(kind) if "fFeEgGdi".contains(kind) && !oversized => {
                if !literal.is_empty() {
                    pieces.push(Piece::Text(std::mem::take(&mut literal)));
                }
                conversion.kind = kind;
                pieces.push(Piece::Conversion(conversion));
            }
            Some(other) => {
                literal.push_str(&raw);
                literal.push(other);
            }
            None => literal.push_str(&raw),
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Text(literal));
    }
    pieces
}

fn digits(chars: &mut std::iter::Peekable<std::str::Chars>, raw: &mut String) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(&d) = chars.peek() {
        match d.to_digit(10) {
            Some(v) => {
                n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(v as usize));
                raw.push(d);
                chars.next();
            }
            None => break,
        }
    }
    n
}

impl Conversion {
    fn is_upper(&self) -> bool {
        self.kind.is_ascii_uppercase()
    }

    fn render(&self, value: f64) -> String {
        let integer = matches!(self.kind, 'd' | 'i');
        let (negative, body) = if integer {
            let n = value.trunc() as i64;
            let mut body = n.unsigned_abs().to_string();
            if let Some(precision) = self.precision {
                while body.len() < precision {
                    body.insert(0, '0');
                }
            }
            (n < 0, body)
        } else if !value.is_finite() {
            let body = if value.is_nan() { "nan" } else { "inf" };
            let body = if self.is_upper() {
                body.to_ascii_uppercase()
            } else {
                body.to_string()
            };
            (value.is_sign_negative(), body)
        } else {
            let precision = self.precision.unwrap_or(6);
            let magnitude = value.abs();
            let body = match self.kind {
                'f' | 'F' => fixed(magnitude, precision, self.alternate),
                'e' | 'E' => exponent(magnitude, precision, self.alternate, self.is_upper()),
                _ => general(magnitude, precision, self.alternate, self.is_upper()),
            };
            (value.is_sign_negative(), body)
        };
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        let width = self.width.unwrap_or(0);
        let len = sign.len() + body.len();
        if len >= width {
            return format!("{}{}", sign, body);
        }
        let pad = width - len;
        let zero_pad = self.zero && value.is_finite() && !(integer && self.precision.is_some());
        if self.left {
            format!("{}{}{}", sign, body, " ".repeat(pad))
        } else if zero_pad {
            format!("{}{}{}", sign, "0".repeat(pad), body)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, body)
        }
    }
}

fn fixed(value: f64, precision: usize, alternate: bool) -> String {
    let mut s = format!("{:.*}", precision, value);
    if alternate && precision == 0 {
        s.push('.');
    }
    s
}

fn split_exponent(value: f64, precision: usize) -> (String, i32) {
    let s = format!("{:.*e}", precision, value);
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn exponent(value: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let (mut mantissa, exp) = split_exponent(value, precision);
    if alternate && precision == 0 {
        mantissa.push('.');
    }
    format!(
        "{}{}{}{:02}",
        mantissa,
        if upper { 'E' } else { 'e' },
        if exp < 0 { '-' } else { '+' },
        exp.abs()
    )
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn general(value: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let precision = precision.max(1);
    let exp = if value == 0.0 {
        0
    } else {
        split_exponent(value, precision - 1).1
    };
    if exp >= -4 && (exp as i64) < precision as i64 {
        let s = fixed(value, (precision as i64 - 1 - exp as i64) as usize, alternate);
        if alternate {
            s
        } else {
            strip_zeros(&s).to_string()
        }
    } else {
        let s = exponent(value, precision - 1, alternate, upper);
        if alternate {
            return s;
        }
        let letter = if upper { 'E' } else { 'e' };
        match s.split_once(letter) {
            Some((mantissa, exp)) => format!("{}{}{}", strip_zeros(mantissa), letter, exp),
            None => s,
        }
    }
}

/// Renders a number the way `%g` does, used for trace output.
pub fn shortest(value: f64) -> String {
    Format::new("%g").render(value)
}
