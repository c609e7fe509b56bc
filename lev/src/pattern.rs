/// A single converted field
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i32),
    Float(f32),
    Word(String),
}

/// The fields converted by a `Pattern`, in order. Conversion stops at the
/// first mismatch so this may hold fewer fields than the pattern declares.
///
/// Getters return zero/empty for fields that were not converted, matching
/// a record that was zero-initialised before scanning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scanned {
    values: Vec<Value>,
}

impl Scanned {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn int(&self, index: usize) -> i32 {
        match self.values.get(index) {
            Some(Value::Int(v)) => *v,
            _ => 0,
        }
    }

    pub fn float(&self, index: usize) -> f32 {
        match self.values.get(index) {
            Some(Value::Float(v)) => *v,
            _ => 0.0,
        }
    }

    pub fn word(&self, index: usize) -> &str {
        match self.values.get(index) {
            Some(Value::Word(v)) => v,
            _ => "",
        }
    }
}

/// A keyword + field pattern in the style of `scanf`.
///
/// - whitespace matches any run of whitespace, including none
/// - `%d` is a signed integer, `%f` a float, `%s` a run of non-whitespace
/// - anything else must match literally
///
/// Each conversion skips leading whitespace. The input may carry trailing
/// text after the last conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(&'static str);

impl Pattern {
    pub const fn new(format: &'static str) -> Self {
        Self(format)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Number of conversions in the pattern
    pub fn field_count(&self) -> usize {
        self.0.matches('%').count()
    }

    /// Convert as many fields as possible
    pub fn scan(&self, input: &str) -> Scanned {
        let fmt = self.0.as_bytes();
        let bytes = input.as_bytes();
        let mut values = Vec::with_capacity(self.field_count());
        let mut f = 0;
        let mut pos = 0;

        while f < fmt.len() {
            let c = fmt[f];
            if c.is_ascii_whitespace() {
                while f < fmt.len() && fmt[f].is_ascii_whitespace() {
                    f += 1;
                }
                pos = skip_whitespace(bytes, pos);
                continue;
            }

            if c == b'%' && f + 1 < fmt.len() {
                let start = skip_whitespace(bytes, pos);
                let converted = match fmt[f + 1] {
                    b'd' => read_int(input, start).map(|(v, end)| (Value::Int(v), end)),
                    b'f' => read_float(input, start).map(|(v, end)| (Value::Float(v), end)),
                    b's' => read_word(input, start).map(|(v, end)| (Value::Word(v), end)),
                    _ => None,
                };
                match converted {
                    Some((value, end)) => {
                        values.push(value);
                        pos = end;
                        f += 2;
                        continue;
                    }
                    None => break,
                }
            }

            if pos < bytes.len() && bytes[pos] == c {
                pos += 1;
                f += 1;
            } else {
                break;
            }
        }

        Scanned { values }
    }

    /// Every field converted, or `None`
    pub fn matches(&self, input: &str) -> Option<Scanned> {
        self.matches_at_least(input, self.field_count())
    }

    /// At least `required` fields converted, or `None`
    pub fn matches_at_least(&self, input: &str, required: usize) -> Option<Scanned> {
        let scanned = self.scan(input);
        if scanned.len() >= required {
            Some(scanned)
        } else {
            None
        }
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

fn skip_sign(bytes: &[u8], pos: usize) -> usize {
    if pos < bytes.len() && (bytes[pos] == b'-' || bytes[pos] == b'+') {
        pos + 1
    } else {
        pos
    }
}

fn read_int(input: &str, start: usize) -> Option<(i32, usize)> {
    let bytes = input.as_bytes();
    let digits = skip_sign(bytes, start);
    let end = skip_digits(bytes, digits);
    if end == digits {
        return None;
    }
    input[start..end].parse().ok().map(|v| (v, end))
}

fn read_float(input: &str, start: usize) -> Option<(f32, usize)> {
    let bytes = input.as_bytes();
    let int_start = skip_sign(bytes, start);
    let mut end = skip_digits(bytes, int_start);
    let mut digit_count = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_end = skip_digits(bytes, end + 1);
        digit_count += frac_end - (end + 1);
        end = frac_end;
    }
    if digit_count == 0 {
        return None;
    }

    // Only take an exponent if it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let exp_digits = skip_sign(bytes, end + 1);
        let exp_end = skip_digits(bytes, exp_digits);
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    input[start..end].parse().ok().map(|v| (v, end))
}

fn read_word(input: &str, start: usize) -> Option<(String, usize)> {
    let bytes = input.as_bytes();
    let mut end = start;
    while end < bytes.len() && !bytes[end].is_ascii_whitespace() {
        end += 1;
    }
    if end == start {
        return None;
    }
    Some((input[start..end].to_owned(), end))
}
