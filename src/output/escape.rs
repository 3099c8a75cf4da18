//! Cell quoting and line assembly

/// Quote each value and join them into one newline-terminated line
///
/// Values are wrapped verbatim: embedded quotes, commas and newlines are
/// not escaped. An empty input yields an empty string with no terminator.
pub fn escape_line<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let mut line = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            line.push(',');
        }
        line.push('"');
        line.push_str(value.as_ref());
        line.push('"');
    }
    line.push('\n');
    line
}
