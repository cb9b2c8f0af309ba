//! Checks on generated TypeScript source.
//!
//! These read generated pages the way a JavaScript parser would, just far
//! enough to recover the values embedded in them. Only the embedded literals
//! are checked. The surrounding TSX is never parsed as a whole, so a
//! malformed tag outside a literal goes unnoticed here.

/// Cook every `__html` template literal in `source`.
///
/// Fails if a literal is unterminated, contains an unescaped `${`, or uses an
/// escape the generator never emits.
pub fn cooked_template_literals(source: &str) -> Result<Vec<String>, String> {
    const OPENER: &str = "__html: `";
    let mut cooked = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find(OPENER) {
        let body = &rest[start + OPENER.len()..];
        let (value, consumed) = cook_template_literal(body)?;
        cooked.push(value);
        rest = &body[consumed..];
    }
    Ok(cooked)
}

/// Returns the cooked value and the byte length through the closing backtick
fn cook_template_literal(body: &str) -> Result<(String, usize), String> {
    let mut value = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '`' => return Ok((value, i + 1)),
            '\\' => match chars.next() {
                Some((_, '\\')) => value.push('\\'),
                Some((_, '`')) => value.push('`'),
                Some((_, '$')) => value.push('$'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, other)) => return Err(format!("unexpected escape \\{} at {}", other, i)),
                None => return Err("dangling backslash".to_string()),
            },
            '$' if matches!(chars.peek(), Some((_, '{'))) => {
                return Err(format!("unescaped interpolation at {}", i));
            }
            '\r' => value.push('\n'),
            _ => value.push(c),
        }
    }
    Err("unterminated template literal".to_string())
}

/// Decode each JSON string literal that directly follows `marker`
pub fn json_literals_after(source: &str, marker: &str) -> Result<Vec<String>, String> {
    let mut values = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find(marker) {
        let tail = &rest[start + marker.len()..];
        let mut stream = serde_json::Deserializer::from_str(tail).into_iter::<String>();
        match stream.next() {
            Some(Ok(value)) => {
                let consumed = stream.byte_offset();
                values.push(value);
                rest = &tail[consumed..];
            }
            Some(Err(e)) => return Err(format!("bad literal after {:?}: {}", marker, e)),
            None => return Err(format!("no literal after {:?}", marker)),
        }
    }
    Ok(values)
}
