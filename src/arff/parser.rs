use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};

pub(super) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('%')
}

pub(super) fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2
        && ((b[0] == b'\'' && b[b.len() - 1] == b'\'')
            || (b[0] == b'"' && b[b.len() - 1] == b'"'))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

pub(super) fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in line.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => {
                    current.push(c);
                    quote = Some(c);
                }
                ',' => {
                    tokens.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }
    tokens.push(current.trim().to_string());
    tokens
}

/// Consumes the reader up to and including the `@data` directive, returning
/// the relation name and attribute declarations.
pub(super) fn parse_header(
    reader: &mut BufReader<File>,
) -> Result<(String, Vec<NominalAttribute>), Error> {
    let mut relation: Option<String> = None;
    let mut attributes: Vec<NominalAttribute> = Vec::new();
    let mut line = String::new();
    let mut pending_line: Option<String> = None;

    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(Error::new(
                ErrorKind::UnexpectedEof,
                "ARFF file ended before @data",
            ));
        }
        if is_comment_or_empty(&line) {
            continue;
        }

        let low = line.to_lowercase();
        if low.starts_with("@relation") {
            let raw = line.trim()[9..].trim();
            relation = Some(strip_surrounding_quotes(raw).to_string());
            break;
        } else if low.starts_with("@attribute") || low.starts_with("@data") {
            pending_line = Some(line.clone());
            break;
        }
    }

    loop {
        if let Some(pending) = pending_line.take() {
            line = pending;
        } else {
            line.clear();
            let n = reader.read_line(&mut line)?;
            if n == 0 {
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    "ARFF file ended before @data",
                ));
            }
        }

        if is_comment_or_empty(&line) {
            continue;
        }

        let low = line.to_lowercase();
        if low.starts_with("@attribute") {
            attributes.push(parse_attribute_line(&line)?);
        } else if low.starts_with("@data") {
            break;
        } else {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Unsupported header directive: {}", line.trim()),
            ));
        }
    }

    Ok((
        relation.unwrap_or_else(|| "unnamed_relation".to_string()),
        attributes,
    ))
}

pub(super) fn parse_attribute_line(line: &str) -> Result<NominalAttribute, Error> {
    let rest = {
        let mut l = line.trim();
        let low = l.to_ascii_lowercase();
        if !low.starts_with("@attribute") {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Line is not '@attribute'",
            ));
        }
        if let Some(idx) = low.find("@attribute") {
            l = &l[idx + "@attribute".len()..];
        }
        l.trim()
    };

    let (name, after_name) = if rest.starts_with('\'') || rest.starts_with('"') {
        let quote = rest.chars().next().unwrap_or('\'');
        let mut end = None;
        for (i, c) in rest.char_indices().skip(1) {
            if c == quote {
                end = Some(i);
                break;
            }
        }
        let end = end.ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                "Attribute name without closing quote marks",
            )
        })?;
        let name = rest[1..end].to_string();
        (name, rest[end + 1..].trim())
    } else {
        let mut it = rest.splitn(2, char::is_whitespace);
        let name = it.next().unwrap_or_default().to_string();
        let after = it
            .next()
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Attribute type is missing"))?;
        (name, after.trim())
    };

    let low = after_name.to_ascii_lowercase();
    if low.starts_with("numeric") || low.starts_with("real") || low.starts_with("integer") {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("Attribute '{name}' is numeric; only nominal attributes are supported"),
        ));
    }

    if after_name.starts_with('{') {
        let close = after_name
            .rfind('}')
            .ok_or_else(|| Error::new(ErrorKind::InvalidData, "Nominal set without closing '}'"))?;

        let inside = &after_name[1..close];
        let values = inside
            .split(',')
            .map(|s| strip_surrounding_quotes(s.trim()).to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if values.is_empty() {
            return Err(Error::new(ErrorKind::InvalidData, "Empty nominal domain"));
        }

        return Ok(NominalAttribute::new(name, values));
    }

    Err(Error::new(
        ErrorKind::InvalidData,
        format!("Attribute kind not supported: {after_name}"),
    ))
}

/// Maps one data line to attribute value indices against the header.
pub(super) fn parse_row_values(header: &InstanceHeader, line: &str) -> Result<Vec<usize>, Error> {
    let tokens = split_csv_preserving_quotes(line);
    if tokens.len() != header.number_of_attributes() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "Number of columns ({}) differs from number of attributes ({})",
                tokens.len(),
                header.number_of_attributes()
            ),
        ));
    }

    let mut values = Vec::with_capacity(tokens.len());
    for (idx, raw) in tokens.into_iter().enumerate() {
        let raw = raw.trim();
        if raw == "?" {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("Missing value marker '?' at column #{idx} is not supported"),
            ));
        }

        let attribute = header.attribute(idx).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!("No attribute declared for column #{idx}"),
            )
        })?;
        let key = strip_surrounding_quotes(raw);
        let Some(pos) = attribute.index_of_value(key) else {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Nominal value '{key}' not found in domain of attribute '{}'",
                    attribute.name()
                ),
            ));
        };
        values.push(pos);
    }

    Ok(values)
}
