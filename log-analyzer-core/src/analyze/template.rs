/// Substitutes `$name` and `${name}` placeholders in `template`.
///
/// `$$` yields a literal `$`. Placeholders without a value and malformed ones
/// are copied through unchanged.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let lookup = |name: &str| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| *v);

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
            continue;
        }

        if let Some(braced) = after.strip_prefix('{') {
            let name_len = identifier_len(braced);
            if name_len > 0 && braced[name_len..].starts_with('}') {
                let name = &braced[..name_len];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[pos..pos + name_len + 3]),
                }
                rest = &braced[name_len + 1..];
                continue;
            }
        } else {
            let name_len = identifier_len(after);
            if name_len > 0 {
                let name = &after[..name_len];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('$');
                        out.push_str(name);
                    }
                }
                rest = &after[name_len..];
                continue;
            }
        }

        out.push('$');
        rest = after;
    }

    out.push_str(rest);
    out
}

/// Length of the ASCII identifier (`[_a-zA-Z][_a-zA-Z0-9]*`) at the start of `s`.
fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(*c == '_' || c.is_ascii_alphanumeric()))
        .map_or(s.len(), |(i, _)| i)
}
