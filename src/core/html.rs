// src/core/html.rs
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Does the opening tag of `block` carry `attr="value"`?
/// Tolerates single quotes, double quotes, unquoted, multi-valued attrs.
pub fn opener_has_attr(block: &str, attr: &str, value: &str) -> bool {
    let end = block.find('>').unwrap_or(block.len());
    let opener = to_lower(&block[..end]);
    let attr = to_lower(attr);
    let value = to_lower(value);
    opener.contains(&format!(r#"{}="{}""#, attr, value))
        || opener.contains(&format!(r#"{}='{}'"#, attr, value))
        || (opener.contains(&format!("{}=", attr)) && opener.contains(&value))
}

/// n-th (0-based) `o`…`c` block whose opener carries class `class`.
pub fn nth_block_with_class_ci<'a>(
    s: &'a str,
    o: &str,
    c: &str,
    class: &str,
    n: usize,
) -> Option<&'a str> {
    let mut pos = 0usize;
    let mut seen = 0usize;
    while let Some((bs, be)) = next_tag_block_ci(s, o, c, pos) {
        let block = &s[bs..be];
        pos = be;
        if !opener_has_attr(block, "class", class) {
            continue;
        }
        if seen == n {
            return Some(block);
        }
        seen += 1;
    }
    None
}

/// Raw inner text of every `o`…`c` block in `s`, in document order.
/// Callers sanitize (entities, tags, whitespace) as needed.
pub fn tag_inner_texts(s: &str, o: &str, c: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((bs, be)) = next_tag_block_ci(s, o, c, pos) {
        out.push(inner_after_open_tag(&s[bs..be]));
        pos = be;
    }
    out
}
