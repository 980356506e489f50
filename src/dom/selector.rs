//! CSS selector subset used by [`super::MemoryDom`].
//!
//! Supports type selectors, `*`, `#id`, `.class`, `[attr]`, `[attr="v"]`,
//! `[attr^="v"]`, the descendant combinator, and comma-separated lists.
//! Anything else fails to parse, mirroring the `SyntaxError` a browser raises.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

/// Read access to one element for matching.
pub(crate) trait ElementView {
    fn tag(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches<E: ElementView>(&self, el: &E) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.op, el.attribute(&a.name)) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(v), Some(actual)) => actual == v,
            (AttrOp::Prefix(v), Some(actual)) => !v.is_empty() && actual.starts_with(v.as_str()),
        })
    }
}

/// Parsed selector list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Selector {
    // Each entry is a descendant chain, outermost compound first.
    alternatives: Vec<Vec<Compound>>,
}

impl Selector {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let mut alternatives = Vec::new();
        for part in split_unquoted(raw, |c| c == ',') {
            let chain = split_unquoted(part, char::is_whitespace)
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(parse_compound)
                .collect::<Option<Vec<_>>>()?;
            if chain.is_empty() {
                return None;
            }
            alternatives.push(chain);
        }
        Some(Self { alternatives })
    }

    /// Match `el` given its ancestors, nearest first.
    pub(crate) fn matches<E: ElementView>(&self, el: &E, ancestors: &[&E]) -> bool {
        self.alternatives.iter().any(|chain| matches_chain(chain, el, ancestors))
    }
}

/// Split on `sep` everywhere except inside a quoted attribute value.
fn split_unquoted(raw: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote = None;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if sep(c) => {
                parts.push(&raw[start..i]);
                start = i + c.len_utf8();
            }
            None => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

fn matches_chain<E: ElementView>(chain: &[Compound], el: &E, ancestors: &[&E]) -> bool {
    let Some((last, rest)) = chain.split_last() else {
        return false;
    };
    if !last.matches(el) {
        return false;
    }
    // Descendant-only chains can be matched greedily against the nearest ancestor.
    let mut remaining = rest.iter().rev().peekable();
    for ancestor in ancestors {
        match remaining.peek() {
            Some(compound) if compound.matches(*ancestor) => {
                remaining.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    remaining.peek().is_none()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &[char], pos: &mut usize) -> Option<String> {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    let ident: String = chars[start..*pos].iter().collect();
    let first = ident.chars().next()?;
    if first.is_ascii_digit() {
        return None;
    }
    Some(ident)
}

fn take_attr(chars: &[char], pos: &mut usize) -> Option<AttrMatch> {
    let name = take_ident(chars, pos)?;
    let prefix = match chars.get(*pos) {
        Some(']') => {
            *pos += 1;
            return Some(AttrMatch { name, op: AttrOp::Exists });
        }
        Some('=') => {
            *pos += 1;
            false
        }
        Some('^') if chars.get(*pos + 1) == Some(&'=') => {
            *pos += 2;
            true
        }
        _ => return None,
    };
    let value = match chars.get(*pos) {
        Some(&quote @ ('"' | '\'')) => {
            *pos += 1;
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != quote {
                *pos += 1;
            }
            if *pos >= chars.len() {
                return None;
            }
            let value: String = chars[start..*pos].iter().collect();
            *pos += 1;
            value
        }
        _ => take_ident(chars, pos)?,
    };
    if chars.get(*pos) != Some(&']') {
        return None;
    }
    *pos += 1;
    let op = if prefix { AttrOp::Prefix(value) } else { AttrOp::Equals(value) };
    Some(AttrMatch { name, op })
}

fn parse_compound(raw: &str) -> Option<Compound> {
    let chars: Vec<char> = raw.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else if chars.first().is_some_and(|c| c.is_ascii_alphabetic()) {
        compound.tag = Some(take_ident(&chars, &mut pos)?.to_ascii_lowercase());
    }

    while pos < chars.len() {
        let marker = chars[pos];
        pos += 1;
        match marker {
            '#' => compound.id = Some(take_ident(&chars, &mut pos)?),
            '.' => compound.classes.push(take_ident(&chars, &mut pos)?),
            '[' => compound.attrs.push(take_attr(&chars, &mut pos)?),
            _ => return None,
        }
    }
    Some(compound)
}
