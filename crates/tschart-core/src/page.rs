// File: crates/tschart-core/src/page.rs
// Summary: Page seam for mount substitution plus an in-memory HTML document implementation.

/// Something a rendered chart can be mounted into.
pub trait Page {
    /// Replace the first element matching `selector` with `markup`, wholesale.
    /// Returns `false` (and changes nothing) when no element matches.
    fn replace_element(&mut self, selector: &str, markup: &str) -> bool;
}

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw text and must not be scanned for tags.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Simple compound selector: `tag`, `#id`, `.class`, `[attr]`, `[attr=value]` and
/// combinations of them such as `img#chart.placeholder`. No combinators or lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

impl Selector {
    /// Parse a selector; `None` when it uses syntax outside the supported subset.
    pub fn parse(input: &str) -> Option<Self> {
        let mut rest = input.trim();
        if rest.is_empty() {
            return None;
        }
        let mut sel = Selector::default();

        if rest.starts_with('*') {
            rest = &rest[1..];
        } else {
            let (tag, tail) = take_ident(rest);
            if !tag.is_empty() {
                sel.tag = Some(tag.to_ascii_lowercase());
                rest = tail;
            }
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '#' | '.' => {
                    let (ident, tail) = take_ident(&rest[1..]);
                    if ident.is_empty() {
                        return None;
                    }
                    if c == '#' {
                        sel.id = Some(ident.to_string());
                    } else {
                        sel.classes.push(ident.to_string());
                    }
                    rest = tail;
                }
                '[' => {
                    let close = rest.find(']')?;
                    let inner = &rest[1..close];
                    let (name, value) = match inner.split_once('=') {
                        Some((n, v)) => (n.trim(), Some(v.trim().trim_matches(|q| q == '"' || q == '\'').to_string())),
                        None => (inner.trim(), None),
                    };
                    if name.is_empty() || !name.chars().all(is_ident_char) {
                        return None;
                    }
                    sel.attrs.push((name.to_ascii_lowercase(), value));
                    rest = &rest[close + 1..];
                }
                _ => return None,
            }
        }
        Some(sel)
    }

    fn matches(&self, tag: &StartTag) -> bool {
        if let Some(name) = &self.tag {
            if *name != tag.name {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if tag.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        let classes = tag.attr("class").unwrap_or("");
        if !self.classes.iter().all(|c| classes.split_whitespace().any(|have| have == c)) {
            return false;
        }
        self.attrs.iter().all(|(name, want)| match (tag.attr(name), want) {
            (Some(_), None) => true,
            (Some(have), Some(want)) => have == want,
            (None, _) => false,
        })
    }
}

#[derive(Debug)]
struct StartTag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
}

impl StartTag {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
    fn is_void(&self) -> bool {
        self.self_closing || VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

#[derive(Debug)]
enum Token {
    Start(StartTag),
    End(String),
}

/// Tokens with their byte span `[start, end)` in the source.
struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn skip_past(&mut self, needle: &str) {
        self.pos = match self.src[self.pos..].find(needle) {
            Some(i) => self.pos + i + needle.len(),
            None => self.src.len(),
        };
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let rest = &self.src[self.pos..];
        let end = rest.find(|c: char| !keep(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn start_tag(&mut self) -> StartTag {
        self.pos += 1; // '<'
        let name = self.read_while(|c| is_ident_char(c) || c == ':').to_ascii_lowercase();
        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            let rest = &self.src[self.pos..];
            if rest.is_empty() {
                break;
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                self_closing = true;
                break;
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break;
            }
            if rest.starts_with('/') {
                self.pos += 1;
                continue;
            }
            let key = self
                .read_while(|c| !c.is_whitespace() && c != '=' && c != '>' && c != '/')
                .to_ascii_lowercase();
            self.skip_whitespace();
            let mut value = String::new();
            if self.src[self.pos..].starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                let rest = &self.src[self.pos..];
                match rest.chars().next() {
                    Some(q @ ('"' | '\'')) => {
                        let body = &rest[1..];
                        let end = body.find(q).unwrap_or(body.len());
                        value = body[..end].to_string();
                        self.pos += 1 + (end + 1).min(body.len());
                    }
                    _ => value = self.read_while(|c| !c.is_whitespace() && c != '>').to_string(),
                }
            }
            if key.is_empty() {
                // stray character; step over it
                self.pos += self.src[self.pos..].chars().next().map_or(0, char::len_utf8);
                continue;
            }
            attrs.push((key, value));
        }
        StartTag { name, attrs, self_closing }
    }
}

impl Iterator for Tokens<'_> {
    type Item = (usize, usize, Token);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let offset = self.src[self.pos..].find('<')?;
            let start = self.pos + offset;
            self.pos = start;
            let rest = &self.src[start..];

            if rest.starts_with("<!--") {
                self.skip_past("-->");
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past(">");
            } else if let Some(after) = rest.strip_prefix("</") {
                let (name, _) = take_ident(after);
                let name = name.to_ascii_lowercase();
                self.skip_past(">");
                return Some((start, self.pos, Token::End(name)));
            } else if rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                let tag = self.start_tag();
                let end = self.pos;
                if RAW_TEXT_ELEMENTS.contains(&tag.name.as_str()) && !tag.self_closing {
                    // jump to the closing tag so its content is not tokenized
                    let close = format!("</{}", tag.name);
                    let lower = self.src[self.pos..].to_ascii_lowercase();
                    self.pos = lower.find(&close).map_or(self.src.len(), |i| self.pos + i);
                }
                return Some((start, end, Token::Start(tag)));
            } else {
                self.pos += 1;
            }
        }
    }
}

/// Byte range of the first element matching `selector`, including its closing tag.
fn find_element(html: &str, selector: &Selector) -> Option<(usize, usize)> {
    let mut tokens = Tokens::new(html);
    let (start, start_end, tag) = tokens.by_ref().find_map(|(s, e, t)| match t {
        Token::Start(tag) if selector.matches(&tag) => Some((s, e, tag)),
        _ => None,
    })?;
    if tag.is_void() {
        return Some((start, start_end));
    }

    let mut depth = 1usize;
    for (_, end, token) in tokens {
        match token {
            Token::Start(inner) if inner.name == tag.name && !inner.is_void() => depth += 1,
            Token::End(name) if name == tag.name => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, end));
                }
            }
            _ => {}
        }
    }
    // never closed: only the start tag is replaced
    Some((start, start_end))
}

/// HTML document held in memory, e.g. a page template read from disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlPage {
    html: String,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
    pub fn as_str(&self) -> &str { &self.html }
    pub fn into_string(self) -> String { self.html }
}

impl Page for HtmlPage {
    fn replace_element(&mut self, selector: &str, markup: &str) -> bool {
        let Some(sel) = Selector::parse(selector) else {
            tracing::warn!(selector, "unsupported selector syntax");
            return false;
        };
        match find_element(&self.html, &sel) {
            Some((start, end)) => {
                self.html.replace_range(start..end, markup);
                true
            }
            None => false,
        }
    }
}
