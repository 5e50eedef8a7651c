//! JavaScript literal quoting and jQuery statement building.

use std::fmt;

/// Wrap `text` in single quotes, escaping it for a JavaScript string literal.
///
/// Shared by every quoted value the crate emits (literal options, size
/// values, toolbar labels, command arguments) so they all escape alike.
pub fn quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            // Keeps `</script>` from closing an inline script block.
            '<' if chars.peek() == Some(&'/') => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Render an iterator of already-rendered expressions as `[a,b,c]`.
pub fn array<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("[");
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push_str(item.as_ref());
    }
    out.push(']');
    out
}

/// Render `(key, value)` string pairs as an object literal with quoted keys
/// and quoted values: `{'k': 'v', 'k2': 'v2'}`.
pub fn string_map<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let body = entries
        .into_iter()
        .map(|(key, value)| format!("{}: {}", quotes(key), quotes(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// A JavaScript function literal, e.g. an elements-path filter callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsScope {
    params: Vec<String>,
    body: String,
}

impl JsScope {
    /// Build a function literal with the given parameter names and body.
    pub fn new<I, S>(params: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            body: body.into(),
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render as `function(a, b) {\nbody\n}`.
    pub fn render(&self) -> String {
        format!("function({}) {{\n{}\n}}", self.params.join(", "), self.body)
    }
}

/// Entry point for jQuery statements targeting one element by markup id.
#[derive(Debug, Clone)]
pub struct JsQuery {
    markup_id: String,
}

impl JsQuery {
    pub fn new(markup_id: impl Into<String>) -> Self {
        Self {
            markup_id: markup_id.into(),
        }
    }

    /// Start a statement with the jQuery selector: `$('#id')`.
    ///
    /// Selector metacharacters in the id are backslash-escaped, so
    /// `notes.v1` selects the element with that id rather than id `notes`
    /// with class `v1`.
    pub fn dollar(&self) -> JsStatement {
        let selector = format!("#{}", escape_selector(&self.markup_id));
        JsStatement {
            buffer: format!("$({})", quotes(&selector)),
        }
    }
}

/// Characters jQuery treats as selector syntax inside an id.
const SELECTOR_META: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^`{|}~";

fn escape_selector(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        if SELECTOR_META.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A method-chain statement such as `$('#id').ckeditor({...})`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsStatement {
    buffer: String,
}

impl JsStatement {
    /// Append `.method(arg1, arg2)`; arguments are inserted verbatim.
    pub fn chain<S: AsRef<str>>(mut self, method: &str, args: &[S]) -> Self {
        self.buffer.push('.');
        self.buffer.push_str(method);
        self.buffer.push('(');
        for (idx, arg) in args.iter().enumerate() {
            if idx > 0 {
                self.buffer.push_str(", ");
            }
            self.buffer.push_str(arg.as_ref());
        }
        self.buffer.push(')');
        self
    }

    /// Append a zero-argument call.
    pub fn call(self, method: &str) -> Self {
        self.chain::<&str>(method, &[])
    }

    /// The statement without a trailing semicolon.
    pub fn expression(&self) -> &str {
        &self.buffer
    }

    /// The statement terminated with `;`.
    pub fn render(&self) -> String {
        format!("{};", self.buffer)
    }
}

impl fmt::Display for JsStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
