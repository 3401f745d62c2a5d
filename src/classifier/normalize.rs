// Text normalization shared by every matching stage

/// Default size of the header region, in characters.
pub const DEFAULT_HEADER_WINDOW: usize = 120;

/// Whitespace for collapsing and trimming: Unicode `Zs`, the ASCII controls
/// `\t\n\v\f\r`, line and paragraph separators, and the BOM. Unlike
/// [`char::is_whitespace`] it counts U+FEFF and excludes U+0085.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Run {
    None,
    Whitespace,
    Separator,
}

fn collapse_runs(text: &str, fold_separators: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = Run::None;

    for c in text.chars() {
        let kind = if is_space(c) {
            Run::Whitespace
        } else if fold_separators && (c == '_' || c == '-') {
            Run::Separator
        } else {
            Run::None
        };

        if kind == Run::None {
            out.push(c);
        } else if kind != run {
            out.push(' ');
        }
        run = kind;
    }

    out
}

/// Collapses every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    collapse_runs(text, false)
}

/// Collapses whitespace runs, turns underscore/hyphen runs into a single
/// space, and lowercases.
///
/// The two kinds of run collapse independently, so `"a - b"` becomes
/// `"a   b"`.
pub fn normalize(text: &str) -> String {
    collapse_runs(text, true).to_lowercase()
}

/// Normalized form of a document plus its header region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    header: String,
}

impl NormalizedText {
    /// Normalizes `"{file_name} {content}"`. The header is the first
    /// `header_window` characters of the result.
    pub fn new(file_name: &str, content: &str, header_window: usize) -> Self {
        let text = normalize(&format!("{file_name} {content}"));
        let header = text.chars().take(header_window).collect();

        Self { text, header }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}
