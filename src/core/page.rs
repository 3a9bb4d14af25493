//! Naive HTML string helpers tailored to the site's page structure.
//! Elements are located by their `id` attribute; tag matching is ASCII
//! case-insensitive and nesting-aware for same-named tags.

/// One HTML document being populated. Containers are pre-existing elements
/// identified by `id`; a missing container makes every operation a no-op.
#[derive(Debug, Clone)]
pub struct Page {
    html: String,
}

#[derive(Debug)]
struct ElementSpan {
    /// Index just past the `>` of the opening tag.
    open_end: usize,
    /// Index of the `<` of the matching closing tag.
    close_start: usize,
}

impl Page {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn has_element(&self, id: &str) -> bool {
        find_by_id(&self.html, id).is_some()
    }

    /// Append a fragment inside the element with the given id.
    /// Returns false (and leaves the page untouched) when the element is absent.
    pub fn append_html(&mut self, id: &str, fragment: &str) -> bool {
        match find_by_id(&self.html, id) {
            Some(span) => {
                self.html.insert_str(span.close_start, fragment);
                true
            }
            None => false,
        }
    }

    /// Replace the inner content of the element with escaped text.
    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        match find_by_id(&self.html, id) {
            Some(span) => {
                self.html
                    .replace_range(span.open_end..span.close_start, &escape_html(text));
                true
            }
            None => false,
        }
    }

    /// Append a row inside the `tbody` of the table with the given id.
    /// Absent table or absent `tbody` is a silent no-op.
    pub fn append_into_table_body(&mut self, table_id: &str, row: &str) -> bool {
        let table = match find_by_id(&self.html, table_id) {
            Some(span) => span,
            None => return false,
        };

        let inner = &self.html[table.open_end..table.close_start];
        let inner_lc = inner.to_ascii_lowercase();
        let tb_open = match inner_lc.find("<tbody") {
            Some(pos) => pos,
            None => return false,
        };
        let tb_open_end = match inner[tb_open..].find('>') {
            Some(pos) => tb_open + pos + 1,
            None => return false,
        };
        let tb_close = match inner_lc[tb_open_end..].find("</tbody") {
            Some(pos) => tb_open_end + pos,
            None => return false,
        };

        self.html.insert_str(table.open_end + tb_close, row);
        true
    }

    /// Insert a fragment just before `</body>`, or at the end of the
    /// document when no body close tag exists.
    pub fn inject_before_body_end(&mut self, fragment: &str) -> bool {
        let lower = self.html.to_ascii_lowercase();
        match lower.rfind("</body>") {
            Some(pos) => self.html.insert_str(pos, fragment),
            None => self.html.push_str(fragment),
        }
        true
    }
}

pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Locate the element carrying `id="{id}"` (or single-quoted) and return the
/// span between its opening and closing tags.
fn find_by_id(html: &str, id: &str) -> Option<ElementSpan> {
    let double_quoted = format!("id=\"{}\"", id);
    let single_quoted = format!("id='{}'", id);
    let attr_pos = find_id_attr(html, &double_quoted)
        .or_else(|| find_id_attr(html, &single_quoted))?;

    // Back up to the `<` that opens the tag and read the tag name.
    let tag_start = html[..attr_pos].rfind('<')?;
    let tag: String = html[tag_start + 1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag.is_empty() {
        return None;
    }

    let open_end = html[attr_pos..].find('>')? + attr_pos + 1;
    let close_start = find_matching_close(html, &tag, open_end)?;
    Some(ElementSpan {
        open_end,
        close_start,
    })
}

// Attribute names are whitespace-separated, so a real `id=` is always
// preceded by whitespace; `data-id="x"` must not match.
fn find_id_attr(html: &str, needle: &str) -> Option<usize> {
    let mut search = 0;
    loop {
        let hit = html[search..].find(needle)? + search;
        if hit > 0 && html.as_bytes()[hit - 1].is_ascii_whitespace() {
            return Some(hit);
        }
        search = hit + needle.len();
    }
}

/// From `from` onwards, find the closing tag matching the already-opened
/// `tag`, skipping over nested elements of the same name.
fn find_matching_close(html: &str, tag: &str, from: usize) -> Option<usize> {
    let lower = html.to_ascii_lowercase();
    let tag = tag.to_ascii_lowercase();
    let open_pat = format!("<{}", tag);
    let close_pat = format!("</{}", tag);

    let mut depth = 0usize;
    let mut pos = from;
    loop {
        let close = find_tag(&lower, &close_pat, pos)?;
        match find_tag(&lower, &open_pat, pos).filter(|&o| o < close) {
            Some(o) => {
                depth += 1;
                pos = o + open_pat.len();
            }
            None => {
                if depth == 0 {
                    return Some(close);
                }
                depth -= 1;
                pos = close + close_pat.len();
            }
        }
    }
}

// Next occurrence of the tag pattern that is not a prefix of a longer tag
// name (`<div` must not match `<divider`, `</p` must not match `</pre`).
fn find_tag(lower: &str, pat: &str, from: usize) -> Option<usize> {
    let mut search = from;
    loop {
        let hit = lower[search..].find(pat)? + search;
        if is_name_boundary(lower.as_bytes(), hit + pat.len()) {
            return Some(hit);
        }
        search = hit + pat.len();
    }
}

fn is_name_boundary(bytes: &[u8], idx: usize) -> bool {
    match bytes.get(idx) {
        Some(b) => !(b.is_ascii_alphanumeric() || *b == b'-'),
        None => true,
    }
}
