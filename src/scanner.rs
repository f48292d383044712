//! Substring scanner that finds unordered lists and counts their items.
//!
//! This is not a markup parser. Tags are located by case-insensitive substring
//! search, so `<ul` also matches `<ultra-element>` and `<li` also matches
//! `<link>`. Nested lists are not discovered on their own: an outer list runs
//! to the first `</ul>` after its opening tag, so the items of an inner list
//! are counted as part of the outer one and scanning resumes after that
//! closing tag.
//!
//! Case folding is ASCII-only. A non-ASCII letter whose Unicode lowercase
//! form starts with an ASCII one never matches: `<lİ>` (U+0130) is not an
//! item, although a full Unicode lowercasing of the page would turn it into
//! `<li̇>`.

// ── Match records ─────────────────────────────────────────────────────────────

/// A `<ul ...>...</ul>` region found by [`find_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMatch<'a> {
    /// Text between the opening tag's `>` and the closing `</ul>`.
    pub content: &'a str,
    /// Byte offset just past the closing `</ul>`.
    pub next_index: usize,
}

/// A `<li ...>` opening tag found by [`find_list_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMatch {
    /// Byte offset just past the item tag's `>`.
    pub next_index: usize,
}

// ── Search helpers ────────────────────────────────────────────────────────────

/// ASCII case-insensitive `find` starting at byte offset `from`.
///
/// Needles are ASCII, so every returned offset lies on a char boundary.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes().get(from..)?;
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(from);
    }
    hay.windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|pos| pos + from)
}

fn find_byte(haystack: &str, byte: u8, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes().get(from..)?;
    hay.iter().position(|&b| b == byte).map(|pos| pos + from)
}

// ── Items ─────────────────────────────────────────────────────────────────────

/// Find the next `<li` at or after `start` and the `>` that ends it.
pub fn find_list_item(content: &str, start: usize) -> Option<ItemMatch> {
    let li_start = find_ci(content, "<li", start)?;
    let li_end = find_byte(content, b'>', li_start)?;
    Some(ItemMatch { next_index: li_end + 1 })
}

/// Number of `<li ...>` opening tags in `content`.
pub fn count_list_items(content: &str) -> usize {
    let mut cursor = 0;
    let mut count = 0;
    while let Some(item) = find_list_item(content, cursor) {
        count += 1;
        cursor = item.next_index;
    }
    count
}

// ── Lists ─────────────────────────────────────────────────────────────────────

/// Find the next complete `<ul ...>...</ul>` region at or after `start`.
///
/// Returns `None` when there is no further `<ul`, or when the opening tag has
/// no `>` or no `</ul>` follows it.
pub fn find_list(html: &str, start: usize) -> Option<ListMatch<'_>> {
    let ul_start = find_ci(html, "<ul", start)?;
    let open_end = find_byte(html, b'>', ul_start)?;
    let ul_end = find_ci(html, "</ul>", open_end)?;

    Some(ListMatch {
        content: &html[open_end + 1..ul_end],
        next_index: ul_end + "</ul>".len(),
    })
}

/// Iterator over the lists of a document, in order.
///
/// Discovery ends at the first list that is not terminated; lists after it
/// are never reported.
#[derive(Debug, Clone)]
pub struct Lists<'a> {
    html: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> Iterator for Lists<'a> {
    type Item = ListMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match find_list(self.html, self.cursor) {
            Some(list) => {
                self.cursor = list.next_index;
                Some(list)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Lists<'_> {}

pub fn lists(html: &str) -> Lists<'_> {
    Lists {
        html,
        cursor: 0,
        done: false,
    }
}

/// Item count of the largest list in `html`, or 0 if there is none.
pub fn find_largest_list(html: &str) -> usize {
    lists(html)
        .map(|list| count_list_items(list.content))
        .max()
        .unwrap_or(0)
}
