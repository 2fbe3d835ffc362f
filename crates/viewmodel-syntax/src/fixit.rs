//! Applying fix-its to source text.
//!
//! Fix-its are only suggestions; nothing in this crate applies them on its
//! own. Tools that accept them (the lint's `--fix`) call [`apply`].
//!
//! Anchors are resolved through span locations, so this only works on spans
//! produced outside a compiler invocation (e.g. by `syn::parse_file`).

use crate::{Error, FixIt, Result};
use proc_macro2::LineColumn;

const BOM: char = '\u{feff}';

/// Byte offset of a 1-based line / 0-based char column in `source`.
pub fn offset_of(source: &str, at: LineColumn) -> Option<usize> {
    if at.line == 0 {
        return None;
    }
    let mut line_start = 0;
    for _ in 1..at.line {
        line_start += source[line_start..].find('\n')? + 1;
    }
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |n| line_start + n);
    let line = &source[line_start..line_end];

    if at.column == line.chars().count() {
        return Some(line_end);
    }
    line.char_indices()
        .nth(at.column)
        .map(|(byte, _)| line_start + byte)
}

/// Skip the anchor's trailing trivia: whitespace, `/* .. */` comments that
/// close on the same line, and a final `//` comment up to the end of the
/// line. Anything else on the line stops the skip.
fn after_trailing_trivia(source: &str, offset: usize) -> usize {
    let rest = &source[offset..];
    let line = rest.find('\n').map_or(rest, |n| &rest[..n]);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut trivia = line;
    loop {
        trivia = trivia.trim_start();
        if trivia.is_empty() || trivia.starts_with("//") {
            return offset + line.len();
        }
        let closed = trivia
            .strip_prefix("/*")
            .and_then(|comment| comment.find("*/").map(|end| &comment[end + 2..]));
        match closed {
            Some(after) => trivia = after,
            None => return offset,
        }
    }
}

/// `\r\n` if the first line of `source` ends with it, `\n` otherwise.
fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(n) if source[..n].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Insertion point for `fix_it` in `source`.
///
/// A leading byte order mark is not part of the parsed text, so span
/// positions are resolved after it.
pub fn insertion_offset(source: &str, fix_it: &FixIt) -> Result<usize> {
    let (bom, text) = match source.strip_prefix(BOM) {
        Some(text) => (BOM.len_utf8(), text),
        None => (0, source),
    };
    let end = fix_it.anchor.end();
    let offset = offset_of(text, end)
        .ok_or_else(|| Error::anchor_out_of_range(end.line, end.column))?;
    Ok(after_trailing_trivia(source, bom + offset))
}

/// Return `source` with every fix-it applied.
///
/// Fix-its that share an insertion point are spliced in the order given,
/// so applying a declaration's diagnostics in report order yields
/// State, Action, reduce from top to bottom. Inserted lines use the line
/// ending of `source`.
pub fn apply<'a, I>(source: &str, fix_its: I) -> Result<String>
where
    I: IntoIterator<Item = &'a FixIt>,
{
    let line_ending = line_ending(source);
    let mut edits = fix_its
        .into_iter()
        .map(|fix_it| {
            let offset = insertion_offset(source, fix_it)?;
            Ok((offset, fix_it.insertion_with(line_ending)))
        })
        .collect::<Result<Vec<_>>>()?;
    // stable: equal offsets keep their order
    edits.sort_by_key(|(offset, _)| *offset);

    let inserted: usize = edits.iter().map(|(_, text)| text.len()).sum();
    let mut output = String::with_capacity(source.len() + inserted);
    let mut cursor = 0;
    for (offset, text) in edits {
        output.push_str(&source[cursor..offset]);
        output.push_str(&text);
        cursor = offset;
    }
    output.push_str(&source[cursor..]);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate, Diagnostic, TypeDeclaration};

    fn declaration(source: &str) -> TypeDeclaration {
        let file = syn::parse_file(source).unwrap();
        let syn::Item::Mod(item) = &file.items[0] else {
            panic!("expected module");
        };
        TypeDeclaration::from_item_mod(item).unwrap()
    }

    fn fix(source: &str) -> (Vec<Diagnostic>, String) {
        let decl = declaration(source);
        let mut diagnostics = Vec::new();
        validate(&decl, &mut diagnostics);
        let fixed = apply(source, diagnostics.iter().flat_map(|d| &d.fix_its)).unwrap();
        (diagnostics, fixed)
    }

    #[test]
    fn test_offset_of() {
        let source = "ab\ncdé\nf";
        assert_eq!(offset_of(source, LineColumn { line: 1, column: 0 }), Some(0));
        assert_eq!(offset_of(source, LineColumn { line: 1, column: 2 }), Some(2));
        assert_eq!(offset_of(source, LineColumn { line: 2, column: 3 }), Some(7));
        assert_eq!(offset_of(source, LineColumn { line: 3, column: 1 }), Some(9));
        assert_eq!(offset_of(source, LineColumn { line: 4, column: 0 }), None);
        assert_eq!(offset_of(source, LineColumn { line: 0, column: 0 }), None);
    }

    #[test]
    fn test_insert_missing_state() {
        let source = "mod counter {\n    enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n";
        let (diagnostics, fixed) = fix(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            fixed,
            "mod counter {\n    struct State { }\n\n    enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n"
        );
    }

    #[test]
    fn test_insert_all_in_report_order() {
        let source = "mod empty {}\n";
        let (diagnostics, fixed) = fix(source);

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            fixed,
            "mod empty {\n    struct State { }\n\n    enum Action { }\n\n    fn reduce(state: &mut State, action: Action) { }\n}\n"
        );
        let (remaining, _) = fix(&fixed);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_trailing_comment_is_preserved() {
        let source = "mod counter { // store\n    enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n";
        let (_, fixed) = fix(source);
        assert!(fixed.starts_with("mod counter { // store\n    struct State { }\n\n    enum Action {}"));
    }

    #[test]
    fn test_trailing_block_comments_are_preserved() {
        let source = "mod counter { /* note */\n    enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n";
        let (_, fixed) = fix(source);
        assert!(fixed.starts_with("mod counter { /* note */\n    struct State { }\n\n    enum Action {}"));

        let source = "mod counter { /* a */ /* b */ // c\n    enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n";
        let (_, fixed) = fix(source);
        assert!(fixed.starts_with("mod counter { /* a */ /* b */ // c\n    struct State { }\n\n"));
    }

    #[test]
    fn test_code_after_block_comment_stops_skip() {
        let source = "mod counter { /* note */ enum Action {}\n    fn reduce(state: &mut State, action: Action) {}\n}\n";
        let (_, fixed) = fix(source);
        assert!(fixed.starts_with("mod counter {\n    struct State { }\n /* note */ enum Action {}"));
        syn::parse_file(&fixed).unwrap();
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let source = "\u{feff}mod counter { enum Action {} fn reduce(state: &mut State, action: Action) {} }";
        let (diagnostics, fixed) = fix(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            fixed,
            "\u{feff}mod counter {\n    struct State { }\n enum Action {} fn reduce(state: &mut State, action: Action) {} }"
        );
        let (remaining, _) = fix(&fixed);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_kept() {
        let source = "mod counter {\r\n    enum Action {}\r\n    fn reduce(state: &mut State, action: Action) {}\r\n}\r\n";
        let (_, fixed) = fix(source);

        assert_eq!(
            fixed,
            "mod counter {\r\n    struct State { }\r\n\r\n    enum Action {}\r\n    fn reduce(state: &mut State, action: Action) {}\r\n}\r\n"
        );
        assert_eq!(fixed.matches('\n').count(), fixed.matches("\r\n").count());
    }

    #[test]
    fn test_anchor_out_of_range() {
        let decl = declaration("mod counter {\n}\n");
        let mut diagnostics = Vec::new();
        validate(&decl, &mut diagnostics);

        let err = apply("", diagnostics.iter().flat_map(|d| &d.fix_its)).unwrap_err();
        assert!(matches!(err, Error::AnchorOutOfRange { line: 1, .. }));
    }
}
