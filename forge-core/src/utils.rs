//! Shared utility functions for code generation.

use std::path::{Component, Path, PathBuf};

/// Split a string into words.
///
/// Words are separated by any non-alphanumeric character, by a lowercase to
/// uppercase transition (`myIcon`), by the end of an uppercase run that is
/// followed by a capitalized word (`HTMLParser`) and by letter/digit
/// transitions (`icon2x`). Apostrophes are dropped without splitting
/// (`don't` is one word) and Latin-1 accented letters are folded to ASCII.
pub fn split_words(s: &str) -> Vec<String> {
    let chars = fold_chars(s);
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p))
            && prev.is_alphanumeric()
            && is_boundary(prev, c, chars.get(i + 1).copied())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn fold_chars(s: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            // Apostrophes and combining diacritical marks
            '\'' | '\u{2019}' | '\u{0300}'..='\u{036f}' => {}
            _ => match deburr(c) {
                Some(ascii) => chars.extend(ascii.chars()),
                None => chars.push(c),
            },
        }
    }
    chars
}

/// ASCII replacement for a Latin-1 Supplement letter.
fn deburr(c: char) -> Option<&'static str> {
    let ascii = match c {
        'À'..='Å' => "A",
        'Æ' => "Ae",
        'Ç' => "C",
        'È'..='Ë' => "E",
        'Ì'..='Ï' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò'..='Ö' | 'Ø' => "O",
        'Ù'..='Ü' => "U",
        'Ý' => "Y",
        'Þ' => "Th",
        'ß' => "ss",
        'à'..='å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è'..='ë' => "e",
        'ì'..='ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò'..='ö' | 'ø' => "o",
        'ù'..='ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        _ => return None,
    };
    Some(ascii)
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    let digit_change = prev.is_numeric() != c.is_numeric();
    let lower_to_upper = !prev.is_uppercase() && !prev.is_numeric() && c.is_uppercase();
    let acronym_end =
        prev.is_uppercase() && c.is_uppercase() && next.is_some_and(|n| n.is_lowercase());
    digit_change || lower_to_upper || acronym_end
}

/// Convert a string to PascalCase (e.g., "arrow-left" -> "ArrowLeft", "HTMLParser" -> "HtmlParser")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Lexically normalize a path, resolving `.` and `..` without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Render a path with `/` separators regardless of platform.
///
/// `.` components are dropped, so an empty relative path renders as `""`.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            Component::RootDir => Some(String::new()),
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}
