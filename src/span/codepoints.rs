// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

/// Advances over chars while `contains` agrees with `contained`.
pub(super) fn span(
    text: &str,
    start: usize,
    contained: bool,
    contains: impl Fn(char) -> bool,
) -> (usize, usize) {
    let rest = text.get(start..).unwrap_or_default();
    let mut end = start;
    let mut count = 0;
    for c in rest.chars() {
        if contains(c) != contained {
            break;
        }
        end += c.len_utf8();
        count += 1;
    }
    (end, count)
}

/// Retreats over chars ending at `limit` while `contains` agrees with `contained`.
pub(super) fn span_back(
    text: &str,
    limit: usize,
    contained: bool,
    contains: impl Fn(char) -> bool,
) -> (usize, usize) {
    let head = text.get(..limit).unwrap_or_default();
    let mut begin = limit;
    let mut count = 0;
    for c in head.chars().rev() {
        if contains(c) != contained {
            break;
        }
        begin -= c.len_utf8();
        count += 1;
    }
    (begin, count)
}
