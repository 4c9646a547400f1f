// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use icu_unicodeset::{SpanCondition, UnicodeSet};

const ALL_CONDITIONS: [SpanCondition; 3] = [
    SpanCondition::NotContained,
    SpanCondition::Contained,
    SpanCondition::Simple,
];

#[test]
fn strings_only() {
    let set: UnicodeSet = ["ab", "ba"].into_iter().collect();
    assert!(set.code_points().is_empty());

    // "ab" matches, then the trailing "a" is no element
    assert_eq!(set.span("aba", 0, SpanCondition::Contained), 2);
    assert_eq!(set.span("aba", 0, SpanCondition::Simple), 2);
    assert_eq!(set.span_back("aba", 3, SpanCondition::Contained), 1);
    assert_eq!(set.span("aba", 0, SpanCondition::NotContained), 0);
    assert_eq!(set.span("aba", 2, SpanCondition::NotContained), 3);
}

#[test]
fn code_points_and_strings() {
    let mut set = UnicodeSet::from_chars_of("x");
    set.add_str("ya").unwrap();

    assert_eq!(
        set.span_and_count("xyax", 0, SpanCondition::Contained),
        (4, 3)
    );
    assert_eq!(
        set.span_back_and_count("xyax", 4, SpanCondition::Contained),
        (0, 3)
    );
    assert_eq!(set.span("abya", 0, SpanCondition::NotContained), 2);
    assert_eq!(set.span("aby", 0, SpanCondition::NotContained), 3);
    assert_eq!(set.span_back("xyab", 4, SpanCondition::NotContained), 3);
}

#[test]
fn contained_keeps_every_walk() {
    let set: UnicodeSet = ["ab", "abc", "cd"].into_iter().collect();

    assert_eq!(set.span("abcd", 0, SpanCondition::Contained), 4);
    // the longest first match strands "d"
    assert_eq!(set.span("abcd", 0, SpanCondition::Simple), 3);
    assert_eq!(set.span_back("abcd", 4, SpanCondition::Contained), 0);
    assert_eq!(set.span_back("abcd", 4, SpanCondition::Simple), 0);
}

#[test]
fn fewest_elements() {
    let mut set = UnicodeSet::from_chars_of("a");
    set.add_str("aaaa").unwrap();

    assert_eq!(
        set.span_and_count("aaaaa", 0, SpanCondition::Contained),
        (5, 2)
    );
    assert_eq!(
        set.span_back_and_count("aaaaa", 5, SpanCondition::Contained),
        (0, 2)
    );
    assert_eq!(
        set.span_and_count("aaab", 0, SpanCondition::Contained),
        (3, 3)
    );
}

#[test]
fn empty_string_never_matches() {
    let mut set = UnicodeSet::from_chars_of("a");
    set.add_str("").unwrap();

    assert_eq!(set.span("aab", 0, SpanCondition::Contained), 2);
    assert_eq!(set.span("bba", 0, SpanCondition::NotContained), 2);
    assert_eq!(set.span_back("baa", 3, SpanCondition::Simple), 1);
}

#[test]
fn span_and_complement_are_dual() {
    let lower = UnicodeSet::from_range(0x61, 0x7A).unwrap();
    let mut others = lower.clone();
    others.complement().unwrap();

    let text = "abc123def";
    assert_eq!(lower.span(text, 0, SpanCondition::Contained), 3);
    assert_eq!(lower.span(text, 3, SpanCondition::NotContained), 6);
    assert_eq!(lower.span(text, 6, SpanCondition::Contained), 9);
    assert_eq!(lower.span_back(text, 9, SpanCondition::Contained), 6);
    assert_eq!(lower.span_back(text, 6, SpanCondition::NotContained), 3);

    for start in 0..=text.len() {
        assert_eq!(
            lower.span(text, start, SpanCondition::Contained),
            others.span(text, start, SpanCondition::NotContained),
            "{start}"
        );
        assert_eq!(
            lower.span_back(text, start, SpanCondition::NotContained),
            others.span_back(text, start, SpanCondition::Contained),
            "{start}"
        );
    }
}

#[test]
fn code_point_counts() {
    let greek = UnicodeSet::from_range(0x3B1, 0x3C9).unwrap();
    assert_eq!(
        greek.span_and_count("αβγ!", 0, SpanCondition::Contained),
        (6, 3)
    );
    assert_eq!(
        greek.span_back_and_count("!αβ", 5, SpanCondition::Simple),
        (1, 2)
    );
}

#[test]
fn offsets_snap_to_char_boundaries() {
    let set = UnicodeSet::from_chars_of("αβ");
    let text = "αβγ";

    assert_eq!(set.span(text, 0, SpanCondition::Contained), 4);
    // inside 'α', moved forward onto 'β'
    assert_eq!(set.span(text, 1, SpanCondition::Contained), 4);
    // inside 'γ', moved back onto its start
    assert_eq!(set.span_back(text, 5, SpanCondition::NotContained), 4);
    assert_eq!(set.span_back(text, 5, SpanCondition::Contained), 0);
}

#[test]
fn offsets_out_of_bounds() {
    let set = UnicodeSet::from_chars_of("abc");
    for condition in ALL_CONDITIONS {
        assert_eq!(set.span("abc", 3, condition), 3);
        assert_eq!(set.span("abc", 100, condition), 3);
        assert_eq!(set.span_back("abc", 0, condition), 0);
        assert_eq!(set.span("", 0, condition), 0);
        assert_eq!(set.span_back("", 10, condition), 0);
        assert_eq!(set.span_and_count("abc", 5, condition), (3, 0));
    }
    assert_eq!(set.span_back("abc", 100, SpanCondition::Contained), 0);
}

#[test]
fn simple_never_passes_contained() {
    let set: UnicodeSet = ["a", "ab", "abc", "bcd", "cd", "d", "xy"]
        .into_iter()
        .collect();
    for text in ["abcd", "abcdxy", "aabcdd", "bcdab", "xyabc", "dcba"] {
        for start in 0..=text.len() {
            let simple = set.span(text, start, SpanCondition::Simple);
            let contained = set.span(text, start, SpanCondition::Contained);
            assert!(simple <= contained, "{text} from {start}");
            let simple = set.span_back(text, start, SpanCondition::Simple);
            let contained = set.span_back(text, start, SpanCondition::Contained);
            assert!(simple >= contained, "{text} back from {start}");
        }
    }
}

#[test]
fn contains_none_and_some_str() {
    let mut set = UnicodeSet::from_chars_of("!?");
    set.add_str("ng").unwrap();

    assert!(set.contains_none_str("sin a son"));
    assert!(!set.contains_none_str("sing along"));
    assert!(set.contains_none_str("sin gal"));
    assert!(set.contains_some_str("why?"));
}
