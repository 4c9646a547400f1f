// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Range;
use zerovec::vecs::Index32;
use zerovec::VarZeroVec;

use super::SpanCondition;
use crate::strings::StringMembers;

/// Matcher for the non-empty string members of a set.
///
/// Strings are indexed by their first and by their last `char`, so only members that can
/// start (or end) at a position are compared against the text there.
#[derive(Debug, Clone)]
pub(crate) struct StringSpan {
    // Ascending, so strings sharing a first char are adjacent
    strings: VarZeroVec<'static, str, Index32>,
    // First char of each entry of `strings`
    first_chars: Vec<char>,
    // (last char, index into `strings`), ascending
    by_last: Vec<(char, usize)>,
    // Strings with at least one code point outside the set
    relevant: usize,
}

impl StringSpan {
    /// Builds a matcher over the non-empty members, or `None` if there are none.
    ///
    /// `contains` decides which strings are relevant: a string whose code points are all
    /// members can never extend a run that the code points alone do not already cover.
    pub(crate) fn try_new(
        members: &StringMembers,
        contains: impl Fn(char) -> bool,
    ) -> Option<Self> {
        let strings: Vec<&str> = members.iter().filter(|s| !s.is_empty()).collect();
        if strings.is_empty() {
            return None;
        }
        let relevant = strings.iter().filter(|s| !s.chars().all(&contains)).count();
        let first_chars = strings.iter().filter_map(|s| s.chars().next()).collect();
        let mut by_last: Vec<(char, usize)> = strings
            .iter()
            .enumerate()
            .filter_map(|(i, s)| Some((s.chars().next_back()?, i)))
            .collect();
        by_last.sort_unstable();
        Some(Self {
            strings: VarZeroVec::<str, Index32>::from(&strings),
            first_chars,
            by_last,
            relevant,
        })
    }

    /// Whether some string could extend a span beyond the code point members
    pub(crate) fn needs_string_span(&self) -> bool {
        self.relevant > 0
    }

    fn starting_with(&self, c: char) -> Range<usize> {
        let lo = self.first_chars.partition_point(|&first| first < c);
        let hi = self.first_chars.partition_point(|&first| first <= c);
        lo..hi
    }

    /// Byte lengths of the strings that are prefixes of `rest`
    fn matches_at<'a>(&'a self, rest: &'a str) -> impl Iterator<Item = usize> + 'a {
        let candidates = rest
            .chars()
            .next()
            .map(|c| self.starting_with(c))
            .unwrap_or_default();
        candidates
            .filter_map(move |i| self.strings.get(i))
            .filter(move |s| rest.starts_with(*s))
            .map(str::len)
    }

    /// Byte lengths of the strings that are suffixes of `head`
    fn matches_before<'a>(&'a self, head: &'a str) -> impl Iterator<Item = usize> + 'a {
        let candidates = match head.chars().next_back() {
            Some(c) => {
                let lo = self.by_last.partition_point(|&(last, _)| last < c);
                let hi = self.by_last.partition_point(|&(last, _)| last <= c);
                self.by_last.get(lo..hi).unwrap_or_default()
            }
            None => &[],
        };
        candidates
            .iter()
            .filter_map(move |&(_, i)| self.strings.get(i))
            .filter(move |s| head.ends_with(*s))
            .map(str::len)
    }

    /// Scans forward from the char boundary `start`.
    pub(crate) fn span(
        &self,
        text: &str,
        start: usize,
        condition: SpanCondition,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        match condition {
            SpanCondition::NotContained => self.span_not_contained(text, start, contains),
            SpanCondition::Contained => self.span_contained(text, start, contains),
            SpanCondition::Simple => self.span_simple(text, start, contains),
        }
    }

    /// Scans backward from the char boundary `limit`.
    pub(crate) fn span_back(
        &self,
        text: &str,
        limit: usize,
        condition: SpanCondition,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        match condition {
            SpanCondition::NotContained => self.span_back_not_contained(text, limit, contains),
            SpanCondition::Contained => self.span_back_contained(text, limit, contains),
            SpanCondition::Simple => self.span_back_simple(text, limit, contains),
        }
    }

    fn span_not_contained(
        &self,
        text: &str,
        start: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut pos = start;
        let mut count = 0;
        while let Some(rest) = text.get(pos..) {
            let Some(c) = rest.chars().next() else {
                break;
            };
            if contains(c) || self.matches_at(rest).next().is_some() {
                break;
            }
            pos += c.len_utf8();
            count += 1;
        }
        (pos, count)
    }

    fn span_back_not_contained(
        &self,
        text: &str,
        limit: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut pos = limit;
        let mut count = 0;
        while let Some(head) = text.get(..pos) {
            let Some(c) = head.chars().next_back() else {
                break;
            };
            if contains(c) || self.matches_before(head).next().is_some() {
                break;
            }
            pos -= c.len_utf8();
            count += 1;
        }
        (pos, count)
    }

    /// Explores every walk through set elements from `start`.
    ///
    /// Positions are settled in ascending order, and each is reached only from earlier
    /// positions, so the element count recorded for a position is final once it is popped.
    fn span_contained(
        &self,
        text: &str,
        start: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut frontier = BTreeMap::from([(start, 0)]);
        let mut best = (start, 0);
        while let Some((pos, count)) = frontier.pop_first() {
            best = (pos, count);
            let Some(rest) = text.get(pos..) else {
                break;
            };
            if let Some(c) = rest.chars().next() {
                if contains(c) {
                    relax(&mut frontier, pos + c.len_utf8(), count + 1);
                }
            }
            for len in self.matches_at(rest) {
                relax(&mut frontier, pos + len, count + 1);
            }
        }
        best
    }

    fn span_back_contained(
        &self,
        text: &str,
        limit: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut frontier = BTreeMap::from([(limit, 0)]);
        let mut best = (limit, 0);
        while let Some((pos, count)) = frontier.pop_last() {
            best = (pos, count);
            let Some(head) = text.get(..pos) else {
                break;
            };
            if let Some(c) = head.chars().next_back() {
                if contains(c) {
                    relax(&mut frontier, pos - c.len_utf8(), count + 1);
                }
            }
            for len in self.matches_before(head) {
                relax(&mut frontier, pos - len, count + 1);
            }
        }
        best
    }

    fn span_simple(
        &self,
        text: &str,
        start: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut pos = start;
        let mut count = 0;
        while let Some(rest) = text.get(pos..) {
            let by_char = rest
                .chars()
                .next()
                .filter(|&c| contains(c))
                .map_or(0, char::len_utf8);
            let longest = self.matches_at(rest).fold(by_char, usize::max);
            if longest == 0 {
                break;
            }
            pos += longest;
            count += 1;
        }
        (pos, count)
    }

    fn span_back_simple(
        &self,
        text: &str,
        limit: usize,
        contains: &impl Fn(char) -> bool,
    ) -> (usize, usize) {
        let mut pos = limit;
        let mut count = 0;
        while let Some(head) = text.get(..pos) {
            let by_char = head
                .chars()
                .next_back()
                .filter(|&c| contains(c))
                .map_or(0, char::len_utf8);
            let longest = self.matches_before(head).fold(by_char, usize::max);
            if longest == 0 {
                break;
            }
            pos -= longest;
            count += 1;
        }
        (pos, count)
    }
}

/// Records that `pos` is reachable with `count` elements, keeping the smallest count
fn relax(frontier: &mut BTreeMap<usize, usize>, pos: usize, count: usize) {
    frontier
        .entry(pos)
        .and_modify(|known| *known = (*known).min(count))
        .or_insert(count);
}
