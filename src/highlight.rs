//! Splits a summary point into plain and highlighted spans.
//!
//! Highlights are located left to right with a cursor that only moves
//! forward: each one is searched for after the end of the previous match, so
//! repeated phrases resolve in declaration order. A highlight that cannot be
//! found from the cursor onward is dropped and does not move the cursor.

use crate::model::{Highlight, HighlightKind, SummaryPoint};

/// One span of rendered summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain {
        text: &'a str,
    },
    Highlight {
        text: &'a str,
        kind: HighlightKind,
        /// Click-through target; `None` renders as a non-navigating highlight.
        symbol: Option<&'a str>,
    },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain { text } | Segment::Highlight { text, .. } => text,
        }
    }
}

/// Split `text` around `highlights`.
pub fn split<'a>(text: &'a str, highlights: &'a [Highlight]) -> Vec<Segment<'a>> {
    if highlights.is_empty() {
        return vec![Segment::Plain { text }];
    }

    let mut out = Vec::with_capacity(highlights.len() * 2 + 1);
    let mut cursor = 0usize;

    for h in highlights {
        if h.text.is_empty() {
            continue;
        }
        // `cursor` always sits on a char boundary: it is 0 or the end of a match.
        let Some(rel) = text[cursor..].find(h.text.as_str()) else {
            continue;
        };
        let start = cursor + rel;
        if start > cursor {
            out.push(Segment::Plain {
                text: &text[cursor..start],
            });
        }
        let end = start + h.text.len();
        out.push(Segment::Highlight {
            text: &text[start..end],
            kind: h.kind,
            symbol: h.symbol.as_deref(),
        });
        cursor = end;
    }

    if cursor < text.len() {
        out.push(Segment::Plain {
            text: &text[cursor..],
        });
    }

    out
}

/// Convenience wrapper over [`split`] for a whole summary point.
pub fn split_point(point: &SummaryPoint) -> Vec<Segment<'_>> {
    split(&point.text, &point.highlights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn hl(text: &str, symbol: Option<&str>) -> Highlight {
        Highlight {
            text: text.to_string(),
            kind: HighlightKind::Stock,
            symbol: symbol.map(str::to_string),
        }
    }

    fn joined(segs: &[Segment<'_>]) -> String {
        segs.iter().map(Segment::text).collect()
    }

    #[test]
    fn no_highlights_returns_single_plain_segment() {
        let segs = split("長榮、陽明操作策略分享...", &[]);
        assert_eq!(
            segs,
            vec![Segment::Plain {
                text: "長榮、陽明操作策略分享..."
            }]
        );
    }

    #[test]
    fn fixture_points_concatenate_back_to_their_text() {
        let f = Fixtures::default_seed();
        for ep in &f.episodes {
            for p in &ep.summary {
                assert_eq!(joined(&split_point(p)), p.text);
            }
        }
    }

    #[test]
    fn highlight_is_annotated_with_symbol() {
        let hs = vec![hl("奇鋐 (3017)", Some("3017"))];
        let segs = split("提到奇鋐 (3017) 近期營收表現優於預期", &hs);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], Segment::Plain { text: "提到" });
        assert_eq!(
            segs[1],
            Segment::Highlight {
                text: "奇鋐 (3017)",
                kind: HighlightKind::Stock,
                symbol: Some("3017"),
            }
        );
        assert_eq!(segs[2].text(), " 近期營收表現優於預期");
    }

    #[test]
    fn match_at_start_and_end_emits_no_empty_plain_spans() {
        let hs = vec![hl("AAPL", None), hl("TSM", None)];
        let segs = split("AAPL vs TSM", &hs);
        assert_eq!(segs.len(), 3);
        assert!(matches!(segs[0], Segment::Highlight { text: "AAPL", .. }));
        assert_eq!(segs[1], Segment::Plain { text: " vs " });
        assert!(matches!(segs[2], Segment::Highlight { text: "TSM", .. }));
    }

    #[test]
    fn missing_highlight_is_skipped_without_consuming_cursor() {
        let hs = vec![hl("NVDA", None), hl("TSM", None)];
        let segs = split("buy TSM today", &hs);
        assert_eq!(joined(&segs), "buy TSM today");
        assert_eq!(segs.len(), 3);
        assert!(matches!(segs[1], Segment::Highlight { text: "TSM", .. }));
    }

    #[test]
    fn search_resumes_after_previous_match() {
        // Second highlight appears earlier in the text but the cursor is past it.
        let hs = vec![hl("B", None), hl("A", None)];
        let segs = split("A B", &hs);
        let highlighted: Vec<_> = segs
            .iter()
            .filter(|s| matches!(s, Segment::Highlight { .. }))
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].text(), "B");
        assert_eq!(joined(&segs), "A B");
    }

    #[test]
    fn repeated_phrase_resolves_in_declaration_order() {
        let hs = vec![hl("台積電", Some("2330")), hl("台積電", Some("TSM"))];
        let segs = split("台積電與台積電ADR", &hs);
        let symbols: Vec<_> = segs
            .iter()
            .filter_map(|s| match s {
                Segment::Highlight { symbol, .. } => *symbol,
                _ => None,
            })
            .collect();
        assert_eq!(symbols, vec!["2330", "TSM"]);
        assert_eq!(joined(&segs), "台積電與台積電ADR");
    }

    #[test]
    fn empty_highlight_text_is_ignored() {
        let hs = vec![hl("", Some("X"))];
        assert_eq!(split("abc", &hs), vec![Segment::Plain { text: "abc" }]);
    }
}
