//! Splits a GIFT document into question blocks.
//!
//! A block starts at every line whose first two characters are `::`. Blocks
//! are yielded trimmed and in document order; blank blocks are skipped.

/// Lazily split `text` into trimmed, non-empty question blocks.
pub fn split_blocks(text: &str) -> Blocks<'_> {
    Blocks { rest: text }
}

/// Iterator returned by [`split_blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
}

impl<'a> Blocks<'a> {
    /// Byte offset of the next line starting with `::`.
    fn next_boundary(&self) -> Option<usize> {
        self.rest.find("\n::").map(|idx| idx + 1)
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let (block, rest) = match self.next_boundary() {
                Some(end) => self.rest.split_at(end),
                None => (self.rest, ""),
            };
            self.rest = rest;

            let block = block.trim();
            if !block.is_empty() {
                return Some(block);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_line_leading_markers() {
        let doc = "::Q1::First{=a}\n::Q2::Second{=b}\n\n::Q3::Third";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(
            blocks,
            vec!["::Q1::First{=a}", "::Q2::Second{=b}", "::Q3::Third"]
        );
    }

    #[test]
    fn keeps_markers_inside_a_line() {
        let doc = "::Q1::Ratio is 1::2 here{#2}\n::Q2::Next";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "::Q1::Ratio is 1::2 here{#2}");
    }

    #[test]
    fn preamble_forms_its_own_block() {
        let doc = "// bank of questions\n$CATEGORY: demo\n\n::Q1::Only one";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("// bank"));
        assert_eq!(blocks[1], "::Q1::Only one");
    }

    #[test]
    fn skips_blank_blocks_and_handles_crlf() {
        let doc = "\r\n   \r\n::Q1::One{=x}\r\n\r\n::Q2::Two\r\n";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(blocks, vec!["::Q1::One{=x}", "::Q2::Two"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert_eq!(split_blocks("").count(), 0);
        assert_eq!(split_blocks(" \n\t\n").count(), 0);
    }

    #[test]
    fn multiline_blocks_stay_together() {
        let doc = "::Q1::Pick one {\n=yes\n~no\n}\n::Q2::Other {\n=a\n}";
        let blocks: Vec<_> = split_blocks(doc).collect();
        assert_eq!(blocks[0], "::Q1::Pick one {\n=yes\n~no\n}");
        assert_eq!(blocks[1], "::Q2::Other {\n=a\n}");
    }
}
