use thiserror::Error;

/// An ordered, non-empty run of 1-based page numbers destined for one
/// output file. Constructed only as a single page or an inclusive
/// ascending range, so `first()`/`last()` never see an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGroup {
    pages: Vec<u32>,
}

impl PageGroup {
    fn single(page: u32) -> Self {
        PageGroup { pages: vec![page] }
    }

    fn run(start: u32, end: u32) -> Self {
        PageGroup {
            pages: (start..=end).collect(),
        }
    }

    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    pub fn first(&self) -> u32 {
        self.pages[0]
    }

    pub fn last(&self) -> u32 {
        self.pages[self.pages.len() - 1]
    }
}

/// Why a token was dropped from the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("not a page number or range")]
    Malformed,
    #[error("page out of range")]
    OutOfRange,
    #[error("range start exceeds end")]
    ReversedBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub text: String,
    pub reason: SkipReason,
}

/// Result of parsing a range expression: the groups to materialize, in
/// token order, plus the tokens that were dropped along the way.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedGroups {
    pub groups: Vec<PageGroup>,
    pub skipped: Vec<SkippedToken>,
}

/// Parse a comma-separated range expression like "1-3,7" into page groups
/// validated against `total_pages`.
///
/// Each token is either a single page number or an inclusive
/// `start-end` pair. Invalid tokens (malformed, out of range, or with
/// reversed bounds) produce no group; they are reported in `skipped`
/// and parsing continues. Groups may overlap and pages may repeat
/// across groups.
pub fn parse_groups(expression: &str, total_pages: u32) -> ParsedGroups {
    let mut parsed = ParsedGroups::default();

    for raw in expression.split(',') {
        let token = raw.trim();
        match classify(token, total_pages) {
            Ok(group) => parsed.groups.push(group),
            Err(reason) => parsed.skipped.push(SkippedToken {
                text: token.to_string(),
                reason,
            }),
        }
    }

    parsed
}

fn classify(token: &str, total_pages: u32) -> Result<PageGroup, SkipReason> {
    if let Some((start_str, end_str)) = token.split_once('-') {
        // Extra hyphens or empty sub-parts fail the numeric parse below.
        let start = parse_page(start_str)?;
        let end = parse_page(end_str)?;

        if start == 0 || end > total_pages {
            Err(SkipReason::OutOfRange)
        } else if start > end {
            Err(SkipReason::ReversedBounds)
        } else {
            Ok(PageGroup::run(start, end))
        }
    } else {
        let page = parse_page(token)?;
        if page == 0 || page > total_pages {
            Err(SkipReason::OutOfRange)
        } else {
            Ok(PageGroup::single(page))
        }
    }
}

fn parse_page(s: &str) -> Result<u32, SkipReason> {
    s.trim().parse::<u32>().map_err(|_| SkipReason::Malformed)
}
