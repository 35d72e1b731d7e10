use crate::api::PaginationMeta;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const PRODUCTS_PATH: &str = "/products";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSummary {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

/// Page controls derived from the latest server metadata.
///
/// `previous`/`next` hold the target page, `None` when the control is
/// disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    pub current: u32,
    pub last: u32,
    pub pages: Vec<PageButton>,
    pub previous: Option<u32>,
    pub next: Option<u32>,
    pub summary: RangeSummary,
}

impl PagerControls {
    pub fn from_meta(meta: &PaginationMeta) -> Self {
        let current = meta.current_page;
        let last = meta.last_page;
        let pages = (1..=last)
            .map(|number| PageButton {
                number,
                is_current: number == current,
            })
            .collect();
        let previous = (current > 1).then(|| current - 1);
        let next = (current < last).then(|| current + 1);

        Self {
            current,
            last,
            pages,
            previous,
            next,
            summary: RangeSummary {
                from: meta.from.unwrap_or(0),
                to: meta.to.unwrap_or(0),
                total: meta.total,
            },
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.previous.is_none()
    }

    pub fn next_disabled(&self) -> bool {
        self.next.is_none()
    }
}

pub fn product_path(slug: &str) -> String {
    format!(
        "{}/{}",
        PRODUCTS_PATH,
        utf8_percent_encode(slug, PATH_SEGMENT)
    )
}

pub fn page_path(page: u32) -> String {
    format!("{}?page={}", PRODUCTS_PATH, page)
}

/// Reads a `?page=` value; anything that is not a positive integer means page 1.
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(current_page: u32, last_page: u32) -> PaginationMeta {
        PaginationMeta {
            current_page,
            from: Some(u64::from(current_page - 1) * 10 + 1),
            to: Some(u64::from(current_page) * 10),
            last_page,
            per_page: 10,
            total: u64::from(last_page) * 10,
            path: "http://localhost:8686/api/v1/products".into(),
        }
    }

    #[test]
    fn first_page_disables_previous_and_lists_every_page() {
        let controls = PagerControls::from_meta(&meta(1, 5));
        assert!(controls.previous_disabled());
        assert_eq!(controls.next, Some(2));
        let numbers: Vec<u32> = controls.pages.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(controls.pages[0].is_current);
        assert_eq!(controls.pages.iter().filter(|b| b.is_current).count(), 1);
    }

    #[test]
    fn last_page_disables_next() {
        let controls = PagerControls::from_meta(&meta(5, 5));
        assert!(controls.next_disabled());
        assert_eq!(controls.previous, Some(4));
        assert!(controls.pages[4].is_current);
    }

    #[test]
    fn single_page_disables_both_shortcuts() {
        let controls = PagerControls::from_meta(&meta(1, 1));
        assert!(controls.previous_disabled());
        assert!(controls.next_disabled());
        assert_eq!(controls.pages.len(), 1);
    }

    #[test]
    fn empty_result_set_has_no_page_buttons() {
        let controls = PagerControls::from_meta(&PaginationMeta {
            current_page: 1,
            from: None,
            to: None,
            last_page: 0,
            per_page: 10,
            total: 0,
            path: "/products".into(),
        });
        assert!(controls.pages.is_empty());
        assert!(controls.next_disabled());
        assert_eq!(
            controls.summary,
            RangeSummary {
                from: 0,
                to: 0,
                total: 0
            }
        );
    }

    #[test]
    fn summary_mirrors_server_ordinals() {
        let controls = PagerControls::from_meta(&meta(3, 5));
        assert_eq!(
            controls.summary,
            RangeSummary {
                from: 21,
                to: 30,
                total: 50
            }
        );
    }

    #[test]
    fn product_path_encodes_slug() {
        assert_eq!(product_path("blue-mug"), "/products/blue-mug");
        assert_eq!(product_path("a b/c"), "/products/a%20b%2Fc");
    }

    #[test]
    fn page_param_defaults_to_first_page() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some(" 4 ")), 4);
        assert_eq!(page_path(4), "/products?page=4");
    }
}
