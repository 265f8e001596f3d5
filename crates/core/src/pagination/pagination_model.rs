//! Pagination domain model.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::ELLIPSIS;

/// One entry in a pagination sequence: either a concrete page number or
/// the marker for an elided range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl PageItem {
    /// Returns the page number, if this entry is one.
    pub fn as_page(&self) -> Option<u32> {
        match self {
            PageItem::Page(page) => Some(*page),
            PageItem::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageItem::Ellipsis)
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(page) => write!(f, "{}", page),
            PageItem::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// Serialized as the mixed array the pagination component consumes:
// page entries become JSON numbers, the marker becomes the string "...".
impl Serialize for PageItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageItem::Page(page) => serializer.serialize_u32(*page),
            PageItem::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}
