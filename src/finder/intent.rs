//! Extraction of the interactive marker from search options

use crate::note::{Filter, FinderOpts};

/// Split the interactive marker out of `opts`.
///
/// Every [`Filter::Interactive`] is removed; when several are present the
/// last one decides the flag. Other filters keep their relative order.
#[must_use]
pub fn extract_interactive(mut opts: FinderOpts) -> (bool, FinderOpts) {
    let mut interactive = false;
    let mut filters = Vec::with_capacity(opts.filters.len());

    for filter in opts.filters {
        match filter {
            Filter::Interactive(flag) => interactive = flag,
            other => filters.push(other),
        }
    }

    opts.filters = filters;
    (interactive, opts)
}
