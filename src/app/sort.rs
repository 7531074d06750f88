//! Sort-direction bookkeeping. Reordering rows is the caller's job.

use tracing::debug;

use tablekit_domain::{HeaderDefinition, SortDirection};

pub fn next_direction(current: SortDirection) -> SortDirection {
    current.next()
}

/// A sort the caller is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRequest {
    pub column: usize,
    pub direction: SortDirection,
}

/// Header click handling. Returns `None` when the column is unknown, not
/// sortable, or nobody listens for sort requests.
pub fn on_header_click(
    headers: &[HeaderDefinition],
    column: usize,
    has_sort_listener: bool,
) -> Option<SortRequest> {
    let header = headers.get(column)?;
    if !header.sortable || !has_sort_listener {
        debug!(column, sortable = header.sortable, "header click ignored");
        return None;
    }
    Some(SortRequest {
        column,
        direction: next_direction(header.sort_direction),
    })
}

/// Records `request` on the headers. Other columns keep their direction;
/// exclusivity is a caller convention.
pub fn apply_request(headers: &mut [HeaderDefinition], request: SortRequest) {
    if let Some(header) = headers.get_mut(request.column) {
        header.sort_direction = request.direction;
    }
}

/// The first header with an active direction.
pub fn active_sort(headers: &[HeaderDefinition]) -> Option<SortRequest> {
    headers
        .iter()
        .enumerate()
        .find(|(_, h)| h.sort_direction.is_active())
        .map(|(column, h)| SortRequest {
            column,
            direction: h.sort_direction,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn headers() -> Vec<HeaderDefinition> {
        vec![
            HeaderDefinition::new("Name").sortable(),
            HeaderDefinition::new("Team"),
            HeaderDefinition::new("Joined")
                .sortable()
                .with_sort_direction(SortDirection::Asc),
        ]
    }

    #[rstest]
    #[case(SortDirection::None, SortDirection::Asc)]
    #[case(SortDirection::Asc, SortDirection::Desc)]
    #[case(SortDirection::Desc, SortDirection::Asc)]
    fn next_direction_cycles(#[case] current: SortDirection, #[case] expected: SortDirection) {
        assert_eq!(next_direction(current), expected);
    }

    mod on_header_click {
        use super::*;

        #[test]
        fn sortable_column_requests_next_direction() {
            assert_eq!(
                on_header_click(&headers(), 2, true),
                Some(SortRequest {
                    column: 2,
                    direction: SortDirection::Desc
                })
            );
        }

        #[test]
        fn unsortable_column_is_inert() {
            assert_eq!(on_header_click(&headers(), 1, true), None);
        }

        #[test]
        fn missing_listener_is_inert() {
            assert_eq!(on_header_click(&headers(), 0, false), None);
        }

        #[test]
        fn unknown_column_is_inert() {
            assert_eq!(on_header_click(&headers(), 7, true), None);
        }
    }

    #[test]
    fn apply_request_leaves_other_columns() {
        let mut h = headers();

        apply_request(
            &mut h,
            SortRequest {
                column: 0,
                direction: SortDirection::Asc,
            },
        );

        assert_eq!(h[0].sort_direction, SortDirection::Asc);
        assert_eq!(h[2].sort_direction, SortDirection::Asc);
    }

    #[test]
    fn active_sort_finds_first_active_header() {
        assert_eq!(
            active_sort(&headers()),
            Some(SortRequest {
                column: 2,
                direction: SortDirection::Asc
            })
        );
        assert_eq!(active_sort(&[HeaderDefinition::new("x")]), None);
    }
}
