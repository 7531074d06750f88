/// Number of rendered columns: one per header plus the checkbox column when
/// rows are selectable. Sizes the empty-state placeholder row.
pub fn effective_column_count(header_count: usize, selectable: bool) -> usize {
    header_count + usize::from(selectable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(12)]
    fn selectable_adds_exactly_one(#[case] headers: usize) {
        assert_eq!(effective_column_count(headers, false), headers);
        assert_eq!(effective_column_count(headers, true), headers + 1);
    }
}
