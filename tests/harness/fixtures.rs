use tablekit::domain::{HeaderDefinition, RowRecord, row};

const DEPARTMENTS: [&str; 3] = ["Engineering", "Design", "Sales"];

pub fn staff_headers() -> Vec<HeaderDefinition> {
    vec![
        HeaderDefinition::new("Name").sortable(),
        HeaderDefinition::new("Department").sortable(),
        HeaderDefinition::new("Id"),
    ]
}

/// 25 rows: `Person 00` .. `Person 24`, departments cycling
/// Engineering, Design, Sales.
pub fn staff_rows() -> Vec<RowRecord> {
    (0..25)
        .map(|i| {
            row([
                format!("Person {i:02}"),
                DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                i.to_string(),
            ])
        })
        .collect()
}

pub const STAFF_CSV: &str = "\
Name,Department,Id
Alice,Engineering,1
Bob,Design,2
Carol,Engineering,3
";
