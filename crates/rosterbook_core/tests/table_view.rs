use rosterbook_core::{build_table_view, Student, TableQuery, PAGE_SIZE};

fn roster_of(count: usize) -> Vec<Student> {
    (1..=count)
        .map(|n| {
            Student::new(
                format!("S{n}"),
                format!("Student {n}"),
                format!("s{n}@example.edu"),
                format!("555-010{n}"),
                if n % 2 == 0 { "Math" } else { "CS" },
            )
        })
        .collect()
}

fn ids(view_items: &[Student]) -> Vec<&str> {
    view_items
        .iter()
        .map(|student| student.student_id.as_str())
        .collect()
}

#[test]
fn seven_records_split_into_a_full_and_a_partial_page() {
    let roster = roster_of(7);

    let first = build_table_view(&roster, &TableQuery::new());
    assert_eq!(ids(&first.items), ["S1", "S2", "S3", "S4", "S5"]);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.matched, 7);

    let second = build_table_view(
        &roster,
        &TableQuery {
            page: 2,
            ..TableQuery::default()
        },
    );
    assert_eq!(ids(&second.items), ["S6", "S7"]);
    assert_eq!(second.total_pages, 2);
}

#[test]
fn blank_filter_matches_every_record() {
    let roster = roster_of(3);
    let view = build_table_view(&roster, &TableQuery::new());
    assert_eq!(view.matched, 3);
}

#[test]
fn filter_matches_any_field_case_insensitively() {
    let roster = vec![
        Student::new("S1", "Ann Lee", "ann@campus.edu", "111", "Physics"),
        Student::new("S2", "Bob Ray", "bob@campus.edu", "222", "History"),
    ];

    let by_name = build_table_view(&roster, &TableQuery::filtered("ANN"));
    assert_eq!(ids(&by_name.items), ["S1"]);

    let by_email = build_table_view(&roster, &TableQuery::filtered("bob@"));
    assert_eq!(ids(&by_email.items), ["S2"]);

    let by_phone = build_table_view(&roster, &TableQuery::filtered("222"));
    assert_eq!(ids(&by_phone.items), ["S2"]);

    let by_course = build_table_view(&roster, &TableQuery::filtered("phys"));
    assert_eq!(ids(&by_course.items), ["S1"]);

    let by_id = build_table_view(&roster, &TableQuery::filtered("s2"));
    assert_eq!(ids(&by_id.items), ["S2"]);
}

#[test]
fn records_matching_no_field_are_excluded() {
    let roster = roster_of(3);
    let view = build_table_view(&roster, &TableQuery::filtered("zebra"));
    assert!(view.items.is_empty());
    assert_eq!(view.matched, 0);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn filtering_preserves_roster_order() {
    let roster = roster_of(7);
    let view = build_table_view(&roster, &TableQuery::filtered("cs"));
    assert_eq!(ids(&view.items), ["S1", "S3", "S5", "S7"]);
}

#[test]
fn page_beyond_total_pages_is_empty_not_an_error() {
    let roster = roster_of(7);
    let view = build_table_view(
        &roster,
        &TableQuery {
            page: 99,
            ..TableQuery::default()
        },
    );
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 2);
}

#[test]
fn total_pages_follows_the_page_size() {
    let roster = roster_of(7);
    let query = TableQuery {
        page_size: 3,
        ..TableQuery::default()
    };
    let view = build_table_view(&roster, &query);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.items.len(), 3);
}

#[test]
fn filtered_constructor_restarts_from_the_first_page() {
    let query = TableQuery::filtered("math");
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, PAGE_SIZE);
}

#[test]
fn shrinking_filter_tolerates_a_stale_page_index() {
    // A filter narrowing the match set can leave the caller's page index
    // past the new total; the view must come back empty, not fail.
    let roster = roster_of(7);
    let stale = TableQuery {
        filter: "math".to_string(),
        page: 2,
        page_size: PAGE_SIZE,
    };
    let view = build_table_view(&roster, &stale);
    assert!(view.items.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.matched, 3);
}
