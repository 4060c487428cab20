//! Roster query pipeline.
//!
//! Runs search, filters, sorting and pagination over an in-memory snapshot
//! of the roster. The stages always run in this order:
//!
//! 1. free-text search over name, job title and country
//! 2. exact country filter
//! 3. exact job title filter
//! 4. inclusive salary range
//! 5. count the survivors (the reported total)
//! 6. stable sort
//! 7. slice out the requested page
//! 8. annotate each record on the page with its net salary

use std::cmp::Ordering;

use crate::models::{
    Employee, EmployeeView, Pagination, RosterPage, RosterQuery, SortDirection, SortField,
};

/// Runs a roster query over a snapshot of records.
///
/// Never fails: the query is already normalized, and a page past the end
/// simply comes back empty. Records that compare equal keep the order they
/// had in `records`.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{Employee, RosterQuery};
/// use roster_engine::roster::run_query;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let records = vec![Employee {
///     id: 1,
///     full_name: "Asha Rao".to_string(),
///     job_title: "Engineer".to_string(),
///     country: "India".to_string(),
///     salary: Decimal::new(1000, 0),
///     created_at: Utc::now(),
/// }];
///
/// let page = run_query(&records, &RosterQuery::default().with_search("asha"));
/// assert_eq!(page.pagination.total, 1);
/// assert_eq!(page.data[0].net_salary, Decimal::new(900, 0));
/// ```
pub fn run_query(records: &[Employee], query: &RosterQuery) -> RosterPage {
    let search = query.search.as_deref().map(str::to_lowercase);
    let country = query.country.as_deref().map(str::to_lowercase);
    let job_title = query.job_title.as_deref().map(str::to_lowercase);

    let mut matched: Vec<&Employee> = records
        .iter()
        .filter(|e| search.as_deref().is_none_or(|term| matches_search(e, term)))
        .filter(|e| {
            country
                .as_deref()
                .is_none_or(|c| e.country.to_lowercase() == c)
        })
        .filter(|e| {
            job_title
                .as_deref()
                .is_none_or(|t| e.job_title.to_lowercase() == t)
        })
        .filter(|e| query.min_salary.is_none_or(|min| e.salary >= min))
        .filter(|e| query.max_salary.is_none_or(|max| e.salary <= max))
        .collect();

    let total = matched.len();

    let field = query.sort.field;
    match query.sort.direction {
        SortDirection::Asc => matched.sort_by(|a, b| compare_by(field, a, b)),
        SortDirection::Desc => matched.sort_by(|a, b| compare_by(field, b, a)),
    }

    let data = matched
        .into_iter()
        .skip(query.offset())
        .take(query.page_size() as usize)
        .map(EmployeeView::from)
        .collect();

    RosterPage {
        data,
        pagination: Pagination::new(query, total),
    }
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    employee.full_name.to_lowercase().contains(term)
        || employee.job_title.to_lowercase().contains(term)
        || employee.country.to_lowercase().contains(term)
}

fn compare_by(field: SortField, a: &Employee, b: &Employee) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::FullName => compare_text(&a.full_name, &b.full_name),
        SortField::JobTitle => compare_text(&a.job_title, &b.job_title),
        SortField::Country => compare_text(&a.country, &b.country),
        SortField::Salary => a.salary.cmp(&b.salary),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortSpec;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn employee(id: i64, name: &str, title: &str, country: &str, salary: i64) -> Employee {
        Employee {
            id,
            full_name: name.to_string(),
            job_title: title.to_string(),
            country: country.to_string(),
            salary: Decimal::new(salary, 0),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(id),
        }
    }

    fn sample_roster() -> Vec<Employee> {
        vec![
            employee(1, "Asha Rao", "Software Engineer", "India", 60000),
            employee(2, "Bob Stone", "Designer", "USA", 75000),
            employee(3, "Carla Diaz", "software engineer", "Spain", 52000),
            employee(4, "Dev Patel", "Manager", "india", 90000),
            employee(5, "Eve Adams", "Designer", "United States", 68000),
        ]
    }

    fn ids(page: &RosterPage) -> Vec<i64> {
        page.data.iter().map(|e| e.id).collect()
    }

    fn sorted_by(field: &str, direction: &str) -> RosterQuery {
        RosterQuery::new(1, 100).with_sort(SortSpec::resolve(Some(field), Some(direction)))
    }

    #[test]
    fn test_no_filters_returns_everything_newest_first() {
        let page = run_query(&sample_roster(), &RosterQuery::default());
        assert_eq!(page.pagination.total, 5);
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_search_matches_any_text_field_case_insensitively() {
        let roster = sample_roster();

        let by_name = run_query(&roster, &sorted_by("id", "asc").with_search("ASHA"));
        assert_eq!(ids(&by_name), vec![1]);

        let by_title = run_query(&roster, &sorted_by("id", "asc").with_search("engineer"));
        assert_eq!(ids(&by_title), vec![1, 3]);

        let by_country = run_query(&roster, &sorted_by("id", "asc").with_search("ind"));
        assert_eq!(ids(&by_country), vec![1, 4]);
    }

    #[test]
    fn test_country_filter_is_exact_not_substring() {
        let roster = sample_roster();

        let india = run_query(&roster, &sorted_by("id", "asc").with_country("INDIA"));
        assert_eq!(ids(&india), vec![1, 4]);

        let partial = run_query(&roster, &sorted_by("id", "asc").with_country("Ind"));
        assert_eq!(partial.pagination.total, 0);
        assert!(partial.data.is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_term() {
        let roster = sample_roster();

        let inner = run_query(&roster, &sorted_by("id", "asc").with_search(" stone"));
        assert_eq!(ids(&inner), vec![2]);

        let leading = run_query(&roster, &sorted_by("id", "asc").with_search(" asha"));
        assert_eq!(leading.pagination.total, 0);

        let padded = run_query(&roster, &sorted_by("id", "asc").with_country(" India"));
        assert_eq!(padded.pagination.total, 0);

        let title = run_query(&roster, &sorted_by("id", "asc").with_job_title("Designer "));
        assert_eq!(title.pagination.total, 0);
    }

    #[test]
    fn test_job_title_filter_is_exact_case_insensitive() {
        let page = run_query(
            &sample_roster(),
            &sorted_by("id", "asc").with_job_title("Software Engineer"),
        );
        assert_eq!(ids(&page), vec![1, 3]);
    }

    #[test]
    fn test_salary_range_is_inclusive() {
        let query = sorted_by("id", "asc")
            .with_salary_range(Some(Decimal::new(60000, 0)), Some(Decimal::new(75000, 0)));
        let page = run_query(&sample_roster(), &query);
        assert_eq!(ids(&page), vec![1, 2, 5]);

        let only_min =
            sorted_by("id", "asc").with_salary_range(Some(Decimal::new(75000, 0)), None);
        assert_eq!(ids(&run_query(&sample_roster(), &only_min)), vec![2, 4]);
    }

    #[test]
    fn test_filters_combine_as_intersection() {
        let query = sorted_by("id", "asc")
            .with_search("a")
            .with_job_title("designer")
            .with_salary_range(Some(Decimal::new(70000, 0)), None);
        let page = run_query(&sample_roster(), &query);
        assert_eq!(ids(&page), vec![2]);
    }

    #[test]
    fn test_total_is_counted_before_pagination() {
        let query = RosterQuery::new(2, 2).with_sort(SortSpec::resolve(Some("id"), Some("asc")));
        let page = run_query(&sample_roster(), &query);
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(ids(&page), vec![3, 4]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = run_query(&sample_roster(), &RosterQuery::new(9, 10));
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.page, 9);
    }

    #[test]
    fn test_sort_salary_numeric() {
        let asc = run_query(&sample_roster(), &sorted_by("salary", "asc"));
        assert_eq!(ids(&asc), vec![3, 1, 5, 2, 4]);

        let desc = run_query(&sample_roster(), &sorted_by("salary", "desc"));
        assert_eq!(ids(&desc), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let roster = vec![
            employee(1, "bravo", "x", "Spain", 1),
            employee(2, "Alpha", "x", "Spain", 1),
            employee(3, "charlie", "x", "Spain", 1),
        ];
        let page = run_query(&roster, &sorted_by("fullName", "asc"));
        assert_eq!(ids(&page), vec![2, 1, 3]);
    }

    #[test]
    fn test_equal_keys_keep_input_order_in_both_directions() {
        let roster = vec![
            employee(10, "A", "Designer", "Spain", 5000),
            employee(11, "B", "Designer", "Spain", 5000),
            employee(12, "C", "Designer", "Spain", 7000),
            employee(13, "D", "Designer", "Spain", 5000),
        ];

        let asc = run_query(&roster, &sorted_by("salary", "asc"));
        assert_eq!(ids(&asc), vec![10, 11, 13, 12]);

        let desc = run_query(&roster, &sorted_by("salary", "desc"));
        assert_eq!(ids(&desc), vec![12, 10, 11, 13]);

        let by_country = run_query(&roster, &sorted_by("country", "desc"));
        assert_eq!(ids(&by_country), vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_invalid_sort_field_falls_back_to_newest_first() {
        let page = run_query(&sample_roster(), &sorted_by("nonsense", "asc"));
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_page_is_annotated_with_net_salary() {
        let page = run_query(&sample_roster(), &sorted_by("id", "asc"));
        let nets: Vec<Decimal> = page.data.iter().map(|e| e.net_salary).collect();
        assert_eq!(
            nets,
            vec![
                Decimal::new(54000, 0),
                Decimal::new(66000, 0),
                Decimal::new(52000, 0),
                Decimal::new(81000, 0),
                Decimal::new(59840, 0),
            ]
        );
        assert_eq!(page.data[0].salary, Decimal::new(60000, 0));
    }

    #[test]
    fn test_empty_roster() {
        let page = run_query(&[], &RosterQuery::default());
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    proptest! {
        #[test]
        fn prop_paging_never_changes_total(
            salaries in prop::collection::vec(1i64..200_000, 0..60),
            page in -3i64..10,
            limit in -5i64..150,
        ) {
            let roster: Vec<Employee> = salaries
                .iter()
                .enumerate()
                .map(|(i, s)| employee(i as i64 + 1, "Name", "Title", "Spain", *s))
                .collect();
            let query = RosterQuery::new(page, limit)
                .with_sort(SortSpec::resolve(Some("salary"), Some("desc")));

            let result = run_query(&roster, &query);
            prop_assert_eq!(result.pagination.total, roster.len());
            prop_assert!(result.data.len() <= query.page_size() as usize);
            prop_assert!(query.page() >= 1);
            prop_assert!((1..=100).contains(&query.page_size()));
            for pair in result.data.windows(2) {
                prop_assert!(pair[0].salary >= pair[1].salary);
            }
        }
    }
}
