//! Behavior-driven tests for the table engine
//!
//! These tests verify how rows move through search, stable sort and the
//! pagination window, and how the selection tracker reacts to toggles.

use stockgrid_core::table::{
    comparator, page_count, paginate, search, stable_sort, PageSize, Row, SelectionChange,
    SelectionState, SortDirection, SortState, TableField, TableState,
};
use stockgrid_core::{
    Instrument, InstrumentField, InstrumentId, SeriesDate, ValueField, ValuePoint,
};

fn instrument(id: u64, stock: &str, industry: &str, sector: &str, currency: &str) -> Instrument {
    Instrument::new(InstrumentId::new(id), stock, industry, sector, currency)
}

fn two_instruments() -> Vec<Instrument> {
    vec![
        instrument(1, "AAA", "Tech", "X", "USD"),
        instrument(2, "BBB", "Finance", "Y", "EUR"),
    ]
}

/// Rows with plenty of duplicate keys in every column.
fn crowded_instruments() -> Vec<Instrument> {
    let industries = ["Tech", "Finance", "Energy"];
    let currencies = ["USD", "EUR"];
    (1..=12)
        .map(|id| {
            instrument(
                id,
                &format!("S{}", id % 4),
                industries[(id % 3) as usize],
                "Sector",
                currencies[(id % 2) as usize],
            )
        })
        .collect()
}

fn ids(rows: &[&Instrument]) -> Vec<u64> {
    rows.iter().map(|row| row.id.get()).collect()
}

// =============================================================================
// Stable Sort
// =============================================================================

#[test]
fn when_rows_are_sorted_twice_system_returns_the_same_order() {
    // Given: Rows with duplicate keys in every column
    let rows = crowded_instruments();

    for field in InstrumentField::ALL {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            // When: The rows are sorted once, then the result is sorted again
            let once = stable_sort(&rows, comparator::<Instrument>(*field, direction));
            let twice = stable_sort(&once, comparator::<Instrument>(*field, direction));

            // Then: The second sort changes nothing
            assert_eq!(once, twice, "sort by {} {direction:?}", field.name());
        }
    }
}

#[test]
fn when_keys_tie_system_keeps_original_relative_order() {
    // Given: Rows where several share the same stock name
    let rows = crowded_instruments();

    // When: Sorting by stock in either direction
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sorted = stable_sort(
            &rows,
            comparator::<Instrument>(InstrumentField::Stock, direction),
        );

        // Then: Within each group of equal names, ids stay in input order
        for pair in sorted.windows(2) {
            if pair[0].stock == pair[1].stock {
                assert!(
                    pair[0].id.get() < pair[1].id.get(),
                    "tie on {} reordered",
                    pair[0].stock
                );
            }
        }
    }
}

#[test]
fn when_sorting_descending_system_produces_the_reverse_key_sequence() {
    // Given: Rows with duplicate keys
    let rows = crowded_instruments();

    for field in InstrumentField::ALL {
        // When: Sorting ascending and descending by the same field
        let ascending =
            stable_sort(&rows, comparator::<Instrument>(*field, SortDirection::Ascending));
        let descending =
            stable_sort(&rows, comparator::<Instrument>(*field, SortDirection::Descending));

        // Then: The descending key sequence is the ascending one reversed
        let mut ascending_keys = ascending
            .iter()
            .map(|row| row.field(*field).to_string())
            .collect::<Vec<_>>();
        ascending_keys.reverse();
        let descending_keys = descending
            .iter()
            .map(|row| row.field(*field).to_string())
            .collect::<Vec<_>>();
        assert_eq!(ascending_keys, descending_keys, "field {}", field.name());
    }
}

#[test]
fn user_can_sort_stock_names_both_ways() {
    // Given: Two instruments listed as BBB, AAA
    let rows = vec![
        instrument(2, "BBB", "Finance", "Y", "EUR"),
        instrument(1, "AAA", "Tech", "X", "USD"),
    ];
    let names = |sorted: &[Instrument]| {
        sorted
            .iter()
            .map(|row| row.stock.clone())
            .collect::<Vec<_>>()
    };

    // When/Then: Ascending by stock gives AAA, BBB
    let ascending = stable_sort(
        &rows,
        comparator::<Instrument>(InstrumentField::Stock, SortDirection::Ascending),
    );
    assert_eq!(names(&ascending), vec!["AAA", "BBB"]);

    // When/Then: Descending by stock gives BBB, AAA
    let descending = stable_sort(
        &rows,
        comparator::<Instrument>(InstrumentField::Stock, SortDirection::Descending),
    );
    assert_eq!(names(&descending), vec!["BBB", "AAA"]);
}

#[test]
fn when_sorting_numbers_and_dates_system_uses_their_natural_order() {
    // Given: Instruments whose ids would sort differently as text
    let rows = vec![
        instrument(10, "A", "T", "S", "USD"),
        instrument(9, "B", "T", "S", "USD"),
        instrument(100, "C", "T", "S", "USD"),
    ];

    // When: Sorting by id
    let sorted = stable_sort(
        &rows,
        comparator::<Instrument>(InstrumentField::Id, SortDirection::Ascending),
    );

    // Then: Ids are ordered numerically
    let sorted_ids = sorted.iter().map(|row| row.id.get()).collect::<Vec<_>>();
    assert_eq!(sorted_ids, vec![9, 10, 100]);

    // Given: Value points with a mix of date shapes
    let point = |date: &str, value: f64| {
        ValuePoint::new("AAA", SeriesDate::parse(date).expect("valid date"), value)
    };
    let points = vec![
        point("2023-02-01T00:00:00", 3.0),
        point("2023-01-15", 1.0),
        point("2023-01-20T12:00:00Z", 2.0),
    ];

    // When: Sorting by date
    let sorted = stable_sort(
        &points,
        comparator::<ValuePoint>(ValueField::Date, SortDirection::Ascending),
    );

    // Then: Points follow the date text
    let values = sorted.iter().map(|point| point.value).collect::<Vec<_>>();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn when_dates_carry_different_offsets_system_sorts_them_as_text() {
    // Given: Two timestamps whose instants order opposite to their text
    let point = |date: &str, value: f64| {
        ValuePoint::new("AAA", SeriesDate::parse(date).expect("valid date"), value)
    };
    let points = vec![
        point("2023-01-05T10:00:00+05:00", 1.0),
        point("2023-01-05T06:00:00Z", 2.0),
    ];

    // When: Sorting by date ascending
    let sorted = stable_sort(
        &points,
        comparator::<ValuePoint>(ValueField::Date, SortDirection::Ascending),
    );

    // Then: The order is lexicographic on the date text
    let dates = sorted
        .iter()
        .map(|point| point.date.as_str())
        .collect::<Vec<_>>();
    assert_eq!(dates, vec!["2023-01-05T06:00:00Z", "2023-01-05T10:00:00+05:00"]);
}

// =============================================================================
// Search Filter
// =============================================================================

#[test]
fn user_can_find_an_instrument_by_partial_industry() {
    // Given: The AAA/Tech and BBB/Finance instruments
    let rows = two_instruments();

    // When: The user searches for "fin"
    let found = search(&rows, "fin");

    // Then: Only BBB matches
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn when_query_is_empty_system_returns_all_rows_in_order() {
    // Given: A crowded instrument list
    let rows = crowded_instruments();

    // When: Searching with an empty query
    let found = search(&rows, "");

    // Then: Every row is returned in its original order
    let expected = rows.iter().map(|row| row.id.get()).collect::<Vec<_>>();
    assert_eq!(ids(&found), expected);
}

#[test]
fn when_filtering_twice_system_returns_the_same_set() {
    // Given: A crowded instrument list
    let rows = crowded_instruments();

    for query in ["tech", "EUR", "s1", "zzz"] {
        // When: Filtering the filtered result again with the same query
        let once = search(&rows, query)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = search(&once, query);

        // Then: Nothing else drops out
        assert_eq!(twice.len(), once.len(), "query {query}");
    }
}

#[test]
fn when_searching_system_ignores_case_and_the_id_column() {
    // Given: Instruments whose ids contain the digit 1
    let rows = two_instruments();

    // Then: Case does not matter
    assert_eq!(ids(&search(&rows, "TECH")), vec![1]);
    assert_eq!(ids(&search(&rows, "eur")), vec![2]);

    // Then: The id column is not searched
    assert!(search(&rows, "1").is_empty());
}

// =============================================================================
// Pagination Window
// =============================================================================

#[test]
fn when_paging_through_rows_system_shows_every_row_exactly_once() {
    for size in PageSize::ALL {
        for total in [0_usize, 1, 4, 5, 6, 7, 24, 25, 26, 51] {
            // Given: `total` rows
            let rows = (0..total).collect::<Vec<_>>();

            // When: Walking through every page
            let pages = page_count(total, size);
            let shown = (0..pages)
                .flat_map(|page| paginate(&rows, page, size).rows.iter().copied())
                .collect::<Vec<_>>();

            // Then: All rows appear once and in order
            assert_eq!(shown, rows, "size {size} total {total}");
        }
    }
}

#[test]
fn when_a_later_page_is_short_system_pads_it_to_full_height() {
    for size in PageSize::ALL {
        for total in [6_usize, 7, 13, 26, 30] {
            let rows = (0..total).collect::<Vec<_>>();
            let pages = page_count(total, size);

            for page in 1..pages {
                // When: Showing a page after the first
                let window = paginate(&rows, page, size);

                // Then: Real rows plus padding fill the page
                assert_eq!(window.height(), size.get(), "size {size} page {page}");
            }
        }
    }
}

#[test]
fn user_sees_two_rows_and_three_blanks_on_the_second_page_of_seven() {
    // Given: Seven filtered rows and five rows per page
    let rows = (1..=7).collect::<Vec<u32>>();

    // When: Viewing page 1
    let window = paginate(&rows, 1, PageSize::Five);

    // Then: Rows 6 and 7 are shown with three padding rows
    assert_eq!(window.rows, &[6, 7]);
    assert_eq!(window.padding, 3);
}

#[test]
fn when_the_first_page_is_short_system_adds_no_padding() {
    let rows = [1, 2];
    let window = paginate(&rows, 0, PageSize::Ten);
    assert_eq!(window.rows, &[1, 2]);
    assert_eq!(window.padding, 0);
}

#[test]
fn when_page_size_is_not_offered_system_rejects_it() {
    assert!(PageSize::try_from(7_usize).is_err());
    assert_eq!(PageSize::try_from(25_usize).expect("offered size"), PageSize::TwentyFive);
}

// =============================================================================
// Table View
// =============================================================================

#[test]
fn when_search_changes_system_returns_to_the_first_page() {
    // Given: A table on its second page
    let rows = crowded_instruments();
    let mut table = TableState::new(SortState::ascending(InstrumentField::Stock), PageSize::Five);
    table.set_page(1);

    // When: The query changes
    table.set_query("usd");

    // Then: The first page of the new result is shown
    let view = table.view(&rows);
    assert_eq!(view.page, 0);
    assert_eq!(view.total, 6);
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn when_the_active_column_is_requested_again_system_flips_direction() {
    let mut sort = SortState::ascending(InstrumentField::Stock);

    sort.request(InstrumentField::Stock);
    assert_eq!(sort.direction, SortDirection::Descending);

    sort.request(InstrumentField::Sector);
    assert_eq!(sort, SortState::ascending(InstrumentField::Sector));
}

// =============================================================================
// Selection Tracker
// =============================================================================

#[test]
fn when_the_same_instrument_is_toggled_twice_system_clears_selection() {
    let mut selection = SelectionState::default();

    assert_eq!(
        selection.toggle(InstrumentId::new(3)),
        SelectionChange::Selected(InstrumentId::new(3))
    );
    assert_eq!(selection.toggle(InstrumentId::new(3)), SelectionChange::Cleared);
    assert_eq!(selection.selected(), None);
    assert_eq!(selection.count(), 0);
}

#[test]
fn user_can_switch_selection_without_deselecting_first() {
    // Given: Instrument 3 is selected
    let mut selection = SelectionState::default();
    selection.toggle(InstrumentId::new(3));

    // When: Instrument 5 is toggled
    let change = selection.toggle(InstrumentId::new(5));

    // Then: 5 replaces 3 and only one row is selected
    assert_eq!(change, SelectionChange::Selected(InstrumentId::new(5)));
    assert!(selection.is_selected(InstrumentId::new(5)));
    assert!(!selection.is_selected(InstrumentId::new(3)));
    assert_eq!(selection.count(), 1);
}
