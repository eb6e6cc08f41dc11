use kronos_fleet::{CalendarRange, PlainDate};

#[test]
fn full_picker_interaction_stays_inside_the_window() {
    // Opened mid-month: the 30-day window ends in the following month.
    let mut picker = CalendarRange::open(PlainDate::new(2025, 9, 12));
    assert_eq!(picker.max_date(), PlainDate::new(2025, 10, 12));
    assert_eq!(picker.selected(), PlainDate::new(2025, 9, 12));
    assert_eq!(picker.viewing(), (2025, 9));

    // Yesterday is never selectable, today always is.
    assert!(!picker.is_selectable(PlainDate::new(2025, 9, 11)));
    assert!(picker.is_selectable(PlainDate::new(2025, 9, 12)));

    // Navigation: one month forward is allowed, two are not.
    assert!(!picker.can_go_previous());
    assert!(picker.next_month());
    assert!(!picker.next_month());
    assert_eq!(picker.viewing(), (2025, 10));

    // The October grid still renders 42 consecutive cells.
    let cells: Vec<PlainDate> = picker.grid().collect();
    assert_eq!(cells.len(), 42);
    assert!(cells.iter().any(|d| picker.in_viewing_month(*d)));
    for pair in cells.windows(2) {
        assert_eq!(pair[0].add_days(1), pair[1]);
    }

    // Selecting the window's last day works; the day after is refused.
    assert!(picker.select(PlainDate::new(2025, 10, 12)));
    assert!(!picker.select(PlainDate::new(2025, 10, 13)));
    assert_eq!(picker.selected(), PlainDate::new(2025, 10, 12));

    // Back at the floor month, the earlier selection is still marked.
    assert!(picker.previous_month());
    assert!(!picker.previous_month());
    assert!(picker.is_selected(PlainDate::new(2025, 10, 12)));
}

#[test]
fn window_crossing_a_year_boundary_navigates_both_months() {
    let mut picker = CalendarRange::open(PlainDate::new(2025, 12, 20));
    assert_eq!(picker.max_date(), PlainDate::new(2026, 1, 19));
    assert!(picker.next_month());
    assert_eq!(picker.viewing(), (2026, 1));
    assert!(picker.select(PlainDate::new(2026, 1, 19)));
    assert!(!picker.select(PlainDate::new(2026, 1, 20)));
}
