// Host-side tests for portfolio filtering.

use site_core::*;

fn grid() -> Portfolio {
    Portfolio::new(vec![
        Some("design"),
        Some("branding"),
        Some("design"),
        None,
    ])
}

/// Run the fade timers the way the browser does once the fade duration
/// has passed.
fn finish_fades(p: &mut Portfolio, changes: &[ItemChange]) -> Vec<usize> {
    changes
        .iter()
        .filter_map(|c| match *c {
            ItemChange::FadeOut { index, generation } => {
                p.finish_fade(index, generation).then_some(index)
            }
            ItemChange::Show(_) => None,
        })
        .collect()
}

#[test]
fn all_shows_every_item() {
    let mut p = grid();
    let changes = p.apply(Filter::from_attr(Some("all")));
    assert!(changes.iter().all(|c| matches!(c, ItemChange::Show(_))));
    assert_eq!(changes.len(), 4);
    assert!((0..4).all(|i| p.is_visible(i)));
}

#[test]
fn category_hides_others_only_after_fade_out() {
    let mut p = grid();
    let changes = p.apply(Filter::from_attr(Some("design")));
    assert_eq!(
        changes,
        vec![
            ItemChange::Show(0),
            ItemChange::FadeOut { index: 1, generation: 1 },
            ItemChange::Show(2),
            ItemChange::FadeOut { index: 3, generation: 1 },
        ]
    );
    // still on screen while fading
    assert!(p.is_visible(1));
    assert_eq!(p.items()[1].display, ItemDisplay::FadingOut);

    let hidden = finish_fades(&mut p, &changes);
    assert_eq!(hidden, vec![1, 3]);
    assert!(p.is_visible(0) && p.is_visible(2));
    assert!(!p.is_visible(1) && !p.is_visible(3));
    assert_eq!(p.active(), &Filter::Category("design".into()));
}

#[test]
fn fade_timer_hides_without_consulting_a_clock() {
    // A single timer callback is all the browser gives us; it must hide the
    // item no matter what time it thinks it is.
    let mut p = grid();
    let changes = p.apply(Filter::from_attr(Some("design")));
    assert!(p.finish_fade(1, 1));
    assert_eq!(p.items()[1].display, ItemDisplay::Hidden);
    assert_eq!(finish_fades(&mut p, &changes), vec![3]);
}

#[test]
fn reshowing_before_fade_completes_cancels_hide() {
    let mut p = grid();
    let first = p.apply(Filter::from_attr(Some("design")));
    p.apply(Filter::All);
    assert!(finish_fades(&mut p, &first).is_empty());
    assert!((0..4).all(|i| p.is_visible(i)));
}

#[test]
fn stale_timer_does_not_hide_a_newer_fade() {
    let mut p = grid();
    let first = p.apply(Filter::from_attr(Some("design")));
    p.apply(Filter::All);
    let second = p.apply(Filter::from_attr(Some("design")));
    assert_eq!(second[1], ItemChange::FadeOut { index: 1, generation: 3 });

    assert!(finish_fades(&mut p, &first).is_empty());
    assert!(p.is_visible(1));
    assert_eq!(finish_fades(&mut p, &second), vec![1, 3]);
}

#[test]
fn repeated_filter_while_fading_keeps_first_timer() {
    let mut p = grid();
    let first = p.apply(Filter::from_attr(Some("design")));
    let second = p.apply(Filter::from_attr(Some("design")));
    assert_eq!(first[1], second[1]);
    assert_eq!(finish_fades(&mut p, &first), vec![1, 3]);
    assert!(finish_fades(&mut p, &second).is_empty());
}

#[test]
fn hidden_items_come_back() {
    let mut p = grid();
    let changes = p.apply(Filter::from_attr(Some("branding")));
    finish_fades(&mut p, &changes);
    assert!(!p.is_visible(0));
    p.apply(Filter::All);
    assert!(p.is_visible(0));
    assert_eq!(p.items()[0].display, ItemDisplay::Shown);
}

#[test]
fn out_of_range_fade_is_ignored() {
    let mut p = grid();
    assert!(!p.finish_fade(99, 0));
}

#[test]
fn missing_filter_attr_matches_nothing() {
    let f = Filter::from_attr(None);
    assert!(!f.matches(Some("design")));
    assert!(!f.matches(None));
    assert!(Filter::All.matches(None));
}
