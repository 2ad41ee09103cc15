//! Title and act recovery over the Complete Works layout.

use super::common::{checked_corpus, COMPLETE_WORKS, HAMLET_ACT_I, HAMLET_ACT_III, SONNETS_ATTRIBUTION};
use folio::{attribution, recover_act, recover_work_title, UNKNOWN_TITLE};

fn offset_of(needle: &str) -> usize {
    COMPLETE_WORKS
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not in fixture", needle))
}

#[test]
fn test_title_after_contents_marker() {
    let text = "THE SONNETS\r\n\r\nContents\r\n\r\nby William Shakespeare\r\n\r\n";
    let corpus = checked_corpus(text);
    let past_byline = text.find("Shakespeare").unwrap() + "Shakespeare".len();
    assert_eq!(recover_work_title(&corpus, past_byline), "THE SONNETS");
}

#[test]
fn test_act_scene_suffix_stripped() {
    let text = "ACT I\r\nSCENE I. Elsinore. A platform before the Castle.";
    let corpus = checked_corpus(text);
    assert_eq!(recover_act(&corpus, text.find("Elsinore").unwrap()), Some("ACT I"));
}

#[test]
fn test_attribution_per_work_and_act() {
    let corpus = checked_corpus(COMPLETE_WORKS);
    assert_eq!(attribution(&corpus, offset_of("fairest")), SONNETS_ATTRIBUTION);
    assert_eq!(attribution(&corpus, offset_of("Elsinore")), HAMLET_ACT_I);
    assert_eq!(attribution(&corpus, offset_of("Who’s there")), HAMLET_ACT_I);
    assert_eq!(attribution(&corpus, offset_of("To be, or")), HAMLET_ACT_III);
    assert_eq!(attribution(&corpus, COMPLETE_WORKS.len()), HAMLET_ACT_III);
}

#[test]
fn test_title_line_belongs_to_previous_work() {
    // The title sits above its own Contents marker, so a match inside the
    // title line still resolves to the work before it.
    let corpus = checked_corpus(COMPLETE_WORKS);
    assert_eq!(attribution(&corpus, offset_of("THE TRAGEDY") + 3), SONNETS_ATTRIBUTION);
}

#[test]
fn test_act_heading_itself_is_not_yet_an_act() {
    let corpus = checked_corpus(COMPLETE_WORKS);
    assert_eq!(
        attribution(&corpus, offset_of("ACT I\r\n") + 2),
        "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK"
    );
}

#[test]
fn test_start_of_corpus_is_unknown() {
    let corpus = checked_corpus(COMPLETE_WORKS);
    assert_eq!(recover_work_title(&corpus, 0), UNKNOWN_TITLE);
    assert_eq!(recover_act(&corpus, 0), None);
    assert_eq!(attribution(&corpus, 0), UNKNOWN_TITLE);
}

#[test]
fn test_offsets_past_end_or_mid_char_are_floored() {
    let corpus = checked_corpus(COMPLETE_WORKS);
    assert_eq!(attribution(&corpus, usize::MAX), HAMLET_ACT_III);
    // Inside the three bytes of ’ in "beauty’s"
    let mid = offset_of("’s rose") + 1;
    assert_eq!(recover_work_title(&corpus, mid), "THE SONNETS");
}
