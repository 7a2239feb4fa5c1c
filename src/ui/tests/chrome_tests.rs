use crate::ui::{chrome::UiChrome, width_util::WidthUtil};

#[test]
fn banner_contains_title_and_has_even_rows() {
    let chrome = UiChrome::new();
    let util = WidthUtil::default();
    let lines = chrome.banner_lines();

    assert_eq!(lines.len(), 6);
    let plain: Vec<String> = lines
        .iter()
        .map(|l| WidthUtil::strip_ansi_for_test(l))
        .collect();
    assert!(plain.iter().any(|l| l.contains("S M A R T S C H E D")));

    let first = util.visible_width(&lines[0]);
    assert!(lines.iter().all(|l| util.visible_width(l) == first));
}

#[test]
fn center_in_box_splits_padding() {
    let chrome = UiChrome::new();
    assert_eq!(chrome.center_in_box("Hi", 6), "  Hi  ");
    assert_eq!(chrome.center_in_box("Hi", 5), " Hi  ");
    assert_eq!(chrome.center_in_box("toolong", 3), "toolong");
}
