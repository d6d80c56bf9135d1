use super::*;

#[test]
fn comment_rows_preserve_order() {
    let comments = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    assert_eq!(
        comment_rows(&comments),
        vec![(0, "a".to_owned()), (1, "b".to_owned()), (2, "c".to_owned())]
    );
}

#[test]
fn comment_rows_empty_list_renders_nothing() {
    assert!(comment_rows(&[]).is_empty());
}
