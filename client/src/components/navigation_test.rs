use super::*;
use crate::net::types::UserMetadata;

#[test]
fn link_class_marks_current_page() {
    assert_eq!(link_class(Page::Courses, Page::Courses), "nav__link nav__link--active");
    assert_eq!(link_class(Page::Courses, Page::Home), "nav__link");
}

#[test]
fn user_label_uses_display_name() {
    let user = User {
        id: "u-1".to_owned(),
        email: Some("ada@example.com".to_owned()),
        user_metadata: UserMetadata { full_name: Some("Ada".to_owned()) },
    };
    assert_eq!(user_label(Some(&user)), "Ada");
}

#[test]
fn user_label_empty_when_signed_out() {
    assert_eq!(user_label(None), "");
}
