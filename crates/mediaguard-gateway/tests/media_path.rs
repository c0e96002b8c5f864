#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use mediaguard_gateway::guard::media_path;

#[test]
fn strips_leading_slash() {
    assert_eq!(media_path("/images/a.png").as_deref(), Some("images/a.png"));
    assert_eq!(media_path("profiles/jane/x").as_deref(), Some("profiles/jane/x"));
}

#[test]
fn decodes_percent_escapes() {
    assert_eq!(media_path("/%69mages/a.png").as_deref(), Some("images/a.png"));
    assert_eq!(media_path("/public/my%20file.txt").as_deref(), Some("public/my file.txt"));
}

#[test]
fn rejects_non_normalized() {
    for p in [
        "/",
        "",
        "//etc/passwd",
        "/images/../public/a",
        "/./images/a.png",
        "/images//a.png",
        "/images/",
        "/images/%2e%2e/a",
        "/images\\a.png",
        "/images/%00a.png",
        "/%ff",
    ] {
        assert!(media_path(p).is_none(), "path={p}");
    }
}
