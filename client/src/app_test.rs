use super::*;
use crate::util::dark_mode::DARK_MODE_CLASS;

const WORKSPACE_MANIFEST: &str = include_str!("../../Cargo.toml");
const STYLESHEET: &str = include_str!("../style/main.css");

fn manifest_value(key: &str) -> Option<&'static str> {
    WORKSPACE_MANIFEST.lines().find_map(|line| {
        let (name, value) = line.split_once('=')?;
        (name.trim() == key).then(|| value.trim().trim_matches('"'))
    })
}

#[test]
fn stylesheet_href_matches_build_output() {
    let output = manifest_value("output-name").unwrap();
    let pkg_dir = manifest_value("site-pkg-dir").unwrap();
    assert_eq!(STYLESHEET_HREF, format!("/{pkg_dir}/{output}.css"));
}

#[test]
fn stylesheet_is_registered_for_the_build() {
    assert_eq!(manifest_value("style-file"), Some("client/style/main.css"));
}

#[test]
fn stylesheet_styles_dark_mode_class() {
    assert!(STYLESHEET.contains(&format!("html.{DARK_MODE_CLASS}")));
}
