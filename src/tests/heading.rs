use super::{heading_depth, is_entity_heading, parse_heading, Namespace, NumberedHeading};

#[test]
fn test_parse_heading_depth_and_title() {
    let heading = parse_heading("##### 8.3 Lightbulb  ").unwrap();
    assert_eq!(heading.depth, 5);
    assert_eq!(heading.title, "8.3 Lightbulb");
}

#[test]
fn test_parse_heading_requires_space_after_markers() {
    assert!(parse_heading("#hashtag").is_none());
    assert!(parse_heading("plain text").is_none());
    assert!(parse_heading(" # indented").is_none());
}

#[test]
fn test_heading_depth_defaults_without_markers() {
    assert_eq!(heading_depth("### Three"), 3);
    assert_eq!(heading_depth("no markers"), 5);
}

#[test]
fn test_numbered_heading_parses_namespace() {
    let heading = NumberedHeading::parse("##### 8.10 Fan v2", Namespace::Service).unwrap();
    assert_eq!(heading.number, "8.10");
    assert_eq!(heading.sort_key, 10);
    assert_eq!(heading.name, "Fan v2");

    assert!(NumberedHeading::parse("##### 8.10 Fan v2", Namespace::Characteristic).is_none());
    assert!(NumberedHeading::parse("#### 8.10 Fan v2", Namespace::Service).is_none());
}

#[test]
fn test_numbered_heading_trims_carriage_return() {
    let heading = NumberedHeading::parse("##### 9.3 On\r", Namespace::Characteristic).unwrap();
    assert_eq!(heading.name, "On");
}

#[test]
fn test_entity_heading_any_chapter() {
    assert!(is_entity_heading("##### 7.4 Something"));
    assert!(is_entity_heading("##### 9.12 Brightness"));
    assert!(!is_entity_heading("#### 9.12 Brightness"));
    assert!(!is_entity_heading("##### Overview"));
}

#[test]
fn test_namespace_display() {
    assert_eq!(Namespace::Service.to_string(), "Service");
    assert_eq!(Namespace::Characteristic.to_string(), "Characteristic");
    assert_eq!(Namespace::Characteristic.chapter(), 9);
}
