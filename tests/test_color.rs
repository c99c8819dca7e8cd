use rat_base16::Color;

#[test]
fn test_parse() {
    assert_eq!(Color::parse("000000").raw(), 0);
    assert_eq!(Color::parse("ffffff").raw(), 16777215);
    assert_eq!(Color::parse("ff0000").raw(), 16711680);
    assert_eq!(Color::parse("00ff00").raw(), 65280);
    assert_eq!(Color::parse("0000ff").raw(), 255);
    assert_eq!(Color::parse("F7CA88"), Color::parse("f7ca88"));
}

#[test]
fn test_parse_invalid() {
    assert_eq!(Color::parse("000000ff"), Color::NONE);
    assert_eq!(Color::parse("fff"), Color::NONE);
    assert_eq!(Color::parse(""), Color::NONE);
    assert_eq!(Color::parse("gg0000"), Color::NONE);
    assert_eq!(Color::parse("#fffff"), Color::NONE);
    assert_eq!(Color::parse("+fffff"), Color::NONE);
    assert_eq!(Color::parse("-00001"), Color::NONE);
    assert_eq!(Color::parse("äbcd"), Color::NONE);
}

#[test]
fn test_hex_string() {
    for s in ["181818", "f7ca88", "A16946", "000000", "FFFFFF", "7cAfC2"] {
        assert_eq!(Color::parse(s).to_hex_string(), s.to_lowercase());
    }
    assert_eq!(Color::from_rgb(1, 2, 3).to_hex_string(), "010203");
    assert_eq!(format!("{}", Color::new(0xab4642)), "ab4642");
}

#[test]
fn test_none() {
    assert_eq!(Color::NONE.raw(), -1);
    assert_eq!(Color::default(), Color::NONE);
    assert!(Color::NONE.is_none());
    assert_eq!(Color::NONE.rgb(), None);
    // formats the bits anyway
    assert_eq!(Color::NONE.to_hex_string(), "ffffff");
    assert!(!Color::parse("ffffff").is_none());
}

#[test]
fn test_new() {
    assert_eq!(Color::new(0xff_123456).raw(), 0x123456);
    assert_eq!(Color::new(0x123456), Color::from_rgb(0x12, 0x34, 0x56));
    assert_eq!(Color::new(0xab4642).rgb(), Some((0xab, 0x46, 0x42)));
}
