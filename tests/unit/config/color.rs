use super::*;

#[test]
fn hex_accepts_rgb_and_rgba() {
    assert_eq!(parse_hex("#ff8000").unwrap(), Rgba8::opaque(255, 128, 0));
    assert_eq!(parse_hex("FF800040").unwrap(), Rgba8::new(255, 128, 0, 64));
    assert!(parse_hex("#fff").is_err());
    assert!(parse_hex("#gg0000").is_err());
}

#[test]
fn deserializes_all_representations() {
    let hex: Rgba8 = serde_json::from_str("\"#10203040\"").unwrap();
    assert_eq!(hex, Rgba8::new(0x10, 0x20, 0x30, 0x40));

    let obj: Rgba8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
    assert_eq!(obj, Rgba8::opaque(1, 2, 3));

    let arr: Rgba8 = serde_json::from_str("[4,5,6,7]").unwrap();
    assert_eq!(arr, Rgba8::new(4, 5, 6, 7));

    assert!(serde_json::from_str::<Rgba8>("[1,2]").is_err());
}

#[test]
fn serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba8::new(0xDD, 0xDD, 0xDD, 0xFF)).unwrap();
    assert_eq!(json, "\"#DDDDDDFF\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba8::new(0xDD, 0xDD, 0xDD, 0xFF));
}
