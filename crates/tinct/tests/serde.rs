use serde::{Deserialize, Serialize};
use tinct::{Color, Rgba};

#[derive(Debug, Serialize, Deserialize)]
struct Swatch {
    color: Color,
}

#[test]
fn test_serialize_as_string() -> serde_json::Result<()> {
    let json = serde_json::to_string(&Color::new("E40046"))?;
    assert_eq!(json, r##""#E40046""##);
    Ok(())
}

#[test]
fn test_serialize_as_field() -> serde_json::Result<()> {
    let swatch = Swatch { color: Color::new("E40046") };
    assert_eq!(serde_json::to_string(&swatch)?, r##"{"color":"#E40046"}"##);
    Ok(())
}

#[test]
fn test_round_trip() -> serde_json::Result<()> {
    for hex in ["E40046", "#E4004657", "#FFF", "##04655"] {
        let color = Color::new(hex);
        let json = serde_json::to_string(&color)?;
        let back: Color = serde_json::from_str(&json)?;
        assert_eq!(back.hex(), color.hex());
        assert_eq!(back.rgba(), color.rgba());
        assert_eq!(back, color);
    }
    Ok(())
}

#[test]
fn test_deserialize_adds_hash() -> serde_json::Result<()> {
    let swatch: Swatch = serde_json::from_str(r#"{"color":"e40046"}"#)?;
    assert_eq!(swatch.color.hex(), "#e40046");
    assert_eq!(swatch.color.rgba(), Rgba::new(228.0 / 255.0, 0.0, 70.0 / 255.0, 1.0));
    Ok(())
}

#[test]
fn test_deserialize_malformed_string_is_black() -> serde_json::Result<()> {
    let color: Color = serde_json::from_str(r#""0464""#)?;
    assert_eq!(color.hex(), "#0464");
    assert_eq!(color.rgba(), Rgba::BLACK);
    Ok(())
}

#[test]
fn test_deserialize_rejects_non_strings() {
    assert!(serde_json::from_str::<Color>("42").is_err());
    assert!(serde_json::from_str::<Color>("null").is_err());
    assert!(serde_json::from_str::<Color>(r##"{"hex":"#E40046"}"##).is_err());
    assert!(serde_json::from_str::<Swatch>(r#"{"color":7}"#).is_err());

    let err = serde_json::from_str::<Swatch>("{}").unwrap_err();
    assert!(err.to_string().contains("missing field `color`"));
}
