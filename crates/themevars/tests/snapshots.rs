use insta::assert_snapshot;
use themevars::{format_css_vars, Dictionary, FileHeader, Options};

const TOKENS: &str = r##"
- path: [color, base, black]
  type: color
  value: "#000000"
- path: [color, base, white]
  type: color
  value: "#ffffff"
- path: [color, brand, light-mode, primary]
  type: color
  value: "#ffffff"
  reference: "{color.base.white}"
- path: [color, brand, dark-mode, primary]
  type: color
  value: "#000000"
  reference: "{color.base.black}"
- path: [effect, light-mode, focusRing]
  type: effect
  value: "0 0 0 2px #3b82f6"
- path: [effect, dark-mode, focusRing]
  type: effect
  value: "0 0 0 2px #93c5fd"
- path: [effect, blur]
  type: effect
  value: 4px
- path: [desktop, shadow, card]
  type: custom-shadow
  value: 0 1px 3px rgba(0, 0, 0, 0.2)
  comment: Resting card elevation
- path: [desktop, spacing, base]
  type: dimension
  value: 16px
"##;

fn dictionary() -> Dictionary {
    Dictionary::from_yaml(TOKENS).unwrap()
}

#[test]
fn test_snapshot_literal_values() {
    let header = FileHeader::default().generated_on("Mon, 19 Oct 2026 12:00:00 GMT");
    let css = format_css_vars(&dictionary(), &Options::default(), &header);

    assert_snapshot!("literal_values", css);
}

#[test]
fn test_snapshot_output_references() {
    let options = Options::new().output_references(true);
    let css = format_css_vars(&dictionary(), &options, &FileHeader::hidden());

    assert_snapshot!("output_references", css);
}
