// tests/link_rendering.rs
//! Cross-reference output for hypertext and fixed-layout hosts.

use captioner::{
    CaptionerConfig, CaptionerOptions, Captioner, LevelType, OutputFormat, SharedCaptioner,
};

fn linked(format: &str) -> Captioner {
    let config = CaptionerConfig::builder()
        .prefix("Figure")
        .levels(2)
        .types([LevelType::Numeric, LevelType::LowerAlpha])
        .link(true)
        .output_format(OutputFormat::from_tag(format))
        .build()
        .unwrap();
    Captioner::new(config)
}

#[test]
fn html_full_defines_anchor() {
    let mut captioner = linked("html");
    let out = captioner.full("map", "Survey sites").unwrap();
    insta::assert_snapshot!(out.text(), @r#"<a name="Figure1.a"></a>Figure 1.a: Survey sites"#);
}

#[test]
fn html_cite_and_num_link_to_anchor() {
    let mut captioner = linked("html");
    captioner.full("map", "Survey sites").unwrap();
    captioner.full("trend", "Counts per year").unwrap();

    let cite = captioner.cite("trend").unwrap();
    let num = captioner.num("map").unwrap();
    insta::assert_snapshot!(cite.text(), @r##"<a href="#Figure1.b">Figure 1.b</a>"##);
    insta::assert_snapshot!(num.text(), @r##"<a href="#Figure1.a">1.a</a>"##);
}

#[test]
fn latex_defers_numbering_to_host() {
    let mut captioner = linked("latex");
    let full = captioner.full("map", "Survey sites").unwrap();
    insta::assert_snapshot!(full.text(), @r"Survey sites\label{Figure1.a}");
    insta::assert_snapshot!(captioner.cite("map").unwrap().text(), @r"Figure \ref{Figure1.a}");
    insta::assert_snapshot!(captioner.num("map").unwrap().text(), @r"\ref{Figure1.a}");
}

#[test]
fn unknown_host_format_renders_plain() {
    let mut captioner = linked("docx");
    assert_eq!(
        captioner.full("map", "Survey sites").unwrap().text(),
        "Figure 1.a: Survey sites"
    );
}

#[test]
fn link_flag_off_renders_plain_in_html() {
    let config = CaptionerOptions::from_json(r#"{"output_format": "html", "link": false}"#)
        .unwrap()
        .into_config()
        .unwrap();
    let mut captioner = Captioner::new(config);
    assert_eq!(captioner.cite("x").unwrap().text(), "Figure 1");
}

#[test]
fn anchor_strips_prefix_whitespace() {
    let config = CaptionerConfig::builder()
        .prefix("Supplementary Table")
        .link(true)
        .output_format(OutputFormat::Html)
        .build()
        .unwrap();
    let shared = SharedCaptioner::new(config);
    assert_eq!(
        shared.cite("s1").unwrap().text(),
        r##"<a href="#SupplementaryTable1">Supplementary Table 1</a>"##
    );
}
