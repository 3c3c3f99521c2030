//! Round-trip and end-to-end tests for parsing and serialization.

use cssjson::json::{from_json, to_json};
use cssjson::{Entry, Node, ParseOptions, Stylesheet, parse, parse_tree, to_css};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Compare two trees including the order of every map.
fn assert_same_tree(left: &Node, right: &Node) {
    assert_eq!(left, right);
    let left_keys: Vec<_> = left.selectors().collect();
    let right_keys: Vec<_> = right.selectors().collect();
    assert_eq!(left_keys, right_keys);
    let left_names: Vec<_> = left.attributes.keys().collect();
    let right_names: Vec<_> = right.attributes.keys().collect();
    assert_eq!(left_names, right_names);
    for (selector, child) in &left.children {
        assert_same_tree(child, &right.children[selector]);
    }
}

const STYLESHEETS: &[&str] = &[
    "a { color: red; }",
    "body { margin: 0; padding: 0 } .nav > li:hover { color: #fff; }",
    r#"
        @charset "utf-8";
        @import url("theme.css");
        html { font-family: "Helvetica Neue", Arial, sans-serif; }
        .icon {
            background: url("data:image/png;base64,iVBORw0KGgo=") no-repeat;
            width: 16px;
        }
        @media screen and (max-width: 600px) {
            .icon { width: 8px; }
            @supports (display: grid) { .grid { display: grid; } }
        }
        a:not(.b, .c)::after { content: ";"; }
    "#,
    "a{color:red;color:blue;} b{x:1;}",
    "@font-face { font-family: X; src: url(x.woff2) format('woff2'), url(x.woff) format('woff'); }",
];

#[test]
fn reparse_of_serialized_tree_is_identical() {
    init_tracing();

    for css in STYLESHEETS {
        let first = parse_tree(css).unwrap();
        let text = to_css(&first, 0, false);
        let second = parse_tree(&text).unwrap();
        assert_same_tree(&first, &second);
    }
}

#[test]
fn reparse_with_breaks_is_identical() {
    for css in STYLESHEETS {
        let first = parse_tree(css).unwrap();
        let second = parse_tree(&to_css(&first, 0, true)).unwrap();
        assert_same_tree(&first, &second);
    }
}

#[test]
fn duplicate_keys_survive_round_trip() {
    let first = parse_tree(".a{x:1;} .a{y:2;} .a{z:3;}").unwrap();
    let second = parse_tree(&to_css(&first, 0, false)).unwrap();

    let keys: Vec<_> = second.selectors().collect();
    assert_eq!(keys, [".a", ".a ", ".a  "]);
    assert_same_tree(&first, &second);
}

#[test]
fn duplicate_keys_under_media_survive_round_trip() {
    let first = parse_tree("@media x{.a{p:1;} .a{q:2;}} .a{r:3;} .a{s:4;}").unwrap();
    let second = parse_tree(&to_css(&first, 0, false)).unwrap();

    assert_same_tree(&first, &second);
    assert_eq!(second.children[".a "].attributes["s"], "4");
    assert_eq!(second.children["@media x"].children[".a "].attributes["q"], "2");
}

#[test]
fn separators_inside_strings_and_parens_are_text() {
    let css = r#"a:not(.b, .c)::after { content: ";"; quotes: "\"" "'"; }"#;
    let root = parse_tree(css).unwrap();

    let rule = &root.children["a:not(.b, .c)::after"];
    assert_eq!(rule.attributes["content"], r#"";""#);
    assert_eq!(rule.attributes["quotes"], r#""\"" "'""#);
}

#[test]
fn braces_always_end_a_run() {
    // Unlike semicolons, braces are structural even inside strings.
    let root = parse_tree(r#"a { content: "}"; b: 1; }"#).unwrap();

    assert_eq!(root.children["a"].attributes["content"], "\"");
    assert_eq!(root.statements, [r#""; b: 1;;"#]);
}

#[test]
fn realistic_stylesheet() {
    init_tracing();

    let root = parse_tree(STYLESHEETS[2]).unwrap();

    assert_eq!(
        root.statements,
        ["@charset \"utf-8\";", "@import url(\"theme.css\");"]
    );
    assert_eq!(
        root.children["html"].attributes["font-family"],
        "\"Helvetica Neue\", Arial, sans-serif"
    );

    let icon = &root.children[".icon"];
    assert_eq!(
        icon.attributes["background"],
        "url(\"data:image/png;base64,iVBORw0KGgo=\") no-repeat"
    );
    assert_eq!(icon.attributes["width"], "16px");

    let media = &root.children["@media screen and (max-width: 600px)"];
    assert_eq!(media.children[".icon"].attributes["width"], "8px");
    assert_eq!(
        media.children["@supports (display: grid)"].children[".grid"].attributes["display"],
        "grid"
    );

    let keys: Vec<_> = root.selectors().collect();
    assert_eq!(keys.last(), Some(&"@media screen and (max-width: 600px)"));
}

#[test]
fn ordered_round_trip_keeps_comments() {
    let css = concat!(
        "/* header */\n",
        "@import url(a.css);\n",
        "a {\n\t/* note */\n\tx: 1;\n\tx: 2;\n}\n",
        "a {\n\ty: 3;\n}\n",
    );
    let options = ParseOptions::new().ordered(true).comments(true);

    let sheet = parse(css, &options).unwrap();
    assert_eq!(sheet.to_css(0, false), css);

    let ordered = sheet.as_ordered().unwrap();
    assert_eq!(ordered.entries[0], Entry::Comment("/* header */".into()));
    assert_eq!(ordered.entries[1], Entry::Statement("@import url(a.css);".into()));
    assert_eq!(ordered.rules().count(), 2);
    let comments = ordered
        .rules()
        .flat_map(|(_, rule)| rule.iter())
        .filter(|entry| matches!(entry, Entry::Comment(_)))
        .count();
    assert_eq!(comments, 1);
}

#[test]
fn stripped_comments_never_appear() {
    let css = "/* a */ .x { /* b */ y: 1; /* c */ }";

    for ordered in [false, true] {
        let options = ParseOptions::new()
            .ordered(ordered)
            .comments(true)
            .strip_comments(true);
        let text = parse(css, &options).unwrap().to_css(0, false);
        assert!(!text.contains("/*"), "comment leaked into {:?}", text);
    }
}

#[test]
fn json_round_trip() {
    let sheet = parse(STYLESHEETS[2], &ParseOptions::default()).unwrap();
    let text = to_json(&sheet).unwrap();
    let node = from_json(&text).unwrap();

    assert_same_tree(sheet.as_tree().unwrap(), &node);
    assert_eq!(Stylesheet::Tree(node), sheet);
}

#[test]
fn options_from_json_drive_parsing() {
    let options = ParseOptions::from_json(r#"{"split": true}"#).unwrap();
    let root = parse("h1, h2 { margin: 0; }", &options)
        .unwrap()
        .into_tree()
        .unwrap();

    let keys: Vec<_> = root.selectors().collect();
    assert_eq!(keys, ["h1", "h2"]);
}

#[test]
fn adversarial_nesting_fails_cleanly() {
    let css = "{a{".repeat(100_000);
    let result = parse(&css, &ParseOptions::default());

    assert!(matches!(
        result,
        Err(cssjson::Error::NestingTooDeep { limit: 128 })
    ));
}
