use blockmark::{convert_lines, to_html, ConvertError, Options};

fn lines(input: &[&str]) -> Vec<String> {
    convert_lines(input, &Options::default()).unwrap()
}

// --- Headings ---

#[test]
fn heading_h1() {
    assert_eq!(lines(&["# Hello"]), vec!["<h1>Hello</h1>"]);
}

#[test]
fn heading_h6() {
    assert_eq!(lines(&["###### Deep"]), vec!["<h6>Deep</h6>"]);
}

#[test]
fn heading_past_six_is_not_clamped() {
    assert_eq!(lines(&["####### Seven"]), vec!["<h7>Seven</h7>"]);
}

#[test]
fn heading_with_single_trailing_char_is_empty() {
    assert_eq!(lines(&["##x"]), vec!["<h2></h2>"]);
}

// --- Lists ---

#[test]
fn unordered_list() {
    assert_eq!(
        lines(&["* one", "* two"]),
        vec!["<ul>", "<li>one</li>", "<li>two</li>", "</ul>"]
    );
}

#[test]
fn dash_and_star_share_a_list() {
    assert_eq!(
        lines(&["- one", "* two"]),
        vec!["<ul>", "<li>one</li>", "<li>two</li>", "</ul>"]
    );
}

#[test]
fn nested_markers_are_flattened() {
    assert_eq!(
        lines(&["* top", "** inner", "*** deeper"]),
        vec!["<ul>", "<li>top</li>", "<li>inner</li>", "<li>deeper</li>", "</ul>"]
    );
}

#[test]
fn ordered_list_split_by_blank() {
    assert_eq!(
        lines(&["1. first", "", "2. second"]),
        vec!["<ol>", "<li>first</li>", "</ol>", "", "<ol>", "<li>second</li>", "</ol>"]
    );
}

#[test]
fn ordered_then_unordered() {
    assert_eq!(
        lines(&["1. a", "2. b", "- c"]),
        vec!["<ol>", "<li>a</li>", "<li>b</li>", "</ol>", "<ul>", "<li>c</li>", "</ul>"]
    );
}

// --- Paragraphs ---

#[test]
fn single_paragraph() {
    assert_eq!(lines(&["Just text."]), vec!["<p>", "Just text.", "</p>"]);
}

#[test]
fn heading_between_paragraphs() {
    assert_eq!(
        lines(&["before", "# Title", "after"]),
        vec!["<p>", "before", "</p>", "<h1>Title</h1>", "<p>", "after", "</p>"]
    );
}

#[test]
fn list_after_blank_gets_no_paragraph() {
    assert_eq!(
        lines(&["intro", "", "* item"]),
        vec!["<p>", "intro", "</p>", "", "<ul>", "<li>item</li>", "</ul>"]
    );
}

#[test]
fn document_ending_on_blank_closes_before_separator() {
    assert_eq!(lines(&["text", ""]), vec!["<p>", "text", "</p>", ""]);
}

// --- Whole documents ---

#[test]
fn empty_document() {
    assert_eq!(to_html("").unwrap(), "");
}

#[test]
fn full_document() {
    let input = "# Title\n\nIntro line one\nline two\n\n- a\n- b\n\n1. x\n2. y\nclosing";
    let expected = "<h1>Title</h1>\n\
                    \n\
                    <p>\nIntro line one\nline two\n</p>\n\
                    \n\
                    <ul>\n<li>a</li>\n<li>b</li>\n</ul>\n\
                    \n\
                    <ol>\n<li>x</li>\n<li>y</li>\n</ol>\n\
                    <p>\nclosing\n</p>";
    assert_eq!(to_html(input).unwrap(), expected);
}

#[test]
fn deterministic_output() {
    let input = "# A\n* b\nc\n\n1. d";
    assert_eq!(to_html(input).unwrap(), to_html(input).unwrap());
}

// --- Malformed lines ---

#[test]
fn lone_digit_fails_whole_conversion() {
    let err = to_html("# ok\n\n9").unwrap_err();
    match err {
        ConvertError::MalformedLine { line, content } => {
            assert_eq!(line, 3);
            assert_eq!(content, "9");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn marker_only_lines_fail_whole_conversion() {
    for (input, bad) in [("intro\n###", "###"), ("- a\n---", "---"), ("*", "*"), ("1. a\n1.", "1.")] {
        match to_html(input).unwrap_err() {
            ConvertError::MalformedLine { content, .. } => assert_eq!(content, bad),
            other => panic!("unexpected {other:?} for {input:?}"),
        }
    }
}

#[test]
fn marker_only_lines_lenient_are_paragraph_text() {
    let options = Options {
        lenient_lookahead: true,
        ..Options::default()
    };
    assert_eq!(
        convert_lines(["###", "---", "*", "1."], &options).unwrap(),
        vec!["<p>", "###", "---", "*", "1.", "</p>"]
    );
    assert_eq!(
        convert_lines(["- a", "---"], &options).unwrap(),
        vec!["<ul>", "<li>a</li>", "</ul>", "<p>", "---", "</p>"]
    );
}

#[test]
fn lone_digit_lenient_is_paragraph_text() {
    let options = Options {
        lenient_lookahead: true,
        ..Options::default()
    };
    assert_eq!(
        convert_lines(["9"], &options).unwrap(),
        vec!["<p>", "9", "</p>"]
    );
}
