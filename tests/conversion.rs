use mdsite::{BlockType, Error, InlineError, Span, SpanKind, markdown_to_html, parse, parse_inline};
use pretty_assertions::assert_eq;

const DOCUMENT: &str = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

* You can spend years studying the legendarium and still not understand its depths
- It can be enjoyed by children and adults alike
- Disney _didn't ruin it_ (okay, but Amazon might have)

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Aina, Ainur\")
}
```

Want to get in touch? [Contact me here](/contact).
";

#[test]
fn full_document() {
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>",
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<p>* You can spend years studying the legendarium and still not understand its depths ",
        "- It can be enjoyed by children and adults alike ",
        "- Disney <i>didn't ruin it</i> (okay, but Amazon might have)</p>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        "<pre><code>func main(){\nfmt.Println(\"Aina, Ainur\")\n}\n</code></pre>",
        "<p>Want to get in touch? <a href=\"/contact\">Contact me here</a>.</p>",
        "</div>",
    );
    assert_eq!(markdown_to_html(DOCUMENT).unwrap(), expected);
}

#[test]
fn conversion_is_deterministic() {
    let first = markdown_to_html(DOCUMENT).unwrap();
    for _ in 0..5 {
        assert_eq!(markdown_to_html(DOCUMENT).unwrap(), first);
    }
}

#[test]
fn heading_and_paragraph_blocks() {
    assert_eq!(
        parse("# Title\n\nSome para"),
        vec![
            (BlockType::Heading, "# Title".to_string()),
            (BlockType::Paragraph, "Some para".to_string()),
        ]
    );
    assert_eq!(
        markdown_to_html("# Title\n\nSome para").unwrap(),
        "<div><h1>Title</h1><p>Some para</p></div>"
    );
}

#[test]
fn fenced_code() {
    assert_eq!(
        markdown_to_html("```\ncode line\n```").unwrap(),
        "<div><pre><code>code line\n</code></pre></div>"
    );
}

#[test]
fn unordered_list() {
    assert_eq!(
        markdown_to_html("- a\n- b").unwrap(),
        "<div><ul><li>a</li><li>b</li></ul></div>"
    );
}

#[test]
fn inline_code_and_bold() {
    assert_eq!(
        parse_inline("This is text with a `code block` word").unwrap(),
        vec![
            Span::plain("This is text with a "),
            Span::styled("code block", SpanKind::Code),
            Span::plain(" word"),
        ]
    );
    assert_eq!(
        parse_inline("Hello **world**!").unwrap(),
        vec![
            Span::plain("Hello "),
            Span::styled("world", SpanKind::Bold),
            Span::plain("!"),
        ]
    );
}

#[test]
fn unmatched_delimiter_aborts_document() {
    let err = markdown_to_html("# Fine\n\nStill fine\n\nnot `fine").unwrap_err();
    match err {
        Error::Inline {
            block,
            source: InlineError::UnmatchedDelimiter { delimiter, .. },
        } => {
            assert_eq!(block, 2);
            assert_eq!(delimiter, "`");
        }
        other => panic!("unexpected error: {other}"),
    }
}
