use crate::parsers::{ParsedDocument, ParserKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_small_page() {
        let doc = ParsedDocument::parse(
            "<html><head><title>Demo</title></head><body><a href=\"http://x.com/a\">A</a></body></html>",
            ParserKind::Document,
        );
        let expected = "\
<html>
 <head>
  <title>
   Demo
  </title>
 </head>
 <body>
  <a href=\"http://x.com/a\">
   A
  </a>
 </body>
</html>
";
        assert_eq!(doc.prettify(), expected);
    }

    #[test]
    fn test_prettify_is_stable() {
        let doc = ParsedDocument::parse(
            "<!DOCTYPE html><p>One <b>two</b></p><img src=\"http://x.com/1.png\"><!-- note -->",
            ParserKind::Document,
        );
        let first = doc.prettify();
        assert_eq!(first, doc.prettify());

        // Re-parsing the pretty output gives the same structure back
        let reparsed = ParsedDocument::parse(&first, ParserKind::Document);
        assert_eq!(reparsed.prettify(), first);
    }

    #[test]
    fn test_prettify_doctype_and_void_elements() {
        let doc = ParsedDocument::parse(
            "<!DOCTYPE html><html><head></head><body><br></body></html>",
            ParserKind::Document,
        );
        let expected = "\
<!DOCTYPE html>
<html>
 <head>
 </head>
 <body>
  <br/>
 </body>
</html>
";
        assert_eq!(doc.prettify(), expected);
    }

    #[test]
    fn test_prettify_escapes_text_and_attributes() {
        let doc = ParsedDocument::parse(
            "<p title='say \"hi\"'>a &lt; b &amp; c</p>",
            ParserKind::Document,
        );
        let pretty = doc.prettify();
        assert!(pretty.contains("<p title=\"say &quot;hi&quot;\">"));
        assert!(pretty.contains("   a &lt; b &amp; c\n"));
    }

    #[test]
    fn test_prettify_deeply_nested_document() {
        let depth = 20_000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = ParsedDocument::parse(&html, ParserKind::Document);
        assert_eq!(doc.find_all("div").unwrap().len(), depth);

        let pretty = doc.prettify();
        assert_eq!(pretty.matches("<div>").count(), depth);
        assert_eq!(pretty.matches("</div>").count(), depth);
        assert!(pretty.lines().any(|line| line.trim() == "x"));

        // Indentation is capped, so size grows linearly with depth
        let widest = pretty.lines().map(|line| line.len() - line.trim_start().len()).max();
        assert_eq!(widest, Some(64));
        assert!(pretty.len() < 4_000_000);
    }

    #[test]
    fn test_prettify_keeps_sibling_order() {
        let doc = ParsedDocument::parse(
            "<body>one<b>two</b>three<!--four--><i>five</i></body>",
            ParserKind::Document,
        );
        let expected = "\
<html>
 <head>
 </head>
 <body>
  one
  <b>
   two
  </b>
  three
  <!--four-->
  <i>
   five
  </i>
 </body>
</html>
";
        assert_eq!(doc.prettify(), expected);
    }
}
