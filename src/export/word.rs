//! Word-compatible document export
//!
//! Word opens HTML documents carrying the MS Office namespaces directly, so
//! the exporter emits an `.doc` payload without a Word-format writer. There is
//! no MathJax runtime inside Word; equations stay as literal TeX text.

use pulldown_cmark_escape::escape_html;

use super::html::markdown_to_html_literal_math;

/// Render a converted document as Word-compatible HTML.
pub fn render_word_document(title: &str, markdown: &str) -> String {
    let mut escaped_title = String::new();
    let _ = escape_html(&mut escaped_title, title);

    format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word" xmlns="http://www.w3.org/TR/REC-html40">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View></w:WordDocument></xml><![endif]-->
<style>
body {{ font-family: Arial, sans-serif; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escaped_title,
        body = markdown_to_html_literal_math(markdown),
    )
}
