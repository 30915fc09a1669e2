//! The minimal standalone document used by direct HTML export.

const HEAD: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title></title>
</head>
<body>
";

const TAIL: &str = "
</body>
</html>
";

/// Wraps a rendered body in the export document.
pub fn wrap(body: &str) -> String {
    let mut out = String::with_capacity(HEAD.len() + body.len() + TAIL.len());
    out.push_str(HEAD);
    out.push_str(body);
    out.push_str(TAIL);
    out
}

/// Returns the body of a document produced by [`wrap`].
pub fn unwrap(document: &str) -> Option<&str> {
    document.strip_prefix(HEAD)?.strip_suffix(TAIL)
}
