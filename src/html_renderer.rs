use crate::format::{DisplayRow, HEADERS};

/// Self-contained HTML table document. Field content is written as-is.
#[must_use]
pub fn render_html(rows: &[DisplayRow]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <title>fstat</title>\n");
    html.push_str(&render_styles());
    html.push_str("</head>\n<body>\n");

    html.push_str("<table>\n<thead>\n<tr>");
    for header in HEADERS {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for value in row.columns() {
            html.push_str(&format!("<td>{value}</td>"));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str("</body>\n</html>\n");

    html
}

fn render_styles() -> String {
    r"  <style>
    table { border-collapse: collapse; font-family: monospace; }
    th { text-align: left; border-bottom: 2px solid #333; padding: 4px 10px; }
    td { border-bottom: 1px solid #ccc; padding: 4px 10px; }
    td:nth-child(2) { text-align: right; }
  </style>
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_without_rows() {
        let html = render_html(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(
            "<tr><th>Mod Time</th><th>Size</th><th>Type</th><th>Name</th></tr>"
        ));
        assert!(html.contains("<tbody>\n</tbody>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn test_cells_are_not_escaped() {
        let rows = vec![DisplayRow {
            mod_time: "2024-07-29 10:00:00".to_string(),
            size: "42".to_string(),
            kind: "F".to_string(),
            name: "R&D/<draft>.txt".to_string(),
            is_summary: false,
        }];

        let html = render_html(&rows);
        assert!(html.contains(
            "<tr><td>2024-07-29 10:00:00</td><td>42</td><td>F</td><td>R&D/<draft>.txt</td></tr>"
        ));
    }
}
