// src/web/page.rs

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Characters escaped when a region name becomes one URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Values the landing page is rendered from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexPage {
    pub regions: Vec<String>,
}

impl IndexPage {
    pub fn render(&self) -> String {
        let items: String = self
            .regions
            .iter()
            .map(|region| {
                format!(
                    "      <li><a href=\"{href}\">{name}</a></li>\n",
                    href = escape_html(&region_href(region)),
                    name = escape_html(region),
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="uk">
<head>
  <meta charset="UTF-8">
  <title>Статистика по областях</title>
</head>
<body>
  <h1>Статистика по областях</h1>
  <img src="/chart.png" alt="Сума значень по областях">
  <nav>
    <ul>
{items}    </ul>
  </nav>
</body>
</html>
"#,
            items = items
        )
    }
}

/// Path of the detail chart for `region`.
pub fn region_href(region: &str) -> String {
    format!("/region/{}/", utf8_percent_encode(region, SEGMENT))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn lists_every_region_with_a_link() {
        let page = IndexPage {
            regions: vec!["Київська".into(), "Одеська".into()],
        };
        let doc = Html::parse_document(&page.render());
        let links = Selector::parse("nav a").unwrap();

        let found: Vec<(String, String)> = doc
            .select(&links)
            .map(|a| {
                (
                    a.text().collect::<String>(),
                    a.value().attr("href").unwrap_or_default().to_string(),
                )
            })
            .collect();
        assert_eq!(
            found,
            vec![
                ("Київська".to_string(), region_href("Київська")),
                ("Одеська".to_string(), region_href("Одеська")),
            ]
        );

        let img = Selector::parse("img").unwrap();
        assert_eq!(
            doc.select(&img).next().and_then(|e| e.value().attr("src")),
            Some("/chart.png")
        );
    }

    #[test]
    fn region_href_is_a_single_segment() {
        assert_eq!(
            region_href("Київська"),
            "/region/%D0%9A%D0%B8%D1%97%D0%B2%D1%81%D1%8C%D0%BA%D0%B0/"
        );
        assert_eq!(region_href("A/B 1"), "/region/A%2FB%201/");
    }

    #[test]
    fn escapes_markup_in_names() {
        let html = IndexPage {
            regions: vec!["<b>&".into()],
        }
        .render();
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn context_serializes_regions() {
        let page = IndexPage {
            regions: vec!["Львівська".into()],
        };
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::json!({ "regions": ["Львівська"] })
        );
    }
}
