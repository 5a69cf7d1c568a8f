// Copyright 2025 the piekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-page HTML report that stacks the demo charts.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 24px; background: #fafafa; }\n\
         section { margin-bottom: 32px; }\n\
         .charts { display: flex; flex-wrap: wrap; gap: 16px; }\n\
         .charts svg { background: white; border: 1px solid #ddd; }\n\
         p { color: #555; max-width: 720px; }\n\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&format!("<p>{}</p>\n", section.description));
        out.push_str("<div class=\"charts\">\n");
        out.push_str(&section.svg);
        out.push_str("</div>\n</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
