//! Static XHTML page listing beers grouped under country headers.
//!
//! The page is built in one pass over items already ordered by
//! [`grouped_sort`](crate::history::grouped_sort): a header with the total
//! count, a jump list of countries, one section per country and a footer.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Utc};

use crate::config::ReportConfig;
use crate::country;
use crate::history::EnrichedItem;

/// A run of consecutive items sharing a country.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub country: &'a str,
    pub items: Vec<&'a EnrichedItem>,
}

/// Split sorted items into country sections.
///
/// A new section opens whenever the country differs from the previous
/// item's, so the input must already be grouped.
pub fn sections(items: &[EnrichedItem]) -> Vec<Section<'_>> {
    let mut out: Vec<Section<'_>> = Vec::new();
    for item in items {
        let opens_section = out.last().map_or(true, |open| open.country != item.country);
        if opens_section {
            out.push(Section {
                country: &item.country,
                items: vec![item],
            });
        } else if let Some(open) = out.last_mut() {
            open.items.push(item);
        }
    }
    out
}

pub struct ReportRenderer<'a> {
    config: &'a ReportConfig,
    web_url: &'a str,
    generated_at: DateTime<Utc>,
}

impl<'a> ReportRenderer<'a> {
    /// `generated_at` is the single timestamp shown in the header and footer.
    pub fn new(config: &'a ReportConfig, web_url: &'a str, generated_at: DateTime<Utc>) -> Self {
        Self {
            config,
            web_url: web_url.trim_end_matches('/'),
            generated_at,
        }
    }

    pub fn render(&self, items: &[EnrichedItem]) -> String {
        let sections = sections(items);
        let mut h = String::new();

        self.render_header(&mut h, items.len());
        render_jump_list(&mut h, &sections);
        for section in &sections {
            self.render_section(&mut h, section);
        }
        self.render_footer(&mut h);

        tracing::info!(
            beers = items.len(),
            countries = sections.len(),
            bytes = h.len(),
            "report rendered"
        );
        h
    }

    fn render_header(&self, h: &mut String, count: usize) {
        let title = escape_html(&self.config.title);
        let _ = writeln!(h, "<?xml version=\"1.0\" ?>");
        let _ = writeln!(h, "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\"");
        let _ = writeln!(h, "  \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">");
        let _ = writeln!(h, "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">");
        let _ = writeln!(h, "<head>");
        let _ = writeln!(
            h,
            "  <link rel=\"stylesheet\" href=\"{}\" type=\"text/css\" />",
            escape_html(&self.config.stylesheet)
        );
        let _ = writeln!(
            h,
            "  <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />"
        );
        let _ = writeln!(h, "  <title>{}</title>", title);
        let _ = writeln!(h, "</head>");
        let _ = writeln!(h, "<body>");
        let _ = writeln!(h);
        let _ = writeln!(h, "<h1 class=\"masthead\">{}</h1>", title);
        let _ = writeln!(h);
        let _ = writeln!(h, "<p>");
        let _ = writeln!(h, "Here is a list of the beers from all around the world I've already drunk.");
        let _ = writeln!(h, "</p>");
        let _ = writeln!(h);
        let _ = writeln!(h, "<p>");
        let _ = writeln!(
            h,
            "Last count as of {}: <b>{}</b> beers.",
            self.generated_at.format("%Y/%m/%d %H:%M %z"),
            count
        );
        let _ = writeln!(h, "</p>");
    }

    fn render_section(&self, h: &mut String, section: &Section<'_>) {
        let name = escape_html(section.country);
        let _ = writeln!(h, "<a name=\"{}\"></a>", name);
        let _ = writeln!(h, "<div class=\"head-category\">");
        let _ = writeln!(h, "<h2>");
        match country::resolve(section.country) {
            Some(code) => {
                let _ = writeln!(
                    h,
                    "<img src=\"{}/{}.png\" width=\"16\" height=\"11\" alt=\".{}\" />",
                    escape_html(self.config.flag_icon_dir.trim_end_matches('/')),
                    code,
                    code
                );
            }
            None => tracing::warn!(country = section.country, "no flag code for country"),
        }
        let _ = writeln!(h, "{}", name);
        let _ = writeln!(h, "</h2>");
        let _ = writeln!(h, "</div>");
        let _ = writeln!(h, "<ol>");
        for item in &section.items {
            self.render_item(h, item);
        }
        let _ = writeln!(h, "</ol>");
        let _ = writeln!(h);
    }

    fn render_item(&self, h: &mut String, item: &EnrichedItem) {
        let _ = write!(
            h,
            "<li><a href=\"{}/beer/{}\" target=\"_blank\">{}</a>",
            escape_html(self.web_url),
            escape_html(&item.beer_id),
            escape_html(&item.beer_name)
        );
        if let Some(handle) = &item.social_handle {
            let handle = escape_html(handle);
            let _ = write!(
                h,
                " <a href=\"{}/{}\" target=\"_blank\">@{}</a>",
                escape_html(self.config.social_url.trim_end_matches('/')),
                handle,
                handle
            );
        }
        let _ = writeln!(h, "</li>");
    }

    fn render_footer(&self, h: &mut String) {
        let _ = writeln!(h, "<br />");
        let _ = writeln!(h);
        let _ = writeln!(h, "<table width=\"100%\" border=\"0\" cellspacing=\"0\" cellpadding=\"0\">");
        let _ = writeln!(h, "<tr class=\"footer\">");
        let _ = writeln!(h, "  <td class=\"footer\" valign=\"top\">");
        let _ = write!(
            h,
            "    Copyright &copy; {}-{}",
            self.config.copyright_since,
            self.generated_at.year()
        );
        if self.config.owner.is_empty() {
            let _ = writeln!(h, ".");
        } else if self.config.owner_email.is_empty() {
            let _ = writeln!(h, ", {}.", escape_html(&self.config.owner));
        } else {
            let _ = writeln!(
                h,
                ",\n     <a href=\"mailto:{}\">{}</a>.",
                escape_html(&self.config.owner_email),
                escape_html(&self.config.owner)
            );
        }
        let _ = writeln!(h, "     All rights reserved.");
        let _ = writeln!(h, "  </td>");
        let _ = writeln!(h, "</tr>");
        let _ = writeln!(h, "</table>");
        let _ = writeln!(h);
        let _ = writeln!(h, "</body>");
        let _ = writeln!(h, "</html>");
    }
}

fn render_jump_list(h: &mut String, sections: &[Section<'_>]) {
    let _ = writeln!(h);
    let _ = writeln!(
        h,
        "<table border=\"0\" cellspacing=\"0\" cellpadding=\"2\" width=\"95%\">"
    );
    let _ = writeln!(h, "<tr>");
    let _ = writeln!(h, "<td valign=\"top\" width=\"20%\">");
    let _ = writeln!(h, "<ul>");
    for section in sections {
        let name = escape_html(section.country);
        let _ = writeln!(h, "<li><a href=\"#{}\">{}</a></li>", name, name);
    }
    let _ = writeln!(h, "</ul>");
    let _ = writeln!(h, "</td>");
    let _ = writeln!(h, "</tr>");
    let _ = writeln!(h, "</table>");
    let _ = writeln!(h);
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
