mod common;

use chrono::{TimeZone, Utc};
use common::item;
use xbeers::config::ReportConfig;
use xbeers::history::{grouped_sort, EnrichedItem};
use xbeers::report::{sections, ReportRenderer};

fn render(items: &[EnrichedItem]) -> String {
    let config = ReportConfig::default();
    let at = Utc.with_ymd_and_hms(2011, 3, 14, 9, 26, 0).unwrap();
    ReportRenderer::new(&config, "https://untappd.com/", at).render(items)
}

#[test]
fn sections_follow_sorted_countries() {
    let sorted = grouped_sort(vec![item("1", "France"), item("2", "Belgium"), item("3", "France")]);
    let sections = sections(&sorted);

    let countries: Vec<&str> = sections.iter().map(|s| s.country).collect();
    assert_eq!(countries, ["Belgium", "France"]);
    let france: Vec<&str> = sections[1].items.iter().map(|i| i.beer_id.as_str()).collect();
    assert_eq!(france, ["1", "3"]);
}

#[test]
fn page_lists_countries_then_sections_in_order() {
    let sorted = grouped_sort(vec![item("1", "France"), item("2", "Belgium"), item("3", "France")]);
    let page = render(&sorted);

    assert!(page.contains("<b>3</b> beers."));
    assert!(page.contains("Last count as of 2011/03/14 09:26 +0000"));

    let jump_belgium = page.find("<li><a href=\"#Belgium\">Belgium</a></li>").unwrap();
    let jump_france = page.find("<li><a href=\"#France\">France</a></li>").unwrap();
    let section_belgium = page.find("<a name=\"Belgium\"></a>").unwrap();
    let section_france = page.find("<a name=\"France\"></a>").unwrap();
    assert!(jump_belgium < jump_france);
    assert!(jump_france < section_belgium);
    assert!(section_belgium < section_france);

    let beer1 = page.find("https://untappd.com/beer/1\"").unwrap();
    let beer3 = page.find("https://untappd.com/beer/3\"").unwrap();
    assert!(section_france < beer1 && beer1 < beer3);

    assert_eq!(page.matches("<ol>").count(), 2);
    assert_eq!(page.matches("</ol>").count(), 2);
    assert_eq!(page.matches("<li><a href=\"https://untappd.com/beer/").count(), 3);
}

#[test]
fn empty_report_has_header_and_footer_only() {
    let page = render(&[]);

    assert!(page.starts_with("<?xml version=\"1.0\" ?>"));
    assert!(page.contains("<b>0</b> beers."));
    assert!(page.contains("<ul>\n</ul>"));
    assert!(!page.contains("<ol>"));
    assert!(!page.contains("</ol>"));
    assert!(page.contains("Copyright &copy; 2003-2011"));
    assert!(page.trim_end().ends_with("</html>"));
}

#[test]
fn known_countries_get_a_flag() {
    let page = render(&[item("1", "Belgium")]);
    assert!(page.contains(
        "<img src=\"images/icons/flags/png/be.png\" width=\"16\" height=\"11\" alt=\".be\" />"
    ));
}

#[test]
fn unknown_countries_render_without_flag() {
    let page = render(&[item("1", "Atlantis"), item("2", "")]);
    assert!(!page.contains("<img"));
    assert!(page.contains("<a name=\"Atlantis\"></a>"));
    assert_eq!(page.matches("<div class=\"head-category\">").count(), 2);
}

#[test]
fn names_are_escaped() {
    let mut beer = item("1", "Trinidad and Tobago");
    beer.beer_name = "Stag <Lager> & \"Friends\"".into();
    let page = render(&[beer]);
    assert!(page.contains(">Stag &lt;Lager&gt; &amp; &quot;Friends&quot;</a>"));
}

#[test]
fn social_handle_links_to_profile() {
    let mut beer = item("1", "Belgium");
    beer.social_handle = Some("orval".into());
    let page = render(&[beer]);
    assert!(page.contains("<a href=\"https://twitter.com/orval\" target=\"_blank\">@orval</a></li>"));
}

#[test]
fn footer_names_configured_owner() {
    let config = ReportConfig {
        owner: "Jane Doe".into(),
        owner_email: "jane@example.org".into(),
        copyright_since: 2010,
        ..ReportConfig::default()
    };
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let page = ReportRenderer::new(&config, "https://untappd.com", at).render(&[]);
    assert!(page.contains("Copyright &copy; 2010-2024,"));
    assert!(page.contains("<a href=\"mailto:jane@example.org\">Jane Doe</a>."));
}
