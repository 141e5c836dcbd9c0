use crate::helpers::{Row, TestExport};
use claims::assert_ok;
use subscriber_report::report::{html_report, text_report, ReportFormat};

fn export() -> TestExport {
    TestExport::new(&[
        Row::active("100,00", "300,00").named("Ann"),
        Row::active("50", "10").named("Bob"),
        Row::active("50", "20").named("Cid"),
        Row::active("0", "0").named("Follower"),
        Row::active("250,5", "1000").named("Ended").ended("2024-01-01"),
    ])
}

fn headings(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| line.starts_with("Subscribers at"))
        .collect()
}

#[test]
fn text_report_sections_follow_the_requested_order() {
    // given
    let list = export().load();

    // when
    let ascending = list.render_text(false);
    let descending = list.render_text(true);

    // then
    assert_eq!(
        headings(&ascending),
        vec!["Subscribers at 50.0.", "Subscribers at 100.0."]
    );
    assert_eq!(
        headings(&descending),
        vec!["Subscribers at 100.0.", "Subscribers at 50.0."]
    );
}

#[test]
fn inactive_subscribers_never_appear_in_reports() {
    // given
    let list = export().load();

    // when
    let text = list.render_text(true);
    let html = list.render_html(true);

    // then
    for report in [&text, &html] {
        assert!(!report.contains("Follower"));
        assert!(!report.contains("Ended"));
        assert!(!report.contains("250.5"));
        assert!(!report.contains("Subscribers at 0.0."));
    }
}

#[test]
fn html_report_uses_the_same_price_order() {
    // given
    let list = export().load();

    // when
    let html = list.render_html(false);

    // then
    let fifty = html.find("Subscribers at 50.0.").unwrap();
    let hundred = html.find("Subscribers at 100.0.").unwrap();
    assert!(fifty < hundred);
    assert!(html.contains(
        "<div class=\"subscriber-name\">Cid</div><div class=\"subscriber-name\">Bob</div>"
    ));
    assert_eq!(html.matches("<h2").count(), 2);
    assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
}

#[test]
fn render_dispatches_on_the_format() {
    // given
    let list = export().load();

    // then
    assert_eq!(list.render(ReportFormat::Text, true), list.render_text(true));
    assert_eq!(list.render(ReportFormat::Html, false), list.render_html(false));
}

#[test]
fn report_helpers_load_and_render_in_one_call() {
    // given
    let export = export();
    let file = export.write_to_file();
    let list = export.load();

    // when
    let text = assert_ok!(text_report(file.path(), true));
    let html = assert_ok!(html_report(file.path(), true));

    // then
    assert_eq!(text, list.render_text(true));
    assert_eq!(html, list.render_html(true));
}
