use hobby_tracker::session_resources::config::ReportConfig;
use hobby_tracker::session_resources::dataset::hobby_log;
use hobby_tracker::session_resources::implementation::{OutputFormat, Reporter};
use hobby_tracker::session_resources::report::run_report;

fn render(format: OutputFormat) -> String {
    let config = ReportConfig::default();
    let mut reporter = Reporter::new(format, Vec::new());

    run_report(&hobby_log(), &config.report_settings, &mut reporter).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn table_report_contains_the_headline_figures() {
    let output = render(OutputFormat::Table);

    assert!(output.contains("Total time spent: 155 minutes"));
    assert!(output.contains("Unique hobbies: [drawing, reading, gaming]"));
    assert!(output.contains("Number of relaxed sessions: 1"));
    assert!(output.contains("Total time for drawing: 55 minutes"));
    assert!(output.contains("Unique hobbies count: 3"));
    assert!(output.contains("Long sessions count: 2"));
    assert!(output.contains("Average time per hobby: 51.67 minutes"));
    assert!(output.contains("Total sessions: 5"));
}

#[test]
fn report_is_deterministic() {
    assert_eq!(render(OutputFormat::Table), render(OutputFormat::Table));
    assert_eq!(render(OutputFormat::Json), render(OutputFormat::Json));
}

#[test]
fn json_report_lists_sorted_sessions() {
    let output = render(OutputFormat::Json);
    let sorted_section = output
        .split("Hobby log sorted by minutes:\n")
        .nth(1)
        .unwrap();
    let wednesday = sorted_section.find("Wednesday").unwrap();
    let friday = sorted_section.find("Friday").unwrap();
    let tuesday = sorted_section.find("Tuesday").unwrap();

    assert!(wednesday < friday);
    assert!(friday < tuesday);
}

#[test]
fn json_report_includes_enriched_fields() {
    let output = render(OutputFormat::Json);

    assert!(output.contains("\"moodCount\": 1"));
    assert!(output.contains("\"totalTimeForHobby\": 55"));
    assert!(output.contains("\"totalTimeForAllHobbies\": 155"));
    assert!(output.contains("\"relaxedSessions\": 1"));
}

#[test]
fn report_does_not_touch_the_log() {
    let log = hobby_log();
    let config = ReportConfig::default();
    let mut reporter = Reporter::new(OutputFormat::Table, Vec::new());

    run_report(&log, &config.report_settings, &mut reporter).unwrap();

    assert_eq!(log, hobby_log());
}
