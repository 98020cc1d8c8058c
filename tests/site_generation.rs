use campus_portal::site::{generate_site, render_route};
use campus_portal::{PortalConfig, RecordStore, Route};
use chrono::NaiveDateTime;
use std::fs;

fn fixed_now() -> NaiveDateTime {
    campus_portal::datetime::parse_date_time("2025-05-12T00:00:00").expect("valid datetime")
}

#[test]
fn generates_full_page_set_for_sample_data() {
    let store = RecordStore::sample();
    let config = PortalConfig::default();
    let out = tempfile::tempdir().expect("temp dir");

    let written = generate_site(Some(&store), &config, fixed_now(), out.path()).expect("generate");

    // 5 fixed pages plus one detail page per event and per club.
    assert_eq!(written.len(), 5 + 5 + 5);
    for path in &written {
        assert!(path.exists(), "missing generated page: {}", path.display());
    }

    let index = fs::read_to_string(out.path().join("index.html")).expect("index page");
    assert!(index.contains("<title>Home - Campus Connect Portal</title>"));
    // Soonest upcoming event relative to the fixed clock.
    assert!(index.contains("Technical Quiz"));
    assert!(index.contains("May 15, 2025, 2:00 PM"));
    assert!(index.contains("Posted: Apr 20, 2025"));

    let events = fs::read_to_string(out.path().join("events.html")).expect("events page");
    let quiz = events.find("Technical Quiz").expect("upcoming event listed");
    let cultural = events.find("Cultural night").expect("past event listed");
    assert!(quiz < cultural, "upcoming events must precede past events");
    assert!(events.contains("badge bg-secondary ms-2\">Past</span>"));

    let detail = fs::read_to_string(out.path().join("event-detail-3.html")).expect("detail page");
    assert!(detail.contains("Introduction to Photography Workshop - Campus Connect Portal"));
    assert!(detail.contains("Register Now (Simulated)"));

    let club_detail =
        fs::read_to_string(out.path().join("club-detail-101.html")).expect("club page");
    assert!(club_detail.contains("E-CELL"));
    assert!(club_detail.contains("mailto:contact@example.com?subject=Inquiry about E-CELL"));
}

#[test]
fn bare_detail_pages_render_missing_id_errors() {
    let store = RecordStore::sample();
    let config = PortalConfig::default();
    let out = tempfile::tempdir().expect("temp dir");

    generate_site(Some(&store), &config, fixed_now(), out.path()).expect("generate");

    let page = fs::read_to_string(out.path().join("event-details.html")).expect("error page");
    assert!(page.contains("Error: No event ID specified in the URL."));
    assert!(page.contains("<title>Error - Campus Connect Portal</title>"));

    let page = fs::read_to_string(out.path().join("club-details.html")).expect("error page");
    assert!(page.contains("Error: No club ID specified in the URL."));
}

#[test]
fn missing_store_still_produces_the_fixed_pages() {
    let config = PortalConfig::default();
    let out = tempfile::tempdir().expect("temp dir");

    let written = generate_site(None, &config, fixed_now(), out.path()).expect("generate");
    assert_eq!(written.len(), 5);

    let events = fs::read_to_string(out.path().join("events.html")).expect("events page");
    assert!(events.contains("Could not load event information. Data unavailable."));
    assert!(events.contains(" disabled>"));

    let detail = fs::read_to_string(out.path().join("event-details.html")).expect("detail page");
    // Id validation precedes the data check, so the bare page still reports the missing id.
    assert!(detail.contains("Error: No event ID specified in the URL."));
}

#[test]
fn page_route_rendering_matches_generated_files() {
    let store = RecordStore::sample();
    let config = PortalConfig::default();
    let out = tempfile::tempdir().expect("temp dir");

    generate_site(Some(&store), &config, fixed_now(), out.path()).expect("generate");

    let route = Route::parse("event-details.html?id=3").expect("route");
    let rendered = render_route(&route, Some(&store), &config, fixed_now());
    let generated = fs::read_to_string(out.path().join("event-detail-3.html")).expect("page");
    assert_eq!(rendered, generated);
}

#[test]
fn custom_config_changes_branding_and_limits() {
    let store = RecordStore::sample();
    let config = PortalConfig {
        site_title: "SIR MVIT Portal".to_string(),
        home_upcoming_limit: 1,
        ..PortalConfig::default()
    };
    let now = campus_portal::datetime::parse_date_time("2025-05-01T00:00:00").expect("datetime");

    let html = render_route(&Route::Home, Some(&store), &config, now);
    assert!(html.contains("<title>Home - SIR MVIT Portal</title>"));
    // Limit 1 keeps only the soonest upcoming event.
    assert!(html.contains("End-of-Semester Study Jam"));
    assert!(!html.contains("Outdoor Movie Night"));
}
