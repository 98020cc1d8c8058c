use crate::config::PortalConfig;
use crate::models::{
    AnnouncementItem, ClubCard, ClubDetailContent, ClubsPageView, DetailView, EventCard,
    EventDetailContent, EventsPageView, HomePageView, ListView, TimeBucket,
};

const STYLESHEET_HREF: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavItem {
    Home,
    Events,
    Clubs,
    None,
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page_shell(page_title: &str, config: &PortalConfig, active: NavItem, body: &str) -> String {
    let nav_class = |item: NavItem| {
        if item == active {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link href=\"{stylesheet}\" rel=\"stylesheet\">\n\
         </head>\n\
         <body>\n\
         <nav class=\"navbar navbar-expand-lg navbar-dark bg-primary mb-4\">\n\
         <div class=\"container\">\n\
         <a class=\"navbar-brand\" href=\"index.html\">{brand}</a>\n\
         <ul class=\"navbar-nav flex-row gap-3\">\n\
         <li class=\"nav-item\"><a class=\"{home}\" href=\"index.html\">Home</a></li>\n\
         <li class=\"nav-item\"><a class=\"{events}\" href=\"events.html\">Events</a></li>\n\
         <li class=\"nav-item\"><a class=\"{clubs}\" href=\"clubs.html\">Clubs</a></li>\n\
         </ul>\n\
         </div>\n\
         </nav>\n\
         <main class=\"container mb-5\">\n{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(page_title),
        stylesheet = STYLESHEET_HREF,
        brand = escape_html(&config.site_title),
        home = nav_class(NavItem::Home),
        events = nav_class(NavItem::Events),
        clubs = nav_class(NavItem::Clubs),
        body = body,
    )
}

// ─── Cards ──────────────────────────────────────────────────────────────────

fn event_card_html(card: &EventCard, link_label: &str) -> String {
    let dimmed = if card.is_past { " opacity-75" } else { "" };
    let past_badge = if card.is_past {
        " <span class=\"badge bg-secondary ms-2\">Past</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"col\">\n\
         <div class=\"card h-100 shadow-sm{dimmed}\">\n\
         <img src=\"{image}\" class=\"card-img-top\" alt=\"{title}\">\n\
         <div class=\"card-body d-flex flex-column\">\n\
         <h5 class=\"card-title\">{title}</h5>\n\
         <p class=\"card-text text-muted small mb-2\">{date}{past_badge}</p>\n\
         <p class=\"card-text small text-muted mb-3\">{location}</p>\n\
         <p class=\"card-text flex-grow-1 small\">{description}</p>\n\
         <a href=\"{href}\" class=\"btn btn-sm btn-outline-primary mt-auto align-self-start\">{link_label}</a>\n\
         </div>\n\
         <div class=\"card-footer bg-transparent border-0 pt-0\">\n\
         <span class=\"badge bg-info text-dark\">{category}</span>\n\
         </div>\n\
         </div>\n\
         </div>\n",
        dimmed = dimmed,
        image = escape_html(&card.image),
        title = escape_html(&card.title),
        date = escape_html(&card.date_line),
        past_badge = past_badge,
        location = escape_html(&card.location),
        description = escape_html(&card.description),
        href = escape_html(&card.detail_href),
        link_label = link_label,
        category = escape_html(&card.category),
    )
}

fn club_card_html(card: &ClubCard) -> String {
    format!(
        "<div class=\"col\">\n\
         <div class=\"card h-100 shadow-sm\">\n\
         <img src=\"{logo}\" class=\"card-img-top p-3 club-logo\" alt=\"{name} Logo\">\n\
         <div class=\"card-body d-flex flex-column\">\n\
         <h5 class=\"card-title\">{name}</h5>\n\
         <span class=\"badge bg-secondary align-self-start mb-2\">{category}</span>\n\
         <p class=\"card-text flex-grow-1 small\">{description}</p>\n\
         <a href=\"{href}\" class=\"btn btn-primary mt-auto align-self-start\">Learn More</a>\n\
         </div>\n\
         </div>\n\
         </div>\n",
        logo = escape_html(&card.logo),
        name = escape_html(&card.name),
        category = escape_html(&card.category),
        description = escape_html(&card.description),
        href = escape_html(&card.detail_href),
    )
}

fn announcement_item_html(item: &AnnouncementItem) -> String {
    format!(
        "<li class=\"list-group-item small\">{text}\
         <span class=\"text-muted d-block mt-1\" style=\"font-size: 0.8em;\">{posted}</span></li>\n",
        text = escape_html(&item.text),
        posted = escape_html(&item.posted_line),
    )
}

fn card_grid<T>(list: &ListView<T>, render: impl Fn(&T) -> String) -> String {
    if let Some(message) = &list.empty_message {
        return format!(
            "<p class=\"col-12 text-muted\">{}</p>\n",
            escape_html(message)
        );
    }
    let mut grid = String::from("<div class=\"row row-cols-1 row-cols-md-3 g-4\">\n");
    for item in &list.items {
        grid.push_str(&render(item));
    }
    grid.push_str("</div>\n");
    grid
}

// ─── Pages ──────────────────────────────────────────────────────────────────

pub fn render_home(view: &HomePageView, config: &PortalConfig) -> String {
    let mut body = String::new();
    body.push_str("<h1 class=\"mb-4\">Welcome</h1>\n");
    body.push_str("<h2 class=\"h4 mb-3\">Upcoming Events</h2>\n");
    body.push_str(&card_grid(&view.upcoming, |card| {
        event_card_html(card, "Learn More")
    }));
    body.push_str("<h2 class=\"h4 mt-5 mb-3\">Announcements</h2>\n");
    if let Some(message) = &view.announcements.empty_message {
        body.push_str(&format!(
            "<ul class=\"list-group\"><li class=\"list-group-item text-muted\">{}</li></ul>\n",
            escape_html(message)
        ));
    } else {
        body.push_str("<ul class=\"list-group\">\n");
        for item in &view.announcements.items {
            body.push_str(&announcement_item_html(item));
        }
        body.push_str("</ul>\n");
    }
    page_shell(&view.page_title, config, NavItem::Home, &body)
}

pub fn render_events(view: &EventsPageView, config: &PortalConfig) -> String {
    let disabled = if view.controls.disabled { " disabled" } else { "" };
    let mut body = String::new();
    body.push_str("<h1 class=\"mb-4\">Campus Events</h1>\n");
    if let Some(message) = &view.data_message {
        body.push_str(&format!(
            "<p class=\"col-12 text-danger\">{}</p>\n",
            escape_html(message)
        ));
    }
    body.push_str("<div class=\"row g-2 mb-4\">\n");
    body.push_str(&format!(
        "<div class=\"col-md-6\"><input id=\"event-search\" class=\"form-control\" type=\"search\" \
         placeholder=\"Search events...\" value=\"{}\"{}></div>\n",
        escape_html(&view.controls.search),
        disabled
    ));
    body.push_str(&format!(
        "<div class=\"col-md-3\"><select id=\"event-filter-category\" class=\"form-select\"{}>\n{}</select></div>\n",
        disabled,
        category_options(&view.controls.categories, &view.controls.category)
    ));
    body.push_str(&format!(
        "<div class=\"col-md-3\"><select id=\"event-filter-time\" class=\"form-select\"{}>\n{}</select></div>\n",
        disabled,
        time_options(view.controls.time)
    ));
    body.push_str("</div>\n");
    body.push_str(&card_grid(&view.list, |card| {
        event_card_html(card, "View Details")
    }));
    page_shell(&view.page_title, config, NavItem::Events, &body)
}

pub fn render_clubs(view: &ClubsPageView, config: &PortalConfig) -> String {
    let disabled = if view.controls.disabled { " disabled" } else { "" };
    let mut body = String::new();
    body.push_str("<h1 class=\"mb-4\">Clubs &amp; Organizations</h1>\n");
    if let Some(message) = &view.data_message {
        body.push_str(&format!(
            "<p class=\"col-12 text-danger\">{}</p>\n",
            escape_html(message)
        ));
    }
    body.push_str("<div class=\"row g-2 mb-4\">\n");
    body.push_str(&format!(
        "<div class=\"col-md-8\"><input id=\"club-search\" class=\"form-control\" type=\"search\" \
         placeholder=\"Search clubs...\" value=\"{}\"{}></div>\n",
        escape_html(&view.controls.search),
        disabled
    ));
    body.push_str(&format!(
        "<div class=\"col-md-4\"><select id=\"club-filter-category\" class=\"form-select\"{}>\n{}</select></div>\n",
        disabled,
        category_options(&view.controls.categories, &view.controls.category)
    ));
    body.push_str("</div>\n");
    body.push_str(&card_grid(&view.list, club_card_html));
    page_shell(&view.page_title, config, NavItem::Clubs, &body)
}

pub fn render_event_details(
    view: &DetailView<EventDetailContent>,
    config: &PortalConfig,
) -> String {
    let body = match view {
        DetailView::Failed { message, .. } => error_body(message),
        DetailView::Found { content, .. } => {
            let registration = content.registration;
            let disabled = if registration.button_enabled() {
                ""
            } else {
                " disabled"
            };
            let status = match registration.status_message() {
                Some(message) => format!(
                    "<div id=\"register-status\" class=\"mt-3 fw-bold alert alert-success\" role=\"alert\">{}</div>\n",
                    escape_html(message)
                ),
                None => {
                    "<div id=\"register-status\" class=\"mt-3 fw-bold\" role=\"alert\"></div>\n".to_string()
                }
            };
            format!(
                "{breadcrumb}\
                 <h1 class=\"mb-3 display-5\">{title}</h1>\n\
                 <img src=\"{image}\" alt=\"{title}\" class=\"img-fluid rounded mb-4 shadow-sm\">\n\
                 <div class=\"row mb-3 g-3\">\n\
                 <div class=\"col-md-6\">\n\
                 <p class=\"mb-1\"><strong>Date &amp; Time:</strong> {date}</p>\n\
                 <p class=\"mb-1\"><strong>Location:</strong> {location}</p>\n\
                 </div>\n\
                 <div class=\"col-md-6\">\n\
                 <p class=\"mb-1\"><strong>Category:</strong> <span class=\"badge bg-info text-dark\">{category}</span></p>\n\
                 <p class=\"mb-1\"><strong>Organized by:</strong> {organizer}</p>\n\
                 </div>\n\
                 </div>\n\
                 <hr class=\"my-4\">\n\
                 <h5 class=\"mt-4\">About this Event</h5>\n\
                 <p class=\"lead\">{description}</p>\n\
                 <hr class=\"my-4\">\n\
                 <div id=\"registration-section\">\n\
                 <h5>Registration</h5>\n\
                 <p>Click the button below to register for this event (simulation).</p>\n\
                 <button id=\"register-btn\" class=\"btn {style} btn-lg shadow\"{disabled}>{label}</button>\n\
                 {status}\
                 </div>\n",
                breadcrumb = breadcrumb("Events", "events.html", &content.title),
                title = escape_html(&content.title),
                image = escape_html(&content.image),
                date = escape_html(&content.date_line),
                location = escape_html(&content.location),
                category = escape_html(&content.category),
                organizer = escape_html(&content.organizer),
                description = escape_html(&content.description),
                style = registration.button_style(),
                disabled = disabled,
                label = registration.button_label(),
                status = status,
            )
        }
    };
    page_shell(view.page_title(), config, NavItem::Events, &body)
}

pub fn render_club_details(view: &DetailView<ClubDetailContent>, config: &PortalConfig) -> String {
    let body = match view {
        DetailView::Failed { message, .. } => error_body(message),
        DetailView::Found { content, .. } => format!(
            "{breadcrumb}\
             <div class=\"row g-4 align-items-center\">\n\
             <div class=\"col-md-4 text-center\">\n\
             <img src=\"{logo}\" alt=\"{name} Logo\" class=\"img-fluid rounded-circle mb-3 shadow-sm\">\n\
             </div>\n\
             <div class=\"col-md-8\">\n\
             <h1 class=\"display-5 mb-3\">{name}</h1>\n\
             <p><strong>Category:</strong> <span class=\"badge bg-secondary fs-6\">{category}</span></p>\n\
             <hr>\n\
             <h5>About Us</h5>\n\
             <p class=\"lead\">{description}</p>\n\
             <hr>\n\
             <a href=\"{contact}\" class=\"btn btn-outline-primary mt-3\">Contact Club</a>\n\
             </div>\n\
             </div>\n",
            breadcrumb = breadcrumb("Clubs", "clubs.html", &content.name),
            logo = escape_html(&content.logo),
            name = escape_html(&content.name),
            category = escape_html(&content.category),
            description = escape_html(&content.description),
            contact = escape_html(&content.contact_href),
        ),
    };
    page_shell(view.page_title(), config, NavItem::Clubs, &body)
}

fn breadcrumb(section: &str, section_href: &str, leaf: &str) -> String {
    format!(
        "<nav aria-label=\"breadcrumb\" class=\"mb-3\">\n\
         <ol class=\"breadcrumb\">\n\
         <li class=\"breadcrumb-item\"><a href=\"index.html\">Home</a></li>\n\
         <li class=\"breadcrumb-item\"><a href=\"{href}\">{section}</a></li>\n\
         <li class=\"breadcrumb-item active\" aria-current=\"page\">{leaf}</li>\n\
         </ol>\n\
         </nav>\n",
        href = section_href,
        section = section,
        leaf = escape_html(leaf),
    )
}

fn error_body(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\" role=\"alert\">Error: {}</div>\n",
        escape_html(message)
    )
}

fn category_options(categories: &[String], selected: &str) -> String {
    let mut options = String::from("<option value=\"\">All Categories</option>\n");
    for category in categories {
        let marker = if category == selected { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{value}\"{marker}>{value}</option>\n",
            value = escape_html(category),
            marker = marker,
        ));
    }
    options
}

fn time_options(selected: TimeBucket) -> String {
    let mut options = String::new();
    for (bucket, label) in [
        (TimeBucket::All, "All Times"),
        (TimeBucket::Upcoming, "Upcoming"),
        (TimeBucket::Past, "Past"),
    ] {
        let marker = if bucket == selected { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{value}\"{marker}>{label}</option>\n",
            value = bucket.as_str(),
            marker = marker,
            label = label,
        ));
    }
    options
}
