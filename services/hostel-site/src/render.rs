//! HTML rendering: the shared shell and one renderer per page

use chrono::Datelike;
use hostel_content::contact::ContactFields;
use hostel_content::links::{mailto_link, tel_link, whatsapp_link, VISIT_REQUEST_TEXT};
use hostel_content::media::resolve_image_url;
use hostel_content::nav::{is_active, NAV_LINKS};
use hostel_content::rooms::{ac_label, area_label, capacity_label, price_label};
use hostel_content::RoomType;

use crate::config::SiteConfig;
use crate::pages::{
    AboutPage, ContactOutcome, GalleryPage, HomePage, RoomsFacilitiesPage, CONTENT_UNAVAILABLE,
};

pub const SITE_TITLE: &str =
    "City Hostel - Student Hostel in Bhawarkua, Indore | Safe & Affordable Accommodation";

const SITE_DESCRIPTION: &str = "City Hostel offers safe, clean, and affordable student accommodation in Bhawarkua, Indore. Best hostel near colleges in Indore with modern facilities, 24/7 security, and comfortable rooms.";

const SITE_KEYWORDS: &str = "student hostel in Bhawarkua, hostel near colleges in Indore, best hostel in Indore, affordable student accommodation Indore, City Hostel Bhawarkua, student PG in Indore";

const HERO_IMAGE_URL: &str = "https://static.wixstatic.com/media/9ee374_2d88d11597ee48ef883766d406ae358b~mv2.png?originWidth=1600&originHeight=896";

const STYLE: &str = r#"
    body { margin: 0; font-family: system-ui, sans-serif; color: #1f2933; background: #fff; }
    a { color: inherit; }
    .container { max-width: 100rem; margin: 0 auto; padding: 0 1rem; }
    header { background: #fff; border-bottom: 1px solid #e5e7eb; position: sticky; top: 0; z-index: 50; }
    .header-bar { display: flex; justify-content: space-between; align-items: center; height: 4rem; }
    .brand { font-size: 1.5rem; color: #2e8b57; text-decoration: none; font-weight: 700; }
    .nav { display: flex; align-items: center; gap: 2rem; }
    .nav a { text-decoration: none; }
    .nav a.active { color: #2e8b57; font-weight: 600; }
    .button { display: inline-block; padding: 0.6rem 1.4rem; background: #2e8b57; color: #fff; text-decoration: none; border: none; cursor: pointer; font-size: 1rem; }
    .button.outline { background: transparent; color: #2e8b57; border: 1px solid #2e8b57; }
    .menu-toggle, .menu-label { display: none; }
    @media (max-width: 768px) {
        .menu-label { display: block; cursor: pointer; padding: 0.5rem; }
        .nav { display: none; flex-direction: column; align-items: flex-start; padding: 1rem 0; }
        .menu-toggle:checked ~ .nav { display: flex; }
        .header-bar { flex-wrap: wrap; height: auto; min-height: 4rem; }
    }
    section { padding: 4rem 0; }
    .hero { background: #f3f7f4; text-align: center; }
    .hero h1 { font-size: 3rem; margin: 0 0 1rem; }
    .notice { background: #fff3cd; color: #856404; padding: 0.75rem 1rem; margin: 1rem 0; }
    .success { background: #d4edda; color: #155724; padding: 0.75rem 1rem; margin: 1rem 0; }
    .error { background: #f8d7da; color: #721c24; padding: 0.75rem 1rem; margin: 1rem 0; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 2rem; }
    .card { border: 1px solid #e5e7eb; padding: 1.5rem; }
    .card img { width: 100%; height: auto; display: block; }
    .facets { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; }
    .facets a { padding: 0.5rem 1.5rem; border: 1px solid #e5e7eb; text-decoration: none; }
    .facets a.selected { background: #2e8b57; color: #fff; border-color: #2e8b57; }
    .price { font-size: 1.5rem; color: #2e8b57; font-weight: 700; }
    .stats { display: flex; justify-content: space-around; text-align: center; }
    .stat-value { font-size: 3rem; font-weight: 700; color: #2e8b57; margin: 0; }
    form label { display: block; margin: 1rem 0 0.25rem; }
    form input, form textarea { width: 100%; padding: 0.6rem; border: 1px solid #d1d5db; box-sizing: border-box; }
    .map iframe { width: 100%; height: 28rem; border: 0; }
    footer { background: #2e8b57; color: #fff; padding: 4rem 0 2rem; }
    .footer-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 3rem; }
    .footer-links { display: flex; flex-direction: column; gap: 0.75rem; }
    .copyright { border-top: 1px solid rgba(255, 255, 255, 0.2); margin-top: 3rem; padding-top: 2rem; text-align: center; font-size: 0.875rem; }
"#;

const CONTACT_SCRIPT: &str = r#"<script>
        document.getElementById('contact-form').addEventListener('submit', function () {
            const button = document.getElementById('contact-submit');
            button.disabled = true;
            button.textContent = 'Sending...';
        });
    </script>"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap page content in the document, header and footer
pub fn build_page(site: &SiteConfig, current_path: &str, title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <style>{style}</style>
</head>
<body>
{header}
<main>
{content}
</main>
{footer}
</body>
</html>"#,
        title = html_escape(title),
        description = html_escape(SITE_DESCRIPTION),
        keywords = html_escape(SITE_KEYWORDS),
        style = STYLE,
        header = render_header(site, current_path),
        content = content,
        footer = render_footer(site),
    )
}

fn page_title(name: &str) -> String {
    format!("{} | City Hostel", name)
}

fn render_header(site: &SiteConfig, current_path: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| {
            let class = if is_active(link.path, current_path) {
                r#" class="active" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                link.path,
                class,
                html_escape(link.name)
            )
        })
        .collect();

    format!(
        r#"<header>
    <div class="container header-bar">
        <a href="/" class="brand">{brand}</a>
        <input type="checkbox" id="menu-toggle" class="menu-toggle">
        <label for="menu-toggle" class="menu-label" aria-label="Toggle menu">&#9776;</label>
        <nav class="nav">
            {links}
            <a href="{whatsapp}" class="button" target="_blank" rel="noopener noreferrer">WhatsApp Us</a>
        </nav>
    </div>
</header>"#,
        brand = html_escape(&site.brand),
        links = links,
        whatsapp = html_escape(&whatsapp_link(&site.whatsapp_number, None)),
    )
}

fn render_footer(site: &SiteConfig) -> String {
    let quick_links: String = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link.path, html_escape(link.name)))
        .collect();
    let year = chrono::Local::now().year();

    format!(
        r#"<footer>
    <div class="container">
        <div class="footer-grid">
            <div>
                <h3>{brand}</h3>
                <p>Your trusted home away from home in Bhawarkua, Indore. Providing safe, clean, and comfortable accommodation for students.</p>
            </div>
            <div>
                <h4>Quick Links</h4>
                <nav class="footer-links">{quick_links}</nav>
            </div>
            <div>
                <h4>Contact Information</h4>
                <p>{address}</p>
                <p><a href="{tel}">{phone}</a></p>
                <p><a href="{mailto}">{email}</a></p>
            </div>
        </div>
        <p class="copyright">&copy; {year} {brand}. All rights reserved.</p>
    </div>
</footer>"#,
        brand = html_escape(&site.brand),
        quick_links = quick_links,
        address = html_escape(&site.address),
        tel = html_escape(&tel_link(&site.phone)),
        phone = html_escape(&site.phone),
        mailto = html_escape(&mailto_link(&site.email)),
        email = html_escape(&site.email),
        year = year,
    )
}

fn degraded_notice(degraded: bool) -> String {
    if degraded {
        format!(
            r#"<div class="container"><p class="notice" role="status">{}</p></div>"#,
            CONTENT_UNAVAILABLE
        )
    } else {
        String::new()
    }
}

fn optional_paragraph(class: &str, text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            format!(r#"<p class="{}">{}</p>"#, class, html_escape(text))
        }
        _ => String::new(),
    }
}

fn hero(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="hero">
    <div class="container">
        <h1>{}</h1>
        <p>{}</p>
    </div>
</section>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}

pub fn render_home(page: &HomePage, site: &SiteConfig) -> String {
    let cards: String = page
        .key_facilities
        .iter()
        .map(|key| {
            format!(
                r#"<div class="card facility" data-icon="{icon}">
                <span class="icon icon-{icon}" aria-hidden="true"></span>
                <h3>{name}</h3>
                {description}
                <span class="included">Included</span>
            </div>"#,
                icon = key.icon,
                name = html_escape(key.facility.facility_name.as_deref().unwrap_or_default()),
                description =
                    optional_paragraph("description", key.facility.description.as_deref()),
            )
        })
        .collect();

    let content = format!(
        r#"<section class="hero">
    <div class="container">
        <img src="{hero_image}" alt="Modern student hostel interior with natural light" style="max-width: 100%;">
        <h1>{brand}</h1>
        <p>A sanctuary for scholars in the heart of Bhawarkua. Where safety meets serenity, and ambition finds its home.</p>
        <p>Start Your Journey</p>
        <a href="/rooms-facilities" class="button">Explore Spaces</a>
        <a href="/contact" class="button outline">Book a Visit</a>
    </div>
</section>
<section>
    <div class="container">
        <h2>Designed for Focus.</h2>
        <p>We believe that your environment shapes your success. Every corner of City Hostel is curated to provide the peace of mind necessary for academic excellence.</p>
        <div class="grid">
            <div class="card">
                <h3>Uncompromised Safety</h3>
                <p>With 24/7 surveillance and a secure perimeter, we ensure that your safety is never a concern. Focus on your studies while we watch over your home.</p>
                <ul><li>CCTV Surveillance</li><li>Biometric Access</li><li>24/7 Guard</li></ul>
            </div>
            <div class="card">
                <h3>Premium Comfort</h3>
                <p>Our rooms are designed to be more than just a place to sleep. They are personal retreats equipped with modern amenities and ergonomic furniture.</p>
                <ul><li>Spacious Rooms</li><li>Ergonomic Furniture</li><li>Daily Housekeeping</li></ul>
            </div>
            <div class="card">
                <h3>Prime Location</h3>
                <p>Located in Bhawarkua, the educational hub of Indore. Walk to your classes, access libraries, and enjoy the vibrant student community right outside your door.</p>
                <a href="/contact#map">View on Map</a>
            </div>
        </div>
    </div>
</section>
<section class="hero">
    <div class="container">
        <h2>"Education is the passport to the future, for tomorrow belongs to those who prepare for it today."</h2>
        <p>We provide the environment. You provide the ambition.</p>
    </div>
</section>
<section id="amenities">
    <div class="container">
        <h2>Curated Amenities</h2>
        <p>Everything you need to live, learn, and thrive.</p>
        <a href="/rooms-facilities" class="button outline">View All Facilities</a>
    </div>
    {notice}
    <div class="container grid">{cards}</div>
</section>
<section>
    <div class="container stats">
        <div><p class="stat-value">10+</p><p>Years of Excellence</p></div>
        <div><p class="stat-value">500+</p><p>Happy Students</p></div>
        <div><p class="stat-value">24/7</p><p>Support &amp; Security</p></div>
    </div>
</section>
<section>
    <div class="container">
        <h2>Ready to move in?</h2>
        <p>Spaces fill up fast before the academic session. Secure your spot at City Hostel today.</p>
        <a href="/contact" class="button">Contact Us Now</a>
        <a href="/rooms-facilities" class="button outline">Check Availability</a>
    </div>
</section>"#,
        hero_image = HERO_IMAGE_URL,
        brand = html_escape(&site.brand),
        notice = degraded_notice(page.degraded),
        cards = cards,
    );

    build_page(site, "/", SITE_TITLE, &content)
}

pub fn render_about(page: &AboutPage, site: &SiteConfig) -> String {
    let introduction: String = page
        .introduction
        .iter()
        .map(|paragraph| format!("<p>{}</p>", html_escape(paragraph)))
        .collect();
    let values: String = page
        .core_values
        .iter()
        .map(|value| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                html_escape(value.title),
                html_escape(value.description)
            )
        })
        .collect();
    let stats: String = page
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div><p class="stat-value">{}</p><p>{}</p></div>"#,
                html_escape(stat.value),
                html_escape(stat.label)
            )
        })
        .collect();

    let content = format!(
        r#"{hero}
<section>
    <div class="container">
        <h2>Welcome to Your Home Away From Home</h2>
        {introduction}
    </div>
</section>
<section>
    <div class="container">
        <h2>Our Core Values</h2>
        <p>What makes City Hostel the preferred choice for students and parents</p>
        <div class="grid">{values}</div>
    </div>
</section>
<section>
    <div class="container stats">{stats}</div>
</section>
<section>
    <div class="container">
        <h2>Our Mission</h2>
        <p>{mission}</p>
    </div>
</section>"#,
        hero = hero(
            "About City Hostel",
            "A trusted name in student accommodation in Bhawarkua, Indore"
        ),
        introduction = introduction,
        values = values,
        stats = stats,
        mission = html_escape(page.mission),
    );

    build_page(site, "/about", &page_title("About Us"), &content)
}

fn render_room_card(room: &RoomType) -> String {
    let image = match room.room_image.as_deref() {
        Some(reference) if !reference.is_empty() => format!(
            r#"<img src="{}" alt="{}" width="600">"#,
            html_escape(&resolve_image_url(reference)),
            html_escape(room.room_name.as_deref().unwrap_or("Room"))
        ),
        _ => String::new(),
    };
    let features: String = [capacity_label(room), area_label(room), Some(ac_label(room).to_string())]
        .into_iter()
        .flatten()
        .map(|feature| format!("<li>{}</li>", html_escape(&feature)))
        .collect();
    let price = price_label(room)
        .map(|price| {
            format!(
                r#"<p class="price">{}<span>/month</span></p>"#,
                html_escape(&price)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card room">
            {image}
            <h3>{name}</h3>
            {description}
            <ul class="features">{features}</ul>
            {price}
        </div>"#,
        image = image,
        name = html_escape(room.room_name.as_deref().unwrap_or_default()),
        description = optional_paragraph("description", room.description.as_deref()),
        features = features,
        price = price,
    )
}

pub fn render_rooms_facilities(page: &RoomsFacilitiesPage, site: &SiteConfig) -> String {
    let rooms: String = page.rooms.iter().map(render_room_card).collect();
    let groups: String = page
        .facility_groups
        .iter()
        .map(|group| {
            let items: String = group
                .items
                .iter()
                .map(|facility| {
                    format!(
                        r#"<div class="facility"><h4>{}</h4>{}{}</div>"#,
                        html_escape(facility.facility_name.as_deref().unwrap_or_default()),
                        optional_paragraph("description", facility.description.as_deref()),
                        optional_paragraph("availability", facility.availability.as_deref()),
                    )
                })
                .collect();
            format!(
                r#"<div class="card facility-group"><h3>{}</h3>{}</div>"#,
                html_escape(&group.category),
                items
            )
        })
        .collect();

    let content = format!(
        r#"{hero}
{notice}
<section id="rooms">
    <div class="container">
        <h2>Our Room Types</h2>
        <p>Choose from our range of well-furnished rooms designed for your comfort</p>
        <div class="grid">{rooms}</div>
        <a href="/contact" class="button">Book Your Room</a>
    </div>
</section>
<section id="facilities">
    <div class="container">
        <h2>Hostel Facilities</h2>
        <p>Everything you need for a comfortable stay</p>
        <div class="grid">{groups}</div>
    </div>
</section>
<section>
    <div class="container">
        <h2>Ready to Make City Hostel Your Home?</h2>
        <p>Contact us today to book your room or schedule a visit</p>
        <a href="/contact" class="button">Contact Us</a>
        <a href="{whatsapp}" class="button outline" target="_blank" rel="noopener noreferrer">WhatsApp Us</a>
    </div>
</section>"#,
        hero = hero(
            "Rooms & Facilities",
            "Comfortable living spaces with all the amenities you need"
        ),
        notice = degraded_notice(page.degraded),
        rooms = rooms,
        groups = groups,
        whatsapp = html_escape(&whatsapp_link(&site.whatsapp_number, None)),
    );

    build_page(
        site,
        "/rooms-facilities",
        &page_title("Rooms & Facilities"),
        &content,
    )
}

pub fn render_gallery(page: &GalleryPage, site: &SiteConfig) -> String {
    let view = &page.view;

    let facet_bar = if view.has_facet_bar() {
        let links: String = view
            .facets
            .iter()
            .map(|facet| {
                let class = if facet == view.selected.label() {
                    r#" class="selected""#
                } else {
                    ""
                };
                format!(
                    r#"<a href="/gallery?category={}"{}>{}</a>"#,
                    urlencoding::encode(facet),
                    class,
                    html_escape(facet)
                )
            })
            .collect();
        format!(
            r#"<section id="facets"><div class="container facets">{}</div></section>"#,
            links
        )
    } else {
        String::new()
    };

    let visible = view.visible();
    let grid = if visible.is_empty() {
        r#"<p class="empty">No images available in this category</p>"#.to_string()
    } else {
        let cards: String = visible
            .iter()
            .map(|image| {
                let img = match image.image_file.as_deref() {
                    Some(reference) if !reference.is_empty() => format!(
                        r#"<img src="{}" alt="{}" width="800">"#,
                        html_escape(&resolve_image_url(reference)),
                        html_escape(image.alt_or_fallback())
                    ),
                    _ => String::new(),
                };
                let title = match image.image_title.as_deref() {
                    Some(title) if !title.is_empty() => format!("<h3>{}</h3>", html_escape(title)),
                    _ => String::new(),
                };
                format!(
                    r#"<div class="card image" data-id="{}">{}{}{}</div>"#,
                    html_escape(&image.id),
                    img,
                    title,
                    optional_paragraph("description", image.image_description.as_deref())
                )
            })
            .collect();
        format!(r#"<div class="grid">{}</div>"#, cards)
    };

    let content = format!(
        r#"{hero}
{notice}
{facet_bar}
<section id="images">
    <div class="container">{grid}</div>
</section>
<section>
    <div class="container">
        <h2>Want to See More?</h2>
        <p>Schedule a visit to experience our facilities in person</p>
        <a href="{visit}" class="button" target="_blank" rel="noopener noreferrer">Schedule a Visit</a>
    </div>
</section>"#,
        hero = hero(
            "Gallery",
            "Take a virtual tour of our hostel facilities and living spaces"
        ),
        notice = degraded_notice(page.degraded),
        facet_bar = facet_bar,
        grid = grid,
        visit = html_escape(&whatsapp_link(
            &site.whatsapp_number,
            Some(VISIT_REQUEST_TEXT)
        )),
    );

    build_page(site, "/gallery", &page_title("Gallery"), &content)
}

/// Contact page, optionally showing the result of a submission
pub fn render_contact(site: &SiteConfig, outcome: Option<&ContactOutcome>) -> String {
    let empty = ContactFields::default();
    let (banner, fields) = match outcome {
        Some(ContactOutcome::Sent(notice)) => (
            format!(
                r#"<div class="success" role="status"><strong>{}</strong><p>{}</p></div>"#,
                html_escape(notice.title),
                html_escape(notice.description)
            ),
            &empty,
        ),
        Some(ContactOutcome::Incomplete { missing, fields }) => (
            format!(
                r#"<div class="error" role="alert">Please fill in: {}</div>"#,
                html_escape(&missing.join(", "))
            ),
            fields,
        ),
        None => (String::new(), &empty),
    };

    let content = format!(
        r#"{hero}
<section>
    <div class="container grid">
        <div>
            <h2>Get In Touch</h2>
            <h3>Address</h3>
            <p>{address}</p>
            <h3>Phone</h3>
            <p><a href="{tel}">{phone}</a></p>
            <h3>Email</h3>
            <p><a href="{mailto}">{email}</a></p>
            <h3>Office Hours</h3>
            <p>{office_hours}</p>
            <h3>Quick Contact</h3>
            <a href="{whatsapp}" class="button" target="_blank" rel="noopener noreferrer">Message on WhatsApp</a>
        </div>
        <div>
            <h2>Send Us a Message</h2>
            {banner}
            <form id="contact-form" method="post" action="/contact">
                <label for="name">Full Name *</label>
                <input id="name" name="name" type="text" required value="{name}" placeholder="Enter your name">
                <label for="email">Email Address *</label>
                <input id="email" name="email" type="email" required value="{email_value}" placeholder="Enter your email">
                <label for="phone">Phone Number *</label>
                <input id="phone" name="phone" type="tel" required value="{phone_value}" placeholder="Enter your phone number">
                <label for="message">Message *</label>
                <textarea id="message" name="message" required rows="6" placeholder="Tell us about your requirements...">{message}</textarea>
                <p><button id="contact-submit" type="submit" class="button">Send Message</button></p>
            </form>
        </div>
    </div>
</section>
<section id="map" class="map">
    <div class="container">
        <h2>Find Us on Map</h2>
        <p>Located in the heart of Bhawarkua, Indore</p>
        <iframe src="{map}" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade" title="City Hostel Location"></iframe>
    </div>
</section>
{script}"#,
        hero = hero(
            "Contact Us",
            "Get in touch with us for bookings, inquiries, or to schedule a visit"
        ),
        address = html_escape(&site.address),
        tel = html_escape(&tel_link(&site.phone)),
        phone = html_escape(&site.phone),
        mailto = html_escape(&mailto_link(&site.email)),
        email = html_escape(&site.email),
        office_hours = html_escape(&site.office_hours),
        whatsapp = html_escape(&whatsapp_link(&site.whatsapp_number, None)),
        banner = banner,
        name = html_escape(&fields.name),
        email_value = html_escape(&fields.email),
        phone_value = html_escape(&fields.phone),
        message = html_escape(&fields.message),
        map = html_escape(&site.map_embed_url),
        script = CONTACT_SCRIPT,
    );

    build_page(site, "/contact", &page_title("Contact Us"), &content)
}

pub fn render_not_found(site: &SiteConfig, path: &str) -> String {
    let content = format!(
        r#"{}
<section>
    <div class="container">
        <p>Nothing lives at <code>{}</code>.</p>
        <a href="/" class="button">Back to Home</a>
    </div>
</section>"#,
        hero("Page Not Found", "The page you are looking for does not exist"),
        html_escape(path)
    );

    build_page(site, path, &page_title("Page Not Found"), &content)
}
