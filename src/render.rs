//! HTML rendering of the portfolio page.
//!
//! Everything interpolated into the document goes through [`escape_html`],
//! which is safe for both text content and double-quoted attribute values.

use crate::feed::FeedState;
use crate::profile::{Certification, Profile, Publication};
use crate::types::RepositoryEntry;

/// Placeholder shown when a remote image fails to load.
pub const IMAGE_FALLBACK: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='600' height='400'><rect width='100%' height='100%' fill='%23222222'/><text x='50%' y='50%' fill='%23ffffff' font-size='20' font-family='Arial,Helvetica,sans-serif' dominant-baseline='middle' text-anchor='middle'>Image unavailable</text></svg>";

pub const LOADING_TEXT: &str = "Loading repositories...";
pub const ERROR_TITLE: &str = "Failed to load GitHub repositories";
pub const ERROR_HINT: &str = "If this persists, check network, CORS, or rate-limiting (GitHub API rate limit for unauthenticated requests is low).";
pub const NO_DESCRIPTION: &str = "No description available.";

const STYLE: &str = r#"
body { margin: 0; background: #0a0a0a; color: #e5e5e5; font-family: system-ui, sans-serif; }
header { position: sticky; top: 0; background: rgba(0,0,0,.7); border-bottom: 1px solid rgba(250,204,21,.3); }
header .bar, section { max-width: 72rem; margin: 0 auto; padding: 1rem 1.5rem; }
header .bar { display: flex; justify-content: space-between; align-items: center; }
nav a { margin-left: 1.5rem; color: inherit; text-decoration: none; }
h1, h2, .card-title { color: #facc15; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.card { display: block; border: 1px solid #262626; border-radius: 1rem; background: #171717; padding: 1.25rem; color: inherit; text-decoration: none; }
.hero { position: relative; }
.hero-blend { position: absolute; inset: 0; overflow: hidden; opacity: .4; z-index: -1; }
.hero img.blend { width: 100%; height: 100%; object-fit: cover; filter: blur(24px); transform: scale(1.1); }
.hero img.portrait { width: 16rem; height: 16rem; border-radius: 50%; object-fit: cover; }
.error-panel { border: 1px solid #dc2626; border-radius: .75rem; background: rgba(127,29,29,.2); padding: 1rem; }
.error-panel pre { white-space: pre-wrap; color: #fecaca; }
footer { border-top: 1px solid rgba(234,179,8,.2); background: #000; padding: 1.5rem; text-align: center; font-size: .875rem; }
"#;

const ABSTRACT_TOGGLE: &str = r#"
document.querySelectorAll('[data-toggle-abstract]').forEach(function (button) {
  button.addEventListener('click', function () {
    var el = document.getElementById(button.getAttribute('data-toggle-abstract'));
    if (el) el.style.display = el.style.display === 'none' ? 'block' : 'none';
  });
});
"#;

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// `onerror` handler that disarms itself before swapping in the placeholder,
/// so a failing placeholder cannot retrigger it.
pub fn image_fallback_handler() -> String {
    format!("this.onerror=null;this.src=\"{}\";", IMAGE_FALLBACK)
}

fn img(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}" loading="lazy" onerror="{}">"#,
        escape_html(src),
        escape_html(alt),
        class,
        escape_html(&image_fallback_handler())
    )
}

/// Renders the complete document for one page view.
pub fn render_page(profile: &Profile, feed: &FeedState, year: i32) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&profile.name)));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    html.push_str(&render_header(profile));
    html.push_str(&render_hero(profile));
    html.push_str(&render_skills(&profile.skills));
    html.push_str(&render_achievements(&profile.achievements));
    html.push_str(&render_certifications(&profile.certifications));
    html.push_str(&render_publications(&profile.publications));
    html.push_str(&render_projects(feed));
    html.push_str(&render_contact(profile));
    html.push_str(&format!(
        "<footer>&copy; {} {} &bull; {}</footer>\n",
        year,
        escape_html(&profile.name),
        escape_html(&profile.tagline)
    ));

    html.push_str(&format!("<script>{}</script>\n</body>\n</html>\n", ABSTRACT_TOGGLE));
    html
}

fn render_header(profile: &Profile) -> String {
    let nav = [
        ("skills", "Skills"),
        ("achievements", "Achievements"),
        ("certifications", "Certifications"),
        ("projects", "Projects"),
        ("contact", "Contact"),
    ]
    .iter()
    .map(|(id, label)| format!(r##"<a href="#{}">{}</a>"##, id, label))
    .collect::<String>();

    format!(
        "<header><div class=\"bar\"><div><strong>{}</strong> <span>{}</span></div><nav>{}</nav></div></header>\n",
        escape_html(&profile.initials),
        escape_html(&profile.tagline),
        nav
    )
}

fn render_hero(profile: &Profile) -> String {
    format!(
        r##"<section id="home" class="hero">
<div class="hero-blend">{blend}</div>
<div><h1>{name}</h1><p>{headline}</p><p>{summary}</p>
<p><a class="button" href="#projects">View Projects</a> <a class="button" href="#contact">Contact</a></p></div>
<div>{portrait}</div>
</section>
"##,
        name = escape_html(&profile.name),
        headline = escape_html(&profile.headline),
        summary = escape_html(&profile.summary),
        blend = img(&profile.hero_image, &format!("{} background blend", profile.name), "blend"),
        portrait = img(&profile.hero_image, &format!("{} portrait", profile.name), "portrait"),
    )
}

fn render_skills(skills: &[String]) -> String {
    let items = skills
        .iter()
        .map(|s| format!("<div class=\"card\">{}</div>", escape_html(s)))
        .collect::<String>();
    format!(
        "<section id=\"skills\"><h2>Technical Skills</h2><div class=\"grid\">{}</div></section>\n",
        items
    )
}

fn render_achievements(achievements: &[String]) -> String {
    let items = achievements
        .iter()
        .map(|a| format!("<li>{}</li>", escape_html(a)))
        .collect::<String>();
    format!(
        "<section id=\"achievements\"><h2>Highlighted Achievements</h2><ul>{}</ul></section>\n",
        items
    )
}

fn render_certifications(certifications: &[Certification]) -> String {
    let items = certifications
        .iter()
        .map(|c| {
            format!(
                "<a class=\"card\" href=\"{}\">{}<div>{}</div></a>",
                escape_html(&c.link),
                img(&c.image, &c.name, "badge"),
                escape_html(&c.name)
            )
        })
        .collect::<String>();
    format!(
        "<section id=\"certifications\"><h2>Certifications</h2><div class=\"grid\">{}</div></section>\n",
        items
    )
}

fn render_publications(publications: &[Publication]) -> String {
    let items = publications
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let abstract_id = format!("pub-abstract-{}", i);
            let authors = p
                .authors
                .as_deref()
                .map(|a| format!("<div class=\"authors\">{}</div>", escape_html(a)))
                .unwrap_or_default();
            format!(
                r#"<div class="card"><div class="card-title">{title}</div><div>{venue} &middot; {date}</div>{authors}
<a href="{link}" target="_blank" rel="noopener noreferrer">View publication</a>
<button type="button" data-toggle-abstract="{id}">Show abstract</button>
<div id="{id}" style="display:none">{abstract_text}</div></div>"#,
                title = escape_html(&p.title),
                venue = escape_html(&p.venue),
                date = escape_html(&p.date),
                link = escape_html(&p.link),
                authors = authors,
                id = abstract_id,
                abstract_text = escape_html(&p.abstract_text),
            )
        })
        .collect::<String>();
    format!(
        "<section id=\"publications\"><h2>Publications</h2>{}</section>\n",
        items
    )
}

/// The projects section for each feed phase.
pub fn render_projects(feed: &FeedState) -> String {
    let body = match feed {
        FeedState::Loading => format!("<p class=\"loading\">{}</p>", LOADING_TEXT),
        FeedState::Error { message } => format!(
            "<div class=\"error-panel\"><div>{}</div><pre>{}</pre><div>{}</div></div>",
            ERROR_TITLE,
            escape_html(message),
            ERROR_HINT
        ),
        FeedState::Ready { entries } => format!(
            "<div class=\"grid\">{}</div>",
            entries.iter().map(render_repository_card).collect::<String>()
        ),
    };
    format!(
        "<section id=\"projects\"><h2>GitHub Projects</h2>{}</section>\n",
        body
    )
}

fn render_repository_card(entry: &RepositoryEntry) -> String {
    let description = entry
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);
    format!(
        "<a class=\"card repo\" data-repo-id=\"{}\" href=\"{}\"><div class=\"card-title\">{}</div><p>{}</p></a>",
        entry.id,
        escape_html(&entry.html_url),
        escape_html(&entry.name),
        escape_html(description)
    )
}

fn render_contact(profile: &Profile) -> String {
    let contact = &profile.contact;
    let display = |url: &str| {
        url.trim_start_matches("https://")
            .trim_start_matches("www.")
            .to_string()
    };
    format!(
        r#"<section id="contact"><h2>Let's Connect</h2><ul>
<li>Email: <a href="mailto:{email}">{email}</a></li>
<li>LinkedIn: <a href="{linkedin}">{linkedin_text}</a></li>
<li>GitHub: <a href="{github}">{github_text}</a></li>
</ul></section>
"#,
        email = escape_html(&contact.email),
        linkedin = escape_html(&contact.linkedin),
        linkedin_text = escape_html(&display(&contact.linkedin)),
        github = escape_html(&contact.github),
        github_text = escape_html(&display(&contact.github)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn fallback_handler_disarms_before_swapping() {
        let handler = image_fallback_handler();
        let disarm = handler.find("this.onerror=null").unwrap();
        let swap = handler.find("this.src=").unwrap();
        assert!(disarm < swap);
        assert!(handler.contains("Image unavailable"));
    }

    #[test]
    fn empty_description_uses_placeholder() {
        let entry = RepositoryEntry {
            id: 7,
            name: "etl".to_string(),
            description: Some(String::new()),
            html_url: "https://github.com/x/etl".to_string(),
            fork: false,
        };
        assert!(render_repository_card(&entry).contains(NO_DESCRIPTION));
    }
}
