//! Preview renderer: projects a résumé into a print-ready A4 HTML page.
//!
//! Pure: reads a document snapshot and returns markup. Blocks for empty optional data
//! are left out entirely; the name and job title header is always present.

use chrono::NaiveDate;

use crate::models::resume::{
    EducationItem, ExperienceItem, LanguageItem, PersonalInfo, ResumeDocument, SkillItem,
};
use crate::preview::dates::{date_range, day_month_year, join_present, month_year};

pub mod dates;
pub mod handlers;

const PAGE_TEMPLATE: &str = include_str!("../../templates/preview.html");

/// Opens the browser's print dialog once the page has loaded.
const PRINT_SCRIPT: &str =
    "<script>window.addEventListener('load', function () { window.print(); });</script>";

/// Whether the page should hand itself to the host print pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Screen,
    Print,
}

/// Renders the full preview page. `today` dates the signature line.
pub fn render_preview(doc: &ResumeDocument, today: NaiveDate, mode: RenderMode) -> String {
    let info = &doc.personal_info;
    let title = html_escape(format!("{} {}", info.first_name, info.last_name).trim());

    let sidebar = [
        render_photo(info),
        render_contact(info),
        render_skills(&doc.skills),
        render_languages(&doc.languages),
    ]
    .concat();

    let main = [
        render_header(info),
        render_experience(&doc.experience),
        render_education(&doc.education),
        render_signature(info, today),
    ]
    .concat();

    let print_script = match mode {
        RenderMode::Screen => "",
        RenderMode::Print => PRINT_SCRIPT,
    };

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("TITLE", title.as_str()),
            ("SIDEBAR", sidebar.as_str()),
            ("MAIN", main.as_str()),
            ("PRINT_SCRIPT", print_script),
        ],
    )
}

fn render_photo(info: &PersonalInfo) -> String {
    let inner = match &info.photo_url {
        Some(url) => format!(r#"<img src="{}" alt="Profilbild">"#, html_escape(url)),
        None => {
            let initials: String = info
                .first_name
                .chars()
                .take(1)
                .chain(info.last_name.chars().take(1))
                .collect();
            format!(r#"<span class="initials">{}</span>"#, html_escape(&initials))
        }
    };
    format!("<div class=\"photo\">{inner}</div>\n")
}

fn render_contact(info: &PersonalInfo) -> String {
    let mut lines = Vec::new();

    if !info.email.is_empty() {
        lines.push(format!("<div>{}</div>", html_escape(&info.email)));
    }
    if !info.phone.is_empty() {
        lines.push(format!("<div>{}</div>", html_escape(&info.phone)));
    }
    if !info.address.is_empty() || !info.city.is_empty() {
        let street = if info.address.is_empty() {
            String::new()
        } else {
            format!("{}<br>", html_escape(&info.address))
        };
        let town = format!("{} {}", info.zip, info.city);
        lines.push(format!("<div>{street}{}</div>", html_escape(town.trim())));
    }
    if !info.birth_date.is_empty() {
        let place = if info.birth_place.is_empty() {
            String::new()
        } else {
            format!(
                r#"<br><span class="muted">in {}</span>"#,
                html_escape(&info.birth_place)
            )
        };
        lines.push(format!(
            r#"<div class="birth">{}{place}</div>"#,
            html_escape(&month_year(&info.birth_date))
        ));
    }
    if !info.website.is_empty() {
        lines.push(link(&info.website, "Webseite"));
    }
    if !info.linkedin.is_empty() {
        lines.push(link(&info.linkedin, "LinkedIn"));
    }

    if lines.is_empty() {
        return String::new();
    }
    format!(
        "<section class=\"contact\">\n<h3>Kontakt</h3>\n{}\n</section>\n",
        lines.join("\n")
    )
}

fn link(href: &str, label: &str) -> String {
    format!(
        r#"<div><a href="{}" target="_blank" rel="noreferrer">{label}</a></div>"#,
        html_escape(href)
    )
}

fn render_skills(skills: &[SkillItem]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let items: String = skills
        .iter()
        .map(|skill| {
            format!(
                "<div class=\"skill\"><strong>{}</strong><div class=\"bar\"><span style=\"width: {}%\"></span></div></div>\n",
                html_escape(&skill.name),
                skill.level * 100 / 5
            )
        })
        .collect();
    format!("<section>\n<h3>Kenntnisse</h3>\n{items}</section>\n")
}

fn render_languages(languages: &[LanguageItem]) -> String {
    if languages.is_empty() {
        return String::new();
    }
    let items: String = languages
        .iter()
        .map(|lang| {
            format!(
                "<div class=\"language\"><strong>{}</strong><em>{}</em></div>\n",
                html_escape(&lang.language),
                html_escape(&lang.proficiency)
            )
        })
        .collect();
    format!("<section>\n<h3>Sprachen</h3>\n{items}</section>\n")
}

fn render_header(info: &PersonalInfo) -> String {
    format!(
        "<header>\n<h1>{} <span>{}</span></h1>\n<p class=\"job-title\">{}</p>\n</header>\n",
        html_escape(&info.first_name),
        html_escape(&info.last_name),
        html_escape(&info.job_title)
    )
}

/// One timeline entry shared by experience and education.
struct TimelineEntry<'a> {
    title: &'a str,
    place: &'a str,
    city: &'a str,
    when: String,
    description: &'a str,
}

fn render_timeline(heading: &str, entries: Vec<TimelineEntry<'_>>) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            let description = if e.description.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", html_escape(e.description))
            };
            format!(
                "<div class=\"entry\">\n<h4>{}</h4>\n<div class=\"meta\"><span class=\"where\">{}</span><span class=\"when\">{}</span></div>\n{description}\n</div>\n",
                html_escape(e.title),
                html_escape(&join_present(&[e.place, e.city], ", ")),
                html_escape(&e.when),
            )
        })
        .collect();
    format!("<section>\n<h2>{heading}</h2>\n<div class=\"timeline\">\n{items}</div>\n</section>\n")
}

fn render_experience(items: &[ExperienceItem]) -> String {
    let entries = items
        .iter()
        .map(|job| TimelineEntry {
            title: &job.position,
            place: &job.company,
            city: &job.city,
            when: date_range(&job.start_date, &job.end_date, job.current),
            description: &job.description,
        })
        .collect();
    render_timeline("Berufserfahrung", entries)
}

fn render_education(items: &[EducationItem]) -> String {
    let entries = items
        .iter()
        .map(|edu| TimelineEntry {
            title: &edu.degree,
            place: &edu.school,
            city: &edu.city,
            when: date_range(&edu.start_date, &edu.end_date, edu.current),
            description: &edu.description,
        })
        .collect();
    render_timeline("Ausbildung", entries)
}

fn render_signature(info: &PersonalInfo, today: NaiveDate) -> String {
    let city = if info.city.is_empty() { "Ort" } else { &info.city };
    format!(
        "<div class=\"signature\">\n<p>{}, {}</p>\n<div class=\"line\"></div>\n<p class=\"label\">Unterschrift</p>\n</div>\n",
        html_escape(city),
        day_month_year(today)
    )
}

/// Replaces `{{KEY}}` placeholders in one pass, so substituted text is never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Escape HTML special characters to prevent XSS
fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
