#![forbid(unsafe_code)]

//! Project modal view.
//!
//! [`ProjectView`] is the structural content of the modal for one record.
//! Hosts that own their own templating read its fields; hosts that just
//! fill a container call [`ProjectView::body_html`].
//!
//! # Invariants
//!
//! 1. **Order**: technologies and features keep record order.
//! 2. **Stats**: exactly three tiles, `Year`, `Rating`, `Category`, in that
//!    order.
//! 3. **Actions**: one `pdf` and one `apk` action, both bound to the id the
//!    modal was opened with.
//! 4. **Escaping**: every record string is HTML-escaped in `body_html`.

use core::fmt::Write as _;

use serde::Serialize;

use crate::catalog::ProjectRecord;
use crate::download::ArtifactKind;

/// Hero image at the top of the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
}

/// One labeled figure in the stats row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    /// Text colour class of the value.
    pub accent: &'static str,
}

/// A download button in the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadAction {
    pub project_id: String,
    pub kind: ArtifactKind,
}

/// Rendered content of the project modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    /// Id the modal was opened with (may differ from the record's id after a
    /// fallback).
    pub project_id: String,
    pub title: String,
    pub hero: HeroImage,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub stats: [StatTile; 3],
    pub actions: [DownloadAction; 2],
}

impl ProjectView {
    /// View of `record` opened through `requested_id`.
    #[must_use]
    pub fn build(requested_id: &str, record: &ProjectRecord) -> Self {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| (*s).to_owned()).collect() };
        Self {
            project_id: requested_id.to_owned(),
            title: record.name.to_owned(),
            hero: HeroImage {
                src: record.image_url.to_owned(),
                alt: record.name.to_owned(),
            },
            description: record.description.to_owned(),
            technologies: owned(record.technologies),
            features: owned(record.features),
            stats: [
                StatTile {
                    label: "Year",
                    value: record.year.to_owned(),
                    accent: "text-purple-400",
                },
                StatTile {
                    label: "Rating",
                    value: record.rating.to_owned(),
                    accent: "text-pink-400",
                },
                StatTile {
                    label: "Category",
                    value: record.category.to_owned(),
                    accent: "text-blue-400",
                },
            ],
            actions: ArtifactKind::ALL.map(|kind| DownloadAction {
                project_id: requested_id.to_owned(),
                kind,
            }),
        }
    }

    /// View of `record` under its own id.
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self::build(record.id, record)
    }

    /// Markup for the modal body container.
    ///
    /// Download buttons carry `data-download` and `data-project` attributes
    /// for the host to route clicks back to the controller.
    #[must_use]
    pub fn body_html(&self) -> String {
        let mut out = String::with_capacity(2048);
        out.push_str("<div class=\"space-y-6\">");

        out.push_str(
            "<div class=\"aspect-video bg-gradient-to-br from-purple-600/20 to-pink-600/20 rounded-lg overflow-hidden\">",
        );
        out.push_str("<img src=\"");
        html_escape_into(&mut out, &self.hero.src);
        out.push_str("\" alt=\"");
        html_escape_into(&mut out, &self.hero.alt);
        out.push_str("\" class=\"w-full h-full object-cover\"></div>");

        section_heading(&mut out, "Description");
        out.push_str("<p class=\"text-gray-300\">");
        html_escape_into(&mut out, &self.description);
        out.push_str("</p></div>");

        out.push_str("<div class=\"grid md:grid-cols-2 gap-4\">");
        section_heading(&mut out, "Technologies");
        out.push_str("<div class=\"flex flex-wrap gap-2\">");
        for tech in &self.technologies {
            out.push_str("<span class=\"tag\">");
            html_escape_into(&mut out, tech);
            out.push_str("</span>");
        }
        out.push_str("</div></div>");
        section_heading(&mut out, "Features");
        out.push_str("<ul class=\"text-gray-300 space-y-1\">");
        for feature in &self.features {
            out.push_str(
                "<li class=\"flex items-center\"><i class=\"fas fa-check text-green-400 mr-2\"></i>",
            );
            html_escape_into(&mut out, feature);
            out.push_str("</li>");
        }
        out.push_str("</ul></div></div>");

        out.push_str("<div class=\"grid md:grid-cols-3 gap-4 text-center\">");
        for stat in &self.stats {
            let _ = write!(
                out,
                "<div class=\"bg-gradient-to-br from-purple-600/20 to-pink-600/20 p-4 rounded-lg\"><div class=\"text-2xl font-bold {}\">",
                stat.accent
            );
            html_escape_into(&mut out, &stat.value);
            let _ = write!(
                out,
                "</div><div class=\"text-sm text-gray-400\">{}</div></div>",
                stat.label
            );
        }
        out.push_str("</div>");

        out.push_str("<div class=\"flex gap-4\">");
        for action in &self.actions {
            let (class, icon) = match action.kind {
                ArtifactKind::Pdf => ("btn-secondary", "fas fa-file-pdf"),
                ArtifactKind::Apk => ("btn-primary", "fab fa-android"),
            };
            let _ = write!(
                out,
                "<button type=\"button\" class=\"{class}\" data-download=\"{}\" data-project=\"",
                action.kind.tag()
            );
            html_escape_into(&mut out, &action.project_id);
            let _ = write!(
                out,
                "\"><i class=\"{icon} mr-2\"></i>{}</button>",
                action.kind.label()
            );
        }
        out.push_str("</div></div>");
        out
    }
}

fn section_heading(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<div><h4 class=\"text-lg font-semibold mb-2 text-purple-400\">{title}</h4>"
    );
}

/// HTML-escape a string into the output buffer.
pub fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
