#![forbid(unsafe_code)]

//! Fixed project catalog.
//!
//! The catalog is a `static` table built into the binary. It is never mutated
//! and never loaded from anywhere else.
//!
//! # Invariants
//!
//! 1. **Total lookup**: [`Catalog::lookup`] never fails. An id that is not in
//!    the table resolves to the default record (`ecommerce`).
//! 2. **Exact keys**: matching is byte-for-byte. No prefix matching, no case
//!    folding, no trimming.
//! 3. **Stable order**: [`Catalog::iter`] yields records in table order, and
//!    every list inside a record keeps its declaration order.

use serde::Serialize;

/// One project shown on the page.
///
/// All fields are display strings. `rating` and `year` are shown literally
/// and never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Stable key used by tiles and buttons.
    pub id: &'static str,
    pub name: &'static str,
    /// Plain text. Escaping is the renderer's job.
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Hero image URI. Not validated.
    pub image_url: &'static str,
    pub year: &'static str,
    pub rating: &'static str,
    pub category: &'static str,
}

/// Id of the record every unknown id resolves to.
pub const DEFAULT_PROJECT_ID: &str = "ecommerce";

static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: "ecommerce",
        name: "E-Commerce Platform",
        description: "A modern e-commerce platform built with React and Node.js, featuring real-time inventory management and secure payment processing.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        features: &[
            "Real-time inventory",
            "Secure payments",
            "Admin dashboard",
            "Mobile responsive",
        ],
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.8",
        category: "Web Development",
    },
    ProjectRecord {
        id: "fitness",
        name: "Fitness Tracker App",
        description: "A comprehensive fitness tracking application with workout planning, progress monitoring, and social features.",
        technologies: &["React Native", "Firebase", "Redux", "Expo"],
        features: &[
            "Workout tracking",
            "Progress monitoring",
            "Social features",
            "Offline support",
        ],
        image_url: "https://images.unsplash.com/photo-1551650975-87deedd944c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.9",
        category: "Mobile App",
    },
    ProjectRecord {
        id: "task",
        name: "Task Management System",
        description: "A collaborative task management platform with real-time updates, team collaboration, and project tracking.",
        technologies: &["Vue.js", "Socket.io", "Express", "PostgreSQL"],
        features: &[
            "Real-time updates",
            "Team collaboration",
            "Project tracking",
            "File sharing",
        ],
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.7",
        category: "Web Development",
    },
    ProjectRecord {
        id: "music",
        name: "Music Player App",
        description: "A feature-rich desktop music player with playlist management, audio visualization, and cross-platform support.",
        technologies: &["Electron", "React", "Node.js", "Web Audio API"],
        features: &[
            "Playlist management",
            "Audio visualization",
            "Cross-platform",
            "Custom themes",
        ],
        image_url: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.6",
        category: "Desktop App",
    },
    ProjectRecord {
        id: "ai-chat",
        name: "AI Chat Bot",
        description: "An intelligent chatbot powered by machine learning with natural language processing capabilities.",
        technologies: &["Python", "TensorFlow", "NLP", "Flask"],
        features: &[
            "Natural language processing",
            "Machine learning",
            "Multi-language support",
            "API integration",
        ],
        image_url: "https://images.unsplash.com/photo-1551434678-e076c223a692?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.9",
        category: "AI/ML",
    },
    ProjectRecord {
        id: "weather",
        name: "Weather App",
        description: "A beautiful weather application with real-time forecasts, location tracking, and interactive weather maps.",
        technologies: &["Flutter", "Dart", "OpenWeather API", "Google Maps"],
        features: &[
            "Real-time forecasts",
            "Location tracking",
            "Interactive maps",
            "Weather alerts",
        ],
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
        year: "2024",
        rating: "4.8",
        category: "Mobile App",
    },
];

/// Read-only view over the built-in project table.
///
/// `Catalog` is a zero-sized handle; copies are free and all of them see the
/// same table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog {
    _private: (),
}

impl Catalog {
    /// Handle to the built-in table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { _private: () }
    }

    /// Resolve `id`, falling back to the default record on a miss.
    #[must_use]
    pub fn lookup(&self, id: &str) -> &'static ProjectRecord {
        match self.get(id) {
            Some(record) => record,
            None => {
                crate::debug!(project = id, "unknown project id, using default record");
                self.default_record()
            }
        }
    }

    /// Strict lookup. `None` when `id` is not in the table.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static ProjectRecord> {
        PROJECTS.iter().find(|record| record.id == id)
    }

    /// Whether `id` names a record in the table.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The record unknown ids resolve to.
    #[must_use]
    pub fn default_record(&self) -> &'static ProjectRecord {
        &PROJECTS[0]
    }

    /// All records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ProjectRecord> {
        PROJECTS.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        PROJECTS.len()
    }

    /// Always `false`; the table is fixed and non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        PROJECTS.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_ecommerce() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.default_record().id, DEFAULT_PROJECT_ID);
        assert_eq!(catalog.default_record().name, "E-Commerce Platform");
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("Fitness").is_none());
        assert_eq!(catalog.lookup("Fitness").id, "ecommerce");
    }

    #[test]
    fn lookup_does_not_trim_or_prefix_match() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(" music").is_none());
        assert!(catalog.get("mus").is_none());
        assert!(catalog.get("").is_none());
        assert_eq!(catalog.lookup("ai").id, "ecommerce");
    }

    #[test]
    fn every_record_has_four_technologies_and_features() {
        for record in Catalog::builtin().iter() {
            assert_eq!(record.technologies.len(), 4, "{}", record.id);
            assert_eq!(record.features.len(), 4, "{}", record.id);
        }
    }

    #[test]
    fn table_order_is_declaration_order() {
        let ids: Vec<_> = Catalog::builtin().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            ["ecommerce", "fitness", "task", "music", "ai-chat", "weather"]
        );
    }
}
