//! The experience dataset
//!
//! A compile-time table of engagements, in display order (left to right in
//! the card row). Nothing here changes at runtime.

use crate::types::ExperienceRecord;
use egui_phosphor::regular;

pub static EXPERIENCES: &[ExperienceRecord] = &[
    ExperienceRecord {
        note: Some("Education"),
        image_url: "https://www.bth.se/wp-content/uploads/2018/09/bthlogo_svart_platt.png",
        title: "Blekinge Institute of Technology",
        subtitle: "Master of Science in Software Engineering",
        tech_icons: &[
            regular::CODE,
            regular::TERMINAL_WINDOW,
            regular::BRACKETS_CURLY,
            regular::CPU,
            regular::DATABASE,
        ],
        period: ("2020", "present"),
        bullets: &[
            "I'm currently studying at Blekinge Institute of Technology learning all about Software Engineering, from low level programming, compilers, databases, to project management and software architecture.",
        ],
    },
    ExperienceRecord {
        note: Some("Open Source"),
        image_url: "https://avatars.githubusercontent.com/u/108266839?s=200&v=4",
        title: "Create T3 App",
        subtitle: "Core OSS Maintainer",
        tech_icons: &[
            regular::BRACKETS_CURLY,
            regular::ATOM,
            regular::STACK,
            regular::PAINT_BRUSH,
            regular::DATABASE,
        ],
        period: ("Jun 22", "present"),
        bullets: &[
            "The best way to start a full-stack, typesafe Next.js app",
            "Get started on your next idea without worrying about the comlpex project setup",
        ],
    },
    ExperienceRecord {
        note: Some("Open Source"),
        image_url: "https://avatars.githubusercontent.com/u/78011399?s=200&v=4",
        title: "tRPC",
        subtitle: "Core OSS Contributor",
        tech_icons: &[regular::BRACKETS_CURLY],
        period: ("Jul 22", "present"),
        bullets: &[
            "Move Fast and Break Nothing. End-to-end typesafe APIs made easy.",
            "GraphQL alternative for fullstack TypeScript applications with an excellent developer experience",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::EXPERIENCES;

    #[test]
    fn every_record_has_title_and_subtitle() {
        for record in EXPERIENCES {
            assert!(!record.title.is_empty());
            assert!(!record.subtitle.is_empty());
        }
    }

    #[test]
    fn dataset_order_is_display_order() {
        let titles: Vec<&str> = EXPERIENCES.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            ["Blekinge Institute of Technology", "Create T3 App", "tRPC"]
        );
    }

    #[test]
    fn notes_are_known_tags() {
        for record in EXPERIENCES {
            if let Some(note) = record.note {
                assert!(matches!(note, "Education" | "Open Source"));
            }
        }
    }

    #[test]
    fn bullets_and_icons_are_nonempty_strings() {
        for record in EXPERIENCES {
            for bullet in record.bullets {
                assert!(!bullet.is_empty());
            }
            for icon in record.tech_icons {
                assert!(!icon.is_empty());
            }
        }
    }
}
