use std::fmt::Write;

use crate::page::{EventCard, HomePage};

pub fn render_latest(card: &EventCard) -> String {
    format!(
        "{title}\nDate: {date}\nImage: {image}\n[{label}]",
        title = card.title,
        date = card.date.format("%d/%m/%Y"),
        image = card.image_src.as_deref().unwrap_or("-"),
        label = card.label,
    )
}

pub fn render_page(page: &HomePage) -> String {
    let mut out = String::new();

    out.push_str("# Nos services\n");
    out.push_str("Nous organisons des événements sur mesure partout dans le monde\n");
    for service in &page.services {
        let _ = writeln!(out, "\n## {}\n{}", service.heading, service.body);
    }

    let _ = writeln!(
        out,
        "\n# Nos réalisations\n{} événement(s)",
        page.event_count
    );

    out.push_str("\n# Notre équipe\n");
    out.push_str("Une équipe d’experts dédiés à l’organisation de vos événements\n");
    for person in &page.team {
        let _ = writeln!(out, "- {} ({})", person.name, person.position);
    }

    let success = &page.contact_success;
    let _ = writeln!(
        out,
        "\n# Contact\nAprès envoi du formulaire :\n> {}\n> {}",
        success.title, success.body
    );

    out.push_str("\n---\n");
    if let Some(card) = &page.latest {
        let _ = writeln!(out, "## Notre dernière prestation\n{}\n", render_latest(card));
    }
    let contact = &page.contact;
    let _ = writeln!(
        out,
        "## Contactez-nous\n{}\n{}\n{}",
        contact.address, contact.phone, contact.email
    );
    let socials = contact
        .socials
        .iter()
        .map(|link| format!("{} <{}>", link.name, link.href))
        .collect::<Vec<_>>()
        .join(" | ");
    if !socials.is_empty() {
        let _ = writeln!(out, "{socials}");
    }
    let _ = write!(out, "\n{}\n{}", contact.agency_name, page.description);

    out
}
