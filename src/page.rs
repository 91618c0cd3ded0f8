use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{SiteConfig, SocialLink};
use crate::dates::parse_event_date;
use crate::models::{DataSnapshot, EventId, EventRecord};
use crate::selector::select_latest;

const LATEST_LABEL: &str = "boom";

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub image_src: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PeopleCard {
    pub image_src: &'static str,
    pub name: &'static str,
    pub position: &'static str,
}

/// Summary card for one event, as shown in the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard {
    pub id: EventId,
    pub image_src: Option<String>,
    pub title: String,
    pub date: DateTime<Utc>,
    pub small: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactBlock {
    pub agency_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessMessage {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub services: Vec<ServiceCard>,
    pub team: Vec<PeopleCard>,
    pub event_count: usize,
    pub latest: Option<EventCard>,
    pub contact: ContactBlock,
    pub contact_success: SuccessMessage,
    pub description: &'static str,
}

const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        image_src: "/images/priscilla-du-preez-Q7wGvnbuwj0-unsplash1.png",
        heading: "Soirée d’entreprise",
        body: "Une soirée d’entreprise vous permet de réunir vos équipes pour un moment convivial afin de valoriser votre société en projetant une image dynamique. Nous vous proposons d’organiser pour vous vos diners et soirée d’entreprise",
    },
    ServiceCard {
        image_src: "/images/hall-expo.png",
        heading: "Conférences",
        body: "724 events vous propose d’organiser votre évènement, quelle que soit sa taille, en s’adaptant à votre demande et à vos demandes. En tant que spécialistes de l’évènementiel, nous saurons trouver le lieu parfait ainsi que des solutions inédites pour capter votre audience et faire de cet évènement un succès",
    },
    ServiceCard {
        image_src: "/images/sophia-sideri-LFXMtUuAKK8-unsplash1.png",
        heading: "Experience digitale",
        body: "Notre agence experte en contenus immersifs offre des services de conseil aux entreprises, pour l’utilisation de la réalité virtuelle, de la réalité augmentée et de la réalité mixte de l’animation événementielle, à la veille technologique jusqu’au développement de module de formation innovant",
    },
];

const TEAM: [PeopleCard; 6] = [
    PeopleCard {
        image_src: "/images/stephanie-liverani-Zz5LQe-VSMY-unsplash.png",
        name: "Samira",
        position: "CEO",
    },
    PeopleCard {
        image_src: "/images/linkedin-sales-solutions-pAtA8xe_iVM-unsplash.png",
        name: "Jean-baptiste",
        position: "Directeur marketing",
    },
    PeopleCard {
        image_src: "/images/christina-wocintechchat-com-SJvDxw0azqw-unsplash.png",
        name: "Alice",
        position: "CXO",
    },
    PeopleCard {
        image_src: "/images/jonas-kakaroto-KIPqvvTOC1s-unsplash.png",
        name: "Luís",
        position: "Animateur",
    },
    PeopleCard {
        image_src: "/images/amy-hirschi-b3AYk8HKCl0-unsplash1.png",
        name: "Christine",
        position: "VP animation",
    },
    PeopleCard {
        image_src: "/images/christina-wocintechchat-com-0Zx1bDv5BNY-unsplash.png",
        name: "Isabelle",
        position: "VP communication",
    },
];

const CONTACT_SUCCESS: SuccessMessage = SuccessMessage {
    title: "Message envoyé !",
    body: "Merci pour votre message nous tâcherons de vous répondre dans les plus brefs délais.",
};

const AGENCY_DESCRIPTION: &str = "Une agence événementielle propose des prestations de service spécialisées dans la conception et l'organisation de divers événements tels que des événements festifs, des manifestations sportives et culturelles, des événements professionnels.";

impl EventCard {
    /// `None` when the record's date does not parse.
    pub fn from_record(event: &EventRecord) -> Option<Self> {
        let date = parse_event_date(&event.date)?;
        Some(Self {
            id: event.id.clone(),
            image_src: event.cover.clone(),
            title: event.display_title(),
            date,
            small: true,
            label: LATEST_LABEL,
        })
    }
}

/// The footer card for the most recent event. Invalid data hides the panel.
pub fn latest_card(snapshot: &DataSnapshot) -> Option<EventCard> {
    match select_latest(snapshot.events()) {
        Ok(latest) => latest.and_then(EventCard::from_record),
        Err(err) => {
            log::warn!("hiding latest event panel: {err}");
            None
        }
    }
}

pub fn compose(snapshot: &DataSnapshot, config: &SiteConfig) -> HomePage {
    HomePage {
        services: SERVICES.to_vec(),
        team: TEAM.to_vec(),
        event_count: snapshot.events().map_or(0, <[_]>::len),
        latest: latest_card(snapshot),
        contact: ContactBlock {
            agency_name: config.agency_name.clone(),
            address: config.address.clone(),
            phone: config.phone.clone(),
            email: config.email.clone(),
            socials: config.socials.clone(),
        },
        contact_success: CONTACT_SUCCESS,
        description: AGENCY_DESCRIPTION,
    }
}
