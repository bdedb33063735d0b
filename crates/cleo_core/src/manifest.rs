//! Static news manifest and the editorial priority table that ranks it.

use crate::news::{DateParseError, NewsItem, PriorityTable};

struct ManifestEntry {
    source: &'static str,
    date: &'static str,
    title: &'static str,
    link: &'static str,
    image: Option<&'static str>,
}

const NEWS_MANIFEST: &[ManifestEntry] = &[
    ManifestEntry {
        source: "MIT AgeLab",
        date: "3/19/2024",
        title: "Five High Schoolers Awarded 2024 OMEGA Scholarships for Intergenerational Efforts",
        link: "https://agelab.mit.edu/transportation-and-livable-communities/blog/five-high-schoolers-awarded-2024-omega-scholarships-intergenerational-efforts/",
        image: Some("/images/news/mit.png"),
    },
    ManifestEntry {
        source: "7 News Miami",
        date: "12/18/2023",
        title: "South Florida Students Teach Tech to Seniors in Initiative to Bridge Generational 'Digital Divide'",
        link: "https://wsvn.com/news/local/miami-dade/south-florida-students-teach-tech-to-seniors-in-initiative-to-bridge-generational-digital-divide/",
        image: Some("/images/news/7news.png"),
    },
    ManifestEntry {
        source: "The Christian Heart",
        date: "8/9/2023",
        title: "Helping Seniors with Technology",
        link: "https://thechristianheart.com/helping-seniors-with-technology/",
        image: Some("/images/news/christianheart.png"),
    },
    ManifestEntry {
        source: "NASSP - National Honor Society",
        date: "5/18/2023",
        title: "NHS Students Provide Senior Citizens with Much-Needed Tech Support",
        link: "https://www.nassp.org/nhs-students-provide-senior-citizens-with-much-needed-tech-support/",
        image: Some("/images/news/nassp.png"),
    },
    ManifestEntry {
        source: "On the Road with Steve Hartman, CBS",
        date: "3/29/2023",
        title: "Teenagers Help Seniors Learn How to Use Technology - and Form Friendships Along the Way",
        link: "https://www.cbsnews.com/news/teenagers-volunteer-help-seniors-learn-how-to-use-technology-form-friendships-along-the-way/",
        image: Some("/images/news/cbs.png"),
    },
    ManifestEntry {
        source: "National Honor Society",
        date: "3/7/2023",
        title: "Three NHS members created CLEO to help seniors in their community with technology",
        link: "https://www.instagram.com/p/CpgjrfZpRNa/",
        image: Some("/images/news/nhs.png"),
    },
    ManifestEntry {
        source: "Sean Martinelli, NBC-2",
        date: "3/2/2023",
        title: "Teens make weekly retirement community trip to solve tech problems for seniors",
        link: "https://www.youtube.com/watch?v=0zNj4ax-GEM",
        image: Some("/images/news/nbc2.png"),
    },
    ManifestEntry {
        source: "Canterbury School",
        date: "2/9/2023",
        title: "Club Spotlight: Computer Literacy Education Outreach (CLEO)",
        link: "https://www.canterburyfortmyers.org/news-detail?pk=1270016",
        image: Some("/images/news/canterbury.png"),
    },
];

const EDITORIAL_PRIORITIES: &[(&str, u32)] = &[
    ("On the Road with Steve Hartman, CBS", 1),
    ("MIT AgeLab", 2),
    ("National Honor Society", 3),
    ("NASSP - National Honor Society", 4),
    ("Sean Martinelli, NBC-2", 5),
    ("7 News Miami", 6),
    ("The Christian Heart", 7),
    ("Canterbury School", 8),
];

/// Loads the built-in news items in manifest order.
pub fn news_manifest() -> Result<Vec<NewsItem>, DateParseError> {
    NEWS_MANIFEST
        .iter()
        .map(|entry| {
            Ok(NewsItem {
                source: entry.source.to_string(),
                date: entry.date.parse()?,
                title: entry.title.to_string(),
                link: entry.link.to_string(),
                image: entry.image.map(str::to_string),
            })
        })
        .collect()
}

pub fn editorial_priorities() -> PriorityTable {
    EDITORIAL_PRIORITIES.iter().copied().collect()
}
