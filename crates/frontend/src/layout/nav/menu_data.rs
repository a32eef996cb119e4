//! Static navigation configuration.
//!
//! Defined once as a constant table; the navbar, the overlay and the routing
//! all read from here instead of re-deriving labels or paths.

pub struct MenuGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub struct Submenu {
    pub title: &'static str,
    pub groups: &'static [MenuGroup],
}

pub struct AboutContent {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// One top-level navigation entry. At most one of `submenu` / `about` is
/// set; entries with neither act as plain links.
pub struct MenuEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub submenu: Option<Submenu>,
    pub about: Option<AboutContent>,
}

impl MenuEntry {
    pub fn is_expandable(&self) -> bool {
        self.submenu.is_some() || self.about.is_some()
    }

    /// Leaf labels flattened across groups, in declaration order.
    pub fn all_items(&self) -> Vec<&'static str> {
        self.submenu
            .as_ref()
            .map(|s| s.groups.iter().flat_map(|g| g.items.iter().copied()).collect())
            .unwrap_or_default()
    }
}

pub fn get_menu_entries() -> &'static [MenuEntry] {
    MENU
}

pub fn find_entry(id: &str) -> Option<&'static MenuEntry> {
    MENU.iter().find(|e| e.id == id)
}

/// First entry with a disclosure panel; preselected when the overlay opens
/// in pointer mode.
pub fn first_expandable_entry() -> Option<&'static MenuEntry> {
    MENU.iter().find(|e| e.is_expandable())
}

/// URL slug for a menu leaf label. Unlike the content slugifier this one
/// spells out ampersands, so "Aerospace & Defense" links as
/// `aerospace-and-defense` rather than `aerospace-defense`.
pub fn nav_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.to_lowercase().replace('&', "and").chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

pub fn base_path(menu_id: &str) -> &'static str {
    match menu_id {
        "industries" => "/industries",
        "capabilities" => "/capabilities",
        "techstack" => "/tech",
        "insights" => "/insights",
        "careers" => "/careers",
        _ => "",
    }
}

pub fn item_href(menu_id: &str, item: &str) -> String {
    format!("{}/{}", base_path(menu_id), nav_slug(item))
}

/// Display title for an industry slug: the menu label when one matches,
/// otherwise the slug title-cased.
pub fn industry_title(slug: &str) -> String {
    if let Some(entry) = find_entry("industries") {
        for item in entry.all_items() {
            if nav_slug(item) == slug {
                return item.to_string();
            }
        }
    }
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

static MENU: &[MenuEntry] = &[
    MenuEntry {
        id: "industries",
        name: "Industries",
        submenu: Some(Submenu {
            title: "Industries",
            groups: &[
                MenuGroup {
                    name: "Column 1",
                    items: &[
                        "Aerospace & Defense",
                        "Agriculture",
                        "Automotive & Assembly",
                        "Chemicals",
                        "Consumer Packaged Goods",
                        "Education",
                        "Electric Power & Natural Gas",
                    ],
                },
                MenuGroup {
                    name: "Column 2",
                    items: &[
                        "Energy and Materials",
                        "Engineering & Construction",
                        "Financial Services",
                        "Healthcare",
                        "Industrials & Electronics",
                        "Infrastructure",
                        "Life Sciences",
                    ],
                },
                MenuGroup {
                    name: "Column 3",
                    items: &[
                        "Logistics",
                        "Metals & Mining",
                        "Oil & Gas",
                        "Packaging & Paper",
                        "Private Capital",
                        "Public Sector",
                        "Real Estate",
                    ],
                },
                MenuGroup {
                    name: "Column 4",
                    items: &[
                        "Retail",
                        "Semiconductors",
                        "Social Sector",
                        "Technology & Telecommunications",
                        "Travel",
                    ],
                },
            ],
        }),
        about: None,
    },
    MenuEntry {
        id: "capabilities",
        name: "Capabilities",
        submenu: Some(Submenu {
            title: "Capabilities",
            groups: &[
                MenuGroup {
                    name: "Column 1",
                    items: &[
                        "Data Engineering",
                        "Business Intelligence",
                        "Predictive Analytics",
                        "Machine Learning",
                        "Natural Language Processing",
                    ],
                },
                MenuGroup {
                    name: "Column 2",
                    items: &[
                        "Computer Vision",
                        "Research - Math",
                        "Research - CS",
                        "Research - Finance/Eco",
                        "Data Governance",
                    ],
                },
                MenuGroup {
                    name: "Column 3",
                    items: &[
                        "Digital Transformation",
                        "Technology Consulting",
                        "Operations Strategy",
                        "Process Automation",
                    ],
                },
            ],
        }),
        about: None,
    },
    MenuEntry {
        id: "techstack",
        name: "Tech & AI",
        submenu: Some(Submenu {
            title: "Tech & AI",
            groups: &[
                MenuGroup {
                    name: "Column 1",
                    items: &[
                        "Cybersecurity",
                        "Data Governance",
                        "Cloud Architecture",
                        "Software Engineering",
                        "DevOps & MLOps",
                    ],
                },
                MenuGroup {
                    name: "Column 2",
                    items: &[
                        "AI Vision",
                        "AI Text & NLP",
                        "AI Speech",
                        "Agentic AI",
                        "LLM Fine-tuning",
                    ],
                },
                MenuGroup {
                    name: "Column 3",
                    items: &[
                        "FastAPI / Docker",
                        "Cloud Infrastructure",
                        "Tableau / Power BI",
                        "Data Pipelines",
                    ],
                },
            ],
        }),
        about: None,
    },
    MenuEntry {
        id: "insights",
        name: "Our Insights",
        submenu: Some(Submenu {
            title: "Our Insights",
            groups: &[
                MenuGroup {
                    name: "Column 1",
                    items: &[
                        "Featured Insights",
                        "Case Studies",
                        "Industry Reports",
                        "Research Papers",
                    ],
                },
                MenuGroup {
                    name: "Column 2",
                    items: &["Whitepapers", "Webinars", "Podcasts", "Videos"],
                },
                MenuGroup {
                    name: "Column 3",
                    items: &["News & Updates", "Expert Opinions", "Trends & Analysis"],
                },
            ],
        }),
        about: None,
    },
    MenuEntry {
        id: "careers",
        name: "Careers",
        submenu: Some(Submenu {
            title: "Careers",
            groups: &[
                MenuGroup {
                    name: "Column 1",
                    items: &[
                        "Open Positions",
                        "Internships",
                        "Graduate Programs",
                        "Experienced Professionals",
                    ],
                },
                MenuGroup {
                    name: "Column 2",
                    items: &[
                        "Life at Datamills",
                        "Our Culture",
                        "Benefits & Perks",
                        "Learning & Development",
                    ],
                },
                MenuGroup {
                    name: "Column 3",
                    items: &["Diversity & Inclusion", "Our Locations", "FAQ"],
                },
            ],
        }),
        about: None,
    },
    MenuEntry {
        id: "about",
        name: "About Us",
        submenu: None,
        about: Some(AboutContent {
            title: "About Data-Mills",
            paragraphs: &[
                "In today's fast-moving world, data is your most valuable asset; but only if you know how to use it. That is where Data-Mills comes in. We are a team of data experts, AI specialists, and researchers who help organizations solve real-world problems using the power of data and AI. From helping hospitals streamline paperwork and enhancing brand reach through data-driven social media marketing to making cities safer with smart surveillance, we make data work for people.",
                "Our mission is simple: help organizations unlock the full power of data and artificial intelligence to solve real challenges, drive innovation, and make better decisions. Whether it's automating healthcare processes, improving financial insights, or securing city-wide surveillance, Data-Mills delivers solutions that are impactful, intelligent, and built for the future.",
            ],
        }),
    },
    MenuEntry {
        id: "blog",
        name: "Datamills Blog",
        submenu: None,
        about: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ampersands_spell_out_in_nav_slugs() {
        assert_eq!(nav_slug("Aerospace & Defense"), "aerospace-and-defense");
        assert_eq!(nav_slug("Oil & Gas"), "oil-and-gas");
    }

    #[test]
    fn nav_slug_collapses_punctuation_runs() {
        assert_eq!(nav_slug("Research - Finance/Eco"), "research-finance-eco");
        assert_eq!(nav_slug("FastAPI / Docker"), "fastapi-docker");
    }

    #[test]
    fn item_href_uses_the_menu_base_path() {
        assert_eq!(
            item_href("industries", "Financial Services"),
            "/industries/financial-services"
        );
        assert_eq!(item_href("techstack", "AI Vision"), "/tech/ai-vision");
    }

    #[test]
    fn industry_title_prefers_the_menu_label() {
        assert_eq!(industry_title("oil-and-gas"), "Oil & Gas");
        assert_eq!(industry_title("healthcare"), "Healthcare");
        // Unknown slugs fall back to title casing
        assert_eq!(industry_title("space-mining"), "Space Mining");
    }

    #[test]
    fn about_entry_has_no_submenu() {
        let about = find_entry("about").unwrap();
        assert!(about.submenu.is_none());
        assert!(about.about.is_some());
        assert!(about.is_expandable());
        assert!(about.all_items().is_empty());
    }

    #[test]
    fn first_expandable_entry_is_industries() {
        assert_eq!(first_expandable_entry().unwrap().id, "industries");
    }
}
