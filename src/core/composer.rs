//! Page composition.
//!
//! Each route maps to a fixed, ordered list of sections. Composition is pure:
//! the same request always produces the same page.

use crate::core::cursor::{CarouselCursor, OptionSelector, SelectOption};
use crate::core::dealer_locator::{DealerLocatorState, DEALER_LOCATOR_PATH};
use crate::domain::model::{CarouselItem, DealerLocatorOutcome, MediaReference, UserPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    Home,
    Inverters,
    Batteries,
    DealerLocator,
    AboutUs,
    ContactUs,
}

impl PageRoute {
    pub const ALL: [PageRoute; 6] = [
        PageRoute::Home,
        PageRoute::Inverters,
        PageRoute::Batteries,
        PageRoute::DealerLocator,
        PageRoute::AboutUs,
        PageRoute::ContactUs,
    ];

    pub fn path(self) -> &'static str {
        match self {
            PageRoute::Home => "/",
            PageRoute::Inverters => "/inverters",
            PageRoute::Batteries => "/batteries",
            PageRoute::DealerLocator => DEALER_LOCATOR_PATH,
            PageRoute::AboutUs => "/about-us",
            PageRoute::ContactUs => "/contact-us",
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            PageRoute::Home => "nav-home",
            PageRoute::Inverters => "nav-inverters",
            PageRoute::Batteries => "nav-batteries",
            PageRoute::DealerLocator => "nav-dealer-locator",
            PageRoute::AboutUs => "nav-about",
            PageRoute::ContactUs => "nav-contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label_key: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub category: String,
    pub media: MediaReference,
    pub name_key: String,
    pub description_key: String,
    pub price: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question_key: String,
    pub answer_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Hero {
        title_key: String,
        subtitle_key: String,
        media: MediaReference,
        cta: Option<Link>,
    },
    Carousel {
        id: String,
        heading_key: String,
        items: Vec<CarouselItem>,
        cursor: CarouselCursor,
        base_path: String,
    },
    OptionTabs {
        heading_key: String,
        selector: OptionSelector,
        base_path: String,
    },
    ProductCards {
        heading_key: String,
        cards: Vec<ProductCard>,
    },
    Faq {
        heading_key: String,
        items: Vec<FaqItem>,
    },
    DealerLocatorForm {
        heading_key: String,
        submitted_location: Option<String>,
    },
    DealerResults {
        outcome: DealerLocatorOutcome,
    },
    ContactCta {
        heading_key: String,
        body_key: String,
        phone: String,
        email: String,
    },
    TextBlock {
        heading_key: String,
        body_key: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub route: PageRoute,
    pub preferences: UserPreferences,
    pub sections: Vec<Section>,
}

/// Everything a route needs besides the route itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub preferences: UserPreferences,
    pub slide: Option<usize>,
    pub category: Option<String>,
    pub dealer_state: DealerLocatorState,
    pub submitted_location: Option<String>,
}

impl PageRequest {
    pub fn new(preferences: UserPreferences) -> Self {
        Self {
            preferences,
            slide: None,
            category: None,
            dealer_state: DealerLocatorState::Pending,
            submitted_location: None,
        }
    }
}

pub fn compose(route: PageRoute, request: &PageRequest) -> Page {
    let sections = match route {
        PageRoute::Home => home_sections(request),
        PageRoute::Inverters => product_sections(ProductLine::Inverters, request),
        PageRoute::Batteries => product_sections(ProductLine::Batteries, request),
        PageRoute::DealerLocator => dealer_locator_sections(request),
        PageRoute::AboutUs => about_sections(),
        PageRoute::ContactUs => contact_sections(),
    };

    tracing::debug!(
        path = route.path(),
        sections = sections.len(),
        language = %request.preferences.language,
        "Composed page"
    );

    Page {
        route,
        preferences: request.preferences,
        sections,
    }
}

fn carousel_item(path: &str, title_key: &str, body_key: &str) -> CarouselItem {
    CarouselItem {
        media: MediaReference::new(path, title_key),
        title_key: title_key.to_string(),
        body_key: body_key.to_string(),
    }
}

fn carousel(
    id: &str,
    heading_key: &str,
    items: Vec<CarouselItem>,
    slide: Option<usize>,
    base_path: &str,
) -> Option<Section> {
    let cursor = CarouselCursor::new(items.len(), slide.unwrap_or(0))?;
    Some(Section::Carousel {
        id: id.to_string(),
        heading_key: heading_key.to_string(),
        items,
        cursor,
        base_path: base_path.to_string(),
    })
}

fn faq(items: &[(&str, &str)]) -> Section {
    Section::Faq {
        heading_key: "faq-heading".to_string(),
        items: items
            .iter()
            .map(|(q, a)| FaqItem {
                question_key: q.to_string(),
                answer_key: a.to_string(),
            })
            .collect(),
    }
}

fn contact_cta() -> Section {
    Section::ContactCta {
        heading_key: "contact-cta-heading".to_string(),
        body_key: "contact-cta-body".to_string(),
        phone: "1800-000-0000".to_string(),
        email: "care@example.com".to_string(),
    }
}

fn home_sections(request: &PageRequest) -> Vec<Section> {
    let mut sections = vec![Section::Hero {
        title_key: "home-hero-title".to_string(),
        subtitle_key: "home-hero-subtitle".to_string(),
        media: MediaReference::new("home/hero.jpg", "home-hero-title"),
        cta: Some(Link {
            label_key: "home-hero-cta".to_string(),
            href: PageRoute::Inverters.path().to_string(),
        }),
    }];

    let slides = vec![
        carousel_item("home/slide-backup.jpg", "home-slide-1-title", "home-slide-1-body"),
        carousel_item("home/slide-solar.jpg", "home-slide-2-title", "home-slide-2-body"),
        carousel_item("home/slide-warranty.jpg", "home-slide-3-title", "home-slide-3-body"),
    ];
    sections.extend(carousel(
        "home-highlights",
        "home-carousel-heading",
        slides,
        request.slide,
        PageRoute::Home.path(),
    ));

    sections.push(Section::ProductCards {
        heading_key: "home-bestsellers-heading".to_string(),
        cards: inverter_catalog()
            .into_iter()
            .take(2)
            .chain(battery_catalog().into_iter().take(1))
            .collect(),
    });
    sections.push(faq(&[
        ("faq-home-1-q", "faq-home-1-a"),
        ("faq-home-2-q", "faq-home-2-a"),
    ]));
    sections.push(contact_cta());
    sections
}

/// Product pages share one layout; each line brings its own catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLine {
    Inverters,
    Batteries,
}

impl ProductLine {
    pub fn route(self) -> PageRoute {
        match self {
            ProductLine::Inverters => PageRoute::Inverters,
            ProductLine::Batteries => PageRoute::Batteries,
        }
    }

    fn catalog(self) -> Catalog {
        match self {
            ProductLine::Batteries => Catalog {
                hero_title_key: "bat-hero-title",
                hero_subtitle_key: "bat-hero-subtitle",
                hero_media: "batteries/hero.jpg",
                tabs_heading_key: "bat-tabs-heading",
                options: vec![
                    SelectOption::new("inverter-battery", "bat-cat-inverter"),
                    SelectOption::new("solar-battery", "bat-cat-solar"),
                    SelectOption::new("e-rickshaw", "bat-cat-erick"),
                ],
                cards_heading_key: "bat-cards-heading",
                cards: battery_catalog(),
                faq: &[("faq-bat-1-q", "faq-bat-1-a"), ("faq-bat-2-q", "faq-bat-2-a")],
            },
            ProductLine::Inverters => Catalog {
                hero_title_key: "inv-hero-title",
                hero_subtitle_key: "inv-hero-subtitle",
                hero_media: "inverters/hero.jpg",
                tabs_heading_key: "inv-tabs-heading",
                options: vec![
                    SelectOption::new("home", "inv-cat-home"),
                    SelectOption::new("solar", "inv-cat-solar"),
                    SelectOption::new("high-capacity", "inv-cat-hkva"),
                ],
                cards_heading_key: "inv-cards-heading",
                cards: inverter_catalog(),
                faq: &[("faq-inv-1-q", "faq-inv-1-a"), ("faq-inv-2-q", "faq-inv-2-a")],
            },
        }
    }
}

struct Catalog {
    hero_title_key: &'static str,
    hero_subtitle_key: &'static str,
    hero_media: &'static str,
    tabs_heading_key: &'static str,
    options: Vec<SelectOption>,
    cards_heading_key: &'static str,
    cards: Vec<ProductCard>,
    faq: &'static [(&'static str, &'static str)],
}

fn card(
    category: &str,
    media: &str,
    name_key: &str,
    description_key: &str,
    price: u32,
) -> ProductCard {
    ProductCard {
        category: category.to_string(),
        media: MediaReference::new(media, name_key),
        name_key: name_key.to_string(),
        description_key: description_key.to_string(),
        price: Some(price),
    }
}

fn inverter_catalog() -> Vec<ProductCard> {
    vec![
        card("home", "inverters/sine-900.png", "inv-sine-900-name", "inv-sine-900-desc", 6_490),
        card("home", "inverters/sine-1500.png", "inv-sine-1500-name", "inv-sine-1500-desc", 9_290),
        card("solar", "inverters/solar-2kva.png", "inv-solar-2k-name", "inv-solar-2k-desc", 18_990),
        card("high-capacity", "inverters/hkva-5.png", "inv-hkva-5-name", "inv-hkva-5-desc", 42_500),
    ]
}

fn battery_catalog() -> Vec<ProductCard> {
    vec![
        card("inverter-battery", "batteries/tall-tubular-150.png", "bat-tt-150-name", "bat-tt-150-desc", 13_990),
        card("inverter-battery", "batteries/tall-tubular-200.png", "bat-tt-200-name", "bat-tt-200-desc", 17_490),
        card("solar-battery", "batteries/solar-150.png", "bat-solar-150-name", "bat-solar-150-desc", 15_290),
        card("e-rickshaw", "batteries/erick-120.png", "bat-erick-120-name", "bat-erick-120-desc", 11_800),
    ]
}

fn product_sections(line: ProductLine, request: &PageRequest) -> Vec<Section> {
    let catalog = line.catalog();
    let mut sections = vec![Section::Hero {
        title_key: catalog.hero_title_key.to_string(),
        subtitle_key: catalog.hero_subtitle_key.to_string(),
        media: MediaReference::new(catalog.hero_media, catalog.hero_title_key),
        cta: Some(Link {
            label_key: "cta-find-dealer".to_string(),
            href: DEALER_LOCATOR_PATH.to_string(),
        }),
    }];

    if let Some(selector) = OptionSelector::new(catalog.options) {
        let selector = selector.with_selected(request.category.as_deref());
        let selected = selector.selected().id.clone();

        sections.push(Section::OptionTabs {
            heading_key: catalog.tabs_heading_key.to_string(),
            selector,
            base_path: line.route().path().to_string(),
        });
        sections.push(Section::ProductCards {
            heading_key: catalog.cards_heading_key.to_string(),
            cards: catalog
                .cards
                .into_iter()
                .filter(|c| c.category == selected)
                .collect(),
        });
    }

    sections.push(faq(catalog.faq));
    sections.push(contact_cta());
    sections
}

fn dealer_locator_sections(request: &PageRequest) -> Vec<Section> {
    let mut sections = vec![
        Section::Hero {
            title_key: "dl-hero-title".to_string(),
            subtitle_key: "dl-hero-subtitle".to_string(),
            media: MediaReference::new("dealers/hero.jpg", "dl-hero-title"),
            cta: None,
        },
        Section::DealerLocatorForm {
            heading_key: "dl-form-heading".to_string(),
            submitted_location: request.submitted_location.clone(),
        },
    ];

    if let DealerLocatorState::Resolved(outcome) = &request.dealer_state {
        sections.push(Section::DealerResults {
            outcome: outcome.clone(),
        });
    }

    sections.push(faq(&[("faq-dl-1-q", "faq-dl-1-a")]));
    sections
}

fn about_sections() -> Vec<Section> {
    vec![
        Section::Hero {
            title_key: "about-hero-title".to_string(),
            subtitle_key: "about-hero-subtitle".to_string(),
            media: MediaReference::new("about/hero.jpg", "about-hero-title"),
            cta: None,
        },
        Section::TextBlock {
            heading_key: "about-story-heading".to_string(),
            body_key: "about-story-body".to_string(),
        },
        Section::TextBlock {
            heading_key: "about-quality-heading".to_string(),
            body_key: "about-quality-body".to_string(),
        },
        contact_cta(),
    ]
}

fn contact_sections() -> Vec<Section> {
    vec![
        Section::Hero {
            title_key: "contact-hero-title".to_string(),
            subtitle_key: "contact-hero-subtitle".to_string(),
            media: MediaReference::new("contact/hero.jpg", "contact-hero-title"),
            cta: Some(Link {
                label_key: "cta-find-dealer".to_string(),
                href: DEALER_LOCATOR_PATH.to_string(),
            }),
        },
        contact_cta(),
        faq(&[("faq-contact-1-q", "faq-contact-1-a")]),
    ]
}

/// Every content key a composed page may reference, for completeness checks.
pub fn referenced_keys(page: &Page) -> Vec<String> {
    let mut keys = vec![page.route.title_key().to_string()];
    for section in &page.sections {
        match section {
            Section::Hero {
                title_key,
                subtitle_key,
                media,
                cta,
            } => {
                keys.extend([
                    title_key.clone(),
                    subtitle_key.clone(),
                    media.alt_key.clone(),
                ]);
                if let Some(link) = cta {
                    keys.push(link.label_key.clone());
                }
            }
            Section::Carousel {
                heading_key, items, ..
            } => {
                keys.push(heading_key.clone());
                for item in items {
                    keys.extend([
                        item.title_key.clone(),
                        item.body_key.clone(),
                        item.media.alt_key.clone(),
                    ]);
                }
            }
            Section::OptionTabs {
                heading_key,
                selector,
                ..
            } => {
                keys.push(heading_key.clone());
                keys.extend(selector.options().iter().map(|o| o.label_key.clone()));
            }
            Section::ProductCards { heading_key, cards } => {
                keys.push(heading_key.clone());
                for card in cards {
                    keys.extend([card.name_key.clone(), card.description_key.clone()]);
                }
            }
            Section::Faq { heading_key, items } => {
                keys.push(heading_key.clone());
                for item in items {
                    keys.extend([item.question_key.clone(), item.answer_key.clone()]);
                }
            }
            Section::DealerLocatorForm { heading_key, .. } => keys.push(heading_key.clone()),
            Section::DealerResults { .. } => {}
            Section::ContactCta {
                heading_key,
                body_key,
                ..
            }
            | Section::TextBlock {
                heading_key,
                body_key,
            } => {
                keys.extend([heading_key.clone(), body_key.clone()]);
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ContentStore;

    fn request() -> PageRequest {
        PageRequest::new(UserPreferences::default())
    }

    #[test]
    fn test_home_section_order() {
        let page = compose(PageRoute::Home, &request());
        let kinds: Vec<&str> = page
            .sections
            .iter()
            .map(|s| match s {
                Section::Hero { .. } => "hero",
                Section::Carousel { .. } => "carousel",
                Section::ProductCards { .. } => "cards",
                Section::Faq { .. } => "faq",
                Section::ContactCta { .. } => "contact",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["hero", "carousel", "cards", "faq", "contact"]);
    }

    #[test]
    fn test_slide_query_wraps_into_range() {
        let mut req = request();
        req.slide = Some(4);
        let page = compose(PageRoute::Home, &req);
        let cursor = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Carousel { cursor, .. } => Some(*cursor),
                _ => None,
            })
            .unwrap();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_category_filters_cards() {
        let mut req = request();
        req.category = Some("solar".to_string());
        let page = compose(PageRoute::Inverters, &req);

        let cards = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::ProductCards { cards, .. } => Some(cards.clone()),
                _ => None,
            })
            .unwrap();
        assert!(!cards.is_empty());
        assert!(cards.iter().all(|c| c.category == "solar"));
    }

    #[test]
    fn test_unknown_category_keeps_default_selection() {
        let mut req = request();
        req.category = Some("car".to_string());
        let page = compose(PageRoute::Batteries, &req);
        let selector = page
            .sections
            .iter()
            .find_map(|s| match s {
                Section::OptionTabs { selector, .. } => Some(selector.clone()),
                _ => None,
            })
            .unwrap();
        assert!(selector.is_selected("inverter-battery"));
    }

    #[test]
    fn test_product_lines_keep_their_own_catalogs() {
        for (line, prefix) in [(ProductLine::Inverters, "inv-"), (ProductLine::Batteries, "bat-")] {
            let page = compose(line.route(), &request());
            let hero_key = page
                .sections
                .iter()
                .find_map(|s| match s {
                    Section::Hero { title_key, .. } => Some(title_key.clone()),
                    _ => None,
                })
                .unwrap();
            assert!(hero_key.starts_with(prefix), "{:?} got {}", line, hero_key);
            assert!(line
                .catalog()
                .cards
                .iter()
                .all(|c| c.name_key.starts_with(prefix)));
        }
    }

    #[test]
    fn test_dealer_results_only_after_submission() {
        let pending = compose(PageRoute::DealerLocator, &request());
        assert!(!pending
            .sections
            .iter()
            .any(|s| matches!(s, Section::DealerResults { .. })));

        let mut req = request();
        req.dealer_state = DealerLocatorState::Resolved(DealerLocatorOutcome {
            dealer_list: None,
            error: "x".to_string(),
            path: DEALER_LOCATOR_PATH.to_string(),
        });
        let resolved = compose(PageRoute::DealerLocator, &req);
        assert!(resolved
            .sections
            .iter()
            .any(|s| matches!(s, Section::DealerResults { .. })));
    }

    #[test]
    fn test_every_page_key_is_in_embedded_content() {
        let store = ContentStore::embedded().unwrap();
        for route in PageRoute::ALL {
            for category in [
                None,
                Some("solar"),
                Some("high-capacity"),
                Some("solar-battery"),
                Some("e-rickshaw"),
            ] {
                let mut req = request();
                req.category = category.map(str::to_string);
                let page = compose(route, &req);
                for key in referenced_keys(&page) {
                    assert!(
                        store.contains_key(&key),
                        "missing content key '{}' on {:?}",
                        key,
                        route
                    );
                }
            }
        }
    }
}
