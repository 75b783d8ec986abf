use crate::core::composer::{FaqItem, Link, ProductCard, Section};
use crate::core::cursor::{CarouselCursor, OptionSelector};
use crate::core::dealer_locator::DEALER_LOCATOR_PATH;
use crate::domain::model::{CarouselItem, Dealer, DealerLocatorOutcome, MediaReference};
use crate::render::Renderer;
use maud::{html, Markup};

const HERO_WIDTH: u32 = 1440;
const SLIDE_WIDTH: u32 = 960;
const CARD_WIDTH: u32 = 480;

pub fn render_section(r: &Renderer<'_>, section: &Section) -> Markup {
    match section {
        Section::Hero {
            title_key,
            subtitle_key,
            media,
            cta,
        } => hero(r, title_key, subtitle_key, media, cta.as_ref()),
        Section::Carousel {
            id,
            heading_key,
            items,
            cursor,
            base_path,
        } => carousel(r, id, heading_key, items, *cursor, base_path),
        Section::OptionTabs {
            heading_key,
            selector,
            base_path,
        } => option_tabs(r, heading_key, selector, base_path),
        Section::ProductCards { heading_key, cards } => product_cards(r, heading_key, cards),
        Section::Faq { heading_key, items } => faq(r, heading_key, items),
        Section::DealerLocatorForm {
            heading_key,
            submitted_location,
        } => dealer_form(r, heading_key, submitted_location.as_deref()),
        Section::DealerResults { outcome } => dealer_results(r, outcome),
        Section::ContactCta {
            heading_key,
            body_key,
            phone,
            email,
        } => contact_cta(r, heading_key, body_key, phone, email),
        Section::TextBlock {
            heading_key,
            body_key,
        } => html! {
            section.text-block {
                h2 { (r.t(heading_key)) }
                div.body { (r.t(body_key)) }
            }
        },
    }
}

fn image(r: &Renderer<'_>, media: &MediaReference, width: u32) -> Markup {
    html! {
        img src=(r.image_url(&media.path, width)) alt=(r.text(&media.alt_key)) loading="lazy";
    }
}

fn hero(
    r: &Renderer<'_>,
    title_key: &str,
    subtitle_key: &str,
    media: &MediaReference,
    cta: Option<&Link>,
) -> Markup {
    html! {
        section.hero {
            (image(r, media, HERO_WIDTH))
            div.hero-copy {
                h1 { (r.t(title_key)) }
                p { (r.t(subtitle_key)) }
                @if let Some(link) = cta {
                    a.button href=(link.href) { (r.t(&link.label_key)) }
                }
            }
        }
    }
}

fn carousel(
    r: &Renderer<'_>,
    id: &str,
    heading_key: &str,
    items: &[CarouselItem],
    cursor: CarouselCursor,
    base_path: &str,
) -> Markup {
    let slide_href = |index: usize| format!("{}?slide={}#{}", base_path, index, id);

    html! {
        section.carousel id=(id) data-index=(cursor.index()) data-count=(cursor.len()) {
            h2 { (r.t(heading_key)) }
            ol.slides {
                @for (i, item) in items.iter().enumerate() {
                    li.slide.active[cursor.is_active(i)]
                        aria-hidden=(if cursor.is_active(i) { "false" } else { "true" }) {
                        (image(r, &item.media, SLIDE_WIDTH))
                        h3 { (r.t(&item.title_key)) }
                        p { (r.t(&item.body_key)) }
                    }
                }
            }
            nav.carousel-controls {
                a.prev href=(slide_href(cursor.prev_index())) rel="prev" { (r.text("ui-prev")) }
                span.position { (cursor.index() + 1) " / " (cursor.len()) }
                a.next href=(slide_href(cursor.next_index())) rel="next" { (r.text("ui-next")) }
            }
        }
    }
}

fn option_tabs(
    r: &Renderer<'_>,
    heading_key: &str,
    selector: &OptionSelector,
    base_path: &str,
) -> Markup {
    html! {
        section.option-tabs {
            h2 { (r.t(heading_key)) }
            ul role="tablist" {
                @for option in selector.options() {
                    @let selected = selector.is_selected(&option.id);
                    li {
                        a.selected[selected]
                            role="tab"
                            href=(format!("{}?category={}", base_path, option.id))
                            aria-selected=(if selected { "true" } else { "false" }) {
                            (r.text(&option.label_key))
                        }
                    }
                }
            }
        }
    }
}

fn product_cards(r: &Renderer<'_>, heading_key: &str, cards: &[ProductCard]) -> Markup {
    html! {
        section.product-cards {
            h2 { (r.t(heading_key)) }
            div.cards {
                @for card in cards {
                    article.card data-category=(card.category) {
                        (image(r, &card.media, CARD_WIDTH))
                        h3 { (r.t(&card.name_key)) }
                        p { (r.t(&card.description_key)) }
                        @if let Some(amount) = card.price {
                            p.price { (r.text("ui-price-from")) " " (r.price(amount)) }
                        }
                    }
                }
            }
        }
    }
}

fn faq(r: &Renderer<'_>, heading_key: &str, items: &[FaqItem]) -> Markup {
    html! {
        section.faq {
            h2 { (r.t(heading_key)) }
            @for item in items {
                details {
                    summary { (r.t(&item.question_key)) }
                    div.answer { (r.t(&item.answer_key)) }
                }
            }
        }
    }
}

fn dealer_form(r: &Renderer<'_>, heading_key: &str, submitted: Option<&str>) -> Markup {
    html! {
        section.dealer-form {
            h2 { (r.t(heading_key)) }
            form method="post" action=(DEALER_LOCATOR_PATH) {
                label for="dealerLocation" { (r.text("dl-form-label")) }
                input id="dealerLocation"
                    type="text"
                    name="dealerLocation"
                    placeholder=(r.text("dl-form-placeholder"))
                    value=[submitted];
                button type="submit" { (r.text("dl-form-submit")) }
            }
        }
    }
}

fn dealer_results(r: &Renderer<'_>, outcome: &DealerLocatorOutcome) -> Markup {
    html! {
        section.dealer-results {
            @if !outcome.error.is_empty() {
                p.error role="alert" { (outcome.error) }
            }
            @if let Some(dealers) = &outcome.dealer_list {
                h2 { (r.t("dl-results-heading")) }
                ul {
                    @for dealer in dealers {
                        (dealer_entry(dealer))
                    }
                }
            }
        }
    }
}

fn dealer_entry(dealer: &Dealer) -> Markup {
    let dial: String = dealer
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    html! {
        li.dealer {
            h3 { (dealer.name) }
            p.address {
                (dealer.address) ", " (dealer.city) ", " (dealer.state) " " (dealer.pincode)
            }
            a href=(format!("tel:{}", dial)) { (dealer.phone) }
            @if let (Some(lat), Some(lng)) = (dealer.latitude, dealer.longitude) {
                " "
                a.map href=(format!("https://maps.google.com/?q={},{}", lat, lng)) { "Map" }
            }
        }
    }
}

fn contact_cta(
    r: &Renderer<'_>,
    heading_key: &str,
    body_key: &str,
    phone: &str,
    email: &str,
) -> Markup {
    html! {
        section.contact-cta {
            h2 { (r.t(heading_key)) }
            p { (r.t(body_key)) }
            a.call href=(format!("tel:{}", phone)) { (r.text("ui-call")) ": " (phone) }
            " "
            a.email href=(format!("mailto:{}", email)) { (r.text("ui-email")) ": " (email) }
        }
    }
}
