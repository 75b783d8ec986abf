use crate::core::composer::PageRoute;
use crate::domain::model::{Language, Theme};
use crate::render::Renderer;
use maud::{html, Markup, DOCTYPE};

pub const PREFERENCES_PATH: &str = "/preferences";

pub fn page_shell(r: &Renderer<'_>, route: PageRoute, body: Markup) -> Markup {
    let theme_class = r.preferences().theme.map(Theme::css_class);

    html! {
        (DOCTYPE)
        html lang=(r.language().code()) class=[theme_class] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (r.text(route.title_key())) " | " (r.text("site-name")) }
                link rel="stylesheet" href="/static/site.css";
            }
            body {
                (header(r, route))
                main { (body) }
                (footer(r))
            }
        }
    }
}

fn header(r: &Renderer<'_>, current: PageRoute) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (r.text("site-name")) }
            nav {
                ul {
                    @for route in PageRoute::ALL {
                        li {
                            a href=(route.path())
                                aria-current=[(route == current).then_some("page")] {
                                (r.text(route.title_key()))
                            }
                        }
                    }
                }
            }
            (preferences_form(r, current.path()))
        }
    }
}

fn preferences_form(r: &Renderer<'_>, redirect_to: &str) -> Markup {
    let theme = r.preferences().theme;

    html! {
        form.preferences method="post" action=(PREFERENCES_PATH) {
            input type="hidden" name="redirectTo" value=(redirect_to);
            label {
                (r.text("ui-language"))
                select name="language" {
                    @for language in Language::ALL {
                        option value=(language.code()) selected[language == r.language()] {
                            (language.native_name())
                        }
                    }
                }
            }
            label {
                (r.text("ui-theme"))
                select name="theme" {
                    option value="system" selected[theme.is_none()] { (r.text("ui-theme-system")) }
                    option value="light" selected[theme == Some(Theme::Light)] { (r.text("ui-theme-light")) }
                    option value="dark" selected[theme == Some(Theme::Dark)] { (r.text("ui-theme-dark")) }
                }
            }
            button type="submit" { (r.text("ui-save")) }
        }
    }
}

fn footer(r: &Renderer<'_>) -> Markup {
    html! {
        footer.site-footer {
            p { (r.t("footer-tagline")) }
            p { "© " (r.year()) " " (r.text("site-name")) ". " (r.t("footer-rights")) }
        }
    }
}

/// Standalone page for requests that failed before a page could be composed.
pub fn error_page(r: &Renderer<'_>, status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(r.language().code()) {
            head {
                meta charset="utf-8";
                title { (status) " | " (r.text("site-name")) }
            }
            body {
                main.error-page {
                    h1 { (r.t("error-heading")) }
                    p.status { (status) }
                    p { (message) }
                    a href="/" { (r.t("error-home-link")) }
                }
            }
        }
    }
}
