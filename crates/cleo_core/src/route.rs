use url::Url;

const RESOLVE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    News,
    Contact,
    GetStarted,
    Testimonials,
    Faq,
    NotFound,
}

impl Route {
    pub const PAGES: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::News,
        Route::Contact,
        Route::GetStarted,
        Route::Testimonials,
        Route::Faq,
    ];

    /// Resolves a path or absolute URL; query, fragment and trailing slash are ignored.
    pub fn from_path(href: &str) -> Route {
        let Some(url) = Url::parse(RESOLVE_BASE)
            .ok()
            .and_then(|base| base.join(href.trim()).ok())
        else {
            return Route::NotFound;
        };
        let path = url.path().trim_end_matches('/');
        if path.is_empty() || path.eq_ignore_ascii_case("/donate") {
            return Route::Home;
        }
        Route::PAGES
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
            .unwrap_or(Route::NotFound)
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::News => "/news",
            Route::Contact => "/contact",
            Route::GetStarted => "/get-started",
            Route::Testimonials => "/testimonials",
            Route::Faq => "/faq",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::News => "CLEO in the News",
            Route::Contact => "Contact Us",
            Route::GetStarted => "Get Started",
            Route::Testimonials => "Testimonials",
            Route::Faq => "FAQ",
            Route::NotFound => "Page Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/news"), Route::News);
        assert_eq!(Route::from_path("/news/"), Route::News);
        assert_eq!(Route::from_path("/get-started?ref=nav"), Route::GetStarted);
        assert_eq!(Route::from_path("/FAQ#top"), Route::Faq);
        assert_eq!(Route::from_path("/donate"), Route::Home);
    }

    #[test]
    fn resolves_absolute_urls_by_path() {
        assert_eq!(
            Route::from_path("https://cleo.example.org/contact"),
            Route::Contact
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/blog"), Route::NotFound);
        assert_eq!(Route::from_path("/news/42"), Route::NotFound);
    }

    #[test]
    fn page_paths_round_trip() {
        for route in Route::PAGES {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
