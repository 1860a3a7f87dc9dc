//! Site route table and breadcrumb trails

use crate::catalog;
use serde::Serialize;

/// Every page the storefront serves
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Help,
    Contact,
    Journal,
    Category(String),
    Report,
    Login,
    NotFound,
}

/// One link in a breadcrumb trail; the current page has no `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

impl SiteRoute {
    /// Resolve a request path. Unknown category slugs resolve to `NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => SiteRoute::Home,
            ["about"] => SiteRoute::About,
            ["help"] => SiteRoute::Help,
            ["contact"] => SiteRoute::Contact,
            ["journal"] => SiteRoute::Journal,
            ["report"] => SiteRoute::Report,
            ["login"] => SiteRoute::Login,
            ["category", slug] if catalog::category_by_slug(slug).is_some() => {
                SiteRoute::Category((*slug).to_string())
            }
            _ => SiteRoute::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            SiteRoute::Home => "/".to_string(),
            SiteRoute::About => "/about".to_string(),
            SiteRoute::Help => "/help".to_string(),
            SiteRoute::Contact => "/contact".to_string(),
            SiteRoute::Journal => "/journal".to_string(),
            SiteRoute::Category(slug) => format!("/category/{slug}"),
            SiteRoute::Report => "/report".to_string(),
            SiteRoute::Login => "/login".to_string(),
            SiteRoute::NotFound => "/404".to_string(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            SiteRoute::Home => "Home".to_string(),
            SiteRoute::About => "About us".to_string(),
            SiteRoute::Help => "Help center".to_string(),
            SiteRoute::Contact => "Contact us".to_string(),
            SiteRoute::Journal => "Journal".to_string(),
            SiteRoute::Category(slug) => catalog::category_by_slug(slug)
                .map(|category| category.name.to_string())
                .unwrap_or_else(|| slug.clone()),
            SiteRoute::Report => "Report content".to_string(),
            SiteRoute::Login => "Sign in".to_string(),
            SiteRoute::NotFound => "Page not found".to_string(),
        }
    }

    /// Document title shown in the browser tab
    pub fn document_title(&self) -> String {
        match self {
            SiteRoute::Home => "ISmart | Certified refurbished tech".to_string(),
            other => format!("{} | ISmart", other.title()),
        }
    }

    /// Home › [section ›] page. The home page has no trail.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let home = Breadcrumb::link("Home", "/");
        match self {
            SiteRoute::Home => Vec::new(),
            SiteRoute::Category(_) => vec![
                home,
                Breadcrumb::link("Shop", "/#categories"),
                Breadcrumb::current(self.title()),
            ],
            SiteRoute::Report => vec![
                home,
                Breadcrumb::link("Help center", "/help"),
                Breadcrumb::current(self.title()),
            ],
            other => vec![home, Breadcrumb::current(other.title())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(SiteRoute::parse("/"), SiteRoute::Home);
        assert_eq!(SiteRoute::parse(""), SiteRoute::Home);
        assert_eq!(SiteRoute::parse("/help/"), SiteRoute::Help);
        assert_eq!(SiteRoute::parse("/journal?tag=Guides"), SiteRoute::Journal);
        assert_eq!(
            SiteRoute::parse("/category/laptops"),
            SiteRoute::Category("laptops".into())
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(SiteRoute::parse("/category/toasters"), SiteRoute::NotFound);
        assert_eq!(SiteRoute::parse("/checkout"), SiteRoute::NotFound);
        assert_eq!(SiteRoute::parse("/about/team"), SiteRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            SiteRoute::Home,
            SiteRoute::About,
            SiteRoute::Help,
            SiteRoute::Contact,
            SiteRoute::Journal,
            SiteRoute::Category("tablets".into()),
            SiteRoute::Report,
            SiteRoute::Login,
        ] {
            assert_eq!(SiteRoute::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_category_breadcrumbs() {
        let trail = SiteRoute::Category("smartwatches".into()).breadcrumbs();
        let labels: Vec<&str> = trail.iter().map(|crumb| crumb.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Shop", "Smartwatches"]);
        assert_eq!(trail.last().and_then(|crumb| crumb.href.as_deref()), None);
        assert_eq!(trail[0].href.as_deref(), Some("/"));
    }

    #[test]
    fn test_home_has_no_trail() {
        assert!(SiteRoute::Home.breadcrumbs().is_empty());
        assert_eq!(SiteRoute::Report.breadcrumbs().len(), 3);
        assert_eq!(SiteRoute::About.breadcrumbs().len(), 2);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(SiteRoute::Help.document_title(), "Help center | ISmart");
    }
}
