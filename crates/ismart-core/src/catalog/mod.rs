//! Static storefront catalog
//!
//! Everything here is hardcoded display data; nothing is fetched.

mod data;

pub use data::{
    ARTICLES, CATEGORIES, FAQS, HERO_SLIDES, JOURNAL_CATEGORIES, PRESS_FEATURES, PRODUCTS,
    TESTIMONIALS, VALUES,
};

use crate::filter::Categorized;
use chrono::NaiveDate;
use serde::Serialize;

/// Background of a card or banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Visual {
    Image(&'static str),
    ColorBlock(&'static str),
}

impl Visual {
    /// Inline style for a container showing this visual as its background
    pub fn background_style(&self) -> String {
        match self {
            Visual::Image(url) => format!(
                "background-image: url('{url}'); background-size: cover; background-position: center;"
            ),
            Visual::ColorBlock(color) => format!("background-color: {color};"),
        }
    }
}

/// Shared presentational contract for every card on the site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub href: Option<String>,
    pub visual: Visual,
    pub badge: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, visual: Visual) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            href: None,
            visual,
            badge: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Cosmetic grade of a refurbished device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::VeryGood => "Very good",
            Grade::Good => "Good",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub visual: Visual,
}

impl Category {
    pub fn card(&self) -> Card {
        Card::new(self.name, self.visual)
            .subtitle(self.tagline)
            .href(format!("/category/{}", self.slug))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub grade: Grade,
    pub price_cents: u32,
    pub original_price_cents: u32,
    pub rating: f32,
    pub best_seller: bool,
    pub visual: Visual,
}

impl Product {
    pub fn brand(&self) -> &str {
        self.brand
    }

    pub fn price(&self) -> String {
        format_price(self.price_cents)
    }

    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price_cents, self.original_price_cents)
    }

    pub fn card(&self) -> Card {
        let card = Card::new(self.name, self.visual).subtitle(format!(
            "{} · {} · {}",
            self.brand,
            self.grade.label(),
            self.price()
        ));
        match self.discount_percent() {
            0 => card,
            saving => card.badge(format!("-{saving}%")),
        }
    }
}

impl Categorized for Product {
    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub published: NaiveDate,
    pub read_minutes: u8,
    pub featured: bool,
    pub visual: Visual,
}

impl Article {
    pub fn card(&self) -> Card {
        Card::new(self.title, self.visual)
            .subtitle(format!(
                "{} · {} min read",
                self.published.format("%B %-d, %Y"),
                self.read_minutes
            ))
            .badge(self.category)
            .href(format!("/journal#{}", self.slug))
    }
}

impl Categorized for Article {
    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub topic: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

impl Categorized for Faq {
    fn category(&self) -> &str {
        self.topic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressFeature {
    pub outlet: &'static str,
    pub quote: &'static str,
    pub visual: Visual,
}

impl PressFeature {
    pub fn card(&self) -> Card {
        Card::new(self.outlet, self.visual).subtitle(self.quote)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub href: &'static str,
    pub visual: Visual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
}

/// Company value block on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueBlock {
    pub title: &'static str,
    pub body: &'static str,
    pub visual: Visual,
}

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

pub fn products_in(category_slug: &str) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|product| product.category == category_slug)
        .collect()
}

/// Distinct brands within a category, in catalog order
pub fn brands_in(category_slug: &str) -> Vec<&'static str> {
    let mut brands: Vec<&'static str> = Vec::new();
    for product in products_in(category_slug) {
        if !brands.contains(&product.brand) {
            brands.push(product.brand);
        }
    }
    brands
}

pub fn best_sellers() -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|product| product.best_seller).collect()
}

pub fn article_by_slug(slug: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|article| article.slug == slug)
}

/// Newest featured article, falling back to the newest overall
pub fn featured_article() -> Option<&'static Article> {
    ARTICLES
        .iter()
        .filter(|article| article.featured)
        .max_by_key(|article| article.published)
        .or_else(|| ARTICLES.iter().max_by_key(|article| article.published))
}

/// Distinct FAQ topics in first-seen order
pub fn faq_topics() -> Vec<&'static str> {
    let mut topics: Vec<&'static str> = Vec::new();
    for faq in FAQS.iter() {
        if !topics.contains(&faq.topic) {
            topics.push(faq.topic);
        }
    }
    topics
}

pub fn faqs_for(topic: &str) -> Vec<&'static Faq> {
    FAQS.iter().filter(|faq| faq.topic == topic).collect()
}

/// `34900` → `"$349.00"`
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

/// Whole-percent saving against the new-device price; 0 when not cheaper.
pub fn discount_percent(price_cents: u32, original_cents: u32) -> u32 {
    if original_cents == 0 || price_cents >= original_cents {
        return 0;
    }
    let saving = u64::from(original_cents - price_cents) * 100;
    (saving / u64::from(original_cents)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(34_900), "$349.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(129_999), "$1,299.99");
        assert_eq!(format_price(100_000_000), "$1,000,000.00");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(50_000, 100_000), 50);
        assert_eq!(discount_percent(66_900, 99_900), 33);
        assert_eq!(discount_percent(100, 100), 0);
        assert_eq!(discount_percent(100, 0), 0);
    }

    #[test]
    fn test_every_product_has_known_category() {
        for product in PRODUCTS.iter() {
            assert!(
                category_by_slug(product.category).is_some(),
                "{} has unknown category {}",
                product.name,
                product.category
            );
            assert!(product.price_cents <= product.original_price_cents);
        }
    }

    #[test]
    fn test_brands_in_category() {
        let brands = brands_in("smartphones");
        assert!(brands.contains(&"Apple"));
        assert!(brands.contains(&"Samsung"));
        let mut deduped = brands.clone();
        deduped.dedup();
        assert_eq!(brands, deduped);
    }

    #[test]
    fn test_brand_filter_over_category() {
        let phones: Vec<Product> = products_in("smartphones").into_iter().copied().collect();
        let mut filter = CategoryFilter::with_key(&phones, Product::brand);
        filter.set_category("Apple");
        assert!(filter.filtered().iter().all(|product| product.brand == "Apple"));
        filter.set_category("Nokia");
        assert!(filter.is_empty_result());
    }

    #[test]
    fn test_best_seller_row_fills_slider() {
        assert!(best_sellers().len() >= 8);
    }

    #[test]
    fn test_featured_article() {
        let article = featured_article().expect("journal has articles");
        assert!(article.featured);
        assert_eq!(article_by_slug(article.slug), Some(article));
    }

    #[test]
    fn test_faq_topics_cover_all_faqs() {
        let total: usize = faq_topics().iter().map(|topic| faqs_for(topic).len()).sum();
        assert_eq!(total, FAQS.len());
    }

    #[test]
    fn test_product_card_badge() {
        let product = &PRODUCTS[0];
        let card = product.card();
        assert_eq!(card.title, product.name);
        assert_eq!(card.badge.is_some(), product.discount_percent() > 0);
    }

    #[test]
    fn test_visual_background_style() {
        assert_eq!(
            Visual::ColorBlock("#0f172a").background_style(),
            "background-color: #0f172a;"
        );
        assert!(Visual::Image("/assets/a.jpg").background_style().contains("url('/assets/a.jpg')"));
    }

    #[test]
    fn test_visual_serializes_tagged() {
        let json = serde_json::to_string(&Visual::ColorBlock("#fff")).unwrap();
        assert_eq!(json, r##"{"kind":"color_block","value":"#fff"}"##);
    }
}
