use super::{
    Article, Category, Faq, Grade, PressFeature, Product, Slide, Testimonial, ValueBlock, Visual,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

pub static CATEGORIES: &[Category] = &[
    Category {
        slug: "smartphones",
        name: "Smartphones",
        tagline: "Flagship phones, expertly renewed",
        visual: Visual::Image("/assets/categories/smartphones.jpg"),
    },
    Category {
        slug: "laptops",
        name: "Laptops",
        tagline: "Work-ready machines for less",
        visual: Visual::Image("/assets/categories/laptops.jpg"),
    },
    Category {
        slug: "tablets",
        name: "Tablets",
        tagline: "Big screens, small prices",
        visual: Visual::ColorBlock("#e0f2fe"),
    },
    Category {
        slug: "smartwatches",
        name: "Smartwatches",
        tagline: "Track more, spend less",
        visual: Visual::ColorBlock("#fef3c7"),
    },
    Category {
        slug: "audio",
        name: "Audio",
        tagline: "Headphones and speakers, tested by ear",
        visual: Visual::Image("/assets/categories/audio.jpg"),
    },
    Category {
        slug: "consoles",
        name: "Consoles",
        tagline: "Play on, for less",
        visual: Visual::ColorBlock("#ede9fe"),
    },
];

pub static PRODUCTS: &[Product] = &[
    Product {
        id: 101,
        name: "iPhone 14 Pro 128GB",
        brand: "Apple",
        category: "smartphones",
        grade: Grade::Excellent,
        price_cents: 69_900,
        original_price_cents: 99_900,
        rating: 4.8,
        best_seller: true,
        visual: Visual::Image("/assets/products/iphone-14-pro.jpg"),
    },
    Product {
        id: 102,
        name: "iPhone 13 128GB",
        brand: "Apple",
        category: "smartphones",
        grade: Grade::VeryGood,
        price_cents: 43_900,
        original_price_cents: 69_900,
        rating: 4.7,
        best_seller: true,
        visual: Visual::Image("/assets/products/iphone-13.jpg"),
    },
    Product {
        id: 103,
        name: "Galaxy S23 256GB",
        brand: "Samsung",
        category: "smartphones",
        grade: Grade::Excellent,
        price_cents: 54_900,
        original_price_cents: 85_900,
        rating: 4.6,
        best_seller: true,
        visual: Visual::Image("/assets/products/galaxy-s23.jpg"),
    },
    Product {
        id: 104,
        name: "Galaxy A54 128GB",
        brand: "Samsung",
        category: "smartphones",
        grade: Grade::Good,
        price_cents: 21_900,
        original_price_cents: 44_900,
        rating: 4.3,
        best_seller: false,
        visual: Visual::ColorBlock("#dbeafe"),
    },
    Product {
        id: 105,
        name: "Pixel 7 128GB",
        brand: "Google",
        category: "smartphones",
        grade: Grade::VeryGood,
        price_cents: 29_900,
        original_price_cents: 59_900,
        rating: 4.5,
        best_seller: true,
        visual: Visual::Image("/assets/products/pixel-7.jpg"),
    },
    Product {
        id: 201,
        name: "MacBook Air M2 13\"",
        brand: "Apple",
        category: "laptops",
        grade: Grade::Excellent,
        price_cents: 84_900,
        original_price_cents: 119_900,
        rating: 4.9,
        best_seller: true,
        visual: Visual::Image("/assets/products/macbook-air-m2.jpg"),
    },
    Product {
        id: 202,
        name: "MacBook Pro 14\" M1 Pro",
        brand: "Apple",
        category: "laptops",
        grade: Grade::VeryGood,
        price_cents: 129_900,
        original_price_cents: 199_900,
        rating: 4.8,
        best_seller: false,
        visual: Visual::Image("/assets/products/macbook-pro-14.jpg"),
    },
    Product {
        id: 203,
        name: "XPS 13 Plus",
        brand: "Dell",
        category: "laptops",
        grade: Grade::Good,
        price_cents: 74_900,
        original_price_cents: 129_900,
        rating: 4.4,
        best_seller: true,
        visual: Visual::ColorBlock("#f1f5f9"),
    },
    Product {
        id: 204,
        name: "ThinkPad X1 Carbon Gen 10",
        brand: "Lenovo",
        category: "laptops",
        grade: Grade::VeryGood,
        price_cents: 89_900,
        original_price_cents: 164_900,
        rating: 4.6,
        best_seller: false,
        visual: Visual::Image("/assets/products/thinkpad-x1.jpg"),
    },
    Product {
        id: 301,
        name: "iPad Air 5th Gen 64GB",
        brand: "Apple",
        category: "tablets",
        grade: Grade::Excellent,
        price_cents: 42_900,
        original_price_cents: 59_900,
        rating: 4.8,
        best_seller: true,
        visual: Visual::Image("/assets/products/ipad-air-5.jpg"),
    },
    Product {
        id: 302,
        name: "Galaxy Tab S8 128GB",
        brand: "Samsung",
        category: "tablets",
        grade: Grade::VeryGood,
        price_cents: 39_900,
        original_price_cents: 69_900,
        rating: 4.5,
        best_seller: false,
        visual: Visual::ColorBlock("#e0e7ff"),
    },
    Product {
        id: 401,
        name: "Apple Watch Series 8 45mm",
        brand: "Apple",
        category: "smartwatches",
        grade: Grade::Excellent,
        price_cents: 24_900,
        original_price_cents: 42_900,
        rating: 4.7,
        best_seller: true,
        visual: Visual::Image("/assets/products/watch-series-8.jpg"),
    },
    Product {
        id: 402,
        name: "Galaxy Watch5 44mm",
        brand: "Samsung",
        category: "smartwatches",
        grade: Grade::Good,
        price_cents: 13_900,
        original_price_cents: 27_900,
        rating: 4.2,
        best_seller: false,
        visual: Visual::ColorBlock("#fce7f3"),
    },
    Product {
        id: 501,
        name: "AirPods Pro (2nd gen)",
        brand: "Apple",
        category: "audio",
        grade: Grade::Excellent,
        price_cents: 16_900,
        original_price_cents: 24_900,
        rating: 4.6,
        best_seller: true,
        visual: Visual::Image("/assets/products/airpods-pro-2.jpg"),
    },
    Product {
        id: 502,
        name: "WH-1000XM5",
        brand: "Sony",
        category: "audio",
        grade: Grade::VeryGood,
        price_cents: 24_900,
        original_price_cents: 39_900,
        rating: 4.7,
        best_seller: false,
        visual: Visual::Image("/assets/products/sony-xm5.jpg"),
    },
    Product {
        id: 601,
        name: "PlayStation 5 Disc Edition",
        brand: "Sony",
        category: "consoles",
        grade: Grade::VeryGood,
        price_cents: 38_900,
        original_price_cents: 49_900,
        rating: 4.8,
        best_seller: true,
        visual: Visual::Image("/assets/products/ps5.jpg"),
    },
    Product {
        id: 602,
        name: "Nintendo Switch OLED",
        brand: "Nintendo",
        category: "consoles",
        grade: Grade::Excellent,
        price_cents: 27_900,
        original_price_cents: 34_900,
        rating: 4.7,
        best_seller: false,
        visual: Visual::ColorBlock("#fee2e2"),
    },
];

pub static HERO_SLIDES: &[Slide] = &[
    Slide {
        title: "Like new. Not like new prices.",
        subtitle: "Certified refurbished tech with a 12-month warranty, up to 70% off.",
        cta: "Shop smartphones",
        href: "/category/smartphones",
        visual: Visual::Image("/assets/hero/phones.jpg"),
    },
    Slide {
        title: "Laptops that mean business",
        subtitle: "Every machine is tested across 70+ checkpoints before it ships.",
        cta: "Browse laptops",
        href: "/category/laptops",
        visual: Visual::Image("/assets/hero/laptops.jpg"),
    },
    Slide {
        title: "Good for you. Better for the planet.",
        subtitle: "A refurbished phone saves around 50 kg of CO2 compared to buying new.",
        cta: "Our mission",
        href: "/about",
        visual: Visual::ColorBlock("#064e3b"),
    },
];

pub static PRESS_FEATURES: &[PressFeature] = &[
    PressFeature {
        outlet: "TechDaily",
        quote: "ISmart makes refurbished feel premium.",
        visual: Visual::ColorBlock("#111827"),
    },
    PressFeature {
        outlet: "The Green Review",
        quote: "A genuinely circular take on consumer electronics.",
        visual: Visual::ColorBlock("#14532d"),
    },
    PressFeature {
        outlet: "Gadget Weekly",
        quote: "Grades you can trust and prices that make sense.",
        visual: Visual::Image("/assets/press/gadget-weekly.png"),
    },
    PressFeature {
        outlet: "Money Matters",
        quote: "The smartest way to upgrade this year.",
        visual: Visual::ColorBlock("#1e3a8a"),
    },
    PressFeature {
        outlet: "Urban Living",
        quote: "Customer service that actually picks up the phone.",
        visual: Visual::Image("/assets/press/urban-living.png"),
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "My iPhone arrived looking brand new, with a battery at 100%. I'm never buying new again.",
        author: "Priya S.",
        location: "Austin, TX",
    },
    Testimonial {
        quote: "The trade-in was painless and the MacBook I got in return is flawless.",
        author: "Marcus L.",
        location: "Denver, CO",
    },
    Testimonial {
        quote: "Support sorted out a charger issue within a day. Great experience all round.",
        author: "Hannah K.",
        location: "Portland, OR",
    },
];

pub static VALUES: &[ValueBlock] = &[
    ValueBlock {
        title: "Quality first",
        body: "Every device passes a 70-point inspection by certified technicians.",
        visual: Visual::ColorBlock("#eef2ff"),
    },
    ValueBlock {
        title: "Honest grading",
        body: "Excellent, Very good or Good: what you see is exactly what you get.",
        visual: Visual::ColorBlock("#ecfdf5"),
    },
    ValueBlock {
        title: "Circular by default",
        body: "We give devices a second life and recycle what cannot be repaired.",
        visual: Visual::Image("/assets/about/circular.jpg"),
    },
];

pub static FAQS: &[Faq] = &[
    Faq {
        topic: "Orders",
        question: "How long does delivery take?",
        answer: "Orders placed before 2pm ship the same day and usually arrive within 2-4 business days.",
    },
    Faq {
        topic: "Orders",
        question: "Can I change or cancel my order?",
        answer: "You can change or cancel an order until it ships. Contact us with your order number.",
    },
    Faq {
        topic: "Returns",
        question: "What is your return policy?",
        answer: "You have 30 days to return any device for a full refund, no questions asked.",
    },
    Faq {
        topic: "Returns",
        question: "How do I start a return?",
        answer: "Use the contact form with the subject 'Returns and refunds' and we'll email a prepaid label.",
    },
    Faq {
        topic: "Warranty",
        question: "What does the 12-month warranty cover?",
        answer: "Any hardware fault not caused by accidental damage, including battery health below 80%.",
    },
    Faq {
        topic: "Devices",
        question: "What do the cosmetic grades mean?",
        answer: "Excellent shows no visible wear, Very good may have light micro-scratches, Good may have visible marks.",
    },
    Faq {
        topic: "Devices",
        question: "Are devices unlocked?",
        answer: "All phones are carrier-unlocked and work with any major network.",
    },
];

pub static JOURNAL_CATEGORIES: &[&str] = &["Guides", "Sustainability", "News", "Reviews"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            slug: "refurbished-vs-used",
            title: "Refurbished vs. used: what's the difference?",
            category: "Guides",
            excerpt: "Not all second-hand tech is equal. Here's what our 70-point inspection actually checks.",
            published: date(2024, 3, 12),
            read_minutes: 6,
            featured: true,
            visual: Visual::Image("/assets/journal/refurbished-vs-used.jpg"),
        },
        Article {
            slug: "e-waste-by-the-numbers",
            title: "E-waste by the numbers",
            category: "Sustainability",
            excerpt: "The world throws away 50 million tonnes of electronics a year. Here's how refurbishing helps.",
            published: date(2024, 2, 27),
            read_minutes: 4,
            featured: false,
            visual: Visual::ColorBlock("#065f46"),
        },
        Article {
            slug: "battery-health-explained",
            title: "Battery health, explained",
            category: "Guides",
            excerpt: "What battery percentage means for a refurbished phone, and why we replace anything under 85%.",
            published: date(2024, 2, 8),
            read_minutes: 5,
            featured: false,
            visual: Visual::Image("/assets/journal/battery-health.jpg"),
        },
        Article {
            slug: "ismart-opens-austin-lab",
            title: "ISmart opens its new Austin refurbishment lab",
            category: "News",
            excerpt: "Our biggest facility yet doubles capacity and brings 80 new technician jobs to Texas.",
            published: date(2024, 1, 22),
            read_minutes: 3,
            featured: false,
            visual: Visual::ColorBlock("#1e40af"),
        },
        Article {
            slug: "macbook-air-m2-review",
            title: "Six months with a refurbished MacBook Air M2",
            category: "Reviews",
            excerpt: "Our editor put an Excellent-grade M2 through daily work. Here's how it held up.",
            published: date(2023, 12, 14),
            read_minutes: 8,
            featured: true,
            visual: Visual::Image("/assets/journal/macbook-air-review.jpg"),
        },
        Article {
            slug: "trade-in-guide",
            title: "How to get the most for your trade-in",
            category: "Guides",
            excerpt: "Back up, sign out, and clean up: five steps to a higher trade-in quote.",
            published: date(2023, 11, 30),
            read_minutes: 4,
            featured: false,
            visual: Visual::ColorBlock("#7c2d12"),
        },
    ]
});
